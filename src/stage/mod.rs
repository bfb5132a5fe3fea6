// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Stager: choose working-tree changes and stage them.

pub mod selection;
mod stager;

pub use selection::SelectionMode;
pub use stager::{StageOutcome, Stager};
