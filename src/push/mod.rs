// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Pusher: push the current branch with guided options.

pub mod output;
mod plan;
mod pusher;

pub use output::{classify_line, PushLine};
pub use plan::{default_remote_index, outstanding, Outstanding, PushPlan};
pub use pusher::{PushOutcome, Pusher};
