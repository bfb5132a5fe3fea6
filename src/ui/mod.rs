// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Terminal interaction: prompts, output styling, and the push spinner.

pub mod output;
mod prompt;
mod spinner;

pub use prompt::{DialoguerPrompter, Prompter, Validator};
pub use spinner::{IndicatifSpinner, NoSpinner, Spinner};

#[cfg(test)]
pub(crate) use prompt::scripted;
