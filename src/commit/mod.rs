// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit composer: conventional-commit drafting, formatting, and creation.

mod composer;
mod draft;
pub mod lint;
mod preview;
pub mod scope;
mod validate;

pub use composer::{CommitComposer, CommitOutcome};
pub use draft::{compose_message, CommitDraft};
pub use preview::CommitPreview;
pub use scope::{infer_scope_from_branch, infer_type_from_branch, COMMON_SCOPES};
pub use validate::{validate_breaking, validate_subject};
