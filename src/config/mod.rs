// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for gwk.
//!
//! Configuration is optional and read-only: every field has a default, and a
//! gwk.toml file only overrides what it names.

mod loader;
mod schema;

pub use loader::{find_config_file, load_config, load_config_from, parse_config};
pub use schema::*;
