// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use vergen::EmitBuilder;

/// Stamp the three gwk binaries with the commit they were built from.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    EmitBuilder::builder()
        .git_sha(true)
        .git_commit_date()
        .git_describe(true, true, None)
        .emit()?;
    Ok(())
}
