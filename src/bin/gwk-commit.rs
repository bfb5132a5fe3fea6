// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use clap::Parser;
use gwk::cli::{self, CommitCli};

fn main() {
    let args = CommitCli::parse();
    cli::setup_logging(args.common.debug);

    std::process::exit(cli::exit_code(cli::run_commit(&args.common)));
}
