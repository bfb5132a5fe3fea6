// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use clap::Parser;
use gwk::cli::{self, StageCli};

fn main() {
    let args = StageCli::parse();
    cli::setup_logging(args.common.debug);

    std::process::exit(cli::exit_code(cli::run_stage(&args.common)));
}
