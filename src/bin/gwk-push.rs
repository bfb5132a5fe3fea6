// Author: Eshan Roy
// SPDX-License-Identifier: MIT

use clap::Parser;
use gwk::cli::{self, PushCli};

fn main() {
    let args = PushCli::parse();
    cli::setup_logging(args.common.debug);

    std::process::exit(cli::exit_code(cli::run_push(&args.common)));
}
