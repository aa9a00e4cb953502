// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::process;

use clap::{App, Arg};
use log::info;

use forkrun::env::{FORKRUN_ARG, FORKRUN_CMD};
use forkrun::fork::EXIT_FAILURE;
use forkrun::logger::{init_logger, FORKRUN_LOG};
use forkrun::Launcher;

const VERBOSE: &str = "verbose";

trait SetupClapApp {
    fn setup_clap_app(self) -> Self;
}

impl<'a, 'b> SetupClapApp for App<'a, 'b> {
    fn setup_clap_app(self) -> Self {
        self.version(env!("CARGO_PKG_VERSION"))
            .author(env!("CARGO_PKG_AUTHORS"))
            .about(env!("CARGO_PKG_DESCRIPTION"))
    }
}

fn environment_help() -> String {
    format!(
        "ENVIRONMENT:\n    {:<12} path of the executable to launch\n    {:<12} the single argument passed to it\n    {:<12} log filter (default: warn)",
        FORKRUN_CMD, FORKRUN_ARG, FORKRUN_LOG
    )
}

fn main() {
    let help = environment_help();
    let args = App::new(env!("CARGO_PKG_NAME"))
        .setup_clap_app()
        .after_help(help.as_str())
        .arg(
            Arg::with_name(VERBOSE)
                .short("v")
                .long(VERBOSE)
                .help("log debug output to stderr"),
        )
        .get_matches();

    init_logger(args.is_present(VERBOSE));

    // nothing has started a thread at this point, so forking is sound
    match unsafe { Launcher.launch() } {
        Ok(child) => info!("launched child: {}", child),
        Err(err) => {
            eprintln!("{}: {}", env!("CARGO_PKG_NAME"), err);
            process::exit(EXIT_FAILURE);
        }
    }
}
