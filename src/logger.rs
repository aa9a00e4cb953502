// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::io::Write;
use std::process;

use env_logger::{Builder, Env};

/// Filter directives, in env_logger syntax
pub const FORKRUN_LOG: &str = "FORKRUN_LOG";

/// Filter used when `FORKRUN_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initialize the stderr logger, records are tagged with the pid since parent and child both log
pub fn init_logger(verbose: bool) {
    let env = Env::default().filter_or(FORKRUN_LOG, default_filter(verbose));

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{:5} {}] {}",
                record.level(),
                process::id(),
                record.args()
            )
        })
        .init();
}
