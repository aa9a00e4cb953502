// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use log::debug;
use nix::unistd::Pid;

use crate::env::LaunchSpec;
use crate::fork::{exit_child, fork_process, Forked, EXIT_FAILURE};
use crate::Error;

/// Launch a program
///
/// Rules:
/// - forks exactly once per launch
/// - the child reads FORKRUN_CMD and FORKRUN_ARG, then execs
/// - the parent never waits on, or reaps, the child
#[derive(Debug, Default)]
pub struct Launcher;

impl Launcher {
    /// Forks and returns the child's pid to the parent immediately.
    ///
    /// Only the parent ever returns from this; the child either becomes the target program
    /// or exits with a failure status after reporting why on stderr.
    ///
    /// # Safety
    ///
    /// Must be called while the process is single threaded, see `fork_process`.
    pub unsafe fn launch(&self) -> Result<Pid, Error> {
        match fork_process()? {
            Forked::Parent(child) => {
                debug!("forked child: {}", child);
                Ok(child)
            }
            Forked::Child => run_child(),
        }
    }
}

fn run_child() -> ! {
    let err = match LaunchSpec::from_env() {
        Ok(spec) => {
            debug!("exec {:?} with {:?}", spec.command(), spec.argument());
            spec.exec()
        }
        Err(err) => err,
    };

    eprintln!("{}: {}", env!("CARGO_PKG_NAME"), err);
    exit_child(EXIT_FAILURE)
}
