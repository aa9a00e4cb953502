// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use nix::unistd::{fork, ForkResult, Pid};

use crate::error::{Error, ErrorKind};

pub const EXIT_FAILURE: i32 = libc::EXIT_FAILURE;

/// Which side of the fork the caller is now running on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forked {
    Parent(Pid),
    Child,
}

/// Duplicates the current process.
///
/// # Safety
///
/// The process must be single threaded, the child may allocate before it execs.
pub unsafe fn fork_process() -> Result<Forked, Error> {
    match fork() {
        Ok(ForkResult::Parent { child }) => Ok(Forked::Parent(child)),
        Ok(ForkResult::Child) => Ok(Forked::Child),
        Err(errno) => Err(ErrorKind::Fork(errno).into()),
    }
}

/// Terminates the child without running atexit handlers or flushing stdio buffers copied from the parent
pub fn exit_child(code: i32) -> ! {
    // _exit is async-signal-safe and only ends this process
    unsafe { libc::_exit(code) }
}
