// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Fork, then exec the program named by `FORKRUN_CMD` with the single argument in `FORKRUN_ARG`

pub mod env;
mod error;
pub mod fork;
pub mod launcher;
pub mod logger;

pub use error::{Error, ErrorKind};
pub use launcher::Launcher;
