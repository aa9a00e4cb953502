// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ErrorKind {
    /// The operating system refused to create a new process
    #[error("fork error: {0}")]
    Fork(nix::Error),
    /// The target could not replace the child's image
    #[error("execv error: {0}")]
    Exec(nix::Error),
    /// A required environment variable is absent
    #[error("{0} is not set")]
    MissingVar(&'static str),
    /// The value cannot be passed as a C string
    #[error("{0} contains an interior nul byte")]
    InteriorNul(&'static str),
}

#[derive(Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    fn from_kind(kind: ErrorKind) -> Self {
        Self(kind)
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }
}

impl<E> From<E> for Error
where
    E: Into<ErrorKind>,
{
    fn from(err: E) -> Self {
        Self::from_kind(err.into())
    }
}
