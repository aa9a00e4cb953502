// Copyright 2019-2020 Benjamin Fry <benjaminfry@me.com>
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use std::ffi::{CStr, CString, OsString};
use std::os::unix::ffi::OsStringExt;

use nix::unistd::execv;

use crate::error::{Error, ErrorKind};

/// Path of the executable to launch
pub const FORKRUN_CMD: &str = "FORKRUN_CMD";
/// The single argument handed to that executable
pub const FORKRUN_ARG: &str = "FORKRUN_ARG";

/// The program and its one argument, as read from the environment
///
/// Both values are kept as owned C strings of whatever length the environment held.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchSpec {
    command: CString,
    argument: CString,
}

impl LaunchSpec {
    /// Reads `FORKRUN_CMD` and `FORKRUN_ARG` from the process environment
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Builds the spec from an arbitrary lookup, the command key is checked first
    pub fn from_lookup<F>(mut lookup: F) -> Result<Self, Error>
    where
        F: FnMut(&str) -> Option<OsString>,
    {
        let command = required(&mut lookup, FORKRUN_CMD)?;
        let argument = required(&mut lookup, FORKRUN_ARG)?;

        Ok(Self { command, argument })
    }

    /// Path handed to `execv`, also used as the program name
    pub fn command(&self) -> &CStr {
        &self.command
    }

    /// The one argument after the program name
    pub fn argument(&self) -> &CStr {
        &self.argument
    }

    /// The argument vector, program name first; the null terminator is added by `execv`
    pub fn argv(&self) -> [&CStr; 2] {
        [self.command.as_c_str(), self.argument.as_c_str()]
    }

    /// Replaces the current process image with the command.
    ///
    /// This only ever returns if the exec failed, so the result is the error itself.
    pub fn exec(&self) -> Error {
        match execv(self.command(), &self.argv()) {
            Ok(never) => match never {},
            Err(errno) => ErrorKind::Exec(errno).into(),
        }
    }
}

fn required<F>(lookup: &mut F, key: &'static str) -> Result<CString, Error>
where
    F: FnMut(&str) -> Option<OsString>,
{
    let value = lookup(key).ok_or(ErrorKind::MissingVar(key))?;
    CString::new(value.into_vec()).map_err(|_| ErrorKind::InteriorNul(key).into())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use nix::errno::Errno;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl FnMut(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(*v)))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_reads_both_values() {
        let spec = LaunchSpec::from_lookup(lookup_from(&[
            (FORKRUN_CMD, "/bin/echo"),
            (FORKRUN_ARG, "hello"),
        ]))
        .unwrap();

        assert_eq!(spec.command().to_bytes(), b"/bin/echo");
        assert_eq!(spec.argument().to_bytes(), b"hello");
        assert_eq!(spec.argv(), [spec.command(), spec.argument()]);
    }

    #[test]
    fn test_missing_command() {
        let err = LaunchSpec::from_lookup(lookup_from(&[(FORKRUN_ARG, "hello")])).unwrap_err();
        match err.kind() {
            ErrorKind::MissingVar(key) => assert_eq!(*key, FORKRUN_CMD),
            kind => panic!("unexpected kind: {:?}", kind),
        }
    }

    #[test]
    fn test_missing_argument() {
        let err = LaunchSpec::from_lookup(lookup_from(&[(FORKRUN_CMD, "/bin/echo")])).unwrap_err();
        match err.kind() {
            ErrorKind::MissingVar(key) => assert_eq!(*key, FORKRUN_ARG),
            kind => panic!("unexpected kind: {:?}", kind),
        }
    }

    #[test]
    fn test_command_is_checked_first() {
        let mut asked = Vec::new();
        let err = LaunchSpec::from_lookup(|key| {
            asked.push(key.to_string());
            None
        })
        .unwrap_err();

        assert_eq!(asked, vec![FORKRUN_CMD.to_string()]);
        assert_eq!(err.to_string(), "FORKRUN_CMD is not set");
    }

    #[test]
    fn test_empty_argument_is_kept() {
        let spec =
            LaunchSpec::from_lookup(lookup_from(&[(FORKRUN_CMD, "/bin/true"), (FORKRUN_ARG, "")]))
                .unwrap();
        assert!(spec.argument().to_bytes().is_empty());
    }

    #[test]
    fn test_long_values_are_not_truncated() {
        let long = "a".repeat(4096);
        let spec = LaunchSpec::from_lookup(lookup_from(&[
            (FORKRUN_CMD, "/bin/echo"),
            (FORKRUN_ARG, long.as_str()),
        ]))
        .unwrap();
        assert_eq!(spec.argument().to_bytes().len(), 4096);
    }

    #[test]
    fn test_non_utf8_bytes_pass_through() {
        let spec = LaunchSpec::from_lookup(|key| match key {
            FORKRUN_CMD => Some(OsString::from("/bin/echo")),
            _ => Some(OsString::from_vec(vec![0xff, 0xfe])),
        })
        .unwrap();
        assert_eq!(spec.argument().to_bytes(), b"\xff\xfe");
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        let err = LaunchSpec::from_lookup(lookup_from(&[
            (FORKRUN_CMD, "/bin/echo"),
            (FORKRUN_ARG, "a\0b"),
        ]))
        .unwrap_err();
        match err.kind() {
            ErrorKind::InteriorNul(key) => assert_eq!(*key, FORKRUN_ARG),
            kind => panic!("unexpected kind: {:?}", kind),
        }
    }

    #[test]
    fn test_exec_missing_target() {
        let spec = LaunchSpec::from_lookup(lookup_from(&[
            (FORKRUN_CMD, "/nonexistent/forkrun-target"),
            (FORKRUN_ARG, "x"),
        ]))
        .unwrap();

        match spec.exec().kind() {
            ErrorKind::Exec(errno) => assert_eq!(*errno, Errno::ENOENT),
            kind => panic!("unexpected kind: {:?}", kind),
        }
    }

    #[test]
    fn test_exec_not_executable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        fs::write(&path, b"not a program\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let spec = LaunchSpec::from_lookup(lookup_from(&[
            (FORKRUN_CMD, path.to_str().unwrap()),
            (FORKRUN_ARG, "x"),
        ]))
        .unwrap();

        match spec.exec().kind() {
            ErrorKind::Exec(errno) => assert_eq!(*errno, Errno::EACCES),
            kind => panic!("unexpected kind: {:?}", kind),
        }
    }
}
