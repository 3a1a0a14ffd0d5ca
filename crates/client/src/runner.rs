/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use log::trace;
use std::ffi::OsString;
use std::io;
use std::process::Command;

/// What a finished `playerctl` invocation left behind.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CommandOutput {
    pub success: bool,
    /// Exit code, `None` if the process was killed by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
}

impl CommandOutput {
    pub fn succeeded(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
        }
    }

    pub fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
            stdout: Vec::new(),
        }
    }
}

/// Runs `playerctl` with the given arguments.
pub trait CommandRunner {
    fn run(&self, args: &[String]) -> io::Result<CommandOutput>;
}

/// Spawns the `playerctl` executable as a child process.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: OsString,
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessRunner {
    /// Looks `playerctl` up in `PATH`.
    pub fn new() -> Self {
        Self::with_program("playerctl")
    }

    /// Uses a specific executable, for example a bundled sidecar binary.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, args: &[String]) -> io::Result<CommandOutput> {
        trace!("spawning {:?} {}", self.program, args.join(" "));
        let output = Command::new(&self.program).args(args).output()?;
        Ok(CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
        })
    }
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, args: &[String]) -> io::Result<CommandOutput> {
        (**self).run(args)
    }
}
