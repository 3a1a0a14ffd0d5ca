/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use err_rs::{ErrorLevel, ErrorLevelProvider};
use std::string::FromUtf8Error;
use std::{fmt, io};

#[derive(Debug)]
pub enum ClientError {
    IoError(io::Error),
    InvalidUtf8(FromUtf8Error),
    CommandFailed {
        args: Vec<String>,
        code: Option<i32>,
    },
    HelpTextReturned,
    NoPlayersDetected,
    InvalidPosition(String),
    NothingPlaying,
}

impl From<io::Error> for ClientError {
    fn from(err: io::Error) -> Self {
        Self::IoError(err)
    }
}

impl From<FromUtf8Error> for ClientError {
    fn from(err: FromUtf8Error) -> Self {
        Self::InvalidUtf8(err)
    }
}

impl ErrorLevelProvider for ClientError {
    fn error_level(&self) -> ErrorLevel {
        match self {
            Self::IoError(_) => ErrorLevel::Critical,
            Self::InvalidUtf8(_) | Self::HelpTextReturned | Self::InvalidPosition(_) => {
                ErrorLevel::Warning
            }
            Self::CommandFailed { .. } | Self::NoPlayersDetected | Self::NothingPlaying => {
                ErrorLevel::Info
            }
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(io_err) => write!(f, "io:err {io_err:?}"),
            Self::InvalidUtf8(err) => write!(f, "invalid utf-8 output: {err}"),
            Self::CommandFailed { args, code } => match code {
                Some(code) => write!(f, "playerctl {} exited with {code}", args.join(" ")),
                None => write!(f, "playerctl {} was terminated", args.join(" ")),
            },
            Self::HelpTextReturned => {
                write!(f, "command returned help text instead of expected output")
            }
            Self::NoPlayersDetected => write!(f, "no media players detected"),
            Self::InvalidPosition(output) => write!(f, "unable to parse position '{output}'"),
            Self::NothingPlaying => write!(f, "play a song to see its metadata"),
        }
    }
}

impl std::error::Error for ClientError {} // it implements Debug and Display
