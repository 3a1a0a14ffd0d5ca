/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use err_rs::{ErrorLevel, ErrorLevelProvider};
use std::fmt;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseVersionError {
    WrongComponentCount(usize),
    InvalidComponent(String),
}

impl ErrorLevelProvider for ParseVersionError {
    fn error_level(&self) -> ErrorLevel {
        match self {
            Self::WrongComponentCount(_) | Self::InvalidComponent(_) => ErrorLevel::Info,
        }
    }
}

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongComponentCount(count) => {
                write!(f, "expected major.minor.micro, found {count} components")
            }
            Self::InvalidComponent(component) => {
                write!(f, "version component '{component}' is not a number in 0..=255")
            }
        }
    }
}

impl std::error::Error for ParseVersionError {} // it implements Debug and Display
