/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

pub use crate::{
    command::{MetadataField, PlayerCommand},
    err::ClientError,
    runner::{CommandOutput, CommandRunner, ProcessRunner},
    selection::PlayerSelector,
    status::{Metadata, PlaybackStatus},
    PlayerctlClient,
};
