/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use std::fmt::{Display, Formatter};

const HELP_TEXT_MARKERS: [&str; 3] = ["Usage:", "Help Options:", "Available Commands:"];

/// `playerctl` prints its usage on stdout when it does not understand a command.
pub fn looks_like_help_text(output: &str) -> bool {
    HELP_TEXT_MARKERS
        .iter()
        .any(|marker| output.contains(marker))
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MetadataField {
    Artist,
    Title,
    Album,
}

impl MetadataField {
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Artist => "artist",
            Self::Title => "title",
            Self::Album => "album",
        }
    }
}

impl Display for MetadataField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A command aimed at one named player.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Status,
    Metadata(MetadataField),
    Position,
    /// Absolute position in seconds.
    SetPosition(f64),
    PlayPause,
    Next,
    Previous,
}

impl PlayerCommand {
    /// Arguments for `playerctl -p <player> ...`.
    pub fn args(&self, player: &str) -> Vec<String> {
        let mut args = vec!["-p".to_string(), player.to_string()];
        match self {
            Self::Status => args.push("status".to_string()),
            Self::Metadata(field) => {
                args.push("metadata".to_string());
                args.push(field.key().to_string());
            }
            Self::Position => args.push("position".to_string()),
            Self::SetPosition(seconds) => {
                args.push("position".to_string());
                args.push(seconds.to_string());
            }
            Self::PlayPause => args.push("play-pause".to_string()),
            Self::Next => args.push("next".to_string()),
            Self::Previous => args.push("previous".to_string()),
        }
        args
    }
}

pub fn list_players_args() -> Vec<String> {
    vec!["-l".to_string()]
}

pub fn version_args() -> Vec<String> {
    vec!["--version".to_string()]
}
