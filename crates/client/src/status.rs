/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use std::fmt::{Display, Formatter};

/// Playback state reported by `playerctl status`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
    Unknown,
}

impl PlaybackStatus {
    /// Anything other than the three MPRIS states is `Unknown`.
    pub fn parse(output: &str) -> Self {
        match output.trim() {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            "Stopped" => Self::Stopped,
            _ => Self::Unknown,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Stopped => "Stopped",
            Self::Unknown => "Unknown",
        }
    }
}

impl Display for PlaybackStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Title, artist and album of the track a player is on.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Metadata {
    pub artist: String,
    pub title: String,
    pub album: String,
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.artist, self.title, self.album)
    }
}
