/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use crate::status::PlaybackStatus;
use log::{debug, info};

/// Decides which player the transport commands go to.
///
/// A remembered player keeps priority as long as it is playing or paused.
/// Otherwise the first playing player wins, then the first paused one, then
/// whatever comes first in the listing.
#[derive(Debug, Default, Clone)]
pub struct PlayerSelector {
    last_active: Option<String>,
}

impl PlayerSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_active(&self) -> Option<&str> {
        self.last_active.as_deref()
    }

    pub fn set_active(&mut self, player: impl Into<String>) {
        let player = player.into();
        debug!("active player set to '{player}'");
        self.last_active = Some(player);
    }

    /// `players` is in listing order. Returns `None` only for an empty listing.
    pub fn select(&mut self, players: &[(String, PlaybackStatus)]) -> Option<String> {
        if let Some(last) = &self.last_active {
            let still_active = players.iter().any(|(name, status)| {
                name == last
                    && matches!(status, PlaybackStatus::Playing | PlaybackStatus::Paused)
            });
            if still_active {
                return Some(last.clone());
            }
        }

        let first_with = |wanted: PlaybackStatus| {
            players
                .iter()
                .find(|(_, status)| *status == wanted)
                .map(|(name, _)| name)
        };

        let selected = first_with(PlaybackStatus::Playing)
            .or_else(|| first_with(PlaybackStatus::Paused))
            .or_else(|| players.first().map(|(name, _)| name))?
            .clone();

        if self.last_active.as_deref() != Some(selected.as_str()) {
            info!("switching active player to '{selected}'");
        }
        self.last_active = Some(selected.clone());

        Some(selected)
    }
}
