/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use crate::command::{list_players_args, looks_like_help_text, version_args};
use crate::command::{MetadataField, PlayerCommand};
use crate::err::ClientError;
use crate::runner::{CommandOutput, CommandRunner, ProcessRunner};
use crate::selection::PlayerSelector;
use crate::status::{Metadata, PlaybackStatus};
use log::{debug, trace, warn};
use playerctl_version::{Version, VERSION, VERSION_STRING};

/// Status output at or above this length is not a status.
const MAX_STATUS_LEN: usize = 50;
/// Listed names longer than this are not player names.
const MAX_PLAYER_NAME_LEN: usize = 100;

/// Controls MPRIS players through a [`CommandRunner`].
#[derive(Debug)]
pub struct PlayerctlClient<R: CommandRunner> {
    runner: R,
    selector: PlayerSelector,
}

impl Default for PlayerctlClient<ProcessRunner> {
    fn default() -> Self {
        Self::new(ProcessRunner::new())
    }
}

impl<R: CommandRunner> PlayerctlClient<R> {
    pub fn new(runner: R) -> Self {
        debug!("playerctl client {VERSION_STRING}");
        Self {
            runner,
            selector: PlayerSelector::new(),
        }
    }

    pub const fn library_version(&self) -> Version {
        VERSION
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn selector(&self) -> &PlayerSelector {
        &self.selector
    }

    /// Runs a command and returns its trimmed stdout.
    fn execute(&self, args: &[String]) -> Result<String, ClientError> {
        trace!("playerctl {}", args.join(" "));
        let output = self.runner.run(args)?;
        if !output.success {
            return Err(ClientError::CommandFailed {
                args: args.to_vec(),
                code: output.code,
            });
        }
        Self::sanitize(args, output)
    }

    /// Like `execute`, but a non-zero exit still yields whatever was printed.
    /// `metadata <key>` exits with an error when the track lacks that key.
    fn execute_lenient(&self, args: &[String]) -> Result<String, ClientError> {
        trace!("playerctl {}", args.join(" "));
        let output = self.runner.run(args)?;
        if !output.success {
            debug!("playerctl {} exited with {:?}", args.join(" "), output.code);
        }
        Self::sanitize(args, output)
    }

    fn sanitize(args: &[String], output: CommandOutput) -> Result<String, ClientError> {
        let stdout = String::from_utf8(output.stdout)?;
        if looks_like_help_text(&stdout) {
            warn!("playerctl {} printed its usage", args.join(" "));
            return Err(ClientError::HelpTextReturned);
        }

        Ok(stdout.trim().to_string())
    }

    fn execute_on(&self, player: &str, command: PlayerCommand) -> Result<String, ClientError> {
        self.execute(&command.args(player))
    }

    /// `true` if the `playerctl` executable can be started and exits cleanly.
    pub fn exists(&self) -> bool {
        match self.runner.run(&version_args()) {
            Ok(output) => output.success,
            Err(err) => {
                debug!("playerctl is not available: {err}");
                false
            }
        }
    }

    pub fn list_players(&self) -> Result<Vec<String>, ClientError> {
        let output = self.execute(&list_players_args())?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Never fails: anything that is not a plausible status becomes `Unknown`.
    pub fn player_status(&self, player: &str) -> PlaybackStatus {
        match self.execute_on(player, PlayerCommand::Status) {
            Ok(output) if output.len() < MAX_STATUS_LEN => PlaybackStatus::parse(&output),
            Ok(output) => {
                warn!("discarding status output of {} characters", output.len());
                PlaybackStatus::Unknown
            }
            Err(err) => {
                debug!("status of '{player}' unavailable: {err}");
                PlaybackStatus::Unknown
            }
        }
    }

    /// Listed players that answer a status request sensibly.
    pub fn available_players(&self) -> Result<Vec<String>, ClientError> {
        let mut valid_players = Vec::new();
        for player in self.list_players()? {
            if player.len() > MAX_PLAYER_NAME_LEN
                || player.contains("Usage:")
                || player.contains("COMMAND")
            {
                warn!("skipping suspicious player name '{player}'");
                continue;
            }

            match self.execute_lenient(&PlayerCommand::Status.args(&player)) {
                Ok(status) if status.len() < MAX_STATUS_LEN => valid_players.push(player),
                Ok(_) => debug!("'{player}' answered status with something else"),
                Err(err) => debug!("'{player}' does not answer status: {err}"),
            }
        }

        Ok(valid_players)
    }

    pub fn set_active_player(&mut self, player: impl Into<String>) {
        self.selector.set_active(player);
    }

    pub fn active_player(&mut self) -> Result<String, ClientError> {
        let players = self.list_players()?;
        let statuses = players
            .into_iter()
            .map(|player| {
                let status = self.player_status(&player);
                (player, status)
            })
            .collect::<Vec<_>>();

        self.selector
            .select(&statuses)
            .ok_or(ClientError::NoPlayersDetected)
    }

    pub fn current_song(&mut self) -> Result<Metadata, ClientError> {
        let player = self.active_player()?;
        let field = |field: MetadataField| {
            self.execute_lenient(&PlayerCommand::Metadata(field).args(&player))
        };
        let metadata = Metadata {
            artist: field(MetadataField::Artist)?,
            title: field(MetadataField::Title)?,
            album: field(MetadataField::Album)?,
        };

        if metadata.artist.is_empty() && metadata.title.is_empty() {
            return Err(ClientError::NothingPlaying);
        }

        debug!("'{player}' is on {metadata}");
        Ok(metadata)
    }

    /// Playback position of the active player in seconds.
    pub fn position(&mut self) -> Result<f64, ClientError> {
        let player = self.active_player()?;
        let output = self.execute_on(&player, PlayerCommand::Position)?;
        output
            .parse::<f64>()
            .map_err(|_| ClientError::InvalidPosition(output))
    }

    pub fn seek(&mut self, seconds: f64) -> Result<(), ClientError> {
        let player = self.active_player()?;
        self.execute_on(&player, PlayerCommand::SetPosition(seconds))?;
        Ok(())
    }

    pub fn toggle_play(&mut self) -> Result<(), ClientError> {
        let player = self.active_player()?;
        self.execute_on(&player, PlayerCommand::PlayPause)?;
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), ClientError> {
        let player = self.active_player()?;
        self.execute_on(&player, PlayerCommand::Next)?;
        Ok(())
    }

    pub fn previous(&mut self) -> Result<(), ClientError> {
        let player = self.active_player()?;
        self.execute_on(&player, PlayerCommand::Previous)?;
        Ok(())
    }

    pub fn is_playing(&mut self) -> Result<bool, ClientError> {
        let player = self.active_player()?;
        let status = self.execute_on(&player, PlayerCommand::Status)?;
        Ok(PlaybackStatus::parse(&status) == PlaybackStatus::Playing)
    }
}
