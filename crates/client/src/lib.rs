/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

/*!

# playerctl Client

`playerctl-client` controls MPRIS media players on Linux by driving the `playerctl`
command-line tool. It lists the running players, reads their status and track metadata,
and sends transport commands to whichever player is considered active.

## Features

- **Player Discovery**: Lists players and filters out the ones that do not answer a
    status request.
- **Active Player Selection**: Keeps talking to the player the user picked as long as it is
    playing or paused, otherwise prefers a playing player over a paused one.
- **Transport Control**: Play/pause, next, previous and seeking.
- **Track Information**: Artist, title, album and playback position.
- **Pluggable Execution**: Commands go through the [`runner::CommandRunner`] trait, so a
    bundled binary or a scripted runner can stand in for the system `playerctl`.

## Usage

Add `playerctl-client` to your `Cargo.toml`:

```toml
[dependencies]
playerctl-client = "2.4.1"
```

*/

mod client;
pub mod command;
pub mod err;
pub mod prelude;
pub mod runner;
pub mod selection;
pub mod status;

pub use client::PlayerctlClient;

// `-p <player>` targeting and `position <seconds>` seeking are the 2.x command set.
const _: () = assert!(playerctl_version::check_version!(2, 0, 0));
