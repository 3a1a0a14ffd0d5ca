/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

/*!
# playerctl

Umbrella crate: the single entry point to the playerctl libraries.

```rust
use playerctl::{check_version, PlayerctlClient, ProcessRunner, VERSION_STRING};

const _: () = assert!(playerctl::check_version!(2, 4, 0));

let client = PlayerctlClient::new(ProcessRunner::new());
assert_eq!(client.library_version().to_string(), VERSION_STRING);
assert!(check_version(1, 0, 0));
```
*/

pub use {playerctl_client::prelude::*, playerctl_version::*};
