/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */

/*!
# playerctl-version

`playerctl-version` identifies the version of the playerctl client library at compile time.

## Features ✨
- **Version constants**: `MAJOR_VERSION`, `MINOR_VERSION`, `MICRO_VERSION`, `VERSION_STRING`
  and the pre-encoded `VERSION_HEX`.
- **Encoding**: [`encode_version`] packs a `(major, minor, micro)` triple into one integer
  that compares the same way as the triple.
- **Compatibility checks**: [`check_version`] and the [`check_version!`] macro, both usable
  in `const` context.
- **Serialization/Deserialization**: binary form of [`Version`] and [`EncodedVersion`]
  through the `flood_rs` crate.

## Usage 🚀

The crate is normally reached through the `playerctl` umbrella crate:

```toml
[dependencies]
playerctl = "2.4"
```

## Example:

```rust
use playerctl_version::{check_version, encode_version, VERSION_HEX};

const HAS_SEEK: bool = playerctl_version::check_version!(2, 0, 0);
assert!(HAS_SEEK);
assert!(check_version(2, 4, 1));
assert!(VERSION_HEX >= encode_version(2, 3, 0));
```
*/

pub mod err;
mod version;

pub use err::ParseVersionError;
pub use version::{
    check_version, encode_version, EncodedVersion, Version, MAJOR_VERSION, MICRO_VERSION,
    MINOR_VERSION, VERSION, VERSION_HEX, VERSION_STRING,
};

/// Checks at compile time whether the library is at least `major.minor.micro`.
///
/// Expands to a call of the `const fn` [`check_version`], so it can be used in
/// `const` items and `assert!`s:
///
/// ```
/// const _: () = assert!(playerctl_version::check_version!(2, 4, 0));
/// ```
#[macro_export]
macro_rules! check_version {
    ($major:expr, $minor:expr, $micro:expr $(,)?) => {
        $crate::check_version($major, $minor, $micro)
    };
}
