/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use crate::err::ParseVersionError;
use flood_rs::{Deserialize, ReadOctetStream, Serialize, WriteOctetStream};
use std::fmt::{Display, Formatter};
use std::io;
use std::io::ErrorKind;
use std::str::FromStr;

macro_rules! library_version {
    ($major:literal, $minor:literal, $micro:literal) => {
        /// Playerctl major version component.
        pub const MAJOR_VERSION: u32 = $major;

        /// Playerctl minor version component.
        pub const MINOR_VERSION: u32 = $minor;

        /// Playerctl micro version component.
        pub const MICRO_VERSION: u32 = $micro;

        /// Playerctl version, encoded as a string.
        pub const VERSION_STRING: &str = concat!($major, ".", $minor, ".", $micro);
    };
}

library_version!(2, 4, 1);

const _: () = assert!(MAJOR_VERSION <= 0xff && MINOR_VERSION <= 0xff && MICRO_VERSION <= 0xff);

/// Playerctl version, encoded as a number, useful for integer comparisons.
pub const VERSION_HEX: u32 = encode_version(MAJOR_VERSION, MINOR_VERSION, MICRO_VERSION);

/// Playerctl version as a typed triple.
pub const VERSION: Version = Version::new(
    MAJOR_VERSION as u8,
    MINOR_VERSION as u8,
    MICRO_VERSION as u8,
);

/// Packs a version triple as `major << 24 | minor << 16 | micro << 8`.
///
/// Components are expected to be in `0..=255`. Nothing is checked: a larger
/// component spills into the bits of its neighbour.
#[inline]
pub const fn encode_version(major: u32, minor: u32, micro: u32) -> u32 {
    major << 24 | minor << 16 | micro << 8
}

/// Returns `true` if the compiled library is at least `major.minor.micro`.
///
/// Compares the components lexicographically and does not go through
/// [`encode_version`].
#[inline]
pub const fn check_version(major: u32, minor: u32, micro: u32) -> bool {
    MAJOR_VERSION > major
        || (MAJOR_VERSION == major && MINOR_VERSION > minor)
        || (MAJOR_VERSION == major && MINOR_VERSION == minor && MICRO_VERSION >= micro)
}

/// A `(major, minor, micro)` version triple.
///
/// Ordering is lexicographic, matching [`check_version`] and the order of
/// [`EncodedVersion`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Version {
    pub major: u8,
    pub minor: u8,
    pub micro: u8,
}

impl Version {
    pub const fn new(major: u8, minor: u8, micro: u8) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    pub const fn encode(&self) -> EncodedVersion {
        EncodedVersion(encode_version(
            self.major as u32,
            self.minor as u32,
            self.micro as u32,
        ))
    }

    /// Unpacks the upper three octets. The lowest octet is ignored.
    pub const fn decode(encoded: EncodedVersion) -> Self {
        Self {
            major: (encoded.0 >> 24) as u8,
            minor: (encoded.0 >> 16) as u8,
            micro: (encoded.0 >> 8) as u8,
        }
    }

    pub fn is_at_least(&self, required: &Version) -> bool {
        self >= required
    }
}

impl From<Version> for EncodedVersion {
    fn from(version: Version) -> Self {
        version.encode()
    }
}

impl From<EncodedVersion> for Version {
    fn from(encoded: EncodedVersion) -> Self {
        Self::decode(encoded)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let components = s.split('.').collect::<Vec<_>>();
        if components.len() != 3 {
            return Err(ParseVersionError::WrongComponentCount(components.len()));
        }

        let mut parsed = [0u8; 3];
        for (target, component) in parsed.iter_mut().zip(&components) {
            if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseVersionError::InvalidComponent(component.to_string()));
            }
            *target = component
                .parse()
                .map_err(|_| ParseVersionError::InvalidComponent(component.to_string()))?;
        }

        Ok(Self::new(parsed[0], parsed[1], parsed[2]))
    }
}

impl Serialize for Version {
    fn serialize(&self, stream: &mut impl WriteOctetStream) -> io::Result<()> {
        stream.write_u8(self.major)?;
        stream.write_u8(self.minor)?;
        stream.write_u8(self.micro)
    }
}

impl Deserialize for Version {
    fn deserialize(stream: &mut impl ReadOctetStream) -> io::Result<Self> {
        Ok(Self {
            major: stream.read_u8()?,
            minor: stream.read_u8()?,
            micro: stream.read_u8()?,
        })
    }
}

/// A version triple packed by [`encode_version`].
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EncodedVersion(pub u32);

impl EncodedVersion {
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl Display for EncodedVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl Serialize for EncodedVersion {
    fn serialize(&self, stream: &mut impl WriteOctetStream) -> io::Result<()> {
        stream.write_u32(self.0)
    }
}

impl Deserialize for EncodedVersion {
    fn deserialize(stream: &mut impl ReadOctetStream) -> io::Result<Self> {
        let value = stream.read_u32()?;
        if value & 0xff != 0 {
            return Err(io::Error::new(
                ErrorKind::InvalidData,
                format!("encoded version {value:#010x} has a non-zero low octet"),
            ));
        }
        Ok(Self(value))
    }
}
