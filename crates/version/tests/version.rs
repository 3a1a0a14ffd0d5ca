/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/nimble
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
use flood_rs::prelude::*;
use flood_rs::{Deserialize, Serialize};
use playerctl_version::{
    check_version, encode_version, EncodedVersion, ParseVersionError, Version, MAJOR_VERSION,
    MICRO_VERSION, MINOR_VERSION, VERSION, VERSION_HEX, VERSION_STRING,
};
use std::io;

#[test_log::test]
fn own_version_constants() {
    assert_eq!((MAJOR_VERSION, MINOR_VERSION, MICRO_VERSION), (2, 4, 1));
    assert_eq!(VERSION, Version::new(2, 4, 1));
}

#[test_log::test]
fn version_string_joins_components() {
    assert_eq!(VERSION_STRING, "2.4.1");
    assert_eq!(
        VERSION_STRING,
        format!("{MAJOR_VERSION}.{MINOR_VERSION}.{MICRO_VERSION}")
    );
    assert_eq!(VERSION.to_string(), VERSION_STRING);
}

#[test_log::test]
fn version_string_matches_package_version() {
    assert_eq!(VERSION_STRING, env!("CARGO_PKG_VERSION"));
}

#[test_log::test]
fn version_hex_is_encoded_own_version() {
    assert_eq!(
        VERSION_HEX,
        encode_version(MAJOR_VERSION, MINOR_VERSION, MICRO_VERSION)
    );
    assert_eq!(VERSION_HEX, 0x0204_0100);
    assert_eq!(VERSION.encode(), EncodedVersion(VERSION_HEX));
}

#[test_log::test]
fn encode_layout() {
    assert_eq!(encode_version(0, 0, 0), 0);
    assert_eq!(encode_version(1, 0, 0), 0x0100_0000);
    assert_eq!(encode_version(0, 1, 0), 0x0001_0000);
    assert_eq!(encode_version(0, 0, 1), 0x0000_0100);
    assert_eq!(encode_version(255, 255, 255), 0xffff_ff00);
}

#[test_log::test]
fn encode_out_of_range_spills_into_neighbour() {
    assert_eq!(encode_version(0, 256, 0), encode_version(1, 0, 0));
    assert_eq!(encode_version(0, 0, 256), encode_version(0, 1, 0));
}

#[test_log::test]
fn check_version_accepts_own_version() {
    assert!(check_version(2, 4, 1));
}

#[test_log::test]
fn check_version_rejects_newer() {
    assert!(!check_version(2, 4, 2));
    assert!(!check_version(2, 5, 0));
    assert!(!check_version(3, 0, 0));
}

#[test_log::test]
fn check_version_accepts_older() {
    assert!(check_version(2, 4, 0));
    assert!(check_version(2, 3, 99));
    assert!(check_version(1, 9, 9));
    assert!(check_version(0, 0, 0));
}

#[test_log::test]
fn check_version_macro_in_const_context() {
    const AT_LEAST_TWO: bool = playerctl_version::check_version!(2, 0, 0);
    const AT_LEAST_THREE: bool = playerctl_version::check_version!(3, 0, 0,);
    assert!(AT_LEAST_TWO);
    assert!(!AT_LEAST_THREE);
}

/// Walks every in-range triple in lexicographic order. A strictly increasing
/// encoding means it is injective and preserves the ordering, and the
/// predicate must agree with comparing encoded values.
#[test_log::test]
fn encoding_is_monotonic_and_agrees_with_check_version() {
    let mut previous: Option<u32> = None;
    for major in 0..=255u32 {
        for minor in 0..=255u32 {
            for micro in 0..=255u32 {
                let encoded = encode_version(major, minor, micro);
                if let Some(previous) = previous {
                    assert!(
                        encoded > previous,
                        "{major}.{minor}.{micro} encoded to {encoded:#x}"
                    );
                }
                previous = Some(encoded);

                assert_eq!(
                    check_version(major, minor, micro),
                    VERSION_HEX >= encoded,
                    "disagreement at {major}.{minor}.{micro}"
                );
            }
        }
    }
}

#[test_log::test]
fn typed_ordering_matches_encoding() {
    let versions = [
        Version::new(1, 9, 9),
        Version::new(2, 3, 99),
        Version::new(2, 4, 0),
        Version::new(2, 4, 1),
        Version::new(2, 4, 2),
        Version::new(2, 5, 0),
        Version::new(3, 0, 0),
    ];

    for a in &versions {
        for b in &versions {
            assert_eq!(a.cmp(b), a.encode().cmp(&b.encode()), "{a} vs {b}");
        }
        assert_eq!(
            VERSION.is_at_least(a),
            check_version(a.major as u32, a.minor as u32, a.micro as u32)
        );
    }
}

#[test_log::test]
fn decode_inverts_encode() {
    let version = Version::new(17, 0, 255);
    assert_eq!(Version::decode(version.encode()), version);
    assert_eq!(Version::from(EncodedVersion(0x0204_01ff)), VERSION);
    assert_eq!(EncodedVersion::from(VERSION).value(), VERSION_HEX);
}

#[test_log::test]
fn encoded_version_displays_as_hex() {
    assert_eq!(VERSION.encode().to_string(), "0x02040100");
}

#[test_log::test]
fn parse_version_string() {
    assert_eq!(VERSION_STRING.parse::<Version>(), Ok(VERSION));
    assert_eq!("0.0.0".parse::<Version>(), Ok(Version::default()));
    assert_eq!(
        "255.255.255".parse::<Version>(),
        Ok(Version::new(255, 255, 255))
    );
}

#[test_log::test]
fn parse_rejects_malformed() {
    assert_eq!(
        "2.4".parse::<Version>(),
        Err(ParseVersionError::WrongComponentCount(2))
    );
    assert_eq!(
        "2.4.1.0".parse::<Version>(),
        Err(ParseVersionError::WrongComponentCount(4))
    );
    assert_eq!(
        "2.256.1".parse::<Version>(),
        Err(ParseVersionError::InvalidComponent("256".to_string()))
    );
    assert_eq!(
        "2..1".parse::<Version>(),
        Err(ParseVersionError::InvalidComponent(String::new()))
    );
    assert_eq!(
        "2.4.1-rc1".parse::<Version>(),
        Err(ParseVersionError::InvalidComponent("1-rc1".to_string()))
    );
    assert_eq!(
        "2.+4.1".parse::<Version>(),
        Err(ParseVersionError::InvalidComponent("+4".to_string()))
    );
}

#[test_log::test]
fn serialize_version() -> io::Result<()> {
    let mut out_stream = OutOctetStream::new();
    VERSION.serialize(&mut out_stream)?;
    assert_eq!(out_stream.octets_ref(), &[2, 4, 1]);

    let mut in_stream = InOctetStream::new(out_stream.octets_ref());
    assert_eq!(Version::deserialize(&mut in_stream)?, VERSION);
    Ok(())
}

#[test_log::test]
fn serialize_encoded_version() -> io::Result<()> {
    let mut out_stream = OutOctetStream::new();
    VERSION.encode().serialize(&mut out_stream)?;
    assert_eq!(out_stream.octets_ref().len(), 4);

    let mut in_stream = InOctetStream::new(out_stream.octets_ref());
    let received = EncodedVersion::deserialize(&mut in_stream)?;
    assert_eq!(received, EncodedVersion(VERSION_HEX));
    Ok(())
}

#[test_log::test]
fn deserialize_rejects_non_zero_low_octet() {
    let octets = [0x02, 0x04, 0x01, 0x07];
    let mut in_stream = InOctetStream::new(&octets);
    let err = EncodedVersion::deserialize(&mut in_stream).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
}
