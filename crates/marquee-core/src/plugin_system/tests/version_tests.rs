#![cfg(test)]

use std::cmp::Ordering;
use std::str::FromStr;

use crate::plugin_system::error::VersionError;
use crate::plugin_system::version::{version_compare, Comparator, PluginVersion};

#[test]
fn test_parse_dotted_versions() {
    let v = PluginVersion::parse("4.2").unwrap();
    assert_eq!(v.segments(), &[4, 2]);

    let v = PluginVersion::parse("5.0.1.1").unwrap();
    assert_eq!(v.segments(), &[5, 0, 1, 1]);

    let v = PluginVersion::parse("7").unwrap();
    assert_eq!(v.segments(), &[7]);

    // Surrounding whitespace is tolerated
    let v = PluginVersion::parse(" 1.2.3 ").unwrap();
    assert_eq!(v.segments(), &[1, 2, 3]);
}

#[test]
fn test_parse_rejects_invalid_versions() {
    assert!(matches!(PluginVersion::parse(""), Err(VersionError::Empty)));
    assert!(matches!(PluginVersion::parse("   "), Err(VersionError::Empty)));
    assert!(matches!(
        PluginVersion::parse("1.x.3"),
        Err(VersionError::InvalidSegment { .. })
    ));
    assert!(matches!(
        PluginVersion::parse("1..3"),
        Err(VersionError::InvalidSegment { .. })
    ));
    assert!(matches!(
        PluginVersion::parse("1.0-beta"),
        Err(VersionError::InvalidSegment { .. })
    ));
}

#[test]
fn test_zero_padded_comparison() {
    let short = PluginVersion::parse("5.0").unwrap();
    let long = PluginVersion::parse("5.0.0").unwrap();
    assert_eq!(short, long);
    assert_eq!(short.cmp(&long), Ordering::Equal);

    let patched = PluginVersion::parse("5.0.1").unwrap();
    assert!(short < patched);
    assert!(patched > long);
}

#[test]
fn test_segmentwise_ordering() {
    let a = PluginVersion::parse("1.9").unwrap();
    let b = PluginVersion::parse("2.0").unwrap();
    let c = PluginVersion::parse("2.0.5").unwrap();
    assert!(a < b);
    assert!(b < c);
    // Numeric, not lexicographic: 10 > 9
    let d = PluginVersion::parse("1.10").unwrap();
    assert!(a < d);
}

#[test]
fn test_comparator_from_str_spellings() {
    assert_eq!(Comparator::from_str("<").unwrap(), Comparator::Lt);
    assert_eq!(Comparator::from_str("<=").unwrap(), Comparator::Le);
    assert_eq!(Comparator::from_str(">").unwrap(), Comparator::Gt);
    assert_eq!(Comparator::from_str(">=").unwrap(), Comparator::Ge);
    assert_eq!(Comparator::from_str("==").unwrap(), Comparator::Eq);
    assert_eq!(Comparator::from_str("!=").unwrap(), Comparator::Ne);
    assert_eq!(Comparator::from_str("<>").unwrap(), Comparator::Ne);

    assert_eq!(Comparator::from_str("lt").unwrap(), Comparator::Lt);
    assert_eq!(Comparator::from_str("ge").unwrap(), Comparator::Ge);
    assert_eq!(Comparator::from_str("ne").unwrap(), Comparator::Ne);

    assert!(Comparator::from_str("~=").is_err());
    assert!(Comparator::from_str("").is_err());
}

#[test]
fn test_version_compare_operators() {
    assert!(version_compare("2.0", "1.9", Comparator::Gt));
    assert!(version_compare("2.0", "2.0.0", Comparator::Eq));
    assert!(version_compare("2.0", "2.0", Comparator::Ge));
    assert!(version_compare("1.9", "2.0", Comparator::Lt));
    assert!(version_compare("1.9", "1.9", Comparator::Le));
    assert!(version_compare("1.9", "2.0", Comparator::Ne));

    assert!(!version_compare("1.9", "2.0", Comparator::Ge));
    assert!(!version_compare("2.0", "2.0.0", Comparator::Ne));
}

#[test]
fn test_version_compare_unparsable_is_false() {
    // Either side failing to parse yields false, never a panic
    assert!(!version_compare("abc", "1.0", Comparator::Ge));
    assert!(!version_compare("1.0", "abc", Comparator::Ge));
    assert!(!version_compare("", "1.0", Comparator::Ne));
}

#[test]
fn test_version_display_round_trip() {
    let v = PluginVersion::parse("5.0.1").unwrap();
    assert_eq!(v.to_string(), "5.0.1");
    assert_eq!(Comparator::Ge.to_string(), ">=");
}
