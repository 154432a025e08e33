//! # Platform Filter
//!
//! `os_type` is an enumerated-by-convention string rather than a closed
//! enum: records store whatever the client sent. Listing narrows by
//! platform, where a dual-platform release belongs to both iOS and Android.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// `os_type` value for iOS-only releases.
pub const OS_IOS: &str = "iOS";
/// `os_type` value for Android-only releases.
pub const OS_ANDROID: &str = "Android";
/// `os_type` value for releases shipping on both platforms.
pub const OS_DUAL: &str = "雙系統";

/// Platform filter accepted by the list endpoint (`os_filter` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OsFilter {
    /// iOS and dual-platform releases.
    Ios,
    /// Android and dual-platform releases.
    Android,
    /// Every release.
    #[default]
    All,
}

impl OsFilter {
    /// Resolve the optional query value.
    ///
    /// Lenient: an absent, empty or unrecognised value (including a
    /// miscased `IOS`) means [`OsFilter::All`]. Use [`FromStr`] for a
    /// strict parse.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse().ok()).unwrap_or_default()
    }

    /// The `os_type` values this filter admits, or `None` for no restriction.
    pub fn os_types(&self) -> Option<[&'static str; 2]> {
        match self {
            Self::Ios => Some([OS_IOS, OS_DUAL]),
            Self::Android => Some([OS_ANDROID, OS_DUAL]),
            Self::All => None,
        }
    }

    /// Query-string spelling of this filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::All => "all",
        }
    }
}

impl FromStr for OsFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "all" => Ok(Self::All),
            other => Err(ValidationError::UnknownOsFilter(other.to_string())),
        }
    }
}

impl fmt::Display for OsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn admits(filter: OsFilter, os_type: &str) -> bool {
        filter
            .os_types()
            .map_or(true, |allowed| allowed.contains(&os_type))
    }

    #[test]
    fn absent_query_means_all() {
        assert_eq!(OsFilter::from_query(None), OsFilter::All);
    }

    #[test]
    fn parses_known_values() {
        assert_eq!(OsFilter::from_query(Some("ios")), OsFilter::Ios);
        assert_eq!(OsFilter::from_query(Some("android")), OsFilter::Android);
        assert_eq!(OsFilter::from_query(Some("all")), OsFilter::All);
    }

    #[test]
    fn unknown_and_miscased_query_values_fall_back_to_all() {
        for raw in ["IOS", "iOS", "", "windows"] {
            assert_eq!(OsFilter::from_query(Some(raw)), OsFilter::All, "{raw:?}");
        }
    }

    #[test]
    fn strict_parse_rejects_unknown_values() {
        assert_eq!(
            "iOS".parse::<OsFilter>(),
            Err(ValidationError::UnknownOsFilter("iOS".into()))
        );
        assert!("".parse::<OsFilter>().is_err());
    }

    #[test]
    fn dual_platform_matches_both_filters() {
        assert!(admits(OsFilter::Ios, OS_DUAL));
        assert!(admits(OsFilter::Android, OS_DUAL));
    }

    #[test]
    fn single_platform_matches_only_its_filter() {
        assert_eq!(OsFilter::Ios.os_types(), Some([OS_IOS, OS_DUAL]));
        assert_eq!(OsFilter::Android.os_types(), Some([OS_ANDROID, OS_DUAL]));
        assert!(!admits(OsFilter::Ios, OS_ANDROID));
        assert!(!admits(OsFilter::Android, OS_IOS));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for filter in [OsFilter::Ios, OsFilter::Android, OsFilter::All] {
            assert_eq!(filter.to_string().parse::<OsFilter>().unwrap(), filter);
        }
    }

    proptest! {
        #[test]
        fn all_matches_any_os_type(os_type in ".*") {
            prop_assert!(admits(OsFilter::All, &os_type));
        }

        #[test]
        fn unconventional_os_types_match_no_platform(os_type in "[a-z]{1,12}") {
            prop_assert!(!admits(OsFilter::Ios, &os_type));
            prop_assert!(!admits(OsFilter::Android, &os_type));
        }

        #[test]
        fn from_query_never_fails(raw in ".*") {
            let filter = OsFilter::from_query(Some(&raw));
            prop_assert!(filter == OsFilter::All || raw == filter.as_str());
        }
    }
}
