use chrono::{DateTime, TimeZone};
use std::fmt;

/// Timestamp layout for the dirty suffix, e.g. `20240101120000`
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Render `time` as the fixed-width `YYYYMMDDHHMMSS` dirty timestamp.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Version derived from the checkout state.
///
/// Renders through [`fmt::Display`]:
///
/// | on tag | clean | output |
/// |---|---|---|
/// | yes | yes | `{bare}` |
/// | yes | no | `{bare}.post0+g{sha}.d{timestamp}` |
/// | no | yes | `{bare}.post{distance}+g{sha}` |
/// | no | no | `{bare}.post{distance}+g{sha}.d{timestamp}` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Tag with its prefix removed
    pub bare: String,
    /// Commits between the tag and HEAD, 0 when on the tag
    pub distance: usize,
    /// Abbreviated HEAD commit id
    pub sha: String,
    /// Whether the working tree has no changes
    pub clean: bool,
    /// Dirty timestamp, only rendered when the tree is dirty
    pub timestamp: Option<String>,
}

impl ResolvedVersion {
    /// Whether HEAD sits exactly on the tag
    pub fn on_tag(&self) -> bool {
        self.distance == 0
    }
}

impl fmt::Display for ResolvedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.clean && self.on_tag() {
            return write!(f, "{}", self.bare);
        }

        write!(f, "{}.post{}+g{}", self.bare, self.distance, self.sha)?;

        if !self.clean {
            if let Some(timestamp) = &self.timestamp {
                write!(f, ".d{}", timestamp)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, Utc};

    fn version(distance: usize, clean: bool) -> ResolvedVersion {
        ResolvedVersion {
            bare: "1.1.0".to_string(),
            distance,
            sha: "abc1234".to_string(),
            clean,
            timestamp: Some("20240101120000".to_string()),
        }
    }

    #[test]
    fn test_on_tag_clean() {
        assert_eq!(version(0, true).to_string(), "1.1.0");
    }

    #[test]
    fn test_on_tag_dirty() {
        assert_eq!(
            version(0, false).to_string(),
            "1.1.0.post0+gabc1234.d20240101120000"
        );
    }

    #[test]
    fn test_off_tag_clean() {
        assert_eq!(version(3, true).to_string(), "1.1.0.post3+gabc1234");
    }

    #[test]
    fn test_off_tag_dirty() {
        assert_eq!(
            version(3, false).to_string(),
            "1.1.0.post3+gabc1234.d20240101120000"
        );
    }

    #[test]
    fn test_clean_ignores_timestamp() {
        let v = version(12, true);
        assert!(!v.to_string().contains(".d"));
    }

    #[test]
    fn test_format_timestamp_zero_pads() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&time), "20240102030405");
    }

    #[test]
    fn test_format_timestamp_is_fourteen_digits() {
        let stamp = format_timestamp(&Local::now());
        assert_eq!(stamp.len(), 14);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }
}
