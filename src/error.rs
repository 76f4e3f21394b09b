use thiserror::Error;

/// Unified error type for version resolution
#[derive(Error, Debug)]
pub enum ScmVersionError {
    #[error("No tags matching '{pattern}' found in repository")]
    NoMatchingTags { pattern: String },

    #[error("No version tag is reachable from the current commit")]
    NoReachableTag,

    #[error(transparent)]
    Git(#[from] git2::Error),

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-scm-version
pub type Result<T> = std::result::Result<T, ScmVersionError>;

impl ScmVersionError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ScmVersionError::Config(msg.into())
    }

    /// Create a no-matching-tags error for the given pattern
    pub fn no_matching_tags(pattern: impl Into<String>) -> Self {
        ScmVersionError::NoMatchingTags {
            pattern: pattern.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScmVersionError::config("bad toml");
        assert_eq!(err.to_string(), "Configuration error: bad toml");
    }

    #[test]
    fn test_no_matching_tags_names_pattern() {
        let err = ScmVersionError::no_matching_tags(r"^v\d+");
        assert!(err.to_string().contains(r"^v\d+"));
    }

    #[test]
    fn test_git_error_is_transparent() {
        let git_err = git2::Error::from_str("reference 'refs/tags/v9' not found");
        let expected = git_err.to_string();
        let err: ScmVersionError = git_err.into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScmVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_regex() {
        let regex_err = regex::Regex::new("v(").unwrap_err();
        let err: ScmVersionError = regex_err.into();
        assert!(err.to_string().starts_with("Invalid tag pattern"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ScmVersionError::config("x"), "Configuration error"),
            (ScmVersionError::no_matching_tags("x"), "No tags matching"),
            (ScmVersionError::NoReachableTag, "No version tag is reachable"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
