use regex::Regex;

use crate::error::Result;

/// Default pattern a tag must match to count as a version tag
pub const DEFAULT_TAG_PATTERN: &str = r"^v\d+([.]\d+)*";

/// Default prefix removed from a version tag to form the bare version
pub const DEFAULT_TAG_PREFIX: &str = "v";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Strip `prefix` once from the start of the tag (e.g., "v1.2.3" -> "1.2.3")
    pub fn bare(&self, prefix: &str) -> String {
        self.name
            .strip_prefix(prefix)
            .unwrap_or(&self.name)
            .to_string()
    }
}

/// Compiled pattern selecting version tags out of the full tag list
#[derive(Debug, Clone)]
pub struct TagPattern {
    regex: Regex,
}

impl TagPattern {
    /// Compile a tag pattern
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(TagPattern {
            regex: Regex::new(pattern)?,
        })
    }

    /// The pattern source text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether a tag name is a version tag
    pub fn matches(&self, tag: &str) -> bool {
        self.regex.is_match(tag)
    }

    /// Keep the version tags of `names`, preserving their order
    pub fn filter<I, S>(&self, names: I) -> Vec<Tag>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .map(Into::<String>::into)
            .filter(|name| self.matches(name))
            .map(Tag::new)
            .collect()
    }
}

/// Tag paired with the plain commit count from the tag to HEAD.
///
/// Zero only when HEAD sits exactly on the tag; tags that are not ancestors
/// still produce a positive count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    pub tag: Tag,
    pub count: usize,
}

/// Tag paired with the commit count along the ancestry path from the tag to HEAD.
///
/// Zero both on the tag and for tags that are not ancestors of HEAD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDistance {
    pub tag: Tag,
    pub distance: usize,
}

/// First tag whose plain count is zero, i.e. the tag HEAD is sitting on.
pub fn find_head_tag(counts: &[TagCount]) -> Option<&Tag> {
    counts.iter().find(|c| c.count == 0).map(|c| &c.tag)
}

/// Nearest ancestor tag: the smallest positive distance, first one wins on ties.
pub fn find_nearest_tag(distances: &[TagDistance]) -> Option<&TagDistance> {
    distances
        .iter()
        .filter(|d| d.distance > 0)
        .fold(None, |best: Option<&TagDistance>, d| match best {
            Some(b) if b.distance <= d.distance => Some(b),
            _ => Some(d),
        })
}
