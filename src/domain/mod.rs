//! Domain logic - pure version rules independent of git operations

pub mod tag;
pub mod version;

pub use tag::{
    find_head_tag, find_nearest_tag, Tag, TagCount, TagDistance, TagPattern, DEFAULT_TAG_PATTERN,
    DEFAULT_TAG_PREFIX,
};
pub use version::{format_timestamp, ResolvedVersion, TIMESTAMP_FORMAT};
