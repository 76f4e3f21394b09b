//! Git query abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! queries the version resolver needs, allowing the resolver to run against
//! real repositories and in-memory mocks alike.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_scm_version::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! for tag in repo.list_tags()? {
//!     println!("{}: {} commits since", tag, repo.count_commits_since(&tag)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only git queries used to derive a version
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations pass
/// underlying `git2::Error`s through as [crate::error::ScmVersionError::Git]
/// without rewording them.
///
/// ## Implementations
///
/// - [Git2Repository](repository::Git2Repository): Real implementation using the `git2` crate
/// - [MockRepository](mock::MockRepository): Test implementation with canned answers
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Names are returned in the order `git tag` lists them (byte-wise
    /// sorted). This order decides ties between equally distant tags.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Count commits reachable from HEAD but not from the tag
    ///
    /// Equivalent to `git rev-list <tag>.. --count`. Zero only when HEAD is
    /// the tagged commit or one of the tag's ancestors.
    fn count_commits_since(&self, tag: &str) -> Result<usize>;

    /// Count commits on the ancestry path from the tag (exclusive) to HEAD
    ///
    /// Equivalent to `git rev-list <tag>.. --count --ancestry-path`. Zero when
    /// HEAD is the tagged commit and when the tag is not an ancestor of HEAD.
    fn count_ancestry_path_since(&self, tag: &str) -> Result<usize>;

    /// Abbreviated id of the HEAD commit, as `git rev-parse --short HEAD`
    fn short_head_id(&self) -> Result<String>;

    /// Whether the working tree has no modified, staged or untracked files
    fn is_clean(&self) -> Result<bool>;
}
