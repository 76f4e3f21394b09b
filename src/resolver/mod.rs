//! Version resolution from tag history and working-tree state

pub mod version_resolver;

pub use version_resolver::VersionResolver;

use std::path::Path;

use crate::config::{load_config, Config};
use crate::error::Result;
use crate::git::Git2Repository;

/// Resolve the version of the repository containing the current directory
///
/// Configuration is looked up the same way as [load_config] with no
/// explicit path.
pub fn resolve_version() -> Result<String> {
    let config = load_config(None)?;
    resolve_version_in(".", &config)
}

/// Resolve the version of the repository containing `path`
pub fn resolve_version_in<P: AsRef<Path>>(path: P, config: &Config) -> Result<String> {
    let resolver = VersionResolver::new(&config.tags)?;
    let repo = Git2Repository::open(path)?;
    resolver.resolve(&repo)
}
