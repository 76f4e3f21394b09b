pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod resolver;
pub mod ui;

pub use error::{Result, ScmVersionError};
pub use resolver::{resolve_version, resolve_version_in, VersionResolver};
