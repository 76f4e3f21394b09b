use chrono::{DateTime, Local, TimeZone};
use log::{debug, trace};
use std::fmt;

use crate::config::TagsConfig;
use crate::domain::{
    find_head_tag, find_nearest_tag, format_timestamp, ResolvedVersion, Tag, TagCount,
    TagDistance, TagPattern,
};
use crate::error::{Result, ScmVersionError};
use crate::git::Repository;

/// Derives a version string from a repository's tags and working tree
pub struct VersionResolver {
    pattern: TagPattern,
    prefix: String,
}

impl VersionResolver {
    /// Create a resolver from the tag configuration
    pub fn new(config: &TagsConfig) -> Result<Self> {
        Ok(VersionResolver {
            pattern: config.compile_pattern()?,
            prefix: config.prefix.clone(),
        })
    }

    /// Resolve the version string using the current local time for the dirty suffix
    pub fn resolve<R: Repository>(&self, repo: &R) -> Result<String> {
        self.resolve_at(repo, &Local::now())
    }

    /// Resolve the version string with `now` as the dirty timestamp
    pub fn resolve_at<R, Tz>(&self, repo: &R, now: &DateTime<Tz>) -> Result<String>
    where
        R: Repository,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Ok(self.resolve_version_at(repo, now)?.to_string())
    }

    /// Resolve the structured version with `now` as the dirty timestamp
    pub fn resolve_version_at<R, Tz>(
        &self,
        repo: &R,
        now: &DateTime<Tz>,
    ) -> Result<ResolvedVersion>
    where
        R: Repository,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let (tag, distance) = self.nearest_tag(repo)?;

        let sha = repo.short_head_id()?;
        let clean = repo.is_clean()?;
        debug!("HEAD is {} ({})", sha, if clean { "clean" } else { "dirty" });

        let timestamp = if clean {
            None
        } else {
            Some(format_timestamp(now))
        };

        Ok(ResolvedVersion {
            bare: tag.bare(&self.prefix),
            distance,
            sha,
            clean,
            timestamp,
        })
    }

    /// Find the tag HEAD is on, or else the nearest ancestor tag, with its distance
    ///
    /// `rev-list --ancestry-path` gives zero both on the tag and for tags that
    /// are not ancestors, so the plain count is checked first to detect the
    /// on-tag case. Ancestry counts are only computed when that check fails.
    pub fn nearest_tag<R: Repository>(&self, repo: &R) -> Result<(Tag, usize)> {
        let tags = self.candidate_tags(repo)?;

        let counts = self.tag_counts(repo, &tags)?;
        if let Some(head_tag) = find_head_tag(&counts) {
            debug!("HEAD is on tag {}", head_tag.name);
            return Ok((head_tag.clone(), 0));
        }

        let distances = self.tag_distances(repo, &tags)?;
        let nearest = find_nearest_tag(&distances).ok_or(ScmVersionError::NoReachableTag)?;
        debug!(
            "Nearest tag is {}, {} commits behind HEAD",
            nearest.tag.name, nearest.distance
        );

        Ok((nearest.tag.clone(), nearest.distance))
    }

    /// Version tags of the repository in listing order
    pub fn candidate_tags<R: Repository>(&self, repo: &R) -> Result<Vec<Tag>> {
        let tags = self.pattern.filter(repo.list_tags()?);
        debug!(
            "Found {} tags matching '{}'",
            tags.len(),
            self.pattern.as_str()
        );

        if tags.is_empty() {
            return Err(ScmVersionError::no_matching_tags(self.pattern.as_str()));
        }

        Ok(tags)
    }

    /// Plain commit counts from each tag to HEAD
    pub fn tag_counts<R: Repository>(&self, repo: &R, tags: &[Tag]) -> Result<Vec<TagCount>> {
        tags.iter()
            .map(|tag| -> Result<TagCount> {
                let count = repo.count_commits_since(&tag.name)?;
                trace!("{}.. has {} commits", tag.name, count);
                Ok(TagCount {
                    tag: tag.clone(),
                    count,
                })
            })
            .collect()
    }

    /// Ancestry-path distances from each tag to HEAD
    pub fn tag_distances<R: Repository>(
        &self,
        repo: &R,
        tags: &[Tag],
    ) -> Result<Vec<TagDistance>> {
        tags.iter()
            .map(|tag| -> Result<TagDistance> {
                let distance = repo.count_ancestry_path_since(&tag.name)?;
                trace!("{}.. has {} commits on the ancestry path", tag.name, distance);
                Ok(TagDistance {
                    tag: tag.clone(),
                    distance,
                })
            })
            .collect()
    }
}
