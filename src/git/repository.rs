use crate::error::{Result, ScmVersionError};
use git2::{Oid, Repository as Git2Repo, Revwalk, Sort, StatusOptions};
use log::debug;
use std::collections::HashSet;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!("Using repository at {}", repo.path().display());

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Resolve a tag name to the commit it points at, peeling annotated tags
    fn tag_commit_oid(&self, tag: &str) -> Result<Oid> {
        let reference = self.repo.find_reference(&format!("refs/tags/{}", tag))?;
        Ok(reference.peel_to_commit()?.id())
    }

    /// Revwalk over `<tag>..HEAD`
    fn walk_since(&self, tag_oid: Oid, sorting: Sort) -> Result<Revwalk<'_>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(sorting)?;
        revwalk.push_head()?;
        revwalk.hide(tag_oid)?;
        Ok(revwalk)
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        let mut names: Vec<String> = tags.iter().flatten().map(|s| s.to_string()).collect();
        names.sort();
        Ok(names)
    }

    fn count_commits_since(&self, tag: &str) -> Result<usize> {
        let tag_oid = self.tag_commit_oid(tag)?;

        let mut count = 0;
        for oid in self.walk_since(tag_oid, Sort::NONE)? {
            oid?;
            count += 1;
        }

        Ok(count)
    }

    fn count_ancestry_path_since(&self, tag: &str) -> Result<usize> {
        let tag_oid = self.tag_commit_oid(tag)?;

        // Parents come before children, so a commit is on the path as soon as
        // one of its parents is the tag or already on the path.
        let mut on_path = HashSet::new();
        for oid in self.walk_since(tag_oid, Sort::TOPOLOGICAL | Sort::REVERSE)? {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            if commit
                .parent_ids()
                .any(|parent| parent == tag_oid || on_path.contains(&parent))
            {
                on_path.insert(oid);
            }
        }

        Ok(on_path.len())
    }

    fn short_head_id(&self) -> Result<String> {
        let head = self.repo.head()?.peel_to_commit()?;
        let short_id = head.as_object().short_id()?;

        short_id
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ScmVersionError::Git(git2::Error::from_str("HEAD id is not UTF-8")))
    }

    fn is_clean(&self) -> Result<bool> {
        let mut options = StatusOptions::new();
        options.include_untracked(true).include_ignored(false);

        let statuses = self.repo.statuses(Some(&mut options))?;
        Ok(statuses.is_empty())
    }
}
