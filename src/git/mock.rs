use crate::error::Result;
use crate::git::Repository;
use std::cell::RefCell;

/// Canned answers for one tag
#[derive(Debug, Clone)]
struct MockTag {
    name: String,
    count: usize,
    ancestry_distance: usize,
}

/// Mock repository for testing without actual git operations
///
/// Tags keep insertion order, which plays the part of `git tag` ordering.
/// Every count query is recorded so tests can check which queries ran.
pub struct MockRepository {
    tags: Vec<MockTag>,
    short_id: String,
    clean: bool,
    queries: RefCell<Vec<String>>,
}

impl MockRepository {
    /// Create a new empty, clean mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            short_id: "0000000".to_string(),
            clean: true,
            queries: RefCell::new(Vec::new()),
        }
    }

    /// Add a tag HEAD is sitting on
    pub fn add_head_tag(&mut self, name: impl Into<String>) {
        self.add_tag(name, 0, 0);
    }

    /// Add an ancestor tag `distance` commits behind HEAD
    pub fn add_ancestor_tag(&mut self, name: impl Into<String>, distance: usize) {
        self.add_tag(name, distance, distance);
    }

    /// Add a tag on an unrelated branch: plain count positive, no ancestry path
    pub fn add_unrelated_tag(&mut self, name: impl Into<String>, count: usize) {
        self.add_tag(name, count, 0);
    }

    /// Add a tag with explicit plain and ancestry-path counts
    pub fn add_tag(&mut self, name: impl Into<String>, count: usize, ancestry_distance: usize) {
        self.tags.push(MockTag {
            name: name.into(),
            count,
            ancestry_distance,
        });
    }

    /// Set the abbreviated HEAD id
    pub fn set_short_id(&mut self, short_id: impl Into<String>) {
        self.short_id = short_id.into();
    }

    /// Set whether the working tree is clean
    pub fn set_clean(&mut self, clean: bool) {
        self.clean = clean;
    }

    /// Count queries issued so far, as `count <tag>` / `ancestry <tag>`
    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }

    fn find(&self, tag: &str) -> Result<&MockTag> {
        self.tags.iter().find(|t| t.name == tag).ok_or_else(|| {
            git2::Error::from_str(&format!("reference 'refs/tags/{}' not found", tag)).into()
        })
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.iter().map(|t| t.name.clone()).collect())
    }

    fn count_commits_since(&self, tag: &str) -> Result<usize> {
        self.queries.borrow_mut().push(format!("count {}", tag));
        Ok(self.find(tag)?.count)
    }

    fn count_ancestry_path_since(&self, tag: &str) -> Result<usize> {
        self.queries.borrow_mut().push(format!("ancestry {}", tag));
        Ok(self.find(tag)?.ancestry_distance)
    }

    fn short_head_id(&self) -> Result<String> {
        Ok(self.short_id.clone())
    }

    fn is_clean(&self) -> Result<bool> {
        Ok(self.clean)
    }
}
