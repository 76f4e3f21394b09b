// Shared helpers for building throwaway git repositories
#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn init_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    (dir, repo)
}

fn signature() -> Signature<'static> {
    Signature::now("Test", "test@example.com").unwrap()
}

/// Write `message` into `version.txt` and commit it on HEAD
pub fn commit(repo: &Repository, message: &str) -> Oid {
    let workdir = repo.workdir().unwrap();
    fs::write(workdir.join("version.txt"), message).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new("version.txt")).unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

    let parents: Vec<_> = repo
        .head()
        .ok()
        .and_then(|h| h.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<_> = parents.iter().collect();

    let sig = signature();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
}

/// Commit `count` times on HEAD, returning the last commit
pub fn commit_n(repo: &Repository, prefix: &str, count: usize) -> Oid {
    let mut last = None;
    for i in 0..count {
        last = Some(commit(repo, &format!("{} {}", prefix, i)));
    }
    last.unwrap()
}

/// Commit on top of `parent` without moving HEAD or touching the work tree
pub fn side_commit(repo: &Repository, parent: Oid, message: &str) -> Oid {
    let parent = repo.find_commit(parent).unwrap();
    let tree = parent.tree().unwrap();
    let sig = signature();
    repo.commit(None, &sig, &sig, message, &tree, &[&parent])
        .unwrap()
}

/// Merge `other` into HEAD keeping HEAD's tree
pub fn merge_commit(repo: &Repository, other: Oid) -> Oid {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    let other = repo.find_commit(other).unwrap();
    let tree = head.tree().unwrap();
    let sig = signature();
    repo.commit(Some("HEAD"), &sig, &sig, "merge", &tree, &[&head, &other])
        .unwrap()
}

pub fn tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

pub fn annotated_tag(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag(name, &object, &signature(), name, false).unwrap();
}

pub fn short_head(repo: &Repository) -> String {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    head.as_object()
        .short_id()
        .unwrap()
        .as_str()
        .unwrap()
        .to_string()
}

pub fn make_dirty(dir: &TempDir) {
    fs::write(dir.path().join("scratch.txt"), "uncommitted").unwrap();
}
