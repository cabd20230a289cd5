//! Repository metadata via libgit2. Every lookup here is fail-soft: a
//! missing or broken repository leaves the defaults in place.

use crate::core::GitInfo;
use git2::Repository;
use log::debug;
use std::path::Path;

pub fn collect(root: &Path) -> GitInfo {
    let repo = match Repository::open(root) {
        Ok(repo) => repo,
        Err(err) => {
            debug!("no git repository at {}: {err}", root.display());
            return GitInfo::default();
        }
    };

    GitInfo {
        is_git_repo: true,
        branch_count: branch_count(&repo),
        commit_count: commit_count(&repo),
        last_commit: last_commit(&repo),
    }
}

fn branch_count(repo: &Repository) -> usize {
    repo.branches(None)
        .map(|branches| branches.filter(|b| b.is_ok()).count())
        .unwrap_or(0)
}

fn commit_count(repo: &Repository) -> usize {
    let walk = || -> Result<usize, git2::Error> {
        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;
        Ok(revwalk.filter(|oid| oid.is_ok()).count())
    };
    walk().unwrap_or(0)
}

fn last_commit(repo: &Repository) -> String {
    let lookup = || -> Result<String, git2::Error> {
        let commit = repo.head()?.peel_to_commit()?;
        let short = commit
            .as_object()
            .short_id()?
            .as_str()
            .unwrap_or_default()
            .to_string();
        Ok(format!("{short} {}", commit.summary().unwrap_or_default()))
    };
    lookup().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn non_repository_returns_defaults() {
        let dir = TempDir::new().unwrap();
        let info = collect(dir.path());
        assert!(!info.is_git_repo);
        assert_eq!(info.commit_count, 0);
        assert!(info.last_commit.is_empty());
    }

    #[test]
    fn fresh_repository_without_commits_is_fail_soft() {
        let dir = TempDir::new().unwrap();
        Repository::init(dir.path()).unwrap();
        let info = collect(dir.path());
        assert!(info.is_git_repo);
        // Unborn HEAD: counts stay at their defaults instead of erroring.
        assert_eq!(info.commit_count, 0);
        assert_eq!(info.branch_count, 0);
    }
}
