//! Source-control client capability and its git-backed implementation.
//!
//! The resolver only talks to source control through the [`ScmManager`] trait:
//! bind a connection URL to an [`ScmRepository`], then ask for the status of the
//! files under an [`ScmFileSet`]. [`GitScmManager`] implements it with `git2`
//! for `scm:git:` URLs.
//!
//! # Public API
//! - [`ScmManager`]: Capability trait consumed by the resolver
//! - [`ScmRepository`]: A parsed `scm:<provider>:<location>` URL
//! - [`ScmFileSet`]: Base directory a status query is scoped to
//! - [`ScmFile`]: One status entry
//! - [`GitScmManager`]: `git2` adapter

use crate::core::{
    error::{Result, ScmScopeError},
    scm_status::ScmFileStatus,
};
use git2::{DiffOptions, Repository, StatusOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A repository handle produced from a connection URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScmRepository {
    pub url: String,
    pub provider: String,
    pub location: String,
}

impl ScmRepository {
    /// Parse an `scm:<provider>:<location>` URL
    pub fn parse(url: &str) -> Result<Self> {
        let rest = url
            .trim()
            .strip_prefix("scm")
            .ok_or_else(|| ScmScopeError::invalid_scm_url(url))?;

        // The character after "scm" is the delimiter, ':' or '|'
        let delimiter = match rest.chars().next() {
            Some(c @ (':' | '|')) => c,
            _ => return Err(ScmScopeError::invalid_scm_url(url)),
        };
        let (provider, location) = rest[1..]
            .split_once(delimiter)
            .ok_or_else(|| ScmScopeError::invalid_scm_url(url))?;

        if provider.is_empty() || location.is_empty() {
            return Err(ScmScopeError::invalid_scm_url(url));
        }

        Ok(Self {
            url: url.trim().to_string(),
            provider: provider.to_ascii_lowercase(),
            location: location.to_string(),
        })
    }
}

/// The directory a status query covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScmFileSet {
    pub basedir: PathBuf,
}

impl ScmFileSet {
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
        }
    }
}

/// A file touched relative to the repository baseline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScmFile {
    pub path: PathBuf,
    pub status: ScmFileStatus,
}

impl ScmFile {
    pub fn new(path: impl Into<PathBuf>, status: ScmFileStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Source-control client capability
pub trait ScmManager {
    /// Bind a connection URL to a repository handle
    fn make_repository(&self, url: &str) -> Result<ScmRepository>;

    /// Status of every changed file under `file_set`, in SCM order
    fn status(&self, repository: &ScmRepository, file_set: &ScmFileSet) -> Result<Vec<ScmFile>>;

    /// Files touched by the most recent commit.
    ///
    /// Clients without commit history fall back to working tree status.
    fn last_commit_changes(
        &self,
        repository: &ScmRepository,
        file_set: &ScmFileSet,
    ) -> Result<Vec<ScmFile>> {
        self.status(repository, file_set)
    }
}

/// `git2`-backed [`ScmManager`] for `scm:git:` connections
#[derive(Debug, Default, Clone, Copy)]
pub struct GitScmManager;

impl GitScmManager {
    pub fn new() -> Self {
        Self
    }

    fn open(&self, repository: &ScmRepository, file_set: &ScmFileSet) -> Result<Repository> {
        Repository::discover(&file_set.basedir)
            .map_err(|e| ScmScopeError::scm_connectivity(&repository.url, e))
    }

    /// Path of `file_set.basedir` relative to the work tree, if it is below it
    fn scope_prefix(repo: &Repository, file_set: &ScmFileSet) -> Result<Option<String>> {
        let Some(workdir) = repo.workdir() else {
            return Ok(None);
        };
        let workdir = workdir.canonicalize()?;
        let basedir = file_set.basedir.canonicalize()?;

        let relative = match basedir.strip_prefix(&workdir) {
            Ok(relative) => relative,
            Err(_) => return Ok(None),
        };
        if relative.as_os_str().is_empty() {
            return Ok(None);
        }

        let prefix = relative.to_str().ok_or(ScmScopeError::InvalidUtf8Path)?;
        Ok(Some(prefix.replace('\\', "/")))
    }
}

/// Re-base a work-tree-relative `path` onto the file set's base directory
fn scoped_path(path: &Path, prefix: Option<&str>) -> PathBuf {
    match prefix {
        Some(prefix) => path
            .strip_prefix(prefix)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf()),
        None => path.to_path_buf(),
    }
}

impl ScmManager for GitScmManager {
    fn make_repository(&self, url: &str) -> Result<ScmRepository> {
        let repository = ScmRepository::parse(url)?;
        if repository.provider != "git" {
            return Err(ScmScopeError::unsupported_scm_provider(repository.provider));
        }
        log::debug!("Bound SCM repository at {}", repository.location);
        Ok(repository)
    }

    fn status(&self, repository: &ScmRepository, file_set: &ScmFileSet) -> Result<Vec<ScmFile>> {
        let repo = self.open(repository, file_set)?;
        let prefix = Self::scope_prefix(&repo, file_set)?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);
        opts.renames_head_to_index(true);
        if let Some(prefix) = &prefix {
            log::debug!("Restricting status to '{prefix}'");
            opts.pathspec(prefix.as_str());
        }

        let statuses = repo
            .statuses(Some(&mut opts))
            .map_err(|e| ScmScopeError::scm_connectivity(&repository.url, e))?;

        let mut files = Vec::new();
        for entry in statuses.iter() {
            let Some(status) = ScmFileStatus::from_git2(entry.status()) else {
                continue;
            };
            // Renamed entries are reported under their new name
            let path = match entry.head_to_index().and_then(|delta| delta.new_file().path()) {
                Some(path) => path,
                None => Path::new(entry.path().ok_or(ScmScopeError::InvalidUtf8Path)?),
            };
            files.push(ScmFile::new(scoped_path(path, prefix.as_deref()), status));
        }

        log::debug!("SCM reported {} changed files", files.len());
        Ok(files)
    }

    fn last_commit_changes(
        &self,
        repository: &ScmRepository,
        file_set: &ScmFileSet,
    ) -> Result<Vec<ScmFile>> {
        let repo = self.open(repository, file_set)?;
        let prefix = Self::scope_prefix(&repo, file_set)?;

        let head = repo
            .head()
            .and_then(|head| head.peel_to_commit())
            .map_err(|e| ScmScopeError::scm_connectivity(&repository.url, e))?;
        let tree = head.tree()?;
        // Root commits are diffed against the empty tree
        let parent_tree = if head.parent_count() > 0 {
            Some(head.parent(0)?.tree()?)
        } else {
            None
        };

        let mut opts = DiffOptions::new();
        if let Some(prefix) = &prefix {
            opts.pathspec(prefix.as_str());
        }

        let mut diff =
            repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), Some(&mut opts))?;
        diff.find_similar(None)?;

        let mut files = Vec::new();
        for delta in diff.deltas() {
            let Some(status) = ScmFileStatus::from_delta(delta.status()) else {
                continue;
            };
            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .ok_or(ScmScopeError::InvalidUtf8Path)?;
            files.push(ScmFile::new(scoped_path(path, prefix.as_deref()), status));
        }

        log::debug!(
            "Last commit {} touched {} files",
            head.id(),
            files.len()
        );
        Ok(files)
    }
}
