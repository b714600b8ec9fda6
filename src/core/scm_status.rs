//! Type-safe SCM file status enumeration.
//!
//! This module defines [`ScmFileStatus`], the status an SCM client reports for
//! each file touched relative to the repository baseline, and the conversions
//! from `git2` status flags and diff deltas.
//!
//! # Public API
//! - [`ScmFileStatus`]: Enumeration of all file status types
//! - [`default_include`]: The statuses kept by default (added and modified)

use crate::core::error::{Result, ScmScopeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a single file as reported by the SCM
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScmFileStatus {
    /// New file known to the SCM (A)
    Added,
    /// Modified file (M)
    Modified,
    /// Deleted file (D)
    Deleted,
    /// Renamed file (R)
    Renamed,
    /// Copied file (C)
    Copied,
    /// Unmerged/conflicted file (UU)
    Conflict,
    /// File the SCM does not track (??)
    Unknown,
}

impl ScmFileStatus {
    /// Convert git2 status flags into a single status.
    ///
    /// Staged state takes precedence over working tree state. Returns `None`
    /// for flags that describe an unchanged or ignored file.
    pub fn from_git2(flags: git2::Status) -> Option<ScmFileStatus> {
        if flags.contains(git2::Status::CONFLICTED) {
            return Some(ScmFileStatus::Conflict);
        }

        // Staged changes
        if flags.contains(git2::Status::INDEX_NEW) {
            return Some(ScmFileStatus::Added);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(ScmFileStatus::Deleted);
        }
        if flags.contains(git2::Status::INDEX_RENAMED) {
            return Some(ScmFileStatus::Renamed);
        }
        if flags.intersects(git2::Status::INDEX_MODIFIED | git2::Status::INDEX_TYPECHANGE) {
            return Some(ScmFileStatus::Modified);
        }

        // Unstaged changes
        if flags.contains(git2::Status::WT_NEW) {
            return Some(ScmFileStatus::Unknown);
        }
        if flags.contains(git2::Status::WT_DELETED) {
            return Some(ScmFileStatus::Deleted);
        }
        if flags.contains(git2::Status::WT_RENAMED) {
            return Some(ScmFileStatus::Renamed);
        }
        if flags.intersects(git2::Status::WT_MODIFIED | git2::Status::WT_TYPECHANGE) {
            return Some(ScmFileStatus::Modified);
        }

        None
    }

    /// Convert a git2 diff delta into a status
    pub fn from_delta(delta: git2::Delta) -> Option<ScmFileStatus> {
        match delta {
            git2::Delta::Added => Some(ScmFileStatus::Added),
            git2::Delta::Modified | git2::Delta::Typechange => Some(ScmFileStatus::Modified),
            git2::Delta::Deleted => Some(ScmFileStatus::Deleted),
            git2::Delta::Renamed => Some(ScmFileStatus::Renamed),
            git2::Delta::Copied => Some(ScmFileStatus::Copied),
            git2::Delta::Conflicted => Some(ScmFileStatus::Conflict),
            git2::Delta::Untracked | git2::Delta::Unreadable => Some(ScmFileStatus::Unknown),
            git2::Delta::Unmodified | git2::Delta::Ignored => None,
        }
    }

    /// Short status code, as git prints it
    pub fn as_str(&self) -> &'static str {
        match self {
            ScmFileStatus::Added => "A",
            ScmFileStatus::Modified => "M",
            ScmFileStatus::Deleted => "D",
            ScmFileStatus::Renamed => "R",
            ScmFileStatus::Copied => "C",
            ScmFileStatus::Conflict => "UU",
            ScmFileStatus::Unknown => "??",
        }
    }

    /// Lowercase name, also accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            ScmFileStatus::Added => "added",
            ScmFileStatus::Modified => "modified",
            ScmFileStatus::Deleted => "deleted",
            ScmFileStatus::Renamed => "renamed",
            ScmFileStatus::Copied => "copied",
            ScmFileStatus::Conflict => "conflict",
            ScmFileStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ScmFileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScmFileStatus {
    type Err = ScmScopeError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "added" | "a" => Ok(ScmFileStatus::Added),
            "modified" | "m" => Ok(ScmFileStatus::Modified),
            "deleted" | "d" => Ok(ScmFileStatus::Deleted),
            "renamed" | "r" => Ok(ScmFileStatus::Renamed),
            "copied" | "c" => Ok(ScmFileStatus::Copied),
            "conflict" | "uu" => Ok(ScmFileStatus::Conflict),
            "unknown" | "??" => Ok(ScmFileStatus::Unknown),
            _ => Err(ScmScopeError::invalid_status(value)),
        }
    }
}

/// Statuses mutation-tested when nothing else is configured
pub fn default_include() -> Vec<ScmFileStatus> {
    vec![ScmFileStatus::Added, ScmFileStatus::Modified]
}
