//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`ScmScopeError`] which covers every way a change-set
//! resolution can fail. It uses `thiserror` for the error definitions and
//! offers constructors for the variants that carry context.
//!
//! # Public API
//! - [`ScmScopeError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, ScmScopeError>`
//!
//! # Error Categories
//! - **Configuration**: No SCM descriptor, unset connection, bad flag values
//! - **Connectivity**: Repository binding and status query failures
//! - **Execution**: Mutation runner failures, I/O and JSON errors

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for scm-scope
#[derive(Error, Debug)]
pub enum ScmScopeError {
    // Configuration errors
    #[error("No SCM Connection configured.")]
    NoScmConnection,

    #[error("SCM Connection is not set.")]
    ConnectionNotSet,

    #[error("Invalid connection type: '{value}'. Use 'connection' or 'developerconnection'")]
    InvalidConnectionType { value: String },

    #[error("Invalid file status: '{value}'. Use one of: added, modified, deleted, renamed, copied, conflict, unknown")]
    InvalidStatus { value: String },

    #[error("No mutation runner given. Pass one after '--' or use --dry-run")]
    MissingRunner,

    #[error("Failed to load project descriptor '{path}': {source}")]
    ProjectLoadFailed {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // Connectivity errors
    #[error("Invalid SCM URL: '{url}'. Expected format: scm:<provider>:<location>")]
    InvalidScmUrl { url: String },

    #[error("Unsupported SCM provider '{provider}' (only 'git' is supported)")]
    UnsupportedScmProvider { provider: String },

    #[error("Cannot reach SCM repository '{url}': {source}")]
    ScmConnectivity { url: String, source: git2::Error },

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid UTF-8 path in repository")]
    InvalidUtf8Path,

    // Execution errors
    #[error("Mutation runner '{program}' failed ({status}): {stderr}")]
    RunnerFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using ScmScopeError
pub type Result<T> = std::result::Result<T, ScmScopeError>;

impl ScmScopeError {
    /// Create an invalid connection type error
    pub fn invalid_connection_type(value: impl Into<String>) -> Self {
        Self::InvalidConnectionType {
            value: value.into(),
        }
    }

    /// Create an invalid status error
    pub fn invalid_status(value: impl Into<String>) -> Self {
        Self::InvalidStatus {
            value: value.into(),
        }
    }

    /// Create a project load error
    pub fn project_load_failed<E>(path: impl Into<PathBuf>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ProjectLoadFailed {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid SCM URL error
    pub fn invalid_scm_url(url: impl Into<String>) -> Self {
        Self::InvalidScmUrl { url: url.into() }
    }

    /// Create an unsupported provider error
    pub fn unsupported_scm_provider(provider: impl Into<String>) -> Self {
        Self::UnsupportedScmProvider {
            provider: provider.into(),
        }
    }

    /// Create a connectivity error carrying the underlying git2 cause
    pub fn scm_connectivity(url: impl Into<String>, source: git2::Error) -> Self {
        Self::ScmConnectivity {
            url: url.into(),
            source,
        }
    }

    /// Create a runner failed error
    pub fn runner_failed(
        program: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::RunnerFailed {
            program: program.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// True for errors caused by missing or invalid configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::NoScmConnection
                | Self::ConnectionNotSet
                | Self::InvalidConnectionType { .. }
                | Self::InvalidStatus { .. }
                | Self::MissingRunner
                | Self::ProjectLoadFailed { .. }
        )
    }
}
