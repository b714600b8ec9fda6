//! Core functionality for scm-scope.
//!
//! This module provides the building blocks for change-set resolution: SCM
//! connection selection, status querying, filtering, and delegation to an
//! execution strategy.

pub mod connection;
pub mod error;
pub mod options;
pub mod output;
pub mod project;
pub mod resolver;
pub mod scm;
pub mod scm_status;
pub mod strategy;

// === Error handling ===
pub use error::{Result, ScmScopeError};

// === Connection selection ===
// Descriptor of the two SCM URLs and the flag choosing between them
pub use connection::{select_connection_url, ConnectionType, ScmConnection};

// === SCM client ===
// Capability trait plus the git2-backed adapter
pub use scm::{GitScmManager, ScmFile, ScmFileSet, ScmManager, ScmRepository};
pub use scm_status::{default_include, ScmFileStatus};

// === Project model and run configuration ===
pub use options::{target_pattern, MutationOptions};
pub use project::{BuildPaths, ProjectModel, DEFAULT_PROJECT_FILE};

// === Execution ===
pub use resolver::{filter_changes, ChangeSetResolver, Outcome};
pub use strategy::{CommandStrategy, ExecutionStrategy, PlanPrinter, TargetArg};

// === Output formatting ===
pub use output::{print_change_set, print_error, print_info, print_success};
