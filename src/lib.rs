//! scm-scope - restrict mutation testing to the files source control reports as changed.
//!
//! The library resolves a change set from an SCM connection descriptor and hands
//! it to an execution strategy that performs the actual mutation-testing run.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Change-set resolution ([`ChangeSetResolver`])
//! - Collaborator traits ([`ScmManager`], [`ExecutionStrategy`]) and their adapters
//! - Project model and mutation options
//! - Error handling and result types

pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Connection selection
    ConnectionType,
    ScmConnection,
    // Resolution
    ChangeSetResolver,
    Outcome,
    // SCM client
    GitScmManager,
    ScmFile,
    ScmFileSet,
    ScmFileStatus,
    ScmManager,
    ScmRepository,
    // Execution
    CommandStrategy,
    ExecutionStrategy,
    PlanPrinter,
    TargetArg,
    // Configuration
    BuildPaths,
    MutationOptions,
    ProjectModel,
    // Error handling
    Result,
    ScmScopeError,
};
