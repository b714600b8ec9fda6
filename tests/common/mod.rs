//! Shared test utilities for scm-scope
//!
//! Real git repositories for adapter and CLI tests, plus recording test
//! doubles for the resolver's collaborators.

pub mod assertions;
pub mod doubles;
pub mod repository;
