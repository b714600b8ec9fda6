//! Recording test doubles for the resolver's collaborators

#![allow(dead_code)]

use scm_scope::core::{
    error::{Result, ScmScopeError},
    ExecutionStrategy, MutationOptions, ScmFile, ScmFileSet, ScmManager, ScmRepository,
};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// SCM client returning canned entries and remembering every call
#[derive(Default)]
pub struct FakeScmManager {
    pub entries: Vec<ScmFile>,
    pub last_commit_entries: Vec<ScmFile>,
    pub fail_binding: bool,
    pub fail_status: bool,
    pub bound_urls: RefCell<Vec<String>>,
    pub queried_sets: RefCell<Vec<ScmFileSet>>,
}

impl FakeScmManager {
    pub fn returning(entries: Vec<ScmFile>) -> Self {
        Self {
            entries,
            ..Default::default()
        }
    }

    pub fn bound_urls(&self) -> Vec<String> {
        self.bound_urls.borrow().clone()
    }
}

impl ScmManager for FakeScmManager {
    fn make_repository(&self, url: &str) -> Result<ScmRepository> {
        self.bound_urls.borrow_mut().push(url.to_string());
        if self.fail_binding {
            return Err(ScmScopeError::scm_connectivity(
                url,
                git2::Error::from_str("authentication required"),
            ));
        }
        Ok(ScmRepository {
            url: url.to_string(),
            provider: "fake".to_string(),
            location: url.to_string(),
        })
    }

    fn status(&self, repository: &ScmRepository, file_set: &ScmFileSet) -> Result<Vec<ScmFile>> {
        self.queried_sets.borrow_mut().push(file_set.clone());
        if self.fail_status {
            return Err(ScmScopeError::scm_connectivity(
                &repository.url,
                git2::Error::from_str("connection reset"),
            ));
        }
        Ok(self.entries.clone())
    }

    fn last_commit_changes(
        &self,
        _repository: &ScmRepository,
        file_set: &ScmFileSet,
    ) -> Result<Vec<ScmFile>> {
        self.queried_sets.borrow_mut().push(file_set.clone());
        Ok(self.last_commit_entries.clone())
    }
}

/// Execution strategy recording each request instead of running anything
#[derive(Default)]
pub struct RecordingStrategy {
    pub calls: RefCell<Vec<(PathBuf, MutationOptions)>>,
    pub fail: bool,
}

impl RecordingStrategy {
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn only_call(&self) -> (PathBuf, MutationOptions) {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one execution");
        calls[0].clone()
    }
}

impl ExecutionStrategy for RecordingStrategy {
    fn execute(&self, root: &Path, options: &MutationOptions) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((root.to_path_buf(), options.clone()));
        if self.fail {
            return Err(ScmScopeError::runner_failed("recording", "exit status: 1", ""));
        }
        Ok(())
    }
}
