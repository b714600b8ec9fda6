//! Change-set resolution: from an SCM connection to a scoped mutation-testing run.
//!
//! [`ChangeSetResolver::execute`] performs one all-or-nothing resolution:
//! 1. select the connection URL from the project's SCM descriptor
//! 2. bind it to a repository through the [`ScmManager`]
//! 3. query file status under the SCM root directory
//! 4. keep the entries whose status is in the include set, in SCM order
//! 5. hand the scoped [`MutationOptions`] to the [`ExecutionStrategy`]
//!
//! An empty change set skips step 5 and reports [`Outcome::NothingToTest`].

use crate::core::{
    connection::{select_connection_url, ConnectionType},
    error::Result,
    options::MutationOptions,
    project::ProjectModel,
    scm::{ScmFile, ScmFileSet, ScmManager},
    scm_status::{default_include, ScmFileStatus},
    strategy::ExecutionStrategy,
};
use std::path::PathBuf;

/// Result of a successful resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The strategy ran against these files
    Executed { files: Vec<PathBuf> },
    /// No file survived filtering; the strategy was not invoked
    NothingToTest,
}

pub struct ChangeSetResolver<'a, M: ScmManager, S: ExecutionStrategy> {
    manager: &'a M,
    strategy: &'a S,
    connection_type: ConnectionType,
    scm_root_dir: PathBuf,
    include: Vec<ScmFileStatus>,
    analyse_last_commit: bool,
    report_dir: Option<PathBuf>,
}

impl<'a, M: ScmManager, S: ExecutionStrategy> ChangeSetResolver<'a, M, S> {
    pub fn new(manager: &'a M, strategy: &'a S, scm_root_dir: impl Into<PathBuf>) -> Self {
        Self {
            manager,
            strategy,
            connection_type: ConnectionType::default(),
            scm_root_dir: scm_root_dir.into(),
            include: default_include(),
            analyse_last_commit: false,
            report_dir: None,
        }
    }

    pub fn with_connection_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = connection_type;
        self
    }

    /// Statuses to mutation-test. An empty list keeps the default.
    pub fn with_include(mut self, include: Vec<ScmFileStatus>) -> Self {
        if !include.is_empty() {
            self.include = include;
        }
        self
    }

    /// Use the files of the last commit instead of the working tree status
    pub fn with_last_commit(mut self, analyse_last_commit: bool) -> Self {
        self.analyse_last_commit = analyse_last_commit;
        self
    }

    pub fn with_report_dir(mut self, report_dir: Option<PathBuf>) -> Self {
        self.report_dir = report_dir;
        self
    }

    /// Added and modified paths, or whatever the include set names
    pub fn find_changed_paths(&self, project: &ProjectModel) -> Result<Vec<PathBuf>> {
        let url = select_connection_url(project.scm.as_ref(), self.connection_type)?;
        log::debug!("Using {} '{url}'", self.connection_type);

        let repository = self.manager.make_repository(url)?;
        let file_set = ScmFileSet::new(&self.scm_root_dir);

        let files = if self.analyse_last_commit {
            self.manager.last_commit_changes(&repository, &file_set)?
        } else {
            self.manager.status(&repository, &file_set)?
        };

        Ok(filter_changes(files, &self.include))
    }

    pub fn execute(&self, project: &ProjectModel) -> Result<Outcome> {
        let files = self.find_changed_paths(project)?;

        if files.is_empty() {
            log::debug!("Change set is empty, skipping execution");
            return Ok(Outcome::NothingToTest);
        }

        for file in &files {
            log::info!("Will mutate changed file {}", file.display());
        }

        let root = &self.scm_root_dir;
        let mut options = MutationOptions::from_build(root, &project.build);
        if let Some(report_dir) = &self.report_dir {
            options = options.with_report_dir(report_dir);
        }
        let options = options.scoped_to(files.clone());

        self.strategy.execute(root, &options)?;
        Ok(Outcome::Executed { files })
    }
}

/// Keep the paths whose status is in `include`, preserving order
pub fn filter_changes(files: Vec<ScmFile>, include: &[ScmFileStatus]) -> Vec<PathBuf> {
    files
        .into_iter()
        .filter(|file| {
            let keep = include.contains(&file.status);
            if !keep {
                log::debug!("Skipping {} ({})", file.path.display(), file.status.name());
            }
            keep
        })
        .map(|file| file.path)
        .collect()
}
