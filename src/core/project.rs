//! Project model: the SCM descriptor and build paths a run is configured from.
//!
//! The model is read from a JSON file (`scm-scope.json` by default):
//!
//! ```json
//! {
//!   "scm": {
//!     "connection": "scm:git:https://github.com/org/project.git",
//!     "developerConnection": "scm:git:git@github.com:org/project.git"
//!   },
//!   "build": { "sourceDirectory": "src", "outputDirectory": "target" }
//! }
//! ```

use crate::core::{connection::ScmConnection, error::ScmScopeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT_FILE: &str = "scm-scope.json";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BuildPaths {
    pub source_directory: PathBuf,
    pub output_directory: PathBuf,
}

impl Default for BuildPaths {
    fn default() -> Self {
        Self {
            source_directory: PathBuf::from("src"),
            output_directory: PathBuf::from("target"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectModel {
    #[serde(default)]
    pub scm: Option<ScmConnection>,
    #[serde(default)]
    pub build: BuildPaths,
}

impl ProjectModel {
    /// Load the model from `path`, or the default model if the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, ScmScopeError> {
        if !path.exists() {
            log::debug!(
                "No project descriptor at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ScmScopeError::project_load_failed(path, e))?;
        let model: Self = serde_json::from_str(&content)
            .map_err(|e| ScmScopeError::project_load_failed(path, e))?;

        log::debug!("Loaded project descriptor from {}", path.display());
        Ok(model)
    }

    /// Override descriptor URLs, creating the descriptor if needed
    pub fn with_connections(
        mut self,
        connection: Option<String>,
        developer_connection: Option<String>,
    ) -> Self {
        if connection.is_none() && developer_connection.is_none() {
            return self;
        }

        let scm = self.scm.get_or_insert_with(ScmConnection::default);
        if connection.is_some() {
            scm.connection = connection;
        }
        if developer_connection.is_some() {
            scm.developer_connection = developer_connection;
        }
        self
    }
}
