//! Mutation-testing configuration handed to the execution strategy.
//!
//! [`MutationOptions`] starts from the project's build paths and is then scoped
//! to a change set. Scoping records the changed files as given and derives a
//! target pattern for every changed file that lives under the source directory:
//! `src/foo/bar.rs` with source directory `src` becomes `foo.bar*`.

use crate::core::project::BuildPaths;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_REPORT_DIR: &str = "target/mutation-reports";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationOptions {
    pub source_dirs: Vec<PathBuf>,
    pub output_dir: PathBuf,
    pub report_dir: PathBuf,
    pub target_files: Vec<PathBuf>,
    pub target_patterns: Vec<String>,
    pub target_tests: Vec<String>,
}

impl MutationOptions {
    /// Base configuration for a project rooted at `root`.
    ///
    /// Build paths below `root` are stored relative to it.
    pub fn from_build(root: &Path, build: &BuildPaths) -> Self {
        Self {
            source_dirs: vec![relative_to(root, &build.source_directory)],
            output_dir: relative_to(root, &build.output_directory),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            target_files: Vec::new(),
            target_patterns: Vec::new(),
            target_tests: Vec::new(),
        }
    }

    pub fn with_report_dir(mut self, report_dir: impl Into<PathBuf>) -> Self {
        self.report_dir = report_dir.into();
        self
    }

    /// Restrict the run to `files`, keeping their order
    pub fn scoped_to(mut self, files: Vec<PathBuf>) -> Self {
        let mut patterns: Vec<String> = Vec::new();
        for file in &files {
            let pattern = self
                .source_dirs
                .iter()
                .find_map(|source_dir| target_pattern(source_dir, file));
            match pattern {
                Some(pattern) if !patterns.contains(&pattern) => patterns.push(pattern),
                Some(_) => {}
                None => log::debug!(
                    "{} is outside the source directories, no target pattern",
                    file.display()
                ),
            }
        }

        self.target_files = files;
        self.target_tests = patterns.clone();
        self.target_patterns = patterns;
        self
    }
}

/// Dotted, glob-suffixed target name for `file` if it lives under `source_dir`
pub fn target_pattern(source_dir: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(source_dir).ok()?;
    let stem = relative.with_extension("");

    let parts: Vec<&str> = stem
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        return None;
    }
    Some(format!("{}*", parts.join(".")))
}

fn relative_to(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
