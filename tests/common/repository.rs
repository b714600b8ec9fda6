//! Git repository setup utilities
//!
//! Creates throwaway repositories driven by the `git` binary so the git2
//! adapter is exercised against real working trees.

#![allow(dead_code)]

use scm_scope::core::error::{Result, ScmScopeError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository. The TempDir must be kept alive for the duration of the
/// test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn git(repo_path: &Path, args: &[&str]) -> Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .map_err(ScmScopeError::Io)?;

    if !output.status.success() {
        return Err(ScmScopeError::runner_failed(
            format!("git {}", args.join(" ")),
            output.status.to_string(),
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    Ok(())
}

/// Sets up a fresh git repository with identity configured
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init", "--quiet"])?;
    git(&repo_path, &["config", "user.name", "Test User"])?;
    git(&repo_path, &["config", "user.email", "test@example.com"])?;
    git(&repo_path, &["config", "commit.gpgsign", "false"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a repository whose first commit contains `src/lib.rs` and
/// `src/old.rs`
pub fn setup_test_repo_with_sources() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "src/lib.rs", "pub fn answer() -> u32 { 42 }\n")?;
    create_file(&repo.path, "src/old.rs", "pub fn old() {}\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

/// Creates a file, and its parent directories, with the given content
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> Result<()> {
    let path = repo_path.join(filename);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

/// Adds a path to the git index ("." for everything)
pub fn git_add(repo_path: &Path, filename: &str) -> Result<()> {
    git(repo_path, &["add", "--all", filename])
}

/// Renames a tracked file and stages the rename
pub fn git_mv(repo_path: &Path, from: &str, to: &str) -> Result<()> {
    git(repo_path, &["mv", from, to])
}

pub fn git_commit(repo_path: &Path, message: &str) -> Result<()> {
    git(repo_path, &["commit", "--quiet", "-m", message])
}

/// Writes a project descriptor pointing at a git connection
pub fn write_project_descriptor(repo_path: &Path) -> Result<()> {
    create_file(
        repo_path,
        "scm-scope.json",
        r#"{
            "scm": {
                "connection": "scm:git:https://example.com/project.git",
                "developerConnection": "scm:git:git@example.com:project.git"
            },
            "build": { "sourceDirectory": "src", "outputDirectory": "target" }
        }"#,
    )
}
