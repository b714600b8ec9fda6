//! Execution strategies: the collaborators that perform the mutation-testing run.
//!
//! The resolver hands every run to an [`ExecutionStrategy`]. Two are provided:
//! - [`CommandStrategy`] runs an external mutation-testing command with the
//!   change set appended to its arguments
//! - [`PlanPrinter`] prints the execution request as JSON without running anything

use crate::core::{
    error::{Result, ScmScopeError},
    options::MutationOptions,
};
use serde::Serialize;
use std::path::Path;
use std::process::{Command, Stdio};

const STDERR_TAIL_LINES: usize = 20;

/// Performs a mutation-testing run for a root directory and configuration
pub trait ExecutionStrategy {
    fn execute(&self, root: &Path, options: &MutationOptions) -> Result<()>;
}

/// What [`CommandStrategy`] passes to the runner for each target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetArg {
    /// Changed file paths
    #[default]
    Files,
    /// Dotted target patterns derived from the source directory
    Patterns,
}

/// Runs an external mutation-testing command in the root directory
#[derive(Debug, Clone)]
pub struct CommandStrategy {
    program: String,
    args: Vec<String>,
    target_flag: Option<String>,
    target_arg: TargetArg,
}

impl CommandStrategy {
    /// Build from a command line, program first
    pub fn from_command_line(command: &[String]) -> Result<Self> {
        let (program, args) = command.split_first().ok_or(ScmScopeError::MissingRunner)?;
        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            target_flag: None,
            target_arg: TargetArg::default(),
        })
    }

    /// Prefix every target with `flag`, e.g. `--file`
    pub fn with_target_flag(mut self, flag: Option<String>) -> Self {
        self.target_flag = flag;
        self
    }

    pub fn with_target_arg(mut self, target_arg: TargetArg) -> Self {
        self.target_arg = target_arg;
        self
    }

    /// The command that [`ExecutionStrategy::execute`] would spawn
    pub fn build_command(&self, root: &Path, options: &MutationOptions) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(root);

        let targets: Vec<String> = match self.target_arg {
            TargetArg::Files => options
                .target_files
                .iter()
                .map(|path| path.to_string_lossy().into_owned())
                .collect(),
            TargetArg::Patterns => options.target_patterns.clone(),
        };

        for target in targets {
            if let Some(flag) = &self.target_flag {
                cmd.arg(flag);
            }
            cmd.arg(target);
        }

        cmd
    }
}

impl ExecutionStrategy for CommandStrategy {
    fn execute(&self, root: &Path, options: &MutationOptions) -> Result<()> {
        let mut cmd = self.build_command(root, options);
        log::debug!("Running mutation runner: {cmd:?}");

        let output = cmd.stderr(Stdio::piped()).spawn()?.wait_with_output()?;
        let stderr = String::from_utf8_lossy(&output.stderr);
        eprint!("{stderr}");

        if !output.status.success() {
            return Err(ScmScopeError::runner_failed(
                &self.program,
                output.status.to_string(),
                stderr_tail(&stderr),
            ));
        }

        log::info!("Mutation runner '{}' finished", self.program);
        Ok(())
    }
}

/// Last few lines of the runner's stderr, for the error message
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim_end().lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[derive(Serialize)]
struct ExecutionPlan<'a> {
    root: &'a Path,
    options: &'a MutationOptions,
}

/// Prints the execution request as pretty JSON instead of running it
#[derive(Debug, Default, Clone, Copy)]
pub struct PlanPrinter;

impl PlanPrinter {
    pub fn render(&self, root: &Path, options: &MutationOptions) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ExecutionPlan { root, options })?)
    }
}

impl ExecutionStrategy for PlanPrinter {
    fn execute(&self, root: &Path, options: &MutationOptions) -> Result<()> {
        println!("{}", self.render(root, options)?);
        Ok(())
    }
}
