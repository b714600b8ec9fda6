use clap::Parser;
use scm_scope::core::{
    error::Result, print_change_set, print_error, print_info, print_success, ChangeSetResolver,
    CommandStrategy, ConnectionType, ExecutionStrategy, GitScmManager, Outcome, PlanPrinter,
    ProjectModel, ScmFileStatus, ScmScopeError, TargetArg, DEFAULT_PROJECT_FILE,
};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "scm-scope")]
#[command(about = "Mutation test only the files your SCM reports as added or modified")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Project descriptor with the SCM connection and build paths
    #[arg(long, default_value = DEFAULT_PROJECT_FILE)]
    project: PathBuf,

    /// Read-only SCM URL (overrides the descriptor), e.g. scm:git:https://host/repo.git
    #[arg(long)]
    connection: Option<String>,

    /// Developer SCM URL (overrides the descriptor)
    #[arg(long)]
    developer_connection: Option<String>,

    /// Which URL to use: connection or developerconnection
    #[arg(long, default_value = "developerconnection")]
    connection_type: ConnectionType,

    /// Directory whose status is queried [default: current directory]
    #[arg(long)]
    scm_root_dir: Option<PathBuf>,

    /// Source directory (overrides the descriptor)
    #[arg(long)]
    source_dir: Option<PathBuf>,

    /// Build output directory (overrides the descriptor)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Where the mutation runner writes its reports
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// File statuses to mutation test (e.g. "added,modified")
    #[arg(long, value_delimiter = ',')]
    include: Vec<ScmFileStatus>,

    /// Use the files touched by the last commit instead of the working tree
    #[arg(long)]
    last_commit: bool,

    /// Print the execution plan as JSON instead of running anything
    #[arg(long)]
    dry_run: bool,

    /// Flag placed before every target passed to the runner (e.g. "--file")
    #[arg(long)]
    target_flag: Option<String>,

    /// Pass dotted target patterns instead of file paths to the runner
    #[arg(long)]
    target_patterns: bool,

    /// Mutation runner command, e.g. -- cargo mutants
    #[arg(last = true)]
    runner: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    match run(&cli) {
        Ok(Outcome::Executed { files }) => {
            print_change_set(&files);
            print_success(&format!("Mutation tested {} changed files", files.len()));
        }
        Ok(Outcome::NothingToTest) => {
            print_info("No modified files found - nothing to mutation test");
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(exit_code(&e));
        }
    }
}

/// 2 for configuration mistakes (as clap does for usage errors), 1 otherwise
fn exit_code(error: &ScmScopeError) -> i32 {
    if error.is_configuration_error() {
        2
    } else {
        1
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let root = match &cli.scm_root_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };

    let project = load_project(cli, &root)?;
    let manager = GitScmManager::new();

    if cli.dry_run {
        resolve(cli, &root, &project, &manager, &PlanPrinter)
    } else {
        let target_arg = if cli.target_patterns {
            TargetArg::Patterns
        } else {
            TargetArg::Files
        };
        let strategy = CommandStrategy::from_command_line(&cli.runner)?
            .with_target_flag(cli.target_flag.clone())
            .with_target_arg(target_arg);
        resolve(cli, &root, &project, &manager, &strategy)
    }
}

fn load_project(cli: &Cli, root: &Path) -> Result<ProjectModel> {
    let path = if cli.project.is_absolute() {
        cli.project.clone()
    } else {
        root.join(&cli.project)
    };

    let mut project = ProjectModel::load_or_default(&path)?
        .with_connections(cli.connection.clone(), cli.developer_connection.clone());

    if let Some(source_dir) = &cli.source_dir {
        project.build.source_directory = source_dir.clone();
    }
    if let Some(output_dir) = &cli.output_dir {
        project.build.output_directory = output_dir.clone();
    }

    Ok(project)
}

fn resolve<S: ExecutionStrategy>(
    cli: &Cli,
    root: &Path,
    project: &ProjectModel,
    manager: &GitScmManager,
    strategy: &S,
) -> Result<Outcome> {
    ChangeSetResolver::new(manager, strategy, root)
        .with_connection_type(cli.connection_type)
        .with_include(cli.include.clone())
        .with_last_commit(cli.last_commit)
        .with_report_dir(cli.report_dir.clone())
        .execute(project)
}
