//! CLI Adapter.

mod deploy;
mod init;
mod start;

use crate::domain::AppError;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `GIT_ENV_LOG=debug`).
const LOG_ENV: &str = "GIT_ENV_LOG";

#[derive(Parser)]
#[command(name = "git-env", bin_name = "git env")]
#[command(version)]
#[command(
    about = "Feature branch workflow across production and environment branches",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure which ENV branches are being used
    #[clap(visible_alias = "i")]
    Init,
    /// Show git-env's version
    Version,
    /// Start a new feature branch off the production branch
    #[clap(visible_alias = "s")]
    Start {
        /// Name of the new feature branch
        branch_name: String,
    },
    /// Deploy a feature branch to an ENV branch
    #[clap(visible_alias = "d")]
    Deploy {
        /// Environment branch to deploy into
        env_branch: String,
        /// Feature branch to deploy (defaults to the current branch)
        feature_branch: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let touches_branches =
        matches!(cli.command, Some(Commands::Start { .. } | Commands::Deploy { .. }));

    let result: Result<(), AppError> = match cli.command {
        // Bare `git env` behaves like `git env help`.
        None => Cli::command().print_help().map_err(AppError::from),
        Some(Commands::Init) => init::run_init(),
        Some(Commands::Version) => {
            println!("git-env version: {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Commands::Start { branch_name }) => start::run_start(&branch_name),
        Some(Commands::Deploy { env_branch, feature_branch }) => {
            deploy::run_deploy(&env_branch, feature_branch.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if touches_branches && !e.is_precondition() {
            eprintln!(
                "The working tree may be left on an intermediate branch. Fix the problem and re-run."
            );
        }
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
