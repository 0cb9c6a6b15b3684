//! CLI Adapter.

use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::app::api::{self, RerunOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "runctl")]
#[command(version)]
#[command(about = "Rerun GitHub Actions workflow runs and jobs", long_about = None)]
struct Cli {
    /// Select another repository using the [HOST/]OWNER/REPO format
    #[arg(short = 'R', long, global = true, env = "GH_REPO", value_name = "[HOST/]OWNER/REPO")]
    repo: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rerun a failed run
    #[command(
        long_about = "Rerun an entire run, only failed jobs, or a specific job from a run.\n\n\
                      Without a run or job ID, select a recent failed run interactively."
    )]
    Rerun {
        /// Workflow run ID
        #[arg(value_name = "RUN_ID")]
        run_id: Option<String>,
        /// Rerun only failed jobs
        #[arg(long)]
        failed: bool,
        /// Rerun a specific job from a run, including dependencies
        #[arg(short = 'j', long = "job", value_name = "JOB_ID")]
        job: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Rerun { run_id, failed, job } => {
            let options = RerunOptions { run_id, job_id: job, only_failed: failed, repo: cli.repo };
            api::rerun(options).map(|_| ())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("runctl").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_positional_run_and_flags() {
        let cli = parse(&["rerun", "123", "--failed", "-j", "99"]).unwrap();
        let Commands::Rerun { run_id, failed, job } = cli.command;
        assert_eq!(run_id.as_deref(), Some("123"));
        assert!(failed);
        assert_eq!(job.as_deref(), Some("99"));
    }

    #[test]
    fn accepts_at_most_one_positional() {
        assert!(parse(&["rerun", "1", "2"]).is_err());
    }

    #[test]
    fn repo_flag_is_global() {
        let cli = parse(&["rerun", "5", "-R", "octo/widgets"]).unwrap();
        assert_eq!(cli.repo.as_deref(), Some("octo/widgets"));
    }
}
