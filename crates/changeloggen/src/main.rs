//! changeloggen CLI application.
//!
//! Writes `{repository}.v{major}.md` changelogs into the working directory for
//! every repository of the organization named by `CHANGELOGGEN_OWNER`.
//! Existing files are left alone, so rerunning only fills in what is missing.

// Fatal errors are rendered to stderr before tracing or the reporter exist.
#![allow(clippy::print_stderr)]

use changeloggen_core::{Config, Error, Generator, OutputWriter, RunOutcome, StdoutReporter};
use changeloggen_github::GitHubSource;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Normal completion, including a graceful stop on an exhausted rate limit.
const EXIT_OK: i32 = 0;
/// Configuration or organization-level failure; nothing or little was done.
const EXIT_FATAL: i32 = 1;
/// The run finished but at least one repository was abandoned.
const EXIT_PARTIAL: i32 = 2;

fn main() {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            render_error(e);
            std::process::exit(EXIT_FATAL);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Fatal error: Failed to create tokio runtime: {e}");
            std::process::exit(EXIT_FATAL);
        }
    };

    let exit_code = runtime.block_on(run(config));
    std::process::exit(exit_code);
}

/// Diagnostics go to stderr; stdout carries progress lines only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(config: Config) -> i32 {
    let source = match GitHubSource::new(&config) {
        Ok(source) => source,
        Err(e) => {
            render_error(e);
            return EXIT_FATAL;
        }
    };

    let generator = Generator::new(source, StdoutReporter, OutputWriter::current_dir());
    match generator.run(&config.owner).await {
        Ok(summary) if summary.outcome == RunOutcome::RateLimited => {
            info!("Stopped before processing: rate limit exhausted");
            EXIT_OK
        }
        Ok(summary) if summary.has_failures() => EXIT_PARTIAL,
        Ok(_) => EXIT_OK,
        Err(e) => {
            render_error(e);
            EXIT_FATAL
        }
    }
}

fn render_error(error: Error) {
    eprintln!("{:?}", miette::Report::new(error));
}
