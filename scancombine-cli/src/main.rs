//! scancombine - Combine front and reversed back page scans into one PDF.

mod cli;

use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;

use crate::cli::Cli;
use scancombine::combine::{CombineOperation, OperationState};
use scancombine::error::CombineError;
use scancombine::output::{OutputFormatter, ProgressBar};
use scancombine::utils::abbreviate_with_tilde;
use scancombine::validation::Validator;

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            eprintln!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    process::exit(run(cli).await);
}

/// Main application logic; returns the process exit code.
async fn run(cli: Cli) -> i32 {
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);
    let validator = Validator::new();

    let front_path = cli.front_pages_path();
    if validator.validate_input_file(&front_path).is_err() {
        formatter.error(&format!(
            "Could not open front pages PDF {}.",
            abbreviate_with_tilde(&front_path)
        ));
        return 2;
    }

    let back_path = cli.reversed_back_pages_path();
    if validator.validate_input_file(&back_path).is_err() {
        formatter.error(&format!(
            "Could not open reversed back pages PDF {}.",
            abbreviate_with_tilde(&back_path)
        ));
        return 2;
    }

    let output_path = cli.output_path();
    log::debug!(
        "combining {} + {} -> {}",
        front_path.display(),
        back_path.display(),
        output_path.display()
    );

    let operation = CombineOperation::new(front_path, back_path, output_path);
    let progress = operation.progress();

    // Ctrl-C requests cooperative cancellation; the operation stops at its
    // next per-page checkpoint and removes the partial output.
    {
        let progress = Arc::clone(&progress);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                progress.request_cancellation();
            }
        });
    }

    let mut bar = if cli.quiet {
        ProgressBar::disabled(Arc::clone(&progress))
    } else {
        ProgressBar::new(Arc::clone(&progress))
    };

    let mut task = tokio::spawn(operation.run());
    let mut ticker = tokio::time::interval(Duration::from_millis(100));
    let joined = loop {
        tokio::select! {
            joined = &mut task => break joined,
            _ = ticker.tick() => bar.tick(),
        }
    };
    bar.clear();

    let operation = match joined {
        Ok(Ok(operation)) => operation,
        Ok(Err(err)) => {
            formatter.error(&format!("{err}"));
            return 1;
        }
        Err(err) => {
            formatter.error(&format!("combine task failed: {err}"));
            return 1;
        }
    };

    match operation.state() {
        OperationState::Succeeded => {
            formatter.success(&format!(
                "Successfully combined PDFs and saved output to {}.",
                abbreviate_with_tilde(operation.output_path())
            ));
            if let Some(stats) = operation.statistics() {
                formatter.detail("Front pages", &stats.front_page_count.to_string());
                formatter.detail("Back pages", &stats.back_page_count.to_string());
                formatter.detail("Pages written", &stats.pages_written.to_string());
                formatter.detail(
                    "Combine time",
                    &format!("{:.2}s", stats.combine_time.as_secs_f64()),
                );
            }
            0
        }
        OperationState::Canceled => {
            formatter.warning("Combine canceled; partial output was removed.");
            130
        }
        OperationState::Failed => match operation.error() {
            Some(error @ CombineError::OpenFailed { path }) => {
                formatter.error(&format!(
                    "Could not open input PDF {}.",
                    abbreviate_with_tilde(path)
                ));
                error.exit_code()
            }
            Some(error @ CombineError::CreateFailed { path }) => {
                formatter.error(&format!(
                    "Could not create output PDF {}.",
                    abbreviate_with_tilde(path)
                ));
                error.exit_code()
            }
            None => {
                formatter.error("Combine failed.");
                1
            }
        },
        OperationState::Idle | OperationState::Running => {
            formatter.error("Combine did not finish.");
            1
        }
    }
}
