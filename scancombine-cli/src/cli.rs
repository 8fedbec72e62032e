//! CLI argument surface for scancombine.
//!
//! Three positional paths, optionally `-q`/`-v`. Paths may use a leading
//! `~`, which is expanded before use.

use clap::Parser;
use std::path::PathBuf;

use scancombine::utils::expand_tilde;

/// One-line usage message printed on malformed invocations.
pub const USAGE: &str =
    "usage: scancombine [-q | -v] <front-pages.pdf> <reversed-back-pages.pdf> <output.pdf>";

/// Combine front and reversed back page scans into a single PDF.
///
/// The back pages PDF is expected in reverse order, as produced by feeding
/// the stack through a single-sided scanner back-side-up.
#[derive(Parser, Debug)]
#[command(name = "scancombine")]
#[command(version)]
#[command(about = "Combine front and reversed back page scans into a single PDF")]
pub struct Cli {
    /// PDF holding the front pages, in scan order
    #[arg(value_name = "FRONT_PAGES_PDF")]
    pub front_pages: String,

    /// PDF holding the back pages, in reverse scan order
    #[arg(value_name = "REVERSED_BACK_PAGES_PDF")]
    pub reversed_back_pages: String,

    /// Where to write the combined PDF
    #[arg(value_name = "OUTPUT_PDF")]
    pub output: String,

    /// Suppress all non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Show combine statistics after a successful run
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Front pages path, tilde-expanded.
    pub fn front_pages_path(&self) -> PathBuf {
        expand_tilde(&self.front_pages)
    }

    /// Reversed back pages path, tilde-expanded.
    pub fn reversed_back_pages_path(&self) -> PathBuf {
        expand_tilde(&self.reversed_back_pages)
    }

    /// Output path, tilde-expanded.
    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output)
    }
}
