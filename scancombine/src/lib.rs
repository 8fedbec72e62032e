//! scancombine - Combine front and back page scans into one PDF.
//!
//! Feed an unstapled stack of magazine pages through a single-sided sheet
//! feeder twice (once front-side-up, once back-side-up) and you get two
//! PDFs: the front pages in order, and the back pages in reverse. This
//! library merges them into a single correctly ordered PDF by interleaving
//! the front pages with the back pages taken last-to-first.
//!
//! The work is exposed as a [`CombineOperation`]: a small state machine that
//! opens both inputs, streams pages into the output in interleaved order,
//! reports per-page [`Progress`] to concurrent observers, and supports
//! cooperative cancellation with cleanup of the partial output.
//!
//! # Examples
//!
//! ```no_run
//! use scancombine::{CombineOperation, OperationState};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let operation = CombineOperation::new(
//!     PathBuf::from("front.pdf"),
//!     PathBuf::from("back-reversed.pdf"),
//!     PathBuf::from("combined.pdf"),
//! );
//!
//! // Observe from elsewhere while the operation runs on a worker thread.
//! let progress = operation.progress();
//!
//! let operation = operation.run().await?;
//! match operation.state() {
//!     OperationState::Succeeded => {
//!         println!("wrote {} pages", progress.completed_unit_count());
//!     }
//!     OperationState::Canceled => println!("canceled"),
//!     _ => {
//!         if let Some(error) = operation.error() {
//!             eprintln!("{error}");
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod combine;
pub mod error;
pub mod io;
pub mod output;
pub mod progress;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use combine::{CombineOperation, CombineStatistics, OperationState};
pub use error::{CombineError, Result};
pub use progress::Progress;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
