//! Console output for the scancombine CLI.
//!
//! [`formatter`] prints leveled status messages with quiet/verbose modes;
//! [`progress`] renders a terminal progress bar by polling a shared
//! [`Progress`](crate::progress::Progress).

pub mod formatter;
pub mod progress;

pub use formatter::{MessageLevel, OutputFormatter};
pub use progress::ProgressBar;
