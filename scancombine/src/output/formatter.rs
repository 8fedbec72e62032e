//! Message formatting and display.
//!
//! Informational and success messages go to stdout and are suppressed in
//! quiet mode; warnings and errors always print, on stderr.

use std::io::{self, IsTerminal};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Verbose-only detail.
    Detail,
}

impl MessageLevel {
    fn prefix_and_color(self) -> (&'static str, &'static str) {
        match self {
            Self::Info => ("", ""),
            Self::Success => ("", "\x1b[32m"),
            Self::Warning => ("warning: ", "\x1b[33m"),
            Self::Error => ("error: ", "\x1b[31m"),
            Self::Detail => ("  ", "\x1b[2m"),
        }
    }

    fn uses_stderr(self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }
}

/// Output formatter with configurable verbosity.
pub struct OutputFormatter {
    quiet: bool,
    verbose: bool,
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter that only prints warnings and errors.
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    fn should_use_color() -> bool {
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Whether non-error output is being printed.
    pub fn should_print(&self) -> bool {
        !self.quiet
    }

    /// Whether verbose details are being printed.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Info, message);
        }
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            self.print_message(MessageLevel::Success, message);
        }
    }

    /// Print a warning to stderr. Always displayed.
    pub fn warning(&self, message: &str) {
        self.print_message(MessageLevel::Warning, message);
    }

    /// Print an error to stderr. Always displayed.
    pub fn error(&self, message: &str) {
        self.print_message(MessageLevel::Error, message);
    }

    /// Print a detail line. Only displayed in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            self.print_message(MessageLevel::Detail, &format!("{label}: {value}"));
        }
    }

    fn print_message(&self, level: MessageLevel, message: &str) {
        let (prefix, color) = level.prefix_and_color();
        let line = if self.colored && !color.is_empty() {
            format!("{color}{prefix}{message}\x1b[0m")
        } else {
            format!("{prefix}{message}")
        };

        if level.uses_stderr() {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    }
}
