//! Terminal progress bar for a running combine.
//!
//! The bar does not own the progress state; it polls the operation's shared
//! [`Progress`] each time [`tick`](ProgressBar::tick) is called and redraws
//! at most every 100 ms. Rendering is skipped entirely when stdout is not a
//! terminal.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::progress::Progress;

const BAR_WIDTH: usize = 40;

/// Progress bar tracking a shared [`Progress`].
pub struct ProgressBar {
    progress: Arc<Progress>,
    enabled: bool,
    last_render: Option<Instant>,
    update_interval: Duration,
}

impl ProgressBar {
    /// Create a bar over the given progress handle.
    ///
    /// The bar is disabled when stdout is not a terminal.
    pub fn new(progress: Arc<Progress>) -> Self {
        Self {
            progress,
            enabled: io::stdout().is_terminal(),
            last_render: None,
            update_interval: Duration::from_millis(100),
        }
    }

    /// Create a bar that never renders.
    pub fn disabled(progress: Arc<Progress>) -> Self {
        let mut bar = Self::new(progress);
        bar.enabled = false;
        bar
    }

    /// Redraw from the current progress counts, rate limited.
    pub fn tick(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(last) = self.last_render
            && last.elapsed() < self.update_interval
        {
            return;
        }
        self.last_render = Some(Instant::now());
        self.render();
    }

    /// Draw the final state and move to a new line.
    pub fn finish(&mut self) {
        if self.enabled {
            self.render();
            println!();
        }
    }

    /// Erase the bar from the terminal.
    pub fn clear(&self) {
        if self.enabled {
            print!("\r\x1b[K");
            io::stdout().flush().ok();
        }
    }

    fn render(&self) {
        let completed = self.progress.completed_unit_count();
        let total = self.progress.total_unit_count();
        print!("\r{}", render_bar(completed, total, BAR_WIDTH));
        io::stdout().flush().ok();
    }
}

/// Render `[=====>    ] 50% 2/4` for the given counts.
fn render_bar(completed: i64, total: i64, width: usize) -> String {
    let completed = completed.max(0) as usize;
    let total = total.max(0) as usize;

    let filled = if total > 0 {
        (width * completed.min(total)) / total
    } else {
        0
    };
    let percent = if total > 0 {
        completed.min(total) * 100 / total
    } else {
        0
    };

    let head = if filled > 0 { ">" } else { "" };
    format!(
        "[{}{}{}] {}% {}/{}",
        "=".repeat(filled.saturating_sub(1)),
        head,
        " ".repeat(width - filled),
        percent,
        completed,
        total
    )
}
