//! The combine operation: lifecycle, streaming loop, and cancellation.
//!
//! A [`CombineOperation`] owns three file locations and drives one combine
//! run: open both inputs, create the output sink, stream the interleaved
//! pages, and finalize or discard the result. Its [`Progress`] handle is
//! shared with observers, who may read page counts and request cancellation
//! while the operation runs on another thread.
//!
//! # Examples
//!
//! ```no_run
//! use scancombine::combine::{CombineOperation, OperationState};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let operation = CombineOperation::new(
//!     PathBuf::from("front.pdf"),
//!     PathBuf::from("back-reversed.pdf"),
//!     PathBuf::from("combined.pdf"),
//! );
//! let progress = operation.progress();
//!
//! let operation = operation.run().await?;
//! if operation.state() == OperationState::Succeeded {
//!     println!("wrote {} pages", progress.completed_unit_count());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::anyhow;
use tokio::task;

use crate::combine::sequence::InterleavedPageSequence;
use crate::error::CombineError;
use crate::io::reader::SourceDocument;
use crate::io::writer::PdfSink;
use crate::progress::Progress;

/// Lifecycle of a combine operation.
///
/// `Succeeded`, `Failed`, and `Canceled` are terminal; once reached,
/// further [`CombineOperation::start`] calls are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationState {
    /// Constructed, not yet started.
    Idle,
    /// Streaming pages.
    Running,
    /// Every page was written and the output was finalized.
    Succeeded,
    /// An input could not be opened or the output could not be created.
    Failed,
    /// Cancellation was observed; partial output was removed (best effort).
    Canceled,
}

impl OperationState {
    /// Whether this state absorbs further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Canceled)
    }
}

/// Statistics recorded by a successful combine.
#[derive(Debug, Clone)]
pub struct CombineStatistics {
    /// Pages in the front input.
    pub front_page_count: u32,
    /// Pages in the reversed back input.
    pub back_page_count: u32,
    /// Pages written to the output.
    pub pages_written: usize,
    /// Wall-clock time spent combining.
    pub combine_time: Duration,
}

/// Combines the pages of two scanned PDFs into a single new PDF.
///
/// The pages of the reversed back input are interleaved back-to-front with
/// the pages of the front input, reconstructing the original sheet order of
/// a stack scanned front-side-up and then back-side-up.
pub struct CombineOperation {
    front_path: PathBuf,
    reversed_back_path: PathBuf,
    output_path: PathBuf,
    progress: Arc<Progress>,
    state: OperationState,
    error: Option<CombineError>,
    statistics: Option<CombineStatistics>,
}

impl CombineOperation {
    /// Create an idle operation over the three file locations.
    pub fn new(front_path: PathBuf, reversed_back_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            front_path,
            reversed_back_path,
            output_path,
            progress: Arc::new(Progress::new()),
            state: OperationState::Idle,
            error: None,
            statistics: None,
        }
    }

    /// The shared progress handle for this operation.
    ///
    /// Grab a clone before starting the operation to observe it from
    /// another thread or to request cancellation.
    pub fn progress(&self) -> Arc<Progress> {
        Arc::clone(&self.progress)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> OperationState {
        self.state
    }

    /// The error recorded by a failed operation, if any.
    pub fn error(&self) -> Option<&CombineError> {
        self.error.as_ref()
    }

    /// Statistics recorded by a successful operation, if any.
    pub fn statistics(&self) -> Option<&CombineStatistics> {
        self.statistics.as_ref()
    }

    /// Where the combined document is written.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Run the combine synchronously on the calling thread.
    ///
    /// Returns immediately without side effects if the operation already
    /// ran. Errors are not returned; they move the operation into
    /// [`OperationState::Failed`] and are available through
    /// [`error`](Self::error).
    pub fn start(&mut self) {
        if self.state != OperationState::Idle {
            return;
        }
        self.state = OperationState::Running;
        let started = Instant::now();

        // Open front, then back, then the sink. A failure at any step
        // records the offending location; documents opened so far are
        // dropped on return.
        let front = match SourceDocument::open(&self.front_path) {
            Ok(document) => document,
            Err(error) => return self.fail(error),
        };
        let mut back = match SourceDocument::open(&self.reversed_back_path) {
            Ok(document) => document,
            Err(error) => return self.fail(error),
        };
        back.shift_object_ids(front.max_id() + 1);

        let mut sink = match PdfSink::open(&self.output_path, back.max_id()) {
            Ok(sink) => sink,
            Err(error) => return self.fail(error),
        };

        self.progress.set_total_unit_count(
            i64::from(front.page_count()) + i64::from(back.page_count()),
        );

        let mut pages = InterleavedPageSequence::new(&front, &back);
        let mut canceled = false;
        loop {
            if self.progress.is_cancellation_requested() {
                canceled = true;
                break;
            }
            let Some(page) = pages.next() else {
                break;
            };

            sink.begin_page(page.media_box());
            sink.draw_page(&page);
            sink.end_page();
            self.progress.advance();
        }

        if canceled {
            log::debug!(
                "canceled after {} of {} pages",
                self.progress.completed_unit_count(),
                self.progress.total_unit_count()
            );
            sink.discard();
            self.state = OperationState::Canceled;
            return;
        }

        let pages_written = sink.page_count();
        match sink.close() {
            Ok(()) => {
                self.statistics = Some(CombineStatistics {
                    front_page_count: front.page_count(),
                    back_page_count: back.page_count(),
                    pages_written,
                    combine_time: started.elapsed(),
                });
                self.state = OperationState::Succeeded;
            }
            Err(error) => self.fail(error),
        }
    }

    /// Run the combine on a blocking worker thread and resolve to the
    /// finished operation.
    ///
    /// # Errors
    ///
    /// Only harness failures (a panicked worker) surface here; combine
    /// failures are reported through the operation's state and
    /// [`error`](Self::error).
    pub async fn run(mut self) -> anyhow::Result<Self> {
        task::spawn_blocking(move || {
            self.start();
            self
        })
        .await
        .map_err(|err| anyhow!("combine task failed: {err}"))
    }

    fn fail(&mut self, error: CombineError) {
        log::debug!("combine failed: {error}");
        self.error = Some(error);
        self.state = OperationState::Failed;
    }
}
