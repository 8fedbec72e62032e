//! PDF input and output.
//!
//! [`reader`] opens the two scanned input documents and hands out page
//! handles; [`writer`] accumulates pages into the combined output document.

pub mod reader;
pub mod writer;

pub use reader::{MediaBox, PageHandle, SourceDocument};
pub use writer::PdfSink;
