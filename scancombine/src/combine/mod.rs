//! The combiner core: page ordering and the combine operation.

pub mod operation;
pub mod sequence;

pub use operation::{CombineOperation, CombineStatistics, OperationState};
pub use sequence::{Direction, InterleavedPageSequence, PageIndexSequence};
