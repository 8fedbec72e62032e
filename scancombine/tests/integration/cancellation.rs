//! Cancellation behavior and cleanup of partial output.

use scancombine::combine::OperationState;
use tempfile::TempDir;

use super::common::{create_scanned_pdf, page_widths, run_combine};

#[test]
fn test_cancellation_is_observed_at_the_first_checkpoint() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 3);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 2);
    let output = temp_dir.path().join("combined.pdf");

    let mut operation = scancombine::combine::CombineOperation::new(
        front,
        back,
        output.clone(),
    );
    operation.progress().request_cancellation();
    operation.start();

    assert_eq!(operation.state(), OperationState::Canceled);
    assert!(operation.error().is_none());

    // The sink had already created the file; cancellation removed it.
    assert!(!output.exists());

    let progress = operation.progress();
    assert_eq!(progress.total_unit_count(), 5);
    assert_eq!(progress.completed_unit_count(), 0);
    assert!(progress.fraction_completed() < 1.0);
}

#[test]
fn test_start_after_cancellation_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 1);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 1);
    let output = temp_dir.path().join("combined.pdf");

    let mut operation = scancombine::combine::CombineOperation::new(
        front,
        back,
        output.clone(),
    );
    operation.progress().request_cancellation();
    operation.start();
    assert_eq!(operation.state(), OperationState::Canceled);

    operation.start();
    assert_eq!(operation.state(), OperationState::Canceled);
    assert!(!output.exists());
}

#[test]
fn test_cancellation_after_success_does_not_cancel() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 1);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 1);
    let output = temp_dir.path().join("combined.pdf");

    let mut operation = run_combine(&front, &back, &output);
    assert_eq!(operation.state(), OperationState::Succeeded);

    operation.progress().request_cancellation();
    operation.start();

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert_eq!(page_widths(&output), vec![101.0, 201.0]);
}
