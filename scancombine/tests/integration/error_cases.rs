//! Open and create failures.

use scancombine::combine::OperationState;
use scancombine::error::CombineError;
use tempfile::TempDir;

use super::common::{create_scanned_pdf, run_combine};

#[test]
fn test_missing_front_input() {
    let temp_dir = TempDir::new().unwrap();
    let front = temp_dir.path().join("missing-front.pdf");
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 2);
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Failed);
    assert_eq!(
        operation.error(),
        Some(&CombineError::open_failed(&front))
    );
    assert!(!output.exists(), "no output may be created on open failure");
    assert_eq!(operation.progress().total_unit_count(), 0);
}

#[test]
fn test_missing_back_input() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 2);
    let back = temp_dir.path().join("missing-back.pdf");
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Failed);
    assert_eq!(operation.error(), Some(&CombineError::open_failed(&back)));
    assert!(!output.exists());
}

#[test]
fn test_garbage_input_fails_to_open() {
    let temp_dir = TempDir::new().unwrap();
    let front = temp_dir.path().join("garbage.pdf");
    std::fs::write(&front, b"this is not a pdf").unwrap();
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 1);
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Failed);
    assert!(matches!(
        operation.error(),
        Some(CombineError::OpenFailed { .. })
    ));
}

#[test]
fn test_uncreatable_output_location() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 2);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 2);
    let output = temp_dir.path().join("no-such-dir").join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Failed);
    assert_eq!(
        operation.error(),
        Some(&CombineError::create_failed(&output))
    );
    assert!(!output.exists());
}

#[test]
fn test_start_after_failure_preserves_the_error() {
    let temp_dir = TempDir::new().unwrap();
    let front = temp_dir.path().join("missing-front.pdf");
    let back = temp_dir.path().join("missing-back.pdf");
    let output = temp_dir.path().join("combined.pdf");

    let mut operation = run_combine(&front, &back, &output);
    assert_eq!(operation.state(), OperationState::Failed);

    operation.start();

    assert_eq!(operation.state(), OperationState::Failed);
    assert_eq!(operation.error(), Some(&CombineError::open_failed(&front)));
    assert!(!output.exists());
}

#[test]
fn test_error_exit_codes() {
    assert_eq!(CombineError::open_failed("x").exit_code(), 2);
    assert_eq!(CombineError::create_failed("x").exit_code(), 5);
}
