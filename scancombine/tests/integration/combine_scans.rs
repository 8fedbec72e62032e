//! Ordering, degenerate inputs, progress, and lifecycle behavior.

use scancombine::combine::{CombineOperation, OperationState};
use tempfile::TempDir;

use super::common::{create_scanned_pdf, page_widths, run_combine};

#[test]
fn test_unequal_inputs_interleave_in_zig_zag_order() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 3);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 2);
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert!(operation.error().is_none());

    // Front P1,P2,P3 and reversed back Q1,Q2 combine to P1,Q2,P2,Q1,P3.
    assert_eq!(
        page_widths(&output),
        vec![101.0, 202.0, 102.0, 201.0, 103.0]
    );

    let progress = operation.progress();
    assert_eq!(progress.total_unit_count(), 5);
    assert_eq!(progress.completed_unit_count(), 5);
    assert_eq!(progress.fraction_completed(), 1.0);

    let stats = operation.statistics().unwrap();
    assert_eq!(stats.front_page_count, 3);
    assert_eq!(stats.back_page_count, 2);
    assert_eq!(stats.pages_written, 5);
}

#[test]
fn test_equal_inputs_alternate_strictly() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 2);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 2);
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert_eq!(page_widths(&output), vec![101.0, 202.0, 102.0, 201.0]);
}

#[test]
fn test_empty_front_yields_reversed_back_alone() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 0);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 3);
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert_eq!(page_widths(&output), vec![203.0, 202.0, 201.0]);
}

#[test]
fn test_empty_back_yields_front_alone() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 3);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 0);
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert_eq!(page_widths(&output), vec![101.0, 102.0, 103.0]);
}

#[test]
fn test_two_empty_inputs_still_succeed() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 0);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 0);
    let output = temp_dir.path().join("combined.pdf");

    let operation = run_combine(&front, &back, &output);

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert!(output.exists());
    assert!(page_widths(&output).is_empty());
    assert_eq!(operation.progress().total_unit_count(), 0);
}

#[test]
fn test_un_interleaving_reconstructs_both_inputs() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 3);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 3);
    let output = temp_dir.path().join("combined.pdf");

    run_combine(&front, &back, &output);
    let widths = page_widths(&output);

    // Odd-positioned pages, in order, are the front sequence.
    let fronts: Vec<f32> = widths.iter().copied().step_by(2).collect();
    assert_eq!(fronts, vec![101.0, 102.0, 103.0]);

    // Even-positioned pages, reversed, are the back sequence.
    let mut backs: Vec<f32> = widths.iter().copied().skip(1).step_by(2).collect();
    backs.reverse();
    assert_eq!(backs, vec![201.0, 202.0, 203.0]);
}

#[test]
fn test_start_after_success_changes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 2);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 1);
    let output = temp_dir.path().join("combined.pdf");

    let mut operation = run_combine(&front, &back, &output);
    let widths = page_widths(&output);

    operation.start();

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert_eq!(operation.progress().completed_unit_count(), 3);
    assert_eq!(page_widths(&output), widths);
}

#[tokio::test]
async fn test_run_on_worker_thread() {
    let temp_dir = TempDir::new().unwrap();
    let front = create_scanned_pdf(temp_dir.path(), "front.pdf", 100, 2);
    let back = create_scanned_pdf(temp_dir.path(), "back.pdf", 200, 2);
    let output = temp_dir.path().join("combined.pdf");

    let operation = CombineOperation::new(front, back, output.clone());
    let progress = operation.progress();

    let operation = operation.run().await.unwrap();

    assert_eq!(operation.state(), OperationState::Succeeded);
    assert_eq!(progress.completed_unit_count(), 4);
    assert_eq!(page_widths(&output), vec![101.0, 202.0, 102.0, 201.0]);
}
