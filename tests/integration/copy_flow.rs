//! Copy action: clipboard effect, acknowledgment and failure handling.

use std::sync::Arc;

use crossterm::event::KeyCode;

use content_studio::config::Config;
use content_studio::core::{CopyState, COPIED_ACK, PLACEHOLDER_OUTPUT};
use content_studio::tea::{Focus, NotificationLevel};

use crate::fixtures::{DeniedClipboard, MemoryClipboard, StudioHarness};

/// Given a granting clipboard
/// When Copy is activated
/// Then the exact placeholder is on the clipboard and one "Copied!" is shown
#[tokio::test]
async fn test_copy_puts_placeholder_on_clipboard() {
    let clipboard = Arc::new(MemoryClipboard::default());
    let mut h = StudioHarness::new(clipboard.clone());
    h.model.focus = Focus::Copy;

    h.press(KeyCode::Enter).await;
    assert_eq!(h.model.output.state(), CopyState::Copying);

    h.settle().await;

    assert_eq!(clipboard.contents().as_deref(), Some(PLACEHOLDER_OUTPUT));
    assert_eq!(clipboard.writes(), 1);
    assert_eq!(h.model.acknowledgments.len(), 1);
    assert_eq!(h.model.acknowledgment(), Some(COPIED_ACK));
    assert_eq!(h.model.output.state(), CopyState::Idle);
}

#[tokio::test]
async fn test_acknowledgment_must_be_dismissed() {
    let mut h = StudioHarness::new(Arc::new(MemoryClipboard::default()));
    h.press(KeyCode::Char('y')).await;
    h.settle().await;

    // Blocked: neither tab switching nor quitting gets through
    h.press(KeyCode::Char('3')).await;
    assert!(!h.press(KeyCode::Char('q')).await);
    assert_eq!(h.model.acknowledgment(), Some(COPIED_ACK));

    h.press(KeyCode::Enter).await;
    assert!(h.model.acknowledgment().is_none());

    h.press(KeyCode::Char('3')).await;
    assert_eq!(h.model.snapshot().title(), "Improve Text");
}

/// Rapid repeated activations are not deduplicated: each write happens and
/// each produces its own acknowledgment.
#[tokio::test]
async fn test_rapid_copies_each_acknowledged_once() {
    let clipboard = Arc::new(MemoryClipboard::default());
    let mut h = StudioHarness::new(clipboard.clone());

    for _ in 0..3 {
        h.press(KeyCode::Char('y')).await;
    }
    assert_eq!(h.model.output.in_flight(), 3);

    h.settle().await;

    assert_eq!(clipboard.writes(), 3);
    assert_eq!(h.model.acknowledgments.len(), 3);

    for remaining in (0..3).rev() {
        h.press(KeyCode::Enter).await;
        assert_eq!(h.model.acknowledgments.len(), remaining);
    }
}

#[tokio::test]
async fn test_denied_copy_reports_error() {
    let mut h = StudioHarness::new(Arc::new(DeniedClipboard));
    h.press(KeyCode::Char('y')).await;
    h.settle().await;

    assert!(h.model.acknowledgment().is_none());
    assert_eq!(h.model.output.state(), CopyState::Idle);
    let notification = h.model.notification.as_ref().unwrap();
    assert_eq!(notification.level, NotificationLevel::Error);
    assert!(notification.message.starts_with("Copy failed"));
    assert!(notification.message.contains("permission denied"));
}

#[tokio::test]
async fn test_denied_copy_silent_when_configured() {
    let config = Config {
        report_copy_errors: false,
        ..Config::default()
    };
    let mut h = StudioHarness::with_config(Arc::new(DeniedClipboard), config);
    h.press(KeyCode::Char('y')).await;
    h.settle().await;

    assert!(h.model.acknowledgment().is_none());
    assert!(h.model.notification.is_none());
    assert_eq!(h.model.output.state(), CopyState::Idle);
}

#[tokio::test]
async fn test_copy_does_not_touch_form_or_tab() {
    let mut h = StudioHarness::new(Arc::new(MemoryClipboard::default()));
    h.press(KeyCode::Char('2')).await;
    h.press(KeyCode::Char('i')).await;
    h.type_text("notes").await;
    h.press(KeyCode::Esc).await;

    h.press(KeyCode::Char('y')).await;
    h.settle().await;

    let state = h.model.snapshot();
    assert_eq!(state.prompt, "notes");
    assert_eq!(state.title(), "Email Draft");
    assert_eq!(state.output, PLACEHOLDER_OUTPUT);
}
