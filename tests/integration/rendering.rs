//! Screen contents for representative states.

use std::sync::Arc;

use crossterm::event::KeyCode;

use content_studio::tea::Focus;

use crate::fixtures::{render_to_string, MemoryClipboard, StudioHarness};

const WIDTH: u16 = 120;
const HEIGHT: u16 = 32;

#[tokio::test]
async fn test_switching_tabs_changes_rendered_title() {
    let mut h = StudioHarness::new(Arc::new(MemoryClipboard::default()));

    let screen = render_to_string(&h.model.snapshot(), WIDTH, HEIGHT);
    assert!(screen.contains("LinkedIn Post"));

    h.press(KeyCode::Right).await;
    let screen = render_to_string(&h.model.snapshot(), WIDTH, HEIGHT);
    assert!(screen.contains("Email Draft"));
    assert!(!screen.contains("LinkedIn Post"));
}

#[tokio::test]
async fn test_copied_modal_rendered_after_copy() {
    let mut h = StudioHarness::new(Arc::new(MemoryClipboard::default()));
    h.model.focus = Focus::Copy;
    h.press(KeyCode::Enter).await;
    h.settle().await;

    let screen = render_to_string(&h.model.snapshot(), WIDTH, HEIGHT);
    assert!(screen.contains("Copied!"));

    h.press(KeyCode::Esc).await;
    let screen = render_to_string(&h.model.snapshot(), WIDTH, HEIGHT);
    assert!(!screen.contains("Copied!"));
}

#[tokio::test]
async fn test_multiline_prompt_renders_each_line() {
    let mut h = StudioHarness::new(Arc::new(MemoryClipboard::default()));
    h.press(KeyCode::Char('i')).await;
    h.type_text("first line\nsecond line").await;

    let screen = render_to_string(&h.model.snapshot(), WIDTH, HEIGHT);
    assert!(screen.contains("first line"));
    assert!(screen.contains("second line"));
}

#[tokio::test]
async fn test_long_prompt_shows_its_tail() {
    let mut h = StudioHarness::new(Arc::new(MemoryClipboard::default()));
    h.press(KeyCode::Char('i')).await;
    let lines: Vec<String> = (0..20).map(|i| format!("row-{:02}", i)).collect();
    h.type_text(&lines.join("\n")).await;

    let screen = render_to_string(&h.model.snapshot(), WIDTH, HEIGHT);
    assert!(screen.contains("row-19"));
    assert!(!screen.contains("row-00"));
}
