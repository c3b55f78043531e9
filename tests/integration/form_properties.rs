//! Tab, selector and prompt behaviour through the full update loop.

use std::sync::Arc;

use crossterm::event::KeyCode;

use content_studio::core::{Choice, Language, Length, Tab, Tone, PLACEHOLDER_OUTPUT};
use content_studio::tea::Focus;

use crate::fixtures::{MemoryClipboard, StudioHarness};

fn harness() -> StudioHarness {
    StudioHarness::new(Arc::new(MemoryClipboard::default()))
}

/// Values visited by stepping forward from the default until it comes back.
fn full_cycle<C: Choice + Default>() -> Vec<C> {
    let mut values = Vec::new();
    let mut current = C::default();
    for _ in 0..C::ALL.len() {
        current = current.next();
        values.push(current);
    }
    values
}

#[tokio::test]
async fn test_default_state_on_first_render() {
    let h = harness();
    let state = h.model.snapshot();

    assert_eq!(state.active_tab, Tab::LinkedIn);
    assert_eq!(state.tone, Tone::Professional);
    assert_eq!(state.language, Language::Spanish);
    assert_eq!(state.length, Length::Medium);
    assert_eq!(state.prompt, "");
    assert_eq!(state.output, PLACEHOLDER_OUTPUT);
}

#[tokio::test]
async fn test_every_tab_maps_to_its_title() {
    let mut h = harness();
    for (digit, tab, title) in [
        ('2', Tab::Email, "Email Draft"),
        ('3', Tab::Improve, "Improve Text"),
        ('1', Tab::LinkedIn, "LinkedIn Post"),
    ] {
        h.press(KeyCode::Char(digit)).await;
        let state = h.model.snapshot();
        assert_eq!(state.active_tab, tab);
        assert_eq!(state.title(), title);
    }
}

#[tokio::test]
async fn test_every_selector_value_is_reachable_and_isolated() {
    let mut h = harness();

    // Tabs -> Prompt -> Tone
    h.press(KeyCode::Tab).await;
    h.press(KeyCode::Tab).await;
    assert_eq!(h.model.focus, Focus::Tone);

    for expected in full_cycle::<Tone>() {
        h.press(KeyCode::Right).await;
        assert_eq!(h.model.form.tone(), expected);
        assert_eq!(h.model.form.language(), Language::Spanish);
        assert_eq!(h.model.form.length(), Length::Medium);
    }

    h.press(KeyCode::Tab).await;
    for expected in full_cycle::<Language>() {
        h.press(KeyCode::Right).await;
        assert_eq!(h.model.form.language(), expected);
        assert_eq!(h.model.form.tone(), Tone::Professional);
        assert_eq!(h.model.form.length(), Length::Medium);
    }

    h.press(KeyCode::Tab).await;
    for expected in full_cycle::<Length>() {
        h.press(KeyCode::Right).await;
        assert_eq!(h.model.form.length(), expected);
        assert_eq!(h.model.form.tone(), Tone::Professional);
        assert_eq!(h.model.form.language(), Language::Spanish);
    }

    assert_eq!(h.model.shell.active_tab(), Tab::LinkedIn);
    assert_eq!(h.model.form.prompt(), "");
}

#[tokio::test]
async fn test_prompt_reflects_arbitrary_text_verbatim() {
    let mut h = harness();
    h.press(KeyCode::Char('2')).await;
    h.press(KeyCode::Char('i')).await;

    let long = "lorem ipsum ".repeat(500);
    let text = format!("Subject: Q3 update\n\n1) wins\n2) risks?\n{}", long);
    h.type_text(&text).await;

    assert_eq!(h.model.form.prompt(), text);
    assert_eq!(h.model.shell.active_tab(), Tab::Email);
    assert_eq!(h.model.form.tone(), Tone::Professional);
    assert_eq!(h.model.form.language(), Language::Spanish);
    assert_eq!(h.model.form.length(), Length::Medium);
}

#[tokio::test]
async fn test_empty_prompt_stays_empty_after_backspace() {
    let mut h = harness();
    h.press(KeyCode::Char('i')).await;
    h.press(KeyCode::Backspace).await;
    assert_eq!(h.model.form.prompt(), "");
}

#[tokio::test]
async fn test_submit_does_not_quit_or_change_state() {
    let mut h = harness();
    h.press(KeyCode::Char('i')).await;
    h.type_text("draft").await;

    let quit = h.ctrl('s').await;

    assert!(!quit);
    assert_eq!(h.model.form.prompt(), "draft");
    assert_eq!(h.model.focus, Focus::Prompt);
    assert_eq!(h.model.shell.active_tab(), Tab::LinkedIn);
}

#[tokio::test]
async fn test_generate_leaves_output_untouched() {
    let mut h = harness();
    h.press(KeyCode::Char('i')).await;
    h.type_text("write me a post").await;
    h.model.focus = Focus::Generate;

    let quit = h.press(KeyCode::Enter).await;

    assert!(!quit);
    assert_eq!(h.model.snapshot().output, PLACEHOLDER_OUTPUT);
    assert!(h.model.acknowledgment().is_none());
    assert!(h.model.notification.is_none());
}

#[tokio::test]
async fn test_quit_from_tab_bar() {
    let mut h = harness();
    assert!(h.press(KeyCode::Char('q')).await);
}
