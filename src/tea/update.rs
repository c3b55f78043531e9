//! Pure update function for the TEA (The Elm Architecture) pattern.
//!
//! The update function takes a model and a message, mutates the model,
//! and returns a list of commands to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Step, Tab, COPIED_ACK};
use crate::{slog_debug, slog_warn};

use super::command::Command;
use super::message::Message;
use super::model::{Focus, Model, Notification, NotificationLevel};

/// Helper to set an error notification and mark model as dirty.
fn set_error(model: &mut Model, message: String) {
    slog_warn!("UI Error: {}", message);
    model.notification = Some(Notification {
        level: NotificationLevel::Error,
        message,
    });
    model.dirty = true;
}

/// Pure update function: Model + Message → Commands
///
/// This function:
/// 1. Takes the current model and an input message
/// 2. Mutates the model state (and sets dirty flag)
/// 3. Returns a list of commands (side effects) to execute
///
/// The function itself has no side effects - all I/O happens via returned Commands.
pub fn update(model: &mut Model, msg: Message) -> Vec<Command> {
    let mut cmds = Vec::new();

    match msg {
        Message::Key(key) => {
            model.notification = None; // Clear notification on any key press
            model.dirty = true; // Keyboard input always triggers render

            if is_ctrl(&key, 'c') {
                cmds.push(Command::Quit);
            } else if model.acknowledgment().is_some() {
                update_acknowledgment(model, key);
            } else if is_ctrl(&key, 's') {
                submit_form(model);
            } else if model.focus == Focus::Prompt {
                update_prompt(model, key);
            } else {
                update_navigation(model, key, &mut cmds);
            }
        }

        Message::Paste(text) => {
            if model.acknowledgment().is_none() && model.focus == Focus::Prompt {
                model.form.push_str(&normalize_newlines(&text));
                model.dirty = true;
            }
        }

        Message::Resize(_, _) => {
            model.dirty = true;
        }

        // Command completion callbacks
        Message::CopySucceeded => {
            model.output.finish_copy();
            slog_debug!(
                "Message::CopySucceeded in_flight={}",
                model.output.in_flight()
            );
            model.acknowledgments.push_back(COPIED_ACK.to_string());
            model.dirty = true;
        }

        Message::CopyFailed(err) => {
            model.output.finish_copy();
            slog_warn!("Message::CopyFailed err={}", err);
            if model.config.report_copy_errors {
                set_error(model, format!("Copy failed: {}", err));
            }
            model.dirty = true;
        }
    }

    cmds
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

/// Blocking acknowledgment: only dismissal keys get through.
fn update_acknowledgment(model: &mut Model, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        model.acknowledgments.pop_front();
    }
}

/// Form submission never navigates or triggers anything.
fn submit_form(model: &Model) {
    slog_debug!(
        "Form submit suppressed (prompt_len={})",
        model.form.prompt().chars().count()
    );
}

fn update_prompt(model: &mut Model, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => model.focus = model.focus.next(),
        KeyCode::BackTab => model.focus = model.focus.prev(),
        KeyCode::Esc => model.focus = Focus::Tabs,
        KeyCode::Enter => model.form.push_char('\n'),
        KeyCode::Backspace => model.form.backspace(),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            model.form.push_char(c)
        }
        _ => {}
    }
}

fn update_navigation(model: &mut Model, key: KeyEvent, cmds: &mut Vec<Command>) {
    // Shortcuts are plain keys; chorded variants belong to the terminal.
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return;
    }

    match key.code {
        KeyCode::Tab => model.focus = model.focus.next(),
        KeyCode::BackTab => model.focus = model.focus.prev(),

        KeyCode::Char('q') | KeyCode::Esc => {
            cmds.push(Command::Quit);
        }

        KeyCode::Char('?') => {
            model.show_keymap = !model.show_keymap;
        }

        KeyCode::Char('i') => model.focus = Focus::Prompt,

        KeyCode::Char('y') => copy_output(model, cmds),

        KeyCode::Char(c @ '1'..='3') => {
            if let Some(tab) = Tab::from_digit(c) {
                select_tab(model, tab);
            }
        }

        code => update_focused(model, code, cmds),
    }
}

fn update_focused(model: &mut Model, code: KeyCode, cmds: &mut Vec<Command>) {
    match model.focus {
        Focus::Tabs => {
            if let Some(step) = horizontal_step(code) {
                if model.shell.step(step) {
                    slog_debug!("Tab selected: {:?}", model.shell.active_tab());
                }
            }
        }

        Focus::Tone | Focus::Language | Focus::Length => {
            if let (Some(selector), Some(step)) = (model.focus.selector(), selector_step(code)) {
                model.form.step(selector, step);
                slog_debug!(
                    "{} -> {}",
                    selector.label(),
                    model.form.selection(selector)
                );
            }
        }

        Focus::Generate => {
            if is_activate(code) {
                cmds.push(Command::Generate {
                    request: model.form.request(),
                });
            }
        }

        Focus::Copy => {
            if is_activate(code) {
                copy_output(model, cmds);
            }
        }

        Focus::Prompt => {}
    }
}

fn select_tab(model: &mut Model, tab: Tab) {
    if model.shell.select(tab) {
        slog_debug!("Tab selected: {:?}", tab);
    }
}

/// Idle/Copying -> Copying: issue one more clipboard write.
fn copy_output(model: &mut Model, cmds: &mut Vec<Command>) {
    let text = model.output.begin_copy();
    slog_debug!("Copy requested in_flight={}", model.output.in_flight());
    cmds.push(Command::CopyToClipboard { text });
}

fn horizontal_step(code: KeyCode) -> Option<Step> {
    match code {
        KeyCode::Left | KeyCode::Char('h') => Some(Step::Back),
        KeyCode::Right | KeyCode::Char('l') => Some(Step::Forward),
        _ => None,
    }
}

fn selector_step(code: KeyCode) -> Option<Step> {
    match code {
        KeyCode::Up | KeyCode::Char('k') => Some(Step::Back),
        KeyCode::Down | KeyCode::Char('j') => Some(Step::Forward),
        other => horizontal_step(other),
    }
}

fn is_activate(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
