//! Terminal UI rendering for the content studio.
//!
//! Layout, top to bottom: header, tab bar, separator, the form and output
//! panes side by side, footer, keymap status line. Chrome stays minimal:
//! whitespace and position carry the structure, selection uses the
//! REVERSED modifier so it adapts to the terminal theme.
//!
//! This module renders from RenderState (immutable snapshot) - it never
//! mutates application state.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::{Choice, CopyState, Selector, Tab};
use crate::render::RenderState;
use crate::tea::{Focus, Notification, NotificationLevel};

// Color tokens (selection uses REVERSED modifier to adapt to terminal theme)
const COLOR_TEXT_DIMMED: Color = Color::Gray;
const COLOR_TEXT_MUTED: Color = Color::DarkGray;
const COLOR_SEPARATOR: Color = Color::White;

// Layout constants
const HEADER_HEIGHT: u16 = 2;
const PROMPT_ROWS: u16 = 8;
const PANE_GAP: u16 = 3;
const GUTTER: &str = "│ ";

const HEADER_TITLE: &str = "AI Content Studio";
const HEADER_SUBTITLE: &str =
    "Create content faster: LinkedIn posts, emails, and text improvements.";
const PROMPT_LABEL: &str = "Prompt / Notes";
const PROMPT_PLACEHOLDER: &str = "Write what you want the AI to generate...";
const GENERATE_HINT: &str =
    "Next step: connect this button to a backend proxy (to keep API keys safe).";
const FOOTER: &str = "Built with Rust + ratatui";

// -----------------------------------------------------------------------------
// Context-sensitive keymap system
// -----------------------------------------------------------------------------

/// Context for determining which keybindings to display.
/// Derived from RenderState - this is the "view model" for the statusbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapContext {
    /// A blocking acknowledgment is on screen
    Acknowledge,
    /// Typing into the prompt
    Prompt,
    /// Any other control has focus
    Control(Focus),
}

impl KeymapContext {
    pub fn from_render_state(state: &RenderState) -> Self {
        if state.acknowledgment.is_some() {
            KeymapContext::Acknowledge
        } else if state.focus == Focus::Prompt {
            KeymapContext::Prompt
        } else {
            KeymapContext::Control(state.focus)
        }
    }
}

/// A single keybinding entry for display.
struct Keybinding(&'static str, &'static str);

/// A group of related keybindings (separated by │).
struct KeybindingGroup(Vec<Keybinding>);

fn keybindings_for_context(ctx: KeymapContext) -> Vec<KeybindingGroup> {
    match ctx {
        KeymapContext::Acknowledge => {
            vec![KeybindingGroup(vec![Keybinding("Enter", "dismiss")])]
        }
        KeymapContext::Prompt => vec![
            KeybindingGroup(vec![
                Keybinding("Enter", "newline"),
                Keybinding("Bksp", "delete"),
            ]),
            KeybindingGroup(vec![Keybinding("Tab", "next"), Keybinding("Esc", "leave")]),
            KeybindingGroup(vec![Keybinding("^C", "quit")]),
        ],
        KeymapContext::Control(focus) => {
            let focused = match focus {
                Focus::Tabs => vec![Keybinding("←/→", "switch"), Keybinding("1-3", "jump")],
                Focus::Tone | Focus::Language | Focus::Length => {
                    vec![Keybinding("←/→", "change")]
                }
                Focus::Generate => vec![Keybinding("Enter", "generate")],
                Focus::Copy => vec![Keybinding("Enter", "copy")],
                Focus::Prompt => vec![],
            };
            vec![
                KeybindingGroup(focused),
                KeybindingGroup(vec![
                    Keybinding("Tab", "next"),
                    Keybinding("i", "write"),
                    Keybinding("y", "copy"),
                ]),
                KeybindingGroup(vec![Keybinding("q", "quit")]),
            ]
        }
    }
}

/// Main render function - entry point for all UI drawing.
/// Takes an immutable RenderState snapshot.
pub fn draw(frame: &mut Frame, state: &RenderState) {
    render_main_layout(frame, state);

    if let Some(ref notification) = state.notification {
        render_notification(frame, notification, frame.area());
    }

    if let Some(ref message) = state.acknowledgment {
        render_acknowledgment(frame, message, frame.area());
    }
}

fn render_main_layout(frame: &mut Frame, state: &RenderState) {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_header(frame, chunks[0]);
    frame.render_widget(Paragraph::new(tab_bar_line(state)), chunks[2]);
    render_separator(frame, chunks[3]);

    let panes = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(PANE_GAP),
        Constraint::Fill(1),
    ])
    .split(chunks[4]);
    render_form_pane(frame, state, panes[0]);
    render_output_pane(frame, state, panes[2]);

    frame.render_widget(
        Paragraph::new(Span::styled(FOOTER, Style::default().fg(COLOR_TEXT_MUTED))),
        chunks[5],
    );
    render_statusbar(frame, state, chunks[6]);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            HEADER_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HEADER_SUBTITLE,
            Style::default().fg(COLOR_TEXT_DIMMED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Tab bar: exactly one tab (the active one) is drawn REVERSED.
pub fn tab_bar_line(state: &RenderState) -> Line<'static> {
    let mut spans = Vec::with_capacity(Tab::ALL.len() * 2);

    for (idx, tab) in Tab::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *tab == state.active_tab {
            let active = Style::default().add_modifier(Modifier::REVERSED);
            if state.focus == Focus::Tabs {
                active.add_modifier(Modifier::BOLD)
            } else {
                active
            }
        } else {
            Style::default().fg(COLOR_TEXT_DIMMED)
        };
        spans.push(Span::styled(format!(" {} ", tab.label()), style));
    }

    Line::from(spans)
}

fn render_separator(frame: &mut Frame, area: Rect) {
    let solid = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(solid, Style::default().fg(COLOR_SEPARATOR)));
    frame.render_widget(Paragraph::new(line), area);
}

fn pane_title(title: &'static str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        title,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_TEXT_DIMMED)
    }
}

fn render_form_pane(frame: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(PROMPT_ROWS),
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(pane_title(state.title()), chunks[0]);

    let prompt_focused = state.focus == Focus::Prompt;
    frame.render_widget(
        Paragraph::new(Span::styled(PROMPT_LABEL, label_style(prompt_focused))),
        chunks[2],
    );
    frame.render_widget(Paragraph::new(prompt_text(state, chunks[3])), chunks[3]);

    let selector_areas = Layout::horizontal([Constraint::Fill(1); 3]).split(chunks[5]);
    for (selector, area) in Selector::ALL.iter().zip(selector_areas.iter()) {
        render_selector(frame, state, *selector, *area);
    }

    frame.render_widget(
        Paragraph::new(button_line("Generate", state.focus == Focus::Generate)),
        chunks[7],
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            GENERATE_HINT,
            Style::default().fg(COLOR_TEXT_MUTED),
        ))
        .wrap(Wrap { trim: true }),
        chunks[9],
    );
}

/// The prompt field: a gutter on every row, the tail of the text, and a
/// cursor when focused.
fn prompt_text(state: &RenderState, area: Rect) -> Text<'static> {
    let focused = state.focus == Focus::Prompt;
    let gutter_style = Style::default().fg(if focused {
        COLOR_TEXT_DIMMED
    } else {
        COLOR_TEXT_MUTED
    });
    let cursor_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::SLOW_BLINK);
    let rows = area.height as usize;
    let text_width = (area.width as usize).saturating_sub(GUTTER.chars().count());

    let mut lines: Vec<Line> = if state.prompt.is_empty() {
        let mut spans = vec![Span::styled(GUTTER, gutter_style)];
        if focused {
            spans.push(Span::styled("_", cursor_style));
        }
        spans.push(Span::styled(
            PROMPT_PLACEHOLDER,
            Style::default().fg(COLOR_TEXT_MUTED),
        ));
        vec![Line::from(spans)]
    } else {
        // Leave room for the cursor on the last row
        let wrap_width = if focused {
            text_width.saturating_sub(1)
        } else {
            text_width
        };
        let visible = visible_prompt_lines(&state.prompt, wrap_width, rows);
        let last = visible.len().saturating_sub(1);
        visible
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let mut spans = vec![Span::styled(GUTTER, gutter_style), Span::raw(row)];
                if focused && idx == last {
                    spans.push(Span::styled("_", cursor_style));
                }
                Line::from(spans)
            })
            .collect()
    };

    while lines.len() < rows {
        lines.push(Line::from(Span::styled(GUTTER, gutter_style)));
    }

    Text::from(lines)
}

/// Hard-wrap the prompt to `width` columns and keep the last `rows` rows,
/// so the end of the text (where typing happens) stays visible.
pub fn visible_prompt_lines(prompt: &str, width: usize, rows: usize) -> Vec<String> {
    if rows == 0 {
        return Vec::new();
    }
    let width = width.max(1);

    let mut wrapped = Vec::new();
    for line in prompt.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            wrapped.push(String::new());
            continue;
        }
        wrapped.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }

    let start = wrapped.len().saturating_sub(rows);
    wrapped.split_off(start)
}

fn render_selector(frame: &mut Frame, state: &RenderState, selector: Selector, area: Rect) {
    let focused = state.focus.selector() == Some(selector);
    let value_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(Span::styled(selector.label(), label_style(focused))),
        Line::from(Span::styled(
            format!("‹ {} ›", state.selection(selector)),
            value_style,
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn button_line(label: &'static str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    Line::from(Span::styled(format!("[ {} ]", label), style))
}

fn render_output_pane(frame: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    frame.render_widget(pane_title("Output"), chunks[0]);
    frame.render_widget(
        Paragraph::new(state.output).wrap(Wrap { trim: false }),
        chunks[2],
    );

    let mut copy = button_line("Copy", state.focus == Focus::Copy);
    if state.copy_state == CopyState::Copying {
        copy.spans.push(Span::styled(
            "  copying…",
            Style::default().fg(COLOR_TEXT_MUTED),
        ));
    }
    frame.render_widget(Paragraph::new(copy), chunks[4]);
}

/// Render the HUD status bar - single bottom line.
/// Shows "?" only when the keymap is collapsed, "? │ <keymap>" when expanded.
fn render_statusbar(frame: &mut Frame, state: &RenderState, area: Rect) {
    frame.render_widget(Paragraph::new(keymap_line(state)), area);
}

fn keymap_line(state: &RenderState) -> Line<'static> {
    let ctx = KeymapContext::from_render_state(state);
    let groups = keybindings_for_context(ctx);

    let key_style = Style::default().fg(COLOR_TEXT_DIMMED);
    let desc_style = Style::default().fg(COLOR_TEXT_MUTED);
    let sep_style = Style::default().fg(COLOR_TEXT_MUTED);

    let help_style = if state.show_keymap {
        Style::default()
    } else {
        Style::default().fg(COLOR_TEXT_MUTED)
    };
    let mut spans: Vec<Span> = vec![Span::styled("?", help_style)];

    if state.show_keymap {
        for group in groups.iter().filter(|g| !g.0.is_empty()) {
            spans.push(Span::styled(" │ ", sep_style));
            for (key_idx, keybinding) in group.0.iter().enumerate() {
                if key_idx > 0 {
                    spans.push(Span::styled(" • ", sep_style));
                }
                spans.push(Span::styled(keybinding.0, key_style));
                spans.push(Span::styled(format!(" {}", keybinding.1), desc_style));
            }
        }
    }

    Line::from(spans)
}

/// Render notification message on the bottom line of the screen.
///
/// Errors are red with a bold "Error:" prefix.
fn render_notification(frame: &mut Frame, notification: &Notification, area: Rect) {
    let notification_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1.min(area.height),
    };

    frame.render_widget(Clear, notification_area);

    let line = match notification.level {
        NotificationLevel::Error => Line::from(vec![
            Span::styled(
                "Error: ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                notification.message.clone(),
                Style::default().fg(Color::Red),
            ),
        ]),
    };

    frame.render_widget(Paragraph::new(line), notification_area);
}

/// Modal acknowledgment centered over everything else.
fn render_acknowledgment(frame: &mut Frame, message: &str, area: Rect) {
    let width = (message.chars().count() as u16 + 10).max(28);
    let modal = centered_rect(width, 5, area);

    frame.render_widget(Clear, modal);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Enter to dismiss",
            Style::default().fg(COLOR_TEXT_MUTED),
        )),
    ];
    let block = Block::bordered().border_style(Style::default().fg(COLOR_TEXT_DIMMED));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        modal,
    );
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
