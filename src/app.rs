use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::config::Config;
use crate::core::{Generator, UnwiredGenerator};
use crate::render::RenderState;
use crate::tea::{update, Command, Message, Model};
use crate::{slog_debug, slog_warn, Error, Result};

const MAX_BG_MESSAGES: usize = 50;

/// External capabilities the commands run against.
#[derive(Clone)]
pub struct Effects {
    pub clipboard: Arc<dyn Clipboard>,
    pub generator: Arc<dyn Generator>,
}

impl Effects {
    pub fn system() -> Self {
        Self {
            clipboard: Arc::new(SystemClipboard::new()),
            generator: Arc::new(UnwiredGenerator),
        }
    }
}

pub struct LogicThread;

impl LogicThread {
    pub fn run(
        config: Config,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        Runtime::new()?.block_on(Self::run_async(
            config,
            Effects::system(),
            state_tx,
            shutdown,
        ))
    }

    async fn run_async(
        config: Config,
        effects: Effects,
        state_tx: Sender<RenderState>,
        shutdown: Arc<AtomicBool>,
    ) -> Result<()> {
        slog_debug!(
            "LogicThread::run_async report_copy_errors={}",
            config.report_copy_errors
        );
        let mut model = Model::new(config);
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<Message>();

        send_state(&state_tx, &model);
        model.dirty = false;

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            // Terminal input (priority)
            while event::poll(Duration::ZERO)? {
                let Some(msg) = terminal_message(event::read()?) else {
                    continue;
                };
                if dispatch(&mut model, msg, &msg_tx, &effects).await {
                    shutdown.store(true, Ordering::Relaxed);
                    return Ok(());
                }
                if model.dirty {
                    send_state(&state_tx, &model);
                    model.dirty = false;
                }
            }

            // Command completions (bounded)
            for _ in 0..MAX_BG_MESSAGES {
                let Ok(msg) = msg_rx.try_recv() else { break };
                if dispatch(&mut model, msg, &msg_tx, &effects).await {
                    shutdown.store(true, Ordering::Relaxed);
                    return Ok(());
                }
            }

            if model.dirty {
                send_state(&state_tx, &model);
                model.dirty = false;
            }

            tokio::time::sleep(Duration::from_micros(500)).await;
        }

        Ok(())
    }
}

/// Translate a terminal event into a message. Key releases are dropped.
fn terminal_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(Message::Key(key)),
        Event::Paste(text) => Some(Message::Paste(text)),
        Event::Resize(w, h) => Some(Message::Resize(w, h)),
        _ => None,
    }
}

/// Run one message through `update` and execute its commands.
/// Returns true when the app should quit.
pub async fn dispatch(
    model: &mut Model,
    msg: Message,
    msg_tx: &mpsc::UnboundedSender<Message>,
    effects: &Effects,
) -> bool {
    for cmd in update(model, msg) {
        if execute_command(cmd, msg_tx, effects).await {
            return true;
        }
    }
    false
}

/// Execute a single command. Returns true for `Command::Quit`.
pub async fn execute_command(
    cmd: Command,
    msg_tx: &mpsc::UnboundedSender<Message>,
    effects: &Effects,
) -> bool {
    match cmd {
        Command::CopyToClipboard { text } => {
            slog_debug!("Command::CopyToClipboard len={}", text.chars().count());
            let clipboard = effects.clipboard.clone();
            let tx = msg_tx.clone();

            tokio::spawn(async move {
                let result = crate::util::blocking(move || clipboard.write_text(&text)).await;
                let msg = match result {
                    Ok(()) => Message::CopySucceeded,
                    Err(e) => Message::CopyFailed(e.to_string()),
                };
                let _ = tx.send(msg);
            });
        }

        Command::Generate { request } => {
            slog_debug!(
                "Command::Generate tone={:?} language={:?} length={:?} prompt_len={}",
                request.tone,
                request.language,
                request.length,
                request.prompt.chars().count()
            );
            match effects.generator.generate(&request) {
                Err(Error::GeneratorUnavailable) => {
                    slog_debug!("Generate ignored: generator not wired");
                }
                Err(e) => {
                    slog_warn!("Generate failed: {}", e);
                }
                // TODO: route generated text into the output panel once the
                // output is derived from form values.
                Ok(text) => {
                    slog_debug!("Generated {} chars (not displayed)", text.chars().count());
                }
            }
        }

        Command::Quit => {
            slog_debug!("Command::Quit");
            return true;
        }
    }

    false
}

fn send_state(state_tx: &Sender<RenderState>, model: &Model) {
    let _ = state_tx.try_send(model.snapshot());
}
