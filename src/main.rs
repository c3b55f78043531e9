use std::io::{self, stdout, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use content_studio::app::LogicThread;
use content_studio::config::Config;
use content_studio::render::RenderState;
use content_studio::{slog, slog_error, ui, Result};

const FRAME_DURATION: Duration = Duration::from_micros(16_666); // 60fps

/// AI Content Studio - draft LinkedIn posts, emails, and text improvements
#[derive(Parser, Debug)]
#[command(name = "studio")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    STUDIO_DEBUG=1  Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.studio/studio.log)
    #[arg(short = 'd', long)]
    pub debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    content_studio::log::init_with_debug(cli.debug);
    if content_studio::log::is_debug() {
        slog!("Studio starting (debug mode enabled)");
    } else {
        slog!("Studio starting");
    }

    let config = Config::load()?;

    let shutdown = Arc::new(AtomicBool::new(false));
    let (state_tx, state_rx) = crossbeam_channel::bounded::<RenderState>(1);

    let mut terminal = setup_terminal()?;

    let shutdown_clone = shutdown.clone();
    let logic_handle =
        thread::spawn(move || LogicThread::run(config, state_tx, shutdown_clone));

    let result = render_loop(&mut terminal, state_rx, &shutdown);

    shutdown.store(true, Ordering::SeqCst);
    let logic_result = logic_handle.join();
    restore_terminal(&mut terminal)?;
    slog!("Studio exiting");

    if let Err(e) = &result {
        slog_error!("Render loop failed: {}", e);
    }
    result?;
    match logic_result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            slog_error!("Logic thread failed: {}", e);
            Err(e)
        }
        Err(_) => {
            slog_error!("Logic thread panicked");
            Err(content_studio::Error::TaskJoin(
                "logic thread panicked".to_string(),
            ))
        }
    }
}

fn render_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state_rx: Receiver<RenderState>,
    shutdown: &AtomicBool,
) -> Result<()> {
    let mut state = RenderState::default();
    let mut last_version: u64 = 0;
    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        match state_rx.try_recv() {
            Ok(s) => {
                dirty = dirty || s.version != last_version;
                state = s;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => break,
        }

        if last_frame.elapsed() < FRAME_DURATION {
            thread::sleep(Duration::from_micros(500));
            continue;
        }
        last_frame = Instant::now();

        if dirty {
            terminal.draw(|f| ui::draw(f, &state))?;
            last_version = state.version;
            dirty = false;
        }
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
