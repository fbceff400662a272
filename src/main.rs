mod logging;

use crossterm::event;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use rust_edit::app::Workbench;
use rust_edit::core::event::InputEvent;
use rust_edit::core::view::{EventResult, View};
use rust_edit::kernel::services::adapters::{
    ensure_settings_file, load_settings, AppMessage, AsyncRuntime,
};
use rust_edit::tui::{
    install_panic_restore, install_termination_signals, TerminalGuard, TerminationSignal,
};
use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_MESSAGES_PER_TICK: usize = 256;

fn main() -> io::Result<()> {
    let logging = logging::init();
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging to file");
    }

    let result = run_app();
    if let Err(e) = &result {
        tracing::error!(error = %e, "rust-edit exited with error");
    }
    drop(logging);

    match result? {
        Some(signal) => std::process::exit(signal.exit_code()),
        None => Ok(()),
    }
}

fn run_app() -> io::Result<Option<TerminationSignal>> {
    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    let settings = load_settings();

    let (tx, rx) = mpsc::channel::<AppMessage>();
    let runtime = AsyncRuntime::new(tx)?;
    let mut workbench = Workbench::new(runtime, settings);
    workbench.open_paths(paths);

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());
    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    let _signals = install_termination_signals(guard.restorer(), signal_tx)?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let exit = event_loop(&mut terminal, &mut workbench, &rx, &signal_rx);
    drop(terminal);
    drop(guard);
    exit
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    workbench: &mut Workbench,
    rx: &Receiver<AppMessage>,
    signal_rx: &Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut needs_redraw = true;

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }

        for msg in rx.try_iter().take(MAX_MESSAGES_PER_TICK) {
            needs_redraw |= workbench.handle_message(msg);
        }

        if needs_redraw {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some(position) = workbench.cursor_position() {
                    frame.set_cursor_position(position);
                }
            })?;
            needs_redraw = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let input = InputEvent::from(event::read()?);
        if workbench.handle_input(&input) == EventResult::Quit {
            tracing::info!("quit requested");
            return Ok(None);
        }
        needs_redraw = true;
    }
}
