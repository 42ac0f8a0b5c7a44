//! AppShell - terminal preview of the persisted UI shell state
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - actor owning the store, persisting every mutation
//! - Platform Layer - window title and fullscreen collaborators

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use appshell::messages::key_to_input;
use appshell::platform::{TerminalFullscreen, TerminalTitle};
use appshell::{Action, AppActor, RenderState, Storage};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "appshell.log");
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(
        Storage::new(),
        Box::new(TerminalTitle),
        Box::new(TerminalFullscreen::new()),
        render_tx,
    );
    let app_task = tokio::spawn(app_actor.run(action_rx));

    // Initial size drives mobile detection
    let size = terminal.size()?;
    let _ = action_tx.send(Action::Resize {
        width: size.width,
        height: size.height,
    });

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, action_tx, &mut render_rx).await?;

    // Let the actor finish its last save
    if let Err(e) = app_task.await {
        tracing::error!(error = %e, "app actor did not shut down cleanly");
    }
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    action_tx: mpsc::UnboundedSender<Action>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| appshell::ui::draw(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let action = match event::read()? {
                Event::Key(key) => Some(key_to_input(key, &current_state)),
                Event::Resize(width, height) => Some(Action::Resize { width, height }),
                _ => None,
            };
            if let Some(action) = action {
                let quit = matches!(action, Action::Quit);
                let _ = action_tx.send(action);
                if quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}
