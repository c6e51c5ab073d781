//! snakkis-tui — Terminal chat widget for children learning Norwegian.
//! Uses Ratatui + Crossterm for rendering.

mod app;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::info;

use snakkis_core::config::Config;
use snakkis_core::session::{ChatSession, SessionCommand};

use app::App;

/// Animation frame interval for the walking character.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> io::Result<()> {
    // Initialize tracing to a file (not stdout, since we own the terminal)
    let _guard = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(|| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open("snakkis-tui.log")
                .unwrap_or_else(|_| {
                    // Fallback: /dev/null
                    std::fs::File::open("/dev/null").unwrap()
                })
        })
        .try_init();

    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = match Config::load_from_dir(&project_root) {
        Ok(config) => config,
        Err(e) => {
            info!("No usable config.yaml ({:#}), using defaults", e);
            Config::default()
        }
    };

    // Start the chat session task
    let mut session = ChatSession::new(config.clone());
    let command_tx = session.command_sender();
    let mut event_rx = session.subscribe();
    tokio::spawn(async move {
        session.run().await;
    });

    let mut app = App::new(&config, command_tx.clone());

    info!("Starting TUI");

    // Setup terminal
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut last_tick = Instant::now();

    // Main event loop
    loop {
        // Draw
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Handle session events (non-blocking)
        while let Ok(ev) = event_rx.try_recv() {
            app.handle_event(ev);
        }

        // Animate the walker
        if last_tick.elapsed() >= TICK_INTERVAL {
            let width = terminal.size().map(|s| s.width).unwrap_or(80);
            app.walker.tick(width);
            last_tick = Instant::now();
        }

        // Handle terminal events
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match (key.code, key.modifiers) {
                    // Quit
                    (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    // Focus toggle
                    (KeyCode::Tab, _) => {
                        app.input_focused = !app.input_focused;
                    }
                    // Input handling
                    (KeyCode::Enter, _) if app.input_focused => {
                        app.send_message().await;
                    }
                    (KeyCode::Char(c), _) if app.input_focused => {
                        app.push_char(c).await;
                    }
                    (KeyCode::Backspace, _) if app.input_focused => {
                        app.pop_char().await;
                    }
                    // Topic selection
                    (KeyCode::Right, _) if !app.input_focused => app.next_topic().await,
                    (KeyCode::Left, _) if !app.input_focused => app.prev_topic().await,
                    // Scroll
                    (KeyCode::Up, _) if !app.input_focused => app.scroll_up(),
                    (KeyCode::Down, _) if !app.input_focused => app.scroll_down(),
                    (KeyCode::PageUp, _) => app.scroll_up(),
                    (KeyCode::PageDown, _) => app.scroll_down(),
                    _ => {}
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Cleanup
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    // Stop the session so outstanding reply timers are cancelled
    let _ = command_tx.send(SessionCommand::Stop).await;

    Ok(())
}
