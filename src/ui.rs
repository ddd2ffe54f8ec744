// src/ui.rs

pub mod chat;
pub mod footer;
pub mod header;

use crate::{
    api::ChatService, constants::TICK_RATE_MS, errors::ChatResult,
    key_handlers::handle_chat_input, App,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

/// Everything the main loop reacts to.
enum Event {
    Input(CEvent),
    Tick,
    Reply(ChatResult<String>),
}

/// Runs the terminal UI until the user quits.
pub async fn run_ui(app: App, service: Arc<dyn ChatService>) -> ChatResult<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, service).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application. All view-model mutation happens here.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    service: Arc<dyn ChatService>,
) -> ChatResult<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Read terminal input off the async runtime; stop once the loop is gone.
    let input_tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let tick_rate = Duration::from_millis(TICK_RATE_MS);
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if input_tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::error!("Failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    log::error!("Failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if input_tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    loop {
        app.process_view_events();
        terminal.draw(|f| draw(f, &mut app))?;

        let Some(event) = rx.recv().await else {
            break;
        };

        match event {
            Event::Input(CEvent::Key(key)) => {
                if let Some(text) = handle_chat_input(key, &mut app) {
                    log::info!("Sending message: {}", text);
                    let reply_tx = tx.clone();
                    let service = Arc::clone(&service);
                    tokio::spawn(async move {
                        let outcome = service.send_message(&text).await;
                        let _ = reply_tx.send(Event::Reply(outcome)).await;
                    });
                }
            }
            Event::Input(_) => {}
            Event::Tick => app.on_tick(),
            Event::Reply(outcome) => app.view.complete_submit(outcome),
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Renders the whole screen: title, conversation with input, key hints.
pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(5),    // Chat
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    header::draw_header(f, chunks[0]);
    chat::draw_chat(f, chunks[1], app);
    footer::draw_footer(f, chunks[2], app);
}
