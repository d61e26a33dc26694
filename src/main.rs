use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

use nyaysahayak::{config, key_handlers, logging, responder::ReplyEvent, ui, App, AppScreen};

/// Enum for different types of events.
enum Event {
    Input(CEvent),
    Tick,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    config::initialize_config()?;
    let _logger = logging::init()?;
    log::info!("starting nyaysahayak demo shell");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{:?}", err);
    }

    log::info!("nyaysahayak demo shell stopped");
    Ok(())
}

/// Main loop of the application.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);
    let (reply_tx, mut reply_rx) = mpsc::channel::<ReplyEvent>(100);

    // Spawn a task to read user input and emit ticks
    tokio::spawn(async move {
        let mut last_tick = Instant::now();
        loop {
            let timeout = Duration::from_millis(100);
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(ev) = event::read() {
                    if tx.send(Event::Input(ev)).await.is_err() {
                        return;
                    }
                }
            }

            if last_tick.elapsed() >= Duration::from_millis(250) {
                if tx.send(Event::Tick).await.is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        tokio::select! {
            Some(event) = rx.recv() => {
                match event {
                    Event::Input(CEvent::Key(key)) => {
                        if key_handlers::handle_key(key, &mut app, &reply_tx) {
                            break;
                        }
                    }
                    Event::Input(_) => {}
                    Event::Tick => {
                        app.status.update_spinner();
                    }
                }
            }
            Some(reply) = reply_rx.recv() => {
                app.apply_reply(reply);
            }
            else => {
                break;
            }
        }

        if app.screen == AppScreen::Quit {
            break;
        }
    }

    Ok(())
}
