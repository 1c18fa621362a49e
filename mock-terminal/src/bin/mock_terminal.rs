//! Mock Trading Terminal
//!
//! Single-threaded event loop: key presses, a one second clock tick and a
//! daily date refresh, all multiplexed with `tokio::select!`.

use std::{error::Error, fs::File, io, sync::Mutex, time::Duration};

use chrono::Local;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use mock_terminal::{action_for_key, render_ui, Control, TerminalConfig, TradingDesk};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

const DAY: Duration = Duration::from_secs(24 * 3600);

/// Initialize logging. The TUI owns stdout, so output only goes to `LOG_FILE`.
fn init_logging(config: &TerminalConfig) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = TerminalConfig::from_env()?;
    init_logging(&config)?;

    // Setup panic hook to restore terminal on crash
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut desk = TradingDesk::new(&config, Local::now().naive_local());
    let result = run_app(&mut terminal, &mut desk).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("Terminal closed");
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    desk: &mut TradingDesk,
) -> Result<(), Box<dyn Error>> {
    let mut events = EventStream::new();

    let mut clock = tokio::time::interval(Duration::from_secs(1));
    clock.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // First tick of an interval fires immediately; the date is already fresh
    let mut daily = tokio::time::interval(DAY);
    daily.tick().await;

    loop {
        terminal.draw(|f| render_ui(f, desk))?;

        tokio::select! {
            _ = clock.tick() => desk.tick(Local::now().naive_local()),
            _ = daily.tick() => desk.refresh_date(Local::now().naive_local()),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if let Some(action) = action_for_key(key.code) {
                        match desk.handle(action) {
                            Ok(Control::Quit) => return Ok(()),
                            Ok(Control::Continue) => {}
                            Err(error) => warn!("{}", error),
                        }
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(error)) => return Err(error.into()),
                None => return Ok(()),
            },
        }
    }
}
