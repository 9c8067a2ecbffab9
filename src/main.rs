//! # Binary: growth-console
//!
//! ## Responsibility
//! Entry point for the terminal admin console. Resolves configuration,
//! starts the request bridge on a Tokio runtime, initializes the terminal,
//! runs the event loop, and ensures clean exit.
//!
//! ## Usage
//! ```bash
//! growth-console                          # talks to http://localhost:8000
//! growth-console --api-url http://host:8000
//! RUST_LOG=debug growth-console 2>console.log
//! ```
//!
//! ## Guarantees
//! - Terminal state always restored on exit, even on panic
//! - Clean shutdown on q, Esc, or Ctrl+C
//! - The render loop never blocks on the network

use std::io;
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

use growth_console::api::ApiClient;
use growth_console::config::ConsoleConfig;
use growth_console::init_tracing;
use growth_console::tui::app::{App, Tab};
use growth_console::tui::bridge::{self, ApiCommand, ApiEvent, COMMAND_QUEUE_CAP, EVENT_QUEUE_CAP};
use growth_console::tui::events::{apply_event, poll_event};
use growth_console::tui::ui;

/// Render/input poll rate: 10 frames per second.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Sets up the terminal for TUI rendering.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restores the terminal to its original state.
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Forwards commands to the bridge, shedding (with rollback) when the queue
/// is full rather than blocking the render loop.
fn dispatch(app: &mut App, commands_tx: &mpsc::Sender<ApiCommand>, commands: Vec<ApiCommand>) {
    for command in commands {
        match commands_tx.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => {
                tracing::warn!(?command, "command queue full, shedding");
                app.rollback(&command);
                app.push_error("Console busy, action dropped");
            }
            Err(TrySendError::Closed(command)) => {
                tracing::warn!(?command, "request bridge stopped");
                app.rollback(&command);
                app.push_error("Request bridge stopped");
            }
        }
    }
}

/// Runs the render/input loop until quit.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    commands_tx: &mpsc::Sender<ApiCommand>,
    events_rx: &mut mpsc::Receiver<ApiEvent>,
) -> Result<(), io::Error> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let input = poll_event(TICK_RATE);
        let commands = apply_event(app, input);
        dispatch(app, commands_tx, commands);

        // Drain whatever the bridge produced since the last frame.
        while let Ok(api_event) = events_rx.try_recv() {
            let followups = app.apply(api_event);
            dispatch(app, commands_tx, followups);
        }

        app.evict_toasts(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ConsoleConfig::resolve(&args)?;

    // Only install a subscriber when the operator asked for logs; by
    // default a TUI must not write to the terminal it draws on. Logs go to
    // stderr for redirection.
    if std::env::var("RUST_LOG").is_ok() {
        let _ = init_tracing();
    }

    let client = ApiClient::new(&config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let (commands_tx, commands_rx) = mpsc::channel::<ApiCommand>(COMMAND_QUEUE_CAP);
    let (events_tx, mut events_rx) = mpsc::channel::<ApiEvent>(EVENT_QUEUE_CAP);
    runtime.spawn(bridge::run(client, commands_rx, events_tx));

    // Install panic hook that restores the terminal before printing
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let mut app = App::new(config.toast_ttl);
    app.dashboard.api_base = config.api_base.clone();

    // Mount the dashboard: the initial health probe.
    let initial = app.select_tab(Tab::Dashboard);
    dispatch(&mut app, &commands_tx, initial);

    let result = run_loop(&mut terminal, &mut app, &commands_tx, &mut events_rx);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("console error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
