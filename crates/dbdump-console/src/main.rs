use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod views;

use actions::{Action, ConfigAction, GlobalAction, OperationAction};
use background::spawn_background_worker;
use dbdump_client::HttpBackendClient;
use middleware::{
    backend::BackendMiddleware, keyboard::KeyboardMiddleware, logging::LoggingMiddleware,
    Middleware,
};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting dbdump-console (log: {})", log_file.display());

    let app_config = dbdump_config::AppConfig::load();
    let client = HttpBackendClient::new(
        &app_config.backend_url,
        Duration::from_secs(app_config.request_timeout_secs),
    )?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channels: main -> worker (actions), worker -> main (reduced results)
    let (action_tx, action_rx) = mpsc::channel::<Action>();
    let (result_tx, result_rx) = mpsc::channel::<Action>();

    let store = Store::new(AppState::new(app_config));

    // Middleware in execution order
    let middleware: Vec<Box<dyn Middleware + Send>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(BackendMiddleware::new(std::sync::Arc::new(client))?),
    ];

    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        store.shared(),
        middleware,
    );

    // Initial data load
    let _ = action_tx.send(Action::Config(ConfigAction::LoadStart));
    let _ = action_tx.send(Action::Operation(OperationAction::LoadStart {
        config_id: None,
    }));

    // Main event loop
    let result = run_app(&mut terminal, &store, &action_tx, &result_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Dropping the sender disconnects the worker if it hasn't quit already
    drop(action_tx);
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting dbdump-console");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &Store,
    action_tx: &Sender<Action>,
    result_rx: &Receiver<Action>,
) -> anyhow::Result<()> {
    loop {
        // Apply actions the worker has finished with
        while let Ok(action) = result_rx.try_recv() {
            store.apply(&action);
        }

        let state = store.state();

        terminal.draw(|frame| {
            views::render(&state, frame);
        })?;

        if !state.running {
            break;
        }

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    action_tx.send(Action::Global(GlobalAction::KeyPressed(key)))?;
                }
            }
        }
    }

    Ok(())
}
