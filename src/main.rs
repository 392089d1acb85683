use app_fotos::adapters::ReqwestHttpClient;
use app_fotos::app::{App, AppMessage};
use app_fotos::cli::{parse_args, run_cli_command, usage};
use app_fotos::config::AppConfig;
use app_fotos::terminal::{setup_panic_hook, TerminalManager};
use app_fotos::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    // Handle flags before any initialization
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, usage());
            std::process::exit(2);
        }
    };
    let cli_code = run_cli_command(command);

    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    match logging::init() {
        Ok(Some(path)) => tracing::info!("Logging to {}", path.display()),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }

    let config = AppConfig::from_env();
    if let Err(e) = config.validate() {
        // The login screen reports this again when the user tries to connect
        tracing::warn!("Configuration incomplete: {}", e);
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let mut app = App::new(config, Arc::new(ReqwestHttpClient::new()));
        if let Some(code) = cli_code {
            tracing::info!("Using authorization code from the command line");
            app.complete_login(code);
        }

        let mut term_manager = TerminalManager::new()?;
        let result = run_app(term_manager.terminal(), &mut app).await;
        term_manager.restore()?;

        if let Err(ref e) = result {
            tracing::warn!("App exited with error: {}", e);
        }
        tracing::info!("Exiting");
        result
    })
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        // 16ms tick drives the spinner
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.handle_paste(&text);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }
    }
}
