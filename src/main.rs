use std::fs::File;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use posture_watch::{
    app, events, ui, App, DashboardState, Document, FileSource, HttpSource, Poller, PollerHandle,
    Settings, SnapshotSource, ViewBindings,
};

#[derive(Parser, Debug)]
#[command(name = "posture-watch")]
#[command(about = "Terminal dashboard for a posture monitor's /data endpoint")]
struct Args {
    /// Base URL of the posture monitor (default http://127.0.0.1:5000)
    #[arg(short, long, conflicts_with = "file")]
    endpoint: Option<String>,

    /// Read snapshots from a JSON file instead of HTTP
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Config file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Poll interval (e.g., "1s", "500ms")
    #[arg(short, long)]
    interval: Option<String>,

    /// Per-request timeout (e.g., "3s"); none by default
    #[arg(long)]
    timeout: Option<String>,

    /// Print one line per update instead of drawing the TUI
    #[arg(long, conflicts_with = "export")]
    headless: bool,

    /// Poll once, write the dashboard state as JSON to this file, and exit
    #[arg(short = 'x', long)]
    export: Option<PathBuf>,

    /// Write logs to this file (the TUI otherwise keeps logs off the screen)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// How the process presents updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Tui,
    Headless,
    Export,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = Settings::load(args.config.as_deref())?;
    if let Some(endpoint) = &args.endpoint {
        settings.endpoint = endpoint.clone();
    }
    if let Some(interval) = &args.interval {
        settings.interval = interval.clone();
    }
    if let Some(timeout) = &args.timeout {
        settings.request_timeout = Some(timeout.clone());
    }
    // A file source never touches the endpoint.
    if args.file.is_none() {
        settings.validate()?;
    }

    let mode = if args.export.is_some() {
        Mode::Export
    } else if args.headless {
        Mode::Headless
    } else {
        Mode::Tui
    };
    init_tracing(&settings, args.log_file.as_deref(), mode)?;

    let source: Box<dyn SnapshotSource> = match &args.file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(HttpSource::new(
            &settings.endpoint,
            &settings.path,
            settings.request_timeout()?,
        )?),
    };
    let description = source.description().to_string();
    let interval = settings.interval()?;

    // Build a tokio runtime for the poller
    let rt = tokio::runtime::Runtime::new()?;

    let document = Arc::new(Document::dashboard());
    let poller = Poller::new(source, ViewBindings::resolve(&document)).with_interval(interval);

    match mode {
        Mode::Export => {
            let export_path = args.export.unwrap_or_default();
            rt.block_on(export_once(poller, &document, &export_path))
        }
        Mode::Headless => rt.block_on(async {
            run_headless(poller.spawn(), &document, tokio::signal::ctrl_c()).await
        }),
        Mode::Tui => {
            let handle = {
                let _guard = rt.enter();
                poller.spawn()
            };
            let result = run_tui(&document, &handle, description, interval);

            // Signal shutdown
            rt.block_on(handle.stop())?;
            result
        }
    }
}

/// Set up `tracing`. `RUST_LOG` wins over the configured filter.
///
/// The TUI owns the terminal, so it only logs when given a file.
fn init_tracing(settings: &Settings, log_file: Option<&Path>, mode: Mode) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .context("Invalid log filter")?;

    let (writer, ansi) = match (log_file, mode) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            (BoxMakeWriter::new(Arc::new(file)), false)
        }
        (None, Mode::Tui) => return Ok(()),
        (None, _) => (BoxMakeWriter::new(io::stderr), true),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}

/// Run one cycle immediately and write what the dashboard would show.
async fn export_once(mut poller: Poller, document: &Document, export_path: &Path) -> Result<()> {
    poller.poll_once().await?;

    let state = DashboardState::read(document);
    app::write_state(&state, export_path)?;

    println!("Exported dashboard state to: {}", export_path.display());
    Ok(())
}

/// Print each successful update until `shutdown` completes (Ctrl-C in
/// the binary).
async fn run_headless<F: Future>(
    handle: PollerHandle,
    document: &Document,
    shutdown: F,
) -> Result<()> {
    let mut status = handle.status();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Interrupted, stopping");
                break;
            }
            changed = status.changed() => {
                if changed.is_err() {
                    break;
                }
                let applied = status.borrow_and_update().last_error.is_none();
                if applied {
                    println!("{}", DashboardState::read(document));
                }
            }
        }
    }

    handle.stop().await?;
    Ok(())
}

/// Run the TUI until the user quits
fn run_tui(
    document: &Arc<Document>,
    handle: &PollerHandle,
    description: String,
    interval: Duration,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    let mut app = App::new(document.clone(), handle.control(), description, interval);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll for events with a short timeout; the poller updates the
        // document in the background, so redraws pick up new data.
        if let Some(Event::Key(key)) = events::poll_event(Duration::from_millis(100))? {
            events::handle_key_event(app, key);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use posture_watch::{ChannelSource, StatusSnapshot};
    use tokio::sync::oneshot;

    #[tokio::test(start_paused = true)]
    async fn test_headless_stops_on_shutdown() {
        let document = Arc::new(Document::dashboard());
        let (tx, source) = ChannelSource::create("test");
        tx.send_replace(StatusSnapshot {
            posture: Some("Good".to_string()),
            ..Default::default()
        });

        let handle = Poller::new(Box::new(source), ViewBindings::resolve(&document)).spawn();
        let mut status = handle.status();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let run = tokio::spawn({
            let document = document.clone();
            async move { run_headless(handle, &document, stop_rx).await }
        });

        for _ in 0..3 {
            status.changed().await.unwrap();
        }
        stop_tx.send(()).unwrap();
        run.await.unwrap().unwrap();

        // The poller was stopped and joined, so its status channel is closed.
        assert!(status.has_changed().is_err());
        assert_eq!(document.element("posture-status").unwrap().text(), "Good");
    }
}
