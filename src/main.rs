use anyhow::{Context, Result};
use clap::Parser;
use kioskflow::cli::Cli;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

/// File logging; the terminal belongs to the kiosk UI.
fn init_logging(level: Option<&str>) -> Result<WorkerGuard> {
    let log_dir = kioskflow::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    let file_appender = tracing_appender::rolling::never(&log_dir, "kioskflow.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    setup_panic_hook();

    let cli = Cli::parse();
    let guard = init_logging(cli.log_level.as_deref())?;

    let result = cli.execute();
    if let Err(e) = &result {
        tracing::error!("{:#}", e);
    }

    drop(guard);
    result
}
