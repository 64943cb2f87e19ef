//! Stopwatch Clock - A single-screen stopwatch display
//! 
//! This is the main entry point for the stopwatch-clock application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use stopwatch_clock::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::{refresh_task, terminal_task},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr, the terminal renderer owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(format!("stopwatch_clock={},tower_http=info", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    let settings = config.display_settings();
    info!("Starting stopwatch-clock v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, separator='{}', clock={:?}, refresh={}Hz/{}Hz",
          config.host, config.port, settings.separator, settings.clock_style,
          settings.rates.active_hz, settings.rates.background_hz);

    let state = Arc::new(AppState::new(
        config.port,
        config.host.clone(),
        settings,
        config.initial_mode(),
    ));

    // Start the periodic refresh driver
    let refresh_state = Arc::clone(&state);
    let refresh = tokio::spawn(async move {
        refresh_task(refresh_state).await;
    });

    let terminal = if config.headless {
        None
    } else {
        let terminal_state = Arc::clone(&state);
        Some(tokio::spawn(async move {
            terminal_task(terminal_state).await;
        }))
    };

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start              - Start the stopwatch");
    info!("  POST /pause-or-resume    - Pause or resume");
    info!("  POST /action             - Press the Start/Pause/Resume button");
    info!("  POST /stop               - Reset to zero");
    info!("  POST /display/visible    - Refresh at {}Hz", settings.rates.active_hz);
    info!("  POST /display/background - Refresh at {}Hz", settings.rates.background_hz);
    info!("  GET  /frame              - Latest rendered frame");
    info!("  GET  /status             - Timer, clock and display status");
    info!("  GET  /health             - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    // Tear down the display so the refresh stops with the view
    refresh.abort();
    if let Some(terminal) = terminal {
        terminal.abort();
        println!();
    }

    info!("Shutdown complete");
    Ok(())
}
