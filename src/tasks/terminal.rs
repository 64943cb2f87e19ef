//! Terminal renderer for the stopwatch display

use std::sync::Arc;
use tokio::io::{stdout, AsyncWriteExt};
use tracing::{error, info};

use crate::state::{AppState, Frame};

/// Render a frame as a single carriage-return-prefixed terminal line
pub fn render_line(frame: &Frame) -> String {
    format!("\r{}   {:>12}   [{:^6}]  Stop ", frame.clock, frame.elapsed, frame.label)
}

/// Background task that redraws the terminal whenever a new frame is published
pub async fn terminal_task(state: Arc<AppState>) {
    info!("Starting terminal renderer");

    let mut frame_rx = state.subscribe_frames();
    let mut out = stdout();

    while frame_rx.changed().await.is_ok() {
        let line = render_line(&frame_rx.borrow_and_update());

        if let Err(e) = out.write_all(line.as_bytes()).await {
            error!("Failed to write to terminal: {}", e);
            return;
        }
        if let Err(e) = out.flush().await {
            error!("Failed to flush terminal: {}", e);
            return;
        }
    }

    info!("Frame channel closed, terminal renderer exiting");
}
