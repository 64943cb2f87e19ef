//! Periodic refresh driver

use std::sync::Arc;
use chrono::Local;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::state::{monotonic_now, AppState};

/// Background task that re-renders both clocks on every tick.
///
/// Ticks fire at the active cadence while the display is visible and at the
/// background cadence otherwise. A mode change rebuilds the interval at once.
pub async fn refresh_task(state: Arc<AppState>) {
    info!("Starting refresh task");

    let mut mode_rx = state.subscribe_mode();

    loop {
        let mode = *mode_rx.borrow_and_update();
        let period = state.settings.rates.period(mode);
        debug!("Refreshing in {} mode every {:?}", mode.as_str(), period);

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match state.render_frame(monotonic_now(), &Local::now()) {
                        Ok(frame) => state.publish_frame(frame),
                        Err(e) => error!("Failed to render frame: {}", e),
                    }
                }

                changed = mode_rx.changed() => {
                    if changed.is_err() {
                        warn!("Refresh mode channel closed, stopping refresh task");
                        return;
                    }
                    break;
                }
            }
        }
    }
}
