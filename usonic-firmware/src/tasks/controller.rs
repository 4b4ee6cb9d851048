//! Controller task
//!
//! Steps the controller once per tick, or immediately when input arrives,
//! and redraws the panel.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Instant, Ticker};

use usonic_core::input::TickEvents;
use usonic_core::Error;

use crate::board::{BoardController, Panel};
use crate::channels::INPUT_CHANNEL;
use crate::config::CONTROLLER_CONFIG;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut controller: BoardController, mut panel: Panel) {
    info!("Controller task started");

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(CONTROLLER_CONFIG.tick_ms)));
    let mut last_error: Option<Error> = None;

    loop {
        let events = match select(INPUT_CHANNEL.receive(), ticker.next()).await {
            Either::First(events) => events,
            Either::Second(()) => TickEvents::NONE,
        };

        let result = controller.step(Instant::now().as_millis(), events, &mut panel);
        report(&mut last_error, result);
    }
}

/// Log errors once per change instead of once per tick
fn report(last_error: &mut Option<Error>, result: Result<(), Error>) {
    match result {
        Ok(()) => {
            if let Some(e) = last_error.take() {
                info!("Recovered from {}", e);
            }
        }
        Err(e) => {
            if *last_error != Some(e) {
                warn!("Controller error: {}", e);
                *last_error = Some(e);
            }
        }
    }
}
