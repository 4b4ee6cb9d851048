//! Input task
//!
//! Samples the encoder and button every millisecond and turns them into
//! [`TickEvents`] once per controller tick.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use usonic_core::input::InputSource;
use usonic_drivers::input::Knob;
use usonic_hal::InputPin;
use usonic_hal_rp2040::RpInput;

use crate::channels::INPUT_CHANNEL;
use crate::config::CONTROLLER_CONFIG;

/// Pin sampling interval in milliseconds
pub const SAMPLE_INTERVAL_MS: u64 = 1;

/// Input task - decodes the knob and publishes events
#[embassy_executor::task]
pub async fn input_task(a: RpInput<'static>, b: RpInput<'static>, button: RpInput<'static>) {
    info!("Input task started");

    let config = CONTROLLER_CONFIG;
    let samples_per_tick = (u64::from(config.tick_ms) / SAMPLE_INTERVAL_MS).max(1);

    let mut knob = Knob::new(&config, a.is_high(), b.is_high());
    let mut source = InputSource::new(&mut knob, config.long_press_ms);

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_INTERVAL_MS));
    let start = Instant::now();
    let mut samples = 0u64;

    loop {
        ticker.next().await;

        let now_ms = start.elapsed().as_millis() as u32;
        knob.sample(a.is_high(), b.is_high(), button.is_low(), now_ms);

        samples += 1;
        if samples % samples_per_tick != 0 {
            continue;
        }

        let events = source.poll(&mut knob);
        if events.is_empty() {
            continue;
        }
        debug!("Input: {}", events);
        if INPUT_CHANNEL.try_send(events).is_err() {
            warn!("Input channel full, dropping {}", events);
        }
    }
}
