//! Countdown state of a run

use crate::actuator::Activity;

/// Where a run stands after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunPhase {
    /// Time remaining
    Running,
    /// Countdown reached zero
    Done,
}

/// A timed run in progress
///
/// Created when the run starts and dropped when it ends; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimedRun {
    started_ms: u64,
    total_s: u32,
    /// Last good reading (0.1°F), `None` while the sensor is faulted
    temperature_x10: Option<i16>,
    activity: Activity,
}

impl TimedRun {
    /// Start a run of `minutes` at `now_ms`
    pub fn new(now_ms: u64, minutes: u8) -> Self {
        Self {
            started_ms: now_ms,
            total_s: u32::from(minutes) * 60,
            temperature_x10: None,
            activity: Activity::Idle,
        }
    }

    /// Run length in seconds
    pub fn total_seconds(&self) -> u32 {
        self.total_s
    }

    /// Whole seconds since the start
    pub fn elapsed_seconds(&self, now_ms: u64) -> u32 {
        let elapsed = now_ms.saturating_sub(self.started_ms) / 1000;
        u32::try_from(elapsed).unwrap_or(u32::MAX)
    }

    /// Seconds left, zero once done
    pub fn remaining_seconds(&self, now_ms: u64) -> u32 {
        self.total_s.saturating_sub(self.elapsed_seconds(now_ms))
    }

    /// Phase at `now_ms`
    pub fn phase(&self, now_ms: u64) -> RunPhase {
        if self.remaining_seconds(now_ms) == 0 {
            RunPhase::Done
        } else {
            RunPhase::Running
        }
    }

    /// Record this tick's reading and the activity chosen for it
    pub fn record(&mut self, temperature_x10: Option<i16>, activity: Activity) {
        self.temperature_x10 = temperature_x10;
        self.activity = activity;
    }

    /// Last good reading (0.1°F)
    pub fn temperature_x10(&self) -> Option<i16> {
        self.temperature_x10
    }

    /// Activity applied on the last tick
    pub fn activity(&self) -> Activity {
        self.activity
    }
}
