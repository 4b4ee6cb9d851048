//! Controller errors
//!
//! Failures of the display, storage and sensor collaborators, returned from
//! [`Controller::step`](crate::Controller::step) after the tick's state
//! changes have been made.

use usonic_display::DisplayError;
use usonic_hal::StorageError;

use crate::traits::SensorError;

/// Errors surfaced by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Drawing or flushing the panel failed
    Display(DisplayError),
    /// Saving settings failed
    Storage(StorageError),
    /// Temperature read failed during a run
    Sensor(SensorError),
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Display(e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Error::Sensor(e)
    }
}
