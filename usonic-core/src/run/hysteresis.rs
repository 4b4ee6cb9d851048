//! Heat/clean selection
//!
//! Below `set - offset` the bath heats with the transducer idle; at or above
//! it the transducer runs with the heater off. The two never run together.

use crate::actuator::Activity;

/// Choose the activity for a bath temperature
///
/// # Arguments
/// - `temp_x10`: Bath temperature in 0.1°F units
/// - `set_f`: Target temperature (°F)
/// - `offset_f`: Heating band below the target (°F)
pub fn select_activity(temp_x10: i16, set_f: u8, offset_f: u8) -> Activity {
    let threshold_x10 = (i32::from(set_f) - i32::from(offset_f)) * 10;
    if i32::from(temp_x10) < threshold_x10 {
        Activity::Heating
    } else {
        Activity::Cleaning
    }
}
