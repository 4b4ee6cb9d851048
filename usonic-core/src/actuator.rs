//! Actuator controller
//!
//! Owns the heater, the cleaner (ultrasonic transducer) and the display
//! backlight. The raw on/off operations are idempotent and independent;
//! [`ActuatorController::apply`] adds the heater/cleaner interlock.

use crate::traits::BinaryOutput;

/// Controlled output lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Actuator {
    /// Bath heating element
    Heater,
    /// Ultrasonic cleaning element
    Cleaner,
    /// Display backlight
    Backlight,
}

/// What the bath is doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// Both elements off
    #[default]
    Idle,
    /// Heater on, cleaner off
    Heating,
    /// Cleaner on, heater off
    Cleaning,
}

/// Observable heater/cleaner state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorState {
    pub heater_on: bool,
    pub cleaner_on: bool,
}

/// Actuator controller
pub struct ActuatorController<H, C, B> {
    heater: H,
    cleaner: C,
    backlight: B,
}

impl<H: BinaryOutput, C: BinaryOutput, B: BinaryOutput> ActuatorController<H, C, B> {
    /// Take ownership of the outputs, with heater and cleaner forced off
    pub fn new(heater: H, cleaner: C, backlight: B) -> Self {
        let mut controller = Self {
            heater,
            cleaner,
            backlight,
        };
        controller.all_off();
        controller
    }

    /// Switch an output on
    pub fn turn_on(&mut self, actuator: Actuator) {
        self.set(actuator, true);
    }

    /// Switch an output off
    pub fn turn_off(&mut self, actuator: Actuator) {
        self.set(actuator, false);
    }

    fn set(&mut self, actuator: Actuator, on: bool) {
        match actuator {
            Actuator::Heater => self.heater.set_on(on),
            Actuator::Cleaner => self.cleaner.set_on(on),
            Actuator::Backlight => self.backlight.set_on(on),
        }
    }

    /// Check whether an output is on
    pub fn is_on(&self, actuator: Actuator) -> bool {
        match actuator {
            Actuator::Heater => self.heater.is_on(),
            Actuator::Cleaner => self.cleaner.is_on(),
            Actuator::Backlight => self.backlight.is_on(),
        }
    }

    /// Heater and cleaner flags
    pub fn state(&self) -> ActuatorState {
        ActuatorState {
            heater_on: self.heater.is_on(),
            cleaner_on: self.cleaner.is_on(),
        }
    }

    /// Current activity derived from the output flags
    ///
    /// Returns `None` if both elements are on, which only raw
    /// `turn_on` calls can cause.
    pub fn activity(&self) -> Option<Activity> {
        match (self.heater.is_on(), self.cleaner.is_on()) {
            (false, false) => Some(Activity::Idle),
            (true, false) => Some(Activity::Heating),
            (false, true) => Some(Activity::Cleaning),
            (true, true) => None,
        }
    }

    /// Force heater and cleaner off
    pub fn all_off(&mut self) {
        self.heater.set_on(false);
        self.cleaner.set_on(false);
    }

    /// Switch to an activity, turning the outgoing element off first
    pub fn apply(&mut self, activity: Activity) {
        match activity {
            Activity::Idle => self.all_off(),
            Activity::Heating => {
                self.cleaner.set_on(false);
                self.heater.set_on(true);
            }
            Activity::Cleaning => {
                self.heater.set_on(false);
                self.cleaner.set_on(true);
            }
        }
    }

    /// Flip the backlight and return its new state
    pub fn toggle_backlight(&mut self) -> bool {
        let on = !self.backlight.is_on();
        self.backlight.set_on(on);
        on
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::cell::RefCell;

    /// Output that records its state and a shared switch log
    pub struct MockOutput<'a> {
        pub name: Actuator,
        pub on: bool,
        pub log: Option<&'a RefCell<heapless::Vec<(Actuator, bool), 16>>>,
    }

    impl<'a> MockOutput<'a> {
        pub fn new(name: Actuator) -> Self {
            Self {
                name,
                on: false,
                log: None,
            }
        }

        pub fn logged(
            name: Actuator,
            log: &'a RefCell<heapless::Vec<(Actuator, bool), 16>>,
        ) -> Self {
            Self {
                name,
                on: false,
                log: Some(log),
            }
        }
    }

    impl BinaryOutput for MockOutput<'_> {
        fn set_on(&mut self, on: bool) {
            self.on = on;
            if let Some(log) = self.log {
                let _ = log.borrow_mut().push((self.name, on));
            }
        }

        fn is_on(&self) -> bool {
            self.on
        }
    }

    fn controller() -> ActuatorController<MockOutput<'static>, MockOutput<'static>, MockOutput<'static>>
    {
        ActuatorController::new(
            MockOutput::new(Actuator::Heater),
            MockOutput::new(Actuator::Cleaner),
            MockOutput::new(Actuator::Backlight),
        )
    }

    #[test]
    fn test_starts_off() {
        let actuators = controller();
        assert_eq!(actuators.state(), ActuatorState::default());
        assert_eq!(actuators.activity(), Some(Activity::Idle));
    }

    #[test]
    fn test_turn_on_is_idempotent() {
        let mut actuators = controller();
        actuators.turn_on(Actuator::Heater);
        actuators.turn_on(Actuator::Heater);
        assert!(actuators.is_on(Actuator::Heater));

        actuators.turn_off(Actuator::Heater);
        actuators.turn_off(Actuator::Heater);
        assert!(!actuators.is_on(Actuator::Heater));
    }

    #[test]
    fn test_raw_operations_are_independent() {
        let mut actuators = controller();
        actuators.turn_on(Actuator::Heater);
        actuators.turn_on(Actuator::Cleaner);
        assert_eq!(actuators.activity(), None);

        actuators.all_off();
        assert_eq!(actuators.activity(), Some(Activity::Idle));
    }

    #[test]
    fn test_apply_switches_outgoing_off_first() {
        let log = RefCell::new(heapless::Vec::new());
        let mut actuators = ActuatorController::new(
            MockOutput::logged(Actuator::Heater, &log),
            MockOutput::logged(Actuator::Cleaner, &log),
            MockOutput::new(Actuator::Backlight),
        );
        actuators.apply(Activity::Heating);
        log.borrow_mut().clear();

        actuators.apply(Activity::Cleaning);
        assert_eq!(
            log.borrow().as_slice(),
            &[(Actuator::Heater, false), (Actuator::Cleaner, true)]
        );
        assert_eq!(actuators.activity(), Some(Activity::Cleaning));

        log.borrow_mut().clear();
        actuators.apply(Activity::Heating);
        assert_eq!(
            log.borrow().as_slice(),
            &[(Actuator::Cleaner, false), (Actuator::Heater, true)]
        );
    }

    #[test]
    fn test_all_off_leaves_backlight() {
        let mut actuators = controller();
        actuators.turn_on(Actuator::Backlight);
        actuators.apply(Activity::Cleaning);
        actuators.all_off();
        assert!(actuators.is_on(Actuator::Backlight));
        assert_eq!(actuators.state(), ActuatorState::default());
    }

    #[test]
    fn test_toggle_backlight() {
        let mut actuators = controller();
        assert!(actuators.toggle_backlight());
        assert!(!actuators.toggle_backlight());
    }
}
