//! Display contrast adjuster
//!
//! The value is pushed to the panel on every frame while editing, so the
//! user sees the effect before saving with a long press.

use super::EditOutcome;
use crate::input::InputEvent;

/// Saturating contrast editor
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ContrastAdjuster {
    value: u8,
}

impl ContrastAdjuster {
    pub fn new(saved: u8) -> Self {
        Self { value: saved }
    }

    /// Contrast being edited
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Handle an input event; short clicks are ignored
    pub fn handle(&mut self, event: InputEvent) -> EditOutcome {
        match event {
            InputEvent::Up => self.value = self.value.saturating_add(1),
            InputEvent::Down => self.value = self.value.saturating_sub(1),
            InputEvent::Click => {}
            InputEvent::LongPress(_) => return EditOutcome::Commit,
        }
        EditOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_saturates_at_bounds() {
        let mut adjuster = ContrastAdjuster::new(254);
        adjuster.handle(InputEvent::Up);
        adjuster.handle(InputEvent::Up);
        assert_eq!(adjuster.value(), 255);

        let mut adjuster = ContrastAdjuster::new(1);
        adjuster.handle(InputEvent::Down);
        adjuster.handle(InputEvent::Down);
        assert_eq!(adjuster.value(), 0);
    }

    #[test]
    fn test_click_ignored_long_press_confirms() {
        let mut adjuster = ContrastAdjuster::new(64);
        assert_eq!(adjuster.handle(InputEvent::Click), EditOutcome::Continue);
        assert_eq!(adjuster.value(), 64);
        assert_eq!(adjuster.handle(InputEvent::LongPress(2000)), EditOutcome::Commit);
    }

    proptest! {
        #[test]
        fn steps_clamp_like_a_running_sum(
            start in any::<u8>(),
            ups in proptest::collection::vec(any::<bool>(), 0..600)
        ) {
            let mut adjuster = ContrastAdjuster::new(start);
            let mut expected = i32::from(start);
            for up in ups {
                if up {
                    adjuster.handle(InputEvent::Up);
                    expected = (expected + 1).min(255);
                } else {
                    adjuster.handle(InputEvent::Down);
                    expected = (expected - 1).max(0);
                }
                prop_assert_eq!(i32::from(adjuster.value()), expected);
            }
        }
    }
}
