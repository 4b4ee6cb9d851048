//! Network setup placeholder
//!
//! Nothing to edit yet. Any press leaves, saving the settings unchanged.

use super::EditOutcome;
use crate::input::InputEvent;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NetworkPlaceholder;

impl NetworkPlaceholder {
    pub fn handle(&mut self, event: InputEvent) -> EditOutcome {
        if event.is_press() {
            EditOutcome::Commit
        } else {
            EditOutcome::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_ignored_press_leaves() {
        let mut placeholder = NetworkPlaceholder;
        assert_eq!(placeholder.handle(InputEvent::Up), EditOutcome::Continue);
        assert_eq!(placeholder.handle(InputEvent::Click), EditOutcome::Commit);
        assert_eq!(placeholder.handle(InputEvent::LongPress(3000)), EditOutcome::Commit);
    }
}
