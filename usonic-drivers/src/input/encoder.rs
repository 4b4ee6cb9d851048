//! Quadrature encoder decoder
//!
//! Decodes raw A/B levels with a Gray-code transition table. Transitions
//! that skip a state (both lines changed between samples) are noise and
//! are dropped. The detent position only moves once a whole detent's worth
//! of transitions has accumulated.

/// Count change for each (previous, current) AB state pair
///
/// Index is `previous << 2 | current`, with the state packed as `A << 1 | B`.
/// A leading B counts up: 00 -> 10 -> 11 -> 01 -> 00.
const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

fn pack(a: bool, b: bool) -> u8 {
    (u8::from(a) << 1) | u8::from(b)
}

/// Quadrature encoder state
#[derive(Debug, Clone)]
pub struct QuadratureEncoder {
    state: u8,
    /// Raw transition count
    count: i32,
    /// Detent position
    position: i16,
    clicks_per_step: i32,
}

impl QuadratureEncoder {
    /// Create a decoder resting at the current A/B levels
    pub fn new(a: bool, b: bool, clicks_per_step: u8) -> Self {
        Self {
            state: pack(a, b),
            count: 0,
            position: 0,
            clicks_per_step: i32::from(clicks_per_step.max(1)),
        }
    }

    /// Feed a sample of the A/B lines
    ///
    /// Returns the raw count change (-1, 0 or 1).
    pub fn update(&mut self, a: bool, b: bool) -> i8 {
        let next = pack(a, b);
        let delta = TRANSITIONS[usize::from((self.state << 2) | next)];
        self.state = next;

        if delta != 0 {
            self.count = self.count.wrapping_add(i32::from(delta));
            if self.count.rem_euclid(self.clicks_per_step) == 0 {
                self.position = (self.count / self.clicks_per_step) as i16;
            }
        }
        delta
    }

    /// Detent position, wrapping at the `i16` bounds
    pub fn position(&self) -> i16 {
        self.position
    }

    /// Raw transition count
    pub fn count(&self) -> i32 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One detent, A leading B, starting from 11
    const FORWARD: [(bool, bool); 4] = [(false, true), (false, false), (true, false), (true, true)];

    /// One detent, B leading A, starting from 11
    const BACKWARD: [(bool, bool); 4] = [(true, false), (false, false), (false, true), (true, true)];

    fn turn(encoder: &mut QuadratureEncoder, seq: &[(bool, bool)]) {
        for &(a, b) in seq {
            encoder.update(a, b);
        }
    }

    #[test]
    fn test_full_detent_each_way() {
        let mut encoder = QuadratureEncoder::new(true, true, 4);
        turn(&mut encoder, &FORWARD);
        assert_eq!(encoder.count(), 4);
        assert_eq!(encoder.position(), 1);

        turn(&mut encoder, &BACKWARD);
        turn(&mut encoder, &BACKWARD);
        assert_eq!(encoder.position(), -1);
    }

    #[test]
    fn test_partial_detent_does_not_move() {
        let mut encoder = QuadratureEncoder::new(true, true, 4);
        turn(&mut encoder, &FORWARD[..3]);
        assert_eq!(encoder.position(), 0);

        // Back out of the half turn
        turn(&mut encoder, &[(false, false), (false, true), (true, true)]);
        assert_eq!(encoder.count(), 0);
        assert_eq!(encoder.position(), 0);
    }

    #[test]
    fn test_skipped_state_is_rejected() {
        let mut encoder = QuadratureEncoder::new(true, true, 4);
        assert_eq!(encoder.update(false, false), 0);
        assert_eq!(encoder.count(), 0);
    }

    #[test]
    fn test_repeated_sample_is_ignored() {
        let mut encoder = QuadratureEncoder::new(true, true, 4);
        assert_eq!(encoder.update(true, true), 0);
        assert_eq!(encoder.update(false, true), 1);
        assert_eq!(encoder.update(false, true), 0);
    }

    #[test]
    fn test_single_click_encoder() {
        let mut encoder = QuadratureEncoder::new(true, true, 1);
        encoder.update(false, true);
        assert_eq!(encoder.position(), 1);
    }
}
