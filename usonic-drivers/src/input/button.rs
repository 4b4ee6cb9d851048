//! Debounced push button
//!
//! Sampled at the input tick rate. A raw level has to hold for the debounce
//! interval before it is accepted. Press and release times are taken from
//! the first raw edge, so bounce does not shorten or stretch the measured
//! hold time.

/// Debounced button with release-duration latch
#[derive(Debug, Clone)]
pub struct DebouncedButton {
    debounce_ms: u32,
    /// Accepted level
    pressed: bool,
    /// Latest raw level and when it first appeared
    candidate: bool,
    candidate_since_ms: u32,
    /// When the accepted press began
    pressed_at_ms: u32,
    /// Hold time of the last release, until taken
    release: Option<u32>,
}

impl DebouncedButton {
    /// Create a released button
    pub fn new(debounce_ms: u32) -> Self {
        Self {
            debounce_ms,
            pressed: false,
            candidate: false,
            candidate_since_ms: 0,
            pressed_at_ms: 0,
            release: None,
        }
    }

    /// Feed one sample
    ///
    /// # Arguments
    /// - `pressed`: Raw switch level (true = closed)
    /// - `now_ms`: Monotonic time, wrapping
    pub fn update(&mut self, pressed: bool, now_ms: u32) {
        if pressed != self.candidate {
            self.candidate = pressed;
            self.candidate_since_ms = now_ms;
            return;
        }

        let stable_for = now_ms.wrapping_sub(self.candidate_since_ms);
        if self.candidate != self.pressed && stable_for >= self.debounce_ms {
            self.pressed = self.candidate;
            if self.pressed {
                self.pressed_at_ms = self.candidate_since_ms;
            } else {
                self.release = Some(self.candidate_since_ms.wrapping_sub(self.pressed_at_ms));
            }
        }
    }

    /// Debounced level
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Take the hold time of the last release, if not yet taken
    pub fn take_release(&mut self) -> Option<u32> {
        self.release.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sample `level` every 10 ms over `[from, to)`
    fn hold(button: &mut DebouncedButton, level: bool, from: u32, to: u32) {
        for t in (from..to).step_by(10) {
            button.update(level, t);
        }
    }

    #[test]
    fn test_clean_press_release() {
        let mut button = DebouncedButton::new(50);
        hold(&mut button, false, 0, 100);
        hold(&mut button, true, 100, 400);
        assert!(button.is_pressed());
        assert_eq!(button.take_release(), None);

        hold(&mut button, false, 400, 500);
        assert!(!button.is_pressed());
        assert_eq!(button.take_release(), Some(300));
        assert_eq!(button.take_release(), None);
    }

    #[test]
    fn test_bounce_is_ignored() {
        let mut button = DebouncedButton::new(50);
        // Chatter shorter than the debounce interval
        for (i, t) in (0..40).step_by(10).enumerate() {
            button.update(i % 2 == 0, t);
        }
        hold(&mut button, false, 40, 200);
        assert!(!button.is_pressed());
        assert_eq!(button.take_release(), None);
    }

    #[test]
    fn test_long_hold_measured() {
        let mut button = DebouncedButton::new(50);
        hold(&mut button, true, 0, 1500);
        hold(&mut button, false, 1500, 1600);
        assert_eq!(button.take_release(), Some(1500));
    }

    #[test]
    fn test_clock_wrap() {
        let mut button = DebouncedButton::new(50);
        let start = u32::MAX - 95;
        let mut t = start;
        for _ in 0..30 {
            button.update(true, t);
            t = t.wrapping_add(10);
        }
        let released_at = t;
        for _ in 0..10 {
            button.update(false, t);
            t = t.wrapping_add(10);
        }
        assert_eq!(button.take_release(), Some(released_at.wrapping_sub(start)));
    }
}
