//! Debounce gate between the classifier and the turn machines.
//!
//! A single physical swipe spans dozens of frames; without gating it would
//! fire dozens of turns. The gate closes on each accepted action and reopens
//! on its own once the cooldown has elapsed.

use std::time::{Duration, Instant};

/// Cooldown used by both turn-based games.
pub const TURN_COOLDOWN: Duration = Duration::from_secs(2);

pub struct ActionGate {
    cooldown: Duration,
    open: bool,
    last_fire: Option<Instant>,
}

impl ActionGate {
    pub fn new(cooldown: Duration) -> Self {
        Self { cooldown, open: true, last_fire: None }
    }

    /// Request an action trigger for a qualifying classifier event.
    /// Returns true at most once per cooldown window.
    pub fn fire(&mut self, now: Instant) -> bool {
        if !self.open {
            if let Some(last) = self.last_fire {
                if now.duration_since(last) > self.cooldown {
                    self.open = true;
                }
            }
        }
        if self.open {
            self.open = false;
            self.last_fire = Some(now);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_immediately_when_fresh() {
        let mut gate = ActionGate::new(TURN_COOLDOWN);
        assert!(gate.fire(Instant::now()));
    }

    #[test]
    fn stays_closed_within_the_cooldown() {
        let mut gate = ActionGate::new(TURN_COOLDOWN);
        let t0 = Instant::now();

        assert!(gate.fire(t0));
        assert!(!gate.fire(t0 + Duration::from_millis(33)));
        assert!(!gate.fire(t0 + Duration::from_millis(1999)));
    }

    #[test]
    fn reopens_after_the_cooldown() {
        let mut gate = ActionGate::new(TURN_COOLDOWN);
        let t0 = Instant::now();

        assert!(gate.fire(t0));
        assert!(gate.fire(t0 + Duration::from_millis(2001)));
    }

    #[test]
    fn at_most_one_trigger_per_window_at_any_input_rate() {
        let mut gate = ActionGate::new(TURN_COOLDOWN);
        let t0 = Instant::now();

        // Ten seconds of qualifying events at ~30 fps.
        let fired = (0..300)
            .filter(|i| gate.fire(t0 + Duration::from_millis(i * 33)))
            .count();

        // One fire per ~2 s window across 10 s.
        assert_eq!(fired, 5);
    }
}
