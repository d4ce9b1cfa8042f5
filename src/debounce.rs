// src/debounce.rs
use crate::gestures::Gesture;
use crate::landmarks::Hand;
use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Start,
    End,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Start => write!(f, "start"),
            EventKind::End => write!(f, "end"),
        }
    }
}

/// Discrete output of the pipeline: one accepted gesture change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureEvent {
    pub hand: Hand,
    pub kind: EventKind,
    pub gesture: Gesture,
    pub previous: Option<Gesture>,
}

/// An accepted change of a hand's stable gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureTransition {
    pub hand: Hand,
    pub previous: Option<Gesture>,
    pub current: Gesture,
}

/// Requires a raw classification to persist for `window` consecutive
/// observed frames before it becomes the hand's accepted gesture.
/// Frames where the hand is absent simply never reach `observe`, so
/// accepted gestures survive transient detection loss.
pub struct GestureDebouncer {
    hand: Hand,
    window: usize,
    recent: VecDeque<Gesture>,
    accepted: Option<Gesture>,
}

impl GestureDebouncer {
    pub fn new(hand: Hand, window: usize) -> Self {
        let window = window.max(1);
        Self {
            hand,
            window,
            recent: VecDeque::with_capacity(window),
            accepted: None,
        }
    }

    pub fn accepted(&self) -> Option<Gesture> {
        self.accepted
    }

    /// Feeds one raw per-frame classification. Returns the transition if
    /// this frame completed an uninterrupted run of `window` identical
    /// raws that differ from the currently accepted gesture.
    pub fn observe(&mut self, raw: Gesture) -> Option<GestureTransition> {
        if self.recent.len() == self.window {
            self.recent.pop_front();
        }
        self.recent.push_back(raw);

        if Some(raw) != self.accepted
            && self.recent.len() == self.window
            && self.recent.iter().all(|&g| g == raw)
        {
            let previous = self.accepted.replace(raw);
            return Some(GestureTransition {
                hand: self.hand,
                previous,
                current: raw,
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer() -> GestureDebouncer {
        GestureDebouncer::new(Hand::Right, 3)
    }

    #[test]
    fn accepts_after_exactly_three_identical_frames() {
        let mut d = debouncer();
        assert_eq!(d.observe(Gesture::Fist), None);
        assert_eq!(d.observe(Gesture::Fist), None);
        let t = d.observe(Gesture::Fist).expect("third frame accepts");
        assert_eq!(t.current, Gesture::Fist);
        assert_eq!(t.previous, None);
        assert_eq!(d.accepted(), Some(Gesture::Fist));
    }

    #[test]
    fn interruption_restarts_the_run() {
        let mut d = debouncer();
        assert_eq!(d.observe(Gesture::Peace), None);
        assert_eq!(d.observe(Gesture::Peace), None);
        assert_eq!(d.observe(Gesture::Fist), None);
        // The fifo must re-accumulate from the differing value.
        assert_eq!(d.observe(Gesture::Peace), None);
        assert_eq!(d.observe(Gesture::Peace), None);
        assert!(d.observe(Gesture::Peace).is_some());
    }

    #[test]
    fn steady_gesture_fires_only_once() {
        let mut d = debouncer();
        d.observe(Gesture::OpenHand);
        d.observe(Gesture::OpenHand);
        assert!(d.observe(Gesture::OpenHand).is_some());
        for _ in 0..10 {
            assert_eq!(d.observe(Gesture::OpenHand), None);
        }
    }

    #[test]
    fn transition_carries_previous_gesture() {
        let mut d = debouncer();
        for _ in 0..3 {
            d.observe(Gesture::OpenHand);
        }
        d.observe(Gesture::Fist);
        d.observe(Gesture::Fist);
        let t = d.observe(Gesture::Fist).unwrap();
        assert_eq!(t.previous, Some(Gesture::OpenHand));
        assert_eq!(t.current, Gesture::Fist);
    }
}
