// src/gestures.rs
use crate::fingers::FINGER_COUNT;
use crate::geometry::Vec2;
use crate::landmarks::{THUMB_BASE, THUMB_TIP};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    RockAndRoll,
    ThumbsUp,
    ThumbsDown,
    OneFinger,
    Peace,
    OpenHand,
    Fist,
    FourFingers,
    ThreeFingers,
    NoGesture,
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gesture::RockAndRoll => "Rock & Roll",
            Gesture::ThumbsUp => "Thumbs Up",
            Gesture::ThumbsDown => "Thumbs Down",
            Gesture::OneFinger => "1 finger",
            Gesture::Peace => "Peace",
            Gesture::OpenHand => "Open Hand",
            Gesture::Fist => "Fist",
            Gesture::FourFingers => "4 fingers",
            Gesture::ThreeFingers => "3 fingers",
            Gesture::NoGesture => "No Gesture",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy)]
enum FingerState {
    Open,
    Closed,
    Any,
}

#[derive(Debug, Clone, Copy)]
enum RuleOutcome {
    Fixed(Gesture),
    /// Thumb alone extended; up vs down is decided by landmark geometry.
    ThumbVertical,
}

use FingerState::{Any, Closed, Open};

/// Ordered rule table, first match wins. Each row constrains the five
/// fingers thumb-first; a score above zero is Open, at or below is Closed.
const RULES: &[([FingerState; FINGER_COUNT], RuleOutcome)] = &[
    ([Any, Open, Closed, Closed, Open], RuleOutcome::Fixed(Gesture::RockAndRoll)),
    ([Open, Closed, Closed, Closed, Closed], RuleOutcome::ThumbVertical),
    ([Closed, Open, Closed, Closed, Closed], RuleOutcome::Fixed(Gesture::OneFinger)),
    ([Closed, Open, Open, Closed, Closed], RuleOutcome::Fixed(Gesture::Peace)),
    ([Open, Open, Open, Open, Open], RuleOutcome::Fixed(Gesture::OpenHand)),
    ([Closed, Closed, Closed, Closed, Closed], RuleOutcome::Fixed(Gesture::Fist)),
    ([Closed, Open, Open, Open, Open], RuleOutcome::Fixed(Gesture::FourFingers)),
    ([Closed, Open, Open, Open, Closed], RuleOutcome::Fixed(Gesture::ThreeFingers)),
];

fn pattern_matches(pattern: &[FingerState; FINGER_COUNT], scores: &[f64; FINGER_COUNT]) -> bool {
    pattern.iter().zip(scores).all(|(state, &score)| match state {
        Open => score > 0.0,
        Closed => score <= 0.0,
        Any => true,
    })
}

/// Maps an openness vector to a discrete gesture. The raw landmarks are
/// only consulted for the thumbs up/down split: screen y grows downward,
/// so a tip above its base joint has the smaller coordinate.
pub fn classify(openness: &[f64; FINGER_COUNT], landmarks: &[Vec2]) -> Gesture {
    for (pattern, outcome) in RULES {
        if pattern_matches(pattern, openness) {
            return match outcome {
                RuleOutcome::Fixed(gesture) => *gesture,
                RuleOutcome::ThumbVertical => {
                    if landmarks[THUMB_TIP].y < landmarks[THUMB_BASE].y {
                        Gesture::ThumbsUp
                    } else {
                        Gesture::ThumbsDown
                    }
                }
            };
        }
    }
    Gesture::NoGesture
}
