// src/landmarks.rs
use crate::config::TrackerError;
use crate::geometry::Vec2;
use anyhow::Result;
use std::fmt;
use std::str::FromStr;

pub const LANDMARK_COUNT: usize = 21;
pub const WRIST: usize = 0;
pub const THUMB_BASE: usize = 2;
pub const THUMB_TIP: usize = 4;
/// Tip landmark for each finger, thumb first. The matching base joint
/// is always two indices below the tip.
pub const FINGERTIPS: [usize; 5] = [4, 8, 12, 16, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    pub fn mirrored(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hand::Left => write!(f, "left"),
            Hand::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Hand {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Hand::Left),
            "right" => Ok(Hand::Right),
            other => Err(TrackerError::UnknownHand(other.to_string())),
        }
    }
}

/// One detected hand: anatomical handedness plus 21 landmarks
/// normalized to [0,1] of the detection frame.
#[derive(Debug, Clone)]
pub struct HandObservation {
    pub hand: Hand,
    pub landmarks: Vec<Vec2>,
}

impl HandObservation {
    /// Builds an observation from a provider-reported label. The provider
    /// assumes a mirrored camera, so the label is inverted here, once, and
    /// nowhere else.
    pub fn from_provider(reported: Hand, landmarks: Vec<Vec2>) -> Result<Self, TrackerError> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(TrackerError::BadLandmarkCount(landmarks.len()));
        }
        Ok(Self {
            hand: reported.mirrored(),
            landmarks,
        })
    }

    pub fn wrist(&self) -> Vec2 {
        self.landmarks[WRIST]
    }
}

/// Zero or more hands seen in a single video frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub hands: Vec<HandObservation>,
}

/// The upstream vision-inference step. How landmarks are computed is
/// opaque to the rest of the crate; `None` means the stream has ended.
pub trait LandmarkProvider {
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

/// Builds a hand with the given fingers extended, thumb first.
/// Fingers fan upward from the wrist; an open finger continues along the
/// wrist-to-joint direction, a closed one folds back toward the wrist.
pub fn synth_hand(open: [bool; 5]) -> Vec<Vec2> {
    let wrist = Vec2::new(0.5, 0.8);
    let mut lms = vec![wrist; LANDMARK_COUNT];

    for (finger, &tip) in FINGERTIPS.iter().enumerate() {
        let base = Vec2::new(0.35 + 0.075 * finger as f64, 0.6);
        let dir = (base - wrist).normalize();
        let tip_pos = if open[finger] {
            base + dir * 0.12
        } else {
            base - dir * 0.12
        };
        lms[tip - 2] = base;
        lms[tip] = tip_pos;
        lms[tip - 1] = (base + tip_pos) / 2.0;
    }
    lms
}

/// Procedural landmark source so the whole pipeline can run without a
/// camera or inference backend. Cycles through a scripted pose sequence
/// that arms mouse mode, clicks, and disarms again.
pub struct SimulatedProvider {
    frame: usize,
    total: usize,
    frames_per_pose: usize,
}

const SIM_SCRIPT: &[[bool; 5]] = &[
    [true, true, true, true, true],      // open hand
    [true, false, false, false, false],  // thumbs up -> arm
    [false, false, false, false, false], // fist -> click
    [true, false, false, false, false],  // thumbs up again
    [true, true, true, true, true],      // open hand -> disarm
];

impl SimulatedProvider {
    pub fn new(total: usize) -> Self {
        Self {
            frame: 0,
            total,
            frames_per_pose: 12,
        }
    }
}

impl LandmarkProvider for SimulatedProvider {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if self.frame >= self.total {
            return Ok(None);
        }
        let t = self.frame as f64 * 0.033;
        let pose = SIM_SCRIPT[(self.frame / self.frames_per_pose) % SIM_SCRIPT.len()];

        // Slow drift so the movement drivers have something to chase.
        let drift = Vec2::new(0.08 * (t * 0.5).sin(), 0.05 * (t * 0.3).cos());
        let lms: Vec<Vec2> = synth_hand(pose).into_iter().map(|p| p + drift).collect();

        // The simulated camera is mirrored like a real one, so the label
        // here reads Left for what the session will treat as the right hand.
        let obs = HandObservation::from_provider(Hand::Left, lms)?;
        self.frame += 1;
        Ok(Some(Frame { hands: vec![obs] }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_label_is_inverted_once() {
        let obs = HandObservation::from_provider(Hand::Left, synth_hand([true; 5])).unwrap();
        assert_eq!(obs.hand, Hand::Right);
    }

    #[test]
    fn short_landmark_list_is_rejected() {
        let err = HandObservation::from_provider(Hand::Left, vec![Vec2::zeros(); 5]).unwrap_err();
        assert!(matches!(err, TrackerError::BadLandmarkCount(5)));
    }

    #[test]
    fn simulated_provider_ends_cleanly() {
        let mut provider = SimulatedProvider::new(2);
        assert!(provider.next_frame().unwrap().is_some());
        assert!(provider.next_frame().unwrap().is_some());
        assert!(provider.next_frame().unwrap().is_none());
    }

    #[test]
    fn synth_hand_has_full_landmark_set() {
        assert_eq!(synth_hand([false; 5]).len(), LANDMARK_COUNT);
    }
}
