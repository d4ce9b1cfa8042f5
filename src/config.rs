// src/config.rs
use crate::landmarks::Hand;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown pointer mode '{0}' (expected none, anchor-mouse or absolute-mouse)")]
    UnknownMode(String),
    #[error("unknown hand '{0}' (expected left or right)")]
    UnknownHand(String),
    #[error("expected 21 hand landmarks, got {0}")]
    BadLandmarkCount(usize),
}

/// Which movement driver runs while mouse mode is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    None,
    AnchorMouse,
    AbsoluteMouse,
}

impl FromStr for PointerMode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(PointerMode::None),
            "anchor-mouse" | "anchorMouse" => Ok(PointerMode::AnchorMouse),
            "absolute-mouse" | "absoluteMouse" => Ok(PointerMode::AbsoluteMouse),
            other => Err(TrackerError::UnknownMode(other.to_string())),
        }
    }
}

impl fmt::Display for PointerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerMode::None => write!(f, "none"),
            PointerMode::AnchorMouse => write!(f, "anchor-mouse"),
            PointerMode::AbsoluteMouse => write!(f, "absolute-mouse"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Consecutive identical frames before a raw gesture is accepted.
    /// Lower is faster but jumpier, higher is slower but steadier.
    pub frames_until_change: usize,
    /// A thumb scoring below this is treated as folded across the palm.
    pub thumb_open_threshold: f64,
    pub control_hand: Hand,
    pub pointer_mode: PointerMode,
    /// Wrist samples kept by the absolute-mode moving average.
    pub history_size: usize,
    /// Normalized distance from the anchor before the cursor starts moving.
    pub anchor_dead_zone: f64,
    pub anchor_gain: f64,
    /// End events for the previously accepted gesture. Off by default;
    /// nothing downstream consumes them yet.
    pub emit_end_events: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            frames_until_change: 3,
            thumb_open_threshold: 0.65,
            control_hand: Hand::Right,
            pointer_mode: PointerMode::None,
            history_size: 10,
            anchor_dead_zone: 0.025,
            anchor_gain: 1000.0,
            emit_end_events: false,
        }
    }
}
