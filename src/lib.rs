// src/lib.rs
pub mod config;
pub mod data;
pub mod debounce;
pub mod fingers;
pub mod geometry;
pub mod gestures;
pub mod landmarks;
pub mod metrics;
pub mod pointer;
pub mod session;

pub use config::{PointerMode, TrackerConfig};
pub use debounce::{EventKind, GestureEvent};
pub use gestures::Gesture;
pub use landmarks::{Frame, Hand, HandObservation, LandmarkProvider};
pub use session::TrackingSession;
