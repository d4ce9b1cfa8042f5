// src/session.rs
use crate::config::{PointerMode, TrackerConfig};
use crate::debounce::{EventKind, GestureDebouncer, GestureEvent};
use crate::fingers::finger_openness;
use crate::gestures::classify;
use crate::landmarks::{Frame, Hand};
use crate::pointer::{
    AbsoluteDriver, AnchorDriver, MouseController, MouseState, MovementDriver, PointerDevice,
};
use anyhow::Result;
use std::collections::HashMap;
use tracing::info;

/// Owns every piece of per-run mutable state: the per-hand debouncers,
/// the mouse-mode state machine and the movement driver. One instance
/// per process, fed one frame at a time.
pub struct TrackingSession {
    config: TrackerConfig,
    debouncers: HashMap<Hand, GestureDebouncer>,
    mouse: MouseController,
    driver: MovementDriver,
    device: Box<dyn PointerDevice>,
    frame_count: u64,
}

impl TrackingSession {
    pub fn new(config: TrackerConfig, device: Box<dyn PointerDevice>) -> Self {
        let mut debouncers = HashMap::new();
        for hand in [Hand::Left, Hand::Right] {
            debouncers.insert(hand, GestureDebouncer::new(hand, config.frames_until_change));
        }

        let driver = match config.pointer_mode {
            PointerMode::None => MovementDriver::Disabled,
            PointerMode::AnchorMouse => {
                MovementDriver::Anchor(AnchorDriver::new(config.anchor_dead_zone, config.anchor_gain))
            }
            PointerMode::AbsoluteMouse => {
                MovementDriver::Absolute(AbsoluteDriver::new(config.history_size))
            }
        };

        Self {
            config,
            debouncers,
            mouse: MouseController::new(),
            driver,
            device,
            frame_count: 0,
        }
    }

    /// Processes one frame's observations and returns the accepted
    /// gesture events, if any. Hands absent from the frame keep their
    /// state untouched.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<Vec<GestureEvent>> {
        self.frame_count += 1;
        let mut events = Vec::new();
        let mut control_wrist = None;

        for obs in &frame.hands {
            let openness = finger_openness(obs, self.config.thumb_open_threshold);
            let raw = classify(&openness, &obs.landmarks);

            let is_control = obs.hand == self.config.control_hand;
            if is_control {
                control_wrist = Some(obs.wrist());
            }

            let Some(debouncer) = self.debouncers.get_mut(&obs.hand) else {
                continue;
            };
            if let Some(transition) = debouncer.observe(raw) {
                info!(hand = %transition.hand, gesture = %transition.current, "gesture accepted");

                if self.config.emit_end_events {
                    if let Some(previous) = transition.previous {
                        events.push(GestureEvent {
                            hand: transition.hand,
                            kind: EventKind::End,
                            gesture: previous,
                            previous: None,
                        });
                    }
                }
                events.push(GestureEvent {
                    hand: transition.hand,
                    kind: EventKind::Start,
                    gesture: transition.current,
                    previous: transition.previous,
                });

                if is_control && self.config.pointer_mode != PointerMode::None {
                    self.mouse
                        .apply_transition(&transition, obs.wrist(), self.device.as_mut())?;
                }
            }
        }

        // Movement runs every frame while armed, independent of whether a
        // gesture changed.
        if let MouseState::Armed { anchor } = self.mouse.state() {
            if let Some(wrist) = control_wrist {
                self.driver.update(anchor, wrist, self.device.as_mut())?;
            }
        }

        Ok(events)
    }

    pub fn accepted(&self, hand: Hand) -> Option<crate::gestures::Gesture> {
        self.debouncers.get(&hand).and_then(|d| d.accepted())
    }

    pub fn mouse_state(&self) -> MouseState {
        self.mouse.state()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
