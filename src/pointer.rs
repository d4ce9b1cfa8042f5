// src/pointer.rs
use crate::debounce::GestureTransition;
use crate::geometry::Vec2;
use crate::gestures::Gesture;
use anyhow::Result;
use enigo::{Button, Coordinate, Direction, Enigo, Mouse, Settings};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info};

/// Cursor and click injection. Screen coordinates are pixels.
pub trait PointerDevice {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()>;
    fn move_by(&mut self, dx: i32, dy: i32) -> Result<()>;
    fn click(&mut self) -> Result<()>;
    fn screen_size(&self) -> (i32, i32);
}

pub struct EnigoPointer {
    enigo: Enigo,
    screen: (i32, i32),
}

impl EnigoPointer {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default())
            .map_err(|e| anyhow::anyhow!("pointer backend init failed: {e:?}"))?;
        let screen = enigo.main_display().unwrap_or((1920, 1080));
        Ok(Self { enigo, screen })
    }
}

impl PointerDevice for EnigoPointer {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| anyhow::anyhow!("cursor move failed: {e:?}"))
    }

    fn move_by(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.enigo
            .move_mouse(dx, dy, Coordinate::Rel)
            .map_err(|e| anyhow::anyhow!("cursor move failed: {e:?}"))
    }

    fn click(&mut self) -> Result<()> {
        self.enigo
            .button(Button::Left, Direction::Click)
            .map_err(|e| anyhow::anyhow!("click failed: {e:?}"))
    }

    fn screen_size(&self) -> (i32, i32) {
        self.screen
    }
}

/// Swallows everything. Used when pointer control is disabled.
#[derive(Debug, Default)]
pub struct NullPointer;

impl PointerDevice for NullPointer {
    fn move_to(&mut self, _x: i32, _y: i32) -> Result<()> {
        Ok(())
    }

    fn move_by(&mut self, _dx: i32, _dy: i32) -> Result<()> {
        Ok(())
    }

    fn click(&mut self) -> Result<()> {
        Ok(())
    }

    fn screen_size(&self) -> (i32, i32) {
        (1920, 1080)
    }
}

#[derive(Debug, Default)]
struct Recorded {
    moves_abs: Vec<(i32, i32)>,
    moves_rel: Vec<(i32, i32)>,
    clicks: usize,
}

/// Records every injected action instead of touching the real cursor.
/// Cloned handles share the same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingPointer {
    inner: Rc<RefCell<Recorded>>,
}

impl RecordingPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> usize {
        self.inner.borrow().clicks
    }

    pub fn moves_abs(&self) -> Vec<(i32, i32)> {
        self.inner.borrow().moves_abs.clone()
    }

    pub fn moves_rel(&self) -> Vec<(i32, i32)> {
        self.inner.borrow().moves_rel.clone()
    }
}

impl PointerDevice for RecordingPointer {
    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.inner.borrow_mut().moves_abs.push((x, y));
        Ok(())
    }

    fn move_by(&mut self, dx: i32, dy: i32) -> Result<()> {
        self.inner.borrow_mut().moves_rel.push((dx, dy));
        Ok(())
    }

    fn click(&mut self) -> Result<()> {
        self.inner.borrow_mut().clicks += 1;
        Ok(())
    }

    fn screen_size(&self) -> (i32, i32) {
        (1920, 1080)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MouseState {
    Idle,
    Armed { anchor: Vec2 },
}

/// Mouse-mode state machine. Fed only the control hand's accepted-gesture
/// transitions, never raw per-frame classifications.
pub struct MouseController {
    state: MouseState,
}

impl MouseController {
    pub fn new() -> Self {
        Self {
            state: MouseState::Idle,
        }
    }

    pub fn state(&self) -> MouseState {
        self.state
    }

    pub fn anchor(&self) -> Option<Vec2> {
        match self.state {
            MouseState::Armed { anchor } => Some(anchor),
            MouseState::Idle => None,
        }
    }

    /// Arms on a fresh thumbs up, disarms when neither thumbs up nor fist
    /// holds anymore, and clicks on the thumbs-up-to-fist grip.
    pub fn apply_transition(
        &mut self,
        transition: &GestureTransition,
        wrist: Vec2,
        device: &mut dyn PointerDevice,
    ) -> Result<()> {
        let was_engaged = matches!(
            transition.previous,
            Some(Gesture::ThumbsUp) | Some(Gesture::Fist)
        );
        let is_engaged = matches!(transition.current, Gesture::ThumbsUp | Gesture::Fist);

        if transition.current == Gesture::ThumbsUp && !was_engaged {
            info!(hand = %transition.hand, x = wrist.x, y = wrist.y, "entering mouse mode");
            self.state = MouseState::Armed { anchor: wrist };
        } else if was_engaged && !is_engaged {
            info!(hand = %transition.hand, "exiting mouse mode");
            self.state = MouseState::Idle;
        } else if transition.previous == Some(Gesture::ThumbsUp)
            && transition.current == Gesture::Fist
        {
            info!(hand = %transition.hand, "click");
            device.click()?;
        }
        Ok(())
    }
}

impl Default for MouseController {
    fn default() -> Self {
        Self::new()
    }
}

/// Relative movement away from the anchor recorded on arming. The
/// response is quadratic in the displacement so small deviations barely
/// move the cursor; x is negated to compensate for the mirrored camera.
pub struct AnchorDriver {
    dead_zone: f64,
    gain: f64,
}

impl AnchorDriver {
    pub fn new(dead_zone: f64, gain: f64) -> Self {
        Self { dead_zone, gain }
    }

    pub fn update(&self, anchor: Vec2, wrist: Vec2, device: &mut dyn PointerDevice) -> Result<()> {
        let d = wrist - anchor;
        if d.norm() <= self.dead_zone {
            return Ok(());
        }
        let dx = -(d.x * d.x.abs() * self.gain);
        let dy = d.y * d.y.abs() * self.gain;
        debug!(dx, dy, "anchor move");
        device.move_by(dx.round() as i32, dy.round() as i32)
    }
}

/// Absolute mapping through a moving average of recent wrist positions.
/// The normalized midpoint lands on screen center, mirrored horizontally
/// and scaled 2x per axis.
pub struct AbsoluteDriver {
    history: VecDeque<Vec2>,
    capacity: usize,
}

impl AbsoluteDriver {
    pub fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn update(&mut self, wrist: Vec2, device: &mut dyn PointerDevice) -> Result<()> {
        if self.history.len() == self.capacity {
            self.history.pop_front();
        }
        self.history.push_back(wrist);

        let sum = self.history.iter().fold(Vec2::zeros(), |acc, p| acc + *p);
        let avg = sum / self.history.len() as f64;

        let (w, h) = device.screen_size();
        let (w, h) = (w as f64, h as f64);
        let x = -(avg.x - 0.5) * 2.0 * w + w / 2.0;
        let y = (avg.y - 0.5) * 2.0 * h + h / 2.0;
        device.move_to(x.round() as i32, y.round() as i32)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// The driver selected at startup; runs every frame while armed.
pub enum MovementDriver {
    Disabled,
    Anchor(AnchorDriver),
    Absolute(AbsoluteDriver),
}

impl MovementDriver {
    pub fn update(
        &mut self,
        anchor: Vec2,
        wrist: Vec2,
        device: &mut dyn PointerDevice,
    ) -> Result<()> {
        match self {
            MovementDriver::Disabled => Ok(()),
            MovementDriver::Anchor(driver) => driver.update(anchor, wrist, device),
            MovementDriver::Absolute(driver) => driver.update(wrist, device),
        }
    }
}
