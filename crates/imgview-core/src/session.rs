use std::fmt;

use crate::config::ViewerConfig;
use crate::consts::{ROTATION_STEP_DEGREES, ZOOM_STEP};
use crate::drag::DragState;
use crate::geometry::Point;

/// Clamp a requested index into `[0, len - 1]`. An empty set always yields 0.
pub fn clamp_index(n: i64, len: usize) -> usize {
    if len == 0 || n <= 0 {
        return 0;
    }
    let max = (len - 1) as i64;
    n.min(max) as usize
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateDirection {
    /// +90 degrees.
    Left,
    /// -90 degrees.
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Move,
}

/// Image transform: a uniform scale followed by a rotation.
///
/// Rotation and scale always travel together, so rotating never discards the
/// current zoom and zooming never discards the rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub rotation_degrees: i32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotation_degrees: 0,
        }
    }
}

impl Transform {
    pub fn rotation_radians(&self) -> f32 {
        (self.rotation_degrees as f32).to_radians()
    }

    /// Whether the rotated image has its sides swapped (90 or 270 degrees).
    pub fn is_quarter_turned(&self) -> bool {
        (self.rotation_degrees / ROTATION_STEP_DEGREES) % 2 != 0
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale3d({s}, {s}, 1) rotate({r}deg)",
            s = self.scale,
            r = self.rotation_degrees
        )
    }
}

/// Interactive state of one open viewer.
#[derive(Clone, Debug)]
pub struct Session {
    current_index: usize,
    image_count: usize,
    scale: f32,
    min_scale: f32,
    max_scale: f32,
    rotation_degrees: i32,
    pan_offset: Point,
    pub(crate) drag: DragState,
}

impl Session {
    pub fn new(config: &ViewerConfig) -> Self {
        let image_count = config.data.len();
        Self {
            current_index: clamp_index(config.index, image_count),
            image_count,
            scale: 1.0,
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            rotation_degrees: 0,
            pan_offset: Point::ZERO,
            drag: DragState::default(),
        }
    }

    /// Fresh session positioned at `index`. Zoom, pan and drag start over;
    /// rotation carries across.
    pub fn rebuilt(&self, index: usize) -> Self {
        Self {
            current_index: self.clamp_index(index as i64),
            scale: 1.0,
            pan_offset: Point::ZERO,
            drag: DragState::default(),
            ..self.clone()
        }
    }

    pub fn clamp_index(&self, n: i64) -> usize {
        clamp_index(n, self.image_count)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn rotation_degrees(&self) -> i32 {
        self.rotation_degrees
    }

    pub fn pan_offset(&self) -> Point {
        self.pan_offset
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.image_count
    }

    /// Store `s` clamped to the configured scale bounds. NaN falls back to 1.
    /// Inverted bounds never panic; `max_scale` wins.
    pub fn set_scale(&mut self, s: f32) -> f32 {
        let s = if s.is_nan() { 1.0 } else { s };
        self.scale = s.max(self.min_scale).min(self.max_scale);
        self.scale
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.set_scale(self.scale + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.pan_offset = Point::ZERO;
        self.set_scale(self.scale - ZOOM_STEP)
    }

    pub fn reset_transform(&mut self) {
        self.scale = 1.0;
        self.pan_offset = Point::ZERO;
    }

    pub fn rotate(&mut self, direction: RotateDirection) -> i32 {
        let step = match direction {
            RotateDirection::Left => ROTATION_STEP_DEGREES,
            RotateDirection::Right => -ROTATION_STEP_DEGREES,
        };
        self.rotation_degrees = self.rotation_degrees.saturating_add(step);
        self.pan_offset = Point::ZERO;
        self.rotation_degrees
    }

    pub(crate) fn set_pan_offset(&mut self, offset: Point) {
        self.pan_offset = offset;
    }

    pub fn transform(&self) -> Transform {
        Transform {
            scale: self.scale,
            rotation_degrees: self.rotation_degrees,
        }
    }

    pub fn cursor(&self) -> Cursor {
        if self.scale > 1.0 {
            Cursor::Move
        } else {
            Cursor::Default
        }
    }
}
