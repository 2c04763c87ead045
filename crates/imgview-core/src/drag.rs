use crate::geometry::{Point, Size};

/// Maximum pan distance per axis. `None` locks the axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClampBounds {
    pub x: Option<f32>,
    pub y: Option<f32>,
}

impl ClampBounds {
    /// Bounds for an image shown at `displayed` size, zoomed by `scale`, inside
    /// `viewport`. An axis is draggable only when the scaled image overflows
    /// the viewport on that axis; the bound is half of that overflow, and never
    /// more than half the growth over the displayed size. When the displayed
    /// size already exceeds the viewport the growth term is the tighter one,
    /// so the image never slides further than its own zoom added.
    pub fn compute(displayed: Size, scale: f32, viewport: Size) -> Self {
        let scaled = displayed.scaled(scale);
        let axis = |scaled: f32, displayed: f32, viewport: f32| {
            if scaled > viewport {
                let bound = ((scaled - viewport) / 2.0).min((scaled - displayed) / 2.0);
                Some(bound.max(0.0))
            } else {
                None
            }
        };
        Self {
            x: axis(scaled.width, displayed.width, viewport.width),
            y: axis(scaled.height, displayed.height, viewport.height),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.x.is_none() && self.y.is_none()
    }
}

fn clamp_axis(value: f32, bound: f32) -> f32 {
    value.clamp(-bound, bound)
}

/// Pointer-drag bookkeeping for panning a zoomed image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub anchor: Point,
    pub origin_offset: Point,
    pub bounds: ClampBounds,
}

impl DragState {
    pub fn begin(&mut self, pointer: Point, offset: Point, bounds: ClampBounds) {
        self.active = true;
        self.anchor = pointer;
        self.origin_offset = offset;
        self.bounds = bounds;
    }

    /// Offset for a pointer at `pointer`, or `None` when no drag is in
    /// progress or the image is not zoomed past 100%. Locked axes keep their
    /// `current` value.
    pub fn offset_for(&self, pointer: Point, scale: f32, current: Point) -> Option<Point> {
        if !self.active || scale <= 1.0 {
            return None;
        }
        let moved = (pointer - self.anchor) + self.origin_offset;
        let x = self.bounds.x.map_or(current.x, |b| clamp_axis(moved.x, b));
        let y = self.bounds.y.map_or(current.y, |b| clamp_axis(moved.y, b));
        Some(Point::new(x, y))
    }

    pub fn end(&mut self) {
        self.active = false;
        self.anchor = Point::ZERO;
    }
}
