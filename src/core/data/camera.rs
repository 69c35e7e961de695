use crate::core::data::point::Point;

pub const ZOOM_IN_FACTOR: f64 = 1.1;
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// Maps algorithm space onto the surface: `(p - offset) * scale`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    offset: Point,
    scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Point::new(0.0, 0.0),
            scale: 1.0,
        }
    }
}

impl Camera {
    #[must_use]
    pub fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    #[inline]
    #[must_use]
    pub fn project(&self, point: Point) -> Point {
        (point - self.offset) * self.scale
    }

    /// Scales the view while keeping whatever is under `anchor` (a surface
    /// position) on the same pixel.
    pub fn zoom(&mut self, direction: ZoomDirection, anchor: Point) {
        let world_anchor = anchor * self.scale.recip() + self.offset;

        self.scale *= direction.factor();
        self.offset = world_anchor - anchor * self.scale.recip();
    }
}
