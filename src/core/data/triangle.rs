use crate::core::data::point::Point;
use crate::core::data::surface::Surface;
use thiserror::Error;

/// Barycentric weights this far below zero still count as inside; absorbs
/// rounding on points that sit exactly on an edge.
const CONTAINS_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TriangleError {
    #[error("triangle vertices are collinear: {vertices:?}")]
    Degenerate { vertices: [Point; 3] },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    pub fn new(vertices: [Point; 3]) -> Result<Self, TriangleError> {
        let [a, b, c] = vertices;

        if !signed_double_area(a, b, c).is_normal() {
            return Err(TriangleError::Degenerate { vertices });
        }

        Ok(Self { vertices })
    }

    /// Two corners `margin` in from the top edge, the third centred
    /// horizontally `margin` up from the bottom edge.
    pub fn inset(surface: Surface, margin: f64) -> Result<Self, TriangleError> {
        let width = f64::from(surface.width());
        let height = f64::from(surface.height());
        let centre_x = f64::from(surface.width() / 2);

        Self::new([
            Point::new(margin, margin),
            Point::new(width - margin, margin),
            Point::new(centre_x, height - margin),
        ])
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    #[must_use]
    pub fn centroid(&self) -> Point {
        let [a, b, c] = self.vertices;

        Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0)
    }

    /// Weights `(w0, w1, w2)` with `point = w0·V0 + w1·V1 + w2·V2` and
    /// `w0 + w1 + w2 = 1`.
    #[must_use]
    pub fn barycentric(&self, point: Point) -> [f64; 3] {
        let [a, b, c] = self.vertices;
        let area = signed_double_area(a, b, c);

        let w0 = signed_double_area(point, b, c) / area;
        let w1 = signed_double_area(a, point, c) / area;

        [w0, w1, 1.0 - w0 - w1]
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.barycentric(point)
            .iter()
            .all(|&weight| weight >= -CONTAINS_TOLERANCE)
    }
}

fn signed_double_area(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}
