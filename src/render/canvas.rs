//! The fixed-size drawing surface.

use glam::{DVec2, dvec2};
use serde::{Deserialize, Serialize};

use super::defaults;

/// Slack for points that land on the drawable edge up to rounding.
const EDGE_EPSILON: f64 = 1e-6;

/// Canvas size and margin, in pixels. The origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(defaults::CANVAS_WIDTH, defaults::CANVAS_HEIGHT, defaults::CANVAS_MARGIN)
    }
}

impl Canvas {
    pub const fn new(width: f64, height: f64, margin: f64) -> Self {
        Canvas { width, height, margin }
    }

    pub fn center(&self) -> DVec2 {
        dvec2(self.width / 2.0, self.height / 2.0)
    }

    /// The area inside the margin.
    pub fn drawable(&self) -> Bounds {
        Bounds {
            min: dvec2(self.margin, self.margin),
            max: dvec2(self.width - self.margin, self.height - self.margin),
        }
    }
}

/// Axis-aligned box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds {
    /// Smallest box around `points`, or `None` when there are none.
    pub fn enclosing(points: impl IntoIterator<Item = DVec2>) -> Option<Bounds> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Bounds { min: first, max: first }, |b, p| Bounds {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }

    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x - EDGE_EPSILON
            && p.x <= self.max.x + EDGE_EPSILON
            && p.y >= self.min.y - EDGE_EPSILON
            && p.y <= self.max.y + EDGE_EPSILON
    }
}
