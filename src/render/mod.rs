//! Figure rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default canvas, scale and style settings
//! - `canvas`: The drawing surface and pixel-space bounds
//! - `style`: Class vocabulary handed to the emitter
//! - `types`: Vertices, render primitives and the `Construction` they form
//! - `geometry`: Polar placement, path data, arcs and corner marks
//! - `shapes`: One constructor per shape variant
//! - `dom`: Typed SVG elements
//! - `svg`: SVG generation

pub mod canvas;
pub mod defaults;
pub mod dom;
pub mod geometry;
pub mod shapes;
pub mod style;
pub mod svg;
pub mod types;

pub use canvas::{Bounds, Canvas};
pub use geometry::{PathCommand, PathData};
pub use shapes::Construct;
pub use style::{StyleRule, StyleSheet};
pub use types::*;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, FigureError};
use crate::log::{trace, warn};
use crate::spec::{ShapeSpec, Validate};
use crate::types::{Length, Scaler};

/// Everything that controls how a figure is drawn. Never affects the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub canvas: Canvas,
    pub style: StyleSheet,
    pub scaler: Scaler,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            canvas: Canvas::default(),
            style: StyleSheet::default(),
            scaler: Scaler::new(defaults::PX_PER_UNIT),
        }
    }
}

impl RenderOptions {
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    pub fn with_style(mut self, style: StyleSheet) -> Self {
        self.style = style;
        self
    }

    /// Set the pixel multiplier.
    pub fn with_scale(mut self, px_per_unit: f64) -> Result<Self, FigureError> {
        self.scaler = Scaler::try_new(px_per_unit).map_err(|source| FigureError::InvalidScale {
            value: px_per_unit,
            source,
        })?;
        Ok(self)
    }

    /// The subset of options shape constructors read.
    pub fn layout(&self) -> Layout {
        Layout {
            canvas: self.canvas,
            scaler: self.scaler,
            right_angle_mark: self.style.right_angle_mark,
            angle_arc_radius: self.style.angle_arc_radius,
        }
    }
}

/// Canvas geometry and scale as seen by a shape constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub canvas: Canvas,
    pub scaler: Scaler,
    pub right_angle_mark: f64,
    pub angle_arc_radius: f64,
}

impl Layout {
    pub fn center(&self) -> DVec2 {
        self.canvas.center()
    }

    pub fn px(&self, length: Length) -> f64 {
        self.scaler.px(length)
    }
}

/// Validate `spec` and lay it out.
///
/// Geometry that leaves the drawable area is logged, not refused: large
/// parameters make a cramped figure, never a wrong one.
pub fn construct_figure(
    spec: &ShapeSpec,
    options: &RenderOptions,
) -> Result<Construction, FigureError> {
    spec.validate()?;
    let construction = spec.construct(&options.layout());
    if !construction.is_finite() {
        let px_per_unit = options.scaler.px_per_unit();
        return Err(DomainError::NonFiniteGeometry { px_per_unit }.into());
    }
    trace!(
        vertices = construction.vertices.len(),
        primitives = construction.primitives.len(),
        "constructed {}",
        spec.kind()
    );

    let stray = construction.points_outside(&options.canvas.drawable());
    if stray > 0 {
        warn!(stray, kind = %spec.kind(), "figure extends past the canvas margin");
    }
    Ok(construction)
}
