//! Parametric 2D geometry figures for exam questions.
//!
//! A [`ShapeSpec`] names a figure (a right triangle with legs 6 and 8, a chord
//! at distance 6 in a circle of radius 10, ...). [`build_figure`] turns it into
//! an SVG document and the [`PropertyMap`] of derived measurements the question
//! text and answer quote. Both come from the same parameters, so the drawing and
//! the stated answer cannot drift apart.
//!
//! ```
//! use geofig::{build_figure, Property, ShapeSpec};
//!
//! let figure = build_figure(&ShapeSpec::right_triangle(6.0, 8.0))?;
//! assert_eq!(figure.properties.display(Property::Hypotenuse).as_deref(), Some("10.00"));
//! assert!(figure.document.trim_end().ends_with("</svg>"));
//! # Ok::<(), geofig::FigureError>(())
//! ```

pub mod errors;
pub mod log;
pub mod properties;
pub mod render;
pub mod spec;
pub mod types;

pub use errors::{DomainError, FigureError};
pub use properties::{Measure, Precision, Property, PropertyMap, Quantity, compute_properties};
pub use render::{Canvas, Construct, Construction, RenderOptions, StyleSheet};
pub use spec::{Family, ParamMap, Pi, ShapeKind, ShapeSpec, Validate};
pub use types::{Angle, Length, Scaler};

use serde::Serialize;

/// A rendered figure and its measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub document: String,
    pub properties: PropertyMap,
}

/// Build a figure with the default canvas, style and scale.
pub fn build_figure(spec: &ShapeSpec) -> Result<Figure, FigureError> {
    build_figure_with(spec, &RenderOptions::default())
}

/// Build a figure with explicit render options.
///
/// Fails without producing a document when the parameters are geometrically
/// impossible or any derived value is not finite.
pub fn build_figure_with(spec: &ShapeSpec, options: &RenderOptions) -> Result<Figure, FigureError> {
    let properties = compute_properties(spec)?;
    log::debug!(kind = %spec.kind(), properties = properties.len(), "computed properties");

    let construction = render::construct_figure(spec, options)?;
    let document = render::svg::render(&options.canvas, &options.style, &construction)?;
    log::debug!(bytes = document.len(), "rendered document");

    Ok(Figure { document, properties })
}

/// Build a figure from a kind name and a loose parameter map.
pub fn build_figure_from_params(kind: &str, params: &ParamMap) -> Result<Figure, FigureError> {
    let kind: ShapeKind = kind.parse()?;
    build_figure(&ShapeSpec::from_params(kind, params)?)
}
