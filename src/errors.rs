//! Error types with diagnostics using miette
//!
//! Two layers: [`DomainError`] for geometrically impossible parameters, and
//! [`FigureError`] for everything a caller of the pipeline can run into.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Length, NumericError};

// ============================================================================
// Domain Errors
// ============================================================================

/// Parameters that violate a constraint some formula depends on.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{name} must be a positive length, got {value}")]
    #[diagnostic(code(geofig::domain::non_positive_length))]
    NonPositiveLength { name: &'static str, value: f64 },

    #[error("point at distance {distance} is not outside a circle of radius {radius}")]
    #[diagnostic(
        code(geofig::domain::point_not_outside_circle),
        help("tangents exist only from a point farther from the center than the radius")
    )]
    PointNotOutsideCircle { radius: f64, distance: f64 },

    #[error("chord at distance {distance} does not cut a circle of radius {radius}")]
    #[diagnostic(
        code(geofig::domain::chord_not_inside_circle),
        help("the distance from the center to the chord must be smaller than the radius")
    )]
    ChordNotInsideCircle { radius: f64, distance: f64 },

    #[error(
        "{name} must lie in {}{min}°, {max}°{}, got {value}°",
        lower_bracket(.min_inclusive),
        upper_bracket(.max_inclusive)
    )]
    #[diagnostic(code(geofig::domain::angle_out_of_range))]
    AngleOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
        min_inclusive: bool,
        max_inclusive: bool,
    },

    #[error("empty {axis} range: {min}..{max}")]
    #[diagnostic(code(geofig::domain::empty_range))]
    EmptyRange { axis: char, min: i32, max: i32 },

    #[error("{axis} range {min}..{max} does not contain the origin")]
    #[diagnostic(
        code(geofig::domain::origin_outside_range),
        help("both axes are drawn through the origin, so each range must include 0")
    )]
    OriginOutsideRange { axis: char, min: i32, max: i32 },

    #[error("{name} must be a whole number, got {value}")]
    #[diagnostic(code(geofig::domain::non_integral_bound))]
    NonIntegralBound { name: &'static str, value: f64 },

    #[error("unsupported approximation of pi: {value}")]
    #[diagnostic(
        code(geofig::domain::unsupported_pi),
        help("use 3.14 for the classroom approximation, or leave pi unset for full precision")
    )]
    UnsupportedPi { value: f64 },

    #[error("{axis} range {min}..{max} spans more than {max_span} grid cells")]
    #[diagnostic(
        code(geofig::domain::grid_too_dense),
        help("each axis of a coordinate plane is limited to {max_span} unit cells")
    )]
    GridTooDense { axis: char, min: i32, max: i32, max_span: i64 },

    #[error("{name} is not a finite number")]
    #[diagnostic(code(geofig::domain::non_finite_quantity))]
    NonFiniteQuantity { name: &'static str },

    #[error("figure coordinates overflow at {px_per_unit} px per unit")]
    #[diagnostic(
        code(geofig::domain::non_finite_geometry),
        help("lower the pixel scale or the shape's dimensions")
    )]
    NonFiniteGeometry { px_per_unit: f64 },
}

fn lower_bracket(inclusive: &bool) -> &'static str {
    if *inclusive { "[" } else { "(" }
}

fn upper_bracket(inclusive: &bool) -> &'static str {
    if *inclusive { "]" } else { ")" }
}

/// Check that a named parameter is a positive, finite length.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), DomainError> {
    Length::try_positive(value)
        .map(|_| ())
        .map_err(|_| DomainError::NonPositiveLength { name, value })
}

// ============================================================================
// Pipeline Errors
// ============================================================================

/// Errors surfaced by the figure pipeline.
#[derive(Error, Diagnostic, Debug)]
pub enum FigureError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    #[error("unsupported shape variant: {family}/{variant}")]
    #[diagnostic(
        code(geofig::unsupported_variant),
        help("see ShapeKind for the implemented family/variant names")
    )]
    UnsupportedVariant { family: String, variant: String },

    #[error("missing parameter `{name}` for {kind}")]
    #[diagnostic(code(geofig::missing_parameter))]
    MissingParameter { kind: String, name: &'static str },

    #[error("invalid pixel scale: {value}")]
    #[diagnostic(code(geofig::render::invalid_scale))]
    InvalidScale {
        value: f64,
        #[source]
        source: NumericError,
    },

    #[error("failed to serialize the SVG document: {message}")]
    #[diagnostic(code(geofig::render::markup))]
    Markup { message: String },
}
