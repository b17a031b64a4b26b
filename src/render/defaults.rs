//! Default canvas, scale and style settings

use glam::DVec2;

pub const CANVAS_WIDTH: f64 = 400.0;
pub const CANVAS_HEIGHT: f64 = 300.0;
pub const CANVAS_MARGIN: f64 = 20.0;

/// Pixels per abstract length unit
pub const PX_PER_UNIT: f64 = 10.0;

pub const POINT_RADIUS: f64 = 3.0;
pub const LABEL_OFFSET: DVec2 = DVec2::new(8.0, -8.0);
pub const RIGHT_ANGLE_MARK: f64 = 10.0;
pub const ANGLE_ARC_RADIUS: f64 = 18.0;

/// Horizontal gap between the two triangles of a pair figure.
pub const PAIR_GAP: f64 = 40.0;

/// Arrowhead length and half-width on the coordinate axes.
pub const ARROW_LENGTH: f64 = 8.0;
pub const ARROW_HALF_WIDTH: f64 = 4.0;

pub const BACKGROUND: &str = "white";

/// Class vocabulary and declarations, in header order.
pub const STYLE_RULES: &[(&str, &str)] = &[
    ("shape-fill", "fill: none; stroke: #2563eb; stroke-width: 2;"),
    ("shape-fill-light", "fill: #dbeafe; stroke: #2563eb; stroke-width: 2;"),
    ("point", "fill: #dc2626; stroke: none;"),
    ("label", "font-family: Arial, sans-serif; font-size: 14px; fill: #374151;"),
    ("dimension", "stroke: #6b7280; stroke-width: 1; stroke-dasharray: 3,3;"),
    ("angle-arc", "fill: none; stroke: #059669; stroke-width: 1.5;"),
    ("grid", "stroke: #e5e7eb; stroke-width: 0.5;"),
];
