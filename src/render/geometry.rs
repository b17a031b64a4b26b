//! Geometry helpers: polar placement, path data, arcs and corner marks.
//!
//! Pixel space grows downward, so a positive angle measured from the +x axis
//! turns toward the top of the canvas.

use glam::{DVec2, dvec2};

use super::canvas::Bounds;

/// Point at `radius` from `center` in direction `degrees` (counterclockwise on screen).
pub fn polar(center: DVec2, radius: f64, degrees: f64) -> DVec2 {
    let t = degrees.to_radians();
    center + dvec2(t.cos(), -t.sin()) * radius
}

pub fn midpoint(a: DVec2, b: DVec2) -> DVec2 {
    (a + b) * 0.5
}

/// Translate `points` so their bounding box is centred on `target`.
pub fn center_on(points: &mut [DVec2], target: DVec2) {
    if let Some(b) = Bounds::enclosing(points.iter().copied()) {
        let shift = target - b.center();
        for p in points.iter_mut() {
            *p += shift;
        }
    }
}

/// One path command, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        radius: f64,
        large_arc: bool,
        sweep: bool,
        to: DVec2,
    },
    Close,
}

/// SVG path data built command by command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, p: DVec2) -> Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn l(mut self, p: DVec2) -> Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Circular arc to `to`; `sweep` false turns counterclockwise on screen.
    pub fn a(mut self, radius: f64, large_arc: bool, sweep: bool, to: DVec2) -> Self {
        self.commands.push(PathCommand::Arc { radius, large_arc, sweep, to });
        self
    }

    pub fn z(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Endpoints plus the leftmost, rightmost, top and bottom points each arc
    /// passes through.
    pub fn extent(&self) -> Vec<DVec2> {
        let mut out = Vec::new();
        let mut current = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    out.push(p);
                    current = Some(p);
                }
                PathCommand::Arc { radius, large_arc, sweep, to } => {
                    if let Some(from) = current {
                        out.extend(arc_extremes(from, to, radius, large_arc, sweep));
                    }
                    out.push(to);
                    current = Some(to);
                }
                PathCommand::Close => {}
            }
        }
        out
    }
}

/// Axis-extreme points of an SVG arc from `from` to `to`.
///
/// The center follows the SVG endpoint parameterization: of the two circles
/// through both endpoints, the flags pick one.
fn arc_extremes(from: DVec2, to: DVec2, radius: f64, large_arc: bool, sweep: bool) -> Vec<DVec2> {
    let half = (from - to) / 2.0;
    let h = half.length();
    if h == 0.0 || radius <= 0.0 {
        return Vec::new();
    }
    // A radius too short for the chord is scaled up to span it.
    let r = radius.max(h);
    let offset = (r * r - h * h).max(0.0).sqrt() / h;
    let side = if large_arc != sweep { 1.0 } else { -1.0 };
    let center = (from + to) / 2.0 + dvec2(half.y, -half.x) * (side * offset);

    let tau = std::f64::consts::TAU;
    let screen_angle = |p: DVec2| (p.y - center.y).atan2(p.x - center.x);
    let (start, end) = (screen_angle(from), screen_angle(to));
    // `sweep` turns toward increasing screen angle (clockwise as seen).
    let turned = |a: f64, b: f64| {
        if sweep { (b - a).rem_euclid(tau) } else { (a - b).rem_euclid(tau) }
    };
    let span = turned(start, end);

    [DVec2::X, DVec2::Y, DVec2::NEG_X, DVec2::NEG_Y]
        .into_iter()
        .filter(|dir| turned(start, dir.y.atan2(dir.x)) <= span)
        .map(|dir| center + dir * r)
        .collect()
}

/// Arc of a circle from `start` degrees, turning `sweep` degrees counterclockwise.
///
/// A full turn cannot be a single SVG arc (start and end coincide), so it is
/// split into two half arcs.
pub fn arc(center: DVec2, radius: f64, start: f64, sweep: f64) -> PathData {
    let path = PathData::new().m(polar(center, radius, start));
    if sweep >= 360.0 {
        path.a(radius, false, false, polar(center, radius, start + 180.0))
            .a(radius, false, false, polar(center, radius, start + 360.0))
    } else {
        path.a(radius, sweep > 180.0, false, polar(center, radius, start + sweep))
    }
}

/// Two short segments closing the corner between unit directions `d1` and `d2`.
pub fn right_angle_marker(corner: DVec2, d1: DVec2, d2: DVec2, size: f64) -> PathData {
    let p1 = corner + d1 * size;
    PathData::new().m(p1).l(p1 + d2 * size).l(corner + d2 * size)
}
