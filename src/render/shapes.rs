//! Shape constructors: parameters to pixel coordinates.
//!
//! Each constructor reads the same parameters the property calculator reads
//! and scales them with the layout's [`Scaler`](crate::types::Scaler), so drawn
//! proportions always match the computed measurements.

use enum_dispatch::enum_dispatch;
use glam::{DVec2, dvec2};

use super::defaults;
use super::geometry::{arc, center_on, midpoint, polar, right_angle_marker};
use super::types::{Class, Construction};
use super::Layout;
use crate::spec::*;
use crate::types::Length;

/// Lay a shape out on the canvas. Assumes the shape already passed `Validate`.
#[enum_dispatch]
pub trait Construct {
    fn construct(&self, layout: &crate::render::Layout) -> crate::render::Construction;
}

// Unit directions on screen.
const RIGHT: DVec2 = DVec2::X;
const LEFT: DVec2 = DVec2::NEG_X;
const UP: DVec2 = DVec2::NEG_Y;
const DOWN: DVec2 = DVec2::Y;

// ============================================================================
// Triangles
// ============================================================================

/// Corners of a right triangle with the right angle at A, AB horizontal and
/// AC vertical, centred on `center`.
fn right_corners(layout: &Layout, a: Length, b: Length, center: DVec2) -> [DVec2; 3] {
    let (w, h) = (layout.px(a), layout.px(b));
    let pa = center + dvec2(-w / 2.0, h / 2.0);
    [pa, pa + dvec2(w, 0.0), pa + dvec2(0.0, -h)]
}

/// Draw a right triangle whose corners are already placed.
fn draw_right(c: &mut Construction, layout: &Layout, corners: [DVec2; 3], labels: [&str; 3]) {
    let [pa, pb, pc] = corners;
    c.polygon(&corners, Class::Shape)
        .vertex(labels[0], pa)
        .vertex(labels[1], pb)
        .vertex(labels[2], pc)
        .path(
            right_angle_marker(
                pa,
                (pb - pa).normalize_or_zero(),
                (pc - pa).normalize_or_zero(),
                layout.right_angle_mark,
            ),
            Class::Shape,
        );
}

impl Construct for RightTriangle {
    fn construct(&self, layout: &Layout) -> Construction {
        let mut c = Construction::new();
        let corners = right_corners(layout, self.leg_a, self.leg_b, layout.center());
        draw_right(&mut c, layout, corners, ["A", "B", "C"]);
        c
    }
}

/// Apex over the middle of a horizontal base, vertically centred.
fn apex_triangle(layout: &Layout, base: f64, height: f64) -> Construction {
    let center = layout.center();
    let pa = center + dvec2(0.0, -height / 2.0);
    let pb = center + dvec2(-base / 2.0, height / 2.0);
    let pc = center + dvec2(base / 2.0, height / 2.0);
    let mut c = Construction::new();
    c.polygon(&[pa, pb, pc], Class::Shape)
        .vertex("A", pa)
        .vertex("B", pb)
        .vertex("C", pc);
    c
}

impl Construct for EquilateralTriangle {
    fn construct(&self, layout: &Layout) -> Construction {
        let side = layout.px(self.side);
        apex_triangle(layout, side, side * 3f64.sqrt() / 2.0)
    }
}

impl Construct for IsoscelesTriangle {
    fn construct(&self, layout: &Layout) -> Construction {
        apex_triangle(layout, layout.px(self.base), layout.px(self.height))
    }
}

impl Construct for SimilarTriangles {
    fn construct(&self, layout: &Layout) -> Construction {
        let (a, b) = (layout.px(self.leg_a), layout.px(self.leg_b));
        let (ka, kb) = (a * self.ratio, b * self.ratio);
        let width = a + defaults::PAIR_GAP + ka;
        let height = b.max(kb);
        let center = layout.center();

        let pa = center + dvec2(-width / 2.0, height / 2.0);
        let pd = pa + dvec2(a + defaults::PAIR_GAP, 0.0);
        let first = [pa, pa + dvec2(a, 0.0), pa + dvec2(0.0, -b)];
        let second = [pd, pd + dvec2(ka, 0.0), pd + dvec2(0.0, -kb)];

        let mut c = Construction::new();
        draw_right(&mut c, layout, first, ["A", "B", "C"]);
        draw_right(&mut c, layout, second, ["D", "E", "F"]);
        c
    }
}

impl Construct for CongruentTriangles {
    fn construct(&self, layout: &Layout) -> Construction {
        let (a, b) = (layout.px(self.leg_a), layout.px(self.leg_b));
        let width = 2.0 * a + defaults::PAIR_GAP;
        let center = layout.center();

        // ABC sits on the bottom line; DEF is the same triangle turned half a
        // revolution, with its right angle D on the top line.
        let pa = center + dvec2(-width / 2.0, b / 2.0);
        let first = [pa, pa + dvec2(a, 0.0), pa + dvec2(0.0, -b)];
        let pd = center + dvec2(width / 2.0, -b / 2.0);
        let second = [pd, pd + dvec2(-a, 0.0), pd + dvec2(0.0, b)];

        let mut c = Construction::new();
        draw_right(&mut c, layout, first, ["A", "B", "C"]);
        draw_right(&mut c, layout, second, ["D", "E", "F"]);
        c
    }
}

impl Construct for MedianTriangle {
    fn construct(&self, layout: &Layout) -> Construction {
        let (w, h) = (layout.px(self.base), layout.px(self.height));
        let pb = layout.center() + dvec2(-w / 2.0, h / 2.0);
        let pc = pb + dvec2(w, 0.0);
        let pa = pb + dvec2(0.0, -h);
        let pd = midpoint(pb, pc);

        let mut c = Construction::new();
        c.polygon(&[pa, pb, pc], Class::Shape)
            .vertex("A", pa)
            .vertex("B", pb)
            .vertex("C", pc)
            .vertex("D", pd)
            .line(pa, pd, Class::Dimension)
            .path(right_angle_marker(pb, RIGHT, UP, layout.right_angle_mark), Class::Shape);
        c
    }
}

impl Construct for CircumcircleTriangle {
    fn construct(&self, layout: &Layout) -> Construction {
        let corners = right_corners(layout, self.leg_a, self.leg_b, layout.center());
        let [_, pb, pc] = corners;
        let center = midpoint(pb, pc);

        let mut c = Construction::new();
        c.circle(center, pb.distance(pc) / 2.0, Class::Shape);
        draw_right(&mut c, layout, corners, ["A", "B", "C"]);
        c.vertex("O", center);
        c
    }
}

impl Construct for IncircleTriangle {
    fn construct(&self, layout: &Layout) -> Construction {
        let corners = right_corners(layout, self.leg_a, self.leg_b, layout.center());
        let [pa, pb, pc] = corners;
        let r = (pa.distance(pb) + pa.distance(pc) - pb.distance(pc)) / 2.0;
        let incenter = pa + dvec2(r, -r);

        let mut c = Construction::new();
        draw_right(&mut c, layout, corners, ["A", "B", "C"]);
        c.circle(incenter, r, Class::Shape).vertex("I", incenter);
        c
    }
}

// ============================================================================
// Quadrilaterals
// ============================================================================

/// Axis-aligned box with A top-left, going clockwise.
fn boxed(layout: &Layout, w: f64, h: f64, diagonals: bool) -> Construction {
    let pa = layout.center() - dvec2(w, h) / 2.0;
    let pb = pa + dvec2(w, 0.0);
    let pc = pa + dvec2(w, h);
    let pd = pa + dvec2(0.0, h);

    let mut c = Construction::new();
    c.polygon(&[pa, pb, pc, pd], Class::Shape)
        .vertex("A", pa)
        .vertex("B", pb)
        .vertex("C", pc)
        .vertex("D", pd);
    if diagonals {
        c.line(pa, pc, Class::Dimension).line(pb, pd, Class::Dimension);
    }
    c
}

impl Construct for Rectangle {
    fn construct(&self, layout: &Layout) -> Construction {
        boxed(layout, layout.px(self.width), layout.px(self.height), self.show_diagonals)
    }
}

impl Construct for Square {
    fn construct(&self, layout: &Layout) -> Construction {
        let side = layout.px(self.side);
        boxed(layout, side, side, self.show_diagonals)
    }
}

impl Construct for Parallelogram {
    fn construct(&self, layout: &Layout) -> Construction {
        let base = layout.px(self.base);
        let side = layout.px(self.height) / self.angle.to_radians().sin();
        let pa = DVec2::ZERO;
        let pd = polar(pa, side, self.angle.raw());
        let mut pts = [pa, pa + dvec2(base, 0.0), pd + dvec2(base, 0.0), pd];
        center_on(&mut pts, layout.center());
        let [pa, pb, pc, pd] = pts;
        let foot = dvec2(pd.x, pa.y);

        let mut c = Construction::new();
        c.polygon(&pts, Class::Shape)
            .vertex("A", pa)
            .vertex("B", pb)
            .vertex("C", pc)
            .vertex("D", pd)
            .line(pd, foot, Class::Dimension)
            .path(arc(pa, layout.angle_arc_radius, 0.0, self.angle.raw()), Class::AngleArc);
        c
    }
}

impl Construct for Rhombus {
    fn construct(&self, layout: &Layout) -> Construction {
        let o = layout.center();
        let (p, q) = (layout.px(self.diagonal_ac) / 2.0, layout.px(self.diagonal_bd) / 2.0);
        let pa = o + UP * p;
        let pb = o + RIGHT * q;
        let pc = o + DOWN * p;
        let pd = o + LEFT * q;

        let mut c = Construction::new();
        c.polygon(&[pa, pb, pc, pd], Class::Shape)
            .line(pa, pc, Class::Dimension)
            .line(pb, pd, Class::Dimension)
            .vertex("A", pa)
            .vertex("B", pb)
            .vertex("C", pc)
            .vertex("D", pd)
            .vertex("O", o);
        c
    }
}

impl Construct for Trapezoid {
    fn construct(&self, layout: &Layout) -> Construction {
        let (a, b, h) = (
            layout.px(self.upper_base),
            layout.px(self.lower_base),
            layout.px(self.height),
        );
        let pa = DVec2::ZERO;
        let pd = pa + dvec2(0.0, h);
        let mut pts = [pa, pa + dvec2(a, 0.0), pd + dvec2(b, 0.0), pd];
        center_on(&mut pts, layout.center());
        let [pa, pb, pc, pd] = pts;
        let m = midpoint(pa, pd);
        let n = midpoint(pb, pc);

        let mut c = Construction::new();
        c.polygon(&pts, Class::Shape)
            .vertex("A", pa)
            .vertex("B", pb)
            .vertex("C", pc)
            .vertex("D", pd)
            .line(m, n, Class::Dimension)
            .vertex("M", m)
            .vertex("N", n)
            .path(right_angle_marker(pd, RIGHT, UP, layout.right_angle_mark), Class::Shape);
        c
    }
}

// ============================================================================
// Circles
// ============================================================================

impl Construct for CircleSpec {
    fn construct(&self, layout: &Layout) -> Construction {
        let o = layout.center();
        let r = layout.px(self.radius);
        let mut c = Construction::new();
        c.circle(o, r, Class::Shape)
            .vertex("O", o)
            .line(o, o + dvec2(r, 0.0), Class::Shape)
            .text(o + dvec2(r / 2.0, -10.0), "r");
        c
    }
}

impl Construct for SectorSpec {
    fn construct(&self, layout: &Layout) -> Construction {
        let o = layout.center();
        let r = layout.px(self.radius);
        let theta = self.central_angle.raw();
        let pa = polar(o, r, 0.0);
        let pb = polar(o, r, theta);

        let mut c = Construction::new();
        c.vertex("O", o)
            .vertex("A", pa)
            .vertex("B", pb)
            .line(o, pa, Class::Shape)
            .line(o, pb, Class::Shape)
            .path(arc(o, r, 0.0, theta), Class::Shape)
            .path(arc(o, layout.angle_arc_radius, 0.0, theta), Class::AngleArc);
        c
    }
}

impl Construct for TangentSpec {
    fn construct(&self, layout: &Layout) -> Construction {
        let (r, d) = (layout.px(self.radius), layout.px(self.distance_to_center));
        let center = layout.center();
        // Centre the span from the circle's left edge to P.
        let o = dvec2(center.x - (d - r) / 2.0, center.y);
        let p = o + dvec2(d, 0.0);

        // From P, the tangents leave at ±asin(r/d) to PO and run √(d² − r²).
        let alpha = (self.radius.raw() / self.distance_to_center.raw()).asin().to_degrees();
        let t = (d * d - r * r).sqrt();
        let t1 = polar(p, t, 180.0 - alpha);
        let t2 = polar(p, t, 180.0 + alpha);

        let mut c = Construction::new();
        c.circle(o, r, Class::Shape)
            .vertex("O", o)
            .vertex("P", p)
            .vertex("T₁", t1)
            .vertex("T₂", t2)
            .line(p, t1, Class::Shape)
            .line(p, t2, Class::Shape)
            .line(o, t1, Class::Dimension)
            .line(o, t2, Class::Dimension)
            .line(o, p, Class::Dimension);
        c
    }
}

impl Construct for ChordSpec {
    fn construct(&self, layout: &Layout) -> Construction {
        let o = layout.center();
        let r = layout.px(self.radius);
        let d = layout.px(self.chord_distance);
        let half = (r * r - d * d).sqrt();
        let pa = o + dvec2(-half, d);
        let pb = o + dvec2(half, d);
        let m = midpoint(pa, pb);

        let mut c = Construction::new();
        c.circle(o, r, Class::Shape)
            .vertex("O", o)
            .vertex("A", pa)
            .vertex("B", pb)
            .line(pa, pb, Class::Shape)
            .vertex("M", m)
            .line(o, m, Class::Dimension);
        c
    }
}

impl Construct for InscribedTriangleSpec {
    fn construct(&self, layout: &Layout) -> Construction {
        let o = layout.center();
        let r = layout.px(self.circumradius);
        let [pa, pb, pc] = [90.0, 210.0, 330.0].map(|deg| polar(o, r, deg));

        let mut c = Construction::new();
        c.circle(o, r, Class::Shape)
            .vertex("O", o)
            .polygon(&[pa, pb, pc], Class::Shape)
            .vertex("A", pa)
            .vertex("B", pb)
            .vertex("C", pc);
        c
    }
}

/// The grid is fitted to the drawable area; the pixel scale plays no part.
impl Construct for CoordinatePlaneSpec {
    fn construct(&self, layout: &Layout) -> Construction {
        let canvas = &layout.canvas;
        let (w, h, m) = (canvas.width, canvas.height, canvas.margin);
        let (x_min, x_max) = (f64::from(self.x_min), f64::from(self.x_max));
        let (y_min, y_max) = (f64::from(self.y_min), f64::from(self.y_max));
        let cell_w = (w - 2.0 * m) / (x_max - x_min);
        let cell_h = (h - 2.0 * m) / (y_max - y_min);

        let mut c = Construction::new();
        for i in self.x_min..=self.x_max {
            let x = m + (f64::from(i) - x_min) * cell_w;
            c.line(dvec2(x, m), dvec2(x, h - m), Class::Grid);
        }
        for i in self.y_min..=self.y_max {
            let y = h - m - (f64::from(i) - y_min) * cell_h;
            c.line(dvec2(m, y), dvec2(w - m, y), Class::Grid);
        }

        let origin = dvec2(m - x_min * cell_w, h - m + y_min * cell_h);
        let (len, half) = (defaults::ARROW_LENGTH, defaults::ARROW_HALF_WIDTH);
        let x_tip = dvec2(w - m, origin.y);
        let y_tip = dvec2(origin.x, m);
        c.line(dvec2(m, origin.y), x_tip, Class::Shape)
            .line(dvec2(origin.x, h - m), y_tip, Class::Shape)
            .polygon(
                &[x_tip, x_tip + dvec2(-len, -half), x_tip + dvec2(-len, half)],
                Class::Shape,
            )
            .polygon(
                &[y_tip, y_tip + dvec2(-half, len), y_tip + dvec2(half, len)],
                Class::Shape,
            )
            .text(x_tip + dvec2(10.0, 5.0), "x")
            .text(y_tip + dvec2(-10.0, -5.0), "y")
            .text(origin + dvec2(-15.0, 15.0), "O");
        c
    }
}
