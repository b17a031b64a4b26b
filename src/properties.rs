//! Derived measurements: the numbers the question text and answer quote.
//!
//! Every value here comes from the shape's defining parameters alone. Nothing
//! reads pixel coordinates, so the pixel multiplier can never leak into an
//! answer.

use std::collections::BTreeMap;
use std::fmt;

use enum_dispatch::enum_dispatch;
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::errors::DomainError;
use crate::spec::*;
use crate::types::{Angle, Length};

macro_rules! properties {
    ($($variant:ident => $name:literal,)*) => {
        /// Name of a derived quantity.
        ///
        /// The set is closed: a question can only quote what the calculator produces.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Property {
            $($variant,)*
        }

        impl Property {
            pub const ALL: &'static [Property] = &[$(Property::$variant,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(Property::$variant => $name,)*
                }
            }
        }
    };
}

properties! {
    LegA => "leg_a",
    LegB => "leg_b",
    Hypotenuse => "hypotenuse",
    Side => "side",
    Base => "base",
    Height => "height",
    Leg => "leg",
    Width => "width",
    Diagonal => "diagonal",
    DiagonalAc => "diagonal_ac",
    DiagonalBd => "diagonal_bd",
    UpperBase => "upper_base",
    LowerBase => "lower_base",
    Midline => "midline",
    Median => "median",
    Area => "area",
    Perimeter => "perimeter",
    Angle => "angle",
    AngleA => "angle_a",
    AngleB => "angle_b",
    AngleC => "angle_c",
    Radius => "radius",
    Diameter => "diameter",
    Circumference => "circumference",
    CentralAngle => "central_angle",
    ArcLength => "arc_length",
    DistanceToCenter => "distance_to_center",
    TangentLength => "tangent_length",
    ChordDistance => "chord_distance",
    HalfChord => "half_chord",
    ChordLength => "chord_length",
    Circumradius => "circumradius",
    Inradius => "inradius",
    SimilarityRatio => "similarity_ratio",
    ImageLegA => "image_leg_a",
    ImageLegB => "image_leg_b",
    ImageHypotenuse => "image_hypotenuse",
    ImageArea => "image_area",
    ImagePerimeter => "image_perimeter",
    XMin => "x_min",
    XMax => "x_max",
    YMin => "y_min",
    YMax => "y_max",
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Whether a value is rational in the inputs or went through a root, π or trig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Exact,
    Approximate,
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A derived value plus how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub precision: Precision,
}

impl Quantity {
    pub fn rounded(&self) -> f64 {
        round2(self.value)
    }

    /// `24`, `78.5` for exact values; `10.00`, `8.66` for approximate ones.
    pub fn display(&self) -> String {
        let text = format!("{:.2}", self.rounded());
        match self.precision {
            Precision::Approximate => text,
            Precision::Exact => text.trim_end_matches('0').trim_end_matches('.').to_string(),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Quantity", 2)?;
        s.serialize_field("value", &self.value)?;
        s.serialize_field("display", &self.display())?;
        s.end()
    }
}

/// Ordered map from property to quantity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap {
    entries: BTreeMap<Property, Quantity>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, property: Property, value: f64, precision: Precision) -> &mut Self {
        self.entries.insert(property, Quantity { value, precision });
        self
    }

    pub(crate) fn exact(&mut self, property: Property, value: f64) -> &mut Self {
        self.insert(property, value, Precision::Exact)
    }

    pub(crate) fn approx(&mut self, property: Property, value: f64) -> &mut Self {
        self.insert(property, value, Precision::Approximate)
    }

    /// Unrounded value.
    pub fn get(&self, property: Property) -> Option<f64> {
        self.entries.get(&property).map(|q| q.value)
    }

    pub fn quantity(&self, property: Property) -> Option<&Quantity> {
        self.entries.get(&property)
    }

    /// The string a question or answer should quote.
    pub fn display(&self, property: Property) -> Option<String> {
        self.quantity(property).map(Quantity::display)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.entries.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &Quantity)> {
        self.entries.iter().map(|(p, q)| (*p, q))
    }

    /// One `name=value` line per entry.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for (property, quantity) in &self.entries {
            out.push_str(property.name());
            out.push('=');
            out.push_str(&quantity.display());
            out.push('\n');
        }
        out
    }

    pub(crate) fn ensure_finite(&self) -> Result<(), DomainError> {
        match self.entries.iter().find(|(_, q)| !q.value.is_finite()) {
            Some((property, _)) => Err(DomainError::NonFiniteQuantity { name: property.name() }),
            None => Ok(()),
        }
    }
}

/// Closed-form measurements of a shape. Assumes the shape already passed `Validate`.
#[enum_dispatch]
pub trait Measure {
    fn properties(&self) -> crate::properties::PropertyMap;
}

/// Validate, measure, and refuse any non-finite result.
pub fn compute_properties(spec: &ShapeSpec) -> Result<PropertyMap, DomainError> {
    spec.validate()?;
    let map = spec.properties();
    map.ensure_finite()?;
    Ok(map)
}

// ============================================================================
// Triangles
// ============================================================================

fn hypot(a: Length, b: Length) -> f64 {
    (a.squared() + b.squared()).sqrt()
}

/// Right angle at A, legs AB = a and AC = b.
fn measure_right(map: &mut PropertyMap, a: Length, b: Length) {
    let c = hypot(a, b);
    let angle_b = Angle::atan(b.raw() / a.raw()).raw();
    map.exact(Property::LegA, a.raw())
        .exact(Property::LegB, b.raw())
        .approx(Property::Hypotenuse, c)
        .exact(Property::Area, a.raw() * b.raw() / 2.0)
        .approx(Property::Perimeter, a.raw() + b.raw() + c)
        .exact(Property::AngleA, 90.0)
        .approx(Property::AngleB, angle_b)
        .approx(Property::AngleC, 90.0 - angle_b);
}

impl Measure for RightTriangle {
    fn properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        measure_right(&mut map, self.leg_a, self.leg_b);
        map
    }
}

impl Measure for EquilateralTriangle {
    fn properties(&self) -> PropertyMap {
        let a = self.side.raw();
        let sqrt3 = 3f64.sqrt();
        let mut map = PropertyMap::new();
        map.exact(Property::Side, a)
            .approx(Property::Height, a * sqrt3 / 2.0)
            .approx(Property::Area, a * a * sqrt3 / 4.0)
            .exact(Property::Perimeter, 3.0 * a);
        map
    }
}

impl Measure for IsoscelesTriangle {
    fn properties(&self) -> PropertyMap {
        let (b, h) = (self.base.raw(), self.height.raw());
        let leg = (h * h + (b / 2.0) * (b / 2.0)).sqrt();
        let mut map = PropertyMap::new();
        map.exact(Property::Base, b)
            .exact(Property::Height, h)
            .approx(Property::Leg, leg)
            .exact(Property::Area, b * h / 2.0)
            .approx(Property::Perimeter, b + 2.0 * leg);
        map
    }
}

impl Measure for SimilarTriangles {
    fn properties(&self) -> PropertyMap {
        let k = self.ratio;
        let (a, b) = (self.leg_a.raw(), self.leg_b.raw());
        let c = hypot(self.leg_a, self.leg_b);
        let mut map = PropertyMap::new();
        measure_right(&mut map, self.leg_a, self.leg_b);
        map.exact(Property::SimilarityRatio, k)
            .exact(Property::ImageLegA, a * k)
            .exact(Property::ImageLegB, b * k)
            .approx(Property::ImageHypotenuse, c * k)
            .exact(Property::ImageArea, a * b / 2.0 * k * k)
            .approx(Property::ImagePerimeter, (a + b + c) * k);
        map
    }
}

impl Measure for CongruentTriangles {
    fn properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        measure_right(&mut map, self.leg_a, self.leg_b);
        map
    }
}

impl Measure for MedianTriangle {
    fn properties(&self) -> PropertyMap {
        let (b, h) = (self.base.raw(), self.height.raw());
        let hyp = hypot(self.base, self.height);
        let median = ((b / 2.0) * (b / 2.0) + h * h).sqrt();
        let mut map = PropertyMap::new();
        map.exact(Property::Base, b)
            .exact(Property::Height, h)
            .approx(Property::Hypotenuse, hyp)
            .approx(Property::Median, median)
            .exact(Property::Area, b * h / 2.0)
            .approx(Property::Perimeter, b + h + hyp);
        map
    }
}

impl Measure for CircumcircleTriangle {
    fn properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        measure_right(&mut map, self.leg_a, self.leg_b);
        map.approx(Property::Circumradius, hypot(self.leg_a, self.leg_b) / 2.0);
        map
    }
}

impl Measure for IncircleTriangle {
    fn properties(&self) -> PropertyMap {
        let c = hypot(self.leg_a, self.leg_b);
        let mut map = PropertyMap::new();
        measure_right(&mut map, self.leg_a, self.leg_b);
        map.approx(Property::Inradius, (self.leg_a.raw() + self.leg_b.raw() - c) / 2.0);
        map
    }
}

// ============================================================================
// Quadrilaterals
// ============================================================================

impl Measure for Rectangle {
    fn properties(&self) -> PropertyMap {
        let (w, h) = (self.width.raw(), self.height.raw());
        let mut map = PropertyMap::new();
        map.exact(Property::Width, w)
            .exact(Property::Height, h)
            .exact(Property::Area, w * h)
            .exact(Property::Perimeter, 2.0 * (w + h))
            .approx(Property::Diagonal, hypot(self.width, self.height));
        map
    }
}

impl Measure for Square {
    fn properties(&self) -> PropertyMap {
        let s = self.side.raw();
        let mut map = PropertyMap::new();
        map.exact(Property::Side, s)
            .exact(Property::Area, s * s)
            .exact(Property::Perimeter, 4.0 * s)
            .approx(Property::Diagonal, s * std::f64::consts::SQRT_2);
        map
    }
}

impl Measure for Parallelogram {
    fn properties(&self) -> PropertyMap {
        let (b, h) = (self.base.raw(), self.height.raw());
        let side = h / self.angle.to_radians().sin();
        let mut map = PropertyMap::new();
        map.exact(Property::Base, b)
            .exact(Property::Height, h)
            .exact(Property::Angle, self.angle.raw())
            .approx(Property::Side, side)
            .exact(Property::Area, b * h)
            .approx(Property::Perimeter, 2.0 * (b + side));
        map
    }
}

impl Measure for Rhombus {
    fn properties(&self) -> PropertyMap {
        let (p, q) = (self.diagonal_ac.raw(), self.diagonal_bd.raw());
        let side = ((p / 2.0) * (p / 2.0) + (q / 2.0) * (q / 2.0)).sqrt();
        let mut map = PropertyMap::new();
        map.exact(Property::DiagonalAc, p)
            .exact(Property::DiagonalBd, q)
            .approx(Property::Side, side)
            .exact(Property::Area, p * q / 2.0)
            .approx(Property::Perimeter, 4.0 * side);
        map
    }
}

impl Measure for Trapezoid {
    fn properties(&self) -> PropertyMap {
        let (a, b, h) = (self.upper_base.raw(), self.lower_base.raw(), self.height.raw());
        let midline = (a + b) / 2.0;
        let leg = ((b - a) * (b - a) + h * h).sqrt();
        let mut map = PropertyMap::new();
        map.exact(Property::UpperBase, a)
            .exact(Property::LowerBase, b)
            .exact(Property::Height, h)
            .exact(Property::Midline, midline)
            .approx(Property::Leg, leg)
            .exact(Property::Area, midline * h)
            .approx(Property::Perimeter, a + b + h + leg);
        map
    }
}

// ============================================================================
// Circles
// ============================================================================

impl Measure for CircleSpec {
    fn properties(&self) -> PropertyMap {
        let r = self.radius.raw();
        let pi = self.pi.value();
        let mut map = PropertyMap::new();
        map.exact(Property::Radius, r).exact(Property::Diameter, 2.0 * r);
        match self.pi {
            Pi::TwoDecimals => map
                .exact(Property::Area, pi * r * r)
                .exact(Property::Circumference, 2.0 * pi * r),
            Pi::Full => map
                .approx(Property::Area, pi * r * r)
                .approx(Property::Circumference, 2.0 * pi * r),
        };
        map
    }
}

impl Measure for SectorSpec {
    fn properties(&self) -> PropertyMap {
        let r = self.radius.raw();
        let theta = self.central_angle.raw();
        let pi = std::f64::consts::PI;
        let arc = theta / 180.0 * pi * r;
        let mut map = PropertyMap::new();
        map.exact(Property::Radius, r)
            .exact(Property::CentralAngle, theta)
            .approx(Property::Area, theta / 360.0 * pi * r * r)
            .approx(Property::ArcLength, arc)
            .approx(Property::Perimeter, 2.0 * r + arc);
        map
    }
}

impl Measure for TangentSpec {
    fn properties(&self) -> PropertyMap {
        let (r, d) = (self.radius.raw(), self.distance_to_center.raw());
        let mut map = PropertyMap::new();
        map.exact(Property::Radius, r)
            .exact(Property::DistanceToCenter, d)
            .approx(Property::TangentLength, (d * d - r * r).sqrt());
        map
    }
}

impl Measure for ChordSpec {
    fn properties(&self) -> PropertyMap {
        let (r, d) = (self.radius.raw(), self.chord_distance.raw());
        let half = (r * r - d * d).sqrt();
        let mut map = PropertyMap::new();
        map.exact(Property::Radius, r)
            .exact(Property::ChordDistance, d)
            .approx(Property::HalfChord, half)
            .approx(Property::ChordLength, 2.0 * half);
        map
    }
}

impl Measure for InscribedTriangleSpec {
    fn properties(&self) -> PropertyMap {
        let big_r = self.circumradius.raw();
        let side = big_r * 3f64.sqrt();
        let mut map = PropertyMap::new();
        map.exact(Property::Circumradius, big_r)
            .approx(Property::Side, side)
            .approx(Property::Area, 3f64.sqrt() / 4.0 * side * side)
            .approx(Property::Perimeter, 3.0 * side);
        map
    }
}

impl Measure for CoordinatePlaneSpec {
    fn properties(&self) -> PropertyMap {
        let mut map = PropertyMap::new();
        map.exact(Property::XMin, f64::from(self.x_min))
            .exact(Property::XMax, f64::from(self.x_max))
            .exact(Property::YMin, f64::from(self.y_min))
            .exact(Property::YMax, f64::from(self.y_max));
        map
    }
}
