//! Shape specifications: family × variant plus the defining measurements.
//!
//! A [`ShapeSpec`] is built per question, handed to the property calculator and
//! the shape constructor, and dropped. Nothing in here knows about pixels.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, FigureError, ensure_positive};
use crate::properties::{Measure, Property};
use crate::render::shapes::Construct;
use crate::types::{Angle, Length};

/// Loosely-typed parameters, keyed by name.
pub type ParamMap = BTreeMap<String, f64>;

/// Parameter checks run before any formula or layout sees the shape.
#[enum_dispatch]
pub trait Validate {
    fn validate(&self) -> Result<(), crate::errors::DomainError>;
}

// ============================================================================
// Specs
// ============================================================================

/// A geometric figure to synthesize.
#[enum_dispatch(Validate, Measure, Construct)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum ShapeSpec {
    Triangle(TriangleSpec),
    Quadrilateral(QuadrilateralSpec),
    Circle(CircleSpec),
    Sector(SectorSpec),
    Tangent(TangentSpec),
    Chord(ChordSpec),
    InscribedTriangle(InscribedTriangleSpec),
    CoordinatePlane(CoordinatePlaneSpec),
}

#[enum_dispatch(Validate, Measure, Construct)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum TriangleSpec {
    Right(RightTriangle),
    Equilateral(EquilateralTriangle),
    Isosceles(IsoscelesTriangle),
    Similar(SimilarTriangles),
    Congruent(CongruentTriangles),
    Median(MedianTriangle),
    Circumcircle(CircumcircleTriangle),
    Incircle(IncircleTriangle),
}

#[enum_dispatch(Validate, Measure, Construct)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum QuadrilateralSpec {
    Rectangle(Rectangle),
    Square(Square),
    Parallelogram(Parallelogram),
    Rhombus(Rhombus),
    Trapezoid(Trapezoid),
}

/// Right triangle with the right angle at A, leg AB = `leg_a` and leg AC = `leg_b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RightTriangle {
    pub leg_a: Length,
    pub leg_b: Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilateralTriangle {
    pub side: Length,
}

/// Isosceles triangle given by its base BC and the altitude from the apex A.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsoscelesTriangle {
    pub base: Length,
    pub height: Length,
}

/// Right triangle ABC and its image DEF under a similarity with factor `ratio`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarTriangles {
    pub leg_a: Length,
    pub leg_b: Length,
    pub ratio: f64,
}

/// Right triangle ABC and a congruent copy DEF turned half a revolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CongruentTriangles {
    pub leg_a: Length,
    pub leg_b: Length,
}

/// Triangle with the right angle at B: altitude AB = `height`, base BC = `base`,
/// and the median AD to the midpoint of BC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MedianTriangle {
    pub base: Length,
    pub height: Length,
}

/// Right triangle with its circumscribed circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircumcircleTriangle {
    pub leg_a: Length,
    pub leg_b: Length,
}

/// Right triangle with its inscribed circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncircleTriangle {
    pub leg_a: Length,
    pub leg_b: Length,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: Length,
    pub height: Length,
    #[serde(default)]
    pub show_diagonals: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub side: Length,
    #[serde(default)]
    pub show_diagonals: bool,
}

/// Parallelogram ABCD with base AB, the height onto AB, and the interior angle at A.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Parallelogram {
    pub base: Length,
    pub height: Length,
    pub angle: Angle,
}

/// Rhombus given by its diagonals; AC is drawn vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rhombus {
    pub diagonal_ac: Length,
    pub diagonal_bd: Length,
}

/// Right trapezoid ABCD: AB ∥ DC, with AD perpendicular to both bases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    pub upper_base: Length,
    pub lower_base: Length,
    pub height: Length,
}

/// Which value of π the question text commits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pi {
    #[default]
    Full,
    /// The classroom approximation 3.14
    TwoDecimals,
}

impl Pi {
    pub fn value(self) -> f64 {
        match self {
            Pi::Full => std::f64::consts::PI,
            Pi::TwoDecimals => 3.14,
        }
    }

    /// Map a caller-supplied number onto a supported approximation.
    pub fn from_value(value: f64) -> Result<Pi, DomainError> {
        if value == 3.14 {
            Ok(Pi::TwoDecimals)
        } else if value == std::f64::consts::PI {
            Ok(Pi::Full)
        } else {
            Err(DomainError::UnsupportedPi { value })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub radius: Length,
    #[serde(default)]
    pub pi: Pi,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorSpec {
    pub radius: Length,
    pub central_angle: Angle,
}

/// Circle O with an external point P and both tangents from P.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TangentSpec {
    pub radius: Length,
    pub distance_to_center: Length,
}

/// Circle O with a chord AB at `chord_distance` from the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChordSpec {
    pub radius: Length,
    pub chord_distance: Length,
}

/// Equilateral triangle inscribed in a circle of radius `circumradius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InscribedTriangleSpec {
    pub circumradius: Length,
}

/// Cartesian grid with axes through the origin.
///
/// Each axis spans at most [`CoordinatePlaneSpec::MAX_SPAN`] unit cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatePlaneSpec {
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl CoordinatePlaneSpec {
    /// Widest allowed range per axis, in unit cells.
    pub const MAX_SPAN: i64 = 50;
}

impl Default for CoordinatePlaneSpec {
    fn default() -> Self {
        Self { x_min: -5, x_max: 5, y_min: -4, y_max: 4 }
    }
}

// ============================================================================
// Validation
// ============================================================================

fn ensure_legs(a: Length, b: Length) -> Result<(), DomainError> {
    ensure_positive("leg_a", a.raw())?;
    ensure_positive("leg_b", b.raw())
}

impl Validate for RightTriangle {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_legs(self.leg_a, self.leg_b)
    }
}

impl Validate for EquilateralTriangle {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("side", self.side.raw())
    }
}

impl Validate for IsoscelesTriangle {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("base", self.base.raw())?;
        ensure_positive("height", self.height.raw())
    }
}

impl Validate for SimilarTriangles {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_legs(self.leg_a, self.leg_b)?;
        ensure_positive("ratio", self.ratio)
    }
}

impl Validate for CongruentTriangles {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_legs(self.leg_a, self.leg_b)
    }
}

impl Validate for MedianTriangle {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("base", self.base.raw())?;
        ensure_positive("height", self.height.raw())
    }
}

impl Validate for CircumcircleTriangle {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_legs(self.leg_a, self.leg_b)
    }
}

impl Validate for IncircleTriangle {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_legs(self.leg_a, self.leg_b)
    }
}

impl Validate for Rectangle {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("width", self.width.raw())?;
        ensure_positive("height", self.height.raw())
    }
}

impl Validate for Square {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("side", self.side.raw())
    }
}

impl Validate for Parallelogram {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("base", self.base.raw())?;
        ensure_positive("height", self.height.raw())?;
        let angle = self.angle.raw();
        if angle.is_finite() && angle > 0.0 && angle < 180.0 {
            Ok(())
        } else {
            Err(DomainError::AngleOutOfRange {
                name: "angle",
                value: angle,
                min: 0.0,
                max: 180.0,
                min_inclusive: false,
                max_inclusive: false,
            })
        }
    }
}

impl Validate for Rhombus {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("diagonal_ac", self.diagonal_ac.raw())?;
        ensure_positive("diagonal_bd", self.diagonal_bd.raw())
    }
}

impl Validate for Trapezoid {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("upper_base", self.upper_base.raw())?;
        ensure_positive("lower_base", self.lower_base.raw())?;
        ensure_positive("height", self.height.raw())
    }
}

impl Validate for CircleSpec {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("radius", self.radius.raw())
    }
}

impl Validate for SectorSpec {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("radius", self.radius.raw())?;
        let angle = self.central_angle.raw();
        if angle.is_finite() && angle > 0.0 && angle <= 360.0 {
            Ok(())
        } else {
            Err(DomainError::AngleOutOfRange {
                name: "central_angle",
                value: angle,
                min: 0.0,
                max: 360.0,
                min_inclusive: false,
                max_inclusive: true,
            })
        }
    }
}

impl Validate for TangentSpec {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("radius", self.radius.raw())?;
        ensure_positive("distance_to_center", self.distance_to_center.raw())?;
        if self.distance_to_center.raw() <= self.radius.raw() {
            return Err(DomainError::PointNotOutsideCircle {
                radius: self.radius.raw(),
                distance: self.distance_to_center.raw(),
            });
        }
        Ok(())
    }
}

impl Validate for ChordSpec {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("radius", self.radius.raw())?;
        ensure_positive("chord_distance", self.chord_distance.raw())?;
        if self.chord_distance.raw() >= self.radius.raw() {
            return Err(DomainError::ChordNotInsideCircle {
                radius: self.radius.raw(),
                distance: self.chord_distance.raw(),
            });
        }
        Ok(())
    }
}

impl Validate for InscribedTriangleSpec {
    fn validate(&self) -> Result<(), DomainError> {
        ensure_positive("circumradius", self.circumradius.raw())
    }
}

impl Validate for CoordinatePlaneSpec {
    fn validate(&self) -> Result<(), DomainError> {
        for (axis, min, max) in [('x', self.x_min, self.x_max), ('y', self.y_min, self.y_max)] {
            if min >= max {
                return Err(DomainError::EmptyRange { axis, min, max });
            }
            if min > 0 || max < 0 {
                return Err(DomainError::OriginOutsideRange { axis, min, max });
            }
            if i64::from(max) - i64::from(min) > Self::MAX_SPAN {
                return Err(DomainError::GridTooDense { axis, min, max, max_span: Self::MAX_SPAN });
            }
        }
        Ok(())
    }
}

// ============================================================================
// Kinds
// ============================================================================

/// Top-level shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Triangle,
    Quadrilateral,
    Circle,
    Sector,
    Tangent,
    Chord,
    InscribedTriangle,
    CoordinatePlane,
}

impl Family {
    pub fn name(self) -> &'static str {
        match self {
            Family::Triangle => "triangle",
            Family::Quadrilateral => "quadrilateral",
            Family::Circle => "circle",
            Family::Sector => "sector",
            Family::Tangent => "tangent",
            Family::Chord => "chord",
            Family::InscribedTriangle => "inscribed_triangle",
            Family::CoordinatePlane => "coordinate_plane",
        }
    }

    /// Property keys every variant of this family produces.
    pub fn required_properties(self) -> &'static [Property] {
        match self {
            Family::Triangle | Family::Quadrilateral => &[Property::Area, Property::Perimeter],
            Family::Circle => &[
                Property::Radius,
                Property::Diameter,
                Property::Area,
                Property::Circumference,
            ],
            Family::Sector => &[
                Property::Radius,
                Property::CentralAngle,
                Property::Area,
                Property::ArcLength,
            ],
            Family::Tangent => &[Property::TangentLength],
            Family::Chord => &[Property::ChordLength],
            Family::InscribedTriangle => &[Property::Circumradius, Property::Side, Property::Area],
            Family::CoordinatePlane => {
                &[Property::XMin, Property::XMax, Property::YMin, Property::YMax]
            }
        }
    }
}

impl FromStr for Family {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "triangle" => Family::Triangle,
            "quadrilateral" => Family::Quadrilateral,
            "circle" => Family::Circle,
            "sector" => Family::Sector,
            "tangent" => Family::Tangent,
            "chord" => Family::Chord,
            "inscribed_triangle" => Family::InscribedTriangle,
            "coordinate_plane" => Family::CoordinatePlane,
            other => {
                return Err(FigureError::UnsupportedVariant {
                    family: other.to_string(),
                    variant: String::new(),
                });
            }
        })
    }
}

/// Every implemented family/variant combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    RightTriangle,
    EquilateralTriangle,
    IsoscelesTriangle,
    SimilarTriangles,
    CongruentTriangles,
    MedianTriangle,
    CircumcircleTriangle,
    IncircleTriangle,
    Rectangle,
    Square,
    Parallelogram,
    Rhombus,
    Trapezoid,
    Circle,
    Sector,
    Tangent,
    Chord,
    InscribedTriangle,
    CoordinatePlane,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 19] = [
        ShapeKind::RightTriangle,
        ShapeKind::EquilateralTriangle,
        ShapeKind::IsoscelesTriangle,
        ShapeKind::SimilarTriangles,
        ShapeKind::CongruentTriangles,
        ShapeKind::MedianTriangle,
        ShapeKind::CircumcircleTriangle,
        ShapeKind::IncircleTriangle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Parallelogram,
        ShapeKind::Rhombus,
        ShapeKind::Trapezoid,
        ShapeKind::Circle,
        ShapeKind::Sector,
        ShapeKind::Tangent,
        ShapeKind::Chord,
        ShapeKind::InscribedTriangle,
        ShapeKind::CoordinatePlane,
    ];

    pub fn family(self) -> Family {
        use ShapeKind::*;
        match self {
            RightTriangle | EquilateralTriangle | IsoscelesTriangle | SimilarTriangles
            | CongruentTriangles | MedianTriangle | CircumcircleTriangle | IncircleTriangle => {
                Family::Triangle
            }
            Rectangle | Square | Parallelogram | Rhombus | Trapezoid => Family::Quadrilateral,
            Circle => Family::Circle,
            Sector => Family::Sector,
            Tangent => Family::Tangent,
            Chord => Family::Chord,
            InscribedTriangle => Family::InscribedTriangle,
            CoordinatePlane => Family::CoordinatePlane,
        }
    }

    /// Variant name within the family; `None` for single-variant families.
    pub fn variant(self) -> Option<&'static str> {
        use ShapeKind::*;
        Some(match self {
            RightTriangle => "right",
            EquilateralTriangle => "equilateral",
            IsoscelesTriangle => "isosceles",
            SimilarTriangles => "similar",
            CongruentTriangles => "congruent",
            MedianTriangle => "median",
            CircumcircleTriangle => "circumcircle",
            IncircleTriangle => "incircle",
            Rectangle => "rectangle",
            Square => "square",
            Parallelogram => "parallelogram",
            Rhombus => "rhombus",
            Trapezoid => "trapezoid",
            Circle | Sector | Tangent | Chord | InscribedTriangle | CoordinatePlane => return None,
        })
    }

    /// Resolve a family name and a variant name (empty for single-variant families).
    pub fn from_parts(family: &str, variant: &str) -> Result<ShapeKind, FigureError> {
        let unsupported = || FigureError::UnsupportedVariant {
            family: family.to_string(),
            variant: variant.to_string(),
        };
        let fam: Family = family.parse().map_err(|_| unsupported())?;
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.family() == fam && kind.variant().unwrap_or("") == variant)
            .ok_or_else(unsupported)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant() {
            Some(variant) => write!(f, "{}/{}", self.family().name(), variant),
            None => f.write_str(self.family().name()),
        }
    }
}

/// Parses `family/variant`, or a bare family name for single-variant families.
impl FromStr for ShapeKind {
    type Err = FigureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, variant) = s.split_once('/').unwrap_or((s, ""));
        ShapeKind::from_parts(family.trim(), variant.trim())
    }
}

// ============================================================================
// ShapeSpec construction
// ============================================================================

struct Params<'a> {
    kind: ShapeKind,
    map: &'a ParamMap,
}

impl Params<'_> {
    fn number(&self, name: &'static str) -> Result<f64, FigureError> {
        self.map.get(name).copied().ok_or_else(|| FigureError::MissingParameter {
            kind: self.kind.to_string(),
            name,
        })
    }

    fn length(&self, name: &'static str) -> Result<Length, FigureError> {
        self.number(name).map(Length)
    }

    fn angle(&self, name: &'static str) -> Result<Angle, FigureError> {
        self.number(name).map(Angle)
    }

    fn flag(&self, name: &str) -> bool {
        self.map.get(name).is_some_and(|v| *v != 0.0)
    }

    fn bound(&self, name: &'static str) -> Result<i32, FigureError> {
        let value = self.number(name)?;
        if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
            return Err(DomainError::NonIntegralBound { name, value }.into());
        }
        Ok(value as i32)
    }
}

impl ShapeSpec {
    /// Build a typed spec from a kind and a name → number map.
    ///
    /// Extra keys are ignored. Values are not validated here; the pipeline does
    /// that before measuring or drawing anything.
    pub fn from_params(kind: ShapeKind, map: &ParamMap) -> Result<ShapeSpec, FigureError> {
        let p = Params { kind, map };
        let spec: ShapeSpec = match kind {
            ShapeKind::RightTriangle => TriangleSpec::from(RightTriangle {
                leg_a: p.length("leg_a")?,
                leg_b: p.length("leg_b")?,
            })
            .into(),
            ShapeKind::EquilateralTriangle => {
                TriangleSpec::from(EquilateralTriangle { side: p.length("side")? }).into()
            }
            ShapeKind::IsoscelesTriangle => TriangleSpec::from(IsoscelesTriangle {
                base: p.length("base")?,
                height: p.length("height")?,
            })
            .into(),
            ShapeKind::SimilarTriangles => TriangleSpec::from(SimilarTriangles {
                leg_a: p.length("leg_a")?,
                leg_b: p.length("leg_b")?,
                ratio: p.number("ratio")?,
            })
            .into(),
            ShapeKind::CongruentTriangles => TriangleSpec::from(CongruentTriangles {
                leg_a: p.length("leg_a")?,
                leg_b: p.length("leg_b")?,
            })
            .into(),
            ShapeKind::MedianTriangle => TriangleSpec::from(MedianTriangle {
                base: p.length("base")?,
                height: p.length("height")?,
            })
            .into(),
            ShapeKind::CircumcircleTriangle => TriangleSpec::from(CircumcircleTriangle {
                leg_a: p.length("leg_a")?,
                leg_b: p.length("leg_b")?,
            })
            .into(),
            ShapeKind::IncircleTriangle => TriangleSpec::from(IncircleTriangle {
                leg_a: p.length("leg_a")?,
                leg_b: p.length("leg_b")?,
            })
            .into(),
            ShapeKind::Rectangle => QuadrilateralSpec::from(Rectangle {
                width: p.length("width")?,
                height: p.length("height")?,
                show_diagonals: p.flag("show_diagonals"),
            })
            .into(),
            ShapeKind::Square => QuadrilateralSpec::from(Square {
                side: p.length("side")?,
                show_diagonals: p.flag("show_diagonals"),
            })
            .into(),
            ShapeKind::Parallelogram => QuadrilateralSpec::from(Parallelogram {
                base: p.length("base")?,
                height: p.length("height")?,
                angle: p.angle("angle")?,
            })
            .into(),
            ShapeKind::Rhombus => QuadrilateralSpec::from(Rhombus {
                diagonal_ac: p.length("diagonal_ac")?,
                diagonal_bd: p.length("diagonal_bd")?,
            })
            .into(),
            ShapeKind::Trapezoid => QuadrilateralSpec::from(Trapezoid {
                upper_base: p.length("upper_base")?,
                lower_base: p.length("lower_base")?,
                height: p.length("height")?,
            })
            .into(),
            ShapeKind::Circle => {
                let pi = match map.get("pi") {
                    Some(value) => Pi::from_value(*value)?,
                    None => Pi::Full,
                };
                CircleSpec { radius: p.length("radius")?, pi }.into()
            }
            ShapeKind::Sector => SectorSpec {
                radius: p.length("radius")?,
                central_angle: p.angle("central_angle")?,
            }
            .into(),
            ShapeKind::Tangent => TangentSpec {
                radius: p.length("radius")?,
                distance_to_center: p.length("distance_to_center")?,
            }
            .into(),
            ShapeKind::Chord => ChordSpec {
                radius: p.length("radius")?,
                chord_distance: p.length("chord_distance")?,
            }
            .into(),
            ShapeKind::InscribedTriangle => {
                InscribedTriangleSpec { circumradius: p.length("circumradius")? }.into()
            }
            ShapeKind::CoordinatePlane => CoordinatePlaneSpec {
                x_min: p.bound("x_min")?,
                x_max: p.bound("x_max")?,
                y_min: p.bound("y_min")?,
                y_max: p.bound("y_max")?,
            }
            .into(),
        };
        Ok(spec)
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeSpec::Triangle(t) => match t {
                TriangleSpec::Right(_) => ShapeKind::RightTriangle,
                TriangleSpec::Equilateral(_) => ShapeKind::EquilateralTriangle,
                TriangleSpec::Isosceles(_) => ShapeKind::IsoscelesTriangle,
                TriangleSpec::Similar(_) => ShapeKind::SimilarTriangles,
                TriangleSpec::Congruent(_) => ShapeKind::CongruentTriangles,
                TriangleSpec::Median(_) => ShapeKind::MedianTriangle,
                TriangleSpec::Circumcircle(_) => ShapeKind::CircumcircleTriangle,
                TriangleSpec::Incircle(_) => ShapeKind::IncircleTriangle,
            },
            ShapeSpec::Quadrilateral(q) => match q {
                QuadrilateralSpec::Rectangle(_) => ShapeKind::Rectangle,
                QuadrilateralSpec::Square(_) => ShapeKind::Square,
                QuadrilateralSpec::Parallelogram(_) => ShapeKind::Parallelogram,
                QuadrilateralSpec::Rhombus(_) => ShapeKind::Rhombus,
                QuadrilateralSpec::Trapezoid(_) => ShapeKind::Trapezoid,
            },
            ShapeSpec::Circle(_) => ShapeKind::Circle,
            ShapeSpec::Sector(_) => ShapeKind::Sector,
            ShapeSpec::Tangent(_) => ShapeKind::Tangent,
            ShapeSpec::Chord(_) => ShapeKind::Chord,
            ShapeSpec::InscribedTriangle(_) => ShapeKind::InscribedTriangle,
            ShapeSpec::CoordinatePlane(_) => ShapeKind::CoordinatePlane,
        }
    }

    // Shorthands for the common families.

    pub fn right_triangle(leg_a: f64, leg_b: f64) -> ShapeSpec {
        TriangleSpec::from(RightTriangle { leg_a: Length(leg_a), leg_b: Length(leg_b) }).into()
    }

    pub fn equilateral_triangle(side: f64) -> ShapeSpec {
        TriangleSpec::from(EquilateralTriangle { side: Length(side) }).into()
    }

    pub fn isosceles_triangle(base: f64, height: f64) -> ShapeSpec {
        TriangleSpec::from(IsoscelesTriangle { base: Length(base), height: Length(height) }).into()
    }

    pub fn rectangle(width: f64, height: f64) -> ShapeSpec {
        QuadrilateralSpec::from(Rectangle {
            width: Length(width),
            height: Length(height),
            show_diagonals: false,
        })
        .into()
    }

    pub fn square(side: f64) -> ShapeSpec {
        QuadrilateralSpec::from(Square { side: Length(side), show_diagonals: false }).into()
    }

    pub fn circle(radius: f64, pi: Pi) -> ShapeSpec {
        CircleSpec { radius: Length(radius), pi }.into()
    }

    pub fn sector(radius: f64, central_angle: f64) -> ShapeSpec {
        SectorSpec { radius: Length(radius), central_angle: Angle(central_angle) }.into()
    }

    pub fn tangent(radius: f64, distance_to_center: f64) -> ShapeSpec {
        TangentSpec { radius: Length(radius), distance_to_center: Length(distance_to_center) }
            .into()
    }

    pub fn chord(radius: f64, chord_distance: f64) -> ShapeSpec {
        ChordSpec { radius: Length(radius), chord_distance: Length(chord_distance) }.into()
    }

    pub fn inscribed_triangle(circumradius: f64) -> ShapeSpec {
        InscribedTriangleSpec { circumradius: Length(circumradius) }.into()
    }
}
