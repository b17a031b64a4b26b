//! Core types produced by shape construction

use glam::DVec2;

use super::geometry::{PathCommand, PathData};

/// Style class of a drawn element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    /// Shape outline
    Shape,
    /// Filled shape
    ShapeLight,
    Point,
    Label,
    /// Dashed auxiliary line
    Dimension,
    AngleArc,
    Grid,
}

impl Class {
    pub fn name(self) -> &'static str {
        match self {
            Class::Shape => "shape-fill",
            Class::ShapeLight => "shape-fill-light",
            Class::Point => "point",
            Class::Label => "label",
            Class::Dimension => "dimension",
            Class::AngleArc => "angle-arc",
            Class::Grid => "grid",
        }
    }
}

/// A point of the figure, optionally labelled.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub pos: DVec2,
    pub label: Option<String>,
}

impl Vertex {
    pub fn labelled(label: &str, pos: DVec2) -> Self {
        let label = (!label.is_empty()).then(|| label.to_string());
        Vertex { pos, label }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// One drawable element, emitted in construction order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimitive {
    Polygon { points: Vec<DVec2>, class: Class },
    Circle { center: DVec2, radius: f64, class: Class },
    Line { from: DVec2, to: DVec2, class: Class },
    Path { data: PathData, class: Class },
    Text { at: DVec2, text: String, class: Class },
    /// Point marker, plus its label when the vertex has one.
    Marker(Vertex),
}

impl RenderPrimitive {
    /// Points that must stay inside the drawable area. Free text is exempt.
    pub fn extent(&self) -> Vec<DVec2> {
        match self {
            RenderPrimitive::Polygon { points, .. } => points.clone(),
            RenderPrimitive::Circle { center, radius, .. } => vec![
                *center + DVec2::X * *radius,
                *center - DVec2::X * *radius,
                *center + DVec2::Y * *radius,
                *center - DVec2::Y * *radius,
            ],
            RenderPrimitive::Line { from, to, .. } => vec![*from, *to],
            RenderPrimitive::Path { data, .. } => data.extent(),
            RenderPrimitive::Text { .. } => Vec::new(),
            RenderPrimitive::Marker(v) => vec![v.pos],
        }
    }

    /// Whether every coordinate and radius is a finite number.
    pub fn is_finite(&self) -> bool {
        let sizes = match self {
            RenderPrimitive::Circle { radius, .. } => radius.is_finite(),
            RenderPrimitive::Path { data, .. } => data.commands.iter().all(|c| match c {
                PathCommand::Arc { radius, .. } => radius.is_finite(),
                _ => true,
            }),
            RenderPrimitive::Text { at, .. } => at.is_finite(),
            _ => true,
        };
        sizes && self.extent().iter().all(|p| p.is_finite())
    }
}

/// Output of a shape constructor: labelled vertices plus everything to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Construction {
    pub vertices: Vec<Vertex>,
    pub primitives: Vec<RenderPrimitive>,
}

impl Construction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and its marker.
    pub fn vertex(&mut self, label: &str, pos: DVec2) -> &mut Self {
        let v = Vertex::labelled(label, pos);
        self.vertices.push(v.clone());
        self.primitives.push(RenderPrimitive::Marker(v));
        self
    }

    pub fn polygon(&mut self, points: &[DVec2], class: Class) -> &mut Self {
        self.primitives.push(RenderPrimitive::Polygon { points: points.to_vec(), class });
        self
    }

    pub fn circle(&mut self, center: DVec2, radius: f64, class: Class) -> &mut Self {
        self.primitives.push(RenderPrimitive::Circle { center, radius, class });
        self
    }

    pub fn line(&mut self, from: DVec2, to: DVec2, class: Class) -> &mut Self {
        self.primitives.push(RenderPrimitive::Line { from, to, class });
        self
    }

    pub fn path(&mut self, data: PathData, class: Class) -> &mut Self {
        self.primitives.push(RenderPrimitive::Path { data, class });
        self
    }

    pub fn text(&mut self, at: DVec2, text: &str) -> &mut Self {
        self.primitives.push(RenderPrimitive::Text {
            at,
            text: text.to_string(),
            class: Class::Label,
        });
        self
    }

    pub fn vertex_at(&self, label: &str) -> Option<DVec2> {
        self.vertices.iter().find(|v| v.label() == Some(label)).map(|v| v.pos)
    }

    pub fn is_finite(&self) -> bool {
        self.primitives.iter().all(RenderPrimitive::is_finite)
    }

    /// Number of constrained points falling outside `area`.
    pub fn points_outside(&self, area: &super::canvas::Bounds) -> usize {
        self.primitives
            .iter()
            .flat_map(RenderPrimitive::extent)
            .filter(|p| !area.contains(*p))
            .count()
    }
}
