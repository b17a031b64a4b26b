//! Typed SVG elements, serialized with `facet-xml`.
//!
//! Only the elements a figure uses. Every shape element carries a `class`
//! attribute so the style sheet in `<defs>` decides how it looks. Numeric
//! attributes are pre-formatted strings, which keeps the document byte-stable.

use facet::Facet;
use facet_xml as xml;

pub use facet_xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element
#[derive(Facet, Debug, Clone, Default, PartialEq)]
#[facet(rename = "svg")]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any element a figure emits
#[derive(Facet, Debug, Clone, PartialEq)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "defs")]
    Defs(Defs),
    #[facet(rename = "style")]
    Style(Style),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "circle")]
    Circle(Circle),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "polygon")]
    Polygon(Polygon),
    #[facet(rename = "text")]
    Text(Text),
}

impl SvgNode {
    /// Element name, as written in the document.
    pub fn tag(&self) -> &'static str {
        match self {
            SvgNode::Defs(_) => "defs",
            SvgNode::Style(_) => "style",
            SvgNode::Rect(_) => "rect",
            SvgNode::Circle(_) => "circle",
            SvgNode::Line(_) => "line",
            SvgNode::Path(_) => "path",
            SvgNode::Polygon(_) => "polygon",
            SvgNode::Text(_) => "text",
        }
    }

    /// The `class` attribute, for elements that carry one.
    pub fn class(&self) -> Option<&str> {
        match self {
            SvgNode::Circle(e) => e.class.as_deref(),
            SvgNode::Line(e) => e.class.as_deref(),
            SvgNode::Path(e) => e.class.as_deref(),
            SvgNode::Polygon(e) => e.class.as_deref(),
            SvgNode::Text(e) => e.class.as_deref(),
            SvgNode::Defs(_) | SvgNode::Style(_) | SvgNode::Rect(_) => None,
        }
    }
}

/// `<defs>`
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Defs {
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// `<style>` holding the class rules
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Style {
    #[facet(xml::attribute, rename = "type")]
    pub type_: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

/// `<rect>`, used for the background
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
}

#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Circle {
    #[facet(xml::attribute)]
    pub cx: Option<String>,
    #[facet(xml::attribute)]
    pub cy: Option<String>,
    #[facet(xml::attribute)]
    pub r: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
}

#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<String>,
    #[facet(xml::attribute)]
    pub y1: Option<String>,
    #[facet(xml::attribute)]
    pub x2: Option<String>,
    #[facet(xml::attribute)]
    pub y2: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
}

#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
}

#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
}

#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute)]
    pub class: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}
