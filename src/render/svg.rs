//! SVG generation

use glam::DVec2;

use super::canvas::Canvas;
use super::dom::{self, Defs, Rect, Style, Svg, SvgNode, facet_xml};
use super::geometry::{PathCommand, PathData};
use super::style::StyleSheet;
use super::types::{Class, Construction, RenderPrimitive, Vertex};
use crate::errors::FigureError;

/// Render a construction into a complete SVG document.
pub fn render(
    canvas: &Canvas,
    style: &StyleSheet,
    construction: &Construction,
) -> Result<String, FigureError> {
    let svg = document(canvas, style, construction);
    facet_xml::to_string(&svg).map_err(|e| FigureError::Markup { message: e.to_string() })
}

/// Build the document tree.
///
/// Class definitions and background first, then one node per primitive in
/// construction order. A labelled vertex becomes a marker plus a label.
pub fn document(canvas: &Canvas, style: &StyleSheet, construction: &Construction) -> Svg {
    let (width, height) = (fmt_num(canvas.width), fmt_num(canvas.height));

    let mut children = vec![
        SvgNode::Defs(Defs { children: vec![SvgNode::Style(class_rules(style))] }),
        SvgNode::Rect(Rect {
            width: Some(width.clone()),
            height: Some(height.clone()),
            fill: Some(style.background.clone()),
        }),
    ];
    for primitive in &construction.primitives {
        push_primitive(&mut children, style, primitive);
    }

    Svg {
        xmlns: Some(dom::SVG_NS.to_string()),
        width: Some(width),
        height: Some(height),
        children,
    }
}

fn class_rules(style: &StyleSheet) -> Style {
    let mut css = String::from("\n");
    for rule in &style.rules {
        css.push_str(&format!(".{} {{ {} }}\n", rule.class, rule.declarations));
    }
    Style {
        type_: Some("text/css".to_string()),
        content: css,
    }
}

fn push_primitive(nodes: &mut Vec<SvgNode>, style: &StyleSheet, primitive: &RenderPrimitive) {
    match primitive {
        RenderPrimitive::Polygon { points, class } => {
            let points: Vec<String> = points.iter().map(|p| fmt_point(*p)).collect();
            nodes.push(SvgNode::Polygon(dom::Polygon {
                points: Some(points.join(" ")),
                class: class_attr(*class),
            }));
        }
        RenderPrimitive::Circle { center, radius, class } => {
            nodes.push(circle(*center, *radius, *class));
        }
        RenderPrimitive::Line { from, to, class } => {
            nodes.push(SvgNode::Line(dom::Line {
                x1: Some(fmt_num(from.x)),
                y1: Some(fmt_num(from.y)),
                x2: Some(fmt_num(to.x)),
                y2: Some(fmt_num(to.y)),
                class: class_attr(*class),
            }));
        }
        RenderPrimitive::Path { data, class } => {
            nodes.push(SvgNode::Path(dom::Path {
                d: Some(path_d(data)),
                class: class_attr(*class),
            }));
        }
        RenderPrimitive::Text { at, text, class } => nodes.push(text_node(*at, text, *class)),
        RenderPrimitive::Marker(vertex) => marker(nodes, style, vertex),
    }
}

fn class_attr(class: Class) -> Option<String> {
    Some(class.name().to_string())
}

fn circle(center: DVec2, radius: f64, class: Class) -> SvgNode {
    SvgNode::Circle(dom::Circle {
        cx: Some(fmt_num(center.x)),
        cy: Some(fmt_num(center.y)),
        r: Some(fmt_num(radius)),
        class: class_attr(class),
    })
}

fn text_node(at: DVec2, text: &str, class: Class) -> SvgNode {
    SvgNode::Text(dom::Text {
        x: Some(fmt_num(at.x)),
        y: Some(fmt_num(at.y)),
        class: class_attr(class),
        content: text.to_string(),
    })
}

fn marker(nodes: &mut Vec<SvgNode>, style: &StyleSheet, vertex: &Vertex) {
    nodes.push(circle(vertex.pos, style.point_radius, Class::Point));
    if let Some(label) = vertex.label() {
        let offset = DVec2::from_array(style.label_offset);
        nodes.push(text_node(vertex.pos + offset, label, Class::Label));
    }
}

/// Path data in absolute commands: `M x,y L x,y A r r 0 large sweep x,y Z`.
pub fn path_d(data: &PathData) -> String {
    let parts: Vec<String> = data
        .commands
        .iter()
        .map(|c| match *c {
            PathCommand::MoveTo(p) => format!("M {}", fmt_point(p)),
            PathCommand::LineTo(p) => format!("L {}", fmt_point(p)),
            PathCommand::Arc { radius, large_arc, sweep, to } => {
                let r = fmt_num(radius);
                format!("A {r} {r} 0 {} {} {}", large_arc as u8, sweep as u8, fmt_point(to))
            }
            PathCommand::Close => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

fn fmt_point(p: DVec2) -> String {
    format!("{},{}", fmt_num(p.x), fmt_num(p.y))
}

/// Format a coordinate with 6 significant figures, trailing zeros trimmed.
pub(crate) fn fmt_num(value: f64) -> String {
    fmt_num_precision(value, 6)
}

fn fmt_num_precision(value: f64, sig_figs: i32) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() < 1e-9 {
        return "0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;

    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let s = format!("{:.prec$}", rounded, prec = decimals);
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    fn body(c: &Construction) -> Vec<SvgNode> {
        document(&Canvas::default(), &StyleSheet::default(), c).children.split_off(2)
    }

    #[test]
    fn fmt_num_trims() {
        assert_eq!(fmt_num(200.0), "200");
        assert_eq!(fmt_num(143.30127018922195), "143.301");
        assert_eq!(fmt_num(-4.5), "-4.5");
        assert_eq!(fmt_num(1e-17), "0");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn fmt_num_does_not_hide_non_finite_values() {
        assert_eq!(fmt_num(f64::NAN), "NaN");
        assert_eq!(fmt_num(f64::INFINITY), "inf");
    }

    #[test]
    fn header_lists_classes_and_background() {
        let svg = document(&Canvas::default(), &StyleSheet::default(), &Construction::new());
        assert_eq!(svg.width.as_deref(), Some("400"));
        assert_eq!(svg.height.as_deref(), Some("300"));
        assert_eq!(svg.xmlns.as_deref(), Some(dom::SVG_NS));

        let SvgNode::Defs(defs) = &svg.children[0] else { panic!("defs first") };
        let SvgNode::Style(css) = &defs.children[0] else { panic!("style inside defs") };
        let shape = ".shape-fill { fill: none; stroke: #2563eb; stroke-width: 2; }\n";
        assert!(css.content.contains(shape));
        assert!(css.content.contains(".grid { stroke: #e5e7eb; stroke-width: 0.5; }\n"));

        let SvgNode::Rect(background) = &svg.children[1] else { panic!("background second") };
        assert_eq!(background.fill.as_deref(), Some("white"));
        assert_eq!(svg.children.len(), 2);
    }

    #[test]
    fn labelled_vertex_gets_marker_and_offset_label() {
        let mut c = Construction::new();
        c.vertex("A", dvec2(170.0, 190.0)).vertex("", dvec2(10.0, 10.0));
        let nodes = body(&c);
        assert_eq!(nodes.len(), 3);

        let SvgNode::Circle(a) = &nodes[0] else { panic!("marker") };
        assert_eq!((a.cx.as_deref(), a.cy.as_deref()), (Some("170"), Some("190")));
        assert_eq!(a.r.as_deref(), Some("3"));
        assert_eq!(a.class.as_deref(), Some("point"));

        let SvgNode::Text(label) = &nodes[1] else { panic!("label") };
        assert_eq!((label.x.as_deref(), label.y.as_deref()), (Some("178"), Some("182")));
        assert_eq!(label.content, "A");
        assert_eq!(label.class.as_deref(), Some("label"));

        assert!(matches!(nodes[2], SvgNode::Circle(_)));
    }

    #[test]
    fn body_follows_construction_order() {
        let mut c = Construction::new();
        c.line(dvec2(0.0, 0.0), dvec2(1.0, 1.0), Class::Dimension)
            .polygon(&[dvec2(0.0, 0.0), dvec2(5.0, 0.0), dvec2(0.0, 5.0)], Class::Shape);
        let nodes = body(&c);
        let tags: Vec<_> = nodes.iter().map(|n| (n.tag(), n.class())).collect();
        assert_eq!(tags, [("line", Some("dimension")), ("polygon", Some("shape-fill"))]);
        let SvgNode::Polygon(p) = &nodes[1] else { panic!("polygon") };
        assert_eq!(p.points.as_deref(), Some("0,0 5,0 0,5"));
    }

    #[test]
    fn arc_path_data() {
        let data = PathData::new()
            .m(dvec2(300.0, 150.0))
            .a(100.0, true, false, dvec2(200.0, 250.0))
            .z();
        assert_eq!(path_d(&data), "M 300,150 A 100 100 0 1 0 200,250 Z");
    }

    #[test]
    fn serialized_document_is_one_svg_element() {
        let mut c = Construction::new();
        c.vertex("T₁", dvec2(50.0, 60.0));
        let doc = render(&Canvas::default(), &StyleSheet::default(), &c).unwrap();
        assert!(doc.contains("<svg"));
        assert!(doc.trim_end().ends_with("</svg>"));
        assert!(doc.contains("T₁"));
    }
}
