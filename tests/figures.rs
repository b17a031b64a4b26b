//! End-to-end checks: parameters in, SVG document and measurements out.

use geofig::render::dom::{Svg, SvgNode, facet_xml};
use geofig::render::{self, Construction, RenderPrimitive};
use geofig::spec::{
    CircumcircleTriangle, CongruentTriangles, CoordinatePlaneSpec, IncircleTriangle,
    MedianTriangle, Parallelogram, QuadrilateralSpec, Rhombus, SimilarTriangles, Trapezoid,
    TriangleSpec,
};
use geofig::{
    Angle, DomainError, FigureError, Length, ParamMap, Pi, Property, RenderOptions, ShapeKind,
    ShapeSpec, build_figure, build_figure_from_params, build_figure_with,
};
use glam::DVec2;
use regex_lite::Regex;

fn params(pairs: &[(&str, f64)]) -> ParamMap {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn display(spec: &ShapeSpec, property: Property) -> String {
    build_figure(spec).unwrap().properties.display(property).unwrap()
}

// =============================================================================
// Worked scenarios
// =============================================================================

#[test]
fn right_triangle_six_eight() {
    let spec = ShapeSpec::right_triangle(6.0, 8.0);
    assert_eq!(display(&spec, Property::Hypotenuse), "10.00");
    assert_eq!(display(&spec, Property::Area), "24");
    assert_eq!(display(&spec, Property::Perimeter), "24.00");
}

#[test]
fn equilateral_side_ten() {
    let spec = ShapeSpec::equilateral_triangle(10.0);
    assert_eq!(display(&spec, Property::Height), "8.66");
    assert_eq!(display(&spec, Property::Area), "43.30");
    assert_eq!(display(&spec, Property::Perimeter), "30");
}

#[test]
fn square_side_nine() {
    let spec = ShapeSpec::square(9.0);
    assert_eq!(display(&spec, Property::Area), "81");
    assert_eq!(display(&spec, Property::Perimeter), "36");
    assert_eq!(display(&spec, Property::Diagonal), "12.73");
}

#[test]
fn circle_radius_five_with_classroom_pi() {
    let spec = ShapeSpec::circle(5.0, Pi::TwoDecimals);
    assert_eq!(display(&spec, Property::Area), "78.5");
    assert_eq!(display(&spec, Property::Circumference), "31.4");
    assert_eq!(display(&spec, Property::Diameter), "10");
}

#[test]
fn sector_quarter_circle() {
    let spec = ShapeSpec::sector(10.0, 90.0);
    assert_eq!(display(&spec, Property::Area), "78.54");
    assert_eq!(display(&spec, Property::ArcLength), "15.71");
}

#[test]
fn tangent_from_external_point() {
    assert_eq!(display(&ShapeSpec::tangent(6.0, 10.0), Property::TangentLength), "8.00");
    let err = build_figure(&ShapeSpec::tangent(6.0, 5.0)).unwrap_err();
    assert!(matches!(
        err,
        FigureError::Domain(DomainError::PointNotOutsideCircle { radius, distance })
            if radius == 6.0 && distance == 5.0
    ));
}

#[test]
fn tangent_length_across_radii_and_distances() {
    for (r, d) in [(3.0, 5.0), (6.0, 10.0), (5.0, 13.0), (2.5, 7.5), (8.0, 15.0), (4.0, 4.5)] {
        let figure = build_figure(&ShapeSpec::tangent(r, d)).unwrap();
        let len = figure.properties.get(Property::TangentLength).unwrap();
        let expected = f64::sqrt(d * d - r * r);
        assert!((len - expected).abs() < 1e-9, "r={r} d={d}: {len} vs {expected}");
    }
}

#[test]
fn tangent_point_on_the_circle_is_rejected() {
    let err = build_figure(&ShapeSpec::tangent(6.0, 6.0)).unwrap_err();
    assert!(matches!(
        err,
        FigureError::Domain(DomainError::PointNotOutsideCircle { radius, distance })
            if radius == 6.0 && distance == 6.0
    ));
}

#[test]
fn chord_length_and_rejection() {
    for (r, d) in [(10.0, 6.0), (13.0, 5.0), (9.5, 0.5)] {
        let figure = build_figure(&ShapeSpec::chord(r, d)).unwrap();
        let len = figure.properties.get(Property::ChordLength).unwrap();
        assert!((len - 2.0 * (r * r - d * d).sqrt()).abs() < 1e-9);
    }
    for d in [10.0, 11.0] {
        let err = build_figure(&ShapeSpec::chord(10.0, d)).unwrap_err();
        assert!(matches!(err, FigureError::Domain(DomainError::ChordNotInsideCircle { .. })));
    }
}

// =============================================================================
// Property summaries
// =============================================================================

#[test]
fn summary_right_triangle() {
    let figure = build_figure(&ShapeSpec::right_triangle(6.0, 8.0)).unwrap();
    insta::assert_snapshot!(figure.properties.summary(), @r"
    leg_a=6
    leg_b=8
    hypotenuse=10.00
    area=24
    perimeter=24.00
    angle_a=90
    angle_b=53.13
    angle_c=36.87
    ");
}

#[test]
fn summary_circle() {
    let figure = build_figure(&ShapeSpec::circle(5.0, Pi::TwoDecimals)).unwrap();
    insta::assert_snapshot!(figure.properties.summary(), @r"
    area=78.5
    radius=5
    diameter=10
    circumference=31.4
    ");
}

#[test]
fn summary_sector() {
    let figure = build_figure(&ShapeSpec::sector(10.0, 90.0)).unwrap();
    insta::assert_snapshot!(figure.properties.summary(), @r"
    area=78.54
    perimeter=35.71
    radius=10
    central_angle=90
    arc_length=15.71
    ");
}

#[test]
fn summary_chord() {
    let figure = build_figure(&ShapeSpec::chord(10.0, 6.0)).unwrap();
    insta::assert_snapshot!(figure.properties.summary(), @r"
    radius=10
    chord_distance=6
    half_chord=8.00
    chord_length=16.00
    ");
}

#[test]
fn summary_rhombus() {
    let spec: ShapeSpec = QuadrilateralSpec::from(Rhombus {
        diagonal_ac: Length(16.0),
        diagonal_bd: Length(12.0),
    })
    .into();
    let figure = build_figure(&spec).unwrap();
    insta::assert_snapshot!(figure.properties.summary(), @r"
    side=10.00
    diagonal_ac=16
    diagonal_bd=12
    area=96
    perimeter=40.00
    ");
}

// =============================================================================
// Determinism and scale
// =============================================================================

#[test]
fn building_twice_is_byte_identical() {
    for spec in [
        ShapeSpec::right_triangle(5.0, 12.0),
        ShapeSpec::sector(9.0, 270.0),
        ShapeSpec::tangent(5.0, 13.0),
        ShapeSpec::inscribed_triangle(10.0),
    ] {
        assert_eq!(build_figure(&spec).unwrap(), build_figure(&spec).unwrap());
    }
}

fn construct(spec: &ShapeSpec, px: f64) -> Construction {
    let options = RenderOptions::default().with_scale(px).unwrap();
    render::construct_figure(spec, &options).unwrap()
}

#[test]
fn vertices_scale_linearly_and_properties_do_not_move() {
    let center = geofig::Canvas::default().center();
    for spec in [
        ShapeSpec::right_triangle(6.0, 8.0),
        ShapeSpec::equilateral_triangle(9.0),
        ShapeSpec::rectangle(14.0, 9.0),
        ShapeSpec::chord(10.0, 6.0),
        ShapeSpec::tangent(6.0, 11.0),
        ShapeSpec::inscribed_triangle(9.0),
    ] {
        let small = construct(&spec, 8.0);
        let large = construct(&spec, 12.0);
        assert_eq!(small.vertices.len(), large.vertices.len());
        for (s, l) in small.vertices.iter().zip(&large.vertices) {
            let expected = center + (s.pos - center) * 1.5;
            assert!(expected.distance(l.pos) < 1e-9, "{} vertex {:?}", spec.kind(), s.label);
        }

        let at = |px| {
            build_figure_with(&spec, &RenderOptions::default().with_scale(px).unwrap())
                .unwrap()
                .properties
        };
        assert_eq!(at(8.0), at(15.0));
    }
}

#[test]
fn overflowing_geometry_is_an_error_not_zeros() {
    let huge = RenderOptions::default().with_scale(1e308).unwrap();
    let err = build_figure_with(&ShapeSpec::square(9.0), &huge).unwrap_err();
    assert!(matches!(err, FigureError::Domain(DomainError::NonFiniteGeometry { .. })));

    let wide = quad(Parallelogram { base: Length(2e307), height: Length(5.0), angle: Angle(60.0) });
    let err = build_figure(&wide).unwrap_err();
    assert!(matches!(err, FigureError::Domain(DomainError::NonFiniteGeometry { .. })));
}

#[test]
fn invalid_scale_is_rejected() {
    for px in [0.0, -10.0, f64::INFINITY] {
        assert!(matches!(
            RenderOptions::default().with_scale(px),
            Err(FigureError::InvalidScale { .. })
        ));
    }
}

// =============================================================================
// Loose input
// =============================================================================

#[test]
fn unsupported_variant_is_an_error_not_a_fallback() {
    let err = build_figure_from_params("triangle/scalene", &params(&[("side", 3.0)])).unwrap_err();
    assert!(matches!(err, FigureError::UnsupportedVariant { .. }));
    let err = build_figure_from_params("pentagon", &ParamMap::new()).unwrap_err();
    assert!(matches!(err, FigureError::UnsupportedVariant { .. }));
}

#[test]
fn params_map_builds_the_same_figure() {
    let loose = build_figure_from_params(
        "circle",
        &params(&[("radius", 5.0), ("pi", 3.14)]),
    )
    .unwrap();
    let typed = build_figure(&ShapeSpec::circle(5.0, Pi::TwoDecimals)).unwrap();
    assert_eq!(loose, typed);
}

#[test]
fn missing_parameter_names_the_key() {
    let err = build_figure_from_params("sector", &params(&[("radius", 5.0)])).unwrap_err();
    assert_eq!(err.to_string(), "missing parameter `central_angle` for sector");
}

#[test]
fn every_kind_has_a_loose_form() {
    for kind in ShapeKind::ALL {
        let name = kind.to_string();
        assert_eq!(name.parse::<ShapeKind>().unwrap(), kind);
    }
}

#[test]
fn json_spec_in_json_figure_out() {
    let spec: ShapeSpec = serde_json::from_str(
        r#"{"family": "quadrilateral", "variant": "rectangle",
            "width": 12, "height": 5, "show_diagonals": true}"#,
    )
    .unwrap();
    let figure = build_figure(&spec).unwrap();
    let json = serde_json::to_value(&figure).unwrap();
    assert_eq!(json["properties"]["diagonal"]["display"], "13.00");
    assert_eq!(json["properties"]["area"]["value"], 60.0);
    let document = json["document"].as_str().unwrap();
    assert!(document.trim_end().ends_with("</svg>"));
    assert!(document.contains("dimension"));
}

// =============================================================================
// Canvas bounds at the usual parameter ranges
// =============================================================================

fn triangle(t: impl Into<TriangleSpec>) -> ShapeSpec {
    ShapeSpec::Triangle(t.into())
}

fn quad(q: impl Into<QuadrilateralSpec>) -> ShapeSpec {
    ShapeSpec::Quadrilateral(q.into())
}

fn usual_specs() -> Vec<ShapeSpec> {
    let mut specs = Vec::new();
    let l = |v: i32| Length(f64::from(v));
    for a in 3..=12 {
        for b in 3..=12 {
            specs.push(ShapeSpec::right_triangle(f64::from(a), f64::from(b)));
            specs.push(triangle(CongruentTriangles { leg_a: l(a), leg_b: l(b) }));
            specs.push(triangle(CircumcircleTriangle { leg_a: l(a), leg_b: l(b) }));
            specs.push(triangle(IncircleTriangle { leg_a: l(a), leg_b: l(b) }));
        }
    }
    for a in 3..=8 {
        for b in 3..=8 {
            for ratio in [1.5, 2.0, 2.5] {
                specs.push(triangle(SimilarTriangles { leg_a: l(a), leg_b: l(b), ratio }));
            }
        }
    }
    for side in 4..=12 {
        specs.push(ShapeSpec::equilateral_triangle(f64::from(side)));
        specs.push(ShapeSpec::square(f64::from(side)));
        specs.push(ShapeSpec::circle(f64::from(side), Pi::Full));
    }
    for base in 6..=16 {
        for height in 4..=12 {
            specs.push(ShapeSpec::isosceles_triangle(f64::from(base), f64::from(height)));
            specs.push(triangle(MedianTriangle { base: l(base), height: l(height) }));
        }
    }
    for w in 12..=16 {
        for h in 8..=12 {
            specs.push(ShapeSpec::rectangle(f64::from(w), f64::from(h)));
        }
    }
    for base in 8..=12 {
        for height in 6..=10 {
            for angle in (60..=120).step_by(10) {
                specs.push(quad(Parallelogram {
                    base: l(base),
                    height: l(height),
                    angle: Angle(f64::from(angle)),
                }));
            }
        }
    }
    for p in 12..=16 {
        for q in 10..=14 {
            specs.push(quad(Rhombus { diagonal_ac: l(p), diagonal_bd: l(q) }));
        }
    }
    for a in 12..=16 {
        for b in 18..=24 {
            for h in 8..=12 {
                specs.push(quad(Trapezoid { upper_base: l(a), lower_base: l(b), height: l(h) }));
            }
        }
    }
    for r in 8..=12 {
        for angle in (60..=120).step_by(15) {
            specs.push(ShapeSpec::sector(f64::from(r), f64::from(angle)));
        }
        for d in 4..=7 {
            specs.push(ShapeSpec::chord(f64::from(r), f64::from(d)));
        }
        specs.push(ShapeSpec::inscribed_triangle(f64::from(r)));
    }
    for r in 5..=8 {
        for d in 10..=15 {
            specs.push(ShapeSpec::tangent(f64::from(r), f64::from(d)));
        }
    }
    specs.push(ShapeSpec::CoordinatePlane(CoordinatePlaneSpec::default()));
    specs
}

#[test]
fn coordinate_plane_span_is_limited() {
    let plane = CoordinatePlaneSpec { x_min: -200_000, x_max: 200_000, y_min: -4, y_max: 4 };
    let err = build_figure(&ShapeSpec::CoordinatePlane(plane)).unwrap_err();
    assert!(matches!(
        err,
        FigureError::Domain(DomainError::GridTooDense { axis: 'x', max_span: 50, .. })
    ));
}

#[test]
fn arc_bulge_counts_toward_the_bounds() {
    // Both ends of this 140 px arc lie inside the margin. Its top does not.
    let options = RenderOptions::default();
    let sector = ShapeSpec::sector(14.0, 120.0);
    let construction = render::construct_figure(&sector, &options).unwrap();
    let top = construction
        .primitives
        .iter()
        .flat_map(RenderPrimitive::extent)
        .map(|p| p.y)
        .fold(f64::INFINITY, f64::min);
    assert!((top - 10.0).abs() < 1e-9);
    assert!(construction.points_outside(&options.canvas.drawable()) > 0);
}

#[test]
fn usual_parameters_stay_inside_the_margin() {
    let options = RenderOptions::default();
    let area = options.canvas.drawable();
    for spec in usual_specs() {
        let construction = render::construct_figure(&spec, &options).unwrap();
        assert_eq!(construction.points_outside(&area), 0, "{spec:?} leaves the drawable area");
    }
}

// =============================================================================
// Document structure
// =============================================================================

fn body(spec: &ShapeSpec) -> Vec<SvgNode> {
    let options = RenderOptions::default();
    let construction = render::construct_figure(spec, &options).unwrap();
    let svg = render::svg::document(&options.canvas, &options.style, &construction);
    svg.children.into_iter().skip(2).collect()
}

fn describe(node: &SvgNode) -> String {
    fn a(v: &Option<String>) -> &str {
        v.as_deref().unwrap_or("-")
    }
    let attrs = match node {
        SvgNode::Polygon(p) => a(&p.points).to_string(),
        SvgNode::Circle(c) => format!("{},{} r={}", a(&c.cx), a(&c.cy), a(&c.r)),
        SvgNode::Line(l) => format!("{},{} {},{}", a(&l.x1), a(&l.y1), a(&l.x2), a(&l.y2)),
        SvgNode::Path(p) => a(&p.d).to_string(),
        SvgNode::Text(t) => format!("{},{} {}", a(&t.x), a(&t.y), t.content),
        SvgNode::Defs(_) | SvgNode::Style(_) | SvgNode::Rect(_) => String::new(),
    };
    format!("{} {} {attrs}", node.tag(), node.class().unwrap_or("-"))
}

#[test]
fn every_labelled_vertex_has_marker_and_offset_label() {
    let spec = ShapeSpec::tangent(6.0, 10.0);
    let construction = render::construct_figure(&spec, &RenderOptions::default()).unwrap();
    let nodes = body(&spec);
    let num = |v: &Option<String>| v.as_deref().unwrap().parse::<f64>().unwrap();

    let mut labels = Vec::new();
    for pair in nodes.windows(2) {
        let [SvgNode::Circle(marker), SvgNode::Text(label)] = pair else { continue };
        if marker.class.as_deref() != Some("point") {
            continue;
        }
        assert_eq!(marker.r.as_deref(), Some("3"));
        assert_eq!(label.class.as_deref(), Some("label"));
        assert!((num(&label.x) - num(&marker.cx) - 8.0).abs() < 1e-3);
        assert!((num(&label.y) - num(&marker.cy) + 8.0).abs() < 1e-3);
        labels.push(label.content.clone());
    }
    assert_eq!(labels, ["O", "P", "T₁", "T₂"]);
    assert_eq!(construction.vertices.len(), labels.len());
}

#[test]
fn tangents_are_solid_and_radii_dashed() {
    let classes: Vec<_> = body(&ShapeSpec::tangent(6.0, 10.0))
        .iter()
        .filter(|n| n.tag() == "line")
        .filter_map(|n| n.class().map(str::to_string))
        .collect();
    assert_eq!(classes, ["shape-fill", "shape-fill", "dimension", "dimension", "dimension"]);
}

#[test]
fn sector_arc_sets_large_arc_flag() {
    let arc = Regex::new(r"^M [-\d.,]+ A 100 100 0 ([01]) 0 [-\d.,]+").unwrap();
    let flag = |angle| {
        body(&ShapeSpec::sector(10.0, angle)).iter().find_map(|n| match n {
            SvgNode::Path(p) => arc.captures(p.d.as_deref()?).map(|c| c[1].to_string()),
            _ => None,
        })
    };
    assert_eq!(flag(90.0).as_deref(), Some("0"));
    assert_eq!(flag(200.0).as_deref(), Some("1"));
}

#[test]
fn full_sector_draws_two_half_arcs() {
    let nodes = body(&ShapeSpec::sector(10.0, 360.0));
    let outline = nodes.iter().find_map(|n| match n {
        SvgNode::Path(p) if p.class.as_deref() == Some("shape-fill") => p.d.as_deref(),
        _ => None,
    });
    assert_eq!(outline, Some("M 300,150 A 100 100 0 0 0 100,150 A 100 100 0 0 0 300,150"));
}

#[test]
fn right_triangle_document() {
    let nodes = body(&ShapeSpec::right_triangle(6.0, 8.0));
    let lines: Vec<String> = nodes.iter().map(describe).collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    polygon shape-fill 170,190 230,190 170,110
    circle point 170,190 r=3
    text label 178,182 A
    circle point 230,190 r=3
    text label 238,182 B
    circle point 170,110 r=3
    text label 178,102 C
    path shape-fill M 180,190 L 180,180 L 170,180
    ");
}

#[test]
fn serialized_document_parses_back_to_the_same_elements() {
    let spec = ShapeSpec::tangent(5.0, 13.0);
    let figure = build_figure(&spec).unwrap();
    let parsed: Svg = facet_xml::from_str(&figure.document).unwrap();

    let options = RenderOptions::default();
    let construction = render::construct_figure(&spec, &options).unwrap();
    let built = render::svg::document(&options.canvas, &options.style, &construction);

    let outline = |svg: &Svg| -> Vec<(String, Option<String>)> {
        let nodes = svg.children.iter();
        nodes.map(|n| (n.tag().to_string(), n.class().map(str::to_string))).collect()
    };
    assert_eq!(outline(&parsed), outline(&built));
    assert_eq!(parsed.width, built.width);
    assert_eq!(parsed.height, built.height);
}

#[test]
fn grid_ignores_the_pixel_scale() {
    let plane = ShapeSpec::CoordinatePlane(CoordinatePlaneSpec::default());
    let a = construct(&plane, 8.0);
    let b = construct(&plane, 14.0);
    assert_eq!(a, b);
    let arrowheads = a
        .primitives
        .iter()
        .filter(|p| matches!(p, RenderPrimitive::Polygon { .. }))
        .count();
    assert_eq!(arrowheads, 2);
    let origin: Option<DVec2> = a.primitives.iter().find_map(|p| match p {
        RenderPrimitive::Text { at, text, .. } if text == "O" => Some(*at),
        _ => None,
    });
    assert_eq!(origin, Some(DVec2::new(185.0, 165.0)));
}
