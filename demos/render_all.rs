//! Render one figure of every kind.
//!
//! `cargo run --example render_all --features tracing -- out/` writes one SVG per
//! kind into `out/`; without a directory it prints each summary.

use std::path::PathBuf;

use geofig::{ParamMap, ShapeKind, build_figure_from_params};
use miette::IntoDiagnostic;

fn sample(kind: ShapeKind) -> ParamMap {
    let pairs: &[(&str, f64)] = match kind {
        ShapeKind::RightTriangle
        | ShapeKind::CongruentTriangles
        | ShapeKind::CircumcircleTriangle
        | ShapeKind::IncircleTriangle => &[("leg_a", 6.0), ("leg_b", 8.0)],
        ShapeKind::SimilarTriangles => &[("leg_a", 3.0), ("leg_b", 4.0), ("ratio", 2.0)],
        ShapeKind::EquilateralTriangle => &[("side", 10.0)],
        ShapeKind::IsoscelesTriangle | ShapeKind::MedianTriangle => {
            &[("base", 12.0), ("height", 8.0)]
        }
        ShapeKind::Rectangle => &[("width", 14.0), ("height", 9.0), ("show_diagonals", 1.0)],
        ShapeKind::Square => &[("side", 9.0)],
        ShapeKind::Parallelogram => &[("base", 10.0), ("height", 6.0), ("angle", 60.0)],
        ShapeKind::Rhombus => &[("diagonal_ac", 16.0), ("diagonal_bd", 12.0)],
        ShapeKind::Trapezoid => &[("upper_base", 12.0), ("lower_base", 20.0), ("height", 10.0)],
        ShapeKind::Circle => &[("radius", 5.0), ("pi", 3.14)],
        ShapeKind::Sector => &[("radius", 10.0), ("central_angle", 90.0)],
        ShapeKind::Tangent => &[("radius", 6.0), ("distance_to_center", 10.0)],
        ShapeKind::Chord => &[("radius", 10.0), ("chord_distance", 6.0)],
        ShapeKind::InscribedTriangle => &[("circumradius", 8.0)],
        ShapeKind::CoordinatePlane => {
            &[("x_min", -5.0), ("x_max", 5.0), ("y_min", -4.0), ("y_max", 4.0)]
        }
    };
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let out_dir = std::env::args().nth(1).map(PathBuf::from);
    if let Some(dir) = &out_dir {
        std::fs::create_dir_all(dir).into_diagnostic()?;
    }

    for kind in ShapeKind::ALL {
        let name = kind.to_string();
        let figure = build_figure_from_params(&name, &sample(kind))?;
        match &out_dir {
            Some(dir) => {
                let path = dir.join(format!("{}.svg", name.replace('/', "_")));
                std::fs::write(&path, &figure.document).into_diagnostic()?;
                println!("{}", path.display());
            }
            None => println!("[{name}]\n{}", figure.properties.summary()),
        }
    }
    Ok(())
}
