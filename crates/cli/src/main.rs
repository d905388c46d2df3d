use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use genmath::prelude::*;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;

#[derive(Parser)]
#[command(name = "genmath-cli")]
#[command(about = "Evaluate genmath measurements and print JSON")]
struct Cmd {
    /// Also write the JSON document here, with a provenance sidecar
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Pretty-print JSON on stdout
    #[arg(long, global = true)]
    pretty: bool,

    /// Boundary tolerance for approximate comparisons
    #[arg(long, global = true, default_value_t = genmath::cfg::APPROX_EPS)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug, Clone)]
enum Action {
    /// Euclidean distance between two points ("x,y")
    Distance {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point2<f64>,
    },
    /// Distances from point P to the segment A→B and to its supporting line
    Segment {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        a: Point2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        b: Point2<f64>,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        p: Point2<f64>,
    },
    /// Extremes and bounding box of an ellipse, or of an arc when --sweep is given
    Ellipse {
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Point2<f64>,
        #[arg(long, allow_hyphen_values = true)]
        rx: f64,
        #[arg(long, allow_hyphen_values = true)]
        ry: f64,
        /// Rotation in radians
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        rotation: f64,
        /// Arc start angle in radians (relative to the rotation)
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,
        /// Arc sweep in radians; negative sweeps run clockwise
        #[arg(long, allow_hyphen_values = true)]
        sweep: Option<f64>,
    },
    /// Bernstein-form Bezier value for scalar weights ("w0,w1,...")
    Bezier {
        #[arg(long)]
        t: f64,
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        weights: Vec<f64>,
        /// Defaults to one less than the number of weights
        #[arg(long)]
        degree: Option<usize>,
    },
    /// Angle predicates for ANGLE against the arc START + SWEEP
    Angle {
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, allow_hyphen_values = true)]
        start: f64,
        #[arg(long, allow_hyphen_values = true)]
        sweep: f64,
    },
    /// Print library version and code revision
    Report,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Distance { .. } => "distance",
            Action::Segment { .. } => "segment",
            Action::Ellipse { .. } => "ellipse",
            Action::Bezier { .. } => "bezier",
            Action::Angle { .. } => "angle",
            Action::Report => "report",
        }
    }
}

fn parse_point(s: &str) -> std::result::Result<Point2<f64>, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in {s:?}: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in {s:?}: {e}"))?;
    Ok(Point2::new(x, y))
}

fn xy(p: &Point2<f64>) -> [f64; 2] {
    [p.x, p.y]
}

#[derive(Serialize)]
struct BoundsOut {
    min: [f64; 2],
    max: [f64; 2],
    width: f64,
    height: f64,
}

impl From<Bounds2<f64>> for BoundsOut {
    fn from(b: Bounds2<f64>) -> Self {
        Self {
            min: xy(&b.min),
            max: xy(&b.max),
            width: b.width(),
            height: b.height(),
        }
    }
}

#[derive(Serialize)]
struct SegmentOut {
    length: f64,
    segment: f64,
    /// `null` when P is outside the segment's perpendicular slab.
    constrained: Option<f64>,
    perpendicular: f64,
    line: f64,
}

#[derive(Serialize)]
struct EllipseOut {
    extreme_angles: Vec<f64>,
    extreme_points: Vec<[f64; 2]>,
    bounds: BoundsOut,
    eccentricity: f64,
    focus_radius: f64,
    aspect_ratio: Option<f64>,
}

#[derive(Serialize)]
struct ArcOut {
    extreme_angles: Vec<f64>,
    vertical_extreme_angles: Vec<f64>,
    bounds: BoundsOut,
}

/// Run one subcommand; the document always carries the parsed `input`.
fn evaluate(action: &Action, cfg: &GeomCfg) -> Result<Value> {
    let doc = match action {
        Action::Distance { from, to } => {
            let d: f64 = distance(from, to)?;
            json!({
                "input": { "from": xy(from), "to": xy(to) },
                "distance": d
            })
        }
        Action::Segment { a, b, p } => {
            let seg = Segment2::new(*a, *b);
            let out = SegmentOut {
                length: seg.length()?,
                segment: seg.distance_to(p)?,
                constrained: seg.constrained_distance_to(p)?,
                perpendicular: seg.perpendicular_distance_to(p)?,
                line: distance_line_point(a, &seg.direction(), p)?,
            };
            json!({
                "input": { "a": xy(a), "b": xy(b), "p": xy(p) },
                "result": out
            })
        }
        Action::Ellipse {
            center,
            rx,
            ry,
            rotation,
            start,
            sweep,
        } => {
            let e = Ellipse::new(*center, *rx, *ry, *rotation)
                .with_context(|| format!("ellipse rx={rx} ry={ry}"))?;
            let input = json!({
                "center": xy(center), "rx": rx, "ry": ry,
                "rotation": rotation, "start": start, "sweep": sweep
            });
            let result = match sweep {
                Some(sweep) => {
                    let arc = EllipticalArc::new(e, *start, *sweep);
                    serde_json::to_value(ArcOut {
                        extreme_angles: arc.extreme_angles(),
                        vertical_extreme_angles: arc.vertical_extreme_angles(),
                        bounds: arc.bounds().into(),
                    })?
                }
                None => serde_json::to_value(EllipseOut {
                    extreme_angles: e.extreme_angles().to_vec(),
                    extreme_points: e.extreme_points().iter().map(xy).collect(),
                    bounds: e.bounds().into(),
                    eccentricity: e.eccentricity(),
                    focus_radius: e.focus_radius(),
                    aspect_ratio: e.aspect_ratio(),
                })?,
            };
            json!({ "input": input, "result": result })
        }
        Action::Bezier { t, weights, degree } => {
            if weights.is_empty() {
                bail!("bezier needs at least one weight");
            }
            let n = degree.unwrap_or(weights.len() - 1);
            let value = bezier(n, *t, weights)
                .with_context(|| format!("degree {n} with {} weights", weights.len()))?;
            json!({
                "input": { "t": t, "weights": weights, "degree": n },
                "coefficients": shared_table().row(n)?,
                "value": value
            })
        }
        Action::Angle {
            angle,
            start,
            sweep,
        } => {
            let end = start + sweep;
            let (lo, hi) = if end < *start {
                (end, *start)
            } else {
                (*start, end)
            };
            json!({
                "input": { "angle": angle, "start": start, "sweep": sweep },
                "within": angle_within(*angle, *start, *sweep),
                "between": angle_between(*angle, lo, hi),
                "approximately_between": approximately_between_eps(*angle, lo, hi, cfg.eps_approx()),
            })
        }
        Action::Report => json!({
            "input": {},
            "genmath_version": genmath::VERSION,
            "code_rev": provenance::current_git_rev(),
            "cached_binomial_rows": shared_table().rows()
        }),
    };
    Ok(doc)
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg {
        eps_approx: cmd.eps,
        ..GeomCfg::default()
    };
    tracing::info!(command = cmd.action.name(), eps = cfg.eps_approx, "evaluate");
    let doc = evaluate(&cmd.action, &cfg)?;

    if let Some(out) = &cmd.out {
        let payload = provenance::Payload {
            command: cmd.action.name(),
            params: doc["input"].clone(),
        };
        provenance::write_with_sidecar(out, &doc, payload)?;
    }
    let text = if cmd.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    println!("{text}");
    Ok(())
}
