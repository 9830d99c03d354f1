use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use collinear::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;

use provenance::{create_parent, Payload};

#[derive(Parser)]
#[command(name = "collinear-cli")]
#[command(about = "Find maximal runs of four or more collinear points")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algo {
    /// Exhaustive O(N^4) scan; small inputs only
    Brute,
    /// Sort-based O(N^2 log N) scan
    Fast,
}

#[derive(Subcommand)]
enum Action {
    /// Detect segments in a point file and print them, one per line
    Detect {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = Algo::Fast)]
        algo: Algo,
        /// Also write a JSON report (plus provenance sidecar)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write a random point file with planted collinear runs
    Generate {
        #[arg(long, default_value_t = 3)]
        lines: usize,
        #[arg(long, default_value_t = 5)]
        per_line: usize,
        #[arg(long, default_value_t = 10)]
        noise: usize,
        #[arg(long, default_value_t = 64)]
        extent: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Detect { input, algo, out } => {
            let segments = detect(&input, algo, out.as_deref())?;
            for s in &segments {
                println!("{s}");
            }
            Ok(())
        }
        Action::Generate {
            lines,
            per_line,
            noise,
            extent,
            seed,
            index,
            out,
        } => {
            let cfg = PointSetCfg {
                lines,
                run_length: RunLength::Fixed(per_line),
                noise,
                extent,
                ..PointSetCfg::default()
            };
            generate(cfg, ReplayToken { seed, index }, &out)
        }
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct DetectReport {
    algo: &'static str,
    points: usize,
    /// `[x1, y1, x2, y2]` per segment.
    segments: Vec<[i32; 4]>,
}

fn run_detector(points: &[Point], algo: Algo) -> Result<Box<dyn CollinearDetector>> {
    let det: Box<dyn CollinearDetector> = match algo {
        Algo::Brute => Box::new(BruteCollinearPoints::new(points)?),
        Algo::Fast => Box::new(FastCollinearPoints::new(points)?),
    };
    Ok(det)
}

fn detect(input: &Path, algo: Algo, out: Option<&Path>) -> Result<Vec<Segment>> {
    let points = input::read_points(input)?;
    tracing::debug!(input = %input.display(), points = points.len(), "loaded");
    let det = run_detector(&points, algo)
        .with_context(|| format!("detecting segments in {}", input.display()))?;
    let segments = det.segments();
    tracing::info!(
        algo = det.name(),
        points = points.len(),
        segments = det.number_of_segments(),
        "detect"
    );

    if let Some(out) = out {
        let report = DetectReport {
            algo: det.name(),
            points: points.len(),
            segments: segments
                .iter()
                .map(|s| [s.p().x(), s.p().y(), s.q().x(), s.q().y()])
                .collect(),
        };
        create_parent(out)?;
        fs::write(out, serde_json::to_vec_pretty(&report)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let params = serde_json::json!({
            "algo": det.name(),
            "input": input.to_string_lossy(),
        });
        let prov = provenance::write_sidecar(out, Payload::new("detect", params))?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "report_written");
    }
    Ok(segments)
}

fn generate(cfg: PointSetCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    let points = draw_point_set(cfg, tok);
    tracing::info!(
        points = points.len(),
        lines = cfg.lines,
        seed = tok.seed,
        index = tok.index,
        "generate"
    );
    create_parent(out)?;
    fs::write(out, input::format_points(&points))
        .with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "lines": cfg.lines,
        "noise": cfg.noise,
        "extent": cfg.extent,
        "seed": tok.seed,
        "index": tok.index,
    });
    provenance::write_sidecar(out, Payload::new("generate", params))?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "collinear_version": collinear::VERSION,
        "algorithms": ["brute", "fast"],
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
