use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use collinear::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod points;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "collinear-cli")]
#[command(about = "Find line segments through four collinear points")]
struct Cmd {
    /// Optional run label; propagated to provenance and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Detect segments in a point file (.csv with x,y columns, or counted text)
    Detect {
        #[arg(long)]
        input: PathBuf,
        /// Also write a px,py,qx,qy table (.csv or .parquet) plus provenance
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print segments as JSON instead of `p -> q` lines
        #[arg(long)]
        json: bool,
    },
    /// Write a random point file with planted collinear quadruples
    Sample {
        #[arg(long, default_value_t = 32)]
        count: usize,
        #[arg(long, default_value_t = 2)]
        lines: usize,
        #[arg(long, default_value_t = 32_768)]
        bound: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Detect { input, out, json } => detect(&input, out.as_deref(), json, cmd.tag),
        Action::Sample {
            count,
            lines,
            bound,
            seed,
            out,
        } => sample(
            PointCloudCfg {
                count,
                planted_lines: lines,
                bound,
            },
            seed,
            &out,
        ),
        Action::Report => report(cmd.tag),
    }
}

fn detect(input: &Path, out: Option<&Path>, json: bool, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), tag = ?tag, "detect");
    let points = points::load_points(input)?;
    let bcp = BruteCollinearPoints::from_nullable(Some(points.as_slice()))
        .with_context(|| format!("detecting segments in {}", input.display()))?;
    let segments = bcp.segments();
    tracing::info!(
        points = points.len(),
        segments = bcp.number_of_segments(),
        "detected"
    );

    if json {
        println!("{}", output::render_json(&segments)?);
    } else {
        print!("{}", output::render_text(&segments));
    }

    if let Some(out) = out {
        output::write_table(out, &segments)?;
        let payload = Payload::new(
            serde_json::json!({
                "input": input.to_string_lossy(),
                "points": points.len(),
                "segments": segments.len()
            }),
            tag,
        );
        let prov = provenance::write_sidecar(out, &payload)?;
        tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote_table");
    }
    Ok(())
}

fn sample(cfg: PointCloudCfg, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(count = cfg.count, lines = cfg.planted_lines, seed, "sample");
    let pts = draw_point_cloud(cfg, ReplayToken { seed, index: 0 });
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, output::render_counted(&pts))
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new(serde_json::json!({}), tag);
    let obj = provenance::document(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
