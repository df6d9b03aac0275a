//! Presentation of detected segments: text lines, JSON, and tables.

use anyhow::{Context, Result};
use collinear::{LineSegment, Point};
use polars::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// JSON row for one segment; endpoints as `[x, y]`.
#[derive(Debug, Serialize)]
pub struct SegmentRow {
    pub p: [i32; 2],
    pub q: [i32; 2],
}

impl From<&LineSegment> for SegmentRow {
    fn from(s: &LineSegment) -> Self {
        Self {
            p: [s.p().x(), s.p().y()],
            q: [s.q().x(), s.q().y()],
        }
    }
}

/// One `p -> q` line per segment.
pub fn render_text(segments: &[LineSegment]) -> String {
    segments.iter().map(|s| format!("{s}\n")).collect()
}

pub fn render_json(segments: &[LineSegment]) -> Result<String> {
    let rows: Vec<SegmentRow> = segments.iter().map(SegmentRow::from).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Write a `px,py,qx,qy` table; `.parquet` selects Parquet, anything else CSV.
pub fn write_table(path: &Path, segments: &[LineSegment]) -> Result<()> {
    let column = |f: fn(&LineSegment) -> i32| segments.iter().map(f).collect::<Vec<i32>>();
    let mut df = df!(
        "px" => column(|s| s.p().x()),
        "py" => column(|s| s.p().y()),
        "qx" => column(|s| s.q().x()),
        "qy" => column(|s| s.q().y())
    )?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(file).finish(&mut df)?;
    } else {
        CsvWriter::new(file).finish(&mut df)?;
    }
    Ok(())
}

/// Counted text format accepted by `points::parse_counted`.
pub fn render_counted(points: &[Point]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        out.push_str(&format!("{} {}\n", p.x(), p.y()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::points::parse_counted;
    use tempfile::tempdir;

    fn diagonal() -> Vec<LineSegment> {
        vec![LineSegment::new(Point::new(1, 1), Point::new(4, 4)).unwrap()]
    }

    #[test]
    fn text_lists_one_segment_per_line() {
        assert_eq!(render_text(&diagonal()), "(1, 1) -> (4, 4)\n");
        assert_eq!(render_text(&[]), "");
    }

    #[test]
    fn json_rows_carry_endpoints() {
        let parsed: serde_json::Value =
            serde_json::from_str(&render_json(&diagonal()).unwrap()).unwrap();
        assert_eq!(parsed, serde_json::json!([{"p": [1, 1], "q": [4, 4]}]));
    }

    #[test]
    fn csv_table_has_header_and_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/segments.csv");
        write_table(&path, &diagonal()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("px,py,qx,qy"));
        assert_eq!(lines.next(), Some("1,1,4,4"));
    }

    #[test]
    fn parquet_table_is_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("segments.parquet");
        write_table(&path, &diagonal()).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn counted_text_reads_back() {
        let pts = vec![Point::new(3, 4), Point::new(-1, 0)];
        assert_eq!(parse_counted(&render_counted(&pts)).unwrap(), pts);
    }
}
