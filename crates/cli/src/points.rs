//! Point-list loaders.
//!
//! - `.csv`: header with `x` and `y` columns, read through polars. Empty cells
//!   load as absent points.
//! - anything else: whitespace-separated text, a count `n` followed by `n`
//!   `x y` pairs.

use anyhow::{bail, Context, Result};
use collinear::Point;
use polars::prelude::*;
use std::path::Path;

/// Load a point list; absent entries stay `None` so the detector can reject them.
pub fn load_points(path: &Path) -> Result<Vec<Option<Point>>> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        read_csv(path)
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let points = parse_counted(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(points.into_iter().map(Some).collect())
    }
}

/// Parse the counted text format: `n` then `n` coordinate pairs.
pub fn parse_counted(text: &str) -> Result<Vec<Point>> {
    let mut tokens = text.split_whitespace();
    let n: usize = tokens
        .next()
        .context("missing point count")?
        .parse()
        .context("point count is not a non-negative integer")?;
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let x = next_coord(&mut tokens, i, "x")?;
        let y = next_coord(&mut tokens, i, "y")?;
        points.push(Point::new(x, y));
    }
    if let Some(extra) = tokens.next() {
        bail!("unexpected token {extra:?} after {n} points");
    }
    Ok(points)
}

fn next_coord<'a>(tokens: &mut impl Iterator<Item = &'a str>, i: usize, axis: &str) -> Result<i32> {
    let tok = tokens
        .next()
        .with_context(|| format!("point {i}: missing {axis} coordinate"))?;
    tok.parse()
        .with_context(|| format!("point {i}: invalid {axis} coordinate {tok:?}"))
}

fn read_csv(path: &Path) -> Result<Vec<Option<Point>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .select([col("x"), col("y")])
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), "input_csv_shape");
    let xs = coord_column(&df, "x")?;
    let ys = coord_column(&df, "y")?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .map(|(x, y)| Some(Point::new(x?, y?)))
        .collect())
}

/// Integer coordinates of one column; empty cells stay `None`. Rows are 1-based.
fn coord_column(df: &DataFrame, name: &str) -> Result<Vec<Option<i32>>> {
    let series = df.column(name)?;
    let dtype = series.dtype();
    if dtype.is_float() {
        let wide = series.cast(&DataType::Float64)?;
        let bad = wide
            .f64()?
            .into_iter()
            .enumerate()
            .find_map(|(row, v)| v.filter(|v| !is_i32_valued(*v)).map(|v| (row, v)));
        if let Some((row, v)) = bad {
            if v.fract() != 0.0 {
                bail!("row {}: {name} coordinate {v} is not an integer", row + 1);
            }
            bail!("row {}: {name} coordinate {v} is out of range", row + 1);
        }
    } else if !(dtype.is_integer() || matches!(dtype, DataType::Null)) {
        bail!("column {name}: expected integer coordinates, found {dtype}");
    }
    let wide = series.cast(&DataType::Int64)?;
    let coords = wide
        .i64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| match v {
            None => Ok(None),
            Some(v) => i32::try_from(v).map(Some).with_context(|| {
                format!("row {}: {name} coordinate {v} is out of range", row + 1)
            }),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(coords)
}

fn is_i32_valued(v: f64) -> bool {
    v.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_counted_text() {
        let pts = parse_counted("3\n 1 1\n2 2\n  30000 -4\n").unwrap();
        assert_eq!(
            pts,
            vec![Point::new(1, 1), Point::new(2, 2), Point::new(30000, -4)]
        );
    }

    #[test]
    fn rejects_short_and_padded_text() {
        assert!(parse_counted("").is_err());
        assert!(parse_counted("2\n1 1\n2").is_err());
        assert!(parse_counted("1\n1 1\n9").is_err());
        assert!(parse_counted("1\n1 one").is_err());
    }

    #[test]
    fn loads_text_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input4.txt");
        fs::write(&path, "4\n1 1\n2 2\n3 3\n4 4\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[3], Some(Point::new(4, 4)));
    }

    #[test]
    fn loads_csv_with_holes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n1,1\n2,\n3,3\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts, vec![Some(Point::new(1, 1)), None, Some(Point::new(3, 3))]);
    }

    #[test]
    fn csv_rejects_fractional_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frac.csv");
        fs::write(&path, "x,y\n1,1\n1.5,2\n").unwrap();
        let err = format!("{:#}", load_points(&path).unwrap_err());
        assert!(err.contains("row 2: x coordinate 1.5 is not an integer"), "{err}");
    }

    #[test]
    fn csv_rejects_out_of_range_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wide.csv");
        fs::write(&path, "x,y\n3000000000,2\n").unwrap();
        let err = format!("{:#}", load_points(&path).unwrap_err());
        assert!(
            err.contains("row 1: x coordinate 3000000000 is out of range"),
            "{err}"
        );
    }

    #[test]
    fn csv_accepts_integral_float_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round.csv");
        fs::write(&path, "x,y\n2.0,3\n,4\n").unwrap();
        let pts = load_points(&path).unwrap();
        assert_eq!(pts, vec![Some(Point::new(2, 3)), None]);
    }
}
