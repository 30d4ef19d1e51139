use std::fs;
use std::path::Path;

use nalgebra::Point2;

use crate::error::{PanelError, Result};

// ---------------------------------------------------------------------------
// Reference coordinate tables (header line + whitespace-separated x y pairs)
// ---------------------------------------------------------------------------

/// Load an airfoil coordinate table.
///
/// The first line is a header and is skipped; every following non-empty line
/// must hold two whitespace-separated floats. Used by plotting and
/// validation consumers to overlay a reference shape; the solver itself
/// never reads these files.
pub fn load_coordinates<P: AsRef<Path>>(path: P) -> Result<Vec<Point2<f64>>> {
    let path = path.as_ref();
    let resource_err = |reason: String| PanelError::ResourceLoad {
        path: path.display().to_string(),
        reason,
    };

    let contents = fs::read_to_string(path).map_err(|e| resource_err(e.to_string()))?;

    let mut points = Vec::new();
    for (lineno, line) in contents.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let parse = |field: Option<&str>| -> Result<f64> {
            field
                .and_then(|f| f.parse().ok())
                .ok_or_else(|| resource_err(format!("malformed line {}", lineno + 1)))
        };
        let x = parse(fields.next())?;
        let y = parse(fields.next())?;
        points.push(Point2::new(x, y));
    }

    Ok(points)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn skips_header_and_parses_pairs() {
        let path = write_temp(
            "coords_ok.txt",
            "x/c  y/c\n0.0 0.0\n0.5\t0.05\n\n1.0 0.0\n",
        );
        let pts = load_coordinates(&path).unwrap();
        assert_eq!(pts.len(), 3);
        assert_eq!(pts[1], Point2::new(0.5, 0.05));
    }

    #[test]
    fn malformed_line_is_an_error() {
        let path = write_temp("coords_bad.txt", "header\n0.0 0.0\n0.5 not-a-number\n");
        let err = load_coordinates(&path).unwrap_err();
        assert!(matches!(err, PanelError::ResourceLoad { .. }));
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_coordinates("/nonexistent/naca9999.txt").unwrap_err();
        assert!(matches!(err, PanelError::ResourceLoad { .. }));
    }
}
