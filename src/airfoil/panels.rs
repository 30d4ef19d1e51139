use nalgebra::Point2;

use crate::error::Result;

use super::spec::AirfoilSpec;

// ---------------------------------------------------------------------------
// Panel geometry: edges, vortex / collocation points, inclinations, lengths
// ---------------------------------------------------------------------------

/// Discretized camberline: N straight panels over N+1 edge points.
///
/// Vortex points sit at the quarter-chord of each panel, collocation points
/// at the three-quarter chord (the lumped-vortex placement). Panel i spans
/// edges i and i+1; there is no wrap-around panel from the trailing edge
/// back to the leading edge.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelGeometry {
    /// Panel edge points along the camberline, length N+1, x uniform on [0, 1].
    pub edges: Vec<Point2<f64>>,
    /// Quarter-chord vortex point of each panel, length N.
    pub vortex_points: Vec<Point2<f64>>,
    /// Three-quarter-chord collocation point of each panel, length N.
    pub colloc_points: Vec<Point2<f64>>,
    /// Panel slope angle, rad: atan2(y_i - y_{i+1}, x_{i+1} - x_i). Length N.
    pub inclinations: Vec<f64>,
    /// Euclidean panel length, length N.
    pub lengths: Vec<f64>,
}

impl PanelGeometry {
    /// Discretize the camberline described by `spec` into panels.
    pub fn generate(spec: &AirfoilSpec) -> Result<Self> {
        let n = spec.n_panels;

        let edges: Vec<Point2<f64>> = (0..=n)
            .map(|i| {
                let x = i as f64 / n as f64;
                Point2::new(x, spec.camber.y(x))
            })
            .collect();

        let mut vortex_points = Vec::with_capacity(n);
        let mut colloc_points = Vec::with_capacity(n);
        let mut inclinations = Vec::with_capacity(n);
        let mut lengths = Vec::with_capacity(n);

        for w in edges.windows(2) {
            let (a, b) = (w[0], w[1]);
            vortex_points.push(Point2::new(
                0.75 * a.x + 0.25 * b.x,
                0.75 * a.y + 0.25 * b.y,
            ));
            colloc_points.push(Point2::new(
                0.25 * a.x + 0.75 * b.x,
                0.25 * a.y + 0.75 * b.y,
            ));
            inclinations.push((a.y - b.y).atan2(b.x - a.x));
            lengths.push((b - a).norm());
        }

        Ok(Self {
            edges,
            vortex_points,
            colloc_points,
            inclinations,
            lengths,
        })
    }

    /// Number of panels.
    pub fn n_panels(&self) -> usize {
        self.lengths.len()
    }

    /// Chordwise collocation positions x/c, handy for plotting distributions.
    pub fn x_colloc(&self) -> Vec<f64> {
        self.colloc_points.iter().map(|p| p.x).collect()
    }

    /// Total discretized arc length of the camberline.
    pub fn arc_length(&self) -> f64 {
        self.lengths.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
