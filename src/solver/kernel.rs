use nalgebra::{Point2, Vector2};

use crate::error::{PanelError, Result};

// ---------------------------------------------------------------------------
// 2D point-vortex induced velocity (lumped-vortex kernel)
// ---------------------------------------------------------------------------

/// Radii below this are treated as a collocation/vortex coincidence.
const R_SQ_MIN: f64 = 1e-12;

/// Velocity induced at `colloc` by a point vortex of strength `circulation`
/// at `vortex`:
///
///   v = Gamma / (2 pi r^2) * R (P - V),  R = [[0, 1], [-1, 0]]
///
/// `panel` only labels the error when the two points coincide.
pub fn induced_velocity(
    colloc: &Point2<f64>,
    vortex: &Point2<f64>,
    circulation: f64,
    panel: usize,
) -> Result<Vector2<f64>> {
    let d = colloc - vortex;
    let r_sq = d.norm_squared();
    if r_sq < R_SQ_MIN {
        return Err(PanelError::SingularKernel { panel });
    }

    let k = circulation / (2.0 * std::f64::consts::PI * r_sq);
    // 90-degree rotation of the separation vector
    Ok(Vector2::new(k * d.y, -k * d.x))
}

/// Outward normal of a panel with slope angle `alpha`, rad.
pub fn normal_vector(alpha: f64) -> Vector2<f64> {
    Vector2::new(alpha.sin(), alpha.cos())
}

/// Tangent of a panel with slope angle `alpha`, rad.
pub fn tangent_vector(alpha: f64) -> Vector2<f64> {
    Vector2::new(alpha.cos(), -alpha.sin())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn downwash_behind_a_positive_vortex() {
        // vortex at origin, collocation point one chord downstream
        let v = induced_velocity(&Point2::new(1.0, 0.0), &Point2::origin(), 1.0, 0).unwrap();
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(v.y, -1.0 / (2.0 * PI), max_relative = 1e-12);
    }

    #[test]
    fn speed_decays_with_distance() {
        let near = induced_velocity(&Point2::new(0.5, 0.0), &Point2::origin(), 1.0, 0).unwrap();
        let far = induced_velocity(&Point2::new(2.0, 0.0), &Point2::origin(), 1.0, 0).unwrap();
        assert!(near.norm() > far.norm());
        // 1/r falloff of the speed magnitude
        assert_relative_eq!(near.norm() / far.norm(), 4.0, max_relative = 1e-12);
    }

    #[test]
    fn velocity_is_tangential() {
        // induced velocity is perpendicular to the separation vector
        let p = Point2::new(0.3, 0.7);
        let v = induced_velocity(&p, &Point2::origin(), 2.5, 0).unwrap();
        let sep = Vector2::new(p.x, p.y);
        assert_relative_eq!(v.dot(&sep), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_are_singular() {
        let p = Point2::new(0.25, 0.0);
        assert_eq!(
            induced_velocity(&p, &p, 1.0, 3),
            Err(PanelError::SingularKernel { panel: 3 })
        );
    }

    #[test]
    fn flat_panel_basis_vectors() {
        assert_relative_eq!(normal_vector(0.0).x, 0.0);
        assert_relative_eq!(normal_vector(0.0).y, 1.0);
        assert_relative_eq!(tangent_vector(0.0).x, 1.0);
        assert_relative_eq!(tangent_vector(0.0).y, 0.0);
        // normal and tangent stay orthogonal for inclined panels
        let a = 0.3;
        assert_relative_eq!(normal_vector(a).dot(&tangent_vector(a)), 0.0, epsilon = 1e-15);
    }
}
