// ---------------------------------------------------------------------------
// Freestream flow condition
// ---------------------------------------------------------------------------

/// Standard sea-level air density, kg/m^3.
pub const RHO_SL: f64 = 1.225;

/// Angle of attack with an explicit unit tag.
///
/// Callers state degrees or radians at the call site; everything downstream
/// works in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Degrees(f64),
    Radians(f64),
}

impl Angle {
    pub fn radians(self) -> f64 {
        match self {
            Angle::Degrees(d) => d.to_radians(),
            Angle::Radians(r) => r,
        }
    }

    pub fn degrees(self) -> f64 {
        match self {
            Angle::Degrees(d) => d,
            Angle::Radians(r) => r.to_degrees(),
        }
    }
}

/// Freestream condition for one solve.
#[derive(Debug, Clone, Copy)]
pub struct FlowCondition {
    pub aoa_rad: f64,  // angle of attack, rad
    pub q_inf: f64,    // freestream speed, m/s (must be positive)
    pub density: f64,  // kg/m^3
}

impl FlowCondition {
    /// Condition at standard sea-level density.
    pub fn new(aoa: Angle, q_inf: f64) -> Self {
        Self {
            aoa_rad: aoa.radians(),
            q_inf,
            density: RHO_SL,
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Dynamic pressure q = 1/2 rho q_inf^2, Pa.
    pub fn q_dyn(&self) -> f64 {
        0.5 * self.density * self.q_inf * self.q_inf
    }

    /// Freestream velocity components (u, w) in the airfoil frame.
    pub fn freestream(&self) -> (f64, f64) {
        (
            self.q_inf * self.aoa_rad.cos(),
            self.q_inf * self.aoa_rad.sin(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn degrees_and_radians_agree() {
        let a = Angle::Degrees(5.0);
        let b = Angle::Radians(5.0_f64.to_radians());
        assert_relative_eq!(a.radians(), b.radians(), max_relative = 1e-15);
        assert_relative_eq!(b.degrees(), 5.0, max_relative = 1e-12);
    }

    #[test]
    fn default_density_is_sea_level() {
        let fc = FlowCondition::new(Angle::Degrees(0.0), 1.0);
        assert_relative_eq!(fc.density, 1.225);
        assert_relative_eq!(fc.q_dyn(), 0.5 * 1.225);
    }

    #[test]
    fn freestream_components() {
        let fc = FlowCondition::new(Angle::Degrees(90.0), 2.0);
        let (u, w) = fc.freestream();
        assert_relative_eq!(u, 0.0, epsilon = 1e-12);
        assert_relative_eq!(w, 2.0, max_relative = 1e-12);
    }
}
