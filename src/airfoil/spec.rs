use crate::error::{PanelError, Result};

use super::camber::CamberLine;

// ---------------------------------------------------------------------------
// Airfoil discretization request
// ---------------------------------------------------------------------------

/// Immutable input to geometry generation: which mean line, how many panels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirfoilSpec {
    pub camber: CamberLine,
    pub n_panels: usize,
}

impl AirfoilSpec {
    pub fn new(camber: CamberLine, n_panels: i64) -> Result<Self> {
        if n_panels < 1 {
            return Err(PanelError::InvalidPanelCount { n: n_panels });
        }
        Ok(Self {
            camber,
            n_panels: n_panels as usize,
        })
    }

    /// NACA 4-digit section with `n_panels` panels.
    pub fn naca(code: &str, n_panels: i64) -> Result<Self> {
        Self::new(CamberLine::naca(code)?, n_panels)
    }

    /// Parabolic-arc section with maximum camber `eps`.
    pub fn parabolic(eps: f64, n_panels: i64) -> Result<Self> {
        Self::new(CamberLine::parabolic(eps), n_panels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative_panel_counts() {
        assert_eq!(
            AirfoilSpec::parabolic(0.1, 0),
            Err(PanelError::InvalidPanelCount { n: 0 })
        );
        assert_eq!(
            AirfoilSpec::naca("0010", -3),
            Err(PanelError::InvalidPanelCount { n: -3 })
        );
    }

    #[test]
    fn accepts_single_panel() {
        let spec = AirfoilSpec::parabolic(0.1, 1).unwrap();
        assert_eq!(spec.n_panels, 1);
    }
}
