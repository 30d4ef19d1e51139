use std::str::FromStr;

use crate::error::{PanelError, Result};

// ---------------------------------------------------------------------------
// Camberline definition (NACA 4-digit mean line or analytic parabola)
// ---------------------------------------------------------------------------

/// Mean-line shape of a thin airfoil, tagged by family.
///
/// The tag is resolved once at construction; downstream code only evaluates
/// `y(x)` and never re-inspects the family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CamberLine {
    /// NACA 4-digit mean line: `m` maximum camber (chord fraction),
    /// `p` chordwise position of maximum camber (chord fraction).
    Naca { m: f64, p: f64 },
    /// Parabolic arc `y = 4 eps x (1 - x)` with maximum camber `eps`.
    Parabolic { eps: f64 },
}

impl CamberLine {
    /// Parse the camber digits of a 4-digit NACA code.
    ///
    /// Digit 1 is maximum camber in percent chord, digit 2 its position in
    /// tenths. "0010" and "2414" are both valid; a code whose first two
    /// characters are not digits is rejected, as is a cambered section with
    /// the camber position at the leading edge (the mean-line formula
    /// divides by p).
    pub fn naca(code: &str) -> Result<Self> {
        let invalid = || PanelError::InvalidAirfoilCode {
            code: code.to_string(),
        };

        let mut chars = code.chars();
        let m_digit = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(invalid)?;
        let p_digit = chars.next().and_then(|c| c.to_digit(10)).ok_or_else(invalid)?;

        let m = f64::from(m_digit) / 100.0;
        let p = f64::from(p_digit) / 10.0;

        if m > 0.0 && p == 0.0 {
            return Err(invalid());
        }

        Ok(CamberLine::Naca { m, p })
    }

    pub fn parabolic(eps: f64) -> Self {
        CamberLine::Parabolic { eps }
    }

    /// True when the mean line is flat (symmetric section).
    pub fn is_symmetric(&self) -> bool {
        match *self {
            CamberLine::Naca { m, .. } => m == 0.0,
            CamberLine::Parabolic { eps } => eps == 0.0,
        }
    }

    /// Camberline ordinate at chord fraction `x` in [0, 1].
    pub fn y(&self, x: f64) -> f64 {
        match *self {
            CamberLine::Parabolic { eps } => 4.0 * eps * x * (1.0 - x),
            CamberLine::Naca { m, .. } if m == 0.0 => 0.0,
            CamberLine::Naca { m, p } => {
                if x < p {
                    m / (p * p) * (2.0 * p * x - x * x)
                } else {
                    let q = 1.0 - p;
                    m / (q * q) * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x)
                }
            }
        }
    }
}

/// Parse `"naca:2414"` / `"parabolic:0.1"` style identifiers (CLI input).
impl FromStr for CamberLine {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, arg) = s.split_once(':').unwrap_or((s, ""));
        match kind {
            "naca" => CamberLine::naca(arg),
            "parabolic" => {
                let eps = arg.parse().map_err(|_| PanelError::UnsupportedAirfoilType {
                    kind: s.to_string(),
                })?;
                Ok(CamberLine::parabolic(eps))
            }
            _ => Err(PanelError::UnsupportedAirfoilType {
                kind: kind.to_string(),
            }),
        }
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
    fn parses_cambered_code() {
        let c = CamberLine::naca("2414").unwrap();
        assert_eq!(c, CamberLine::Naca { m: 0.02, p: 0.4 });
    }

    #[test]
    fn parses_symmetric_code() {
        let c = CamberLine::naca("0010").unwrap();
        assert!(c.is_symmetric());
    }

    #[test]
    fn rejects_non_digit_code() {
        assert!(matches!(
            CamberLine::naca("xx12"),
            Err(PanelError::InvalidAirfoilCode { .. })
        ));
        assert!(matches!(
            CamberLine::naca(""),
            Err(PanelError::InvalidAirfoilCode { .. })
        ));
    }

    #[test]
    fn rejects_camber_at_leading_edge() {
        // 2012: 2% camber at x = 0, formula would divide by zero
        assert!(matches!(
            CamberLine::naca("2012"),
            Err(PanelError::InvalidAirfoilCode { .. })
        ));
    }

    #[test]
    fn symmetric_section_is_flat() {
        let c = CamberLine::naca("0015").unwrap();
        for i in 0..=10 {
            assert_eq!(c.y(i as f64 / 10.0), 0.0);
        }
    }

    #[test]
    fn parabolic_formula_and_endpoints() {
        let c = CamberLine::parabolic(0.1);
        assert_eq!(c.y(0.0), 0.0);
        assert_eq!(c.y(1.0), 0.0);
        assert_relative_eq!(c.y(0.5), 0.1, max_relative = 1e-15);
        assert_relative_eq!(c.y(0.25), 4.0 * 0.1 * 0.25 * 0.75, max_relative = 1e-15);
        // symmetric about mid-chord
        assert_relative_eq!(c.y(0.3), c.y(0.7), max_relative = 1e-15);
    }

    #[test]
    fn naca_mean_line_is_continuous_at_p() {
        let c = CamberLine::naca("2414").unwrap();
        let below = c.y(0.4 - 1e-9);
        let above = c.y(0.4 + 1e-9);
        assert_relative_eq!(below, above, epsilon = 1e-7);
        // maximum camber value m at x = p
        assert_relative_eq!(c.y(0.4), 0.02, max_relative = 1e-12);
    }

    #[test]
    fn from_str_dispatch() {
        assert_eq!(
            "parabolic:0.05".parse::<CamberLine>().unwrap(),
            CamberLine::Parabolic { eps: 0.05 }
        );
        assert_eq!(
            "naca:2414".parse::<CamberLine>().unwrap(),
            CamberLine::Naca { m: 0.02, p: 0.4 }
        );
        assert!(matches!(
            "joukowski:1".parse::<CamberLine>(),
            Err(PanelError::UnsupportedAirfoilType { .. })
        ));
    }
}
