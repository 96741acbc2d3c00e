use crate::PfError;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, PfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// `n` equally spaced points over `[start, stop]`.
///
/// The endpoints are stored exactly rather than accumulated, so
/// `linspace(a, b, n)[n - 1] == b` bit for bit.
pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Vec<f64>, PfError> {
    if n < 2 {
        return Err(PfError::InvalidArg {
            what: "linspace needs at least two points",
        });
    }
    let step = (stop - start) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    points[n - 1] = stop;
    Ok(points)
}

/// True when every element is strictly larger than the previous one.
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(f64::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linspace_hits_endpoints_exactly() {
        let pts = linspace(0.5, 0.55, 4).unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[0], 0.5);
        assert_eq!(pts[3], 0.55);
        assert!(is_strictly_increasing(&pts));
    }

    #[test]
    fn linspace_rejects_single_point() {
        assert!(linspace(0.0, 1.0, 1).is_err());
    }
}
