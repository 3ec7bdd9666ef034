//! Piecewise-linear lookup over small breakpoint tables.
//!
//! Queries between two breakpoints are linearly interpolated. Queries outside
//! the table's domain are clamped to the nearest endpoint value, never
//! extrapolated.

use serde::Serialize;

use crate::error::ProjectionError;

/// Linearly interpolate `query` against the parallel breakpoint slices.
///
/// `xs` must be strictly increasing and the same length as `ys` (at least two
/// points). Queries below `xs[0]` return `ys[0]`; queries above the last
/// breakpoint return the last output.
pub fn interpolate(xs: &[f64], ys: &[f64], query: f64) -> Result<f64, ProjectionError> {
    validate_breakpoints(xs, ys)?;
    Ok(lookup(xs, ys, query))
}

fn validate_breakpoints(xs: &[f64], ys: &[f64]) -> Result<(), ProjectionError> {
    if xs.len() != ys.len() {
        return Err(ProjectionError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(ProjectionError::TableTooShort { len: xs.len() });
    }
    if let Some(index) = xs
        .iter()
        .zip(ys)
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(ProjectionError::NonFiniteBreakpoint { index });
    }
    if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(ProjectionError::NotStrictlyIncreasing { index: i + 1 });
    }
    Ok(())
}

/// Lookup on already-validated breakpoints.
fn lookup(xs: &[f64], ys: &[f64], query: f64) -> f64 {
    let last = xs.len() - 1;
    if query <= xs[0] {
        return ys[0];
    }
    if query >= xs[last] {
        return ys[last];
    }
    // First breakpoint strictly greater than the query; guaranteed in 1..=last.
    let hi = xs.partition_point(|&x| x <= query).clamp(1, last);
    let lo = hi - 1;
    let t = (query - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}

/// A validated breakpoint table.
///
/// Validation happens once in [`BreakpointTable::new`], so [`value`](Self::value)
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakpointTable {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl BreakpointTable {
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, ProjectionError> {
        validate_breakpoints(xs, ys)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Interpolated output for `query`, clamped to the table's endpoints.
    pub fn value(&self, query: f64) -> f64 {
        lookup(&self.xs, &self.ys, query)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false: a table holds at least two points.
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UBI_LEVELS: [f64; 4] = [0.0, 500.0, 1000.0, 1500.0];
    const STRESS: [f64; 4] = [100.0, 75.0, 55.0, 40.0];

    #[test]
    fn test_midpoint_between_breakpoints() {
        let v = interpolate(&UBI_LEVELS, &STRESS, 750.0).unwrap();
        assert!((v - 65.0).abs() < 1e-12, "expected 65.0, got {v}");
    }

    #[test]
    fn test_exact_breakpoints_return_table_values() {
        for (x, y) in UBI_LEVELS.iter().zip(STRESS.iter()) {
            let v = interpolate(&UBI_LEVELS, &STRESS, *x).unwrap();
            assert!(
                (v - y).abs() < 1e-12,
                "value at breakpoint {x} should be {y}, got {v}"
            );
        }
    }

    #[test]
    fn test_clamps_below_domain() {
        let v = interpolate(&UBI_LEVELS, &STRESS, -100.0).unwrap();
        assert!((v - 100.0).abs() < 1e-12, "got {v}");
    }

    #[test]
    fn test_clamps_above_domain() {
        let v = interpolate(&UBI_LEVELS, &STRESS, 2000.0).unwrap();
        assert!((v - 40.0).abs() < 1e-12, "got {v}");
    }

    #[test]
    fn test_quarter_way_into_segment() {
        // 1125 is a quarter of the way from 1000 to 1500: 55 + 0.25 * -15
        let v = interpolate(&UBI_LEVELS, &STRESS, 1125.0).unwrap();
        assert!((v - 51.25).abs() < 1e-12, "got {v}");
    }

    #[test]
    fn test_two_point_table() {
        let v = interpolate(&[0.0, 10.0], &[0.0, 1.0], 2.5).unwrap();
        assert!((v - 0.25).abs() < 1e-12, "got {v}");
    }

    #[test]
    fn test_rejects_single_point() {
        let err = interpolate(&[1.0], &[1.0], 1.0).unwrap_err();
        assert_eq!(err, ProjectionError::TableTooShort { len: 1 });
    }

    #[test]
    fn test_rejects_empty_table() {
        let err = interpolate(&[], &[], 1.0).unwrap_err();
        assert_eq!(err, ProjectionError::TableTooShort { len: 0 });
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = interpolate(&UBI_LEVELS, &STRESS[..3], 100.0).unwrap_err();
        assert_eq!(err, ProjectionError::LengthMismatch { xs: 4, ys: 3 });
    }

    #[test]
    fn test_rejects_non_increasing_inputs() {
        let err = interpolate(&[0.0, 5.0, 5.0], &[1.0, 2.0, 3.0], 1.0).unwrap_err();
        assert_eq!(err, ProjectionError::NotStrictlyIncreasing { index: 2 });
    }

    #[test]
    fn test_rejects_nan_breakpoint() {
        let err = interpolate(&[0.0, f64::NAN], &[1.0, 2.0], 1.0).unwrap_err();
        assert_eq!(err, ProjectionError::NonFiniteBreakpoint { index: 1 });
    }

    #[test]
    fn test_table_matches_free_function() {
        let table = BreakpointTable::new(&UBI_LEVELS, &STRESS).unwrap();
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
        for q in [-50.0, 0.0, 250.0, 600.0, 1000.0, 1499.0, 3000.0] {
            let free = interpolate(&UBI_LEVELS, &STRESS, q).unwrap();
            assert!(
                (table.value(q) - free).abs() < 1e-12,
                "table and free function disagree at {q}"
            );
        }
    }

    #[test]
    fn test_monotone_table_gives_monotone_output() {
        let table = BreakpointTable::new(&UBI_LEVELS, &STRESS).unwrap();
        let mut prev = f64::INFINITY;
        for step in 0..=160 {
            let v = table.value(step as f64 * 10.0);
            assert!(v <= prev + 1e-12, "stress rose at {}", step * 10);
            prev = v;
        }
    }
}
