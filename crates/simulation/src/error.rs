// ---------------------------------------------------------------------------
// ProjectionError: invalid-input errors raised by the projection layer
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur when a projection is asked for something outside its
/// declared inputs.
///
/// Every variant is an invalid-input condition reported synchronously to the
/// caller. Numeric inputs outside a slider's domain are *not* errors; the
/// closed-form formulas extrapolate them.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A scenario label that is not a member of the module's fixed set.
    UnknownScenario { module: &'static str, label: String },
    /// A breakpoint table needs at least two points.
    TableTooShort { len: usize },
    /// Breakpoint inputs and outputs have different lengths.
    LengthMismatch { xs: usize, ys: usize },
    /// Breakpoint inputs must be strictly increasing; `index` is the first
    /// offending position.
    NotStrictlyIncreasing { index: usize },
    /// A breakpoint coordinate was NaN or infinite.
    NonFiniteBreakpoint { index: usize },
    /// A year axis with a zero step or an end before its start.
    InvalidYearAxis { start: i32, end: i32, step: i32 },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::UnknownScenario { module, label } => {
                write!(f, "Unknown scenario '{label}' for module {module}")
            }
            ProjectionError::TableTooShort { len } => write!(
                f,
                "Breakpoint table needs at least 2 points, got {len}"
            ),
            ProjectionError::LengthMismatch { xs, ys } => write!(
                f,
                "Breakpoint length mismatch: {xs} inputs vs {ys} outputs"
            ),
            ProjectionError::NotStrictlyIncreasing { index } => write!(
                f,
                "Breakpoint inputs must be strictly increasing (violated at index {index})"
            ),
            ProjectionError::NonFiniteBreakpoint { index } => {
                write!(f, "Breakpoint at index {index} is not finite")
            }
            ProjectionError::InvalidYearAxis { start, end, step } => write!(
                f,
                "Invalid year axis {start}..={end} step {step}"
            ),
        }
    }
}

impl std::error::Error for ProjectionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_scenario() {
        let err = ProjectionError::UnknownScenario {
            module: "infrastructure",
            label: "Gold Plated".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Gold Plated"), "got: {msg}");
        assert!(msg.contains("infrastructure"), "got: {msg}");
    }

    #[test]
    fn test_display_table_too_short() {
        let msg = format!("{}", ProjectionError::TableTooShort { len: 1 });
        assert!(msg.contains("at least 2"), "got: {msg}");
        assert!(msg.contains("got 1"), "got: {msg}");
    }

    #[test]
    fn test_display_length_mismatch() {
        let msg = format!("{}", ProjectionError::LengthMismatch { xs: 4, ys: 3 });
        assert!(msg.contains("4 inputs"), "got: {msg}");
        assert!(msg.contains("3 outputs"), "got: {msg}");
    }

    #[test]
    fn test_display_invalid_axis() {
        let msg = format!(
            "{}",
            ProjectionError::InvalidYearAxis {
                start: 2050,
                end: 2025,
                step: 1
            }
        );
        assert!(msg.contains("2050..=2025"), "got: {msg}");
    }

    #[test]
    fn test_is_error_trait() {
        let err: Box<dyn std::error::Error> =
            Box::new(ProjectionError::NotStrictlyIncreasing { index: 2 });
        assert!(err.source().is_none());
        assert!(err.to_string().contains("index 2"));
    }
}
