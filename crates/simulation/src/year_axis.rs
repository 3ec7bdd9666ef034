//! Fixed year axes shared by the time-series modules.

use serde::Serialize;

use crate::error::ProjectionError;

/// An inclusive range of calendar years sampled every `step` years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearAxis {
    pub start: i32,
    pub end: i32,
    pub step: i32,
}

/// Yearly samples 2025..=2050 (26 points).
pub const ANNUAL_AXIS: YearAxis = YearAxis {
    start: 2025,
    end: 2050,
    step: 1,
};

/// Five-year samples 2025..=2075 (11 points).
pub const GENERATIONAL_AXIS: YearAxis = YearAxis {
    start: 2025,
    end: 2075,
    step: 5,
};

impl YearAxis {
    pub fn new(start: i32, end: i32, step: i32) -> Result<Self, ProjectionError> {
        if step <= 0 || end < start {
            return Err(ProjectionError::InvalidYearAxis { start, end, step });
        }
        Ok(Self { start, end, step })
    }

    /// Number of sampled years. `end` is included only when it lands on a step.
    pub fn len(&self) -> usize {
        if self.step <= 0 || self.end < self.start {
            return 0;
        }
        let span = i64::from(self.end) - i64::from(self.start);
        (span / i64::from(self.step)) as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn years(&self) -> Vec<i32> {
        (0..self.len())
            .map(|i| (i64::from(self.start) + i as i64 * i64::from(self.step)) as i32)
            .collect()
    }

    /// Calendar years since the start of the axis.
    pub fn elapsed_years(&self, year: i32) -> i64 {
        i64::from(year) - i64::from(self.start)
    }

    /// Index of `year` on the axis, if it is one of the sampled years.
    pub fn position(&self, year: i32) -> Option<usize> {
        let offset = self.elapsed_years(year);
        let step = i64::from(self.step);
        if offset < 0 || year > self.end || step <= 0 || offset % step != 0 {
            return None;
        }
        Some((offset / step) as usize)
    }
}
