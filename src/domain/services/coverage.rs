//! Variable domain generator
//!
//! Turns a numeric range into a finite, evenly spaced domain. `coverage` bounds
//! the step: the step is the largest divisor of the range width that does not
//! exceed it, so both bounds are always part of the domain.

/// Most points a single range may expand to
pub const MAX_POINTS: i64 = 100_000;

/// Invalid arguments to [`cover`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoverageError {
    #[error("coverage must be at least 1 (found {coverage})")]
    InvalidCoverage { coverage: i64 },

    #[error("range is reversed: minimum {minimum} is above maximum {maximum}")]
    InvalidRange { minimum: i64, maximum: i64 },

    #[error("range {minimum}..{maximum} is wider than a 64-bit integer")]
    RangeTooWide { minimum: i64, maximum: i64 },

    #[error("range {minimum}..{maximum} with coverage {coverage} exceeds {limit} points")]
    TooManyPoints {
        minimum: i64,
        maximum: i64,
        coverage: i64,
        limit: i64,
    },
}

/// Discretize `[minimum, maximum]` with a step of the largest divisor of
/// `maximum - minimum` that is at most `coverage`.
///
/// ```
/// use camp::domain::services::cover;
///
/// assert_eq!(cover(0, 10, 3).unwrap(), vec![0, 2, 4, 6, 8, 10]);
/// assert_eq!(cover(0, 10, 5).unwrap(), vec![0, 5, 10]);
/// ```
pub fn cover(minimum: i64, maximum: i64, coverage: i64) -> Result<Vec<i64>, CoverageError> {
    if coverage < 1 {
        return Err(CoverageError::InvalidCoverage { coverage });
    }
    if maximum < minimum {
        return Err(CoverageError::InvalidRange { minimum, maximum });
    }
    let width = maximum
        .checked_sub(minimum)
        .ok_or(CoverageError::RangeTooWide { minimum, maximum })?;
    if width == 0 {
        return Ok(vec![minimum]);
    }

    let steps = fewest_steps(width, coverage).ok_or(CoverageError::TooManyPoints {
        minimum,
        maximum,
        coverage,
        limit: MAX_POINTS,
    })?;
    let step = width / steps;

    Ok((0..=steps).map(|i| minimum + i * step).collect())
}

/// Smallest divisor `s` of `width` with `width / s <= coverage`, if the
/// resulting domain stays within [`MAX_POINTS`].
///
/// Searching step counts upwards from `ceil(width / coverage)` finds the
/// largest step first and never visits more than `MAX_POINTS` candidates.
fn fewest_steps(width: i64, coverage: i64) -> Option<i64> {
    let lowest = width / coverage + i64::from(width % coverage != 0);
    let highest = width.min(MAX_POINTS - 1);
    (lowest..=highest).find(|s| width % s == 0)
}
