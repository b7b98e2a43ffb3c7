// error.rs - Validation failures for board and controller operations

use std::time::Duration;

use crate::board::{MAX_SIZE, MIN_SIZE};
use crate::controller::MIN_PERIOD;

/// Everything that can be rejected at a call site. All three kinds are
/// raised synchronously; the rejected value is never applied and the
/// previous configuration stays in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Width or height outside the supported `[MIN_SIZE, MAX_SIZE]` range.
    #[error("size should be between {min} and {max}, got {0}", min = MIN_SIZE, max = MAX_SIZE)]
    InvalidDimension(usize),

    /// Update period below `MIN_PERIOD`.
    #[error("period should be at least {min:?}, got {0:?}", min = MIN_PERIOD)]
    InvalidPeriod(Duration),

    /// Coordinate access outside the current grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
