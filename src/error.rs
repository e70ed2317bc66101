use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpiralError {
    #[error("Invalid point count {input:?}: expected an integer")]
    InvalidCount {
        input: String,
        #[source]
        source: ParseIntError,
    },

    // h = -1 + 2(k-1)/(N-1) divides by zero at N = 1
    #[error("Point count must be at least 2, got {0}")]
    TooFewPoints(i64),
}
