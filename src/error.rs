//! Error type for inputs outside of the algorithms' domain.
//!
//! The algorithms themselves are total: `evaluate` and `max_coverage` never fail.
//! Only the `checked_*` entry points and the parsers return an `InvalidInput`.
use std::fmt;

/// Everything that can be wrong with an input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidInput {
    /// No events at all, so there is no first act to inspect.
    EmptySequence,
    /// A character which is neither `S` nor `R`.
    UnrecognizedSymbol {
        /// The offending character.
        symbol: char,
        /// Its index in the (trimmed) events string.
        position: usize,
    },
    /// No positions to cover.
    EmptyPositions,
    /// Positions are not in ascending order: `positions[index] < positions[index - 1]`.
    UnsortedPositions {
        /// First index breaking the order.
        index: usize,
    },
    /// A roof of length 0 covers nothing, not even a point.
    ZeroRoofLength,
    /// The `n k` line is missing.
    MissingHeader,
    /// A token which is not an integer.
    MalformedInteger {
        /// The token as found in the input.
        token: String,
    },
    /// The header announced a number of positions we did not get.
    LengthMismatch {
        /// Announced count.
        expected: usize,
        /// Count actually read.
        found: usize,
    },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptySequence => write!(f, "empty sequence of events"),
            InvalidInput::UnrecognizedSymbol { symbol, position } => write!(
                f,
                "unrecognized symbol {:?} at position {} (expected 'S' or 'R')",
                symbol, position
            ),
            InvalidInput::EmptyPositions => write!(f, "no positions to cover"),
            InvalidInput::UnsortedPositions { index } => write!(
                f,
                "positions are not sorted: position at index {} is smaller than its predecessor",
                index
            ),
            InvalidInput::ZeroRoofLength => write!(f, "roof length must be at least 1"),
            InvalidInput::MissingHeader => {
                write!(f, "missing header line (expected \"n k\")")
            }
            InvalidInput::MalformedInteger { token } => {
                write!(f, "malformed integer {:?}", token)
            }
            InvalidInput::LengthMismatch { expected, found } => write!(
                f,
                "expected {} positions but found {}",
                expected, found
            ),
        }
    }
}

impl std::error::Error for InvalidInput {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let e = InvalidInput::UnrecognizedSymbol {
            symbol: 'x',
            position: 3,
        };
        assert_eq!(
            e.to_string(),
            "unrecognized symbol 'x' at position 3 (expected 'S' or 'R')"
        );
        let e = InvalidInput::LengthMismatch {
            expected: 4,
            found: 2,
        };
        assert_eq!(e.to_string(), "expected 4 positions but found 2");
    }
}
