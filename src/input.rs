use crate::{span_from_roof_length, InvalidInput};
use std::str::FromStr;

/// Everything the rescue problem reads: a roof length and sorted positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RescueInput {
    /// Literal length of the roof (at least 1 for a meaningful input).
    pub roof_length: u64,
    /// Positions of everyone to cover.
    pub positions: Vec<i64>,
}

impl RescueInput {
    /// Span of the interval covered by the roof.
    pub fn span(&self) -> Result<u64, InvalidInput> {
        span_from_roof_length(self.roof_length)
    }
}

fn parse_integer<T: FromStr>(token: &str) -> Result<T, InvalidInput> {
    token.parse().map_err(|_| InvalidInput::MalformedInteger {
        token: token.to_string(),
    })
}

/// Parse a header line `n k` followed by `n` whitespace separated positions.
///
/// # Example
///
/// ```
/// use shots_and_roofs::parse_rescue_input;
/// let input = parse_rescue_input("6 2\n1 2 3 10 11 12\n").unwrap();
/// assert_eq!(input.roof_length, 2);
/// assert_eq!(input.span(), Ok(1));
/// assert_eq!(input.positions, vec![1, 2, 3, 10, 11, 12]);
/// ```
pub fn parse_rescue_input(text: &str) -> Result<RescueInput, InvalidInput> {
    let mut lines = text.lines().skip_while(|l| l.trim().is_empty());
    let header = lines.next().ok_or(InvalidInput::MissingHeader)?;
    let mut header_tokens = header.split_whitespace();
    let (count, roof_length) = match (header_tokens.next(), header_tokens.next()) {
        (Some(count), Some(roof_length)) => (
            parse_integer::<usize>(count)?,
            parse_integer::<u64>(roof_length)?,
        ),
        _ => return Err(InvalidInput::MissingHeader),
    };
    let positions = lines
        .flat_map(str::split_whitespace)
        .map(parse_integer::<i64>)
        .collect::<Result<Vec<_>, _>>()?;
    if positions.len() != count {
        return Err(InvalidInput::LengthMismatch {
            expected: count,
            found: positions.len(),
        });
    }
    Ok(RescueInput {
        roof_length,
        positions,
    })
}
