use crate::InvalidInput;
use std::convert::TryFrom;
use std::fmt;

/// One act in a sequence of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Someone shoots at us: it needs a later retaliation.
    Shot,
    /// We shoot back.
    Retaliation,
}

impl Event {
    /// Decode a single character code (`'S'` or `'R'`).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(Event::Shot),
            'R' => Some(Event::Retaliation),
            _ => None,
        }
    }
    /// Return our single character code.
    pub fn code(self) -> char {
        match self {
            Event::Shot => 'S',
            Event::Retaliation => 'R',
        }
    }
}

impl TryFrom<char> for Event {
    type Error = char;
    fn try_from(code: char) -> Result<Self, Self::Error> {
        Event::from_code(code).ok_or(code)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Parse a compact string of event codes like `"SRSSRR"`.
/// Surrounding whitespace is ignored.
///
/// # Example
///
/// ```
/// use shots_and_roofs::{parse_events, Event};
/// assert_eq!(
///     parse_events("SR\n").unwrap(),
///     vec![Event::Shot, Event::Retaliation]
/// );
/// assert!(parse_events("").is_err());
/// ```
pub fn parse_events(line: &str) -> Result<Vec<Event>, InvalidInput> {
    let events = line
        .trim()
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Event::try_from(symbol)
                .map_err(|symbol| InvalidInput::UnrecognizedSymbol { symbol, position })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if events.is_empty() {
        Err(InvalidInput::EmptySequence)
    } else {
        Ok(events)
    }
}
