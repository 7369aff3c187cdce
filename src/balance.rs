//! Check that every shot gets answered.
//!
//! A sequence is well behaved when it does not start with a retaliation
//! and when each shot is matched by a later retaliation.
//! Retaliations with no pending shot are absorbed: they neither go negative
//! nor count as a violation (apart from the very first event).
use crate::schedulers::schedule;
use crate::{Event, InvalidInput, Policy};
use std::fmt;
use std::ops::Range;

/// Outcome of checking a sequence, with the reason when it is not well behaved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every shot got its retaliation.
    WellBehaved,
    /// The sequence starts with a retaliation.
    InitiatedShooting,
    /// That many shots are still waiting for a retaliation.
    UnansweredShots(usize),
    /// Nothing to judge.
    NoEvents,
}

impl Verdict {
    /// Is this the good verdict ?
    pub fn is_well_behaved(self) -> bool {
        self == Verdict::WellBehaved
    }
    /// Human readable reason.
    pub fn reason(self) -> String {
        match self {
            Verdict::WellBehaved => "every shot was answered".to_string(),
            Verdict::InitiatedShooting => "the first act was a retaliation".to_string(),
            Verdict::UnansweredShots(count) => format!("{} shot(s) left unanswered", count),
            Verdict::NoEvents => "no events".to_string(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_well_behaved() {
            write!(f, "Good boy")
        } else {
            write!(f, "Bad boy")
        }
    }
}

/// Effect of a block of events on the pending shots counter.
///
/// Running a block on a counter `p` leaves `max(p - absorbed, 0) + pending`.
/// Blocks compose with `then`, which is associative with `Tally::default()`
/// as identity, so blocks can be scanned independently and reduced afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Retaliations which found no pending shot inside the block.
    pub absorbed: usize,
    /// Shots still pending at the end of the block.
    pub pending: usize,
}

impl Tally {
    /// Scan a block of events.
    pub fn scan(events: &[Event]) -> Self {
        events.iter().fold(Tally::default(), |t, e| t.push(*e))
    }
    /// Extend the block by one event.
    pub fn push(self, event: Event) -> Self {
        match event {
            Event::Shot => Tally {
                pending: self.pending + 1,
                ..self
            },
            Event::Retaliation if self.pending > 0 => Tally {
                pending: self.pending - 1,
                ..self
            },
            Event::Retaliation => Tally {
                absorbed: self.absorbed + 1,
                ..self
            },
        }
    }
    /// Block `self` followed by block `next`.
    pub fn then(self, next: Tally) -> Tally {
        if self.pending >= next.absorbed {
            Tally {
                absorbed: self.absorbed,
                pending: self.pending - next.absorbed + next.pending,
            }
        } else {
            Tally {
                absorbed: self.absorbed + next.absorbed - self.pending,
                pending: next.pending,
            }
        }
    }
    /// Run the block on a counter starting at `pending`.
    pub fn apply(self, pending: usize) -> usize {
        pending.saturating_sub(self.absorbed) + self.pending
    }
}

/// Number of shots left without retaliation after scanning all events.
pub fn pending_shots(events: &[Event]) -> usize {
    let mut pending = 0;
    for event in events {
        match event {
            Event::Shot => pending += 1,
            Event::Retaliation => {
                if pending > 0 {
                    pending -= 1
                }
            }
        }
    }
    pending
}

/// Judge a sequence of events.
pub fn verdict(events: &[Event]) -> Verdict {
    match events.first() {
        None => Verdict::NoEvents,
        Some(Event::Retaliation) => Verdict::InitiatedShooting,
        Some(Event::Shot) => match pending_shots(events) {
            0 => Verdict::WellBehaved,
            count => Verdict::UnansweredShots(count),
        },
    }
}

/// Return true if the sequence does not start with a retaliation
/// and all shots are answered.
/// An empty sequence is not well behaved.
///
/// # Example
///
/// ```
/// use shots_and_roofs::{evaluate, Event::*};
/// assert!(evaluate(&[Shot, Shot, Retaliation, Retaliation]));
/// assert!(!evaluate(&[Shot, Shot, Retaliation]));
/// assert!(!evaluate(&[Retaliation, Shot, Retaliation]));
/// ```
pub fn evaluate(events: &[Event]) -> bool {
    verdict(events).is_well_behaved()
}

/// Like `evaluate` but refuse empty sequences.
pub fn checked_evaluate(events: &[Event]) -> Result<bool, InvalidInput> {
    if events.is_empty() {
        Err(InvalidInput::EmptySequence)
    } else {
        Ok(evaluate(events))
    }
}

/// Same result as `evaluate` but blocks of events are scanned
/// following the given scheduling policy.
///
/// # Example
///
/// ```
/// use shots_and_roofs::{evaluate_with_policy, parse_events, Policy};
/// let events = parse_events(&"SSRR".repeat(10_000)).unwrap();
/// assert!(evaluate_with_policy(&events, Policy::Join(1000)));
/// ```
pub fn evaluate_with_policy(events: &[Event], policy: Policy) -> bool {
    if events.first() != Some(&Event::Shot) {
        return false;
    }
    let tally = schedule(
        policy,
        0..events.len(),
        &|range: Range<usize>| Tally::scan(&events[range]),
        &|left: Tally, right: Tally| left.then(right),
    );
    log::debug!(
        "scanned {} events with {:?}: {:?}",
        events.len(),
        policy,
        tally
    );
    tally.apply(0) == 0
}
