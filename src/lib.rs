//! This crate provides two small sequence algorithms:
//! checking that every shot in a sequence of events gets answered by a retaliation
//! and finding how many positions a fixed length roof can cover at once.
//!
//! Both algorithms come in a sequential flavour and in a flavour parametrized
//! by a scheduling `Policy` which splits the work between rayon's threads.
#![warn(clippy::all)]
#![deny(missing_docs)]

/// Sequence balance checker.
pub mod balance;
pub use balance::{
    checked_evaluate, evaluate, evaluate_with_policy, pending_shots, verdict, Tally, Verdict,
};
/// Interval coverage maximizer.
pub mod coverage;
pub use coverage::{
    checked_max_coverage, coverage_from, max_coverage, max_coverage_with_policy,
    span_from_roof_length, upper_bound, validate_positions,
};
mod error;
pub use error::InvalidInput;
/// Event symbols.
pub mod events;
pub use events::{parse_events, Event};
/// Textual input formats.
pub mod input;
pub use input::{parse_rescue_input, RescueInput};
/// Different available scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Just run sequentially.
    Sequential,
    /// Split recursively until given size is reached.
    Join(usize),
    /// Split like rayon does: a limited number of times,
    /// and again when stolen. Never below given size.
    Rayon(usize),
}

impl Default for Policy {
    fn default() -> Self {
        Policy::Rayon(4096)
    }
}

/// All scheduling algorithms.
pub(crate) mod schedulers;
