//! How many positions can a roof cover at once.
//!
//! Positions live on a line and are sorted in ascending order (duplicates allowed).
//! A roof spanning `span` units placed with its left edge on position `x` covers
//! every position in `[x, x + span]`. Trying each distinct position as left edge
//! and counting covered positions with a binary search gives the best placement
//! in O(n log n).
//!
//! Sortedness is never checked by the unchecked functions: unsorted inputs give
//! meaningless results. Use `checked_max_coverage` to validate first.
use crate::schedulers::schedule;
use crate::{InvalidInput, Policy};
use itertools::Itertools;
use std::ops::Range;

/// Index past the last element smaller or equal to `value`.
///
/// # Example
///
/// ```
/// use shots_and_roofs::upper_bound;
/// assert_eq!(upper_bound(&[2, 3, 5, 5, 5, 7, 9], 5), 5);
/// assert_eq!(upper_bound(&[2, 3, 7, 9], 5), 2);
/// assert_eq!(upper_bound(&[2, 3, 7, 9], 1), 0);
/// ```
pub fn upper_bound(positions: &[i64], value: i64) -> usize {
    positions.partition_point(|&p| p <= value)
}

/// Number of positions covered by a roof of given span
/// whose left edge sits on `positions[start]`.
///
/// Panics if `start` is out of bounds.
pub fn coverage_from(positions: &[i64], start: usize, span: u64) -> usize {
    let right_edge = positions[start].saturating_add_unsigned(span);
    upper_bound(positions, right_edge) - start
}

/// Convert the length of a roof into the span of the covered interval.
/// A roof of length 1 covers a single point.
pub fn span_from_roof_length(roof_length: u64) -> Result<u64, InvalidInput> {
    roof_length
        .checked_sub(1)
        .ok_or(InvalidInput::ZeroRoofLength)
}

fn is_new_start(positions: &[i64], index: usize) -> bool {
    index == 0 || positions[index] != positions[index - 1]
}

fn best_coverage_in(positions: &[i64], starts: Range<usize>, span: u64) -> usize {
    starts
        .filter(|&i| is_new_start(positions, i))
        .map(|i| coverage_from(positions, i, span))
        .fold(0, usize::max)
}

/// Maximum number of sorted positions covered by an interval of length `span`.
/// Return 0 if there are no positions.
///
/// # Example
///
/// ```
/// use shots_and_roofs::max_coverage;
/// assert_eq!(max_coverage(&[1, 2, 3, 10, 11, 12], 1), 2);
/// assert_eq!(max_coverage(&[1, 1, 1], 0), 3);
/// assert_eq!(max_coverage(&[5], 100), 1);
/// ```
pub fn max_coverage(positions: &[i64], span: u64) -> usize {
    let mut best = 0;
    for start in 0..positions.len() {
        if !is_new_start(positions, start) {
            continue;
        }
        best = best.max(coverage_from(positions, start, span));
    }
    best
}

/// Check positions are non empty and in ascending order.
pub fn validate_positions(positions: &[i64]) -> Result<(), InvalidInput> {
    if positions.is_empty() {
        return Err(InvalidInput::EmptyPositions);
    }
    match positions
        .iter()
        .tuple_windows()
        .position(|(previous, current)| current < previous)
    {
        Some(index) => Err(InvalidInput::UnsortedPositions { index: index + 1 }),
        None => Ok(()),
    }
}

/// Validate positions (non empty, ascending) then compute `max_coverage`.
pub fn checked_max_coverage(positions: &[i64], span: u64) -> Result<usize, InvalidInput> {
    validate_positions(positions)?;
    Ok(max_coverage(positions, span))
}

/// Same result as `max_coverage` but starting positions are
/// dispatched following the given scheduling policy.
///
/// # Example
///
/// ```
/// use shots_and_roofs::{max_coverage_with_policy, Policy};
/// let positions: Vec<i64> = (0..100_000).map(|p| p * 3).collect();
/// assert_eq!(max_coverage_with_policy(&positions, 10, Policy::Join(1000)), 4);
/// ```
pub fn max_coverage_with_policy(positions: &[i64], span: u64, policy: Policy) -> usize {
    let best = schedule(
        policy,
        0..positions.len(),
        &|starts: Range<usize>| best_coverage_in(positions, starts, span),
        &|left: usize, right: usize| left.max(right),
    );
    log::debug!(
        "best coverage of {} positions with span {} ({:?}): {}",
        positions.len(),
        span,
        policy,
        best
    );
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roof_length_is_shifted() {
        assert_eq!(span_from_roof_length(1), Ok(0));
        assert_eq!(span_from_roof_length(5), Ok(4));
        assert_eq!(span_from_roof_length(0), Err(InvalidInput::ZeroRoofLength));
    }

    #[test]
    fn duplicates_on_the_right_edge_are_covered() {
        assert_eq!(coverage_from(&[1, 3, 3, 3, 4], 0, 2), 4);
        assert_eq!(coverage_from(&[1, 3, 3, 3, 4], 1, 0), 3);
    }

    #[test]
    fn huge_spans_saturate() {
        assert_eq!(max_coverage(&[i64::MAX - 1, i64::MAX], u64::MAX), 2);
        assert_eq!(max_coverage(&[i64::MIN, 0, i64::MAX], u64::MAX), 3);
    }

    #[test]
    fn empty_positions() {
        assert_eq!(max_coverage(&[], 3), 0);
        assert_eq!(max_coverage_with_policy(&[], 3, Policy::Rayon(1)), 0);
        assert_eq!(
            checked_max_coverage(&[], 3),
            Err(InvalidInput::EmptyPositions)
        );
    }

    #[test]
    fn unsorted_positions_are_located() {
        assert_eq!(
            checked_max_coverage(&[1, 2, 2, 1, 5], 3),
            Err(InvalidInput::UnsortedPositions { index: 3 })
        );
        assert_eq!(checked_max_coverage(&[-4, -4, 0, 7], 3), Ok(2));
    }
}
