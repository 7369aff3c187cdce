//! All schedulers are written here.
use crate::Policy;
use std::ops::Range;

/// Map `map_op` on sub-ranges covering `range` and reduce the results with `op`.
/// Results are always reduced left with right so `op` needs to be associative
/// but not commutative.
pub(crate) fn schedule<O, MAP, OP>(
    scheduling_policy: Policy,
    range: Range<usize>,
    map_op: &MAP,
    op: &OP,
) -> O
where
    O: Send,
    MAP: Fn(Range<usize>) -> O + Sync,
    OP: Fn(O, O) -> O + Sync,
{
    match scheduling_policy {
        Policy::Join(sequential_fallback) => {
            schedule_join(range, map_op, op, sequential_fallback.max(1))
        }
        Policy::Rayon(sequential_fallback) => schedule_rayon(
            range,
            map_op,
            op,
            sequential_fallback.max(1),
            split_budget(),
        ),
        Policy::Sequential => schedule_sequential(range, map_op),
    }
}

fn split_budget() -> usize {
    (rayon::current_num_threads() as f64).log(2.0).ceil() as usize
}

fn divide(range: Range<usize>) -> (Range<usize>, Range<usize>) {
    let middle = range.start + range.len() / 2;
    (range.start..middle, middle..range.end)
}

fn schedule_sequential<O, MAP>(range: Range<usize>, map_op: &MAP) -> O
where
    MAP: Fn(Range<usize>) -> O + Sync,
{
    log::trace!("sequential block {:?}", range);
    map_op(range)
}

fn schedule_join<O, MAP, OP>(
    range: Range<usize>,
    map_op: &MAP,
    op: &OP,
    sequential_fallback: usize,
) -> O
where
    O: Send,
    MAP: Fn(Range<usize>) -> O + Sync,
    OP: Fn(O, O) -> O + Sync,
{
    if range.len() <= sequential_fallback {
        schedule_sequential(range, map_op)
    } else {
        let (left, right) = divide(range);
        let (left_result, right_result) = rayon::join(
            || schedule_join(left, map_op, op, sequential_fallback),
            || schedule_join(right, map_op, op, sequential_fallback),
        );
        op(left_result, right_result)
    }
}

fn schedule_rayon<O, MAP, OP>(
    range: Range<usize>,
    map_op: &MAP,
    op: &OP,
    sequential_fallback: usize,
    counter: usize,
) -> O
where
    O: Send,
    MAP: Fn(Range<usize>) -> O + Sync,
    OP: Fn(O, O) -> O + Sync,
{
    if range.len() <= sequential_fallback || counter == 0 {
        schedule_sequential(range, map_op)
    } else {
        let (left, right) = divide(range);
        let (left_result, right_result) = rayon::join_context(
            |_| schedule_rayon(left, map_op, op, sequential_fallback, counter - 1),
            |c| {
                schedule_rayon(
                    right,
                    map_op,
                    op,
                    sequential_fallback,
                    if c.migrated() {
                        split_budget() + 1 // the +1 mimics rayon's current behaviour
                    } else {
                        counter - 1
                    },
                )
            },
        );
        op(left_result, right_result)
    }
}
