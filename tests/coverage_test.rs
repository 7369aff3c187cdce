use rand::random;
use shots_and_roofs::{
    checked_max_coverage, max_coverage, max_coverage_with_policy, parse_rescue_input, InvalidInput,
    Policy,
};

fn random_sorted_positions(len: usize, range: u64) -> Vec<i64> {
    let mut v: Vec<i64> = (0..len)
        .map(|_| (random::<u64>() % range) as i64 - (range / 2) as i64)
        .collect();
    v.sort();
    v
}

/// Try every window with a linear count, every index as left edge.
fn brute_force(positions: &[i64], span: u64) -> usize {
    positions
        .iter()
        .map(|&left| {
            positions
                .iter()
                .filter(|&&p| p >= left && p <= left + span as i64)
                .count()
        })
        .max()
        .unwrap_or(0)
}

#[test]
fn exercise_samples() {
    assert_eq!(max_coverage(&[1, 2, 3, 10, 11, 12], 1), 2);
    assert_eq!(max_coverage(&[1, 1, 1], 0), 3);
    assert_eq!(max_coverage(&[5], 100), 1);
}

#[test]
fn roof_length_from_text() {
    let input = parse_rescue_input("5 5\n2 5 10 12 15\n").unwrap();
    assert_eq!(max_coverage(&input.positions, input.span().unwrap()), 2);
    let input = parse_rescue_input("6 10\n1 11 30 34 35 37\n").unwrap();
    assert_eq!(max_coverage(&input.positions, input.span().unwrap()), 4);
}

#[test]
fn policies_agree_with_brute_force() {
    let policies = [
        Policy::Sequential,
        Policy::Join(1),
        Policy::Join(10),
        Policy::Rayon(1),
        Policy::Rayon(32),
    ];
    for len in (1..10).chain(100..105).chain(2000..2002) {
        for &span in &[0, 1, 5, 40] {
            let positions = random_sorted_positions(len, 3 * len as u64);
            let expected = brute_force(&positions, span);
            assert_eq!(max_coverage(&positions, span), expected);
            for policy in &policies {
                assert_eq!(
                    max_coverage_with_policy(&positions, span, *policy),
                    expected,
                    "{:?}",
                    policy
                );
            }
        }
    }
}

#[test]
fn coverage_stays_within_bounds() {
    for len in 1..50 {
        let positions = random_sorted_positions(len, 20);
        let best = checked_max_coverage(&positions, random::<u64>() % 10).unwrap();
        assert!(best >= 1);
        assert!(best <= positions.len());
    }
}

#[test]
fn checked_rejects_unsorted() {
    assert_eq!(
        checked_max_coverage(&[3, 2, 1], 1),
        Err(InvalidInput::UnsortedPositions { index: 1 })
    );
}
