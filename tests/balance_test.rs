use rand::random;
use shots_and_roofs::{
    evaluate, evaluate_with_policy, parse_events, pending_shots, verdict, Event, Policy, Verdict,
};

fn random_events(len: usize) -> Vec<Event> {
    (0..len)
        .map(|_| {
            if random::<bool>() {
                Event::Shot
            } else {
                Event::Retaliation
            }
        })
        .collect()
}

/// Matching shots with a stack, the obvious way.
fn brute_force(events: &[Event]) -> bool {
    if events.first() != Some(&Event::Shot) {
        return false;
    }
    let mut stack = Vec::new();
    for e in events {
        match e {
            Event::Shot => stack.push(e),
            Event::Retaliation => {
                stack.pop();
            }
        }
    }
    stack.is_empty()
}

#[test]
fn exercise_samples() {
    for (codes, expected) in &[
        ("R", false),
        ("RSR", false),
        ("SR", true),
        ("SSR", false),
        ("SSRR", true),
        ("SRRS", false),
        ("SRRSR", true),
    ] {
        let events = parse_events(codes).unwrap();
        assert_eq!(evaluate(&events), *expected, "{}", codes);
    }
}

#[test]
fn policies_agree_with_brute_force() {
    let policies = [
        Policy::Sequential,
        Policy::Join(1),
        Policy::Join(16),
        Policy::Rayon(1),
        Policy::Rayon(64),
        Policy::default(),
    ];
    for len in (1..10).chain(100..110).chain(10_000..10_003) {
        let mut events = random_events(len);
        events[0] = Event::Shot;
        let expected = brute_force(&events);
        assert_eq!(evaluate(&events), expected);
        for policy in &policies {
            assert_eq!(evaluate_with_policy(&events, *policy), expected, "{:?}", policy);
        }
    }
}

#[test]
fn balanced_sequences_are_well_behaved() {
    for len in (1..10).chain(1000..1005) {
        let mut events = vec![Event::Shot; len];
        events.extend(vec![Event::Retaliation; len]);
        assert_eq!(verdict(&events), Verdict::WellBehaved);
        assert!(evaluate_with_policy(&events, Policy::Join(7)));
        events.push(Event::Shot);
        assert_eq!(verdict(&events), Verdict::UnansweredShots(1));
        assert_eq!(pending_shots(&events), 1);
    }
}

#[test]
fn evaluation_is_pure() {
    let events = random_events(500);
    let first = evaluate(&events);
    for _ in 0..10 {
        assert_eq!(evaluate(&events), first);
    }
}
