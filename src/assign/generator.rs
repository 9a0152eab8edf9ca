use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::policy::{attempt_budget, balance_tolerance, effective_count};
use super::rotation::rotation_assignment;
use super::types::{AssignError, Assignment, AssignmentResult, CallMap};
use super::validate::validate;

pub const TWO_PERSON_NOTE: &str =
    "With only two participants just one direction is possible without a reciprocal call";
const ROTATION_NOTE: &str =
    "Random search found no balanced assignment, so a rotation over a shuffled order was used";

/// Assigns call targets to every participant with a freshly seeded random source
/// Repeated calls on the same input give different valid assignments
pub fn assign(participants: &[String], requested: usize) -> AssignmentResult {
    let mut rng = StdRng::seed_from_u64(fresh_seed());
    assign_with_rng(participants, requested, &mut rng)
}

/// Same as `assign` but draws all randomness from `rng`
pub fn assign_with_rng<R: Rng + ?Sized>(
    participants: &[String],
    requested: usize,
    rng: &mut R,
) -> AssignmentResult {
    let n = participants.len();
    if n < 2 {
        return Err(AssignError::InsufficientParticipants { count: n });
    }

    if n == 2 {
        let mut calls = CallMap::new();
        calls.insert(participants[0].clone(), vec![participants[1].clone()]);
        calls.insert(participants[1].clone(), Vec::new());
        return Ok(Assignment {
            calls,
            per_person: 1,
            note: Some(TWO_PERSON_NOTE.to_string()),
        });
    }

    let per_person = effective_count(n, requested);
    let tolerance = balance_tolerance(n);
    let budget = attempt_budget(n);

    for attempt in 1..=budget {
        let Some(outgoing) = build_candidate(n, per_person, rng) else {
            continue;
        };
        match validate(&outgoing, per_person, tolerance) {
            Ok(spread) => {
                log::debug!(
                    "accepted attempt {} of {} for {} participants (spread {})",
                    attempt,
                    budget,
                    n,
                    spread
                );
                return Ok(to_assignment(participants, &outgoing, per_person, None));
            }
            Err(violation) => log::trace!("attempt {} rejected: {}", attempt, violation),
        }
    }

    // Rotation gives spread 0, so it always passes when it exists
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    if let Some(outgoing) = rotation_assignment(&order, per_person) {
        if validate(&outgoing, per_person, tolerance).is_ok() {
            log::info!(
                "random search exhausted after {} attempts, using rotation for {} participants",
                budget,
                n
            );
            let note = Some(ROTATION_NOTE.to_string());
            return Ok(to_assignment(participants, &outgoing, per_person, note));
        }
    }

    log::warn!(
        "no assignment of {} calls found for {} participants after {} attempts",
        per_person,
        n,
        budget
    );
    Err(AssignError::SearchExhausted {
        requested,
        participants: n,
        attempts: budget,
    })
}

/// One randomized construction; None when someone runs out of eligible targets
fn build_candidate<R: Rng + ?Sized>(
    n: usize,
    per_person: usize,
    rng: &mut R,
) -> Option<Vec<Vec<usize>>> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &person in &order {
        let needed = per_person.saturating_sub(outgoing[person].len());
        if needed == 0 {
            continue;
        }

        // Skip anyone already called, and anyone who already calls this person
        let candidates: Vec<usize> = (0..n)
            .filter(|&other| {
                other != person
                    && !outgoing[person].contains(&other)
                    && !outgoing[other].contains(&person)
            })
            .collect();
        if candidates.len() < needed {
            return None;
        }

        let picked: Vec<usize> = candidates.choose_multiple(rng, needed).copied().collect();
        outgoing[person].extend(picked);
    }
    Some(outgoing)
}

fn to_assignment(
    participants: &[String],
    outgoing: &[Vec<usize>],
    per_person: usize,
    note: Option<String>,
) -> Assignment {
    let calls = outgoing
        .iter()
        .enumerate()
        .map(|(person, targets)| {
            let names: Vec<String> = targets.iter().map(|&t| participants[t].clone()).collect();
            (participants[person].clone(), names)
        })
        .collect();
    Assignment { calls, per_person, note }
}

/// Wall-clock nanoseconds mixed with a thread-local random draw
fn fresh_seed() -> u64 {
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    nanos ^ rand::thread_rng().gen::<u64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("P{:02}", i)).collect()
    }

    fn assert_valid(result: &Assignment, participants: &[String]) {
        assert_eq!(result.calls.len(), participants.len());
        for name in participants {
            let targets = &result.calls[name];
            assert_eq!(targets.len(), result.per_person, "{} has wrong out-degree", name);
            assert!(!targets.contains(name), "{} calls themselves", name);
            let unique: HashSet<&String> = targets.iter().collect();
            assert_eq!(unique.len(), targets.len(), "{} has duplicate targets", name);
            for target in targets {
                assert!(
                    !result.calls[target].contains(name),
                    "{} and {} call each other",
                    name,
                    target
                );
            }
        }
        assert!(result.spread() <= balance_tolerance(participants.len()));
    }

    #[test]
    fn one_participant_is_an_error() {
        let result = assign(&["A".to_string()], 3);
        let err = result.unwrap_err();
        assert_eq!(err, AssignError::InsufficientParticipants { count: 1 });
        assert!(err.to_string().contains("need at least two participants"));
        assert!(assign(&[], 1).is_err());
    }

    #[test]
    fn two_participants_get_one_direction() {
        let participants = vec!["A".to_string(), "B".to_string()];
        let result = assign(&participants, 2).unwrap();
        assert_eq!(result.per_person, 1);
        assert_eq!(result.calls["A"], vec!["B".to_string()]);
        assert!(result.calls["B"].is_empty());
        assert!(result.note.is_some());
    }

    #[test]
    fn eleven_people_two_calls_each() {
        let participants = names(11);
        let result = assign(&participants, 2).unwrap();
        assert_eq!(result.per_person, 2);
        assert!(result.note.is_none() || result.note.as_deref() == Some(ROTATION_NOTE));
        assert_valid(&result, &participants);
    }

    #[test]
    fn every_feasible_configuration_succeeds() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 3..=14 {
            let participants = names(n);
            for k in 1..=crate::assign::policy::max_per_person(n) {
                let result = assign_with_rng(&participants, k, &mut rng)
                    .unwrap_or_else(|e| panic!("n={} k={} failed: {}", n, k, e));
                assert_eq!(result.per_person, k);
                assert_valid(&result, &participants);
            }
        }
    }

    #[test]
    fn three_people_cannot_each_call_two() {
        let participants = names(3);
        // Clamped to 2 calls each, which always needs a reciprocal pair
        let err = assign_with_rng(&participants, 10, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(
            err,
            AssignError::SearchExhausted { requested: 10, participants: 3, attempts: 200 }
        );
        assert!(err.to_string().contains("try fewer calls"));
    }

    #[test]
    fn oversized_request_is_clamped_before_searching() {
        let participants = names(5);
        assert_eq!(effective_count(participants.len(), 10), 4);
        // Every one of the 5 * 4 edges would need a distinct one-way pair, but only 10 exist
        let err = assign_with_rng(&participants, 10, &mut StdRng::seed_from_u64(3)).unwrap_err();
        assert_eq!(
            err,
            AssignError::SearchExhausted { requested: 10, participants: 5, attempts: 250 }
        );
        let ok = assign_with_rng(&participants, 2, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(ok.per_person, effective_count(5, 2));
        assert_valid(&ok, &participants);
    }

    #[test]
    fn same_seed_same_assignment() {
        let participants = names(9);
        let a = assign_with_rng(&participants, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = assign_with_rng(&participants, 3, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn repeated_generation_varies() {
        let participants = names(12);
        let first = assign(&participants, 3).unwrap();
        let differs = (0..20).any(|_| assign(&participants, 3).unwrap() != first);
        assert!(differs);
    }
}
