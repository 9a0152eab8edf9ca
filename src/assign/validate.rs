use std::collections::HashSet;
use thiserror::Error;

/// Why a candidate assignment was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("participant {person} makes {actual} calls instead of {expected}")]
    WrongOutDegree { person: usize, actual: usize, expected: usize },
    #[error("participant {person} calls themselves")]
    SelfCall { person: usize },
    #[error("participant {person} calls {target} more than once")]
    DuplicateCall { person: usize, target: usize },
    #[error("participants {a} and {b} call each other")]
    Reciprocal { a: usize, b: usize },
    #[error("participant {person} calls unknown participant {target}")]
    UnknownTarget { person: usize, target: usize },
    #[error("in-degree spread {spread} exceeds tolerance {tolerance}")]
    Unbalanced { spread: usize, tolerance: usize },
}

/// Counts incoming calls per participant
pub fn in_degrees(outgoing: &[Vec<usize>]) -> Vec<usize> {
    let mut degrees = vec![0; outgoing.len()];
    for targets in outgoing {
        for &target in targets {
            if let Some(d) = degrees.get_mut(target) {
                *d += 1;
            }
        }
    }
    degrees
}

/// Checks every structural rule and the balance tolerance
/// Returns the in-degree spread of an accepted assignment
pub fn validate(
    outgoing: &[Vec<usize>],
    per_person: usize,
    tolerance: usize,
) -> Result<usize, Violation> {
    let n = outgoing.len();
    let edges: HashSet<(usize, usize)> = outgoing
        .iter()
        .enumerate()
        .flat_map(|(person, targets)| targets.iter().map(move |&t| (person, t)))
        .collect();

    for (person, targets) in outgoing.iter().enumerate() {
        if targets.len() != per_person {
            return Err(Violation::WrongOutDegree {
                person,
                actual: targets.len(),
                expected: per_person,
            });
        }
        let mut seen = HashSet::new();
        for &target in targets {
            if target >= n {
                return Err(Violation::UnknownTarget { person, target });
            }
            if target == person {
                return Err(Violation::SelfCall { person });
            }
            if !seen.insert(target) {
                return Err(Violation::DuplicateCall { person, target });
            }
            if edges.contains(&(target, person)) {
                return Err(Violation::Reciprocal { a: person, b: target });
            }
        }
    }

    let degrees = in_degrees(outgoing);
    let max = degrees.iter().max().copied().unwrap_or(0);
    let min = degrees.iter().min().copied().unwrap_or(0);
    let spread = max - min;
    if spread > tolerance {
        return Err(Violation::Unbalanced { spread, tolerance });
    }
    Ok(spread)
}
