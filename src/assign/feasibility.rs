use super::policy::{max_one_way_pairs, max_per_person};
use super::types::AssignError;

/// Decides without searching whether `n` participants can each call `requested` people
/// Returns the reason as an error when no valid assignment can exist
pub fn check_feasibility(n: usize, requested: usize) -> Result<(), AssignError> {
    if n < 2 {
        return Err(AssignError::InsufficientParticipants { count: n });
    }

    let max = max_per_person(n);
    if requested > max {
        return Err(AssignError::TooManyPerPerson {
            requested,
            participants: n,
            max,
        });
    }

    // Beyond this many edges some pair has to call each other.
    // Past the cap check n * requested stays below n(n-1)/2, so an overflow is never a shortfall
    let available = max_one_way_pairs(n);
    if let Some(required) = n.checked_mul(requested) {
        if required > available {
            return Err(AssignError::NotEnoughPairs {
                requested,
                participants: n,
                required,
                available,
            });
        }
    }

    Ok(())
}
