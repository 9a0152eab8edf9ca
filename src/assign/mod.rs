pub mod types;
pub mod policy;
pub mod validate;
pub mod rotation;
pub mod feasibility;
pub mod generator;

pub use types::{Assignment, AssignmentResult, AssignError, CallMap};
pub use policy::max_per_person;
pub use feasibility::check_feasibility;
pub use generator::{assign, assign_with_rng, TWO_PERSON_NOTE};

/// Whether a request for `n` participants can be planned
/// Two people pass with a single one-way call even though the pair count rules it out
pub fn check_plan(n: usize, requested: usize) -> Result<(), AssignError> {
    if n == 2 {
        return Ok(());
    }
    check_feasibility(n, requested.max(1))
}

/// Full generation request: guards, feasibility check, then the randomized search
pub fn plan(participants: &[String], requested: usize) -> AssignmentResult {
    if requested == 0 {
        log::debug!("zero calls requested, treating as one");
    }
    let requested = requested.max(1);

    check_plan(participants.len(), requested)?;
    assign(participants, requested)
}
