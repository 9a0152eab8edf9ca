use std::collections::BTreeMap;
use serde::Serialize;
use thiserror::Error;

/// Who calls whom: participant name -> the people they call, in pick order
pub type CallMap = BTreeMap<String, Vec<String>>;

/// An accepted assignment for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub calls: CallMap,
    pub per_person: usize, // effective count after clamping
    pub note: Option<String>,
}

/// Either an accepted assignment or the reason none could be produced
pub type AssignmentResult = Result<Assignment, AssignError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error("need at least two participants (got {count})")]
    InsufficientParticipants { count: usize },

    #[error("{requested} calls per person is too many for {participants} participants: at most {max} are possible, please choose a lower number")]
    TooManyPerPerson {
        requested: usize,
        participants: usize,
        max: usize,
    },

    #[error("{participants} participants making {requested} calls each need {required} one-way pairs, but only {available} exist")]
    NotEnoughPairs {
        requested: usize,
        participants: usize,
        required: usize,
        available: usize,
    },

    #[error("no valid assignment of {requested} calls for {participants} participants found after {attempts} attempts; try fewer calls per person or add participants")]
    SearchExhausted {
        requested: usize,
        participants: usize,
        attempts: usize,
    },
}

impl Assignment {
    /// Number of people calling each participant
    pub fn in_degrees(&self) -> BTreeMap<&str, usize> {
        let mut degrees: BTreeMap<&str, usize> =
            self.calls.keys().map(|name| (name.as_str(), 0)).collect();
        for targets in self.calls.values() {
            for target in targets {
                *degrees.entry(target.as_str()).or_insert(0) += 1;
            }
        }
        degrees
    }

    /// Difference between the most-called and least-called participant
    pub fn spread(&self) -> usize {
        let degrees = self.in_degrees();
        let max = degrees.values().max().copied().unwrap_or(0);
        let min = degrees.values().min().copied().unwrap_or(0);
        max - min
    }

    pub fn report(&self) -> String {
        crate::display::format_report(&self.calls)
    }
}
