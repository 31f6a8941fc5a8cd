//! Progress through an evaluation run.

use serde::{Deserialize, Serialize};

use crate::session::EvaluationSession;

/// Answered/total counters for progress display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
}

impl Progress {
    /// Progress of a standard run: total is friends × traits.
    pub fn of_session(session: &EvaluationSession, trait_count: usize) -> Self {
        Self {
            answered: session.questions_answered,
            total: session.roster.len() * trait_count,
        }
    }

    /// Completion percentage in `[0.0, 100.0]`.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.answered as f64 / self.total as f64) * 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.answered >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amity_core::models::{EvaluationMode, Friend};

    #[test]
    fn percent_over_friends_times_traits() {
        let mut session = EvaluationSession::new("user-1", EvaluationMode::Standard);
        for name in ["Alice", "Bob"] {
            session.add_friend(Friend::new(name).unwrap()).unwrap();
        }
        let alice = session.roster.iter().next().unwrap().id.clone();
        session.record_rating("loyalty", &alice, 3);

        let progress = Progress::of_session(&session, 5);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.total, 10);
        assert!((progress.percent() - 10.0).abs() < f64::EPSILON);
        assert!(!progress.is_complete());
    }

    #[test]
    fn empty_total_is_zero_percent() {
        let progress = Progress::default();
        assert_eq!(progress.percent(), 0.0);
        assert!(!progress.is_complete());
    }
}
