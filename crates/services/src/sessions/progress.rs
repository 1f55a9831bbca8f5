/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    /// Presentation position; equals `total` on the results screen.
    pub position: usize,
    /// Distinct questions with a recorded outcome.
    pub answered: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// `(position + 1) / total` while in progress, `1.0` once complete.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 || self.is_complete {
            return 1.0;
        }
        (self.position + 1) as f64 / self.total as f64
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fraction_counts_the_current_question() {
        let progress = SessionProgress {
            total: 4,
            position: 0,
            answered: 0,
            is_complete: false,
        };
        assert!((progress.fraction() - 0.25).abs() < f64::EPSILON);
        assert_eq!(progress.remaining(), 4);
    }

    #[test]
    fn complete_session_is_full() {
        let progress = SessionProgress {
            total: 2,
            position: 2,
            answered: 2,
            is_complete: true,
        };
        assert!((progress.fraction() - 1.0).abs() < f64::EPSILON);
        assert_eq!(progress.remaining(), 0);
    }
}
