use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("max wrong attempts must be > 0")]
    InvalidMaxWrongAttempts,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Answer policy and navigation knobs for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    max_wrong_attempts: u32,
    allow_retreat: bool,
}

impl SessionSettings {
    /// Wrong picks allowed on a question before the answer is revealed.
    pub const DEFAULT_MAX_WRONG_ATTEMPTS: u32 = 2;

    /// Creates custom session settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::InvalidMaxWrongAttempts` if `max_wrong_attempts` is zero.
    pub fn new(max_wrong_attempts: u32, allow_retreat: bool) -> Result<Self, SettingsError> {
        if max_wrong_attempts == 0 {
            return Err(SettingsError::InvalidMaxWrongAttempts);
        }
        Ok(Self {
            max_wrong_attempts,
            allow_retreat,
        })
    }

    /// One-shot policy: the first pick resolves the question and there is no
    /// way back to earlier questions.
    #[must_use]
    pub fn single_attempt() -> Self {
        Self {
            max_wrong_attempts: 1,
            allow_retreat: false,
        }
    }

    #[must_use]
    pub fn max_wrong_attempts(&self) -> u32 {
        self.max_wrong_attempts
    }

    #[must_use]
    pub fn allow_retreat(&self) -> bool {
        self.allow_retreat
    }
}

impl Default for SessionSettings {
    /// Two wrong picks before the answer is revealed, back-navigation enabled.
    fn default() -> Self {
        Self {
            max_wrong_attempts: Self::DEFAULT_MAX_WRONG_ATTEMPTS,
            allow_retreat: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allows_two_wrong_attempts_and_retreat() {
        let settings = SessionSettings::default();
        assert_eq!(settings.max_wrong_attempts(), 2);
        assert!(settings.allow_retreat());
    }

    #[test]
    fn single_attempt_disables_retry_and_retreat() {
        let settings = SessionSettings::single_attempt();
        assert_eq!(settings.max_wrong_attempts(), 1);
        assert!(!settings.allow_retreat());
    }

    #[test]
    fn zero_attempts_is_rejected() {
        let err = SessionSettings::new(0, true).unwrap_err();
        assert_eq!(err, SettingsError::InvalidMaxWrongAttempts);
    }

    #[test]
    fn custom_settings_round_trip() {
        let settings = SessionSettings::new(3, false).unwrap();
        assert_eq!(settings.max_wrong_attempts(), 3);
        assert!(!settings.allow_retreat());
    }
}
