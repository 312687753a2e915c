//! Quiz configuration.
//!
//! Every constant that shapes a session lives here and can be overridden
//! from the command line.

use std::time::Duration;

/// Number of questions presented per session.
pub const DEFAULT_QUESTION_COUNT: usize = 48;

/// Wall-clock budget for a session (120 minutes).
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(120 * 60);

/// Decimal places used when reporting percentages.
pub const DEFAULT_PERCENTAGE_DECIMALS: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub question_count: usize,
    pub time_budget: Duration,
    pub percentage_decimals: u32,
    /// Also check the deadline each time an invalid answer is re-prompted,
    /// not only at question boundaries.
    pub recheck_deadline_on_retry: bool,
}

impl QuizConfig {
    pub fn with_question_count(mut self, count: usize) -> Self {
        self.question_count = count;
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_percentage_decimals(mut self, decimals: u32) -> Self {
        self.percentage_decimals = decimals;
        self
    }

    pub fn with_recheck_deadline_on_retry(mut self, recheck: bool) -> Self {
        self.recheck_deadline_on_retry = recheck;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.question_count == 0 {
            return Err("question count must be at least 1".to_string());
        }
        if self.time_budget.is_zero() {
            return Err("time budget must be greater than zero".to_string());
        }
        // f64 keeps about 15 significant digits.
        if self.percentage_decimals > 6 {
            return Err("percentage decimals must be at most 6".to_string());
        }
        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: DEFAULT_QUESTION_COUNT,
            time_budget: DEFAULT_TIME_BUDGET,
            percentage_decimals: DEFAULT_PERCENTAGE_DECIMALS,
            recheck_deadline_on_retry: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = QuizConfig::default();
        assert_eq!(config.question_count, 48);
        assert_eq!(config.time_budget, Duration::from_secs(7200));
        assert_eq!(config.percentage_decimals, 1);
        assert!(config.recheck_deadline_on_retry);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        assert!(QuizConfig::default().with_question_count(0).validate().is_err());
        assert!(
            QuizConfig::default()
                .with_time_budget(Duration::ZERO)
                .validate()
                .is_err()
        );
        assert!(
            QuizConfig::default()
                .with_percentage_decimals(7)
                .validate()
                .is_err()
        );
    }
}
