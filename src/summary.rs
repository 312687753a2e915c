//! Results of a finished session.
//!
//! Everything here is derived from the recorded answers and the question
//! bank; nothing is accumulated separately while the session runs.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::data::QuestionBank;
use crate::models::AnswerRecord;
use crate::session::Termination;

/// Qualitative performance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Great,
    Good,
    KeepStudying,
    MorePracticeNeeded,
}

impl Tier {
    /// Lower bounds are inclusive.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Tier::Excellent
        } else if percentage >= 80.0 {
            Tier::Great
        } else if percentage >= 70.0 {
            Tier::Good
        } else if percentage >= 60.0 {
            Tier::KeepStudying
        } else {
            Tier::MorePracticeNeeded
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Great => "great",
            Tier::Good => "good",
            Tier::KeepStudying => "keep studying",
            Tier::MorePracticeNeeded => "more practice needed",
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Tier::Excellent => "EXCELLENT! You have mastered the OpenAI Agents SDK!",
            Tier::Great => "GREAT JOB! Strong understanding of the SDK.",
            Tier::Good => "GOOD WORK! Solid foundation established.",
            Tier::KeepStudying => "KEEP STUDYING! You're on the right track.",
            Tier::MorePracticeNeeded => "MORE PRACTICE NEEDED!",
        }
    }

    pub fn advice(self) -> &'static [&'static str] {
        match self {
            Tier::Excellent => &["You're ready for advanced agentic AI development."],
            Tier::Great => &["Review missed concepts for complete mastery."],
            Tier::Good => &["Focus on areas where you struggled for improvement."],
            Tier::KeepStudying => &["Revisit the documentation and practice more examples."],
            Tier::MorePracticeNeeded => &[
                "Spend more time with the OpenAI Agents SDK documentation.",
                "Consider working through more hands-on examples.",
            ],
        }
    }
}

/// Per-category tally. Only questions answered with a label count; skips do
/// not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub correct: usize,
    pub total: usize,
}

impl CategoryStats {
    pub fn percentage(&self, decimals: u32) -> f64 {
        percentage_of(self.correct, self.total, decimals)
    }

    /// `+` at 80% and above, `~` at 60% and above, `-` otherwise.
    pub fn indicator(&self) -> char {
        let percentage = ratio_percentage(self.correct, self.total);
        if percentage >= 80.0 {
            '+'
        } else if percentage >= 60.0 {
            '~'
        } else {
            '-'
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    /// Correct answers.
    pub score: usize,
    /// Answered plus skipped.
    pub questions_processed: usize,
    pub questions_answered: usize,
    pub questions_skipped: usize,
    /// Size of the question bank.
    pub total_questions: usize,
    pub percentage: f64,
    #[serde(serialize_with = "serialize_seconds", rename = "elapsed_seconds")]
    pub elapsed: Duration,
    pub categories: Vec<CategoryStats>,
    /// `None` when nothing was processed.
    pub tier: Option<Tier>,
    /// `None` when the session was finalized without ever running.
    pub termination: Option<Termination>,
    /// One record per bank question; unprocessed ones are `NotReached`.
    pub answers: Vec<AnswerRecord>,
    #[serde(skip)]
    pub percentage_decimals: u32,
}

impl QuizSummary {
    /// Builds the summary from the first `processed` records.
    pub fn compute(
        bank: &QuestionBank,
        records: &[AnswerRecord],
        processed: usize,
        elapsed: Duration,
        termination: Option<Termination>,
        decimals: u32,
    ) -> Self {
        let processed = processed.min(records.len()).min(bank.len());
        let records = &records[..processed];

        let mut score = 0;
        let mut questions_skipped = 0;
        let mut categories: Vec<CategoryStats> = Vec::new();

        for (question, record) in bank.iter().zip(records) {
            let Some(choice) = record.choice() else {
                questions_skipped += 1;
                continue;
            };
            let correct = question.is_correct(choice);
            if correct {
                score += 1;
            }

            let position = match categories.iter().position(|c| c.category == question.category) {
                Some(position) => position,
                None => {
                    categories.push(CategoryStats {
                        category: question.category.clone(),
                        correct: 0,
                        total: 0,
                    });
                    categories.len() - 1
                }
            };
            let stats = &mut categories[position];
            stats.total += 1;
            if correct {
                stats.correct += 1;
            }
        }

        let percentage = percentage_of(score, processed, decimals);
        // Rounding is for display only; tiers use the exact ratio.
        let exact = ratio_percentage(score, processed);
        let tier = (processed > 0).then(|| Tier::from_percentage(exact));

        let mut answers = records.to_vec();
        answers.resize(bank.len(), AnswerRecord::NotReached);

        Self {
            score,
            questions_processed: processed,
            questions_answered: processed - questions_skipped,
            questions_skipped,
            total_questions: bank.len(),
            percentage,
            elapsed,
            categories,
            tier,
            termination,
            answers,
            percentage_decimals: decimals,
        }
    }

    /// Percentage as shown to the player: `"0%"` when nothing was processed.
    pub fn percentage_display(&self) -> String {
        if self.questions_processed == 0 {
            "0%".to_string()
        } else {
            format!(
                "{:.*}%",
                self.percentage_decimals as usize,
                self.percentage
            )
        }
    }
}

/// `100 * part / whole`, unrounded; 0 when `whole` is 0.
pub fn ratio_percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// [`ratio_percentage`] rounded to `decimals` places.
pub fn percentage_of(part: usize, whole: usize, decimals: u32) -> f64 {
    round_to(ratio_percentage(part, whole), decimals)
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats a duration as `m:ss`, truncating partial seconds.
pub fn format_clock(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn serialize_seconds<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    fn bank() -> QuestionBank {
        QuestionBank::builtin().unwrap()
    }

    #[test]
    fn test_tier_boundaries() {
        let cases = [
            (100.0, Tier::Excellent),
            (90.0, Tier::Excellent),
            (89.9, Tier::Great),
            (80.0, Tier::Great),
            (79.9, Tier::Good),
            (70.0, Tier::Good),
            (69.9, Tier::KeepStudying),
            (60.0, Tier::KeepStudying),
            (59.9, Tier::MorePracticeNeeded),
            (0.0, Tier::MorePracticeNeeded),
        ];
        for (percentage, tier) in cases {
            assert_eq!(Tier::from_percentage(percentage), tier, "at {percentage}");
        }
        assert_eq!(Tier::KeepStudying.label(), "keep studying");
        assert_eq!(Tier::MorePracticeNeeded.label(), "more practice needed");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(66.666_666, 1), 66.7);
        assert_eq!(round_to(33.333_333, 1), 33.3);
        assert_eq!(round_to(12.345, 0), 12.0);
        assert_eq!(percentage_of(3, 5, 1), 60.0);
        assert_eq!(percentage_of(2, 3, 1), 66.7);
        assert_eq!(percentage_of(1, 0, 1), 0.0);
        assert_eq!(ratio_percentage(43, 48), 43.0 / 48.0 * 100.0);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(Duration::ZERO), "0:00");
        assert_eq!(format_clock(Duration::from_millis(59_999)), "0:59");
        assert_eq!(format_clock(Duration::from_secs(61)), "1:01");
        assert_eq!(format_clock(Duration::from_secs(7200)), "120:00");
    }

    #[test]
    fn test_compute_with_nothing_processed() {
        let summary = QuizSummary::compute(&bank(), &[], 0, Duration::ZERO, None, 1);

        assert_eq!(summary.score, 0);
        assert_eq!(summary.percentage, 0.0);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.tier, None);
        assert_eq!(summary.percentage_display(), "0%");
        assert_eq!(summary.answers.len(), 48);
        assert!(summary.answers.iter().all(|a| *a == AnswerRecord::NotReached));
    }

    #[test]
    fn test_compute_skips_excluded_from_categories() {
        // Q1 Architecture (B), Q2 Architecture (B), Q3 Runner (C).
        let records = [
            AnswerRecord::Answered(Choice::B),
            AnswerRecord::Skipped,
            AnswerRecord::Answered(Choice::A),
        ];
        let summary = QuizSummary::compute(&bank(), &records, 3, Duration::ZERO, None, 1);

        assert_eq!(summary.score, 1);
        assert_eq!(summary.questions_processed, 3);
        assert_eq!(summary.questions_answered, 2);
        assert_eq!(summary.questions_skipped, 1);
        assert_eq!(summary.percentage, 33.3);
        assert_eq!(summary.tier, Some(Tier::MorePracticeNeeded));
        assert_eq!(
            summary.categories,
            vec![
                CategoryStats {
                    category: "Architecture".to_string(),
                    correct: 1,
                    total: 1
                },
                CategoryStats {
                    category: "Runner".to_string(),
                    correct: 0,
                    total: 1
                },
            ]
        );
        let category_total: usize = summary.categories.iter().map(|c| c.total).sum();
        assert_eq!(category_total, summary.questions_answered);
    }

    #[test]
    fn test_compute_only_counts_processed_prefix() {
        let records = [
            AnswerRecord::Answered(Choice::B),
            AnswerRecord::Answered(Choice::B),
        ];
        let summary = QuizSummary::compute(&bank(), &records, 1, Duration::ZERO, None, 1);

        assert_eq!(summary.score, 1);
        assert_eq!(summary.questions_processed, 1);
        assert_eq!(summary.answers[1], AnswerRecord::NotReached);
    }

    #[test]
    fn test_tier_ignores_display_rounding() {
        let bank = bank();
        let records: Vec<AnswerRecord> = bank
            .iter()
            .enumerate()
            .map(|(i, q)| {
                if i < 43 {
                    AnswerRecord::Answered(q.answer)
                } else {
                    let wrong = Choice::ALL.into_iter().find(|c| *c != q.answer).unwrap();
                    AnswerRecord::Answered(wrong)
                }
            })
            .collect();

        let one = QuizSummary::compute(&bank, &records, 48, Duration::ZERO, None, 1);
        let zero = QuizSummary::compute(&bank, &records, 48, Duration::ZERO, None, 0);

        assert_eq!(one.percentage, 89.6);
        assert_eq!(zero.percentage, 90.0);
        assert_eq!(one.tier, Some(Tier::Great));
        assert_eq!(zero.tier, Some(Tier::Great));
    }

    #[test]
    fn test_category_indicator() {
        let stats = |correct, total| CategoryStats {
            category: "X".to_string(),
            correct,
            total,
        };
        assert_eq!(stats(4, 5).indicator(), '+');
        assert_eq!(stats(3, 5).indicator(), '~');
        assert_eq!(stats(1, 2).indicator(), '-');
        assert_eq!(stats(2, 3).percentage(1), 66.7);
        // 79.99% shows as 80% at one decimal but is still below the mark.
        assert_eq!(stats(7999, 10000).percentage(1), 80.0);
        assert_eq!(stats(7999, 10000).indicator(), '~');
        assert_eq!(stats(5999, 10000).indicator(), '-');
    }

    #[test]
    fn test_summary_serializes() {
        let records = [AnswerRecord::Answered(Choice::B), AnswerRecord::Skipped];
        let summary = QuizSummary::compute(
            &bank(),
            &records,
            2,
            Duration::from_secs(90),
            Some(Termination::UserQuit),
            1,
        );
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["score"], 1);
        assert_eq!(json["elapsed_seconds"], 90.0);
        assert_eq!(json["percentage"], 50.0);
        assert_eq!(json["tier"], "more_practice_needed");
        assert_eq!(json["termination"], "user_quit");
        assert_eq!(json["answers"][0]["answered"], "B");
        assert_eq!(json["answers"][1], "skipped");
        assert!(json.get("percentage_decimals").is_none());
    }
}
