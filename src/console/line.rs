//! Plain line-by-line console over any reader and writer.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use super::{Console, Prompt, Screen, INSTRUCTIONS, QUIZ_TITLE, STUDY_RESOURCES};
use crate::models::Choice;
use crate::summary::{format_clock, QuizSummary};

const RULE_WIDTH: usize = 50;

pub struct LineConsole<R, W> {
    input: R,
    output: W,
}

impl LineConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_welcome(&mut self, total: usize, minutes: u64) -> io::Result<()> {
        let out = &mut self.output;
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "{}", QUIZ_TITLE)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "Total Questions: {} MCQs", total)?;
        writeln!(out, "Duration: {} Minutes", minutes)?;
        writeln!(out, "Difficulty Level: Intermediate to Advanced")?;
        writeln!(out)?;
        writeln!(out, "Based on OpenAI Agents SDK Documentation")?;
        writeln!(out, "{}", STUDY_RESOURCES[0].1)?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;
        writeln!(out, "INSTRUCTIONS:")?;
        for line in INSTRUCTIONS {
            writeln!(out, "- {}", line)?;
        }
        Ok(())
    }

    fn write_results(&mut self, summary: &QuizSummary) -> io::Result<()> {
        let out = &mut self.output;
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out)?;
        writeln!(out, "{}", rule)?;
        writeln!(out, "QUIZ RESULTS")?;
        writeln!(out, "{}", rule)?;
        writeln!(
            out,
            "Questions Processed: {}/{} ({} answered, {} skipped)",
            summary.questions_processed,
            summary.total_questions,
            summary.questions_answered,
            summary.questions_skipped
        )?;
        writeln!(out, "Correct Answers: {}", summary.score)?;
        if summary.questions_processed > 0 {
            writeln!(
                out,
                "Score: {}/{} ({})",
                summary.score,
                summary.questions_processed,
                summary.percentage_display()
            )?;
        } else {
            writeln!(out, "Score: {}", summary.percentage_display())?;
        }
        writeln!(out, "Time Taken: {}", format_clock(summary.elapsed))?;

        if let Some(tier) = summary.tier {
            writeln!(out, "Performance: {}", tier.label())?;
            writeln!(out)?;
            writeln!(out, "{}", tier.headline())?;
            for line in tier.advice() {
                writeln!(out, "{}", line)?;
            }
        }

        writeln!(out)?;
        writeln!(out, "Study Resources:")?;
        for (name, url) in STUDY_RESOURCES {
            writeln!(out, "- {}: {}", name, url)?;
        }

        writeln!(out)?;
        writeln!(out, "Focus Areas for Improvement:")?;
        for stats in &summary.categories {
            writeln!(
                out,
                "{} {}: {}/{} ({:.*}%)",
                stats.indicator(),
                stats.category,
                stats.correct,
                stats.total,
                summary.percentage_decimals as usize,
                stats.percentage(summary.percentage_decimals)
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Thank you for taking the Fundamentals of Agentic AI Quiz!")
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        match screen {
            Screen::Welcome { total, time_budget } => {
                self.write_welcome(total, time_budget.as_secs() / 60)?
            }
            Screen::Question {
                number,
                total,
                remaining,
                question,
            } => {
                let out = &mut self.output;
                let bar = "=".repeat(20);
                writeln!(out)?;
                writeln!(out, "{} Question {}/{} {}", bar, number, total, bar)?;
                writeln!(out, "Time remaining: {}", format_clock(remaining))?;
                writeln!(out, "Category: {}", question.category)?;
                writeln!(out)?;
                writeln!(out, "Q{}: {}", number, question.text)?;
                writeln!(out)?;
                for choice in Choice::ALL {
                    writeln!(out, "   {}. {}", choice, question.option(choice))?;
                }
            }
            Screen::Feedback { question, choice } => {
                if question.is_correct(choice) {
                    writeln!(self.output, "Correct!")?;
                } else {
                    writeln!(
                        self.output,
                        "Incorrect. The correct answer was {}.",
                        question.answer
                    )?;
                }
                writeln!(self.output, "Explanation: {}", question.explanation)?;
            }
            Screen::Skipped => writeln!(self.output, "Question skipped.")?,
            Screen::InvalidInput => writeln!(
                self.output,
                "Invalid input. Please enter A, B, C, D, 'skip', or 'quit'."
            )?,
            Screen::TimeUp => writeln!(self.output, "\nTIME'S UP! Quiz completed.")?,
            Screen::UserQuit => writeln!(self.output, "\nQuiz terminated by user.")?,
            Screen::Results(summary) => self.write_results(summary)?,
        }
        self.output.flush()
    }

    fn read_line(&mut self, prompt: Prompt) -> io::Result<Option<String>> {
        let text = match prompt {
            Prompt::Start => "\nPress Enter to start the quiz...",
            Prompt::Answer => "\nYour answer (A/B/C/D, 'skip', or 'quit'): ",
            Prompt::Continue => "\nPress Enter to continue to the next question...",
            Prompt::Exit => return Ok(None),
        };
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        if prompt != Prompt::Answer {
            // Acknowledgements do not echo a newline of their own.
            writeln!(self.output)?;
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::time::Duration;

    use super::*;
    use crate::data::QuestionBank;
    use crate::models::AnswerRecord;
    use crate::session::Termination;

    fn run_screens(screens: &[Screen<'_>]) -> String {
        let mut console = LineConsole::new(Cursor::new(Vec::new()), Vec::new());
        for screen in screens {
            console.render(*screen).unwrap();
        }
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_question_layout() {
        let bank = QuestionBank::builtin().unwrap();
        let output = run_screens(&[Screen::Question {
            number: 3,
            total: 48,
            remaining: Duration::from_secs(7199),
            question: &bank[2],
        }]);

        assert!(output.contains("==================== Question 3/48 ===================="));
        assert!(output.contains("Time remaining: 119:59"));
        assert!(output.contains("Category: Runner"));
        assert!(output.contains("Q3: What happens when you call `Runner.run_sync()`"));
        assert!(output.contains("   A. The method throws an error for unused turns"));
        assert!(output.contains("   D. "));
    }

    #[test]
    fn test_feedback_lines() {
        let bank = QuestionBank::builtin().unwrap();
        let output = run_screens(&[
            Screen::Feedback {
                question: &bank[0],
                choice: Choice::B,
            },
            Screen::Feedback {
                question: &bank[0],
                choice: Choice::A,
            },
        ]);

        assert!(output.contains("Correct!\n"));
        assert!(output.contains("Incorrect. The correct answer was B."));
        assert!(output.contains("Explanation: The coordinator pattern"));
    }

    #[test]
    fn test_results_report() {
        let bank = QuestionBank::builtin().unwrap();
        let records = [
            AnswerRecord::Answered(Choice::B),
            AnswerRecord::Skipped,
            AnswerRecord::Answered(Choice::A),
        ];
        let summary = QuizSummary::compute(
            &bank,
            &records,
            3,
            Duration::from_secs(125),
            Some(Termination::UserQuit),
            1,
        );
        let output = run_screens(&[Screen::Results(&summary)]);

        assert!(output.contains("Questions Processed: 3/48 (2 answered, 1 skipped)"));
        assert!(output.contains("Correct Answers: 1"));
        assert!(output.contains("Score: 1/3 (33.3%)"));
        assert!(output.contains("Time Taken: 2:05"));
        assert!(output.contains("Performance: more practice needed"));
        assert!(output.contains("MORE PRACTICE NEEDED!"));
        assert!(output.contains("+ Architecture: 1/1 (100.0%)"));
        assert!(output.contains("- Runner: 0/1 (0.0%)"));
        assert!(output.contains("- Markdown Guide: https://www.markdownguide.org/basic-syntax/"));
    }

    #[test]
    fn test_results_with_nothing_processed() {
        let bank = QuestionBank::builtin().unwrap();
        let summary = QuizSummary::compute(&bank, &[], 0, Duration::ZERO, None, 1);
        let output = run_screens(&[Screen::Results(&summary)]);

        assert!(output.contains("Score: 0%\n"));
        assert!(output.contains("Time Taken: 0:00"));
        assert!(!output.contains("EXCELLENT"));
        assert!(!output.contains("Performance:"));
    }

    #[test]
    fn test_read_line_trims_newline_and_reports_eof() {
        let mut console = LineConsole::new(Cursor::new(b"b\r\n".to_vec()), Vec::new());

        assert_eq!(
            console.read_line(Prompt::Answer).unwrap(),
            Some("b".to_string())
        );
        assert_eq!(console.read_line(Prompt::Answer).unwrap(), None);
        assert_eq!(console.read_line(Prompt::Exit).unwrap(), None);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("Your answer (A/B/C/D, 'skip', or 'quit'): "));
    }
}
