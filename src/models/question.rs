use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    /// All labels in presentation order.
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    /// Position of the option this label refers to.
    pub fn index(self) -> usize {
        match self {
            Choice::A => 0,
            Choice::B => 1,
            Choice::C => 2,
            Choice::D => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Choice::A => 'A',
            Choice::B => 'B',
            Choice::C => 'C',
            Choice::D => 'D',
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Choice::A),
            "B" => Ok(Choice::B),
            "C" => Ok(Choice::C),
            "D" => Ok(Choice::D),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub text: String,
    /// Option texts without their `A.`-style prefixes.
    pub options: [String; 4],
    pub answer: Choice,
    pub explanation: String,
    pub category: String,
}

impl Question {
    pub fn option(&self, choice: Choice) -> &str {
        &self.options[choice.index()]
    }

    pub fn is_correct(&self, choice: Choice) -> bool {
        self.answer == choice
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_parsing() {
        assert_eq!("a".parse::<Choice>(), Ok(Choice::A));
        assert_eq!(" D \n".parse::<Choice>(), Ok(Choice::D));
        assert!("E".parse::<Choice>().is_err());
        assert!("AB".parse::<Choice>().is_err());
        assert!("".parse::<Choice>().is_err());
    }

    #[test]
    fn test_question_deserialization() {
        let json = r#"{
            "id": 7,
            "text": "Pick one",
            "options": ["one", "two", "three", "four"],
            "answer": "C",
            "explanation": "Three it is.",
            "category": "Basics"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();

        assert_eq!(question.answer, Choice::C);
        assert_eq!(question.option(Choice::C), "three");
        assert!(question.is_correct(Choice::C));
        assert!(!question.is_correct(Choice::A));
    }

    #[test]
    fn test_question_rejects_wrong_option_count() {
        let json = r#"{
            "id": 1,
            "text": "Pick one",
            "options": ["one", "two", "three"],
            "answer": "A",
            "explanation": "",
            "category": "Basics"
        }"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
