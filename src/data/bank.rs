use std::ops::Index;
use std::path::Path;

use super::loader::{load_builtin_questions, load_questions_from_json, LoadError};
use crate::models::Question;

/// Ordered, non-empty set of questions. Presentation order is array order.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The 48 built-in agentic AI questions.
    pub fn builtin() -> Result<Self, LoadError> {
        Ok(Self {
            questions: load_builtin_questions()?,
        })
    }

    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        Ok(Self {
            questions: load_questions_from_json(path)?,
        })
    }

    /// Keeps the first `count` questions.
    pub fn take(mut self, count: usize) -> Result<Self, LoadError> {
        let available = self.questions.len();
        if count == 0 || count > available {
            return Err(LoadError::TooFew {
                requested: count,
                available,
            });
        }
        self.questions.truncate(count);
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl Index<usize> for QuestionBank {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
