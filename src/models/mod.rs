mod answer;
mod question;

pub use answer::{AnswerRecord, Input};
pub use question::{Choice, Question};
