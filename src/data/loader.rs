use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::models::Question;

/// Built-in question bank, embedded at compile time.
const BUILTIN_QUESTIONS: &str = include_str!("../../data/agentic_ai_questions.json");

/// Source label used in errors for the embedded bank.
const BUILTIN_SOURCE: &str = "<built-in bank>";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} must contain at least one question")]
    Empty(PathBuf),

    #[error("{path} contains question id {id} more than once")]
    DuplicateId { path: PathBuf, id: u32 },

    #[error("the bank holds {available} questions but {requested} were requested")]
    TooFew { requested: usize, available: usize },
}

/// Parses the embedded question bank.
pub fn load_builtin_questions() -> Result<Vec<Question>, LoadError> {
    parse_questions(BUILTIN_QUESTIONS, Path::new(BUILTIN_SOURCE))
}

/// Loads a question bank from a JSON file holding an array of questions.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();
    debug!("reading questions from {}", path.display());

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions = parse_questions(&json_content, path)?;
    info!("loaded {} questions from {}", questions.len(), path.display());
    Ok(questions)
}

fn parse_questions(json_content: &str, path: &Path) -> Result<Vec<Question>, LoadError> {
    let questions: Vec<Question> =
        serde_json::from_str(json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    let mut seen = HashSet::with_capacity(questions.len());
    if let Some(duplicate) = questions.iter().find(|q| !seen.insert(q.id)) {
        return Err(LoadError::DuplicateId {
            path: path.to_path_buf(),
            id: duplicate.id,
        });
    }

    Ok(questions)
}
