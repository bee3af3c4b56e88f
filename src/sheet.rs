use crate::dates;
use crate::error::{EcoError, Result};
use crate::score::Answers;
use crate::types::report::Respondent;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A completed questionnaire supplied as JSON instead of typed at the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSheet {
    name: String,
    date_of_birth: String,
    answers: BTreeMap<String, u8>,
}

#[derive(Debug, Clone)]
pub struct ResponseSheet {
    pub respondent: Respondent,
    pub answers: Answers,
}

pub fn load_sheet(path: &Path) -> Result<ResponseSheet> {
    if !path.exists() {
        return Err(EcoError::InvalidSheet(format!(
            "file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| EcoError::InvalidSheet(format!("{}: {}", path.display(), e)))?;
    parse_sheet(&content)
}

pub fn parse_sheet(content: &str) -> Result<ResponseSheet> {
    let raw: RawSheet =
        serde_json::from_str(content).map_err(|e| EcoError::InvalidSheet(e.to_string()))?;

    let full_name = raw.name.trim().to_string();
    if full_name.is_empty() {
        return Err(EcoError::InvalidSheet("name cannot be empty".to_string()));
    }
    let date_of_birth = dates::parse_date(&raw.date_of_birth)
        .map_err(|e| EcoError::InvalidSheet(e.to_string()))?;

    let mut answers = Answers::new();
    for (key, value) in raw.answers {
        let question = key.trim().parse::<u8>().map_err(|_| {
            EcoError::InvalidSheet(format!("answer key is not a question id: {key}"))
        })?;
        answers
            .record(question, value)
            .map_err(|e| EcoError::InvalidSheet(e.to_string()))?;
    }
    answers
        .ensure_complete()
        .map_err(|e| EcoError::InvalidSheet(e.to_string()))?;

    tracing::debug!(answers = answers.len(), "response sheet parsed");
    Ok(ResponseSheet {
        respondent: Respondent {
            full_name,
            date_of_birth,
        },
        answers,
    })
}
