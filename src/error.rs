use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcoError {
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("invalid answer input: {0}")]
    InvalidAnswerInput(String),

    #[error("input cannot be empty")]
    EmptyInput,

    #[error("answer {value} for question {question} is outside 1..=6")]
    AnswerOutOfRange { question: u8, value: u8 },

    #[error("unknown question: {0}")]
    UnknownQuestion(u8),

    #[error("answers missing for question(s): {}", format_ids(.0))]
    IncompleteAnswers(Vec<u8>),

    #[error("invalid response sheet: {0}")]
    InvalidSheet(String),

    #[error("unexpected end of input while waiting for {0}")]
    UnexpectedEof(&'static str),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_ids(ids: &[u8]) -> String {
    ids.iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, EcoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_answers_lists_question_ids() {
        let err = EcoError::IncompleteAnswers(vec![3, 17, 54]);
        assert_eq!(
            err.to_string(),
            "answers missing for question(s): 3, 17, 54"
        );
    }
}
