pub mod temperament;

use crate::dates::{self, AgeRule};
use crate::error::{EcoError, Result};
use crate::instrument::scales::{Scale, SCALES};
use crate::instrument::{question_by_id, question_ids};
use crate::types::report::{Respondent, ScoreReport};
use crate::types::scoring::{QuestionId, ScaleScores, MAX_ANSWER, MIN_ANSWER};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Respondent answers keyed by question id.
///
/// `record` enforces the collector contract: known question, value in 1..=6,
/// one answer per question. Sets built through `FromIterator` skip those
/// checks and are range-checked again by [`score`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(BTreeMap<QuestionId, u8>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question: QuestionId, value: u8) -> Result<()> {
        if question_by_id(question).is_none() {
            return Err(EcoError::UnknownQuestion(question));
        }
        if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
            return Err(EcoError::AnswerOutOfRange { question, value });
        }
        if self.0.contains_key(&question) {
            return Err(EcoError::InvalidAnswerInput(format!(
                "question {question} already answered"
            )));
        }
        self.0.insert(question, value);
        Ok(())
    }

    pub fn get(&self, question: QuestionId) -> Option<u8> {
        self.0.get(&question).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn missing(&self) -> Vec<QuestionId> {
        question_ids()
            .filter(|id| !self.0.contains_key(id))
            .collect()
    }

    pub fn ensure_complete(&self) -> Result<()> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EcoError::IncompleteAnswers(missing))
        }
    }
}

impl FromIterator<(QuestionId, u8)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Counts, per scale, the questions whose answer falls in the accepted set.
///
/// Questions without an answer are skipped. An answer outside 1..=6 on a
/// scored question is rejected instead of being counted as a miss.
pub fn score(answers: &Answers, scales: &[Scale]) -> Result<ScaleScores> {
    let mut scores = ScaleScores::default();
    for scale in scales {
        let total = scores.entry(scale.kind);
        for item in scale.items {
            let Some(value) = answers.get(item.question) else {
                tracing::debug!(question = item.question, scale = scale.kind.id(), "no answer, skipped");
                continue;
            };
            if !(MIN_ANSWER..=MAX_ANSWER).contains(&value) {
                return Err(EcoError::AnswerOutOfRange {
                    question: item.question,
                    value,
                });
            }
            if item.accepts(value) {
                *total += 1;
            }
        }
        tracing::debug!(
            scale = scale.kind.id(),
            total = *total,
            max = scale.max_score(),
            "scale scored"
        );
    }
    Ok(scores)
}

/// Builds the final report from a complete answer set using the reference table.
pub fn assess(
    respondent: Respondent,
    reference_date: NaiveDate,
    age_rule: AgeRule,
    answers: &Answers,
) -> Result<ScoreReport> {
    answers.ensure_complete()?;
    let scores = score(answers, &SCALES)?;
    let age = dates::calculate_age_with(respondent.date_of_birth, reference_date, age_rule);
    let temperaments = temperament::classify_all(&scores);
    tracing::info!(age, "assessment complete");
    Ok(ScoreReport {
        respondent,
        reference_date,
        age,
        scores,
        temperaments,
    })
}
