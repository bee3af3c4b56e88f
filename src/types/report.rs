use crate::types::scoring::{Dimension, ScaleScores};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct Respondent {
    pub full_name: String,
    pub date_of_birth: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Temperament {
    #[serde(rename = "Melancólico")]
    Melancholic,
    #[serde(rename = "Supina")]
    Supine,
    #[serde(rename = "Colérico")]
    Choleric,
    #[serde(rename = "Sanguíneo")]
    Sanguine,
}

impl Temperament {
    pub fn label(self) -> &'static str {
        match self {
            Temperament::Melancholic => "Melancólico",
            Temperament::Supine => "Supina",
            Temperament::Choleric => "Colérico",
            Temperament::Sanguine => "Sanguíneo",
        }
    }
}

/// Terminal artifact of a session, built once from a complete answer set.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub respondent: Respondent,
    pub reference_date: NaiveDate,
    pub age: i32,
    pub scores: ScaleScores,
    pub temperaments: BTreeMap<Dimension, Temperament>,
}
