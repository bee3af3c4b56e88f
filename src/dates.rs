use crate::error::{EcoError, Result};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Accepted date-of-birth layouts, in priority order. The first layout that
/// parses wins.
pub const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%B %d, %Y", "%d %b %Y"];

const PORTUGUESE_MONTHS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeRule {
    /// Compares day-of-year ordinals. Drifts by one day around leap years.
    #[default]
    DayOfYear,
    /// Compares (month, day).
    Calendar,
}

pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .filter(|layout| has_four_digit_year(trimmed, layout))
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
        .ok_or_else(|| EcoError::InvalidDateFormat(trimmed.to_string()))
}

/// chrono's `%Y` takes any digit count; every layout here needs exactly four.
/// The year leads in `%Y-%m-%d` and trails in the others.
fn has_four_digit_year(input: &str, layout: &str) -> bool {
    let digits = if layout.starts_with("%Y") {
        input.bytes().take_while(u8::is_ascii_digit).count()
    } else {
        input.bytes().rev().take_while(u8::is_ascii_digit).count()
    };
    digits == 4
}

/// Completed years between `dob` and `today` using the day-of-year rule.
pub fn calculate_age(dob: NaiveDate, today: NaiveDate) -> i32 {
    let age = today.year() - dob.year();
    if today.ordinal() < dob.ordinal() {
        age - 1
    } else {
        age
    }
}

pub fn calculate_age_with(dob: NaiveDate, today: NaiveDate, rule: AgeRule) -> i32 {
    match rule {
        AgeRule::DayOfYear => calculate_age(dob, today),
        AgeRule::Calendar => {
            let age = today.year() - dob.year();
            if (today.month(), today.day()) < (dob.month(), dob.day()) {
                age - 1
            } else {
                age
            }
        }
    }
}

/// Renders `15 de Junho de 1990`.
pub fn format_long_pt(date: NaiveDate) -> String {
    let month = PORTUGUESE_MONTHS[date.month0() as usize];
    format!("{:02} de {} de {}", date.day(), month, date.year())
}
