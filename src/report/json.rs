use crate::types::report::ScoreReport;

pub fn to_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::AgeRule;
    use crate::instrument::question_ids;
    use crate::score::{assess, Answers};
    use crate::types::report::Respondent;
    use chrono::NaiveDate;

    #[test]
    fn json_report_uses_snake_case_scales_and_iso_dates() {
        let respondent = Respondent {
            full_name: "Ana Lima".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid"),
        };
        let answers: Answers = question_ids().map(|id| (id, 1)).collect();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid");
        let report = assess(respondent, today, AgeRule::DayOfYear, &answers).expect("complete");

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["respondent"]["date_of_birth"], "1990-06-15");
        assert_eq!(value["reference_date"], "2024-06-15");
        assert_eq!(value["age"], 34);
        assert_eq!(value["scores"]["wanted_affection"], 4);
        assert_eq!(value["scores"]["wanted_inclusion"], 0);
        assert_eq!(value["temperaments"]["inclusion"], "Melancólico");
    }
}
