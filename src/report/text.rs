use crate::dates::format_long_pt;
use crate::types::report::{Respondent, ScoreReport};
use crate::types::scoring::{Dimension, ScaleKind};
use chrono::NaiveDate;

pub fn user_info(respondent: &Respondent, today: NaiveDate, age: i32) -> String {
    let mut output = String::new();
    output.push_str("\n--- Informações do Usuário ---\n");
    output.push_str(&format!("Nome Completo: {}\n", respondent.full_name));
    output.push_str(&format!(
        "Data de Nascimento: {}\n",
        format_long_pt(respondent.date_of_birth)
    ));
    output.push_str(&format!("Data de Hoje: {}\n", format_long_pt(today)));
    output.push_str(&format!("Idade: {age} anos\n\n"));
    output
}

pub fn results(report: &ScoreReport, show_temperament: bool) -> String {
    let mut output = String::new();
    output.push_str("\n--- Resultados ---\n");
    output.push_str(&format!("Nome Completo: {}\n", report.respondent.full_name));
    for kind in ScaleKind::ALL {
        output.push_str(&format!("{}: {}\n", kind.label(), report.scores.get(kind)));
    }

    if show_temperament {
        for dimension in Dimension::ALL {
            if let Some(temperament) = report.temperaments.get(&dimension) {
                output.push_str(&format!(
                    "Temperamento {}: {}\n",
                    dimension.label(),
                    temperament.label()
                ));
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::AgeRule;
    use crate::instrument::question_ids;
    use crate::score::{assess, Answers};

    fn sample_report() -> ScoreReport {
        let respondent = Respondent {
            full_name: "Ana Lima".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid"),
        };
        let answers: Answers = question_ids().map(|id| (id, 6)).collect();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid");
        assess(respondent, today, AgeRule::DayOfYear, &answers).expect("complete answers")
    }

    #[test]
    fn results_list_scales_in_fixed_order() {
        let rendered = results(&sample_report(), false);
        let expected = "\n--- Resultados ---\n\
Nome Completo: Ana Lima\n\
Inclusão Desejada: 9\n\
Inclusão Expressa: 9\n\
Controle Desejado: 9\n\
Controle Expressa: 9\n\
Afeto Desejado: 5\n\
Afeto Expressa: 7\n";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn temperament_lines_only_for_labelled_dimensions() {
        let rendered = results(&sample_report(), true);
        assert!(rendered.contains("Temperamento Inclusão: Sanguíneo\n"));
        assert!(rendered.contains("Temperamento Controle: Sanguíneo\n"));
        assert!(!rendered.contains("Temperamento Afeto"));
    }

    #[test]
    fn user_info_renders_portuguese_dates() {
        let report = sample_report();
        let rendered = user_info(&report.respondent, report.reference_date, report.age);
        assert!(rendered.contains("Data de Nascimento: 15 de Junho de 1990\n"));
        assert!(rendered.contains("Data de Hoje: 15 de Junho de 2024\n"));
        assert!(rendered.ends_with("Idade: 34 anos\n\n"));
    }
}
