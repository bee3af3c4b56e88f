//! Console answer collector.
//!
//! Every prompt retries until the line is valid. Errors returned from here are
//! either I/O failures or end of input; input mistakes never escape a prompt.

use crate::dates::{self, AgeRule};
use crate::error::{EcoError, Result};
use crate::instrument::{Question, QUESTIONS};
use crate::report::text;
use crate::score::{self, Answers};
use crate::types::report::{Respondent, ScoreReport};
use crate::types::scoring::{MAX_ANSWER, MIN_ANSWER};
use chrono::NaiveDate;
use std::io::{BufRead, Write};

const NAME_PROMPT: &str = "Digite seu Nome Completo: ";
const DOB_PROMPT: &str = "Digite sua Data de Nascimento (AAAA-MM-DD): ";
const ANSWER_PROMPT: &str = "Resposta (1-6): ";

const EMPTY_INPUT_MESSAGE: &str = "A entrada não pode estar vazia. Por favor, tente novamente.";
const INVALID_DATE_MESSAGE: &str =
    "Formato de Data de Nascimento inválido. Por favor, use AAAA-MM-DD ou outros formatos suportados.";
const INVALID_ANSWER_MESSAGE: &str = "Entrada inválida. Por favor, insira um número entre 1 e 6.";

pub fn parse_name(line: &str) -> Result<String> {
    let name = line.trim();
    if name.is_empty() {
        return Err(EcoError::EmptyInput);
    }
    Ok(name.to_string())
}

pub fn parse_answer(line: &str) -> Result<u8> {
    let trimmed = line.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| EcoError::InvalidAnswerInput(trimmed.to_string()))?;
    u8::try_from(value)
        .ok()
        .filter(|value| (MIN_ANSWER..=MAX_ANSWER).contains(value))
        .ok_or_else(|| EcoError::InvalidAnswerInput(trimmed.to_string()))
}

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn prompt(&mut self, prompt: &str, waiting_for: &'static str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EcoError::UnexpectedEof(waiting_for));
        }
        Ok(line.trim().to_string())
    }

    pub fn read_name(&mut self) -> Result<String> {
        loop {
            let line = self.prompt(NAME_PROMPT, "full name")?;
            match parse_name(&line) {
                Ok(name) => return Ok(name),
                Err(err) => {
                    tracing::debug!(error = %err, "name rejected");
                    writeln!(self.output, "{EMPTY_INPUT_MESSAGE}")?;
                }
            }
        }
    }

    pub fn read_date_of_birth(&mut self) -> Result<NaiveDate> {
        loop {
            let line = self.prompt(DOB_PROMPT, "date of birth")?;
            if line.is_empty() {
                writeln!(self.output, "{EMPTY_INPUT_MESSAGE}")?;
                continue;
            }
            match dates::parse_date(&line) {
                Ok(date) => return Ok(date),
                Err(err) => {
                    tracing::debug!(error = %err, "date of birth rejected");
                    writeln!(self.output, "{INVALID_DATE_MESSAGE}")?;
                }
            }
        }
    }

    pub fn read_answer(&mut self, question: &Question) -> Result<u8> {
        writeln!(self.output, "Pergunta {}: {}", question.id, question.text)?;
        for (value, label) in (MIN_ANSWER..=MAX_ANSWER).zip(question.legend.options()) {
            writeln!(self.output, "{value} - {label}")?;
        }
        loop {
            let line = self.prompt(ANSWER_PROMPT, "answer")?;
            match parse_answer(&line) {
                Ok(value) => {
                    writeln!(self.output)?;
                    return Ok(value);
                }
                Err(err) => {
                    tracing::debug!(question = question.id, error = %err, "answer rejected");
                    writeln!(self.output, "{INVALID_ANSWER_MESSAGE}")?;
                }
            }
        }
    }

    pub fn collect_answers(&mut self) -> Result<Answers> {
        let mut answers = Answers::new();
        for question in &QUESTIONS {
            let value = self.read_answer(question)?;
            answers.record(question.id, value)?;
        }
        Ok(answers)
    }

    /// Runs the whole protocol: name, date of birth, header, 54 answers.
    pub fn run(&mut self, today: NaiveDate, age_rule: AgeRule) -> Result<ScoreReport> {
        let full_name = self.read_name()?;
        let date_of_birth = self.read_date_of_birth()?;
        let respondent = Respondent {
            full_name,
            date_of_birth,
        };
        let age = dates::calculate_age_with(date_of_birth, today, age_rule);
        write!(self.output, "{}", text::user_info(&respondent, today, age))?;
        tracing::info!(%date_of_birth, %today, "respondent registered");

        let answers = self.collect_answers()?;
        score::assess(respondent, today, age_rule, &answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::ScaleKind;
    use std::io::Cursor;

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.output).expect("output is utf-8")
    }

    #[test]
    fn parse_answer_accepts_only_one_through_six() {
        assert_eq!(parse_answer(" 4 ").expect("4 is valid"), 4);
        for bad in ["0", "7", "-1", "abc", "", "3.5", "300"] {
            assert!(
                matches!(parse_answer(bad), Err(EcoError::InvalidAnswerInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_name_rejects_blank_lines() {
        assert!(matches!(parse_name("   "), Err(EcoError::EmptyInput)));
        assert_eq!(parse_name("  Maria Silva ").expect("name"), "Maria Silva");
    }

    #[test]
    fn read_name_retries_until_non_empty() {
        let mut s = session("\n  \nJoão Souza\n");
        assert_eq!(s.read_name().expect("name should be read"), "João Souza");
        let out = output(s);
        assert_eq!(out.matches(NAME_PROMPT).count(), 3);
        assert_eq!(out.matches(EMPTY_INPUT_MESSAGE).count(), 2);
    }

    #[test]
    fn read_date_of_birth_retries_on_bad_format() {
        let mut s = session("2024-13-45\n\n15 Jun 1990\n");
        let dob = s.read_date_of_birth().expect("date should be read");
        assert_eq!(dob, NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid"));
        let out = output(s);
        assert_eq!(out.matches(INVALID_DATE_MESSAGE).count(), 1);
        assert_eq!(out.matches(EMPTY_INPUT_MESSAGE).count(), 1);
    }

    #[test]
    fn read_date_of_birth_reprompts_on_two_digit_year() {
        let mut s = session("15/06/90\n15/06/1990\n");
        let dob = s.read_date_of_birth().expect("date should be read");
        assert_eq!(dob, NaiveDate::from_ymd_opt(1990, 6, 15).expect("valid"));
        let out = output(s);
        assert_eq!(out.matches(DOB_PROMPT).count(), 2);
        assert_eq!(out.matches(INVALID_DATE_MESSAGE).count(), 1);
    }

    #[test]
    fn read_answer_prints_legend_once_and_retries() {
        let mut s = session("9\nx\n5\n");
        let question = &QUESTIONS[16];
        assert_eq!(s.read_answer(question).expect("answer should be read"), 5);
        let out = output(s);
        assert!(out.starts_with("Pergunta 17: Eu tento ser amigável com as pessoas\n1 - Nenhuma\n"));
        assert!(out.contains("6 - A maioria\n"));
        assert_eq!(out.matches("1 - Nenhuma").count(), 1);
        assert_eq!(out.matches(INVALID_ANSWER_MESSAGE).count(), 2);
    }

    #[test]
    fn end_of_input_is_reported_instead_of_looping() {
        let mut s = session("\n");
        let err = s.read_name().expect_err("input ends before a name");
        assert!(matches!(err, EcoError::UnexpectedEof("full name")));
    }

    #[test]
    fn full_session_produces_report() {
        let mut input = String::from("Ana Lima\n1990-06-15\n");
        for _ in 0..54 {
            input.push_str("6\n");
        }
        let mut s = session(&input);
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid");
        let report = s.run(today, AgeRule::DayOfYear).expect("session completes");

        assert_eq!(report.respondent.full_name, "Ana Lima");
        assert_eq!(report.age, 34);
        assert_eq!(report.scores.get(ScaleKind::ExpressedAffection), 7);

        let out = output(s);
        assert!(out.contains("--- Informações do Usuário ---"));
        assert!(out.contains("Data de Nascimento: 15 de Junho de 1990"));
        assert!(out.contains("Idade: 34 anos"));
        assert!(out.contains("Pergunta 54: Eu assumo a liderança quando estou com outras pessoas"));
    }

    #[test]
    fn session_stops_when_answers_run_out() {
        let mut s = session("Ana Lima\n1990-06-15\n1\n2\n");
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid");
        let err = s.run(today, AgeRule::DayOfYear).expect_err("input ends early");
        assert!(matches!(err, EcoError::UnexpectedEof("answer")));
    }
}
