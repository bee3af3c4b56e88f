use crate::dates::{self, AgeRule};
use crate::error::EcoError;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EcoConfig {
    pub report: Option<ReportConfig>,
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormatSetting {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<ReportFormatSetting>,
    #[serde(default)]
    pub show_temperament: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub reference_date: Option<String>,
    pub age_rule: Option<AgeRule>,
}

impl EcoConfig {
    pub fn report_format(&self) -> ReportFormatSetting {
        self.report
            .as_ref()
            .and_then(|report| report.format)
            .unwrap_or_default()
    }

    pub fn show_temperament(&self) -> bool {
        self.report
            .as_ref()
            .map(|report| report.show_temperament)
            .unwrap_or(false)
    }

    pub fn age_rule(&self) -> AgeRule {
        self.session
            .as_ref()
            .and_then(|session| session.age_rule)
            .unwrap_or_default()
    }

    pub fn reference_date(&self) -> Result<Option<NaiveDate>, EcoError> {
        match self
            .session
            .as_ref()
            .and_then(|session| session.reference_date.as_deref())
        {
            Some(raw) => dates::parse_date(raw).map(Some).map_err(|_| {
                EcoError::ConfigParse(format!("session.reference_date is not a valid date: {raw}"))
            }),
            None => Ok(None),
        }
    }

    pub fn validate(&self) -> Result<(), EcoError> {
        self.reference_date()?;
        Ok(())
    }
}
