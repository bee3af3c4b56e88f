pub mod json;
pub mod text;

use crate::error::EcoError;
use crate::types::report::ScoreReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub show_temperament: bool,
}

pub fn render(report: &ScoreReport, options: RenderOptions) -> Result<String, EcoError> {
    match options.format {
        OutputFormat::Text => Ok(text::results(report, options.show_temperament)),
        OutputFormat::Json => json::to_json(report).map_err(EcoError::Json),
    }
}
