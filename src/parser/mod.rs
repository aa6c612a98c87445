pub mod equation;
pub mod json;
pub mod text;

use std::path::Path;

use crate::error::WorksheetError;
use crate::model::{Problem, Worksheet};

pub use equation::parse_equation;
pub use json::parse_json_worksheet;
pub use text::parse_text_worksheet;

/// Worksheet file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Text,
}

impl InputFormat {
    /// Pick the format from the file extension, then from the content
    pub fn detect(path: &Path, content: &str) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            Some(ext) if ext.eq_ignore_ascii_case("txt") => InputFormat::Text,
            _ if content.trim_start().starts_with('{') => InputFormat::Json,
            _ => InputFormat::Text,
        }
    }
}

/// Parse a worksheet in the given format
pub fn parse_worksheet(content: &str, format: InputFormat) -> Result<Worksheet, WorksheetError> {
    match format {
        InputFormat::Json => parse_json_worksheet(content),
        InputFormat::Text => parse_text_worksheet(content),
    }
}

/// Drop problems with missing or malformed fields, logging each one
pub fn retain_valid(problems: Vec<Problem>) -> Vec<Problem> {
    problems
        .into_iter()
        .filter(|problem| {
            let valid = problem.is_valid();
            if !valid {
                log::warn!(
                    "Skipping invalid {} problem '{}'",
                    problem.kind_name(),
                    problem.id
                );
            }
            valid
        })
        .collect()
}
