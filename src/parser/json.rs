//! JSON worksheet files
//!
//! ```json
//! {
//!   "settings": { "title": "Practice", "layout": "two-column", "footnote": "" },
//!   "problems": [
//!     { "id": "1", "type": "basic-equation", "leftOperand": 5, "operator": "+", "rightOperand": 3 },
//!     { "id": "2", "type": "multiple-choice", "question": "6 × 7?", "options": ["36", "42"] }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::error::WorksheetError;
use crate::model::{Operator, Problem, ProblemKind, Worksheet, WorksheetSettings};

use super::retain_valid;

/// Numbers may be written as JSON numbers or strings
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        }
    }
}

fn text(value: Option<Scalar>) -> String {
    value.map(Scalar::into_string).unwrap_or_default()
}

/// A problem as written in the file, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawProblem {
    id: Option<Scalar>,
    #[serde(rename = "type")]
    kind: Option<String>,
    left_operand: Option<Scalar>,
    operator: Option<String>,
    right_operand: Option<Scalar>,
    question: Option<String>,
    options: Option<Vec<Scalar>>,
    problem_text: Option<String>,
    result: Option<Scalar>,
    equation: Option<String>,
    variable: Option<String>,
}

impl RawProblem {
    fn operator(&self) -> Result<Operator, String> {
        let symbol = self.operator.as_deref().unwrap_or("+");
        Operator::from_symbol(symbol).ok_or_else(|| format!("unknown operator '{}'", symbol))
    }

    fn into_problem(self, index: usize) -> Result<Problem, String> {
        let id = self
            .id
            .clone()
            .map(Scalar::into_string)
            .unwrap_or_else(|| format!("problem-{}", index + 1));

        let kind = match self.kind.as_deref().unwrap_or("basic-equation") {
            "basic-equation" => ProblemKind::BasicEquation {
                operator: self.operator()?,
                left_operand: text(self.left_operand),
                right_operand: text(self.right_operand),
            },
            "multiple-choice" => ProblemKind::MultipleChoice {
                question: self.question.unwrap_or_default(),
                options: self
                    .options
                    .unwrap_or_default()
                    .into_iter()
                    .map(Scalar::into_string)
                    .collect(),
            },
            "word-problem" => ProblemKind::WordProblem {
                problem_text: self.problem_text.unwrap_or_default(),
            },
            "fill-blanks" => ProblemKind::FillBlanks {
                operator: self.operator()?,
                right_operand: text(self.right_operand),
                result: text(self.result),
            },
            "algebra-equation" => ProblemKind::AlgebraEquation {
                equation: self.equation.unwrap_or_default(),
                variable: self.variable.unwrap_or_else(|| "x".to_string()),
            },
            other => return Err(format!("unknown problem type '{}'", other)),
        };

        Ok(Problem::new(id, kind))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawWorksheet {
    settings: WorksheetSettings,
    problems: Vec<RawProblem>,
}

/// Parse a JSON worksheet.
///
/// Malformed JSON is an error. Problems with an unknown type or operator, or
/// with missing fields, are skipped with a warning.
pub fn parse_json_worksheet(content: &str) -> Result<Worksheet, WorksheetError> {
    let raw: RawWorksheet = serde_json::from_str(content)?;

    let problems = raw
        .problems
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match raw.into_problem(index) {
            Ok(problem) => Some(problem),
            Err(message) => {
                log::warn!("Skipping problem {}: {}", index + 1, message);
                None
            }
        })
        .collect();

    Ok(Worksheet {
        settings: raw.settings,
        problems: retain_valid(problems),
    })
}
