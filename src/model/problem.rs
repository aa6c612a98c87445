use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Placeholder drawn where the student writes an answer
pub const ANSWER_BLANK: &str = "____";

/// Arithmetic operator of an equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Typeset symbol used on the page
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Normalize the spellings people type for each operator
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s.trim() {
            "+" => Some(Operator::Add),
            "-" | "−" | "–" => Some(Operator::Subtract),
            "*" | "×" | "x" | "X" | "·" => Some(Operator::Multiply),
            "/" | "÷" | ":" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl FromStr for Operator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_symbol(s).ok_or_else(|| ConfigError::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The five kinds of worksheet problem
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemKind {
    /// `left op right = ____`
    BasicEquation {
        left_operand: String,
        operator: Operator,
        right_operand: String,
    },
    /// A question followed by lettered options
    MultipleChoice {
        question: String,
        options: Vec<String>,
    },
    /// Free text followed by an answer line
    WordProblem { problem_text: String },
    /// `____ op right = result`; the blank is the left operand
    FillBlanks {
        operator: Operator,
        right_operand: String,
        result: String,
    },
    /// An equation to solve for `variable`
    AlgebraEquation { equation: String, variable: String },
}

/// A single worksheet problem
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    /// Opaque identity, only used by callers to diff problem lists
    pub id: String,
    pub kind: ProblemKind,
}

impl Problem {
    pub fn new(id: impl Into<String>, kind: ProblemKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    pub fn basic(
        id: impl Into<String>,
        left: impl Into<String>,
        operator: Operator,
        right: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            ProblemKind::BasicEquation {
                left_operand: left.into(),
                operator,
                right_operand: right.into(),
            },
        )
    }

    pub fn multiple_choice<S: Into<String>>(
        id: impl Into<String>,
        question: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::new(
            id,
            ProblemKind::MultipleChoice {
                question: question.into(),
                options: options.into_iter().map(Into::into).collect(),
            },
        )
    }

    pub fn word(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(
            id,
            ProblemKind::WordProblem {
                problem_text: text.into(),
            },
        )
    }

    pub fn fill_blanks(
        id: impl Into<String>,
        operator: Operator,
        right: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            ProblemKind::FillBlanks {
                operator,
                right_operand: right.into(),
                result: result.into(),
            },
        )
    }

    pub fn algebra(
        id: impl Into<String>,
        equation: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            ProblemKind::AlgebraEquation {
                equation: equation.into(),
                variable: variable.into(),
            },
        )
    }

    /// Starter problem for a newly added item of the given kind
    pub fn blank(id: impl Into<String>, kind_name: &str) -> Option<Self> {
        let problem = match kind_name {
            "basic-equation" => Self::basic(id, "2", Operator::Add, "3"),
            "multiple-choice" => Self::multiple_choice(id, "What is 2 + 2?", ["3", "4"]),
            "word-problem" => Self::word(
                id,
                "Sarah has 5 apples. She gives 2 apples to her friend. \
                 How many apples does Sarah have left?",
            ),
            "fill-blanks" => Self::fill_blanks(id, Operator::Add, "3", "8"),
            "algebra-equation" => Self::algebra(id, "x + 5 = 12", "x"),
            _ => return None,
        };
        Some(problem)
    }

    /// The `type` tag used in worksheet files
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            ProblemKind::BasicEquation { .. } => "basic-equation",
            ProblemKind::MultipleChoice { .. } => "multiple-choice",
            ProblemKind::WordProblem { .. } => "word-problem",
            ProblemKind::FillBlanks { .. } => "fill-blanks",
            ProblemKind::AlgebraEquation { .. } => "algebra-equation",
        }
    }

    /// Whether the problem can sit in a compact-grid cell
    pub fn is_grid_eligible(&self) -> bool {
        matches!(
            self.kind,
            ProblemKind::BasicEquation { .. } | ProblemKind::FillBlanks { .. }
        )
    }

    /// Word problems always span the full content width
    pub fn is_full_width(&self) -> bool {
        matches!(self.kind, ProblemKind::WordProblem { .. })
    }

    /// Check that every required field is filled in
    pub fn is_valid(&self) -> bool {
        match &self.kind {
            ProblemKind::BasicEquation {
                left_operand,
                right_operand,
                ..
            } => is_number(left_operand) && is_number(right_operand),
            ProblemKind::MultipleChoice { question, options } => {
                !question.trim().is_empty()
                    && options.len() >= 2
                    && options.iter().all(|o| !o.trim().is_empty())
            }
            ProblemKind::WordProblem { problem_text } => !problem_text.trim().is_empty(),
            ProblemKind::FillBlanks {
                right_operand,
                result,
                ..
            } => is_number(right_operand) && is_number(result),
            ProblemKind::AlgebraEquation { equation, variable } => {
                !equation.trim().is_empty() && !variable.trim().is_empty()
            }
        }
    }

    /// Text lines as they appear on the page, without the problem number
    pub fn display_lines(&self) -> Vec<String> {
        match &self.kind {
            ProblemKind::BasicEquation {
                left_operand,
                operator,
                right_operand,
            } => vec![format!(
                "{} {} {} = {}",
                left_operand, operator, right_operand, ANSWER_BLANK
            )],
            ProblemKind::MultipleChoice { question, options } => {
                let mut lines = vec![question.clone()];
                lines.extend(
                    options
                        .iter()
                        .enumerate()
                        .map(|(i, option)| format!("{}) {}", option_letter(i), option)),
                );
                lines
            }
            ProblemKind::WordProblem { problem_text } => {
                vec![problem_text.clone(), "____________________".to_string()]
            }
            ProblemKind::FillBlanks {
                operator,
                right_operand,
                result,
            } => vec![format!(
                "{} {} {} = {}",
                ANSWER_BLANK, operator, right_operand, result
            )],
            ProblemKind::AlgebraEquation { equation, variable } => {
                vec![equation.clone(), format!("{} = {}", variable, ANSWER_BLANK)]
            }
        }
    }

    /// All display lines joined by newlines
    pub fn display_text(&self) -> String {
        self.display_lines().join("\n")
    }
}

/// Letter for the option at `index` (A, B, C, ...)
pub fn option_letter(index: usize) -> char {
    char::from_u32('A' as u32 + (index % 26) as u32).unwrap_or('?')
}

/// Numeric text that parses to a finite number
pub fn is_number(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_normalization() {
        assert_eq!(Operator::from_symbol("x"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_symbol("÷"), Some(Operator::Divide));
        assert_eq!(Operator::from_symbol("−"), Some(Operator::Subtract));
        assert_eq!(Operator::from_symbol("%"), None);
        assert!("^".parse::<Operator>().is_err());
    }

    #[test]
    fn test_basic_equation_validity() {
        assert!(Problem::basic("a", "12", Operator::Add, "-3.5").is_valid());
        assert!(!Problem::basic("a", "", Operator::Add, "3").is_valid());
        assert!(!Problem::basic("a", "twelve", Operator::Add, "3").is_valid());
        assert!(!Problem::basic("a", "inf", Operator::Add, "3").is_valid());
        assert!(!Problem::basic("a", "NaN", Operator::Add, "3").is_valid());
    }

    #[test]
    fn test_multiple_choice_validity() {
        assert!(Problem::multiple_choice("m", "What is 2 + 2?", ["3", "4"]).is_valid());
        assert!(!Problem::multiple_choice("m", "What is 2 + 2?", ["4"]).is_valid());
        assert!(!Problem::multiple_choice("m", "  ", ["3", "4"]).is_valid());
        assert!(!Problem::multiple_choice("m", "Pick", ["3", " "]).is_valid());
    }

    #[test]
    fn test_other_kinds_validity() {
        assert!(Problem::word("w", "Tom has 3 cats.").is_valid());
        assert!(!Problem::word("w", "   ").is_valid());
        assert!(Problem::fill_blanks("f", Operator::Add, "3", "8").is_valid());
        assert!(!Problem::fill_blanks("f", Operator::Add, "3", "").is_valid());
        assert!(Problem::algebra("g", "2y + 1 = 9", "y").is_valid());
        assert!(!Problem::algebra("g", "2y + 1 = 9", "").is_valid());
    }

    #[test]
    fn test_display_lines() {
        let basic = Problem::basic("a", "5", Operator::Multiply, "3");
        assert_eq!(basic.display_text(), "5 × 3 = ____");

        let fill = Problem::fill_blanks("f", Operator::Subtract, "3", "8");
        assert_eq!(fill.display_text(), "____ - 3 = 8");

        let mc = Problem::multiple_choice("m", "What is 2 + 2?", ["3", "4", "5"]);
        assert_eq!(
            mc.display_lines(),
            vec!["What is 2 + 2?", "A) 3", "B) 4", "C) 5"]
        );

        let algebra = Problem::algebra("g", "n - 4 = 10", "n");
        assert_eq!(algebra.display_lines(), vec!["n - 4 = 10", "n = ____"]);
    }

    #[test]
    fn test_grid_eligibility() {
        assert!(Problem::basic("a", "1", Operator::Add, "2").is_grid_eligible());
        assert!(Problem::fill_blanks("f", Operator::Add, "2", "3").is_grid_eligible());
        assert!(!Problem::word("w", "text").is_grid_eligible());
        assert!(!Problem::algebra("g", "x = 1", "x").is_grid_eligible());
        assert!(!Problem::multiple_choice("m", "q", ["1", "2"]).is_grid_eligible());
    }

    #[test]
    fn test_blank_templates_are_valid() {
        for kind in [
            "basic-equation",
            "multiple-choice",
            "word-problem",
            "fill-blanks",
            "algebra-equation",
        ] {
            let problem = Problem::blank("new", kind).unwrap();
            assert_eq!(problem.kind_name(), kind);
            assert!(problem.is_valid(), "{} template should be valid", kind);
        }
        assert!(Problem::blank("new", "essay").is_none());
    }
}
