//! Plain-text worksheet format
//!
//! ```text
//! % Title: Addition Practice
//! % Layout: two-column
//! % Footnote: Show your work
//! ; comment
//! 5 + 3 = ____
//! __ - 4 = 9
//! ? What is 6 × 7? | 36 | 42 | 48
//! = 3n + 2 = 11 | n
//! Sarah has 5 apples. She gives 2 away. How many are left?
//! ```

use crate::error::WorksheetError;
use crate::model::{Operator, Problem, ProblemKind, Worksheet, WorksheetSettings};

use super::equation::parse_equation;
use super::retain_valid;

/// A `%` directive line
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    Title(String),
    Footnote(String),
    Layout(String),
}

/// Parse a directive line such as `% Title: Fractions`
pub fn parse_directive(line: &str) -> Option<Directive> {
    let content = line.trim().strip_prefix('%')?.trim();
    let (key, value) = content.split_once(':')?;
    let value = value.trim().to_string();

    match key.trim().to_lowercase().as_str() {
        "title" => Some(Directive::Title(value)),
        "footnote" => Some(Directive::Footnote(value)),
        "layout" => Some(Directive::Layout(value)),
        _ => None,
    }
}

/// Parse a plain-text worksheet
pub fn parse_text_worksheet(content: &str) -> Result<Worksheet, WorksheetError> {
    let mut settings = WorksheetSettings::default();
    let mut problems = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if trimmed.starts_with('%') {
            match parse_directive(trimmed) {
                Some(Directive::Title(title)) => settings.title = title,
                Some(Directive::Footnote(footnote)) => settings.footnote = footnote,
                Some(Directive::Layout(layout)) => {
                    settings.layout =
                        layout
                            .parse()
                            .map_err(|e| WorksheetError::InvalidDirective {
                                line: line_number,
                                message: format!("{}", e),
                            })?;
                }
                None => log::debug!("Ignoring unknown directive: {}", trimmed),
            }
            continue;
        }

        let kind = parse_problem_line(trimmed).map_err(|message| WorksheetError::InvalidLine {
            line: line_number,
            message,
        })?;
        problems.push(Problem::new(format!("line-{}", line_number), kind));
    }

    Ok(Worksheet {
        settings,
        problems: retain_valid(problems),
    })
}

/// Parse one problem line
pub fn parse_problem_line(line: &str) -> Result<ProblemKind, String> {
    let line = line.trim();

    if let Some(rest) = line.strip_prefix('?') {
        return parse_multiple_choice(rest);
    }

    if let Some(rest) = line.strip_prefix('=') {
        return parse_algebra(rest);
    }

    if let Some(kind) = parse_equation(line) {
        return Ok(kind);
    }

    // Lines made only of numbers, operators and blanks must parse as an equation
    let equation_like = line
        .chars()
        .next()
        .map(|c| c.is_ascii_digit() || c == '_' || c == '-')
        .unwrap_or(false)
        && line.contains('=')
        && line.chars().all(is_equation_char);
    if equation_like {
        return Err(format!("malformed equation '{}'", line));
    }

    Ok(ProblemKind::WordProblem {
        problem_text: line.to_string(),
    })
}

fn is_equation_char(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '.' | '_' | '?' | '=')
        || Operator::from_symbol(c.encode_utf8(&mut [0; 4])).is_some()
}

fn parse_multiple_choice(rest: &str) -> Result<ProblemKind, String> {
    let mut parts = rest.split('|').map(str::trim);
    let question = parts.next().unwrap_or_default().to_string();
    let options: Vec<String> = parts.map(String::from).collect();

    if question.is_empty() {
        return Err("multiple-choice question is empty".to_string());
    }
    if options.len() < 2 {
        return Err(format!(
            "multiple-choice question needs at least 2 options, got {}",
            options.len()
        ));
    }

    Ok(ProblemKind::MultipleChoice { question, options })
}

fn parse_algebra(rest: &str) -> Result<ProblemKind, String> {
    let (equation, variable) = match rest.split_once('|') {
        Some((equation, variable)) => (equation.trim(), variable.trim().to_string()),
        None => {
            let equation = rest.trim();
            (equation, infer_variable(equation))
        }
    };

    if equation.is_empty() {
        return Err("algebra equation is empty".to_string());
    }
    if variable.is_empty() {
        return Err("algebra variable is empty".to_string());
    }

    Ok(ProblemKind::AlgebraEquation {
        equation: equation.to_string(),
        variable,
    })
}

/// First letter in the equation, or `x`
fn infer_variable(equation: &str) -> String {
    equation
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .unwrap_or('x')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Layout;
    use crate::model::Operator;

    #[test]
    fn test_parse_directives() {
        assert_eq!(
            parse_directive("% Title: Fractions"),
            Some(Directive::Title("Fractions".to_string()))
        );
        assert_eq!(
            parse_directive("%layout:two-column"),
            Some(Directive::Layout("two-column".to_string()))
        );
        assert_eq!(parse_directive("% Creator: someone"), None);
        assert_eq!(parse_directive("Title: x"), None);
    }

    #[test]
    fn test_parse_full_worksheet() {
        let content = "\
% Title: Mixed Practice
% Layout: compact-grid
% Footnote: Show your work
; a comment

5 + 3 = ____
__ - 4 = 9
? What is 6 × 7? | 36 | 42 | 48
= 3n + 2 = 11 | n
Sarah has 5 apples. She gives 2 away. How many are left?
";
        let worksheet = parse_text_worksheet(content).unwrap();
        assert_eq!(worksheet.settings.title, "Mixed Practice");
        assert_eq!(worksheet.settings.layout, Layout::CompactGrid);
        assert_eq!(worksheet.settings.footnote, "Show your work");

        let kinds: Vec<&str> = worksheet.problems.iter().map(|p| p.kind_name()).collect();
        assert_eq!(
            kinds,
            vec![
                "basic-equation",
                "fill-blanks",
                "multiple-choice",
                "algebra-equation",
                "word-problem"
            ]
        );
        assert_eq!(worksheet.problems[0].id, "line-6");
        assert_eq!(
            worksheet.problems[3].kind,
            ProblemKind::AlgebraEquation {
                equation: "3n + 2 = 11".to_string(),
                variable: "n".to_string()
            }
        );
    }

    #[test]
    fn test_algebra_variable_inferred() {
        assert_eq!(
            parse_problem_line("= y - 4 = 10"),
            Ok(ProblemKind::AlgebraEquation {
                equation: "y - 4 = 10".to_string(),
                variable: "y".to_string()
            })
        );
        assert_eq!(
            parse_problem_line("= 4 = 4"),
            Ok(ProblemKind::AlgebraEquation {
                equation: "4 = 4".to_string(),
                variable: "x".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_lines_report_line_number() {
        let err = parse_text_worksheet("1 + 1\n5 + = ____\n").unwrap_err();
        match err {
            WorksheetError::InvalidLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {}", other),
        }

        let err = parse_text_worksheet("? Only one | 4").unwrap_err();
        assert!(matches!(err, WorksheetError::InvalidLine { line: 1, .. }));
    }

    #[test]
    fn test_bad_layout_directive() {
        let err = parse_text_worksheet("% Layout: spiral\n1 + 1").unwrap_err();
        assert!(matches!(err, WorksheetError::InvalidDirective { line: 1, .. }));
    }

    #[test]
    fn test_invalid_problems_are_dropped() {
        let worksheet = parse_text_worksheet("? Pick one | 1 |  \n2 × 3").unwrap();
        assert_eq!(worksheet.problems.len(), 1);
        assert_eq!(
            worksheet.problems[0].kind,
            ProblemKind::BasicEquation {
                left_operand: "2".to_string(),
                operator: Operator::Multiply,
                right_operand: "3".to_string()
            }
        );
    }

    #[test]
    fn test_numbers_in_word_problems() {
        let kind = parse_problem_line("3 friends share 12 cookies. How many each?").unwrap();
        assert!(matches!(kind, ProblemKind::WordProblem { .. }));

        let kind = parse_problem_line("3 apples = how many pears?").unwrap();
        assert_eq!(
            kind,
            ProblemKind::WordProblem {
                problem_text: "3 apples = how many pears?".to_string()
            }
        );

        assert!(parse_problem_line("12 x = ____").is_err());
        assert!(parse_problem_line("7 ÷ 0.5 = ?").is_ok());
    }
}
