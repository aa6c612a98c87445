//! Height model: estimated vertical footprint of one problem.
//!
//! Heights exclude the spacing between problems (the paginator adds that) and
//! are given at font scale 1.0.

use crate::cli::Layout;
use crate::config::defaults::{
    ALGEBRA_ANSWER_HEIGHT, ALGEBRA_EQUATION_HEIGHT, BASIC_EQUATION_HEIGHT,
    MULTIPLE_CHOICE_OPTION_HEIGHT, MULTIPLE_CHOICE_QUESTION_HEIGHT, TWO_COLUMN_EQUATION_HEIGHT,
    WORD_PROBLEM_ANSWER_HEIGHT, WORD_PROBLEM_BASE_HEIGHT, WORD_PROBLEM_CHARS_PER_LINE,
    WORD_PROBLEM_LINE_HEIGHT,
};
use crate::model::{Problem, ProblemKind};

/// Estimated height of `problem` in inches under `layout`.
///
/// Always finite and positive, even for problems that would fail validation.
pub fn estimate_height(problem: &Problem, layout: Layout) -> f32 {
    match &problem.kind {
        ProblemKind::BasicEquation { .. } | ProblemKind::FillBlanks { .. } => match layout {
            Layout::TwoColumn => TWO_COLUMN_EQUATION_HEIGHT,
            Layout::SingleColumn | Layout::CompactGrid => BASIC_EQUATION_HEIGHT,
        },
        // Compact grid has no cell form for these; they render as full-width
        // single-column blocks, so they are measured that way.
        ProblemKind::MultipleChoice { options, .. } => {
            MULTIPLE_CHOICE_QUESTION_HEIGHT + options.len() as f32 * MULTIPLE_CHOICE_OPTION_HEIGHT
        }
        ProblemKind::WordProblem { problem_text } => {
            let lines = estimated_word_lines(problem_text);
            WORD_PROBLEM_BASE_HEIGHT
                + (lines - 1) as f32 * WORD_PROBLEM_LINE_HEIGHT
                + WORD_PROBLEM_ANSWER_HEIGHT
        }
        ProblemKind::AlgebraEquation { .. } => ALGEBRA_EQUATION_HEIGHT + ALGEBRA_ANSWER_HEIGHT,
    }
}

/// Character-count estimate of how many lines a word problem wraps to
pub fn estimated_word_lines(text: &str) -> usize {
    text.chars()
        .count()
        .div_ceil(WORD_PROBLEM_CHARS_PER_LINE)
        .max(1)
}

/// Break `text` into at most `ceil(len / chars_per_line)` lines.
///
/// Words are kept whole when that still fits the line count the height model
/// charged for; otherwise lines are cut at exactly `chars_per_line`
/// characters so the drawn text never outgrows its estimate.
pub fn wrap_text(text: &str, chars_per_line: usize) -> Vec<String> {
    let chars_per_line = chars_per_line.max(1);
    let budget = text.chars().count().div_ceil(chars_per_line).max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len == 0 {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= chars_per_line {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }
    lines.push(current);

    let fits = lines.len() <= budget && lines.iter().all(|l| l.chars().count() <= chars_per_line);
    if fits {
        return lines;
    }

    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(chars_per_line)
        .map(|chunk| chunk.iter().collect::<String>().trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operator;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_equations_are_smaller_in_two_columns() {
        let basic = Problem::basic("a", "1", Operator::Add, "2");
        let fill = Problem::fill_blanks("f", Operator::Add, "2", "3");
        for problem in [&basic, &fill] {
            let single = estimate_height(problem, Layout::SingleColumn);
            assert!(approx(single, 0.3));
            assert!(approx(estimate_height(problem, Layout::CompactGrid), single));
            assert!(estimate_height(problem, Layout::TwoColumn) < single);
        }
    }

    #[test]
    fn test_multiple_choice_grows_per_option() {
        let two = Problem::multiple_choice("m", "Pick", ["1", "2"]);
        let four = Problem::multiple_choice("m", "Pick", ["1", "2", "3", "4"]);
        assert!(approx(estimate_height(&two, Layout::SingleColumn), 0.65));
        assert!(approx(estimate_height(&four, Layout::SingleColumn), 1.05));
        assert!(approx(
            estimate_height(&four, Layout::TwoColumn),
            estimate_height(&four, Layout::SingleColumn)
        ));
    }

    #[test]
    fn test_word_problem_line_estimate() {
        assert_eq!(estimated_word_lines(""), 1);
        assert_eq!(estimated_word_lines(&"a".repeat(70)), 1);
        assert_eq!(estimated_word_lines(&"a".repeat(71)), 2);
        assert_eq!(estimated_word_lines(&"a".repeat(210)), 3);

        let short = Problem::word("w", "Tom has 3 cats.");
        assert!(approx(estimate_height(&short, Layout::SingleColumn), 0.65));
        let long = Problem::word("w", "x".repeat(150));
        assert!(approx(estimate_height(&long, Layout::SingleColumn), 1.05));
    }

    #[test]
    fn test_algebra_is_two_lines() {
        let algebra = Problem::algebra("g", "x + 5 = 12", "x");
        for layout in [Layout::SingleColumn, Layout::TwoColumn, Layout::CompactGrid] {
            assert!(approx(estimate_height(&algebra, layout), 0.55));
        }
    }

    #[test]
    fn test_degenerate_problems_still_measure() {
        let empty_mc = Problem::multiple_choice::<&str>("m", "", []);
        let h = estimate_height(&empty_mc, Layout::SingleColumn);
        assert!(h.is_finite() && h > 0.0);
        let empty_word = Problem::word("w", "");
        let h = estimate_height(&empty_word, Layout::TwoColumn);
        assert!(h.is_finite() && h > 0.0);
    }

    #[test]
    fn test_estimate_is_deterministic() {
        let word = Problem::word("w", "Sarah has 5 apples. She gives 2 to a friend.");
        let first = estimate_height(&word, Layout::TwoColumn);
        for _ in 0..10 {
            assert_eq!(estimate_height(&word, Layout::TwoColumn), first);
        }
    }

    #[test]
    fn test_wrap_keeps_words_when_possible() {
        let lines = wrap_text("the quick brown fox", 10);
        assert_eq!(lines, vec!["the quick", "brown fox"]);
    }

    #[test]
    fn test_wrap_falls_back_to_hard_cuts() {
        // 18 chars at 9 per line are charged 2 lines; word wrap would need 3
        let lines = wrap_text("one two three four", 9);
        assert_eq!(lines, vec!["one two t", "hree four"]);
    }

    #[test]
    fn test_wrap_never_exceeds_estimate() {
        let text = "Sarah has 5 apples. She gives 2 apples to her friend. \
                    How many apples does Sarah have left at the end of the day?";
        let lines = wrap_text(text, WORD_PROBLEM_CHARS_PER_LINE);
        assert!(lines.len() <= estimated_word_lines(text));
        assert!(lines
            .iter()
            .all(|l| l.chars().count() <= WORD_PROBLEM_CHARS_PER_LINE));
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("", 70), vec![String::new()]);
    }
}
