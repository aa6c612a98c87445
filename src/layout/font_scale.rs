//! Font-scale heuristic for sparse single-page worksheets

use crate::cli::Layout;

/// Above this many problems the heuristic never enlarges anything
pub const FONT_SCALE_MAX_PROBLEMS: usize = 15;

const SINGLE_COLUMN_STEPS: [f32; 8] = [3.5, 3.0, 2.4, 2.0, 1.6, 1.3, 1.1, 1.0];
const TWO_COLUMN_STEPS: [f32; 8] = [2.5, 2.2, 1.9, 1.6, 1.4, 1.2, 1.1, 1.0];

/// Multiplier applied to every height and font size when `problem_count`
/// problems fit on one page.
///
/// Non-increasing in `problem_count` and exactly 1.0 above
/// [`FONT_SCALE_MAX_PROBLEMS`]. Two-column scales more gently since it already
/// packs more onto a page.
pub fn compute_font_scale(problem_count: usize, layout: Layout) -> f32 {
    if problem_count > FONT_SCALE_MAX_PROBLEMS {
        return 1.0;
    }

    let step = match layout {
        Layout::TwoColumn => match problem_count {
            0..=1 => 0,
            2 => 1,
            3..=4 => 2,
            5..=6 => 3,
            7..=8 => 4,
            9..=12 => 5,
            _ => 6,
        },
        Layout::SingleColumn | Layout::CompactGrid => match problem_count {
            0..=1 => 0,
            2 => 1,
            3 => 2,
            4..=5 => 3,
            6..=8 => 4,
            9..=12 => 5,
            _ => 6,
        },
    };

    scale_steps(layout)[step]
}

/// Every value the heuristic can produce for `layout`, largest first and
/// ending with 1.0
pub fn scale_steps(layout: Layout) -> &'static [f32] {
    match layout {
        Layout::TwoColumn => &TWO_COLUMN_STEPS,
        Layout::SingleColumn | Layout::CompactGrid => &SINGLE_COLUMN_STEPS,
    }
}
