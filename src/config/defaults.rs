//! Layout constants, all in canonical units (inches) unless noted.
//!
//! Every measurement the preview and the PDF exporter use is derived from
//! these values through `layout::units`.

/// US Letter page width
pub const PAGE_WIDTH: f32 = 8.5;

/// US Letter page height
pub const PAGE_HEIGHT: f32 = 11.0;

/// Margin on all four sides
pub const PAGE_MARGIN: f32 = 0.75;

/// Preview density in pixels per inch
pub const SCREEN_DPI: f32 = 96.0;

/// PDF points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Millimetres per inch
pub const MM_PER_INCH: f32 = 25.4;

// Header block

/// Gap below the title line
pub const HEADER_SPACING: f32 = 0.3;

/// Gap above the name/date line
pub const NAME_LINE_SPACING: f32 = 0.2;

/// Height of the name/date line
pub const NAME_LINE_HEIGHT: f32 = 0.5;

/// Gap reserved around the rule under the header
pub const HORIZONTAL_LINE_SPACING: f32 = 0.4;

/// Page footer ("Page N of M")
pub const FOOTER_HEIGHT: f32 = 0.3;

/// Footnote line, reserved only when a footnote is set
pub const FOOTNOTE_HEIGHT: f32 = 0.25;

// Problems

/// Vertical gap added after every problem (or grid row)
pub const PROBLEM_SPACING: f32 = 0.2;

/// Basic equation and fill-in-the-blank line
pub const BASIC_EQUATION_HEIGHT: f32 = 0.3;

/// Basic equation and fill-in-the-blank line inside a two-column cell
pub const TWO_COLUMN_EQUATION_HEIGHT: f32 = 0.25;

pub const MULTIPLE_CHOICE_QUESTION_HEIGHT: f32 = 0.25;
pub const MULTIPLE_CHOICE_OPTION_HEIGHT: f32 = 0.2;

pub const WORD_PROBLEM_BASE_HEIGHT: f32 = 0.3;
pub const WORD_PROBLEM_LINE_HEIGHT: f32 = 0.2;
pub const WORD_PROBLEM_ANSWER_HEIGHT: f32 = 0.35;

/// Characters assumed to fit on one word-problem line
pub const WORD_PROBLEM_CHARS_PER_LINE: usize = 70;

/// Equation line of an algebra problem
pub const ALGEBRA_EQUATION_HEIGHT: f32 = 0.3;

/// "x = ____" line of an algebra problem
pub const ALGEBRA_ANSWER_HEIGHT: f32 = 0.25;

/// Horizontal gap between the two columns
pub const COLUMN_GUTTER: f32 = 0.3;

/// Cells per compact-grid row
pub const GRID_COLUMNS: usize = 10;

// Typography (in points, before font scaling)

pub const TITLE_FONT_SIZE: f32 = 20.0;
pub const NAME_DATE_FONT_SIZE: f32 = 12.0;
pub const PROBLEM_NUMBER_FONT_SIZE: f32 = 14.0;
pub const PROBLEM_TEXT_FONT_SIZE: f32 = 14.0;
pub const GRID_FONT_SIZE: f32 = 9.0;
pub const FOOTER_FONT_SIZE: f32 = 8.0;

/// Default worksheet title
pub const DEFAULT_TITLE: &str = "Math Worksheet";
