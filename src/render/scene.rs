//! Page scene: everything drawn on a worksheet, in canonical units
//!
//! Positions are inches from the top-left corner of the page; font sizes and
//! stroke widths are points. The scene is derived only from the pagination
//! placements, the header/footer constants and the effective font scale, so
//! the PDF and the preview draw exactly what the paginator measured.

use serde::Serialize;

use crate::config::defaults::{
    ALGEBRA_EQUATION_HEIGHT, FOOTER_FONT_SIZE, GRID_FONT_SIZE, HEADER_SPACING,
    HORIZONTAL_LINE_SPACING, MULTIPLE_CHOICE_OPTION_HEIGHT, MULTIPLE_CHOICE_QUESTION_HEIGHT,
    NAME_DATE_FONT_SIZE, NAME_LINE_HEIGHT, NAME_LINE_SPACING, PROBLEM_NUMBER_FONT_SIZE,
    PROBLEM_TEXT_FONT_SIZE, TITLE_FONT_SIZE, WORD_PROBLEM_CHARS_PER_LINE,
    WORD_PROBLEM_LINE_HEIGHT,
};
use crate::config::Settings;
use crate::layout::units::{
    footer_height, footnote_height, from_document_units, header_height, UnitSpace,
};
use crate::layout::{wrap_text, Page, Pagination, Placement, Region};
use crate::model::problem::{option_letter, ANSWER_BLANK};
use crate::model::{Problem, ProblemKind};

use super::helpers::text_metrics::{
    get_helvetica_bold_measurer, get_helvetica_measurer, BuiltinFontMeasurer,
};

/// Stroke widths in points
const THIN_STROKE: f32 = 0.5;
const RULE_STROKE: f32 = 1.0;

/// Horizontal room kept free at the right edge of a grid cell
const GRID_CELL_PADDING: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    Regular,
    Bold,
}

impl Weight {
    pub fn measurer(&self) -> &'static BuiltinFontMeasurer {
        match self {
            Weight::Regular => get_helvetica_measurer(),
            Weight::Bold => get_helvetica_bold_measurer(),
        }
    }
}

/// One drawing instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Primitive {
    /// Text whose baseline starts at (x, y)
    Text {
        x: f32,
        y: f32,
        size: f32,
        weight: Weight,
        text: String,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
    },
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
        filled: bool,
    },
    /// Outline of a measured box, only emitted with debug boxes on
    DebugBox {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl Primitive {
    /// The same primitive with every position and length moved into `space`.
    /// Font sizes and stroke widths stay in points.
    pub fn in_space(&self, space: UnitSpace) -> Self {
        let c = |v: f32| space.from_canonical(v);
        match self {
            Primitive::Text {
                x,
                y,
                size,
                weight,
                text,
            } => Primitive::Text {
                x: c(*x),
                y: c(*y),
                size: *size,
                weight: *weight,
                text: text.clone(),
            },
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                thickness,
            } => Primitive::Line {
                x1: c(*x1),
                y1: c(*y1),
                x2: c(*x2),
                y2: c(*y2),
                thickness: *thickness,
            },
            Primitive::Circle {
                cx,
                cy,
                radius,
                filled,
            } => Primitive::Circle {
                cx: c(*cx),
                cy: c(*cy),
                radius: c(*radius),
                filled: *filled,
            },
            Primitive::DebugBox {
                x,
                y,
                width,
                height,
            } => Primitive::DebugBox {
                x: c(*x),
                y: c(*y),
                width: c(*width),
                height: c(*height),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenePage {
    /// 1-based page number
    pub number: usize,
    pub primitives: Vec<Primitive>,
}

impl ScenePage {
    /// All text drawn on the page, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Every page of a worksheet, ready for an exporter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub font_scale: f32,
    pub pages: Vec<ScenePage>,
}

impl Scene {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Lay out the header, footer and every placed problem of `pagination`
pub fn build_scene(pagination: &Pagination, settings: &Settings) -> Scene {
    let builder = SceneBuilder {
        settings,
        scale: pagination.font_scale,
        budget: pagination.budget,
        total_pages: pagination.page_count(),
    };

    let pages = pagination
        .pages
        .iter()
        .enumerate()
        .map(|(i, page)| builder.page(page, i + 1))
        .collect();

    Scene {
        title: settings.worksheet.title.clone(),
        width: settings.geometry.width,
        height: settings.geometry.height,
        font_scale: pagination.font_scale,
        pages,
    }
}

/// Primitives being collected for one page
#[derive(Default)]
struct Canvas {
    primitives: Vec<Primitive>,
}

impl Canvas {
    fn text(&mut self, x: f32, y: f32, size: f32, weight: Weight, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.primitives.push(Primitive::Text {
            x,
            y,
            size,
            weight,
            text,
        });
    }

    fn centered(&mut self, center_x: f32, y: f32, size: f32, weight: Weight, text: &str) {
        let width = weight.measurer().measure_width_in(text, size);
        self.text(center_x - width / 2.0, y, size, weight, text);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32) {
        self.primitives.push(Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            thickness,
        });
    }

    fn circle(&mut self, cx: f32, cy: f32, radius: f32) {
        self.primitives.push(Primitive::Circle {
            cx,
            cy,
            radius,
            filled: false,
        });
    }

    fn debug_box(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.primitives.push(Primitive::DebugBox {
            x,
            y,
            width,
            height,
        });
    }
}

struct SceneBuilder<'a> {
    settings: &'a Settings,
    scale: f32,
    budget: f32,
    total_pages: usize,
}

impl SceneBuilder<'_> {
    fn content_top(&self) -> f32 {
        self.settings.geometry.margin + header_height(self.scale)
    }

    fn page(&self, page: &Page, number: usize) -> ScenePage {
        let mut canvas = Canvas::default();

        self.header(&mut canvas);
        for (problem_number, problem, placement) in page.items() {
            match placement.region {
                Region::GridCell { .. } => {
                    self.grid_cell(&mut canvas, problem_number, problem, placement)
                }
                _ => self.problem(&mut canvas, problem_number, problem, placement),
            }
        }
        self.footer(&mut canvas, number);

        if self.settings.debug_boxes {
            self.debug_boxes(&mut canvas, page);
        }

        ScenePage {
            number,
            primitives: canvas.primitives,
        }
    }

    /// Title, Name/Date line and rule
    fn header(&self, canvas: &mut Canvas) {
        let geometry = &self.settings.geometry;
        let s = self.scale;
        let left = geometry.margin;
        let right = geometry.width - geometry.margin;
        let regular = get_helvetica_measurer();

        let title = &self.settings.worksheet.title;
        let title_line = from_document_units(TITLE_FONT_SIZE * s);
        let title_size = get_helvetica_bold_measurer().fit_size(
            title,
            geometry.content_width(),
            TITLE_FONT_SIZE * s,
        );
        canvas.centered(
            geometry.width / 2.0,
            geometry.margin + title_line * 0.85,
            title_size,
            Weight::Bold,
            title,
        );

        let name_top = geometry.margin + title_line + (HEADER_SPACING + NAME_LINE_SPACING) * s;
        let label_size = NAME_DATE_FONT_SIZE * s;
        let baseline = name_top + NAME_LINE_HEIGHT * s * 0.6;
        let date_x = left + geometry.content_width() * 0.65;

        canvas.text(left, baseline, label_size, Weight::Regular, "Name:");
        let name_end = left + regular.measure_width_in("Name: ", label_size);
        canvas.line(name_end, baseline, date_x - 0.3 * s, baseline, THIN_STROKE);

        canvas.text(date_x, baseline, label_size, Weight::Regular, "Date:");
        let date_end = date_x + regular.measure_width_in("Date: ", label_size);
        canvas.line(date_end, baseline, right, baseline, THIN_STROKE);

        let rule_y = geometry.margin + header_height(s) - HORIZONTAL_LINE_SPACING * s / 2.0;
        canvas.line(left, rule_y, right, rule_y, RULE_STROKE);
    }

    /// "Page N of M" and the optional footnote above it
    fn footer(&self, canvas: &mut Canvas, number: usize) {
        let geometry = &self.settings.geometry;
        let s = self.scale;
        let bottom = geometry.height - geometry.margin;
        let center = geometry.width / 2.0;
        let size = FOOTER_FONT_SIZE * s;

        let page_label = format!("Page {} of {}", number, self.total_pages);
        canvas.centered(
            center,
            bottom - footer_height(s) * 0.3,
            size,
            Weight::Regular,
            &page_label,
        );

        if self.settings.worksheet.has_footnote() {
            let footnote = self.settings.worksheet.footnote.trim();
            let size = get_helvetica_measurer().fit_size(footnote, geometry.content_width(), size);
            canvas.centered(
                center,
                bottom - footer_height(s) - footnote_height(s) * 0.3,
                size,
                Weight::Regular,
                footnote,
            );
        }
    }

    /// A problem in a full-width block or a column
    fn problem(
        &self,
        canvas: &mut Canvas,
        number: usize,
        problem: &Problem,
        placement: &Placement,
    ) {
        let s = self.scale;
        let regular = get_helvetica_measurer();
        let x = self.settings.geometry.margin + placement.x;
        let y = self.content_top() + placement.y;

        let number_size = PROBLEM_NUMBER_FONT_SIZE * s;
        let text_size = PROBLEM_TEXT_FONT_SIZE * s;
        let indent = get_helvetica_bold_measurer().measure_width_in("00. ", number_size);
        let baseline = y + regular.ascender_in(text_size);
        let text_x = x + indent;
        let text_width = (placement.width - indent).max(0.0);
        let fit = |text: &str, size: f32| regular.fit_size(text, text_width, size);

        canvas.text(x, baseline, number_size, Weight::Bold, format!("{}.", number));

        match &problem.kind {
            ProblemKind::BasicEquation { .. } | ProblemKind::FillBlanks { .. } => {
                let text = problem.display_text();
                let size = fit(text.as_str(), text_size);
                canvas.text(text_x, baseline, size, Weight::Regular, text);
            }
            ProblemKind::MultipleChoice { question, options } => {
                canvas.text(
                    text_x,
                    baseline,
                    fit(question.as_str(), text_size),
                    Weight::Regular,
                    question.as_str(),
                );

                let option_size = text_size * 0.85;
                let row_height = MULTIPLE_CHOICE_OPTION_HEIGHT * s;
                let first_row = y + MULTIPLE_CHOICE_QUESTION_HEIGHT * s;
                let radius = row_height * 0.3;
                let label_x = text_x + 2.0 * radius + 0.1 * s;

                for (i, option) in options.iter().enumerate() {
                    let center_y = first_row + (i as f32 + 0.5) * row_height;
                    canvas.circle(text_x + radius, center_y, radius);

                    let label = format!("{}) {}", option_letter(i), option);
                    let label_width = (x + placement.width - label_x).max(0.0);
                    let size = regular.fit_size(&label, label_width, option_size);
                    canvas.text(
                        label_x,
                        center_y + regular.ascender_in(size) / 2.0,
                        size,
                        Weight::Regular,
                        label,
                    );
                }
            }
            ProblemKind::WordProblem { problem_text } => {
                let lines = wrap_text(problem_text, WORD_PROBLEM_CHARS_PER_LINE);
                let size = lines
                    .iter()
                    .map(|line| fit(line.as_str(), text_size))
                    .fold(text_size, f32::min);
                for (i, line) in lines.into_iter().enumerate() {
                    let line_y = baseline + i as f32 * WORD_PROBLEM_LINE_HEIGHT * s;
                    canvas.text(text_x, line_y, size, Weight::Regular, line);
                }

                let answer_y = y + placement.height - 0.08 * s;
                let label_size = text_size * 0.8;
                canvas.text(text_x, answer_y, label_size, Weight::Regular, "Answer:");
                let line_start = text_x + regular.measure_width_in("Answer: ", label_size);
                canvas.line(line_start, answer_y, x + placement.width, answer_y, THIN_STROKE);
            }
            ProblemKind::AlgebraEquation { equation, variable } => {
                canvas.text(
                    text_x,
                    baseline,
                    fit(equation.as_str(), text_size),
                    Weight::Regular,
                    equation.as_str(),
                );
                let answer = format!("{} = {}", variable, ANSWER_BLANK);
                let answer_baseline =
                    y + ALGEBRA_EQUATION_HEIGHT * s + regular.ascender_in(text_size);
                let size = fit(answer.as_str(), text_size);
                canvas.text(text_x, answer_baseline, size, Weight::Regular, answer);
            }
        }
    }

    /// A compact-grid cell: a small number above a fitted equation
    fn grid_cell(
        &self,
        canvas: &mut Canvas,
        number: usize,
        problem: &Problem,
        placement: &Placement,
    ) {
        let s = self.scale;
        let regular = get_helvetica_measurer();
        let x = self.settings.geometry.margin + placement.x;
        let y = self.content_top() + placement.y;

        let number_size = GRID_FONT_SIZE * s * 0.75;
        canvas.text(
            x,
            y + regular.ascender_in(number_size),
            number_size,
            Weight::Bold,
            format!("{}.", number),
        );

        let text = problem.display_text();
        let size = regular.fit_size(
            &text,
            (placement.width - GRID_CELL_PADDING).max(0.0),
            GRID_FONT_SIZE * s,
        );
        canvas.text(x, y + placement.height * 0.85, size, Weight::Regular, text);
    }

    fn debug_boxes(&self, canvas: &mut Canvas, page: &Page) {
        let geometry = &self.settings.geometry;
        let top = self.content_top();
        canvas.debug_box(geometry.margin, top, geometry.content_width(), self.budget);
        for placement in &page.placements {
            canvas.debug_box(
                geometry.margin + placement.x,
                top + placement.y,
                placement.width,
                placement.height,
            );
        }
    }
}
