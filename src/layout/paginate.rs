//! Paginator: splits an ordered problem list into pages.
//!
//! Problems are never reordered, duplicated or split across pages. Each
//! layout has its own placement rules; all of them charge a problem its
//! scaled height plus the scaled inter-problem spacing, and none lets a page
//! exceed the content budget except a lone problem that is larger than the
//! whole budget, which then gets a page to itself.

use std::mem;

use log::debug;
use serde::Serialize;

use super::font_scale::{compute_font_scale, scale_steps};
use super::height::estimate_height;
use super::units::PageGeometry;
use crate::cli::Layout;
use crate::config::defaults::{COLUMN_GUTTER, GRID_COLUMNS, PROBLEM_SPACING};
use crate::model::{Problem, WorksheetSettings};

/// Where on the page a problem was put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Region {
    FullWidth,
    LeftColumn,
    RightColumn,
    GridCell { row: usize, column: usize },
}

/// Position and size of one problem, in inches relative to the top-left
/// corner of the content area (below the header)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub region: Region,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// One page of problems, in worksheet order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub problems: Vec<Problem>,
    /// One entry per problem, same order
    pub placements: Vec<Placement>,
    /// 1-based number of the first problem on this page
    pub first_number: usize,
    /// The page holds a single problem taller than the content budget
    pub oversized: bool,
}

impl Page {
    fn starting_at(first_number: usize) -> Self {
        Self {
            first_number,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    /// `(problem number, problem, placement)` for every problem on the page
    pub fn items(&self) -> impl Iterator<Item = (usize, &Problem, &Placement)> {
        self.problems
            .iter()
            .zip(self.placements.iter())
            .enumerate()
            .map(move |(i, (problem, placement))| (self.first_number + i, problem, placement))
    }

    /// Space consumed on the page including the trailing spacing
    pub fn used_height(&self, spacing: f32) -> f32 {
        self.placements
            .iter()
            .map(|p| p.bottom() + spacing)
            .fold(0.0, f32::max)
    }

    /// Space consumed in one column; full-width blocks count for both
    pub fn column_used_height(&self, column: Region, spacing: f32) -> f32 {
        self.placements
            .iter()
            .filter(|p| p.region == column || p.region == Region::FullWidth)
            .map(|p| p.bottom() + spacing)
            .fold(0.0, f32::max)
    }
}

/// Result of a pagination pass
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub pages: Vec<Page>,
    pub layout: Layout,
    /// Multiplier that was applied to every height and font size
    pub font_scale: f32,
    /// Content budget per page at `font_scale`
    pub budget: f32,
    /// Scaled spacing charged after every problem
    pub spacing: f32,
}

impl Pagination {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Exactly one page with nothing overflowing it
    pub fn fits_single_page(&self) -> bool {
        self.pages.len() == 1 && !self.pages[0].oversized
    }

    pub fn problems_per_page(&self) -> Vec<usize> {
        self.pages.iter().map(Page::len).collect()
    }
}

/// Split `problems` into pages.
///
/// Always returns at least one page; an empty input yields a single empty
/// page. Concatenating the pages reproduces `problems` exactly.
pub fn paginate(
    problems: &[Problem],
    settings: &WorksheetSettings,
    geometry: &PageGeometry,
) -> Vec<Page> {
    plan(problems, settings, geometry).pages
}

/// Two-pass pagination.
///
/// The first pass runs at scale 1.0. Only if that already fits on one page is
/// the font-scale heuristic consulted; the enlarged pass is accepted when it
/// still fits on one page without overflow, otherwise smaller steps of the
/// same table are tried before settling on the neutral result.
pub fn plan(
    problems: &[Problem],
    settings: &WorksheetSettings,
    geometry: &PageGeometry,
) -> Pagination {
    let neutral = paginate_at_scale(problems, settings, geometry, 1.0);
    if problems.is_empty() || neutral.page_count() != 1 {
        debug!(
            "{} problems need {} pages; keeping scale 1.0",
            problems.len(),
            neutral.page_count()
        );
        return neutral;
    }

    let target = compute_font_scale(problems.len(), settings.layout);
    for &scale in scale_steps(settings.layout)
        .iter()
        .filter(|&&s| s > 1.0 && s <= target)
    {
        let scaled = paginate_at_scale(problems, settings, geometry, scale);
        if scaled.fits_single_page() {
            debug!("{} problems fit one page at scale {}", problems.len(), scale);
            return scaled;
        }
        debug!("scale {} overflows the page, trying a smaller step", scale);
    }

    neutral
}

/// A single pagination pass at a fixed font scale
pub fn paginate_at_scale(
    problems: &[Problem],
    settings: &WorksheetSettings,
    geometry: &PageGeometry,
    scale: f32,
) -> Pagination {
    let pass = Pass {
        layout: settings.layout,
        scale,
        budget: geometry.content_budget(settings.has_footnote(), scale),
        spacing: PROBLEM_SPACING * scale,
        content_width: geometry.content_width(),
    };

    let pages = match pass.layout {
        Layout::SingleColumn => pass.single_column(problems),
        Layout::TwoColumn => pass.two_column(problems),
        Layout::CompactGrid => pass.compact_grid(problems),
    };

    Pagination {
        pages,
        layout: pass.layout,
        font_scale: scale,
        budget: pass.budget,
        spacing: pass.spacing,
    }
}

/// Accumulates pages during one pass
struct PageBuilder {
    pages: Vec<Page>,
    current: Page,
    next_number: usize,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Page::starting_at(1),
            next_number: 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    fn push(&mut self, problem: &Problem, placement: Placement) {
        self.current.problems.push(problem.clone());
        self.current.placements.push(placement);
        self.next_number += 1;
    }

    /// Close the current page if it has anything on it
    fn break_page(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let page = mem::replace(&mut self.current, Page::starting_at(self.next_number));
        debug!(
            "page {} closed with {} problems",
            self.pages.len() + 1,
            page.len()
        );
        self.pages.push(page);
    }

    /// Give a problem larger than the budget a page of its own
    fn push_alone(&mut self, problem: &Problem, placement: Placement) {
        self.break_page();
        debug!("problem {} exceeds the page budget", self.next_number);
        self.push(problem, placement);
        self.current.oversized = true;
        self.break_page();
    }

    fn finish(mut self) -> Vec<Page> {
        self.break_page();
        if self.pages.is_empty() {
            self.pages.push(Page::starting_at(1));
        }
        self.pages
    }
}

/// An open compact-grid row
struct GridRow {
    index: usize,
    y: f32,
    height: f32,
    cells: usize,
}

struct Pass {
    layout: Layout,
    scale: f32,
    budget: f32,
    spacing: f32,
    content_width: f32,
}

impl Pass {
    fn height(&self, problem: &Problem) -> f32 {
        estimate_height(problem, self.layout) * self.scale
    }

    fn full_width(&self, y: f32, height: f32) -> Placement {
        Placement {
            region: Region::FullWidth,
            x: 0.0,
            y,
            width: self.content_width,
            height,
        }
    }

    fn single_column(&self, problems: &[Problem]) -> Vec<Page> {
        let mut builder = PageBuilder::new();
        let mut y = 0.0;

        for problem in problems {
            let h = self.height(problem);
            let cost = h + self.spacing;

            if cost > self.budget {
                builder.push_alone(problem, self.full_width(0.0, h));
                y = 0.0;
                continue;
            }

            if y + cost > self.budget && !builder.is_empty() {
                builder.break_page();
                y = 0.0;
            }

            builder.push(problem, self.full_width(y, h));
            y += cost;
        }

        builder.finish()
    }

    /// Strict left/right alternation within a page. A problem that does not
    /// fit its turn's column closes the page even if the other column has
    /// room. Word problems span both columns and realign them.
    fn two_column(&self, problems: &[Problem]) -> Vec<Page> {
        let column_width = ((self.content_width - COLUMN_GUTTER) / 2.0).max(0.0);
        let right_x = column_width + COLUMN_GUTTER;

        let mut builder = PageBuilder::new();
        let mut left = 0.0_f32;
        let mut right = 0.0_f32;
        let mut slot = 0usize;

        for problem in problems {
            let h = self.height(problem);
            let cost = h + self.spacing;

            if cost > self.budget {
                builder.push_alone(problem, self.full_width(0.0, h));
                (left, right, slot) = (0.0, 0.0, 0);
                continue;
            }

            if problem.is_full_width() {
                let mut y = left.max(right);
                if y + cost > self.budget && !builder.is_empty() {
                    builder.break_page();
                    y = 0.0;
                }
                builder.push(problem, self.full_width(y, h));
                left = y + cost;
                right = left;
                slot = 0;
                continue;
            }

            let mut y = if slot % 2 == 0 { left } else { right };
            if y + cost > self.budget && !builder.is_empty() {
                builder.break_page();
                (left, right, slot) = (0.0, 0.0, 0);
                y = 0.0;
            }

            let placement = if slot % 2 == 0 {
                left = y + cost;
                Placement {
                    region: Region::LeftColumn,
                    x: 0.0,
                    y,
                    width: column_width,
                    height: h,
                }
            } else {
                right = y + cost;
                Placement {
                    region: Region::RightColumn,
                    x: right_x,
                    y,
                    width: column_width,
                    height: h,
                }
            };
            builder.push(problem, placement);
            slot += 1;
        }

        builder.finish()
    }

    /// Rows of [`GRID_COLUMNS`] cells. A problem without a grid form closes
    /// the current grid block and is laid out full width below it; the next
    /// eligible problem opens a fresh row.
    fn compact_grid(&self, problems: &[Problem]) -> Vec<Page> {
        let cell_width = self.content_width / GRID_COLUMNS as f32;

        let mut builder = PageBuilder::new();
        let mut y = 0.0_f32;
        let mut row: Option<GridRow> = None;
        let mut next_row = 0usize;

        for problem in problems {
            let h = self.height(problem);
            let cost = h + self.spacing;

            if cost > self.budget {
                builder.push_alone(problem, self.full_width(0.0, h));
                (y, row, next_row) = (0.0, None, 0);
                continue;
            }

            if !problem.is_grid_eligible() {
                if let Some(open) = row.take() {
                    y = open.y + open.height + self.spacing;
                }
                if y + cost > self.budget && !builder.is_empty() {
                    builder.break_page();
                    (y, next_row) = (0.0, 0);
                }
                builder.push(problem, self.full_width(y, h));
                y += cost;
                continue;
            }

            if let Some(open) = row.as_mut() {
                if open.cells < GRID_COLUMNS {
                    let grown = open.height.max(h);
                    if open.y + grown + self.spacing <= self.budget {
                        builder.push(
                            problem,
                            Placement {
                                region: Region::GridCell {
                                    row: open.index,
                                    column: open.cells,
                                },
                                x: open.cells as f32 * cell_width,
                                y: open.y,
                                width: cell_width,
                                height: h,
                            },
                        );
                        open.cells += 1;
                        open.height = grown;
                        continue;
                    }
                    // The row cannot grow; this problem starts the next page
                    builder.break_page();
                    (y, row, next_row) = (0.0, None, 0);
                }
            }

            if let Some(full) = row.take() {
                y = full.y + full.height + self.spacing;
            }
            if y + cost > self.budget && !builder.is_empty() {
                builder.break_page();
                (y, next_row) = (0.0, 0);
            }

            builder.push(
                problem,
                Placement {
                    region: Region::GridCell {
                        row: next_row,
                        column: 0,
                    },
                    x: 0.0,
                    y,
                    width: cell_width,
                    height: h,
                },
            );
            row = Some(GridRow {
                index: next_row,
                y,
                height: h,
                cells: 1,
            });
            next_row += 1;
        }

        builder.finish()
    }
}
