//! How much more fits on the last page

use super::height::estimate_height;
use super::paginate::{Pagination, Region};
use crate::cli::Layout;
use crate::config::defaults::GRID_COLUMNS;
use crate::model::{Operator, Problem};

/// Free space on the last page and what would still fit into it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemainingCapacity {
    /// Unused budget in inches (the emptier column under two-column)
    pub remaining: f32,
    pub basic_equations: usize,
    /// Assumes four options per question
    pub multiple_choice: usize,
}

/// Capacity left on the last page of `pagination`
pub fn remaining_capacity(pagination: &Pagination) -> RemainingCapacity {
    let page = match pagination.pages.last() {
        Some(page) if !page.oversized => page,
        _ => {
            return RemainingCapacity {
                remaining: 0.0,
                basic_equations: 0,
                multiple_choice: 0,
            }
        }
    };

    let scale = pagination.font_scale;
    let spacing = pagination.spacing;
    let budget = pagination.budget;
    let layout = pagination.layout;

    let basic = Problem::basic("", "0", Operator::Add, "0");
    let question = Problem::multiple_choice("", "?", ["", "", "", ""]);
    let basic_cost = estimate_height(&basic, layout) * scale + spacing;
    let question_cost = estimate_height(&question, layout) * scale + spacing;

    let fit = |free: f32, cost: f32| -> usize {
        if cost <= 0.0 {
            0
        } else {
            (free.max(0.0) / cost).floor() as usize
        }
    };

    match layout {
        Layout::TwoColumn => {
            let left = (budget - page.column_used_height(Region::LeftColumn, spacing)).max(0.0);
            let right = (budget - page.column_used_height(Region::RightColumn, spacing)).max(0.0);
            RemainingCapacity {
                remaining: left.max(right),
                basic_equations: fit(left, basic_cost) + fit(right, basic_cost),
                multiple_choice: fit(left, question_cost) + fit(right, question_cost),
            }
        }
        Layout::SingleColumn | Layout::CompactGrid => {
            let remaining = (budget - page.used_height(spacing)).max(0.0);
            let (per_row, open_cells) = if layout == Layout::CompactGrid {
                // Empty cells left in the row that is still open
                let open = match page.placements.last() {
                    Some(last) => match last.region {
                        Region::GridCell { column, .. } => {
                            GRID_COLUMNS.saturating_sub(column + 1)
                        }
                        _ => 0,
                    },
                    None => 0,
                };
                (GRID_COLUMNS, open)
            } else {
                (1, 0)
            };
            RemainingCapacity {
                remaining,
                basic_equations: fit(remaining, basic_cost) * per_row + open_cells,
                multiple_choice: fit(remaining, question_cost),
            }
        }
    }
}
