//! Pagination and layout measurement
//!
//! Everything in here is pure: the same problems and settings always produce
//! the same pages, and nothing is cached between calls.

pub mod capacity;
pub mod font_scale;
pub mod height;
pub mod paginate;
pub mod units;

pub use capacity::{remaining_capacity, RemainingCapacity};
pub use font_scale::{compute_font_scale, scale_steps, FONT_SCALE_MAX_PROBLEMS};
pub use height::{estimate_height, estimated_word_lines, wrap_text};
pub use paginate::{paginate, paginate_at_scale, plan, Page, Pagination, Placement, Region};
pub use units::{PageGeometry, UnitSpace};
