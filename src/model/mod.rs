pub mod problem;
pub mod worksheet;

pub use problem::{Operator, Problem, ProblemKind};
pub use worksheet::{Worksheet, WorksheetSettings};
