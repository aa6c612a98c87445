pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

pub use cli::Layout;
pub use config::Settings;
pub use error::{ConfigError, RenderError, WorksheetError};
pub use layout::{
    compute_font_scale, estimate_height, paginate, plan, remaining_capacity, Page, Pagination,
    RemainingCapacity,
};
pub use model::{Operator, Problem, ProblemKind, Worksheet, WorksheetSettings};
pub use parser::{parse_worksheet, InputFormat};
pub use render::{build_scene, render_preview, PdfRenderer, Scene};

/// High-level API for rendering a worksheet to PDF.
///
/// Paginates `problems` with the layout, title and footnote in `settings`,
/// applies the font-scale heuristic, and returns the PDF file contents.
///
/// # Example
///
/// ```no_run
/// use worksheet_to_pdf::{render_worksheet, Operator, Problem, Settings};
///
/// let problems = vec![
///     Problem::basic("1", "5", Operator::Add, "3"),
///     Problem::word("2", "Tom has 3 cats and 2 dogs. How many pets does he have?"),
/// ];
///
/// let pdf_bytes = render_worksheet(&problems, &Settings::default()).unwrap();
/// std::fs::write("worksheet.pdf", pdf_bytes).unwrap();
/// ```
pub fn render_worksheet(problems: &[Problem], settings: &Settings) -> Result<Vec<u8>, RenderError> {
    let pagination = plan(problems, &settings.worksheet, &settings.geometry);
    let scene = build_scene(&pagination, settings);
    PdfRenderer::new(settings.compress).render(&scene)
}
