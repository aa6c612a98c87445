//! Helper utilities for PDF rendering

pub mod colors;
pub mod compress;
pub mod layer;
pub mod text_metrics;

pub use colors::{DEBUG_RED, INK, RULE_GRAY};
pub use compress::compress_pdf;
pub use layer::LayerBuilder;
pub use text_metrics::{get_helvetica_bold_measurer, get_helvetica_measurer, BuiltinFontMeasurer};
