//! Renderer adapters
//!
//! A [`Scene`] is built once from a pagination result; the PDF exporter and
//! the preview adapter only convert it into their own units.

pub mod helpers;
pub mod pdf;
pub mod preview;
pub mod scene;

pub use pdf::PdfRenderer;
pub use preview::{render_preview, Preview};
pub use scene::{build_scene, Primitive, Scene, ScenePage, Weight};
