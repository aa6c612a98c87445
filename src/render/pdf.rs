//! PDF exporter
//!
//! Converts a [`Scene`] to millimetres with a bottom-left origin and writes it
//! with printpdf using the builtin Helvetica faces.

use printpdf::{BuiltinFont, Color, Mm, PaintMode, PdfDocument, PdfPage, PdfSaveOptions};

use crate::error::RenderError;
use crate::layout::UnitSpace;

use super::helpers::colors::{DEBUG_RED, INK, RULE_GRAY};
use super::helpers::compress::compress_pdf;
use super::helpers::layer::LayerBuilder;
use super::scene::{Primitive, Scene, ScenePage, Weight};

/// Outline thickness of debug boxes in points
const DEBUG_STROKE: f32 = 0.3;

/// Writes worksheet scenes as PDF
pub struct PdfRenderer {
    compress: bool,
}

impl PdfRenderer {
    pub fn new(compress: bool) -> Self {
        Self { compress }
    }

    /// Generate the PDF bytes for every page of `scene`
    pub fn render(&self, scene: &Scene) -> Result<Vec<u8>, RenderError> {
        let mut doc = PdfDocument::new(&scene.title);

        let width = Mm(UnitSpace::Millimeters.from_canonical(scene.width));
        let height = Mm(UnitSpace::Millimeters.from_canonical(scene.height));

        let pages = scene
            .pages
            .iter()
            .map(|page| {
                let mut layer = LayerBuilder::new();
                render_page(&mut layer, page, scene.height);
                PdfPage::new(width, height, layer.into_ops())
            })
            .collect();

        doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("printpdf reported {} warnings", warnings.len());
        }

        if !self.compress {
            return Ok(bytes);
        }

        match compress_pdf(&bytes) {
            Ok(compressed) => Ok(compressed),
            Err(e) => {
                log::warn!("{}; writing uncompressed PDF", e);
                Ok(bytes)
            }
        }
    }
}

/// Scene inches (top-left origin) to PDF millimetres (bottom-left origin)
fn mm(inches: f32) -> Mm {
    Mm(UnitSpace::Millimeters.from_canonical(inches))
}

fn render_page(layer: &mut LayerBuilder, page: &ScenePage, page_height: f32) {
    let flip = |y: f32| mm(page_height - y);

    layer.set_fill_color(Color::Rgb(INK));
    layer.set_outline_color(Color::Rgb(INK));

    for primitive in &page.primitives {
        match primitive {
            Primitive::Text {
                x,
                y,
                size,
                weight,
                text,
            } => {
                let font = match weight {
                    Weight::Regular => BuiltinFont::Helvetica,
                    Weight::Bold => BuiltinFont::HelveticaBold,
                };
                layer.use_text(text.as_str(), *size, mm(*x), flip(*y), font);
            }
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                thickness,
            } => {
                layer.set_outline_thickness(*thickness);
                layer.add_line(mm(*x1), flip(*y1), mm(*x2), flip(*y2));
            }
            Primitive::Circle {
                cx,
                cy,
                radius,
                filled,
            } => {
                let mode = if *filled {
                    PaintMode::Fill
                } else {
                    PaintMode::Stroke
                };
                layer.set_outline_color(Color::Rgb(RULE_GRAY));
                layer.set_outline_thickness(0.75);
                layer.add_circle(mm(*cx), flip(*cy), mm(*radius), mode);
                layer.set_outline_color(Color::Rgb(INK));
            }
            Primitive::DebugBox {
                x,
                y,
                width,
                height,
            } => {
                layer.set_outline_color(Color::Rgb(DEBUG_RED));
                layer.set_outline_thickness(DEBUG_STROKE);
                layer.add_rect(
                    mm(*x),
                    flip(*y + *height),
                    mm(*x + *width),
                    flip(*y),
                    PaintMode::Stroke,
                );
                layer.set_outline_color(Color::Rgb(INK));
            }
        }
    }
}
