//! Unit conversion layer
//!
//! Page geometry and every layout constant are authored once in canonical
//! units (inches). The preview works in screen pixels at a fixed density and
//! the PDF exporter in points and millimetres; both convert exclusively
//! through [`UnitSpace`], so a block that takes `h` inches occupies the same
//! fraction of the page in either rendering.

use serde::Serialize;

use crate::config::defaults::{
    FOOTER_HEIGHT, FOOTNOTE_HEIGHT, HEADER_SPACING, HORIZONTAL_LINE_SPACING, MM_PER_INCH,
    NAME_LINE_HEIGHT, NAME_LINE_SPACING, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH, POINTS_PER_INCH,
    SCREEN_DPI, TITLE_FONT_SIZE,
};

/// A coordinate system that layout values can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitSpace {
    /// Inches, the unit all constants are authored in
    Canonical,
    /// Preview pixels at [`SCREEN_DPI`]
    Screen,
    /// PDF points
    Document,
    /// Millimetres, used for printpdf page sizes and positions
    Millimeters,
}

impl UnitSpace {
    /// How many units of this space make one inch
    pub fn per_inch(&self) -> f32 {
        match self {
            UnitSpace::Canonical => 1.0,
            UnitSpace::Screen => SCREEN_DPI,
            UnitSpace::Document => POINTS_PER_INCH,
            UnitSpace::Millimeters => MM_PER_INCH,
        }
    }

    /// Convert a canonical value into this space
    pub fn from_canonical(&self, inches: f32) -> f32 {
        inches * self.per_inch()
    }

    /// Convert a value in this space back to canonical units
    pub fn to_canonical(&self, value: f32) -> f32 {
        value / self.per_inch()
    }
}

/// Inches to preview pixels
pub fn to_screen_units(inches: f32) -> f32 {
    UnitSpace::Screen.from_canonical(inches)
}

/// Preview pixels to inches
pub fn from_screen_units(pixels: f32) -> f32 {
    UnitSpace::Screen.to_canonical(pixels)
}

/// Inches to PDF points
pub fn to_document_units(inches: f32) -> f32 {
    UnitSpace::Document.from_canonical(inches)
}

/// PDF points to inches
pub fn from_document_units(points: f32) -> f32 {
    UnitSpace::Document.to_canonical(points)
}

/// Fixed page size and margin in canonical units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}

impl PageGeometry {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// 8.5 × 11 inch page with 0.75 inch margins
    pub fn letter() -> Self {
        Self::new(PAGE_WIDTH, PAGE_HEIGHT, PAGE_MARGIN)
    }

    /// Width available between the left and right margins
    pub fn content_width(&self) -> f32 {
        (self.width - 2.0 * self.margin).max(0.0)
    }

    /// Height available between the top and bottom margins
    pub fn content_height(&self) -> f32 {
        (self.height - 2.0 * self.margin).max(0.0)
    }

    /// Vertical space left for problems once the header, footer and optional
    /// footnote are reserved. All reservations grow with `scale`.
    pub fn content_budget(&self, has_footnote: bool, scale: f32) -> f32 {
        let mut reserved = header_height(scale) + footer_height(scale);
        if has_footnote {
            reserved += footnote_height(scale);
        }
        (self.content_height() - reserved).max(0.0)
    }

    /// The geometry expressed in another unit space
    pub fn in_space(&self, space: UnitSpace) -> Self {
        Self::new(
            space.from_canonical(self.width),
            space.from_canonical(self.height),
            space.from_canonical(self.margin),
        )
    }
}

/// Title, name/date line and rule at the top of every page
pub fn header_height(scale: f32) -> f32 {
    let title = from_document_units(TITLE_FONT_SIZE) + HEADER_SPACING;
    let name_line = NAME_LINE_SPACING + NAME_LINE_HEIGHT;
    (title + name_line + HORIZONTAL_LINE_SPACING) * scale
}

/// "Page N of M" line at the bottom of every page
pub fn footer_height(scale: f32) -> f32 {
    FOOTER_HEIGHT * scale
}

pub fn footnote_height(scale: f32) -> f32 {
    FOOTNOTE_HEIGHT * scale
}
