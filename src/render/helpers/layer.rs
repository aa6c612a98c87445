//! Collects printpdf 0.8 operations for one page
//!
//! Coordinates are millimetres with the PDF bottom-left origin; the scene
//! exporter does the flip from the top-left scene space.

use printpdf::{
    BuiltinFont, Color, LinePoint, Mm, Op, PaintMode, Point, Polygon, PolygonRing, Pt, TextItem,
    WindingOrder,
};

/// Magic number for approximating a quarter circle with one cubic Bezier
const KAPPA: f32 = 0.552_284_8;

/// A builder that collects PDF operations
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor { col: color });
    }

    pub fn set_outline_color(&mut self, color: Color) {
        self.ops.push(Op::SetOutlineColor { col: color });
    }

    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with a builtin font, baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(
        &mut self,
        text: S,
        font_size: f32,
        x: Mm,
        y: Mm,
        font: BuiltinFont,
    ) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point {
                x: x.into(),
                y: y.into(),
            },
        });
        self.ops.push(Op::SetFontSizeBuiltinFont {
            size: Pt(font_size),
            font,
        });
        self.ops.push(Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text_str)],
            font,
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Add a rectangle from lower-left (x1, y1) to upper-right (x2, y2)
    pub fn add_rect(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm, mode: PaintMode) {
        let points = [(x1, y1), (x2, y1), (x2, y2), (x1, y2)]
            .into_iter()
            .map(|(x, y)| corner(x, y))
            .collect();
        self.push_polygon(points, mode);
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Mm, y1: Mm, x2: Mm, y2: Mm) {
        self.push_polygon(vec![corner(x1, y1), corner(x2, y2)], PaintMode::Stroke);
    }

    /// Draw a circle from four cubic Bezier arcs
    pub fn add_circle(&mut self, center_x: Mm, center_y: Mm, radius: Mm, mode: PaintMode) {
        let (cx, cy, r) = (center_x.0, center_y.0, radius.0);
        let k = KAPPA * r;

        // Start at the right, then counter-clockwise through top, left, bottom
        #[rustfmt::skip]
        let path: [(f32, f32, bool); 13] = [
            (cx + r, cy, false),
            (cx + r, cy + k, true), (cx + k, cy + r, true), (cx, cy + r, true),
            (cx - k, cy + r, true), (cx - r, cy + k, true), (cx - r, cy, true),
            (cx - r, cy - k, true), (cx - k, cy - r, true), (cx, cy - r, true),
            (cx + k, cy - r, true), (cx + r, cy - k, true), (cx + r, cy, true),
        ];

        let points = path
            .iter()
            .map(|&(x, y, bezier)| LinePoint {
                p: Point {
                    x: Mm(x).into(),
                    y: Mm(y).into(),
                },
                bezier,
            })
            .collect();
        self.push_polygon(points, mode);
    }

    fn push_polygon(&mut self, points: Vec<LinePoint>, mode: PaintMode) {
        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode,
            winding_order: WindingOrder::NonZero,
        };
        self.ops.push(Op::DrawPolygon { polygon });
    }
}

fn corner(x: Mm, y: Mm) -> LinePoint {
    LinePoint {
        p: Point {
            x: x.into(),
            y: y.into(),
        },
        bezier: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_skipped() {
        let mut layer = LayerBuilder::new();
        layer.use_text("", 12.0, Mm(10.0), Mm(10.0), BuiltinFont::Helvetica);
        assert!(layer.ops().is_empty());

        layer.use_text("7 + 2", 12.0, Mm(10.0), Mm(10.0), BuiltinFont::Helvetica);
        assert_eq!(layer.ops().len(), 5);
    }

    #[test]
    fn test_shapes_push_one_polygon_each() {
        let mut layer = LayerBuilder::new();
        layer.add_line(Mm(0.0), Mm(0.0), Mm(10.0), Mm(0.0));
        layer.add_rect(Mm(0.0), Mm(0.0), Mm(5.0), Mm(5.0), PaintMode::Stroke);
        layer.add_circle(Mm(5.0), Mm(5.0), Mm(2.0), PaintMode::Fill);
        assert_eq!(layer.into_ops().len(), 3);
    }
}
