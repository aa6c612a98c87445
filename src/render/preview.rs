//! On-screen preview: the scene in CSS pixels at 96 DPI, top-left origin

use serde::Serialize;

use crate::error::RenderError;
use crate::layout::units::from_document_units;
use crate::layout::UnitSpace;

use super::scene::{Primitive, Scene};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPage {
    pub number: usize,
    pub elements: Vec<Primitive>,
}

/// Display list consumed by the preview pane
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub font_scale: f32,
    pub pages: Vec<PreviewPage>,
}

impl Preview {
    /// Convert every page of `scene` to pixels.
    ///
    /// Font sizes and stroke widths become pixels too, so the browser can use
    /// them directly.
    pub fn from_scene(scene: &Scene) -> Self {
        let space = UnitSpace::Screen;
        let pages = scene
            .pages
            .iter()
            .map(|page| PreviewPage {
                number: page.number,
                elements: page
                    .primitives
                    .iter()
                    .map(|primitive| to_pixels(primitive, space))
                    .collect(),
            })
            .collect();

        Self {
            title: scene.title.clone(),
            width: space.from_canonical(scene.width),
            height: space.from_canonical(scene.height),
            font_scale: scene.font_scale,
            pages,
        }
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn to_pixels(primitive: &Primitive, space: UnitSpace) -> Primitive {
    let points = |pt: f32| space.from_canonical(from_document_units(pt));
    match primitive.in_space(space) {
        Primitive::Text {
            x,
            y,
            size,
            weight,
            text,
        } => Primitive::Text {
            x,
            y,
            size: points(size),
            weight,
            text,
        },
        Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            thickness,
        } => Primitive::Line {
            x1,
            y1,
            x2,
            y2,
            thickness: points(thickness),
        },
        other => other,
    }
}

/// Render `scene` as preview JSON
pub fn render_preview(scene: &Scene) -> Result<String, RenderError> {
    Preview::from_scene(scene).to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::layout::plan;
    use crate::model::{Operator, Problem};
    use crate::render::scene::{build_scene, Weight};

    #[test]
    fn test_letter_page_in_pixels() {
        let settings = Settings::default();
        let pagination = plan(&[], &settings.worksheet, &settings.geometry);
        let preview = Preview::from_scene(&build_scene(&pagination, &settings));
        assert_eq!(preview.width, 816.0);
        assert_eq!(preview.height, 1056.0);
        assert_eq!(preview.pages.len(), 1);
    }

    #[test]
    fn test_font_sizes_become_pixels() {
        let text = Primitive::Text {
            x: 0.5,
            y: 1.0,
            size: 12.0,
            weight: Weight::Bold,
            text: "Name:".to_string(),
        };
        match to_pixels(&text, UnitSpace::Screen) {
            Primitive::Text { x, y, size, .. } => {
                assert!((x - 48.0).abs() < 1e-4);
                assert!((y - 96.0).abs() < 1e-4);
                assert!((size - 16.0).abs() < 1e-4);
            }
            other => panic!("unexpected primitive {:?}", other),
        }
    }

    #[test]
    fn test_preview_json_shape() {
        let settings = Settings::default();
        let problems = vec![Problem::basic("a", "5", Operator::Add, "3")];
        let pagination = plan(&problems, &settings.worksheet, &settings.geometry);
        let json = render_preview(&build_scene(&pagination, &settings)).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["fontScale"], serde_json::json!(3.5));
        let elements = value["pages"][0]["elements"].as_array().unwrap();
        assert!(elements
            .iter()
            .any(|e| e["type"] == "text" && e["text"] == "5 + 3 = ____"));
    }
}
