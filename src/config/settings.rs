use crate::cli::{Args, Layout};
use crate::layout::PageGeometry;
use crate::model::WorksheetSettings;

/// Runtime settings for pagination and PDF generation
#[derive(Debug, Clone)]
pub struct Settings {
    pub worksheet: WorksheetSettings,
    pub geometry: PageGeometry,

    // Output options
    pub compress: bool,
    pub debug_boxes: bool,

    // CLI overrides (None = use the worksheet file)
    title_override: Option<String>,
    footnote_override: Option<String>,
    layout_override: Option<Layout>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            worksheet: WorksheetSettings::default(),
            geometry: PageGeometry::letter(),
            compress: true,
            debug_boxes: false,
            title_override: None,
            footnote_override: None,
            layout_override: None,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        let mut settings = Self {
            compress: args.compress(),
            debug_boxes: args.debug_boxes,
            title_override: args.title.clone(),
            footnote_override: args.footnote.clone(),
            layout_override: args.layout,
            ..Default::default()
        };
        settings.apply_overrides();
        settings
    }

    /// Merge with the settings stored in a worksheet file.
    ///
    /// Values given on the command line win over the file.
    pub fn with_worksheet(mut self, worksheet: &WorksheetSettings) -> Self {
        self.worksheet = worksheet.clone();
        self.apply_overrides();
        self
    }

    fn apply_overrides(&mut self) {
        if let Some(ref title) = self.title_override {
            self.worksheet.title = title.clone();
        }
        if let Some(ref footnote) = self.footnote_override {
            self.worksheet.footnote = footnote.clone();
        }
        if let Some(layout) = self.layout_override {
            self.worksheet.layout = layout;
        }
    }

    pub fn layout(&self) -> Layout {
        self.worksheet.layout
    }
}
