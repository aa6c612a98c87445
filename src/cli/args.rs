use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(name = "worksheet-to-pdf")]
#[command(
    author,
    version,
    about = "Paginate math worksheet problems onto letter pages and export them to PDF"
)]
pub struct Args {
    /// Input worksheet file (.json, or the plain-text problem format)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output PDF file path (defaults to input with .pdf extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Worksheet layout (overrides the layout stored in the worksheet)
    #[arg(short = 'l', long, value_enum)]
    pub layout: Option<Layout>,

    /// Worksheet title (overrides the title stored in the worksheet)
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Footnote printed at the bottom of every page
    #[arg(long)]
    pub footnote: Option<String>,

    /// Also write the on-screen preview display list as JSON
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Print the page split and exit without writing a PDF
    #[arg(long)]
    pub summary: bool,

    /// Skip stream compression of the generated PDF
    #[arg(long)]
    pub no_compress: bool,

    /// Outline every problem placement (layout debugging)
    #[arg(long)]
    pub debug_boxes: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// How problems are arranged on a page
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// One problem per row across the full content width
    #[default]
    SingleColumn,
    /// Two independently filled columns
    TwoColumn,
    /// Ten-cell rows of simple equations
    CompactGrid,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::SingleColumn => "single-column",
            Layout::TwoColumn => "two-column",
            Layout::CompactGrid => "compact-grid",
        }
    }
}

impl FromStr for Layout {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "single-column" | "single" => Ok(Layout::SingleColumn),
            "two-column" | "two" => Ok(Layout::TwoColumn),
            "compact-grid" | "grid" => Ok(Layout::CompactGrid),
            _ => Err(ConfigError::InvalidLayout(s.to_string())),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Args {
    /// Get the output path, defaulting to input with .pdf extension
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("pdf"))
    }

    /// Check if the PDF should be compressed
    pub fn compress(&self) -> bool {
        !self.no_compress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(input: &str) -> Args {
        Args {
            input: PathBuf::from(input),
            output: None,
            layout: None,
            title: None,
            footnote: None,
            preview: None,
            summary: false,
            no_compress: false,
            debug_boxes: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_output_path_defaults_to_pdf() {
        let args = args_for("worksheets/addition.json");
        assert_eq!(args.output_path(), PathBuf::from("worksheets/addition.pdf"));
    }

    #[test]
    fn test_output_path_override() {
        let mut args = args_for("addition.txt");
        args.output = Some(PathBuf::from("out/sheet.pdf"));
        assert_eq!(args.output_path(), PathBuf::from("out/sheet.pdf"));
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("two-column".parse::<Layout>(), Ok(Layout::TwoColumn));
        assert_eq!("Compact Grid".parse::<Layout>(), Ok(Layout::CompactGrid));
        assert_eq!("single_column".parse::<Layout>(), Ok(Layout::SingleColumn));
        assert!("three-column".parse::<Layout>().is_err());
    }

    #[test]
    fn test_layout_serde_names() {
        let json = serde_json::to_string(&Layout::CompactGrid).unwrap();
        assert_eq!(json, "\"compact-grid\"");
        let layout: Layout = serde_json::from_str("\"two-column\"").unwrap();
        assert_eq!(layout, Layout::TwoColumn);
    }

    #[test]
    fn test_cli_parses_layout_flag() {
        let args =
            Args::parse_from(["worksheet-to-pdf", "sheet.json", "-l", "compact-grid", "-vv"]);
        assert_eq!(args.layout, Some(Layout::CompactGrid));
        assert_eq!(args.verbose, 2);
        assert!(args.compress());
    }
}
