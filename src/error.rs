use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorksheetError {
    #[error("Invalid problem on line {line}: {message}")]
    InvalidLine { line: usize, message: String },

    #[error("Invalid directive on line {line}: {message}")]
    InvalidDirective { line: usize, message: String },

    #[error("Invalid worksheet JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("Preview serialization error: {0}")]
    Preview(#[from] serde_json::Error),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown layout: {0}")]
    InvalidLayout(String),

    #[error("Unknown operator: {0}")]
    InvalidOperator(String),
}
