//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("DOCX extraction error: {0}")]
    DocxExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected LLM response: {0}")]
    LlmResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

/// Convert zip container errors raised while unpacking DOCX files
impl From<zip::result::ZipError> for ResumeMatcherError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeMatcherError::DocxExtraction(err.to_string())
    }
}

impl ResumeMatcherError {
    /// Wrap a collaborator failure (extraction, remote scoring) as an analysis failure.
    pub fn into_analysis_failure(self) -> Self {
        match self {
            ResumeMatcherError::AnalysisFailed(_) => self,
            other => ResumeMatcherError::AnalysisFailed(other.to_string()),
        }
    }
}
