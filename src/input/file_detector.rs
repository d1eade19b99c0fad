//! File type detection

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Docx,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "docx" => FileType::Docx,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// Detect from a MIME type, ignoring parameters such as `; charset=utf-8`
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim().to_lowercase();
        match essence.as_str() {
            "application/pdf" => FileType::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => FileType::Docx,
            "text/plain" => FileType::Text,
            "text/markdown" | "text/x-markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileType::Pdf => "PDF",
            FileType::Docx => "DOCX",
            FileType::Text => "plain text",
            FileType::Markdown => "Markdown",
            FileType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}
