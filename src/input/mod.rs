//! Document input: type detection and text extraction for PDF, DOCX, text and Markdown

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::FileType;
pub use manager::InputManager;
pub use text_extractor::{extract_text_for_mime, extract_text_from_bytes};
