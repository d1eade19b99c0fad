//! Text extraction from various file formats

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::io::{Cursor, Read};

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Extract plain text from file contents of a known type
pub fn extract_text_from_bytes(bytes: &[u8], file_type: &FileType) -> Result<String> {
    match file_type {
        FileType::Pdf => PdfExtractor.extract(bytes),
        FileType::Docx => DocxExtractor.extract(bytes),
        FileType::Text => PlainTextExtractor.extract(bytes),
        FileType::Markdown => MarkdownExtractor.extract(bytes),
        FileType::Unknown => Err(ResumeMatcherError::UnsupportedFormat(
            "Cannot extract text from an unknown file type".to_string(),
        )),
    }
}

/// Extract plain text from file contents described by a MIME type
pub fn extract_text_for_mime(bytes: &[u8], mime: &str) -> Result<String> {
    match FileType::from_mime(mime) {
        FileType::Unknown => Err(ResumeMatcherError::UnsupportedFormat(format!(
            "Unsupported MIME type: {}",
            mime
        ))),
        file_type => extract_text_from_bytes(bytes, &file_type),
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeMatcherError::PdfExtraction(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// Reads the main document part of a Word (OOXML) file
pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")?
            .read_to_string(&mut document_xml)?;

        self.xml_to_text(&document_xml)
    }
}

impl DocxExtractor {
    fn xml_to_text(&self, xml: &str) -> Result<String> {
        let text = xml
            .replace("</w:p>", "\n")
            .replace("<w:tab/>", " ")
            .replace("<w:br/>", "\n");

        let tag_regex = Regex::new(r"<[^>]*>")
            .map_err(|e| ResumeMatcherError::DocxExtraction(e.to_string()))?;
        let stripped = tag_regex.replace_all(&text, "");

        Ok(collapse_lines(&decode_entities(&stripped)))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| ResumeMatcherError::InvalidInput(format!("Text is not valid UTF-8: {}", e)))
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let markdown_content = PlainTextExtractor.extract(bytes)?;

        let parser = Parser::new(&markdown_content);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        self.html_to_text(&html_output)
    }
}

impl MarkdownExtractor {
    fn html_to_text(&self, html: &str) -> Result<String> {
        let text = html
            .replace("<br>", "\n")
            .replace("<br />", "\n")
            .replace("</p>", "\n\n")
            .replace("&nbsp;", " ");

        let re = Regex::new(r"<[^>]*>")
            .map_err(|e| ResumeMatcherError::InvalidInput(e.to_string()))?;
        let clean_text = re.replace_all(&text, "");

        Ok(collapse_lines(&decode_entities(&clean_text)))
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn collapse_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
