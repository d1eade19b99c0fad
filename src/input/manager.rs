//! Reads resume and job description files from disk into plain text

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::extract_text_from_bytes;
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Loads documents by path, remembering extracted text per path when caching is on
pub struct InputManager {
    cache: HashMap<PathBuf, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        if let Some(text) = self.cache.get(path) {
            debug!("Cache hit for {}", path.display());
            return Ok(text.clone());
        }

        let file_type = detect_file_type(path)?;
        let metadata = fs::metadata(path).await.map_err(|_| {
            ResumeMatcherError::InvalidInput(format!("File does not exist: {}", path.display()))
        })?;
        if !metadata.is_file() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "Not a regular file: {}",
                path.display()
            )));
        }

        info!("Extracting {} text from {} ({} bytes)", file_type, path.display(), metadata.len());
        let bytes = fs::read(path).await?;
        let text = extract_text_from_bytes(&bytes, &file_type)?;

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }
        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

fn detect_file_type(path: &Path) -> Result<FileType> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            ResumeMatcherError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

    match FileType::from_extension(extension) {
        FileType::Unknown => Err(ResumeMatcherError::UnsupportedFormat(format!(
            "Unsupported file type for: {}",
            path.display()
        ))),
        file_type => Ok(file_type),
    }
}
