//! Resume file packaging
//!
//! Reads a resume from disk and checks it against the picker's accept list
//! before anything is sent.

use std::path::Path;

use crate::error::{RighterError, RighterResult};

/// File extensions the resume picker accepts
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".txt", ".docx", ".pdf"];

/// A resume file ready to be sent as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    /// Build an upload from in-memory content
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> RighterResult<Self> {
        let file_name = file_name.into();
        let extension = extension_of(&file_name);
        let mime = mime_for(&extension).ok_or_else(|| {
            RighterError::Upload(format!("Unsupported file type: {}", display_ext(&extension)))
        })?;

        Ok(Self {
            file_name,
            mime,
            bytes,
        })
    }

    /// Read a resume file from disk
    pub fn from_path(path: impl AsRef<Path>) -> RighterResult<Self> {
        let path = path.as_ref();

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| RighterError::Upload(format!("Not a file: {}", path.display())))?
            .to_string();

        // Check the extension before touching the disk
        let extension = extension_of(&file_name);
        if mime_for(&extension).is_none() {
            return Err(RighterError::Upload(format!(
                "Unsupported file type: {}",
                display_ext(&extension)
            )));
        }

        let bytes = std::fs::read(path).map_err(|e| {
            RighterError::Upload(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::new(file_name, bytes)
    }

    /// Accept list formatted the way a file picker shows it
    pub fn accept_list() -> String {
        ACCEPTED_EXTENSIONS.join(",")
    }
}

fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}

fn display_ext(extension: &str) -> &str {
    if extension.is_empty() {
        "(none)"
    } else {
        extension
    }
}

fn mime_for(extension: &str) -> Option<&'static str> {
    match extension {
        ".txt" => Some("text/plain"),
        ".pdf" => Some("application/pdf"),
        ".docx" => {
            Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        _ => None,
    }
}
