//! Saving the generated document
//!
//! Writes go to a temp file in the target directory and are renamed into
//! place, so a failed write never leaves a truncated document behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{RighterError, RighterResult};

/// Filename every generated document is saved under
pub const DOWNLOAD_FILENAME: &str = "Rewritten_Resume.docx";

/// Write `document` to `dir/filename` atomically
pub fn save_document(dir: &Path, filename: &str, document: &[u8]) -> RighterResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        RighterError::Download(format!("Failed to create directory {}: {}", dir.display(), e))
    })?;

    let path = dir.join(filename);
    let temp_path = dir.join(format!(".{}.part", filename));

    let written = write_temp(&temp_path, document).and_then(|()| {
        fs::rename(&temp_path, &path).map_err(|e| format!("Failed to rename temp file: {}", e))
    });

    if let Err(message) = written {
        // Never leave a partial file behind
        let _ = fs::remove_file(&temp_path);
        return Err(RighterError::Download(message));
    }

    Ok(path)
}

/// Write and sync the temp file
fn write_temp(temp_path: &Path, document: &[u8]) -> Result<(), String> {
    let file =
        File::create(temp_path).map_err(|e| format!("Failed to create temp file: {}", e))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(document)
        .map_err(|e| format!("Failed to write document: {}", e))?;
    writer
        .flush()
        .map_err(|e| format!("Failed to flush document: {}", e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| format!("Failed to sync document: {}", e))?;

    Ok(())
}
