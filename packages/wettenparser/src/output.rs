//! JSON output for extracted articles.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::ArticleRecord;

/// Generate the JSON array for a sequence of articles.
///
/// Output is pretty-printed UTF-8; non-ASCII characters are written as-is.
pub fn generate_json(articles: &[ArticleRecord]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(articles)?;
    json.push('\n');
    Ok(json)
}

/// Save articles as a JSON file.
///
/// The content is fully generated before anything touches the disk, then
/// written to a temp file beside the target, synced, and renamed into
/// place. A failure leaves no partial output behind.
///
/// # Returns
/// Path to the saved file
pub fn save_json(articles: &[ArticleRecord], output_file: &Path) -> Result<PathBuf> {
    let content = generate_json(articles)?;

    let output_dir = match output_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&output_dir)?;

    let file_name = output_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = output_dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(output_file)?;
    }

    if let Err(e) = fs::rename(&temp_file, output_file) {
        let _ = fs::remove_file(&temp_file);
        return Err(e.into());
    }

    Ok(output_file.to_path_buf())
}
