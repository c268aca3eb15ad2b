//! Loading files picked for `file` and form-data bodies.

use std::path::Path;

use requestor_domain::FileBlob;

/// Reads `path` into a [`FileBlob`], guessing its media type from the
/// extension.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn load_file_blob(path: &Path) -> std::io::Result<FileBlob> {
    let data = tokio::fs::read(path).await?;
    let name = path
        .file_name()
        .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
    let media_type = mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string());

    tracing::debug!(file = %name, bytes = data.len(), "file blob loaded");
    Ok(FileBlob::new(name, media_type, data))
}
