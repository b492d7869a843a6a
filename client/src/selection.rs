use crate::error::SelectionError;
use crate::models::SelectedFile;
use std::path::Path;

impl SelectedFile {
    /// Reads a file from disk, guessing its MIME type from the extension the
    /// same way a browser fills in `File.type`.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, SelectionError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| SelectionError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mime = mime_guess::from_path(path)
            .first()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        Ok(Self { name, mime, bytes })
    }
}

/// Picks the file to upload out of a drop or picker selection.
///
/// Returns `Ok(None)` for an empty selection. Only the first file counts;
/// it must be a PDF.
pub fn pick_upload(files: Vec<SelectedFile>) -> Result<Option<SelectedFile>, SelectionError> {
    let total = files.len();
    let Some(file) = files.into_iter().next() else {
        return Ok(None);
    };

    if total > 1 {
        log::debug!("{} files selected, only {} is used", total, file.name);
    }

    if !file.is_pdf() {
        log::debug!("Rejected {} with type {:?}", file.name, file.mime);
        return Err(SelectionError::NotPdf { mime: file.mime });
    }

    Ok(Some(file))
}
