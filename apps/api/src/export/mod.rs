// Downloadable renditions of a resume: JSON backup and Word document.
// The print rendition lives with the renderer (`render::html`).

pub mod docx;
pub mod json;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Packaging failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
