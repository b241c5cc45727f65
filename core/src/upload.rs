//! Simulated AOI file upload.
//!
//! Only the file name is inspected. Nothing is read or parsed; accepted
//! files produce canned status messages on a fixed schedule.

use serde::{Deserialize, Serialize};

use crate::error::DrishtiError;
use crate::notice::NoticeLevel;
use crate::time::{Timer, millis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// Accepted extensions, lowercase with the leading dot.
    pub extensions: Vec<String>,
    pub validate_delay_ms: u32,
    pub close_delay_ms: u32,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            extensions: [".kml", ".kmz", ".geojson", ".json", ".txt", ".zip"]
                .into_iter()
                .map(String::from)
                .collect(),
            validate_delay_ms: 1500,
            close_delay_ms: 2000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// A zipped Shapefile, which gets an extra validation stage.
    Shapefile,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Validating,
    ShapefileValidated,
    Uploaded { file_name: String },
    /// The dialog should close and clear its status.
    Closed,
}

impl UploadStatus {
    pub fn message(&self) -> String {
        match self {
            Self::Validating => "Validating Shapefile components...".to_string(),
            Self::ShapefileValidated => {
                "Shapefile validated! AOI loaded on map.".to_string()
            }
            Self::Uploaded { file_name } => {
                format!("\"{file_name}\" uploaded successfully!")
            }
            Self::Closed => String::new(),
        }
    }

    pub fn level(&self) -> NoticeLevel {
        match self {
            Self::Validating => NoticeLevel::Warning,
            _ => NoticeLevel::Success,
        }
    }
}

/// The lowercase text after the last `.`, with the dot. A name without a
/// dot is treated as all extension.
pub fn file_extension(file_name: &str) -> String {
    let last = file_name.rsplit('.').next().unwrap_or(file_name);
    format!(".{}", last.to_lowercase())
}

pub fn check_file(
    settings: &UploadSettings,
    file_name: &str,
) -> Result<UploadKind, DrishtiError> {
    let extension = file_extension(file_name);
    if !settings.extensions.iter().any(|e| *e == extension) {
        tracing::warn!(file_name, %extension, "rejected upload");
        return Err(DrishtiError::UnsupportedFileExtension);
    }
    Ok(if extension == ".zip" {
        UploadKind::Shapefile
    } else {
        UploadKind::Document
    })
}

/// Runs the upload simulation, reporting each status change.
///
/// A rejected file reports nothing and leaves the dialog open.
pub async fn process_upload<T: Timer>(
    timer: &T,
    settings: &UploadSettings,
    file_name: &str,
    mut on_status: impl FnMut(UploadStatus),
) -> Result<UploadKind, DrishtiError> {
    let kind = check_file(settings, file_name)?;
    tracing::info!(file_name, ?kind, "processing upload");

    match kind {
        UploadKind::Shapefile => {
            on_status(UploadStatus::Validating);
            timer.sleep(millis(settings.validate_delay_ms)).await;
            on_status(UploadStatus::ShapefileValidated);
        }
        UploadKind::Document => on_status(UploadStatus::Uploaded {
            file_name: file_name.to_string(),
        }),
    }

    timer.sleep(millis(settings.close_delay_ms)).await;
    on_status(UploadStatus::Closed);
    Ok(kind)
}
