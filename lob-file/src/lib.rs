use std::path::{Path, PathBuf};

pub mod category;
pub mod format;
pub mod validation;

pub const MIB: u64 = 1024 * 1024;

pub const MAX_FILE_SIZE: u64 = 100 * MIB;
pub const MAX_TOTAL_SIZE: u64 = MAX_FILE_SIZE;
pub const MAX_FILE_COUNT: usize = 10;

pub const SUPPORTED_MEDIA_TYPES: [&str; 8] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "image/png",
    "image/jpeg",
    "image/jpg",
];

pub const SUPPORTED_EXTENSIONS: [&str; 8] = [
    ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".png", ".jpg", ".jpeg",
];

/// A file offered for upload. The orchestrator never copies the content, it
/// only keeps the path as handle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    pub path: PathBuf,
}

impl CandidateFile {
    pub fn new(name: &str, media_type: &str, size: u64, path: &Path) -> Self {
        Self {
            name: name.to_owned(),
            media_type: media_type.to_owned(),
            size,
            path: path.to_path_buf(),
        }
    }

    /// Lower-cased text after the last dot with a leading dot. Names without
    /// a dot resolve to the whole name.
    pub fn extension(&self) -> String {
        let extension = self.name.rsplit('.').next().unwrap_or_default();
        format!(".{}", extension.to_lowercase())
    }

    pub fn is_same(&self, other: &CandidateFile) -> bool {
        self.name == other.name && self.size == other.size
    }
}

impl AsRef<CandidateFile> for CandidateFile {
    fn as_ref(&self) -> &CandidateFile {
        self
    }
}
