use std::fmt::Display;

use crate::CandidateFile;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FileCategory {
    Image,
    Document,
    Spreadsheet,
    Unknown,
}

impl Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileCategory::Image => write!(f, "image"),
            FileCategory::Document => write!(f, "document"),
            FileCategory::Spreadsheet => write!(f, "spreadsheet"),
            FileCategory::Unknown => write!(f, "unknown"),
        }
    }
}

// NOTE: only the declared media type is inspected, so files accepted by
// extension may still end up as unknown
pub fn categorize(file: &CandidateFile) -> FileCategory {
    from_media_type(&file.media_type)
}

pub fn from_media_type(media_type: &str) -> FileCategory {
    if media_type.starts_with("image/") {
        FileCategory::Image
    } else if media_type.contains("pdf") || media_type.contains("word") {
        FileCategory::Document
    } else if media_type.contains("excel") || media_type.contains("spreadsheet") {
        FileCategory::Spreadsheet
    } else {
        FileCategory::Unknown
    }
}
