use std::{
    fmt::Display,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use lob_file::{
    category::{self, FileCategory},
    validation::{RejectedEntry, ValidationOptions},
    CandidateFile,
};

pub use self::progress::{ProgressRecord, UploadStatus};

mod progress;

#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct FileId(String);

impl FileId {
    pub fn generate(name: &str) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_millis())
            .unwrap_or_default();

        Self(format!("{}-{}-{:016x}", name, millis, rand::random::<u64>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct ManagedFile {
    pub id: FileId,
    pub file: Arc<CandidateFile>,
    pub progress: ProgressRecord,
    pub has_preview: bool,
    pub transfer: u32,
}

impl ManagedFile {
    pub fn new(file: Arc<CandidateFile>) -> Self {
        let id = FileId::generate(&file.name);
        Self {
            progress: ProgressRecord::new(id.clone(), file.size),
            id,
            file,
            has_preview: false,
            transfer: 0,
        }
    }

    pub fn category(&self) -> FileCategory {
        category::categorize(&self.file)
    }

    pub fn status(&self) -> UploadStatus {
        self.progress.status
    }
}

/// State of one upload session. Created per run and torn down with
/// [`crate::shutdown`].
#[derive(Debug, Default)]
pub struct Session {
    pub files: Vec<ManagedFile>,
    pub options: ValidationOptions,
    pub rejected: Vec<RejectedEntry<Arc<CandidateFile>>>,
    pub size_warning: Option<String>,
}

impl Session {
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn get(&self, id: &FileId) -> Option<&ManagedFile> {
        self.files.iter().find(|file| &file.id == id)
    }

    pub fn get_mut(&mut self, id: &FileId) -> Option<&mut ManagedFile> {
        self.files.iter_mut().find(|file| &file.id == id)
    }

    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|file| file.file.size).sum()
    }

    pub fn count(&self, status: UploadStatus) -> usize {
        self.files
            .iter()
            .filter(|file| file.status() == status)
            .count()
    }

    pub fn can_start_all(&self) -> bool {
        self.count(UploadStatus::Pending) > 0
    }
}
