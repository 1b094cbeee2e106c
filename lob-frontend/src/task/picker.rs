use std::path::{Path, PathBuf};

use lob_file::{validation::RejectedEntry, CandidateFile};
use tokio::fs;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

const MEDIA_TYPES_BY_EXTENSION: [(&str, &str); 8] = [
    (".pdf", "application/pdf"),
    (".doc", "application/msword"),
    (
        ".docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    (".xls", "application/vnd.ms-excel"),
    (
        ".xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
];

pub type Picked = (Vec<CandidateFile>, Vec<RejectedEntry<CandidateFile>>);

/// Turns paths into candidates. Paths that are not readable files, or every
/// path of a batch larger than `max_files`, end up rejected.
#[tracing::instrument]
pub async fn pick(paths: Vec<PathBuf>, max_files: usize) -> Picked {
    let too_many = paths.len() > max_files;
    if too_many {
        tracing::warn!("{} paths exceed the limit of {} files", paths.len(), max_files);
    }

    let mut candidates = Vec::new();
    let mut rejected = Vec::new();
    for path in paths {
        match describe(&path).await {
            Ok(candidate) if too_many => rejected.push(RejectedEntry {
                file: candidate,
                errors: vec!["Too many files".to_owned()],
            }),
            Ok(candidate) => candidates.push(candidate),
            Err(error) => {
                tracing::warn!("unable to read {:?}: {}", path, error);

                let mut errors = vec![format!("Unable to read file: {}", error)];
                if too_many {
                    errors.insert(0, "Too many files".to_owned());
                }

                rejected.push(RejectedEntry {
                    file: CandidateFile::new(&file_name(&path), FALLBACK_MEDIA_TYPE, 0, &path),
                    errors,
                });
            }
        }
    }

    (candidates, rejected)
}

async fn describe(path: &Path) -> Result<CandidateFile, std::io::Error> {
    let metadata = fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }

    let name = file_name(path);
    let media_type = media_type(path, &name);

    Ok(CandidateFile::new(&name, &media_type, metadata.len(), path))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

fn media_type(path: &Path, name: &str) -> String {
    let extension = name
        .rsplit_once('.')
        .map(|(_, extension)| format!(".{}", extension.to_lowercase()));

    if let Some(extension) = extension {
        if let Some((_, media_type)) = MEDIA_TYPES_BY_EXTENSION
            .iter()
            .find(|(known, _)| *known == extension)
        {
            return media_type.to_string();
        }
    }

    match infer::get_from_path(path) {
        Ok(Some(kind)) => kind.mime_type().to_owned(),
        Ok(None) => FALLBACK_MEDIA_TYPE.to_owned(),
        Err(error) => {
            tracing::debug!("sniffing media type failed for {:?}: {}", path, error);
            FALLBACK_MEDIA_TYPE.to_owned()
        }
    }
}
