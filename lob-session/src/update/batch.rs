use std::sync::Arc;

use lob_file::{
    category::FileCategory,
    validation::{self, RejectedEntry},
    CandidateFile,
};

use crate::{
    message::SessionResult,
    model::{ManagedFile, Session},
};

use super::lifecycle;

const WARNING_THRESHOLD: f64 = 0.8;

#[tracing::instrument(skip_all)]
pub fn add(
    session: &mut Session,
    candidates: &[CandidateFile],
    rejections: &[RejectedEntry<CandidateFile>],
) -> Vec<SessionResult> {
    let mut union: Vec<Arc<CandidateFile>> =
        session.files.iter().map(|managed| managed.file.clone()).collect();

    for candidate in candidates {
        if union.iter().any(|file| file.is_same(candidate)) {
            tracing::debug!("candidate already selected: {}", candidate.name);
            continue;
        }
        union.push(Arc::new(candidate.clone()));
    }

    let validation = validation::validate_batch(union, &session.options);

    let mut results = Vec::new();
    let mut existing = std::mem::take(&mut session.files);
    for file in validation.accepted {
        let managed = match existing.iter().position(|managed| managed.file.is_same(&file)) {
            Some(index) => existing.remove(index),
            None => {
                let mut managed = ManagedFile::new(file);
                if managed.category() == FileCategory::Image {
                    managed.has_preview = true;
                    results.push(SessionResult::PreviewRequested(
                        managed.id.clone(),
                        managed.file.clone(),
                    ));
                }

                tracing::debug!("file added: {}", managed.id);

                managed
            }
        };
        session.files.push(managed);
    }

    for dropped in existing {
        tracing::info!("file rejected on re-validation: {}", dropped.id);
        results.extend(lifecycle::release(dropped));
    }

    session.rejected = validation.rejected;
    session
        .rejected
        .extend(rejections.iter().map(|rejection| RejectedEntry {
            file: Arc::new(rejection.file.clone()),
            errors: rejection.errors.clone(),
        }));

    session.size_warning = size_warning(session.total_size(), session.options.max_total_size);

    if !session.files.is_empty() {
        results.push(SessionResult::FilesAccepted(
            session.files.iter().map(|managed| managed.id.clone()).collect(),
        ));
    }

    tracing::info!(
        "selection updated: {} accepted, {} rejected",
        session.files.len(),
        session.rejected.len()
    );

    results
}

pub fn clear_rejected(session: &mut Session) -> Vec<SessionResult> {
    session.rejected.clear();
    Vec::new()
}

fn size_warning(total: u64, max_total: u64) -> Option<String> {
    if total as f64 > max_total as f64 * WARNING_THRESHOLD && total <= max_total {
        Some(format!(
            "Approaching size limit. {}MB remaining.",
            validation::to_rounded_mib(max_total - total)
        ))
    } else {
        None
    }
}
