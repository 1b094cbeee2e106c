use crate::{CandidateFile, MAX_FILE_SIZE, MAX_TOTAL_SIZE, MIB, SUPPORTED_EXTENSIONS, SUPPORTED_MEDIA_TYPES};

#[derive(Clone, Debug, PartialEq)]
pub struct ValidationOptions {
    pub max_file_size: u64,
    pub max_total_size: u64,
    pub allowed_types: Vec<String>,
    pub allowed_extensions: Vec<String>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE,
            max_total_size: MAX_TOTAL_SIZE,
            allowed_types: SUPPORTED_MEDIA_TYPES.iter().map(|t| t.to_string()).collect(),
            allowed_extensions: SUPPORTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RejectedEntry<F> {
    pub file: F,
    pub errors: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchValidation<F> {
    pub accepted: Vec<F>,
    pub rejected: Vec<RejectedEntry<F>>,
}

pub fn validate_one(file: &CandidateFile, options: &ValidationOptions) -> ValidationResult {
    let mut errors = Vec::new();

    if file.size > options.max_file_size {
        errors.push(format!(
            "File size ({}MB) exceeds maximum allowed size ({}MB)",
            to_rounded_mib(file.size),
            to_rounded_mib(options.max_file_size)
        ));
    }

    if !options.allowed_types.iter().any(|t| t == &file.media_type) {
        errors.push(format!("File type \"{}\" is not supported", file.media_type));
    }

    let extension = file.extension();
    if !options.allowed_extensions.iter().any(|e| e == &extension) {
        errors.push(format!("File extension \"{}\" is not supported", extension));
    }

    if file.size == 0 {
        errors.push("File is empty".to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[tracing::instrument(skip_all)]
pub fn validate_batch<F: AsRef<CandidateFile>>(
    files: Vec<F>,
    options: &ValidationOptions,
) -> BatchValidation<F> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for file in files {
        let result = validate_one(file.as_ref(), options);
        if result.is_valid {
            accepted.push(file);
        } else {
            rejected.push(RejectedEntry {
                file,
                errors: result.errors,
            });
        }
    }

    let total: u64 = accepted.iter().map(|file| file.as_ref().size).sum();
    if total > options.max_total_size {
        tracing::debug!(
            "total size {} exceeds limit {}, rejecting {} accepted files",
            total,
            options.max_total_size,
            accepted.len()
        );

        let error = format!(
            "Total upload size ({}MB) exceeds limit ({}MB)",
            to_rounded_mib(total),
            to_rounded_mib(options.max_total_size)
        );

        rejected.extend(accepted.into_iter().map(|file| RejectedEntry {
            file,
            errors: vec![error.clone()],
        }));

        return BatchValidation {
            accepted: Vec::new(),
            rejected,
        };
    }

    BatchValidation { accepted, rejected }
}

pub fn to_rounded_mib(bytes: u64) -> u64 {
    (bytes as f64 / MIB as f64).round() as u64
}
