use uuid::Uuid;

use crate::{uploads::types::UploadKind, UseCaseError};

/// Returns the extension the stored file should get.
pub fn validate_mime_type(kind: UploadKind, mime_type: &str) -> Result<&'static str, UseCaseError> {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    kind.allowed_types()
        .iter()
        .find(|(allowed, _)| *allowed == essence)
        .map(|(_, extension)| *extension)
        .ok_or(UseCaseError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}.",
            mime_type,
            kind.allowed_types()
                .iter()
                .map(|(allowed, _)| *allowed)
                .collect::<Vec<_>>()
                .join(", ")
        )))
}

pub fn validate_size(size: u64, limit: u64) -> Result<(), UseCaseError> {
    match size > limit {
        true => Err(UseCaseError::PayloadTooLarge(format!(
            "File is too large. The limit is {} bytes.",
            limit
        ))),
        false => Ok(()),
    }
}

pub fn new_file_name(extension: &str) -> String {
    format!("{}.{}", Uuid::now_v7(), extension)
}

/// Only names this service could have generated: no separators, no parent references.
pub fn validate_stored_file_name(file_name: &str) -> Result<(), UseCaseError> {
    let valid = !file_name.is_empty()
        && !file_name.starts_with('.')
        && file_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !file_name.contains("..");
    match valid {
        true => Ok(()),
        false => Err(UseCaseError::BadRequest("Invalid file name.".to_string())),
    }
}

pub fn public_url(kind: UploadKind, file_name: &str) -> String {
    format!("/uploads/{}/{}", kind.dir_name(), file_name)
}
