use chrono::Utc;
use uuid::Uuid;

use crate::utils::error::ServiceError;
use crate::utils::path::{dotted_extension, normalized_extension};

/// `<unix-seconds>_<8 hex chars>`, used for generated pages and stored uploads
pub fn timestamped_name() -> String {
    let seconds = Utc::now().timestamp();
    let id = Uuid::new_v4().simple().to_string();

    format!("{}_{}", seconds, &id[..8])
}

/// Unique on-disk name for an upload; only the original extension survives
pub fn unique_filename(original: &str) -> String {
    format!("{}{}", timestamped_name(), dotted_extension(original))
}

/// Whether the upload's extension is in the allow-list (case-insensitive)
pub fn is_allowed_file(filename: &str, allowed: &[String]) -> bool {
    let ext = normalized_extension(filename);
    !ext.is_empty() && allowed.iter().any(|a| a.eq_ignore_ascii_case(&ext))
}

/// Check a file name taken from a URL before it is joined onto a directory
pub fn sanitize_requested_name(name: &str) -> Result<&str, ServiceError> {
    let invalid = name.is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\', '\0'])
        || name.contains("..");

    if invalid {
        return Err(ServiceError::InvalidFileName(name.to_string()));
    }

    Ok(name)
}
