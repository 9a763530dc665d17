use std::path::{Path, PathBuf};

use axum::body::Bytes;
use chrono::{DateTime, Local};
use futures_util::{Stream, StreamExt};
use log::{debug, info, warn};
use serde::Serialize;
use tokio::fs;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::config::ServiceConfig;
use crate::files::naming::{is_allowed_file, sanitize_requested_name, unique_filename};
use crate::utils::error::ServiceError;

/// Result of a stored upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceipt {
    pub message: String,
    pub original_filename: String,
    pub saved_filename: String,
    pub download_url: String,
    pub file_size: u64,
}

/// One entry of the upload listing
#[derive(Debug, Clone, Serialize)]
pub struct StoredFile {
    pub filename: String,
    pub size: u64,
    pub modified_time: String,
    pub download_url: String,
}

/// Public download URL for a stored file
pub fn download_url(base_url: &str, filename: &str) -> String {
    format!("{}download/{}", base_url, filename)
}

/// Stream an upload into the store, enforcing the type allow-list and size limit.
///
/// The partial file is removed whenever the upload does not complete.
pub async fn save_upload<S, E>(
    config: &ServiceConfig,
    original_filename: &str,
    base_url: &str,
    chunks: S,
) -> Result<UploadReceipt, ServiceError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    if original_filename.trim().is_empty() {
        return Err(ServiceError::BadRequest("No file selected".to_string()));
    }

    if !is_allowed_file(original_filename, &config.allowed_extensions) {
        return Err(ServiceError::UnsupportedFileType {
            allowed: config.allowed_extensions.join(", "),
        });
    }

    fs::create_dir_all(&config.static_dir).await?;

    let saved_filename = unique_filename(original_filename);
    let path = config.static_dir.join(&saved_filename);

    let file_size = match write_chunks(config, &path, chunks).await {
        Ok(size) => size,
        Err(e) => {
            if let Err(remove_err) = fs::remove_file(&path).await {
                debug!("Could not remove partial upload {}: {}", path.display(), remove_err);
            }
            warn!("Upload of {} rejected: {}", original_filename, e);
            return Err(e);
        }
    };

    info!("Stored {} as {} ({} bytes)", original_filename, saved_filename, file_size);

    Ok(UploadReceipt {
        message: "File uploaded successfully".to_string(),
        original_filename: original_filename.to_string(),
        download_url: download_url(base_url, &saved_filename),
        saved_filename,
        file_size,
    })
}

async fn write_chunks<S, E>(config: &ServiceConfig, path: &Path, mut chunks: S) -> Result<u64, ServiceError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: std::fmt::Display,
{
    let file = fs::File::create(path).await?;
    let mut writer = BufWriter::with_capacity(config.chunk_size, file);
    let mut file_size: u64 = 0;

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk.map_err(|e| ServiceError::BadRequest(format!("Upload interrupted: {}", e)))?;

        file_size += chunk.len() as u64;
        if file_size > config.max_file_size {
            return Err(ServiceError::FileTooLarge {
                limit: config.max_file_size_label(),
            });
        }

        writer.write_all(&chunk).await?;
    }

    writer.flush().await?;
    Ok(file_size)
}

/// Resolve a requested name to an existing regular file inside `dir`
pub async fn resolve_stored_file(dir: &Path, requested: &str) -> Result<PathBuf, ServiceError> {
    let name = sanitize_requested_name(requested)?;
    let path = dir.join(name);

    match fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Ok(path),
        _ => Err(ServiceError::NotFound(requested.to_string())),
    }
}

/// List regular, non-hidden files directly under the store root, sorted by name
pub async fn list_files(config: &ServiceConfig, base_url: &str) -> Result<Vec<StoredFile>, ServiceError> {
    let mut files = Vec::new();

    match fs::metadata(&config.static_dir).await {
        Ok(meta) if meta.is_dir() => {}
        _ => return Ok(files),
    }

    let mut entries = fs::read_dir(&config.static_dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let filename = entry.file_name().to_string_lossy().to_string();
        if filename.starts_with('.') {
            continue;
        }

        // Follows symlinks, matching how downloads resolve names
        let meta = match fs::metadata(entry.path()).await {
            Ok(meta) => meta,
            Err(e) => {
                debug!("Skipping {} in listing: {}", filename, e);
                continue;
            }
        };
        if !meta.is_file() {
            continue;
        }

        let modified_time = meta
            .modified()
            .map(|time| {
                DateTime::<Local>::from(time)
                    .naive_local()
                    .format("%Y-%m-%dT%H:%M:%S")
                    .to_string()
            })
            .unwrap_or_default();

        files.push(StoredFile {
            download_url: download_url(base_url, &filename),
            filename,
            size: meta.len(),
            modified_time,
        });
    }

    files.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use std::convert::Infallible;
    use tempfile::TempDir;

    const BASE: &str = "http://localhost:5001/";

    fn config(dir: &TempDir) -> ServiceConfig {
        ServiceConfig {
            max_file_size: 16,
            chunk_size: 4,
            ..ServiceConfig::default().with_storage_root(dir.path())
        }
    }

    fn chunks(parts: &[&'static str]) -> impl Stream<Item = Result<Bytes, Infallible>> + Unpin {
        stream::iter(parts.iter().map(|p| Ok(Bytes::from_static(p.as_bytes()))).collect::<Vec<_>>())
    }

    fn stored_names(dir: &Path) -> Vec<String> {
        std::fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_save_upload() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let receipt = save_upload(&config, "notes.md", BASE, chunks(&["# he", "llo"])).await.unwrap();

        assert_eq!(receipt.original_filename, "notes.md");
        assert_eq!(receipt.file_size, 7);
        assert!(receipt.saved_filename.ends_with(".md"));
        assert_eq!(receipt.download_url, format!("{}download/{}", BASE, receipt.saved_filename));

        let stored = std::fs::read_to_string(dir.path().join(&receipt.saved_filename)).unwrap();
        assert_eq!(stored, "# hello");
    }

    #[tokio::test]
    async fn test_oversize_upload_leaves_nothing_behind() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let result = save_upload(&config, "big.txt", BASE, chunks(&["0123456789", "0123456789"])).await;

        assert!(matches!(result, Err(ServiceError::FileTooLarge { .. })));
        assert!(stored_names(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_exact_limit_is_accepted() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let receipt = save_upload(&config, "fit.txt", BASE, chunks(&["0123456789abcdef"])).await.unwrap();
        assert_eq!(receipt.file_size, 16);
    }

    #[tokio::test]
    async fn test_rejects_type_and_empty_name() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let result = save_upload(&config, "tool.exe", BASE, chunks(&["MZ"])).await;
        assert!(matches!(result, Err(ServiceError::UnsupportedFileType { .. })));

        let result = save_upload(&config, "", BASE, chunks(&["x"])).await;
        assert!(matches!(result, Err(ServiceError::BadRequest(_))));

        assert!(stored_names(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_interrupted_stream_is_cleaned_up() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);

        let parts: Vec<Result<Bytes, String>> = vec![Ok(Bytes::from_static(b"abc")), Err("reset".to_string())];
        let result = save_upload(&config, "part.txt", BASE, stream::iter(parts)).await;

        assert!(matches!(result, Err(ServiceError::BadRequest(_))));
        assert!(stored_names(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_list_files_skips_hidden_and_directories() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        std::fs::create_dir_all(&config.html_dir).unwrap();
        std::fs::write(config.html_dir.join("page.html"), "x").unwrap();
        std::fs::write(dir.path().join(".secret"), "x").unwrap();
        std::fs::write(dir.path().join("b.txt"), "bb").unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();

        let files = list_files(&config, BASE).await.unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(files[1].size, 2);
        assert_eq!(files[0].download_url, "http://localhost:5001/download/a.txt");
        assert!(chrono::NaiveDateTime::parse_from_str(&files[0].modified_time, "%Y-%m-%dT%H:%M:%S").is_ok());
    }

    #[tokio::test]
    async fn test_list_files_missing_directory() {
        let dir = TempDir::new().unwrap();
        let config = ServiceConfig::default().with_storage_root(&dir.path().join("absent"));
        assert!(list_files(&config, BASE).await.unwrap().is_empty());

        let root = dir.path().join("plain-file");
        std::fs::write(&root, "x").unwrap();
        let config = ServiceConfig::default().with_storage_root(&root);
        assert!(list_files(&config, BASE).await.unwrap().is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_files_skips_unreadable_entries() {
        let dir = TempDir::new().unwrap();
        let config = config(&dir);
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("dangling.txt")).unwrap();

        let files = list_files(&config, BASE).await.unwrap();

        let names: Vec<&str> = files.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.txt"]);
    }

    #[tokio::test]
    async fn test_resolve_stored_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("a.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        assert!(resolve_stored_file(dir.path(), "a.txt").await.is_ok());
        assert!(matches!(resolve_stored_file(dir.path(), "b.txt").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(resolve_stored_file(dir.path(), "sub").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            resolve_stored_file(dir.path(), "../a.txt").await,
            Err(ServiceError::InvalidFileName(_))
        ));
    }
}
