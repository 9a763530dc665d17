use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::config::ServiceConfig;

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> io::Result<()> {
    fs::create_dir_all(path.as_ref())
}

/// Read a UTF-8 file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path.as_ref())
}

/// Write a string to a file, creating parent directories first
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            create_directory(parent)?;
        }
    }

    fs::write(path.as_ref(), contents)
}

/// Create every storage directory the service writes into
pub fn ensure_storage_dirs(config: &ServiceConfig) -> io::Result<()> {
    for dir in [&config.static_dir, &config.markdown_dir, &config.html_dir] {
        debug!("Ensuring directory {}", dir.display());
        create_directory(dir)?;
    }
    Ok(())
}
