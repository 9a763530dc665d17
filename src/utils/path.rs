use std::path::Path;

/// Extension of `name` including the leading dot, as written (".PDF", ".md")
///
/// Returns an empty string when there is no extension, matching how
/// dot-files such as ".env" have none.
pub fn dotted_extension<P: AsRef<Path>>(name: P) -> String {
    name.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

/// Lower-cased form of [`dotted_extension`], for allow-list checks
pub fn normalized_extension<P: AsRef<Path>>(name: P) -> String {
    dotted_extension(name).to_lowercase()
}

/// Normalise a configured extension to lower case with a leading dot
pub fn normalize_extension_entry(ext: &str) -> String {
    let ext = ext.trim().to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{}", ext)
    }
}
