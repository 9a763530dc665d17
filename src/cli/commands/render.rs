use log::info;
use std::path::Path;

use crate::mindmap::render_document;
use crate::utils::error::BoxResult;
use crate::utils::fs::{read_file, write_file};

/// Handle the render command
pub fn handle_render_command(input: &Path, output: Option<&Path>) -> BoxResult<()> {
    let markdown = read_file(input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?;

    let page = render_document(&markdown);

    match output {
        Some(path) => {
            write_file(path, &page)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            info!("Mind map written to {}", path.display());
        }
        None => print!("{}", page),
    }

    Ok(())
}
