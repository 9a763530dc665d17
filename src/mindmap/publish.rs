use std::path::Path;

use log::{debug, info};
use tokio::fs;

use crate::config::ServiceConfig;
use crate::files::naming::timestamped_name;
use crate::mindmap::external::{rewrite_assets, ExternalRenderer};
use crate::mindmap::page::render_document;
use crate::utils::error::ServiceError;

/// Save the submitted Markdown next to the pages generated from it
async fn save_source(config: &ServiceConfig, name: &str, markdown: &str) -> Result<(), ServiceError> {
    fs::create_dir_all(&config.markdown_dir).await?;
    let path = config.markdown_dir.join(format!("{}.md", name));
    fs::write(&path, markdown).await?;
    info!("Markdown file created: {}", path.display());
    Ok(())
}

/// Render with the built-in pipeline and store the page.
///
/// Returns the file name of the page inside the HTML directory.
pub async fn publish_builtin(config: &ServiceConfig, markdown: &str) -> Result<String, ServiceError> {
    let name = timestamped_name();
    save_source(config, &name, markdown).await?;

    let page = render_document(markdown);

    fs::create_dir_all(&config.html_dir).await?;
    let html_name = format!("{}.html", name);
    let html_path = config.html_dir.join(&html_name);
    fs::write(&html_path, page).await?;
    info!("HTML file created: {}", html_path.display());

    Ok(html_name)
}

/// Render through an external renderer, rewrite asset links and store the page
pub async fn publish_external(
    config: &ServiceConfig,
    renderer: &dyn ExternalRenderer,
    markdown: &str,
) -> Result<String, ServiceError> {
    let name = timestamped_name();
    save_source(config, &name, markdown).await?;

    let source_path = config.markdown_dir.join(format!("{}.md", name));
    let staging_path = config.markdown_dir.join(format!("{}.html", name));
    let html_name = format!("{}.html", name);

    match move_rendered(config, renderer, &source_path, &staging_path, &html_name).await {
        Ok(()) => fs::remove_file(&staging_path).await?,
        Err(e) => {
            if let Err(cleanup) = fs::remove_file(&staging_path).await {
                debug!("No staged output removed at {}: {}", staging_path.display(), cleanup);
            }
            return Err(e);
        }
    }

    Ok(html_name)
}

/// Run the renderer into the staging path and store the rewritten page
async fn move_rendered(
    config: &ServiceConfig,
    renderer: &dyn ExternalRenderer,
    source_path: &Path,
    staging_path: &Path,
    html_name: &str,
) -> Result<(), ServiceError> {
    renderer.render(source_path, staging_path).await?;

    let rendered = fs::read_to_string(staging_path).await?;
    let page = rewrite_assets(&rendered, &config.external_renderer.asset_rewrites);

    fs::create_dir_all(&config.html_dir).await?;
    let html_path = config.html_dir.join(html_name);
    fs::write(&html_path, page).await?;
    info!("HTML file rendered by {} moved to: {}", renderer.name(), html_path.display());

    Ok(())
}
