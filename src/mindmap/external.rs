//! External mind-map renderer.
//!
//! The built-in pipeline is always available. This module drives an external
//! command (markmap by default) that produces a richer interactive page, and
//! post-processes that page so its scripts load from the service.

use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::process::Command;

use crate::config::{AssetRewrite, ExternalRendererConfig};

/// Outcome of an external render that did not succeed
#[derive(Debug, thiserror::Error)]
pub enum ExternalRenderError {
    #[error("External renderer '{0}' not found. Make sure it is installed and on the PATH.")]
    Unavailable(String),

    #[error("External renderer exited with {code:?}: {stderr}")]
    Failed { code: Option<i32>, stderr: String },

    #[error("External renderer timed out after {0:?}")]
    TimedOut(Duration),

    #[error("External renderer I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Something that turns a Markdown file into a standalone HTML file
#[async_trait]
pub trait ExternalRenderer: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Render `markdown_path` into `output_path`
    async fn render(&self, markdown_path: &Path, output_path: &Path) -> Result<(), ExternalRenderError>;
}

/// Runs the markmap command line tool
#[derive(Debug, Clone)]
pub struct MarkmapRenderer {
    program: String,
    timeout: Duration,
}

impl MarkmapRenderer {
    pub fn new(program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ExternalRendererConfig) -> Self {
        Self::new(config.program.clone(), config.timeout())
    }
}

#[async_trait]
impl ExternalRenderer for MarkmapRenderer {
    fn name(&self) -> &str {
        &self.program
    }

    async fn render(&self, markdown_path: &Path, output_path: &Path) -> Result<(), ExternalRenderError> {
        let mut command = Command::new(&self.program);
        command
            .arg(markdown_path)
            .arg("--output")
            .arg(output_path)
            .arg("--no-open")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("Running {:?}", command.as_std());

        let child = command.spawn().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExternalRenderError::Unavailable(self.program.clone()),
            _ => ExternalRenderError::Io(e),
        })?;

        // Dropping the future on timeout drops the child, which kills it
        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(output) => output?,
            Err(_) => {
                warn!("{} did not finish within {:?}", self.program, self.timeout);
                return Err(ExternalRenderError::TimedOut(self.timeout));
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("{} exited with {}", self.program, output.status);
        if !stdout.trim().is_empty() {
            debug!("{} stdout: {}", self.program, stdout.trim());
        }

        if !output.status.success() {
            return Err(ExternalRenderError::Failed {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        if !output_path.exists() {
            return Err(ExternalRenderError::Failed {
                code: output.status.code(),
                stderr: format!("no output written to {}", output_path.display()),
            });
        }

        info!("{} rendered {}", self.program, output_path.display());
        Ok(())
    }
}

/// Apply literal URL rewrites to an externally rendered page, in order
pub fn rewrite_assets(html: &str, rules: &[AssetRewrite]) -> String {
    rules.iter().fold(html.to_string(), |page, rule| {
        if rule.from.is_empty() {
            page
        } else {
            page.replace(&rule.from, &rule.to)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExternalRendererConfig;
    use tempfile::TempDir;

    #[test]
    fn test_rewrite_default_cdn_links() {
        let rules = ExternalRendererConfig::default().asset_rewrites;
        let page = concat!(
            "<script src=\"https://cdn.jsdelivr.net/npm/d3@7.9.0/dist/d3.min.js\"></script>",
            "<script src=\"https://cdn.jsdelivr.net/npm/markmap-view@0.18.10/dist/browser/index.js\"></script>",
            "<link href=\"https://cdn.jsdelivr.net/npm/markmap-toolbar@0.18.10/dist/style.css\">",
        );

        let rewritten = rewrite_assets(page, &rules);
        assert!(rewritten.contains("src=\"../html/d3.min.js\""));
        assert!(rewritten.contains("src=\"../htmljs/index2.js\""));
        assert!(rewritten.contains("href=\"../htmljs/style.css\""));
        assert!(!rewritten.contains("cdn.jsdelivr.net"));
    }

    #[test]
    fn test_rewrites_apply_in_order() {
        let rules = vec![AssetRewrite::new("a", "b"), AssetRewrite::new("b", "c")];
        assert_eq!(rewrite_assets("a", &rules), "c");
        assert_eq!(rewrite_assets("x", &[AssetRewrite::new("", "y")]), "x");
    }

    #[tokio::test]
    async fn test_missing_program_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let renderer = MarkmapRenderer::new("definitely-not-a-real-markmap-binary", Duration::from_secs(5));

        let result = renderer
            .render(&dir.path().join("in.md"), &dir.path().join("out.html"))
            .await;
        assert!(matches!(result, Err(ExternalRenderError::Unavailable(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_program_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        // `false` ignores its arguments and exits with 1
        let renderer = MarkmapRenderer::new("false", Duration::from_secs(5));

        let result = renderer
            .render(&dir.path().join("in.md"), &dir.path().join("out.html"))
            .await;
        assert!(matches!(result, Err(ExternalRenderError::Failed { code: Some(1), .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_success_without_output_is_a_failure() {
        let dir = TempDir::new().unwrap();
        // `true` exits 0 but never writes the page
        let renderer = MarkmapRenderer::new("true", Duration::from_secs(5));

        let result = renderer
            .render(&dir.path().join("in.md"), &dir.path().join("out.html"))
            .await;
        assert!(matches!(result, Err(ExternalRenderError::Failed { code: Some(0), .. })));
    }
}
