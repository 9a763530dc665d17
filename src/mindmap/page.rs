use chrono::Local;
use log::debug;

use crate::mindmap::classifier::classify_document;
use crate::mindmap::outline::build_outline;
use crate::mindmap::renderer::render_tree;
use crate::mindmap::types::OutlineTree;

const PAGE_TEMPLATE: &str = include_str!("template.html");

/// Shown in place of the tree when the document has no outline
pub const EMPTY_PLACEHOLDER: &str = "<div class=\"empty-message\">No content</div>";

/// Timestamp format printed at the bottom of every page
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Embed a rendered outline into the page template
pub fn assemble_page(tree: &OutlineTree, generated_at: &str) -> String {
    let content = if tree.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        render_tree(tree)
    };

    // Content goes in last so placeholders typed by the user stay literal
    PAGE_TEMPLATE
        .replace("{{timestamp}}", generated_at)
        .replace("{{content}}", &content)
}

/// Run the full Markdown to mind-map pipeline with an explicit timestamp
pub fn render_document_at(markdown: &str, generated_at: &str) -> String {
    let nodes = classify_document(markdown);
    debug!("Classified {} outline nodes", nodes.len());

    let tree = build_outline(&nodes);
    debug!("Built outline with {} top-level groups", tree.groups.len());

    assemble_page(&tree, generated_at)
}

/// Run the full Markdown to mind-map pipeline, stamped with the local time
pub fn render_document(markdown: &str) -> String {
    let now = Local::now().format(TIMESTAMP_FORMAT).to_string();
    render_document_at(markdown, &now)
}
