use regex::Regex;
use lazy_static::lazy_static;

use crate::mindmap::types::OutlineNode;

lazy_static! {
    static ref ORDERED_ITEM_REGEX: Regex = Regex::new(r"^[0-9]+\. ").unwrap();
}

/// Classify a single line of Markdown.
///
/// Returns `None` for blank lines and for anything that is neither a heading
/// nor a list item. Titles are kept verbatim; escaping happens at render time.
pub fn classify_line(line: &str) -> Option<OutlineNode> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.starts_with('#') {
        let title = line.trim_start_matches('#');
        let level = line.len() - title.len();
        return Some(OutlineNode::heading(level, title.trim()));
    }

    if let Some(rest) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Some(OutlineNode::list_item(rest.trim()));
    }

    if let Some(marker) = ORDERED_ITEM_REGEX.find(line) {
        return Some(OutlineNode::list_item(line[marker.end()..].trim()));
    }

    None
}

/// Classify every line of a document, in order
pub fn classify_document(text: &str) -> Vec<OutlineNode> {
    text.split('\n').filter_map(classify_line).collect()
}
