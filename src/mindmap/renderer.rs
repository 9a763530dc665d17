use crate::mindmap::types::{OutlineGroup, OutlineTree};

/// Deepest level with its own style in the page template
pub const MAX_STYLE_LEVEL: usize = 6;

/// Style level used for a node; deeper headings share the last palette entry
pub fn style_level(level: usize) -> usize {
    level.min(MAX_STYLE_LEVEL)
}

/// Render the outline as nested `div` markup, in input order
pub fn render_tree(tree: &OutlineTree) -> String {
    let mut html = String::new();
    for group in &tree.groups {
        render_group(group, &mut html);
    }
    html
}

fn render_group(group: &OutlineGroup, html: &mut String) {
    html.push_str(&format!(
        "<div class=\"node level-{}\" data-kind=\"{}\">{}</div>",
        style_level(group.node.level),
        group.node.kind.as_str(),
        html_escape::encode_text(&group.node.title)
    ));

    if !group.children.is_empty() {
        html.push_str("<div class=\"children\">");
        for child in &group.children {
            render_group(child, html);
        }
        html.push_str("</div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mindmap::classifier::classify_document;
    use crate::mindmap::outline::build_outline;

    fn render(text: &str) -> String {
        render_tree(&build_outline(&classify_document(text)))
    }

    #[test]
    fn test_render_nested() {
        let html = render("# A\n## B");
        assert_eq!(
            html,
            concat!(
                "<div class=\"node level-1\" data-kind=\"heading\">A</div>",
                "<div class=\"children\">",
                "<div class=\"node level-2\" data-kind=\"heading\">B</div>",
                "</div>"
            )
        );
    }

    #[test]
    fn test_leaf_has_no_children_block() {
        let html = render("- only");
        assert_eq!(html, "<div class=\"node level-1\" data-kind=\"list\">only</div>");
    }

    #[test]
    fn test_style_level_is_capped() {
        assert_eq!(style_level(1), 1);
        assert_eq!(style_level(6), 6);
        assert_eq!(style_level(7), 6);
        assert_eq!(style_level(42), 6);

        let six = render("# a\n## b\n### c\n#### d\n##### e\n###### six");
        let seven = render("# a\n## b\n### c\n#### d\n##### e\n###### f\n####### seven");
        assert!(six.contains("level-6\" data-kind=\"heading\">six<"));
        assert!(seven.contains("level-6\" data-kind=\"heading\">seven<"));
        assert!(!seven.contains("level-7"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let html = render("# <script>alert(1)</script> & co");
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; co"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        assert_eq!(render("just prose\n\nmore prose"), "");
    }
}
