use crate::mindmap::types::{OutlineGroup, OutlineNode, OutlineTree};

/// Level of the implicit root every classified node descends from
pub const ROOT_LEVEL: usize = 0;

/// Build the outline tree for a classified document.
///
/// Classified nodes never sit at the root level, so all of them are
/// descendants of the implicit root and the first real tier is level 1.
pub fn build_outline(nodes: &[OutlineNode]) -> OutlineTree {
    OutlineTree {
        groups: group_at(nodes, ROOT_LEVEL + 1),
    }
}

/// Group `nodes` at `target` level.
///
/// Each group starts with a node at exactly `target` and owns every following
/// node that is deeper than `target`. A shallower node ends the scan. A deeper
/// node with no owner at `target` is dropped.
pub fn group_at(nodes: &[OutlineNode], target: usize) -> Vec<OutlineGroup> {
    let mut groups = Vec::new();
    let mut i = 0;

    while i < nodes.len() {
        let node = &nodes[i];

        if node.level < target {
            break;
        }

        if node.level != target {
            i += 1;
            continue;
        }

        let start = i + 1;
        let end = nodes[start..]
            .iter()
            .position(|n| n.level <= target)
            .map_or(nodes.len(), |offset| start + offset);

        groups.push(OutlineGroup {
            node: node.clone(),
            children: group_at(&nodes[start..end], target + 1),
        });

        i = end;
    }

    groups
}
