//! Tree Utilities
//!
//! Flattens the template directory listing into display rows.

use std::collections::HashSet;

use crate::models::{FileTreeNode, NodeKind};

/// One visible line of the file tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Ancestor names joined with `/`
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    pub editable: bool,
    pub depth: usize,
    /// Directories only; always false for files
    pub expanded: bool,
}

pub fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Render nodes as an indented list using recursive DFS.
/// Children are emitted only under directories whose path is in `expanded`.
pub fn flatten_tree(nodes: &[FileTreeNode], expanded: &HashSet<String>) -> Vec<TreeRow> {
    fn collect(
        nodes: &[FileTreeNode],
        parent: &str,
        depth: usize,
        expanded: &HashSet<String>,
        result: &mut Vec<TreeRow>,
    ) {
        for node in nodes {
            let path = join_path(parent, &node.name);
            let is_open = node.is_dir() && expanded.contains(&path);
            result.push(TreeRow {
                path: path.clone(),
                name: node.name.clone(),
                kind: node.kind,
                editable: node.editable,
                depth,
                expanded: is_open,
            });
            if is_open {
                collect(&node.children, &path, depth + 1, expanded, result);
            }
        }
    }

    let mut result = Vec::new();
    collect(nodes, "", 0, expanded, &mut result);
    result
}

/// Whether `path` names a directory somewhere in `nodes`
pub fn is_dir_path(nodes: &[FileTreeNode], path: &str) -> bool {
    let mut level = nodes;
    let mut segments = path.split('/').peekable();
    while let Some(segment) = segments.next() {
        let Some(node) = level.iter().find(|n| n.name == segment) else {
            return false;
        };
        if segments.peek().is_none() {
            return node.is_dir();
        }
        level = &node.children;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, editable: bool) -> FileTreeNode {
        FileTreeNode { name: name.into(), kind: NodeKind::File, editable, children: vec![] }
    }

    fn dir(name: &str, children: Vec<FileTreeNode>) -> FileTreeNode {
        FileTreeNode { name: name.into(), kind: NodeKind::Dir, editable: false, children }
    }

    fn sample() -> Vec<FileTreeNode> {
        vec![
            dir("templates", vec![
                file("index.html", true),
                dir("partials", vec![file("nav.html", true)]),
            ]),
            file("logo.png", false),
        ]
    }

    #[test]
    fn test_flatten_tree_collapsed_by_default() {
        let rows = flatten_tree(&sample(), &HashSet::new());
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["templates", "logo.png"]);
        assert!(!rows[0].expanded);
    }

    #[test]
    fn test_flatten_tree() {
        let expanded: HashSet<String> = ["templates".to_string(), "templates/partials".to_string()].into();
        let tree = flatten_tree(&sample(), &expanded);

        // templates (0), index.html (1), partials (1), nav.html (2), logo.png (0)
        assert_eq!(tree.len(), 5);
        assert_eq!(tree[0].path, "templates"); assert_eq!(tree[0].depth, 0);
        assert_eq!(tree[1].path, "templates/index.html"); assert_eq!(tree[1].depth, 1);
        assert_eq!(tree[2].path, "templates/partials"); assert_eq!(tree[2].depth, 1);
        assert_eq!(tree[3].path, "templates/partials/nav.html"); assert_eq!(tree[3].depth, 2);
        assert_eq!(tree[4].path, "logo.png"); assert_eq!(tree[4].depth, 0);
        assert!(tree[3].editable);
        assert!(!tree[4].editable);
    }

    #[test]
    fn test_collapsed_parent_hides_expanded_child() {
        let expanded: HashSet<String> = ["templates/partials".to_string()].into();
        let rows = flatten_tree(&sample(), &expanded);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_is_dir_path() {
        let nodes = sample();
        assert!(is_dir_path(&nodes, "templates/partials"));
        assert!(!is_dir_path(&nodes, "templates/index.html"));
        assert!(!is_dir_path(&nodes, "missing"));
    }
}
