//! Owned dependency trees and their depth-first walk.
//!
//! Dependency resolution itself happens elsewhere; this module only holds an
//! already-resolved tree and replays it through the [`DependencyNodeVisitor`]
//! protocol: `visit` before the children are walked, `end_visit` after.
//!
//! Trees can be loaded from TOML or JSON files:
//!
//! ```toml
//! [[roots]]
//! artifact = "root:app:1.0"
//! scope = "compile"
//!
//! [[roots.dependencies]]
//! artifact = "util.lib:helper:2.0"
//! scope = "test"
//! optional = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::{Coordinate, DependencyNode, DependencyNodeVisitor};
use crate::core::DeptreeError;

/// One node of a resolved dependency tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    coordinate: Coordinate,
    children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Replay this subtree through `visitor`.
    ///
    /// Children are skipped when `visit` returns false, and the remaining
    /// siblings are skipped when a child's `end_visit` returns false. The return
    /// value is this node's `end_visit` result.
    pub fn accept(
        &self,
        parent: Option<&Coordinate>,
        visitor: &mut dyn DependencyNodeVisitor,
    ) -> bool {
        let visited = VisitedNode {
            coordinate: &self.coordinate,
            parent,
        };

        if visitor.visit(&visited) {
            for child in &self.children {
                if !child.accept(Some(&self.coordinate), visitor) {
                    break;
                }
            }
        }

        visitor.end_visit(&visited)
    }
}

/// A forest of independent dependency trees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    roots: Vec<TreeNode>,
}

impl DependencyTree {
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    /// Walk every root independently.
    ///
    /// Returns one entry per root holding that root's `end_visit` result. A
    /// failed root never prevents the next root from being walked.
    pub fn accept(&self, visitor: &mut dyn DependencyNodeVisitor) -> Vec<bool> {
        self.roots.iter().map(|root| root.accept(None, visitor)).collect()
    }

    /// Load a tree description from a `.toml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DeptreeError::InputNotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dependency tree: {}", path.display()))?;

        let is_json = path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse dependency tree: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse dependency tree: {}", path.display()))
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: TreeFile = toml::from_str(content)?;
        file.into_tree()
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: TreeFile = serde_json::from_str(content)?;
        file.into_tree()
    }
}

/// Borrowed view handed to visitors during a walk.
struct VisitedNode<'a> {
    coordinate: &'a Coordinate,
    parent: Option<&'a Coordinate>,
}

impl DependencyNode for VisitedNode<'_> {
    fn coordinate(&self) -> &Coordinate {
        self.coordinate
    }

    fn parent(&self) -> Option<&Coordinate> {
        self.parent
    }
}

#[derive(Debug, Deserialize)]
struct TreeFile {
    #[serde(default)]
    roots: Vec<TreeEntry>,
}

#[derive(Debug, Deserialize)]
struct TreeEntry {
    artifact: String,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    optional: bool,
    #[serde(default)]
    dependencies: Vec<TreeEntry>,
}

impl TreeFile {
    fn into_tree(self) -> Result<DependencyTree> {
        let roots = self.roots.into_iter().map(TreeEntry::into_node).collect::<Result<Vec<_>>>()?;
        Ok(DependencyTree::new(roots))
    }
}

impl TreeEntry {
    fn into_node(self) -> Result<TreeNode> {
        let mut coordinate: Coordinate = self.artifact.parse()?;
        if let Some(scope) = self.scope {
            coordinate = coordinate.with_scope(scope);
        }
        coordinate = coordinate.with_optional(self.optional);

        let children =
            self.dependencies.into_iter().map(TreeEntry::into_node).collect::<Result<Vec<_>>>()?;

        Ok(TreeNode {
            coordinate,
            children,
        })
    }
}
