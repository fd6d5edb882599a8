//! Tree reconstruction from visit/leave events.

use std::collections::HashMap;

use super::cluster::{Cluster, ClusterForest, ClusterId};
use super::node::{Node, NodeId};
use super::rules::NamespaceRules;
use super::view::SessionView;
use crate::models::Coordinate;
use crate::style::StyleSheet;
use crate::templating::{TemplateEngine, TemplateError};

/// State of one render session.
///
/// Feed it the depth-first protocol of an external walker: [`visit`] before a
/// node's children, [`leave`] after them. `leave` reports completion once the
/// traversal stack is empty again, at which point [`render`] can be called.
///
/// Nodes are keyed by their coordinate's node string. A second visit of the
/// same key reuses the first node, so shared sub-dependencies stay attached to
/// the parent that reached them first.
///
/// [`visit`]: TraversalAccumulator::visit
/// [`leave`]: TraversalAccumulator::leave
/// [`render`]: TraversalAccumulator::render
#[derive(Debug, Clone, Default)]
pub struct TraversalAccumulator {
    nodes: Vec<Node>,
    registry: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
    stack: Vec<NodeId>,
    clusters: ClusterForest,
    rules: NamespaceRules,
}

impl TraversalAccumulator {
    pub fn new(rules: NamespaceRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Record a node on the way down. Never prunes, so always returns true.
    pub fn visit(&mut self, coordinate: &Coordinate, parent: Option<&Coordinate>) -> bool {
        self.record(coordinate, parent);
        true
    }

    /// Pop the traversal stack. Returns true when the stack is empty again.
    ///
    /// A leave without a matching visit is logged and ignored.
    pub fn leave(&mut self, coordinate: &Coordinate) -> bool {
        let Some(top) = self.stack.pop() else {
            tracing::warn!("unbalanced leave event for {}", coordinate.node_string());
            return false;
        };

        let key = coordinate.node_string();
        if self.nodes[top.0].key() != key {
            tracing::warn!("leave event for {} while {} is current", key, self.nodes[top.0].key());
        }

        self.stack.is_empty()
    }

    /// Register a node, link it to the current parent and place it in a cluster.
    pub fn record(&mut self, coordinate: &Coordinate, parent: Option<&Coordinate>) -> NodeId {
        let key = coordinate.node_string();
        if let Some(&existing) = self.registry.get(&key) {
            tracing::warn!("unexpected second visit to {}", key);
            self.stack.push(existing);
            return existing;
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, coordinate.clone()));
        self.registry.insert(key.clone(), id);

        let parent_key = parent.map(Coordinate::node_string);
        let is_root = parent_key.as_ref().is_none_or(|parent_key| *parent_key == key);

        if let Some(&current) = self.stack.last() {
            self.link(current, id, parent_key.as_deref());
            self.assign_cluster(id);
        } else if !is_root {
            tracing::warn!("{} declares a parent but nothing is being visited", key);
        }

        self.stack.push(id);
        if is_root {
            self.roots.push(id);
        }
        id
    }

    fn link(&mut self, current: NodeId, child: NodeId, declared_parent: Option<&str>) {
        let current_key = self.nodes[current.0].key().to_string();
        let child_key = self.nodes[child.0].key().to_string();
        match declared_parent {
            None => {
                tracing::warn!("unexpected missing parent for {} below {}", child_key, current_key);
            }
            Some(declared) if declared != current_key => {
                tracing::warn!(
                    "unexpected parent for {}: declared {} but {} is current",
                    child_key,
                    declared,
                    current_key
                );
            }
            Some(_) => {
                self.nodes[current.0].push_child(child);
                self.nodes[child.0].set_parent(current);
            }
        }
    }

    fn assign_cluster(&mut self, id: NodeId) {
        let coordinate = self.nodes[id.0].coordinate();
        let cluster = self.clusters.place(coordinate.group_id(), coordinate.artifact_id(), &self.rules);
        let port = self.clusters.add_member(cluster, id, coordinate.version());
        self.nodes[id.0].assign_cluster(cluster, port);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// All nodes in first-visit order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn lookup(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.registry.get(&coordinate.node_string()).copied()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Whether `coordinate` was recorded as a root of this session.
    pub fn is_root(&self, coordinate: &Coordinate) -> bool {
        self.lookup(coordinate).is_some_and(|id| self.roots.contains(&id))
    }

    pub fn cluster(&self, id: ClusterId) -> &Cluster {
        self.clusters.get(id)
    }

    pub fn clusters(&self) -> &ClusterForest {
        &self.clusters
    }

    /// Number of nodes currently being visited.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Snapshot of the session for templates.
    pub fn view(&self, sheet: &dyn StyleSheet, nested: bool) -> SessionView {
        SessionView::new(self, sheet, nested)
    }

    /// Render the session through `engine`.
    ///
    /// Binds `title`, `roots`, `dependencies`, `edges`, `clusters` (top-level
    /// only), `nested` and the style. Errors are returned as-is; the session and
    /// the engine stay usable.
    pub fn render<E: TemplateEngine>(
        &self,
        engine: &mut E,
        template: &str,
        macros: &[String],
        sheet: &dyn StyleSheet,
        nested: bool,
    ) -> Result<String, TemplateError> {
        let view = self.view(sheet, nested);

        engine.clear();
        engine.with_template_name(template).with_macros(macros).with_style(sheet);
        engine
            .put("title", &view.title)?
            .put("roots", &view.roots)?
            .put("dependencies", &view.dependencies)?
            .put("edges", &view.edges)?
            .put("clusters", &view.clusters)?
            .put("nested", &view.nested)?;

        engine.evaluate()
    }
}
