//! Serializable snapshots of a session.
//!
//! Templates cannot call methods, so every derived value a template may need
//! (ids, edge ids, labels, style clauses) is computed here up front.

use serde::Serialize;

use super::accumulator::TraversalAccumulator;
use super::cluster::Cluster;
use super::node::{Node, NodeId};
use crate::style::{StyleSheet, StyleView};

/// Title used when a session has no root.
pub const UNTITLED: &str = "dependencies";

#[derive(Debug, Clone, Serialize)]
pub struct NodeView {
    pub id: String,
    pub key: String,
    pub edge_id: String,
    pub port: usize,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
    pub has_classifier: bool,
    pub packaging: String,
    pub scope: Option<String>,
    pub optional: bool,
    pub color: String,
    pub format: String,
    pub edge_format: String,
    pub show_type: bool,
    pub cluster: Option<String>,
    pub parent: Option<String>,
    pub child_ids: Vec<String>,
    /// Nested child views. Only populated below `roots`.
    pub children: Vec<NodeView>,
}

impl NodeView {
    fn flat(acc: &TraversalAccumulator, node: &Node, sheet: &dyn StyleSheet) -> Self {
        let coordinate = node.coordinate();
        let edge_id = match node.cluster() {
            Some(cluster) => format!("{}:f{}", acc.cluster(cluster).edge_id(), node.port()),
            None => node.id().to_string(),
        };

        Self {
            id: node.id().to_string(),
            key: node.key().to_string(),
            edge_id,
            port: node.port(),
            group_id: coordinate.group_id().to_string(),
            artifact_id: coordinate.artifact_id().to_string(),
            version: coordinate.version().to_string(),
            classifier: coordinate.classifier().map(str::to_string),
            has_classifier: coordinate.classifier().is_some(),
            packaging: coordinate.packaging().to_string(),
            scope: coordinate.scope().map(str::to_string),
            optional: coordinate.is_optional(),
            color: sheet.base().color_for(coordinate).to_string(),
            format: sheet.node_format(coordinate),
            edge_format: sheet.edge_format(coordinate),
            show_type: sheet.show_type(coordinate),
            cluster: node.cluster().map(|id| id.to_string()),
            parent: node.parent().map(|id| id.to_string()),
            child_ids: node.children().iter().map(NodeId::to_string).collect(),
            children: Vec::new(),
        }
    }

    fn nested(acc: &TraversalAccumulator, id: NodeId, sheet: &dyn StyleSheet) -> Self {
        let node = acc.node(id);
        let mut view = Self::flat(acc, node, sheet);
        view.children = node.children().iter().map(|child| Self::nested(acc, *child, sheet)).collect();
        view
    }
}

/// One parent to child link.
#[derive(Debug, Clone, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    pub from_edge_id: String,
    pub to_edge_id: String,
    pub format: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClusterView {
    pub id: String,
    pub namespace: String,
    pub edge_id: String,
    pub label: String,
    pub version: Option<String>,
    pub nested: bool,
    pub dependencies: Vec<NodeView>,
    pub clusters: Vec<ClusterView>,
}

impl ClusterView {
    fn new(acc: &TraversalAccumulator, cluster: &Cluster, sheet: &dyn StyleSheet) -> Self {
        Self {
            id: cluster.id().to_string(),
            namespace: cluster.namespace().to_string(),
            edge_id: cluster.edge_id(),
            label: cluster.label(),
            version: cluster.version().map(str::to_string),
            nested: cluster.is_nested(),
            dependencies: cluster
                .members()
                .iter()
                .map(|member| NodeView::flat(acc, acc.node(*member), sheet))
                .collect(),
            clusters: cluster
                .children()
                .iter()
                .map(|child| Self::new(acc, acc.cluster(*child), sheet))
                .collect(),
        }
    }
}

/// Everything bound into a template for one session.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub title: String,
    pub style: StyleView,
    pub roots: Vec<NodeView>,
    pub dependencies: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    /// Top-level clusters only; nested ones are reachable through their parents.
    pub clusters: Vec<ClusterView>,
    pub nested: bool,
}

impl SessionView {
    pub(crate) fn new(acc: &TraversalAccumulator, sheet: &dyn StyleSheet, nested: bool) -> Self {
        let dependencies: Vec<NodeView> =
            acc.nodes().iter().map(|node| NodeView::flat(acc, node, sheet)).collect();

        let edges = acc
            .nodes()
            .iter()
            .flat_map(|parent| parent.children().iter().map(move |child| (parent.id(), *child)))
            .map(|(parent, child)| EdgeView {
                from: dependencies[parent.index()].id.clone(),
                to: dependencies[child.index()].id.clone(),
                from_edge_id: dependencies[parent.index()].edge_id.clone(),
                to_edge_id: dependencies[child.index()].edge_id.clone(),
                format: dependencies[child.index()].edge_format.clone(),
            })
            .collect();

        let title = acc
            .roots()
            .first()
            .map_or_else(|| UNTITLED.to_string(), |root| acc.node(*root).key().to_string());

        Self {
            title,
            style: StyleView::new(sheet),
            roots: acc.roots().iter().map(|root| NodeView::nested(acc, *root, sheet)).collect(),
            dependencies,
            edges,
            clusters: acc.clusters().top_level().map(|cluster| ClusterView::new(acc, cluster, sheet)).collect(),
            nested,
        }
    }
}
