//! Session nodes.

use std::fmt;

use super::cluster::ClusterId;
use crate::models::Coordinate;

/// Index of a node within its session's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0 + 1)
    }
}

/// One coordinate within a render session, with its tree and cluster links.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    key: String,
    coordinate: Coordinate,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    cluster: Option<ClusterId>,
    port: usize,
}

impl Node {
    pub(crate) fn new(id: NodeId, coordinate: Coordinate) -> Self {
        Self {
            id,
            key: coordinate.node_string(),
            coordinate,
            parent: None,
            children: Vec::new(),
            cluster: None,
            port: 0,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Registry key: the coordinate's node string.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn cluster(&self) -> Option<ClusterId> {
        self.cluster
    }

    /// Position within the owning cluster's member list.
    pub fn port(&self) -> usize {
        self.port
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn assign_cluster(&mut self, cluster: ClusterId, port: usize) {
        self.cluster = Some(cluster);
        self.port = port;
    }
}
