//! Namespace clusters and the backfill algorithm.
//!
//! Clusters mirror the dotted namespace hierarchy that was actually seen
//! during a session. `org.apache.maven.shared` ends up nested under
//! `org.apache.maven`, but only prefixes longer than the minimum segment count
//! are ever materialized, so `org.apache` alone never becomes a cluster unless
//! some node lives in it directly.

use std::collections::HashMap;
use std::fmt;

use super::node::NodeId;
use super::rules::NamespaceRules;
use crate::templating::directives::dot_escape;

/// Index of a cluster within its session's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClusterId(pub(crate) usize);

impl ClusterId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cluster_{}", self.0 + 1)
    }
}

/// Version shared by a cluster's members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClusterVersion {
    /// No member yet.
    #[default]
    Unset,
    /// Every member so far has this version.
    Shared(String),
    /// Members disagree. Never reverts.
    Mixed,
}

impl ClusterVersion {
    fn observe(&mut self, version: &str) {
        match self {
            Self::Unset => *self = Self::Shared(version.to_string()),
            Self::Shared(shared) if shared != version => *self = Self::Mixed,
            Self::Shared(_) | Self::Mixed => {}
        }
    }
}

/// A group of nodes and sub-clusters sharing a namespace.
#[derive(Debug, Clone)]
pub struct Cluster {
    id: ClusterId,
    namespace: String,
    version: ClusterVersion,
    members: Vec<NodeId>,
    children: Vec<ClusterId>,
    nested: bool,
}

impl Cluster {
    fn new(id: ClusterId, namespace: &str) -> Self {
        Self {
            id,
            namespace: namespace.to_string(),
            version: ClusterVersion::Unset,
            members: Vec::new(),
            children: Vec::new(),
            nested: false,
        }
    }

    pub fn id(&self) -> ClusterId {
        self.id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The members' common version, `None` while unset or once they disagree.
    pub fn version(&self) -> Option<&str> {
        match &self.version {
            ClusterVersion::Shared(version) => Some(version),
            ClusterVersion::Unset | ClusterVersion::Mixed => None,
        }
    }

    pub fn version_state(&self) -> &ClusterVersion {
        &self.version
    }

    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn children(&self) -> &[ClusterId] {
        &self.children
    }

    /// True once attached under another cluster.
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// `namespace`, or `namespace | version` when the members agree on a version.
    pub fn label(&self) -> String {
        match self.version() {
            Some(version) => format!("{} | {}", self.namespace, version),
            None => self.namespace.clone(),
        }
    }

    /// Quoted namespace, the record name in port-addressed layouts.
    pub fn edge_id(&self) -> String {
        format!("\"{}\"", dot_escape(&self.namespace))
    }
}

/// All clusters of one session, keyed by namespace.
#[derive(Debug, Clone, Default)]
pub struct ClusterForest {
    clusters: Vec<Cluster>,
    by_namespace: HashMap<String, ClusterId>,
}

impl ClusterForest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn get(&self, id: ClusterId) -> &Cluster {
        &self.clusters[id.0]
    }

    pub fn lookup(&self, namespace: &str) -> Option<ClusterId> {
        self.by_namespace.get(namespace).copied()
    }

    /// Clusters in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter()
    }

    /// Clusters that are not nested under another cluster, in creation order.
    pub fn top_level(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.iter().filter(|cluster| !cluster.nested)
    }

    fn create(&mut self, namespace: &str) -> ClusterId {
        let id = ClusterId(self.clusters.len());
        self.clusters.push(Cluster::new(id, namespace));
        self.by_namespace.insert(namespace.to_string(), id);
        tracing::trace!("created {} for '{}'", id, namespace);
        id
    }

    /// Attach `child` under `parent`. Repeated or conflicting attachments are ignored.
    pub fn attach(&mut self, parent: ClusterId, child: ClusterId) -> bool {
        if parent == child {
            tracing::warn!("refusing to nest cluster '{}' under itself", self.get(child).namespace);
            return false;
        }

        let child_namespace = &self.clusters[child.0].namespace;
        let duplicate =
            self.clusters[parent.0].children.iter().any(|id| self.clusters[id.0].namespace == *child_namespace);
        if duplicate {
            tracing::info!(
                "cluster '{}' already contains sub-cluster '{}'",
                self.clusters[parent.0].namespace,
                child_namespace
            );
            return false;
        }

        if self.clusters[child.0].nested {
            tracing::info!(
                "cluster '{}' is already nested, not attaching under '{}'",
                child_namespace,
                self.clusters[parent.0].namespace
            );
            return false;
        }

        self.clusters[parent.0].children.push(child);
        self.clusters[child.0].nested = true;
        true
    }

    /// Append a node to a cluster and return its port.
    pub fn add_member(&mut self, cluster: ClusterId, node: NodeId, version: &str) -> usize {
        let cluster = &mut self.clusters[cluster.0];
        let port = cluster.members.len();
        cluster.members.push(node);
        cluster.version.observe(version);
        port
    }

    /// Make sure a cluster exists for `namespace` and for every dotted prefix of
    /// it longer than `min_segments`, linking each to the next-shorter one.
    ///
    /// Stops early at the first prefix that already exists and reuses it as the
    /// parent. Calling it again for the same namespace changes nothing.
    pub fn backfill(&mut self, namespace: &str, min_segments: usize) -> ClusterId {
        if let Some(existing) = self.lookup(namespace) {
            return existing;
        }

        let segments: Vec<&str> = namespace.split('.').collect();
        let leaf = self.create(namespace);
        if segments.len() <= min_segments {
            return leaf;
        }

        // Longest prefix first; the last entry is the attachment point.
        let mut chain = vec![leaf];
        for len in (min_segments + 1..segments.len()).rev() {
            let prefix = segments[..len].join(".");
            if let Some(existing) = self.lookup(&prefix) {
                chain.push(existing);
                break;
            }
            chain.push(self.create(&prefix));
        }

        while let Some(parent) = chain.pop() {
            let Some(&child) = chain.last() else {
                break;
            };
            self.attach(parent, child);
        }

        leaf
    }

    /// Find or build the cluster a node of `namespace` belongs to.
    ///
    /// Namespaces matched by an umbrella rule are attached under the rule's
    /// parent namespace (backfilled as needed) instead of their own prefixes.
    pub fn place(&mut self, namespace: &str, artifact_id: &str, rules: &NamespaceRules) -> ClusterId {
        if let Some(existing) = self.lookup(namespace) {
            return existing;
        }

        match rules.merge_parent(namespace, artifact_id) {
            Some(parent) if parent != namespace => {
                let parent = parent.to_string();
                let parent_id = self.backfill(&parent, rules.min_segments(&parent));
                let id = self.create(namespace);
                self.attach(parent_id, id);
                id
            }
            _ => self.backfill(namespace, rules.min_segments(namespace)),
        }
    }
}
