//! Tree reconstruction and namespace clustering.
//!
//! A [`TraversalAccumulator`] rebuilds a dependency tree from the flat
//! visit/leave event stream of a depth-first walk and groups every non-root
//! node into a [`Cluster`] keyed by its namespace. Clusters form a forest that
//! mirrors the dotted namespace hierarchy; missing intermediate namespaces are
//! created on demand by [`ClusterForest::backfill`], and a [`NamespaceRules`]
//! table handles families that should nest under an umbrella namespace.
//!
//! All state is owned by one accumulator per render session. Node and cluster
//! ids are arena indices, so the same input always yields the same ids.
//!
//! # Example
//!
//! ```rust
//! use deptree_cli::models::Coordinate;
//! use deptree_cli::tree::TraversalAccumulator;
//!
//! let root = Coordinate::new("root", "app", "1.0");
//! let helper = Coordinate::new("util.lib", "helper", "2.0");
//!
//! let mut session = TraversalAccumulator::default();
//! session.visit(&root, None);
//! session.visit(&helper, Some(&root));
//! assert!(!session.leave(&helper));
//! assert!(session.leave(&root));
//!
//! assert_eq!(session.nodes().len(), 2);
//! assert_eq!(session.clusters().len(), 1);
//! ```

mod accumulator;
mod cluster;
mod node;
mod rules;
mod view;

pub use accumulator::TraversalAccumulator;
pub use cluster::{Cluster, ClusterForest, ClusterId, ClusterVersion};
pub use node::{Node, NodeId};
pub use rules::{DEFAULT_MIN_SEGMENTS, NamespaceRule, NamespaceRules, default_rules};
pub use view::{ClusterView, EdgeView, NodeView, SessionView, UNTITLED};
