//! Artifact coordinates.
//!
//! A [`Coordinate`] is the immutable identity of one resolved dependency. It is
//! consumed read-only by the tree reconstruction code; the only derived value
//! that matters there is [`Coordinate::node_string`], which doubles as the
//! registry key of a node within a render session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::DeptreeError;

/// Packaging type that is implied when none is given.
///
/// Renderers suppress the type label for this packaging to keep the output terse.
pub const DEFAULT_PACKAGING: &str = "jar";

fn default_packaging() -> String {
    DEFAULT_PACKAGING.to_string()
}

/// Identity of one resolved dependency.
///
/// # Examples
///
/// ```rust
/// use deptree_cli::models::Coordinate;
///
/// let coordinate: Coordinate = "util.lib:helper:2.0".parse().unwrap();
/// let coordinate = coordinate.with_scope("test").with_optional(true);
///
/// assert_eq!(coordinate.group_id(), "util.lib");
/// assert_eq!(coordinate.node_string(), "util.lib:helper:jar:2.0:test (optional)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    classifier: Option<String>,
    #[serde(default = "default_packaging", rename = "type")]
    packaging: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(default)]
    optional: bool,
}

impl Coordinate {
    /// Create a coordinate with the default packaging, no classifier, no scope.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
            packaging: default_packaging(),
            scope: None,
            optional: false,
        }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    #[must_use]
    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    #[must_use]
    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    /// The namespace of this coordinate (its dotted group identifier).
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Full string form of the coordinate.
    ///
    /// Format: `group:artifact:packaging[:classifier]:version[:scope]`, followed
    /// by ` (optional)` for optional dependencies. Two coordinates with the same
    /// node string are the same node within a render session.
    pub fn node_string(&self) -> String {
        let mut out = format!("{}:{}:{}", self.group_id, self.artifact_id, self.packaging);
        if let Some(classifier) = &self.classifier {
            out.push(':');
            out.push_str(classifier);
        }
        out.push(':');
        out.push_str(&self.version);
        if let Some(scope) = &self.scope {
            out.push(':');
            out.push_str(scope);
        }
        if self.optional {
            out.push_str(" (optional)");
        }
        out
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.node_string())
    }
}

impl FromStr for Coordinate {
    type Err = DeptreeError;

    /// Parse `group:artifact[:packaging[:classifier]]:version`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(DeptreeError::InvalidCoordinate {
                coordinate: s.to_string(),
                reason: "empty segment".to_string(),
            });
        }

        let coordinate = match parts.as_slice() {
            [group, artifact, version] => Self::new(*group, *artifact, *version),
            [group, artifact, packaging, version] => {
                Self::new(*group, *artifact, *version).with_packaging(*packaging)
            }
            [group, artifact, packaging, classifier, version] => {
                Self::new(*group, *artifact, *version)
                    .with_packaging(*packaging)
                    .with_classifier(*classifier)
            }
            _ => {
                return Err(DeptreeError::InvalidCoordinate {
                    coordinate: s.to_string(),
                    reason: format!("expected 3 to 5 ':'-separated segments, found {}", parts.len()),
                });
            }
        };

        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_form() {
        let c: Coordinate = "root:app:1.0".parse().unwrap();
        assert_eq!(c.group_id(), "root");
        assert_eq!(c.artifact_id(), "app");
        assert_eq!(c.version(), "1.0");
        assert_eq!(c.packaging(), DEFAULT_PACKAGING);
        assert_eq!(c.classifier(), None);
        assert!(!c.is_optional());
    }

    #[test]
    fn test_parse_with_packaging_and_classifier() {
        let c: Coordinate = "org.example:lib:test-jar:tests:1.2.3".parse().unwrap();
        assert_eq!(c.packaging(), "test-jar");
        assert_eq!(c.classifier(), Some("tests"));
        assert_eq!(c.node_string(), "org.example:lib:test-jar:tests:1.2.3");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("just-a-name".parse::<Coordinate>().is_err());
        assert!("a::1.0".parse::<Coordinate>().is_err());
        assert!("a:b:c:d:e:f".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_node_string_includes_scope_and_optional() {
        let c = Coordinate::new("util.lib", "helper", "2.0").with_scope("test").with_optional(true);
        assert_eq!(c.node_string(), "util.lib:helper:jar:2.0:test (optional)");
        assert_eq!(c.to_string(), c.node_string());
    }

    #[test]
    fn test_deserialize_defaults_packaging() {
        let c: Coordinate = serde_json::from_str(
            r#"{"group_id": "g", "artifact_id": "a", "version": "1"}"#,
        )
        .unwrap();
        assert_eq!(c.packaging(), "jar");
        assert_eq!(c.scope(), None);
    }
}
