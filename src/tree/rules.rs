//! Namespace grouping rules.
//!
//! Most namespaces nest by their dotted prefixes alone. A few families of
//! short, undotted namespaces belong visually under a longer umbrella namespace
//! (`commons-io` under `org.apache.commons`), and some families want a
//! shallower minimum depth. Both behaviours are table-driven: a rule matches a
//! namespace with a glob pattern and may name an umbrella parent and/or a
//! minimum segment count.

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

/// Segment count at which backfill stops when no rule overrides it.
pub const DEFAULT_MIN_SEGMENTS: usize = 2;

/// One entry of the rule table, as written in configuration files.
///
/// ```toml
/// [[clustering.rules]]
/// pattern = "commons-*"
/// parent = "org.apache.commons"
/// match_artifact = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRule {
    /// Glob pattern matched against the whole namespace.
    pub pattern: String,
    /// Umbrella namespace the matching cluster is attached under.
    #[serde(default)]
    pub parent: Option<String>,
    /// Backfill depth override for matching namespaces.
    #[serde(default)]
    pub min_segments: Option<usize>,
    /// Only apply `parent` when the artifact id equals the namespace.
    #[serde(default)]
    pub match_artifact: bool,
}

impl NamespaceRule {
    pub fn nest_under(pattern: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            parent: Some(parent.into()),
            min_segments: None,
            match_artifact: false,
        }
    }

    pub fn min_segments(pattern: impl Into<String>, min_segments: usize) -> Self {
        Self {
            pattern: pattern.into(),
            parent: None,
            min_segments: Some(min_segments),
            match_artifact: false,
        }
    }

    #[must_use]
    pub fn matching_artifact(mut self) -> Self {
        self.match_artifact = true;
        self
    }
}

/// The built-in table.
pub fn default_rules() -> Vec<NamespaceRule> {
    vec![
        NamespaceRule::nest_under("commons-*", "org.apache.commons").matching_artifact(),
        NamespaceRule::nest_under("junit", "org.junit"),
        NamespaceRule::min_segments("org.junit*", 1),
    ]
}

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: Pattern,
    rule: NamespaceRule,
}

/// A compiled rule table plus the default backfill depth.
#[derive(Debug, Clone)]
pub struct NamespaceRules {
    rules: Vec<CompiledRule>,
    default_min_segments: usize,
}

impl Default for NamespaceRules {
    fn default() -> Self {
        // The built-in patterns are known to be valid.
        let rules = default_rules()
            .into_iter()
            .filter_map(|rule| Pattern::new(&rule.pattern).ok().map(|pattern| CompiledRule { pattern, rule }))
            .collect();
        Self {
            rules,
            default_min_segments: DEFAULT_MIN_SEGMENTS,
        }
    }
}

impl NamespaceRules {
    /// Compile a rule table. Rules are tried in order; the first match wins.
    pub fn new(rules: Vec<NamespaceRule>, default_min_segments: usize) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let pattern = Pattern::new(&rule.pattern)
                    .with_context(|| format!("Invalid namespace pattern '{}'", rule.pattern))?;
                Ok(CompiledRule { pattern, rule })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            rules,
            default_min_segments,
        })
    }

    /// A table with no special cases at all.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            default_min_segments: DEFAULT_MIN_SEGMENTS,
        }
    }

    pub fn default_min_segments(&self) -> usize {
        self.default_min_segments
    }

    /// Umbrella namespace for a newly seen namespace, if a rule applies.
    pub fn merge_parent(&self, namespace: &str, artifact_id: &str) -> Option<&str> {
        self.rules
            .iter()
            .filter(|compiled| compiled.pattern.matches(namespace))
            .filter(|compiled| !compiled.rule.match_artifact || artifact_id == namespace)
            .find_map(|compiled| compiled.rule.parent.as_deref())
    }

    /// Depth at which backfill of `namespace` stops.
    pub fn min_segments(&self, namespace: &str) -> usize {
        self.rules
            .iter()
            .filter(|compiled| compiled.pattern.matches(namespace))
            .find_map(|compiled| compiled.rule.min_segments)
            .unwrap_or(self.default_min_segments)
    }
}
