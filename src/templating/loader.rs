//! Template resource lookup.
//!
//! Resources are located by relative name, in this order:
//! 1. templates packaged into the binary
//! 2. resources registered in memory with [`ResourceLoader::register`]
//! 3. each filesystem directory of the search path, in order
//!
//! Names must be relative and may not climb out of a search directory with
//! `..`. Anything else is reported as not found, never read.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use super::error::TemplateError;

/// File extension of discoverable templates.
pub const TEMPLATE_EXTENSION: &str = "tera";

const PACKAGED: &[(&str, &str)] = &[
    ("dot/dependency-tree.dot.tera", include_str!("../../templates/dot/dependency-tree.dot.tera")),
    (
        "dot/dependency-tree-records.dot.tera",
        include_str!("../../templates/dot/dependency-tree-records.dot.tera"),
    ),
    ("json/dependency-tree.json.tera", include_str!("../../templates/json/dependency-tree.json.tera")),
    ("macros/dot.tera", include_str!("../../templates/macros/dot.tera")),
    ("macros/dot-records.tera", include_str!("../../templates/macros/dot-records.tera")),
    ("macros/json.tera", include_str!("../../templates/macros/json.tera")),
];

/// Names of the templates compiled into the binary.
pub fn packaged_template_names() -> impl Iterator<Item = &'static str> {
    PACKAGED.iter().map(|(name, _)| *name)
}

/// Where a resource was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Packaged,
    Registered,
    Directory(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Packaged => f.write_str("packaged"),
            Self::Registered => f.write_str("registered"),
            Self::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// A resource name together with the place it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub name: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceLoader {
    registered: BTreeMap<String, String>,
    search_path: Vec<PathBuf>,
}

impl ResourceLoader {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.add_search_dir(dir);
        self
    }

    pub fn add_search_dir(&mut self, dir: impl Into<PathBuf>) {
        self.search_path.push(dir.into());
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Make an in-memory resource available under `name`.
    pub fn register(&mut self, name: impl Into<String>, source: impl Into<String>) {
        self.registered.insert(name.into(), source.into());
    }

    pub fn exists(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }

    /// Source text of `name`.
    pub fn load(&self, name: &str) -> Result<String, TemplateError> {
        match self.locate(name) {
            Some(Origin::Packaged) => Ok(PACKAGED
                .iter()
                .find(|(packaged, _)| *packaged == name)
                .map(|(_, source)| (*source).to_string())
                .unwrap_or_default()),
            Some(Origin::Registered) => Ok(self.registered.get(name).cloned().unwrap_or_default()),
            Some(Origin::Directory(dir)) => {
                let path = dir.join(name);
                tracing::debug!("loading template '{}' from {}", name, path.display());
                std::fs::read_to_string(&path).map_err(|e| TemplateError::Io {
                    name: name.to_string(),
                    path,
                    message: e.to_string(),
                })
            }
            None => Err(TemplateError::ResourceNotFound {
                name: name.to_string(),
            }),
        }
    }

    fn locate(&self, name: &str) -> Option<Origin> {
        if !is_relative_name(name) {
            tracing::debug!("rejecting template name '{}'", name);
            return None;
        }

        if PACKAGED.iter().any(|(packaged, _)| *packaged == name) {
            return Some(Origin::Packaged);
        }

        if self.registered.contains_key(name) {
            return Some(Origin::Registered);
        }

        self.search_path
            .iter()
            .find(|dir| dir.join(name).is_file())
            .map(|dir| Origin::Directory(dir.clone()))
    }

    /// Every resource reachable by name, shadowed entries excluded.
    pub fn entries(&self) -> Vec<ResourceEntry> {
        let mut entries: Vec<ResourceEntry> = packaged_template_names()
            .map(|name| ResourceEntry {
                name: name.to_string(),
                origin: Origin::Packaged,
            })
            .collect();

        fn push(entries: &mut Vec<ResourceEntry>, name: String, origin: Origin) {
            if !entries.iter().any(|entry| entry.name == name) {
                entries.push(ResourceEntry { name, origin });
            }
        }

        for name in self.registered.keys() {
            push(&mut entries, name.clone(), Origin::Registered);
        }

        for dir in &self.search_path {
            for name in discover(dir) {
                push(&mut entries, name, Origin::Directory(dir.clone()));
            }
        }

        entries
    }
}

/// Relative, forward-slash names of the templates below `dir`.
fn discover(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("skipping unreadable entry below {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == TEMPLATE_EXTENSION))
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(dir).ok()?;
            let parts: Vec<String> =
                relative.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
            Some(parts.join("/"))
        })
        .collect();
    names.sort();
    names
}

/// True when `name` stays inside whatever directory it is resolved against.
fn is_relative_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }

    let path = Path::new(name);
    !path.is_absolute()
        && path.components().all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
