//! Dependency tree fixtures.

use crate::models::{Coordinate, DependencyTree, TreeNode};

/// `root:app:1.0` (compile) with an optional test-scoped `util.lib:helper:2.0`,
/// which in turn depends on `util.lib:sub:3.0` (test).
pub fn scenario_tree() -> DependencyTree {
    DependencyTree::new(vec![
        TreeNode::new(Coordinate::new("root", "app", "1.0").with_scope("compile")).with_child(
            TreeNode::new(
                Coordinate::new("util.lib", "helper", "2.0").with_scope("test").with_optional(true),
            )
            .with_child(TreeNode::new(Coordinate::new("util.lib", "sub", "3.0").with_scope("test"))),
        ),
    ])
}

/// The scenario tree in the TOML input format.
pub const SCENARIO_TOML: &str = r#"
[[roots]]
artifact = "root:app:1.0"
scope = "compile"

[[roots.dependencies]]
artifact = "util.lib:helper:2.0"
scope = "test"
optional = true

[[roots.dependencies.dependencies]]
artifact = "util.lib:sub:3.0"
scope = "test"
"#;

/// A project pulling in several namespace families: deep Apache namespaces,
/// `commons-*` artifacts and both JUnit generations.
pub fn maven_like_tree() -> DependencyTree {
    let compile = |g: &str, a: &str, v: &str| TreeNode::new(Coordinate::new(g, a, v).with_scope("compile"));
    let test = |g: &str, a: &str, v: &str| TreeNode::new(Coordinate::new(g, a, v).with_scope("test"));

    DependencyTree::new(vec![
        compile("org.example", "project", "1.0-SNAPSHOT")
            .with_child(
                compile("org.apache.maven.shared", "maven-shared-utils", "3.4.2")
                    .with_child(compile("commons-io", "commons-io", "2.16.1")),
            )
            .with_child(compile("org.apache.maven", "maven-core", "3.9.6"))
            .with_child(compile("org.apache.commons", "commons-lang3", "3.14.0"))
            .with_child(test("junit", "junit", "4.13.2"))
            .with_child(test("org.junit.jupiter", "junit-jupiter-api", "5.10.2")),
    ])
}

/// Two roots that both depend on `util.lib:helper:2.0`.
pub fn two_root_tree() -> DependencyTree {
    DependencyTree::new(vec![
        TreeNode::new(Coordinate::new("first", "app", "1.0").with_scope("compile"))
            .with_child(TreeNode::new(Coordinate::new("util.lib", "helper", "2.0").with_scope("compile"))),
        TreeNode::new(Coordinate::new("second", "app", "1.0").with_scope("compile"))
            .with_child(TreeNode::new(Coordinate::new("util.lib", "helper", "2.0").with_scope("compile"))),
    ])
}
