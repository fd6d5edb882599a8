use assert_cmd::Command;
use predicates::prelude::*;

use crate::SCENARIO_TREE;
use crate::common::TestProject;

fn deptree(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("deptree").unwrap();
    cmd.current_dir(project.project_path()).env("NO_COLOR", "1").env_remove("DEPTREE_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// A missing input file exits with status 1 and a hint
#[test]
fn test_missing_input() {
    let project = TestProject::new().unwrap();

    deptree(&project)
        .args(["render", "--input", "missing.toml"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Dependency tree file not found: missing.toml"))
        .stderr(predicate::str::contains("--input"));
}

/// Malformed coordinates are reported with the expected form
#[test]
fn test_invalid_coordinate() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", "[[roots]]\nartifact = \"just-a-name\"\n").unwrap();

    deptree(&project)
        .args(["render", "-i", "tree.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinate 'just-a-name'"))
        .stderr(predicate::str::contains("group:artifact"));
}

/// Unknown templates are rejected up front with a close match suggested
#[test]
fn test_unknown_template_suggestion() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();

    deptree(&project)
        .args(["render", "-i", "tree.toml", "-t", "dot/dependency-tre.dot.tera"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unable to find resource 'dot/dependency-tre.dot.tera'"))
        .stderr(predicate::str::contains("Did you mean 'dot/dependency-tree.dot.tera'?"));
}

/// Names escaping the search directory are never resolved
#[test]
fn test_template_outside_search_path() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();
    project.write_file("secret.tera", "{{ title }}").unwrap();

    deptree(&project)
        .args(["render", "-i", "tree.toml", "--templates-dir", "tpl", "-t", "../secret.tera"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to find resource '../secret.tera'"));
}

/// A template that fails for one root still lets the other roots render
#[test]
fn test_failed_root_keeps_going() {
    let project = TestProject::new().unwrap();
    project
        .write_tree(
            "tree.toml",
            r#"
[[roots]]
artifact = "first:app:1.0"

[[roots]]
artifact = "second:app:1.0"
"#,
        )
        .unwrap();
    project
        .write_file(
            "tpl/picky.tera",
            r#"{% if title is starting_with("first") %}{{ missing }}{% else %}ok {{ title }}{% endif %}"#,
        )
        .unwrap();

    deptree(&project)
        .args(["render", "-i", "tree.toml", "--templates-dir", "tpl", "-t", "picky.tera"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ok second:app:jar:1.0"))
        .stdout(predicate::str::contains("first").not())
        .stderr(predicate::str::contains("Failed to render 1 of 2 dependency tree(s)"));
}

/// Template syntax errors carry the template name
#[test]
fn test_template_parse_error() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();
    project.write_file("tpl/broken.tera", "line one\n{% for x in %}\n").unwrap();

    deptree(&project)
        .args(["render", "-i", "tree.toml", "--templates-dir", "tpl", "-t", "broken.tera"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.tera"));
}

/// An empty tree file renders nothing and succeeds
#[test]
fn test_empty_tree() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", "").unwrap();

    deptree(&project)
        .args(["render", "-i", "tree.toml"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing to render"));
}

/// Verbose and quiet cannot be combined
#[test]
fn test_verbose_conflicts_with_quiet() {
    let project = TestProject::new().unwrap();

    deptree(&project)
        .args(["-v", "-q", "templates"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
