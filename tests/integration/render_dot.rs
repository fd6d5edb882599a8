use crate::SCENARIO_TREE;
use crate::common::TestProject;

/// Default DOT rendering of a single root
#[test]
fn test_render_dot_clusters() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();

    let output = project.run_deptree(&["render", "--input", "tree.toml"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("digraph \"root:app:jar:1.0:compile\" {")
        .assert_stdout_contains("fontname = \"Helvetica,Arial,sans-serif\"")
        .assert_stdout_contains("subgraph cluster_1 {")
        .assert_stdout_contains("label = \"util.lib\";")
        .assert_stdout_contains("node_1 -> node_2")
        .assert_stdout_contains("color = \"darkgreen\"")
        .assert_stdout_contains("style = \"dashed\"");
}

/// Record layout addresses dependencies through table ports
#[test]
fn test_render_dot_records() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();

    let output = project.run_deptree(&["render", "-i", "tree.toml", "--layout", "records"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("node_1 [ shape = box")
        .assert_stdout_contains("PORT=\"f0\"")
        .assert_stdout_contains("PORT=\"f1\"")
        .assert_stdout_contains("node_1 -> \"util.lib\":f0")
        .assert_stdout_contains("\"util.lib\":f0 -> \"util.lib\":f1");
    assert!(!output.stdout.contains("node_2"));
}

/// A root sharing its group with a dependency keeps its own record
#[test]
fn test_render_dot_records_root_in_dependency_group() {
    let project = TestProject::new().unwrap();
    project
        .write_tree(
            "tree.toml",
            r#"
[[roots]]
artifact = "org.example:app:1.0"

[[roots.dependencies]]
artifact = "org.example:lib:1.0"
"#,
        )
        .unwrap();

    let output = project.run_deptree(&["render", "-i", "tree.toml", "--layout", "records"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("node_1 [ shape = box")
        .assert_stdout_contains("\"org.example\" [ shape = plaintext")
        .assert_stdout_contains("node_1 -> \"org.example\":f0");
    assert!(!output.stdout.contains("\"org.example\" -> \"org.example\""));
}

/// JSON input files are accepted as well as TOML
#[test]
fn test_render_from_json_input() {
    let project = TestProject::new().unwrap();
    project
        .write_tree(
            "tree.json",
            r#"{"roots": [{"artifact": "root:app:1.0", "dependencies": [{"artifact": "org.slf4j:slf4j-api:2.0.13", "scope": "runtime"}]}]}"#,
        )
        .unwrap();

    let output = project.run_deptree(&["render", "--input", "tree.json"]).unwrap();
    output.assert_success().assert_stdout_contains("label = \"org.slf4j | 2.0.13\";").assert_stdout_contains("color = \"blue\"");
}

/// Output file gets the graph, stdout gets the summary
#[test]
fn test_render_to_file() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();

    let output = project.run_deptree(&["render", "-i", "tree.toml", "-o", "out.dot"]).unwrap();
    output.assert_success().assert_stdout_contains("Rendered 1 tree(s)");

    let dot = project.read_file("out.dot").unwrap();
    assert!(dot.starts_with("digraph"));
    assert!(dot.trim_end().ends_with('}'));
}

/// Every root becomes its own digraph with ids restarting at 1
#[test]
fn test_render_multiple_roots() {
    let project = TestProject::new().unwrap();
    project
        .write_tree(
            "tree.toml",
            r#"
[[roots]]
artifact = "first:app:1.0"

[[roots.dependencies]]
artifact = "util.lib:helper:2.0"

[[roots]]
artifact = "second:app:1.0"

[[roots.dependencies]]
artifact = "util.lib:helper:2.0"
"#,
        )
        .unwrap();

    let output = project.run_deptree(&["render", "-i", "tree.toml"]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout.matches("digraph").count(), 2);
    assert_eq!(output.stdout.matches("subgraph cluster_1 {").count(), 2);
    assert!(!output.stdout.contains("cluster_2"));
}
