use serde_json::Value;

use crate::SCENARIO_TREE;
use crate::common::TestProject;

/// JSON output nests children and keeps every coordinate field
#[test]
fn test_render_json() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();

    let output = project.run_deptree(&["render", "-i", "tree.toml", "--format", "json"]).unwrap();
    output.assert_success();

    let json: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json["groupId"], "root");
    assert_eq!(json["type"], "jar");
    assert_eq!(json["optional"], false);

    let helper = &json["children"][0];
    assert_eq!(helper["groupId"], "util.lib");
    assert_eq!(helper["scope"], "test");
    assert_eq!(helper["optional"], true);
    assert_eq!(helper["children"][0]["version"], "3.0");
}

/// Classifiers and packaging survive into the document
#[test]
fn test_render_json_classifier() {
    let project = TestProject::new().unwrap();
    project
        .write_tree(
            "tree.toml",
            r#"
[[roots]]
artifact = "root:app:war:1.0"

[[roots.dependencies]]
artifact = "io.netty:netty-transport-native-epoll:jar:linux-x86_64:4.1.111.Final"
scope = "runtime"
"#,
        )
        .unwrap();

    let output = project.run_deptree(&["render", "-i", "tree.toml", "-f", "json"]).unwrap();
    output.assert_success();

    let json: Value = serde_json::from_str(&output.stdout).unwrap();
    assert_eq!(json["type"], "war");
    assert_eq!(json["classifier"], Value::Null);
    assert_eq!(json["children"][0]["classifier"], "linux-x86_64");
    assert_eq!(json["children"][0]["version"], "4.1.111.Final");
}

/// Multiple roots produce a stream of documents
#[test]
fn test_render_json_stream() {
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

    let output = project.run_deptree(&["render", "-i", "tree.toml", "-f", "json"]).unwrap();
    output.assert_success();

    let documents: Vec<Value> =
        serde_json::Deserializer::from_str(&output.stdout).into_iter::<Value>().collect::<Result<_, _>>().unwrap();
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["groupId"], "first");
    assert_eq!(documents[1]["groupId"], "second");
    assert_eq!(documents[1]["children"], serde_json::json!([]));
}
