use crate::SCENARIO_TREE;
use crate::common::TestProject;

const LIST_TEMPLATE: &str = "{% for dep in dependencies -%}
{{ dep.artifact_id }} {{ dep.version }}{% if dep.cluster %} [{{ dep.cluster }}]{% endif %}
{% endfor -%}
";

/// Packaged templates are always listed
#[test]
fn test_templates_lists_packaged() {
    let project = TestProject::new().unwrap();

    let output = project.run_deptree(&["templates"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("dot/dependency-tree.dot.tera  (packaged)")
        .assert_stdout_contains("dot/dependency-tree-records.dot.tera  (packaged)")
        .assert_stdout_contains("json/dependency-tree.json.tera  (packaged)")
        .assert_stdout_contains("macros/json.tera  (packaged)");
}

/// Directory templates are discovered, packaged names shadow them
#[test]
fn test_templates_lists_directory() {
    let project = TestProject::new().unwrap();
    project.write_file("tpl/custom/list.tera", LIST_TEMPLATE).unwrap();
    project.write_file("tpl/macros/dot.tera", "shadowed").unwrap();
    project.write_file("tpl/notes.txt", "not a template").unwrap();

    let output = project.run_deptree(&["templates", "--templates-dir", "tpl"]).unwrap();
    output.assert_success().assert_stdout_contains("custom/list.tera  (tpl)");
    assert_eq!(output.stdout.lines().filter(|line| line.starts_with("macros/dot.tera ")).count(), 1);
    assert!(!output.stdout.contains("notes.txt"));
}

/// A missing search directory is only a warning
#[test]
fn test_templates_missing_directory() {
    let project = TestProject::new().unwrap();

    let output = project.run_deptree(&["templates", "--templates-dir", "nowhere"]).unwrap();
    output.assert_success().assert_stderr_contains("does not exist");
}

/// Render through a template from a search directory
#[test]
fn test_render_custom_template() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();
    project.write_file("tpl/custom/list.tera", LIST_TEMPLATE).unwrap();

    let output = project
        .run_deptree(&["render", "-i", "tree.toml", "--templates-dir", "tpl", "--template", "custom/list.tera"])
        .unwrap();
    output.assert_success();
    assert_eq!(output.stdout, "app 1.0\nhelper 2.0 [cluster_1]\nsub 3.0 [cluster_1]\n");
}

/// Custom templates may import the packaged macro libraries
#[test]
fn test_render_custom_template_with_packaged_macros() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();
    project
        .write_file(
            "tpl/nodes.dot.tera",
            "{% import \"macros/dot.tera\" as dot -%}
graph {
{% for dep in dependencies -%}
{{ dot::node_decl(node=dep) }}
{% endfor -%}
}
",
        )
        .unwrap();

    let output =
        project.run_deptree(&["render", "-i", "tree.toml", "--templates-dir", "tpl", "-t", "nodes.dot.tera"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("node_1 [ label = \"app\\n1.0\\ncompile\" ];")
        .assert_stdout_contains("node_3 [ label = \"sub\\n3.0\\ntest\"");
}
