use crate::SCENARIO_TREE;
use crate::common::TestProject;

/// Style overrides reach the rendered graph
#[test]
fn test_config_style() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();
    project
        .write_file(
            "deptree.toml",
            r#"
[style]
font_name = "Courier"
font_size = 12

[style.scope_colors]
test = "purple"
"#,
        )
        .unwrap();

    let output = project.run_deptree(&["--config", "deptree.toml", "render", "-i", "tree.toml"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("fontname = \"Courier\"; fontsize = 14")
        .assert_stdout_contains("color = \"purple\"");
    assert!(!output.stdout.contains("darkgreen"));
}

/// Search directories are resolved relative to the config file
#[test]
fn test_config_template_search_path() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();
    project.write_file("conf/tpl/titles.tera", "{{ title }}").unwrap();
    project
        .write_file(
            "conf/deptree.toml",
            r#"
[templates]
search_path = ["tpl"]
template = "titles.tera"
"#,
        )
        .unwrap();

    let output = project.run_deptree(&["-c", "conf/deptree.toml", "render", "-i", "tree.toml"]).unwrap();
    output.assert_success();
    assert_eq!(output.stdout.trim_end(), "root:app:jar:1.0:compile");
}

/// The minimum namespace depth decides which prefixes become clusters
#[test]
fn test_config_min_segments() {
    let project = TestProject::new().unwrap();
    project
        .write_tree(
            "tree.toml",
            r#"
[[roots]]
artifact = "org.example:project:1.0"

[[roots.dependencies]]
artifact = "org.apache.maven:maven-core:3.9.6"
"#,
        )
        .unwrap();

    let output = project.run_deptree(&["render", "-i", "tree.toml"]).unwrap();
    output.assert_success().assert_stdout_contains("label = \"org.apache.maven | 3.9.6\";");
    assert!(!output.stdout.contains("label = \"org.apache\";"));

    project.write_file("deptree.toml", "[clustering]\nmin_segments = 1\n").unwrap();
    let output = project.run_deptree(&["-c", "deptree.toml", "render", "-i", "tree.toml"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("label = \"org.apache\";")
        .assert_stdout_contains("label = \"org.apache.maven | 3.9.6\";");
}

/// Custom umbrella rules replace the built-in ones
#[test]
fn test_config_umbrella_rules() {
    let project = TestProject::new().unwrap();
    project
        .write_tree(
            "tree.toml",
            r#"
[[roots]]
artifact = "org.example:project:1.0"

[[roots.dependencies]]
artifact = "jackson-core:jackson-core:2.17.1"
"#,
        )
        .unwrap();
    project
        .write_file(
            "deptree.toml",
            r#"
[[clustering.rules]]
pattern = "jackson-*"
parent = "com.fasterxml.jackson"
"#,
        )
        .unwrap();

    let output = project.run_deptree(&["-c", "deptree.toml", "render", "-i", "tree.toml"]).unwrap();
    output
        .assert_success()
        .assert_stdout_contains("label = \"com.fasterxml.jackson\";")
        .assert_stdout_contains("label = \"jackson-core | 2.17.1\";");
}

/// Broken configuration files fail before anything is rendered
#[test]
fn test_config_invalid_toml() {
    let project = TestProject::new().unwrap();
    project.write_tree("tree.toml", SCENARIO_TREE).unwrap();
    project.write_file("deptree.toml", "[style\nfont_size = ").unwrap();

    let output = project.run_deptree(&["-c", "deptree.toml", "render", "-i", "tree.toml"]).unwrap();
    output.assert_failure();
    assert_eq!(output.code, Some(1));
    assert!(output.stdout.is_empty());
}
