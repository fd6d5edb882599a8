use deptree_cli::style::{DotStyle, Style};
use deptree_cli::templating::{ResourceLoader, TemplateEngine, TemplateError, TeraTemplateEngine};
use deptree_cli::test_utils::init_test_logging;

use crate::common::TestProject;

/// Errors are terminal for one evaluation only
#[test]
fn test_engine_survives_failures() {
    init_test_logging(None);
    let mut engine = TeraTemplateEngine::new(ResourceLoader::new());

    assert_eq!(engine.evaluate().unwrap_err(), TemplateError::NoTemplateSpecified);

    let err = engine.with_template_name("missing/tree.tera").evaluate().unwrap_err();
    assert_eq!(err.to_string(), "Unable to find resource 'missing/tree.tera'");

    let err = engine.with_dynamic_template("{% if %}").evaluate().unwrap_err();
    assert!(matches!(err, TemplateError::ParseError { .. }));

    let text = engine.with_dynamic_template("{{ greeting }}").put("greeting", "hi").unwrap().evaluate().unwrap();
    assert_eq!(text, "hi");
}

/// Directory templates and their imports resolve through the search path
#[test]
fn test_engine_directory_templates() {
    let project = TestProject::new().unwrap();
    project
        .write_file(
            "tpl/lib/shout.tera",
            "{% macro shout(text) -%}{{ text | upper }}!{%- endmacro shout %}",
        )
        .unwrap();
    project
        .write_file(
            "tpl/page.tera",
            "{% import \"lib/shout.tera\" as s -%}\n\n  {{ s::shout(text=name) }}\n{% filter indent -%}\nnested\n{% endfilter -%}\n\n",
        )
        .unwrap();

    let loader = ResourceLoader::new().with_search_dir(project.project_path().join("tpl"));
    let mut engine = TeraTemplateEngine::new(loader);
    assert!(engine.resource_exists("page.tera"));
    assert!(!engine.resource_exists("../page.tera"));

    let text = engine.with_template_name("page.tera").put("name", "deptree").unwrap().evaluate().unwrap();
    assert_eq!(text, "DEPTREE!\n  nested\n");
}

/// The bound style is visible as `style`
#[test]
fn test_engine_style_binding() {
    let mut engine = TeraTemplateEngine::default();
    let style = DotStyle::new(Style::default().with_font_size(11));

    let text = engine
        .with_dynamic_template("{{ style.font_size }} {{ style.scope_colors.test }}")
        .with_style(&style)
        .evaluate()
        .unwrap();
    assert_eq!(text, "11 darkgreen");
}
