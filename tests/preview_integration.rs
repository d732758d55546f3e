//! Integration tests rendering every registered component through the
//! preview harness with templates read from disk

use std::fs;
use std::path::Path;

use serde_json::{json, Value};
use tempfile::TempDir;

use scheduler_console::bindings::config::{
    init_config, load_settings, save_settings, template_root, CONFIG_FILENAME,
};
use scheduler_console::bindings::{
    ComponentRegistry, FileTemplateResolver, Restriction, Settings, TemplateName,
};
use scheduler_console::core::Scope;
use scheduler_console::{render_component, render_or_placeholder, PreviewOutput};

/// Helper to write every template into `dir/templates`
fn write_templates(dir: &Path) {
    let root = dir.join("templates");
    fs::create_dir_all(&root).unwrap();
    for name in TemplateName::ALL {
        fs::write(
            root.join(name.file_name()),
            format!("<div data-template=\"{}\"></div>", name.file_name()),
        )
        .unwrap();
    }
}

fn fixture(value: Value) -> Scope {
    match value {
        Value::Object(map) => Scope::from(map),
        _ => panic!("fixture must be an object"),
    }
}

fn fixture_file(name: &str) -> Scope {
    let json = match name {
        "instance_summary" => include_str!("fixtures/components/instance_summary.json"),
        "group_summary" => include_str!("fixtures/components/group_summary.json"),
        "job_row" => include_str!("fixtures/components/job_row.json"),
        _ => panic!("unknown fixture {}", name),
    };
    fixture(serde_json::from_str(json).unwrap())
}

fn setup() -> (TempDir, Settings, FileTemplateResolver) {
    let temp = TempDir::new().unwrap();
    write_templates(temp.path());
    let settings = load_settings(temp.path());
    let resolver = FileTemplateResolver::new(template_root(temp.path(), &settings));
    (temp, settings, resolver)
}

#[test]
fn test_every_registered_component_renders() {
    let (_temp, settings, resolver) = setup();
    let inputs = fixture(json!({
        "value": "hello",
        "role": "www-data",
        "environment": "prod",
        "groups": [],
        "group": {},
        "timestamp": 0,
        "update": {},
        "instances": [],
        "size": "small",
        "stats": {"instancesUpdatedSoFar": 0, "totalInstancesToBeUpdated": 0, "progress": 0}
    }));

    for descriptor in ComponentRegistry::new().all() {
        let output = render_component(descriptor.name, &inputs, &settings, &resolver);
        assert!(output.is_ok(), "{} failed: {:?}", descriptor.name, output);
    }
}

#[test]
fn test_link_variants_from_data_row() {
    let (_temp, settings, resolver) = setup();
    let row = fixture_file("job_row");

    let html = |name: &str| match render_component(name, &row, &settings, &resolver).unwrap() {
        PreviewOutput::Markup { html, .. } => html,
        other => panic!("expected markup, got {:?}", other),
    };

    assert_eq!(html("role-link"), r#"<a href="/scheduler/hello">hello</a>"#);
    assert_eq!(
        html("role-env-link"),
        r#"<a href="/scheduler/www-data/hello">hello</a>"#
    );
    assert_eq!(
        html("job-link"),
        r#"<a href="/scheduler/www-data/prod/hello">hello</a>"#
    );
}

#[test]
fn test_link_roots_follow_settings() {
    let temp = TempDir::new().unwrap();
    write_templates(temp.path());
    let mut settings = Settings::default();
    settings.links.scheduler_root = "/aurora".to_string();
    save_settings(temp.path(), &settings).unwrap();

    let settings = load_settings(temp.path());
    let resolver = FileTemplateResolver::new(template_root(temp.path(), &settings));

    let output =
        render_component("jobLink", &fixture_file("job_row"), &settings, &resolver).unwrap();
    assert_eq!(
        output,
        PreviewOutput::Markup {
            component: "jobLink".to_string(),
            html: r#"<a href="/aurora/www-data/prod/hello">hello</a>"#.to_string(),
        }
    );
}

#[test]
fn test_group_summary_seeds_sorted_visible_groups() {
    let (_temp, settings, resolver) = setup();

    let output = render_component(
        "group-summary",
        &fixture_file("group_summary"),
        &settings,
        &resolver,
    )
    .unwrap();

    match output {
        PreviewOutput::Template {
            template,
            markup,
            scope,
            ..
        } => {
            assert_eq!(template, "/groupSummary.html");
            assert_eq!(markup, r#"<div data-template="groupSummary.html"></div>"#);
            assert_eq!(scope["visibleGroups"], json!([0, 2]));
            assert_eq!(scope["groups"].as_array().unwrap().len(), 3);
        }
        other => panic!("expected template, got {:?}", other),
    }
}

#[test]
fn test_instance_summary_through_preview() {
    let (_temp, settings, resolver) = setup();

    let output = render_component(
        "instance-summary",
        &fixture_file("instance_summary"),
        &settings,
        &resolver,
    )
    .unwrap();

    match output {
        PreviewOutput::Markup { html, .. } => {
            assert!(html.contains("1 / 2 (50%)"));
            assert!(html.contains(r#"tooltip="INSTANCE 1: FAILED""#));
        }
        other => panic!("expected markup, got {:?}", other),
    }
}

#[test]
fn test_failed_template_is_isolated_to_its_component() {
    let temp = TempDir::new().unwrap();
    let settings = Settings::default();
    let resolver = FileTemplateResolver::new(template_root(temp.path(), &settings));
    let context = fixture_file("job_row");

    let breadcrumb = render_or_placeholder("breadcrumb", &context, &settings, &resolver).unwrap();
    let link = render_or_placeholder("job-link", &context, &settings, &resolver).unwrap();

    assert!(matches!(breadcrumb, PreviewOutput::Error { .. }));
    assert!(matches!(link, PreviewOutput::Markup { .. }));
}

#[test]
fn test_instance_summary_requires_a_list() {
    let (_temp, settings, resolver) = setup();
    let inputs = fixture(json!({
        "instances": "running,failed",
        "size": "small",
        "stats": {"instancesUpdatedSoFar": 0, "totalInstancesToBeUpdated": 0, "progress": 0}
    }));

    let output = render_or_placeholder("instance-summary", &inputs, &settings, &resolver).unwrap();
    match output {
        PreviewOutput::Error { message, .. } => assert!(message.contains("ordered list")),
        other => panic!("expected error placeholder, got {:?}", other),
    }
}

#[test]
fn test_class_markers_resolve_only_as_classes() {
    let registry = ComponentRegistry::new();
    assert!(registry
        .lookup("scheduling-detail", Restriction::Class)
        .is_some());
    assert!(registry
        .lookup("scheduling-detail", Restriction::Element)
        .is_none());
    assert!(registry.lookup("task-link", Restriction::Class).is_some());
}

#[test]
fn test_instance_summary_renders_without_size_or_progress() {
    let (_temp, settings, resolver) = setup();
    let inputs = fixture(json!({
        "instances": [{"className": "running"}],
        "stats": {"instancesUpdatedSoFar": 1, "totalInstancesToBeUpdated": 2}
    }));

    match render_or_placeholder("instance-summary", &inputs, &settings, &resolver).unwrap() {
        PreviewOutput::Markup { html, .. } => {
            assert!(html.contains(r#"<ul class="instance-grid">"#));
            assert!(html.contains("1 / 2 (0%)"));
        }
        other => panic!("expected markup, got {:?}", other),
    }
}

#[test]
fn test_init_config_writes_loadable_defaults() {
    let temp = TempDir::new().unwrap();
    init_config(temp.path()).unwrap();

    assert!(temp.path().join(CONFIG_FILENAME).exists());
    assert_eq!(load_settings(temp.path()), Settings::default());
}
