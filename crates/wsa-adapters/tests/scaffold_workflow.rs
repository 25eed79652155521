//! End-to-end scaffold runs against the in-memory and local filesystems.

use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use wsa_adapters::{LocalFilesystem, MemoryFilesystem};
use wsa_core::prelude::*;

fn widget() -> ModuleName {
    ModuleName::try_new("widget").unwrap()
}

fn created(outcome: ScaffoldOutcome) -> ScaffoldReport {
    match outcome {
        ScaffoldOutcome::Created(report) => report,
        ScaffoldOutcome::Refused { module_dir } => {
            panic!("unexpected refusal at {}", module_dir.display())
        }
    }
}

#[test]
fn default_run_creates_full_asset_tree() {
    let fs = MemoryFilesystem::new().with_dir("/tmp/x");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    created(
        service
            .generate(&ScaffoldRequest::new("/tmp/x", widget()), &NullReporter)
            .unwrap(),
    );

    let expected: Vec<PathBuf> = [
        "/tmp/x/widget/__init__.py",
        "/tmp/x/widget/modules.py",
        "/tmp/x/widget/static/css/modules/widget.css",
        "/tmp/x/widget/static/js/modules/widget.js",
        "/tmp/x/widget/static/js/siteconfig/modules/widget-siteconfig.json",
        "/tmp/x/widget/templates/modules/widget/widget-primary.html",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(fs.list_files(), expected);
    assert_eq!(
        fs.read_file("/tmp/x/widget/templates/modules/widget/widget-primary.html")
            .as_deref(),
        Some(r#"<div class="widget-container"></div>"#)
    );
}

#[test]
fn hero_scenario_produces_documented_contents() {
    let fs = MemoryFilesystem::new().with_dir("/tmp/x");
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let request = ScaffoldRequest::new("/tmp/x", widget())
        .with_config_version(3)
        .with_template(TemplateVariant::try_new("hero").unwrap());

    let report = created(service.generate(&request, &NullReporter).unwrap());

    assert_eq!(
        fs.read_file("/tmp/x/widget/static/css/modules/widget.css")
            .as_deref(),
        Some(".widget-container {}")
    );
    let json = fs
        .read_file("/tmp/x/widget/static/js/siteconfig/modules/widget-siteconfig.json")
        .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        json!({
            "version": 3,
            "siteModules": {
                "widget": {},
                "path": "modules/widget",
                "css": "modules/widget"
            }
        })
    );
    assert_eq!(report.files_written.len(), 6);
}

#[test]
fn second_run_without_force_changes_nothing() {
    let fs = MemoryFilesystem::new().with_dir("/tmp/x");
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let request = ScaffoldRequest::new("/tmp/x", widget());

    created(service.generate(&request, &NullReporter).unwrap());
    let files_before = fs.list_files();
    let dirs_before = fs.list_dirs();

    for _ in 0..2 {
        let outcome = service.generate(&request, &NullReporter).unwrap();
        assert_eq!(
            outcome,
            ScaffoldOutcome::Refused {
                module_dir: PathBuf::from("/tmp/x/widget")
            }
        );
    }
    assert_eq!(fs.list_files(), files_before);
    assert_eq!(fs.list_dirs(), dirs_before);
}

#[test]
fn force_overwrites_previous_contents() {
    let fs = MemoryFilesystem::new().with_dir("/tmp/x");
    let service = ScaffoldService::new(Box::new(fs.clone()));

    created(
        service
            .generate(
                &ScaffoldRequest::new("/tmp/x", widget()).with_config_version(1),
                &NullReporter,
            )
            .unwrap(),
    );
    let report = created(
        service
            .generate(
                &ScaffoldRequest::new("/tmp/x", widget())
                    .with_config_version(9)
                    .with_force(true),
                &NullReporter,
            )
            .unwrap(),
    );

    assert!(report.directories_created.is_empty());
    let json = fs
        .read_file("/tmp/x/widget/static/js/siteconfig/modules/widget-siteconfig.json")
        .unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], 9);
}

#[test]
fn no_js_no_css_leaves_out_module_dirs_and_keys() {
    let fs = MemoryFilesystem::new().with_dir("/tmp/x");
    let service = ScaffoldService::new(Box::new(fs.clone()));
    let request = ScaffoldRequest::new("/tmp/x", widget())
        .with_js(false)
        .with_css(false);

    let report = created(service.generate(&request, &NullReporter).unwrap());

    assert!(!fs.is_dir(Path::new("/tmp/x/widget/static/js/modules")));
    assert!(!fs.is_dir(Path::new("/tmp/x/widget/static/css/modules")));
    assert!(fs.read_file("/tmp/x/widget/static/js/modules/widget.js").is_none());
    assert!(!report.site_config.site_modules.contains_key("path"));
    assert!(!report.site_config.site_modules.contains_key("css"));
    assert_eq!(report.site_config.site_modules["widget"], json!({}));
}

#[test]
fn any_integer_version_is_stored() {
    for version in [-3, 0, 2, i64::MAX] {
        let fs = MemoryFilesystem::new().with_dir("/r");
        let service = ScaffoldService::new(Box::new(fs.clone()));
        created(
            service
                .generate(
                    &ScaffoldRequest::new("/r", widget()).with_config_version(version),
                    &NullReporter,
                )
                .unwrap(),
        );
        let json = fs
            .read_file("/r/widget/static/js/siteconfig/modules/widget-siteconfig.json")
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["version"], version);
    }
}

#[test]
fn missing_root_dir_is_a_filesystem_error() {
    let fs = MemoryFilesystem::new();
    let service = ScaffoldService::new(Box::new(fs.clone()));

    let err = service
        .generate(&ScaffoldRequest::new("/does/not/exist", widget()), &NullReporter)
        .unwrap_err();

    assert!(matches!(err, WsaError::Application(_)));
    assert!(fs.list_files().is_empty());
}

#[test]
fn local_filesystem_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let request = ScaffoldRequest::new(tmp.path(), widget()).with_profile(Profile::Minimal);

    let report = created(service.generate(&request, &NullReporter).unwrap());

    assert_eq!(report.files_written.len(), 2);
    let html = tmp
        .path()
        .join("widget/templates/modules/widget/widget-primary.html");
    assert_eq!(
        std::fs::read_to_string(html).unwrap(),
        r#"<div class="widget-container"></div>"#
    );
    assert!(!tmp.path().join("widget/__init__.py").exists());
    assert!(tmp.path().join("widget/static/css/modules").is_dir());
}
