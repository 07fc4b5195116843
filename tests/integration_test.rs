//! Integration tests for deps2mermaid using the library interface

use std::fs;
use std::path::{Path, PathBuf};

use deps2mermaid::dependency_filter::EdgeFilter;
use deps2mermaid::error::Deps2MermaidError;
use deps2mermaid::graph::{
    DependencyGraph, DependencyGraphBuilder, DepthBounds, GraphRenderer, project_root_pattern,
    zoom,
};
use deps2mermaid::manifest::{Manifest, ManifestDiscovery, load_manifests};
use indicatif::ProgressBar;
use predicates::prelude::*;
use regex::Regex;
use tempfile::TempDir;

/// `(library key, [(dependency, range)])`
type Library<'a> = (&'a str, Vec<(&'a str, &'a str)>);

fn write_assets(
    dir: &Path,
    project: &str,
    libraries: Vec<Library>,
    requirements: &[&str],
) -> PathBuf {
    let libraries: Vec<String> = libraries
        .into_iter()
        .map(|(key, deps)| {
            let deps: Vec<String> = deps
                .into_iter()
                .map(|(name, range)| format!(r#""{name}": "{range}""#))
                .collect();
            format!(
                r#""{key}": {{ "type": "package", "dependencies": {{ {} }} }}"#,
                deps.join(", ")
            )
        })
        .collect();
    let requirements: Vec<String> = requirements.iter().map(|r| format!("\"{r}\"")).collect();

    let json = format!(
        r#"{{
  "version": 3,
  "targets": {{ "net8.0": {{ {} }} }},
  "projectFileDependencyGroups": {{ "net8.0": [ {} ] }},
  "project": {{ "version": "1.0.0", "restore": {{ "projectName": "{project}" }} }}
}}"#,
        libraries.join(", "),
        requirements.join(", ")
    );

    let path = dir.join(project).join("obj").join("project.assets.json");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, json).unwrap();
    path
}

/// Two projects sharing a logging stack at different versions
fn create_solution(temp_dir: &TempDir) {
    let root = temp_dir.path().join("src");

    write_assets(
        &root,
        "Api",
        vec![
            ("Serilog.Sinks.Console/5.0.0", vec![("Serilog", "3.1.1")]),
            ("Serilog/3.1.1", vec![]),
        ],
        &["Serilog.Sinks.Console >= 5.0.0"],
    );
    write_assets(
        &root,
        "Worker",
        vec![
            ("Serilog.Sinks.Console/4.1.0", vec![("Serilog", "2.10.0")]),
            ("Serilog/2.10.0", vec![]),
        ],
        &["Serilog.Sinks.Console >= 4.1.0", "Api >= 1.0.0"],
    );
}

fn load(temp_dir: &TempDir) -> Vec<Manifest> {
    let mut discovery = ManifestDiscovery::new();
    let paths = discovery.discover_all(&[format!("{}/*", temp_dir.path().display())]);
    load_manifests(&paths, &ProgressBar::hidden()).unwrap()
}

fn graph_of(manifests: &[Manifest]) -> DependencyGraph {
    let mut builder = DependencyGraphBuilder::new();
    for manifest in manifests {
        builder.add_dependencies(manifest.dependencies.iter().cloned());
    }
    builder.build()
}

#[test]
fn test_recursive_discovery_loads_in_path_order() {
    let temp_dir = TempDir::new().unwrap();
    create_solution(&temp_dir);

    let manifests = load(&temp_dir);
    let roots: Vec<String> = manifests
        .iter()
        .map(|m| m.require_root().unwrap().to_string())
        .collect();
    assert_eq!(roots, ["Api/1.0.0", "Worker/1.0.0"]);
    assert_eq!(manifests[1].dependencies.len(), 3);
}

#[test]
fn test_version_conflicts_show_on_shared_nodes() {
    let temp_dir = TempDir::new().unwrap();
    create_solution(&temp_dir);

    let graph = graph_of(&load(&temp_dir));
    let serilog = graph.node("Serilog").unwrap();
    let ranges: Vec<String> = serilog
        .sorted_ranges()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(ranges, ["2.10.0", "3.1.1"]);

    let (text, _) = GraphRenderer::default()
        .render_to_string(&graph, graph.dependencies(), &EdgeFilter::new())
        .unwrap();

    assert!(predicate::str::starts_with("graph LR\n").eval(&text));
    assert!(predicate::str::contains("Serilog[\"Serilog\n    2.10.0, 3.1.1\"]").eval(&text));
    assert!(predicate::str::contains("Serilog.Sinks.Console -- \"4.1.0 -> 2.10.0\"--> Serilog").eval(&text));
    // Api is both a root and a project reference of Worker, at one version
    assert!(predicate::str::contains("Worker --> Api").eval(&text));
}

#[test]
fn test_project_root_zoom() {
    let temp_dir = TempDir::new().unwrap();
    create_solution(&temp_dir);

    let manifests = load(&temp_dir);
    let graph = graph_of(&manifests);
    let roots: Vec<_> = manifests
        .iter()
        .map(|m| m.require_root().unwrap().clone())
        .collect();
    let pattern = Regex::new(&project_root_pattern(&roots).unwrap()).unwrap();

    let edges: Vec<String> = zoom(&graph, &pattern, DepthBounds::limited(1, 0))
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        edges,
        [
            "Api/1.0.0 -> Serilog.Sinks.Console/5.0.0",
            "Worker/1.0.0 -> Serilog.Sinks.Console/4.1.0",
            "Worker/1.0.0 -> Api/1.0.0",
        ]
    );
}

#[test]
fn test_project_directory_input() {
    let temp_dir = TempDir::new().unwrap();
    create_solution(&temp_dir);

    let mut discovery = ManifestDiscovery::new();
    let paths = discovery.discover_all(&[
        temp_dir.path().join("src/Worker").display().to_string(),
        temp_dir.path().join("src/Missing").display().to_string(),
    ]);

    assert_eq!(paths.len(), 1);
    assert!(paths[0].ends_with("Worker/obj/project.assets.json"));
    assert_eq!(discovery.unresolved().len(), 1);
}

#[test]
fn test_broken_manifest_names_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("project.assets.json");
    fs::write(&path, "{ \"targets\": ").unwrap();

    let err = load_manifests(std::slice::from_ref(&path), &ProgressBar::hidden()).unwrap_err();
    assert!(predicate::str::contains("Failed to load manifest").eval(&err.to_string()));

    match Manifest::load(&path) {
        Err(Deps2MermaidError::ManifestParseError(parse)) => {
            assert_eq!(parse.file, path.display().to_string());
        }
        other => panic!("expected ManifestParseError, got {other:?}"),
    }
}

#[test]
fn test_bad_range_in_manifest_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_assets(
        temp_dir.path(),
        "App",
        vec![("Lib/1.0.0", vec![("Core", "[1.0.0")])],
        &[],
    );

    assert!(matches!(
        Manifest::load(&path),
        Err(Deps2MermaidError::InvalidVersionRange { .. })
    ));
}
