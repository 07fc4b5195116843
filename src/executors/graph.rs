//! Graph command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use regex::Regex;

use crate::cli::OutputType;
use crate::common::compile_pattern;
use crate::config::{GraphOptions, ZoomSeed};
use crate::core::{Component, Dependency};
use crate::dependency_filter::EdgeFilter;
use crate::error::Deps2MermaidError;
use crate::executors::CommandExecutor;
use crate::graph::{DependencyGraph, DependencyGraphBuilder, GraphRenderer, project_root_pattern, zoom};
use crate::manifest::{Manifest, ManifestDiscovery, load_manifests};
use crate::output::{encode_payload, format_output, open_in_browser};
use crate::progress::ProgressReporter;
use crate::verbose::VerboseLog;

pub struct GraphExecutor;

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let log = VerboseLog::new(config.verbose);
        log.log(format_args!("{config:?}"));

        // Patterns first, so typos fail before any file is read
        let filter = EdgeFilter::from_options(&config.filter)?;
        let zoom_pattern = match &config.zoom.seed {
            ZoomSeed::Pattern(pattern) => Some(compile_pattern("--zoom", pattern)?),
            _ => None,
        };

        let mut discovery = ManifestDiscovery::new();
        let paths = discovery.discover_all(&config.paths);
        if paths.is_empty() {
            eprintln!(
                "{} No project.assets.json files found, run `dotnet restore` first",
                style("ℹ").blue()
            );
            return Ok(());
        }
        log.list("Using assets files:", paths.iter().map(|p| p.display()));

        eprintln!(
            "{} Generating dependency graph from {} assets file{}...",
            style("📊").cyan(),
            paths.len(),
            if paths.len() == 1 { "" } else { "s" }
        );

        let progress = ProgressReporter::new();
        let bar = progress.start_loading(paths.len());
        let manifests = load_manifests(&paths, &bar).wrap_err("Failed to load manifests")?;

        let graph = build_graph(&manifests, &log);
        progress.finish_loading(bar, graph.edge_count());

        let selected = select_edges(&config, &graph, &manifests, zoom_pattern.as_ref(), &log)
            .wrap_err("Failed to zoom into the graph")?;

        let renderer = GraphRenderer::new(config.direction);
        let (code, summary) = renderer
            .render_to_string(&graph, selected, &filter)
            .wrap_err("Failed to render Mermaid graph")?;
        for skipped in &summary.skipped {
            log.log(format_args!("Skipping {skipped}"));
        }
        log.log(format_args!(
            "Rendered {} edge(s), skipped {}",
            summary.rendered,
            summary.skipped.len()
        ));

        if config.output_type.needs_payload() && log.is_enabled() {
            log.log(format_args!("Payload: {}", encode_payload(&code)?));
        }
        let text = format_output(config.output_type, &code)
            .wrap_err("Failed to encode diagram payload")?;

        write_result(&config, &text)?;

        if config.output_type == OutputType::Live {
            log.log(format_args!("Opening {text}"));
            open_in_browser(&text);
        }

        Ok(())
    }
}

fn build_graph(manifests: &[Manifest], log: &VerboseLog) -> DependencyGraph {
    let mut builder = DependencyGraphBuilder::new();
    for manifest in manifests {
        let added = builder.add_dependencies(manifest.dependencies.iter().cloned());
        log.log(format_args!(
            "{}: {} dependencies, {} new",
            manifest.path.display(),
            manifest.dependencies.len(),
            added
        ));
    }
    let duplicates = builder.duplicates();
    let graph = builder.build();

    log.log(format_args!(
        "Graph has {} nodes and {} edges ({} duplicate edges dropped)",
        graph.node_count(),
        graph.edge_count(),
        duplicates
    ));
    graph
}

fn select_edges<'g>(
    config: &GraphOptions,
    graph: &'g DependencyGraph,
    manifests: &[Manifest],
    zoom_pattern: Option<&Regex>,
    log: &VerboseLog,
) -> Result<Vec<&'g Dependency>, Deps2MermaidError> {
    let seeds = match (&config.zoom.seed, zoom_pattern) {
        (ZoomSeed::Pattern(_), Some(pattern)) => pattern.clone(),
        (ZoomSeed::ProjectRoot, _) => {
            let roots = manifests
                .iter()
                .map(|manifest| manifest.require_root().cloned())
                .collect::<Result<Vec<Component>, _>>()?;
            match project_root_pattern(&roots) {
                Some(pattern) => compile_pattern("--project-root", &pattern)?,
                None => return Ok(Vec::new()),
            }
        }
        _ => return Ok(graph.dependencies().collect()),
    };

    let bounds = config.zoom.depth_bounds();
    log.log(format_args!(
        "Zooming on {} node(s) matching {} ({})",
        graph.nodes_matching(&seeds).count(),
        seeds,
        bounds
    ));
    Ok(zoom(graph, &seeds, bounds))
}

fn write_result(config: &GraphOptions, text: &str) -> Result<()> {
    let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref() {
        Box::new(BufWriter::new(
            File::create(output_path)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Failed to create output file '{}'", output_path.display())
                })?,
        ))
    } else {
        Box::new(io::stdout())
    };

    if text.ends_with('\n') {
        write!(output_writer, "{text}").into_diagnostic()?;
    } else {
        writeln!(output_writer, "{text}").into_diagnostic()?;
    }
    output_writer.flush().into_diagnostic()?;

    if let Some(output_path) = config.output.as_ref() {
        eprintln!(
            "{} Graph written to {}",
            style("✓").green(),
            style(output_path.display()).bold()
        );
    }

    Ok(())
}
