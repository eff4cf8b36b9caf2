//! Components command executor

use std::fmt::Write;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::ComponentsConfig;
use crate::detector::detector_impl::is_cyclic_component;
use crate::detector::strongly_connected_components;
use crate::executors::CommandExecutor;
use crate::graph::ModuleGraphBuilder;
use crate::manifest::{ManifestSource, ModuleManifest};
use crate::utils::path::relativize_resource;
use crate::utils::string::pluralize;

pub struct ComponentsExecutor;

impl CommandExecutor for ComponentsExecutor {
    type Config = ComponentsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let manifest = ModuleManifest::parse_file(&config.manifest)
            .wrap_err("Failed to load module manifest")?;

        let source = ManifestSource::new(&manifest);
        let mut graph_builder = ModuleGraphBuilder::new(config.allow_async_cycles);
        graph_builder
            .build_module_graph(&source)
            .wrap_err("Failed to build module dependency graph")?;

        let graph = graph_builder.graph();
        let partition = strongly_connected_components(graph);

        // Members in node index order, which is resource order
        let mut components: Vec<(Vec<String>, bool)> = Vec::new();
        for component in partition.components() {
            let cyclic = is_cyclic_component(graph, component);
            if config.cyclic_only && !cyclic {
                continue;
            }
            let mut members = component.clone();
            members.sort_unstable();
            let resources: Vec<String> = members
                .iter()
                .map(|&idx| {
                    relativize_resource(graph[idx].resource_key(), config.base_dir.as_deref())
                })
                .collect();
            components.push((resources, cyclic));
        }
        // Deterministic listing order regardless of traversal order
        components.sort();

        let output = match config.format {
            OutputFormat::Human => render_human(&components).into_diagnostic()?,
            OutputFormat::Json => render_json(&components)?,
        };
        print!("{output}");

        Ok(())
    }
}

fn render_human(components: &[(Vec<String>, bool)]) -> std::result::Result<String, std::fmt::Error> {
    let mut output = String::new();

    writeln!(
        output,
        "\n{} {} strongly connected {}:\n",
        style("🧩").blue(),
        style(components.len()).bold(),
        pluralize("component", components.len())
    )?;

    for (i, (members, cyclic)) in components.iter().enumerate() {
        let marker = if *cyclic {
            style("cyclic").red().bold().to_string()
        } else {
            style("acyclic").green().to_string()
        };
        writeln!(output, "{} Component #{} ({marker})", style("•").dim(), i + 1)?;
        for member in members {
            writeln!(output, "    {}", style(member).yellow())?;
        }
    }

    Ok(output)
}

fn render_json(components: &[(Vec<String>, bool)]) -> Result<String> {
    let listing: Vec<_> = components
        .iter()
        .map(|(members, cyclic)| {
            json!({
                "members": members,
                "cyclic": cyclic,
            })
        })
        .collect();

    let report = json!({
        "component_count": components.len(),
        "components": listing,
    });

    let mut output = serde_json::to_string_pretty(&report).into_diagnostic()?;
    output.push('\n');
    Ok(output)
}
