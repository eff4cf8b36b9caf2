//! Check command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::CheckCyclesConfig;
use crate::detector::CycleDetector;
use crate::executors::CommandExecutor;
use crate::graph::ModuleGraphBuilder;
use crate::manifest::{ManifestSource, ModuleManifest};
use crate::progress::ProgressReporter;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct CheckExecutor;

impl CommandExecutor for CheckExecutor {
    type Config = CheckCyclesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Checking for circular module dependencies...\n",
            style("🔁").cyan()
        );

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        if let Some(p) = progress.as_mut() {
            p.start_manifest_loading(&config.manifest);
        }

        let manifest = ModuleManifest::parse_file(&config.manifest)
            .wrap_err("Failed to load module manifest")?;

        if let Some(p) = progress.as_mut() {
            p.finish_manifest_loading(manifest.module_count());
        }

        let source = ManifestSource::new(&manifest);
        let mut graph_builder = ModuleGraphBuilder::new(config.allow_async_cycles);
        graph_builder
            .build_module_graph(&source)
            .wrap_err("Failed to build module dependency graph")?;

        if let Some(p) = progress.as_mut() {
            p.start_cycle_detection();
        }

        let options = config
            .detector_options()
            .into_diagnostic()
            .wrap_err("Failed to compile detector options")?;
        let mut detector = CycleDetector::new(options);
        detector
            .detect_cycles(graph_builder.graph())
            .wrap_err("Failed to detect dependency cycles")?;

        if let Some(p) = progress.as_ref() {
            p.finish_cycle_detection(detector.cycle_count());
        }

        for warning in detector.callback_errors() {
            eprintln!("{} {}", style("⚠").yellow().bold(), warning);
        }

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => {
                let generator = HumanReportGenerator::new(config.max_cycles);
                generator.generate_report(&detector)
            }
            OutputFormat::Json => {
                let generator = JsonReportGenerator::new();
                generator.generate_report(&detector)
            }
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && detector.has_cycles() {
            std::process::exit(1);
        }

        Ok(())
    }
}
