//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::RoundaboutError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>) -> Self {
        Self { max_cycles }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, RoundaboutError> {
        let mut output = String::new();

        if !detector.has_cycles() {
            write!(
                output,
                "\n{} No circular dependencies detected! Your module graph is acyclic.\n",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        write!(
            output,
            "\n{} Found {} dependency {}:\n\n",
            style("❌").red().bold(),
            style(detector.cycle_count()).red().bold(),
            pluralize("cycle", detector.cycle_count())
        )?;

        let total_cycles = detector.cycle_count();
        let showing_all = self.max_cycles.is_none_or(|limit| limit >= total_cycles);

        let cycles_to_show = detector
            .cycles()
            .iter()
            .take(self.max_cycles.unwrap_or(total_cycles))
            .enumerate();

        for (i, cycle) in cycles_to_show {
            writeln!(output, "{} Cycle #{}", style("🔄").yellow(), i + 1)?;
            writeln!(
                output,
                "  {} Starting at {}",
                style("📦").blue(),
                style(cycle.resource()).bold()
            )?;
            writeln!(
                output,
                "    {} {}",
                style("🔗").cyan(),
                style(cycle.arrow_path()).yellow()
            )?;
            writeln!(output)?;
        }

        if !showing_all {
            writeln!(
                output,
                "\n{} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(
                    self.max_cycles
                        .expect("max_cycles must be Some when !showing_all")
                )
                .yellow(),
                style(total_cycles).yellow()
            )?;
        }

        writeln!(
            output,
            "\n{} To break these cycles, you need to remove at least one import from each cycle.",
            style("💡").yellow()
        )?;
        writeln!(
            output,
            "{} Consider extracting shared code into a module that both sides can import.",
            style("💡").yellow()
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detector::ModuleCycle;
    use crate::graph::ModuleId;

    fn detector_with_cycles(n: usize) -> CycleDetector {
        let mut detector = CycleDetector::default();
        for i in 0..n {
            detector.add_cycle(ModuleCycle::new(
                ModuleId::new(format!("m{i}")),
                vec![
                    format!("/src/m{i}.js"),
                    "/src/other.js".to_string(),
                    format!("/src/m{i}.js"),
                ],
            ));
        }
        detector
    }

    #[test]
    fn test_clean_graph_report() {
        let detector = CycleDetector::default();
        let report = HumanReportGenerator::new(None)
            .generate_report(&detector)
            .unwrap();

        assert!(report.contains("No circular dependencies detected"));
    }

    #[test]
    fn test_report_lists_every_cycle_path() {
        let detector = detector_with_cycles(2);
        let report = HumanReportGenerator::new(None)
            .generate_report(&detector)
            .unwrap();

        assert!(report.contains("Found 2 dependency cycles"));
        assert!(report.contains("/src/m0.js -> /src/other.js -> /src/m0.js"));
        assert!(report.contains("/src/m1.js -> /src/other.js -> /src/m1.js"));
    }

    #[test]
    fn test_max_cycles_truncates_output() {
        let detector = detector_with_cycles(5);
        let report = HumanReportGenerator::new(Some(2))
            .generate_report(&detector)
            .unwrap();

        assert!(report.contains("Cycle #2"));
        assert!(!report.contains("Cycle #3"));
        assert!(report.contains("Showing 2 of 5 cycles"));
    }

    #[test]
    fn test_singular_cycle_wording() {
        let detector = detector_with_cycles(1);
        let report = HumanReportGenerator::new(None)
            .generate_report(&detector)
            .unwrap();

        assert!(report.contains("Found 1 dependency cycle:"));
    }
}
