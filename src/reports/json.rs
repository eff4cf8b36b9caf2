//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::detector::CycleDetector;
use crate::error::RoundaboutError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, RoundaboutError> {
        // Detector output is already in deterministic resource order, so the
        // report needs no re-sorting
        let cycles: Vec<_> = detector
            .cycles()
            .iter()
            .map(|cycle| {
                json!({
                    "module": cycle.module_id().as_str(),
                    "resource": cycle.resource(),
                    "path": cycle.path(),
                })
            })
            .collect();

        let report = json!({
            "has_cycles": detector.has_cycles(),
            "cycle_count": detector.cycle_count(),
            "cycles": cycles,
        });

        serde_json::to_string_pretty(&report).map_err(RoundaboutError::Json)
    }
}
