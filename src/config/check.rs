//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::detector::DetectorOptions;
use crate::error::RoundaboutError;

/// Configuration for the check command
///
/// This struct contains all options for detecting and reporting dependency
/// cycles in a module graph manifest.
#[derive(Debug, Clone)]
pub struct CheckCyclesConfig {
    /// Path to the module graph manifest
    pub manifest: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if cycles are found
    pub error_on_cycles: bool,
    /// Only report cycles starting at resources matching this glob
    pub include: Option<String>,
    /// Never report cycles starting at resources matching this glob
    pub exclude: Option<String>,
    /// Ignore cycles that only exist through async imports
    pub allow_async_cycles: bool,
    /// Base directory for rendering resource paths
    pub base_dir: Option<PathBuf>,
    /// Maximum number of cycles to report (None = all)
    pub max_cycles: Option<usize>,
}

impl CheckCyclesConfig {
    pub fn builder() -> CheckCyclesConfigBuilder {
        CheckCyclesConfigBuilder::new()
    }

    /// Compile the detector options for this run
    pub fn detector_options(&self) -> Result<DetectorOptions, RoundaboutError> {
        DetectorOptions::builder()
            .with_include_pattern(self.include.clone())
            .with_exclude_pattern(self.exclude.clone())
            .with_allow_async_cycles(self.allow_async_cycles)
            .with_base_directory(self.base_dir.clone())
            .build()
    }
}

#[derive(Default)]
pub struct CheckCyclesConfigBuilder {
    manifest: Option<PathBuf>,
    format: Option<OutputFormat>,
    error_on_cycles: Option<bool>,
    include: Option<Option<String>>,
    exclude: Option<Option<String>>,
    allow_async_cycles: Option<bool>,
    base_dir: Option<Option<PathBuf>>,
    max_cycles: Option<Option<usize>>,
}

impl CheckCyclesConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_cycles(mut self, error_on_cycles: bool) -> Self {
        self.error_on_cycles = Some(error_on_cycles);
        self
    }

    pub fn with_include(mut self, include: Option<String>) -> Self {
        self.include = Some(include);
        self
    }

    pub fn with_exclude(mut self, exclude: Option<String>) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn with_allow_async_cycles(mut self, allow_async_cycles: bool) -> Self {
        self.allow_async_cycles = Some(allow_async_cycles);
        self
    }

    pub fn with_base_dir(mut self, base_dir: Option<PathBuf>) -> Self {
        self.base_dir = Some(base_dir);
        self
    }

    pub fn with_max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = Some(max_cycles);
        self
    }
}

impl crate::common::ConfigBuilder for CheckCyclesConfigBuilder {
    type Config = CheckCyclesConfig;

    fn build(self) -> Result<Self::Config, RoundaboutError> {
        Ok(CheckCyclesConfig {
            manifest: self
                .manifest
                .ok_or_else(|| RoundaboutError::ConfigurationError {
                    message: "Missing required field: manifest".to_string(),
                })?,
            format: self
                .format
                .ok_or_else(|| RoundaboutError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            error_on_cycles: self.error_on_cycles.ok_or_else(|| {
                RoundaboutError::ConfigurationError {
                    message: "Missing required field: error_on_cycles".to_string(),
                }
            })?,
            include: self
                .include
                .ok_or_else(|| RoundaboutError::ConfigurationError {
                    message: "Missing required field: include".to_string(),
                })?,
            exclude: self
                .exclude
                .ok_or_else(|| RoundaboutError::ConfigurationError {
                    message: "Missing required field: exclude".to_string(),
                })?,
            allow_async_cycles: self.allow_async_cycles.ok_or_else(|| {
                RoundaboutError::ConfigurationError {
                    message: "Missing required field: allow_async_cycles".to_string(),
                }
            })?,
            base_dir: self
                .base_dir
                .ok_or_else(|| RoundaboutError::ConfigurationError {
                    message: "Missing required field: base_dir".to_string(),
                })?,
            max_cycles: self
                .max_cycles
                .ok_or_else(|| RoundaboutError::ConfigurationError {
                    message: "Missing required field: max_cycles".to_string(),
                })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::common::ConfigBuilder;

    use super::*;

    #[test]
    fn test_builder_requires_every_field() {
        let result = CheckCyclesConfig::builder()
            .with_manifest(PathBuf::from("graph.json"))
            .build();

        assert!(matches!(
            result,
            Err(RoundaboutError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_complete_builder_produces_config() {
        let config = CheckCyclesConfig::builder()
            .with_manifest(PathBuf::from("graph.json"))
            .with_format(OutputFormat::Json)
            .with_error_on_cycles(true)
            .with_include(None)
            .with_exclude(Some("/vendor/**".to_string()))
            .with_allow_async_cycles(false)
            .with_base_dir(None)
            .with_max_cycles(Some(10))
            .build()
            .unwrap();

        assert_eq!(config.manifest, PathBuf::from("graph.json"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.error_on_cycles);
        assert_eq!(config.max_cycles, Some(10));
    }

    #[test]
    fn test_detector_options_compile_patterns() {
        let config = CheckCyclesConfig::builder()
            .with_manifest(PathBuf::from("graph.json"))
            .with_format(OutputFormat::Human)
            .with_error_on_cycles(false)
            .with_include(None)
            .with_exclude(Some("/vendor/**".to_string()))
            .with_allow_async_cycles(true)
            .with_base_dir(None)
            .with_max_cycles(None)
            .build()
            .unwrap();

        let options = config.detector_options().unwrap();
        assert!(options.allow_async_cycles());
        assert!(!options.is_eligible_start("/vendor/lib.js"));
    }
}
