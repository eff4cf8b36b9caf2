//! Components command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::RoundaboutError;

/// Configuration for the components command
#[derive(Debug, Clone)]
pub struct ComponentsConfig {
    /// Path to the module graph manifest
    pub manifest: PathBuf,
    /// Output format for the listing
    pub format: OutputFormat,
    /// Only list components that form cycles
    pub cyclic_only: bool,
    /// Ignore async imports when building the graph
    pub allow_async_cycles: bool,
    /// Base directory for rendering resource paths
    pub base_dir: Option<PathBuf>,
}

impl ComponentsConfig {
    pub fn builder() -> ComponentsConfigBuilder {
        ComponentsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ComponentsConfigBuilder {
    manifest: Option<PathBuf>,
    format: Option<OutputFormat>,
    cyclic_only: Option<bool>,
    allow_async_cycles: Option<bool>,
    base_dir: Option<Option<PathBuf>>,
}

impl ComponentsConfigBuilder {
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

    pub fn with_cyclic_only(mut self, cyclic_only: bool) -> Self {
        self.cyclic_only = Some(cyclic_only);
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
}

impl crate::common::ConfigBuilder for ComponentsConfigBuilder {
    type Config = ComponentsConfig;

    fn build(self) -> Result<Self::Config, RoundaboutError> {
        Ok(ComponentsConfig {
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
            cyclic_only: self
                .cyclic_only
                .ok_or_else(|| RoundaboutError::ConfigurationError {
                    message: "Missing required field: cyclic_only".to_string(),
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
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::common::ConfigBuilder;

    use super::*;

    #[test]
    fn test_complete_builder_produces_config() {
        let config = ComponentsConfig::builder()
            .with_manifest(PathBuf::from("graph.json"))
            .with_format(OutputFormat::Human)
            .with_cyclic_only(true)
            .with_allow_async_cycles(false)
            .with_base_dir(None)
            .build()
            .unwrap();

        assert!(config.cyclic_only);
        assert!(!config.allow_async_cycles);
    }

    #[test]
    fn test_missing_field_is_a_configuration_error() {
        let result = ComponentsConfig::builder()
            .with_manifest(PathBuf::from("graph.json"))
            .build();

        assert!(matches!(
            result,
            Err(RoundaboutError::ConfigurationError { .. })
        ));
    }
}
