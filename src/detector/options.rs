//! Detector configuration
//!
//! One immutable [`DetectorOptions`] value is constructed per detector
//! instance and threaded through a whole pass; the algorithmic core carries
//! no global defaults.

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::RoundaboutError;

/// Options controlling one detection pass
#[derive(Debug, Clone, Default)]
pub struct DetectorOptions {
    include_pattern: Option<Pattern>,
    exclude_pattern: Option<Pattern>,
    allow_async_cycles: bool,
    base_directory: Option<PathBuf>,
}

impl DetectorOptions {
    pub fn builder() -> DetectorOptionsBuilder {
        DetectorOptionsBuilder::new()
    }

    /// Whether async (weak) edges are excluded from the graph
    pub fn allow_async_cycles(&self) -> bool {
        self.allow_async_cycles
    }

    /// Base directory for rendering resource identifiers
    pub fn base_directory(&self) -> Option<&Path> {
        self.base_directory.as_deref()
    }

    /// Check whether a module may start a cycle report
    ///
    /// The include/exclude patterns apply only to the start module of a
    /// report, never to the other nodes on the recovered cycle path.
    pub fn is_eligible_start(&self, resource: &str) -> bool {
        if let Some(pattern) = &self.exclude_pattern
            && pattern.matches(resource)
        {
            return false;
        }
        match &self.include_pattern {
            Some(pattern) => pattern.matches(resource),
            None => true,
        }
    }
}

#[derive(Default)]
pub struct DetectorOptionsBuilder {
    include_pattern: Option<String>,
    exclude_pattern: Option<String>,
    allow_async_cycles: bool,
    base_directory: Option<PathBuf>,
}

impl DetectorOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include_pattern(mut self, pattern: Option<String>) -> Self {
        self.include_pattern = pattern;
        self
    }

    pub fn with_exclude_pattern(mut self, pattern: Option<String>) -> Self {
        self.exclude_pattern = pattern;
        self
    }

    pub fn with_allow_async_cycles(mut self, allow_async_cycles: bool) -> Self {
        self.allow_async_cycles = allow_async_cycles;
        self
    }

    pub fn with_base_directory(mut self, base_directory: Option<PathBuf>) -> Self {
        self.base_directory = base_directory;
        self
    }

    pub fn build(self) -> Result<DetectorOptions, RoundaboutError> {
        let compile = |pattern: Option<String>| -> Result<Option<Pattern>, RoundaboutError> {
            pattern
                .map(|p| {
                    Pattern::new(&p).map_err(|source| RoundaboutError::PatternError {
                        pattern: p,
                        source,
                    })
                })
                .transpose()
        };

        Ok(DetectorOptions {
            include_pattern: compile(self.include_pattern)?,
            exclude_pattern: compile(self.exclude_pattern)?,
            allow_async_cycles: self.allow_async_cycles,
            base_directory: self.base_directory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_everything() {
        let options = DetectorOptions::default();
        assert!(options.is_eligible_start("/any/path.js"));
        assert!(!options.allow_async_cycles());
        assert!(options.base_directory().is_none());
    }

    #[test]
    fn test_exclude_pattern_wins_over_include() {
        let options = DetectorOptions::builder()
            .with_include_pattern(Some("/src/**".to_string()))
            .with_exclude_pattern(Some("/src/vendor/**".to_string()))
            .build()
            .unwrap();

        assert!(options.is_eligible_start("/src/a.js"));
        assert!(!options.is_eligible_start("/src/vendor/lib.js"));
        assert!(!options.is_eligible_start("/other/b.js"));
    }

    #[test]
    fn test_invalid_pattern_is_a_configuration_error() {
        let result = DetectorOptions::builder()
            .with_include_pattern(Some("[".to_string()))
            .build();

        assert!(matches!(
            result,
            Err(RoundaboutError::PatternError { .. })
        ));
    }
}
