use std::collections::HashMap;
use std::path::Path;

use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::error::RoundaboutError;
use crate::graph::{DependencyKind, ModuleId, ModuleNode, ModuleSource, ResolvedDependency};

/// On-disk module graph manifest
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleManifest {
    pub modules: Vec<ManifestModule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestModule {
    pub id: String,
    /// Resource identifier; absent for synthetic modules
    pub path: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<ManifestDependency>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ManifestDependency {
    /// Resolved target module id; absent when resolution failed
    pub target: Option<String>,
    #[serde(default)]
    pub kind: ManifestDependencyKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestDependencyKind {
    #[default]
    Normal,
    Async,
    SelfReference,
}

impl From<ManifestDependencyKind> for DependencyKind {
    fn from(kind: ManifestDependencyKind) -> Self {
        match kind {
            ManifestDependencyKind::Normal => DependencyKind::Normal,
            ManifestDependencyKind::Async => DependencyKind::Async,
            ManifestDependencyKind::SelfReference => DependencyKind::SelfReference,
        }
    }
}

impl ModuleManifest {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RoundaboutError::ManifestReadError {
                path: path.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        serde_json::from_str(&content)
            .map_err(|e| {
                let span = span_at(&content, e.line(), e.column());

                RoundaboutError::ManifestParseError(Box::new(crate::error::ManifestParseError {
                    file: path.display().to_string(),
                    source_code: NamedSource::new(path.display().to_string(), content.clone()),
                    span,
                    source: e,
                }))
            })
            .into_diagnostic()
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }
}

/// Byte offset of a 1-based line/column position in `content`
fn span_at(content: &str, line: usize, column: usize) -> Option<SourceSpan> {
    if line == 0 {
        return None;
    }
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= content.len()).then(|| SourceSpan::new(offset.into(), 1))
}

/// [`ModuleSource`] view over a parsed manifest
pub struct ManifestSource<'a> {
    by_id: HashMap<&'a str, &'a ManifestModule>,
    manifest: &'a ModuleManifest,
}

impl<'a> ManifestSource<'a> {
    pub fn new(manifest: &'a ModuleManifest) -> Self {
        let mut by_id: HashMap<&str, &ManifestModule> = HashMap::new();
        for module in &manifest.modules {
            // First record under an id wins, matching the graph builder
            by_id.entry(module.id.as_str()).or_insert(module);
        }
        Self { by_id, manifest }
    }
}

impl ModuleSource for ManifestSource<'_> {
    fn modules(&self) -> Vec<ModuleNode> {
        self.manifest
            .modules
            .iter()
            .map(|m| ModuleNode::new(ModuleId::new(&m.id), m.path.clone()))
            .collect()
    }

    fn dependencies(&self, id: &ModuleId) -> Vec<ResolvedDependency> {
        let Some(module) = self.by_id.get(id.as_str()) else {
            return Vec::new();
        };
        module
            .dependencies
            .iter()
            .map(|d| ResolvedDependency::new(d.target.as_deref().map(ModuleId::new), d.kind.into()))
            .collect()
    }
}
