//! Def cache builder library
//!
//! Catalog JSON → generated reclaimed defs → MessagePack+LZ4 artifact.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use r3_core::diag::CollectSink;
use r3_core::export::{write_artifact, ArtifactMetadata, ReclaimedDefsDoc};
use r3_core::gen::{generate_reclaimed_defs, GenerationReport};
use r3_core::DefCatalog;

/// Everything one build run produces, ready for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct BuildSummary {
    pub metadata: ArtifactMetadata,
    pub report: GenerationReport,
    /// Rendered diagnostics, in report order.
    pub diagnostics: Vec<String>,
}

/// Generates reclaimed defs from a catalog JSON file and writes the
/// compressed artifact.
pub fn build_def_cache(
    input_catalog: &Path,
    output_artifact: &Path,
    schema_version: &str,
) -> Result<BuildSummary> {
    let catalog = DefCatalog::load(input_catalog)
        .with_context(|| format!("Failed to load catalog: {}", input_catalog.display()))?;
    build_from_catalog(&catalog, output_artifact, schema_version)
}

/// Same as [`build_def_cache`], but over the embedded sample catalog.
pub fn build_sample_cache(output_artifact: &Path, schema_version: &str) -> Result<BuildSummary> {
    let catalog =
        r3_core::sample_catalog().context("Failed to parse embedded sample catalog")?;
    build_from_catalog(catalog, output_artifact, schema_version)
}

fn build_from_catalog(
    catalog: &DefCatalog,
    output_artifact: &Path,
    schema_version: &str,
) -> Result<BuildSummary> {
    let mut sink = CollectSink::default();
    let output = generate_reclaimed_defs(catalog, &mut sink);
    let report = output.report.clone();

    let doc = ReclaimedDefsDoc::new(schema_version, output.defs);
    let metadata = write_artifact(output_artifact, &doc)
        .with_context(|| format!("Failed to write artifact: {}", output_artifact.display()))?;

    Ok(BuildSummary {
        metadata,
        report,
        diagnostics: sink.diags.iter().map(|d| d.to_string()).collect(),
    })
}
