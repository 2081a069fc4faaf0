// Implied-def generation pipeline: collect candidates, build packed
// defs, classify, and wire categories.

pub mod builder;
pub mod categories;
pub mod classify;
pub mod collect;
pub mod crossref;


pub use builder::{build_packed_def, build_packed_pair};
pub use categories::resolve_category;
pub use classify::classify_complexity;
pub use collect::{reclaimable_candidates, recipe_tier_hints, ReclaimCandidate};
pub use crossref::{CrossRefQueue, PendingCategoryRef};

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info};

use crate::data::{get_lang, DefCatalog};
use crate::diag::{DiagSink, Diagnostic};
use crate::models::PackedThingDef;

/// Counters describing one generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    /// Distinct eligible source defs.
    pub candidates: usize,
    /// Generated defs, two per candidate.
    pub generated: usize,
    /// Generated def count per "kind/complexity" bucket.
    pub buckets: BTreeMap<String, usize>,
    /// Diagnostics reported while generating.
    pub diagnostics: usize,
}

/// Defs and counters produced by one generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutput {
    pub defs: Vec<PackedThingDef>,
    pub report: GenerationReport,
}

struct CountingSink<'a> {
    inner: &'a mut dyn DiagSink,
    count: usize,
}

impl DiagSink for CountingSink<'_> {
    fn report(&mut self, diag: Diagnostic) {
        self.count += 1;
        self.inner.report(diag);
    }
}

/// Runs the full pipeline over `catalog`: collect every eligible source
/// def, build its non-sterile and mangled packed defs, then resolve the
/// queued category cross-references against the same catalog.
///
/// Output order is deterministic for a given catalog: candidates appear
/// in first-seen hediff order, non-sterile before mangled within each
/// pair. Running twice over one catalog yields identical defs.
pub fn generate_reclaimed_defs(catalog: &DefCatalog, diag: &mut dyn DiagSink) -> GenerationOutput {
    let mut sink = CountingSink {
        inner: diag,
        count: 0,
    };
    let lang = get_lang();

    let candidates = reclaimable_candidates(catalog);
    info!("Collected {} reclaimable candidates", candidates.len());

    let mut crossrefs = CrossRefQueue::new();
    let mut defs = Vec::with_capacity(candidates.len() * 2);
    for candidate in &candidates {
        debug!("Generating reclaimed defs for {}", candidate.def.def_name);
        let pair = build_packed_pair(
            candidate.def,
            candidate.tier_hint,
            lang,
            &mut crossrefs,
            &mut sink,
        );
        defs.extend(pair);
    }

    crossrefs.resolve_into(&mut defs, catalog, &mut sink);

    let mut buckets: BTreeMap<String, usize> = BTreeMap::new();
    for def in &defs {
        *buckets
            .entry(format!("{}/{}", def.reclamation, def.complexity))
            .or_default() += 1;
    }

    let report = GenerationReport {
        candidates: candidates.len(),
        generated: defs.len(),
        buckets,
        diagnostics: sink.count,
    };
    info!(
        "Generated {} reclaimed defs ({} diagnostics)",
        report.generated, report.diagnostics
    );

    GenerationOutput { defs, report }
}
