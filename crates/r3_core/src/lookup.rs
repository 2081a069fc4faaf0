use std::sync::OnceLock;

use fxhash::FxHashMap;

use crate::models::{DefName, PackedThingDef, ReclamationKind};
use crate::settings::ReclamationSettings;

/// Generated defs grouped by the source def they were reclaimed from.
///
/// Built once after generation. Each group holds at most one def per
/// [`ReclamationKind`], non-sterile first, matching generation order.
#[derive(Debug, Default)]
pub struct LookupCache {
    by_source: FxHashMap<DefName, Vec<PackedThingDef>>,
}

impl LookupCache {
    /// Groups `defs` by their source def.
    pub fn build(defs: Vec<PackedThingDef>) -> Self {
        let mut by_source: FxHashMap<DefName, Vec<PackedThingDef>> = FxHashMap::default();
        for def in defs {
            by_source
                .entry(def.spawn_on_unpack.clone())
                .or_default()
                .push(def);
        }
        Self { by_source }
    }

    /// Number of distinct source defs with reclaimed forms.
    pub fn len(&self) -> usize {
        self.by_source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }

    /// All generated defs for one source def, or an empty slice.
    pub fn reclaimed_forms(&self, source: &DefName) -> &[PackedThingDef] {
        self.by_source
            .get(source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The def a part removed at `fraction` remaining condition turns
    /// into.
    ///
    /// `None` when the fraction falls below every window (the part is
    /// destroyed outright) or when `source` has no reclaimed forms.
    pub fn extractable_def(
        &self,
        source: &DefName,
        fraction: f32,
        settings: &ReclamationSettings,
    ) -> Option<&PackedThingDef> {
        let kind = settings.kind_for_fraction(fraction)?;
        self.by_source
            .get(source)?
            .iter()
            .find(|d| d.reclamation == kind)
    }
}

static GLOBAL_CACHE: OnceLock<LookupCache> = OnceLock::new();

/// Installs `cache` as the process-wide lookup.
///
/// Only the first installation wins; later calls log a warning, leave
/// the original in place and return false.
pub fn install_global(cache: LookupCache) -> bool {
    let installed = GLOBAL_CACHE.set(cache).is_ok();
    if !installed {
        log::warn!("reclaimed-def lookup cache already installed; ignoring replacement");
    }
    installed
}

/// Process-wide lookup cache, if one has been installed.
pub fn global_cache() -> Option<&'static LookupCache> {
    GLOBAL_CACHE.get()
}

/// [`LookupCache::extractable_def`] against the process-wide cache.
pub fn extractable_def(
    source: &DefName,
    fraction: f32,
    settings: &ReclamationSettings,
) -> Option<&'static PackedThingDef> {
    global_cache()?.extractable_def(source, fraction, settings)
}
