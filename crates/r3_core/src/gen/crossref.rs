use crate::data::DefCatalog;
use crate::diag::{DiagSink, Diagnostic};
use crate::models::{DefName, PackedThingDef};

/// A category membership queued while generation runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCategoryRef {
    pub def_name: DefName,
    pub category: DefName,
}

/// Deferred category wiring.
///
/// Packed defs are built before anyone knows which category defs the
/// final catalog contains, so the builder queues symbolic references
/// here and a single resolve pass attaches them once the catalog is
/// loaded. Resolving consumes the queue, so memberships cannot be
/// attached twice.
#[derive(Debug, Default)]
pub struct CrossRefQueue {
    pending: Vec<PendingCategoryRef>,
}

impl CrossRefQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `def_name`'s membership in `category`.
    pub fn register(&mut self, def_name: DefName, category: DefName) {
        self.pending.push(PendingCategoryRef { def_name, category });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Attaches every queued membership to its def in `defs`.
    ///
    /// Memberships stay symbolic: a category missing from `catalog` is
    /// reported but attached anyway, so a richer catalog loaded later
    /// can still resolve it.
    pub fn resolve_into(
        self,
        defs: &mut [PackedThingDef],
        catalog: &DefCatalog,
        diag: &mut dyn DiagSink,
    ) {
        for pending in self.pending {
            if !catalog.has_category(pending.category.as_str()) {
                diag.report(Diagnostic::UnresolvedCategory {
                    def_name: pending.def_name.clone(),
                    category: pending.category.clone(),
                });
            }
            match defs.iter_mut().find(|d| d.def_name == pending.def_name) {
                Some(def) => def.thing_categories.push(pending.category),
                None => {
                    log::debug!(
                        "cross-ref target {} is not among the generated defs",
                        pending.def_name
                    );
                }
            }
        }
    }
}
