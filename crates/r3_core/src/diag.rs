//! Non-fatal conditions noticed during def generation.
//!
//! Generation never aborts on these; each condition maps to a documented
//! fallback and is reported through a [`DiagSink`] so hosts can decide
//! how loudly to surface them.

use std::fmt;

use serde::Serialize;

use crate::models::{Complexity, DefName, ReclamationKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Diagnostic {
    /// No tag, tier or market value gave any complexity signal; the def
    /// was classified as `Glittertech`.
    NoComplexitySignal { def_name: DefName },

    /// A (kind, complexity) pair had no entry in the category table; the
    /// kind's umbrella category was used instead.
    UnmappedCategoryPair {
        def_name: DefName,
        kind: ReclamationKind,
        complexity: Complexity,
    },

    /// A generated def references a category the loaded catalog does not
    /// contain. The symbolic reference is kept so a richer catalog can
    /// still resolve it later.
    UnresolvedCategory { def_name: DefName, category: DefName },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NoComplexitySignal { def_name } => write!(
                f,
                "{} has no usable tech level, tech hediff tags or market value; defaulting to highest complexity",
                def_name
            ),
            Diagnostic::UnmappedCategoryPair {
                def_name,
                kind,
                complexity,
            } => write!(f, "no category mapped for {} ({}, {})", def_name, kind, complexity),
            Diagnostic::UnresolvedCategory { def_name, category } => write!(
                f,
                "category {} wanted by {} is not in the loaded catalog",
                category, def_name
            ),
        }
    }
}

/// Receiver for pipeline diagnostics.
pub trait DiagSink {
    fn report(&mut self, diag: Diagnostic);
}

/// Forwards every diagnostic to the `log` facade as a warning.
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagSink for LogSink {
    fn report(&mut self, diag: Diagnostic) {
        log::warn!("{}", diag);
    }
}

/// Collects diagnostics in memory, preserving report order.
#[derive(Debug, Default)]
pub struct CollectSink {
    pub diags: Vec<Diagnostic>,
}

impl DiagSink for CollectSink {
    fn report(&mut self, diag: Diagnostic) {
        self.diags.push(diag);
    }
}
