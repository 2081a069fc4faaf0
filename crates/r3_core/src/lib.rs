//! # r3_core - Reclaimed Body-Part Def Generation
//!
//! This library derives degraded "reclaimed" item definitions from a
//! host def catalog: every installable body part or implant gains a
//! non-sterile and a mangled variant, classified into a complexity tier
//! and filed into the matching item category.
//!
//! ## Features
//! - Deterministic generation (same catalog = same defs, bit for bit)
//! - Complexity classification from curated tags, tech tiers and prices
//! - Deferred category cross-referencing against the final catalog
//! - Compressed artifact export with integrity checks

pub mod data;
pub mod diag;
pub mod error;
pub mod export;
pub mod gen;
pub mod lookup;
pub mod models;
pub mod settings;

// Re-export the generation pipeline
pub use gen::{generate_reclaimed_defs, GenerationOutput, GenerationReport};

// Re-export core model types
pub use models::{
    Complexity, DefName, HediffClass, HediffDef, PackedThingDef, RecipeDef, ReclamationKind,
    StatKind, StatModifier, TechLevel, ThingCategoryDef, ThingDef,
};

// Re-export catalog and diagnostics plumbing
pub use data::{sample_catalog, DefCatalog};
pub use diag::{CollectSink, DiagSink, Diagnostic, LogSink};
pub use error::{CatalogError, Result};

// Re-export lookup and settings
pub use lookup::{install_global, LookupCache};
pub use settings::{FloatRange, ReclamationSettings, RANGE_EPSILON};

// Re-export artifact export
pub use export::{
    read_artifact, write_artifact, ArtifactMetadata, ExportError, ReclaimedDefsDoc,
    DEF_CACHE_VERSION,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
