// Catalog loading and embedded data tables.

pub mod catalog;
pub mod lang;
pub mod sample;

pub use catalog::DefCatalog;
pub use lang::{get_lang, LangData};
pub use sample::{sample_catalog, SAMPLE_DEFS_JSON};
