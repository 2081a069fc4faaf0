use once_cell::sync::OnceCell;

use crate::data::catalog::DefCatalog;
use crate::error::CatalogError;

/// Vendored vanilla-flavoured def snapshot used by tests and CLI demos.
pub const SAMPLE_DEFS_JSON: &str = include_str!("../../../../data/defs/sample_defs.json");

static SAMPLE: OnceCell<DefCatalog> = OnceCell::new();

/// Embedded sample catalog, parsed once on first use.
pub fn sample_catalog() -> Result<&'static DefCatalog, CatalogError> {
    SAMPLE.get_or_try_init(|| DefCatalog::from_json_str(SAMPLE_DEFS_JSON))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_parses() {
        let catalog = sample_catalog().expect("embedded sample should parse");
        assert!(!catalog.things.is_empty());
        assert!(!catalog.hediffs.is_empty());
        assert!(!catalog.recipes.is_empty());
        assert_eq!(catalog.categories.len(), 10);
    }

    #[test]
    fn test_sample_contains_known_landmarks() {
        let catalog = sample_catalog().unwrap();
        assert!(catalog.has_category("BodyPartsNatural"));
        assert!(catalog.has_category("BodyPartsNonSterileGlittertech"));
        assert!(catalog.thing(&"BionicEye".into()).is_some());
    }
}
