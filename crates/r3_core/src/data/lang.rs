use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// English template strings for generated defs, embedded at compile time.
pub const RECLAIMED_LANG_EN_YAML: &str = include_str!("../../../../data/lang/reclaimed_en.yaml");

/// Parsed language template table.
#[derive(Debug, Clone, Deserialize)]
pub struct LangData {
    pub schema_version: u32,
    pub keys: BTreeMap<String, String>,
}

impl LangData {
    /// Template for `key`, or the key itself when no template exists.
    ///
    /// Falling back to the raw key matches how the host renders missing
    /// translations: ugly but visible, never a crash.
    pub fn resolve<'a>(&'a self, key: &'a str) -> &'a str {
        self.keys.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Resolves `key` and substitutes `arg` for every `{0}` placeholder.
    pub fn format(&self, key: &str, arg: &str) -> String {
        self.resolve(key).replace("{0}", arg)
    }
}

static LANG: OnceLock<LangData> = OnceLock::new();

/// Embedded English templates, parsed once on first use.
///
/// # Panics
///
/// Panics if the embedded YAML is malformed.
pub fn get_lang() -> &'static LangData {
    LANG.get_or_init(|| {
        serde_yaml::from_str(RECLAIMED_LANG_EN_YAML).expect("Failed to parse reclaimed_en.yaml")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_lang_parses() {
        let lang = get_lang();
        assert_eq!(lang.schema_version, 1);
        assert_eq!(lang.keys.len(), 4);
    }

    #[test]
    fn test_templates_carry_placeholder() {
        let lang = get_lang();
        for key in [
            "R3_NonSterile_Label",
            "R3_NonSterile_Description",
            "R3_Mangled_Label",
            "R3_Mangled_Description",
        ] {
            assert!(
                lang.resolve(key).contains("{0}"),
                "template {} lost its placeholder",
                key
            );
        }
    }

    #[test]
    fn test_format_substitutes_argument() {
        let lang = get_lang();
        let label = lang.format("R3_NonSterile_Label", "Bionic eye");
        assert_eq!(label, "non-sterile Bionic eye");
    }

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        let lang = get_lang();
        assert_eq!(lang.resolve("R3_DoesNotExist"), "R3_DoesNotExist");
    }
}
