use std::fmt;

use serde::{Deserialize, Serialize};

/// Technology tier of a def or research project.
///
/// Variant order matters: later variants are strictly more advanced, and
/// tier aggregation (taking the minimum of declared and recipe-derived
/// tiers) relies on the derived `Ord`. `Undefined` sorts first but is
/// filtered out before any minimum is taken.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum TechLevel {
    Undefined,
    Animal,
    Neolithic,
    Medieval,
    Industrial,
    Spacer,
    Ultra,
    Transcendent,
}

impl Default for TechLevel {
    fn default() -> Self {
        TechLevel::Undefined
    }
}

impl TechLevel {
    pub fn is_defined(&self) -> bool {
        *self != TechLevel::Undefined
    }
}

impl fmt::Display for TechLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TechLevel::Undefined => "Undefined",
            TechLevel::Animal => "Animal",
            TechLevel::Neolithic => "Neolithic",
            TechLevel::Medieval => "Medieval",
            TechLevel::Industrial => "Industrial",
            TechLevel::Spacer => "Spacer",
            TechLevel::Ultra => "Ultra",
            TechLevel::Transcendent => "Transcendent",
        };
        f.write_str(name)
    }
}

/// Sophistication bucket of a reclaimed part.
///
/// Drives which leaf category a generated def lands in. Ordered from
/// crudest to most refined.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Complexity {
    Primitive,
    Advanced,
    Glittertech,
}

impl Complexity {
    pub const ALL: [Complexity; 3] = [
        Complexity::Primitive,
        Complexity::Advanced,
        Complexity::Glittertech,
    ];
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Complexity::Primitive => "Primitive",
            Complexity::Advanced => "Advanced",
            Complexity::Glittertech => "Glittertech",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_level_order() {
        assert!(TechLevel::Animal < TechLevel::Neolithic);
        assert!(TechLevel::Neolithic < TechLevel::Medieval);
        assert!(TechLevel::Medieval < TechLevel::Industrial);
        assert!(TechLevel::Industrial < TechLevel::Spacer);
        assert!(TechLevel::Spacer < TechLevel::Ultra);
        assert!(TechLevel::Ultra < TechLevel::Transcendent);
    }

    #[test]
    fn test_undefined_is_default_and_filtered() {
        assert_eq!(TechLevel::default(), TechLevel::Undefined);
        assert!(!TechLevel::Undefined.is_defined());
        assert!(TechLevel::Animal.is_defined());
    }

    #[test]
    fn test_tech_level_serde_names() {
        let level: TechLevel = serde_json::from_str("\"Industrial\"").unwrap();
        assert_eq!(level, TechLevel::Industrial);
    }

    #[test]
    fn test_complexity_order() {
        assert!(Complexity::Primitive < Complexity::Advanced);
        assert!(Complexity::Advanced < Complexity::Glittertech);
        assert_eq!(Complexity::ALL.len(), 3);
    }
}
