use serde::{Deserialize, Serialize};

/// Stat vocabulary read and written by the reclamation pipeline.
///
/// Host catalogs carry many more stats; only the ones this crate touches
/// (plus a few that commonly appear on body-part defs) are modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    MaxHitPoints,
    DeteriorationRate,
    Beauty,
    MarketValue,
    Mass,
    Flammability,
    WorkToMake,
}

/// A single stat entry on a def.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatModifier {
    pub stat: StatKind,
    pub value: f32,
}

impl StatModifier {
    pub fn new(stat: StatKind, value: f32) -> Self {
        Self { stat, value }
    }
}

/// First value for `kind` in an ordered stat list, if present.
pub fn stat_value(stats: &[StatModifier], kind: StatKind) -> Option<f32> {
    stats.iter().find(|m| m.stat == kind).map(|m| m.value)
}
