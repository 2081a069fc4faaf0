use serde::{Deserialize, Serialize};

use crate::models::ReclamationKind;

/// Tolerance applied at range boundaries so float noise from damage math
/// cannot flip an outcome that sits exactly on a configured edge.
pub const RANGE_EPSILON: f32 = 1e-4;

/// Inclusive numeric range with epsilon-tolerant boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
}

impl FloatRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// True when `value` lies within `[min - epsilon, max + epsilon]`.
    pub fn includes_epsilon(&self, value: f32) -> bool {
        value >= self.min - RANGE_EPSILON && value <= self.max + RANGE_EPSILON
    }
}

/// Remaining-fraction windows deciding what a removed part degrades into.
///
/// The windows may touch or overlap. [`ReclamationSettings::kind_for_fraction`]
/// checks the non-sterile window first, so on a shared boundary the part
/// comes out non-sterile, never mangled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReclamationSettings {
    pub non_sterile: FloatRange,
    pub mangled: FloatRange,
}

impl Default for ReclamationSettings {
    fn default() -> Self {
        Self {
            non_sterile: FloatRange::new(0.65, 1.0),
            mangled: FloatRange::new(0.15, 0.65),
        }
    }
}

impl ReclamationSettings {
    /// Kind of part left behind at `fraction` remaining condition, or
    /// `None` when the part is destroyed outright.
    pub fn kind_for_fraction(&self, fraction: f32) -> Option<ReclamationKind> {
        if self.non_sterile.includes_epsilon(fraction) {
            Some(ReclamationKind::NonSterile)
        } else if self.mangled.includes_epsilon(fraction) {
            Some(ReclamationKind::Mangled)
        } else {
            None
        }
    }
}
