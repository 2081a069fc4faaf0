use crate::diag::{DiagSink, Diagnostic};
use crate::models::{Complexity, DefName, TechLevel};

/// Curated tag for top-shelf parts, e.g. vanilla bionics.
pub const TAG_ADVANCED: &str = "Advanced";
/// Curated tag for basic industrial prosthetics.
pub const TAG_SIMPLE: &str = "Simple";
/// Curated tag for crude replacements like peg legs and dentures.
pub const TAG_POOR: &str = "Poor";

/// Market value at or above which an untagged, untiered part counts as
/// glittertech. Vanilla power claw price.
pub const GLITTERTECH_VALUE_THRESHOLD: f32 = 1500.0;
/// Lower bound of the advanced price band. Vanilla simple prosthetic
/// price.
pub const ADVANCED_VALUE_THRESHOLD: f32 = 400.0;

/// Complexity bucket a tier falls in, when the tier says anything.
fn tier_bucket(tier: TechLevel) -> Option<Complexity> {
    match tier {
        TechLevel::Undefined => None,
        TechLevel::Animal | TechLevel::Neolithic | TechLevel::Medieval => {
            Some(Complexity::Primitive)
        }
        TechLevel::Industrial | TechLevel::Spacer => Some(Complexity::Advanced),
        TechLevel::Ultra | TechLevel::Transcendent => Some(Complexity::Glittertech),
    }
}

/// Decides a part's complexity from its strongest available signal.
///
/// Signals are consulted in a fixed order: curated tech hediff tags win
/// outright, then the cheapest defined tier among `tiers`, then the
/// market-value bands. A def that offers no signal at all is classified
/// `Glittertech` so pricing errs high, and the fallback is reported to
/// `diag`.
pub fn classify_complexity(
    def_name: &DefName,
    tags: Option<&[String]>,
    tiers: &[Option<TechLevel>],
    market_value: Option<f32>,
    diag: &mut dyn DiagSink,
) -> Complexity {
    if let Some(tags) = tags {
        if tags.iter().any(|t| t == TAG_ADVANCED) {
            return Complexity::Glittertech;
        }
        if tags.iter().any(|t| t == TAG_SIMPLE) {
            return Complexity::Advanced;
        }
        if tags.iter().any(|t| t == TAG_POOR) {
            return Complexity::Primitive;
        }
    }

    let min_tier = tiers
        .iter()
        .flatten()
        .copied()
        .filter(TechLevel::is_defined)
        .min();
    if let Some(bucket) = min_tier.and_then(tier_bucket) {
        return bucket;
    }

    match market_value {
        Some(value) if value >= GLITTERTECH_VALUE_THRESHOLD => Complexity::Glittertech,
        Some(value) if value >= ADVANCED_VALUE_THRESHOLD => Complexity::Advanced,
        Some(_) => Complexity::Primitive,
        None => {
            diag.report(Diagnostic::NoComplexitySignal {
                def_name: def_name.clone(),
            });
            Complexity::Glittertech
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diag::CollectSink;

    fn classify(
        tags: Option<&[String]>,
        tiers: &[Option<TechLevel>],
        market_value: Option<f32>,
    ) -> (Complexity, usize) {
        let mut sink = CollectSink::default();
        let complexity = classify_complexity(
            &DefName::from("TestPart"),
            tags,
            tiers,
            market_value,
            &mut sink,
        );
        (complexity, sink.diags.len())
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tags_win_over_everything() {
        let adv = tags(&["Advanced"]);
        let (c, diags) = classify(Some(&adv), &[Some(TechLevel::Neolithic)], Some(10.0));
        assert_eq!(c, Complexity::Glittertech);
        assert_eq!(diags, 0);

        let simple = tags(&["Simple"]);
        let (c, _) = classify(Some(&simple), &[Some(TechLevel::Transcendent)], Some(9999.0));
        assert_eq!(c, Complexity::Advanced);

        let poor = tags(&["Poor"]);
        let (c, _) = classify(Some(&poor), &[], Some(9999.0));
        assert_eq!(c, Complexity::Primitive);
    }

    #[test]
    fn test_tag_precedence_order() {
        let both = tags(&["Poor", "Advanced"]);
        let (c, _) = classify(Some(&both), &[], None);
        assert_eq!(c, Complexity::Glittertech);

        let both = tags(&["Poor", "Simple"]);
        let (c, _) = classify(Some(&both), &[], None);
        assert_eq!(c, Complexity::Advanced);
    }

    #[test]
    fn test_unknown_tags_fall_through() {
        let odd = tags(&["Archotech"]);
        let (c, _) = classify(Some(&odd), &[Some(TechLevel::Industrial)], None);
        assert_eq!(c, Complexity::Advanced);
    }

    #[test]
    fn test_tier_mapping() {
        for (tier, expected) in [
            (TechLevel::Animal, Complexity::Primitive),
            (TechLevel::Neolithic, Complexity::Primitive),
            (TechLevel::Medieval, Complexity::Primitive),
            (TechLevel::Industrial, Complexity::Advanced),
            (TechLevel::Spacer, Complexity::Advanced),
            (TechLevel::Ultra, Complexity::Glittertech),
            (TechLevel::Transcendent, Complexity::Glittertech),
        ] {
            let (c, diags) = classify(None, &[Some(tier)], None);
            assert_eq!(c, expected, "tier {}", tier);
            assert_eq!(diags, 0);
        }
    }

    #[test]
    fn test_minimum_tier_wins() {
        let (c, _) = classify(
            None,
            &[Some(TechLevel::Spacer), Some(TechLevel::Medieval)],
            None,
        );
        assert_eq!(c, Complexity::Primitive);
    }

    #[test]
    fn test_undefined_and_absent_tiers_ignored() {
        let (c, _) = classify(
            None,
            &[Some(TechLevel::Undefined), None, Some(TechLevel::Ultra)],
            None,
        );
        assert_eq!(c, Complexity::Glittertech);
    }

    #[test]
    fn test_market_value_bands() {
        let (c, _) = classify(None, &[], Some(2000.0));
        assert_eq!(c, Complexity::Glittertech);
        let (c, _) = classify(None, &[], Some(1500.0));
        assert_eq!(c, Complexity::Glittertech);
        let (c, _) = classify(None, &[], Some(1499.9));
        assert_eq!(c, Complexity::Advanced);
        let (c, _) = classify(None, &[], Some(400.0));
        assert_eq!(c, Complexity::Advanced);
        let (c, _) = classify(None, &[], Some(399.9));
        assert_eq!(c, Complexity::Primitive);
        let (c, _) = classify(None, &[], Some(0.0));
        assert_eq!(c, Complexity::Primitive);
    }

    #[test]
    fn test_no_signal_defaults_high_with_diagnostic() {
        let (c, diags) = classify(None, &[Some(TechLevel::Undefined), None], None);
        assert_eq!(c, Complexity::Glittertech);
        assert_eq!(diags, 1);
    }

    #[test]
    fn test_present_zero_value_is_a_signal() {
        // A zero market value still classifies; only a missing one
        // triggers the fallback.
        let (c, diags) = classify(None, &[], Some(0.0));
        assert_eq!(c, Complexity::Primitive);
        assert_eq!(diags, 0);
    }
}
