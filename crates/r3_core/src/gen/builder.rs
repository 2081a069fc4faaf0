use crate::data::LangData;
use crate::diag::DiagSink;
use crate::models::{
    AltitudeLayer, CompKind, GraphicData, PackedThingDef, ReclamationKind, StatKind, StatModifier,
    TechLevel, ThingCategory, ThingDef, TickerType,
};

use super::categories::resolve_category;
use super::classify::classify_complexity;
use super::crossref::CrossRefQueue;

// Fixed stats stamped onto every generated def. Reclaimed parts are
// uniformly fragile, rot-prone and ugly regardless of what they came
// from; only market value and mass carry over.
const PACKED_MAX_HIT_POINTS: f32 = 50.0;
const PACKED_DETERIORATION_RATE: f32 = 2.0;
const PACKED_BEAUTY: f32 = -8.0;
const PACKED_DEFAULT_MASS: f32 = 0.2;
const PACKED_PATH_COST: u16 = 10;

/// Builds the packed def representing `source` reclaimed in `kind` state.
///
/// Presentation and physics come from a fixed template shared by every
/// generated def; identity, labels, stats and classification derive from
/// the source. The def's single category membership is queued on
/// `crossrefs` rather than attached here.
pub fn build_packed_def(
    source: &ThingDef,
    kind: ReclamationKind,
    tier_hint: Option<TechLevel>,
    lang: &LangData,
    crossrefs: &mut CrossRefQueue,
    diag: &mut dyn DiagSink,
) -> PackedThingDef {
    let label_cap = source.label_cap();
    let market_value = source.stat_base(StatKind::MarketValue);

    let mut stat_bases = vec![
        StatModifier::new(StatKind::MaxHitPoints, PACKED_MAX_HIT_POINTS),
        StatModifier::new(StatKind::DeteriorationRate, PACKED_DETERIORATION_RATE),
        StatModifier::new(StatKind::Beauty, PACKED_BEAUTY),
    ];
    if let Some(value) = market_value {
        stat_bases.push(StatModifier::new(StatKind::MarketValue, value));
    }
    stat_bases.push(StatModifier::new(
        StatKind::Mass,
        source
            .stat_base(StatKind::Mass)
            .unwrap_or(PACKED_DEFAULT_MASS),
    ));

    let complexity = classify_complexity(
        &source.def_name,
        source.tech_hediffs_tags.as_deref(),
        &[Some(source.tech_level), tier_hint],
        market_value,
        diag,
    );

    let def_name = kind.packed_def_name(&source.def_name);
    let category = resolve_category(&source.def_name, kind, complexity, diag);
    crossrefs.register(def_name.clone(), category);

    PackedThingDef {
        def_name,
        label: lang.format(kind.label_key(), &label_cap),
        description: lang.format(kind.description_key(), &label_cap),
        category: ThingCategory::Item,
        ticker_type: TickerType::Never,
        altitude_layer: AltitudeLayer::Item,
        graphic: GraphicData::single(kind.tex_path()),
        use_hit_points: true,
        selectable: true,
        always_haulable: true,
        // Loot, not an installable prosthetic; the surgery UI must not
        // offer these.
        is_body_part_or_implant: false,
        path_cost: PACKED_PATH_COST,
        trade_tags: Vec::new(),
        comps: vec![CompKind::Forbiddable],
        tech_hediffs_tags: source.tech_hediffs_tags.clone(),
        stat_bases,
        thing_categories: Vec::new(),
        spawn_on_unpack: source.def_name.clone(),
        reclamation: kind,
        complexity,
    }
}

/// Builds the non-sterile and mangled defs for one source def, in that
/// order.
pub fn build_packed_pair(
    source: &ThingDef,
    tier_hint: Option<TechLevel>,
    lang: &LangData,
    crossrefs: &mut CrossRefQueue,
    diag: &mut dyn DiagSink,
) -> [PackedThingDef; 2] {
    [
        build_packed_def(
            source,
            ReclamationKind::NonSterile,
            tier_hint,
            lang,
            crossrefs,
            diag,
        ),
        build_packed_def(
            source,
            ReclamationKind::Mangled,
            tier_hint,
            lang,
            crossrefs,
            diag,
        ),
    ]
}
