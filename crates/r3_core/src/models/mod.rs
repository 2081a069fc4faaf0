// Data model for host catalog defs and generated reclaimed defs.

pub mod category;
pub mod def_name;
pub mod hediff;
pub mod packed;
pub mod recipe;
pub mod stat;
pub mod tech;
pub mod thing;

pub use category::ThingCategoryDef;
pub use def_name::DefName;
pub use hediff::{HediffClass, HediffDef};
pub use packed::{PackedThingDef, ReclamationKind};
pub use recipe::{RecipeDef, ResearchProjectRef};
pub use stat::{stat_value, StatKind, StatModifier};
pub use tech::{Complexity, TechLevel};
pub use thing::{
    AltitudeLayer, CompKind, GraphicClass, GraphicData, ThingCategory, ThingDef, TickerType,
};
