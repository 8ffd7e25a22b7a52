// Derived combat statistics. Always computed from the full character state.
use crate::attributes::{AttributeKey, AttributeScores, modifier};
use crate::rules::{CharacterClass, Origin};
use serde::{Deserialize, Serialize};

pub const BASE_ARMOR_CLASS: i32 = 10;
pub const MINIMUM_HP: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub hp: i32,
    pub ca: i32,
    pub pdh: i32,
    pub skills: Vec<String>,
}

// HP and CA lean on the CON modifier; PdH and skills come straight from the tables.
// Level progression (hp_per_level, pdh_per_level) is not applied here.
pub fn derive_stats(
    scores: &AttributeScores,
    class: Option<CharacterClass>,
    origin: Option<Origin>,
) -> DerivedStats {
    let con_mod = modifier(scores.get(&AttributeKey::Con).copied());
    let definition = class.map(CharacterClass::definition);

    let base_hp = definition.map_or(0, |d| d.initial_hp);
    let pdh = definition.map_or(0, |d| d.initial_pdh);
    let skills = origin
        .map(|o| o.skills().iter().map(|s| s.to_string()).collect::<Vec<_>>())
        .unwrap_or_default();

    DerivedStats {
        hp: (base_hp + con_mod).max(MINIMUM_HP),
        ca: BASE_ARMOR_CLASS + con_mod,
        pdh,
        skills,
    }
}
