// Attribute keys and the score-to-modifier math shared by every other module.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

// The six attributes of an Influxo character, in sheet order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum AttributeKey {
    For,
    Des,
    Con,
    Int,
    Sab,
    Car,
}

impl AttributeKey {
    pub fn full_name(self) -> &'static str {
        match self {
            AttributeKey::For => "Força",
            AttributeKey::Des => "Destreza",
            AttributeKey::Con => "Constituição",
            AttributeKey::Int => "Inteligência",
            AttributeKey::Sab => "Sabedoria",
            AttributeKey::Car => "Carisma",
        }
    }
}

// Assigned scores, keyed by attribute. Missing keys are unassigned attributes.
pub type AttributeScores = BTreeMap<AttributeKey, i32>;

/// Modifier for an attribute score: `floor((score - 10) / 2)`.
///
/// An unassigned attribute yields 0.
pub fn modifier(score: Option<i32>) -> i32 {
    match score {
        Some(score) => score.div_euclid(2) - 5,
        None => 0,
    }
}

// Sheet notation for a modifier: explicit plus sign for positive values.
pub fn format_modifier(modifier: i32) -> String {
    if modifier > 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}
