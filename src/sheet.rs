// Plain read model of a finished character, ready for any renderer.
use crate::attributes::{AttributeKey, format_modifier, modifier};
use crate::character::Character;
use serde::Serialize;
use strum::IntoEnumIterator;

pub const NO_SKILLS: &str = "Nenhuma";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeLine {
    pub key: AttributeKey,
    pub score: Option<i32>,
    pub modifier: i32,
}

impl AttributeLine {
    pub fn modifier_text(&self) -> String {
        format_modifier(self.modifier)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetSummary {
    pub name: String,
    pub class_name: String,
    pub origin_name: String,
    pub class_description: String,
    pub level: u32,
    pub hp: i32,
    pub ca: i32,
    pub pdh: i32,
    pub attributes: Vec<AttributeLine>,
    pub skills_text: String,
}

impl From<&Character> for SheetSummary {
    fn from(character: &Character) -> Self {
        let attributes = AttributeKey::iter()
            .map(|key| {
                let score = character.score(key);
                AttributeLine {
                    key,
                    score,
                    modifier: modifier(score),
                }
            })
            .collect();

        let skills_text = if character.skills.is_empty() {
            NO_SKILLS.to_string()
        } else {
            character.skills.join(", ")
        };

        Self {
            name: character.name.clone(),
            class_name: character.class.map(|c| c.to_string()).unwrap_or_default(),
            origin_name: character.origin.map(|o| o.to_string()).unwrap_or_default(),
            class_description: character
                .class
                .map(|c| c.definition().description.to_string())
                .unwrap_or_default(),
            level: character.level,
            hp: character.hp,
            ca: character.ca,
            pdh: character.pdh,
            attributes,
            skills_text,
        }
    }
}
