// The character being built: the single record the app persists.
use crate::attributes::{AttributeKey, AttributeScores, modifier};
use crate::error::AppError;
use crate::pool::ScorePool;
use crate::rules::{CharacterClass, Origin};
use crate::stats::{DerivedStats, derive_stats};
use serde::{Deserialize, Serialize};

fn default_level() -> u32 {
    1
}

// Define a structure representing an Influxo character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(default)]
    pub name: String,
    #[serde(default, with = "blank_as_none")]
    pub class: Option<CharacterClass>,
    #[serde(default, with = "blank_as_none")]
    pub origin: Option<Origin>,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub attr_scores: AttributeScores, // Stored as `attrScores`.

    // Derived, refreshed by `recompute`.
    #[serde(default)]
    pub hp: i32,
    #[serde(default)]
    pub ca: i32,
    #[serde(default)]
    pub pdh: i32,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: String::new(),
            class: None,
            origin: None,
            level: default_level(),
            attr_scores: AttributeScores::new(),
            hp: 0,
            ca: 0,
            pdh: 0,
            skills: Vec::new(),
        }
    }
}

impl Character {
    pub fn new() -> Self {
        Self::default()
    }

    // A character counts as created once it carries a name.
    pub fn is_created(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn score(&self, attribute: AttributeKey) -> Option<i32> {
        self.attr_scores.get(&attribute).copied()
    }

    pub fn attribute_modifier(&self, attribute: AttributeKey) -> i32 {
        modifier(self.score(attribute))
    }

    pub fn derived_stats(&self) -> DerivedStats {
        derive_stats(&self.attr_scores, self.class, self.origin)
    }

    // Overwrite hp, ca, pdh and skills from the current scores, class and origin.
    pub fn recompute(&mut self) {
        let DerivedStats {
            hp,
            ca,
            pdh,
            skills,
        } = self.derived_stats();
        self.hp = hp;
        self.ca = ca;
        self.pdh = pdh;
        self.skills = skills;
    }

    // Invariants a stored record must satisfy before it is trusted.
    pub fn check_well_formed(&self) -> Result<(), AppError> {
        if self.level < 1 {
            return Err(AppError::MalformedPersistedState(format!(
                "level must be at least 1, got {}",
                self.level
            )));
        }
        ScorePool::from_assignments(&self.attr_scores).map_err(|e| {
            AppError::MalformedPersistedState(format!("attribute scores do not fit the pool: {e}"))
        })?;
        Ok(())
    }
}

// Class and origin are stored by display name, with `""` meaning unset.
// Names that no longer match a table entry are read back as unset.
mod blank_as_none {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: AsRef<str>,
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_str(value.as_ref()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if raw.is_empty() {
            return Ok(None);
        }
        match T::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                log::warn!("Unknown table key {raw:?} in stored character, treating as unset");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_class_is_stored_as_empty_string() {
        let json = serde_json::to_value(Character::new()).unwrap();
        assert_eq!(json["class"], "");
        assert_eq!(json["origin"], "");
        assert_eq!(json["level"], 1);
        assert!(json["attrScores"].as_object().unwrap().is_empty());
    }

    #[test]
    fn unknown_class_name_reads_as_unset() {
        let character: Character =
            serde_json::from_str(r#"{"name":"Iara","class":"Bardo","origin":"Militante"}"#)
                .unwrap();
        assert_eq!(character.class, None);
        assert_eq!(character.origin, Some(Origin::Militant));
    }

    #[test]
    fn level_zero_is_malformed() {
        let character = Character {
            level: 0,
            ..Character::new()
        };
        assert!(matches!(
            character.check_well_formed(),
            Err(AppError::MalformedPersistedState(_))
        ));
    }
}
