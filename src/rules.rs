// Static rule tables of the Influxo system: classes, origins, damage types and conditions.
use crate::attributes::AttributeKey;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

// Numbers and flavour text that a class fixes for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassDefinition {
    pub bonus_attribute: AttributeKey,
    pub initial_hp: i32,
    pub hp_per_level: i32,
    pub initial_pdh: i32,
    pub pdh_per_level: i32,
    pub description: &'static str,
}

const FLUX_MANIPULATOR: ClassDefinition = ClassDefinition {
    bonus_attribute: AttributeKey::Int,
    initial_hp: 10,
    hp_per_level: 6,
    initial_pdh: 5,
    pdh_per_level: 3,
    description: "Molda a realidade através da força pura do Fluxo.",
};

const ENTITY_EVOKER: ClassDefinition = ClassDefinition {
    bonus_attribute: AttributeKey::Sab,
    initial_hp: 12,
    hp_per_level: 7,
    initial_pdh: 3,
    pdh_per_level: 2,
    description: "Traz seres do Fluxo para manifestação física.",
};

const SPECIALIST: ClassDefinition = ClassDefinition {
    bonus_attribute: AttributeKey::Des,
    initial_hp: 14,
    hp_per_level: 8,
    initial_pdh: 0,
    pdh_per_level: 1,
    description: "Usa tecnologia e táticas aprimoradas pelo Fluxo.",
};

const FLUX_FIGHTER: ClassDefinition = ClassDefinition {
    bonus_attribute: AttributeKey::For,
    initial_hp: 16,
    hp_per_level: 10,
    initial_pdh: 0,
    pdh_per_level: 0,
    description: "Mestre em combate físico, infundindo Fluxo em suas armas.",
};

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
pub enum CharacterClass {
    #[serde(rename = "Manipulador de Fluxo")]
    #[strum(serialize = "Manipulador de Fluxo")]
    FluxManipulator,
    #[serde(rename = "Evocador de Entidades")]
    #[strum(serialize = "Evocador de Entidades")]
    EntityEvoker,
    #[serde(rename = "Especialista")]
    #[strum(serialize = "Especialista")]
    Specialist,
    #[serde(rename = "Combatente do Fluxo")]
    #[strum(serialize = "Combatente do Fluxo")]
    FluxFighter,
}

impl CharacterClass {
    pub fn definition(self) -> &'static ClassDefinition {
        match self {
            CharacterClass::FluxManipulator => &FLUX_MANIPULATOR,
            CharacterClass::EntityEvoker => &ENTITY_EVOKER,
            CharacterClass::Specialist => &SPECIALIST,
            CharacterClass::FluxFighter => &FLUX_FIGHTER,
        }
    }
}

// Backgrounds. Each one grants two fixed starting skills.
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
pub enum Origin {
    #[serde(rename = "Nômade")]
    #[strum(serialize = "Nômade")]
    Nomad,
    #[serde(rename = "Acadêmico")]
    #[strum(serialize = "Acadêmico")]
    Academic,
    #[serde(rename = "Militante")]
    #[strum(serialize = "Militante")]
    Militant,
}

impl Origin {
    pub fn skills(self) -> [&'static str; 2] {
        match self {
            Origin::Nomad => ["Sobrevivência", "Percepção"],
            Origin::Academic => ["Conhecimento", "História"],
            Origin::Militant => ["Luta", "Intimidação"],
        }
    }
}

// Damage types interact with different defenses and vulnerabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum DamageType {
    #[strum(serialize = "Queimadura")]
    Burn,
    #[strum(serialize = "Perfuração")]
    Piercing,
    #[strum(serialize = "Contusão")]
    Bludgeoning,
    #[strum(serialize = "Corte")]
    Slashing,
    #[strum(serialize = "Esmagamento")]
    Crushing,
    #[strum(serialize = "Elétrico")]
    Electric,
    #[strum(serialize = "Químico")]
    Chemical,
    #[strum(serialize = "Explosão")]
    Explosion,
}

impl DamageType {
    pub fn description(self) -> &'static str {
        match self {
            DamageType::Burn => "Dano causado por calor intenso (fogo, plasma).",
            DamageType::Piercing => "Dano de ponta (flechas, estocadas finas).",
            DamageType::Bludgeoning => "Dano de impacto contundente (socos, martelos).",
            DamageType::Slashing => "Dano de lâmina afiada (espadas, garras).",
            DamageType::Crushing => "Dano de peso extremo ou pressão.",
            DamageType::Electric => "Dano de corrente ou descarga de energia.",
            DamageType::Chemical => "Dano de ácidos ou toxinas.",
            DamageType::Explosion => "Dano de grande área de impacto e calor súbito.",
        }
    }
}

// Conditions apply specific penalties. Paired conditions share their rule text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Condition {
    #[strum(serialize = "Agarrado")]
    Grappled,
    #[strum(serialize = "Imobilizado")]
    Restrained,
    #[strum(serialize = "Apavorado")]
    Frightened,
    #[strum(serialize = "Atordoado")]
    Stunned,
    #[strum(serialize = "Caído")]
    Prone,
    #[strum(serialize = "Zonzo")]
    Dazed,
}

impl Condition {
    pub fn description(self) -> &'static str {
        match self {
            Condition::Grappled | Condition::Restrained => {
                "Reduz o movimento ou impede ações."
            }
            Condition::Frightened | Condition::Stunned => {
                "Impede ações ou impõe desvantagem."
            }
            Condition::Prone => "Ataques corpo a corpo em você têm vantagem.",
            Condition::Dazed => "Desvantagem em testes de ataque e resistência.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn class_names_round_trip_through_display() {
        for class in CharacterClass::iter() {
            assert_eq!(CharacterClass::from_str(&class.to_string()), Ok(class));
        }
        assert_eq!(
            CharacterClass::FluxFighter.to_string(),
            "Combatente do Fluxo"
        );
    }

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(CharacterClass::iter().count(), 4);
        assert_eq!(Origin::iter().count(), 3);
        assert_eq!(DamageType::iter().count(), 8);
        assert_eq!(Condition::iter().count(), 6);
    }

    #[test]
    fn fighter_has_no_flux_points() {
        let fighter = CharacterClass::FluxFighter.definition();
        assert_eq!(fighter.initial_hp, 16);
        assert_eq!(fighter.initial_pdh, 0);
        assert_eq!(fighter.bonus_attribute, AttributeKey::For);
    }
}
