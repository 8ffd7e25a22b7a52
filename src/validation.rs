// Completeness checks run before a character is finalized and saved.
use crate::attributes::AttributeKey;
use crate::character::Character;
use strum::IntoEnumIterator;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MissingRequirement {
    #[error("O personagem precisa de um nome!")]
    Name,

    #[error("Por favor, atribua todos os 6 valores de atributo ({assigned} de 6 atribuídos).")]
    Attributes { assigned: usize },

    #[error("Escolha a Classe do personagem.")]
    Class,

    #[error("Escolha a Origem do personagem.")]
    Origin,
}

// Every failing requirement, in the order the creation form presents them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.missing))]
pub struct Incomplete {
    pub missing: Vec<MissingRequirement>,
}

fn join_messages(missing: &[MissingRequirement]) -> String {
    missing
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn can_finalize(character: &Character) -> Result<(), Incomplete> {
    let mut missing = Vec::new();

    if character.name.is_empty() {
        missing.push(MissingRequirement::Name);
    }

    let assigned = AttributeKey::iter()
        .filter(|key| character.attr_scores.contains_key(key))
        .count();
    if assigned != AttributeKey::iter().count() {
        missing.push(MissingRequirement::Attributes { assigned });
    }

    // Unknown class or origin names never survive deserialization, so `Some` means known.
    if character.class.is_none() {
        missing.push(MissingRequirement::Class);
    }
    if character.origin.is_none() {
        missing.push(MissingRequirement::Origin);
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Incomplete { missing })
    }
}
