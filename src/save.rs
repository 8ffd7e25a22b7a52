use crate::character::Character;
use crate::error::AppError;

use std::collections::HashMap;
use std::fs::{create_dir_all, read_to_string, write};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const RECORD_NAME: &str = "influxo-character";

// Named-record key/value storage, the equivalent of a browser's local storage.
pub trait Storage {
    fn read(&self, name: &str) -> Result<Option<String>, AppError>;
    fn write(&mut self, name: &str, contents: &str) -> Result<(), AppError>;
}

// One `<name>.json` file per record under a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, name: &str) -> Result<Option<String>, AppError> {
        match read_to_string(self.record_path(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<(), AppError> {
        create_dir_all(&self.dir)?;
        write(self.record_path(name), contents)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, name: &str) -> Result<Option<String>, AppError> {
        Ok(self.records.get(name).cloned())
    }

    fn write(&mut self, name: &str, contents: &str) -> Result<(), AppError> {
        self.records.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

// Loads and saves the single persisted character slot.
#[derive(Debug, Clone)]
pub struct CharacterStore<S> {
    storage: S,
    record_name: String,
}

impl<S: Storage> CharacterStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_record_name(storage, RECORD_NAME)
    }

    pub fn with_record_name(storage: S, record_name: impl Into<String>) -> Self {
        Self {
            storage,
            record_name: record_name.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    // `Ok(None)` when nothing was saved yet; errors for unreadable or malformed records.
    pub fn try_load(&self) -> Result<Option<Character>, AppError> {
        let Some(contents) = self.storage.read(&self.record_name)? else {
            return Ok(None);
        };
        let character: Character = serde_json::from_str(&contents)?;
        character.check_well_formed()?;
        Ok(Some(character))
    }

    // The saved character, or a fresh one when the slot is empty or unusable.
    pub fn load(&self) -> Character {
        match self.try_load() {
            Ok(Some(character)) => {
                log::info!("Loaded character {:?}", character.name);
                character
            }
            Ok(None) => {
                log::debug!("No saved character in {:?}, starting fresh", self.record_name);
                Character::new()
            }
            Err(e) => {
                log::warn!("Discarding saved character {:?}: {e}", self.record_name);
                Character::new()
            }
        }
    }

    pub fn save(&mut self, character: &Character) -> Result<(), AppError> {
        let serialized = serde_json::to_string_pretty(character)?;
        self.storage.write(&self.record_name, &serialized)?;
        log::info!("Saved character {:?}", character.name);
        Ok(())
    }
}
