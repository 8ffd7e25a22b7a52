// /app.rs
use crate::{
    attributes::AttributeKey,
    character::Character,
    dice::{DiceRoller, RollHistory},
    error::AppError,
    pool::{Assignment, ScorePool},
    rules::{CharacterClass, Origin},
    save::{CharacterStore, FileStorage, Storage},
    settings::Settings,
    validation::can_finalize,
};

use rand::Rng;
use rand::rngs::ThreadRng;

// Application context: the single active character and everything that mutates it.
// UI layers call these entry points and re-read the state to render.
#[derive(Debug)]
pub struct App<S, R = ThreadRng> {
    // --- Character creation
    character: Character,
    pool: ScorePool,
    store: CharacterStore<S>,

    // --- Dice panel
    roller: DiceRoller<R>,
}

impl App<FileStorage, ThreadRng> {
    // App backed by the files under `settings.data_dir`.
    pub fn from_settings(settings: &Settings) -> Self {
        let storage = FileStorage::new(&settings.data_dir);
        let store = CharacterStore::with_record_name(storage, settings.record_name.clone());
        let roller = DiceRoller::with_rng(rand::rng(), settings.history_capacity);
        Self::with_roller(store, roller)
    }
}

impl<S: Storage> App<S, ThreadRng> {
    pub fn new(store: CharacterStore<S>) -> Self {
        Self::with_roller(store, DiceRoller::new())
    }
}

impl<S: Storage, R: Rng> App<S, R> {
    pub fn with_roller(store: CharacterStore<S>, roller: DiceRoller<R>) -> Self {
        let mut app = Self {
            character: Character::new(),
            pool: ScorePool::new(),
            store,
            roller,
        };
        app.begin_creation();
        app
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn pool(&self) -> &ScorePool {
        &self.pool
    }

    pub fn store(&self) -> &CharacterStore<S> {
        &self.store
    }

    pub fn roll_history(&self) -> &RollHistory {
        self.roller.history()
    }

    // --- Character creation

    // Reload the saved character (or a blank one) and reset the pool and selection to match it.
    // An unreadable record, or one whose scores do not fit the pool, starts a fresh character.
    pub fn begin_creation(&mut self) {
        let loaded = self.store.try_load().and_then(|stored| {
            let character = stored.unwrap_or_default();
            let pool = ScorePool::from_assignments(&character.attr_scores)?;
            Ok((character, pool))
        });
        let (character, pool) = match loaded {
            Ok(loaded) => loaded,
            Err(e) => {
                log::warn!("Discarding saved character {:?}: {e}", self.store.record_name());
                (Character::new(), ScorePool::new())
            }
        };
        self.character = character;
        self.pool = pool;
        self.character.recompute();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.character.name = name.into();
    }

    pub fn select_class(&mut self, class: Option<CharacterClass>) {
        self.character.class = class;
        self.character.recompute();
    }

    pub fn select_origin(&mut self, origin: Option<Origin>) {
        self.character.origin = origin;
        self.character.recompute();
    }

    pub fn select_score(&mut self, score: i32) {
        self.pool.select_score(score);
    }

    pub fn assign_to_attribute(&mut self, attribute: AttributeKey) -> Assignment {
        let assignment = self
            .pool
            .assign_to_attribute(&mut self.character.attr_scores, attribute);
        self.character.recompute();
        assignment
    }

    // Validate, refresh derived stats and overwrite the saved record.
    pub fn finalize(&mut self) -> Result<&Character, AppError> {
        if let Err(incomplete) = can_finalize(&self.character) {
            log::info!("Finalization refused: {incomplete}");
            return Err(incomplete.into());
        }
        self.character.recompute();
        self.store.save(&self.character)?;
        Ok(&self.character)
    }

    // --- Dice panel

    pub fn roll(&mut self, sides: i32, modifier: i32, label: &str) -> Result<i32, AppError> {
        self.roller.roll(sides, modifier, label)
    }

    pub fn roll_standard(&mut self, sides: i32, modifier_input: &str) -> Result<i32, AppError> {
        self.roller.roll_standard(sides, modifier_input)
    }

    pub fn roll_custom(&mut self, modifier_input: &str) -> Result<i32, AppError> {
        self.roller.roll_custom(modifier_input)
    }

    // Attribute test: 1d20 plus the attribute's modifier, logged under the attribute key.
    pub fn attribute_check(&mut self, attribute: AttributeKey) -> Result<i32, AppError> {
        let modifier = self.character.attribute_modifier(attribute);
        self.roller.roll(20, modifier, attribute.as_ref())
    }
}
