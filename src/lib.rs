pub mod app;
pub mod attributes;
pub mod character;
pub mod descriptions;
pub mod dice;
pub mod error;
pub mod logging;
pub mod pool;
pub mod rules;
pub mod save;
pub mod settings;
pub mod sheet;
pub mod stats;
pub mod validation;

// Re-export commonly used items for easier access
pub use app::App;
pub use attributes::{AttributeKey, AttributeScores, format_modifier, modifier};
pub use character::Character;
pub use dice::{DiceRoller, RollHistory, RollRecord, parse_modifier};
pub use error::AppError;
pub use pool::{Assignment, SCORE_POOL, ScorePool};
pub use rules::{CharacterClass, ClassDefinition, Condition, DamageType, Origin};
pub use save::{CharacterStore, FileStorage, MemoryStorage, Storage};
pub use settings::Settings;
pub use sheet::{AttributeLine, SheetSummary};
pub use stats::{DerivedStats, derive_stats};
pub use validation::{Incomplete, MissingRequirement, can_finalize};
