// Import required modules and crates.
use crate::error::AppError;
use rand::Rng; // RNG utilities from the rand crate for generating random numbers.
use rand::rngs::ThreadRng;
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

pub const HISTORY_LIMIT: usize = 10;
pub const STANDARD_ROLL_LABEL: &str = "Rolagem Padrão";
pub const CUSTOM_ROLL_LABEL: &str = "1d20 com Modificador";

// One line of the roll log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollRecord {
    pub sides: i32,
    pub modifier: i32,
    pub label: String,
    pub raw: i32,   // What the die showed.
    pub total: i32, // Die plus modifier.
}

// `[label] 1d20 + 3 = 14 (Total: 17)`, or `1d6 = 4 (Resultado: 4)` without modifier.
impl fmt::Display for RollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.label.is_empty() {
            write!(f, "[{}] ", self.label)?;
        }
        write!(f, "1d{}", self.sides)?;
        if self.modifier > 0 {
            write!(f, " + {}", self.modifier)?;
        } else if self.modifier < 0 {
            write!(f, " - {}", self.modifier.unsigned_abs())?;
        }
        write!(f, " = {}", self.raw)?;
        if self.modifier != 0 {
            write!(f, " (Total: {})", self.total)
        } else {
            write!(f, " (Resultado: {})", self.total)
        }
    }
}

// Bounded log of rolls, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollHistory {
    entries: VecDeque<RollRecord>,
    capacity: usize,
}

impl Default for RollHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_LIMIT)
    }
}

impl RollHistory {
    // A capacity of 0 would drop every roll, so the log always keeps at least one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    pub fn push(&mut self, record: RollRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RollRecord> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&RollRecord> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

// Rolls single dice and keeps the history the dice panel shows.
#[derive(Debug)]
pub struct DiceRoller<R = ThreadRng> {
    rng: R,
    history: RollHistory,
}

impl Default for DiceRoller<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl DiceRoller<ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::rng(), HISTORY_LIMIT)
    }
}

impl<R: Rng> DiceRoller<R> {
    pub fn with_rng(rng: R, history_capacity: usize) -> Self {
        Self {
            rng,
            history: RollHistory::with_capacity(history_capacity),
        }
    }

    pub fn history(&self) -> &RollHistory {
        &self.history
    }

    // Roll 1d`sides`, add the modifier, log it and return the total.
    pub fn roll(&mut self, sides: i32, modifier: i32, label: &str) -> Result<i32, AppError> {
        if sides <= 0 {
            return Err(AppError::InvalidDiceShape(sides));
        }
        let raw = roll_die(&mut self.rng, sides);
        let record = RollRecord {
            sides,
            modifier,
            label: label.to_string(),
            raw,
            total: raw.saturating_add(modifier),
        };
        log::debug!("Dice roll: {record}");
        let total = record.total;
        self.history.push(record);
        Ok(total)
    }

    // Die buttons (d4, d6, d20, ...) with the modifier typed in the free-text field.
    pub fn roll_standard(&mut self, sides: i32, modifier_input: &str) -> Result<i32, AppError> {
        self.roll(sides, parse_modifier(modifier_input), STANDARD_ROLL_LABEL)
    }

    pub fn roll_custom(&mut self, modifier_input: &str) -> Result<i32, AppError> {
        self.roll(20, parse_modifier(modifier_input), CUSTOM_ROLL_LABEL)
    }
}

// Helper function to roll a single die.
fn roll_die(rng: &mut impl Rng, sides: i32) -> i32 {
    rng.random_range(1..=sides)
}

/// Reads the leading integer of a free-text modifier field.
///
/// Leading whitespace and a sign are accepted and trailing text is ignored,
/// so `" -2"`, `"+3"` and `"4 pts"` all parse. Anything without leading
/// digits, or out of range, yields 0.
pub fn parse_modifier(input: &str) -> i32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let Ok(value) = rest[..digits_len].parse::<i32>() else {
        return 0;
    };
    if negative { -value } else { value }
}
