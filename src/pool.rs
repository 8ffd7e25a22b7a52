// Assignment of the fixed score pool to the six attributes.
use crate::attributes::{AttributeKey, AttributeScores};
use crate::error::AppError;

// Canonical standard array handed out during character creation.
pub const SCORE_POOL: [i32; 6] = [15, 14, 13, 12, 10, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSlot {
    pub score: i32,
    pub used: bool,
}

// Outcome of `ScorePool::assign_to_attribute`, so the caller knows what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    Assigned {
        attribute: AttributeKey,
        score: i32,
        replaced: Option<i32>, // Previous score, now back in the pool.
    },
    TakenBack {
        attribute: AttributeKey,
        score: i32,
    },
    Unchanged,
}

/// Pool of scores plus the score currently picked by the user.
///
/// Every slot is flagged used exactly when its score sits in the attribute
/// mapping passed to [`ScorePool::assign_to_attribute`]. The pool is a
/// multiset: duplicated values get one slot each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorePool {
    slots: Vec<PoolSlot>,
    selected: Option<i32>,
}

impl Default for ScorePool {
    fn default() -> Self {
        Self::new()
    }
}

impl ScorePool {
    pub fn new() -> Self {
        Self::with_scores(&SCORE_POOL)
    }

    pub fn with_scores(scores: &[i32]) -> Self {
        Self {
            slots: scores
                .iter()
                .map(|&score| PoolSlot { score, used: false })
                .collect(),
            selected: None,
        }
    }

    // Rebuild the used flags for an existing mapping, e.g. a character read from storage.
    pub fn from_assignments(scores: &AttributeScores) -> Result<Self, AppError> {
        let mut pool = Self::new();
        for &score in scores.values() {
            if !pool.mark_used(score) {
                return Err(AppError::ScoreUnavailable(score));
            }
        }
        Ok(pool)
    }

    pub fn slots(&self) -> &[PoolSlot] {
        &self.slots
    }

    pub fn selected(&self) -> Option<i32> {
        self.selected
    }

    pub fn is_available(&self, score: i32) -> bool {
        self.slots.iter().any(|slot| slot.score == score && !slot.used)
    }

    pub fn free_scores(&self) -> Vec<i32> {
        self.slots
            .iter()
            .filter(|slot| !slot.used)
            .map(|slot| slot.score)
            .collect()
    }

    pub fn used_scores(&self) -> Vec<i32> {
        self.slots
            .iter()
            .filter(|slot| slot.used)
            .map(|slot| slot.score)
            .collect()
    }

    // Pick a free score; picking the selected one again clears the selection.
    pub fn select_score(&mut self, score: i32) {
        if !self.is_available(score) {
            log::debug!("select_score: {score} is not free, ignoring");
            return;
        }
        if self.selected == Some(score) {
            self.selected = None;
        } else {
            self.selected = Some(score);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn assign_to_attribute(
        &mut self,
        scores: &mut AttributeScores,
        attribute: AttributeKey,
    ) -> Assignment {
        match self.selected.take() {
            Some(score) => {
                let replaced = scores.remove(&attribute);
                if let Some(old) = replaced {
                    self.release(old);
                }
                if !self.mark_used(score) {
                    // Selection went stale; put the mapping back as it was.
                    if let Some(old) = replaced {
                        self.mark_used(old);
                        scores.insert(attribute, old);
                    }
                    log::warn!("assign_to_attribute: selected score {score} is no longer free");
                    return Assignment::Unchanged;
                }
                scores.insert(attribute, score);
                log::debug!("Assigned {score} to {attribute} (replaced: {replaced:?})");
                Assignment::Assigned {
                    attribute,
                    score,
                    replaced,
                }
            }
            None => match scores.remove(&attribute) {
                Some(score) => {
                    self.release(score);
                    log::debug!("Took {score} back from {attribute}");
                    Assignment::TakenBack { attribute, score }
                }
                None => Assignment::Unchanged,
            },
        }
    }

    // True when the used slots hold exactly the scores of the mapping.
    pub fn is_consistent_with(&self, scores: &AttributeScores) -> bool {
        let mut used = self.used_scores();
        let mut assigned: Vec<i32> = scores.values().copied().collect();
        used.sort_unstable();
        assigned.sort_unstable();
        used == assigned
    }

    fn mark_used(&mut self, score: i32) -> bool {
        match self
            .slots
            .iter_mut()
            .find(|slot| slot.score == score && !slot.used)
        {
            Some(slot) => {
                slot.used = true;
                true
            }
            None => false,
        }
    }

    fn release(&mut self, score: i32) {
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| slot.score == score && slot.used)
        {
            slot.used = false;
        }
    }
}
