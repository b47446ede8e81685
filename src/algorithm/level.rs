//! Generated level state, found-flag updates and per-level hint budget

use crate::algorithm::difficulty::Tier;
use crate::io::configuration::FREE_HINTS_PER_LEVEL;
use crate::spatial::PlacedObject;
use serde::Serialize;
use tracing::trace;

/// Generation metadata recorded alongside the placed objects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelHeader {
    /// Player-visible level index
    pub level: u32,
    /// Difficulty tier the level was resolved for
    pub tier: Tier,
    /// Scene description of the background
    pub theme: String,
    /// Seed the sequence generator was built from
    pub seed: u32,
    /// Object count the tier asked for
    pub requested_count: u32,
    /// Rejection-sampling attempts spent
    pub attempts: u32,
    /// Countdown length, absent for untimed tiers
    pub time_limit_seconds: Option<u32>,
    /// Whether positions were drawn from camouflage candidates
    pub camouflage_guided: bool,
}

/// Partial update applied to one placed object
///
/// Only the found flag is mutable after generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectUpdate {
    /// New found state; `Some(false)` never reverts a found object
    pub found: Option<bool>,
}

impl ObjectUpdate {
    /// Update that marks an object as found
    pub const fn mark_found() -> Self {
        Self { found: Some(true) }
    }
}

/// A generated level: fixed set of objects plus generation metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Level {
    #[serde(flatten)]
    header: LevelHeader,
    objects: Vec<PlacedObject>,
}

impl Level {
    /// Assemble a level from its header and placed objects
    pub const fn new(header: LevelHeader, objects: Vec<PlacedObject>) -> Self {
        Self { header, objects }
    }

    /// Generation metadata
    pub const fn header(&self) -> &LevelHeader {
        &self.header
    }

    /// Placed objects in placement order
    pub fn objects(&self) -> &[PlacedObject] {
        &self.objects
    }

    /// Countdown length resolved for the level
    pub const fn time_limit_seconds(&self) -> Option<u32> {
        self.header.time_limit_seconds
    }

    /// Whether the attempt cap stopped placement short of the requested count
    pub fn is_short(&self) -> bool {
        self.objects.len() < self.header.requested_count as usize
    }

    /// Apply `update` to the object with `id`
    ///
    /// Returns false, changing nothing, when no object has that id.
    pub fn update_object(&mut self, id: &str, update: ObjectUpdate) -> bool {
        let Some(object) = self.objects.iter_mut().find(|object| object.id == id) else {
            return false;
        };
        if let Some(found) = update.found {
            object.found |= found;
            trace!(id, found = object.found, "object updated");
        }
        true
    }

    /// Objects the player has found
    pub fn found_count(&self) -> usize {
        self.objects.iter().filter(|object| object.found).count()
    }

    /// Objects still hidden
    pub fn remaining(&self) -> usize {
        self.objects.len() - self.found_count()
    }

    /// Whether every object has been found
    pub fn is_complete(&self) -> bool {
        self.objects.iter().all(|object| object.found)
    }

    /// Objects still hidden, in placement order
    pub fn unfound(&self) -> impl Iterator<Item = &PlacedObject> {
        self.objects.iter().filter(|object| !object.found)
    }
}

/// Result of asking for a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintOutcome {
    /// One of the level's free hints was used
    Free,
    /// A premium hint was consumed from the caller's balance
    Premium,
    /// No free or premium hints are left
    Exhausted,
}

/// Tracks free hint usage within one level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HintLedger {
    free_used: u32,
}

impl HintLedger {
    /// Ledger with every free hint available
    pub const fn new() -> Self {
        Self { free_used: 0 }
    }

    /// Spend a free hint, or else one premium hint from `premium_balance`
    pub const fn use_hint(&mut self, premium_balance: &mut u32) -> HintOutcome {
        if self.free_used < FREE_HINTS_PER_LEVEL {
            self.free_used += 1;
            HintOutcome::Free
        } else if *premium_balance > 0 {
            *premium_balance -= 1;
            HintOutcome::Premium
        } else {
            HintOutcome::Exhausted
        }
    }

    /// Free hints left in this level
    pub const fn free_remaining(&self) -> u32 {
        FREE_HINTS_PER_LEVEL.saturating_sub(self.free_used)
    }

    /// Restore the free hints for a new level
    pub const fn reset(&mut self) {
        self.free_used = 0;
    }
}
