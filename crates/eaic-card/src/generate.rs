//! Card identity and clock provision.
//!
//! The compiler never calls `Uuid::new_v4` or the system clock directly.
//! It asks a [`CardGenerator`], so tests can pin both and assert on fully
//! reproducible cards.

use eaic_core::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub Uuid);

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Source of fresh card ids and timestamps.
pub trait CardGenerator {
    /// A new, unique card id.
    fn new_card_id(&self) -> CardId;
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Production generator: random v4 ids and the system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemGenerator;

impl CardGenerator for SystemGenerator {
    fn new_card_id(&self) -> CardId {
        CardId(Uuid::new_v4())
    }

    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Test generator returning a pinned id and timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedGenerator {
    /// Id every call returns.
    pub card_id: CardId,
    /// Timestamp every call returns.
    pub timestamp: Timestamp,
}

impl CardGenerator for FixedGenerator {
    fn new_card_id(&self) -> CardId {
        self.card_id
    }

    fn now(&self) -> Timestamp {
        self.timestamp
    }
}
