use thiserror::Error;

/// Failures building an [`crate::AbilityRecord`] from raw table slots.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("ability record has {0} slots, expected {}", crate::ABILITY_SLOT_COUNT)]
    SlotCount(usize),
    #[error("[{ability}] unknown trigger discriminant {value:?}")]
    TriggerKind { ability: String, value: String },
}

/// Unmodeled or inconsistent data hit during evaluation. "Does not apply"
/// outcomes are never reported through this type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("[{ability}] unknown condition index {index:?}")]
    UnknownCondition { ability: String, index: String },
    #[error("[{ability}] unknown effect index {index:?}")]
    UnknownEffect { ability: String, index: String },
    #[error("[{ability}] unhandled target code {code:?}")]
    UnknownTarget { ability: String, code: String },
    #[error("[{ability}] counted condition has no stack cap")]
    MissingStackCap { ability: String },
    #[error("[{ability}] condition threshold must be positive")]
    InvalidThreshold { ability: String },
    #[error("[{ability}] slot {slot} is not a number: {value:?}")]
    InvalidNumber {
        ability: String,
        slot: usize,
        value: String,
    },
    #[error("damage context has no attacker in the party")]
    MissingAttacker,
    #[error("invalid party slot {0}")]
    InvalidSlot(usize),
    #[error("ability level {0} is above {}", crate::MAX_ABILITY_LEVEL)]
    InvalidAbilityLevel(u8),
}
