//! Parsed ability records and the level interpolation shared by every
//! condition and effect.

use crate::{Element, EngineError, RecordError};
use serde::{Deserialize, Serialize};

pub const ABILITY_SLOT_COUNT: usize = 83;

/// Percentages and counts are stored multiplied by this.
pub const VALUE_DIVISOR: f64 = 100_000.0;
/// Durations are stored in frames on top of [`VALUE_DIVISOR`].
pub const FRAMES_PER_SECOND: f64 = 60.0;

const SLOT_NAME: usize = 0;
const SLOT_REQUIRES_MAIN: usize = 1;
const SLOT_STATUE_GROUP: usize = 2;
const SLOT_TRIGGER_KIND: usize = 3;
const SLOT_PARTY_CONDITION_INDEX: usize = 4;
const SLOT_PARTY_CONDITION_ELEMENT: usize = 9;
const SLOT_MAIN_CONDITION: usize = 25;
const SLOT_MAIN_STACK_CAP: usize = 30;
const SLOT_MAIN_COOLDOWN: usize = 31;
const SLOT_CONDITION_TARGET_ELEMENT: usize = 32;
const SLOT_MAIN_EFFECT: usize = 42;
const SLOT_MAIN_DURATION_MIN: usize = 51;
const SLOT_MAIN_DURATION_MAX: usize = 52;
const SLOT_INCREMENTAL_CAP: usize = 53;
const SLOT_CONTINUOUS_CONDITION: usize = 61;
const SLOT_CONTINUOUS_COOLDOWN: usize = 66;
const SLOT_CONTINUOUS_EFFECT: usize = 73;

/// `value(L) = min + (|max - min| / 5) * (L - 1)` with both endpoints
/// scaled by `divisor` first.
pub fn interpolate(min: i64, max: i64, divisor: f64, level: u8) -> f64 {
    let low = min as f64 / divisor;
    let high = max as f64 / divisor;
    let step = (high - low).abs() / 5.0;
    low + step * (f64::from(level) - 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    Main,
    Continuous,
}

/// Which half of a trigger a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Condition,
    Effect,
}

/// Per-ability activation cap read from the main stack-cap slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackCap {
    Unset,
    Limit(u32),
    Unlimited,
}

impl StackCap {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "" => Some(Self::Unset),
            "(None)" => Some(Self::Unlimited),
            other => other.parse().ok().map(Self::Limit),
        }
    }
}

/// One condition or effect block of a record: index, target code, element
/// filter and the level-1/level-6 endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerParams<'a> {
    pub index: &'a str,
    pub target: &'a str,
    pub element: &'a str,
    pub min: &'a str,
    pub max: &'a str,
    pub(crate) first_slot: usize,
}

impl TriggerParams<'_> {
    pub fn element_filter(&self) -> Option<Element> {
        Element::from_ability_code(self.element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct AbilityRecord {
    slots: Vec<String>,
    kind: TriggerKind,
}

impl TryFrom<Vec<String>> for AbilityRecord {
    type Error = RecordError;

    fn try_from(slots: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_slots(slots)
    }
}

impl From<AbilityRecord> for Vec<String> {
    fn from(record: AbilityRecord) -> Self {
        record.slots
    }
}

impl AbilityRecord {
    pub fn from_slots(slots: Vec<String>) -> Result<Self, RecordError> {
        if slots.len() != ABILITY_SLOT_COUNT {
            return Err(RecordError::SlotCount(slots.len()));
        }
        let kind = match slots[SLOT_TRIGGER_KIND].as_str() {
            "0" => TriggerKind::Main,
            "1" => TriggerKind::Continuous,
            other => {
                return Err(RecordError::TriggerKind {
                    ability: slots[SLOT_NAME].clone(),
                    value: other.to_string(),
                })
            }
        };
        Ok(Self { slots, kind })
    }

    pub fn builder(name: &str, kind: TriggerKind) -> AbilityBuilder {
        AbilityBuilder::new(name, kind)
    }

    pub fn name(&self) -> &str {
        &self.slots[SLOT_NAME]
    }

    pub fn requires_main(&self) -> bool {
        self.slots[SLOT_REQUIRES_MAIN] == "true"
    }

    pub fn statue_group(&self) -> &str {
        &self.slots[SLOT_STATUE_GROUP]
    }

    pub fn trigger_kind(&self) -> TriggerKind {
        self.kind
    }

    pub fn is_main(&self) -> bool {
        self.kind == TriggerKind::Main
    }

    /// Raw access for the slots nobody has named yet.
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn party_condition_index(&self) -> &str {
        &self.slots[SLOT_PARTY_CONDITION_INDEX]
    }

    pub fn party_condition_element(&self) -> &str {
        &self.slots[SLOT_PARTY_CONDITION_ELEMENT]
    }

    pub fn condition_target_element(&self) -> &str {
        &self.slots[SLOT_CONDITION_TARGET_ELEMENT]
    }

    pub fn condition(&self) -> TriggerParams<'_> {
        match self.kind {
            TriggerKind::Main => self.params(SLOT_MAIN_CONDITION),
            TriggerKind::Continuous => self.params(SLOT_CONTINUOUS_CONDITION),
        }
    }

    pub fn effect(&self) -> TriggerParams<'_> {
        match self.kind {
            TriggerKind::Main => self.params(SLOT_MAIN_EFFECT),
            TriggerKind::Continuous => self.params(SLOT_CONTINUOUS_EFFECT),
        }
    }

    fn params(&self, first_slot: usize) -> TriggerParams<'_> {
        TriggerParams {
            index: &self.slots[first_slot],
            target: &self.slots[first_slot + 1],
            element: &self.slots[first_slot + 2],
            min: &self.slots[first_slot + 3],
            max: &self.slots[first_slot + 4],
            first_slot,
        }
    }

    pub fn condition_index(&self) -> &str {
        self.condition().index
    }

    pub fn effect_index(&self) -> &str {
        self.effect().index
    }

    /// Element the condition filters on. Main records stash it in
    /// different slots depending on how the condition is phrased.
    pub fn condition_element(&self) -> Option<Element> {
        match self.kind {
            TriggerKind::Main => {
                let code = if self.party_condition_index() == "2" {
                    self.party_condition_element()
                } else if self.condition().target.is_empty() {
                    self.condition_target_element()
                } else {
                    self.condition().element
                };
                Element::from_ability_code(code)
            }
            TriggerKind::Continuous => self.condition().element_filter(),
        }
    }

    pub fn stack_cap(&self) -> Result<StackCap, EngineError> {
        let raw = &self.slots[SLOT_MAIN_STACK_CAP];
        StackCap::parse(raw).ok_or_else(|| self.invalid_number(SLOT_MAIN_STACK_CAP))
    }

    pub fn cooldown(&self) -> &str {
        match self.kind {
            TriggerKind::Main => &self.slots[SLOT_MAIN_COOLDOWN],
            TriggerKind::Continuous => &self.slots[SLOT_CONTINUOUS_COOLDOWN],
        }
    }

    pub fn incremental_cap(&self) -> &str {
        &self.slots[SLOT_INCREMENTAL_CAP]
    }

    /// Level-1/level-6 endpoints of a block as integers.
    pub fn range(&self, params: &TriggerParams<'_>) -> Result<(i64, i64), EngineError> {
        let min = self.number_at(params.first_slot + 3)?;
        let max = self.number_at(params.first_slot + 4)?;
        Ok((min, max))
    }

    /// Duration endpoints of the active-for-seconds wrapper. Continuous
    /// records reuse the effect range.
    pub fn duration_range(&self) -> Result<(i64, i64), EngineError> {
        match self.kind {
            TriggerKind::Main => Ok((
                self.number_at(SLOT_MAIN_DURATION_MIN)?,
                self.number_at(SLOT_MAIN_DURATION_MAX)?,
            )),
            TriggerKind::Continuous => self.range(&self.effect()),
        }
    }

    fn number_at(&self, slot: usize) -> Result<i64, EngineError> {
        let raw = self.slots[slot].trim();
        if raw.is_empty() {
            return Ok(0);
        }
        raw.parse().map_err(|_| self.invalid_number(slot))
    }

    fn invalid_number(&self, slot: usize) -> EngineError {
        EngineError::InvalidNumber {
            ability: self.name().to_string(),
            slot,
            value: self.slots[slot].clone(),
        }
    }
}

/// Assembles records slot by slot. Used by fixtures and scenario tooling,
/// where writing 83 strings by hand is error prone.
#[derive(Debug, Clone)]
pub struct AbilityBuilder {
    slots: Vec<String>,
    kind: TriggerKind,
}

impl AbilityBuilder {
    pub fn new(name: &str, kind: TriggerKind) -> Self {
        let mut slots = vec![String::new(); ABILITY_SLOT_COUNT];
        slots[SLOT_NAME] = name.to_string();
        slots[SLOT_REQUIRES_MAIN] = "false".to_string();
        slots[SLOT_TRIGGER_KIND] = match kind {
            TriggerKind::Main => "0".to_string(),
            TriggerKind::Continuous => "1".to_string(),
        };
        Self { slots, kind }
    }

    pub fn requires_main(mut self) -> Self {
        self.slots[SLOT_REQUIRES_MAIN] = "true".to_string();
        self
    }

    pub fn condition(self, index: &str, target: &str, element: &str, min: i64, max: i64) -> Self {
        let first = match self.kind {
            TriggerKind::Main => SLOT_MAIN_CONDITION,
            TriggerKind::Continuous => SLOT_CONTINUOUS_CONDITION,
        };
        self.block(first, index, target, element, min, max)
    }

    pub fn effect(self, index: &str, target: &str, element: &str, min: i64, max: i64) -> Self {
        let first = match self.kind {
            TriggerKind::Main => SLOT_MAIN_EFFECT,
            TriggerKind::Continuous => SLOT_CONTINUOUS_EFFECT,
        };
        self.block(first, index, target, element, min, max)
    }

    pub fn stack_cap(self, cap: &str) -> Self {
        self.set(SLOT_MAIN_STACK_CAP, cap)
    }

    pub fn cooldown(self, value: &str) -> Self {
        let slot = match self.kind {
            TriggerKind::Main => SLOT_MAIN_COOLDOWN,
            TriggerKind::Continuous => SLOT_CONTINUOUS_COOLDOWN,
        };
        self.set(slot, value)
    }

    pub fn duration(self, min: i64, max: i64) -> Self {
        self.set(SLOT_MAIN_DURATION_MIN, &min.to_string())
            .set(SLOT_MAIN_DURATION_MAX, &max.to_string())
    }

    pub fn condition_target_element(self, code: &str) -> Self {
        self.set(SLOT_CONDITION_TARGET_ELEMENT, code)
    }

    pub fn party_condition(self, index: &str, element: &str) -> Self {
        self.set(SLOT_PARTY_CONDITION_INDEX, index)
            .set(SLOT_PARTY_CONDITION_ELEMENT, element)
    }

    pub fn set(mut self, slot: usize, value: &str) -> Self {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = value.to_string();
        }
        self
    }

    pub fn build(self) -> AbilityRecord {
        AbilityRecord {
            slots: self.slots,
            kind: self.kind,
        }
    }

    fn block(
        self,
        first: usize,
        index: &str,
        target: &str,
        element: &str,
        min: i64,
        max: i64,
    ) -> Self {
        self.set(first, index)
            .set(first + 1, target)
            .set(first + 2, element)
            .set(first + 3, &min.to_string())
            .set(first + 4, &max.to_string())
    }
}
