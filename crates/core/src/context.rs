use crate::{
    interpolate, main_index, position_of, resolve, AbilityRecord, Anchors, BattleState,
    EngineError, Position, Role, StackCap, TargetCode, TriggerKind, FRAMES_PER_SECOND,
    VALUE_DIVISOR,
};
use std::collections::BTreeSet;

/// Everything one (ability, evaluated unit) evaluation reads. Slots are
/// re-derived from the battle state on every call; nothing holds on to a
/// character.
#[derive(Debug, Clone, Copy)]
pub struct EvalContext<'a> {
    pub state: &'a BattleState,
    pub record: &'a AbilityRecord,
    pub owner_slot: usize,
    pub ability_slot: usize,
    pub eval_slot: usize,
    pub level: u8,
}

impl<'a> EvalContext<'a> {
    pub fn anchors(&self) -> Anchors {
        Anchors {
            owner: self.owner_slot,
            evaluated: self.eval_slot,
        }
    }

    pub fn eval_position(&self) -> Position {
        position_of(self.eval_slot)
    }

    pub fn ability_name(&self) -> String {
        self.record.name().to_string()
    }

    /// Target code for one half of the record, with per-index overrides.
    pub fn target_code(&self, role: Role) -> Result<TargetCode, EngineError> {
        let raw = match role {
            Role::Condition => {
                let condition = self.record.condition();
                // Party-member counts store an empty target but always mean
                // "everyone matching the element".
                if self.record.trigger_kind() == TriggerKind::Main && condition.index == "50" {
                    "5"
                } else {
                    condition.target
                }
            }
            Role::Effect => self.record.effect().target,
        };
        TargetCode::parse(raw).ok_or_else(|| EngineError::UnknownTarget {
            ability: self.ability_name(),
            code: raw.to_string(),
        })
    }

    pub fn resolve(&self, role: Role) -> Result<Vec<usize>, EngineError> {
        let code = self.target_code(role)?;
        let element = match role {
            Role::Condition => self.record.condition_element(),
            Role::Effect => self.record.effect().element_filter(),
        };
        let paired = TargetCode::parse(self.record.effect().target);
        Ok(resolve(
            &self.state.party,
            code,
            element,
            self.anchors(),
            paired,
        ))
    }

    /// Interpolated value of the condition or effect range at the owner's
    /// ability level.
    pub fn value(&self, role: Role) -> Result<f64, EngineError> {
        let params = match role {
            Role::Condition => self.record.condition(),
            Role::Effect => self.record.effect(),
        };
        let (min, max) = self.record.range(&params)?;
        Ok(interpolate(min, max, VALUE_DIVISOR, self.level))
    }

    /// Condition value used as a divisor; must be positive.
    pub fn threshold(&self) -> Result<f64, EngineError> {
        let threshold = self.value(Role::Condition)?;
        if threshold <= 0.0 {
            return Err(EngineError::InvalidThreshold {
                ability: self.ability_name(),
            });
        }
        Ok(threshold)
    }

    /// `floor(count / threshold)` clamped to the record's stack cap.
    pub fn stacks(&self, count: u32) -> Result<f64, EngineError> {
        let times = (f64::from(count) / self.threshold()?).floor();
        self.cap(times)
    }

    pub fn cap(&self, stacks: f64) -> Result<f64, EngineError> {
        match self.record.stack_cap()? {
            StackCap::Limit(limit) => Ok(stacks.min(f64::from(limit))),
            StackCap::Unlimited => Ok(stacks),
            StackCap::Unset => Err(EngineError::MissingStackCap {
                ability: self.ability_name(),
            }),
        }
    }

    pub fn latched(&self) -> bool {
        self.state
            .ability_active
            .get(self.owner_slot)
            .and_then(|flags| flags.get(self.ability_slot))
            .copied()
            .unwrap_or(false)
    }

    /// Periodic activation: either latched on in the battle state, or
    /// derived from elapsed seconds against the on/off duty cycle.
    pub fn timed_active(&self) -> Result<bool, EngineError> {
        if self.latched() {
            return Ok(true);
        }
        let cooldown = self.record.cooldown();
        if !(cooldown.is_empty() || cooldown == "0") || self.state.seconds_passed < 0 {
            return Ok(false);
        }
        let (cond_min, cond_max) = self.record.range(&self.record.condition())?;
        let (dur_min, dur_max) = self.record.duration_range()?;
        let to_activate = seconds(interpolate(cond_min, cond_max, VALUE_DIVISOR, self.level));
        let active_for = seconds(interpolate(dur_min, dur_max, VALUE_DIVISOR, self.level));
        Ok(duty_cycle_active(
            self.state.seconds_passed,
            to_activate,
            active_for,
        ))
    }
}

fn seconds(frames: f64) -> i64 {
    (frames / FRAMES_PER_SECOND) as i64
}

/// Whether an effect that first fires after `to_activate` seconds and then
/// stays up for `active_for` seconds is up at `elapsed`.
pub fn duty_cycle_active(elapsed: i64, to_activate: i64, active_for: i64) -> bool {
    if to_activate > elapsed {
        return false;
    }
    let mut remaining = elapsed - to_activate;
    let off_for = to_activate - active_for;
    while remaining >= 0 {
        if remaining <= active_for {
            return true;
        }
        remaining -= active_for;
        if remaining <= off_for {
            return false;
        }
        remaining -= off_for;
        // A cycle with no net length never advances.
        if active_for + off_for <= 0 {
            return false;
        }
    }
    false
}

/// Distinct main-column slots covering `slots`.
pub fn only_mains(slots: &[usize]) -> BTreeSet<usize> {
    slots.iter().map(|slot| main_index(*slot)).collect()
}
