use crate::{
    column_of, only_mains, DamageContext, Element, EngineError, EvalContext, Role,
    StatusEffectKind, MAX_ADDITIONAL_DA_TIMES,
};
use tracing::trace;

/// Which evaluated slots an effect may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotGate {
    Any,
    /// Leader or main.
    Main,
    /// Slot 0 only.
    Leader,
}

/// One link of an effect chain. Every link of a chain must succeed for the
/// ability to contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
    ActiveForSeconds,
    Attack,
    DirectAttackDamage,
    SkillDamage,
    PowerFlipDamage,
    Lv3PowerFlipDamage,
    FireResist,
    IncreaseHp,
    SkillCharge,
    SkillChargeRate,
    SecondSkillGauge,
    PowerFlipComboReduction,
    AttackBuffExtend,
    PierceBuffExtend,
    FeverGain,
    FireResistDebuffSlayer,
    PoisonSlayer,
    SlowSlayer,
    PoisonAttack,
    PoisonDirectAttack,
    Pierce,
    Combo,
    AdditionalDirectAttack,
    InstantDamage,
}

impl Effect {
    pub fn gate(self) -> SlotGate {
        match self {
            Self::Attack
            | Self::DirectAttackDamage
            | Self::FeverGain
            | Self::PoisonSlayer
            | Self::PoisonAttack
            | Self::PoisonDirectAttack => SlotGate::Main,
            Self::PowerFlipDamage | Self::Pierce => SlotGate::Leader,
            _ => SlotGate::Any,
        }
    }

    /// Instant damage is not modeled and fails before looking at targets.
    pub fn resolves_targets(self) -> bool {
        !matches!(self, Self::InstantDamage)
    }

    fn gate_open(self, ctx: &EvalContext<'_>) -> bool {
        match self.gate() {
            SlotGate::Any => true,
            SlotGate::Main => ctx.eval_position().is_main(),
            SlotGate::Leader => ctx.eval_slot == 0,
        }
    }

    /// Writes this effect into `out`. `slots` is the resolved effect target
    /// set and `stacks` the multiplier produced by the condition. Returns
    /// `false` when the effect does not apply, in which case `out` may hold
    /// partial writes and must be discarded.
    pub fn apply(
        self,
        ctx: &EvalContext<'_>,
        slots: &[usize],
        stacks: f64,
        out: &mut DamageContext,
    ) -> Result<bool, EngineError> {
        if !self.gate_open(ctx) {
            trace!(ability = ctx.record.name(), effect = ?self, "slot gate closed");
            return Ok(false);
        }
        let enemy = ctx.state.enemy.as_ref();
        let applied = match self {
            Self::InstantDamage => false,
            Self::ActiveForSeconds => ctx.timed_active()?,
            Self::Attack => {
                out.attack_modifier += scaled(ctx, stacks)?;
                true
            }
            Self::DirectAttackDamage => {
                out.da_damage += scaled(ctx, stacks)?;
                true
            }
            Self::SkillDamage => {
                out.sd_damage += scaled(ctx, stacks)?;
                true
            }
            Self::PowerFlipDamage => {
                out.pf_damage += scaled(ctx, stacks)?;
                true
            }
            Self::Lv3PowerFlipDamage => {
                // Unverified: every known record of this kind boosts charge
                // level 3 only.
                out.pf_lv_slayer = scaled(ctx, stacks)?;
                out.pf_lv_slayer_level = 3;
                true
            }
            Self::FireResist => {
                *out.element_resist_mut(Element::Fire) += scaled(ctx, stacks)?;
                true
            }
            Self::IncreaseHp => {
                let value = scaled(ctx, stacks)?;
                for main in only_mains(slots) {
                    out.increased_hp[main] += value;
                }
                true
            }
            Self::SkillCharge => {
                let value = scaled(ctx, stacks)?;
                for main in only_mains(slots) {
                    out.skill_charge[column_of(main)] += value;
                }
                true
            }
            Self::SkillChargeRate => {
                let value = scaled(ctx, stacks)?;
                for main in only_mains(slots) {
                    out.skill_charge_speed[column_of(main)] += value;
                }
                true
            }
            Self::SecondSkillGauge => {
                for main in only_mains(slots) {
                    out.skill_gauge_max[column_of(main)] += 100.0;
                }
                true
            }
            Self::PowerFlipComboReduction => {
                out.pf_combo_reduction[2] += scaled(ctx, stacks)?;
                true
            }
            Self::AttackBuffExtend => {
                // Unverified: assumed to extend attack buffs only.
                out.attack_buff_extension += scaled(ctx, stacks)?;
                true
            }
            Self::PierceBuffExtend => {
                out.pierce_buff_extension += scaled(ctx, stacks)?;
                true
            }
            Self::FeverGain => {
                out.fever_gain += scaled(ctx, stacks)?;
                true
            }
            Self::FireResistDebuffSlayer => {
                // Unverified: the only record seen checks a fire resist down.
                let debuffed = enemy.is_some_and(|enemy| {
                    enemy.has_elemental(StatusEffectKind::ElementResist, Element::Fire)
                });
                if debuffed {
                    out.condition_slayer += scaled(ctx, stacks)?;
                }
                debuffed
            }
            Self::PoisonSlayer | Self::SlowSlayer => {
                let kind = if self == Self::PoisonSlayer {
                    StatusEffectKind::Poison
                } else {
                    StatusEffectKind::Slow
                };
                let debuffed = enemy.is_some_and(|enemy| enemy.has(kind));
                if debuffed {
                    out.condition_slayer += scaled(ctx, stacks)?;
                }
                debuffed
            }
            Self::PoisonAttack => {
                let poisoned = enemy.is_some_and(|enemy| enemy.has(StatusEffectKind::Poison));
                if poisoned {
                    out.attack_modifier += scaled(ctx, stacks)?;
                }
                poisoned
            }
            Self::PoisonDirectAttack => {
                let poisoned = enemy.is_some_and(|enemy| enemy.has(StatusEffectKind::Poison));
                if poisoned {
                    out.da_damage += scaled(ctx, stacks)?;
                }
                poisoned
            }
            Self::Pierce => {
                out.pierce_active = true;
                true
            }
            Self::Combo => {
                out.combo += scaled(ctx, stacks)?;
                true
            }
            Self::AdditionalDirectAttack => {
                // Unverified: all known records grant exactly one extra hit.
                out.additional_da_damage += scaled(ctx, stacks)?;
                out.additional_da_times = MAX_ADDITIONAL_DA_TIMES;
                true
            }
        };
        trace!(
            ability = ctx.record.name(),
            effect = ?self,
            applied,
            "effect evaluated"
        );
        Ok(applied)
    }
}

fn scaled(ctx: &EvalContext<'_>, stacks: f64) -> Result<f64, EngineError> {
    Ok(ctx.value(Role::Effect)? * stacks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AbilityRecord, BattleState, Character, Position, PowerFlipKind, TriggerKind};
    use std::sync::Arc;

    fn state() -> BattleState {
        let mut state = BattleState::new();
        for (id, position, column) in [
            ("lead", Position::Leader, 0),
            ("uni", Position::Unison, 0),
            ("mid", Position::Main, 1),
        ] {
            let character = Arc::new(Character::new(id, Element::Fire, PowerFlipKind::Sword));
            state
                .party
                .set_member(character, position, column, 1, 0)
                .unwrap();
        }
        state
    }

    fn apply(effect: Effect, state: &BattleState, eval_slot: usize) -> Option<DamageContext> {
        let record = AbilityRecord::builder("direct", TriggerKind::Main)
            .effect("0", "", "", 20_000, 20_000)
            .build();
        let ctx = EvalContext {
            state,
            record: &record,
            owner_slot: 0,
            ability_slot: 0,
            eval_slot,
            level: 6,
        };
        let mut out = DamageContext::default();
        effect
            .apply(&ctx, &[0], 1.5, &mut out)
            .unwrap()
            .then_some(out)
    }

    #[test]
    fn pierce_extend_scales_with_stacks() {
        let out = apply(Effect::PierceBuffExtend, &state(), 0).unwrap();
        assert!((out.pierce_buff_extension - 1.3).abs() < 1e-9);
        assert_eq!(out.attack_buff_extension, 1.0);
    }

    #[test]
    fn gates_follow_the_evaluated_slot() {
        let state = state();
        assert!(apply(Effect::FeverGain, &state, 2).is_some());
        assert!(apply(Effect::FeverGain, &state, 1).is_none());
        assert!(apply(Effect::Pierce, &state, 0).is_some());
        assert!(apply(Effect::Pierce, &state, 2).is_none());
        assert!(apply(Effect::Combo, &state, 1).is_some());
    }

    #[test]
    fn instant_damage_never_applies() {
        assert!(!Effect::InstantDamage.resolves_targets());
        assert!(apply(Effect::InstantDamage, &state(), 0).is_none());
    }
}
