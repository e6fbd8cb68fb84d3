use crate::{column_of, only_mains, Element, EngineError, EvalContext, Role, StatusEffectKind};
use tracing::trace;

/// Event totals that "every N times" conditions count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountedEvent {
    Powerflips,
    OwnerSkillHits,
    BallFlips,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    BattleStart,
    EveryN(CountedEvent),
    SkillInvoke,
    SkillGaugeFull,
    AttackBuffActivated,
    InFever,
    InPierce,
    PartyMembers,
    Lv3Powerflips,
    ComboReached,
    EveryNSeconds,
    DirectHits,
    SelfIsElement,
    HpAbove,
    MultiballsAbove,
    AnyBuffActive,
    AttackBuffActive,
    PierceActive,
    AttackBuffCount,
    SkillGaugeAbove,
    EnemyDebuffCount,
}

impl Condition {
    /// Battle start never looks at the party.
    pub fn resolves_targets(self) -> bool {
        !matches!(self, Self::BattleStart)
    }

    /// `Some(stacks)` when the condition holds. `slots` is the resolved
    /// condition target set.
    pub fn evaluate(
        self,
        ctx: &EvalContext<'_>,
        slots: &[usize],
    ) -> Result<Option<f64>, EngineError> {
        let state = ctx.state;
        let stacks = match self {
            Self::BattleStart => Some(1.0),
            Self::EveryN(event) => {
                let count = match event {
                    CountedEvent::Powerflips => state.total_powerflips(),
                    CountedEvent::OwnerSkillHits => state.skill_hits[ctx.owner_slot],
                    CountedEvent::BallFlips => state.total_ball_flips,
                };
                Some(ctx.stacks(count)?)
            }
            Self::SkillInvoke => {
                // Fractional on purpose: partial progress toward the next
                // activation still counts.
                let per_stack = ctx.threshold()?;
                let total: f64 = slots
                    .iter()
                    .map(|slot| f64::from(state.skill_activations[*slot]) / per_stack)
                    .sum();
                Some(ctx.cap(total)?)
            }
            Self::SkillGaugeFull => {
                let mut total = 0.0;
                for main in only_mains(slots) {
                    total += ctx.stacks(state.times_skill_reached_100[column_of(main)])?;
                }
                Some(total)
            }
            Self::AttackBuffActivated => {
                let latched = slots.iter().any(|slot| {
                    state
                        .ability_active
                        .get(*slot)
                        .and_then(|flags| flags.get(ctx.ability_slot))
                        .copied()
                        .unwrap_or(false)
                });
                latched.then_some(1.0)
            }
            Self::InFever => state.fever_active.then_some(1.0),
            Self::InPierce | Self::PierceActive => state.pierce_active.then_some(1.0),
            Self::PartyMembers => {
                let members = u32::try_from(slots.len()).unwrap_or(u32::MAX);
                Some(ctx.stacks(members)?)
            }
            Self::Lv3Powerflips => Some(ctx.stacks(state.powerflips_by_level[2])?),
            Self::ComboReached => {
                let threshold = ctx.value(Role::Condition)?.round() as u32;
                let reached = state.combos_reached.get(&threshold).copied().unwrap_or(0);
                let capped = ctx.cap(f64::from(reached))?;
                (capped > 0.0).then_some(capped)
            }
            Self::EveryNSeconds => ctx.timed_active()?.then_some(1.0),
            Self::DirectHits => {
                let per_stack = ctx.threshold()?;
                let total: f64 = only_mains(slots)
                    .into_iter()
                    .map(|main| f64::from(state.direct_hits[column_of(main)]))
                    .filter(|hits| *hits >= per_stack)
                    .map(|hits| (hits / per_stack).floor())
                    .sum();
                (total > 0.0).then_some(total)
            }
            Self::SelfIsElement => {
                let wanted = Element::from_ability_code(ctx.record.condition_target_element());
                let all_match = wanted.is_some_and(|element| {
                    only_mains(slots).into_iter().all(|main| {
                        state
                            .party
                            .member(main)
                            .is_some_and(|character| character.element == element)
                    })
                });
                all_match.then_some(1.0)
            }
            Self::HpAbove => {
                let needed = ctx.value(Role::Condition)?;
                slots
                    .iter()
                    .all(|slot| {
                        state.party.max_hp[column_of(*slot)] > 0.0
                            && state.hp_fraction(*slot) >= needed
                    })
                    .then_some(1.0)
            }
            Self::MultiballsAbove => {
                let needed = ctx.value(Role::Condition)?;
                (f64::from(state.multiballs) > needed).then_some(1.0)
            }
            Self::AnyBuffActive => slots
                .iter()
                .all(|slot| !state.buffs[column_of(*slot)].is_empty())
                .then_some(1.0),
            Self::AttackBuffActive => only_mains(slots)
                .into_iter()
                .all(|main| state.buffs[column_of(main)].contains(&StatusEffectKind::Attack))
                .then_some(1.0),
            Self::AttackBuffCount => {
                let per_buff = ctx.value(Role::Condition)?;
                let total: f64 = only_mains(slots)
                    .into_iter()
                    .map(|main| {
                        let count = state.buffs[column_of(main)]
                            .iter()
                            .filter(|kind| **kind == StatusEffectKind::Attack)
                            .count();
                        count as f64 * per_buff
                    })
                    .sum();
                (total > 0.0).then_some(total)
            }
            Self::SkillGaugeAbove => {
                let needed = ctx.value(Role::Condition)?;
                slots
                    .iter()
                    .all(|slot| state.skill_charge[column_of(*slot)] > needed)
                    .then_some(1.0)
            }
            Self::EnemyDebuffCount => {
                // Unverified: only one observed ability uses this. Any debuff
                // counts, and fewer than `threshold` debuffs means no bonus.
                let Some(enemy) = state.enemy.as_ref() else {
                    return Ok(None);
                };
                let per_stack = ctx.threshold()?;
                let count = enemy.debuffs.len() as f64;
                (count >= per_stack).then(|| (count / per_stack).floor())
            }
        };
        trace!(
            ability = ctx.record.name(),
            condition = ?self,
            stacks = ?stacks,
            "condition evaluated"
        );
        Ok(stacks)
    }
}
