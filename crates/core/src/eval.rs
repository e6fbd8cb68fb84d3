use crate::{
    applies_to, lookup_condition, lookup_effects, position_of, AbilityRecord, BattleState,
    DamageContext, EngineError, EvalContext, Position, Role, ABILITY_SLOTS,
};
use tracing::debug;

/// Evaluates one ability owned by `owner_id` (sitting in its `ability_slot`)
/// for the character `evaluated_id`.
///
/// `Ok(None)` means the ability does not apply right now. Errors are
/// reserved for data the engine cannot interpret; the registry lookup runs
/// first so those surface even when the ability would not apply.
pub fn evaluate_ability(
    state: &BattleState,
    owner_id: &str,
    ability_slot: usize,
    record: &AbilityRecord,
    evaluated_id: &str,
) -> Result<Option<DamageContext>, EngineError> {
    let condition = lookup_condition(record)?;
    let chain = lookup_effects(record)?;
    if ability_slot >= ABILITY_SLOTS {
        return Err(EngineError::InvalidSlot(ability_slot));
    }

    let ability = record.name();
    let Some(eval_slot) = state.party.index_of(evaluated_id) else {
        debug!(ability, evaluated_id, "evaluated character not in party");
        return Ok(None);
    };
    let Some(owner_slot) = state.party.index_of(owner_id) else {
        debug!(ability, owner_id, "owner not in party");
        return Ok(None);
    };
    let level = state.party.ability_levels[owner_slot][ability_slot];
    if level == 0 {
        debug!(ability, owner_id, ability_slot, "ability not unlocked");
        return Ok(None);
    }
    if record.requires_main() && position_of(owner_slot) == Position::Unison {
        debug!(ability, owner_id, "main-only ability on a unison");
        return Ok(None);
    }

    let ctx = EvalContext {
        state,
        record,
        owner_slot,
        ability_slot,
        eval_slot,
        level,
    };
    let effect_target = ctx.target_code(Role::Effect)?;
    if !applies_to(
        &state.party,
        effect_target,
        record.effect().element_filter(),
        ctx.anchors(),
    ) {
        debug!(ability, evaluated_id, "effect target excludes evaluated unit");
        return Ok(None);
    }

    let condition_slots = if condition.resolves_targets() {
        let slots = ctx.resolve(Role::Condition)?;
        if slots.is_empty() {
            debug!(ability, "condition target set is empty");
            return Ok(None);
        }
        slots
    } else {
        Vec::new()
    };
    let Some(stacks) = condition.evaluate(&ctx, &condition_slots)? else {
        debug!(ability, ?condition, "condition not met");
        return Ok(None);
    };

    let mut out = DamageContext::for_attacker(evaluated_id);
    for effect in chain {
        if !effect.resolves_targets() {
            debug!(ability, ?effect, "effect is not modeled");
            return Ok(None);
        }
        let slots = ctx.resolve(Role::Effect)?;
        if slots.is_empty() {
            debug!(ability, ?effect, "effect target set is empty");
            return Ok(None);
        }
        if !effect.apply(&ctx, &slots, stacks, &mut out)? {
            debug!(ability, ?effect, "effect did not apply");
            return Ok(None);
        }
    }
    debug!(ability, evaluated_id, stacks, "ability applied");
    Ok(Some(out))
}
