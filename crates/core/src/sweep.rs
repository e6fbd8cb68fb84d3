//! Roster sweep: evaluate every ability in the party for one character and
//! fold the results.

use crate::{evaluate_ability, AbilityRecord, BattleState, DamageContext, EngineConfig, EngineError};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

/// One ability that applied to the swept character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub owner: String,
    pub owner_slot: usize,
    pub ability_slot: usize,
    pub ability: String,
    pub context: DamageContext,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepReport {
    pub evaluated: String,
    pub contributions: Vec<Contribution>,
    /// Every contribution combined in party order.
    pub merged: DamageContext,
}

struct Candidate<'a> {
    owner: &'a str,
    owner_slot: usize,
    ability_slot: usize,
    record: &'a AbilityRecord,
}

fn candidates(state: &BattleState) -> Vec<Candidate<'_>> {
    state
        .party
        .occupied()
        .flat_map(|(owner_slot, character)| {
            character
                .abilities
                .iter()
                .enumerate()
                .flat_map(move |(ability_slot, records)| {
                    records.iter().map(move |record| Candidate {
                        owner: character.id.as_str(),
                        owner_slot,
                        ability_slot,
                        record,
                    })
                })
        })
        .collect()
}

/// Evaluates every (owner, ability slot, record) in the party against
/// `evaluated_id`. Candidates may run on the rayon pool, but results are
/// folded in slot order so first-writer fields do not depend on scheduling.
/// The first error in that order is returned.
pub fn sweep_party(
    state: &BattleState,
    evaluated_id: &str,
    config: &EngineConfig,
) -> Result<SweepReport, EngineError> {
    let candidates = candidates(state);
    let run_one = |candidate: &Candidate<'_>| {
        evaluate_ability(
            state,
            candidate.owner,
            candidate.ability_slot,
            candidate.record,
            evaluated_id,
        )
    };
    let outcomes: Vec<Result<Option<DamageContext>, EngineError>> = if config.parallel_sweep {
        candidates.par_iter().map(run_one).collect()
    } else {
        candidates.iter().map(run_one).collect()
    };

    let mut merged = DamageContext::for_attacker(evaluated_id);
    let mut contributions = Vec::new();
    for (candidate, outcome) in candidates.iter().zip(outcomes) {
        let Some(context) = outcome? else {
            continue;
        };
        merged.combine(&context);
        contributions.push(Contribution {
            owner: candidate.owner.to_string(),
            owner_slot: candidate.owner_slot,
            ability_slot: candidate.ability_slot,
            ability: candidate.record.name().to_string(),
            context,
        });
    }
    info!(
        evaluated = evaluated_id,
        candidates = candidates.len(),
        applied = contributions.len(),
        "party sweep finished"
    );
    Ok(SweepReport {
        evaluated: evaluated_id.to_string(),
        contributions,
        merged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Character, Element, Position, PowerFlipKind, TriggerKind};
    use std::sync::Arc;

    fn attack_record(name: &str, min: i64) -> AbilityRecord {
        AbilityRecord::builder(name, TriggerKind::Main)
            .condition("0", "", "", 0, 0)
            .effect("31", "", "", min, min)
            .build()
    }

    fn state() -> BattleState {
        let mut leader = Character::new("lead", Element::Fire, PowerFlipKind::Sword);
        leader.abilities = vec![vec![attack_record("a", 10_000)], vec![attack_record("b", 5_000)]];
        let mut state = BattleState::new();
        state
            .party
            .set_member(Arc::new(leader), Position::Leader, 0, 1, 0)
            .unwrap();
        state.party.set_ability_level(0, 0, 1).unwrap();
        state.party.set_ability_level(0, 1, 1).unwrap();
        state
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let state = state();
        let mut config = EngineConfig::default();
        let parallel = sweep_party(&state, "lead", &config).unwrap();
        config.parallel_sweep = false;
        let sequential = sweep_party(&state, "lead", &config).unwrap();
        assert_eq!(parallel, sequential);
        assert_eq!(parallel.contributions.len(), 2);
        assert!((parallel.merged.attack_modifier - 0.15).abs() < 1e-9);
    }

    #[test]
    fn locked_slots_are_skipped() {
        let mut state = state();
        state.party.set_ability_level(0, 1, 0).unwrap();
        let report = sweep_party(&state, "lead", &EngineConfig::default()).unwrap();
        let names: Vec<&str> = report
            .contributions
            .iter()
            .map(|c| c.ability.as_str())
            .collect();
        assert_eq!(names, vec!["a"]);
    }
}
