use crate::{
    column_of, Enemy, EngineError, Party, StatusEffectKind, ABILITY_SLOTS, PARTY_COLUMNS,
    PARTY_SLOTS,
};
use std::collections::BTreeMap;

/// Snapshot of a battle as far as ability evaluation cares. Callers mutate
/// it through the setters; evaluation only ever borrows it.
#[derive(Debug, Clone)]
pub struct BattleState {
    /// Whole seconds elapsed, `-1` before the battle starts.
    pub seconds_passed: i64,
    pub party: Party,
    /// Latched "currently active" flag per (slot, ability slot).
    pub ability_active: [[bool; ABILITY_SLOTS]; PARTY_SLOTS],
    pub skill_hits: [u32; PARTY_SLOTS],
    pub skill_activations: [u32; PARTY_SLOTS],
    pub times_skill_reached_100: [u32; PARTY_COLUMNS],
    pub skill_charge: [f64; PARTY_COLUMNS],
    pub powerflips_by_level: [u32; 3],
    pub total_ball_flips: u32,
    pub direct_hits: [u32; PARTY_COLUMNS],
    pub multiballs: u32,
    pub buffs: [Vec<StatusEffectKind>; PARTY_COLUMNS],
    /// Combo threshold -> how many times it was reached.
    pub combos_reached: BTreeMap<u32, u32>,
    pub fever_active: bool,
    pub pierce_active: bool,
    pub enemy: Option<Enemy>,
}

impl Default for BattleState {
    fn default() -> Self {
        Self {
            seconds_passed: -1,
            party: Party::default(),
            ability_active: [[false; ABILITY_SLOTS]; PARTY_SLOTS],
            skill_hits: [0; PARTY_SLOTS],
            skill_activations: [0; PARTY_SLOTS],
            times_skill_reached_100: [0; PARTY_COLUMNS],
            skill_charge: [0.0; PARTY_COLUMNS],
            powerflips_by_level: [0; 3],
            total_ball_flips: 0,
            direct_hits: [0; PARTY_COLUMNS],
            multiballs: 0,
            buffs: Default::default(),
            combos_reached: BTreeMap::new(),
            fever_active: false,
            pierce_active: false,
            enemy: None,
        }
    }
}

impl BattleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_powerflips(&self) -> u32 {
        self.powerflips_by_level.iter().sum()
    }

    pub fn total_skill_activations(&self) -> u32 {
        self.skill_activations.iter().sum()
    }

    /// `level` is the charge level, 1 through 3.
    pub fn set_powerflips(&mut self, level: usize, count: u32) -> Result<(), EngineError> {
        let entry = level
            .checked_sub(1)
            .and_then(|idx| self.powerflips_by_level.get_mut(idx))
            .ok_or(EngineError::InvalidSlot(level))?;
        *entry = count;
        Ok(())
    }

    pub fn set_skill_activations(&mut self, slot: usize, count: u32) -> Result<(), EngineError> {
        let entry = self
            .skill_activations
            .get_mut(slot)
            .ok_or(EngineError::InvalidSlot(slot))?;
        *entry = count;
        Ok(())
    }

    pub fn set_skill_hits(&mut self, slot: usize, count: u32) -> Result<(), EngineError> {
        let entry = self
            .skill_hits
            .get_mut(slot)
            .ok_or(EngineError::InvalidSlot(slot))?;
        *entry = count;
        Ok(())
    }

    pub fn set_ability_active(
        &mut self,
        slot: usize,
        ability: usize,
        active: bool,
    ) -> Result<(), EngineError> {
        let entry = self
            .ability_active
            .get_mut(slot)
            .and_then(|flags| flags.get_mut(ability))
            .ok_or(EngineError::InvalidSlot(slot))?;
        *entry = active;
        Ok(())
    }

    pub fn add_buff(&mut self, slot: usize, kind: StatusEffectKind) -> Result<(), EngineError> {
        let buffs = self
            .buffs
            .get_mut(column_of(slot))
            .ok_or(EngineError::InvalidSlot(slot))?;
        buffs.push(kind);
        Ok(())
    }

    pub fn record_combo(&mut self, threshold: u32, times: u32) {
        self.combos_reached.insert(threshold, times);
    }

    pub fn enemy_mut(&mut self) -> &mut Enemy {
        self.enemy.get_or_insert_with(Enemy::default)
    }

    /// Current hp over max hp for the column holding `slot`. An empty
    /// column reports zero.
    pub fn hp_fraction(&self, slot: usize) -> f64 {
        let column = column_of(slot);
        match (
            self.party.current_hp.get(column),
            self.party.max_hp.get(column),
        ) {
            (Some(current), Some(max)) if *max > 0.0 => current / max,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StatusEffectKind;

    #[test]
    fn powerflips_are_set_per_charge_level() {
        let mut state = BattleState::new();
        state.set_powerflips(1, 4).unwrap();
        state.set_powerflips(3, 2).unwrap();
        assert_eq!(state.powerflips_by_level, [4, 0, 2]);
        assert_eq!(state.total_powerflips(), 6);
        assert!(state.set_powerflips(0, 1).is_err());
        assert!(state.set_powerflips(4, 1).is_err());
    }

    #[test]
    fn buffs_land_on_the_slot_column() {
        let mut state = BattleState::new();
        state.add_buff(3, StatusEffectKind::Attack).unwrap();
        assert_eq!(state.buffs[1], vec![StatusEffectKind::Attack]);
        assert!(state.add_buff(9, StatusEffectKind::Attack).is_err());
    }

    #[test]
    fn empty_column_has_zero_hp_fraction() {
        let state = BattleState::new();
        assert_eq!(state.hp_fraction(0), 0.0);
    }
}
