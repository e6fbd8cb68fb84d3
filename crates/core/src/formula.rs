//! Damage formula accumulator. One context is produced per (ability,
//! evaluated unit); callers fold them with [`DamageContext::combine`] and
//! evaluate the result once.

use crate::{
    main_index, position_of, unison_index, BattleState, Element, EngineConfig, EngineError,
    PowerFlipKind, Position, PARTY_COLUMNS, PARTY_SLOTS,
};
use serde::{Deserialize, Serialize};

/// No known ability grants more than two hits per direct attack.
pub const MAX_ADDITIONAL_DA_TIMES: u32 = 2;
/// Highest powerflip charge level; the charge table has no entries above it.
pub const MAX_CHARGE_LEVEL: u8 = 3;

pub const BOW_FAR_LEFT: usize = 0;
pub const BOW_NEAR_LEFT: usize = 1;
pub const BOW_MIDDLE: usize = 2;
pub const BOW_NEAR_RIGHT: usize = 3;
pub const BOW_FAR_RIGHT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DamageSource {
    DirectAttack,
    PowerFlip { charge_level: u8 },
    Skill,
    AbilityDirect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageContext {
    pub attacker: Option<String>,
    pub source: Option<DamageSource>,
    /// Far left, near left, middle, near right, far right.
    pub bow_hits: [bool; 5],
    pub weak: bool,
    pub downed: bool,

    // Tracked for display only; the formula never reads these.
    pub combo: f64,
    pub pf_combo_reduction: [f64; 3],
    pub skill_charge: [f64; PARTY_COLUMNS],
    pub skill_charge_speed: [f64; PARTY_COLUMNS],
    pub skill_gauge_max: [f64; PARTY_COLUMNS],
    pub attack_buff_extension: f64,
    pub pierce_buff_extension: f64,
    pub pierce_active: bool,
    pub fever_gain: f64,
    pub increased_hp: [f64; PARTY_SLOTS],

    pub element_resists: [f64; 6],
    pub pf_resist_mult: f64,
    pub da_resist_mult: f64,
    pub sd_resist_mult: f64,
    pub ad_resist_mult: f64,

    /// Divisor in the direct attack step, never below 1.
    pub additional_da_times: u32,

    pub attack_modifier: f64,
    pub total_resist: f64,
    pub pinch_slayer: f64,
    pub condition_slayer: f64,
    pub character_slayer: f64,
    pub adversity: f64,
    pub attacker_fraction_health_lost: f64,
    pub da_damage: f64,
    pub additional_da_damage: f64,
    pub pf_damage: f64,
    pub pf_lv_slayer: f64,
    pub pf_lv_slayer_level: u8,
    pub sd_damage: f64,
    pub skill_multiplier: f64,
    pub skill_slayer: f64,
    pub combo_bonus: bool,
    pub current_combos: f64,
    pub coffin_count_bonus: bool,
    pub coffin_counts: f64,
    pub buff_count_bonus: bool,
    pub buff_counts: f64,
    pub range_bonus: bool,
    pub distance: f64,
    pub ad_damage: f64,
    pub element_damage_cut: f64,
}

impl Default for DamageContext {
    fn default() -> Self {
        let mut bow_hits = [false; 5];
        bow_hits[BOW_MIDDLE] = true;
        Self {
            attacker: None,
            source: None,
            bow_hits,
            weak: false,
            downed: false,
            combo: 0.0,
            pf_combo_reduction: [0.0; 3],
            skill_charge: [0.0; PARTY_COLUMNS],
            skill_charge_speed: [1.0; PARTY_COLUMNS],
            skill_gauge_max: [100.0; PARTY_COLUMNS],
            attack_buff_extension: 1.0,
            pierce_buff_extension: 1.0,
            pierce_active: false,
            fever_gain: 1.0,
            increased_hp: [1.0; PARTY_SLOTS],
            element_resists: [1.0; 6],
            pf_resist_mult: 1.0,
            da_resist_mult: 1.0,
            sd_resist_mult: 1.0,
            ad_resist_mult: 1.0,
            additional_da_times: 1,
            attack_modifier: 0.0,
            total_resist: 0.0,
            pinch_slayer: 0.0,
            condition_slayer: 0.0,
            character_slayer: 0.0,
            adversity: 0.0,
            attacker_fraction_health_lost: 0.0,
            da_damage: 0.0,
            additional_da_damage: 0.0,
            pf_damage: 0.0,
            pf_lv_slayer: 0.0,
            pf_lv_slayer_level: 0,
            sd_damage: 0.0,
            skill_multiplier: 0.0,
            skill_slayer: 0.0,
            combo_bonus: false,
            current_combos: 0.0,
            coffin_count_bonus: false,
            coffin_counts: 0.0,
            buff_count_bonus: false,
            buff_counts: 0.0,
            range_bonus: false,
            distance: 0.0,
            ad_damage: 0.0,
            element_damage_cut: 0.0,
        }
    }
}

fn add_all<const N: usize>(into: &mut [f64; N], from: &[f64; N]) {
    for (lhs, rhs) in into.iter_mut().zip(from) {
        *lhs += rhs;
    }
}

fn add_around<const N: usize>(into: &mut [f64; N], from: &[f64; N], base: f64) {
    for (lhs, rhs) in into.iter_mut().zip(from) {
        *lhs += rhs - base;
    }
}

impl DamageContext {
    pub fn for_attacker(attacker: &str) -> Self {
        Self {
            attacker: Some(attacker.to_string()),
            ..Self::default()
        }
    }

    pub fn element_resist(&self, element: Element) -> f64 {
        self.element_resists[element.index()]
    }

    pub fn element_resist_mut(&mut self, element: Element) -> &mut f64 {
        &mut self.element_resists[element.index()]
    }

    /// Folds `other` into `self`.
    ///
    /// Additive fields sum. Fields with a baseline (1.0 for multipliers,
    /// 100 for gauge max) add only their delta from the baseline. The extra
    /// direct attack count and the first-writer fields (`distance`,
    /// `pf_lv_slayer_level`, `attacker`) only take `other`'s value while
    /// still at their default. Hit setup (`source`, `weak`, `downed`,
    /// `bow_hits`) belongs to whoever owns the aggregate and is left alone.
    pub fn combine(&mut self, other: &DamageContext) {
        if self.attacker.is_none() {
            self.attacker = other.attacker.clone();
        }

        self.combo += other.combo;
        add_all(&mut self.pf_combo_reduction, &other.pf_combo_reduction);
        add_all(&mut self.skill_charge, &other.skill_charge);
        add_around(&mut self.skill_charge_speed, &other.skill_charge_speed, 1.0);
        add_around(&mut self.skill_gauge_max, &other.skill_gauge_max, 100.0);
        self.attack_buff_extension += other.attack_buff_extension - 1.0;
        self.pierce_buff_extension += other.pierce_buff_extension - 1.0;
        self.pierce_active |= other.pierce_active;
        self.fever_gain += other.fever_gain - 1.0;
        add_around(&mut self.increased_hp, &other.increased_hp, 1.0);

        add_around(&mut self.element_resists, &other.element_resists, 1.0);
        self.pf_resist_mult += other.pf_resist_mult - 1.0;
        self.da_resist_mult += other.da_resist_mult - 1.0;
        self.sd_resist_mult += other.sd_resist_mult - 1.0;
        self.ad_resist_mult += other.ad_resist_mult - 1.0;

        if self.additional_da_times == 1 {
            self.additional_da_times = other.additional_da_times;
        }
        self.additional_da_times = self.additional_da_times.clamp(1, MAX_ADDITIONAL_DA_TIMES);

        self.attack_modifier += other.attack_modifier;
        self.total_resist += other.total_resist;
        self.pinch_slayer += other.pinch_slayer;
        self.condition_slayer += other.condition_slayer;
        self.character_slayer += other.character_slayer;
        self.adversity += other.adversity;
        self.attacker_fraction_health_lost += other.attacker_fraction_health_lost;
        self.da_damage += other.da_damage;
        self.additional_da_damage += other.additional_da_damage;
        self.pf_damage += other.pf_damage;
        self.pf_lv_slayer += other.pf_lv_slayer;
        if self.pf_lv_slayer_level == 0 {
            self.pf_lv_slayer_level = other.pf_lv_slayer_level;
        }
        self.sd_damage += other.sd_damage;
        self.skill_multiplier += other.skill_multiplier;
        self.skill_slayer += other.skill_slayer;
        self.combo_bonus |= other.combo_bonus;
        self.current_combos += other.current_combos;
        self.coffin_count_bonus |= other.coffin_count_bonus;
        self.coffin_counts += other.coffin_counts;
        self.buff_count_bonus |= other.buff_count_bonus;
        self.buff_counts += other.buff_counts;
        self.range_bonus |= other.range_bonus;
        if self.distance == 0.0 {
            self.distance = other.distance;
        }
        self.ad_damage += other.ad_damage;
        self.element_damage_cut += other.element_damage_cut;
    }

    /// Lowest and highest possible damage for this context.
    pub fn calculate(&self, state: &BattleState) -> Result<(f64, f64), EngineError> {
        self.calculate_with(state, &EngineConfig::default())
    }

    pub fn calculate_with(
        &self,
        state: &BattleState,
        config: &EngineConfig,
    ) -> Result<(f64, f64), EngineError> {
        let low = self.evaluate(state, config, config.skill_roll_low, -config.damage_spread)?;
        let high = self.evaluate(state, config, config.skill_roll_high, config.damage_spread)?;
        Ok((low, high))
    }

    /// Attack of the attacker plus a share of its unison partner's.
    pub fn base_attack(
        &self,
        state: &BattleState,
        config: &EngineConfig,
    ) -> Result<f64, EngineError> {
        let slot = self
            .attacker
            .as_deref()
            .and_then(|id| state.party.index_of(id))
            .ok_or(EngineError::MissingAttacker)?;
        let mut attack = state.party.attack(slot);
        if position_of(slot) != Position::Unison {
            let partner = unison_index(main_index(slot));
            if state.party.member(partner).is_some() {
                attack += state.party.attack(partner) * config.unison_attack_share;
            }
        }
        Ok(attack)
    }

    fn evaluate(
        &self,
        state: &BattleState,
        config: &EngineConfig,
        skill_roll: f64,
        spread: f64,
    ) -> Result<f64, EngineError> {
        let attack = self.base_attack(state, config)?;
        let slot = self
            .attacker
            .as_deref()
            .and_then(|id| state.party.index_of(id))
            .ok_or(EngineError::MissingAttacker)?;
        let character = state
            .party
            .member(slot)
            .ok_or(EngineError::MissingAttacker)?;

        let mut dmg = attack * (1.0 + self.attack_modifier.max(-0.5));
        if self.source == Some(DamageSource::Skill) {
            dmg += skill_roll + character.skill_base_damage;
        }
        if self.weak {
            dmg *= 1.5;
        }
        if self.total_resist > 0.0 {
            dmg *= 1.0 / (1.0 + self.total_resist);
        } else {
            dmg *= 1.0 - self.total_resist;
        }
        if self.downed {
            dmg *= 1.5 * (1.0 + self.pinch_slayer);
        }
        dmg *= 1.0 + self.condition_slayer;
        dmg *= 1.0 + self.character_slayer;
        dmg *= 1.0 + self.adversity * self.attacker_fraction_health_lost;

        match self.source {
            Some(DamageSource::DirectAttack) => {
                let times = f64::from(self.additional_da_times.max(1));
                dmg *= (1.0 + self.da_damage)
                    * self.da_resist_mult
                    * (1.0 + self.additional_da_damage)
                    / times;
            }
            Some(DamageSource::PowerFlip { charge_level }) => {
                dmg *= (1.0 + self.pf_damage) * self.pf_resist_mult;
                if charge_level > 0 {
                    let mut bonus = pf_charge_bonus(character.pf_kind, charge_level, &self.bow_hits);
                    if charge_level == 3 {
                        bonus *= 1.0 + self.pf_lv_slayer;
                    }
                    dmg *= 1.0 + bonus;
                }
            }
            Some(DamageSource::Skill) => {
                let mut skill = (1.0 + self.sd_damage)
                    * self.sd_resist_mult
                    * self.skill_multiplier
                    * (1.0 + self.skill_slayer);
                if self.combo_bonus {
                    skill *= 1.0 + 0.005 * self.current_combos;
                }
                if self.coffin_count_bonus {
                    skill *= 1.0 + 0.026 * self.coffin_counts;
                }
                if self.buff_count_bonus {
                    skill *= 1.0 + 0.1 * self.buff_counts;
                }
                if self.range_bonus {
                    skill *= 1.0 + (self.distance * self.distance / 700.0).min(0.5);
                }
                dmg *= skill;
            }
            Some(DamageSource::AbilityDirect) => {
                dmg *= (1.0 + self.ad_damage) * self.ad_resist_mult;
            }
            None => {}
        }

        dmg *= 1.0 + spread;
        dmg -= self.element_damage_cut;
        Ok(dmg)
    }

    /// Non-default fields with display labels. Debug output only, not
    /// guaranteed to list everything.
    pub fn summary(&self) -> Vec<(String, f64)> {
        let mut out = Vec::new();
        for (column, charge) in self.skill_charge.iter().enumerate() {
            if *charge != 0.0 {
                out.push((format!("SKILL_CHARGE_{}", column + 1), *charge));
            }
        }
        for (column, speed) in self.skill_charge_speed.iter().enumerate() {
            if *speed != 1.0 {
                out.push((format!("SKILL_CHARGE_SPEED_{}", column + 1), *speed));
            }
        }
        for (column, max) in self.skill_gauge_max.iter().enumerate() {
            if *max != 100.0 {
                out.push((format!("SKILL_GAUGE_MAX_{}", column + 1), *max));
            }
        }
        for element in Element::ALL {
            let resist = self.element_resist(element);
            if resist != 1.0 {
                out.push((format!("{}_RESIST", element.label()), resist));
            }
        }
        let mut push = |label: &str, value: f64, default: f64| {
            if value != default {
                out.push((label.to_string(), value));
            }
        };
        push("COMBO", self.combo, 0.0);
        push("PF_COMBO_REDUCTION", self.pf_combo_reduction[2], 0.0);
        push("ATTACK_BUFF_EXTENSION", self.attack_buff_extension, 1.0);
        push("PIERCE_BUFF_EXTENSION", self.pierce_buff_extension, 1.0);
        push("FEVER_GAIN", self.fever_gain, 1.0);
        push("PF_RESIST", self.pf_resist_mult, 1.0);
        push("DA_RESIST", self.da_resist_mult, 1.0);
        push("SD_RESIST", self.sd_resist_mult, 1.0);
        push("AD_RESIST", self.ad_resist_mult, 1.0);
        push("ATTACK_MODIFIER", self.attack_modifier, 0.0);
        push("TOTAL_RESIST", self.total_resist, 0.0);
        push("DOWNED_SLAYER", self.pinch_slayer, 0.0);
        push("CONDITION_SLAYER", self.condition_slayer, 0.0);
        push("CHARACTER_SLAYER", self.character_slayer, 0.0);
        push("DA_DAMAGE", self.da_damage, 0.0);
        push("ADDITIONAL_DA_DAMAGE", self.additional_da_damage, 0.0);
        push("ADDITIONAL_DA_TIMES", f64::from(self.additional_da_times), 1.0);
        push("PF_DAMAGE", self.pf_damage, 0.0);
        push("PF_LV_SLAYER", self.pf_lv_slayer, 0.0);
        push("PF_LV", f64::from(self.pf_lv_slayer_level), 0.0);
        push("SD_DAMAGE", self.sd_damage, 0.0);
        push("AD_DAMAGE", self.ad_damage, 0.0);
        push("PIERCE", if self.pierce_active { 1.0 } else { 0.0 }, 0.0);
        for (slot, hp) in self.increased_hp.iter().enumerate() {
            if *hp != 1.0 {
                out.push((format!("HP_{}", slot + 1), *hp));
            }
        }
        out
    }
}

/// Extra damage weight of a charged powerflip. Bow flips sum the weights of
/// the zones that were struck.
pub fn pf_charge_bonus(kind: PowerFlipKind, charge_level: u8, bow_hits: &[bool; 5]) -> f64 {
    match (kind, charge_level) {
        (_, 0) => 0.0,
        (PowerFlipKind::Sword, 1) => 2.75 * 3.0,
        (PowerFlipKind::Sword, 2) => 3.5 * 4.0,
        (PowerFlipKind::Sword, _) => 5.5 * 5.0,
        (PowerFlipKind::Fist, 1) => 2.8 + 0.9 * 3.0,
        (PowerFlipKind::Fist, 2) => 5.8 + 1.2 * 4.0,
        (PowerFlipKind::Fist, _) => 12.5 + 1.5 * 5.0,
        (PowerFlipKind::Special, 1) => 5.0,
        (PowerFlipKind::Special, 2) => 7.0,
        (PowerFlipKind::Special, _) => 13.0,
        (PowerFlipKind::Support, 3) => 4.0,
        (PowerFlipKind::Support, _) => 0.0,
        (PowerFlipKind::Bow, level) => {
            let weights: [f64; 5] = match level {
                1 => [0.0, 0.0, 1.83 * 3.0, 0.0, 0.0],
                2 => [0.0, 0.5 * 2.0, 2.0 * 4.0, 0.5 * 2.0, 0.0],
                _ => [0.5 * 2.0, 1.0 * 3.0, 2.5 * 4.0, 1.0 * 3.0, 0.5 * 2.0],
            };
            weights
                .iter()
                .zip(bow_hits)
                .filter(|(_, hit)| **hit)
                .map(|(weight, _)| weight)
                .sum()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Character, PowerFlipKind};
    use std::sync::Arc;

    fn state_with(attack: f64, kind: PowerFlipKind) -> BattleState {
        let mut character = Character::new("hero", Element::Fire, kind);
        character.base_attack = attack;
        character.skill_base_damage = 10.0;
        let mut state = BattleState::new();
        state
            .party
            .set_member(Arc::new(character), Position::Leader, 0, 10, 0)
            .unwrap();
        state
    }

    fn close(lhs: f64, rhs: f64) -> bool {
        (lhs - rhs).abs() < 1e-9
    }

    #[test]
    fn plain_context_spans_five_percent() {
        let state = state_with(1000.0, PowerFlipKind::Sword);
        let ctx = DamageContext::for_attacker("hero");
        let (low, high) = ctx.calculate(&state).unwrap();
        assert!(close(low, 950.0));
        assert!(close(high, 1050.0));
    }

    #[test]
    fn attack_modifier_is_floored_at_half() {
        let state = state_with(1000.0, PowerFlipKind::Sword);
        let mut ctx = DamageContext::for_attacker("hero");
        ctx.attack_modifier = -0.9;
        let (low, _) = ctx.calculate(&state).unwrap();
        assert!(close(low, 475.0));
    }

    #[test]
    fn unison_partner_adds_a_quarter() {
        let mut state = state_with(1000.0, PowerFlipKind::Sword);
        let mut partner = Character::new("partner", Element::Water, PowerFlipKind::Bow);
        partner.base_attack = 400.0;
        state
            .party
            .set_member(Arc::new(partner), Position::Unison, 0, 10, 0)
            .unwrap();
        let ctx = DamageContext::for_attacker("hero");
        let attack = ctx.base_attack(&state, &EngineConfig::default()).unwrap();
        assert!(close(attack, 1100.0));
    }

    #[test]
    fn missing_attacker_is_fatal() {
        let state = BattleState::new();
        let ctx = DamageContext::default();
        assert_eq!(ctx.calculate(&state), Err(EngineError::MissingAttacker));
    }

    #[test]
    fn resist_branches() {
        let state = state_with(1000.0, PowerFlipKind::Sword);
        let mut ctx = DamageContext::for_attacker("hero");
        ctx.total_resist = 1.0;
        let (low, _) = ctx.calculate(&state).unwrap();
        assert!(close(low, 475.0));
        ctx.total_resist = -0.5;
        let (low, _) = ctx.calculate(&state).unwrap();
        assert!(close(low, 1425.0));
    }

    #[test]
    fn direct_attack_divides_by_extra_hits() {
        let state = state_with(1000.0, PowerFlipKind::Sword);
        let mut ctx = DamageContext::for_attacker("hero");
        ctx.source = Some(DamageSource::DirectAttack);
        ctx.da_damage = 0.5;
        ctx.additional_da_damage = 1.0;
        ctx.additional_da_times = 2;
        let (low, _) = ctx.calculate(&state).unwrap();
        // 1000 * 1.5 * 2 / 2 * 0.95
        assert!(close(low, 1425.0));
        ctx.additional_da_times = 0;
        let (low, _) = ctx.calculate(&state).unwrap();
        assert!(close(low, 2850.0));
    }

    #[test]
    fn powerflip_slayer_only_boosts_charge_three() {
        let state = state_with(100.0, PowerFlipKind::Special);
        let mut ctx = DamageContext::for_attacker("hero");
        ctx.pf_lv_slayer = 1.0;
        ctx.source = Some(DamageSource::PowerFlip { charge_level: 2 });
        let (low, _) = ctx.calculate(&state).unwrap();
        assert!(close(low, 100.0 * 8.0 * 0.95));
        ctx.source = Some(DamageSource::PowerFlip { charge_level: 3 });
        let (low, _) = ctx.calculate(&state).unwrap();
        assert!(close(low, 100.0 * 27.0 * 0.95));
    }

    #[test]
    fn skill_damage_uses_roll_and_bonuses() {
        let state = state_with(100.0, PowerFlipKind::Sword);
        let mut ctx = DamageContext::for_attacker("hero");
        ctx.source = Some(DamageSource::Skill);
        ctx.skill_multiplier = 2.0;
        ctx.range_bonus = true;
        ctx.distance = 100.0;
        let (low, high) = ctx.calculate(&state).unwrap();
        // (100 + 0 + 10) * 2 * 1.5 * 0.95 and (100 + 2 + 10) * 2 * 1.5 * 1.05
        assert!(close(low, 313.5));
        assert!(close(high, 352.8));
    }

    #[test]
    fn element_damage_cut_is_subtracted_last() {
        let state = state_with(1000.0, PowerFlipKind::Sword);
        let mut ctx = DamageContext::for_attacker("hero");
        ctx.element_damage_cut = 50.0;
        let (low, high) = ctx.calculate(&state).unwrap();
        assert!(close(low, 900.0));
        assert!(close(high, 1000.0));
    }

    #[test]
    fn pf_table_matches_game_constants() {
        let middle = [false, false, true, false, false];
        let all = [true; 5];
        assert!(close(pf_charge_bonus(PowerFlipKind::Sword, 3, &middle), 27.5));
        assert!(close(pf_charge_bonus(PowerFlipKind::Fist, 2, &middle), 10.6));
        assert!(close(pf_charge_bonus(PowerFlipKind::Bow, 1, &middle), 5.49));
        assert!(close(pf_charge_bonus(PowerFlipKind::Bow, 2, &all), 10.0));
        assert!(close(pf_charge_bonus(PowerFlipKind::Bow, 3, &all), 18.0));
        assert!(close(pf_charge_bonus(PowerFlipKind::Support, 2, &all), 0.0));
        assert!(close(pf_charge_bonus(PowerFlipKind::Support, 3, &all), 4.0));
        assert!(close(pf_charge_bonus(PowerFlipKind::Special, 0, &all), 0.0));
    }

    #[test]
    fn combine_respects_baselines_and_first_writers() {
        let mut lhs = DamageContext::default();
        lhs.da_resist_mult = 1.2;
        lhs.distance = 5.0;
        let mut rhs = DamageContext::default();
        rhs.da_resist_mult = 0.9;
        rhs.ad_resist_mult = 1.1;
        rhs.distance = 9.0;
        rhs.pf_lv_slayer_level = 3;
        rhs.skill_gauge_max[1] = 200.0;
        rhs.additional_da_times = 2;
        lhs.combine(&rhs);
        assert!(close(lhs.da_resist_mult, 1.1));
        assert!(close(lhs.ad_resist_mult, 1.1));
        assert_eq!(lhs.distance, 5.0);
        assert_eq!(lhs.pf_lv_slayer_level, 3);
        assert_eq!(lhs.skill_gauge_max, [100.0, 200.0, 100.0]);
        assert_eq!(lhs.additional_da_times, 2);
    }

    #[test]
    fn summary_lists_changed_fields() {
        let mut ctx = DamageContext::default();
        assert!(ctx.summary().is_empty());
        ctx.pf_damage = 0.3;
        ctx.skill_charge[0] = 0.5;
        let summary = ctx.summary();
        assert!(summary.contains(&("PF_DAMAGE".to_string(), 0.3)));
        assert!(summary.contains(&("SKILL_CHARGE_1".to_string(), 0.5)));
    }
}
