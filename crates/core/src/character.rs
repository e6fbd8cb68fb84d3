use crate::{AbilityRecord, Element, PowerFlipKind};
use serde::{Deserialize, Serialize};

/// Catalog entry for one playable unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub internal_name: String,
    pub name: String,
    pub stars: u8,
    pub element: Element,
    pub pf_kind: PowerFlipKind,
    #[serde(default)]
    pub races: Vec<String>,
    pub base_attack: f64,
    pub base_hp: f64,
    #[serde(default)]
    pub skill_base_damage: f64,
    /// Ability slot -> the records that make up that ability.
    #[serde(default)]
    pub abilities: Vec<Vec<AbilityRecord>>,
}

impl Character {
    pub fn new(id: &str, element: Element, pf_kind: PowerFlipKind) -> Self {
        Self {
            id: id.to_string(),
            internal_name: id.to_string(),
            name: id.to_string(),
            stars: 5,
            element,
            pf_kind,
            races: Vec::new(),
            base_attack: 0.0,
            base_hp: 0.0,
            skill_base_damage: 0.0,
            abilities: Vec::new(),
        }
    }

    pub fn attack(&self, evolved: bool, level: u32, uncaps: u32) -> f64 {
        let bonus = if evolved {
            match self.stars {
                1 => 30.0,
                2 => 40.0,
                3 => 50.0,
                4 => 54.0,
                _ => 60.0,
            }
        } else {
            0.0
        };
        self.scaled(self.base_attack, level, uncaps) + bonus
    }

    pub fn hp(&self, evolved: bool, level: u32, uncaps: u32) -> f64 {
        let bonus = if evolved {
            match self.stars {
                1 => 150.0,
                2 => 200.0,
                3 => 250.0,
                4 => 270.0,
                _ => 300.0,
            }
        } else {
            0.0
        };
        self.scaled(self.base_hp, level, uncaps) + bonus
    }

    fn scaled(&self, base: f64, level: u32, uncaps: u32) -> f64 {
        let level_mult = match level {
            0..=10 => f64::from(level) / 10.0,
            11..=80 => 1.0 + f64::from(level - 10) / 14.0,
            _ => 6.0 + 3.0 * f64::from(level - 80) / 100.0,
        };
        let uncap_mult = match self.stars {
            1 => 0.4,
            2 => 0.5,
            3 => 0.8,
            4 => 1.5,
            _ => 3.0,
        };
        base * level_mult * (1.0 + f64::from(uncaps) * uncap_mult)
    }
}
