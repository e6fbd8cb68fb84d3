use crate::{Character, EngineError, Position};
use std::sync::Arc;

pub const PARTY_SLOTS: usize = 6;
pub const PARTY_COLUMNS: usize = 3;
pub const ABILITY_SLOTS: usize = 6;
/// Mana board levels run 0 (locked) to 6.
pub const MAX_ABILITY_LEVEL: u8 = 6;

// Slot layout: 0 leader, then (main, unison) pairs per column.
//   0 leader   1 unison   (column 0)
//   2 main     3 unison   (column 1)
//   4 main     5 unison   (column 2)

pub fn main_index(slot: usize) -> usize {
    slot - slot % 2
}

pub fn unison_index(slot: usize) -> usize {
    slot | 1
}

pub fn column_of(slot: usize) -> usize {
    slot / 2
}

pub fn position_of(slot: usize) -> Position {
    if slot == 0 {
        Position::Leader
    } else if slot % 2 == 0 {
        Position::Main
    } else {
        Position::Unison
    }
}

pub fn slot_index(position: Position, column: usize) -> Result<usize, EngineError> {
    let slot = match position {
        Position::Leader => 0,
        Position::Main => column * 2,
        Position::Unison => column * 2 + 1,
    };
    if column >= PARTY_COLUMNS || slot >= PARTY_SLOTS {
        return Err(EngineError::InvalidSlot(slot));
    }
    Ok(slot)
}

#[derive(Debug, Clone)]
pub struct Party {
    members: [Option<Arc<Character>>; PARTY_SLOTS],
    pub levels: [u32; PARTY_SLOTS],
    pub uncaps: [u32; PARTY_SLOTS],
    pub ability_levels: [[u8; ABILITY_SLOTS]; PARTY_SLOTS],
    pub skill_levels: [u8; PARTY_SLOTS],
    pub max_hp: [f64; PARTY_COLUMNS],
    pub current_hp: [f64; PARTY_COLUMNS],
}

impl Default for Party {
    fn default() -> Self {
        Self {
            members: Default::default(),
            levels: [1; PARTY_SLOTS],
            uncaps: [0; PARTY_SLOTS],
            ability_levels: [[0; ABILITY_SLOTS]; PARTY_SLOTS],
            skill_levels: [0; PARTY_SLOTS],
            max_hp: [0.0; PARTY_COLUMNS],
            current_hp: [0.0; PARTY_COLUMNS],
        }
    }
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member(&self, slot: usize) -> Option<&Arc<Character>> {
        self.members.get(slot).and_then(Option::as_ref)
    }

    pub fn leader(&self) -> Option<&Arc<Character>> {
        self.member(0)
    }

    pub fn is_empty(&self) -> bool {
        self.members.iter().all(Option::is_none)
    }

    /// Occupied slots in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Arc<Character>)> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter_map(|(slot, member)| member.as_ref().map(|character| (slot, character)))
    }

    pub fn index_of(&self, character_id: &str) -> Option<usize> {
        self.occupied()
            .find(|(_, character)| character.id == character_id)
            .map(|(slot, _)| slot)
    }

    pub fn position(&self, character_id: &str) -> Option<Position> {
        self.index_of(character_id).map(position_of)
    }

    /// Places `character`. A character already in the party is moved by
    /// swapping with whatever sits in the destination; it keeps its ability
    /// levels and takes the new level and uncaps.
    pub fn set_member(
        &mut self,
        character: Arc<Character>,
        position: Position,
        column: usize,
        level: u32,
        uncaps: u32,
    ) -> Result<usize, EngineError> {
        let (position, column) = match position {
            Position::Leader => (Position::Main, 0),
            other => (other, column),
        };
        let slot = slot_index(position, column)?;
        if let Some(existing) = self.index_of(&character.id) {
            if existing != slot {
                self.swap(existing, slot)?;
            }
            self.levels[slot] = level;
            self.uncaps[slot] = uncaps;
            self.refresh_hp();
            return Ok(slot);
        }
        self.members[slot] = Some(character);
        self.levels[slot] = level;
        self.uncaps[slot] = uncaps;
        self.ability_levels[slot] = [0; ABILITY_SLOTS];
        self.refresh_hp();
        Ok(slot)
    }

    pub fn clear_slot(&mut self, slot: usize) -> Result<(), EngineError> {
        if slot >= PARTY_SLOTS {
            return Err(EngineError::InvalidSlot(slot));
        }
        self.members[slot] = None;
        self.levels[slot] = 1;
        self.uncaps[slot] = 0;
        self.ability_levels[slot] = [0; ABILITY_SLOTS];
        self.skill_levels[slot] = 0;
        self.refresh_hp();
        Ok(())
    }

    pub fn swap(&mut self, from: usize, to: usize) -> Result<(), EngineError> {
        for slot in [from, to] {
            if slot >= PARTY_SLOTS {
                return Err(EngineError::InvalidSlot(slot));
            }
        }
        self.members.swap(from, to);
        self.levels.swap(from, to);
        self.uncaps.swap(from, to);
        self.ability_levels.swap(from, to);
        self.skill_levels.swap(from, to);
        self.refresh_hp();
        Ok(())
    }

    pub fn set_ability_level(
        &mut self,
        slot: usize,
        ability: usize,
        level: u8,
    ) -> Result<(), EngineError> {
        if level > MAX_ABILITY_LEVEL {
            return Err(EngineError::InvalidAbilityLevel(level));
        }
        let entry = self
            .ability_levels
            .get_mut(slot)
            .and_then(|levels| levels.get_mut(ability))
            .ok_or(EngineError::InvalidSlot(slot))?;
        *entry = level;
        Ok(())
    }

    pub fn set_skill_level(&mut self, slot: usize, level: u8) -> Result<(), EngineError> {
        let entry = self
            .skill_levels
            .get_mut(slot)
            .ok_or(EngineError::InvalidSlot(slot))?;
        *entry = level;
        self.refresh_hp();
        Ok(())
    }

    pub fn set_current_hp(&mut self, column: usize, hp: f64) -> Result<(), EngineError> {
        let entry = self
            .current_hp
            .get_mut(column)
            .ok_or(EngineError::InvalidSlot(column * 2))?;
        *entry = hp;
        Ok(())
    }

    /// A unit evolves once its first three abilities and its skill are
    /// unlocked.
    pub fn is_evolved(&self, slot: usize) -> bool {
        match (self.ability_levels.get(slot), self.skill_levels.get(slot)) {
            (Some(levels), Some(skill)) => levels[..3].iter().all(|lv| *lv >= 1) && *skill >= 1,
            _ => false,
        }
    }

    pub fn attack(&self, slot: usize) -> f64 {
        self.member(slot).map_or(0.0, |character| {
            character.attack(self.is_evolved(slot), self.levels[slot], self.uncaps[slot])
        })
    }

    pub fn hp(&self, slot: usize) -> f64 {
        self.member(slot).map_or(0.0, |character| {
            character.hp(self.is_evolved(slot), self.levels[slot], self.uncaps[slot])
        })
    }

    /// Column hp is the main's hp plus a quarter of the unison's. Resets
    /// current hp to full.
    fn refresh_hp(&mut self) {
        for column in 0..PARTY_COLUMNS {
            let main = column * 2;
            let max = self.hp(main) + self.hp(main + 1) / 4.0;
            self.max_hp[column] = max;
            self.current_hp[column] = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Element, PowerFlipKind};

    fn unit(id: &str, hp: f64) -> Arc<Character> {
        let mut character = Character::new(id, Element::Fire, PowerFlipKind::Sword);
        character.base_hp = hp;
        Arc::new(character)
    }

    #[test]
    fn index_helpers_follow_layout() {
        assert_eq!(main_index(0), 0);
        assert_eq!(main_index(1), 0);
        assert_eq!(main_index(5), 4);
        assert_eq!(unison_index(2), 3);
        assert_eq!(unison_index(3), 3);
        assert_eq!(column_of(5), 2);
        assert_eq!(position_of(0), Position::Leader);
        assert_eq!(position_of(4), Position::Main);
        assert_eq!(position_of(3), Position::Unison);
        assert_eq!(slot_index(Position::Unison, 2), Ok(5));
        assert!(slot_index(Position::Main, 3).is_err());
    }

    #[test]
    fn set_member_moves_existing_units() {
        let mut party = Party::new();
        let a = unit("a", 100.0);
        let b = unit("b", 100.0);
        party.set_member(a.clone(), Position::Leader, 0, 80, 0).unwrap();
        party.set_member(b.clone(), Position::Unison, 0, 10, 0).unwrap();
        party.set_ability_level(0, 0, 6).unwrap();

        party.set_member(a, Position::Unison, 0, 70, 2).unwrap();
        assert_eq!(party.index_of("a"), Some(1));
        assert_eq!(party.index_of("b"), Some(0));
        assert_eq!(party.levels[1], 70);
        assert_eq!(party.uncaps[1], 2);
        assert_eq!(party.ability_levels[1][0], 6);
        assert_eq!(party.levels[0], 10);
    }

    #[test]
    fn ability_levels_stop_at_six() {
        let mut party = Party::new();
        party.set_ability_level(0, 5, MAX_ABILITY_LEVEL).unwrap();
        assert_eq!(
            party.set_ability_level(0, 0, 7),
            Err(EngineError::InvalidAbilityLevel(7))
        );
        assert_eq!(party.ability_levels[0][0], 0);
        assert_eq!(
            party.set_ability_level(6, 0, 1),
            Err(EngineError::InvalidSlot(6))
        );
    }

    #[test]
    fn column_hp_adds_quarter_of_unison() {
        let mut party = Party::new();
        party.set_member(unit("a", 400.0), Position::Leader, 0, 10, 0).unwrap();
        party.set_member(unit("b", 800.0), Position::Unison, 0, 10, 0).unwrap();
        assert!((party.max_hp[0] - 600.0).abs() < 1e-9);
        assert!((party.current_hp[0] - 600.0).abs() < 1e-9);
        assert_eq!(party.max_hp[1], 0.0);
    }

    #[test]
    fn evolution_needs_three_abilities_and_skill() {
        let mut party = Party::new();
        party.set_member(unit("a", 1.0), Position::Leader, 0, 1, 0).unwrap();
        for ability in 0..3 {
            party.set_ability_level(0, ability, 1).unwrap();
        }
        assert!(!party.is_evolved(0));
        party.set_skill_level(0, 1).unwrap();
        assert!(party.is_evolved(0));
    }
}
