use flipcalc_core::{
    Character, DamageContext, DamageSource, EngineConfig, Enemy, Position, StatusEffectKind,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// `{id: [[column, ...], ...]}` as used by most game tables.
pub type RowTable = BTreeMap<String, Vec<Vec<String>>>;
/// `{id: {level_or_rank: [[column, ...]]}}`.
pub type NestedRowTable = BTreeMap<String, BTreeMap<String, Vec<Vec<String>>>>;

pub const CHARACTER_FILE: &str = "character/character.json";
pub const CHARACTER_TEXT_FILE: &str = "character/character_text.json";
pub const CHARACTER_STATUS_FILE: &str = "character/character_status.json";
pub const ACTION_SKILL_FILE: &str = "skill/action_skill.json";
pub const ABILITY_FILE: &str = "ability/ability.json";

/// Ability ids marking an empty mana board slot.
pub const EMPTY_ABILITY_ID: &str = "(None)";

/// Every playable character, indexed by id, internal name and display name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: BTreeMap<String, Arc<Character>>,
    by_internal_name: HashMap<String, String>,
    by_name: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, character: Character) {
        let id = character.id.clone();
        self.by_internal_name
            .insert(character.internal_name.clone(), id.clone());
        self.by_name.insert(character.name.clone(), id.clone());
        self.characters.insert(id, Arc::new(character));
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn characters(&self) -> impl Iterator<Item = &Arc<Character>> + '_ {
        self.characters.values()
    }

    /// Looks `key` up as an id, internal name, then display name. Keys such
    /// as `fire_girl_2` or `hero3` fall back to the name without the
    /// trailing variant number.
    pub fn find(&self, key: &str) -> Option<Arc<Character>> {
        let mut key = key;
        loop {
            if let Some(found) = self.find_exact(key) {
                return Some(found);
            }
            if !key.ends_with(|c: char| c.is_ascii_digit()) {
                return None;
            }
            let trimmed = &key[..key.len() - 1];
            key = trimmed.strip_suffix('_').unwrap_or(trimmed);
            if key.is_empty() {
                return None;
            }
        }
    }

    fn find_exact(&self, key: &str) -> Option<Arc<Character>> {
        let id = if self.characters.contains_key(key) {
            key
        } else if let Some(id) = self.by_internal_name.get(key) {
            id.as_str()
        } else {
            self.by_name.get(key)?.as_str()
        };
        self.characters.get(id).cloned()
    }
}

/// A battle snapshot to evaluate, as written by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub party: Vec<ScenarioMember>,
    /// Catalog key of the character whose damage is computed.
    pub evaluate: String,
    #[serde(default)]
    pub counters: Counters,
    #[serde(default)]
    pub enemy: Option<Enemy>,
    #[serde(default)]
    pub hit: HitSetup,
    #[serde(default)]
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMember {
    pub key: String,
    pub position: Position,
    #[serde(default)]
    pub column: usize,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub uncaps: u32,
    /// Mana board levels, one per ability slot, 0 meaning locked.
    #[serde(default)]
    pub ability_levels: Vec<u8>,
    #[serde(default)]
    pub skill_level: u8,
}

fn default_level() -> u32 {
    1
}

/// Battle counters. Per-unit maps are keyed by the member's scenario key;
/// per-column arrays run leader column first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Counters {
    pub seconds_passed: Option<i64>,
    /// Powerflips at charge level 1, 2 and 3.
    pub powerflips: [u32; 3],
    pub skill_activations: BTreeMap<String, u32>,
    pub skill_hits: BTreeMap<String, u32>,
    pub times_skill_reached_100: [u32; 3],
    pub skill_charge: [f64; 3],
    pub ball_flips: u32,
    pub direct_hits: [u32; 3],
    pub multiballs: u32,
    /// Combo threshold -> times reached.
    pub combos: BTreeMap<u32, u32>,
    pub fever: bool,
    pub pierce: bool,
    pub buffs: [Vec<StatusEffectKind>; 3],
    pub current_hp: BTreeMap<usize, f64>,
    pub active_abilities: Vec<ActiveAbility>,
}

/// Latches an ability on, as if its timed trigger were currently up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveAbility {
    pub member: String,
    pub ability_slot: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HitSetup {
    pub source: Option<DamageSource>,
    pub weak: bool,
    pub downed: bool,
    pub bow_hits: Option<[bool; 5]>,
    pub current_combos: f64,
    pub distance: f64,
}

impl HitSetup {
    /// Copies the hit description onto a swept context. Combo count and
    /// distance only matter when an ability switched the matching bonus on.
    pub fn apply(&self, ctx: &mut DamageContext) {
        ctx.source = self.source;
        ctx.weak = self.weak;
        ctx.downed = self.downed;
        if let Some(bow_hits) = self.bow_hits {
            ctx.bow_hits = bow_hits;
        }
        ctx.current_combos = self.current_combos;
        if ctx.distance == 0.0 {
            ctx.distance = self.distance;
        }
    }
}
