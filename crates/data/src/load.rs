use crate::schema::{
    Catalog, NestedRowTable, RowTable, Scenario, ABILITY_FILE, ACTION_SKILL_FILE,
    CHARACTER_FILE, CHARACTER_STATUS_FILE, CHARACTER_TEXT_FILE, EMPTY_ABILITY_ID,
};
use anyhow::{bail, Context};
use flipcalc_core::{
    slot_index, AbilityRecord, BattleState, Character, DamageSource, Element, PowerFlipKind,
    ABILITY_SLOTS, MAX_CHARGE_LEVEL,
};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

const COL_INTERNAL_NAME: usize = 0;
const COL_STARS: usize = 2;
const COL_ELEMENT: usize = 3;
const COL_RACES: usize = 4;
const COL_POWER_FLIP: usize = 6;
const COL_FIRST_ABILITY: usize = 11;
const ABILITY_COLUMNS: usize = 5;

const STATUS_BASE_LEVEL: &str = "10";
const SKILL_BASE_RANK: &str = "1";
const SKILL_BASE_DAMAGE: usize = 10;

/// Reads every character table under `dir` and links abilities to their
/// owners.
pub fn load_catalog(dir: &Path) -> anyhow::Result<Catalog> {
    let characters: RowTable = load_json(dir.join(CHARACTER_FILE))?;
    let texts: RowTable = load_json(dir.join(CHARACTER_TEXT_FILE))?;
    let status: NestedRowTable = load_json(dir.join(CHARACTER_STATUS_FILE))?;
    let skills: NestedRowTable = load_json(dir.join(ACTION_SKILL_FILE))?;
    let abilities: RowTable = load_json(dir.join(ABILITY_FILE))?;

    let mut catalog = Catalog::new();
    for (id, rows) in &characters {
        let character = parse_character(id, rows, &texts, &status, &skills, &abilities)
            .with_context(|| format!("character {id}"))?;
        catalog.insert(character);
    }
    info!(
        characters = catalog.len(),
        dir = %dir.display(),
        "catalog loaded"
    );
    Ok(catalog)
}

fn parse_character(
    id: &str,
    rows: &[Vec<String>],
    texts: &RowTable,
    status: &NestedRowTable,
    skills: &NestedRowTable,
    abilities: &RowTable,
) -> anyhow::Result<Character> {
    let Some(row) = rows.first() else {
        bail!("empty character row");
    };
    let element_id = column(row, COL_ELEMENT)?;
    let Some(element) = Element::from_character_id(element_id) else {
        bail!("unknown element id {element_id:?}");
    };
    let pf_id = column(row, COL_POWER_FLIP)?;
    let Some(pf_kind) = PowerFlipKind::from_character_id(pf_id) else {
        bail!("unknown powerflip id {pf_id:?}");
    };

    let mut character = Character::new(id, element, pf_kind);
    character.internal_name = column(row, COL_INTERNAL_NAME)?.to_string();
    let stars = column(row, COL_STARS)?;
    character.stars = stars
        .parse()
        .with_context(|| format!("stars {stars:?}"))?;
    character.races = column(row, COL_RACES)?
        .split(',')
        .filter(|race| !race.is_empty())
        .map(str::to_string)
        .collect();
    character.name = texts
        .get(id)
        .and_then(|rows| rows.first())
        .and_then(|row| row.first())
        .cloned()
        .with_context(|| format!("missing display name in {CHARACTER_TEXT_FILE}"))?;

    let base = status
        .get(id)
        .and_then(|levels| levels.get(STATUS_BASE_LEVEL))
        .and_then(|rows| rows.first())
        .with_context(|| {
            format!("missing level {STATUS_BASE_LEVEL} in {CHARACTER_STATUS_FILE}")
        })?;
    character.base_attack = parse_stat(base.first().map(String::as_str), "attack")?;
    character.base_hp = parse_stat(base.get(1).map(String::as_str), "hp")?;

    match skills
        .get(&character.internal_name)
        .and_then(|ranks| ranks.get(SKILL_BASE_RANK))
        .and_then(|rows| rows.first())
    {
        Some(skill) => {
            let raw = skill.get(SKILL_BASE_DAMAGE).map_or("", String::as_str);
            if !raw.is_empty() {
                character.skill_base_damage = parse_stat(Some(raw), "skill damage")?;
            }
        }
        None => warn!(id, internal_name = %character.internal_name, "no action skill"),
    }

    for slot in 0..ABILITY_COLUMNS {
        let ability_id = column(row, COL_FIRST_ABILITY + slot)?;
        // Locked slots keep their place so mana board levels line up.
        if ability_id == EMPTY_ABILITY_ID {
            character.abilities.push(Vec::new());
            continue;
        }
        let Some(records) = abilities.get(ability_id) else {
            bail!("ability {ability_id} missing from {ABILITY_FILE}");
        };
        let parsed = records
            .iter()
            .map(|slots| AbilityRecord::from_slots(slots.clone()))
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("ability {ability_id}"))?;
        character.abilities.push(parsed);
    }
    debug!(id, name = %character.name, "character parsed");
    Ok(character)
}

fn column(row: &[String], index: usize) -> anyhow::Result<&str> {
    row.get(index)
        .map(String::as_str)
        .with_context(|| format!("missing column {index}"))
}

fn parse_stat(raw: Option<&str>, what: &str) -> anyhow::Result<f64> {
    let raw = raw.with_context(|| format!("missing {what}"))?;
    let value: i64 = raw
        .trim()
        .parse()
        .with_context(|| format!("{what} {raw:?}"))?;
    Ok(value as f64)
}

pub fn load_scenario(path: &Path) -> anyhow::Result<Scenario> {
    let scenario: Scenario = load_json(path)?;
    if let Some(DamageSource::PowerFlip { charge_level }) = scenario.hit.source {
        if charge_level > MAX_CHARGE_LEVEL {
            bail!(
                "{}: powerflip charge level {charge_level} is above {MAX_CHARGE_LEVEL}",
                path.display()
            );
        }
    }
    Ok(scenario)
}

/// Catalog lookup that reports the key on failure.
pub fn resolve_key(catalog: &Catalog, key: &str) -> anyhow::Result<Arc<Character>> {
    catalog
        .find(key)
        .with_context(|| format!("no character matches {key:?}"))
}

/// Places the scenario party and applies its counters.
pub fn build_state(catalog: &Catalog, scenario: &Scenario) -> anyhow::Result<BattleState> {
    let mut state = BattleState::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for member in &scenario.party {
        let character = resolve_key(catalog, &member.key)?;
        if state.party.index_of(&character.id).is_some() {
            bail!("{} appears twice in the party", member.key);
        }
        if member.ability_levels.len() > ABILITY_SLOTS {
            bail!(
                "{} lists {} ability levels, at most {ABILITY_SLOTS} allowed",
                member.key,
                member.ability_levels.len()
            );
        }
        let target = slot_index(member.position, member.column)
            .with_context(|| format!("place {}", member.key))?;
        if state.party.member(target).is_some() {
            bail!("{} would replace another member in slot {target}", member.key);
        }
        let slot = state
            .party
            .set_member(
                character,
                member.position,
                member.column,
                member.level,
                member.uncaps,
            )
            .with_context(|| format!("place {}", member.key))?;
        for (ability, level) in member.ability_levels.iter().enumerate() {
            state.party.set_ability_level(slot, ability, *level)?;
        }
        // Also refreshes hp now that evolution is known.
        state.party.set_skill_level(slot, member.skill_level)?;
        slots.insert(member.key.as_str(), slot);
    }
    let slot_of = |key: &str| -> anyhow::Result<usize> {
        slots
            .get(key)
            .copied()
            .with_context(|| format!("{key} is not in the party"))
    };

    let counters = &scenario.counters;
    if let Some(seconds) = counters.seconds_passed {
        state.seconds_passed = seconds;
    }
    for (level, count) in counters.powerflips.iter().enumerate() {
        state.set_powerflips(level + 1, *count)?;
    }
    for (key, count) in &counters.skill_activations {
        state.set_skill_activations(slot_of(key)?, *count)?;
    }
    for (key, count) in &counters.skill_hits {
        state.set_skill_hits(slot_of(key)?, *count)?;
    }
    for active in &counters.active_abilities {
        state.set_ability_active(slot_of(&active.member)?, active.ability_slot, true)?;
    }
    state.times_skill_reached_100 = counters.times_skill_reached_100;
    state.skill_charge = counters.skill_charge;
    state.total_ball_flips = counters.ball_flips;
    state.direct_hits = counters.direct_hits;
    state.multiballs = counters.multiballs;
    for (threshold, times) in &counters.combos {
        state.record_combo(*threshold, *times);
    }
    state.fever_active = counters.fever;
    state.pierce_active = counters.pierce;
    state.buffs = counters.buffs.clone();
    for (column, hp) in &counters.current_hp {
        state.party.set_current_hp(*column, *hp)?;
    }
    state.enemy = scenario.enemy.clone();
    Ok(state)
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
