use flipcalc_core::{Element, PowerFlipKind, TriggerKind};
use flipcalc_data::{load_catalog, resolve_key, Catalog};
use std::path::PathBuf;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn catalog() -> Catalog {
    load_catalog(&fixtures()).expect("load catalog")
}

#[test]
fn loads_every_character() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 4);
    let ids: Vec<&str> = catalog.characters().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["100001", "100002", "100003", "100004"]);
}

#[test]
fn character_columns_are_parsed() {
    let catalog = catalog();
    let hero = catalog.find("100001").expect("hero");
    assert_eq!(hero.internal_name, "fire_hero");
    assert_eq!(hero.name, "Blaze");
    assert_eq!(hero.stars, 5);
    assert_eq!(hero.element, Element::Fire);
    assert_eq!(hero.pf_kind, PowerFlipKind::Sword);
    assert_eq!(hero.races, vec!["Human".to_string(), "Elf".to_string()]);
    assert_eq!(hero.base_attack, 500.0);
    assert_eq!(hero.base_hp, 3000.0);
    assert_eq!(hero.skill_base_damage, 1200.0);
}

#[test]
fn empty_skill_damage_defaults_to_zero() {
    let mage = catalog().find("water_mage").expect("mage");
    assert_eq!(mage.pf_kind, PowerFlipKind::Bow);
    assert_eq!(mage.skill_base_damage, 0.0);
}

#[test]
fn abilities_keep_board_positions() {
    let mage = catalog().find("Mizu").expect("mage");
    assert_eq!(mage.abilities.len(), 5);
    assert_eq!(mage.abilities[0].len(), 1);
    assert_eq!(mage.abilities[1].len(), 2);
    assert!(mage.abilities[2..].iter().all(Vec::is_empty));
    let record = &mage.abilities[1][0];
    assert_eq!(record.name(), "water_mage_ab2");
    assert_eq!(record.trigger_kind(), TriggerKind::Main);
    assert_eq!(record.effect_index(), "209");

    let girl = catalog().find("Gale").expect("girl");
    assert_eq!(girl.abilities[0][0].trigger_kind(), TriggerKind::Continuous);
    assert_eq!(girl.abilities[0][0].effect_index(), "45");
}

#[test]
fn find_tries_id_internal_and_display_names() {
    let catalog = catalog();
    for key in ["100002", "water_mage", "Mizu"] {
        assert_eq!(catalog.find(key).expect(key).id, "100002");
    }
}

#[test]
fn find_strips_variant_suffix() {
    let catalog = catalog();
    assert_eq!(catalog.find("fire_hero_2").expect("suffix").id, "100001");
    assert_eq!(catalog.find("Blaze3").expect("suffix").id, "100001");
    assert_eq!(catalog.find("wind_girl_12").expect("suffix").id, "100003");
    assert!(catalog.find("nobody_2").is_none());
    assert!(catalog.find("7").is_none());
    assert!(catalog.find("").is_none());
}

#[test]
fn resolve_key_names_the_missing_key() {
    let err = resolve_key(&catalog(), "ghost").expect_err("missing");
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn missing_directory_reports_the_path() {
    let err = load_catalog(&fixtures().join("nope")).expect_err("missing dir");
    assert!(format!("{err:#}").contains("character.json"));
}
