//! Index tables mapping ability record codes to condition and effect
//! behavior. Main and continuous records use separate tables.

use crate::{AbilityRecord, Condition, CountedEvent, Effect, EngineError, TriggerKind};

pub fn main_condition(index: &str) -> Option<Condition> {
    let condition = match index {
        "0" => Condition::BattleStart,
        "1" => Condition::EveryN(CountedEvent::Powerflips),
        "100" => Condition::EveryN(CountedEvent::OwnerSkillHits),
        "3" => Condition::EveryN(CountedEvent::BallFlips),
        "18" => Condition::SkillInvoke,
        "19" => Condition::SkillGaugeFull,
        "24" => Condition::AttackBuffActivated,
        "4" => Condition::InFever,
        "50" => Condition::PartyMembers,
        "58" => Condition::Lv3Powerflips,
        "7" => Condition::ComboReached,
        // 2, 13, 20 and 22 appear in the tables but their meaning is not
        // confirmed; they stay unregistered so records using them fail loudly.
        _ => return None,
    };
    Some(condition)
}

pub fn continuous_condition(index: &str) -> Option<Condition> {
    let condition = match index {
        "0" => Condition::HpAbove,
        "5" => Condition::MultiballsAbove,
        "8" => Condition::AnyBuffActive,
        "9" => Condition::AttackBuffActive,
        "30" => Condition::PierceActive,
        "37" => Condition::AttackBuffCount,
        "105" => Condition::SkillGaugeAbove,
        "134" => Condition::EnemyDebuffCount,
        _ => return None,
    };
    Some(condition)
}

pub fn main_effect_chain(index: &str) -> Option<&'static [Effect]> {
    use Effect::*;
    let chain: &'static [Effect] = match index {
        "0" => &[ActiveForSeconds, Attack],
        "31" => &[Attack],
        "1" | "33" => &[SkillDamage],
        "107" => &[FireResistDebuffSlayer],
        "116" => &[PoisonSlayer],
        "118" => &[SlowSlayer],
        "144" => &[PoisonDirectAttack],
        "510" => &[PoisonAttack],
        "152" => &[Lv3PowerFlipDamage],
        "156" => &[AttackBuffExtend],
        // 158 (pierce extend) is known to exist but is not modeled yet.
        "158" => &[],
        "198" => &[PowerFlipComboReduction],
        "203" => &[IncreaseHp],
        "209" => &[SkillCharge],
        "243" => &[SecondSkillGauge],
        "224" => &[Combo],
        "249" => &[InstantDamage],
        "26" => &[ActiveForSeconds, Pierce],
        "28" => &[ActiveForSeconds, PowerFlipDamage],
        "54" => &[PowerFlipDamage],
        "36" => &[FireResist],
        "49" => &[FeverGain],
        _ => return None,
    };
    Some(chain)
}

pub fn continuous_effect_chain(index: &str) -> Option<&'static [Effect]> {
    use Effect::*;
    let chain: &'static [Effect] = match index {
        "0" | "258" => &[Attack],
        "1" | "159" => &[DirectAttackDamage],
        "3" => &[SkillChargeRate],
        "5" => &[FireResist],
        "45" => &[AdditionalDirectAttack],
        _ => return None,
    };
    Some(chain)
}

/// Condition for `record`, or `UnknownCondition` naming the ability.
pub fn lookup_condition(record: &AbilityRecord) -> Result<Condition, EngineError> {
    let index = record.condition_index();
    let found = match record.trigger_kind() {
        TriggerKind::Main => main_condition(index),
        TriggerKind::Continuous => continuous_condition(index),
    };
    found.ok_or_else(|| EngineError::UnknownCondition {
        ability: record.name().to_string(),
        index: index.to_string(),
    })
}

/// Effect chain for `record`. Unregistered and empty chains are both
/// `UnknownEffect`.
pub fn lookup_effects(record: &AbilityRecord) -> Result<&'static [Effect], EngineError> {
    let index = record.effect_index();
    let found = match record.trigger_kind() {
        TriggerKind::Main => main_effect_chain(index),
        TriggerKind::Continuous => continuous_effect_chain(index),
    };
    match found {
        Some(chain) if !chain.is_empty() => Ok(chain),
        _ => Err(EngineError::UnknownEffect {
            ability: record.name().to_string(),
            index: index.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_indices_name_the_ability() {
        let record = AbilityRecord::builder("mystery", TriggerKind::Main)
            .condition("999", "", "", 0, 0)
            .effect("31", "", "", 0, 0)
            .build();
        assert_eq!(
            lookup_condition(&record),
            Err(EngineError::UnknownCondition {
                ability: "mystery".to_string(),
                index: "999".to_string(),
            })
        );
        assert!(lookup_effects(&record).is_ok());
    }

    #[test]
    fn tables_are_split_by_trigger_kind() {
        assert_eq!(main_condition("0"), Some(Condition::BattleStart));
        assert_eq!(continuous_condition("0"), Some(Condition::HpAbove));
        assert_eq!(continuous_effect_chain("31"), None);
        assert_eq!(main_effect_chain("45"), None);
    }

    #[test]
    fn unconfirmed_indices_are_fatal() {
        for index in ["2", "13", "20", "22"] {
            let record = AbilityRecord::builder("guess", TriggerKind::Main)
                .condition(index, "", "", 0, 0)
                .effect("31", "", "", 0, 0)
                .build();
            assert_eq!(
                lookup_condition(&record),
                Err(EngineError::UnknownCondition {
                    ability: "guess".to_string(),
                    index: index.to_string(),
                })
            );
        }
        let record = AbilityRecord::builder("guess", TriggerKind::Main)
            .condition("0", "", "", 0, 0)
            .effect("158", "", "", 0, 0)
            .build();
        assert_eq!(main_effect_chain("158"), Some(&[][..]));
        assert_eq!(
            lookup_effects(&record),
            Err(EngineError::UnknownEffect {
                ability: "guess".to_string(),
                index: "158".to_string(),
            })
        );
    }
}
