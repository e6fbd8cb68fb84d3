//! Which party slots a condition checks or an effect lands on.

use crate::{main_index, position_of, unison_index, Element, Party};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetCode {
    /// Empty code. Applies around the owner's column.
    Global,
    /// `0`: the ability owner.
    Owner,
    /// `1`: everyone except the owner.
    AllOthers,
    /// `2`: slot 0.
    Leader,
    /// `5`: everyone matching the element filter.
    ElementalSubset,
    /// `7`: whichever unit tripped the condition.
    TriggeringUnit,
    /// `8`: multiball targets, never resolved.
    Multiball,
}

impl TargetCode {
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "" => Some(Self::Global),
            "0" => Some(Self::Owner),
            "1" => Some(Self::AllOthers),
            "2" => Some(Self::Leader),
            "5" => Some(Self::ElementalSubset),
            "7" => Some(Self::TriggeringUnit),
            "8" => Some(Self::Multiball),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Global => "",
            Self::Owner => "0",
            Self::AllOthers => "1",
            Self::Leader => "2",
            Self::ElementalSubset => "5",
            Self::TriggeringUnit => "7",
            Self::Multiball => "8",
        }
    }
}

/// The two fixed points every resolution is relative to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub owner: usize,
    pub evaluated: usize,
}

fn element_matches(party: &Party, slot: usize, element: Option<Element>) -> bool {
    match party.member(main_index(slot)) {
        Some(main) => element.map_or(true, |wanted| main.element == wanted),
        None => false,
    }
}

fn single(party: &Party, slot: usize, check_slot: usize, element: Option<Element>) -> Vec<usize> {
    if element_matches(party, check_slot, element) {
        vec![slot]
    } else {
        Vec::new()
    }
}

fn roster(party: &Party, element: Option<Element>, skip: Option<usize>) -> Vec<usize> {
    party
        .occupied()
        .map(|(slot, _)| slot)
        .filter(|slot| Some(*slot) != skip)
        .filter(|slot| element_matches(party, *slot, element))
        .collect()
}

/// Resolves `code` to party slots. `paired_effect` is the effect target of
/// the same record, which changes how some condition targets widen or
/// narrow. An empty result means the ability does not apply.
pub fn resolve(
    party: &Party,
    code: TargetCode,
    element: Option<Element>,
    anchors: Anchors,
    paired_effect: Option<TargetCode>,
) -> Vec<usize> {
    match code {
        TargetCode::Global => {
            let main = main_index(anchors.owner);
            single(party, main, main, element)
        }
        TargetCode::Owner => single(party, anchors.owner, anchors.owner, element),
        TargetCode::Leader => single(party, 0, 0, element),
        TargetCode::AllOthers => roster(party, element, Some(anchors.owner)),
        TargetCode::ElementalSubset => {
            // Unverified generalisation: observed only on abilities where each
            // unit gates itself, so the set narrows to the evaluated unit.
            if paired_effect == Some(TargetCode::TriggeringUnit) {
                let main = main_index(anchors.evaluated);
                return single(party, main, main, element);
            }
            roster(party, element, None)
        }
        TargetCode::TriggeringUnit => {
            // Unverified generalisation: a self/global effect fires for
            // whichever unit triggers it, owner included.
            if matches!(
                paired_effect,
                Some(TargetCode::Owner) | Some(TargetCode::Global)
            ) {
                return roster(party, element, None);
            }
            single(party, anchors.evaluated, anchors.evaluated, element)
        }
        TargetCode::Multiball => Vec::new(),
    }
}

/// Pre-check: can an effect aimed at `code` reach the evaluated unit at
/// all. Only leader and main slots ever receive ability effects.
pub fn applies_to(
    party: &Party,
    code: TargetCode,
    element: Option<Element>,
    anchors: Anchors,
) -> bool {
    let Some(evaluated) = party.member(anchors.evaluated) else {
        return false;
    };
    if !position_of(anchors.evaluated).is_main() {
        return false;
    }
    match code {
        TargetCode::Global => true,
        TargetCode::Owner => {
            anchors.evaluated == anchors.owner || unison_index(anchors.evaluated) == anchors.owner
        }
        TargetCode::AllOthers => anchors.evaluated != anchors.owner,
        TargetCode::Leader => anchors.evaluated == 0,
        TargetCode::ElementalSubset | TargetCode::TriggeringUnit => {
            element.map_or(true, |wanted| evaluated.element == wanted)
        }
        TargetCode::Multiball => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Character, Position, PowerFlipKind};
    use std::sync::Arc;

    fn unit(id: &str, element: Element) -> Arc<Character> {
        Arc::new(Character::new(id, element, PowerFlipKind::Sword))
    }

    /// leader fire, unison water, column 1 main water, column 2 main fire.
    fn party() -> Party {
        let mut party = Party::new();
        party
            .set_member(unit("lead", Element::Fire), Position::Leader, 0, 1, 0)
            .unwrap();
        party
            .set_member(unit("uni", Element::Water), Position::Unison, 0, 1, 0)
            .unwrap();
        party
            .set_member(unit("mid", Element::Water), Position::Main, 1, 1, 0)
            .unwrap();
        party
            .set_member(unit("far", Element::Fire), Position::Main, 2, 1, 0)
            .unwrap();
        party
    }

    fn anchors(owner: usize, evaluated: usize) -> Anchors {
        Anchors { owner, evaluated }
    }

    #[test]
    fn codes_round_trip() {
        for code in ["", "0", "1", "2", "5", "7", "8"] {
            let parsed = TargetCode::parse(code).unwrap();
            assert_eq!(parsed.code(), code);
        }
        assert_eq!(TargetCode::parse("3"), None);
    }

    #[test]
    fn element_filter_uses_main_column_representative() {
        let party = party();
        // The water unison sits under a fire leader, so it counts as fire.
        let fire = resolve(
            &party,
            TargetCode::ElementalSubset,
            Some(Element::Fire),
            anchors(0, 0),
            None,
        );
        assert_eq!(fire, vec![0, 1, 4]);
        let water = resolve(
            &party,
            TargetCode::ElementalSubset,
            Some(Element::Water),
            anchors(0, 0),
            None,
        );
        assert_eq!(water, vec![2]);
    }

    #[test]
    fn all_others_skips_only_the_owner() {
        let party = party();
        let slots = resolve(&party, TargetCode::AllOthers, None, anchors(1, 0), None);
        assert_eq!(slots, vec![0, 2, 4]);
    }

    #[test]
    fn global_resolves_to_owner_column() {
        let party = party();
        let slots = resolve(&party, TargetCode::Global, None, anchors(1, 2), None);
        assert_eq!(slots, vec![0]);
        let slots = resolve(
            &party,
            TargetCode::Global,
            Some(Element::Water),
            anchors(1, 2),
            None,
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn subset_paired_with_triggering_unit_narrows_to_evaluated() {
        let party = party();
        let slots = resolve(
            &party,
            TargetCode::ElementalSubset,
            Some(Element::Fire),
            anchors(0, 4),
            Some(TargetCode::TriggeringUnit),
        );
        assert_eq!(slots, vec![4]);
        let slots = resolve(
            &party,
            TargetCode::ElementalSubset,
            Some(Element::Fire),
            anchors(0, 2),
            Some(TargetCode::TriggeringUnit),
        );
        assert!(slots.is_empty());
    }

    #[test]
    fn triggering_unit_paired_with_self_widens_to_roster() {
        let party = party();
        let slots = resolve(
            &party,
            TargetCode::TriggeringUnit,
            None,
            anchors(0, 2),
            Some(TargetCode::Owner),
        );
        assert_eq!(slots, vec![0, 1, 2, 4]);
        let slots = resolve(
            &party,
            TargetCode::TriggeringUnit,
            None,
            anchors(0, 2),
            Some(TargetCode::Leader),
        );
        assert_eq!(slots, vec![2]);
    }

    #[test]
    fn applies_to_rejects_unisons_and_respects_codes() {
        let party = party();
        assert!(!applies_to(&party, TargetCode::Global, None, anchors(0, 1)));
        assert!(applies_to(&party, TargetCode::Owner, None, anchors(1, 0)));
        assert!(!applies_to(&party, TargetCode::Owner, None, anchors(1, 2)));
        assert!(applies_to(&party, TargetCode::AllOthers, None, anchors(0, 2)));
        assert!(!applies_to(&party, TargetCode::AllOthers, None, anchors(0, 0)));
        assert!(applies_to(&party, TargetCode::Leader, None, anchors(4, 0)));
        assert!(!applies_to(&party, TargetCode::Leader, None, anchors(4, 4)));
        assert!(applies_to(
            &party,
            TargetCode::ElementalSubset,
            Some(Element::Water),
            anchors(0, 2)
        ));
        assert!(!applies_to(
            &party,
            TargetCode::TriggeringUnit,
            Some(Element::Water),
            anchors(0, 4)
        ));
        assert!(!applies_to(&party, TargetCode::Multiball, None, anchors(0, 0)));
    }
}
