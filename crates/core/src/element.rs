use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Water,
    Thunder,
    Wind,
    Light,
    Dark,
}

impl Element {
    pub const ALL: [Element; 6] = [
        Element::Fire,
        Element::Water,
        Element::Thunder,
        Element::Wind,
        Element::Light,
        Element::Dark,
    ];

    /// Element filter as written in ability tables. Anything unrecognised
    /// (empty, `(None)`) means "no filter".
    pub fn from_ability_code(code: &str) -> Option<Self> {
        match code {
            "Red" => Some(Self::Fire),
            "Yellow" => Some(Self::Thunder),
            "Green" => Some(Self::Wind),
            "Blue" => Some(Self::Water),
            "White" => Some(Self::Light),
            "Black" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Numeric element id used by the character table.
    pub fn from_character_id(id: &str) -> Option<Self> {
        match id {
            "0" => Some(Self::Fire),
            "1" => Some(Self::Water),
            "2" => Some(Self::Thunder),
            "3" => Some(Self::Wind),
            "4" => Some(Self::Light),
            "5" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Fire => 0,
            Self::Water => 1,
            Self::Thunder => 2,
            Self::Wind => 3,
            Self::Light => 4,
            Self::Dark => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fire => "FIRE",
            Self::Water => "WATER",
            Self::Thunder => "THUNDER",
            Self::Wind => "WIND",
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerFlipKind {
    Sword,
    Fist,
    Bow,
    Support,
    Special,
}

impl PowerFlipKind {
    pub fn from_character_id(id: &str) -> Option<Self> {
        match id {
            "0" => Some(Self::Sword),
            "1" => Some(Self::Fist),
            "2" => Some(Self::Bow),
            "3" => Some(Self::Support),
            "4" => Some(Self::Special),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Leader,
    Main,
    Unison,
}

impl Position {
    pub fn is_main(self) -> bool {
        matches!(self, Self::Leader | Self::Main)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEffectKind {
    Attack,
    Hp,
    DirectAttackDamage,
    PowerFlipDamage,
    SkillDamage,
    AbilityDamage,
    ElementResist,
    DirectAttackResist,
    PowerFlipResist,
    SkillDamageResist,
    AbilityDamageResist,
    DamageCut,
    Regeneration,
    Poison,
    Paralysis,
    Stun,
    Slow,
    Lethargy,
    Silence,
    FeverGauge,
    DownGauge,
    DebuffImmunity,
    MultiHit,
    Pierce,
    Float,
    SpeedUp,
    Adversity,
    ComboUp,
    Guts,
    Bipolar,
}

/// A status effect sitting on the enemy. Element-scoped kinds (resist
/// down) carry the element they apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debuff {
    pub kind: StatusEffectKind,
    #[serde(default)]
    pub element: Option<Element>,
}

impl Debuff {
    pub fn new(kind: StatusEffectKind) -> Self {
        Self {
            kind,
            element: None,
        }
    }

    pub fn elemental(kind: StatusEffectKind, element: Element) -> Self {
        Self {
            kind,
            element: Some(element),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    #[serde(default)]
    pub debuffs: Vec<Debuff>,
}

impl Enemy {
    pub fn has(&self, kind: StatusEffectKind) -> bool {
        self.debuffs.iter().any(|debuff| debuff.kind == kind)
    }

    pub fn has_elemental(&self, kind: StatusEffectKind, element: Element) -> bool {
        self.debuffs
            .iter()
            .any(|debuff| debuff.kind == kind && debuff.element == Some(element))
    }
}
