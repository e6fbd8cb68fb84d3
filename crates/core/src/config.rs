use serde::{Deserialize, Serialize};

/// Tunables for the damage formula and the roster sweep. Defaults are the
/// in-game constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Skill bonus roll used for the low and high ends of the range.
    pub skill_roll_low: f64,
    pub skill_roll_high: f64,
    /// Final random multiplier spread, applied as `1 -/+ spread`.
    pub damage_spread: f64,
    /// Share of a unison partner's attack added to its main.
    pub unison_attack_share: f64,
    /// Evaluate sweep candidates on the rayon pool.
    pub parallel_sweep: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            skill_roll_low: 0.0,
            skill_roll_high: 2.0,
            damage_spread: 0.05,
            unison_attack_share: 0.25,
            parallel_sweep: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"damage_spread":0.1}"#).unwrap();
        assert_eq!(config.damage_spread, 0.1);
        assert_eq!(config.skill_roll_high, 2.0);
        assert!(config.parallel_sweep);
    }
}
