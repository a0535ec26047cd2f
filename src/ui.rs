//! HUD status line
//!
//! Text and colour tiers for the attack-power and kill-count labels. Drawing them is
//! left to the host.

use serde::{Deserialize, Serialize};

use crate::attack_power;

/// Three-tier label colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Red,
    White,
    Green,
}

impl Tier {
    /// Kills: red at 0, white up to 10, green beyond
    pub fn for_kills(kills: u32) -> Self {
        match kills {
            0 => Tier::Red,
            1..=10 => Tier::White,
            _ => Tier::Green,
        }
    }

    /// Attack power: red up to 5, white up to 50, green beyond
    pub fn for_attack_power(power: i64) -> Self {
        if power <= 5 {
            Tier::Red
        } else if power <= 50 {
            Tier::White
        } else {
            Tier::Green
        }
    }
}

/// Both HUD labels for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusLine {
    pub attack_power: i64,
    pub kills: u32,
    pub attack_text: String,
    pub kills_text: String,
    pub attack_tier: Tier,
    pub kills_tier: Tier,
}

impl StatusLine {
    pub fn new(birth_rate: f32, kills: u32) -> Self {
        let power = attack_power(birth_rate);
        Self {
            attack_power: power,
            kills,
            attack_text: format!("Player Attack Power: {}", power),
            kills_text: format!("Enemies Killed: {}", kills),
            attack_tier: Tier::for_attack_power(power),
            kills_tier: Tier::for_kills(kills),
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {}", self.attack_text, self.kills_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kill_tiers() {
        assert_eq!(Tier::for_kills(0), Tier::Red);
        assert_eq!(Tier::for_kills(1), Tier::White);
        assert_eq!(Tier::for_kills(10), Tier::White);
        assert_eq!(Tier::for_kills(11), Tier::Green);
    }

    #[test]
    fn test_attack_tiers() {
        assert_eq!(Tier::for_attack_power(0), Tier::Red);
        assert_eq!(Tier::for_attack_power(5), Tier::Red);
        assert_eq!(Tier::for_attack_power(6), Tier::White);
        assert_eq!(Tier::for_attack_power(50), Tier::White);
        assert_eq!(Tier::for_attack_power(51), Tier::Green);
    }

    #[test]
    fn test_status_text() {
        let status = StatusLine::new(0.5, 3);
        assert_eq!(status.attack_text, "Player Attack Power: 50");
        assert_eq!(status.kills_text, "Enemies Killed: 3");
        assert_eq!(status.attack_tier, Tier::White);
        assert_eq!(status.kills_tier, Tier::White);
        assert_eq!(
            status.to_string(),
            "Player Attack Power: 50 | Enemies Killed: 3"
        );
    }
}
