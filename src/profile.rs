//! Profile and run state
//!
//! Two lifecycles, two structs: `Profile` persists across sessions through
//! the save file and carries records, currency and cosmetic selections;
//! `RunState` is reset on every restart. Both are passed into the core loop
//! explicitly rather than living in globals. Score and coin currency are
//! independent counters.

use serde::{Deserialize, Serialize};

/// Player skin selection. All skins are drawn procedurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    Default,
    Ninja,
    Robot,
    Zombie,
}

impl Skin {
    pub const ALL: [Skin; 4] = [Skin::Default, Skin::Ninja, Skin::Robot, Skin::Zombie];

    pub fn label(&self) -> &'static str {
        match self {
            Skin::Default => "Default",
            Skin::Ninja => "Ninja",
            Skin::Robot => "Robot",
            Skin::Zombie => "Zombie",
        }
    }

    pub fn price(&self) -> u32 {
        match self {
            Skin::Default => 0,
            _ => 500,
        }
    }
}

/// Trail selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trail {
    None,
    Red,
    Blue,
    Rainbow,
}

impl Trail {
    pub const ALL: [Trail; 4] = [Trail::None, Trail::Red, Trail::Blue, Trail::Rainbow];

    pub fn label(&self) -> &'static str {
        match self {
            Trail::None => "None",
            Trail::Red => "Red",
            Trail::Blue => "Blue",
            Trail::Rainbow => "Rainbow",
        }
    }

    pub fn price(&self) -> u32 {
        match self {
            Trail::None => 0,
            Trail::Rainbow => 1000,
            _ => 500,
        }
    }
}

/// Price of the permanent double-coins upgrade
pub const DOUBLE_COINS_PRICE: u32 = 1000;

/// Persistent player profile, round-tripped through the save file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub high_score: u32,
    pub max_platforms: u32,
    pub total_coins: u32,
    pub sound_enabled: bool,
    pub current_skin: Skin,
    pub current_trail: Trail,
    pub purchased_skins: Vec<Skin>,
    pub purchased_trails: Vec<Trail>,
    pub double_coins: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            high_score: 0,
            max_platforms: 0,
            total_coins: 0,
            sound_enabled: true,
            current_skin: Skin::Default,
            current_trail: Trail::None,
            purchased_skins: vec![Skin::Default],
            purchased_trails: vec![Trail::None],
            double_coins: false,
        }
    }
}

impl Profile {
    /// Coin multiplier applied at pickup time
    pub fn coin_multiplier(&self) -> u32 {
        if self.double_coins {
            2
        } else {
            1
        }
    }

    pub fn owns_skin(&self, skin: Skin) -> bool {
        self.purchased_skins.contains(&skin)
    }

    pub fn owns_trail(&self, trail: Trail) -> bool {
        self.purchased_trails.contains(&trail)
    }

    /// Buy (if affordable) or just equip an owned skin. Returns true when
    /// anything changed.
    pub fn select_skin(&mut self, skin: Skin) -> bool {
        if self.owns_skin(skin) {
            if self.current_skin == skin {
                return false;
            }
            self.current_skin = skin;
            return true;
        }
        if self.total_coins < skin.price() {
            return false;
        }
        self.total_coins -= skin.price();
        self.purchased_skins.push(skin);
        self.current_skin = skin;
        true
    }

    /// Buy (if affordable) or just equip an owned trail
    pub fn select_trail(&mut self, trail: Trail) -> bool {
        if self.owns_trail(trail) {
            if self.current_trail == trail {
                return false;
            }
            self.current_trail = trail;
            return true;
        }
        if self.total_coins < trail.price() {
            return false;
        }
        self.total_coins -= trail.price();
        self.purchased_trails.push(trail);
        self.current_trail = trail;
        true
    }

    /// Buy the permanent double-coins upgrade
    pub fn buy_double_coins(&mut self) -> bool {
        if self.double_coins || self.total_coins < DOUBLE_COINS_PRICE {
            return false;
        }
        self.total_coins -= DOUBLE_COINS_PRICE;
        self.double_coins = true;
        true
    }
}

/// Per-run counters, reset on restart
#[derive(Debug, Clone, Copy, Default)]
pub struct RunState {
    /// Coin points collected this run (base values, no upgrade multiplier)
    pub score: u32,
    /// Platforms cleared this run
    pub platforms_passed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Profile::default();
        assert_eq!(p.total_coins, 0);
        assert!(p.sound_enabled);
        assert!(p.owns_skin(Skin::Default));
        assert!(p.owns_trail(Trail::None));
        assert!(!p.double_coins);
    }

    #[test]
    fn test_buying_a_skin_deducts_once() {
        let mut p = Profile::default();
        p.total_coins = 600;
        assert!(p.select_skin(Skin::Ninja));
        assert_eq!(p.total_coins, 100);
        assert_eq!(p.current_skin, Skin::Ninja);
        // Re-selecting an owned skin is free
        assert!(p.select_skin(Skin::Default));
        assert!(p.select_skin(Skin::Ninja));
        assert_eq!(p.total_coins, 100);
    }

    #[test]
    fn test_cannot_afford() {
        let mut p = Profile::default();
        p.total_coins = 400;
        assert!(!p.select_trail(Trail::Rainbow));
        assert_eq!(p.current_trail, Trail::None);
        assert_eq!(p.total_coins, 400);
    }

    #[test]
    fn test_double_coins_is_one_time() {
        let mut p = Profile::default();
        p.total_coins = 2500;
        assert!(p.buy_double_coins());
        assert_eq!(p.coin_multiplier(), 2);
        assert!(!p.buy_double_coins());
        assert_eq!(p.total_coins, 1500);
    }
}
