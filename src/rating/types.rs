use serde::Serialize;

pub type Points = i64;
pub type TierIndex = usize;

/// Appended to a tier icon while the player is one win away from promotion.
pub const CHALLENGE_MARKER: &str = "⚔️";

/// A named band of point totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankTier {
    pub name: &'static str,
    pub icon: &'static str,
    pub min: Points,
    pub max: Points,
}

impl RankTier {
    pub const fn new(name: &'static str, icon: &'static str, min: Points, max: Points) -> Self {
        Self {
            name,
            icon,
            min,
            max,
        }
    }

    pub fn contains(&self, points: Points) -> bool {
        self.min <= points && points <= self.max
    }

    /// Point total that puts a player one win below this tier.
    pub fn promotion_threshold(&self) -> Points {
        self.min - 1
    }
}
