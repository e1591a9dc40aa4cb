use crate::errors::{LadderError, LadderResult};

use super::types::{CHALLENGE_MARKER, Points, RankTier, TierIndex};

/// Ladder tiers in ascending order. Consecutive tiers share no points and
/// leave no gaps; the last one is open-ended.
pub static RANK_TIERS: [RankTier; 6] = [
    RankTier::new("Bronze", "🥉", 0, 4),
    RankTier::new("Silver", "🥈", 5, 9),
    RankTier::new("Gold", "🥇", 10, 19),
    RankTier::new("Platinum", "💠", 20, 34),
    RankTier::new("Diamond", "💎", 35, 54),
    RankTier::new("Master", "👑", 55, Points::MAX),
];

pub fn tier_of(points: Points) -> LadderResult<&'static RankTier> {
    find_tier(points)
        .map(|(_, tier)| tier)
        .ok_or(LadderError::NoMatchingTier { points })
}

/// Ordinal of the tier holding `points`. Out-of-table totals count as the
/// lowest tier so a borderline value never blocks a result report.
pub fn tier_index_of(points: Points) -> TierIndex {
    find_tier(points).map(|(index, _)| index).unwrap_or(0)
}

pub fn icon_for(points: Points, challenge_active: bool) -> String {
    let tier = find_tier(points)
        .map(|(_, tier)| tier)
        .unwrap_or(&RANK_TIERS[0]);

    if challenge_active {
        format!("{}{}", tier.icon, CHALLENGE_MARKER)
    } else {
        tier.icon.to_string()
    }
}

pub fn promotion_thresholds() -> impl Iterator<Item = Points> {
    RANK_TIERS.iter().skip(1).map(RankTier::promotion_threshold)
}

pub fn is_promotion_threshold(points: Points) -> bool {
    promotion_thresholds().any(|threshold| threshold == points)
}

fn find_tier(points: Points) -> Option<(TierIndex, &'static RankTier)> {
    RANK_TIERS
        .iter()
        .enumerate()
        .find(|(_, tier)| tier.contains(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_partition_the_non_negative_integers() {
        assert_eq!(RANK_TIERS[0].min, 0);
        for pair in RANK_TIERS.windows(2) {
            assert_eq!(pair[0].max + 1, pair[1].min, "gap or overlap after {}", pair[0].name);
        }
        assert_eq!(RANK_TIERS[RANK_TIERS.len() - 1].max, Points::MAX);
    }

    #[test]
    fn every_point_total_has_exactly_one_tier() {
        for points in 0..=200 {
            let matching = RANK_TIERS.iter().filter(|t| t.contains(points)).count();
            assert_eq!(matching, 1, "points = {points}");
        }
        assert_eq!(tier_of(Points::MAX).unwrap().name, "Master");
    }

    #[test]
    fn tier_lookup_at_boundaries() {
        assert_eq!(tier_of(0).unwrap().name, "Bronze");
        assert_eq!(tier_of(4).unwrap().name, "Bronze");
        assert_eq!(tier_of(5).unwrap().name, "Silver");
        assert_eq!(tier_of(10).unwrap().name, "Gold");
        assert_eq!(tier_of(55).unwrap().name, "Master");
    }

    #[test]
    fn negative_points_have_no_tier() {
        let err = tier_of(-1).unwrap_err();
        assert!(matches!(err, LadderError::NoMatchingTier { points: -1 }));
    }

    #[test]
    fn tier_index_falls_back_to_zero() {
        assert_eq!(tier_index_of(0), 0);
        assert_eq!(tier_index_of(10), 2);
        assert_eq!(tier_index_of(1000), 5);
        assert_eq!(tier_index_of(-7), 0);
    }

    #[test]
    fn icon_carries_challenge_marker() {
        assert_eq!(icon_for(3, false), "🥉");
        assert_eq!(icon_for(9, true), format!("🥈{CHALLENGE_MARKER}"));
        assert_eq!(icon_for(-3, false), "🥉");
    }

    #[test]
    fn five_promotion_thresholds() {
        let thresholds: Vec<Points> = promotion_thresholds().collect();
        assert_eq!(thresholds, vec![4, 9, 19, 34, 54]);
        assert!(is_promotion_threshold(19));
        assert!(!is_promotion_threshold(20));
        assert!(!is_promotion_threshold(-1));
    }
}
