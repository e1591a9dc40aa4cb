use super::tiers::tier_index_of;
use super::types::Points;

/// Point changes produced by one reported result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointDeltas {
    pub rank_gap: i64,
    pub winner: Points,
    pub loser: Points,
}

/// Winner's tier ordinal minus loser's tier ordinal.
pub fn rank_gap(winner_points: Points, loser_points: Points) -> i64 {
    tier_index_of(winner_points) as i64 - tier_index_of(loser_points) as i64
}

pub fn compute_deltas(winner_points: Points, loser_points: Points) -> PointDeltas {
    let gap = rank_gap(winner_points, loser_points);

    // The gap is added to the winner's gain with its sign, so a winner far
    // below the loser can come out with a negative delta.
    PointDeltas {
        rank_gap: gap,
        winner: 1 + gap,
        loser: -(1 + gap.abs()),
    }
}

/// Applies a delta, never letting the total drop below zero.
pub fn apply_delta(points: Points, delta: Points) -> Points {
    points.saturating_add(delta).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_tier_is_plus_minus_one() {
        let deltas = compute_deltas(0, 0);
        assert_eq!(deltas, PointDeltas { rank_gap: 0, winner: 1, loser: -1 });

        let deltas = compute_deltas(12, 18);
        assert_eq!(deltas.winner, 1);
        assert_eq!(deltas.loser, -1);
    }

    #[test]
    fn higher_ranked_winner_gains_more() {
        // Gold (2) beats Bronze (0)
        let deltas = compute_deltas(10, 0);
        assert_eq!(deltas.rank_gap, 2);
        assert_eq!(deltas.winner, 3);
        assert_eq!(deltas.loser, -3);
    }

    #[test]
    fn lower_ranked_winner_uses_literal_formula() {
        // Bronze (0) beats Gold (2): 1 + (-2) = -1
        let deltas = compute_deltas(0, 10);
        assert_eq!(deltas.rank_gap, -2);
        assert_eq!(deltas.winner, -1);
        assert_eq!(deltas.loser, -3);
    }

    #[test]
    fn applied_totals_clamp_at_zero() {
        assert_eq!(apply_delta(0, -1), 0);
        assert_eq!(apply_delta(2, -3), 0);
        assert_eq!(apply_delta(3, -1), 2);
        assert_eq!(apply_delta(4, 1), 5);
    }
}
