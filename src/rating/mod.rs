pub mod points;
pub mod tiers;
pub mod types;

pub use points::{PointDeltas, apply_delta, compute_deltas, rank_gap};
pub use tiers::{
    RANK_TIERS, icon_for, is_promotion_threshold, promotion_thresholds, tier_index_of, tier_of,
};
pub use types::{CHALLENGE_MARKER, Points, RankTier, TierIndex};
