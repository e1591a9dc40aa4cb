use log::info;
use serde::Serialize;

use crate::domain::{LadderState, PlayerId, PlayerRecord};
use crate::errors::LadderResult;
use crate::rating::{self, Points};

/// Settled result of one reported match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub winner: PlayerRecord,
    pub loser: PlayerRecord,
    pub winner_delta: Points,
    pub loser_delta: Points,
    pub rank_gap: i64,
}

impl MatchOutcome {
    pub fn winner_new_points(&self) -> Points {
        self.winner.points
    }

    pub fn loser_new_points(&self) -> Points {
        self.loser.points
    }
}

/// Settles `winner`'s approved request against `loser` inside `state`.
///
/// On error `state` is left exactly as it was.
pub fn report_result(
    state: &mut LadderState,
    winner_id: &PlayerId,
    loser_id: &PlayerId,
) -> LadderResult<MatchOutcome> {
    state.ledger.consume_if_approved(winner_id, loser_id)?;

    let mut winner = state.players.get_or_create(winner_id);
    let mut loser = state.players.get_or_create(loser_id);

    let deltas = rating::compute_deltas(winner.points, loser.points);
    winner.points = rating::apply_delta(winner.points, deltas.winner);
    loser.points = rating::apply_delta(loser.points, deltas.loser);

    winner.refresh_promotion_challenge();
    loser.refresh_promotion_challenge();

    state.players.save(winner.clone());
    state.players.save(loser.clone());

    info!(
        "{} beat {} (rank gap {}): now {} and {} pts",
        winner.id, loser.id, deltas.rank_gap, winner.points, loser.points
    );

    Ok(MatchOutcome {
        winner,
        loser,
        winner_delta: deltas.winner,
        loser_delta: deltas.loser,
        rank_gap: deltas.rank_gap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LadderError;
    use chrono::Utc;

    fn approved_state(winner: &PlayerId, loser: &PlayerId) -> LadderState {
        let mut state = LadderState::default();
        state.ledger.request_match(winner, loser, Utc::now()).unwrap();
        state.ledger.approve(winner, loser).unwrap();
        state
    }

    fn set_points(state: &mut LadderState, id: &PlayerId, points: Points) {
        let mut record = state.players.get_or_create(id);
        record.points = points;
        state.players.save(record);
    }

    fn ids() -> (PlayerId, PlayerId) {
        (PlayerId::from("alice"), PlayerId::from("bob"))
    }

    #[test]
    fn equal_tier_newcomers() {
        let (a, b) = ids();
        let mut state = approved_state(&a, &b);

        let outcome = report_result(&mut state, &a, &b).unwrap();

        assert_eq!(outcome.winner_new_points(), 1);
        assert_eq!(outcome.loser_new_points(), 0);
        assert_eq!(outcome.loser_delta, -1);
        assert!(state.ledger.is_empty());
    }

    #[test]
    fn unapproved_request_leaves_points_alone() {
        let (a, b) = ids();
        let mut state = LadderState::default();
        set_points(&mut state, &a, 7);
        set_points(&mut state, &b, 3);
        state.ledger.request_match(&a, &b, Utc::now()).unwrap();
        let before = state.clone();

        let err = report_result(&mut state, &a, &b).unwrap_err();

        assert!(matches!(err, LadderError::NotApproved { .. }));
        assert_eq!(state, before);
    }

    #[test]
    fn unrequested_result_is_rejected() {
        let (a, b) = ids();
        let mut state = LadderState::default();
        let err = report_result(&mut state, &a, &b).unwrap_err();
        assert!(matches!(err, LadderError::NotRequested { .. }));
        assert!(state.players.is_empty());
    }

    #[test]
    fn lower_ranked_winner_loses_a_point() {
        // Bronze at 3 beats Gold at 10: gap -2, winner delta 1 + (-2)
        let (a, b) = ids();
        let mut state = approved_state(&a, &b);
        set_points(&mut state, &a, 3);
        set_points(&mut state, &b, 10);

        let outcome = report_result(&mut state, &a, &b).unwrap();

        assert_eq!(outcome.rank_gap, -2);
        assert_eq!(outcome.winner_delta, -1);
        assert_eq!(outcome.winner_new_points(), 2);
        assert_eq!(outcome.loser_delta, -3);
        assert_eq!(outcome.loser_new_points(), 7);
    }

    #[test]
    fn winner_at_zero_stays_non_negative() {
        let (a, b) = ids();
        let mut state = approved_state(&a, &b);
        set_points(&mut state, &b, 10);

        let outcome = report_result(&mut state, &a, &b).unwrap();

        assert_eq!(outcome.winner_delta, -1);
        assert_eq!(outcome.winner_new_points(), 0);
    }

    #[test]
    fn higher_ranked_winner_gains_gap() {
        let (a, b) = ids();
        let mut state = approved_state(&a, &b);
        set_points(&mut state, &a, 20);
        set_points(&mut state, &b, 1);

        let outcome = report_result(&mut state, &a, &b).unwrap();

        assert_eq!(outcome.rank_gap, 3);
        assert_eq!(outcome.winner_new_points(), 24);
        assert_eq!(outcome.loser_new_points(), 0);
    }

    #[test]
    fn promotion_flags_are_recomputed_for_both_players() {
        let (a, b) = ids();
        let mut state = approved_state(&a, &b);
        set_points(&mut state, &a, 8);
        set_points(&mut state, &b, 5);

        let outcome = report_result(&mut state, &a, &b).unwrap();

        assert_eq!(outcome.winner_new_points(), 9);
        assert!(outcome.winner.promotion_challenge);
        assert_eq!(outcome.loser_new_points(), 4);
        assert!(outcome.loser.promotion_challenge);

        let mut state = approved_state(&a, &b);
        set_points(&mut state, &a, 9);
        set_points(&mut state, &b, 7);
        // stale flag from the previous report
        let mut winner = state.players.get_or_create(&a);
        winner.promotion_challenge = true;
        state.players.save(winner);

        let outcome = report_result(&mut state, &a, &b).unwrap();
        assert_eq!(outcome.winner_new_points(), 10);
        assert!(!outcome.winner.promotion_challenge);
        assert_eq!(state.players.get(&a), Some(&outcome.winner));
    }

    #[test]
    fn flag_matches_threshold_membership_after_every_report() {
        let (a, b) = ids();
        for start in 0..60 {
            let mut state = approved_state(&a, &b);
            set_points(&mut state, &a, start);
            set_points(&mut state, &b, start);

            let outcome = report_result(&mut state, &a, &b).unwrap();

            for record in [&outcome.winner, &outcome.loser] {
                assert_eq!(
                    record.promotion_challenge,
                    rating::is_promotion_threshold(record.points),
                    "start = {start}, points = {}",
                    record.points
                );
            }
        }
    }
}
