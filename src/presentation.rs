//! User-facing text for command results, shared by the CLI and HTTP surfaces.

use crate::domain::{EventWindow, MatchRequest, PlayerRecord};
use crate::services::MatchOutcome;

pub fn request_message(request: &MatchRequest) -> String {
    format!(
        "{} challenged {}. {} can accept with `approve {}`.",
        request.requester, request.opponent, request.opponent, request.requester
    )
}

pub fn approve_message(request: &MatchRequest) -> String {
    format!(
        "{} accepted the match against {}. Report the result once it is played.",
        request.opponent, request.requester
    )
}

pub fn outcome_message(outcome: &MatchOutcome) -> String {
    format!(
        "{} beat {}. {} now has {} pts {} ({:+}), {} now has {} pts {} ({:+}).",
        outcome.winner.id,
        outcome.loser.id,
        outcome.winner.id,
        outcome.winner.points,
        outcome.winner.icon(),
        outcome.winner_delta,
        outcome.loser.id,
        outcome.loser.points,
        outcome.loser.icon(),
        outcome.loser_delta
    )
}

pub fn standing_line(position: usize, record: &PlayerRecord) -> String {
    let tier = record.tier().map(|tier| tier.name).unwrap_or("Unranked");
    format!(
        "{:>3}. {} {} {} pts ({})",
        position,
        record.icon(),
        record.id,
        record.points,
        tier
    )
}

pub fn pending_line(request: &MatchRequest) -> String {
    let status = if request.approved { "approved" } else { "awaiting approval" };
    format!(
        "{} -> {} [{}] since {}",
        request.requester,
        request.opponent,
        status,
        request.requested_at.format("%Y-%m-%d %H:%M UTC")
    )
}

pub fn event_message(window: &EventWindow) -> String {
    format!(
        "Event runs from {} to {}.",
        window.start.format("%Y-%m-%d %H:%M UTC"),
        window.end.format("%Y-%m-%d %H:%M UTC")
    )
}
