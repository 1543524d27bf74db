use crate::model::score::{HoleScore, rounds_by_player};
use crate::model::types::{LeaderboardEntry, Player, TournamentConfig};
use crate::score::stableford::tally_stableford;
use crate::score::stroke_play::tally_stroke_play;
use std::cmp::Ordering;

/// Builds one row per player (optionally only those in `flight`), sorted in
/// stroke-play order. Every metric is computed regardless of the configured
/// format; consumers pick the columns to show. A repeat call with the same
/// inputs produces identical output.
#[must_use]
pub fn build_leaderboard(
    players: &[Player],
    scores: &[HoleScore],
    config: &TournamentConfig,
    flight: Option<&str>,
) -> Vec<LeaderboardEntry> {
    let rounds = rounds_by_player(scores);
    let empty_round = [None; 18];

    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .filter(|p| flight.is_none_or(|f| p.flight == f))
        .map(|player| {
            let round = rounds.get(&player.id).unwrap_or(&empty_round);
            let stroke = tally_stroke_play(round, &config.par, player.handicap);
            let stableford = tally_stableford(round, &config.par, &config.points, player.quota);

            LeaderboardEntry {
                player_id: player.id,
                player_name: player.name.clone(),
                flight: player.flight.clone(),
                handicap: player.handicap,
                quota: player.quota,
                gross_score: stroke.gross_score,
                net_score: stroke.net_score,
                vs_par_gross: stroke.vs_par_gross,
                vs_par_net: stroke.vs_par_net,
                stableford_points: stableford.points,
                vs_quota: stableford.vs_quota,
                holes_played: stroke.holes_played,
                is_complete: stroke.holes_played == 18,
            }
        })
        .collect();

    sort_stroke_play(&mut entries);
    entries
}

/// A player who has not started is never ahead of one who has.
fn started_first(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Option<Ordering> {
    match (a.holes_played == 0, b.holes_played == 0) {
        (true, false) => Some(Ordering::Greater),
        (false, true) => Some(Ordering::Less),
        _ => None,
    }
}

fn sort_stroke_play(entries: &mut [LeaderboardEntry]) {
    entries.sort_by(|a, b| {
        started_first(a, b).unwrap_or_else(|| {
            a.vs_par_gross
                .cmp(&b.vs_par_gross)
                .then_with(|| a.gross_score.cmp(&b.gross_score))
                .then_with(|| a.player_name.cmp(&b.player_name))
        })
    });
}

/// Re-sorts a row set for the Stableford table: highest points first,
/// vs-quota pace as the display order within equal points. Ranking treats
/// equal points as a tie either way.
#[must_use]
pub fn stableford_order(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| {
        started_first(a, b).unwrap_or_else(|| {
            b.stableford_points
                .cmp(&a.stableford_points)
                .then_with(|| {
                    b.vs_quota
                        .partial_cmp(&a.vs_quota)
                        .unwrap_or(Ordering::Equal)
                })
                .then_with(|| a.player_name.cmp(&b.player_name))
        })
    });
    entries
}
