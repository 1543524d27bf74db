use crate::model::score::{HoleScore, rounds_by_player};
use crate::model::types::{Player, SkinWinner, SkinsConfig, SkinsResult, SkinsStanding, SkinsType};

/// Runs the hole-by-hole skins competition over the opted-in field.
///
/// Each hole is worth the current carryover count of skins. The sole lowest
/// comparison score on a hole takes them and the count resets; a tie rolls
/// the hole's value forward when carryover is on, or forfeits it when off.
/// Holes with no recorded score are skipped untouched. Net skins subtract
/// the full handicap from each hole's gross, the source system's
/// convention.
#[must_use]
pub fn play_skins(players: &[Player], scores: &[HoleScore], config: &SkinsConfig) -> SkinsResult {
    let field: Vec<&Player> = players.iter().filter(|p| p.in_skins).collect();
    if !config.enabled || field.is_empty() {
        return SkinsResult::default();
    }

    let rounds = rounds_by_player(scores);
    let total_pot = field.len() as f64 * config.buy_in;

    let mut winners: Vec<SkinWinner> = Vec::new();
    let mut carryover = 1;

    for hole in 1..=18 {
        let hole_idx = (hole - 1) as usize;

        let mut contenders: Vec<(&Player, i32)> = Vec::new();
        for player in &field {
            let Some(gross) = rounds.get(&player.id).and_then(|r| r[hole_idx]) else {
                continue;
            };
            let comparison = match config.skins_type {
                SkinsType::Gross => gross,
                SkinsType::Net => gross - player.handicap,
            };
            contenders.push((player, comparison));
        }

        let Some(best) = contenders.iter().map(|(_, s)| *s).min() else {
            // nobody has scored this hole yet; it waits, carryover intact
            continue;
        };

        let mut at_best = contenders.iter().filter(|(_, s)| *s == best);
        let first = at_best.next();
        let contested = at_best.next().is_some();

        match first {
            Some((player, score)) if !contested => {
                winners.push(SkinWinner {
                    hole,
                    player_id: player.id,
                    player_name: player.name.clone(),
                    winning_score: *score,
                    skins_won: carryover,
                });
                carryover = 1;
            }
            _ => {
                carryover = if config.carryover { carryover + 1 } else { 1 };
            }
        }
    }

    let total_skins: i32 = winners.iter().map(|w| w.skins_won).sum();
    let value_per_skin = if total_skins > 0 {
        total_pot / f64::from(total_skins)
    } else {
        0.0
    };

    SkinsResult {
        winners,
        total_pot,
        total_skins,
        value_per_skin,
    }
}

/// Groups per-hole winners into one row per player, most skins first.
/// Equal counts keep first-found (earliest-win) order; downstream display
/// uses row index for this table, not competition ranks.
#[must_use]
pub fn skins_standings(result: &SkinsResult) -> Vec<SkinsStanding> {
    let mut standings: Vec<SkinsStanding> = Vec::new();

    for winner in &result.winners {
        match standings
            .iter_mut()
            .find(|s| s.player_id == winner.player_id)
        {
            Some(standing) => {
                standing.skins += winner.skins_won;
                standing.holes_won.push(winner.hole);
            }
            None => standings.push(SkinsStanding {
                player_id: winner.player_id,
                player_name: winner.player_name.clone(),
                skins: winner.skins_won,
                winnings: 0.0,
                holes_won: vec![winner.hole],
            }),
        }
    }

    for standing in &mut standings {
        standing.winnings = f64::from(standing.skins) * result.value_per_skin;
        standing.holes_won.sort_unstable();
    }

    standings.sort_by(|a, b| b.skins.cmp(&a.skins));
    standings
}
