#![allow(dead_code)]

use golf_leaderboard::model::score::HoleScore;
use golf_leaderboard::model::types::{
    Player, PointsTable, ScoringFormat, SkinsConfig, SkinsType, TournamentConfig,
};

pub fn course_par() -> [i32; 18] {
    [
        4, 4, 3, 5, 4, 4, 3, 5, 4, // front 9, par 36
        4, 3, 5, 4, 4, 3, 5, 4, 4, // back 9, par 36
    ]
}

pub fn config() -> TournamentConfig {
    TournamentConfig {
        par: course_par(),
        format: ScoringFormat::Both,
        points: PointsTable::default(),
        skins: SkinsConfig {
            enabled: true,
            buy_in: 10.0,
            skins_type: SkinsType::Gross,
            carryover: true,
        },
    }
}

pub fn player(id: i64, name: &str, handicap: i32, flight: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
        handicap,
        quota: 36 - handicap,
        flight: flight.to_string(),
        in_skins: true,
        paid: true,
    }
}

pub fn score(player_id: i64, hole: i32, strokes: i32) -> HoleScore {
    HoleScore {
        player_id,
        hole,
        strokes: Some(strokes),
    }
}

/// A full 18-hole round, hole 1 first.
pub fn full_round(player_id: i64, strokes: &[i32; 18]) -> Vec<HoleScore> {
    strokes
        .iter()
        .enumerate()
        .map(|(i, s)| score(player_id, i as i32 + 1, *s))
        .collect()
}

/// Holes 1..=n recorded, the rest not yet played.
pub fn partial_round(player_id: i64, strokes: &[i32]) -> Vec<HoleScore> {
    strokes
        .iter()
        .enumerate()
        .map(|(i, s)| score(player_id, i as i32 + 1, *s))
        .collect()
}

/// Every hole at par plus `over` (use a negative `over` for under par).
pub fn steady_round(over: i32) -> [i32; 18] {
    let mut strokes = course_par();
    for s in &mut strokes {
        *s += over;
    }
    strokes
}
