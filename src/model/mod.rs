pub mod score;
pub mod types;

pub use score::{HoleByHole, HoleScore, PointsBucket, rounds_by_player};
pub use types::{
    LeaderboardEntry, Player, PointsTable, Rank, ScoringFormat, SkinWinner, SkinsConfig,
    SkinsResult, SkinsStanding, SkinsType, TournamentConfig,
};
