pub mod error;
pub mod model;
pub mod score;
pub mod view;

pub use error::ScoringError;
pub use model::score::{HoleByHole, HoleScore, PointsBucket, rounds_by_player};
pub use model::types::{
    LeaderboardEntry, Player, PointsTable, Rank, ScoringFormat, SkinWinner, SkinsConfig,
    SkinsResult, SkinsStanding, SkinsType, TournamentConfig,
};
pub use score::leaderboard::{build_leaderboard, stableford_order};
pub use score::ranking::{assign_positions, rank_by_points, rank_by_vs_par};
pub use score::skins::{play_skins, skins_standings};
