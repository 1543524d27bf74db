pub mod leaderboard;
pub mod par;
pub mod ranking;
pub mod skins;
pub mod stableford;
pub mod stroke_play;

pub use leaderboard::{build_leaderboard, stableford_order};
pub use par::{prorated_par, prorated_quota, total_par};
pub use ranking::{assign_positions, rank_by_points, rank_by_vs_par};
pub use skins::{play_skins, skins_standings};
pub use stableford::{StablefordTotals, hole_points, tally_stableford};
pub use stroke_play::{StrokePlayTotals, tally_stroke_play};
