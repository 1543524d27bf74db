use crate::model::score::{HoleByHole, PointsBucket};
use crate::model::types::PointsTable;
use crate::score::par::prorated_quota;
use serde::{Deserialize, Serialize};

/// Points for a single hole. An unplayed hole, or a zero-stroke entry,
/// scores nothing. Every integer differential lands in a bucket.
#[must_use]
pub fn hole_points(strokes: Option<i32>, par: i32, table: &PointsTable) -> i32 {
    let strokes = match strokes {
        Some(s) if s != 0 => s,
        _ => return 0,
    };

    match PointsBucket::from_differential(strokes - par) {
        PointsBucket::Albatross => table.albatross,
        PointsBucket::Eagle => table.eagle,
        PointsBucket::Birdie => table.birdie,
        PointsBucket::Par => table.par,
        PointsBucket::Bogey => table.bogey,
        PointsBucket::DoublePlus => table.double_plus,
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct StablefordTotals {
    pub points: i32,
    /// Ahead-of-pace signal: points minus the quota prorated to holes
    /// played. Exact once all 18 holes are in.
    pub vs_quota: f64,
}

#[must_use]
pub fn tally_stableford(
    round: &HoleByHole,
    par: &[i32; 18],
    table: &PointsTable,
    quota: i32,
) -> StablefordTotals {
    let mut points = 0;
    let mut holes_played = 0;

    for (strokes, hole_par) in round.iter().zip(par.iter()) {
        if strokes.is_some() {
            holes_played += 1;
        }
        points += hole_points(*strokes, *hole_par, table);
    }

    StablefordTotals {
        points,
        vs_quota: f64::from(points) - prorated_quota(holes_played, quota),
    }
}
