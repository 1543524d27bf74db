use ahash::RandomState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One recorded (or not-yet-recorded) hole for one player. `strokes` of
/// `None` means the hole has not been played; it is never treated as zero.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct HoleScore {
    pub player_id: i64,
    pub hole: i32,
    pub strokes: Option<i32>,
}

/// A single player's round, indexed by hole - 1.
pub type HoleByHole = [Option<i32>; 18];

/// Groups a flat score table into per-player rounds. Holes outside 1..=18
/// are ignored rather than rejected; a duplicate (player, hole) pair lets
/// the later row win.
#[must_use]
pub fn rounds_by_player(scores: &[HoleScore]) -> HashMap<i64, HoleByHole, RandomState> {
    let mut rounds: HashMap<i64, HoleByHole, RandomState> = HashMap::default();

    for score in scores {
        if !(1..=18).contains(&score.hole) {
            continue;
        }
        let round = rounds.entry(score.player_id).or_insert([None; 18]);
        round[(score.hole - 1) as usize] = score.strokes;
    }

    rounds
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PointsBucket {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoublePlus,
}

impl PointsBucket {
    /// Classifies a strokes-minus-par differential. Saturates at both ends:
    /// anything at or below -3 is an albatross, anything at or above +2
    /// lands in the double-bogey-or-worse bucket.
    #[must_use]
    pub fn from_differential(diff: i32) -> Self {
        match diff {
            d if d <= -3 => Self::Albatross,
            -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoublePlus,
        }
    }
}

impl From<i32> for PointsBucket {
    fn from(value: i32) -> Self {
        Self::from_differential(value)
    }
}
