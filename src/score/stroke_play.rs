use crate::model::score::HoleByHole;
use crate::score::par::total_par;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct StrokePlayTotals {
    pub gross_score: i32,
    /// Measured against the par of holes actually played, so a player
    /// through 9 compares fairly with one through 18.
    pub vs_par_gross: i32,
    pub net_score: Option<i32>,
    pub vs_par_net: Option<i32>,
    pub holes_played: i32,
}

/// Net scoring is an end-of-round concept: net and vs-par-net stay `None`
/// until all 18 holes are recorded, then use the full course par.
#[must_use]
pub fn tally_stroke_play(round: &HoleByHole, par: &[i32; 18], handicap: i32) -> StrokePlayTotals {
    let mut gross = 0;
    let mut vs_par = 0;
    let mut holes_played = 0;

    for (strokes, hole_par) in round.iter().zip(par.iter()) {
        if let Some(s) = strokes {
            gross += s;
            vs_par += s - hole_par;
            holes_played += 1;
        }
    }

    let (net_score, vs_par_net) = if holes_played == 18 {
        let net = gross - handicap;
        (Some(net), Some(net - total_par(par)))
    } else {
        (None, None)
    };

    StrokePlayTotals {
        gross_score: gross,
        vs_par_gross: vs_par,
        net_score,
        vs_par_net,
        holes_played,
    }
}
