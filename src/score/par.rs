use crate::model::score::HoleByHole;

#[must_use]
pub fn total_par(par: &[i32; 18]) -> i32 {
    par.iter().sum()
}

/// Par consumed so far: the sum of par values for holes that have a
/// recorded score. Keeps vs-par comparisons fair for incomplete rounds.
#[must_use]
pub fn prorated_par(round: &HoleByHole, par: &[i32; 18]) -> i32 {
    round
        .iter()
        .zip(par.iter())
        .filter(|(strokes, _)| strokes.is_some())
        .map(|(_, p)| *p)
        .sum()
}

/// Quota scaled linearly to holes played. Fractional at intermediate hole
/// counts, whole only at 0 or 18.
#[must_use]
pub fn prorated_quota(holes_played: i32, quota: i32) -> f64 {
    f64::from(quota) * f64::from(holes_played) / 18.0
}
