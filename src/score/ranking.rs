use crate::model::types::{LeaderboardEntry, Rank};

/// Standard competition ranking over an already-sorted list. `key` returns
/// `None` for rows that should not be ranked at all; equal keys share a
/// position and carry the tie flag, and the next distinct key resumes at
/// one past the count of rows ranked so far (two tied at T2 are followed
/// by 4, not 3).
pub fn assign_positions<T, K, F>(rows: &[T], key: F) -> Vec<Rank>
where
    K: PartialEq,
    F: Fn(&T) -> Option<K>,
{
    let keys: Vec<Option<K>> = rows.iter().map(key).collect();
    let mut labels = Vec::with_capacity(rows.len());
    let mut ranked = 0;
    let mut idx = 0;

    while idx < keys.len() {
        let Some(k) = &keys[idx] else {
            labels.push(Rank::Unranked);
            idx += 1;
            continue;
        };

        let mut end = idx + 1;
        while end < keys.len() && keys[end].as_ref() == Some(k) {
            end += 1;
        }

        let group = end - idx;
        let standing = Rank::Standing {
            position: ranked + 1,
            tied: group > 1,
        };
        for _ in 0..group {
            labels.push(standing);
        }

        ranked += group;
        idx = end;
    }

    labels
}

/// Gross/net ranking: lower vs-par is better; rows must already be in
/// stroke-play order. Players yet to start are unranked.
#[must_use]
pub fn rank_by_vs_par(entries: &[LeaderboardEntry]) -> Vec<Rank> {
    assign_positions(entries, |e| (e.holes_played > 0).then_some(e.vs_par_gross))
}

/// Stableford ranking: higher points is better; rows must already be in
/// stableford order. Equal points are a tie regardless of vs-quota.
#[must_use]
pub fn rank_by_points(entries: &[LeaderboardEntry]) -> Vec<Rank> {
    assign_positions(entries, |e| {
        (e.holes_played > 0).then_some(e.stableford_points)
    })
}
