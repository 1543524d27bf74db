use golf_leaderboard::assign_positions;
use golf_leaderboard::model::types::Rank;

#[test]
fn tied_group_shares_a_position_and_the_next_rank_skips() {
    // already sorted by relevance: -2, -2, 0, 1, 1, 1, 3
    let keys = [-2, -2, 0, 1, 1, 1, 3];
    let ranks = assign_positions(&keys, |k| Some(*k));

    let labels: Vec<String> = ranks.iter().map(Rank::to_string).collect();
    assert_eq!(labels, vec!["T1", "T1", "3", "T4", "T4", "T4", "7"]);
}

#[test]
fn ineligible_rows_get_the_sentinel_and_consume_no_positions() {
    // last two rows are players who have not started
    let rows = [Some(0), Some(2), None, None];
    let ranks = assign_positions(&rows, |k| *k);

    assert_eq!(ranks[0], Rank::Standing { position: 1, tied: false });
    assert_eq!(ranks[1], Rank::Standing { position: 2, tied: false });
    assert_eq!(ranks[2], Rank::Unranked);
    assert_eq!(ranks[3], Rank::Unranked);
    assert_eq!(ranks[2].to_string(), "-");
}

#[test]
fn equal_keys_are_always_a_tie_never_broken_by_position() {
    let keys = [5, 5];
    let ranks = assign_positions(&keys, |k| Some(*k));
    assert_eq!(ranks[0], ranks[1]);
    assert_eq!(ranks[0], Rank::Standing { position: 1, tied: true });
}

#[test]
fn everyone_ineligible_means_nobody_ranked() {
    let rows: [Option<i32>; 3] = [None, None, None];
    let ranks = assign_positions(&rows, |k| *k);
    assert!(ranks.iter().all(|r| *r == Rank::Unranked));
}

#[test]
fn empty_input_yields_empty_labels() {
    let rows: [i32; 0] = [];
    let ranks = assign_positions(&rows, |k| Some(*k));
    assert!(ranks.is_empty());
}
