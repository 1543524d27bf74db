//! String forms for leaderboard values. These stop at plain strings; the
//! rendering surface around the engine decides markup.

#[must_use]
pub fn short_player_name(player_name: &str) -> String {
    let parts: Vec<&str> = player_name.split_whitespace().collect();

    if parts.len() >= 2 {
        let first_initial = parts[0].chars().next().unwrap_or(' ');
        let last_name = parts[parts.len() - 1];
        format!("{first_initial}. {last_name}")
    } else {
        player_name.to_string()
    }
}

/// "E" for even (or a not-yet-defined net figure), otherwise signed with an
/// explicit plus.
#[must_use]
pub fn vs_par_label(vs_par: Option<i32>) -> String {
    match vs_par {
        None | Some(0) => "E".to_string(),
        Some(n) if n > 0 => format!("+{n}"),
        Some(n) => n.to_string(),
    }
}

/// "-" before the first hole, "F" for a finished round, the hole count in
/// between.
#[must_use]
pub fn holes_label(holes_played: i32) -> String {
    match holes_played {
        0 => "-".to_string(),
        18 => "F".to_string(),
        n => n.to_string(),
    }
}

#[must_use]
pub fn money_label(amount: f64) -> String {
    format!("${amount:.2}")
}
