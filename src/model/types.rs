use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScoringError;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub handicap: i32,
    /// Supplied by the data layer (36 - handicap by league convention);
    /// never recomputed here.
    pub quota: i32,
    pub flight: String,
    pub in_skins: bool,
    pub paid: bool,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScoringFormat {
    Gross,
    Net,
    Both,
    Stableford,
}

impl FromStr for ScoringFormat {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gross" => Ok(Self::Gross),
            "net" => Ok(Self::Net),
            "both" => Ok(Self::Both),
            "stableford" => Ok(Self::Stableford),
            other => Err(ScoringError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Gross => "gross",
            Self::Net => "net",
            Self::Both => "both",
            Self::Stableford => "stableford",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkinsType {
    Gross,
    Net,
}

impl FromStr for SkinsType {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gross" => Ok(Self::Gross),
            "net" => Ok(Self::Net),
            other => Err(ScoringError::UnknownSkinsType(other.to_string())),
        }
    }
}

impl fmt::Display for SkinsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Gross => "gross",
            Self::Net => "net",
        };
        write!(f, "{s}")
    }
}

/// Points awarded per strokes-relative-to-par bucket.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct PointsTable {
    pub albatross: i32,
    pub eagle: i32,
    pub birdie: i32,
    pub par: i32,
    pub bogey: i32,
    pub double_plus: i32,
}

impl Default for PointsTable {
    fn default() -> Self {
        Self {
            albatross: 16,
            eagle: 8,
            birdie: 4,
            par: 2,
            bogey: 1,
            double_plus: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct SkinsConfig {
    pub enabled: bool,
    pub buy_in: f64,
    pub skins_type: SkinsType,
    pub carryover: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TournamentConfig {
    pub par: [i32; 18],
    pub format: ScoringFormat,
    pub points: PointsTable,
    pub skins: SkinsConfig,
}

/// One display-ready leaderboard row. Net figures stay `None` until the
/// round is complete; vs_quota is prorated until then.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaderboardEntry {
    pub player_id: i64,
    pub player_name: String,
    pub flight: String,
    pub handicap: i32,
    pub quota: i32,
    pub gross_score: i32,
    pub net_score: Option<i32>,
    pub vs_par_gross: i32,
    pub vs_par_net: Option<i32>,
    pub stableford_points: i32,
    pub vs_quota: f64,
    pub holes_played: i32,
    pub is_complete: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkinWinner {
    pub hole: i32,
    pub player_id: i64,
    pub player_name: String,
    /// The comparison score that took the hole; net-adjusted when skins
    /// are played net.
    pub winning_score: i32,
    pub skins_won: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct SkinsResult {
    pub winners: Vec<SkinWinner>,
    pub total_pot: f64,
    pub total_skins: i32,
    pub value_per_skin: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SkinsStanding {
    pub player_id: i64,
    pub player_name: String,
    pub skins: i32,
    pub winnings: f64,
    pub holes_won: Vec<i32>,
}

/// A competition-ranking label. Players who have not started are unranked
/// and display as "-"; tied players share a position and display as "T2".
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Unranked,
    Standing { position: usize, tied: bool },
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unranked => write!(f, "-"),
            Self::Standing { position, tied: true } => write!(f, "T{position}"),
            Self::Standing { position, tied: false } => write!(f, "{position}"),
        }
    }
}
