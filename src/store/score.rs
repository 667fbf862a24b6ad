use rocket::serde::{Deserialize, Serialize};

use std::time::SystemTime;

pub type GameScore = f64;

/// A stored score submission. `date` is assigned from server time at
/// submission and never serialized back out.
pub struct ScoreRecord {
    pub player_name: String,
    pub score: GameScore,
    pub date: SystemTime,
}

impl ScoreRecord {
    pub fn new(player_name: String, score: GameScore) -> Self {
        Self {
            player_name,
            score,
            date: SystemTime::now(),
        }
    }
}

/// The wire projection of a record: name and score only.
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub player_name: String,
    pub score: GameScore,
}

impl From<&ScoreRecord> for LeaderboardEntry {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            player_name: record.player_name.clone(),
            score: record.score,
        }
    }
}
