use rocket::serde::json::{Json, Value};
use rocket::*;

use std::sync::Mutex;

mod request_error;
pub mod requests;
mod score;

pub use request_error::*;
pub use score::{GameScore, LeaderboardEntry, ScoreRecord};

/// How many entries a leaderboard response may hold.
pub const LEADERBOARD_SIZE: usize = 10;

/// In-memory score storage. Append-only, unbounded, gone on restart.
/// Constructed once at launch and handed to Rocket as managed state.
pub struct ScoreStore {
    scores: Mutex<Vec<ScoreRecord>>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self {
            scores: Mutex::new(Vec::new()),
        }
    }

    /// Adds a record to the end of the store.
    pub fn append(&self, record: ScoreRecord) {
        self.scores
            .lock()
            .expect("score store lock poisoned")
            .push(record);
    }

    /// Returns up to `n` records, highest score first, projected down to
    /// the fields that go on the wire. Equal scores are broken by
    /// submission time, earliest first.
    pub fn top_n(&self, n: usize) -> Vec<LeaderboardEntry> {
        let scores = self.scores.lock().expect("score store lock poisoned");

        let mut top: Vec<&ScoreRecord> = scores.iter().collect();
        top.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.date.cmp(&b.date)));

        top.into_iter().take(n).map(LeaderboardEntry::from).collect()
    }
}
