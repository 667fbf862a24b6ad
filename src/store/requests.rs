use rocket::response::status;

use super::*;

/// Records a submitted score under the current server time.
/// The body is checked by hand rather than through a typed guard so that a
/// type mismatch answers with the API's own 400 body instead of a catcher
/// page: `playerName` must be a non-empty string and `score` any number.
#[post("/save-score", format = "json", data = "<submission>")]
pub fn save_score(
    submission: Json<Value>,
    store: &State<ScoreStore>,
) -> RequestResult<status::Created<Json<ApiMessage>>> {
    let submission = submission.0;
    let player_name = submission.get("playerName").and_then(Value::as_str);
    let score = submission.get("score").and_then(Value::as_f64);

    match (player_name, score) {
        (Some(player_name), Some(score)) if !player_name.is_empty() => {
            store.append(ScoreRecord::new(player_name.to_owned(), score));
            Ok(status::Created::new("/high-scores")
                .body(Json(ApiMessage::new("Score saved!".to_owned()))))
        }
        _ => Err(RequestError::InvalidData),
    }
}

/// Fetches the leaderboard: up to ten entries, highest score first.
#[get("/high-scores")]
pub fn high_scores(store: &State<ScoreStore>) -> Json<Vec<LeaderboardEntry>> {
    Json(store.top_n(LEADERBOARD_SIZE))
}
