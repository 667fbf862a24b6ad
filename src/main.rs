use rocket::response::content::RawHtml;
use rocket::*;
use store::ScoreStore;

mod store;

/// The browser game served at the root route. The page bundles its own
/// client-side game loop (Phaser 3); the server only hands it out.
const GAME_PAGE: &str = include_str!("../assets/game.html");

const DEFAULT_PORT: u16 = 8000;

#[launch]
fn rocket() -> _ {
    // Read optional overrides from the environment
    dotenv::dotenv().ok();
    let port = dotenv::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let figment = Config::figment().merge(("port", port));

    // Build the rocket
    rocket::custom(figment)
        .mount(
            "/",
            routes![
                index,
                store::requests::save_score,
                store::requests::high_scores
            ],
        )
        .manage(ScoreStore::new())
}

#[get("/")]
fn index() -> RawHtml<&'static str> {
    RawHtml(GAME_PAGE)
}
