//! HTTP-level integration tests for games and reviews.

mod common;

use axum::http::StatusCode;
use common::{body_json, create, delete, get, put_json};
use serde_json::json;
use skillcheck_db::store::MemoryStore;

fn game(name: &str, game_type: &str) -> serde_json::Value {
    json!({
        "gameName": name,
        "gameDescription": "Spot the pattern",
        "skillName": "Pattern recognition",
        "gameUrl": format!("https://games.example.com/{name}"),
        "gameImage": format!("https://games.example.com/{name}.png"),
        "gameType": game_type,
    })
}

// ---------------------------------------------------------------------------
// Games
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_game_defaults_to_active() {
    let store = MemoryStore::new();
    let json = create(&store, "/api/games", game("shapes", "PUZZLE")).await;

    assert_eq!(json["active"], true);
    assert_eq!(json["gameType"], "PUZZLE");
    assert_eq!(json["skillName"], "Pattern recognition");
}

#[tokio::test]
async fn test_deactivated_game_leaves_active_list() {
    let store = MemoryStore::new();
    let shapes = create(&store, "/api/games", game("shapes", "PUZZLE")).await;
    let words = create(&store, "/api/games", game("words", "VERBAL")).await;
    let shapes_id = shapes["id"].as_i64().unwrap();

    let response = put_json(
        common::build_test_app(store.clone()),
        &format!("/api/games/{shapes_id}"),
        json!({"active": false}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["active"], false);
    assert_eq!(updated["gameName"], "shapes");

    let active = body_json(get(common::build_test_app(store.clone()), "/api/games/active").await).await;
    assert_eq!(active, json!([words]));

    let puzzles =
        body_json(get(common::build_test_app(store), "/api/games/type/PUZZLE").await).await;
    assert_eq!(puzzles, json!([updated]));
}

#[tokio::test]
async fn test_game_crud_not_found_paths() {
    let store = MemoryStore::new();

    let response = get(common::build_test_app(store.clone()), "/api/games/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = put_json(
        common::build_test_app(store.clone()),
        "/api/games/404",
        json!({"gameName": "ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(store), "/api/games/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Reviews
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_review_round_trip() {
    let store = MemoryStore::new();
    let review = create(
        &store,
        "/api/reviews",
        json!({"userId": 4, "message": "Loved the puzzle game"}),
    )
    .await;
    let id = review["reviewId"].as_i64().unwrap();
    create(&store, "/api/reviews", json!({"userId": 5, "message": "Too easy"})).await;

    let by_user = body_json(get(common::build_test_app(store.clone()), "/api/reviews/user/4").await)
        .await;
    assert_eq!(by_user, json!([review]));

    let response = put_json(
        common::build_test_app(store.clone()),
        &format!("/api/reviews/{id}"),
        json!({"reviewId": 99, "message": "Loved it, would retake"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["reviewId"], id);
    assert_eq!(updated["userId"], 4);
    assert_eq!(updated["message"], "Loved it, would retake");

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/api/reviews/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let all = body_json(get(common::build_test_app(store), "/api/reviews").await).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}
