//! Favorites Contract Tests
//!
//! Add/list/delete cycle for the default user:
//! - an added favorite shows up in `/users/favorites`
//! - a delete removes it; deleting again is 404
//! - adding a favorite for a missing planet or person is 404
//! - favorites of other users are never listed

mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};
use starblog::db::{queries, FavoriteTarget};
use starblog::http_server::app;

use common::{get, keys, seeded_db, send, test_app};

fn planet_ids(favorites: &Value) -> Vec<i64> {
    favorites
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["planet_id"].as_i64())
        .collect()
}

fn people_ids(favorites: &Value) -> Vec<i64> {
    favorites
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|f| f["people_id"].as_i64())
        .collect()
}

// =============================================================================
// Planet Favorites
// =============================================================================

#[tokio::test]
async fn test_planet_favorite_lifecycle() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/favorite/planet/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Favorite planet added successfully"}));

    let (_, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(planet_ids(&favorites), vec![2]);

    let (status, body) = send(&app, Method::DELETE, "/favorite/planet/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Favorite planet deleted successfully"}));

    let (_, favorites) = get(&app, "/users/favorites").await;
    assert!(planet_ids(&favorites).is_empty());

    let (status, body) = send(&app, Method::DELETE, "/favorite/planet/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Favorite planet not found"}));
}

#[tokio::test]
async fn test_favorite_missing_planet_is_404() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/favorite/planet/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Planet not found"}));

    let (_, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(favorites, json!([]));
}

// =============================================================================
// People Favorites
// =============================================================================

#[tokio::test]
async fn test_people_favorite_lifecycle() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/favorite/people/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Favorite people added successfully"}));

    let (_, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(people_ids(&favorites), vec![3]);

    let (status, body) = send(&app, Method::DELETE, "/favorite/people/3/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Favorite people deleted successfully"}));

    let (status, body) = send(&app, Method::DELETE, "/favorite/people/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Favorite people not found"}));
}

#[tokio::test]
async fn test_favorite_missing_person_is_404() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::POST, "/favorite/people/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Person not found"}));
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_favorites_listing_shape() {
    let app = test_app().await;

    send(&app, Method::POST, "/favorite/planet/1").await;
    send(&app, Method::POST, "/favorite/people/1").await;

    let (status, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(status, StatusCode::OK);

    let entries = favorites.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert_eq!(keys(entry), vec!["id", "people_id", "planet_id"]);
    }
    assert_eq!(entries[0]["planet_id"], 1);
    assert_eq!(entries[0]["people_id"], Value::Null);
    assert_eq!(entries[1]["people_id"], 1);
    assert_eq!(entries[1]["planet_id"], Value::Null);
}

#[tokio::test]
async fn test_planet_and_person_with_same_id_are_distinct() {
    let app = test_app().await;

    send(&app, Method::POST, "/favorite/people/1").await;

    let (status, _) = send(&app, Method::DELETE, "/favorite/planet/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(people_ids(&favorites), vec![1]);
}

#[tokio::test]
async fn test_duplicate_favorites_are_removed_one_at_a_time() {
    let app = test_app().await;

    send(&app, Method::POST, "/favorite/planet/1").await;
    send(&app, Method::POST, "/favorite/planet/1").await;

    let (_, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(planet_ids(&favorites), vec![1, 1]);

    let (status, _) = send(&app, Method::DELETE, "/favorite/planet/1").await;
    assert_eq!(status, StatusCode::OK);
    let (_, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(planet_ids(&favorites), vec![1]);
}

#[tokio::test]
async fn test_other_users_favorites_are_not_listed() {
    let db = seeded_db().await;
    {
        let mut conn = db.acquire().await.unwrap();
        queries::add_favorite(&mut conn, 2, FavoriteTarget::Planet(2))
            .await
            .unwrap()
            .unwrap();
    }
    let app = app(db);

    let (_, favorites) = get(&app, "/users/favorites").await;
    assert_eq!(favorites, json!([]));

    // Deleting only touches the default user's rows
    let (status, _) = send(&app, Method::DELETE, "/favorite/planet/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
