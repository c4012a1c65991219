//! Favorite HTTP Routes
//!
//! Listing, adding and removing favorites. All of them act on
//! [`DEFAULT_USER_ID`] until requests carry an identity.

use axum::Json;

use crate::db::{queries, FavoriteTarget, DEFAULT_USER_ID};

use super::errors::{ApiError, ApiResult};
use super::extract::{DbConn, EntityId};
use super::response::{FavoriteEntry, MessageResponse};
use super::routes::Endpoint;

/// Favorite endpoints
pub fn favorite_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("/users/favorites", list_favorites_handler),
        Endpoint::post("/favorite/planet/{planet_id}", add_favorite_planet_handler),
        Endpoint::post("/favorite/people/{people_id}", add_favorite_people_handler),
        Endpoint::delete("/favorite/planet/{planet_id}", delete_favorite_planet_handler),
        Endpoint::delete("/favorite/people/{people_id}", delete_favorite_people_handler),
    ]
}

async fn list_favorites_handler(mut conn: DbConn) -> ApiResult<Json<Vec<FavoriteEntry>>> {
    let favorites = queries::list_favorites(&mut conn, DEFAULT_USER_ID).await?;
    Ok(Json(favorites.into_iter().map(FavoriteEntry::from).collect()))
}

async fn add_favorite_planet_handler(
    EntityId(planet_id): EntityId,
    mut conn: DbConn,
) -> ApiResult<Json<MessageResponse>> {
    let favorite_id =
        queries::add_favorite(&mut conn, DEFAULT_USER_ID, FavoriteTarget::Planet(planet_id))
            .await?
            .ok_or(ApiError::NotFound("Planet not found"))?;

    tracing::info!(user_id = DEFAULT_USER_ID, planet_id, favorite_id, "favorite planet added");
    Ok(Json(MessageResponse::new("Favorite planet added successfully")))
}

async fn add_favorite_people_handler(
    EntityId(people_id): EntityId,
    mut conn: DbConn,
) -> ApiResult<Json<MessageResponse>> {
    let favorite_id =
        queries::add_favorite(&mut conn, DEFAULT_USER_ID, FavoriteTarget::Person(people_id))
            .await?
            .ok_or(ApiError::NotFound("Person not found"))?;

    tracing::info!(user_id = DEFAULT_USER_ID, people_id, favorite_id, "favorite people added");
    Ok(Json(MessageResponse::new("Favorite people added successfully")))
}

async fn delete_favorite_planet_handler(
    EntityId(planet_id): EntityId,
    mut conn: DbConn,
) -> ApiResult<Json<MessageResponse>> {
    let removed =
        queries::remove_favorite(&mut conn, DEFAULT_USER_ID, FavoriteTarget::Planet(planet_id))
            .await?;
    if !removed {
        return Err(ApiError::NotFound("Favorite planet not found"));
    }

    tracing::info!(user_id = DEFAULT_USER_ID, planet_id, "favorite planet deleted");
    Ok(Json(MessageResponse::new("Favorite planet deleted successfully")))
}

async fn delete_favorite_people_handler(
    EntityId(people_id): EntityId,
    mut conn: DbConn,
) -> ApiResult<Json<MessageResponse>> {
    let removed =
        queries::remove_favorite(&mut conn, DEFAULT_USER_ID, FavoriteTarget::Person(people_id))
            .await?;
    if !removed {
        return Err(ApiError::NotFound("Favorite people not found"));
    }

    tracing::info!(user_id = DEFAULT_USER_ID, people_id, "favorite people deleted");
    Ok(Json(MessageResponse::new("Favorite people deleted successfully")))
}
