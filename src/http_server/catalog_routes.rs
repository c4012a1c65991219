//! Catalog HTTP Routes
//!
//! Read-only endpoints for people, planets and users.

use axum::Json;

use crate::db::queries;

use super::errors::{ApiError, ApiResult};
use super::extract::{DbConn, EntityId};
use super::response::{PersonSummary, PlanetSummary, UserSummary};
use super::routes::Endpoint;

/// Catalog endpoints
pub fn catalog_endpoints() -> Vec<Endpoint> {
    vec![
        Endpoint::get("/people", list_people_handler),
        Endpoint::get("/people/{people_id}", get_person_handler),
        Endpoint::get("/planets", list_planets_handler),
        Endpoint::get("/planets/{planet_id}", get_planet_handler),
        Endpoint::get("/users", list_users_handler),
    ]
}

async fn list_people_handler(mut conn: DbConn) -> ApiResult<Json<Vec<PersonSummary>>> {
    let people = queries::list_people(&mut conn).await?;
    Ok(Json(people.into_iter().map(PersonSummary::from).collect()))
}

async fn get_person_handler(
    EntityId(people_id): EntityId,
    mut conn: DbConn,
) -> ApiResult<Json<PersonSummary>> {
    let person = queries::get_person(&mut conn, people_id)
        .await?
        .ok_or(ApiError::NotFound("Person not found"))?;
    Ok(Json(person.into()))
}

async fn list_planets_handler(mut conn: DbConn) -> ApiResult<Json<Vec<PlanetSummary>>> {
    let planets = queries::list_planets(&mut conn).await?;
    Ok(Json(planets.into_iter().map(PlanetSummary::from).collect()))
}

async fn get_planet_handler(
    EntityId(planet_id): EntityId,
    mut conn: DbConn,
) -> ApiResult<Json<PlanetSummary>> {
    let planet = queries::get_planet(&mut conn, planet_id)
        .await?
        .ok_or(ApiError::NotFound("Planet not found"))?;
    Ok(Json(planet.into()))
}

async fn list_users_handler(mut conn: DbConn) -> ApiResult<Json<Vec<UserSummary>>> {
    let users = queries::list_users(&mut conn).await?;
    Ok(Json(users.into_iter().map(UserSummary::from).collect()))
}
