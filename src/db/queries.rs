//! Row-level operations.
//!
//! Every function takes the caller's connection and runs exactly one
//! statement, so each call commits on its own.

use sqlx::SqliteConnection;

use super::models::{Favorite, FavoriteTarget, Person, Planet, User};

// ==================
// People
// ==================

pub async fn list_people(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Person>> {
    sqlx::query_as::<_, Person>(
        "SELECT id, name, birth_year, gender, height, eye_color, hair_color FROM people ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await
}

pub async fn get_person(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Person>> {
    sqlx::query_as::<_, Person>(
        "SELECT id, name, birth_year, gender, height, eye_color, hair_color FROM people WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

// ==================
// Planets
// ==================

pub async fn list_planets(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Planet>> {
    sqlx::query_as::<_, Planet>(
        "SELECT id, name, climate, terrain, population, diameter FROM planets ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await
}

pub async fn get_planet(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<Planet>> {
    sqlx::query_as::<_, Planet>(
        "SELECT id, name, climate, terrain, population, diameter FROM planets WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
}

// ==================
// Users
// ==================

pub async fn list_users(conn: &mut SqliteConnection) -> sqlx::Result<Vec<User>> {
    sqlx::query_as::<_, User>(
        "SELECT id, username, email, password, is_active FROM users ORDER BY id",
    )
    .fetch_all(&mut *conn)
    .await
}

// ==================
// Favorites
// ==================

pub async fn list_favorites(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> sqlx::Result<Vec<Favorite>> {
    sqlx::query_as::<_, Favorite>(
        "SELECT id, user_id, planet_id, people_id FROM favorites WHERE user_id = ? ORDER BY id",
    )
    .bind(user_id)
    .fetch_all(&mut *conn)
    .await
}

/// Insert a favorite for `user_id`.
///
/// The target's existence check and the insert are a single
/// `INSERT ... SELECT`. Returns the new row id, or `None` when the planet
/// or person does not exist.
pub async fn add_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    target: FavoriteTarget,
) -> sqlx::Result<Option<i64>> {
    let sql = match target {
        FavoriteTarget::Planet(_) => {
            "INSERT INTO favorites (user_id, planet_id) SELECT ?, id FROM planets WHERE id = ?"
        }
        FavoriteTarget::Person(_) => {
            "INSERT INTO favorites (user_id, people_id) SELECT ?, id FROM people WHERE id = ?"
        }
    };
    let result = sqlx::query(sql)
        .bind(user_id)
        .bind(target.id())
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        Ok(None)
    } else {
        Ok(Some(result.last_insert_rowid()))
    }
}

/// Delete the oldest favorite of `user_id` pointing at `target`.
/// Returns false when there was nothing to delete.
pub async fn remove_favorite(
    conn: &mut SqliteConnection,
    user_id: i64,
    target: FavoriteTarget,
) -> sqlx::Result<bool> {
    let sql = match target {
        FavoriteTarget::Planet(_) => {
            "DELETE FROM favorites WHERE id = \
             (SELECT id FROM favorites WHERE user_id = ? AND planet_id = ? ORDER BY id LIMIT 1)"
        }
        FavoriteTarget::Person(_) => {
            "DELETE FROM favorites WHERE id = \
             (SELECT id FROM favorites WHERE user_id = ? AND people_id = ? ORDER BY id LIMIT 1)"
        }
    };
    let result = sqlx::query(sql)
        .bind(user_id)
        .bind(target.id())
        .execute(&mut *conn)
        .await?;

    Ok(result.rows_affected() > 0)
}
