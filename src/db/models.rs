//! Stored record types.

use serde::{Deserialize, Serialize};

/// Owner of every favorite until there is a notion of a logged-in user.
pub const DEFAULT_USER_ID: i64 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2id hash
    #[serde(skip_serializing)]
    pub password: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Planet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub terrain: Option<String>,
    #[serde(default)]
    pub population: Option<i64>,
    #[serde(default)]
    pub diameter: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
}

/// Join row between a user and exactly one planet or person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Favorite {
    pub id: i64,
    pub user_id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i64),
    Person(i64),
}

impl FavoriteTarget {
    /// Primary key of the planet or person
    pub fn id(&self) -> i64 {
        match self {
            FavoriteTarget::Planet(id) | FavoriteTarget::Person(id) => *id,
        }
    }
}
