//! # Response Formatting
//!
//! JSON shapes returned by the handlers. Each type carries only the
//! documented fields; stored records are converted through `From`.

use serde::Serialize;

use crate::db::{Favorite, Person, Planet, User};

/// `{"message": ...}` body used for confirmations and errors alike
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonSummary {
    pub id: i64,
    pub name: String,
}

impl From<Person> for PersonSummary {
    fn from(person: Person) -> Self {
        Self {
            id: person.id,
            name: person.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetSummary {
    pub id: i64,
    pub name: String,
}

impl From<Planet> for PlanetSummary {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Favorite as listed for its owner. The unused reference serializes as null.
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteEntry {
    pub id: i64,
    pub planet_id: Option<i64>,
    pub people_id: Option<i64>,
}

impl From<Favorite> for FavoriteEntry {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id,
            planet_id: favorite.planet_id,
            people_id: favorite.people_id,
        }
    }
}
