//! # Reference Data Loading
//!
//! Loads users, people and planets from a JSON seed document. Rows carry
//! explicit ids and are inserted with `INSERT OR IGNORE`, so running the
//! same document twice leaves the store unchanged.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::{Person, Planet};
use super::password::hash_password;
use super::Database;

const BUILTIN: &str = include_str!("seed.json");

/// Seeding errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid seed document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("Password hashing failed for '{username}': {reason}")]
    Hashing { username: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// User entry in a seed document. The password is plaintext here and is
/// hashed before it is stored.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedDocument {
    #[serde(default)]
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub planets: Vec<Planet>,
}

/// Rows actually inserted, per table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub users: u64,
    pub people: u64,
    pub planets: u64,
}

impl SeedDocument {
    /// The bundled Star Wars dataset
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the document in one transaction.
    pub async fn apply(&self, db: &Database) -> Result<SeedReport, SeedError> {
        let mut report = SeedReport::default();
        let mut tx = db.pool().begin().await?;

        for user in &self.users {
            let hash = hash_password(&user.password).map_err(|e| SeedError::Hashing {
                username: user.username.clone(),
                reason: e.to_string(),
            })?;

            let result = sqlx::query(
                "INSERT OR IGNORE INTO users (id, username, email, password, is_active) \
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(user.id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&hash)
            .bind(user.is_active)
            .execute(&mut *tx)
            .await?;
            report.users += result.rows_affected();
        }

        for person in &self.people {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO people (id, name, birth_year, gender, height, eye_color, hair_color) \
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(person.id)
            .bind(&person.name)
            .bind(&person.birth_year)
            .bind(&person.gender)
            .bind(person.height)
            .bind(&person.eye_color)
            .bind(&person.hair_color)
            .execute(&mut *tx)
            .await?;
            report.people += result.rows_affected();
        }

        for planet in &self.planets {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO planets (id, name, climate, terrain, population, diameter) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(planet.id)
            .bind(&planet.name)
            .bind(&planet.climate)
            .bind(&planet.terrain)
            .bind(planet.population)
            .bind(planet.diameter)
            .execute(&mut *tx)
            .await?;
            report.planets += result.rows_affected();
        }

        tx.commit().await?;

        tracing::info!(
            users = report.users,
            people = report.people,
            planets = report.planets,
            "seed applied"
        );
        Ok(report)
    }
}
