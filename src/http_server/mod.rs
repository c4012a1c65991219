//! # Starblog HTTP Server Module
//!
//! Axum application exposing the people/planets catalog and the favorites
//! of the default user.
//!
//! # Endpoints
//!
//! - `/` - Sitemap
//! - `/people`, `/planets`, `/users` - Catalog reads
//! - `/users/favorites`, `/favorite/*` - Favorites

pub mod catalog_routes;
pub mod config;
pub mod errors;
pub mod extract;
pub mod favorite_routes;
pub mod response;
pub mod routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{app, build_router, AppState, HttpServer};
pub use routes::{routes, RouteInfo};
