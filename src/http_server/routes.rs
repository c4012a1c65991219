//! Route Table
//!
//! Every endpoint is declared once as an [`Endpoint`]. The same table
//! mounts the handlers and feeds the sitemap served at `GET /`, so the
//! two cannot drift apart.

use std::iter;
use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::{self, MethodRouter};
use axum::{Json, Router};
use serde::Serialize;

use super::catalog_routes::catalog_endpoints;
use super::favorite_routes::favorite_endpoints;
use super::server::AppState;

/// One registered route, as listed in the sitemap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    /// Path with `{name}` placeholders for parameters
    pub path: &'static str,
}

/// The sitemap's own entry
pub const SITEMAP: RouteInfo = RouteInfo {
    method: "GET",
    path: "/",
};

/// A route paired with the handler that serves it
pub struct Endpoint {
    pub info: RouteInfo,
    router: MethodRouter<AppState>,
}

impl Endpoint {
    pub fn get<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            info: RouteInfo { method: "GET", path },
            router: routing::get(handler),
        }
    }

    pub fn post<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            info: RouteInfo {
                method: "POST",
                path,
            },
            router: routing::post(handler),
        }
    }

    pub fn delete<H, T>(path: &'static str, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            info: RouteInfo {
                method: "DELETE",
                path,
            },
            router: routing::delete(handler),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SitemapResponse {
    pub routes: Vec<RouteInfo>,
}

/// Every endpoint except the sitemap
pub fn endpoints() -> Vec<Endpoint> {
    let mut all = catalog_endpoints();
    all.extend(favorite_endpoints());
    all
}

/// Sitemap contents: the sitemap itself followed by every endpoint
pub fn routes() -> Vec<RouteInfo> {
    route_table(&endpoints()).to_vec()
}

/// Mount the endpoints and a sitemap describing exactly them.
pub fn mount(endpoints: Vec<Endpoint>) -> Router<AppState> {
    let table = route_table(&endpoints);
    let sitemap = routing::get(move || sitemap_handler(Arc::clone(&table)));

    endpoints
        .into_iter()
        .fold(Router::new().route(SITEMAP.path, sitemap), |router, endpoint| {
            router.route(&axum_path(endpoint.info.path), endpoint.router)
        })
}

fn route_table(endpoints: &[Endpoint]) -> Arc<[RouteInfo]> {
    iter::once(SITEMAP)
        .chain(endpoints.iter().map(|endpoint| endpoint.info))
        .collect()
}

async fn sitemap_handler(table: Arc<[RouteInfo]>) -> Json<SitemapResponse> {
    Json(SitemapResponse {
        routes: table.to_vec(),
    })
}

/// `/people/{people_id}` -> `/people/:people_id`
fn axum_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            match segment
                .strip_prefix('{')
                .and_then(|rest| rest.strip_suffix('}'))
            {
                Some(name) => format!(":{}", name),
                None => segment.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
