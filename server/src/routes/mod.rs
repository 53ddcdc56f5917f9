//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos renders every app route on the server with the session still
//! loading, so guarded content never appears in SSR markup. The browser bundle
//! under `/pkg` hydrates the page and loads the real session.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Leptos SSR app + hydration assets + health probe.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(portal_client::app::App);

    let pkg_dir = config.pkg_dir.clone().unwrap_or_else(|| {
        PathBuf::from(leptos_options.site_root.as_ref()).join(leptos_options.site_pkg_dir.as_ref())
    });
    tracing::debug!(pkg_dir = %pkg_dir.display(), "serving hydration assets");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || portal_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
