//! Route definitions for the Haven HTTP API.
//!
//! `/health` sits at the root; everything else is mounted under `/api/v1` in
//! three groups. Public routes carry no auth. Protected routes pass the
//! identity middleware. Admin routes pass the identity middleware and then
//! the admin role gate.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .merge(admin_routes(state.clone()));

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api/v1", api_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&state.config.server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Listings, content, auth, and lead capture. No identity required.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(handlers::property::list_properties))
        .route("/properties/{id}", get(handlers::property::get_property))
        .route(
            "/properties/slug/{slug}",
            get(handlers::property::get_property_by_slug),
        )
        .route("/blog", get(handlers::blog::list_posts))
        .route("/blog/{id}", get(handlers::blog::get_post))
        .route("/blog/slug/{slug}", get(handlers::blog::get_post_by_slug))
        .route(
            "/blog/category/{category}",
            get(handlers::blog::list_by_category),
        )
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/contact", post(handlers::contact::submit_contact))
        .route(
            "/newsletter/subscribe",
            post(handlers::newsletter::subscribe),
        )
        .route(
            "/brochure/download",
            post(handlers::brochure::download_brochure),
        )
}

/// Caller-scoped routes behind the identity middleware.
fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(handlers::user::get_profile).put(handlers::user::update_profile),
        )
        .route("/favorites", get(handlers::favorite::list_favorites))
        .route(
            "/favorites/{property_id}",
            post(handlers::favorite::add_favorite).delete(handlers::favorite::remove_favorite),
        )
        .route("/reviews", post(handlers::review::create_review))
        .route("/reviews/user", get(handlers::review::list_my_reviews))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Administration routes behind the identity middleware and the admin gate.
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Properties
        .route(
            "/admin/properties",
            post(handlers::property::create_property),
        )
        .route(
            "/admin/properties/{id}",
            put(handlers::property::update_property).delete(handlers::property::delete_property),
        )
        // Blog
        .route("/admin/blog", post(handlers::blog::create_post))
        .route(
            "/admin/blog/{id}",
            put(handlers::blog::update_post).delete(handlers::blog::delete_post),
        )
        // Contacts
        .route("/admin/contacts", get(handlers::contact::list_contacts))
        .route("/admin/contacts/{id}", get(handlers::contact::get_contact))
        // Newsletter
        .route(
            "/admin/newsletter/subscribers",
            get(handlers::newsletter::list_subscribers),
        )
        .route(
            "/admin/newsletter/subscribers/{email}",
            axum::routing::delete(handlers::newsletter::unsubscribe),
        )
        // Dashboard
        .route("/admin/dashboard/stats", get(handlers::dashboard::stats))
        .route(
            "/admin/dashboard/recent-contacts",
            get(handlers::dashboard::recent_contacts),
        )
        // Users
        .route("/admin/users", get(handlers::user::list_users))
        .route(
            "/admin/users/{id}",
            get(handlers::user::get_user)
                .put(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        // Uploads
        .route("/admin/upload", post(handlers::upload::upload_image))
        .route_layer(axum_middleware::from_fn(middleware::rbac::require_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}
