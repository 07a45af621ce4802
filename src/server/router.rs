use axum::middleware;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::{admin, catalog, health, AppState};

fn admin_router(state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(admin::logout))
        .route("/dashboard", get(admin::dashboard))
        .route("/uploads/{kind}/{filename}", put(admin::upload))
        .route("/{kind}", get(admin::list).post(admin::create))
        .route(
            "/{kind}/{id}",
            get(admin::get).put(admin::update).delete(admin::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::require_session,
        ));

    Router::new()
        .route("/login", post(admin::login))
        .merge(protected)
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/categories/{slug}", get(catalog::category))
        .route("/categories/{slug}/preview", get(catalog::category_preview))
        .route("/products", get(catalog::list_products))
        .route("/blog", get(catalog::list_blog))
        .route("/blog/{slug}", get(catalog::blog_post))
        .route("/home/categories", get(catalog::home_categories))
        .nest("/admin", admin_router(&state));

    Router::new()
        .route("/health", get(health::health))
        .nest("/api", api)
        .nest_service(&state.media_prefix, ServeDir::new(&state.media_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
