use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/settings", get(handlers::get_settings))
        .route("/intensity", put(handlers::set_intensity))
        .route("/sites", post(handlers::add_site))
        .route("/sites/bulk-toggle", post(handlers::bulk_toggle))
        .route(
            "/sites/{domain}",
            patch(handlers::toggle_site).delete(handlers::delete_site),
        )
        .route("/tabs/update", post(handlers::update_tab))
        .route("/tabs/update-all", post(handlers::update_all_tabs))
        .route("/tabs/events", post(handlers::tab_navigated))
        .route("/tabs/commands", get(handlers::drain_commands))
        .route("/tabs/{tab_id}", delete(handlers::tab_closed))
        .with_state(state)
}
