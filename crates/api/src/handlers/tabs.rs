use crate::dto::{CommandsResponse, StatusResponse, TabEventRequest, UpdateTabRequest};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use greyscale_application::ports::TabId;
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_update_tab")]
pub async fn update_tab(
    State(state): State<AppState>,
    Json(req): Json<UpdateTabRequest>,
) -> Json<StatusResponse> {
    state.update_tab.execute(req.tab_id, &req.url).await;
    Json(StatusResponse { success: true })
}

#[instrument(skip(state), name = "api_update_all_tabs")]
pub async fn update_all_tabs(State(state): State<AppState>) -> Json<StatusResponse> {
    state.update_all_tabs.execute().await;
    Json(StatusResponse { success: true })
}

/// Navigation signal from the shim. Delivery is at-least-once per page load;
/// the evaluation it triggers is idempotent, so duplicates are harmless.
#[instrument(skip(state), name = "api_tab_navigated")]
pub async fn tab_navigated(
    State(state): State<AppState>,
    Json(event): Json<TabEventRequest>,
) -> Json<StatusResponse> {
    state.tab_registry.upsert(event.tab_id, event.url.clone());
    if let Some(url) = event.url {
        state.update_tab.execute(event.tab_id, &url).await;
    }
    Json(StatusResponse { success: true })
}

#[instrument(skip(state), name = "api_tab_closed")]
pub async fn tab_closed(State(state): State<AppState>, Path(tab_id): Path<TabId>) -> StatusCode {
    state.tab_registry.remove(tab_id);
    StatusCode::NO_CONTENT
}

/// Hand the shim everything queued since its last poll.
#[instrument(skip(state), name = "api_drain_commands")]
pub async fn drain_commands(State(state): State<AppState>) -> Json<CommandsResponse> {
    let mut receiver = state.style_commands.lock().await;
    let mut commands = Vec::new();
    while let Ok(command) = receiver.try_recv() {
        commands.push(command);
    }
    debug!(count = commands.len(), "Style commands drained");
    Json(CommandsResponse { commands })
}
