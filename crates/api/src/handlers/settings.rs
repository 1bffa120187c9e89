use crate::dto::{SetIntensityRequest, SettingsResponse};
use crate::handlers::error_response;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, error, instrument};

#[instrument(skip(state), name = "api_get_settings")]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<serde_json::Value>)> {
    match state.get_settings.execute().await {
        Ok(settings) => {
            debug!(sites = settings.sites.len(), "Settings retrieved");
            Ok(Json(settings.into()))
        }
        Err(e) => {
            error!(error = %e, "Failed to load settings");
            Err(error_response(e))
        }
    }
}

#[instrument(skip(state), name = "api_set_intensity")]
pub async fn set_intensity(
    State(state): State<AppState>,
    Json(req): Json<SetIntensityRequest>,
) -> Result<Json<SettingsResponse>, (StatusCode, Json<serde_json::Value>)> {
    if let Err(e) = state.set_intensity.execute(req.intensity).await {
        error!(error = %e, "Failed to update intensity");
        return Err(error_response(e));
    }
    get_settings(State(state)).await
}
