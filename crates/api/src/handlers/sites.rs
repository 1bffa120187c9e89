use crate::dto::{
    AddSiteRequest, BulkToggleRequest, BulkToggleResponse, SiteAddedResponse, ToggleSiteRequest,
};
use crate::handlers::error_response;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use greyscale_domain::SiteDomain;
use tracing::{debug, instrument, warn};

#[instrument(skip(state), name = "api_add_site")]
pub async fn add_site(
    State(state): State<AppState>,
    Json(req): Json<AddSiteRequest>,
) -> Result<(StatusCode, Json<SiteAddedResponse>), (StatusCode, Json<serde_json::Value>)> {
    match state.add_site.execute(&req.domain).await {
        Ok(domain) => Ok((
            StatusCode::CREATED,
            Json(SiteAddedResponse {
                domain: domain.to_string(),
            }),
        )),
        Err(e) => {
            warn!(input = %req.domain, error = %e, "Site rejected");
            Err(error_response(e))
        }
    }
}

#[instrument(skip(state), name = "api_toggle_site")]
pub async fn toggle_site(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Json(req): Json<ToggleSiteRequest>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    let domain = SiteDomain::parse(&domain).map_err(error_response)?;
    state
        .toggle_site
        .execute(domain, req.enabled)
        .await
        .map_err(error_response)?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state), name = "api_delete_site")]
pub async fn delete_site(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<StatusCode, (StatusCode, Json<serde_json::Value>)> {
    // An unparsable path names a key that cannot exist; deleting it is the
    // same silent no-op as deleting any other absent domain.
    let Ok(domain) = SiteDomain::parse(&domain) else {
        return Ok(StatusCode::NO_CONTENT);
    };
    let removed = state
        .delete_site
        .execute(&domain)
        .await
        .map_err(error_response)?;
    debug!(domain = %domain, removed, "Delete handled");
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state), name = "api_bulk_toggle")]
pub async fn bulk_toggle(
    State(state): State<AppState>,
    Json(req): Json<BulkToggleRequest>,
) -> Result<Json<BulkToggleResponse>, (StatusCode, Json<serde_json::Value>)> {
    let updated = state
        .bulk_toggle
        .execute(req.enabled)
        .await
        .map_err(error_response)?;
    Ok(Json(BulkToggleResponse { updated }))
}
