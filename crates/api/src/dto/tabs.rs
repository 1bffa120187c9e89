use greyscale_application::ports::TabId;
use greyscale_infrastructure::StyleCommand;
use serde::{Deserialize, Serialize};

/// `updateTab` message payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTabRequest {
    pub tab_id: TabId,
    pub url: String,
}

/// Navigation event reported by the shim. Fires for full loads and for
/// same-document navigations, possibly more than once per page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabEventRequest {
    pub tab_id: TabId,
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct CommandsResponse {
    pub commands: Vec<StyleCommand>,
}
