use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct AddSiteRequest {
    /// Raw user input; normalized and validated server-side.
    pub domain: String,
}

#[derive(Debug, Serialize)]
pub struct SiteAddedResponse {
    /// The normalized key actually stored.
    pub domain: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleSiteRequest {
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct BulkToggleRequest {
    pub enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct BulkToggleResponse {
    pub updated: usize,
}
