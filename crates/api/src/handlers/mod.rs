pub mod health;
pub mod settings;
pub mod sites;
pub mod tabs;

pub use health::health_check;
pub use settings::{get_settings, set_intensity};
pub use sites::{add_site, bulk_toggle, delete_site, toggle_site};
pub use tabs::{drain_commands, tab_closed, tab_navigated, update_all_tabs, update_tab};

use axum::{http::StatusCode, Json};
use greyscale_domain::DomainError;
use serde_json::{json, Value};

/// Map a domain error to the status the popup shows a notification for.
pub(crate) fn error_response(err: DomainError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        DomainError::InvalidDomainName(_) => StatusCode::BAD_REQUEST,
        DomainError::DuplicateDomain(_) => StatusCode::CONFLICT,
        DomainError::TabUnavailable(_) => StatusCode::NOT_FOUND,
        DomainError::StorageError(_) | DomainError::IoError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({ "error": err.to_string() })))
}
