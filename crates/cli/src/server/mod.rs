use axum::Router;
use greyscale_api::{create_api_routes, AppState};
use greyscale_application::ports::SettingsRepository;
use greyscale_application::use_cases::UpdateAllTabsUseCase;
use greyscale_domain::{Config, SettingsChange};
use greyscale_infrastructure::SettingsCache;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::di::Container;

/// Start the change-propagation listener and serve the web surface until
/// shutdown.
pub async fn run(config: Config, container: Container) -> anyhow::Result<()> {
    let Container {
        store,
        cache,
        registry,
        style_commands,
        use_cases,
    } = container;

    spawn_change_listener(
        store.subscribe(),
        cache,
        use_cases.update_all_tabs.clone(),
    );

    let state = AppState {
        get_settings: use_cases.get_settings,
        add_site: use_cases.add_site,
        toggle_site: use_cases.toggle_site,
        delete_site: use_cases.delete_site,
        bulk_toggle: use_cases.bulk_toggle,
        set_intensity: use_cases.set_intensity,
        update_tab: use_cases.update_tab,
        update_all_tabs: use_cases.update_all_tabs,
        tab_registry: registry,
        style_commands: Arc::new(Mutex::new(style_commands)),
    };

    let app = Router::new().nest("/api", create_api_routes(state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Web server listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// On every settings change: refresh the cache snapshot, then re-evaluate
/// all open tabs. Navigation events take the same per-tab path separately.
fn spawn_change_listener(
    mut changes: broadcast::Receiver<SettingsChange>,
    cache: Arc<SettingsCache>,
    update_all_tabs: Arc<UpdateAllTabsUseCase>,
) {
    tokio::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(change) => {
                    debug!(
                        sites = change.sites,
                        intensity = change.intensity,
                        "Settings changed"
                    );
                    if let Err(e) = cache.refresh().await {
                        warn!(error = %e, "Settings cache refresh failed");
                        continue;
                    }
                    update_all_tabs.execute().await;
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    // Collapsed notifications still mean "something changed".
                    warn!(skipped, "Change notifications lagged");
                    if cache.refresh().await.is_ok() {
                        update_all_tabs.execute().await;
                    }
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}
