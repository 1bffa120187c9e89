use greyscale_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        bind = %config.server.bind_address,
        web_port = config.server.web_port,
        settings_path = %config.storage.settings_path.display(),
        "Configuration loaded"
    );

    Ok(config)
}
