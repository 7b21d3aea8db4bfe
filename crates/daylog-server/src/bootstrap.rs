use anyhow::Context;
use daylog_config::DaylogConfig;

use crate::cli::Cli;

/// Load layered config (`.env` included), then apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<DaylogConfig> {
    let mut config = DaylogConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load daylog configuration")?;

    apply_overrides(&mut config, cli);
    config
        .validate()
        .context("invalid value given on the command line")?;
    Ok(config)
}

fn apply_overrides(config: &mut DaylogConfig, cli: &Cli) {
    if let Some(host) = &cli.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(database) = &cli.database {
        config.database.path.clone_from(database);
    }
    if let Some(static_dir) = &cli.static_dir {
        config.server.static_dir.clone_from(static_dir);
    }
}
