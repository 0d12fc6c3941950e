use crate::{
    libs::{config::AppConfig, data_storage::RunMode, messages::Message},
    msg_warning, server,
};
use anyhow::Result;

/// Runs the API server in the foreground until Ctrl+C.
pub async fn cmd(config: AppConfig) -> Result<()> {
    tracing::debug!(?config, "resolved configuration");
    if config.run_mode == RunMode::Development {
        msg_warning!(Message::DevelopmentMode(config.db_path.display().to_string()));
    }
    server::serve(config).await
}
