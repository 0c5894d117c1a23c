use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::config::StaticConfig;
use crate::services::LinkSettings;
use crate::storage::{LinkStore, SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub state: AppState,
}

/// 准备服务器启动的上下文：连接数据库、执行迁移、组装服务
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to initialize storage")?;
    info!("Using storage backend: {}", storage.backend_name());

    let settings = LinkSettings::from(&config.links);
    debug!("Link settings: {:?}", settings);

    if config.admin.password.is_empty() {
        warn!("Admin password not set; admin routes are disabled");
    } else {
        info!("Admin routes enabled for user '{}'", config.admin.username);
    }

    let store: Arc<dyn LinkStore> = storage.clone();
    let state = AppState::new(store, settings);

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext { storage, state })
}
