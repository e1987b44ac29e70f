use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use gatepost_application::AppState;
use gatepost_domain::{DashboardGateway, GatewayConfig, GatewayMode};
use gatepost_infrastructure::{AppConfig, FileDashboardGateway, HttpDashboardGateway};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let gateway = build_gateway(&config.to_gateway_config()?).await?;
        Ok(Self {
            state: AppState::new(runtime_config, gateway),
        })
    }
}

async fn build_gateway(config: &GatewayConfig) -> Result<Arc<dyn DashboardGateway>> {
    info!("using {} gateway", config.mode.as_str());
    let gateway: Arc<dyn DashboardGateway> = match config.mode {
        GatewayMode::Http => Arc::new(HttpDashboardGateway::new(config)?),
        GatewayMode::File => Arc::new(FileDashboardGateway::open(&config.snapshot_path).await?),
    };
    Ok(gateway)
}
