use std::sync::Arc;

use gatepost_domain::ports::DashboardGateway;
use gatepost_domain::RuntimeConfig;
use tokio::sync::RwLock;

use crate::{DashboardStore, Metrics};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub gateway: Arc<dyn DashboardGateway>,
    pub store: Arc<RwLock<DashboardStore>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(config: RuntimeConfig, gateway: Arc<dyn DashboardGateway>) -> Self {
        let store = DashboardStore::new(config.default_page_size);
        Self {
            config,
            gateway,
            store: Arc::new(RwLock::new(store)),
            metrics: Arc::new(Metrics::default()),
        }
    }
}
