use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use gatepost_domain::{
    AssignedUser, DashboardGateway, GatewayConfig, NewStation, Station, StationId, StationUpdate,
    UserAccount, UserId, VisitorLogEntry,
};

fn request_timeout(config: &GatewayConfig) -> Duration {
    Duration::from_secs(config.request_timeout_seconds)
}

fn guard_assignment_body(user_ids: &[UserId]) -> Value {
    json!({ "userIds": user_ids })
}

fn active_flag_body(active: bool) -> Value {
    json!({ "active": active })
}

/// Dashboard backend reached over its JSON REST API.
pub struct HttpDashboardGateway {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpDashboardGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout(config))
            .build()?;
        Ok(Self {
            client,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
            token: config.backend_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!("GET {}", url);
        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await?
            .error_for_status()
            .map_err(|err| anyhow!("GET {} failed: {}", url, err))?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> Result<T> {
        let response = self
            .authorized(request)
            .send()
            .await?
            .error_for_status()
            .map_err(|err| anyhow!("{} failed: {}", url, err))?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DashboardGateway for HttpDashboardGateway {
    async fn fetch_all_logs(&self) -> Result<Vec<VisitorLogEntry>> {
        self.get_json("logs").await
    }

    async fn fetch_active_logs(&self) -> Result<Vec<VisitorLogEntry>> {
        self.get_json("logs/active").await
    }

    async fn fetch_all_stations(&self) -> Result<Vec<Station>> {
        self.get_json("stations").await
    }

    async fn fetch_all_users(&self) -> Result<Vec<UserAccount>> {
        self.get_json("users").await
    }

    async fn fetch_station_guards(&self, station_id: StationId) -> Result<Vec<AssignedUser>> {
        self.get_json(&format!("stations/{}/guards", station_id)).await
    }

    async fn update_station_guards(&self, station_id: StationId, user_ids: &[UserId]) -> Result<()> {
        let url = self.endpoint(&format!("stations/{}/guards", station_id));
        debug!("PUT {} ({} guards)", url, user_ids.len());
        self.authorized(self.client.put(&url))
            .json(&guard_assignment_body(user_ids))
            .send()
            .await?
            .error_for_status()
            .map_err(|err| anyhow!("PUT {} failed: {}", url, err))?;
        Ok(())
    }

    async fn create_station(&self, station: &NewStation) -> Result<Station> {
        let url = self.endpoint("stations");
        debug!("POST {}", url);
        self.send_json(self.client.post(&url).json(station), &url)
            .await
    }

    async fn update_station(&self, update: &StationUpdate) -> Result<Station> {
        let url = self.endpoint(&format!("stations/{}", update.id));
        debug!("PUT {}", url);
        self.send_json(self.client.put(&url).json(update), &url)
            .await
    }

    async fn set_station_active(&self, station_id: StationId, active: bool) -> Result<Station> {
        let url = self.endpoint(&format!("stations/{}/active", station_id));
        debug!("PATCH {} active={}", url, active);
        self.send_json(
            self.client.patch(&url).json(&active_flag_body(active)),
            &url,
        )
        .await
    }
}
