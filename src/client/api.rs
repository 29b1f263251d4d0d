use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use crate::client::{queries, GameApi};
use crate::config::ApiConfig;
use crate::error::{BotError, Result};
use crate::models::*;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, trace};

pub struct GameClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: String,
    token: RwLock<Option<String>>,
}

impl GameClient {
    pub fn new(config: &ApiConfig, proxy: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_seconds));
        if let Some(proxy) = proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(GameClient {
            client: builder.build()?,
            base_url: config.base_url.clone(),
            auth_header: config.auth_header.clone(),
            token: RwLock::new(None),
        })
    }

    fn current_token(&self) -> Option<String> {
        match self.token.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    async fn execute<T: DeserializeOwned>(&self, operation: &str, query: &str, variables: Value) -> Result<T> {
        debug!("API: {} {}", operation, variables);

        let payload = json!({
            "operationName": operation,
            "query": query,
            "variables": variables,
        });
        let mut request = self.client.post(&self.base_url).json(&payload);
        if let Some(token) = self.current_token() {
            request = request.header(self.auth_header.as_str(), format!("Bearer {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        trace!("API: {} -> {} {}", operation, status.as_u16(), body);

        if !status.is_success() {
            return Err(BotError::Api { status: status.as_u16(), body });
        }

        let envelope: GraphQlResponse<T> = serde_json::from_str(&body)?;
        if !envelope.errors.is_empty() {
            let message = envelope.errors.iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(BotError::from_message(operation, message));
        }

        envelope.data.ok_or_else(|| BotError::Backend {
            operation: operation.to_string(),
            message: "response carried no data".to_string(),
        })
    }

    async fn mutate(&self, operation: &str, query: &str, variables: Value) -> Result<()> {
        let _: Value = self.execute(operation, query, variables).await?;
        Ok(())
    }
}

#[async_trait]
impl GameApi for GameClient {
    async fn login(&self, init_data: &str) -> Result<String> {
        let data: LoginData = self
            .execute("Login", queries::LOGIN, json!({ "input": { "initData": init_data } }))
            .await?;
        Ok(data.login.token)
    }

    fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut guard) => *guard = token,
            Err(poisoned) => *poisoned.into_inner() = token,
        }
    }

    async fn worlds(&self) -> Result<Vec<World>> {
        let data: WorldsData = self.execute("Worlds", queries::WORLDS, json!({})).await?;
        Ok(data.worlds)
    }

    async fn mines(&self, world_id: i64) -> Result<Vec<Mine>> {
        let data: MinesData = self
            .execute("Mines", queries::MINES, json!({ "worldId": world_id }))
            .await?;
        Ok(data.mines)
    }

    async fn claim_mining(&self, user_mine_id: i64, world_id: i64) -> Result<()> {
        self.mutate(
            "ClaimMining",
            queries::CLAIM_MINING,
            json!({ "input": { "mineId": user_mine_id, "worldId": world_id } }),
        )
        .await
    }

    async fn buy_mine(&self, mine_id: i64) -> Result<()> {
        self.mutate("BuyMine", queries::BUY_MINE, json!({ "input": { "mineId": mine_id } }))
            .await
    }

    async fn inventory(&self, mine_id: i64) -> Result<Vec<InventoryItem>> {
        let data: InventoryData = self
            .execute("UpdateInventory", queries::UPDATE_INVENTORY, json!({ "mineId": mine_id }))
            .await?;
        Ok(data.update_inventory)
    }

    async fn buy_inventory(&self, item_id: i64) -> Result<()> {
        self.mutate("BuyUpdateInventory", queries::BUY_INVENTORY, json!({ "id": item_id }))
            .await
    }

    async fn mine_upgrades(&self, mine_id: i64) -> Result<Vec<MineUpgrade>> {
        let data: MineUpgradesData = self
            .execute("UpdateMine", queries::UPDATE_MINE, json!({ "mineId": mine_id }))
            .await?;
        Ok(data.update_mine)
    }

    async fn buy_mine_upgrade(&self, upgrade_id: i64) -> Result<()> {
        self.mutate("BuyUpdateMine", queries::BUY_MINE_UPGRADE, json!({ "id": upgrade_id }))
            .await
    }

    async fn miners(&self, mine_id: i64) -> Result<Vec<Miner>> {
        let data: MinersData = self
            .execute("UpdateMiners", queries::UPDATE_MINERS, json!({ "mineId": mine_id }))
            .await?;
        Ok(data.update_miners)
    }

    async fn buy_miner(&self, miner_id: i64) -> Result<()> {
        self.mutate("BuyMiner", queries::BUY_MINER, json!({ "input": { "minerId": miner_id } }))
            .await
    }

    async fn buy_miner_level(&self, miner_level_id: i64) -> Result<()> {
        self.mutate(
            "BuyMinerLevel",
            queries::BUY_MINER_LEVEL,
            json!({ "input": { "minerLevelId": miner_level_id } }),
        )
        .await
    }

    async fn cart_levels(&self, mine_id: i64, user_mine_id: i64) -> Result<Vec<CartLevel>> {
        let data: CartLevelsData = self
            .execute(
                "UpdateCart",
                queries::UPDATE_CART,
                json!({ "mineId": mine_id, "userMineId": user_mine_id }),
            )
            .await?;
        Ok(data.update_cart)
    }

    async fn buy_cart_level(&self, cart_level_id: i64) -> Result<()> {
        self.mutate("BuyCart", queries::BUY_CART, json!({ "input": { "cartLevelId": cart_level_id } }))
            .await
    }

    async fn expeditions(&self, world_id: i64) -> Result<Vec<Expedition>> {
        let data: ExpeditionsData = self
            .execute("Expeditions", queries::EXPEDITIONS, json!({ "worldId": world_id }))
            .await?;
        Ok(data.expeditions)
    }

    async fn send_expedition(&self, expedition_id: i64) -> Result<()> {
        self.mutate("SendExpedition", queries::SEND_EXPEDITION, json!({ "id": expedition_id }))
            .await
    }

    async fn fund_expedition(&self, expedition_id: i64, amount: f64) -> Result<()> {
        self.mutate(
            "BuyExpedition",
            queries::BUY_EXPEDITION,
            json!({ "id": expedition_id, "amount": amount }),
        )
        .await
    }

    async fn spin_history(&self, first: u32, page: u32) -> Result<Vec<SpinRecord>> {
        let data: SpinHistoryData = self
            .execute("SpinHistory", queries::SPIN_HISTORY, json!({ "first": first, "page": page }))
            .await?;
        Ok(data.spin_history.data)
    }

    async fn rotate_spin(&self) -> Result<Value> {
        let data: RotateSpinData = self.execute("RotateSpin", queries::ROTATE_SPIN, json!({})).await?;
        Ok(data.rotate_spin)
    }
}
