#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use cryptominer_bot::client::{GameApi, IdentityProvider};
use cryptominer_bot::config::BotConfig;
use cryptominer_bot::models::*;
use cryptominer_bot::{BotError, Result};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// Scripted backend. Clones share state, so a test keeps one handle after
/// boxing another into the bot.
#[derive(Clone, Default)]
pub struct MockGameApi {
    state: Arc<Mutex<MockState>>,
}

#[derive(Default)]
pub struct MockState {
    pub worlds: Vec<World>,
    pub mines: Vec<Mine>,
    pub inventory: HashMap<i64, Vec<InventoryItem>>,
    pub mine_upgrades: HashMap<i64, Vec<MineUpgrade>>,
    pub miners: HashMap<i64, Vec<Miner>>,
    pub carts: HashMap<i64, Vec<CartLevel>>,
    pub expeditions: Vec<Expedition>,
    pub spin_history: Vec<SpinRecord>,

    /// Errors returned by successive `worlds()` calls before succeeding.
    pub worlds_errors: VecDeque<BotError>,
    /// Every `worlds()` call fails with an unclassified backend error.
    pub worlds_always_fail: bool,
    pub login_error: Option<String>,
    /// Flip the shutdown flag once `worlds()` has been called this many times.
    pub shutdown_after_worlds: Option<(usize, watch::Sender<bool>)>,

    pub calls: Vec<String>,
    pub token: Option<String>,
    pub login_count: usize,
    pub worlds_count: usize,
}

impl MockGameApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.state().calls.iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) -> MutexGuard<'_, MockState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl GameApi for MockGameApi {
    async fn login(&self, init_data: &str) -> Result<String> {
        let mut state = self.record(format!("login({})", init_data));
        if let Some(message) = &state.login_error {
            return Err(BotError::from_message("Login", message.clone()));
        }
        state.login_count += 1;
        Ok(format!("token-{}", state.login_count))
    }

    fn set_token(&self, token: Option<String>) {
        self.state().token = token;
    }

    async fn worlds(&self) -> Result<Vec<World>> {
        let mut state = self.record("worlds".to_string());
        state.worlds_count += 1;
        let count = state.worlds_count;
        if let Some((after, sender)) = &state.shutdown_after_worlds {
            if count >= *after {
                let _ = sender.send(true);
            }
        }
        if state.worlds_always_fail {
            return Err(BotError::from_message("Worlds", "internal server error"));
        }
        if let Some(err) = state.worlds_errors.pop_front() {
            return Err(err);
        }
        Ok(state.worlds.clone())
    }

    async fn mines(&self, world_id: i64) -> Result<Vec<Mine>> {
        let state = self.record(format!("mines({})", world_id));
        Ok(state.mines.clone())
    }

    async fn claim_mining(&self, user_mine_id: i64, world_id: i64) -> Result<()> {
        let mut state = self.record(format!("claim_mining({}, {})", user_mine_id, world_id));
        for mine in state.mines.iter_mut() {
            if let Some(user_mine) = mine.user_mine.as_mut() {
                if user_mine.id == user_mine_id {
                    user_mine.extracted_amount = 0.0;
                }
            }
        }
        Ok(())
    }

    async fn buy_mine(&self, mine_id: i64) -> Result<()> {
        let mut state = self.record(format!("buy_mine({})", mine_id));
        if let Some(mine) = state.mines.iter_mut().find(|m| m.id == mine_id) {
            mine.user_mine = Some(UserMine { id: mine_id * 100, extracted_amount: 0.0 });
        }
        Ok(())
    }

    async fn inventory(&self, mine_id: i64) -> Result<Vec<InventoryItem>> {
        let state = self.record(format!("inventory({})", mine_id));
        Ok(state.inventory.get(&mine_id).cloned().unwrap_or_default())
    }

    async fn buy_inventory(&self, item_id: i64) -> Result<()> {
        let _state = self.record(format!("buy_inventory({})", item_id));
        Ok(())
    }

    async fn mine_upgrades(&self, mine_id: i64) -> Result<Vec<MineUpgrade>> {
        let state = self.record(format!("mine_upgrades({})", mine_id));
        Ok(state.mine_upgrades.get(&mine_id).cloned().unwrap_or_default())
    }

    async fn buy_mine_upgrade(&self, upgrade_id: i64) -> Result<()> {
        let _state = self.record(format!("buy_mine_upgrade({})", upgrade_id));
        Ok(())
    }

    async fn miners(&self, mine_id: i64) -> Result<Vec<Miner>> {
        let state = self.record(format!("miners({})", mine_id));
        Ok(state.miners.get(&mine_id).cloned().unwrap_or_default())
    }

    async fn buy_miner(&self, miner_id: i64) -> Result<()> {
        let _state = self.record(format!("buy_miner({})", miner_id));
        Ok(())
    }

    async fn buy_miner_level(&self, miner_level_id: i64) -> Result<()> {
        let _state = self.record(format!("buy_miner_level({})", miner_level_id));
        Ok(())
    }

    async fn cart_levels(&self, mine_id: i64, user_mine_id: i64) -> Result<Vec<CartLevel>> {
        let state = self.record(format!("cart_levels({}, {})", mine_id, user_mine_id));
        Ok(state.carts.get(&mine_id).cloned().unwrap_or_default())
    }

    async fn buy_cart_level(&self, cart_level_id: i64) -> Result<()> {
        let _state = self.record(format!("buy_cart_level({})", cart_level_id));
        Ok(())
    }

    async fn expeditions(&self, world_id: i64) -> Result<Vec<Expedition>> {
        let state = self.record(format!("expeditions({})", world_id));
        Ok(state.expeditions.clone())
    }

    async fn send_expedition(&self, expedition_id: i64) -> Result<()> {
        let mut state = self.record(format!("send_expedition({})", expedition_id));
        if let Some(expedition) = state.expeditions.iter_mut().find(|e| e.id == expedition_id) {
            expedition.status = ExpeditionStatus::InProcess;
        }
        Ok(())
    }

    async fn fund_expedition(&self, expedition_id: i64, amount: f64) -> Result<()> {
        let _state = self.record(format!("fund_expedition({}, {})", expedition_id, amount));
        Ok(())
    }

    async fn spin_history(&self, first: u32, page: u32) -> Result<Vec<SpinRecord>> {
        let state = self.record(format!("spin_history({}, {})", first, page));
        Ok(state.spin_history.clone())
    }

    async fn rotate_spin(&self) -> Result<serde_json::Value> {
        let mut state = self.record("rotate_spin".to_string());
        state.spin_history.insert(0, spin_at(Utc::now()));
        Ok(serde_json::json!({ "prize": "coins" }))
    }
}

pub struct MockIdentity {
    pub error: Option<String>,
}

impl MockIdentity {
    pub fn ok() -> Self {
        Self { error: None }
    }

    pub fn failing(message: &str) -> Self {
        Self { error: Some(message.to_string()) }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentity {
    async fn init_data(&self, _proxy: Option<&str>) -> Result<String> {
        match &self.error {
            Some(message) => Err(BotError::from_message("Identity", message.clone())),
            None => Ok("init-data".to_string()),
        }
    }
}

// Record builders

pub fn world(id: i64, amount: f64, active: bool) -> World {
    World { id, active, currency: Currency { amount } }
}

pub fn unowned_mine(id: i64, price: f64) -> Mine {
    Mine { id, name: format!("Mine {}", id), price, user_mine: None }
}

pub fn owned_mine(id: i64, user_mine_id: i64, extracted_amount: f64) -> Mine {
    Mine {
        id,
        name: format!("Mine {}", id),
        price: 0.0,
        user_mine: Some(UserMine { id: user_mine_id, extracted_amount }),
    }
}

pub fn item(id: i64, name: &str, price: f64, level: Option<u32>, disabled: bool) -> InventoryItem {
    InventoryItem { id, name: name.to_string(), price, level, disabled }
}

pub fn tier(id: i64, price: f64, disabled: bool) -> MineUpgrade {
    MineUpgrade { id, name: format!("Tunnel {}", id), price, level: Some(1), disabled }
}

pub fn miner(id: i64, price: f64, available: bool, levels: Vec<MinerLevel>) -> Miner {
    Miner { id, price, available, miner_level: levels }
}

pub fn miner_level(id: i64, price: f64, available: bool, requires: Option<(&str, u32)>) -> MinerLevel {
    MinerLevel {
        id,
        name: format!("L{}", id),
        price,
        available,
        inventory_level: requires.map(|(name, level)| InventoryRequirement { name: name.to_string(), level }),
    }
}

pub fn cart(id: i64, price: f64, available: bool) -> CartLevel {
    CartLevel { id, name: format!("Cart {}", id), price, available }
}

pub fn expedition(id: i64, status: ExpeditionStatus) -> Expedition {
    Expedition { id, name: format!("Expedition {}", id), status }
}

pub fn spin_at(created_at: DateTime<Utc>) -> SpinRecord {
    SpinRecord { created_at, prize: None }
}

/// Defaults with every optional step off, so each test opts in to what it checks.
pub fn quiet_config() -> BotConfig {
    let mut config = BotConfig::default();
    config.upgrades.buy_mines = false;
    config.upgrades.upgrade_inventory = false;
    config.upgrades.upgrade_mine = false;
    config.upgrades.upgrade_miners = false;
    config.upgrades.upgrade_cart = false;
    config.expeditions.enabled = false;
    config.spin.enabled = false;
    config.night_mode.enabled = false;
    config.timing.start_delay_max_seconds = 0;
    config
}
