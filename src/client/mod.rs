// Client module - game backend seams and their reqwest implementation
pub mod api;
pub mod identity;
pub mod queries;

pub use api::GameClient;
pub use identity::StaticIdentity;

use crate::error::Result;
use crate::models::*;
use async_trait::async_trait;

/// Operations the agent issues against the game backend.
///
/// The bot only ever talks to this trait, so the decision passes can be
/// driven by a scripted implementation in tests.
#[async_trait]
pub trait GameApi: Send + Sync {
    /// Exchange the identity payload for a bearer token.
    async fn login(&self, init_data: &str) -> Result<String>;
    /// Attach (or drop) the bearer token used by every later request.
    fn set_token(&self, token: Option<String>);

    async fn worlds(&self) -> Result<Vec<World>>;
    async fn mines(&self, world_id: i64) -> Result<Vec<Mine>>;
    async fn claim_mining(&self, user_mine_id: i64, world_id: i64) -> Result<()>;
    async fn buy_mine(&self, mine_id: i64) -> Result<()>;

    async fn inventory(&self, mine_id: i64) -> Result<Vec<InventoryItem>>;
    async fn buy_inventory(&self, item_id: i64) -> Result<()>;
    async fn mine_upgrades(&self, mine_id: i64) -> Result<Vec<MineUpgrade>>;
    async fn buy_mine_upgrade(&self, upgrade_id: i64) -> Result<()>;
    async fn miners(&self, mine_id: i64) -> Result<Vec<Miner>>;
    async fn buy_miner(&self, miner_id: i64) -> Result<()>;
    async fn buy_miner_level(&self, miner_level_id: i64) -> Result<()>;
    async fn cart_levels(&self, mine_id: i64, user_mine_id: i64) -> Result<Vec<CartLevel>>;
    async fn buy_cart_level(&self, cart_level_id: i64) -> Result<()>;

    async fn expeditions(&self, world_id: i64) -> Result<Vec<Expedition>>;
    async fn send_expedition(&self, expedition_id: i64) -> Result<()>;
    async fn fund_expedition(&self, expedition_id: i64, amount: f64) -> Result<()>;

    async fn spin_history(&self, first: u32, page: u32) -> Result<Vec<SpinRecord>>;
    async fn rotate_spin(&self) -> Result<serde_json::Value>;
}

/// Source of the messaging-client payload that proves the account's identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn init_data(&self, proxy: Option<&str>) -> Result<String>;
}
