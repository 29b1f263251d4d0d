// Autonomous mining-game agent
// Logs in, claims, spends the balance on upgrades and survives backend errors

pub mod models;
pub mod client;
pub mod operations;
pub mod bot;
pub mod storage;
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use models::{
    world::{World, Currency},
    mine::{Mine, UserMine, InventoryItem, MineUpgrade, Miner, MinerLevel, CartLevel},
    expedition::{Expedition, ExpeditionStatus},
    spin::SpinRecord,
};

pub use client::{GameApi, GameClient, IdentityProvider, StaticIdentity};
pub use bot::{MinerBot, BotExit, Clock, CycleOutcome, CycleReport, run_bot};
pub use config::BotConfig;
pub use error::{BotError, Result};
pub use storage::{SessionProfile, SessionStore};

// Constants
pub const DEFAULT_CONFIG_FILE: &str = "config/bot.toml";
pub const DEFAULT_SESSIONS_FILE: &str = "sessions.json";
