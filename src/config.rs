use serde::{Deserialize, Serialize};
use crate::error::{BotError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Sections missing from the file fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub api: ApiConfig,
    pub timing: TimingConfig,
    pub upgrades: UpgradeConfig,
    pub expeditions: ExpeditionConfig,
    pub spin: SpinConfig,
    pub night_mode: NightModeConfig,
    pub errors: ErrorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// GraphQL endpoint of the game backend
    pub base_url: String,
    /// Header that carries the bearer token
    pub auth_header: String,
    /// Per-request timeout enforced by the HTTP client
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Lower bound of the randomized sleep between cycles
    pub sleep_min_seconds: u64,
    /// Upper bound of the randomized sleep between cycles
    pub sleep_max_seconds: u64,
    /// How long a successful login is reused before re-authenticating
    pub login_cache_ttl_seconds: u64,
    /// Wait after an invalid peer / unknown id condition
    pub transient_retry_seconds: u64,
    /// Wait when the account has no active world
    pub no_world_retry_seconds: u64,
    /// Backoff unit, multiplied by the consecutive error count
    pub error_backoff_unit_seconds: u64,
    /// Upper bound of the random stagger before an account's first cycle
    pub start_delay_max_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeConfig {
    /// Buy unowned mines when affordable
    pub buy_mines: bool,
    /// Upgrade inventory items of owned mines
    pub upgrade_inventory: bool,
    /// Buy mine tier upgrades (tunnels)
    pub upgrade_mine: bool,
    /// Buy miner slots and miner levels
    pub upgrade_miners: bool,
    /// Buy cart levels
    pub upgrade_cart: bool,
    /// Cart levels above this id are never bought
    pub max_cart_level: i64,
    /// Cart levels priced above this are never bought
    pub max_cart_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpeditionConfig {
    pub enabled: bool,
    /// Flat amount committed to every expedition sent
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinConfig {
    pub enabled: bool,
    /// Entries requested from the spin history
    pub history_page_size: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NightModeConfig {
    pub enabled: bool,
    /// First quiet hour (local time, 0-23)
    pub start_hour: u32,
    /// Hour at which activity resumes (local time, 0-23)
    pub end_hour: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorConfig {
    /// Consecutive unexpected errors that stop the bot
    pub errors_before_stop: u32,
    /// Clear the error counter after a fully successful cycle
    pub reset_on_success: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "https://api.cryptomine.games/graphql".to_string(),
                auth_header: "Authorization".to_string(),
                request_timeout_seconds: 30,
            },
            timing: TimingConfig {
                sleep_min_seconds: 1800,
                sleep_max_seconds: 3600,
                login_cache_ttl_seconds: 3600,
                transient_retry_seconds: 30,
                no_world_retry_seconds: 30,
                error_backoff_unit_seconds: 8,
                start_delay_max_seconds: 30,
            },
            upgrades: UpgradeConfig {
                buy_mines: true,
                upgrade_inventory: true,
                upgrade_mine: true,
                upgrade_miners: true,
                upgrade_cart: true,
                max_cart_level: 5,
                max_cart_price: 1_000_000.0,
            },
            expeditions: ExpeditionConfig {
                enabled: true,
                cost: 50.0,
            },
            spin: SpinConfig {
                enabled: true,
                history_page_size: 15,
            },
            night_mode: NightModeConfig {
                enabled: false,
                start_hour: 1,
                end_hour: 6,
            },
            errors: ErrorConfig {
                errors_before_stop: 5,
                reset_on_success: false,
            },
        }
    }
}

impl TimingConfig {
    pub fn login_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.login_cache_ttl_seconds)
    }

    pub fn transient_retry(&self) -> Duration {
        Duration::from_secs(self.transient_retry_seconds)
    }

    pub fn no_world_retry(&self) -> Duration {
        Duration::from_secs(self.no_world_retry_seconds)
    }

    pub fn error_backoff_unit(&self) -> Duration {
        Duration::from_secs(self.error_backoff_unit_seconds)
    }
}

impl BotConfig {
    /// Read the TOML file at `path`. A missing file is written out with defaults.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                info!(path = %path.display(), "Loaded configuration");
                Ok(toml::from_str(&contents)?)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let config = BotConfig::default();
                config.save(path)?;
                info!(path = %path.display(), "Wrote default configuration, edit it to tune the bot");
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.timing.sleep_min_seconds > self.timing.sleep_max_seconds {
            return Err(BotError::Config(
                "sleep_min_seconds must not exceed sleep_max_seconds".to_string(),
            ));
        }
        if self.night_mode.start_hour >= 24 || self.night_mode.end_hour >= 24 {
            return Err(BotError::Config(
                "night_mode hours must be between 0 and 23".to_string(),
            ));
        }
        if self.errors.errors_before_stop == 0 {
            return Err(BotError::Config(
                "errors_before_stop must be greater than 0".to_string(),
            ));
        }
        if self.expeditions.cost < 0.0 {
            return Err(BotError::Config("expedition cost must be positive".to_string()));
        }
        if self.spin.history_page_size == 0 {
            return Err(BotError::Config(
                "history_page_size must be greater than 0".to_string(),
            ));
        }

        info!("Configuration validation passed");
        Ok(())
    }

    /// Print configuration summary
    pub fn print_summary(&self) {
        info!("Configuration Summary:");
        info!(
            "   Cycle sleep: {}-{}s, login cache: {}s",
            self.timing.sleep_min_seconds,
            self.timing.sleep_max_seconds,
            self.timing.login_cache_ttl_seconds
        );
        info!(
            "   Upgrades: mines={} inventory={} tiers={} miners={} cart={} (cart <= L{} / {})",
            self.upgrades.buy_mines,
            self.upgrades.upgrade_inventory,
            self.upgrades.upgrade_mine,
            self.upgrades.upgrade_miners,
            self.upgrades.upgrade_cart,
            self.upgrades.max_cart_level,
            self.upgrades.max_cart_price
        );
        info!(
            "   Expeditions: {} (cost {}), spin: {}",
            self.expeditions.enabled, self.expeditions.cost, self.spin.enabled
        );
        if self.night_mode.enabled {
            info!(
                "   Night mode: {:02}:00-{:02}:00",
                self.night_mode.start_hour, self.night_mode.end_hour
            );
        }
        info!(
            "   Stop after {} consecutive errors (reset on success: {})",
            self.errors.errors_before_stop, self.errors.reset_on_success
        );
    }
}
