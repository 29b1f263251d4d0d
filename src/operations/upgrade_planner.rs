// Greedy, list-order purchase passes over the current mine list
use crate::client::GameApi;
use crate::config::UpgradeConfig;
use crate::error::Result;
use crate::models::{Mine, Miner};
use crate::operations::world_state::CycleContext;
use tracing::{debug, info};

/// Inventory level assumed when an item has no recorded level.
pub const DEFAULT_INVENTORY_LEVEL: u32 = 100;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeReport {
    pub mines_bought: usize,
    pub inventory_upgrades: usize,
    pub mine_upgrades: usize,
    pub miner_slots: usize,
    pub miner_levels: usize,
    pub cart_upgrades: usize,
}

impl UpgradeReport {
    pub fn total(&self) -> usize {
        self.mines_bought
            + self.inventory_upgrades
            + self.mine_upgrades
            + self.miner_slots
            + self.miner_levels
            + self.cart_upgrades
    }
}

pub struct UpgradePlanner<'a> {
    api: &'a dyn GameApi,
    config: &'a UpgradeConfig,
}

impl<'a> UpgradePlanner<'a> {
    pub fn new(api: &'a dyn GameApi, config: &'a UpgradeConfig) -> Self {
        Self { api, config }
    }

    /// Runs every enabled pass: acquisition first, then the per-mine passes.
    pub async fn run(&self, ctx: &mut CycleContext) -> Result<UpgradeReport> {
        let mut report = UpgradeReport::default();
        if self.config.buy_mines {
            report.mines_bought = self.acquire_mines(ctx).await?;
        }
        self.upgrade_owned_mines(ctx, &mut report).await?;
        Ok(report)
    }

    /// Buy every unowned mine priced below the budget, first affordable first.
    pub async fn acquire_mines(&self, ctx: &mut CycleContext) -> Result<usize> {
        let mut bought = 0;
        for mine in &ctx.mines {
            if mine.is_owned() || !ctx.budget.exceeds(mine.price) {
                continue;
            }
            self.api.buy_mine(mine.id).await?;
            ctx.budget.spend(mine.price);
            bought += 1;
            info!("Purchased mine {} for {:.0}", mine.name, mine.price);
        }
        Ok(bought)
    }

    pub async fn upgrade_owned_mines(&self, ctx: &mut CycleContext, report: &mut UpgradeReport) -> Result<()> {
        let any_pass = self.config.upgrade_inventory
            || self.config.upgrade_mine
            || self.config.upgrade_miners
            || self.config.upgrade_cart;
        if !any_pass {
            return Ok(());
        }

        for mine in ctx.owned_mines() {
            info!("Starting automatic upgrade for {}", mine.name);
            let miners = if self.config.upgrade_miners {
                self.api.miners(mine.id).await?
            } else {
                Vec::new()
            };

            if self.config.upgrade_inventory {
                report.inventory_upgrades += self.upgrade_inventory(ctx, &mine).await?;
            }
            if self.config.upgrade_mine {
                report.mine_upgrades += self.upgrade_mine_tiers(ctx, &mine).await?;
            }
            if self.config.upgrade_miners {
                let (slots, levels) = self.upgrade_miners(ctx, &mine, &miners).await?;
                report.miner_slots += slots;
                report.miner_levels += levels;
            }
            if self.config.upgrade_cart {
                report.cart_upgrades += self.upgrade_cart(ctx, &mine).await?;
            }
        }
        Ok(())
    }

    /// Records the mine's inventory levels, then buys eligible items in list order.
    pub async fn upgrade_inventory(&self, ctx: &mut CycleContext, mine: &Mine) -> Result<usize> {
        let items = self.api.inventory(mine.id).await?;
        ctx.inventory_levels = items
            .iter()
            .map(|item| {
                let level = item.level.filter(|l| *l > 0).unwrap_or(DEFAULT_INVENTORY_LEVEL);
                (item.name.clone(), level)
            })
            .collect();

        let mut bought = 0;
        for item in &items {
            if item.disabled || !ctx.budget.covers(item.price) {
                debug!("Skipping inventory {} ({:.0})", item.name, item.price);
                continue;
            }
            self.api.buy_inventory(item.id).await?;
            ctx.budget.spend(item.price);
            bought += 1;
            info!(
                "Upgraded {} to level {} for {:.0} in {}",
                item.name,
                item.level.unwrap_or_default(),
                item.price,
                mine.name
            );
        }
        Ok(bought)
    }

    pub async fn upgrade_mine_tiers(&self, ctx: &mut CycleContext, mine: &Mine) -> Result<usize> {
        let upgrades = self.api.mine_upgrades(mine.id).await?;
        let mut bought = 0;
        for upgrade in &upgrades {
            if upgrade.disabled || !ctx.budget.covers(upgrade.price) {
                debug!("Skipping mine upgrade {} ({:.0})", upgrade.name, upgrade.price);
                continue;
            }
            self.api.buy_mine_upgrade(upgrade.id).await?;
            ctx.budget.spend(upgrade.price);
            bought += 1;
            info!("Upgraded {} for {:.0} in {}", upgrade.name, upgrade.price, mine.name);
        }
        Ok(bought)
    }

    /// Buys missing slots, then their levels. Returns (slots, levels) bought.
    ///
    /// A level purchase is charged at its slot's price, not the level's own
    /// price; the budget arithmetic of existing accounts relies on that.
    pub async fn upgrade_miners(&self, ctx: &mut CycleContext, mine: &Mine, miners: &[Miner]) -> Result<(usize, usize)> {
        let mut slots = 0;
        let mut levels = 0;
        for miner in miners {
            if !miner.available && ctx.budget.exceeds(miner.price) {
                self.api.buy_miner(miner.id).await?;
                ctx.budget.spend(miner.price);
                slots += 1;
                info!("Purchased miner slot #{} for {:.0} in {}", miner.id, miner.price, mine.name);
            }

            for level in &miner.miner_level {
                if level.available || !ctx.budget.covers(level.price) {
                    continue;
                }
                // Levels without an inventory requirement are not offered for purchase.
                let Some(requirement) = &level.inventory_level else {
                    continue;
                };
                let recorded = ctx
                    .inventory_levels
                    .get(&requirement.name)
                    .copied()
                    .unwrap_or(DEFAULT_INVENTORY_LEVEL);
                if recorded < requirement.level {
                    debug!(
                        "Miner level {} needs {} level {} (have {})",
                        level.name, requirement.name, requirement.level, recorded
                    );
                    continue;
                }
                self.api.buy_miner_level(level.id).await?;
                ctx.budget.spend(miner.price);
                levels += 1;
                info!(
                    "Upgraded miner slot #{} to level {} for {:.0} in {}",
                    miner.id, level.name, level.price, mine.name
                );
            }
        }
        Ok((slots, levels))
    }

    /// At most one cart level per mine; the configured ceilings end the pass.
    pub async fn upgrade_cart(&self, ctx: &mut CycleContext, mine: &Mine) -> Result<usize> {
        let Some(user_mine) = &mine.user_mine else {
            return Ok(0);
        };
        let mut carts = self.api.cart_levels(mine.id, user_mine.id).await?;
        carts.sort_by_key(|cart| cart.id);

        for cart in &carts {
            if cart.id > self.config.max_cart_level || cart.price > self.config.max_cart_price {
                debug!("Cart level {} is above the configured ceiling", cart.id);
                break;
            }
            if !cart.available && ctx.budget.exceeds(cart.price) {
                self.api.buy_cart_level(cart.id).await?;
                ctx.budget.spend(cart.price);
                info!("Upgraded cart {} for {:.0} in {}", cart.name, cart.price, mine.name);
                return Ok(1);
            }
        }
        Ok(0)
    }
}
