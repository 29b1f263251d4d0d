// Per-cycle world snapshot and the optimistic budget
use crate::client::GameApi;
use crate::error::Result;
use crate::models::{Mine, World};
use std::collections::HashMap;
use tracing::{info, warn};

/// Locally tracked balance used to sequence purchases within one cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Budget(f64);

impl Budget {
    pub fn new(amount: f64) -> Self {
        Budget(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Strictly more money than `price`.
    pub fn exceeds(&self, price: f64) -> bool {
        self.0 > price
    }

    /// At least `price`.
    pub fn covers(&self, price: f64) -> bool {
        self.0 >= price
    }

    pub fn spend(&mut self, price: f64) {
        self.0 -= price;
    }

    pub fn credit(&mut self, amount: f64) {
        self.0 += amount;
    }
}

/// State threaded through every pass of a single cycle, rebuilt from the
/// server at the start of the next one.
#[derive(Debug, Clone)]
pub struct CycleContext {
    pub world_id: i64,
    pub budget: Budget,
    pub mines: Vec<Mine>,
    /// Inventory name -> level, filled by the inventory pass of the mine being upgraded.
    pub inventory_levels: HashMap<String, u32>,
}

impl CycleContext {
    pub fn for_world(world: &World) -> Self {
        Self {
            world_id: world.id,
            budget: Budget::new(world.currency.amount),
            mines: Vec::new(),
            inventory_levels: HashMap::new(),
        }
    }

    pub fn owned_mines(&self) -> Vec<Mine> {
        self.mines.iter().filter(|m| m.is_owned()).cloned().collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorldRefresh {
    Active(World),
    NoActiveWorld,
}

pub struct WorldState<'a> {
    api: &'a dyn GameApi,
}

impl<'a> WorldState<'a> {
    pub fn new(api: &'a dyn GameApi) -> Self {
        Self { api }
    }

    /// Only the first listed world is considered; it must be active.
    pub async fn refresh(&self) -> Result<WorldRefresh> {
        let worlds = self.api.worlds().await?;
        match worlds.into_iter().next() {
            Some(world) if world.active => {
                info!("Current balance: {:.0} (world {})", world.currency.amount, world.id);
                Ok(WorldRefresh::Active(world))
            }
            _ => {
                warn!("No active world found");
                Ok(WorldRefresh::NoActiveWorld)
            }
        }
    }

    pub async fn load_mines(&self, ctx: &mut CycleContext) -> Result<()> {
        ctx.mines = self.api.mines(ctx.world_id).await?;
        Ok(())
    }

    /// Claim accumulated output of every owned mine and credit it to the budget.
    pub async fn claim_all_mining(&self, ctx: &mut CycleContext) -> Result<f64> {
        let mut claimed = 0.0;
        for mine in &ctx.mines {
            let Some(user_mine) = &mine.user_mine else {
                continue;
            };
            self.api.claim_mining(user_mine.id, ctx.world_id).await?;
            ctx.budget.credit(user_mine.extracted_amount);
            claimed += user_mine.extracted_amount;
            info!("Claimed {:.0} from {}", user_mine.extracted_amount, mine.name);
        }
        Ok(claimed)
    }
}
