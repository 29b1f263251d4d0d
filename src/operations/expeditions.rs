// Expedition dispatch at a flat configured cost
use crate::client::GameApi;
use crate::config::ExpeditionConfig;
use crate::error::Result;
use crate::models::ExpeditionStatus;
use crate::operations::world_state::CycleContext;
use tracing::{debug, info};

pub struct ExpeditionManager<'a> {
    api: &'a dyn GameApi,
    config: &'a ExpeditionConfig,
}

impl<'a> ExpeditionManager<'a> {
    pub fn new(api: &'a dyn GameApi, config: &'a ExpeditionConfig) -> Self {
        Self { api, config }
    }

    /// Sends every expedition not already in process while the budget
    /// exceeds the flat cost. Returns the number sent.
    pub async fn dispatch(&self, ctx: &mut CycleContext) -> Result<usize> {
        let expeditions = self.api.expeditions(ctx.world_id).await?;
        let mut sent = 0;
        for expedition in &expeditions {
            if !ctx.budget.exceeds(self.config.cost) {
                continue;
            }
            if expedition.status == ExpeditionStatus::InProcess {
                debug!("Expedition {} already in process", expedition.name);
                continue;
            }
            self.api.send_expedition(expedition.id).await?;
            self.api.fund_expedition(expedition.id, self.config.cost).await?;
            ctx.budget.spend(self.config.cost);
            sent += 1;
            info!("Expedition sent: {}", expedition.name);
        }
        Ok(sent)
    }
}
