// Bot module - per-account cycle orchestration and the retry loop
use crate::client::{GameApi, GameClient, IdentityProvider, StaticIdentity};
use crate::config::BotConfig;
use crate::error::Result;
use crate::operations::*;
use crate::storage::SessionProfile;
use chrono::{Local, NaiveTime, Utc};
use rand::Rng;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, info_span, warn, Instrument};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    pub claimed: f64,
    pub spun: bool,
    pub upgrades: UpgradeReport,
    pub expeditions_sent: usize,
    pub budget_left: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Completed(CycleReport),
    NoActiveWorld,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotExit {
    Shutdown,
    TooManyErrors,
}

/// Wall-clock source for the night-mode gate.
pub type Clock = Box<dyn Fn() -> NaiveTime + Send + Sync>;

pub struct MinerBot {
    label: String,
    api: Box<dyn GameApi>,
    identity: Box<dyn IdentityProvider>,
    proxy: Option<String>,
    config: BotConfig,
    auth: AuthCache,
    retry: RetryController,
    night: Option<NightWindow>,
    clock: Clock,
    shutdown: watch::Receiver<bool>,
}

impl MinerBot {
    pub fn new(
        label: impl Into<String>,
        api: Box<dyn GameApi>,
        identity: Box<dyn IdentityProvider>,
        proxy: Option<String>,
        config: BotConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        let auth = AuthCache::new(config.timing.login_cache_ttl());
        let retry = RetryController::new(&config.errors, &config.timing);
        let night = NightWindow::from_config(&config.night_mode);
        Self {
            label: label.into(),
            api,
            identity,
            proxy,
            config,
            auth,
            retry,
            night,
            clock: Box::new(|| Local::now().time()),
            shutdown,
        }
    }

    /// Replace the local wall clock used for night mode.
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveTime + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn error_count(&self) -> u32 {
        self.retry.error_count()
    }

    pub fn auth_cache(&self) -> &AuthCache {
        &self.auth
    }

    fn is_shutdown(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Sleep for `duration` unless shutdown is requested first.
    /// Returns false when the bot should stop.
    async fn pause(&mut self, duration: Duration) -> bool {
        let sleep = tokio::time::sleep(duration);
        tokio::pin!(sleep);
        loop {
            tokio::select! {
                _ = &mut sleep => return !self.is_shutdown(),
                changed = self.shutdown.changed() => {
                    if changed.is_err() {
                        // Sender gone, nobody can ask us to stop any more.
                        (&mut sleep).await;
                        return true;
                    }
                    if self.is_shutdown() {
                        return false;
                    }
                }
            }
        }
    }

    fn next_sleep(&self) -> Duration {
        let timing = &self.config.timing;
        let secs = rand::thread_rng().gen_range(timing.sleep_min_seconds..=timing.sleep_max_seconds);
        Duration::from_secs(secs)
    }

    /// Random stagger so accounts do not hit the backend together.
    pub async fn start_delay(&mut self) -> bool {
        let max = self.config.timing.start_delay_max_seconds;
        let secs = rand::thread_rng().gen_range(0..=max);
        if secs > 0 {
            info!("Starting in {}s", secs);
        }
        self.pause(Duration::from_secs(secs)).await
    }

    /// One pass of the pipeline: login, world, claim, spin, upgrades, expeditions.
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome> {
        let api = self.api.as_ref();
        self.auth
            .ensure_authenticated(api, self.identity.as_ref(), self.proxy.as_deref())
            .await?;

        let world_state = WorldState::new(api);
        let world = match world_state.refresh().await? {
            WorldRefresh::Active(world) => world,
            WorldRefresh::NoActiveWorld => return Ok(CycleOutcome::NoActiveWorld),
        };

        let mut ctx = CycleContext::for_world(&world);
        world_state.load_mines(&mut ctx).await?;
        let claimed = world_state.claim_all_mining(&mut ctx).await?;

        let spun = if self.config.spin.enabled {
            SpinRotator::new(api, &self.config.spin)
                .rotate_if_due(Utc::now())
                .await?
        } else {
            false
        };

        world_state.load_mines(&mut ctx).await?;
        let upgrades = UpgradePlanner::new(api, &self.config.upgrades)
            .run(&mut ctx)
            .await?;

        let expeditions_sent = if self.config.expeditions.enabled {
            ExpeditionManager::new(api, &self.config.expeditions)
                .dispatch(&mut ctx)
                .await?
        } else {
            0
        };

        Ok(CycleOutcome::Completed(CycleReport {
            claimed,
            spun,
            upgrades,
            expeditions_sent,
            budget_left: ctx.budget.amount(),
        }))
    }

    fn handle_error(&mut self, err: &crate::error::BotError) -> RetryDecision {
        let decision = self.retry.on_error(err);
        match decision {
            RetryDecision::Wait(delay) => {
                error!("Transient backend condition: {}", err);
                info!("Waiting {} seconds before retry...", delay.as_secs());
            }
            RetryDecision::Backoff(delay) => {
                self.auth.invalidate();
                error!(
                    "Unknown error occurred ({} in a row): {}",
                    self.retry.error_count(),
                    err
                );
                info!("Backing off for {} seconds", delay.as_secs());
            }
            RetryDecision::Stop => {
                self.auth.invalidate();
                error!("Unrecoverable error: {}", err);
            }
        }
        decision
    }

    /// Run a single cycle, feeding any failure through the retry controller
    /// without waiting on it.
    pub async fn run_once(&mut self) -> Result<CycleOutcome> {
        match self.run_cycle().await {
            Ok(outcome) => {
                if let CycleOutcome::Completed(report) = &outcome {
                    self.retry.on_success();
                    log_report(report);
                }
                Ok(outcome)
            }
            Err(err) => {
                self.handle_error(&err);
                Err(err)
            }
        }
    }

    /// Loop until shutdown or the error threshold is reached.
    pub async fn run(&mut self) -> Result<BotExit> {
        info!("Bot starting continuous operations");
        let mut cycle_count: u64 = 0;

        loop {
            if self.is_shutdown() {
                info!("Shutdown requested, stopping");
                return Ok(BotExit::Shutdown);
            }
            if self.retry.should_stop() {
                error!("Bot stopped due to excessive errors");
                return Ok(BotExit::TooManyErrors);
            }
            if let Some(window) = self.night {
                if let Some(wait) = window.remaining((self.clock)()) {
                    info!("Night mode active, sleeping {} minutes", wait.as_secs() / 60);
                    if !self.pause(wait).await {
                        return Ok(BotExit::Shutdown);
                    }
                    continue;
                }
            }

            cycle_count += 1;
            info!("Cycle #{} starting", cycle_count);

            let delay = match self.run_cycle().await {
                Ok(CycleOutcome::Completed(report)) => {
                    self.retry.on_success();
                    log_report(&report);
                    let sleep = self.next_sleep();
                    info!("Sleep duration: {} minutes", sleep.as_secs() / 60);
                    sleep
                }
                Ok(CycleOutcome::NoActiveWorld) => {
                    let wait = self.config.timing.no_world_retry();
                    info!("Waiting {} seconds for an active world", wait.as_secs());
                    wait
                }
                Err(err) => match self.handle_error(&err) {
                    RetryDecision::Wait(delay) | RetryDecision::Backoff(delay) => delay,
                    RetryDecision::Stop if self.retry.should_stop() => {
                        error!("Bot stopped due to excessive errors");
                        return Ok(BotExit::TooManyErrors);
                    }
                    RetryDecision::Stop => return Err(err),
                },
            };

            if !self.pause(delay).await {
                info!("Shutdown requested, stopping");
                return Ok(BotExit::Shutdown);
            }
        }
    }
}

fn log_report(report: &CycleReport) {
    info!(
        "Cycle complete: claimed {:.0}, spin {}, {} purchase(s), {} expedition(s), balance {:.0}",
        report.claimed,
        if report.spun { "done" } else { "skipped" },
        report.upgrades.total(),
        report.expeditions_sent,
        report.budget_left
    );
}

async fn run_profile(
    profile: SessionProfile,
    config: BotConfig,
    shutdown: watch::Receiver<bool>,
    once: bool,
) -> Result<()> {
    let api = GameClient::new(&config.api, profile.proxy.as_deref())?;
    let identity = StaticIdentity::new(profile.init_data.clone());
    let mut bot = MinerBot::new(
        profile.name.clone(),
        Box::new(api),
        Box::new(identity),
        profile.proxy.clone(),
        config,
        shutdown,
    );

    if !bot.start_delay().await {
        return Ok(());
    }

    if once {
        bot.run_once().await?;
        return Ok(());
    }

    match bot.run().await? {
        BotExit::Shutdown => info!("Bot stopped on request"),
        BotExit::TooManyErrors => warn!(
            "Bot stopped after {} consecutive errors",
            bot.error_count()
        ),
    }
    Ok(())
}

/// Runs one account to completion. Errors are logged with the account
/// label and never propagated, so one account cannot take down the others.
pub async fn run_bot(
    profile: SessionProfile,
    config: BotConfig,
    shutdown: watch::Receiver<bool>,
    once: bool,
) {
    let span = info_span!("session", name = %profile.name);
    async move {
        if let Err(e) = run_profile(profile, config, shutdown, once).await {
            error!("Session error occurred: {}", e);
        }
    }
    .instrument(span)
    .await
}
