//! Entry point hosts drive: translates [`HostEvent`]s into lifecycle calls and
//! owns the deferred-task queue.

use deathchest_core::{BlockPos, ItemStack, SimTick};
use tracing::{debug, warn};

use crate::config::ChestConfig;
use crate::error::ChestError;
use crate::events::{ChestNotification, EffectNotifier, HostEvent, Outbox};
use crate::lifecycle::{
    CloseOutcome, Container, ContainerLifecycle, LifecycleTask, ReclaimOutcome,
};
use crate::scheduler::TickScheduler;
use crate::site::{find_site, SearchResult};
use crate::world::WorldAccess;

/// What became of an actor's drops.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeathOutcome {
    /// The chest holding the drops, if one was placed.
    pub chest: Option<Container>,
    /// Stacks left on the ground at the death position.
    pub dropped_at_origin: Vec<ItemStack>,
    /// Why some or all items ended up on the ground.
    pub failure: Option<ChestError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemResponse {
    Death(DeathOutcome),
    Opened { tracked: bool },
    Closed(CloseOutcome),
}

/// Death-chest handling for one world.
#[derive(Debug)]
pub struct DeathChestSystem {
    config: ChestConfig,
    lifecycle: ContainerLifecycle,
    scheduler: TickScheduler<LifecycleTask>,
    outbox: Outbox,
}

impl DeathChestSystem {
    pub fn new(config: ChestConfig) -> Self {
        let config = config.sanitized();
        Self {
            lifecycle: ContainerLifecycle::new(config.label.clone()),
            scheduler: TickScheduler::new(),
            outbox: Outbox::new(),
            config,
        }
    }

    pub fn config(&self) -> &ChestConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> &ContainerLifecycle {
        &self.lifecycle
    }

    pub fn now(&self) -> SimTick {
        self.scheduler.now()
    }

    /// Deferred tasks not yet executed.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Route one host event.
    pub fn handle<W: WorldAccess + ?Sized>(
        &mut self,
        world: &mut W,
        event: HostEvent,
    ) -> SystemResponse {
        match event {
            HostEvent::ActorDied {
                actor_id,
                position,
                dropped_items,
            } => {
                let outcome = self.handle_death(world, &actor_id, position, dropped_items);
                SystemResponse::Death(outcome)
            }
            HostEvent::ContainerOpened { position } => SystemResponse::Opened {
                tracked: self.lifecycle.on_opened(world, &mut self.outbox, position),
            },
            HostEvent::ContainerClosed {
                position,
                is_empty_now,
            } => {
                let outcome = self.lifecycle.on_closed(world, &mut self.scheduler, position);
                let scheduled = matches!(
                    outcome,
                    CloseOutcome::ReclaimScheduled | CloseOutcome::AlreadyScheduled
                );
                if outcome != CloseOutcome::Ignored && scheduled != is_empty_now {
                    debug!(
                        %position,
                        is_empty_now,
                        ?outcome,
                        "host emptiness hint disagrees with inventory"
                    );
                }
                SystemResponse::Closed(outcome)
            }
        }
    }

    /// Store an actor's drops in a chest near `origin`.
    ///
    /// Anything that cannot be stored is dropped at `origin`, as if death
    /// chests did not exist.
    pub fn handle_death<W: WorldAccess + ?Sized>(
        &mut self,
        world: &mut W,
        owner_name: &str,
        origin: BlockPos,
        dropped_items: Vec<Option<ItemStack>>,
    ) -> DeathOutcome {
        let items: Vec<ItemStack> = dropped_items
            .into_iter()
            .flatten()
            .filter(|stack| !stack.is_empty())
            .collect();
        if items.is_empty() {
            return DeathOutcome::default();
        }

        let radius = self.config.search_radius;
        let site = match find_site(world, origin, radius) {
            SearchResult::Found(site) => site,
            SearchResult::NotFound => {
                let error = ChestError::NoSiteFound { origin, radius };
                return self.fall_back(world, owner_name, origin, items, error);
            }
        };

        let attempt = self.lifecycle.create(
            world,
            &mut self.outbox,
            site,
            owner_name,
            items.iter().cloned().map(Some),
        );
        match attempt {
            Ok(created) => {
                let mut outcome = DeathOutcome {
                    chest: Some(created.chest),
                    ..DeathOutcome::default()
                };
                if !created.overflow.is_empty() {
                    let error = ChestError::CapacityExceeded {
                        unplaced: created.overflow.len(),
                    };
                    warn!(
                        %site,
                        owner = owner_name,
                        %error,
                        "dropping overflow at death position"
                    );
                    world.drop_items(origin, created.overflow.clone());
                    outcome.dropped_at_origin = created.overflow;
                    outcome.failure = Some(error);
                }
                outcome
            }
            Err(error) => self.fall_back(world, owner_name, origin, items, error),
        }
    }

    /// Advance one tick and run the deferred tasks now due.
    pub fn tick<W: WorldAccess + ?Sized>(&mut self, world: &mut W) -> Vec<ReclaimOutcome> {
        let tasks = self.scheduler.advance();
        tasks
            .into_iter()
            .map(|task| self.lifecycle.run_task(world, &mut self.outbox, task))
            .collect()
    }

    /// Notifications emitted since the last drain, in order.
    pub fn drain_notifications(&mut self) -> Vec<ChestNotification> {
        self.outbox.drain()
    }

    fn fall_back<W: WorldAccess + ?Sized>(
        &mut self,
        world: &mut W,
        owner_name: &str,
        origin: BlockPos,
        items: Vec<ItemStack>,
        error: ChestError,
    ) -> DeathOutcome {
        warn!(%origin, owner = owner_name, %error, "dropping items at death position");
        self.outbox.notify(ChestNotification::PlacementFailed {
            owner_name: owner_name.to_string(),
            origin,
            original_items: items.clone(),
        });
        world.drop_items(origin, items.clone());
        DeathOutcome {
            chest: None,
            dropped_at_origin: items,
            failure: Some(error),
        }
    }
}
