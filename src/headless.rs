use crate::command_script::{CommandScriptPlayer, HostCommand};
use crate::messages::chat_line;
use anyhow::{Context, Result};
use deathchest_core::{BlockPos, SimTick};
use deathchest_world::{
    play_effects, ChestConfig, ChestNotification, DeathChestSystem, HostEvent, MemoryWorld,
    SystemResponse, WorldAccess,
};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Height of the solid floor the headless world is built on.
pub const FLOOR_Y: i32 = 63;
/// Floor spans `-FLOOR_EXTENT..=FLOOR_EXTENT` on X and Z.
pub const FLOOR_EXTENT: i32 = 16;

/// In-memory world plus the death-chest system, driven one tick at a time.
pub struct HeadlessHost {
    world: MemoryWorld,
    system: DeathChestSystem,
    owners: BTreeMap<BlockPos, String>,
    chat: Vec<String>,
}

impl HeadlessHost {
    pub fn new(config: ChestConfig) -> Self {
        let system = DeathChestSystem::new(config);
        let world =
            MemoryWorld::new(system.config().chest_capacity).with_floor(FLOOR_Y, FLOOR_EXTENT);
        Self {
            world,
            system,
            owners: BTreeMap::new(),
            chat: Vec::new(),
        }
    }

    pub fn world(&self) -> &MemoryWorld {
        &self.world
    }

    pub fn system(&self) -> &DeathChestSystem {
        &self.system
    }

    pub fn now(&self) -> SimTick {
        self.system.now()
    }

    /// Chat lines produced since the last call.
    pub fn take_chat(&mut self) -> Vec<String> {
        std::mem::take(&mut self.chat)
    }

    /// Run `commands` against the current tick, then advance one tick.
    pub fn step(&mut self, commands: Vec<HostCommand>) {
        for command in commands {
            if let Err(err) = self.apply(command) {
                warn!(tick = self.now().0, "command failed: {err:#}");
            }
        }
        self.present_notifications();

        let outcomes = self.system.tick(&mut self.world);
        if !outcomes.is_empty() {
            debug!(tick = self.now().0, ?outcomes, "deferred tasks ran");
        }
        self.present_notifications();
    }

    /// Apply one scripted command.
    pub fn apply(&mut self, command: HostCommand) -> Result<()> {
        match command {
            HostCommand::Die { name, pos, items } => {
                let event = HostEvent::ActorDied {
                    actor_id: name.clone(),
                    position: pos,
                    dropped_items: items.into_iter().map(Some).collect(),
                };
                if let SystemResponse::Death(outcome) = self.system.handle(&mut self.world, event) {
                    info!(
                        player = %name,
                        %pos,
                        chest = ?outcome.chest.as_ref().map(|chest| chest.position),
                        dropped = outcome.dropped_at_origin.len(),
                        "player died"
                    );
                    if let Some(failure) = outcome.failure {
                        debug!(player = %name, %failure, "death chest incomplete");
                    }
                }
            }
            HostCommand::Open(pos) => {
                self.require_chest(pos)?;
                self.system
                    .handle(&mut self.world, HostEvent::ContainerOpened { position: pos });
            }
            HostCommand::Close(pos) => {
                let is_empty_now = self.require_chest(pos)?;
                let response = self.system.handle(
                    &mut self.world,
                    HostEvent::ContainerClosed {
                        position: pos,
                        is_empty_now,
                    },
                );
                debug!(%pos, ?response, "chest closed");
            }
            HostCommand::Take { pos, slot } => {
                let chest = self
                    .world
                    .container_mut(pos)
                    .with_context(|| format!("no chest at {pos}"))?;
                let taken = match slot {
                    Some(slot) => chest.take(slot).into_iter().collect(),
                    None => chest.drain(),
                };
                debug!(%pos, ?taken, "items taken");
            }
            HostCommand::Put { pos, item } => {
                let chest = self
                    .world
                    .container_mut(pos)
                    .with_context(|| format!("no chest at {pos}"))?;
                if let Err(rejected) = chest.insert(item) {
                    anyhow::bail!("chest at {pos} is full, cannot add {rejected}");
                }
            }
            HostCommand::Set { pos, kind } => {
                self.world.set_block(pos, kind, true);
            }
        }
        Ok(())
    }

    /// Whether the chest at `pos` is empty; errors when there is no chest.
    fn require_chest(&self, pos: BlockPos) -> Result<bool> {
        self.world
            .container(pos)
            .map(|chest| chest.is_empty())
            .with_context(|| format!("no chest at {pos}"))
    }

    fn present_notifications(&mut self) {
        for note in self.system.drain_notifications() {
            info!(tick = self.now().0, kind = note.kind(), ?note, "death chest notification");
            play_effects(&mut self.world, &note);

            let owner = match &note {
                ChestNotification::ContainerCreated {
                    position,
                    owner_name,
                } => {
                    self.owners.insert(*position, owner_name.clone());
                    None
                }
                ChestNotification::ContainerReclaimed { position } => self.owners.remove(position),
                _ => None,
            };
            if let Some(line) = chat_line(&self.system.config().messages, &note, owner.as_deref())
            {
                self.chat.push(line);
            }
        }

        let effects = self.world.take_effects();
        if !effects.is_empty() {
            debug!(tick = self.now().0, ?effects, "effects played");
        }
    }
}

/// Play `script` to completion (or until `max_ticks`), printing chat to stdout.
pub fn run(host: &mut HeadlessHost, script: &mut CommandScriptPlayer, max_ticks: u64) {
    while host.now().0 < max_ticks {
        let commands = script.drain_ready_commands(host.now());
        host.step(commands);
        for line in host.take_chat() {
            println!("{line}");
        }
    }
    if !script.is_finished() {
        warn!(max_ticks, "stopped before the command script finished");
    }
    info!(
        tick = host.now().0,
        tracked = host.system().lifecycle().len(),
        dropped = host.world().dropped().len(),
        "headless run finished"
    );
}
