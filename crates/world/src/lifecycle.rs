//! Death-chest lifecycle: placement, discovery and reclamation.
//!
//! A chest is tracked from the moment its marker block is written until the
//! marker is cleared again. Tracking is keyed by position and every operation
//! re-reads the world, so bookkeeping never outlives the block it describes.
//!
//! ```text
//! create ─▶ Created ─▶ Opened ⇄ ClosedNonEmpty
//!                        │
//!                        ▼
//!                   ClosedEmpty ─(next tick)─▶ reclaim ─▶ untracked
//! ```

use std::collections::BTreeMap;

use deathchest_core::{BlockPos, ItemStack};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::block::BlockKind;
use crate::config::LabelConfig;
use crate::error::ChestError;
use crate::events::{ChestNotification, EffectNotifier};
use crate::scheduler::Scheduler;
use crate::template::{render_template, TemplateVars};
use crate::transfer;
use crate::world::{LabelText, WorldAccess};

/// Longest label line a sign displays.
pub const LABEL_LINE_MAX_CHARS: usize = 15;

/// Where a tracked chest is in its lifecycle. Untracked positions are either
/// not yet created or already reclaimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChestPhase {
    /// Placed and filled, not opened yet.
    Created,
    /// Someone has the inventory open.
    Opened,
    /// Closed with items still inside.
    ClosedNonEmpty,
    /// Closed empty; a reclamation may be queued.
    ClosedEmpty,
}

/// Snapshot of a death chest, read from the world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    pub position: BlockPos,
    pub owner_name: String,
    pub items: Vec<ItemStack>,
    /// Whether a label sign was placed above the chest.
    pub has_marker: bool,
}

/// Result of a successful [`ContainerLifecycle::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedChest {
    pub chest: Container,
    /// Stacks that did not fit, in input order.
    pub overflow: Vec<ItemStack>,
}

/// Deferred lifecycle work, executed via [`ContainerLifecycle::run_task`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LifecycleTask {
    /// Remove the chest at `pos` if it is still waiting on the reclamation
    /// identified by `ticket`.
    Reclaim { pos: BlockPos, ticket: u64 },
}

/// What [`ContainerLifecycle::on_closed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Not a tracked chest.
    Ignored,
    /// Items remain; the chest stays.
    Retained,
    /// The chest was empty; it goes away on the next tick.
    ReclaimScheduled,
    /// A reclamation is already queued for this chest.
    AlreadyScheduled,
}

/// What a reclamation attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReclaimOutcome {
    /// Chest and label were cleared.
    Reclaimed,
    /// The chest was refilled before the deferred reclamation ran.
    Retained,
    /// The chest is not closed and empty, or the task belongs to an earlier
    /// close or an earlier chest at the same position; nothing changed.
    Skipped,
    /// Nothing tracked at that position; no-op.
    Stale,
}

#[derive(Debug, Clone)]
struct TrackedChest {
    owner_name: String,
    phase: ChestPhase,
    has_label: bool,
    /// Ticket of the queued reclamation, if one is queued and still valid.
    pending_reclaim: Option<u64>,
}

/// Tracks every live death chest.
#[derive(Debug)]
pub struct ContainerLifecycle {
    label: LabelConfig,
    tracked: BTreeMap<BlockPos, TrackedChest>,
    next_ticket: u64,
}

impl ContainerLifecycle {
    pub fn new(label: LabelConfig) -> Self {
        Self {
            label,
            tracked: BTreeMap::new(),
            next_ticket: 0,
        }
    }

    /// Place a chest at `pos` for `owner_name` and fill it with `items`.
    ///
    /// Fails with [`ChestError::PlacementConflict`] when the chest block (or
    /// the label block, with labels enabled) is no longer air; the world is
    /// left untouched in that case.
    pub fn create<W, N, I>(
        &mut self,
        world: &mut W,
        notifier: &mut N,
        pos: BlockPos,
        owner_name: &str,
        items: I,
    ) -> Result<CreatedChest, ChestError>
    where
        W: WorldAccess + ?Sized,
        N: EffectNotifier + ?Sized,
        I: IntoIterator<Item = Option<ItemStack>>,
    {
        self.forget_if_stale(world, pos);
        let label_pos = pos.up();
        if self.tracked.contains_key(&pos)
            || !world.block(pos).is_empty()
            || (self.label.enabled && !world.block(label_pos).is_empty())
        {
            return Err(ChestError::PlacementConflict { pos });
        }

        world.set_block(pos, BlockKind::ContainerMarker, false);
        let Some(inventory) = world.container_mut(pos) else {
            warn!(%pos, "host did not attach an inventory to the chest block");
            world.set_block(pos, BlockKind::Empty, false);
            return Err(ChestError::PlacementConflict { pos });
        };
        let overflow = transfer::fill(inventory, items);
        let items: Vec<ItemStack> = inventory.items().cloned().collect();

        let has_label = self.label.enabled;
        if has_label {
            world.set_block(label_pos, BlockKind::SignMarker, false);
            world.set_label(label_pos, self.render_label(owner_name, pos));
        }

        self.tracked.insert(
            pos,
            TrackedChest {
                owner_name: owner_name.to_string(),
                phase: ChestPhase::Created,
                has_label,
                pending_reclaim: None,
            },
        );
        info!(
            %pos,
            owner = owner_name,
            stacks = items.len(),
            overflow = overflow.len(),
            "death chest created"
        );
        notifier.notify(ChestNotification::ContainerCreated {
            position: pos,
            owner_name: owner_name.to_string(),
        });

        Ok(CreatedChest {
            chest: Container {
                position: pos,
                owner_name: owner_name.to_string(),
                items,
                has_marker: has_label,
            },
            overflow,
        })
    }

    /// Someone opened the container at `pos`. Returns `false` for positions
    /// that do not hold a tracked chest.
    ///
    /// Opening cancels a queued reclamation; the next empty close queues a
    /// new one.
    pub fn on_opened<W, N>(&mut self, world: &W, notifier: &mut N, pos: BlockPos) -> bool
    where
        W: WorldAccess + ?Sized,
        N: EffectNotifier + ?Sized,
    {
        self.forget_if_stale(world, pos);
        let Some(chest) = self.tracked.get_mut(&pos) else {
            return false;
        };
        chest.phase = ChestPhase::Opened;
        chest.pending_reclaim = None;
        debug!(%pos, owner = %chest.owner_name, "death chest opened");
        notifier.notify(ChestNotification::ContainerDiscovered { position: pos });
        true
    }

    /// Someone closed the container at `pos`.
    ///
    /// An empty chest is queued for reclamation on the next tick; the block is
    /// never cleared from inside the close handler.
    pub fn on_closed<W, S>(
        &mut self,
        world: &W,
        scheduler: &mut S,
        pos: BlockPos,
    ) -> CloseOutcome
    where
        W: WorldAccess + ?Sized,
        S: Scheduler<LifecycleTask> + ?Sized,
    {
        self.forget_if_stale(world, pos);
        let Some(chest) = self.tracked.get_mut(&pos) else {
            return CloseOutcome::Ignored;
        };

        let empty = world.container(pos).map_or(true, |inv| inv.is_empty());
        if !empty {
            chest.phase = ChestPhase::ClosedNonEmpty;
            return CloseOutcome::Retained;
        }

        chest.phase = ChestPhase::ClosedEmpty;
        if chest.pending_reclaim.is_some() {
            return CloseOutcome::AlreadyScheduled;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        chest.pending_reclaim = Some(ticket);
        scheduler.run_on_next_tick(LifecycleTask::Reclaim { pos, ticket });
        debug!(%pos, ticket, "death chest emptied, reclamation scheduled");
        CloseOutcome::ReclaimScheduled
    }

    /// Remove the chest at `pos`: label first, then the chest, without drops.
    ///
    /// Only a chest in [`ChestPhase::ClosedEmpty`] is removed. The live
    /// inventory is re-checked, so a chest refilled since it was closed is
    /// kept. Calling this on an untracked position is a no-op.
    pub fn reclaim<W, N>(
        &mut self,
        world: &mut W,
        notifier: &mut N,
        pos: BlockPos,
    ) -> ReclaimOutcome
    where
        W: WorldAccess + ?Sized,
        N: EffectNotifier + ?Sized,
    {
        self.forget_if_stale(world, pos);
        let Some(chest) = self.tracked.get_mut(&pos) else {
            debug!(error = %ChestError::StaleReference { pos }, "reclaim skipped");
            return ReclaimOutcome::Stale;
        };
        chest.pending_reclaim = None;

        if chest.phase != ChestPhase::ClosedEmpty {
            debug!(%pos, phase = ?chest.phase, "death chest not closed and empty, kept");
            return ReclaimOutcome::Skipped;
        }
        if world.container(pos).is_some_and(|inv| !inv.is_empty()) {
            debug!(%pos, "death chest refilled before reclamation");
            chest.phase = ChestPhase::ClosedNonEmpty;
            return ReclaimOutcome::Retained;
        }

        let label_pos = pos.up();
        if chest.has_label && world.block(label_pos) == BlockKind::SignMarker {
            world.set_block(label_pos, BlockKind::Empty, false);
        }
        world.set_block(pos, BlockKind::Empty, false);
        self.tracked.remove(&pos);

        info!(%pos, "death chest reclaimed");
        notifier.notify(ChestNotification::ContainerReclaimed { position: pos });
        ReclaimOutcome::Reclaimed
    }

    /// Execute a task previously handed to the scheduler.
    ///
    /// A reclamation runs only if it is still the one queued for the chest now
    /// standing at its position. Reopening the chest, or replacing it after it
    /// vanished, invalidates the ticket.
    pub fn run_task<W, N>(
        &mut self,
        world: &mut W,
        notifier: &mut N,
        task: LifecycleTask,
    ) -> ReclaimOutcome
    where
        W: WorldAccess + ?Sized,
        N: EffectNotifier + ?Sized,
    {
        match task {
            LifecycleTask::Reclaim { pos, ticket } => {
                self.forget_if_stale(world, pos);
                let Some(chest) = self.tracked.get(&pos) else {
                    debug!(error = %ChestError::StaleReference { pos }, "reclaim task skipped");
                    return ReclaimOutcome::Stale;
                };
                if chest.pending_reclaim != Some(ticket) {
                    debug!(%pos, ticket, "reclaim task superseded");
                    return ReclaimOutcome::Skipped;
                }
                self.reclaim(world, notifier, pos)
            }
        }
    }

    /// Drop tracking for every chest whose marker has disappeared. Returns the
    /// number of entries removed.
    pub fn forget_stale<W: WorldAccess + ?Sized>(&mut self, world: &W) -> usize {
        let before = self.tracked.len();
        self.tracked.retain(|pos, chest| {
            let live = world.block(*pos) == BlockKind::ContainerMarker;
            if !live {
                warn!(
                    %pos,
                    owner = %chest.owner_name,
                    "death chest vanished without reclamation"
                );
            }
            live
        });
        before - self.tracked.len()
    }

    pub fn phase(&self, pos: BlockPos) -> Option<ChestPhase> {
        self.tracked.get(&pos).map(|chest| chest.phase)
    }

    pub fn is_tracked(&self, pos: BlockPos) -> bool {
        self.tracked.contains_key(&pos)
    }

    /// Tracked chest positions in ascending order.
    pub fn tracked(&self) -> impl Iterator<Item = BlockPos> + '_ {
        self.tracked.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Live snapshot of the chest at `pos`.
    pub fn container<W: WorldAccess + ?Sized>(
        &self,
        world: &W,
        pos: BlockPos,
    ) -> Option<Container> {
        let chest = self.tracked.get(&pos)?;
        let inventory = world.container(pos)?;
        Some(Container {
            position: pos,
            owner_name: chest.owner_name.clone(),
            items: inventory.items().cloned().collect(),
            has_marker: chest.has_label,
        })
    }

    fn forget_if_stale<W: WorldAccess + ?Sized>(&mut self, world: &W, pos: BlockPos) {
        if self.tracked.contains_key(&pos) && world.block(pos) != BlockKind::ContainerMarker {
            warn!(%pos, "death chest vanished without reclamation");
            self.tracked.remove(&pos);
        }
    }

    fn render_label(&self, owner_name: &str, pos: BlockPos) -> LabelText {
        let vars = TemplateVars::new(owner_name, pos);
        self.label.lines.clone().map(|line| {
            render_template(&line, &vars)
                .chars()
                .take(LABEL_LINE_MAX_CHARS)
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryWorld;
    use crate::scheduler::TickScheduler;
    use deathchest_core::RegistryKey;

    const POS: BlockPos = BlockPos::new(0, 64, 0);

    fn stack(name: &str) -> ItemStack {
        ItemStack::new(RegistryKey::parse(name).unwrap(), 1)
    }

    fn setup() -> (MemoryWorld, ContainerLifecycle, Vec<ChestNotification>) {
        (
            MemoryWorld::default().with_floor(63, 2),
            ContainerLifecycle::new(LabelConfig::default()),
            Vec::new(),
        )
    }

    #[test]
    fn create_writes_chest_label_and_contents() {
        let (mut world, mut lifecycle, mut notes) = setup();

        let created = lifecycle
            .create(
                &mut world,
                &mut notes,
                POS,
                "Alex",
                vec![Some(stack("apple")), None],
            )
            .expect("site is free");

        assert_eq!(world.block(POS), BlockKind::ContainerMarker);
        assert_eq!(world.block(POS.up()), BlockKind::SignMarker);
        assert_eq!(
            world.label(POS.up()).map(|l| l[1].as_str()),
            Some("Alex's")
        );
        assert_eq!(created.chest.items, vec![stack("apple")]);
        assert!(created.chest.has_marker);
        assert!(created.overflow.is_empty());
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::Created));
        assert_eq!(
            notes,
            vec![ChestNotification::ContainerCreated {
                position: POS,
                owner_name: "Alex".into()
            }]
        );
    }

    #[test]
    fn create_conflicts_when_site_is_taken() {
        let (mut world, mut lifecycle, mut notes) = setup();
        world.fill_block(POS.up(), BlockKind::Passable);

        let err = lifecycle
            .create(&mut world, &mut notes, POS, "Alex", vec![Some(stack("apple"))])
            .unwrap_err();

        assert_eq!(err, ChestError::PlacementConflict { pos: POS });
        assert_eq!(world.block(POS), BlockKind::Empty);
        assert!(lifecycle.is_empty());
        assert!(notes.is_empty());
    }

    #[test]
    fn disabled_labels_skip_the_sign() {
        let (mut world, _, mut notes) = setup();
        let mut lifecycle = ContainerLifecycle::new(LabelConfig {
            enabled: false,
            ..LabelConfig::default()
        });
        world.fill_block(POS.up(), BlockKind::Solid);

        let created = lifecycle
            .create(&mut world, &mut notes, POS, "Alex", vec![Some(stack("apple"))])
            .expect("label block is not required");
        assert!(!created.chest.has_marker);
        assert_eq!(world.block(POS.up()), BlockKind::Solid);
    }

    #[test]
    fn long_label_lines_are_truncated() {
        let (mut world, mut lifecycle, mut notes) = setup();
        lifecycle
            .create(&mut world, &mut notes, POS, "AVeryLongPlayerName", Vec::new())
            .unwrap();
        let label = world.label(POS.up()).unwrap();
        assert_eq!(label[1].chars().count(), LABEL_LINE_MAX_CHARS);
        assert_eq!(label[1], "AVeryLongPlayer");
    }

    #[test]
    fn opening_untracked_chest_is_ignored() {
        let (mut world, mut lifecycle, mut notes) = setup();
        world.fill_block(POS, BlockKind::ContainerMarker);

        assert!(!lifecycle.on_opened(&world, &mut notes, POS));
        assert!(notes.is_empty());
    }

    #[test]
    fn close_with_items_keeps_chest() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let mut scheduler = TickScheduler::new();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", vec![Some(stack("apple"))])
            .unwrap();

        assert!(lifecycle.on_opened(&world, &mut notes, POS));
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::Opened));
        assert_eq!(
            lifecycle.on_closed(&world, &mut scheduler, POS),
            CloseOutcome::Retained
        );
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::ClosedNonEmpty));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn close_when_empty_schedules_exactly_one_reclaim() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let mut scheduler = TickScheduler::new();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", vec![Some(stack("apple"))])
            .unwrap();
        world.container_mut(POS).unwrap().take(0);

        assert_eq!(
            lifecycle.on_closed(&world, &mut scheduler, POS),
            CloseOutcome::ReclaimScheduled
        );
        assert_eq!(
            lifecycle.on_closed(&world, &mut scheduler, POS),
            CloseOutcome::AlreadyScheduled
        );
        assert_eq!(scheduler.pending(), 1);
        // Still standing until the task runs.
        assert_eq!(world.block(POS), BlockKind::ContainerMarker);
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::ClosedEmpty));

        let tasks = scheduler.advance();
        assert_eq!(tasks, vec![LifecycleTask::Reclaim { pos: POS, ticket: 0 }]);
        for task in tasks {
            assert_eq!(
                lifecycle.run_task(&mut world, &mut notes, task),
                ReclaimOutcome::Reclaimed
            );
        }
        assert_eq!(world.block(POS), BlockKind::Empty);
        assert_eq!(world.block(POS.up()), BlockKind::Empty);
        assert!(world.dropped().is_empty());
        assert!(!lifecycle.is_tracked(POS));
    }

    #[test]
    fn refilled_chest_survives_deferred_reclaim() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let mut scheduler = TickScheduler::new();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", Vec::new())
            .unwrap();
        lifecycle.on_closed(&world, &mut scheduler, POS);

        world.container_mut(POS).unwrap().insert(stack("dirt")).unwrap();

        for task in scheduler.advance() {
            assert_eq!(
                lifecycle.run_task(&mut world, &mut notes, task),
                ReclaimOutcome::Retained
            );
        }
        assert_eq!(world.block(POS), BlockKind::ContainerMarker);
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::ClosedNonEmpty));

        // Emptying it again can schedule a fresh reclamation.
        world.container_mut(POS).unwrap().take(0);
        assert_eq!(
            lifecycle.on_closed(&world, &mut scheduler, POS),
            CloseOutcome::ReclaimScheduled
        );
    }

    #[test]
    fn reclaim_twice_is_a_no_op() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let mut scheduler = TickScheduler::new();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", Vec::new())
            .unwrap();
        lifecycle.on_closed(&world, &mut scheduler, POS);

        assert_eq!(
            lifecycle.reclaim(&mut world, &mut notes, POS),
            ReclaimOutcome::Reclaimed
        );
        let after_first = world.blocks().clone();
        assert_eq!(
            lifecycle.reclaim(&mut world, &mut notes, POS),
            ReclaimOutcome::Stale
        );
        assert_eq!(world.blocks(), &after_first);
        let reclaimed = notes
            .iter()
            .filter(|n| matches!(n, ChestNotification::ContainerReclaimed { .. }))
            .count();
        assert_eq!(reclaimed, 1);
    }

    #[test]
    fn reclaim_leaves_chests_that_were_never_closed() {
        let (mut world, mut lifecycle, mut notes) = setup();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", Vec::new())
            .unwrap();

        assert_eq!(
            lifecycle.reclaim(&mut world, &mut notes, POS),
            ReclaimOutcome::Skipped
        );
        assert_eq!(world.block(POS), BlockKind::ContainerMarker);
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::Created));
    }

    #[test]
    fn reopened_chest_survives_queued_reclaim() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let mut scheduler = TickScheduler::new();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", Vec::new())
            .unwrap();
        assert_eq!(
            lifecycle.on_closed(&world, &mut scheduler, POS),
            CloseOutcome::ReclaimScheduled
        );
        assert!(lifecycle.on_opened(&world, &mut notes, POS));

        let outcomes: Vec<_> = scheduler
            .advance()
            .into_iter()
            .map(|task| lifecycle.run_task(&mut world, &mut notes, task))
            .collect();

        assert_eq!(outcomes, vec![ReclaimOutcome::Skipped]);
        assert_eq!(world.block(POS), BlockKind::ContainerMarker);
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::Opened));

        // Closing it empty again queues a fresh reclamation that does run.
        assert_eq!(
            lifecycle.on_closed(&world, &mut scheduler, POS),
            CloseOutcome::ReclaimScheduled
        );
        for task in scheduler.advance() {
            assert_eq!(
                lifecycle.run_task(&mut world, &mut notes, task),
                ReclaimOutcome::Reclaimed
            );
        }
        assert_eq!(world.block(POS), BlockKind::Empty);
    }

    #[test]
    fn queued_reclaim_does_not_touch_a_replacement_chest() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let mut scheduler = TickScheduler::new();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", Vec::new())
            .unwrap();
        lifecycle.on_closed(&world, &mut scheduler, POS);

        // Broken by someone else, then a new chest is placed on the same spot.
        world.set_block(POS.up(), BlockKind::Empty, false);
        world.set_block(POS, BlockKind::Empty, false);
        lifecycle
            .create(&mut world, &mut notes, POS, "Sam", vec![Some(stack("apple"))])
            .expect("spot is free again");

        for task in scheduler.advance() {
            assert_eq!(
                lifecycle.run_task(&mut world, &mut notes, task),
                ReclaimOutcome::Skipped
            );
        }
        assert_eq!(world.block(POS), BlockKind::ContainerMarker);
        assert_eq!(lifecycle.phase(POS), Some(ChestPhase::Created));
        assert_eq!(
            lifecycle.container(&world, POS).map(|chest| chest.owner_name),
            Some("Sam".to_string())
        );
    }

    #[test]
    fn broken_chest_is_forgotten() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let mut scheduler = TickScheduler::new();
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", vec![Some(stack("apple"))])
            .unwrap();
        world.set_block(POS, BlockKind::Empty, true);

        assert_eq!(
            lifecycle.on_closed(&world, &mut scheduler, POS),
            CloseOutcome::Ignored
        );
        assert!(!lifecycle.is_tracked(POS));
    }

    #[test]
    fn forget_stale_sweeps_all_vanished_chests() {
        let (mut world, mut lifecycle, mut notes) = setup();
        let other = BlockPos::new(2, 64, 2);
        lifecycle
            .create(&mut world, &mut notes, POS, "Alex", Vec::new())
            .unwrap();
        lifecycle
            .create(&mut world, &mut notes, other, "Sam", Vec::new())
            .unwrap();
        world.set_block(other, BlockKind::Solid, false);

        assert_eq!(lifecycle.forget_stale(&world), 1);
        assert_eq!(lifecycle.tracked().collect::<Vec<_>>(), vec![POS]);
    }

    #[test]
    fn container_snapshot_reads_live_contents() {
        let (mut world, mut lifecycle, mut notes) = setup();
        lifecycle
            .create(
                &mut world,
                &mut notes,
                POS,
                "Alex",
                vec![Some(stack("a")), Some(stack("b"))],
            )
            .unwrap();
        world.container_mut(POS).unwrap().take(0);

        let snapshot = lifecycle.container(&world, POS).expect("tracked");
        assert_eq!(snapshot.items, vec![stack("b")]);
        assert_eq!(snapshot.owner_name, "Alex");
        assert!(lifecycle.container(&world, BlockPos::new(9, 9, 9)).is_none());
    }
}
