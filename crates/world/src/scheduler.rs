//! Deferred work for the world thread.
//!
//! Tasks are plain values rather than closures: the owner of the world drains
//! due tasks each tick and executes them with whatever state it holds.

use std::collections::{BTreeMap, VecDeque};

use deathchest_core::SimTick;

/// Deferral capability handed to operations that must not mutate the world
/// inline.
pub trait Scheduler<T> {
    /// Run `task` on the next tick.
    fn run_on_next_tick(&mut self, task: T);

    /// Run `task` after `ticks` ticks. A delay of zero still waits one tick.
    fn run_after_delay(&mut self, task: T, ticks: u64);
}

/// Tick-indexed FIFO task queue.
#[derive(Debug)]
pub struct TickScheduler<T> {
    now: SimTick,
    queue: BTreeMap<SimTick, VecDeque<T>>,
}

impl<T> Default for TickScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TickScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: SimTick::ZERO,
            queue: BTreeMap::new(),
        }
    }

    pub fn now(&self) -> SimTick {
        self.now
    }

    /// Number of tasks not yet returned by [`TickScheduler::advance`].
    pub fn pending(&self) -> usize {
        self.queue.values().map(VecDeque::len).sum()
    }

    /// Step to the next tick and return every task now due, oldest first.
    pub fn advance(&mut self) -> Vec<T> {
        self.now = self.now.advance(1);
        let later = self.queue.split_off(&self.now.advance(1));
        let due = std::mem::replace(&mut self.queue, later);
        due.into_values().flatten().collect()
    }
}

impl<T> Scheduler<T> for TickScheduler<T> {
    fn run_on_next_tick(&mut self, task: T) {
        self.run_after_delay(task, 1);
    }

    fn run_after_delay(&mut self, task: T, ticks: u64) {
        let due = self.now.advance(ticks.max(1));
        self.queue.entry(due).or_default().push_back(task);
    }
}
