use std::collections::{BTreeMap, HashMap};

use super::time::Tick;

/// Deferred work the kernel can ask for. Delivered back to the reactor when due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    ReleaseCooldown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(u64);

/// Fires timers on the caller's own execution context. Never blocks, never spawns.
pub trait Scheduler {
    /// Arms `timer` to fire once `delay` ticks after `now`.
    fn schedule(&mut self, now: Tick, delay: u64, timer: Timer) -> TimerHandle;

    /// Disarms a pending timer. Returns false if it already fired or was cancelled.
    fn cancel(&mut self, handle: TimerHandle) -> bool;

    /// Removes and returns every timer whose deadline is at or before `now`,
    /// earliest deadline first, ties in scheduling order.
    fn due(&mut self, now: Tick) -> Vec<Timer>;

    fn pending(&self) -> usize;
}

/// Logical-clock scheduler driven by `Reactor::tick_step`.
#[derive(Debug, Default)]
pub struct TickScheduler {
    next_id: u64,
    queue: BTreeMap<(Tick, TimerHandle), Timer>,
    deadlines: HashMap<TimerHandle, Tick>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TickScheduler {
    fn schedule(&mut self, now: Tick, delay: u64, timer: Timer) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        let deadline = now.after(delay);
        self.queue.insert((deadline, handle), timer);
        self.deadlines.insert(handle, deadline);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.queue.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    fn due(&mut self, now: Tick) -> Vec<Timer> {
        let mut fired = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            let (deadline, handle) = *entry.key();
            if deadline > now {
                break;
            }
            fired.push(entry.remove());
            self.deadlines.remove(&handle);
        }
        fired
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
