use tracing::debug;

use super::scheduler::{Scheduler, Timer, TimerHandle};
use super::state::StateDelta;
use super::time::Tick;

/// Timed latch that blocks new captures while a cast plays out.
#[derive(Debug)]
pub struct CooldownGate {
    duration_ticks: u64,
    pending: Option<TimerHandle>,
}

impl CooldownGate {
    pub fn new(duration_ticks: u64) -> Self {
        Self {
            duration_ticks,
            pending: None,
        }
    }

    pub fn duration_ticks(&self) -> u64 {
        self.duration_ticks
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Arms the release timer. An already-pending release is cancelled first,
    /// so re-engaging restarts the delay instead of stacking timers.
    pub fn engage<S: Scheduler>(&mut self, scheduler: &mut S, now: Tick) -> StateDelta {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
            debug!("Cooldown restarted at tick {}", now.frame);
        }
        self.pending = Some(scheduler.schedule(now, self.duration_ticks, Timer::ReleaseCooldown));
        StateDelta::CooldownEngaged
    }

    /// Called when the release timer fires.
    pub fn release(&mut self) -> StateDelta {
        self.pending = None;
        StateDelta::CooldownReleased
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::scheduler::TickScheduler;

    #[test]
    fn reengage_does_not_stack_timers() {
        let mut sched = TickScheduler::new();
        let mut gate = CooldownGate::new(10);

        gate.engage(&mut sched, Tick::new());
        gate.engage(&mut sched, Tick { frame: 5 });

        assert_eq!(sched.pending(), 1);
        assert!(sched.due(Tick { frame: 10 }).is_empty(), "first deadline was cancelled");
        assert_eq!(sched.due(Tick { frame: 15 }), vec![Timer::ReleaseCooldown]);
    }
}
