use super::event::NodeId;
use crate::kernel::time::Tick;

/// Strict state delta. This is the ONLY way capture state mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateDelta {
    /// Opens a capture with `node` as its only element.
    PatternStarted(NodeId),
    NodeAppended(NodeId),
    /// Empties the working sequence and leaves `Capturing`. Used on both termination and clear.
    PatternReset,
    CooldownEngaged,
    CooldownReleased,
    Tick(Tick),
}

#[derive(Debug, Clone, Default)]
pub struct CaptureState {
    // Private so only `reduce` can mutate; read through the accessors
    pattern: Vec<NodeId>,
    active: bool,
    cooldown: bool,
    // Monotonic version, bumped on every reduction
    version: u64,
    last_tick: Tick,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pattern(&self) -> &[NodeId] {
        &self.pattern
    }

    /// Between an accepted start node and termination.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn last_tick(&self) -> Tick {
        self.last_tick
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.pattern.contains(&node)
    }

    /// Idle and not cooling down: the only state a capture may start from.
    pub fn ready(&self) -> bool {
        !self.active && !self.cooldown
    }

    /// Pure reduction: State + Delta -> Mutated State
    pub fn reduce(&mut self, delta: StateDelta) {
        self.version += 1;

        match delta {
            StateDelta::Tick(t) => {
                self.last_tick = t;
            }
            StateDelta::PatternStarted(node) => {
                self.active = true;
                self.pattern.clear();
                self.pattern.push(node);
            }
            StateDelta::NodeAppended(node) => {
                // The sequence never holds an id twice
                if !self.pattern.contains(&node) {
                    self.pattern.push(node);
                }
            }
            StateDelta::PatternReset => {
                self.pattern.clear();
                self.active = false;
            }
            StateDelta::CooldownEngaged => {
                self.cooldown = true;
            }
            StateDelta::CooldownReleased => {
                self.cooldown = false;
            }
        }
    }
}
