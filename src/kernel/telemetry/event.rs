use serde::{Serialize, Deserialize};
use crate::kernel::time::Tick;
use crate::kernel::event::NodeId;
use crate::kernel::capture::RejectReason;
use crate::kernel::spell::SpellType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TelemetryEvent {
    CaptureStarted {
        tick: Tick,
    },

    NodeAccepted {
        node: NodeId,
    },

    NodeRejected {
        node: NodeId,
        reason: RejectReason,
    },

    SpellCast {
        spell: SpellType,
        pattern_len: usize,
    },

    PatternFailed {
        pattern_len: usize,
    },

    CaptureCleared {
        pattern_len: usize,
    },

    Cooldown {
        phase: CooldownPhase,
        tick: Tick,
    },

    SpellUnlocked {
        spell: SpellType,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CooldownPhase {
    Engaged,
    Released,
}
