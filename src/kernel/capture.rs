use serde::{Deserialize, Serialize};

use super::event::NodeId;
use super::state::CaptureState;

/// The configured terminals of every pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternBounds {
    pub start: NodeId,
    pub end: NodeId,
}

/// What a node press means given the current capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Idle, ready, and the start node was pressed.
    Start,
    /// Capturing and the end node was pressed.
    Finish,
    /// Capturing and the node is new to the working sequence.
    Extend,
    /// Dropped without touching state.
    Rejected(RejectReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectReason {
    /// Idle and the node is not the start node.
    NotStarted,
    /// Start node pressed while the post-cast cooldown is engaged.
    CoolingDown,
    /// Capturing and the node is already in the working sequence.
    Duplicate,
}

/// Governs the Idle <-> Capturing transitions.
pub struct CaptureGraph;

impl CaptureGraph {
    /// Pure function: (State, Press) -> Selection
    /// Rules are checked in priority order; the first that holds wins.
    pub fn classify(state: &CaptureState, bounds: PatternBounds, node: NodeId) -> Selection {
        if state.ready() && node == bounds.start {
            Selection::Start
        } else if state.is_active() && node == bounds.end {
            Selection::Finish
        } else if state.is_active() && !state.contains(node) {
            Selection::Extend
        } else if state.is_active() {
            Selection::Rejected(RejectReason::Duplicate)
        } else if node == bounds.start && state.is_cooling_down() {
            Selection::Rejected(RejectReason::CoolingDown)
        } else {
            Selection::Rejected(RejectReason::NotStarted)
        }
    }
}
