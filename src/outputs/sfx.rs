use serde::Serialize;
use tracing::info;

use crate::kernel::event::NodeId;

pub const NODE_FADE_OUT: f32 = 0.33;
pub const WRONG_FADE_OUT: f32 = 0.25;
pub const WRONG_CUE: &str = "NodeWrong";

/// One fire-and-forget sound request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoundCue {
    pub name: String,
    pub target: String,
    pub fade_in: f32,
    pub fade_out: f32,
}

impl SoundCue {
    /// Per-node cue, named `Node<id>`.
    pub fn node(node: NodeId, target: &str) -> Self {
        Self {
            name: format!("Node{node}"),
            target: target.to_string(),
            fade_in: 0.0,
            fade_out: NODE_FADE_OUT,
        }
    }

    pub fn wrong(target: &str) -> Self {
        Self {
            name: WRONG_CUE.to_string(),
            target: target.to_string(),
            fade_in: 0.0,
            fade_out: WRONG_FADE_OUT,
        }
    }
}

/// Audio collaborator. The kernel never looks at the result of a play.
pub trait FeedbackPlayer {
    fn play(&mut self, cue: &SoundCue);
}

/// Headless player for the driver binary: every cue becomes a log line.
#[derive(Debug, Default)]
pub struct TracingPlayer;

impl FeedbackPlayer for TracingPlayer {
    fn play(&mut self, cue: &SoundCue) {
        info!("[SFX] {} on {} (in {:.2}s, out {:.2}s)", cue.name, cue.target, cue.fade_in, cue.fade_out);
    }
}
