use serde::{Deserialize, Serialize};

use super::spell::SpellType;

/// One selectable point on the notepad surface.
///
/// Keys only keep the last decimal digit of each id, so the usable domain is 0..=9.
pub type NodeId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// External signals (node presses, clear requests)
    Input(InputEvent),
    /// Progression systems unlocking a spell template.
    Unlock(SpellType),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    pub source: String,
    pub content: InputContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContent {
    Press(NodeId),
    Clear,
}

impl InputEvent {
    pub fn press(source: &str, node: NodeId) -> Self {
        Self {
            source: source.to_string(),
            content: InputContent::Press(node),
        }
    }

    pub fn clear(source: &str) -> Self {
        Self {
            source: source.to_string(),
            content: InputContent::Clear,
        }
    }
}

impl Event {
    pub fn press(node: NodeId) -> Self {
        Event::Input(InputEvent::press("Input", node))
    }

    pub fn clear() -> Self {
        Event::Input(InputEvent::clear("Input"))
    }
}

/// Outcome of one completed capture. `spell` is `SpellType::None` when nothing matched;
/// the traced path is kept either way so the attempted line can still be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCast {
    pub spell: SpellType,
    pub pattern: Vec<NodeId>,
}

impl SpellCast {
    pub fn is_match(&self) -> bool {
        self.spell != SpellType::None
    }
}

/// Everything the notepad tells the outside world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Notification {
    NodeSelected { node: NodeId },
    SpellCast(SpellCast),
    Cleared,
}
