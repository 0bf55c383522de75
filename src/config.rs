use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::kernel::capture::PatternBounds;
use crate::kernel::event::NodeId;
use crate::kernel::spell::{SpellData, SpellType};
use crate::kernel::time::ticks_for_ms;

pub const DEFAULT_COOLDOWN_MS: u64 = 1000;
pub const DEFAULT_SFX_TARGET: &str = "Player";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("start and end node are both {0}")]
    SameStartEnd(NodeId),
    #[error("spell template #{index} uses the NONE sentinel")]
    ReservedSpell { index: usize },
    #[error("spell {spell} has invalid pattern {pattern:?}: expected one or more digits")]
    InvalidPattern { spell: SpellType, pattern: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotepadConfig {
    pub start_node: NodeId,
    pub end_node: NodeId,
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    #[serde(default = "default_sfx_target")]
    pub sfx_target: String,
    #[serde(default)]
    pub spells: Vec<SpellData>,
}

fn default_cooldown_ms() -> u64 {
    DEFAULT_COOLDOWN_MS
}

fn default_sfx_target() -> String {
    DEFAULT_SFX_TARGET.to_string()
}

impl Default for NotepadConfig {
    fn default() -> Self {
        Self {
            start_node: 1,
            end_node: 9,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            sfx_target: default_sfx_target(),
            spells: Vec::new(),
        }
    }
}

impl NotepadConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: NotepadConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_node == self.end_node {
            return Err(ConfigError::SameStartEnd(self.start_node));
        }

        for node in [self.start_node, self.end_node] {
            if node > 9 {
                warn!("Node id {} is multi-digit; pattern keys only keep its last digit", node);
            }
        }

        for (index, sd) in self.spells.iter().enumerate() {
            if sd.spell == SpellType::None {
                return Err(ConfigError::ReservedSpell { index });
            }
            if sd.pattern.is_empty() || !sd.pattern.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConfigError::InvalidPattern {
                    spell: sd.spell,
                    pattern: sd.pattern.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn bounds(&self) -> PatternBounds {
        PatternBounds {
            start: self.start_node,
            end: self.end_node,
        }
    }

    pub fn cooldown_ticks(&self) -> u64 {
        ticks_for_ms(self.cooldown_ms)
    }
}
