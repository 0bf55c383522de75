use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpellType {
    /// Sentinel carried by failed casts. Never registered as a template.
    None,
    Fire,
    Ice,
    Lightning,
    Wind,
    Earth,
    Heal,
    Shield,
}

impl SpellType {
    pub const ALL: [SpellType; 8] = [
        SpellType::None,
        SpellType::Fire,
        SpellType::Ice,
        SpellType::Lightning,
        SpellType::Wind,
        SpellType::Earth,
        SpellType::Heal,
        SpellType::Shield,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SpellType::None => "NONE",
            SpellType::Fire => "FIRE",
            SpellType::Ice => "ICE",
            SpellType::Lightning => "LIGHTNING",
            SpellType::Wind => "WIND",
            SpellType::Earth => "EARTH",
            SpellType::Heal => "HEAL",
            SpellType::Shield => "SHIELD",
        }
    }
}

impl fmt::Display for SpellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown spell type: {0:?}")]
pub struct ParseSpellError(pub String);

impl FromStr for SpellType {
    type Err = ParseSpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SpellType::ALL
            .into_iter()
            .find(|spell| spell.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSpellError(s.to_string()))
    }
}

/// One template: the key that triggers `spell`, gated by `unlocked`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellData {
    pub spell: SpellType,
    /// Encoded node sequence, one digit per node.
    pub pattern: String,
    #[serde(default)]
    pub unlocked: bool,
}

impl SpellData {
    pub fn new(spell: SpellType, pattern: &str, unlocked: bool) -> Self {
        Self {
            spell,
            pattern: pattern.to_string(),
            unlocked,
        }
    }
}

/// Ordered template list. Order is the match tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpellRegistry {
    entries: Vec<SpellData>,
}

impl SpellRegistry {
    pub fn new(entries: Vec<SpellData>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SpellData] {
        &self.entries
    }

    /// First unlocked template whose key equals `key`.
    pub fn find_unlocked(&self, key: &str) -> Option<&SpellData> {
        self.entries
            .iter()
            .find(|sd| sd.unlocked && sd.pattern == key)
    }

    /// Flips the first template of `spell` to unlocked.
    /// Returns true only when something actually changed.
    pub fn unlock(&mut self, spell: SpellType) -> bool {
        match self.entries.iter_mut().find(|sd| sd.spell == spell) {
            Some(sd) if !sd.unlocked => {
                sd.unlocked = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_unlocked(&self, spell: SpellType) -> bool {
        self.entries
            .iter()
            .find(|sd| sd.spell == spell)
            .is_some_and(|sd| sd.unlocked)
    }
}
