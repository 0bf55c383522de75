use super::event::{NodeId, SpellCast};
use super::spell::{SpellRegistry, SpellType};

/// Builds the comparison key for a traced pattern: the last decimal digit of each node, in order.
///
/// Lossy for ids >= 10 (`12` and `2` both encode as `'2'`). Template keys are authored
/// against this exact scheme, so node ids must stay single-digit.
pub fn encode_pattern(pattern: &[NodeId]) -> String {
    pattern
        .iter()
        .map(|&node| char::from(b'0' + (node % 10) as u8))
        .collect()
}

pub struct PatternResolver;

impl PatternResolver {
    /// PURE FUNCTION: (Registry, Pattern) -> SpellCast.
    /// Registry order breaks ties; a miss yields `SpellType::None` with the same pattern.
    pub fn resolve(registry: &SpellRegistry, pattern: &[NodeId]) -> SpellCast {
        let key = encode_pattern(pattern);
        let spell = registry
            .find_unlocked(&key)
            .map_or(SpellType::None, |sd| sd.spell);

        SpellCast {
            spell,
            pattern: pattern.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_single_digits_verbatim() {
        assert_eq!(encode_pattern(&[1, 3, 9]), "139");
        assert_eq!(encode_pattern(&[]), "");
    }

    #[test]
    fn keeps_last_digit_of_wide_ids() {
        assert_eq!(encode_pattern(&[1, 12, 9]), "129");
        assert_eq!(encode_pattern(&[10, 25]), "05");
        assert_eq!(encode_pattern(&[12]), encode_pattern(&[2]));
    }
}
