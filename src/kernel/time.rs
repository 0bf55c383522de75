#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Tick {
    pub frame: u64,
}

pub const TICK_MS: u64 = 20;

impl Tick {
    pub fn new() -> Self {
        Tick { frame: 0 }
    }

    pub fn next(&self) -> Self {
        Tick { frame: self.frame + 1 }
    }

    pub fn after(&self, ticks: u64) -> Self {
        Tick { frame: self.frame.saturating_add(ticks) }
    }

    /// Frames elapsed since `earlier`. Zero if `earlier` is in the future.
    pub fn since(&self, earlier: Tick) -> u64 {
        self.frame.saturating_sub(earlier.frame)
    }
}

/// Wall-clock milliseconds -> logical ticks, rounded up.
pub fn ticks_for_ms(ms: u64) -> u64 {
    ms.div_ceil(TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_second_is_fifty_ticks() {
        assert_eq!(ticks_for_ms(1000), 50);
    }

    #[test]
    fn partial_tick_rounds_up() {
        assert_eq!(ticks_for_ms(1), 1);
        assert_eq!(ticks_for_ms(21), 2);
        assert_eq!(ticks_for_ms(0), 0);
    }
}
