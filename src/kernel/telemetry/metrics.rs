use std::collections::{HashMap, VecDeque};
use super::event::TelemetryEvent;
use crate::kernel::capture::RejectReason;
use crate::kernel::spell::SpellType;

#[derive(Debug, Clone, Default)]
pub struct TelemetrySnapshot {
    pub capture_stats: CaptureStats,
    pub rejection_stats: RejectionStats,
    pub casts_by_spell: HashMap<SpellType, u64>,
    pub unlocks: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CaptureStats {
    pub started: u64,
    /// Captures that reached the end node (casts + failures).
    pub completed: u64,
    pub cleared: u64,
    pub casts: u64,
    pub failures: u64,
    pub avg_pattern_len: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RejectionStats {
    pub not_started: u64,
    pub cooling_down: u64,
    pub duplicate: u64,
}

impl RejectionStats {
    pub fn total(&self) -> u64 {
        self.not_started + self.cooling_down + self.duplicate
    }
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    let mut total_len = 0usize;

    for event in events {
        match event {
            TelemetryEvent::CaptureStarted { .. } => {
                snap.capture_stats.started += 1;
            }
            TelemetryEvent::NodeRejected { reason, .. } => match reason {
                RejectReason::NotStarted => snap.rejection_stats.not_started += 1,
                RejectReason::CoolingDown => snap.rejection_stats.cooling_down += 1,
                RejectReason::Duplicate => snap.rejection_stats.duplicate += 1,
            },
            TelemetryEvent::SpellCast { spell, pattern_len } => {
                snap.capture_stats.casts += 1;
                snap.capture_stats.completed += 1;
                total_len += pattern_len;
                *snap.casts_by_spell.entry(*spell).or_insert(0) += 1;
            }
            TelemetryEvent::PatternFailed { pattern_len } => {
                snap.capture_stats.failures += 1;
                snap.capture_stats.completed += 1;
                total_len += pattern_len;
            }
            TelemetryEvent::CaptureCleared { .. } => {
                snap.capture_stats.cleared += 1;
            }
            TelemetryEvent::SpellUnlocked { .. } => {
                snap.unlocks += 1;
            }
            _ => {}
        }
    }

    if snap.capture_stats.completed > 0 {
        snap.capture_stats.avg_pattern_len = total_len as f64 / snap.capture_stats.completed as f64;
    }

    snap
}
