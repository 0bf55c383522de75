use super::sfx::{FeedbackPlayer, SoundCue};

/// Keeps every cue it is asked to play, in order.
#[derive(Debug, Default)]
pub struct RecordingPlayer {
    pub played: Vec<SoundCue>,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> Vec<&str> {
        self.played.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl FeedbackPlayer for RecordingPlayer {
    fn play(&mut self, cue: &SoundCue) {
        self.played.push(cue.clone());
    }
}
