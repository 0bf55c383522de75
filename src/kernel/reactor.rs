use tokio::sync::mpsc;
use tokio::time::{interval, Duration}; // Only for the loop driver
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::capture::{CaptureGraph, PatternBounds, Selection};
use super::cooldown::CooldownGate;
use super::event::{Event, InputContent, InputEvent, NodeId, Notification};
use super::resolver::PatternResolver;
use super::scheduler::{Scheduler, TickScheduler, Timer};
use super::spell::{SpellRegistry, SpellType};
use super::state::{CaptureState, StateDelta};
use super::telemetry::event::{CooldownPhase, TelemetryEvent};
use super::telemetry::recorder::TelemetryRecorder;
use super::time::{Tick, TICK_MS};
use crate::config::{ConfigError, NotepadConfig};
use crate::outputs::sfx::{FeedbackPlayer, SoundCue};

/// Pattern capture + resolution on a single execution context.
///
/// Collaborators (feedback player, scheduler) are injected; nothing is looked up globally.
pub struct Reactor<P, S = TickScheduler> {
    state: CaptureState,
    tick: Tick,
    pub telemetry: TelemetryRecorder,
    bounds: PatternBounds,
    sfx_target: String,
    registry: SpellRegistry,
    cooldown: CooldownGate,
    player: P,
    scheduler: S,
    running: bool,
}

impl<P: FeedbackPlayer> Reactor<P, TickScheduler> {
    pub fn with_player(config: NotepadConfig, player: P) -> Result<Self, ConfigError> {
        Self::new(config, player, TickScheduler::new())
    }
}

impl<P: FeedbackPlayer, S: Scheduler> Reactor<P, S> {
    /// Builds a running reactor. Rejects configs that fail `NotepadConfig::validate`.
    pub fn new(config: NotepadConfig, player: P, scheduler: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: CaptureState::new(),
            tick: Tick::new(),
            telemetry: TelemetryRecorder::new(),
            bounds: config.bounds(),
            cooldown: CooldownGate::new(config.cooldown_ticks()),
            sfx_target: config.sfx_target,
            registry: SpellRegistry::new(config.spells),
            player,
            scheduler,
            running: true,
        })
    }

    pub fn start(&mut self) {
        if !self.running {
            debug!("Notepad input attached");
        }
        self.running = true;
    }

    /// Detaches input handling. Pending timers still fire on later ticks.
    pub fn stop(&mut self) {
        if self.running {
            debug!("Notepad input detached");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn registry(&self) -> &SpellRegistry {
        &self.registry
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Tick Step: advances the clock, fires due timers, then applies `events` in order.
    /// MUST NOT await I/O or timers.
    pub fn tick_step(&mut self, events: Vec<Event>) -> Vec<Notification> {
        self.tick = self.tick.next();
        self.state.reduce(StateDelta::Tick(self.tick));

        for timer in self.scheduler.due(self.tick) {
            match timer {
                Timer::ReleaseCooldown => {
                    let delta = self.cooldown.release();
                    self.state.reduce(delta);
                    self.telemetry.record(TelemetryEvent::Cooldown {
                        phase: CooldownPhase::Released,
                        tick: self.tick,
                    });
                }
            }
        }

        let mut out = Vec::new();
        for event in events {
            match event {
                Event::Input(InputEvent { source, content }) => match content {
                    InputContent::Press(node) => self.press(node, &mut out),
                    InputContent::Clear => {
                        debug!("Clear requested by {}", source);
                        self.reset(&mut out);
                    }
                },
                Event::Unlock(spell) => {
                    self.unlock(spell);
                }
            }
        }
        out
    }

    /// Handles one node press at the current tick.
    pub fn handle_selection(&mut self, node: NodeId) -> Vec<Notification> {
        let mut out = Vec::new();
        self.press(node, &mut out);
        out
    }

    /// External clear signal: abandons an in-progress capture without resolving it.
    pub fn clear(&mut self) -> Vec<Notification> {
        let mut out = Vec::new();
        self.reset(&mut out);
        out
    }

    /// Unlocks the first template of `spell`. True if it was locked before.
    pub fn unlock(&mut self, spell: SpellType) -> bool {
        let changed = self.registry.unlock(spell);
        if changed {
            info!("Spell unlocked: {}", spell);
            self.telemetry.record(TelemetryEvent::SpellUnlocked { spell });
        }
        changed
    }

    fn press(&mut self, node: NodeId, out: &mut Vec<Notification>) {
        if !self.running {
            debug!("Ignored press {} while stopped", node);
            return;
        }

        match CaptureGraph::classify(&self.state, self.bounds, node) {
            Selection::Start => {
                self.state.reduce(StateDelta::PatternStarted(node));
                self.telemetry.record(TelemetryEvent::CaptureStarted { tick: self.tick });
                self.accept(node, out);
            }
            Selection::Extend => {
                self.state.reduce(StateDelta::NodeAppended(node));
                self.accept(node, out);
            }
            Selection::Finish => {
                self.state.reduce(StateDelta::NodeAppended(node));
                self.accept(node, out);
                self.resolve(out);
                self.state.reduce(StateDelta::PatternReset);
            }
            Selection::Rejected(reason) => {
                debug!("Rejected press {}: {:?}", node, reason);
                self.telemetry.record(TelemetryEvent::NodeRejected { node, reason });
            }
        }
    }

    /// Notifies and plays the node's cue. The end node has no cue.
    fn accept(&mut self, node: NodeId, out: &mut Vec<Notification>) {
        self.telemetry.record(TelemetryEvent::NodeAccepted { node });
        out.push(Notification::NodeSelected { node });
        if node != self.bounds.end {
            self.player.play(&SoundCue::node(node, &self.sfx_target));
        }
    }

    fn resolve(&mut self, out: &mut Vec<Notification>) {
        let cast = PatternResolver::resolve(&self.registry, self.state.pattern());
        let pattern_len = cast.pattern.len();

        if cast.is_match() {
            info!("Spell cast: {} {:?}", cast.spell, cast.pattern);
            self.telemetry.record(TelemetryEvent::SpellCast {
                spell: cast.spell,
                pattern_len,
            });
        } else {
            info!("Invalid pattern {:?}", cast.pattern);
            self.player.play(&SoundCue::wrong(&self.sfx_target));
            self.telemetry.record(TelemetryEvent::PatternFailed { pattern_len });
        }

        out.push(Notification::SpellCast(cast));

        let delta = self.cooldown.engage(&mut self.scheduler, self.tick);
        self.state.reduce(delta);
        self.telemetry.record(TelemetryEvent::Cooldown {
            phase: CooldownPhase::Engaged,
            tick: self.tick,
        });
    }

    fn reset(&mut self, out: &mut Vec<Notification>) {
        if !self.running || !self.state.is_active() {
            return;
        }
        let pattern_len = self.state.pattern().len();
        self.state.reduce(StateDelta::PatternReset);
        info!("Capture cleared after {} node(s)", pattern_len);
        self.telemetry.record(TelemetryEvent::CaptureCleared { pattern_len });
        out.push(Notification::Cleared);
    }

    /// Async Driver Loop
    ///
    /// Drains `receiver` once per tick and forwards notifications to `notifier`.
    /// Returns when `shutdown` is cancelled, the input channel closes, or nobody listens anymore.
    pub async fn run(
        &mut self,
        mut receiver: mpsc::Receiver<Event>,
        notifier: mpsc::Sender<Notification>,
        shutdown: CancellationToken,
    ) {
        info!("Notepad reactor started. Tick: {}ms", TICK_MS);

        let mut cadence = interval(Duration::from_millis(TICK_MS));
        cadence.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = cadence.tick() => {}
            }

            // Driver: Drain Events
            let mut events = Vec::new();
            let mut closed = false;
            loop {
                match receiver.try_recv() {
                    Ok(event) => events.push(event),
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        closed = true;
                        break;
                    }
                }
            }

            // Core: Execute Step
            for notification in self.tick_step(events) {
                if notifier.send(notification).await.is_err() {
                    info!("Notification channel closed; stopping reactor");
                    return;
                }
            }

            if closed {
                info!("Input channel closed; stopping reactor");
                break;
            }
        }

        info!("Notepad reactor stopped at tick {}", self.tick.frame);
    }
}
