use crate::confetti::ConfettiState;
use crate::events::{GameEvent, Sound};

/// Tuning knobs for a game session, provided by the shell.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed logic timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum sound events packed per frame.
    pub max_sounds: usize,
    /// Maximum game events packed per frame.
    pub max_events: usize,
    /// Maximum live confetti.
    pub max_confetti: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_sounds: 16,
            max_events: 16,
            max_confetti: 256,
        }
    }
}

/// Sink for the store's fire-and-forget side effects, passed to every
/// transition. Sounds and game events are per-frame queues drained by the
/// shell; confetti persists across frames and decays on its own. Tests read
/// the queues directly, so no audio or canvas backend is needed.
pub struct GameContext {
    pub sounds: Vec<Sound>,
    pub events: Vec<GameEvent>,
    pub confetti: ConfettiState,
}

impl GameContext {
    pub fn new() -> Self {
        Self::with_seed(42, &GameConfig::default())
    }

    pub fn with_seed(seed: u64, config: &GameConfig) -> Self {
        Self {
            sounds: Vec::new(),
            events: Vec::new(),
            confetti: ConfettiState::with_capacity(seed, config.max_confetti),
        }
    }

    /// Queue a sound for the JS SoundManager.
    pub fn emit_sound(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }

    /// Queue a game event for the UI layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drop per-frame transient data (sounds, events). Confetti is not
    /// frame-scoped and is left alone.
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    /// Advance time-driven state.
    pub fn tick(&mut self, dt: f32) {
        self.confetti.tick(dt);
    }
}

impl Default for GameContext {
    fn default() -> Self {
        Self::new()
    }
}
