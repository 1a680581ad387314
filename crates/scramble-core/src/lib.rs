pub mod confetti;
pub mod context;
pub mod counter;
pub mod easing;
pub mod events;
pub mod rng;
pub mod store;
pub mod time;
pub mod words;

// Re-export key types at crate root for convenience
pub use confetti::{BurstConfig, Confetto, ConfettiColor, ConfettiState};
pub use context::{GameConfig, GameContext};
pub use counter::PointsCounter;
pub use easing::{ease, lerp, Easing};
pub use events::{GameEvent, Sound, EVENT_COMPLETED, EVENT_POINTS};
pub use rng::Rng;
pub use store::{GamePhase, SpellingStore, COMPLETION_BONUS, MESSAGE_TTL};
pub use time::FixedTimestep;
pub use words::{parse_words, scramble};
