use bytemuck::{Pod, Zeroable};

/// A sound cue emitted by game logic.
/// The numeric id maps to an audio clip registered with the JS SoundManager;
/// ids the manager does not know are silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Sound {
    /// Game start fanfare.
    Start = 0,
    /// Word solved.
    Yay = 1,
    /// Wrong letter order.
    Negative = 2,
    /// Game completed.
    Tada = 3,
    /// UI button press.
    Click = 4,
}

impl Sound {
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Inverse of [`id`](Self::id). Unknown ids map to `None` (no-op).
    pub fn from_id(id: u32) -> Option<Sound> {
        match id {
            0 => Some(Sound::Start),
            1 => Some(Sound::Yay),
            2 => Some(Sound::Negative),
            3 => Some(Sound::Tada),
            4 => Some(Sound::Click),
            _ => None,
        }
    }
}

/// A game event communicated from Rust to the UI layer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

/// Score changed: `a` = total points, `b` = points just gained.
pub const EVENT_POINTS: f32 = 1.0;
/// Game completed: `a` = final score.
pub const EVENT_COMPLETED: f32 = 2.0;
