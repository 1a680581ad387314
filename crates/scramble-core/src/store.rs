//! The spelling game store: state, transitions, derived values.
//!
//! One store per player session, owned by the shell and passed to the UI's
//! event handlers. Every transition takes a [`GameContext`] to receive its
//! side effects; timed behavior (the transient message) advances in
//! [`tick`](SpellingStore::tick).

use serde::{Deserialize, Serialize};

use crate::confetti::BurstConfig;
use crate::context::GameContext;
use crate::events::{GameEvent, Sound, EVENT_COMPLETED, EVENT_POINTS};
use crate::rng::Rng;
use crate::words::scramble;

/// Seconds a transient message stays on screen.
pub const MESSAGE_TTL: f32 = 2.0;
/// Points granted once when the last word is solved.
pub const COMPLETION_BONUS: u32 = 50;

const MSG_CORRECT: &str = "🥳 Correct!";
const MSG_WRONG: &str = "❌ Not quite, try again!";
const MSG_COMPLETED: &str = "🎉 Congratulations! You completed the game!";

/// Where the game is in its lifecycle. Derived from the two flags, so the
/// three phases are mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Completed,
}

/// Game progress for one player session.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellingStore {
    words: Vec<String>,
    current_index: usize,
    user_name: String,
    user_points: u32,
    game_started: bool,
    game_completed: bool,
    scrambled: String,
    #[serde(skip)]
    message: String,
    #[serde(skip)]
    message_ttl: Option<f32>,
    #[serde(skip)]
    rng: Rng,
}

impl SpellingStore {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            words: Vec::new(),
            current_index: 0,
            user_name: String::new(),
            user_points: 0,
            game_started: false,
            game_completed: false,
            scrambled: String::new(),
            message: String::new(),
            message_ttl: None,
            rng: Rng::new(seed),
        }
    }

    // -- Derived values --

    /// The word the player is solving, or `""` out of range. Never panics.
    pub fn current_word(&self) -> &str {
        self.words
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Cached permutation of the current word, recomputed once per word
    /// change so the presented letters stay stable between reads.
    pub fn scrambled_word(&self) -> &str {
        &self.scrambled
    }

    pub fn phase(&self) -> GamePhase {
        if !self.game_started {
            GamePhase::NotStarted
        } else if self.game_completed {
            GamePhase::Completed
        } else {
            GamePhase::InProgress
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn user_points(&self) -> u32 {
        self.user_points
    }

    pub fn game_started(&self) -> bool {
        self.game_started
    }

    pub fn game_completed(&self) -> bool {
        self.game_completed
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    // -- Transitions --

    /// Start a new game. An empty word list is accepted and yields an
    /// always-empty current word.
    pub fn initialize_game(&mut self, words: Vec<String>, name: &str, fx: &mut GameContext) {
        self.words = words;
        self.user_name = name.to_string();
        self.current_index = 0;
        self.user_points = 0;
        self.game_started = true;
        self.game_completed = false;
        self.clear_message();
        self.rescramble();
        fx.emit_sound(Sound::Start);
        log::info!(
            "game started: {} words for {:?}",
            self.words.len(),
            self.user_name
        );
    }

    /// Compare a submitted letter order against the current word. A match
    /// advances the game; a mismatch leaves position and points untouched.
    pub fn check_order(&mut self, letters: &[String], fx: &mut GameContext) {
        if self.phase() != GamePhase::InProgress {
            return;
        }
        if letters.concat() == self.current_word() {
            self.next_word(fx);
        } else {
            self.set_message(MSG_WRONG);
            fx.emit_sound(Sound::Negative);
        }
    }

    /// The sole advancement path. On the last word, hands over to
    /// [`end_game`](Self::end_game); a completed game ignores further calls.
    pub fn next_word(&mut self, fx: &mut GameContext) {
        if self.phase() != GamePhase::InProgress {
            return;
        }
        if self.current_index + 1 < self.words.len() {
            self.current_index += 1;
            self.game_completed = false;
            self.set_message(MSG_CORRECT);
            // Points are earned for the word being entered, not the one left.
            let gained = self.current_word().chars().count() as u32;
            self.add_points(gained);
            self.rescramble();
            fx.emit_sound(Sound::Yay);
            fx.emit_event(GameEvent {
                kind: EVENT_POINTS,
                a: self.user_points as f32,
                b: gained as f32,
                c: 0.0,
            });
        } else {
            self.end_game(fx);
        }
    }

    /// Completion: bonus, confetti, fanfare. The bonus is granted exactly
    /// once; repeated calls are no-ops.
    pub fn end_game(&mut self, fx: &mut GameContext) {
        if self.phase() != GamePhase::InProgress {
            return;
        }
        self.add_points(COMPLETION_BONUS);
        fx.confetti.burst(&BurstConfig::default());
        fx.emit_sound(Sound::Tada);
        // The completion message sticks until the next transition.
        self.message = MSG_COMPLETED.to_string();
        self.message_ttl = None;
        self.game_completed = true;
        fx.emit_event(GameEvent {
            kind: EVENT_COMPLETED,
            a: self.user_points as f32,
            b: 0.0,
            c: 0.0,
        });
        log::info!("game completed: {} points", self.user_points);
    }

    /// Show a transient message. Re-arming replaces any pending clear, so a
    /// stale timer can never wipe a newer message.
    pub fn set_message(&mut self, text: &str) {
        self.message = text.to_string();
        self.message_ttl = Some(MESSAGE_TTL);
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
        self.message_ttl = None;
    }

    pub fn add_points(&mut self, points: u32) {
        self.user_points = self.user_points.saturating_add(points);
    }

    /// Full reset, including the word list and player name.
    pub fn reset_game(&mut self) {
        self.words.clear();
        self.user_name.clear();
        self.current_index = 0;
        self.user_points = 0;
        self.game_started = false;
        self.game_completed = false;
        self.scrambled.clear();
        self.clear_message();
    }

    /// Advance timed state. `dt` is the fixed logic step in seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(ttl) = &mut self.message_ttl {
            *ttl -= dt;
            if *ttl <= 0.0 {
                self.clear_message();
            }
        }
    }

    // -- Persistence pass-through --

    /// Serialize the persistent fields for an external storage collaborator.
    /// Transient state (message, timer, RNG) is not part of the snapshot.
    pub fn snapshot(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Rebuild a store from a snapshot. Transient state restarts fresh.
    pub fn restore(json: &str) -> Result<SpellingStore, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace the scramble RNG (after restore, where the serialized state
    /// carries no RNG).
    pub fn reseed(&mut self, seed: u64) {
        self.rng = Rng::new(seed);
    }

    fn rescramble(&mut self) {
        let word = self
            .words
            .get(self.current_index)
            .map(String::as_str)
            .unwrap_or("");
        self.scrambled = scramble(word, &mut self.rng);
    }
}

impl Default for SpellingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<String> {
        word.chars().map(|c| c.to_string()).collect()
    }

    fn started(words: &[&str], name: &str) -> (SpellingStore, GameContext) {
        let mut store = SpellingStore::with_seed(7);
        let mut ctx = GameContext::new();
        store.initialize_game(words.iter().map(|w| w.to_string()).collect(), name, &mut ctx);
        (store, ctx)
    }

    #[test]
    fn initialize_presents_the_first_word() {
        let (store, ctx) = started(&["cat", "dog"], "Ada");
        assert_eq!(store.current_word(), "cat");
        assert_eq!(store.user_name(), "Ada");
        assert_eq!(store.user_points(), 0);
        assert_eq!(store.phase(), GamePhase::InProgress);
        assert_eq!(ctx.sounds, vec![Sound::Start]);
    }

    #[test]
    fn empty_word_list_degrades_to_empty_word() {
        let (store, _ctx) = started(&[], "Ada");
        assert_eq!(store.current_word(), "");
        assert_eq!(store.scrambled_word(), "");
        assert_eq!(store.phase(), GamePhase::InProgress);
    }

    #[test]
    fn scrambled_word_has_the_same_letters() {
        let (store, _ctx) = started(&["spelling"], "Ada");
        let mut shown: Vec<char> = store.scrambled_word().chars().collect();
        let mut actual: Vec<char> = store.current_word().chars().collect();
        shown.sort_unstable();
        actual.sort_unstable();
        assert_eq!(shown, actual);
    }

    #[test]
    fn next_word_completes_after_exactly_len_calls() {
        let (mut store, mut ctx) = started(&["one", "two", "three"], "Ada");
        store.next_word(&mut ctx);
        store.next_word(&mut ctx);
        assert_eq!(store.phase(), GamePhase::InProgress);
        store.next_word(&mut ctx);
        assert_eq!(store.phase(), GamePhase::Completed);
        assert_eq!(
            ctx.sounds,
            vec![Sound::Start, Sound::Yay, Sound::Yay, Sound::Tada]
        );
    }

    #[test]
    fn points_are_earned_for_the_word_being_entered() {
        let (mut store, mut ctx) = started(&["cat", "dog"], "Ada");

        store.check_order(&letters("cat"), &mut ctx);
        assert_eq!(store.user_points(), 3);
        assert_eq!(store.current_word(), "dog");

        store.check_order(&letters("dog"), &mut ctx);
        assert_eq!(store.user_points(), 53);
        assert_eq!(store.phase(), GamePhase::Completed);
    }

    #[test]
    fn mismatch_leaves_position_and_points_alone() {
        let (mut store, mut ctx) = started(&["cat", "dog"], "Ada");
        ctx.clear_frame_data();

        store.check_order(&letters("tac"), &mut ctx);

        assert_eq!(store.current_word(), "cat");
        assert_eq!(store.user_points(), 0);
        assert!(!store.message().is_empty());
        assert_eq!(ctx.sounds, vec![Sound::Negative]);
    }

    #[test]
    fn single_word_game_goes_straight_to_completion() {
        let (mut store, mut ctx) = started(&["go"], "Ada");
        assert_eq!(store.current_word(), "go");

        store.check_order(&letters("go"), &mut ctx);

        assert_eq!(store.phase(), GamePhase::Completed);
        assert_eq!(store.user_points(), COMPLETION_BONUS);
        assert_eq!(store.message(), MSG_COMPLETED);
        assert!(!ctx.confetti.is_empty());
        assert!(ctx.sounds.contains(&Sound::Tada));
    }

    #[test]
    fn completed_is_terminal_and_bonus_is_granted_once() {
        let (mut store, mut ctx) = started(&["go"], "Ada");
        store.next_word(&mut ctx);
        assert_eq!(store.user_points(), 50);

        store.end_game(&mut ctx);
        store.next_word(&mut ctx);
        store.check_order(&letters("go"), &mut ctx);

        assert_eq!(store.user_points(), 50);
        assert_eq!(store.phase(), GamePhase::Completed);
    }

    #[test]
    fn completion_event_reports_the_final_score() {
        let (mut store, mut ctx) = started(&["go"], "Ada");
        store.next_word(&mut ctx);
        let done = ctx
            .events
            .iter()
            .find(|e| e.kind == EVENT_COMPLETED)
            .expect("completion event");
        assert_eq!(done.a, 50.0);
    }

    #[test]
    fn transient_message_expires_after_ttl() {
        let mut store = SpellingStore::new();
        store.set_message("hello");

        store.tick(MESSAGE_TTL - 0.1);
        assert_eq!(store.message(), "hello");

        store.tick(0.2);
        assert_eq!(store.message(), "");
    }

    #[test]
    fn setting_a_message_rearms_the_timer() {
        let mut store = SpellingStore::new();
        store.set_message("first");
        store.tick(1.5);
        store.set_message("second");

        // The first message's deadline must not clear the second.
        store.tick(1.5);
        assert_eq!(store.message(), "second");

        store.tick(0.6);
        assert_eq!(store.message(), "");
    }

    #[test]
    fn completion_message_outlives_the_ttl() {
        let (mut store, mut ctx) = started(&["go"], "Ada");
        store.next_word(&mut ctx);

        store.tick(MESSAGE_TTL * 2.0);
        assert_eq!(store.message(), MSG_COMPLETED);
    }

    #[test]
    fn reset_clears_everything() {
        let (mut store, mut ctx) = started(&["cat", "dog"], "Ada");
        store.check_order(&letters("cat"), &mut ctx);

        store.reset_game();

        assert_eq!(store.phase(), GamePhase::NotStarted);
        assert!(store.words().is_empty());
        assert_eq!(store.user_name(), "");
        assert_eq!(store.user_points(), 0);
        assert_eq!(store.current_word(), "");
        assert_eq!(store.scrambled_word(), "");
        assert_eq!(store.message(), "");
    }

    #[test]
    fn reset_then_initialize_matches_a_fresh_store() {
        let (mut recycled, mut ctx) = started(&["cat", "dog"], "Ada");
        recycled.check_order(&letters("cat"), &mut ctx);
        recycled.reset_game();
        recycled.initialize_game(vec!["owl".into()], "Bo", &mut ctx);

        let (fresh, _) = started(&["owl"], "Bo");

        assert_eq!(recycled.current_word(), fresh.current_word());
        assert_eq!(recycled.user_points(), fresh.user_points());
        assert_eq!(recycled.phase(), fresh.phase());
    }

    #[test]
    fn check_order_before_start_is_ignored() {
        let mut store = SpellingStore::new();
        let mut ctx = GameContext::new();
        store.check_order(&letters("cat"), &mut ctx);
        assert_eq!(store.phase(), GamePhase::NotStarted);
        assert!(ctx.sounds.is_empty());
    }

    #[test]
    fn add_points_saturates() {
        let mut store = SpellingStore::new();
        store.add_points(u32::MAX);
        store.add_points(10);
        assert_eq!(store.user_points(), u32::MAX);
    }

    #[test]
    fn snapshot_restore_round_trips_progress() {
        let (mut store, mut ctx) = started(&["cat", "dog"], "Ada");
        store.check_order(&letters("cat"), &mut ctx);

        let json = store.snapshot().unwrap();
        let restored = SpellingStore::restore(&json).unwrap();

        assert_eq!(restored.current_word(), "dog");
        assert_eq!(restored.user_points(), 3);
        assert_eq!(restored.user_name(), "Ada");
        assert_eq!(restored.scrambled_word(), store.scrambled_word());
        assert_eq!(restored.phase(), GamePhase::InProgress);
        // Transient feedback does not survive the round trip.
        assert_eq!(restored.message(), "");
    }
}
