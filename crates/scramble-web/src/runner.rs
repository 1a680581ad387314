use scramble_core::{
    parse_words, FixedTimestep, GameConfig, GameContext, GameEvent, PointsCounter, Sound,
    SpellingStore,
};

/// Drives one game session.
///
/// Owns the store and its collaborators, advances them at a fixed timestep,
/// and packs the flat buffers the JS side reads by pointer after each tick.
/// UI actions call in synchronously between frames; their side effects are
/// picked up by the next tick's packing pass.
pub struct SessionRunner {
    store: SpellingStore,
    ctx: GameContext,
    counter: PointsCounter,
    timestep: FixedTimestep,
    config: GameConfig,
    seed: u64,
    /// Sound ids packed for the JS SoundManager, rebuilt each tick.
    sound_buffer: Vec<u8>,
    /// Game events packed as flat f32s, rebuilt each tick.
    event_buffer: Vec<f32>,
}

impl SessionRunner {
    pub fn new(seed: u64) -> Self {
        let config = GameConfig::default();
        Self {
            store: SpellingStore::with_seed(seed),
            ctx: GameContext::with_seed(seed, &config),
            counter: PointsCounter::new(),
            timestep: FixedTimestep::new(config.fixed_dt),
            seed,
            sound_buffer: Vec::with_capacity(config.max_sounds),
            event_buffer: Vec::with_capacity(config.max_events * GameEvent::FLOATS),
            config,
        }
    }

    /// Run one browser frame: advance fixed steps, then pack buffers and
    /// drop the frame queues.
    pub fn tick(&mut self, dt: f32) {
        let steps = self.timestep.accumulate(dt);
        let step_dt = self.timestep.dt();
        for _ in 0..steps {
            self.store.tick(step_dt);
            self.ctx.tick(step_dt);
            self.counter.tick(step_dt);
        }

        // Chase the real score whenever it moved.
        if self.counter.target() != self.store.user_points() {
            self.counter.animate_to(self.store.user_points());
        }

        self.ctx.confetti.rebuild_vertex_buffer();

        self.sound_buffer.clear();
        for sound in self.ctx.sounds.iter().take(self.config.max_sounds) {
            self.sound_buffer.push(sound.id() as u8);
        }

        self.event_buffer.clear();
        for event in self.ctx.events.iter().take(self.config.max_events) {
            self.event_buffer
                .extend_from_slice(&[event.kind, event.a, event.b, event.c]);
        }

        self.ctx.clear_frame_data();
    }

    // ---- Actions (called synchronously from JS event handlers) ----

    /// Start a game from a JSON word list. Malformed input is logged and
    /// ignored; the store is not touched.
    pub fn initialize_game(&mut self, words_json: &str, name: &str) {
        match parse_words(words_json) {
            Ok(words) => self.store.initialize_game(words, name, &mut self.ctx),
            Err(err) => log::warn!("ignoring malformed word list: {err}"),
        }
    }

    /// Submit the player's letter order as a JSON array of strings.
    pub fn check_order(&mut self, letters_json: &str) {
        match parse_words(letters_json) {
            Ok(letters) => self.store.check_order(&letters, &mut self.ctx),
            Err(err) => log::warn!("ignoring malformed letter list: {err}"),
        }
    }

    pub fn reset(&mut self) {
        self.store.reset_game();
        self.counter.set(0);
        self.ctx.confetti.clear();
        self.timestep.reset();
    }

    /// UI button feedback.
    pub fn click(&mut self) {
        self.ctx.emit_sound(Sound::Click);
    }

    // ---- Persistence pass-through ----

    pub fn snapshot(&self) -> String {
        match self.store.snapshot() {
            Ok(json) => json,
            Err(err) => {
                log::warn!("snapshot failed: {err}");
                String::new()
            }
        }
    }

    pub fn restore(&mut self, json: &str) {
        match SpellingStore::restore(json) {
            Ok(mut store) => {
                store.reseed(self.seed);
                self.counter.set(store.user_points());
                self.store = store;
            }
            Err(err) => log::warn!("ignoring malformed snapshot: {err}"),
        }
    }

    // ---- State accessors ----

    pub fn current_word(&self) -> &str {
        self.store.current_word()
    }

    pub fn scrambled_word(&self) -> &str {
        self.store.scrambled_word()
    }

    pub fn message(&self) -> &str {
        self.store.message()
    }

    pub fn user_name(&self) -> &str {
        self.store.user_name()
    }

    pub fn points(&self) -> u32 {
        self.store.user_points()
    }

    /// The tweened score shown to the player.
    pub fn points_display(&self) -> u32 {
        self.counter.value()
    }

    pub fn game_started(&self) -> bool {
        self.store.game_started()
    }

    pub fn game_completed(&self) -> bool {
        self.store.game_completed()
    }

    // ---- Buffer accessors for JS reads ----

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr()
    }

    pub fn game_events_len(&self) -> u32 {
        (self.event_buffer.len() / GameEvent::FLOATS) as u32
    }

    pub fn confetti_ptr(&self) -> *const f32 {
        self.ctx.confetti.buffer_ptr()
    }

    pub fn confetti_vertex_count(&self) -> u32 {
        self.ctx.confetti.vertex_count() as u32
    }
}
