use std::cell::RefCell;

use wasm_bindgen::prelude::*;

pub mod runner;

pub use runner::SessionRunner;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let seed = js_sys::Date::now() as u64;
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(SessionRunner::new(seed));
    });

    log::info!("letter-scramble: initialized");
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Actions ----

#[wasm_bindgen]
pub fn game_initialize(words_json: &str, name: &str) {
    with_runner(|r| r.initialize_game(words_json, name));
}

#[wasm_bindgen]
pub fn game_check_order(letters_json: &str) {
    with_runner(|r| r.check_order(letters_json));
}

#[wasm_bindgen]
pub fn game_reset() {
    with_runner(|r| r.reset());
}

#[wasm_bindgen]
pub fn game_click() {
    with_runner(|r| r.click());
}

// ---- Persistence ----

#[wasm_bindgen]
pub fn game_snapshot() -> String {
    with_runner(|r| r.snapshot())
}

#[wasm_bindgen]
pub fn game_restore(json: &str) {
    with_runner(|r| r.restore(json));
}

// ---- State accessors ----

#[wasm_bindgen]
pub fn game_current_word() -> String {
    with_runner(|r| r.current_word().to_string())
}

#[wasm_bindgen]
pub fn game_scrambled_word() -> String {
    with_runner(|r| r.scrambled_word().to_string())
}

#[wasm_bindgen]
pub fn game_message() -> String {
    with_runner(|r| r.message().to_string())
}

#[wasm_bindgen]
pub fn game_user_name() -> String {
    with_runner(|r| r.user_name().to_string())
}

#[wasm_bindgen]
pub fn game_points() -> u32 {
    with_runner(|r| r.points())
}

#[wasm_bindgen]
pub fn game_points_display() -> u32 {
    with_runner(|r| r.points_display())
}

#[wasm_bindgen]
pub fn game_started() -> bool {
    with_runner(|r| r.game_started())
}

#[wasm_bindgen]
pub fn game_completed() -> bool {
    with_runner(|r| r.game_completed())
}

// ---- Buffer accessors ----

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len())
}

#[wasm_bindgen]
pub fn get_game_events_ptr() -> *const f32 {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> u32 {
    with_runner(|r| r.game_events_len())
}

#[wasm_bindgen]
pub fn get_confetti_ptr() -> *const f32 {
    with_runner(|r| r.confetti_ptr())
}

#[wasm_bindgen]
pub fn get_confetti_vertex_count() -> u32 {
    with_runner(|r| r.confetti_vertex_count())
}
