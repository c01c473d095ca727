// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use apps_core::{
    DEFAULT_DISTANCE_M, DEFAULT_FONT_SIZE, DEFAULT_SPEED, DISTANCE_ITEM_HEIGHT_PX,
    DISTANCE_STEP_M, FONT_SIZE_STEP, MAX_DISTANCE_M, MAX_FONT_SIZE, MAX_SPEED, MIN_DISTANCE_M,
    MIN_FONT_SIZE, MIN_SPEED, SIMULATED_ACCURACY_M, SIMULATED_LATITUDE, SIMULATED_LONGITUDE,
    SPEED_TABLE,
};
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn speed_table_is_strictly_increasing() {
    assert_eq!(SPEED_TABLE.len(), (MAX_SPEED - MIN_SPEED + 1) as usize);
    assert!(SPEED_TABLE.windows(2).all(|w| w[0] < w[1]));
    assert!((MIN_SPEED..=MAX_SPEED).contains(&DEFAULT_SPEED));
    assert_eq!(SPEED_TABLE[(DEFAULT_SPEED - MIN_SPEED) as usize], 55.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn font_range_is_reachable_in_steps() {
    assert!(MIN_FONT_SIZE < DEFAULT_FONT_SIZE && DEFAULT_FONT_SIZE < MAX_FONT_SIZE);
    assert_eq!((DEFAULT_FONT_SIZE - MIN_FONT_SIZE) % FONT_SIZE_STEP, 0);
    assert_eq!((MAX_FONT_SIZE - DEFAULT_FONT_SIZE) % FONT_SIZE_STEP, 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn distance_default_is_a_wheel_value() {
    assert_eq!((DEFAULT_DISTANCE_M - MIN_DISTANCE_M) % DISTANCE_STEP_M, 0);
    assert_eq!((MAX_DISTANCE_M - MIN_DISTANCE_M) % DISTANCE_STEP_M, 0);
    assert!(DISTANCE_ITEM_HEIGHT_PX > 0.0);
}

#[test]
fn simulated_fix_is_a_valid_coordinate() {
    assert!((-90.0..=90.0).contains(&SIMULATED_LATITUDE));
    assert!((-180.0..=180.0).contains(&SIMULATED_LONGITUDE));
    assert!(SIMULATED_ACCURACY_M > 0.0);
}

#[test]
fn page_ids_are_unique() {
    let ids = [
        ID_EDIT_MODE,
        ID_PLAY_MODE,
        ID_TEXT_INPUT,
        ID_LOAD_BUTTON,
        ID_SAVE_BUTTON,
        ID_START_BUTTON,
        ID_PROMPTER_DISPLAY,
        ID_CONTROLS_PANEL,
        ID_EDIT_BUTTON,
        ID_SPEED_DOWN,
        ID_SPEED_DISPLAY,
        ID_SPEED_UP,
        ID_PLAY_PAUSE,
        ID_PLAY_PAUSE_ICON,
        ID_FONT_DOWN,
        ID_FONT_DISPLAY,
        ID_FONT_UP,
        ID_FULLSCREEN_BUTTON,
        ID_FULLSCREEN_ICON,
        ID_COMPASS_ROSE,
        ID_CURRENT_DIRECTION,
        ID_SPINNER_WHEEL,
        ID_SPINNER_CONTAINER,
        ID_SELECTED_DISTANCE,
        ID_MARK_BUTTON,
        ID_RESET_BUTTON,
        ID_RESULT_CONTAINER,
        ID_CURRENT_LOCATION,
        ID_RESULT_DIRECTION,
        ID_RESULT_DISTANCE,
        ID_TARGET_LOCATION,
        ID_STATUS_MESSAGE,
        ID_HUNTER_FULLSCREEN,
    ];
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}
