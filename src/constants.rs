// Page wiring constants: element ids, CSS classes and timings.
// Ids and classes must match the HTML/CSS shipped with each page.

// ---------------- Teleprompter ----------------
pub const ID_EDIT_MODE: &str = "edit-mode";
pub const ID_PLAY_MODE: &str = "play-mode";
pub const ID_TEXT_INPUT: &str = "text-input";
pub const ID_LOAD_BUTTON: &str = "load-button";
pub const ID_SAVE_BUTTON: &str = "save-button";
pub const ID_START_BUTTON: &str = "start-button";
pub const ID_PROMPTER_DISPLAY: &str = "prompter-display";
pub const ID_CONTROLS_PANEL: &str = "controls-panel";
pub const ID_EDIT_BUTTON: &str = "edit-button";
pub const ID_SPEED_DOWN: &str = "speed-down-button";
pub const ID_SPEED_DISPLAY: &str = "speed-display";
pub const ID_SPEED_UP: &str = "speed-up-button";
pub const ID_PLAY_PAUSE: &str = "play-pause-button";
pub const ID_PLAY_PAUSE_ICON: &str = "play-pause-icon";
pub const ID_FONT_DOWN: &str = "font-down-button";
pub const ID_FONT_DISPLAY: &str = "font-display";
pub const ID_FONT_UP: &str = "font-up-button";
pub const ID_FULLSCREEN_BUTTON: &str = "fullscreen-button";
pub const ID_FULLSCREEN_ICON: &str = "fullscreen-icon";

pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_CONTROLS_HIDDEN: &str = "controls-hidden";
pub const CLASS_PLAY_ACTIVE: &str = "play-active";
pub const CLASS_ICON_PLAY: &str = "ph-play";
pub const CLASS_ICON_PAUSE: &str = "ph-pause";
pub const CLASS_ICON_EXPAND: &str = "ph-arrows-out";
pub const CLASS_ICON_COMPRESS: &str = "ph-arrows-in";

// Save button shows its confirmation for this long
pub const SAVE_CONFIRM_MS: i32 = 1_500;

// ---------------- Hunter ----------------
pub const SELECTOR_COMPASS: &str = ".compass";
pub const ID_COMPASS_ROSE: &str = "compassRose";
pub const ID_CURRENT_DIRECTION: &str = "currentDirection";
pub const ID_SPINNER_WHEEL: &str = "spinnerWheel";
pub const ID_SPINNER_CONTAINER: &str = "spinnerContainer";
pub const ID_SELECTED_DISTANCE: &str = "selectedDistance";
pub const ID_MARK_BUTTON: &str = "markButton";
pub const ID_RESET_BUTTON: &str = "resetButton";
pub const ID_RESULT_CONTAINER: &str = "resultContainer";
pub const ID_CURRENT_LOCATION: &str = "currentLocation";
pub const ID_RESULT_DIRECTION: &str = "resultDirection";
pub const ID_RESULT_DISTANCE: &str = "resultDistance";
pub const ID_TARGET_LOCATION: &str = "targetLocation";
pub const ID_STATUS_MESSAGE: &str = "statusMessage";
pub const ID_HUNTER_FULLSCREEN: &str = "fullscreenButton";

pub const CLASS_SPINNER_ITEM: &str = "spinner-item";

// Fullscreen toggle glyphs on the hunter page
pub const GLYPH_ENTER_FULLSCREEN: &str = "⛶";
pub const GLYPH_EXIT_FULLSCREEN: &str = "⮽";
