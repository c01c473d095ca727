// Shared tuning constants for the teleprompter and hunter tools.

// Teleprompter speed levels
pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 10;
pub const DEFAULT_SPEED: u8 = 5;

// Pixels per second for speed levels 1..=10 (index 0 is level 1).
// Non-linear: fine steps at the slow end, large jumps at the fast end.
pub const SPEED_TABLE: [f64; 10] = [
    5.0, 10.0, 20.0, 35.0, 55.0, 85.0, 130.0, 190.0, 270.0, 400.0,
];

// Teleprompter font sizes (px)
pub const DEFAULT_FONT_SIZE: u32 = 24;
pub const MIN_FONT_SIZE: u32 = 12;
pub const MAX_FONT_SIZE: u32 = 72;
pub const FONT_SIZE_STEP: u32 = 2;

// Arrow-key jump (px)
pub const MANUAL_SCROLL_AMOUNT: f64 = 100.0;

// Mean Earth radius (m) for the spherical model
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// Distance wheel (m)
pub const MIN_DISTANCE_M: u32 = 5;
pub const MAX_DISTANCE_M: u32 = 500;
pub const DISTANCE_STEP_M: u32 = 5;
pub const DEFAULT_DISTANCE_M: u32 = 100;
pub const DISTANCE_ITEM_HEIGHT_PX: f64 = 40.0; // must match the wheel's CSS row height

// Fallback position used when no live fix is available (centre of Germany)
pub const SIMULATED_LATITUDE: f64 = 51.165691;
pub const SIMULATED_LONGITUDE: f64 = 10.451526;
pub const SIMULATED_ACCURACY_M: f64 = 10.0;

// Position watch
pub const FIX_TIMEOUT_MS: u32 = 5_000;
