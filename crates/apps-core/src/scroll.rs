//! Time-integrated auto-scroll for the teleprompter display.
//!
//! The animator owns the logical (sub-pixel) scroll position and the play
//! state. It is driven from outside: the front-end calls [`ScrollAnimator::tick`]
//! once per animation frame and schedules another frame only while the
//! returned [`FrameRequest`] says so.

use crate::constants::{DEFAULT_SPEED, MAX_SPEED, MIN_SPEED, SPEED_TABLE};

/// The scrollable display the animator moves.
pub trait ScrollSurface {
    /// Offset currently applied to the display, in px.
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&mut self, px: f64);
    /// Content height minus viewport height, never negative.
    fn max_scroll(&self) -> f64;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
}

/// What the frame driver should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameRequest {
    Continue,
    Stop,
}

#[derive(Clone, Debug)]
pub struct ScrollAnimator {
    speed_table: [f64; 10],
    speed_level: u8,
    position_px: f64,
    last_frame_ms: Option<f64>,
    state: PlayState,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(SPEED_TABLE)
    }
}

impl ScrollAnimator {
    pub fn new(speed_table: [f64; 10]) -> Self {
        Self {
            speed_table,
            speed_level: DEFAULT_SPEED,
            position_px: 0.0,
            last_frame_ms: None,
            state: PlayState::Stopped,
        }
    }

    pub fn speed_level(&self) -> u8 {
        self.speed_level
    }

    pub fn pixels_per_second(&self) -> f64 {
        self.speed_table[(self.speed_level - MIN_SPEED) as usize]
    }

    pub fn position_px(&self) -> f64 {
        self.position_px
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlayState::Playing
    }

    /// Back to defaults: stopped, default speed, position 0.
    pub fn reset(&mut self) {
        self.speed_level = DEFAULT_SPEED;
        self.position_px = 0.0;
        self.last_frame_ms = None;
        self.state = PlayState::Stopped;
    }

    /// Step the speed level by `delta`, clamped to 1..=10. Returns the new level.
    pub fn set_speed(&mut self, delta: i32) -> u8 {
        let level = (self.speed_level as i32 + delta).clamp(MIN_SPEED as i32, MAX_SPEED as i32);
        self.speed_level = level as u8;
        log::debug!(
            "[prompter] speed level {} ({} px/s)",
            self.speed_level,
            self.pixels_per_second()
        );
        self.speed_level
    }

    /// Begin playing from wherever the display currently is.
    ///
    /// Refuses (returns false) when already at the end of the content.
    pub fn start(&mut self, surface: &impl ScrollSurface) -> bool {
        if self.is_playing() {
            return false;
        }
        self.position_px = surface.scroll_top();
        if self.position_px >= surface.max_scroll() {
            log::info!("[prompter] already at end, not starting");
            return false;
        }
        self.state = PlayState::Playing;
        self.last_frame_ms = None;
        log::info!("[prompter] scrolling started at {:.0}px", self.position_px);
        true
    }

    pub fn stop(&mut self, surface: &impl ScrollSurface) {
        if !self.is_playing() {
            return;
        }
        self.state = PlayState::Stopped;
        self.last_frame_ms = None;
        self.position_px = surface.scroll_top();
        log::info!("[prompter] scrolling stopped at {:.0}px", self.position_px);
    }

    /// Returns whether the animator is playing afterwards.
    pub fn toggle(&mut self, surface: &impl ScrollSurface) -> bool {
        if self.is_playing() {
            self.stop(surface);
        } else {
            self.start(surface);
        }
        self.is_playing()
    }

    /// Advance by the time elapsed since the previous frame.
    ///
    /// `now_ms` is an animation-frame timestamp in milliseconds. The first tick
    /// after a start only records the timestamp.
    pub fn tick(&mut self, now_ms: f64, surface: &mut impl ScrollSurface) -> FrameRequest {
        if !self.is_playing() {
            return FrameRequest::Stop;
        }
        let Some(last_ms) = self.last_frame_ms.replace(now_ms) else {
            return FrameRequest::Continue;
        };
        let delta_sec = ((now_ms - last_ms) / 1000.0).max(0.0);
        self.position_px += self.pixels_per_second() * delta_sec;

        let max_scroll = surface.max_scroll();
        if self.position_px >= max_scroll {
            self.position_px = max_scroll;
            surface.set_scroll_top(max_scroll);
            log::info!("[prompter] reached end of script");
            self.stop(surface);
            return FrameRequest::Stop;
        }
        surface.set_scroll_top(self.position_px.floor());
        FrameRequest::Continue
    }

    /// Jump by `amount_px` (negative scrolls back), clamped to the content.
    /// Leaves the play state alone.
    pub fn manual_scroll(&mut self, amount_px: f64, surface: &mut impl ScrollSurface) {
        if self.is_playing() {
            self.position_px = surface.scroll_top();
        }
        let max_scroll = surface.max_scroll().max(0.0);
        self.position_px = (self.position_px + amount_px).clamp(0.0, max_scroll);
        surface.set_scroll_top(self.position_px);
    }
}
