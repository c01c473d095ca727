//! Teleprompter session: edit/play mode, font size and the scroll animator.

use crate::constants::*;
use crate::error::{PrompterError, StoreError};
use crate::scroll::{FrameRequest, ScrollAnimator, ScrollSurface};
use std::collections::HashMap;

pub const SCRIPT_KEY: &str = "teleprompterText";

#[derive(Clone, Debug, PartialEq)]
pub struct PrompterParams {
    pub speed_table: [f64; 10],
    pub default_font_px: u32,
    pub min_font_px: u32,
    pub max_font_px: u32,
    pub font_step_px: u32,
    pub manual_scroll_px: f64,
}

impl Default for PrompterParams {
    fn default() -> Self {
        Self {
            speed_table: SPEED_TABLE,
            default_font_px: DEFAULT_FONT_SIZE,
            min_font_px: MIN_FONT_SIZE,
            max_font_px: MAX_FONT_SIZE,
            font_step_px: FONT_SIZE_STEP,
            manual_scroll_px: MANUAL_SCROLL_AMOUNT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    Play,
}

/// Key-value persistence for the script text. Last write wins.
pub trait ScriptStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store, used on the host and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl ScriptStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Teleprompter {
    pub params: PrompterParams,
    animator: ScrollAnimator,
    mode: Mode,
    font_px: u32,
    panel_visible: bool,
}

impl Default for Teleprompter {
    fn default() -> Self {
        Self::new(PrompterParams::default())
    }
}

impl Teleprompter {
    pub fn new(params: PrompterParams) -> Self {
        Self {
            animator: ScrollAnimator::new(params.speed_table),
            font_px: params.default_font_px,
            params,
            mode: Mode::Edit,
            panel_visible: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn font_px(&self) -> u32 {
        self.font_px
    }

    pub fn panel_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn speed_level(&self) -> u8 {
        self.animator.speed_level()
    }

    pub fn is_playing(&self) -> bool {
        self.animator.is_playing()
    }

    /// Switch to play mode with a fresh speed, font and scroll position.
    ///
    /// Whitespace-only text is rejected and the mode stays as it was.
    pub fn enter_play(
        &mut self,
        text: &str,
        surface: &mut impl ScrollSurface,
    ) -> Result<(), PrompterError> {
        if text.trim().is_empty() {
            return Err(PrompterError::EmptyScript);
        }
        self.animator.stop(surface);
        self.animator.reset();
        self.font_px = self.params.default_font_px;
        self.panel_visible = true;
        surface.set_scroll_top(0.0);
        self.mode = Mode::Play;
        log::info!("[prompter] play mode ({} chars)", text.len());
        Ok(())
    }

    pub fn leave_play(&mut self, surface: &impl ScrollSurface) {
        self.animator.stop(surface);
        self.mode = Mode::Edit;
        log::info!("[prompter] edit mode");
    }

    /// Play/pause. Does nothing outside play mode. Returns whether playing.
    pub fn toggle_play(&mut self, surface: &impl ScrollSurface) -> bool {
        if self.mode == Mode::Play {
            self.animator.toggle(surface);
        }
        self.animator.is_playing()
    }

    /// Stop scrolling without leaving play mode (e.g. the page was hidden).
    pub fn pause(&mut self, surface: &impl ScrollSurface) {
        self.animator.stop(surface);
    }

    pub fn tick(&mut self, now_ms: f64, surface: &mut impl ScrollSurface) -> FrameRequest {
        self.animator.tick(now_ms, surface)
    }

    pub fn change_speed(&mut self, delta: i32) -> u8 {
        self.animator.set_speed(delta)
    }

    /// Step the font size by `delta_px`, clamped to the configured range.
    pub fn change_font(&mut self, delta_px: i32) -> u32 {
        let size = (self.font_px as i64 + delta_px as i64).clamp(
            self.params.min_font_px as i64,
            self.params.max_font_px as i64,
        );
        self.font_px = size as u32;
        log::debug!("[prompter] font size {}px", self.font_px);
        self.font_px
    }

    pub fn font_up(&mut self) -> u32 {
        self.change_font(self.params.font_step_px as i32)
    }

    pub fn font_down(&mut self) -> u32 {
        self.change_font(-(self.params.font_step_px as i32))
    }

    /// Arrow-key jump; `forward` scrolls towards the end.
    pub fn jump(&mut self, forward: bool, surface: &mut impl ScrollSurface) {
        let amount = if forward {
            self.params.manual_scroll_px
        } else {
            -self.params.manual_scroll_px
        };
        self.manual_scroll(amount, surface);
    }

    pub fn manual_scroll(&mut self, amount_px: f64, surface: &mut impl ScrollSurface) {
        self.animator.manual_scroll(amount_px, surface);
    }

    pub fn toggle_panel(&mut self) -> bool {
        self.panel_visible = !self.panel_visible;
        self.panel_visible
    }

    pub fn save(&self, store: &mut impl ScriptStore, text: &str) -> Result<(), StoreError> {
        store.save(SCRIPT_KEY, text)?;
        log::info!("[storage] script saved");
        Ok(())
    }

    pub fn load(&self, store: &impl ScriptStore) -> Result<Option<String>, StoreError> {
        let text = store.load(SCRIPT_KEY)?;
        match &text {
            Some(_) => log::info!("[storage] script loaded"),
            None => log::info!("[storage] no saved script"),
        }
        Ok(text)
    }
}
