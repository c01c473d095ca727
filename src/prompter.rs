//! Teleprompter page: binds the DOM to an `apps_core::Teleprompter`.

use crate::constants::*;
use crate::dom;
use crate::frame::FrameLoop;
use crate::fullscreen;
use crate::keymap::{prompter_key, PrompterKey};
use crate::messages;
use crate::storage::LocalStore;
use apps_core::{FrameRequest, Mode, ScrollSurface, Teleprompter};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The scrolling text element.
#[derive(Clone)]
pub struct PrompterDisplay {
    el: web::HtmlElement,
}

impl ScrollSurface for PrompterDisplay {
    fn scroll_top(&self) -> f64 {
        self.el.scroll_top() as f64
    }

    fn set_scroll_top(&mut self, px: f64) {
        self.el.set_scroll_top(px as i32);
    }

    fn max_scroll(&self) -> f64 {
        (self.el.scroll_height() - self.el.client_height()).max(0) as f64
    }
}

struct PrompterUi {
    document: web::Document,
    body: Option<web::HtmlElement>,
    main: Option<web::Element>,
    edit_mode: web::HtmlElement,
    play_mode: web::HtmlElement,
    text_input: web::HtmlTextAreaElement,
    display: PrompterDisplay,
    controls_panel: web::HtmlElement,
    speed_display: web::HtmlElement,
    font_display: web::HtmlElement,
    play_pause_icon: web::HtmlElement,
    fullscreen_icon: web::HtmlElement,
    save_button: web::HtmlButtonElement,
}

impl PrompterUi {
    fn find(document: &web::Document) -> anyhow::Result<Self> {
        Ok(Self {
            document: document.clone(),
            body: document.body(),
            main: document.query_selector("main").ok().flatten(),
            edit_mode: dom::html_element(document, ID_EDIT_MODE)?,
            play_mode: dom::html_element(document, ID_PLAY_MODE)?,
            text_input: dom::typed_element(document, ID_TEXT_INPUT)?,
            display: PrompterDisplay {
                el: dom::html_element(document, ID_PROMPTER_DISPLAY)?,
            },
            controls_panel: dom::html_element(document, ID_CONTROLS_PANEL)?,
            speed_display: dom::html_element(document, ID_SPEED_DISPLAY)?,
            font_display: dom::html_element(document, ID_FONT_DISPLAY)?,
            play_pause_icon: dom::html_element(document, ID_PLAY_PAUSE_ICON)?,
            fullscreen_icon: dom::html_element(document, ID_FULLSCREEN_ICON)?,
            save_button: dom::typed_element(document, ID_SAVE_BUTTON)?,
        })
    }

    fn fullscreen_target(&self) -> web::Element {
        self.main
            .clone()
            .unwrap_or_else(|| self.display.el.clone().into())
    }

    fn set_play_active(&self, on: bool) {
        if let Some(body) = &self.body {
            dom::set_class(body, CLASS_PLAY_ACTIVE, on);
        }
        if let Some(main) = &self.main {
            dom::set_class(main, CLASS_PLAY_ACTIVE, on);
        }
    }

    fn show_playing(&self, playing: bool) {
        if playing {
            dom::swap_class(&self.play_pause_icon, CLASS_ICON_PLAY, CLASS_ICON_PAUSE);
        } else {
            dom::swap_class(&self.play_pause_icon, CLASS_ICON_PAUSE, CLASS_ICON_PLAY);
        }
    }

    fn show_fullscreen(&self, active: bool) {
        if active {
            dom::swap_class(&self.fullscreen_icon, CLASS_ICON_EXPAND, CLASS_ICON_COMPRESS);
        } else {
            dom::swap_class(&self.fullscreen_icon, CLASS_ICON_COMPRESS, CLASS_ICON_EXPAND);
        }
    }

    fn show_panel(&self, visible: bool) {
        dom::set_class(&self.controls_panel, CLASS_CONTROLS_HIDDEN, !visible);
    }

    fn show_speed(&self, level: u8) {
        dom::set_text(&self.speed_display, &level.to_string());
    }

    fn show_font(&self, font_px: u32) {
        let text = messages::font_text(font_px);
        dom::set_style(&self.display.el, "font-size", &text);
        dom::set_text(&self.font_display, &text);
    }
}

pub struct PrompterPage {
    session: RefCell<Teleprompter>,
    store: RefCell<LocalStore>,
    ui: PrompterUi,
    frames: FrameLoop,
}

impl PrompterPage {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Rc<Self>> {
        let ui = PrompterUi::find(document)?;
        let store = LocalStore::open(window);

        let page = Rc::new_cyclic(|weak: &std::rc::Weak<PrompterPage>| {
            let weak = weak.clone();
            let frames = FrameLoop::new(move |timestamp_ms| match weak.upgrade() {
                Some(page) => page.on_frame(timestamp_ms),
                None => FrameRequest::Stop,
            });
            PrompterPage {
                session: RefCell::new(Teleprompter::default()),
                store: RefCell::new(store),
                ui,
                frames,
            }
        });

        dom::set_style(&page.ui.display.el, "white-space", "pre-wrap");
        dom::set_class(&page.ui.play_mode, CLASS_HIDDEN, true);
        dom::set_class(&page.ui.edit_mode, CLASS_HIDDEN, false);
        page.load();
        page.wire_buttons();
        crate::events::wire_prompter_keydown(page.clone());
        page.wire_fullscreen_change();
        page.wire_visibility_change();
        log::info!("[prompter] mounted");
        Ok(page)
    }

    fn wire_buttons(self: &Rc<Self>) {
        let doc = &self.ui.document;
        let bind = |id: &str, action: fn(&PrompterPage)| {
            let page = self.clone();
            dom::add_click_listener(doc, id, move || action(&page));
        };
        bind(ID_START_BUTTON, PrompterPage::show_play);
        bind(ID_EDIT_BUTTON, PrompterPage::show_edit);
        bind(ID_SAVE_BUTTON, PrompterPage::save);
        bind(ID_LOAD_BUTTON, PrompterPage::load);
        bind(ID_PLAY_PAUSE, PrompterPage::toggle_play);
        bind(ID_SPEED_UP, |p| p.change_speed(1));
        bind(ID_SPEED_DOWN, |p| p.change_speed(-1));
        bind(ID_FONT_UP, PrompterPage::font_up);
        bind(ID_FONT_DOWN, PrompterPage::font_down);
        bind(ID_FULLSCREEN_BUTTON, PrompterPage::toggle_fullscreen);
        bind(ID_PROMPTER_DISPLAY, PrompterPage::toggle_panel);
    }

    fn wire_fullscreen_change(self: &Rc<Self>) {
        let page = self.clone();
        dom::listen(&self.ui.document, "fullscreenchange", move |_: web::Event| {
            page.ui.show_fullscreen(fullscreen::is_active(&page.ui.document));
        });
    }

    /// A hidden page gets no frames; pause so the hidden time is not
    /// integrated on return.
    fn wire_visibility_change(self: &Rc<Self>) {
        let page = self.clone();
        dom::listen(&self.ui.document, "visibilitychange", move |_: web::Event| {
            if page.ui.document.hidden() && page.session.borrow().is_playing() {
                log::info!("[prompter] page hidden, pausing");
                page.pause();
            }
        });
    }

    pub fn pause(&self) {
        self.frames.cancel();
        self.session.borrow_mut().pause(&self.ui.display);
        self.ui.show_playing(false);
    }

    fn on_frame(&self, timestamp_ms: f64) -> FrameRequest {
        let mut display = self.ui.display.clone();
        let request = self.session.borrow_mut().tick(timestamp_ms, &mut display);
        if request == FrameRequest::Stop {
            self.ui.show_playing(false);
        }
        request
    }

    pub fn show_play(&self) {
        let text = self.ui.text_input.value();
        let mut display = self.ui.display.clone();
        let mut session = self.session.borrow_mut();
        if let Err(e) = session.enter_play(&text, &mut display) {
            drop(session);
            log::info!("[prompter] not entering play mode: {e}");
            if let Some(w) = web::window() {
                _ = w.alert_with_message(messages::EMPTY_SCRIPT_ALERT);
            }
            return;
        }
        self.frames.cancel();
        self.ui.display.el.set_text_content(Some(&text));
        display.set_scroll_top(0.0);
        self.ui.show_speed(session.speed_level());
        self.ui.show_font(session.font_px());
        self.ui.show_panel(session.panel_visible());
        drop(session);

        self.ui.show_playing(false);
        self.ui.show_fullscreen(false);
        dom::set_class(&self.ui.edit_mode, CLASS_HIDDEN, true);
        dom::set_class(&self.ui.play_mode, CLASS_HIDDEN, false);
        self.ui.set_play_active(true);
    }

    pub fn show_edit(&self) {
        self.frames.cancel();
        self.session.borrow_mut().leave_play(&self.ui.display);
        self.ui.show_playing(false);
        fullscreen::exit(&self.ui.document);
        dom::set_class(&self.ui.play_mode, CLASS_HIDDEN, true);
        dom::set_class(&self.ui.controls_panel, CLASS_CONTROLS_HIDDEN, true);
        dom::set_class(&self.ui.edit_mode, CLASS_HIDDEN, false);
        self.ui.set_play_active(false);
    }

    pub fn toggle_play(&self) {
        let playing = self.session.borrow_mut().toggle_play(&self.ui.display);
        if playing {
            self.frames.start();
        } else {
            self.frames.cancel();
        }
        self.ui.show_playing(playing);
    }

    pub fn change_speed(&self, delta: i32) {
        let level = self.session.borrow_mut().change_speed(delta);
        self.ui.show_speed(level);
    }

    pub fn font_up(&self) {
        let size = self.session.borrow_mut().font_up();
        self.ui.show_font(size);
    }

    pub fn font_down(&self) {
        let size = self.session.borrow_mut().font_down();
        self.ui.show_font(size);
    }

    pub fn jump(&self, forward: bool) {
        let mut display = self.ui.display.clone();
        self.session.borrow_mut().jump(forward, &mut display);
    }

    pub fn toggle_panel(&self) {
        let visible = self.session.borrow_mut().toggle_panel();
        self.ui.show_panel(visible);
    }

    pub fn toggle_fullscreen(&self) {
        let target = self.ui.fullscreen_target();
        let entering = fullscreen::toggle(&self.ui.document, &target);
        self.ui.show_fullscreen(entering);
    }

    pub fn save(&self) {
        let text = self.ui.text_input.value();
        let result = self
            .session
            .borrow()
            .save(&mut *self.store.borrow_mut(), &text);
        let label = match result {
            Ok(()) => messages::SAVED_LABEL,
            Err(e) => {
                log::error!("[storage] {e}");
                messages::SAVE_FAILED_LABEL
            }
        };
        let button = self.ui.save_button.clone();
        dom::set_text(&button, label);
        button.set_disabled(true);
        if let Some(w) = web::window() {
            dom::set_timeout(&w, SAVE_CONFIRM_MS, move || {
                button.set_inner_html(messages::SAVE_LABEL);
                button.set_disabled(false);
            });
        }
    }

    pub fn load(&self) {
        match self.session.borrow().load(&*self.store.borrow()) {
            Ok(Some(text)) => self.ui.text_input.set_value(&text),
            Ok(None) => {}
            Err(e) => log::warn!("[storage] {e}"),
        }
    }

    /// Play-mode shortcuts. Returns true when the key was handled.
    pub fn handle_key(&self, key: &str) -> bool {
        if self.session.borrow().mode() != Mode::Play {
            return false;
        }
        let Some(command) = prompter_key(key) else {
            return false;
        };
        match command {
            PrompterKey::TogglePlay => self.toggle_play(),
            PrompterKey::SpeedUp => self.change_speed(1),
            PrompterKey::SpeedDown => self.change_speed(-1),
            PrompterKey::JumpForward => self.jump(true),
            PrompterKey::JumpBack => self.jump(false),
            PrompterKey::ToggleFullscreen => self.toggle_fullscreen(),
            PrompterKey::Escape => {
                if fullscreen::is_active(&self.ui.document) {
                    fullscreen::exit(&self.ui.document);
                    self.ui.show_fullscreen(false);
                } else {
                    self.show_edit();
                }
            }
        }
        log::debug!("[keys] {:?}", command);
        true
    }
}
