//! Treasure hunter page: compass, distance wheel, mark/reset.

use crate::constants::*;
use crate::dom;
use crate::fullscreen;
use crate::messages;
use crate::sensors;
use apps_core::{
    DistanceSelector, HeadingState, Hunter, MarkControl, MarkedTarget, OrientationSupport,
    PositionState,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub(crate) struct HunterUi {
    pub document: web::Document,
    pub compass: web::HtmlElement,
    pub compass_rose: web::HtmlElement,
    pub current_direction: web::HtmlElement,
    pub spinner_wheel: web::HtmlElement,
    pub spinner_container: web::HtmlElement,
    pub selected_distance: web::HtmlElement,
    pub mark_button: web::HtmlButtonElement,
    pub result_container: web::HtmlElement,
    pub current_location: web::HtmlElement,
    pub result_direction: web::HtmlElement,
    pub result_distance: web::HtmlElement,
    pub target_location: web::HtmlElement,
    pub status_message: web::HtmlElement,
    pub fullscreen_button: web::HtmlElement,
}

impl HunterUi {
    fn find(document: &web::Document) -> anyhow::Result<Self> {
        use wasm_bindgen::JsCast;
        let compass = document
            .query_selector(SELECTOR_COMPASS)
            .map_err(dom::js_err)?
            .ok_or_else(|| anyhow::anyhow!("missing {SELECTOR_COMPASS}"))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|_| anyhow::anyhow!("{SELECTOR_COMPASS} is not an HtmlElement"))?;
        Ok(Self {
            document: document.clone(),
            compass,
            compass_rose: dom::html_element(document, ID_COMPASS_ROSE)?,
            current_direction: dom::html_element(document, ID_CURRENT_DIRECTION)?,
            spinner_wheel: dom::html_element(document, ID_SPINNER_WHEEL)?,
            spinner_container: dom::html_element(document, ID_SPINNER_CONTAINER)?,
            selected_distance: dom::html_element(document, ID_SELECTED_DISTANCE)?,
            mark_button: dom::typed_element(document, ID_MARK_BUTTON)?,
            result_container: dom::html_element(document, ID_RESULT_CONTAINER)?,
            current_location: dom::html_element(document, ID_CURRENT_LOCATION)?,
            result_direction: dom::html_element(document, ID_RESULT_DIRECTION)?,
            result_distance: dom::html_element(document, ID_RESULT_DISTANCE)?,
            target_location: dom::html_element(document, ID_TARGET_LOCATION)?,
            status_message: dom::html_element(document, ID_STATUS_MESSAGE)?,
            fullscreen_button: dom::html_element(document, ID_HUNTER_FULLSCREEN)?,
        })
    }

    fn build_spinner_items(&self) -> anyhow::Result<()> {
        self.spinner_wheel.set_inner_html("");
        for value in DistanceSelector::options() {
            let item = self.document.create_element("div").map_err(dom::js_err)?;
            item.set_class_name(CLASS_SPINNER_ITEM);
            item.set_text_content(Some(&value.to_string()));
            _ = item.set_attribute("data-value", &value.to_string());
            self.spinner_wheel.append_child(&item).map_err(dom::js_err)?;
        }
        Ok(())
    }

    pub fn set_wheel_offset(&self, offset_px: f64) {
        dom::set_style(
            &self.spinner_wheel,
            "transform",
            &format!("translateY({offset_px}px)"),
        );
    }

    fn show_result(&self, target: Option<&MarkedTarget>) {
        match target {
            Some(t) => {
                let heading = apps_core::HeadingReading::new(t.heading_deg);
                dom::set_text(&self.result_direction, &messages::heading_text(&heading));
                dom::set_text(&self.result_distance, &format!("{}", t.distance_m));
                dom::set_text(&self.target_location, &messages::coords_text(&t.projected));
                dom::set_style(&self.result_container, "display", "block");
            }
            None => dom::set_style(&self.result_container, "display", "none"),
        }
    }
}

pub struct HunterPage {
    pub(crate) hunter: RefCell<Hunter>,
    pub(crate) ui: HunterUi,
    pub(crate) wheel_offset: Cell<f64>,
    window: web::Window,
    position_watch: Cell<Option<i32>>,
    orientation_attached: Cell<bool>,
}

impl HunterPage {
    pub fn mount(window: &web::Window, document: &web::Document) -> anyhow::Result<Rc<Self>> {
        let ui = HunterUi::find(document)?;
        ui.build_spinner_items()?;
        let page = Rc::new(HunterPage {
            hunter: RefCell::new(Hunter::default()),
            ui,
            wheel_offset: Cell::new(0.0),
            window: window.clone(),
            position_watch: Cell::new(None),
            orientation_attached: Cell::new(false),
        });

        page.sync_wheel();
        page.subscribe_readouts();
        page.wire_buttons();
        crate::events::wire_spinner_drag(page.clone());
        crate::events::wire_compass_drag(page.clone());
        page.start_orientation();
        log::info!("[hunter] mounted");
        Ok(page)
    }

    /// Heading and position readouts follow the core's published values.
    fn subscribe_readouts(&self) {
        let mut hunter = self.hunter.borrow_mut();

        let rose = self.ui.compass_rose.clone();
        let direction = self.ui.current_direction.clone();
        hunter.subscribe_heading(move |heading| {
            dom::set_style(&rose, "transform", &messages::rose_transform(heading));
            dom::set_text(&direction, &messages::heading_text(heading));
        });

        let location = self.ui.current_location.clone();
        hunter.subscribe_position(move |fix| {
            dom::set_text(&location, &messages::coords_text(fix));
        });
    }

    fn wire_buttons(self: &Rc<Self>) {
        let page = self.clone();
        dom::add_click_listener(&self.ui.document, ID_MARK_BUTTON, move || page.on_mark_pressed());

        let page = self.clone();
        dom::add_click_listener(&self.ui.document, ID_RESET_BUTTON, move || {
            page.hunter.borrow_mut().reset();
            page.render();
        });

        let page = self.clone();
        dom::add_click_listener(&self.ui.document, ID_HUNTER_FULLSCREEN, move || {
            if let Some(root) = page.ui.document.document_element() {
                fullscreen::toggle(&page.ui.document, &root);
            }
        });

        let page = self.clone();
        dom::listen(&self.ui.document, "fullscreenchange", move |_: web::Event| {
            let glyph = if fullscreen::is_active(&page.ui.document) {
                GLYPH_EXIT_FULLSCREEN
            } else {
                GLYPH_ENTER_FULLSCREEN
            };
            dom::set_text(&page.ui.fullscreen_button, glyph);
        });
    }

    /// Re-centre the wheel on the selected distance.
    pub(crate) fn sync_wheel(&self) {
        let distance = *self.hunter.borrow().distance();
        let height = self.ui.spinner_container.client_height() as f64;
        let offset = distance.wheel_offset(height);
        self.wheel_offset.set(offset);
        self.ui.set_wheel_offset(offset);
        dom::set_text(&self.ui.selected_distance, &distance.value_m().to_string());
    }

    fn render(&self) {
        let hunter = self.hunter.borrow();
        let status = messages::status_block_html(hunter.status_note(), hunter.status());
        self.ui.status_message.set_inner_html(&status);
        self.ui
            .mark_button
            .set_disabled(hunter.mark_control() == MarkControl::Disabled);
        self.ui.show_result(hunter.marked());
    }

    fn on_mark_pressed(self: &Rc<Self>) {
        let control = self.hunter.borrow().mark_control();
        match control {
            MarkControl::Ready => {
                self.hunter.borrow_mut().mark();
                self.render();
            }
            MarkControl::RequestPermission => self.request_orientation(),
            MarkControl::Disabled => {}
        }
    }

    // ---------------- Orientation ----------------

    fn start_orientation(self: &Rc<Self>) {
        let support = sensors::orientation_support(&self.window);
        self.hunter.borrow_mut().begin_orientation(support);
        self.render();
        if support != OrientationSupport::NeedsPermission {
            self.orientation_settled();
        }
    }

    fn request_orientation(self: &Rc<Self>) {
        if !self.hunter.borrow_mut().begin_permission_request() {
            return;
        }
        self.render();
        let page = self.clone();
        spawn_local(async move {
            match sensors::request_orientation_permission(&page.window).await {
                Ok(granted) => page.hunter.borrow_mut().orientation_permission(granted),
                Err(e) => {
                    log::error!("[hunter] orientation permission request failed: {e}");
                    page.hunter.borrow_mut().orientation_failed(e);
                }
            }
            page.orientation_settled();
        });
    }

    /// Heading is live or simulated: attach the sensor and start positioning.
    fn orientation_settled(self: &Rc<Self>) {
        let state = self.hunter.borrow().heading_state().clone();
        if matches!(state, HeadingState::Unrequested | HeadingState::PermissionPending) {
            return;
        }
        if self.orientation_attached.replace(true) {
            return;
        }
        // when simulated, the compass drag is already wired
        if state == HeadingState::Live {
            let page = self.clone();
            sensors::subscribe_orientation(&self.window, move |sample, rotation| {
                page.hunter.borrow_mut().on_orientation(&sample, rotation);
            });
        }
        self.render();
        self.start_position();
    }

    // ---------------- Position ----------------

    fn start_position(self: &Rc<Self>) {
        let supported = sensors::geolocation_supported(&self.window);
        let started = self.hunter.borrow_mut().begin_position(supported);
        if started && *self.hunter.borrow().position_state() == PositionState::Watching {
            let on_fix_page = self.clone();
            let on_error_page = self.clone();
            let watch = sensors::watch_position(
                &self.window,
                &self.hunter.borrow().params,
                move |fix| {
                    if on_fix_page.hunter.borrow_mut().on_fix(fix) {
                        on_fix_page.render();
                    }
                },
                move |err| {
                    on_error_page.hunter.borrow_mut().on_position_error(err);
                    on_error_page.stop_position_watch();
                    on_error_page.render();
                },
            );
            match watch {
                Ok(id) => self.position_watch.set(Some(id)),
                Err(e) => {
                    log::error!("[hunter] could not watch position: {e:?}");
                    self.hunter
                        .borrow_mut()
                        .on_position_error(apps_core::SensorError::Transient(e.to_string()));
                }
            }
        }
        self.render();
    }

    fn stop_position_watch(&self) {
        if let Some(id) = self.position_watch.take() {
            sensors::clear_position_watch(&self.window, id);
        }
    }
}
