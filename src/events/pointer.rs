use crate::dom;
use crate::hunter::HunterPage;
use apps_core::{DragRotation, HeadingState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

#[derive(Default, Clone, Copy)]
struct WheelDrag {
    active: bool,
    start_y: f64,
    initial_offset: f64,
}

/// Vertical drag on the distance wheel; snaps to the nearest row on release.
pub fn wire_spinner_drag(page: Rc<HunterPage>) {
    let drag = Rc::new(Cell::new(WheelDrag::default()));

    {
        let page = page.clone();
        let drag = drag.clone();
        dom::listen(
            &page.ui.spinner_container.clone(),
            "pointerdown",
            move |ev: web::PointerEvent| {
                ev.prevent_default();
                drag.set(WheelDrag {
                    active: true,
                    start_y: ev.client_y() as f64,
                    initial_offset: page.wheel_offset.get(),
                });
            },
        );
    }

    let document = page.ui.document.clone();
    {
        let page = page.clone();
        let drag = drag.clone();
        dom::listen(&document, "pointermove", move |ev: web::PointerEvent| {
            let d = drag.get();
            if !d.active {
                return;
            }
            ev.prevent_default();
            let offset = d.initial_offset + (ev.client_y() as f64 - d.start_y);
            page.wheel_offset.set(offset);
            page.ui.set_wheel_offset(offset);
        });
    }

    let on_release = move |_: web::PointerEvent| {
        let mut d = drag.get();
        if !d.active {
            return;
        }
        d.active = false;
        drag.set(d);
        let height = page.ui.spinner_container.client_height() as f64;
        let value = page
            .hunter
            .borrow_mut()
            .distance_mut()
            .snap(page.wheel_offset.get(), height);
        log::debug!("[hunter] distance {}m", value);
        page.sync_wheel();
    };
    dom::listen(&document, "pointerup", on_release.clone());
    dom::listen(&document, "pointercancel", on_release);
}

/// Drag-to-rotate on the compass. The core ignores it unless the heading
/// is simulated.
pub fn wire_compass_drag(page: Rc<HunterPage>) {
    let drag: Rc<RefCell<Option<DragRotation>>> = Rc::new(RefCell::new(None));

    {
        let page = page.clone();
        let drag = drag.clone();
        dom::listen(
            &page.ui.compass.clone(),
            "pointerdown",
            move |ev: web::PointerEvent| {
                if !matches!(page.hunter.borrow().heading_state(), HeadingState::Simulated(_)) {
                    return;
                }
                ev.prevent_default();
                let rect = page.ui.compass.get_bounding_client_rect();
                let center = (
                    rect.left() + rect.width() / 2.0,
                    rect.top() + rect.height() / 2.0,
                );
                *drag.borrow_mut() = Some(DragRotation::begin(center, pointer_xy(&ev)));
            },
        );
    }

    let document = page.ui.document.clone();
    {
        let drag = drag.clone();
        dom::listen(&document, "pointermove", move |ev: web::PointerEvent| {
            let delta = match drag.borrow_mut().as_mut() {
                Some(d) => d.update(pointer_xy(&ev)),
                None => return,
            };
            ev.prevent_default();
            page.hunter.borrow_mut().rotate_compass(delta);
        });
    }

    let end = move |_: web::PointerEvent| {
        drag.borrow_mut().take();
    };
    dom::listen(&document, "pointerup", end.clone());
    dom::listen(&document, "pointercancel", end);
}

#[inline]
fn pointer_xy(ev: &web::PointerEvent) -> (f64, f64) {
    (ev.client_x() as f64, ev.client_y() as f64)
}
