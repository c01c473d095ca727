use apps_core::FrameRequest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame loop with explicit start and cancel.
///
/// The frame handler receives the frame timestamp (ms) and decides whether
/// another frame is wanted. At most one frame is pending at any time.
#[derive(Clone)]
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> FrameRequest + 'static) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: FrameCallback = Rc::new(RefCell::new(None));

        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            pending_tick.set(None);
            if on_frame(timestamp_ms) == FrameRequest::Continue {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    pending_tick.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut(f64)>));

        Self { pending, tick }
    }

    /// Schedule the next frame unless one is already pending.
    pub fn start(&self) {
        if self.pending.get().is_some() {
            return;
        }
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.pending.set(request_frame(cb));
        }
    }

    /// Drop the pending frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("[dom] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
