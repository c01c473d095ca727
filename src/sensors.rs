//! Browser orientation and geolocation, translated into core types.

use crate::dom;
use apps_core::{
    GeoFix, HunterParams, OrientationSample, OrientationSupport, ScreenRotation, SensorError,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const ORIENTATION_CTOR: &str = "DeviceOrientationEvent";
const PERMISSION_GRANTED: &str = "granted";
// GeolocationPositionError.PERMISSION_DENIED
const GEO_PERMISSION_DENIED: u16 = 1;

fn orientation_ctor(window: &web::Window) -> Option<JsValue> {
    if !dom::has_property(window, ORIENTATION_CTOR) {
        return None;
    }
    js_sys::Reflect::get(window, &JsValue::from_str(ORIENTATION_CTOR))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn permission_fn(ctor: &JsValue) -> Option<js_sys::Function> {
    js_sys::Reflect::get(ctor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
}

pub fn orientation_support(window: &web::Window) -> OrientationSupport {
    match orientation_ctor(window) {
        None => OrientationSupport::Absent,
        Some(ctor) if permission_fn(&ctor).is_some() => OrientationSupport::NeedsPermission,
        Some(_) => OrientationSupport::Available,
    }
}

/// Ask for orientation access. Must run inside a user gesture on platforms
/// that gate it.
pub async fn request_orientation_permission(window: &web::Window) -> Result<bool, SensorError> {
    let ctor = orientation_ctor(window).ok_or(SensorError::CapabilityAbsent)?;
    let request = permission_fn(&ctor).ok_or(SensorError::CapabilityAbsent)?;
    let promise = request
        .call0(&ctor)
        .map_err(|e| SensorError::Transient(format!("{:?}", e)))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| SensorError::Transient("requestPermission did not return a promise".into()))?;
    let answer = JsFuture::from(promise)
        .await
        .map_err(|e| SensorError::Transient(format!("{:?}", e)))?;
    Ok(answer.as_string().as_deref() == Some(PERMISSION_GRANTED))
}

pub fn sample_from_event(ev: &web::DeviceOrientationEvent) -> OrientationSample {
    OrientationSample {
        compass_heading: dom::number_property(ev, "webkitCompassHeading"),
        absolute: ev.absolute(),
        alpha: ev.alpha(),
    }
}

pub fn screen_rotation(window: &web::Window) -> ScreenRotation {
    dom::number_property(window, "orientation")
        .map(|angle| ScreenRotation::from_angle(angle as i32))
        .unwrap_or_default()
}

/// Listen to both absolute and relative orientation events for the life of
/// the page.
pub fn subscribe_orientation(
    window: &web::Window,
    handler: impl FnMut(OrientationSample, ScreenRotation) + 'static,
) {
    let handler = Rc::new(RefCell::new(handler));
    for event in ["deviceorientationabsolute", "deviceorientation"] {
        let handler = handler.clone();
        let win = window.clone();
        dom::listen(window, event, move |ev: web::DeviceOrientationEvent| {
            let sample = sample_from_event(&ev);
            let mut handle = handler.borrow_mut();
            (*handle)(sample, screen_rotation(&win));
        });
    }
}

pub fn geolocation_supported(window: &web::Window) -> bool {
    dom::has_property(&window.navigator(), "geolocation")
}

fn sensor_error(err: &web::GeolocationPositionError) -> SensorError {
    if err.code() == GEO_PERMISSION_DENIED {
        SensorError::PermissionDenied
    } else {
        SensorError::Transient(err.message())
    }
}

/// Start a position watch. Returns the watch id for `clear_position_watch`.
pub fn watch_position(
    window: &web::Window,
    params: &HunterParams,
    mut on_fix: impl FnMut(GeoFix) + 'static,
    mut on_error: impl FnMut(SensorError) + 'static,
) -> anyhow::Result<i32> {
    let geolocation = window.navigator().geolocation().map_err(dom::js_err)?;

    let options = web::PositionOptions::new();
    options.set_enable_high_accuracy(params.high_accuracy);
    options.set_timeout(params.fix_timeout_ms);
    options.set_maximum_age(0);

    let success = Closure::wrap(Box::new(move |pos: web::GeolocationPosition| {
        let coords = pos.coords();
        on_fix(GeoFix::new(coords.latitude(), coords.longitude(), coords.accuracy()));
    }) as Box<dyn FnMut(web::GeolocationPosition)>);
    let failure = Closure::wrap(Box::new(move |err: web::GeolocationPositionError| {
        log::error!("[hunter] geolocation error {}: {}", err.code(), err.message());
        on_error(sensor_error(&err));
    }) as Box<dyn FnMut(web::GeolocationPositionError)>);

    let id = geolocation
        .watch_position_with_error_callback_and_options(
            success.as_ref().unchecked_ref(),
            Some(failure.as_ref().unchecked_ref()),
            &options,
        )
        .map_err(dom::js_err)?;
    success.forget();
    failure.forget();
    Ok(id)
}

pub fn clear_position_watch(window: &web::Window, watch_id: i32) {
    if let Ok(geolocation) = window.navigator().geolocation() {
        geolocation.clear_watch(watch_id);
    }
}
