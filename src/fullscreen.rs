use web_sys as web;

#[inline]
pub fn is_active(document: &web::Document) -> bool {
    document.fullscreen_element().is_some()
}

pub fn enter(target: &web::Element) {
    if let Err(e) = target.request_fullscreen() {
        log::error!("[dom] fullscreen request failed: {:?}", e);
    }
}

pub fn exit(document: &web::Document) {
    if is_active(document) {
        document.exit_fullscreen();
    }
}

/// Returns whether fullscreen was requested (true) or exited (false).
pub fn toggle(document: &web::Document, target: &web::Element) -> bool {
    if is_active(document) {
        exit(document);
        false
    } else {
        enter(target);
        true
    }
}
