use crate::prompter::PrompterPage;
use std::rc::Rc;
use web_sys as web;

pub fn handle_prompter_keydown(ev: &web::KeyboardEvent, page: &PrompterPage) {
    if page.handle_key(&ev.key()) {
        ev.prevent_default();
    }
}

pub fn wire_prompter_keydown(page: Rc<PrompterPage>) {
    if let Some(document) = crate::dom::window_document() {
        crate::dom::listen(&document, "keydown", move |ev: web::KeyboardEvent| {
            handle_prompter_keydown(&ev, &page);
        });
    }
}
