#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod fullscreen;
mod hunter;
mod keymap;
mod messages;
mod prompter;
mod sensors;
mod storage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("apps-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Mount whichever page the document carries.
async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if document
        .get_element_by_id(constants::ID_PROMPTER_DISPLAY)
        .is_some()
    {
        prompter::PrompterPage::mount(&window, &document)?;
    } else if document
        .get_element_by_id(constants::ID_COMPASS_ROSE)
        .is_some()
    {
        hunter::HunterPage::mount(&window, &document)?;
    } else {
        log::warn!("[dom] no known page in document");
    }
    Ok(())
}
