#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use gallery_core::{ControllerConfig, OrientationController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod particles;
mod preload;

use constants::{CUBE_ID, FLOATING_PHOTOS_SELECTOR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cube-gallery starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let on_loaded = Closure::once_into_js(run);
        document.add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref())?;
    } else {
        run();
    }
    Ok(())
}

fn run() {
    if let Err(e) = bootstrap() {
        log::error!("init error: {:?}", e);
    }
}

fn bootstrap() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Music is independent of the cube and usable while images load.
    audio::wire_music_toggle(&document);

    let doc = document.clone();
    preload::preload_faces(&document, move || {
        if let Err(e) = init_gallery(&doc) {
            log::error!("[gallery] init error: {:?}", e);
        }
    });
    Ok(())
}

fn init_gallery(document: &web::Document) -> anyhow::Result<()> {
    let cube = dom::html_by_id(document, CUBE_ID);
    if cube.is_none() {
        log::warn!("[gallery] missing #{}; rotation will not render", CUBE_ID);
    }
    let overlay = dom::query_html(document, FLOATING_PHOTOS_SELECTOR);

    let controller = OrientationController::new(
        ControllerConfig::default(),
        dom::CubeTargets::new(cube.clone(), overlay),
    )
    .context("invalid controller config")?;
    let animator = frame::Animator::new(controller);
    animator.update(|c| c.apply_transform());

    if let Some(cube) = &cube {
        events::wire_pointer_handlers(cube, &animator);
        events::wire_touch_handlers(document, cube, &animator);
    }
    // The keydown listener lives for the page and keeps the animator alive.
    events::wire_global_keydown(animator.clone());

    particles::start_hearts(document);
    particles::start_strawberry_rain(document);

    animator.update(|c| c.start_auto_rotate());
    log::info!("[gallery] ready");
    Ok(())
}
