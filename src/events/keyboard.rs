use crate::frame::Animator;
use gallery_core::rotation_for_key;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, animator: &Animator) {
    let key = ev.key();
    let step_deg = animator.with(|c| c.config().key_step_deg);
    let Some((delta_yaw, delta_pitch)) = rotation_for_key(&key, step_deg) else {
        return;
    };
    // Arrow keys would otherwise scroll the page.
    ev.prevent_default();
    if animator.update(|c| c.rotate_by(delta_yaw, delta_pitch, instant::now())) {
        log::debug!("[keys] {} yaw {:+} pitch {:+}", key, delta_yaw, delta_pitch);
    }
}

pub fn wire_global_keydown(animator: Animator) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            handle_global_keydown(&ev, &animator);
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
