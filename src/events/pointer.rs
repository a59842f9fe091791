use crate::frame::Animator;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Touch input arrives through the touch handlers; skip its pointer echoes so
// one finger does not drive the cube twice.
#[inline]
fn is_touch(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}

#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_pointer_handlers(cube: &web::HtmlElement, animator: &Animator) {
    wire_pointerdown(cube, animator);
    wire_pointermove(animator);
    // A cancelled pointer (browser gesture takeover, lost capture) ends the
    // drag the same way a release does.
    for kind in ["pointerup", "pointercancel"] {
        wire_pointerup(animator, kind);
    }
}

fn wire_pointerdown(cube: &web::HtmlElement, animator: &Animator) {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        super::drag_begin(&animator, client_pos(&ev));
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = cube.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Move and release listen on the window so a drag keeps tracking after the
// pointer leaves the cube.
fn wire_pointermove(animator: &Animator) {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        super::drag_move(&animator, client_pos(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(animator: &Animator, kind: &str) {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        super::drag_end(&animator);
    }) as Box<dyn FnMut(_)>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
