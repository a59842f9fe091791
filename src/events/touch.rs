use crate::frame::Animator;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Position of the only active touch; `None` for multi-touch gestures.
#[inline]
fn single_touch_pos(ev: &web::TouchEvent) -> Option<Vec2> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    let touch = touches.get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

pub fn wire_touch_handlers(document: &web::Document, cube: &web::HtmlElement, animator: &Animator) {
    wire_touchstart(cube, animator);
    wire_touchmove(document, animator);
    for kind in ["touchend", "touchcancel"] {
        wire_touchend(document, animator, kind);
    }
}

fn wire_touchstart(cube: &web::HtmlElement, animator: &Animator) {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(pos) = single_touch_pos(&ev) {
            super::drag_begin(&animator, pos);
        }
    }) as Box<dyn FnMut(_)>);
    _ = cube.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_touchmove(document: &web::Document, animator: &Animator) {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(pos) = single_touch_pos(&ev) else {
            return;
        };
        if super::drag_move(&animator, pos) {
            // keep the page from scrolling under the cube
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    // Non-passive, otherwise prevent_default is ignored.
    let options = web::AddEventListenerOptions::new();
    options.set_passive(false);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

fn wire_touchend(document: &web::Document, animator: &Animator, kind: &str) {
    let animator = animator.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        super::drag_end(&animator);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}
