use crate::constants::PAUSED_CLASS;
use web_sys as web;

// Floating photos drift on a CSS animation; freeze it while the cube is held.

#[inline]
pub fn pause(overlay: Option<&web::HtmlElement>) {
    if let Some(el) = overlay {
        _ = el.class_list().add_1(PAUSED_CLASS);
    }
}

#[inline]
pub fn resume(overlay: Option<&web::HtmlElement>) {
    if let Some(el) = overlay {
        _ = el.class_list().remove_1(PAUSED_CLASS);
    }
}
