pub mod keyboard;
pub mod pointer;
pub mod touch;

pub use keyboard::wire_global_keydown;
pub use pointer::wire_pointer_handlers;
pub use touch::wire_touch_handlers;

use crate::frame::Animator;
use crate::overlay;
use glam::Vec2;

// Pointer and touch drags share the same transitions.

pub(crate) fn drag_begin(animator: &Animator, pos: Vec2) {
    if animator.update(|c| c.begin_drag(pos)) {
        animator.with(|c| overlay::pause(c.target().overlay()));
    }
}

pub(crate) fn drag_move(animator: &Animator, pos: Vec2) -> bool {
    animator.update(|c| c.continue_drag(pos))
}

pub(crate) fn drag_end(animator: &Animator) {
    if animator.update(|c| c.end_drag()) {
        animator.with(|c| overlay::resume(c.target().overlay()));
    }
}
