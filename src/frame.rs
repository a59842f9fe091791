use crate::dom::CubeTargets;
use gallery_core::{OrientationController, Task};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type Controller = OrientationController<CubeTargets>;

#[derive(Clone, Copy, Debug)]
enum Handle {
    Interval(i32),
    Frame(i32),
}

struct Inner {
    controller: RefCell<Controller>,
    // The one live timer or frame request, tagged with the task it drives.
    slot: RefCell<Option<(Task, Handle)>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

/// Owns the orientation controller and keeps exactly one browser callback
/// scheduled for whatever task the controller's mode asks for.
///
/// Every input goes through [`Animator::update`]: the controller transitions
/// first, then the scheduled callback is reconciled, cancelling the previous
/// mode's timer or frame before a new one is requested.
#[derive(Clone)]
pub struct Animator {
    inner: Rc<Inner>,
}

impl Animator {
    pub fn new(controller: Controller) -> Self {
        let inner = Rc::new(Inner {
            controller: RefCell::new(controller),
            slot: RefCell::new(None),
            tick: RefCell::new(None),
            frame: RefCell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.controller.borrow_mut().tick_auto_rotate();
            }
        }) as Box<dyn FnMut()>));

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        *inner.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame(timestamp_ms);
            }
        }) as Box<dyn FnMut(f64)>));

        Self { inner }
    }

    /// Mutate the controller, then reschedule to match its new mode.
    pub fn update<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> R {
        let out = f(&mut self.inner.controller.borrow_mut());
        self.inner.sync();
        out
    }

    pub fn with<R>(&self, f: impl FnOnce(&Controller) -> R) -> R {
        f(&self.inner.controller.borrow())
    }
}

impl Inner {
    fn on_frame(&self, timestamp_ms: f64) {
        // A fired frame request is spent; clear it before stepping.
        let fired = self.slot.borrow_mut().take();
        let task = match fired {
            Some((task, Handle::Frame(_))) => task,
            other => {
                *self.slot.borrow_mut() = other;
                return;
            }
        };
        {
            let mut controller = self.controller.borrow_mut();
            match task {
                Task::Inertia => {
                    controller.step_inertia();
                }
                Task::KeyStep => {
                    controller.step_key(timestamp_ms);
                }
                Task::AutoRotate | Task::None => {}
            }
        }
        self.sync();
    }

    fn sync(&self) {
        let wanted = self.controller.borrow().task();
        let mut slot = self.slot.borrow_mut();
        if let Some((current, _)) = *slot {
            if current == wanted {
                return;
            }
        }
        if let Some((task, handle)) = slot.take() {
            log::debug!("[frame] cancel {:?}", task);
            cancel(handle);
        }
        *slot = self.schedule(wanted).map(|handle| (wanted, handle));
    }

    fn schedule(&self, task: Task) -> Option<Handle> {
        let window = web::window()?;
        match task {
            Task::None => None,
            Task::AutoRotate => {
                // validated to fit at construction
                let interval_ms =
                    i32::try_from(self.controller.borrow().config().auto_rotate_interval_ms)
                        .unwrap_or(i32::MAX);
                let tick = self.tick.borrow();
                let callback = tick.as_ref()?;
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        callback.as_ref().unchecked_ref(),
                        interval_ms,
                    )
                    .map_err(|e| log::error!("[frame] setInterval failed: {:?}", e))
                    .ok()
                    .map(Handle::Interval)
            }
            t if t.is_frame_driven() => {
                let frame = self.frame.borrow();
                let callback = frame.as_ref()?;
                window
                    .request_animation_frame(callback.as_ref().unchecked_ref())
                    .map_err(|e| log::error!("[frame] requestAnimationFrame failed: {:?}", e))
                    .ok()
                    .map(Handle::Frame)
            }
            _ => None,
        }
    }
}

fn cancel(handle: Handle) {
    if let Some(window) = web::window() {
        match handle {
            Handle::Interval(id) => window.clear_interval_with_handle(id),
            Handle::Frame(id) => {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}
