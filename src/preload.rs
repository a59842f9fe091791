use crate::constants::{FACE_IMAGES_SELECTOR, LAZY_SRC_ATTR};
use gallery_core::PreloadTracker;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Face images declaring a deferred source, paired with that source.
fn lazy_faces(document: &web::Document) -> Vec<(web::HtmlImageElement, String)> {
    let Ok(nodes) = document.query_selector_all(FACE_IMAGES_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlImageElement>().ok())
        .filter_map(|img| {
            let src = img.get_attribute(LAZY_SRC_ATTR)?;
            (!src.is_empty()).then_some((img, src))
        })
        .collect()
}

/// Load every face image off-screen, swap it in, and call `on_ready` once all
/// of them have settled.
pub fn preload_faces(document: &web::Document, on_ready: impl FnOnce() + 'static) {
    let faces = lazy_faces(document);
    let tracker = Rc::new(RefCell::new(PreloadTracker::new(faces.len())));
    let on_ready: Rc<RefCell<Option<Box<dyn FnOnce()>>>> =
        Rc::new(RefCell::new(Some(Box::new(on_ready))));

    let settle: Rc<dyn Fn(bool)> = {
        let tracker = tracker.clone();
        let on_ready = on_ready.clone();
        Rc::new(move |ok: bool| {
            let ready = {
                let mut t = tracker.borrow_mut();
                if ok {
                    t.mark_loaded()
                } else {
                    t.mark_failed()
                }
            };
            if ready {
                let t = tracker.borrow();
                log::info!(
                    "[preload] {}/{} images ready ({} failed)",
                    t.loaded(),
                    t.total(),
                    t.failed()
                );
                drop(t);
                let callback = on_ready.borrow_mut().take();
                if let Some(callback) = callback {
                    callback();
                }
            }
        })
    };

    if faces.is_empty() {
        log::info!("[preload] no deferred images");
        if tracker.borrow_mut().take_ready() {
            let callback = on_ready.borrow_mut().take();
            if let Some(callback) = callback {
                callback();
            }
        }
        return;
    }

    for (img, src) in faces {
        let loader = match web::HtmlImageElement::new() {
            Ok(loader) => loader,
            Err(e) => {
                log::warn!("[preload] could not create loader for {}: {:?}", src, e);
                settle(false);
                continue;
            }
        };

        let on_load = {
            let settle = settle.clone();
            let src = src.clone();
            Closure::once_into_js(move || {
                img.set_src(&src);
                settle(true);
            })
        };
        let on_error = {
            let settle = settle.clone();
            let src = src.clone();
            Closure::once_into_js(move || {
                log::warn!("[preload] failed to load {}", src);
                settle(false);
            })
        };
        loader.set_onload(Some(on_load.unchecked_ref()));
        loader.set_onerror(Some(on_error.unchecked_ref()));
        loader.set_src(&src);
    }
}
