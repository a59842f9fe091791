use crate::constants::*;
use crate::dom;
use gallery_core::constants::{HEART_LIFETIME_MS, HEART_SPAWN_INTERVAL_MS};
use gallery_core::{heart_burst, RainPopulation, StrawberryStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_html(document: &web::Document, tag: &str, class: &str) -> Option<web::HtmlElement> {
    let el = document.create_element(tag).ok()?;
    el.set_class_name(class);
    el.dyn_into::<web::HtmlElement>().ok()
}

fn viewport_width() -> f32 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Release a few hearts into `.hearts` on a fixed interval while the page is
/// visible. Each heart removes itself once its float animation is over.
pub fn start_hearts(document: &web::Document) {
    let Some(container) = dom::query_html(document, HEARTS_SELECTOR) else {
        log::info!("[hearts] no container; effect disabled");
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let mut rng = StdRng::from_entropy();
    let closure = Closure::wrap(Box::new(move || {
        if doc.hidden() {
            return;
        }
        for style in heart_burst(&mut rng) {
            let Some(heart) = create_html(&doc, "i", HEART_CLASS) else {
                continue;
            };
            dom::apply_css(&heart, &style.css());
            _ = container.append_child(&heart);
            dom::set_timeout(HEART_LIFETIME_MS as i32, move || heart.remove());
        }
    }) as Box<dyn FnMut()>);
    _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        HEART_SPAWN_INTERVAL_MS as i32,
    );
    closure.forget();
}

struct Rain {
    document: web::Document,
    container: web::HtmlElement,
    population: RainPopulation,
    rng: StdRng,
}

/// Fill `.strawberry-rain` with falling strawberries, staggered in, each one
/// replaced by a fresh one when its fall animation ends.
pub fn start_strawberry_rain(document: &web::Document) {
    let Some(container) = dom::query_html(document, STRAWBERRY_RAIN_SELECTOR) else {
        log::info!("[rain] no container; effect disabled");
        return;
    };
    let rain = Rc::new(RefCell::new(Rain {
        document: document.clone(),
        container,
        population: RainPopulation::default(),
        rng: StdRng::from_entropy(),
    }));
    let delays: Vec<u32> = rain.borrow().population.stagger_ms().collect();
    for delay_ms in delays {
        let rain = rain.clone();
        dom::set_timeout(delay_ms as i32, move || spawn_strawberry(&rain));
    }
}

fn spawn_strawberry(rain: &Rc<RefCell<Rain>>) {
    let strawberry = {
        let mut r = rain.borrow_mut();
        if !r.population.try_spawn() {
            return;
        }
        let Some(el) = create_html(&r.document, "div", STRAWBERRY_CLASS) else {
            r.population.despawn();
            return;
        };
        let style = StrawberryStyle::random(&mut r.rng, viewport_width());
        dom::apply_css(&el, &style.css());
        _ = r.container.append_child(&el);
        el
    };

    let on_end = {
        let rain = rain.clone();
        let el = strawberry.clone();
        Closure::once_into_js(move || {
            el.remove();
            rain.borrow_mut().population.despawn();
            spawn_strawberry(&rain);
        })
    };
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    _ = strawberry.add_event_listener_with_callback_and_add_event_listener_options(
        "animationend",
        on_end.unchecked_ref(),
        &options,
    );
}
