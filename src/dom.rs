use gallery_core::RenderTarget;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn apply_css(el: &web::HtmlElement, props: &[(&'static str, String)]) {
    let style = el.style();
    for (name, value) in props {
        _ = style.set_property(name, value);
    }
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(window) = web::window() {
        let callback = Closure::once_into_js(f);
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    }
}

/// Elements that display the cube orientation.
///
/// Either may be missing while the page is still assembling; rendering then
/// silently does nothing.
pub struct CubeTargets {
    cube: Option<web::HtmlElement>,
    overlay: Option<web::HtmlElement>,
}

impl CubeTargets {
    pub fn new(cube: Option<web::HtmlElement>, overlay: Option<web::HtmlElement>) -> Self {
        Self { cube, overlay }
    }

    pub fn overlay(&self) -> Option<&web::HtmlElement> {
        self.overlay.as_ref()
    }
}

impl RenderTarget for CubeTargets {
    fn render(&mut self, transform: &str) {
        let Some(cube) = &self.cube else {
            return;
        };
        _ = cube.style().set_property("transform", transform);
        if let Some(overlay) = &self.overlay {
            _ = overlay.style().set_property("transform", transform);
        }
    }
}
