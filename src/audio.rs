use crate::constants::{
    BG_MUSIC_ID, MUSIC_ICON_HTML, MUSIC_TOGGLE_ID, PAUSE_ICON_HTML, PLAYING_CLASS,
};
use crate::dom;
use gallery_core::{MediaCommand, MediaToggle, PlaybackState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Clone)]
struct MusicControls {
    button: web::HtmlElement,
    audio: web::HtmlAudioElement,
    toggle: Rc<RefCell<MediaToggle>>,
}

impl MusicControls {
    fn show_playing(&self) {
        self.button.set_inner_html(PAUSE_ICON_HTML);
        _ = self.button.class_list().add_1(PLAYING_CLASS);
    }

    fn show_stopped(&self) {
        self.button.set_inner_html(MUSIC_ICON_HTML);
        _ = self.button.class_list().remove_1(PLAYING_CLASS);
    }

    fn on_click(&self) {
        let command = self.toggle.borrow_mut().toggle();
        match command {
            MediaCommand::Play(request) => self.request_play(request),
            MediaCommand::Pause => {
                _ = self.audio.pause();
                self.show_stopped();
            }
        }
    }

    // Browsers may refuse playback (autoplay policy, bad source, or an abort
    // when pause interrupts a pending play); a refusal is logged and only the
    // latest request moves the toggle.
    fn request_play(&self, request: u64) {
        let promise: js_sys::Promise = match self.audio.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[music] play() threw: {:?}", e);
                if self.toggle.borrow_mut().play_rejected(request) {
                    self.show_stopped();
                }
                return;
            }
        };
        let controls = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => {
                    let (resolved, state) = {
                        let mut toggle = controls.toggle.borrow_mut();
                        (toggle.play_resolved(request), toggle.state())
                    };
                    if resolved {
                        controls.show_playing();
                    } else if state == PlaybackState::Stopped {
                        // paused again while the request was pending
                        _ = controls.audio.pause();
                    }
                }
                Err(e) => {
                    log::warn!("[music] playback #{} rejected: {:?}", request, e);
                    let rejected = controls.toggle.borrow_mut().play_rejected(request);
                    if rejected {
                        controls.show_stopped();
                    }
                }
            }
        });
    }

    fn on_ended(&self) {
        self.toggle.borrow_mut().ended();
        self.show_stopped();
    }
}

/// Hook `#musicToggle` up to `#bgMusic`. Disabled if either is missing.
pub fn wire_music_toggle(document: &web::Document) {
    let button = dom::html_by_id(document, MUSIC_TOGGLE_ID);
    let audio = document
        .get_element_by_id(BG_MUSIC_ID)
        .and_then(|el| el.dyn_into::<web::HtmlAudioElement>().ok());
    let (Some(button), Some(audio)) = (button, audio) else {
        log::info!("[music] controls missing; toggle disabled");
        return;
    };
    let controls = MusicControls {
        button: button.clone(),
        audio: audio.clone(),
        toggle: Rc::new(RefCell::new(MediaToggle::default())),
    };

    let on_click = controls.clone();
    dom::add_click_listener(&button, move || on_click.on_click());

    let closure = Closure::wrap(Box::new(move || controls.on_ended()) as Box<dyn FnMut()>);
    _ = audio.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}
