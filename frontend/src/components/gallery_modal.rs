use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::data::gallery::GalleryItem;
use crate::i18n::use_language;
use crate::utils::listener::Listener;

fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let value = if locked { "hidden" } else { "" };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("Failed to toggle body scroll: {:?}", e);
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryModalProps {
    pub item: Option<GalleryItem>,
    pub on_close: Callback<()>,
}

#[function_component(GalleryModal)]
pub fn gallery_modal(props: &GalleryModalProps) -> Html {
    let language = use_language();
    let open = props.item.is_some();

    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open| {
                let mut escape = None;
                if *open {
                    set_body_scroll_locked(true);
                    if let Some(window) = web_sys::window() {
                        let listener = Listener::new(window.as_ref(), "keydown", move |event| {
                            let is_escape = event
                                .dyn_ref::<KeyboardEvent>()
                                .map_or(false, |event| event.key() == "Escape");
                            if is_escape {
                                on_close.emit(());
                            }
                        });
                        match listener {
                            Ok(listener) => escape = Some(listener),
                            Err(e) => log::warn!("Modal escape handler failed: {}", e),
                        }
                    }
                }
                let locked = *open;
                move || {
                    drop(escape);
                    if locked {
                        set_body_scroll_locked(false);
                    }
                }
            },
            open,
        );
    }

    let Some(item) = props.item.as_ref() else {
        return html! {};
    };

    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());
    let details = [
        ("gallery.client", &item.client),
        ("gallery.location", &item.location),
        ("gallery.date", &item.year),
        ("gallery.lora", &item.lora),
        ("gallery.role", &item.role),
    ];

    html! {
        <div class="gallery-modal-backdrop" onclick={close.clone()} data-no-snap="true">
            <style>{r#"
                .gallery-modal-backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.7);
                    backdrop-filter: blur(12px);
                }
                .gallery-modal {
                    position: relative;
                    width: min(960px, 100%);
                    max-height: 90vh;
                    overflow-y: auto;
                    background: #0a0a0a;
                    border: 1px solid #1f1f1f;
                    color: #fff;
                }
                .gallery-modal video {
                    width: 100%;
                    display: block;
                }
                .gallery-modal .modal-body {
                    padding: 2rem;
                }
                .gallery-modal dl {
                    display: grid;
                    grid-template-columns: max-content 1fr;
                    gap: 0.5rem 1.5rem;
                    margin: 1.5rem 0;
                }
                .gallery-modal dt {
                    color: #777;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                    letter-spacing: 0.15em;
                }
                .gallery-modal .modal-close {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: rgba(0, 0, 0, 0.6);
                    border: 1px solid #444;
                    color: #fff;
                    padding: 0.4rem 0.8rem;
                    cursor: pointer;
                }
            "#}</style>
            <div class="gallery-modal" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" onclick={close} aria-label={language.t("gallery.close").to_string()}>
                    {"✕"}
                </button>
                if let Some(src) = item.video_src() {
                    <video src={src} controls={true} autoplay={true} playsinline={true}></video>
                }
                <div class="modal-body">
                    <span class="gallery-year">{ language.t("gallery.liveEvent") }</span>
                    <h2>{ item.title.clone() }</h2>
                    <p>{ item.tagline.clone() }</p>
                    <dl>
                        { for details.iter().map(|(key, value)| html! {
                            <>
                                <dt>{ language.t(key) }</dt>
                                <dd>{ (*value).clone() }</dd>
                            </>
                        }) }
                    </dl>
                    <p>{ item.description.clone() }</p>
                </div>
            </div>
        </div>
    }
}
