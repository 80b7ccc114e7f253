use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Element, EventTarget};
use yew::prelude::*;

use crate::components::gallery_modal::GalleryModal;
use crate::components::reveal::Reveal;
use crate::data::gallery::{gallery_items, GalleryItem};
use crate::i18n::use_language;
use crate::motion::{Motion, STAGGER_MS};
use crate::scroll::FrameControl;
use crate::utils::dom;
use crate::utils::frame_loop::FrameLoop;
use crate::utils::listener::Listener;
use crate::utils::visibility::VisibilityWatch;

const AUTO_SCROLL_PX_PER_SEC: f64 = 200.0;
/// Tracks that barely overflow are left alone.
const MIN_AUTO_SCROLL_RANGE: f64 = 2.0;

/// Constant-speed glide of the track from its right end back to the start.
#[derive(Debug, Clone, PartialEq)]
struct AutoScroll {
    position: f64,
    last_frame: Option<f64>,
}

impl AutoScroll {
    fn from_end(max_scroll: f64) -> Option<Self> {
        (max_scroll > MIN_AUTO_SCROLL_RANGE).then_some(Self {
            position: max_scroll,
            last_frame: None,
        })
    }

    /// Position for the frame at `now`, and whether to keep going.
    fn step(&mut self, now: f64) -> (f64, FrameControl) {
        let elapsed = self.last_frame.map_or(0.0, |last| (now - last).max(0.0));
        self.last_frame = Some(now);
        self.position = (self.position - AUTO_SCROLL_PX_PER_SEC * elapsed / 1000.0).max(0.0);
        let control = if self.position > 0.0 {
            FrameControl::Continue
        } else {
            FrameControl::Stop
        };
        (self.position, control)
    }
}

/// Keeps the gallery glide and its listeners alive; dropping stops both.
struct AutoScrollGuard {
    _listeners: Vec<Listener>,
    _watch: Option<VisibilityWatch>,
    frames: Rc<RefCell<Option<FrameLoop>>>,
}

impl Drop for AutoScrollGuard {
    fn drop(&mut self) {
        self.frames.borrow_mut().take();
    }
}

/// Starts the glide once the section is visible. Any user input on the track
/// (or a key press anywhere) ends it for good.
fn install_auto_scroll(section: Element, track: Element) -> AutoScrollGuard {
    let stopped = Rc::new(Cell::new(false));
    let frames: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));

    let on_intent = {
        let stopped = stopped.clone();
        let frames = frames.clone();
        move |_: web_sys::Event| {
            if !stopped.replace(true) {
                log::debug!("gallery auto-scroll stopped by user");
            }
            frames.borrow_mut().take();
        }
    };
    let track_target: &EventTarget = track.as_ref();
    let mut targets: Vec<(EventTarget, &'static str)> = vec![
        (track_target.clone(), "wheel"),
        (track_target.clone(), "touchstart"),
        (track_target.clone(), "pointerdown"),
    ];
    if let Some(window) = web_sys::window() {
        targets.push((window.into(), "keydown"));
    }
    let mut listeners = Vec::new();
    for (target, event) in targets {
        match Listener::passive(&target, event, on_intent.clone()) {
            Ok(listener) => listeners.push(listener),
            Err(e) => log::warn!("Gallery listener failed: {}", e),
        }
    }

    let start = {
        let frames = frames.clone();
        move || {
            if stopped.get() {
                return;
            }
            let max_scroll = f64::from(track.scroll_width() - track.client_width());
            let Some(mut glide) = AutoScroll::from_end(max_scroll) else {
                return;
            };
            track.scroll_to_with_x_and_y(max_scroll, 0.0);
            let started = FrameLoop::start(move |now| {
                if stopped.get() {
                    return FrameControl::Stop;
                }
                let (position, control) = glide.step(now);
                track.scroll_to_with_x_and_y(position, 0.0);
                control
            });
            match started {
                Ok(frame_loop) => *frames.borrow_mut() = Some(frame_loop),
                Err(e) => log::warn!("Gallery auto-scroll unavailable: {}", e),
            }
        }
    };
    let watch = match VisibilityWatch::once(&section, 0.2, start) {
        Ok(watch) => Some(watch),
        Err(e) => {
            log::debug!("Gallery auto-scroll skipped: {}", e);
            None
        }
    };
    AutoScrollGuard {
        _listeners: listeners,
        _watch: watch,
        frames,
    }
}

#[function_component(GallerySection)]
pub fn gallery_section() -> Html {
    let language = use_language();
    let items = use_memo(|_| gallery_items(), ());
    let selected = use_state(|| None::<GalleryItem>);
    let section_ref = use_node_ref();
    let track_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let track_ref = track_ref.clone();
        use_effect_with_deps(
            move |_| {
                let guard = match (section_ref.cast::<Element>(), track_ref.cast::<Element>()) {
                    (Some(section), Some(track)) if !dom::reduced_motion() => {
                        Some(install_auto_scroll(section, track))
                    }
                    _ => None,
                };
                move || drop(guard)
            },
            (),
        );
    }

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: ()| selected.set(None))
    };

    let cards = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let onclick = {
                let selected = selected.clone();
                let item = item.clone();
                Callback::from(move |_: MouseEvent| selected.set(Some(item.clone())))
            };
            html! {
                <Reveal motion={Motion::FadeInUp} delay_ms={index as u32 * STAGGER_MS / 2} class="gallery-card-wrap" key={item.id.clone()}>
                    <button class="gallery-card" {onclick}>
                        if let Some(src) = item.video_src() {
                            <video src={src} muted={true} loop={true} autoplay={true} playsinline={true} preload="metadata"></video>
                        }
                        <div class="gallery-card-meta">
                            <span class="gallery-year">{ item.year.clone() }</span>
                            <h3>{ item.title.clone() }</h3>
                            <p>{ item.tagline.clone() }</p>
                        </div>
                    </button>
                </Reveal>
            }
        })
        .collect::<Html>();

    let gallery_css = r#"
        .gallery-section {
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            padding: 6rem 0 8rem;
            scroll-snap-align: start;
            scroll-margin-top: 66px;
        }
        .gallery-section .gallery-header {
            padding: 0 3rem;
            margin-bottom: 3rem;
        }
        .gallery-section h2 {
            font-size: 3rem;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            margin: 0 0 1rem;
        }
        .gallery-section .gallery-header p {
            color: #aaa;
            max-width: 600px;
        }
        .gallery-track {
            display: flex;
            gap: 1.5rem;
            overflow-x: auto;
            padding: 0 3rem 1rem;
            scrollbar-width: none;
        }
        .gallery-track::-webkit-scrollbar {
            display: none;
        }
        .gallery-card-wrap {
            flex: 0 0 auto;
        }
        .gallery-card {
            width: 420px;
            background: #0a0a0a;
            border: 1px solid #1f1f1f;
            color: #fff;
            padding: 0;
            text-align: left;
            cursor: pointer;
            transition: border-color 0.3s ease;
        }
        .gallery-card:hover {
            border-color: #555;
        }
        .gallery-card video {
            width: 100%;
            aspect-ratio: 16/9;
            object-fit: cover;
            display: block;
        }
        .gallery-card-meta {
            padding: 1.25rem;
        }
        .gallery-card-meta h3 {
            margin: 0.5rem 0;
            font-size: 1.25rem;
        }
        .gallery-card-meta p,
        .gallery-year {
            color: #888;
            font-size: 0.875rem;
        }
        .gallery-empty {
            padding: 0 3rem;
            color: #666;
        }
        @media (max-width: 768px) {
            .gallery-section .gallery-header,
            .gallery-track {
                padding-left: 1.5rem;
                padding-right: 1.5rem;
            }
            .gallery-card {
                width: 80vw;
            }
        }
    "#;

    html! {
        <section id="gallery" class="gallery-section" data-nav-section="gallery" ref={section_ref}>
            <style>{gallery_css}</style>
            <div class="gallery-header">
                <Reveal motion={Motion::FadeInUp}>
                    <h2>{ language.t("gallery.title") }</h2>
                    <p>{ language.t("gallery.description") }</p>
                </Reveal>
            </div>
            if items.is_empty() {
                <p class="gallery-empty">{ language.t("gallery.empty") }</p>
            }
            <div class="gallery-track" data-no-snap="true" ref={track_ref}>
                { cards }
            </div>
            <GalleryModal item={(*selected).clone()} {on_close} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glide_runs_at_constant_speed_to_zero() {
        let mut glide = AutoScroll::from_end(500.0).unwrap();
        assert_eq!(glide.step(1000.0), (500.0, FrameControl::Continue));
        assert_eq!(glide.step(1500.0), (400.0, FrameControl::Continue));
        assert_eq!(glide.step(4000.0), (0.0, FrameControl::Stop));
    }

    #[test]
    fn short_tracks_do_not_glide() {
        assert!(AutoScroll::from_end(2.0).is_none());
        assert!(AutoScroll::from_end(-10.0).is_none());
    }
}
