use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Window;
use yew::prelude::*;

use crate::utils::frame_loop::FrameLoop;
use crate::utils::listener::Listener;
use crate::viewport::{progress_bar_scale, scroll_progress};

fn measure(window: &Window) -> f64 {
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    scroll_progress(
        window.scroll_y().unwrap_or(0.0),
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    )
}

/// Thin bar under the navbar showing how far down the page the reader is.
#[function_component(ScrollProgressBar)]
pub fn scroll_progress_bar() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                let pending: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
                if let Some(window) = web_sys::window() {
                    progress.set(measure(&window));

                    // at most one update per frame
                    let schedule = {
                        let window = window.clone();
                        let progress = progress.clone();
                        let pending = pending.clone();
                        move |_: web_sys::Event| {
                            let mut slot = pending.borrow_mut();
                            if slot.as_ref().map_or(false, FrameLoop::is_pending) {
                                return;
                            }
                            let window = window.clone();
                            let progress = progress.clone();
                            match FrameLoop::once(move |_| progress.set(measure(&window))) {
                                Ok(frame) => *slot = Some(frame),
                                Err(e) => log::debug!("progress update skipped: {}", e),
                            }
                        }
                    };
                    for event in ["scroll", "resize"] {
                        match Listener::passive(window.as_ref(), event, schedule.clone()) {
                            Ok(listener) => listeners.push(listener),
                            Err(e) => log::warn!("Progress bar unavailable: {}", e),
                        }
                    }
                }
                move || {
                    drop(listeners);
                    pending.borrow_mut().take();
                }
            },
            (),
        );
    }

    let style = format!("transform: scaleX({});", progress_bar_scale(*progress));
    html! {
        <div class="scroll-progress" aria-hidden="true">
            <style>{r#"
                .scroll-progress {
                    position: fixed;
                    top: 66px;
                    left: 0;
                    right: 0;
                    height: 2px;
                    z-index: 49;
                    pointer-events: none;
                }
                .scroll-progress .bar {
                    height: 100%;
                    background: #fff;
                    transform-origin: left center;
                }
            "#}</style>
            <div class="bar" {style}></div>
        </div>
    }
}
