use web_sys::Element;
use yew::prelude::*;

use crate::motion::{Motion, RevealState};
use crate::utils::dom;
use crate::utils::visibility::VisibilityWatch;

const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub motion: Motion,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays `motion` the first time its content scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state(|| RevealState::Hidden);
    let reduced_motion = use_state(dom::reduced_motion);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let watch = node.cast::<Element>().and_then(|element| {
                    let visible = state.clone();
                    match VisibilityWatch::once(&element, REVEAL_THRESHOLD, move || {
                        visible.set(RevealState::Visible)
                    }) {
                        Ok(watch) => Some(watch),
                        Err(e) => {
                            log::debug!("IntersectionObserver unavailable, revealing now: {}", e);
                            state.set(RevealState::Visible);
                            None
                        }
                    }
                });
                move || drop(watch)
            },
            (),
        );
    }

    let style = props.motion.style(*state, props.delay_ms, *reduced_motion);
    html! {
        <div ref={node} class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}
