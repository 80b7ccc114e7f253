use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::SnapConfig;
use crate::scroll::SnapRuntime;
use crate::utils::dom;

/// Handle for components that want to move the page to a section. Routes
/// through the snap controller when it is installed and falls back to
/// native `scrollIntoView` otherwise.
#[derive(Clone, Default)]
pub struct SnapNavigator {
    runtime: Rc<RefCell<Option<SnapRuntime>>>,
}

impl PartialEq for SnapNavigator {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.runtime, &other.runtime)
    }
}

impl SnapNavigator {
    pub fn go_to(&self, id: &str) {
        let handled = self
            .runtime
            .borrow()
            .as_ref()
            .map_or(false, |runtime| runtime.navigate_to(id));
        if handled {
            return;
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            dom::scroll_into_view(&document, id, !dom::reduced_motion());
        }
    }

    /// Re-reads section offsets after the layout changed under us.
    pub fn refresh(&self) {
        if let Some(runtime) = self.runtime.borrow().as_ref() {
            runtime.refresh();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct SnapProviderProps {
    #[prop_or_default]
    pub config: Option<SnapConfig>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SnapProvider)]
pub fn snap_provider(props: &SnapProviderProps) -> Html {
    let navigator = use_state(SnapNavigator::default);

    {
        let navigator = (*navigator).clone();
        let config = props.config.clone().unwrap_or_default();
        use_effect_with_deps(
            move |_| {
                match SnapRuntime::install(config) {
                    Ok(runtime) => *navigator.runtime.borrow_mut() = Some(runtime),
                    Err(e) => log::warn!("Scroll snap disabled: {}", e),
                }
                move || {
                    navigator.runtime.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<SnapNavigator> context={(*navigator).clone()}>
            { for props.children.iter() }
        </ContextProvider<SnapNavigator>>
    }
}

#[hook]
pub fn use_snap_navigator() -> SnapNavigator {
    use_context::<SnapNavigator>().unwrap_or_default()
}
