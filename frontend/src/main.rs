use yew::prelude::*;

mod components;
mod config;
mod contact_form;
mod data;
mod effects;
mod error;
mod i18n;
mod motion;
mod pages;
mod scroll;
mod utils;
mod viewport;

use components::scroll_snap::SnapProvider;
use effects::EffectRegistry;
use i18n::LanguageProvider;
use pages::landing::Landing;

#[function_component(App)]
fn app() -> Html {
    let effects = use_state(EffectRegistry::default);

    html! {
        <ContextProvider<EffectRegistry> context={(*effects).clone()}>
            <LanguageProvider>
                <SnapProvider>
                    <Landing />
                </SnapProvider>
            </LanguageProvider>
        </ContextProvider<EffectRegistry>>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("starting portal site");
    yew::Renderer::<App>::new().render();
}
