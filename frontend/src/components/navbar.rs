use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::components::scroll_snap::use_snap_navigator;
use crate::i18n::use_language;
use crate::utils::listener::Listener;
use crate::viewport::{active_nav_section, NavSection, NavSpan};

const NAV_SECTION_SELECTOR: &str = "[data-nav-section]";

/// Document-space extents of every element tagged with `data-nav-section`.
fn nav_spans(window: &Window) -> Vec<NavSpan> {
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all(NAV_SECTION_SELECTOR) else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| {
            let section = NavSection::from_attr(&el.get_attribute("data-nav-section")?)?;
            let rect = el.get_bounding_client_rect();
            Some(NavSpan {
                section,
                top: rect.top() + scroll_y,
                bottom: rect.bottom() + scroll_y,
            })
        })
        .collect()
}

fn measure_active(window: &Window) -> Option<NavSection> {
    let height = window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0);
    let center = window.scroll_y().unwrap_or(0.0) + height / 2.0;
    active_nav_section(center, &nav_spans(window))
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let language = use_language();
    let navigator = use_snap_navigator();
    let active = use_state(|| NavSection::Live);
    let menu_open = use_state(|| false);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                if let Some(window) = web_sys::window() {
                    let update = {
                        let window = window.clone();
                        let active = active.clone();
                        move |_: web_sys::Event| {
                            if let Some(section) = measure_active(&window) {
                                active.set(section);
                            }
                        }
                    };
                    for event in ["scroll", "resize"] {
                        match Listener::passive(window.as_ref(), event, update.clone()) {
                            Ok(listener) => listeners.push(listener),
                            Err(e) => log::warn!("Navbar tracking unavailable: {}", e),
                        }
                    }
                    if let Some(section) = measure_active(&window) {
                        active.set(section);
                    }
                }
                move || drop(listeners)
            },
            (),
        );
    }

    let links = NavSection::ALL.iter().map(|section| {
        let section = *section;
        let onclick = {
            let navigator = navigator.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                navigator.go_to(section.anchor());
            })
        };
        let class = classes!("nav-link", (*active == section).then_some("active"));
        html! {
            <a href={format!("#{}", section.anchor())} {class} {onclick}>
                { language.t(section.label_key()) }
            </a>
        }
    }).collect::<Html>();

    let toggle_language = {
        let language = language.clone();
        Callback::from(move |_: MouseEvent| language.toggle())
    };
    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let navbar_css = r#"
        .top-nav {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            height: 66px;
            z-index: 50;
            background: rgba(5, 5, 5, 0.8);
            backdrop-filter: blur(12px);
            border-bottom: 1px solid rgba(40, 40, 40, 0.5);
        }
        .top-nav .nav-inner {
            display: flex;
            align-items: center;
            justify-content: space-between;
            height: 100%;
            padding: 0 3rem;
        }
        .top-nav .nav-links {
            display: flex;
            flex: 1;
            justify-content: space-between;
            margin-right: 2rem;
        }
        .top-nav .nav-link {
            color: #fff;
            text-decoration: none;
            text-transform: uppercase;
            letter-spacing: 0.2em;
            font-size: 0.875rem;
            opacity: 0.6;
            transition: opacity 0.2s ease, transform 0.2s ease;
        }
        .top-nav .nav-link:hover {
            transform: translateY(-2px);
            opacity: 1;
        }
        .top-nav .nav-link.active {
            opacity: 1;
        }
        .top-nav .lang-toggle,
        .top-nav .menu-toggle {
            background: none;
            border: 1px solid rgba(255, 255, 255, 0.3);
            color: #fff;
            padding: 0.3rem 0.7rem;
            font-size: 0.75rem;
            letter-spacing: 0.15em;
            cursor: pointer;
        }
        .top-nav .menu-toggle {
            display: none;
        }
        @media (max-width: 768px) {
            .top-nav .nav-inner {
                padding: 0 1.5rem;
            }
            .top-nav .menu-toggle {
                display: block;
            }
            .top-nav .nav-links {
                display: none;
            }
            .top-nav .nav-links.open {
                display: flex;
                flex-direction: column;
                gap: 1.5rem;
                position: absolute;
                top: 66px;
                left: 0;
                right: 0;
                padding: 2rem 1.5rem;
                background: rgba(5, 5, 5, 0.95);
            }
        }
    "#;

    html! {
        <nav class="top-nav">
            <style>{navbar_css}</style>
            <div class="nav-inner">
                <button class="menu-toggle" onclick={toggle_menu} aria-expanded={menu_open.to_string()}>
                    {"☰"}
                </button>
                <div class={classes!("nav-links", menu_open.then_some("open"))}>
                    { links }
                </div>
                <button
                    class="lang-toggle"
                    onclick={toggle_language}
                    title={language.t("nav.switchLanguage").to_string()}
                >
                    { language.language.other().code().to_uppercase() }
                </button>
            </div>
        </nav>
    }
}
