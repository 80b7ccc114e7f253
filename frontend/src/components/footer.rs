use yew::prelude::*;

use crate::components::scroll_snap::use_snap_navigator;
use crate::config::get_contact_email;
use crate::i18n::use_language;
use crate::viewport::NavSection;

/// Site footer. Marked as a non-snap section so the last snap target stays
/// the about section.
#[function_component(Footer)]
pub fn footer() -> Html {
    let language = use_language();
    let navigator = use_snap_navigator();
    let email = get_contact_email();

    let links = NavSection::ALL
        .iter()
        .map(|section| {
            let anchor = section.anchor();
            let onclick = {
                let navigator = navigator.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    navigator.go_to(anchor);
                })
            };
            html! {
                <a href={format!("#{}", anchor)} {onclick}>{ language.t(section.label_key()) }</a>
            }
        })
        .collect::<Html>();

    html! {
        <section id="footer-section" class="site-footer" data-snap-skip="true">
            <style>{r#"
                .site-footer {
                    background: #171717;
                    padding: 3rem 2rem;
                }
                .site-footer .footer-grid {
                    max-width: 1152px;
                    margin: 0 auto 2rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 3rem;
                }
                .site-footer .brand {
                    font-size: 1.25rem;
                    font-weight: 600;
                    letter-spacing: 0.1em;
                    margin-bottom: 1rem;
                }
                .site-footer h3 {
                    font-size: 0.875rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #d4d4d4;
                    margin: 0 0 1rem;
                }
                .site-footer p,
                .site-footer a {
                    display: block;
                    font-size: 0.875rem;
                    color: #9ca3af;
                    text-decoration: none;
                    line-height: 1.7;
                }
                .site-footer a:hover {
                    color: #d4d4d4;
                }
                .site-footer .copyright {
                    border-top: 1px solid rgba(17, 24, 39, 0.5);
                    padding-top: 2rem;
                    text-align: center;
                    color: #6b7280;
                }
                @media (max-width: 768px) {
                    .site-footer .footer-grid {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                }
            "#}</style>
            <div class="footer-grid">
                <div>
                    <div class="brand">{"OBVIOUS LIVE"}</div>
                    <p>{ language.t("footer.description") }</p>
                </div>
                <div>
                    <h3>{ language.t("footer.navigation") }</h3>
                    <nav>{ links }</nav>
                </div>
                <div>
                    <h3>{ language.t("footer.contact") }</h3>
                    <a href={format!("mailto:{}", email)}>{ email }</a>
                </div>
            </div>
            <p class="copyright">{ language.t("footer.copyright") }</p>
        </section>
    }
}
