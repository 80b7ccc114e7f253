use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config::get_main_site_url;
use crate::contact_form::{ContactForm, Experience, Stage, Step, YesNo, TOTAL_STEPS};
use crate::i18n::use_language;
use crate::motion::Motion;

const STEP_TRANSITION_MS: u32 = 250;

#[derive(Properties, PartialEq)]
struct ChoiceProps {
    label: AttrValue,
    selected: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(Choice)]
fn choice(props: &ChoiceProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!("contact-choice", props.selected.then_some("selected"))}
            aria-pressed={props.selected.to_string()}
            onclick={props.onclick.clone()}
        >
            { props.label.clone() }
        </button>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let language = use_language();
    let stage = use_state(|| Stage::Intro);
    let form = use_state(ContactForm::default);
    let transitioning = use_state(|| false);

    // Stage changes wait for the fade-out
    let go = {
        let stage = stage.clone();
        let transitioning = transitioning.clone();
        Callback::from(move |next: Stage| {
            if *transitioning {
                return;
            }
            transitioning.set(true);
            let stage = stage.clone();
            let transitioning = transitioning.clone();
            spawn_local(async move {
                TimeoutFuture::new(STEP_TRANSITION_MS).await;
                stage.set(next);
                transitioning.set(false);
            });
        })
    };

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_input = |callback: Callback<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            callback.emit(input.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let stage = stage.clone();
        let go = go.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Stage::Asking(step) = *stage else {
                return;
            };
            if !form.can_proceed(step) {
                return;
            }
            if step == Step::Lora {
                if !form.is_complete() {
                    log::warn!("Contact form submitted with missing answers");
                    return;
                }
                match serde_json::to_string(&*form) {
                    Ok(body) => log::info!("Contact request received: {}", body),
                    Err(e) => log::error!("Failed to serialize contact request: {}", e),
                }
                go.emit(Stage::Submitted);
            } else {
                go.emit(stage.next());
            }
        })
    };

    let back = {
        let stage = stage.clone();
        let go = go.clone();
        Callback::from(move |_: MouseEvent| go.emit(stage.back()))
    };

    let field = |step: Step| -> Html {
        match step {
            Step::Name => html! {
                <input
                    type="text"
                    value={form.name.clone()}
                    placeholder={language.t("contact.yourName").to_string()}
                    oninput={on_input(update(|f, v| f.name = v))}
                />
            },
            Step::Contact => html! {
                <input
                    type="email"
                    value={form.contact.clone()}
                    placeholder={language.t("contact.emailPlaceholder").to_string()}
                    oninput={on_input(update(|f, v| f.contact = v))}
                />
            },
            Step::EventDate => html! {
                <input
                    type="text"
                    value={form.event_date.clone()}
                    placeholder={language.t("contact.datePlaceholder").to_string()}
                    oninput={on_input(update(|f, v| f.event_date = v))}
                />
            },
            Step::Experience => {
                let pick = |choice: Experience| {
                    let form = form.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*form).clone();
                        next.toggle_experience(choice);
                        form.set(next);
                    })
                };
                html! {
                    <div class="contact-choices">
                        <Choice
                            label={language.t("contact.text").to_string()}
                            selected={form.experience == Some(Experience::Text)}
                            onclick={pick(Experience::Text)}
                        />
                        <Choice
                            label={language.t("contact.speech").to_string()}
                            selected={form.experience == Some(Experience::Speech)}
                            onclick={pick(Experience::Speech)}
                        />
                    </div>
                }
            }
            Step::Concept => {
                let oninput = update(|f, v| f.concept = v).reform(|e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    area.value()
                });
                html! {
                    <textarea
                        rows="4"
                        value={form.concept.clone()}
                        placeholder={language.t("contact.describeConcept").to_string()}
                        {oninput}
                    />
                }
            }
            Step::Lora => {
                let pick = |choice: YesNo| {
                    let form = form.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*form).clone();
                        next.toggle_lora(choice);
                        form.set(next);
                    })
                };
                html! {
                    <div class="contact-choices">
                        <Choice
                            label={language.t("contact.yes").to_string()}
                            selected={form.lora == Some(YesNo::Yes)}
                            onclick={pick(YesNo::Yes)}
                        />
                        <Choice
                            label={language.t("contact.no").to_string()}
                            selected={form.lora == Some(YesNo::No)}
                            onclick={pick(YesNo::No)}
                        />
                    </div>
                }
            }
        }
    };

    let body = match *stage {
        Stage::Intro => {
            let start = {
                let go = go.clone();
                Callback::from(move |_: MouseEvent| go.emit(Stage::Intro.next()))
            };
            html! {
                <div class="contact-intro">
                    <p>{ language.t("contact.wantToDesign") }</p>
                    <button type="button" class="contact-primary" onclick={start}>
                        { language.t("contact.start") }
                    </button>
                </div>
            }
        }
        Stage::Asking(step) => {
            let last = step == Step::Lora;
            html! {
                <form class="contact-step" {onsubmit}>
                    <span class="contact-counter">
                        { format!(
                            "{} {} {} {}",
                            language.t("contact.step"),
                            step.number(),
                            language.t("contact.of"),
                            TOTAL_STEPS
                        ) }
                    </span>
                    <label>{ language.t(step.question_key()) }</label>
                    { field(step) }
                    <div class="contact-actions">
                        <button type="button" class="contact-secondary" onclick={back}>
                            { language.t("contact.back") }
                        </button>
                        <button type="submit" class="contact-primary" disabled={!form.can_proceed(step)}>
                            { language.t(if last { "contact.submit" } else { "contact.next" }) }
                        </button>
                    </div>
                </form>
            }
        }
        Stage::Submitted => html! {
            <div class="contact-done">
                <h3>{ language.t("contact.thankYou") }</h3>
                <p>{ language.t("contact.received") }</p>
                <a class="contact-primary" href={get_main_site_url()} target="_blank" rel="noopener noreferrer">
                    { language.t("contact.visitWebsite") }
                </a>
            </div>
        },
    };

    let contact_css = r#"
        .contact-section {
            height: 100svh;
            display: flex;
            align-items: center;
            padding: 2.5rem 3rem;
            scroll-margin-top: 66px;
            overflow: hidden;
        }
        .contact-section .contact-inner {
            width: 100%;
            max-width: 720px;
            margin: 0 auto;
        }
        .contact-section h2 {
            font-size: 3rem;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            margin: 0 0 0.5rem;
        }
        .contact-section .contact-subtitle {
            color: #aaa;
            margin-bottom: 3rem;
        }
        .contact-body {
            transition: opacity 0.25s ease, transform 0.25s ease;
        }
        .contact-body.leaving {
            opacity: 0;
            transform: translateY(12px);
        }
        .contact-step {
            display: flex;
            flex-direction: column;
            gap: 1.25rem;
        }
        .contact-step label {
            font-size: 1.5rem;
        }
        .contact-step input,
        .contact-step textarea {
            background: transparent;
            border: none;
            border-bottom: 1px solid #444;
            color: #fff;
            font-size: 1.125rem;
            padding: 0.75rem 0;
            outline: none;
        }
        .contact-step input:focus,
        .contact-step textarea:focus {
            border-bottom-color: #fff;
        }
        .contact-counter {
            color: #666;
            font-size: 0.75rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
        }
        .contact-choices,
        .contact-actions {
            display: flex;
            gap: 1rem;
        }
        .contact-actions {
            justify-content: space-between;
            margin-top: 1rem;
        }
        .contact-choice,
        .contact-secondary,
        .contact-primary {
            background: transparent;
            border: 1px solid #444;
            color: #fff;
            padding: 0.75rem 1.75rem;
            letter-spacing: 0.15em;
            text-transform: uppercase;
            font-size: 0.8rem;
            cursor: pointer;
            text-decoration: none;
        }
        .contact-choice.selected,
        .contact-primary {
            background: #fff;
            color: #000;
            border-color: #fff;
        }
        .contact-primary:disabled {
            opacity: 0.3;
            cursor: not-allowed;
        }
        @media (max-width: 768px) {
            .contact-section {
                padding: 2rem 1.5rem;
            }
            .contact-section h2 {
                font-size: 2rem;
            }
        }
    "#;

    html! {
        <section id="contact" class="contact-section" data-nav-section="contact">
            <style>{contact_css}</style>
            <div class="contact-inner">
                <Reveal motion={Motion::SlideInLeft}>
                    <h2>{ language.t("contact.title") }</h2>
                    <p class="contact-subtitle">{ language.t("contact.subtitle") }</p>
                </Reveal>
                <div class={classes!("contact-body", transitioning.then_some("leaving"))}>
                    { body }
                </div>
            </div>
        </section>
    }
}
