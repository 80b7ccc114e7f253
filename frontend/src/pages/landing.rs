use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::components::footer::Footer;
use crate::components::gallery::GallerySection;
use crate::components::glitch_lines::GlitchLines;
use crate::components::navbar::Navbar;
use crate::components::progress_bar::ScrollProgressBar;
use crate::components::reveal::Reveal;
use crate::components::scroll_snap::use_snap_navigator;
use crate::config::{video_url, VideoKey};
use crate::i18n::use_language;
use crate::motion::{Motion, STAGGER_MS};
use crate::utils::listener::Listener;

/// Overlay darkening of the hero video after `scroll_y` pixels.
fn hero_dim(scroll_y: f64) -> f64 {
    (scroll_y / 500.0).min(1.0) * 0.6
}

#[function_component(Hero)]
fn hero() -> Html {
    let language = use_language();
    let navigator = use_snap_navigator();
    let dim_opacity = use_state(|| 0.0);

    // Darken the hero as the page scrolls away from it
    {
        let dim_opacity = dim_opacity.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    dim_opacity.set(hero_dim(window.scroll_y().unwrap_or(0.0)));
                    let handler = {
                        let window = window.clone();
                        let dim_opacity = dim_opacity.clone();
                        move |_| dim_opacity.set(hero_dim(window.scroll_y().unwrap_or(0.0)))
                    };
                    match Listener::passive(window.as_ref(), "scroll", handler) {
                        Ok(listener) => Some(listener),
                        Err(e) => {
                            log::warn!("Hero dimming disabled: {}", e);
                            None
                        }
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }

    let discover = Callback::from(move |_: MouseEvent| navigator.go_to("technology"));

    html! {
        <section id="hero" class="hero" data-nav-section="live">
            <video
                class="hero-video"
                src={video_url(VideoKey::Hero)}
                autoplay={true}
                muted={true}
                loop={true}
                playsinline={true}
            ></video>
            <div class="hero-overlay" style={format!("opacity: {};", *dim_opacity)}></div>
            <div class="hero-content">
                <Reveal motion={Motion::FadeIn}>
                    <h1 class="hero-title">{ language.t("hero.title") }</h1>
                </Reveal>
                <Reveal motion={Motion::FadeInUp} delay_ms={STAGGER_MS}>
                    <p class="hero-description">{ language.t("hero.description") }</p>
                </Reveal>
                <Reveal motion={Motion::FadeInUp} delay_ms={STAGGER_MS * 2}>
                    <button class="outline-button" onclick={discover}>
                        { language.t("hero.discover") }
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(TechnologySection)]
fn technology_section() -> Html {
    let language = use_language();
    let navigator = use_snap_navigator();

    let cards = [
        ("system", "tech.system", "tech.realTime"),
        ("moderation", "tech.moderation", "tech.safety"),
        ("style", "tech.style", "tech.aesthetics"),
    ];

    html! {
        <section id="technology" class="panel" data-nav-section="technology">
            <Reveal motion={Motion::FadeInUp}>
                <h2>{ language.t("tech.title") }</h2>
                <p class="lead">{ language.t("tech.description") }</p>
            </Reveal>
            <div class="card-row">
                { for cards.iter().enumerate().map(|(i, (target, title, caption))| {
                    let navigator = navigator.clone();
                    let target = *target;
                    let onclick = Callback::from(move |_: MouseEvent| navigator.go_to(target));
                    html! {
                        <Reveal motion={Motion::ScaleIn} delay_ms={i as u32 * STAGGER_MS}>
                            <button class="tech-card" {onclick}>
                                <span class="tech-caption">{ language.t(caption) }</span>
                                <h3>{ language.t(title) }</h3>
                            </button>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(SystemSummary)]
fn system_summary() -> Html {
    let language = use_language();
    let navigator = use_snap_navigator();

    let modes = [
        ("speech-detail", "system.mode01", "system.speechToVideo", "system.speechDescription", Motion::SlideInLeft),
        ("text-detail", "system.mode02", "system.textToVideo", "system.textDescription", Motion::SlideInRight),
    ];

    html! {
        <section id="system" class="panel" data-nav-section="technology">
            <Reveal motion={Motion::FadeInUp}>
                <h2>{ language.t("system.title") }</h2>
            </Reveal>
            <div class="mode-grid">
                { for modes.iter().map(|(target, mode, title, description, motion)| {
                    let navigator = navigator.clone();
                    let target = *target;
                    let onclick = Callback::from(move |_: MouseEvent| navigator.go_to(target));
                    html! {
                        <Reveal motion={*motion}>
                            <button class="mode-card" {onclick}>
                                <span class="tech-caption">{ language.t(mode) }</span>
                                <h3>{ language.t(title) }</h3>
                                <p>{ language.t(description) }</p>
                            </button>
                        </Reveal>
                    }
                }) }
            </div>
        </section>
    }
}

#[function_component(SpeechDetails)]
fn speech_details() -> Html {
    let language = use_language();
    html! {
        <section id="speech-detail" class="panel split" data-nav-section="technology">
            <Reveal motion={Motion::SlideInLeft} class="split-text">
                <h2>{ language.t("speech.title") }</h2>
                <p>{ language.t("speech.para1") }</p>
                <p>{ language.t("speech.para2") }</p>
                <ul>
                    <li>{ language.t("speech.bullet1") }</li>
                    <li>{ language.t("speech.bullet2") }</li>
                    <li>{ language.t("speech.bullet3") }</li>
                </ul>
            </Reveal>
            <Reveal motion={Motion::ImageZoom} class="split-media">
                <video src={video_url(VideoKey::Speech)} autoplay={true} muted={true} loop={true} playsinline={true}></video>
            </Reveal>
        </section>
    }
}

#[function_component(TextDetails)]
fn text_details() -> Html {
    let language = use_language();
    html! {
        <section id="text-detail" class="panel split reverse" data-nav-section="technology">
            <Reveal motion={Motion::ImageZoom} class="split-media">
                <video src={video_url(VideoKey::Text)} autoplay={true} muted={true} loop={true} playsinline={true}></video>
            </Reveal>
            <Reveal motion={Motion::SlideInRight} class="split-text">
                <h2>{ language.t("text.title") }</h2>
                <p>{ language.t("text.para1") }</p>
                <p>{ language.t("text.para2") }</p>
            </Reveal>
        </section>
    }
}

#[function_component(ModerationDetails)]
fn moderation_details() -> Html {
    let language = use_language();
    let tags = ["moderation.tag1", "moderation.tag2", "moderation.tag3"];
    html! {
        <section id="moderation" class="panel" data-nav-section="technology">
            <Reveal motion={Motion::FadeInUp}>
                <span class="tech-caption">{ language.t("moderation.subtitle") }</span>
                <h2>{ language.t("moderation.title") }</h2>
            </Reveal>
            <Reveal motion={Motion::ClipReveal} delay_ms={STAGGER_MS}>
                <h3>{ language.t("moderation.heading") }</h3>
                <p class="lead">{ language.t("moderation.description") }</p>
            </Reveal>
            <div class="tag-row">
                { for tags.iter().enumerate().map(|(i, tag)| html! {
                    <Reveal motion={Motion::FadeIn} delay_ms={(i as u32 + 2) * STAGGER_MS}>
                        <span class="tag">{ language.t(tag) }</span>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(StyleDetails)]
fn style_details() -> Html {
    let language = use_language();
    let styles = [
        ("style.style1", "style.style1Desc"),
        ("style.style2", "style.style2Desc"),
        ("style.style3", "style.style3Desc"),
    ];
    html! {
        <section id="style" class="panel" data-nav-section="technology">
            <Reveal motion={Motion::FadeInUp}>
                <span class="tech-caption">{ language.t("style.aesthetics") }</span>
                <h2>{ language.t("style.title") }</h2>
                <p class="lead">{ language.t("style.description") }</p>
            </Reveal>
            <div class="card-row">
                { for styles.iter().enumerate().map(|(i, (title, description))| html! {
                    <Reveal motion={Motion::FadeInUp} delay_ms={i as u32 * STAGGER_MS}>
                        <div class="style-card">
                            <h3>{ language.t(title) }</h3>
                            <p>{ language.t(description) }</p>
                        </div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    let language = use_language();
    html! {
        <section id="about" class="panel" data-nav-section="about">
            <Reveal motion={Motion::FadeInUp}>
                <span class="tech-caption">{ language.t("about.title") }</span>
                <h2>{ language.t("about.aboutUs") }</h2>
            </Reveal>
            <Reveal motion={Motion::FadeIn} delay_ms={STAGGER_MS}>
                <p class="lead">{ language.t("about.para1") }</p>
                <p class="lead">{ language.t("about.para2") }</p>
            </Reveal>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_language();
    let navigator = use_snap_navigator();

    // Start at the top on first mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Translations change section heights
    {
        use_effect_with_deps(
            move |_| {
                navigator.refresh();
                || ()
            },
            language.language,
        );
    }

    let landing_css = r#"
        html {
            scroll-snap-type: y proximity;
        }
        body {
            margin: 0;
            background: #000;
            color: #fff;
            font-family: "Helvetica Neue", Arial, sans-serif;
        }
        .hero {
            position: relative;
            height: 100svh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            scroll-snap-align: start;
        }
        .hero-video {
            position: absolute;
            inset: 0;
            width: 100%;
            height: 100%;
            object-fit: cover;
        }
        .hero-overlay {
            position: absolute;
            inset: 0;
            background: #000;
            pointer-events: none;
        }
        .hero-content {
            position: relative;
            z-index: 2;
            text-align: center;
            padding: 0 2rem;
        }
        .hero-title {
            font-size: 8rem;
            letter-spacing: 0.3em;
            margin: 0;
        }
        .hero-description {
            max-width: 640px;
            margin: 1.5rem auto 2.5rem;
            color: #ddd;
            font-size: 1.125rem;
        }
        .outline-button {
            background: transparent;
            border: 1px solid #fff;
            color: #fff;
            padding: 0.9rem 2.5rem;
            text-transform: uppercase;
            letter-spacing: 0.2em;
            cursor: pointer;
            transition: background 0.3s ease, color 0.3s ease;
        }
        .outline-button:hover {
            background: #fff;
            color: #000;
        }
        .panel {
            min-height: 100vh;
            display: flex;
            flex-direction: column;
            justify-content: center;
            padding: 4rem 3rem;
            scroll-snap-align: start;
            scroll-margin-top: 66px;
            box-sizing: border-box;
        }
        .panel h2 {
            font-size: 3rem;
            text-transform: uppercase;
            letter-spacing: 0.1em;
            margin: 0.5rem 0 1rem;
        }
        .panel .lead {
            max-width: 720px;
            color: #aaa;
            font-size: 1.125rem;
            line-height: 1.7;
        }
        .tech-caption {
            color: #777;
            font-size: 0.75rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
        }
        .card-row,
        .mode-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
            margin-top: 3rem;
        }
        .mode-grid {
            grid-template-columns: repeat(2, 1fr);
        }
        .tech-card,
        .mode-card,
        .style-card {
            width: 100%;
            min-height: 220px;
            background: #0a0a0a;
            border: 1px solid #1f1f1f;
            color: #fff;
            padding: 2rem;
            text-align: left;
            box-sizing: border-box;
        }
        .tech-card,
        .mode-card {
            cursor: pointer;
            transition: border-color 0.3s ease;
        }
        .tech-card:hover,
        .mode-card:hover {
            border-color: #555;
        }
        .split {
            flex-direction: row;
            align-items: center;
            gap: 4rem;
        }
        .split-text,
        .split-media {
            flex: 1;
        }
        .split-media video {
            width: 100%;
            display: block;
        }
        .tag-row {
            display: flex;
            gap: 1rem;
            flex-wrap: wrap;
            margin-top: 2rem;
        }
        .tag {
            border: 1px solid #444;
            padding: 0.5rem 1rem;
            font-size: 0.8rem;
            letter-spacing: 0.1em;
            text-transform: uppercase;
        }
        @media (prefers-reduced-motion: reduce) {
            html {
                scroll-behavior: auto;
            }
        }
        @media (max-width: 768px) {
            .hero-title {
                font-size: 4rem;
            }
            .panel {
                padding: 3rem 1.5rem;
            }
            .panel h2 {
                font-size: 2rem;
            }
            .card-row,
            .mode-grid {
                grid-template-columns: 1fr;
            }
            .split,
            .split.reverse {
                flex-direction: column;
                gap: 2rem;
            }
        }
    "#;

    html! {
        <div class="landing-page">
            <style>{landing_css}</style>
            <Navbar />
            <ScrollProgressBar />
            <GlitchLines />
            <main>
                <Hero />
                <TechnologySection />
                <SystemSummary />
                <SpeechDetails />
                <TextDetails />
                <ModerationDetails />
                <StyleDetails />
                <GallerySection />
                <ContactSection />
                <AboutSection />
                <Footer />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_dims_up_to_sixty_percent() {
        assert_eq!(hero_dim(0.0), 0.0);
        assert_eq!(hero_dim(250.0), 0.3);
        assert_eq!(hero_dim(5000.0), 0.6);
    }
}
