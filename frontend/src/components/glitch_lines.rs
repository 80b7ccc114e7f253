use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::effects::glitch::{self, GlitchPhase, Point, CANVAS_WIDTH, LINE_THICKNESS};
use crate::effects::EffectRegistry;
use crate::error::{Result, SiteError};
use crate::scroll::FrameControl;
use crate::utils::dom;
use crate::utils::frame_loop::FrameLoop;

pub const EFFECT_NAME: &str = "glitch-lines";
const FRAME_MS: f64 = 1000.0 / 60.0;
const SPLIT_COLORS: [&str; 2] = ["rgb(255, 0, 128)", "rgb(0, 255, 255)"];

/// Ids whose presence on screen hides the lines.
const OCCLUDERS: [&str; 2] = ["hero", "footer-section"];

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")?
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(SiteError::CanvasContext)
}

fn occluded(document: &Document, viewport_height: f64) -> bool {
    OCCLUDERS.iter().any(|id| {
        document.get_element_by_id(id).map_or(false, |el| {
            let rect = el.get_bounding_client_rect();
            glitch::occludes(rect.top(), rect.bottom(), viewport_height)
        })
    })
}

fn stroke(ctx: &CanvasRenderingContext2d, points: &[Point], dx: f64, color: &str, alpha: f64) {
    let Some(first) = points.first() else {
        return;
    };
    ctx.save();
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(LINE_THICKNESS);
    ctx.set_global_alpha(alpha);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.begin_path();
    ctx.move_to(first.x + dx, first.y);
    for point in &points[1..] {
        ctx.line_to(point.x + dx, point.y);
    }
    ctx.stroke();
    ctx.restore();
}

struct Painter {
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    started_at: Option<f64>,
    height: f64,
}

impl Painter {
    fn resize(&mut self) {
        let height = self
            .window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(800.0);
        if height == self.height {
            return;
        }
        let dpr = self.window.device_pixel_ratio().max(1.0);
        self.canvas.set_width((CANVAS_WIDTH * dpr) as u32);
        self.canvas.set_height((height * dpr) as u32);
        // resizing resets the transform
        let _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.height = height;
    }

    fn paint(&mut self, timestamp: f64) -> FrameControl {
        self.resize();
        self.ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH, self.height);
        if occluded(&self.document, self.height) {
            return FrameControl::Continue;
        }

        let elapsed = timestamp - *self.started_at.get_or_insert(timestamp);
        let phase = GlitchPhase::at(elapsed);
        let scroll_top = self.window.scroll_y().unwrap_or(0.0);
        let bases = glitch::line_bases(CANVAS_WIDTH);
        let right = glitch::zigzag(elapsed / FRAME_MS, scroll_top, self.height, self.height, bases[0]);

        for base in bases {
            for line in &right {
                let points = glitch::shifted(line, base - bases[0]);
                if phase.is_active() {
                    stroke(&self.ctx, &points, -phase.offset_x, SPLIT_COLORS[0], phase.intensity);
                    stroke(&self.ctx, &points, phase.offset_x, SPLIT_COLORS[1], phase.intensity);
                }
                stroke(&self.ctx, &points, 0.0, "#ffffff", 0.95);
            }
        }
        FrameControl::Continue
    }
}

/// Three glitching zigzag lines fixed to the right edge of the screen.
/// Only one instance animates at a time.
#[function_component(GlitchLines)]
pub fn glitch_lines() -> Html {
    let canvas_ref = use_node_ref();
    let registry = use_context::<EffectRegistry>().unwrap_or_default();
    let reduced_motion = use_state(dom::reduced_motion);
    let enabled = use_state(|| true);

    {
        let canvas_ref = canvas_ref.clone();
        let enabled = enabled.clone();
        let reduced_motion = *reduced_motion;
        use_effect_with_deps(
            move |_| {
                let mut running = None;
                if !reduced_motion {
                    match registry.claim(EFFECT_NAME) {
                        Some(claim) => match start(&canvas_ref) {
                            Ok(frames) => {
                                log::debug!("effect `{}` started", claim.name());
                                running = Some((claim, frames));
                            }
                            Err(e) => {
                                log::warn!("Glitch lines disabled: {}", e);
                                enabled.set(false);
                            }
                        },
                        None => enabled.set(false),
                    }
                }
                move || drop(running)
            },
            (),
        );
    }

    if *reduced_motion || !*enabled {
        return html! {};
    }

    html! {
        <div class="glitch-lines" aria-hidden="true">
            <style>{r#"
                .glitch-lines {
                    position: fixed;
                    top: 0;
                    right: 0;
                    width: 140px;
                    height: 100svh;
                    pointer-events: none;
                    z-index: 40;
                }
                .glitch-lines canvas {
                    display: block;
                    width: 100%;
                    height: 100%;
                    background: transparent;
                }
            "#}</style>
            <canvas ref={canvas_ref} width="140" height="800"></canvas>
        </div>
    }
}

fn start(canvas_ref: &NodeRef) -> Result<FrameLoop> {
    let window = web_sys::window().ok_or(SiteError::NoWindow)?;
    let document = window.document().ok_or(SiteError::NoDocument)?;
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| SiteError::MissingElement("glitch canvas".to_string()))?;
    let ctx = context_2d(&canvas)?;
    let mut painter = Painter {
        window,
        document,
        canvas,
        ctx,
        started_at: None,
        height: 0.0,
    };
    FrameLoop::start(move |timestamp| painter.paint(timestamp))
}
