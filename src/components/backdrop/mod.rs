//! Background canvas: matrix rain with a particle network on top.
//!
//! Simulation state lives in `termfolio_core::effects`; this component owns
//! the canvas, the frame interval and the drawing calls.

use leptos::{ev, html, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use termfolio_core::config::backdrop::{FONT_PX, FRAME_MS};
use termfolio_core::effects::{Glyph, MatrixRain, ParticleField};

use crate::app::AppContext;
use crate::components::hooks::IntervalSlot;
use crate::config::RAIN_OPACITY;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/backdrop/backdrop.module.css");

/// Trail fade painted over the previous frame.
const FADE_FILL: &str = "rgba(5, 5, 5, 0.05)";
/// Rain glyphs stay green in every theme.
const RAIN_COLOR: &str = "#00ff9d";
const PARTICLE_PX: f64 = 2.0;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn fit_to_viewport(canvas: &HtmlCanvasElement) -> (f64, f64) {
    let (width, height) = dom::viewport_size();
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    (width, height)
}

fn draw_rain(ctx: &CanvasRenderingContext2d, glyphs: &[Glyph], width: f64, height: f64) {
    ctx.set_fill_style_str(FADE_FILL);
    ctx.fill_rect(0.0, 0.0, width, height);

    ctx.set_fill_style_str(RAIN_COLOR);
    ctx.set_font(&format!("{FONT_PX}px monospace"));
    let mut buf = [0u8; 4];
    for glyph in glyphs {
        let _ = ctx.fill_text(glyph.ch.encode_utf8(&mut buf), glyph.x, glyph.y);
    }
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField, accent: &str) {
    ctx.set_fill_style_str(accent);
    for p in field.particles() {
        ctx.fill_rect(p.x, p.y, PARTICLE_PX, PARTICLE_PX);
    }

    ctx.set_stroke_style_str(accent);
    for link in field.links() {
        ctx.set_global_alpha(link.alpha);
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.stroke();
    }
    ctx.set_global_alpha(1.0);
}

/// Full-viewport canvas behind the page.
///
/// Turning the rain off hides the canvas and stops the frame loop entirely.
#[component]
pub fn Backdrop() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let canvas_ref = NodeRef::<html::Canvas>::new();

    let (width, height) = dom::viewport_size();
    let rain = StoredValue::new(MatrixRain::new(width));
    let field = StoredValue::new(ParticleField::new(width, height, &mut rand::thread_rng()));
    let frames = IntervalSlot::new();

    let draw_frame = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let Some(ctx2d) = context_2d(&canvas) else {
            return;
        };
        let (width, height) = (f64::from(canvas.width()), f64::from(canvas.height()));
        let accent = ctx.theme.get_untracked().accent_hex();

        let mut rng = rand::thread_rng();
        let glyphs = rain
            .try_update_value(|r| r.step(height, &mut rng))
            .unwrap_or_default();
        draw_rain(&ctx2d, &glyphs, width, height);

        field.update_value(|f| f.step());
        field.with_value(|f| draw_particles(&ctx2d, f, accent));
    };

    let refit = move |canvas: &HtmlCanvasElement| {
        let (width, height) = fit_to_viewport(canvas);
        rain.update_value(|r| r.resize(width));
        field.update_value(|f| f.resize(width, height));
    };

    Effect::new(move || {
        if let Some(canvas) = canvas_ref.get() {
            refit(&canvas);
        }
    });

    Effect::new(move || {
        if ctx.rain_enabled.get() {
            frames.start(FRAME_MS, draw_frame);
        } else {
            frames.stop();
        }
    });

    let _ = window_event_listener(ev::resize, move |_| {
        if let Some(canvas) = canvas_ref.get_untracked() {
            refit(&canvas);
        }
    });

    let opacity = move || {
        if ctx.rain_enabled.get() {
            RAIN_OPACITY
        } else {
            "0"
        }
    };

    view! {
        <canvas node_ref=canvas_ref class=css::canvas style:opacity=opacity></canvas>
    }
}
