//! Canvas-based walking character strip.
//! Uses web_sys for Canvas 2D drawing.

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const W: u32 = 640;
const H: u32 = 96;

/// Animation frame interval. With STEP_PX this gives roughly a ten
/// second walk across the strip.
const FRAME_MS: u32 = 50;
const STEP_PX: f64 = 3.5;

pub fn Character() -> Element {
    let mut frame_count = use_signal(|| 0u32);

    // Walk tick loop
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(FRAME_MS).await;
            let next = frame_count().wrapping_add(1);
            frame_count.set(next);
        }
    });

    // Redraw on every tick
    use_effect(move || {
        draw_walker("walker-canvas", frame_count());
    });

    rsx! {
        div { class: "character-strip",
            canvas {
                id: "walker-canvas",
                width: "{W}",
                height: "{H}",
                style: "width: {W}px; height: {H}px;",
            }
        }
    }
}

fn draw_walker(canvas_id: &str, frame: u32) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    let canvas: HtmlCanvasElement = match document.get_element_by_id(canvas_id) {
        Some(el) => match el.dyn_into() {
            Ok(c) => c,
            Err(_) => return,
        },
        None => return,
    };
    let ctx: CanvasRenderingContext2d = match canvas.get_context("2d").ok().flatten() {
        Some(c) => match c.dyn_into() {
            Ok(c) => c,
            Err(_) => return,
        },
        None => return,
    };

    // Sky
    ctx.set_fill_style_str("#eff6ff");
    ctx.fill_rect(0.0, 0.0, W as f64, H as f64);

    // Ground line
    ctx.set_stroke_style_str("#bfdbfe");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    ctx.move_to(0.0, H as f64 - 8.0);
    ctx.line_to(W as f64, H as f64 - 8.0);
    ctx.stroke();

    // Enter off-screen left, exit right, wrap around
    let span = W as f64 + 60.0;
    let cx = (frame as f64 * STEP_PX) % span - 30.0;
    let cy = H as f64 - 36.0;

    // Legs, alternating each frame
    let stride = if frame % 2 == 0 { 8.0 } else { -8.0 };
    ctx.set_stroke_style_str("#b45309");
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.move_to(cx, cy + 10.0);
    ctx.line_to(cx - stride, cy + 26.0);
    ctx.move_to(cx, cy + 10.0);
    ctx.line_to(cx + stride, cy + 26.0);
    ctx.stroke();

    // Body (circle)
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, 16.0, 0.0, std::f64::consts::PI * 2.0);
    ctx.set_fill_style_str("#f59e0b");
    ctx.fill();

    // Eyes
    ctx.set_fill_style_str("#1e293b");
    ctx.fill_rect(cx - 6.0, cy - 5.0, 4.0, 4.0);
    ctx.fill_rect(cx + 2.0, cy - 5.0, 4.0, 4.0);

    // Smile
    ctx.set_stroke_style_str("#1e293b");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    let _ = ctx.arc(cx, cy + 2.0, 8.0, 0.2 * std::f64::consts::PI, 0.8 * std::f64::consts::PI);
    ctx.stroke();
}
