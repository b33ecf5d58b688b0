// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! A small end-to-end exercise of the SDL2 backend.
//!
//! Draws a fake window frame with the four icons and echoes typed text
//! (including clipboard pastes via ctrl+V). Run with a path to a TTF font
//! and an optional UI scale:
//!
//! ```sh
//! cargo run --example demo -- /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf 1.5
//! ```

use muon_core::kurbo::{Point, Rect};
use muon_core::peniko::Color;
use muon_core::{Context, IconId, Key};
use muon_sdl2::Backend;
use sdl2::event::Event;
use sdl2::keyboard::Scancode;

const PANEL: Color = Color::from_rgb8(0x32, 0x32, 0x32);
const TITLE_BAR: Color = Color::from_rgb8(0x27, 0x27, 0x2A);
const TEXT: Color = Color::from_rgb8(0xF2, 0xF2, 0xF2);
const ACCENT: Color = Color::from_rgb8(0x3B, 0x7E, 0xE4);

fn main() {
    let _ = muon_core::try_init_tracing();

    let mut args = std::env::args().skip(1);
    let font_path = args.next().expect("usage: demo <font.ttf> [scale]");
    let scale: f64 = args.next().map_or(1.0, |s| s.parse().expect("bad scale"));

    let sdl = sdl2::init().unwrap();
    let video = sdl.video().unwrap();
    let window = video
        .window("muon demo", 800, 600)
        .position_centered()
        .build()
        .unwrap();
    let mut canvas = window.into_canvas().build().unwrap();
    let ttf = sdl2::ttf::init().unwrap();
    let font = ttf.load_font(&font_path, (16.0 * scale) as u16).unwrap();

    let mut ctx = Context::new();
    let backend = Backend::new(&mut ctx, &canvas, &font).unwrap();
    ctx.set_scale(scale);
    // Pretend a textbox is focused so text input (and IME) comes up.
    ctx.set_textbox_focus(true);

    let mut typed = String::new();
    let mut events = sdl.event_pump().unwrap();

    'running: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => break 'running,
                _ => backend.process_event(&mut ctx, &event),
            }
        }

        typed.push_str(ctx.pending_text());
        if ctx.was_key_pressed(Key::Backspace) {
            typed.pop();
        }

        emit_ui(&mut ctx, &typed);

        canvas.set_draw_color(sdl2::pixels::Color::RGB(0x1D, 0x1D, 0x1D));
        canvas.clear();
        backend.render_commands(&mut ctx, &mut canvas).unwrap();
        canvas.present();
        ctx.end_frame();
    }

    backend.shutdown(&mut ctx);
}

/// Emit the draw commands a widget pass would produce.
fn emit_ui(ctx: &mut Context<muon_sdl2::FontData<'_, '_>>, typed: &str) {
    let panel = Rect::new(40.0, 40.0, 460.0, 300.0);
    let title_height = ctx.style.title_height;
    let padding = ctx.style.padding;
    let line = ctx.text_height().max(16.0) + ctx.style.spacing;

    ctx.set_clip(panel);
    ctx.draw_rect(panel, PANEL);

    // Title bar with a close box.
    let title_bar = Rect::new(panel.x0, panel.y0, panel.x1, panel.y0 + title_height);
    ctx.draw_rect(title_bar, TITLE_BAR);
    ctx.draw_text(
        "muon demo",
        Point::new(panel.x0 + padding, panel.y0 + padding),
        TEXT,
    );
    let close = Rect::new(
        title_bar.x1 - title_height,
        title_bar.y0,
        title_bar.x1,
        title_bar.y1,
    );
    ctx.draw_icon(IconId::Close, close, TEXT);

    // A checkbox row and the two tree-node states.
    let mut cursor = Point::new(panel.x0 + padding, title_bar.y1 + padding);
    let box_size = 18.0;
    let check = Rect::new(cursor.x, cursor.y, cursor.x + box_size, cursor.y + box_size);
    ctx.draw_icon(IconId::Check, check, ACCENT);
    let label = "checked";
    ctx.draw_text(
        label,
        Point::new(check.x1 + ctx.style.spacing, cursor.y),
        TEXT,
    );
    let label_width = ctx.text_width(label);
    ctx.draw_icon(
        IconId::Collapsed,
        Rect::new(
            check.x1 + 2.0 * ctx.style.spacing + label_width,
            cursor.y,
            check.x1 + 2.0 * ctx.style.spacing + label_width + box_size,
            cursor.y + box_size,
        ),
        TEXT,
    );
    ctx.draw_icon(
        IconId::Expanded,
        Rect::new(
            check.x1 + 3.0 * ctx.style.spacing + label_width + box_size,
            cursor.y,
            check.x1 + 3.0 * ctx.style.spacing + label_width + 2.0 * box_size,
            cursor.y + box_size,
        ),
        TEXT,
    );
    cursor.y += box_size + ctx.style.spacing;

    // Echo whatever has been typed or pasted so far.
    cursor.y += line;
    ctx.draw_text("type something (ctrl+V pastes):", cursor, TEXT);
    cursor.y += line;
    ctx.draw_text(format!("> {typed}"), cursor, ACCENT);

    // Clear the clip for whoever draws next.
    ctx.set_clip(Rect::new(0.0, 0.0, 800.0, 600.0));
}
