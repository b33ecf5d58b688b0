// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;

use muon_core::kurbo::Point;
use muon_core::{Command, Context, Style};
use sdl2::VideoSubsystem;
use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use tracing::{debug, warn};

use crate::convert_sdl_event::{
    is_paste_chord, sdl_button_to_muon, sdl_scancode_to_muon, wheel_to_scroll,
};
use crate::render::{draw_icon, effective_clip};
use crate::text::FontData;

/// Errors surfaced by the SDL2 backend.
///
/// Failures never leave the context half torn down: an operation either
/// completes or reports an error with the context exactly as it was.
#[derive(Debug)]
pub enum BackendError {
    /// The renderer rejected a draw call.
    Draw(String),
    /// Rasterizing or uploading a glyph run failed.
    TextRender(String),
    /// [`Backend::render_commands`] was called with no font installed.
    FontMissing,
}

impl BackendError {
    pub(crate) fn draw(err: impl fmt::Display) -> Self {
        Self::Draw(err.to_string())
    }

    pub(crate) fn text_render(err: impl fmt::Display) -> Self {
        Self::TextRender(err.to_string())
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draw(err) => write!(f, "renderer draw call failed: {err}"),
            Self::TextRender(err) => write!(f, "text rasterization failed: {err}"),
            Self::FontMissing => f.pad("no font is installed in the context style"),
        }
    }
}

impl Error for BackendError {}

/// The SDL2 side of a Muon context.
///
/// Owns the host handles the translation needs across calls (the video
/// subsystem, for clipboard reads and text-input activation). The canvas,
/// context and font are borrowed per call, so the backend imposes no
/// ordering on the caller's event loop beyond the usual
/// process-events, run-widgets, render cycle.
pub struct Backend {
    video: VideoSubsystem,
}

impl Backend {
    // --- MARK: INIT

    /// Install the baseline style and the initial `font` into `ctx`, and
    /// return the backend handle.
    ///
    /// The context is only mutated once every resource has been created; on
    /// failure it is left exactly as it was.
    pub fn new<'f, 'ttf>(
        ctx: &mut Context<FontData<'f, 'ttf>>,
        canvas: &Canvas<Window>,
        font: &'f Font<'ttf, 'static>,
    ) -> Result<Self, BackendError> {
        let font_data = FontData::new(canvas, font)?;
        let mut style = Style::new();
        style.font = Some(font_data);
        ctx.style = style;

        debug!("SDL2 backend initialized");
        Ok(Self {
            video: canvas.window().subsystem().clone(),
        })
    }

    // --- MARK: FONT

    /// Replace the font wrapper installed in `ctx`.
    ///
    /// The replacement is fully built before the old wrapper is dropped, so
    /// a failure leaves the previous font usable.
    pub fn set_font<'f, 'ttf>(
        &self,
        ctx: &mut Context<FontData<'f, 'ttf>>,
        canvas: &Canvas<Window>,
        font: &'f Font<'ttf, 'static>,
    ) -> Result<(), BackendError> {
        let font_data = FontData::new(canvas, font)?;
        ctx.style.font = Some(font_data);
        debug!("font replaced");
        Ok(())
    }

    /// Drop the font wrapper and reset the style to its baseline.
    ///
    /// After this the context can still record input, but rendering fails
    /// with [`BackendError::FontMissing`] until a font is installed again.
    pub fn shutdown<F>(&self, ctx: &mut Context<F>) {
        ctx.style = Style::new();
        debug!("SDL2 backend shut down");
    }

    // --- MARK: EVENTS

    /// Feed one SDL event into the context's input model.
    ///
    /// Events outside the input model, and button or key codes outside the
    /// GUI's small vocabulary, are silently dropped. The paste accelerator
    /// (ctrl+V) is special-cased: it reads the system clipboard and forwards
    /// the contents as committed text instead of a key press.
    pub fn process_event<F>(&self, ctx: &mut Context<F>, event: &Event) {
        match event {
            Event::KeyDown {
                scancode: Some(scancode),
                keymod,
                ..
            } if is_paste_chord(*scancode, *keymod) => {
                match self.video.clipboard().clipboard_text() {
                    Ok(text) => ctx.input_text(&text),
                    Err(err) => warn!("clipboard paste failed: {err}"),
                }
            }
            _ => forward_event(ctx, event),
        }
    }

    // --- MARK: RENDER

    /// Drain and execute the pending draw-command stream on `canvas`.
    ///
    /// If a text-entry widget is focused and the host's text input is not
    /// yet active, text input (and with it IME composition) is started
    /// before any command runs.
    pub fn render_commands(
        &self,
        ctx: &mut Context<FontData<'_, '_>>,
        canvas: &mut Canvas<Window>,
    ) -> Result<(), BackendError> {
        if ctx.style.font.is_none() {
            return Err(BackendError::FontMissing);
        }

        if ctx.textbox_focused() && !self.video.text_input().is_active() {
            self.video.text_input().start();
            debug!("text input activated");
        }

        let commands = ctx.take_commands();
        let Some(font_data) = ctx.style.font.as_mut() else {
            return Err(BackendError::FontMissing);
        };

        for command in commands {
            match command {
                Command::Text { text, pos, color } => {
                    font_data.draw_text(canvas, &text, pos, color)?;
                }
                Command::Rect { rect, color } => {
                    canvas.set_draw_color(crate::render::color_to_sdl(color));
                    canvas
                        .fill_rect(crate::render::rect_to_sdl(rect))
                        .map_err(BackendError::draw)?;
                }
                Command::Icon { icon, rect, color } => {
                    draw_icon(canvas, icon, rect, color)?;
                }
                Command::Clip { rect } => {
                    if let Some(clip) = effective_clip(rect) {
                        canvas.set_clip_rect(clip);
                    }
                }
            }
        }
        Ok(())
    }
}

/// Translate and forward `event` into `ctx`.
///
/// This is every translation except the clipboard accelerator, which needs
/// the video subsystem and lives in [`Backend::process_event`]. Fed directly,
/// a ctrl+V key-down maps to no known key and is dropped, same as in the
/// composed path.
pub(crate) fn forward_event<F>(ctx: &mut Context<F>, event: &Event) {
    match event {
        Event::MouseMotion { x, y, .. } => {
            ctx.input_mouse_move(Point::new(f64::from(*x), f64::from(*y)));
        }
        Event::MouseWheel {
            precise_x,
            precise_y,
            ..
        } => {
            ctx.input_scroll(wheel_to_scroll(*precise_x, *precise_y));
        }
        Event::TextInput { text, .. } => {
            ctx.input_text(text);
        }
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => {
            if let Some(button) = sdl_button_to_muon(*mouse_btn) {
                ctx.input_mouse_down(Point::new(f64::from(*x), f64::from(*y)), button);
            }
        }
        Event::MouseButtonUp {
            mouse_btn, x, y, ..
        } => {
            if let Some(button) = sdl_button_to_muon(*mouse_btn) {
                ctx.input_mouse_up(Point::new(f64::from(*x), f64::from(*y)), button);
            }
        }
        Event::KeyDown {
            scancode: Some(scancode),
            ..
        } => {
            if let Some(key) = sdl_scancode_to_muon(*scancode) {
                ctx.input_key_down(key);
            }
        }
        // A key-up during auto-repeat would fake a release between repeats;
        // the key is still held.
        Event::KeyUp {
            scancode: Some(scancode),
            repeat: false,
            ..
        } => {
            if let Some(key) = sdl_scancode_to_muon(*scancode) {
                ctx.input_key_up(key);
            }
        }
        _ => {}
    }
}
