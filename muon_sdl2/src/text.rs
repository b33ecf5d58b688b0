// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! Font resources: the wrapper installed into the context's style.

use muon_core::TextMetrics;
use muon_core::kurbo::Point;
use muon_core::peniko::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::{Window, WindowContext};
use tracing::warn;

use crate::backend::BackendError;
use crate::render::{color_to_sdl, point_to_sdl};

/// A font paired with the renderer-side objects used to draw it.
///
/// The font handle itself is borrowed: it stays owned by whoever loaded it
/// from the ttf context. The text object and the engine are owned here and
/// live exactly as long as the wrapper: field order releases the text object
/// before the engine it draws through.
pub struct FontData<'f, 'ttf> {
    font: &'f Font<'ttf, 'static>,
    text: Text,
    engine: TextureCreator<WindowContext>,
}

/// The reusable text object: one mutable string buffer shared by every text
/// command in a frame, rasterized on demand.
struct Text {
    value: String,
}

impl Text {
    fn new() -> Self {
        Self {
            value: String::new(),
        }
    }

    fn set(&mut self, text: &str) {
        self.value.clear();
        self.value.push_str(text);
    }
}

impl<'f, 'ttf> FontData<'f, 'ttf> {
    /// Bundle `font` with text-rendering resources bound to `canvas`'s
    /// renderer.
    pub(crate) fn new(
        canvas: &Canvas<Window>,
        font: &'f Font<'ttf, 'static>,
    ) -> Result<Self, BackendError> {
        let engine = canvas.texture_creator();
        Ok(Self {
            font,
            text: Text::new(),
            engine,
        })
    }

    /// Draw `text` with its top-left corner at `pos`.
    pub(crate) fn draw_text(
        &mut self,
        canvas: &mut Canvas<Window>,
        text: &str,
        pos: Point,
        color: Color,
    ) -> Result<(), BackendError> {
        self.text.set(text);
        if self.text.value.is_empty() {
            // The rasterizer rejects zero-width strings.
            return Ok(());
        }

        let surface = self
            .font
            .render(&self.text.value)
            .blended(color_to_sdl(color))
            .map_err(BackendError::text_render)?;
        let texture = self
            .engine
            .create_texture_from_surface(&surface)
            .map_err(BackendError::text_render)?;

        let query = texture.query();
        let origin = point_to_sdl(pos);
        let dst = SdlRect::new(origin.x, origin.y, query.width, query.height);
        canvas
            .copy(&texture, None, Some(dst))
            .map_err(BackendError::draw)
    }
}

impl TextMetrics for FontData<'_, '_> {
    fn text_width(&self, text: &str) -> f64 {
        match self.font.size_of(text) {
            Ok((width, _)) => f64::from(width),
            Err(err) => {
                warn!("text measurement failed: {err}");
                0.0
            }
        }
    }

    fn text_height(&self) -> f64 {
        f64::from(self.font.height())
    }
}
