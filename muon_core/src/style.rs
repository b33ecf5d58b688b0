// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! Layout constants consulted by widgets, and the style object that carries
//! them at runtime.

#![allow(missing_docs, reason = "Names are self-explanatory.")]

use std::fmt;

use kurbo::Size;

pub const DEFAULT_CELL_SIZE: Size = Size::new(68., 10.);
pub const DEFAULT_PADDING: f64 = 5.;
pub const DEFAULT_SPACING: f64 = 4.;
pub const DEFAULT_INDENT: f64 = 24.;
pub const DEFAULT_TITLE_HEIGHT: f64 = 24.;
pub const DEFAULT_SCROLLBAR_SIZE: f64 = 12.;
pub const DEFAULT_THUMB_SIZE: f64 = 8.;

/// The mutable set of layout constants consulted during layout, plus the
/// font resource installed by the rendering backend.
///
/// `F` is the backend's font type; the core never inspects it beyond the
/// [`TextMetrics`](crate::TextMetrics) trait. Assigning a new value to
/// [`font`](Self::font) drops the previous resource before the new one is
/// visible, so a backend's renderer-side objects are released exactly when
/// the style stops referencing them.
pub struct Style<F> {
    /// The font resource used to measure and draw text, if one is installed.
    pub font: Option<F>,
    /// Base size of a widget cell.
    pub size: Size,
    pub padding: f64,
    pub spacing: f64,
    pub indent: f64,
    pub title_height: f64,
    pub scrollbar_size: f64,
    pub thumb_size: f64,
}

impl<F> Style<F> {
    /// A style with the compile-time default constants and no font.
    pub fn new() -> Self {
        Self {
            font: None,
            size: DEFAULT_CELL_SIZE,
            padding: DEFAULT_PADDING,
            spacing: DEFAULT_SPACING,
            indent: DEFAULT_INDENT,
            title_height: DEFAULT_TITLE_HEIGHT,
            scrollbar_size: DEFAULT_SCROLLBAR_SIZE,
            thumb_size: DEFAULT_THUMB_SIZE,
        }
    }

    /// Rescale every layout field to `scale` times its compile-time default.
    ///
    /// Scaling is always relative to the defaults, not to the current values:
    /// two consecutive calls are equivalent to the last one alone. The font
    /// is left untouched.
    pub fn apply_scale(&mut self, scale: f64) {
        self.size = Size::new(
            DEFAULT_CELL_SIZE.width * scale,
            DEFAULT_CELL_SIZE.height * scale,
        );
        self.padding = DEFAULT_PADDING * scale;
        self.spacing = DEFAULT_SPACING * scale;
        self.indent = DEFAULT_INDENT * scale;
        self.title_height = DEFAULT_TITLE_HEIGHT * scale;
        self.scrollbar_size = DEFAULT_SCROLLBAR_SIZE * scale;
        self.thumb_size = DEFAULT_THUMB_SIZE * scale;
    }
}

impl<F> Default for Style<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for Style<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("font", &self.font.is_some())
            .field("size", &self.size)
            .field("padding", &self.padding)
            .field("spacing", &self.spacing)
            .field("indent", &self.indent)
            .field("title_height", &self.title_height)
            .field("scrollbar_size", &self.scrollbar_size)
            .field("thumb_size", &self.thumb_size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_derives_from_defaults() {
        let mut style = Style::<()>::new();
        style.apply_scale(3.0);
        style.apply_scale(2.0);

        let mut expected = Style::<()>::new();
        expected.apply_scale(2.0);

        assert_eq!(style.size, expected.size);
        assert_eq!(style.padding, expected.padding);
        assert_eq!(style.spacing, expected.spacing);
        assert_eq!(style.indent, expected.indent);
        assert_eq!(style.title_height, expected.title_height);
        assert_eq!(style.scrollbar_size, expected.scrollbar_size);
        assert_eq!(style.thumb_size, expected.thumb_size);
    }

    #[test]
    fn scaling_leaves_font_installed() {
        let mut style = Style::<u32> {
            font: Some(7),
            ..Style::new()
        };
        style.apply_scale(2.0);
        assert_eq!(style.font, Some(7));
        assert_eq!(style.padding, 2.0 * DEFAULT_PADDING);
    }

    #[test]
    fn unit_scale_is_identity() {
        let mut style = Style::<()>::new();
        style.apply_scale(1.0);
        assert_eq!(style.size, DEFAULT_CELL_SIZE);
        assert_eq!(style.title_height, DEFAULT_TITLE_HEIGHT);
    }
}
