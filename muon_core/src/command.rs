// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! The draw-command stream emitted by widgets and consumed by a backend.

use kurbo::{Point, Rect};
use peniko::Color;

/// One of the fixed vector glyphs a backend knows how to rasterize.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum IconId {
    /// An X mark, drawn on close buttons.
    Close,
    /// A check mark, drawn on active checkboxes.
    Check,
    /// A triangle pointing right, drawn on collapsed tree nodes.
    Collapsed,
    /// A triangle pointing down, drawn on expanded tree nodes.
    Expanded,
}

/// A single drawing instruction.
///
/// Commands are produced while widgets run and drained exactly once per
/// frame by the rendering backend; they never outlive the frame that
/// emitted them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Draw `text` with the style's font, with its top-left corner at `pos`.
    Text {
        /// The string to draw.
        text: String,
        /// Top-left corner of the rendered run.
        pos: Point,
        /// Fill color of the glyphs.
        color: Color,
    },
    /// Fill `rect` with `color`.
    Rect {
        /// The rectangle to fill.
        rect: Rect,
        /// The fill color.
        color: Color,
    },
    /// Draw the icon `icon`, scaled into `rect`.
    Icon {
        /// Which glyph to draw.
        icon: IconId,
        /// The bounding rectangle the glyph is fitted into.
        rect: Rect,
        /// The stroke/fill color of the glyph.
        color: Color,
    },
    /// Restrict subsequent drawing to `rect`.
    ///
    /// A clip with non-positive width or height is a no-op for backends: the
    /// previously installed clip region stays active.
    Clip {
        /// The new clip rectangle.
        rect: Rect,
    },
}
