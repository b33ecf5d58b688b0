// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! Rasterization of the draw-command stream onto an SDL canvas.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Window-space coordinates fit comfortably in i32."
)]

use muon_core::IconId;
use muon_core::kurbo::{Point, Rect};
use muon_core::peniko::Color;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::{Point as SdlPoint, Rect as SdlRect};
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::backend::BackendError;

// Icons are authored in a fixed virtual space and mapped onto their bounding
// rectangle with a temporary canvas scale.
const ICON_SIZE: f64 = 24.0;
// Inset between the bounding rectangle and the glyph, in icon-space units.
const ICON_BORDER: f64 = 7.0;

pub(crate) fn color_to_sdl(color: Color) -> SdlColor {
    let rgba = color.to_rgba8();
    SdlColor::RGBA(rgba.r, rgba.g, rgba.b, rgba.a)
}

pub(crate) fn point_to_sdl(point: Point) -> SdlPoint {
    SdlPoint::new(point.x.round() as i32, point.y.round() as i32)
}

pub(crate) fn rect_to_sdl(rect: Rect) -> SdlRect {
    SdlRect::new(
        rect.x0.round() as i32,
        rect.y0.round() as i32,
        rect.width().round().max(0.0) as u32,
        rect.height().round().max(0.0) as u32,
    )
}

/// The clip rectangle to install for a clip command, if any.
///
/// A clip with non-positive width or height installs nothing: the previously
/// installed clip region stays active.
pub(crate) fn effective_clip(rect: Rect) -> Option<SdlRect> {
    if rect.width() > 0.0 && rect.height() > 0.0 {
        Some(rect_to_sdl(rect))
    } else {
        None
    }
}

/// The canvas scale and icon-space rectangle for an icon command.
///
/// The canvas scale maps icon space back onto `rect` on screen; the returned
/// rectangle is the bounding rect carried into icon space and inset by the
/// fixed border, so the glyph keeps a margin at every size.
pub(crate) fn icon_layout(rect: Rect) -> ((f64, f64), Rect) {
    let scale_x = ICON_SIZE / rect.width();
    let scale_y = ICON_SIZE / rect.height();
    let draw = Rect::new(
        rect.x0 * scale_x + ICON_BORDER,
        rect.y0 * scale_y + ICON_BORDER,
        rect.x1 * scale_x - ICON_BORDER,
        rect.y1 * scale_y - ICON_BORDER,
    );
    ((1.0 / scale_x, 1.0 / scale_y), draw)
}

/// Draw one of the fixed vector glyphs, scaled and inset into `rect`.
///
/// The canvas scale is temporary and reset to identity on every path out,
/// including draw failures.
pub(crate) fn draw_icon(
    canvas: &mut Canvas<Window>,
    icon: IconId,
    rect: Rect,
    color: Color,
) -> Result<(), BackendError> {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return Ok(());
    }

    let ((scale_x, scale_y), draw) = icon_layout(rect);
    canvas
        .set_scale(scale_x as f32, scale_y as f32)
        .map_err(BackendError::draw)?;
    canvas.set_draw_color(color_to_sdl(color));

    let drawn = draw_icon_geometry(canvas, icon, draw);
    let restored = canvas.set_scale(1.0, 1.0).map_err(BackendError::draw);
    drawn.and(restored)
}

fn draw_icon_geometry(
    canvas: &mut Canvas<Window>,
    icon: IconId,
    draw: Rect,
) -> Result<(), BackendError> {
    match icon {
        IconId::Close => {
            canvas
                .draw_line(
                    point_to_sdl(Point::new(draw.x0, draw.y0)),
                    point_to_sdl(Point::new(draw.x1, draw.y1)),
                )
                .map_err(BackendError::draw)?;
            canvas
                .draw_line(
                    point_to_sdl(Point::new(draw.x1, draw.y0)),
                    point_to_sdl(Point::new(draw.x0, draw.y1)),
                )
                .map_err(BackendError::draw)?;
        }
        IconId::Check => {
            canvas
                .fill_rect(rect_to_sdl(draw))
                .map_err(BackendError::draw)?;
        }
        IconId::Collapsed => {
            let points = [
                point_to_sdl(Point::new(draw.x0, draw.y0)),
                point_to_sdl(Point::new(draw.x1, draw.y0 + draw.height() / 2.0)),
                point_to_sdl(Point::new(draw.x0, draw.y1)),
            ];
            canvas.draw_lines(&points[..]).map_err(BackendError::draw)?;
        }
        IconId::Expanded => {
            let points = [
                point_to_sdl(Point::new(draw.x0, draw.y0)),
                point_to_sdl(Point::new(draw.x0 + draw.width() / 2.0, draw.y1)),
                point_to_sdl(Point::new(draw.x1, draw.y0)),
            ];
            canvas.draw_lines(&points[..]).map_err(BackendError::draw)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_clip_installs_nothing() {
        assert_eq!(effective_clip(Rect::new(10.0, 10.0, 10.0, 50.0)), None);
        assert_eq!(effective_clip(Rect::new(10.0, 10.0, 50.0, 10.0)), None);
        assert_eq!(effective_clip(Rect::new(10.0, 10.0, 5.0, 5.0)), None);
    }

    #[test]
    fn positive_clip_converts() {
        assert_eq!(
            effective_clip(Rect::new(10.0, 20.0, 40.0, 60.0)),
            Some(SdlRect::new(10, 20, 30, 40))
        );
    }

    #[test]
    fn color_components_carry_over() {
        let color = Color::from_rgba8(12, 34, 56, 78);
        assert_eq!(color_to_sdl(color), SdlColor::RGBA(12, 34, 56, 78));
    }

    #[test]
    fn icon_space_width_is_fixed() {
        // Whatever the bounding rect, the glyph spans the virtual space minus
        // the border on each side.
        for rect in [
            Rect::new(0.0, 0.0, 24.0, 24.0),
            Rect::new(100.0, 50.0, 140.0, 66.0),
            Rect::new(3.0, 7.0, 13.0, 37.0),
        ] {
            let (_, draw) = icon_layout(rect);
            assert!((draw.width() - (ICON_SIZE - 2.0 * ICON_BORDER)).abs() < 1e-9);
            assert!((draw.height() - (ICON_SIZE - 2.0 * ICON_BORDER)).abs() < 1e-9);
        }
    }

    #[test]
    fn icon_geometry_stays_inside_bounding_rect() {
        for rect in [
            Rect::new(0.0, 0.0, 24.0, 24.0),
            Rect::new(100.0, 50.0, 140.0, 66.0),
            Rect::new(3.0, 7.0, 13.0, 37.0),
            Rect::new(640.0, 2.0, 664.0, 26.0),
        ] {
            let ((scale_x, scale_y), draw) = icon_layout(rect);
            // Map the icon-space rect back to screen space through the canvas
            // scale the backend installs while drawing.
            let screen = Rect::new(
                draw.x0 * scale_x,
                draw.y0 * scale_y,
                draw.x1 * scale_x,
                draw.y1 * scale_y,
            );
            let eps = 1e-9;
            assert!(screen.x0 >= rect.x0 - eps, "left edge escapes {rect:?}");
            assert!(screen.y0 >= rect.y0 - eps, "top edge escapes {rect:?}");
            assert!(screen.x1 <= rect.x1 + eps, "right edge escapes {rect:?}");
            assert!(screen.y1 <= rect.y1 + eps, "bottom edge escapes {rect:?}");
            assert!(screen.width() > 0.0, "inset emptied {rect:?}");
        }
    }

    #[test]
    fn rect_conversion_rounds() {
        assert_eq!(
            rect_to_sdl(Rect::new(1.4, 2.6, 11.4, 22.6)),
            SdlRect::new(1, 3, 10, 20)
        );
    }
}
