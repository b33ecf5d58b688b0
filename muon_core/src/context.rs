// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::command::{Command, IconId};
use crate::input::{Key, Keys, MouseButton, MouseButtons};
use crate::style::Style;
use crate::text::TextMetrics;

/// The GUI context: style, recorded input, and the pending command stream.
///
/// `F` is the backend's font resource type; a context is usable for input
/// and command plumbing without a font, but text measurement returns zero
/// until the backend installs one.
///
/// A context is single-threaded state. Input arrives through the
/// `input_*` methods (normally called by a backend's event translation),
/// widgets emit through the `draw_*` methods, and the backend drains the
/// result with [`take_commands`](Self::take_commands) once per frame.
/// [`end_frame`](Self::end_frame) closes the frame by clearing the
/// per-frame input state.
pub struct Context<F> {
    /// Layout constants and the installed font resource.
    pub style: Style<F>,
    commands: Vec<Command>,
    input: InputState,
    textbox_focused: bool,
}

#[derive(Debug, Default)]
struct InputState {
    mouse_pos: Point,
    mouse_delta: Vec2,
    scroll_delta: Vec2,
    mouse_down: MouseButtons,
    mouse_pressed: MouseButtons,
    key_down: Keys,
    key_pressed: Keys,
    text: String,
}

impl<F> Context<F> {
    /// A context with default style and no font installed.
    pub fn new() -> Self {
        Self {
            style: Style::new(),
            commands: Vec::new(),
            input: InputState::default(),
            textbox_focused: false,
        }
    }

    // --- MARK: INPUT

    /// Record a pointer move to `pos` (in window coordinates).
    pub fn input_mouse_move(&mut self, pos: Point) {
        self.input.mouse_delta += pos - self.input.mouse_pos;
        self.input.mouse_pos = pos;
    }

    /// Record a button press at `pos`.
    ///
    /// A press implies a move: the pointer position is updated before the
    /// button state, so widgets hit-test against the press position.
    pub fn input_mouse_down(&mut self, pos: Point, button: MouseButton) {
        self.input_mouse_move(pos);
        self.input.mouse_down.insert(button);
        self.input.mouse_pressed.insert(button);
    }

    /// Record a button release at `pos`.
    pub fn input_mouse_up(&mut self, pos: Point, button: MouseButton) {
        self.input_mouse_move(pos);
        self.input.mouse_down.remove(button);
    }

    /// Accumulate a scroll delta for this frame.
    pub fn input_scroll(&mut self, delta: Vec2) {
        self.input.scroll_delta += delta;
    }

    /// Append committed text (from the host's text input or a paste) to this
    /// frame's text buffer.
    pub fn input_text(&mut self, text: &str) {
        self.input.text.push_str(text);
    }

    /// Record a key press.
    pub fn input_key_down(&mut self, key: Key) {
        self.input.key_down.insert(key);
        self.input.key_pressed.insert(key);
    }

    /// Record a key release.
    pub fn input_key_up(&mut self, key: Key) {
        self.input.key_down.remove(key);
    }

    /// Close the frame: clear pressed sets, deltas and the text buffer.
    ///
    /// Held buttons and keys persist across frames; only edge-triggered
    /// state is per-frame.
    pub fn end_frame(&mut self) {
        self.input.mouse_pressed.clear();
        self.input.key_pressed.clear();
        self.input.mouse_delta = Vec2::ZERO;
        self.input.scroll_delta = Vec2::ZERO;
        self.input.text.clear();
    }

    /// The current pointer position.
    pub fn mouse_pos(&self) -> Point {
        self.input.mouse_pos
    }

    /// Pointer movement accumulated this frame.
    pub fn mouse_delta(&self) -> Vec2 {
        self.input.mouse_delta
    }

    /// Scroll delta accumulated this frame.
    pub fn scroll_delta(&self) -> Vec2 {
        self.input.scroll_delta
    }

    /// Whether `button` is currently held.
    pub fn is_mouse_down(&self, button: MouseButton) -> bool {
        self.input.mouse_down.contains(button)
    }

    /// Whether `button` was pressed during this frame.
    pub fn was_mouse_pressed(&self, button: MouseButton) -> bool {
        self.input.mouse_pressed.contains(button)
    }

    /// Whether `key` is currently held.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.input.key_down.contains(key)
    }

    /// Whether `key` was pressed during this frame.
    pub fn was_key_pressed(&self, key: Key) -> bool {
        self.input.key_pressed.contains(key)
    }

    /// Text committed this frame.
    pub fn pending_text(&self) -> &str {
        &self.input.text
    }

    // --- MARK: FOCUS

    /// Whether a text-entry widget currently has focus.
    ///
    /// Backends consult this before rendering to decide whether the host's
    /// text input (and with it IME composition) should be active.
    pub fn textbox_focused(&self) -> bool {
        self.textbox_focused
    }

    /// Mark a text-entry widget as focused or unfocused.
    pub fn set_textbox_focus(&mut self, focused: bool) {
        self.textbox_focused = focused;
    }

    // --- MARK: COMMANDS

    /// Emit a text command.
    pub fn draw_text(&mut self, text: impl Into<String>, pos: Point, color: Color) {
        self.commands.push(Command::Text {
            text: text.into(),
            pos,
            color,
        });
    }

    /// Emit a filled rectangle command.
    pub fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(Command::Rect { rect, color });
    }

    /// Emit an icon command.
    pub fn draw_icon(&mut self, icon: IconId, rect: Rect, color: Color) {
        self.commands.push(Command::Icon { icon, rect, color });
    }

    /// Emit a clip command.
    pub fn set_clip(&mut self, rect: Rect) {
        self.commands.push(Command::Clip { rect });
    }

    /// Drain the pending command stream.
    ///
    /// Commands are consumed exactly once; after this call the context is
    /// ready to record the next frame.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    // --- MARK: SCALE

    /// Rescale the style to `scale` times the compile-time defaults.
    ///
    /// See [`Style::apply_scale`]: the operation is not cumulative.
    pub fn set_scale(&mut self, scale: f64) {
        self.style.apply_scale(scale);
    }
}

impl<F: TextMetrics> Context<F> {
    /// The width in pixels of `text` with the installed font, or `0.0` if no
    /// font is installed.
    pub fn text_width(&self, text: &str) -> f64 {
        self.style.font.as_ref().map_or(0.0, |f| f.text_width(text))
    }

    /// The line height in pixels of the installed font, or `0.0` if no font
    /// is installed.
    pub fn text_height(&self) -> f64 {
        self.style.font.as_ref().map_or(0.0, |f| f.text_height())
    }
}

impl<F> Default for Context<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for Context<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("style", &self.style)
            .field("pending_commands", &self.commands.len())
            .field("input", &self.input)
            .field("textbox_focused", &self.textbox_focused)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use assert_matches::assert_matches;

    use super::*;

    /// A font whose drop is observable, standing in for a backend's
    /// renderer-bound resources.
    struct CountedFont {
        width_per_char: f64,
        drops: Rc<Cell<usize>>,
    }

    impl TextMetrics for CountedFont {
        fn text_width(&self, text: &str) -> f64 {
            self.width_per_char * text.chars().count() as f64
        }

        fn text_height(&self) -> f64 {
            16.0
        }
    }

    impl Drop for CountedFont {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn counted_font(drops: &Rc<Cell<usize>>) -> CountedFont {
        CountedFont {
            width_per_char: 8.0,
            drops: Rc::clone(drops),
        }
    }

    #[test]
    fn press_implies_move() {
        let mut ctx = Context::<()>::new();
        ctx.input_mouse_down(Point::new(40.0, 25.0), MouseButton::Left);

        assert_eq!(ctx.mouse_pos(), Point::new(40.0, 25.0));
        assert!(ctx.is_mouse_down(MouseButton::Left));
        assert!(ctx.was_mouse_pressed(MouseButton::Left));
    }

    #[test]
    fn end_frame_keeps_held_state() {
        let mut ctx = Context::<()>::new();
        ctx.input_mouse_down(Point::ZERO, MouseButton::Right);
        ctx.input_key_down(Key::Shift);
        ctx.input_scroll(Vec2::new(0.0, -30.0));
        ctx.input_text("ab");
        ctx.input_text("c");
        assert_eq!(ctx.pending_text(), "abc");

        ctx.end_frame();

        assert!(ctx.is_mouse_down(MouseButton::Right));
        assert!(!ctx.was_mouse_pressed(MouseButton::Right));
        assert!(ctx.is_key_down(Key::Shift));
        assert!(!ctx.was_key_pressed(Key::Shift));
        assert_eq!(ctx.scroll_delta(), Vec2::ZERO);
        assert_eq!(ctx.pending_text(), "");
    }

    #[test]
    fn scroll_accumulates_within_frame() {
        let mut ctx = Context::<()>::new();
        ctx.input_scroll(Vec2::new(-30.0, 60.0));
        ctx.input_scroll(Vec2::new(-30.0, -30.0));
        assert_eq!(ctx.scroll_delta(), Vec2::new(-60.0, 30.0));
    }

    #[test]
    fn key_release_clears_held() {
        let mut ctx = Context::<()>::new();
        ctx.input_key_down(Key::Ctrl);
        ctx.input_key_up(Key::Ctrl);
        assert!(!ctx.is_key_down(Key::Ctrl));
        // The press edge is still visible until the frame ends.
        assert!(ctx.was_key_pressed(Key::Ctrl));
    }

    #[test]
    fn commands_drain_in_emission_order() {
        let mut ctx = Context::<()>::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        ctx.set_clip(rect);
        ctx.draw_rect(rect, Color::from_rgba8(255, 0, 0, 255));
        ctx.draw_text("hi", Point::ZERO, Color::from_rgba8(0, 0, 0, 255));
        ctx.draw_icon(IconId::Check, rect, Color::from_rgba8(0, 255, 0, 255));

        let commands = ctx.take_commands();
        assert_eq!(commands.len(), 4);
        assert_matches!(commands[0], Command::Clip { .. });
        assert_matches!(commands[1], Command::Rect { .. });
        assert_matches!(commands[2], Command::Text { ref text, .. } if text == "hi");
        assert_matches!(
            commands[3],
            Command::Icon {
                icon: IconId::Check,
                ..
            }
        );

        assert!(ctx.take_commands().is_empty());
    }

    #[test]
    fn measurement_without_font_is_zero() {
        let ctx = Context::<CountedFont>::new();
        assert_eq!(ctx.text_width("anything"), 0.0);
        assert_eq!(ctx.text_height(), 0.0);
    }

    #[test]
    fn measurement_uses_installed_font() {
        let drops = Rc::new(Cell::new(0));
        let mut ctx = Context::new();
        ctx.style.font = Some(counted_font(&drops));
        assert_eq!(ctx.text_width("abcd"), 32.0);
        assert_eq!(ctx.text_height(), 16.0);
    }

    #[test]
    fn replacing_font_drops_previous_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let mut ctx = Context::new();

        ctx.style.font = Some(counted_font(&drops));
        assert_eq!(drops.get(), 0);

        ctx.style.font = Some(counted_font(&drops));
        assert_eq!(drops.get(), 1);

        ctx.style.font = None;
        assert_eq!(drops.get(), 2);
    }

    #[test]
    fn dropping_context_releases_font() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut ctx = Context::new();
            ctx.style.font = Some(counted_font(&drops));
        }
        assert_eq!(drops.get(), 1);
    }
}
