// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

use muon_core::kurbo::Vec2;
use muon_core::{Key, MouseButton};
use sdl2::keyboard::{Mod, Scancode};
use sdl2::mouse::MouseButton as SdlMouseButton;

// Wheel ticks are turned into scroll distances. Both axes are inverted:
// vertically because the GUI scrolls content against the wheel, and
// horizontally to match.
const X_SCROLL_FACTOR: f64 = -30.0;
const Y_SCROLL_FACTOR: f64 = -30.0;

pub(crate) fn sdl_button_to_muon(button: SdlMouseButton) -> Option<MouseButton> {
    match button {
        SdlMouseButton::Left => Some(MouseButton::Left),
        SdlMouseButton::Right => Some(MouseButton::Right),
        SdlMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

pub(crate) fn sdl_scancode_to_muon(scancode: Scancode) -> Option<Key> {
    match scancode {
        Scancode::LShift | Scancode::RShift => Some(Key::Shift),
        Scancode::LCtrl | Scancode::RCtrl => Some(Key::Ctrl),
        Scancode::LAlt | Scancode::RAlt => Some(Key::Alt),
        Scancode::Backspace => Some(Key::Backspace),
        Scancode::Return => Some(Key::Return),
        _ => None,
    }
}

pub(crate) fn wheel_to_scroll(dx: f32, dy: f32) -> Vec2 {
    Vec2::new(
        f64::from(dx) * X_SCROLL_FACTOR,
        f64::from(dy) * Y_SCROLL_FACTOR,
    )
}

/// Whether a key-down event is the paste accelerator (ctrl+V).
///
/// The modifier state is read from the event itself rather than the global
/// keyboard snapshot, so translation stays a pure function of the event.
pub(crate) fn is_paste_chord(scancode: Scancode, keymod: Mod) -> bool {
    scancode == Scancode::V && keymod.intersects(Mod::LCTRLMOD | Mod::RCTRLMOD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_buttons_map() {
        assert_eq!(
            sdl_button_to_muon(SdlMouseButton::Left),
            Some(MouseButton::Left)
        );
        assert_eq!(
            sdl_button_to_muon(SdlMouseButton::Right),
            Some(MouseButton::Right)
        );
        assert_eq!(
            sdl_button_to_muon(SdlMouseButton::Middle),
            Some(MouseButton::Middle)
        );
    }

    #[test]
    fn unrecognized_buttons_are_dropped() {
        assert_eq!(sdl_button_to_muon(SdlMouseButton::X1), None);
        assert_eq!(sdl_button_to_muon(SdlMouseButton::X2), None);
        assert_eq!(sdl_button_to_muon(SdlMouseButton::Unknown), None);
    }

    #[test]
    fn modifier_variants_collapse() {
        assert_eq!(sdl_scancode_to_muon(Scancode::LShift), Some(Key::Shift));
        assert_eq!(sdl_scancode_to_muon(Scancode::RShift), Some(Key::Shift));
        assert_eq!(sdl_scancode_to_muon(Scancode::LCtrl), Some(Key::Ctrl));
        assert_eq!(sdl_scancode_to_muon(Scancode::RCtrl), Some(Key::Ctrl));
        assert_eq!(sdl_scancode_to_muon(Scancode::LAlt), Some(Key::Alt));
        assert_eq!(sdl_scancode_to_muon(Scancode::RAlt), Some(Key::Alt));
    }

    #[test]
    fn editing_keys_map() {
        assert_eq!(
            sdl_scancode_to_muon(Scancode::Backspace),
            Some(Key::Backspace)
        );
        assert_eq!(sdl_scancode_to_muon(Scancode::Return), Some(Key::Return));
    }

    #[test]
    fn unrecognized_keys_are_dropped() {
        assert_eq!(sdl_scancode_to_muon(Scancode::A), None);
        assert_eq!(sdl_scancode_to_muon(Scancode::Space), None);
        assert_eq!(sdl_scancode_to_muon(Scancode::Escape), None);
        assert_eq!(sdl_scancode_to_muon(Scancode::KpEnter), None);
    }

    #[test]
    fn wheel_scaling_inverts_both_axes() {
        assert_eq!(wheel_to_scroll(1.0, 1.0), Vec2::new(-30.0, -30.0));
        assert_eq!(wheel_to_scroll(-2.0, 0.5), Vec2::new(60.0, -15.0));
        assert_eq!(wheel_to_scroll(0.0, 0.0), Vec2::ZERO);
    }

    #[test]
    fn paste_chord_requires_ctrl_and_v() {
        assert!(is_paste_chord(Scancode::V, Mod::LCTRLMOD));
        assert!(is_paste_chord(Scancode::V, Mod::RCTRLMOD));
        assert!(is_paste_chord(
            Scancode::V,
            Mod::LCTRLMOD | Mod::LSHIFTMOD
        ));
        assert!(!is_paste_chord(Scancode::V, Mod::empty()));
        assert!(!is_paste_chord(Scancode::V, Mod::LSHIFTMOD));
        assert!(!is_paste_chord(Scancode::C, Mod::LCTRLMOD));
    }
}
