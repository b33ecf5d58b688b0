// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! Muon is a minimal immediate-mode GUI: widgets run every frame, feed on the
//! input recorded in a [`Context`], and emit a [`Command`] stream that a
//! rendering backend consumes once per frame.
//!
//! This crate is the backend-agnostic surface of that model: the context, its
//! input recording, the style object consulted during layout, and the
//! draw-command vocabulary. It contains no rendering and no platform code;
//! backends such as `muon_sdl2` translate host events into the input model
//! and interpret the command stream with a concrete renderer.
//!
//! Geometry uses [`kurbo`] and colors use [`peniko`], both re-exported here
//! so backends and apps don't need to pin matching versions.

pub use kurbo;
pub use peniko;

mod command;
mod context;
mod input;
mod text;
mod tracing_backend;

pub mod style;

pub use command::{Command, IconId};
pub use context::Context;
pub use input::{Key, Keys, MouseButton, MouseButtons};
pub use style::Style;
pub use text::TextMetrics;
pub use tracing_backend::{TracingAlreadySetError, try_init_test_tracing, try_init_tracing};
