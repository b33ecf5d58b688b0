// Copyright 2026 the Muon Authors
// SPDX-License-Identifier: Apache-2.0

//! SDL2 backend for the Muon immediate-mode GUI.
//!
//! The backend is a thin translation layer in both directions: SDL input
//! events are fed into the [`Context`](muon_core::Context)'s input model,
//! and the context's draw-command stream is interpreted as canvas calls
//! (filled rectangles, clip regions, glyph runs, and the small set of
//! vector icons). The backend also owns the derived state the translation
//! needs: a [`FontData`] wrapper pairing a borrowed `sdl2::ttf` font with
//! the renderer-side objects used to draw it.
//!
//! ## Example
//!
//! ```no_run
//! use muon_core::Context;
//! use muon_sdl2::Backend;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdl = sdl2::init()?;
//!     let video = sdl.video()?;
//!     let window = video.window("muon", 800, 600).build()?;
//!     let mut canvas = window.into_canvas().build()?;
//!     let ttf = sdl2::ttf::init()?;
//!     let font = ttf.load_font("DejaVuSans.ttf", 16)?;
//!
//!     let mut ctx = Context::new();
//!     let backend = Backend::new(&mut ctx, &canvas, &font)?;
//!
//!     let mut events = sdl.event_pump()?;
//!     loop {
//!         for event in events.poll_iter() {
//!             if let sdl2::event::Event::Quit { .. } = event {
//!                 return Ok(());
//!             }
//!             backend.process_event(&mut ctx, &event);
//!         }
//!         // … run widgets against `ctx` here …
//!         canvas.clear();
//!         backend.render_commands(&mut ctx, &mut canvas)?;
//!         canvas.present();
//!         ctx.end_frame();
//!     }
//! }
//! ```

#![expect(missing_debug_implementations, reason = "Deferred: Noisy")]

mod backend;
mod convert_sdl_event;
mod render;
mod text;

pub use backend::{Backend, BackendError};
pub use text::FontData;
