//! Easel Core
//!
//! The immediate-mode drawing core shared by every Easel crate:
//!
//! - [`Color`] and integer geometry ([`Rect`], [`Point`])
//! - [`DrawState`] and the push/pop [`StateStack`]
//! - [`Canvas`], which turns convenience calls (rect, line, background,
//!   blits) into [`Renderer`] calls using the current state
//! - [`Surface`] pixel buffers handed to renderers as textures
//! - [`RecordingRenderer`], a backend that records [`DrawCommand`]s
//!
//! # Example
//!
//! ```ignore
//! use easel_core::{Canvas, Color, RecordingRenderer};
//!
//! let mut renderer = RecordingRenderer::new(640, 480);
//! let mut canvas = Canvas::new();
//!
//! canvas.translate(10, 20);
//! canvas.rect(&mut renderer, 0, 0, 5, 5);
//!
//! // FillRect(10, 20, 5, 5) followed by StrokeRect(10, 20, 5, 5)
//! assert_eq!(renderer.log().len(), 2);
//! ```

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod renderer;
pub mod state;
pub mod surface;

pub use canvas::Canvas;
pub use color::Color;
pub use error::{CoreError, Result};
pub use geometry::{Point, Rect};
pub use layout::text_rect;
pub use renderer::{CommandLog, DrawCommand, RecordingRenderer, Renderer, TextureId};
pub use state::{DrawState, StateStack, TextAlign, TextStyle};
pub use surface::Surface;
