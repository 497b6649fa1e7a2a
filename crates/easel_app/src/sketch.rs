//! The sketch contract

use crate::context::Context;
use crate::error::Result;

/// User drawing logic
///
/// Only [`Sketch::draw`] is required. The other hooks default to doing
/// nothing, so a sketch overrides just the ones it cares about. Every hook
/// runs on the frame-loop thread.
///
/// ```ignore
/// struct Square;
///
/// impl Sketch for Square {
///     fn draw(&mut self, ctx: &mut Context) {
///         ctx.background(Color::BLACK);
///         ctx.fill(Color::WHITE);
///         ctx.rect(ctx.mouse_x(), ctx.mouse_y(), 20, 20);
///     }
/// }
/// ```
pub trait Sketch {
    /// Called once before the first frame
    fn setup(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Called once per frame between clear and present
    fn draw(&mut self, ctx: &mut Context);

    /// Called for every key-down event, after [`Context::key`] is updated
    fn key_pressed(&mut self, _ctx: &mut Context) {}

    /// Called for every mouse button press
    fn mouse_clicked(&mut self, _ctx: &mut Context) {}
}
