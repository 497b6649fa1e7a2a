//! Routes platform events to the input state and sketch hooks

use easel_platform::Event;
use tracing::{debug, trace};

use crate::context::Context;
use crate::sketch::Sketch;

/// Whether the frame loop should keep going
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// Drain `events` in arrival order
///
/// A quit event stops dispatch at once; anything queued behind it is
/// discarded.
pub(crate) fn dispatch<S: Sketch + ?Sized>(
    events: &mut Vec<Event>,
    ctx: &mut Context,
    sketch: &mut S,
) -> Flow {
    for event in events.drain(..) {
        trace!("dispatch {:?}", event);
        match event {
            Event::Quit => {
                debug!("quit requested");
                return Flow::Stop;
            }
            Event::KeyDown { key } => {
                ctx.input.press(key);
                sketch.key_pressed(ctx);
            }
            Event::MouseMotion { x, y } => ctx.input.move_to(x, y),
            Event::MouseButton { pressed: true, .. } => sketch.mouse_clicked(ctx),
            Event::MouseButton { .. } => {}
            Event::Resized { width, height } => debug!("window resized to {}x{}", width, height),
        }
    }
    Flow::Continue
}
