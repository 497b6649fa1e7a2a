//! The frame loop
//!
//! One iteration: drain events, clear, draw, present, update the FPS
//! estimate, then sleep out the rest of the frame budget. Everything runs
//! on the calling thread; event polling happens before drawing so the
//! sketch never observes input changing mid-frame.

use std::thread;
use std::time::Instant;

use easel_platform::{Event, Platform};
use tracing::{debug, error, info};

use crate::config::SketchConfig;
use crate::context::Context;
use crate::dispatch::{dispatch, Flow};
use crate::fps::{FpsCounter, FpsGovernor};
use crate::sketch::Sketch;
use crate::status::ExitStatus;

/// Lifecycle of a [`FrameLoop`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Drives a sketch against a platform
pub struct FrameLoop<P: Platform, S: Sketch> {
    platform: P,
    sketch: S,
    ctx: Context,
    governor: FpsGovernor,
    counter: FpsCounter,
    events: Vec<Event>,
    state: LoopState,
    frames: u64,
}

impl<P: Platform, S: Sketch> FrameLoop<P, S> {
    pub fn new(
        platform: P,
        window: P::Window,
        renderer: P::Renderer,
        config: &SketchConfig,
        sketch: S,
    ) -> Self {
        Self {
            platform,
            sketch,
            ctx: Context::new(Box::new(window), Box::new(renderer)),
            governor: FpsGovernor::new(config.target_fps),
            counter: FpsCounter::new(config.fps_sample, Instant::now()),
            events: Vec::new(),
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn sketch(&self) -> &S {
        &self.sketch
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run setup, then frames until quit or [`Context::exit`]
    ///
    /// A loop runs at most once; later calls return immediately.
    pub fn run(&mut self) -> ExitStatus {
        if self.state != LoopState::Idle {
            debug!("frame loop already ran");
            return ExitStatus::Success;
        }
        self.state = LoopState::Running;

        if let Err(e) = self.sketch.setup(&mut self.ctx) {
            error!("sketch setup failed: {}", e);
            self.state = LoopState::Stopped;
            return ExitStatus::SetupFailed;
        }

        info!(
            "frame loop started on {} platform (target {} fps)",
            self.platform.name(),
            self.governor
                .frame_budget()
                .map(|b| format!("{:.1}", 1.0 / b.as_secs_f64()))
                .unwrap_or_else(|| "uncapped".to_string())
        );

        while self.frame() {}

        self.state = LoopState::Stopped;
        info!("frame loop stopped after {} frames", self.frames);
        ExitStatus::Success
    }

    /// One iteration; false once the loop should stop
    fn frame(&mut self) -> bool {
        let started = Instant::now();

        self.platform.poll_events(&mut self.events);
        if dispatch(&mut self.events, &mut self.ctx, &mut self.sketch) == Flow::Stop {
            return false;
        }

        self.ctx.renderer.clear();
        self.sketch.draw(&mut self.ctx);
        self.ctx.renderer.present();
        self.frames += 1;

        if let Some(fps) = self.counter.frame_presented(Instant::now()) {
            debug!("fps: {}", fps);
            self.ctx.fps = fps;
        }

        if self.ctx.exit_requested {
            return false;
        }

        if let Some(pause) = self.governor.remaining(started.elapsed()) {
            thread::sleep(pause);
        }
        true
    }
}

/// Open a window on `platform` and run `sketch` in it
pub fn run_on<P: Platform, S: Sketch>(
    mut platform: P,
    config: SketchConfig,
    sketch: S,
) -> ExitStatus {
    let window = match platform.create_window(&config.window_config()) {
        Ok(window) => window,
        Err(e) => {
            error!("could not create window: {}", e);
            return ExitStatus::WindowCreation;
        }
    };
    let renderer = match platform.create_renderer(&window) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("could not create renderer: {}", e);
            return ExitStatus::RendererCreation;
        }
    };

    FrameLoop::new(platform, window, renderer, &config, sketch).run()
}
