//! End-to-end tests for easel_app
//!
//! Sketches run on the headless platform; assertions read the recorded
//! renderer commands.

use crate::prelude::*;
use crate::{FrameLoop, LoopState};
use easel_core::{DrawCommand, Rect};
use easel_platform::{Event, Platform};
use image::{Rgba, RgbaImage};

/// Uncapped config so tests never sleep
fn config() -> SketchConfig {
    SketchConfig::new("test").size(100, 80).target_fps(0)
}

fn frame_loop<S: Sketch>(
    mut platform: HeadlessPlatform,
    config: &SketchConfig,
    sketch: S,
) -> FrameLoop<HeadlessPlatform, S> {
    let window = platform.create_window(&config.window_config()).unwrap();
    let renderer = platform.create_renderer(&window).unwrap();
    FrameLoop::new(platform, window, renderer, config, sketch)
}

#[derive(Default)]
struct Counter {
    setups: u32,
    draws: u32,
}

impl Sketch for Counter {
    fn setup(&mut self, _ctx: &mut Context) -> Result<()> {
        self.setups += 1;
        Ok(())
    }

    fn draw(&mut self, _ctx: &mut Context) {
        self.draws += 1;
    }
}

#[test]
fn test_empty_script_quits_before_first_frame() {
    let platform = HeadlessPlatform::new();
    let log = platform.log();
    let mut lp = frame_loop(platform, &config(), Counter::default());

    assert_eq!(lp.state(), LoopState::Idle);
    assert_eq!(lp.run(), ExitStatus::Success);
    assert_eq!(lp.state(), LoopState::Stopped);
    assert_eq!(lp.sketch().setups, 1);
    assert_eq!(lp.sketch().draws, 0);
    assert_eq!(log.frames(), 0);
}

#[test]
fn test_each_frame_is_clear_draw_present() {
    struct Boxes;

    impl Sketch for Boxes {
        fn draw(&mut self, ctx: &mut Context) {
            ctx.no_stroke();
            ctx.fill(Color::BLUE);
            ctx.rect(1, 2, 3, 4);
        }
    }

    let platform = HeadlessPlatform::new().frames(3);
    let log = platform.log();
    let status = run_on(platform, config(), Boxes);

    assert_eq!(status, ExitStatus::Success);
    let frame = vec![
        DrawCommand::Clear,
        DrawCommand::FillRect {
            rect: Rect::new(1, 2, 3, 4),
            color: Color::BLUE,
        },
        DrawCommand::Present,
    ];
    let expected: Vec<DrawCommand> = frame.iter().cloned().cycle().take(9).collect();
    assert_eq!(log.commands(), expected);
}

#[test]
fn test_state_persists_across_frames() {
    // translate accumulates frame to frame unless the sketch resets it
    struct Drift;

    impl Sketch for Drift {
        fn draw(&mut self, ctx: &mut Context) {
            ctx.translate(10, 0);
            ctx.no_stroke();
            ctx.rect(0, 0, 1, 1);
        }
    }

    let platform = HeadlessPlatform::new().frames(2);
    let log = platform.log();
    run_on(platform, config(), Drift);

    let xs: Vec<i32> = log
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::FillRect { rect, .. } => Some(rect.x),
            _ => None,
        })
        .collect();
    assert_eq!(xs, vec![10, 20]);
}

#[derive(Default)]
struct InputRecorder {
    trace: Vec<String>,
}

impl Sketch for InputRecorder {
    fn draw(&mut self, ctx: &mut Context) {
        self.trace.push(format!("draw {:?}", ctx.key()));
    }

    fn key_pressed(&mut self, ctx: &mut Context) {
        self.trace.push(format!("key {:?}", ctx.key()));
    }

    fn mouse_clicked(&mut self, ctx: &mut Context) {
        self.trace.push(format!(
            "click {} {} from {} {}",
            ctx.mouse_x(),
            ctx.mouse_y(),
            ctx.pmouse_x(),
            ctx.pmouse_y()
        ));
    }
}

#[test]
fn test_events_dispatch_before_draw() {
    let platform = HeadlessPlatform::new()
        .then(vec![Event::KeyDown { key: Key::Up }])
        .then(vec![
            Event::MouseMotion { x: 5, y: 5 },
            Event::MouseMotion { x: 9, y: 7 },
            Event::MouseButton {
                button: MouseButton::Left,
                pressed: true,
                x: 9,
                y: 7,
            },
            Event::MouseButton {
                button: MouseButton::Left,
                pressed: false,
                x: 9,
                y: 7,
            },
        ]);
    let mut lp = frame_loop(platform, &config(), InputRecorder::default());
    lp.run();

    assert_eq!(
        lp.sketch().trace,
        vec![
            "key Some(Up)",
            "draw Some(Up)",
            "click 9 7 from 5 5",
            "draw Some(Up)",
        ]
    );
}

#[test]
fn test_quit_mid_batch_skips_rest_and_draw() {
    let platform = HeadlessPlatform::new()
        .frames(1)
        .then(vec![Event::Quit, Event::KeyDown { key: Key::A }])
        .frames(5);
    let mut lp = frame_loop(platform, &config(), InputRecorder::default());
    lp.run();

    assert_eq!(lp.sketch().trace, vec!["draw None"]);
    assert_eq!(lp.frames(), 1);
}

#[test]
fn test_setup_error_stops_before_frames() {
    struct Broken;

    impl Sketch for Broken {
        fn setup(&mut self, _ctx: &mut Context) -> Result<()> {
            Err(EaselError::Other("no assets".to_string()))
        }

        fn draw(&mut self, _ctx: &mut Context) {
            panic!("draw after failed setup");
        }
    }

    let platform = HeadlessPlatform::new().frames(3);
    let log = platform.log();
    assert_eq!(run_on(platform, config(), Broken), ExitStatus::SetupFailed);
    assert!(log.is_empty());
}

#[test]
fn test_creation_failures_map_to_exit_codes() {
    let status = run_on(HeadlessPlatform::new().fail_window(), config(), Counter::default());
    assert_eq!(status, ExitStatus::WindowCreation);
    assert_eq!(status.code(), 1);

    let status = run_on(
        HeadlessPlatform::new().fail_renderer(),
        config(),
        Counter::default(),
    );
    assert_eq!(status, ExitStatus::RendererCreation);
    assert_eq!(status.code(), 2);
}

#[test]
fn test_exit_from_draw_ends_after_frame() {
    struct Once;

    impl Sketch for Once {
        fn draw(&mut self, ctx: &mut Context) {
            ctx.exit();
        }
    }

    let platform = HeadlessPlatform::new().frames(10);
    let log = platform.log();
    assert_eq!(run_on(platform, config(), Once), ExitStatus::Success);
    assert_eq!(log.frames(), 1);
}

#[test]
fn test_loop_runs_once() {
    let mut lp = frame_loop(HeadlessPlatform::new().frames(2), &config(), Counter::default());
    lp.run();
    assert_eq!(lp.run(), ExitStatus::Success);
    assert_eq!(lp.sketch().setups, 1);
    assert_eq!(lp.sketch().draws, 2);
}

#[test]
fn test_fps_is_stale_between_samples() {
    #[derive(Default)]
    struct FpsWatcher {
        seen: Vec<u32>,
    }

    impl Sketch for FpsWatcher {
        fn draw(&mut self, ctx: &mut Context) {
            self.seen.push(ctx.fps());
        }
    }

    let config = config().fps_sample(3);
    let mut lp = frame_loop(HeadlessPlatform::new().frames(7), &config, FpsWatcher::default());
    lp.run();

    let seen = &lp.sketch().seen;
    assert_eq!(seen.len(), 7);
    assert_eq!(&seen[..3], &[0, 0, 0]);
    assert!(seen[3..6].iter().all(|&fps| fps == seen[3]));
}

#[test]
fn test_window_title_and_size_from_setup() {
    struct Resize;

    impl Sketch for Resize {
        fn setup(&mut self, ctx: &mut Context) -> Result<()> {
            ctx.title("renamed");
            ctx.size(320, 200);
            Ok(())
        }

        fn draw(&mut self, ctx: &mut Context) {
            ctx.no_stroke();
            ctx.background(Color::GRAY);
        }
    }

    let platform = HeadlessPlatform::new().frames(1);
    let log = platform.log();
    let mut lp = frame_loop(platform, &config(), Resize);
    lp.run();

    assert_eq!(lp.context().window_title(), "renamed");
    assert!(log.commands().contains(&DrawCommand::FillRect {
        rect: Rect::new(0, 0, 320, 200),
        color: Color::GRAY,
    }));
}

#[test]
fn test_image_lifecycle() {
    struct Picture {
        path: std::path::PathBuf,
        image: Option<Image>,
    }

    impl Sketch for Picture {
        fn setup(&mut self, ctx: &mut Context) -> Result<()> {
            self.image = Some(ctx.load_image(&self.path)?);
            Ok(())
        }

        fn draw(&mut self, ctx: &mut Context) {
            if let Some(image) = &self.image {
                ctx.translate(5, 5);
                image.draw(ctx, 0, 0);
                image.draw_rect(ctx, 10, 10, 4, 6);
            }
            if let Some(image) = self.image.take() {
                image.free(ctx);
            }
        }
    }

    let path = std::env::temp_dir().join(format!("easel_app_image_{}.png", std::process::id()));
    RgbaImage::from_pixel(2, 3, Rgba([255, 0, 0, 255]))
        .save(&path)
        .unwrap();

    let platform = HeadlessPlatform::new().frames(2);
    let log = platform.log();
    let status = run_on(
        platform,
        config(),
        Picture {
            path: path.clone(),
            image: None,
        },
    );
    let _ = std::fs::remove_file(&path);
    assert_eq!(status, ExitStatus::Success);

    let commands: Vec<DrawCommand> = log
        .commands()
        .into_iter()
        .filter(|c| !matches!(c, DrawCommand::Clear | DrawCommand::Present))
        .collect();
    let DrawCommand::CreateTexture { texture, .. } = commands[0] else {
        panic!("expected texture upload, got {:?}", commands[0]);
    };
    let full = Some(Rect::new(0, 0, 2, 3));
    assert_eq!(
        commands,
        vec![
            DrawCommand::CreateTexture {
                texture,
                width: 2,
                height: 3
            },
            DrawCommand::Copy {
                texture,
                src: full,
                dst: Rect::new(5, 5, 2, 3)
            },
            DrawCommand::Copy {
                texture,
                src: full,
                dst: Rect::new(15, 15, 4, 6)
            },
            DrawCommand::DestroyTexture(texture),
        ]
    );
}

#[test]
fn test_missing_image_fails_setup() {
    struct Missing;

    impl Sketch for Missing {
        fn setup(&mut self, ctx: &mut Context) -> Result<()> {
            ctx.load_image("/no/such/picture.png")?.free(ctx);
            Ok(())
        }

        fn draw(&mut self, _ctx: &mut Context) {}
    }

    assert_eq!(
        run_on(HeadlessPlatform::new().frames(1), config(), Missing),
        ExitStatus::SetupFailed
    );
}

#[test]
fn test_text_uploads_copies_and_frees() {
    struct Label {
        has_font: bool,
    }

    impl Sketch for Label {
        fn setup(&mut self, ctx: &mut Context) -> Result<()> {
            if let Ok(font) = Font::system(16.0) {
                ctx.set_font(font);
                self.has_font = true;
            }
            Ok(())
        }

        fn draw(&mut self, ctx: &mut Context) {
            ctx.text_align(TextAlign::Left);
            ctx.translate(3, 4);
            ctx.text("Easel", 10, 20, 0, 0);
        }
    }

    let platform = HeadlessPlatform::new().frames(1);
    let log = platform.log();
    let mut lp = frame_loop(platform, &config(), Label { has_font: false });
    lp.run();
    if !lp.sketch().has_font {
        eprintln!("no system font available, skipping");
        return;
    }

    let (w, h) = lp.context().text_size("Easel").unwrap();
    let commands = log.commands();
    assert_eq!(commands.len(), 5);
    let DrawCommand::CreateTexture { texture, .. } = commands[1] else {
        panic!("expected texture upload, got {:?}", commands[1]);
    };
    assert_eq!(
        commands[1..4],
        [
            DrawCommand::CreateTexture {
                texture,
                width: w,
                height: h
            },
            DrawCommand::Copy {
                texture,
                src: None,
                dst: Rect::new(13, 24, w as i32, h as i32)
            },
            DrawCommand::DestroyTexture(texture),
        ]
    );
}
