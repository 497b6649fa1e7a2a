//! Bundled demo sketches

use std::path::PathBuf;

use easel_app::prelude::*;
use tracing::{info, warn};

const BACKDROP: Color = Color::hex(0x20_20_28);
const ACCENT: Color = Color::hex(0xf0_a0_30);

/// Window size in drawing coordinates
fn window_extent(ctx: &Context) -> (i32, i32) {
    (
        i32::try_from(ctx.width()).unwrap_or(i32::MAX),
        i32::try_from(ctx.height()).unwrap_or(i32::MAX),
    )
}

/// Restore state pushed earlier in the frame
fn restore(ctx: &mut Context) {
    if let Err(e) = ctx.pop() {
        warn!("unbalanced pop: {}", e);
    }
}

/// A square that bounces off the window edges
///
/// Arrow keys nudge the velocity, space toggles the fill, a click moves
/// the square to the mouse and escape quits.
pub struct Bounce {
    x: i32,
    y: i32,
    vx: i32,
    vy: i32,
    side: i32,
    filled: bool,
}

impl Default for Bounce {
    fn default() -> Self {
        Self {
            x: 40,
            y: 40,
            vx: 3,
            vy: 2,
            side: 40,
            filled: true,
        }
    }
}

impl Bounce {
    fn step(&mut self, width: i32, height: i32) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x <= 0 || self.x + self.side >= width {
            self.vx = -self.vx;
            self.x = self.x.clamp(0, (width - self.side).max(0));
        }
        if self.y <= 0 || self.y + self.side >= height {
            self.vy = -self.vy;
            self.y = self.y.clamp(0, (height - self.side).max(0));
        }
    }
}

impl Sketch for Bounce {
    fn draw(&mut self, ctx: &mut Context) {
        ctx.no_stroke();
        ctx.background(BACKDROP);
        let (w, h) = window_extent(ctx);
        self.step(w, h);

        ctx.push();
        ctx.translate(self.x, self.y);
        if self.filled {
            ctx.fill(ACCENT);
        } else {
            ctx.no_fill();
        }
        ctx.stroke(Color::WHITE);
        ctx.rect(0, 0, self.side, self.side);
        restore(ctx);

        // Mouse trail for the last motion event
        ctx.stroke(Color::GRAY);
        ctx.line(ctx.pmouse_x(), ctx.pmouse_y(), ctx.mouse_x(), ctx.mouse_y());
    }

    fn key_pressed(&mut self, ctx: &mut Context) {
        match ctx.key() {
            Some(Key::Up) => self.vy -= 1,
            Some(Key::Down) => self.vy += 1,
            Some(Key::Left) => self.vx -= 1,
            Some(Key::Right) => self.vx += 1,
            Some(Key::Space) => self.filled = !self.filled,
            Some(Key::Escape) => ctx.exit(),
            _ => {}
        }
    }

    fn mouse_clicked(&mut self, ctx: &mut Context) {
        self.x = ctx.mouse_x() - self.side / 2;
        self.y = ctx.mouse_y() - self.side / 2;
    }
}

/// Echoes typed keys, with the frame rate in the corner
///
/// Tab toggles bold, a click toggles alignment, backspace deletes, return
/// clears and escape quits.
pub struct Typewriter {
    font_path: Option<PathBuf>,
    size: f32,
    typed: String,
}

impl Typewriter {
    pub fn new(font_path: Option<PathBuf>, size: f32) -> Self {
        Self {
            font_path,
            size,
            typed: String::new(),
        }
    }
}

impl Sketch for Typewriter {
    fn setup(&mut self, ctx: &mut Context) -> Result<()> {
        let font = match &self.font_path {
            Some(path) => ctx.create_font(path, self.size)?,
            None => Font::system(self.size)?,
        };
        ctx.set_font(font);
        ctx.title("Typewriter");
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) {
        ctx.no_stroke();
        ctx.background(BACKDROP);
        let (w, h) = window_extent(ctx);

        ctx.fill(Color::WHITE);
        if self.typed.is_empty() {
            ctx.fill(Color::GRAY);
            ctx.text("start typing", 0, 0, w, h);
        } else {
            ctx.text(&self.typed, 0, 0, w, h);
        }

        ctx.push();
        ctx.text_align(TextAlign::Left);
        ctx.text_style(TextStyle::Normal);
        ctx.fill(ACCENT);
        let fps = format!("{} fps", ctx.fps());
        ctx.text(&fps, 8, 8, 0, 0);
        restore(ctx);
    }

    fn key_pressed(&mut self, ctx: &mut Context) {
        let Some(key) = ctx.key() else {
            return;
        };
        match key {
            Key::Escape => ctx.exit(),
            Key::Return => self.typed.clear(),
            Key::Backspace => {
                self.typed.pop();
            }
            Key::Tab => {
                let style = match ctx.state().text_style {
                    TextStyle::Normal => TextStyle::Bold,
                    TextStyle::Bold => TextStyle::Normal,
                };
                ctx.text_style(style);
            }
            _ => {
                if let Some(ch) = key.to_char() {
                    self.typed.push(ch);
                }
            }
        }
    }

    fn mouse_clicked(&mut self, ctx: &mut Context) {
        let align = match ctx.state().text_align {
            TextAlign::Center => TextAlign::Left,
            TextAlign::Left => TextAlign::Center,
        };
        ctx.text_align(align);
    }
}

/// Draws an image under the mouse; a click stamps a half-size copy
pub struct Gallery {
    path: PathBuf,
    image: Option<Image>,
    stamps: Vec<(i32, i32)>,
}

impl Gallery {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            image: None,
            stamps: Vec::new(),
        }
    }
}

impl Sketch for Gallery {
    fn setup(&mut self, ctx: &mut Context) -> Result<()> {
        let image = ctx.load_image(&self.path)?;
        info!("{}: {}x{}", self.path.display(), image.width(), image.height());
        self.image = Some(image);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) {
        ctx.no_stroke();
        ctx.background(BACKDROP);
        let Some(image) = &self.image else {
            return;
        };

        let (w, h) = image.extent();
        for &(x, y) in &self.stamps {
            image.draw_rect(ctx, x - w / 4, y - h / 4, w / 2, h / 2);
        }
        let (mx, my) = (ctx.mouse_x(), ctx.mouse_y());
        image.draw(ctx, mx - w / 2, my - h / 2);
    }

    fn key_pressed(&mut self, ctx: &mut Context) {
        match ctx.key() {
            Some(Key::Backspace) => self.stamps.clear(),
            Some(Key::Escape) => {
                if let Some(image) = self.image.take() {
                    image.free(ctx);
                }
                ctx.exit();
            }
            _ => {}
        }
    }

    fn mouse_clicked(&mut self, ctx: &mut Context) {
        self.stamps.push((ctx.mouse_x(), ctx.mouse_y()));
    }
}
