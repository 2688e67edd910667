/// Terminal cell surface: clips and rasterizes styled line segments
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;
use wire3d_core::{LineStyle, ScreenPoint, Surface};

/// Stroke-density ramp: thin far lines to thick near lines
const WIDTH_RAMP: &[char] = &['.', '-', '+', '*', '#', '@'];

/// Width range produced by depth styling, used to normalize the ramp
const MIN_WIDTH: f32 = 0.5;
const MAX_WIDTH: f32 = 6.0;

/// The fixed foreground hue; only its intensity varies with alpha
const HUE: (u8, u8, u8) = (60, 255, 0);

/// Cell-buffer implementation of the render pipeline's drawing surface.
pub struct TermSurface {
    width: usize,
    height: usize,
    chars: Vec<char>,
    colors: Vec<Color>,
}

impl TermSurface {
    pub fn new(width: usize, height: usize) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            chars: vec![' '; size],
            colors: vec![Color::Reset; size],
        }
    }

    fn plot(&mut self, x: i32, y: i32, ch: char, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        self.chars[idx] = ch;
        self.colors[idx] = color;
    }

    /// Flush the cell buffer to the writer, row by row. Rows are
    /// addressed explicitly since raw mode does not translate newlines.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            for x in 0..self.width {
                let idx = y * self.width + x;
                let c = self.chars[idx];
                if c == ' ' {
                    writer.queue(Print(' '))?;
                } else {
                    writer.queue(SetForegroundColor(self.colors[idx]))?;
                    writer.queue(Print(c))?;
                }
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for TermSurface {
    fn clear(&mut self) {
        for i in 0..self.chars.len() {
            self.chars[i] = ' ';
            self.colors[i] = Color::Reset;
        }
    }

    fn draw_segment(&mut self, p1: ScreenPoint, p2: ScreenPoint, style: LineStyle) {
        // Segments may extend far off-surface; clip before walking cells
        let Some((a, b)) = clip_segment(
            p1,
            p2,
            (self.width.saturating_sub(1)) as f32,
            (self.height.saturating_sub(1)) as f32,
        ) else {
            return;
        };

        let ch = width_char(style.width);
        let color = alpha_color(style.alpha);

        // Bresenham over the clipped span
        let (mut x0, mut y0) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, ch, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

/// Map stroke width onto the density ramp.
fn width_char(width: f32) -> char {
    let t = ((width - MIN_WIDTH) / (MAX_WIDTH - MIN_WIDTH)).clamp(0.0, 1.0);
    let idx = (t * (WIDTH_RAMP.len() - 1) as f32).round() as usize;
    WIDTH_RAMP[idx.min(WIDTH_RAMP.len() - 1)]
}

/// Scale the fixed hue by alpha; the terminal has no compositing, so
/// opacity over a black background becomes color intensity.
fn alpha_color(alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb {
        r: (HUE.0 as f32 * a) as u8,
        g: (HUE.1 as f32 * a) as u8,
        b: (HUE.2 as f32 * a) as u8,
    }
}

/// Liang-Barsky clip of a segment against [0, max_x] x [0, max_y].
fn clip_segment(
    p1: ScreenPoint,
    p2: ScreenPoint,
    max_x: f32,
    max_y: f32,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    for (p, q) in [
        (-dx, p1.x),
        (dx, max_x - p1.x),
        (-dy, p1.y),
        (dy, max_y - p1.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }

    Some((
        ScreenPoint {
            x: p1.x + t0 * dx,
            y: p1.y + t0 * dy,
        },
        ScreenPoint {
            x: p1.x + t1 * dx,
            y: p1.y + t1 * dy,
        },
    ))
}
