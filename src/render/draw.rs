//! Integer line rasterisation with a square brush.
use crate::image::RasterImage;

/// Pixels on the digital line from `start` to `end`, both endpoints included.
pub struct LinePixels {
    x: i32,
    y: i32,
    end: [i32; 2],
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl LinePixels {
    pub fn new(start: [i32; 2], end: [i32; 2]) -> Self {
        let dx = (end[0] - start[0]).abs();
        let dy = -(end[1] - start[1]).abs();
        Self {
            x: start[0],
            y: start[1],
            end,
            dx,
            dy,
            sx: if end[0] >= start[0] { 1 } else { -1 },
            sy: if end[1] >= start[1] { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePixels {
    type Item = [i32; 2];

    fn next(&mut self) -> Option<[i32; 2]> {
        if self.done {
            return None;
        }
        let current = [self.x, self.y];
        if current == self.end {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Offsets covered by a brush of `thickness` pixels around the line pixel.
#[inline]
fn brush_span(thickness: u32) -> (i32, i32) {
    let t = thickness.max(1) as i32;
    (-(t - 1) / 2, t / 2)
}

/// Draw a line of `color` into an RGB raster. Brush pixels falling outside
/// the raster are skipped.
pub(super) fn draw_line(
    canvas: &mut RasterImage,
    start: [i32; 2],
    end: [i32; 2],
    color: [u8; 3],
    thickness: u32,
) {
    debug_assert_eq!(canvas.channels, 3);
    let (lo, hi) = brush_span(thickness);
    let (w, h) = (canvas.width as i32, canvas.height as i32);
    for [x, y] in LinePixels::new(start, end) {
        for oy in lo..=hi {
            let py = y + oy;
            if py < 0 || py >= h {
                continue;
            }
            for ox in lo..=hi {
                let px = x + ox;
                if px < 0 || px >= w {
                    continue;
                }
                canvas
                    .pixel_mut(px as usize, py as usize)
                    .copy_from_slice(&color);
            }
        }
    }
}
