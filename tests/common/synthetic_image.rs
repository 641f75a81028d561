use pipeline_detector::RasterImage;

/// Light sheet with a faint deterministic texture. The texture amplitude is
/// far below the default Canny thresholds.
pub fn paper(width: usize, height: usize, channels: usize) -> RasterImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut data = Vec::with_capacity(width * height * channels);
    for y in 0..height {
        for x in 0..width {
            let jitter = ((x * 7919 + y * 104_729) % 7) as u8;
            data.extend(std::iter::repeat(249 + jitter).take(channels));
        }
    }
    RasterImage::new(width, height, channels, data)
}

/// Draws a dark stroke from `a` to `b` (inclusive) with a square pen.
pub fn stroke(img: &mut RasterImage, a: [i32; 2], b: [i32; 2], pen: i32) {
    let steps = (b[0] - a[0]).abs().max((b[1] - a[1]).abs()).max(1);
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = (a[0] as f32 + t * (b[0] - a[0]) as f32).round() as i32;
        let y = (a[1] as f32 + t * (b[1] - a[1]) as f32).round() as i32;
        for oy in 0..pen {
            for ox in 0..pen {
                let (px, py) = (x + ox, y + oy);
                if px >= 0 && py >= 0 && (px as usize) < img.width && (py as usize) < img.height {
                    img.pixel_mut(px as usize, py as usize).fill(0);
                }
            }
        }
    }
}

/// 200×200 gray sheet with one vertical stroke from (10,10) to (10,190).
pub fn single_vertical_line() -> RasterImage {
    let mut img = paper(200, 200, 1);
    stroke(&mut img, [10, 10], [10, 190], 1);
    img
}
