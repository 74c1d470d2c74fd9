//! Software drawing primitives over an RGBA frame buffer

use std::ops::Range;

use glam::Vec2;

use crate::assets::Sprite;
use crate::sim::Rect;

/// Mutable view of a `width * height` RGBA8 frame
pub struct Canvas<'a> {
    pixels: &'a mut [[u8; 4]],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    /// Wrap a raw frame; `frame.len()` must be `width * height * 4`
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        let pixels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(frame);
        debug_assert_eq!(pixels.len(), (width * height) as usize);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| self.pixels[self.index(x, y)])
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    pub fn clear(&mut self, color: [u8; 4]) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle, blending by the color's alpha
    pub fn fill_rect(&mut self, rect: Rect, color: [u8; 4]) {
        let xs = span(rect.left(), rect.right(), self.width);
        let ys = span(rect.top(), rect.bottom(), self.height);
        for y in ys {
            for x in xs.clone() {
                self.blend(x, y, color, 255);
            }
        }
    }

    /// Draw a rectangle outline `thickness` pixels wide, inside `rect`
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: [u8; 4]) {
        let t = thickness.min(rect.size.x / 2.0).min(rect.size.y / 2.0);
        let inner_h = rect.size.y - 2.0 * t;
        self.fill_rect(Rect::new(rect.left(), rect.top(), rect.size.x, t), color);
        self.fill_rect(Rect::new(rect.left(), rect.bottom() - t, rect.size.x, t), color);
        self.fill_rect(Rect::new(rect.left(), rect.top() + t, t, inner_h), color);
        self.fill_rect(Rect::new(rect.right() - t, rect.top() + t, t, inner_h), color);
    }

    /// Copy a sprite with its top-left corner at `pos`, clipped to the frame
    pub fn blit(&mut self, sprite: &Sprite, pos: Vec2) {
        let origin_x = pos.x.round() as i64;
        let origin_y = pos.y.round() as i64;
        for sy in 0..sprite.height() {
            let y = origin_y + i64::from(sy);
            if y < 0 || y >= i64::from(self.height) {
                continue;
            }
            for sx in 0..sprite.width() {
                let x = origin_x + i64::from(sx);
                if x < 0 || x >= i64::from(self.width) {
                    continue;
                }
                self.blend(x as u32, y as u32, sprite.pixel(sx, sy), 255);
            }
        }
    }

    /// Blend `color` at integer coordinates, scaled by `coverage` (0-255)
    ///
    /// Out-of-frame coordinates are ignored.
    pub fn blend_at(&mut self, x: i32, y: i32, color: [u8; 4], coverage: u8) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.blend(x as u32, y as u32, color, coverage);
    }

    fn blend(&mut self, x: u32, y: u32, color: [u8; 4], coverage: u8) {
        let alpha = u32::from(color[3]) * u32::from(coverage) / 255;
        if alpha == 0 {
            return;
        }
        let idx = self.index(x, y);
        let dst = &mut self.pixels[idx];
        if alpha == 255 {
            *dst = [color[0], color[1], color[2], 255];
            return;
        }
        for (d, s) in dst.iter_mut().zip(color).take(3) {
            let mixed = u32::from(s) * alpha + u32::from(*d) * (255 - alpha);
            *d = ((mixed + 127) / 255) as u8;
        }
        dst[3] = 255;
    }
}

/// Pixel columns (or rows) whose centres fall in `[lo, hi)`, clipped to `0..max`
fn span(lo: f32, hi: f32, max: u32) -> Range<u32> {
    let start = lo.round().clamp(0.0, max as f32) as u32;
    let end = hi.round().clamp(0.0, max as f32) as u32;
    start..end.max(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn frame(w: u32, h: u32) -> Vec<u8> {
        vec![0; (w * h * 4) as usize]
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buf = frame(10, 10);
        let mut canvas = Canvas::new(&mut buf, 10, 10);
        canvas.fill_rect(Rect::new(-5.0, 8.0, 8.0, 8.0), RED);

        assert_eq!(canvas.pixel(0, 8), Some(RED));
        assert_eq!(canvas.pixel(2, 9), Some(RED));
        assert_eq!(canvas.pixel(3, 9), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(0, 7), Some([0, 0, 0, 0]));
        assert_eq!(canvas.pixel(10, 0), None);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut buf = frame(2, 2);
        let mut canvas = Canvas::new(&mut buf, 2, 2);
        canvas.clear([200, 100, 0, 255]);
        canvas.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), [0, 0, 0, 120]);

        // 200 * 135 / 255 and 100 * 135 / 255, rounded
        assert_eq!(canvas.pixel(1, 1), Some([106, 53, 0, 255]));
    }

    #[test]
    fn test_stroke_leaves_interior() {
        let mut buf = frame(10, 10);
        let mut canvas = Canvas::new(&mut buf, 10, 10);
        canvas.clear(BLACK);
        canvas.stroke_rect(Rect::new(1.0, 1.0, 8.0, 8.0), 2.0, RED);

        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 5), Some(RED));
        assert_eq!(canvas.pixel(8, 8), Some(RED));
        assert_eq!(canvas.pixel(3, 3), Some(BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn test_blit_respects_alpha_and_edges() {
        let mut image = image::RgbaImage::from_pixel(2, 2, image::Rgba(RED));
        image.put_pixel(1, 1, image::Rgba([0, 255, 0, 0]));
        let sprite = Sprite::new(image);

        let mut buf = frame(3, 3);
        let mut canvas = Canvas::new(&mut buf, 3, 3);
        canvas.clear(BLACK);
        canvas.blit(&sprite, Vec2::new(1.0, 1.0));
        canvas.blit(&sprite, Vec2::new(-1.0, 0.0));

        assert_eq!(canvas.pixel(1, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 1), Some(RED));
        // Transparent texel keeps the background
        assert_eq!(canvas.pixel(2, 2), Some(BLACK));
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(0, 1), Some(BLACK));
    }

    #[test]
    fn test_blend_at_ignores_out_of_frame() {
        let mut buf = frame(2, 2);
        let mut canvas = Canvas::new(&mut buf, 2, 2);
        canvas.blend_at(-1, 0, RED, 255);
        canvas.blend_at(0, 2, RED, 255);
        canvas.blend_at(1, 1, RED, 0);
        assert!(buf.iter().all(|&b| b == 0));
    }
}
