//! Text rasterization with rusttype

use glam::Vec2;
use rusttype::{Font, Scale, point};

use super::canvas::Canvas;

/// Font size of every label in the game
pub const TEXT_SIZE: f32 = 36.0;

/// Width and height of `text`'s layout box at `size` pixels
pub fn measure(font: &Font<'_>, text: &str, size: f32) -> Vec2 {
    let scale = Scale::uniform(size);
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, point(0.0, 0.0))
        .last()
        .map_or(0.0, |g| g.position().x + g.unpositioned().h_metrics().advance_width);
    Vec2::new(width, v_metrics.ascent - v_metrics.descent)
}

/// Draw `text` with the top-left of its layout box at `top_left`
pub fn draw(
    canvas: &mut Canvas<'_>,
    font: &Font<'_>,
    text: &str,
    top_left: Vec2,
    size: f32,
    color: [u8; 4],
) {
    let scale = Scale::uniform(size);
    let ascent = font.v_metrics(scale).ascent;
    let origin = point(top_left.x, top_left.y + ascent);

    for glyph in font.layout(text, scale, origin) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let cov = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
            canvas.blend_at(bb.min.x + gx as i32, bb.min.y + gy as i32, color, cov);
        });
    }
}

/// Draw `text` centred horizontally on `center_x`, top edge at `top`
pub fn draw_centered_x(
    canvas: &mut Canvas<'_>,
    font: &Font<'_>,
    text: &str,
    center_x: f32,
    top: f32,
    size: f32,
    color: [u8; 4],
) {
    let width = measure(font, text, size).x;
    let left = (center_x - width / 2.0).floor();
    draw(canvas, font, text, Vec2::new(left, top), size, color);
}
