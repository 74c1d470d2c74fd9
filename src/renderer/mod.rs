//! Software rendering module
//!
//! Each frame is painted on the CPU into a fixed 1000x600 RGBA buffer, which
//! `pixels` scales onto the window surface.

pub mod canvas;
pub mod scene;
pub mod text;

use std::sync::Arc;

use glam::Vec2;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

pub use canvas::Canvas;

use crate::assets::Assets;
use crate::consts::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::sim::{GameState, PointerState};

/// Frame buffer plus the GPU surface it is presented on
pub struct Renderer {
    pixels: Pixels<'static>,
}

impl Renderer {
    pub fn new(window: Arc<Window>) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(FRAME_WIDTH, FRAME_HEIGHT, surface)?;
        log::info!(
            "Renderer ready: {FRAME_WIDTH}x{FRAME_HEIGHT} frame on a {}x{} surface",
            size.width,
            size.height
        );
        Ok(Self { pixels })
    }

    /// Paint the current state into the frame buffer
    pub fn draw(&mut self, state: &GameState, assets: &Assets, pointer: &PointerState) {
        let mut canvas = Canvas::new(self.pixels.frame_mut(), FRAME_WIDTH, FRAME_HEIGHT);
        scene::draw_frame(&mut canvas, state, assets, pointer);
    }

    pub fn present(&self) -> Result<(), pixels::Error> {
        self.pixels.render()
    }

    /// Follow a window resize; zero-sized (minimized) surfaces are skipped
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if let Err(err) = self.pixels.resize_surface(width, height) {
            log::warn!("Failed to resize surface to {width}x{height}: {err}");
        }
    }

    /// Map a physical window position to frame coordinates
    ///
    /// Returns `None` when the position falls on the letterbox border.
    pub fn window_to_frame(&self, x: f64, y: f64) -> Option<Vec2> {
        self.pixels
            .window_pos_to_pixel((x as f32, y as f32))
            .ok()
            .map(|(px, py)| Vec2::new(px as f32, py as f32))
    }
}
