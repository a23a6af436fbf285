//! Show the pixel buffer in the window using the GPU.

mod blit;
mod gpu;

use std::sync::Arc;

use glamour::Size2;
use miette::Result;
use rgb::RGB8;
use winit::window::Window;

use crate::{
    canvas::{Canvas, Surface},
    Config,
};

use self::{blit::BlitState, gpu::Gpu};

/// Area of the window the buffer is drawn in, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Letterbox {
    /// Horizontal offset from the left of the window.
    pub(crate) x: f32,
    /// Vertical offset from the top of the window.
    pub(crate) y: f32,
    /// Width of the scaled buffer.
    pub(crate) width: f32,
    /// Height of the scaled buffer.
    pub(crate) height: f32,
}

impl Letterbox {
    /// Calculate the letterbox based on the size of the surface.
    ///
    /// Uses integer scaling when the screen fits at least a single buffer, otherwise the buffer is shrunk to fit.
    /// The result is always centered and inside of the screen.
    pub(crate) fn fit(buffer_size: Size2<u32>, screen_size: Size2<u32>) -> Self {
        let buffer_width = buffer_size.width.max(1) as f32;
        let buffer_height = buffer_size.height.max(1) as f32;
        let screen_width = screen_size.width.max(1) as f32;
        let screen_height = screen_size.height.max(1) as f32;

        // Scale so both dimensions fit
        let scale = (screen_width / buffer_width).min(screen_height / buffer_height);
        let scale = if scale >= 1.0 { scale.floor() } else { scale };

        let width = buffer_width * scale;
        let height = buffer_height * scale;

        // Center the scaled rectangle inside the screen
        let x = ((screen_width - width) / 2.0).floor().max(0.0);
        let y = ((screen_height - height) / 2.0).floor().max(0.0);

        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Texture format of the pixel buffer matching the color space of the surface.
///
/// An sRGB texture on an sRGB surface, or a linear texture on a linear surface, both show the bytes as-is.
fn buffer_texture_format(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

/// Convert an `u32` color to a WGPU [`wgpu::Color`] taking in account sRGB.
///
/// Clear colors are linear on sRGB surfaces, on other surfaces they are written as-is.
fn u32_to_wgpu_color(argb: u32, srgb_surface: bool) -> wgpu::Color {
    let a = f64::from((argb & 0xFF00_0000) >> 24) / 255.0;
    let r = f64::from((argb & 0x00FF_0000) >> 16) / 255.0;
    let g = f64::from((argb & 0x0000_FF00) >> 8) / 255.0;
    let b = f64::from(argb & 0x0000_00FF) / 255.0;

    if !srgb_surface {
        return wgpu::Color { r, g, b, a };
    }

    // Convert from sRGB space
    wgpu::Color {
        r: r.powf(2.2),
        g: g.powf(2.2),
        b: b.powf(2.2),
        a,
    }
}

/// Main render state holding the GPU information.
pub(crate) struct Graphics {
    /// GPU state.
    gpu: Gpu<'static>,
    /// Texture and pipeline for drawing the buffer.
    blit: BlitState,
    /// Size of the pixel buffer.
    buffer_size: Size2<u32>,
    /// Where the buffer is drawn on the surface.
    letterbox: Letterbox,
    /// Color outside of the letterbox.
    viewport_color: wgpu::Color,
}

impl Graphics {
    /// Create a GPU surface on the window.
    ///
    /// # Errors
    ///
    /// - When no GPU surface, adapter or device could be created.
    pub(crate) async fn new(
        config: &Config,
        window: Arc<Window>,
        buffer_size: Size2<u32>,
    ) -> Result<Self> {
        let window_size = window.inner_size();
        let screen_size = Size2::new(window_size.width, window_size.height);

        // Setup the GPU and attach it to the window surface
        let gpu = Gpu::new(config, window, screen_size).await?;

        let blit = BlitState::new(buffer_size, &gpu.device, gpu.format());

        let letterbox = Letterbox::fit(buffer_size, gpu.screen_size());
        let viewport_color = u32_to_wgpu_color(config.viewport_color, gpu.format().is_srgb());

        Ok(Self {
            gpu,
            blit,
            buffer_size,
            letterbox,
            viewport_color,
        })
    }

    /// Upload the canvas and show it in the window.
    pub(crate) fn present(&mut self, canvas: &Canvas) {
        profiling::scope!("Present canvas");

        // Nothing to draw on when the surface is unavailable
        let Some(mut frame) = self.gpu.start() else {
            return;
        };

        self.blit.upload(frame.queue, canvas.raw_buffer());
        self.blit
            .render(&mut frame, self.letterbox, self.viewport_color);

        frame.present();
    }

    /// Resize the surface.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(Size2::new(width, height));

        // Recalculate the letterbox with the new size
        self.letterbox = Letterbox::fit(self.buffer_size, self.gpu.screen_size());

        log::debug!("Setting new letterbox to {:?}", self.letterbox);
    }
}

/// Drawable surface of the window: a CPU canvas shown through the GPU on present.
pub(crate) struct Screen {
    /// Pixels drawn on.
    canvas: Canvas,
    /// Presents the canvas.
    graphics: Graphics,
}

impl Screen {
    /// Combine a canvas with the GPU state presenting it.
    pub(crate) const fn new(canvas: Canvas, graphics: Graphics) -> Self {
        Self { canvas, graphics }
    }

    /// Resize the window surface.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.graphics.resize(width, height);
    }

    /// Show the last composed frame again, needed when the window was resized or exposed.
    pub(crate) fn redraw(&mut self) {
        self.graphics.present(&self.canvas);
    }
}

impl Surface for Screen {
    #[inline]
    fn set_color(&mut self, color: RGB8) {
        self.canvas.set_color(color);
    }

    #[inline]
    fn clear(&mut self) {
        self.canvas.clear();
    }

    #[inline]
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.canvas.fill_rect(x, y, width, height);
    }

    #[inline]
    fn draw_point(&mut self, x: i32, y: i32) {
        self.canvas.draw_point(x, y);
    }

    #[inline]
    fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.canvas.draw_rect(x, y, width, height);
    }

    #[inline]
    fn draw_line(&mut self, start_x: i32, start_y: i32, end_x: i32, end_y: i32) {
        self.canvas.draw_line(start_x, start_y, end_x, end_y);
    }

    fn present(&mut self) {
        self.canvas.present();
        self.graphics.present(&self.canvas);
    }
}
