use anyhow::Context;
use image::{imageops::FilterType, DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};
use ndarray::Array2;
use rfidcore::editor::DisplayScale;
use rfidcore::model::ReaderPosition;
use std::path::Path;

/// Decodes a floor's layout image.
pub fn load_layout(path: &Path) -> anyhow::Result<DynamicImage> {
    image::open(path).with_context(|| format!("opening floor layout {}", path.display()))
}

/// Downscales the layout for the external drawing surface.
pub fn resize_for_display(layout: &DynamicImage, scale: &DisplayScale) -> RgbImage {
    layout
        .resize_exact(
            scale.display_width(),
            scale.display_height(),
            FilterType::Lanczos3,
        )
        .to_rgb8()
}

/// Paints the coverage field over the floor layout.
///
/// The field is normalized by its peak for colorization only; the underlying
/// intensities stay untouched. Readers are drawn as white markers with an
/// outline ring.
pub struct OverlayRenderer {
    alpha: f32,
    marker_radius: i32,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self {
            alpha: 0.5,
            marker_radius: 4,
        }
    }

    pub fn render(
        &self,
        layout: &DynamicImage,
        field: &Array2<f32>,
        readers: &[ReaderPosition],
    ) -> RgbImage {
        let mut canvas = layout.to_rgb8();
        let peak = field.iter().copied().fold(0.0f32, f32::max);

        for (x, y, pixel) in canvas.enumerate_pixels_mut() {
            let value = field.get((y as usize, x as usize)).copied().unwrap_or(0.0);
            let normalized = if peak > 0.0 {
                (value / peak) as f64
            } else {
                0.0
            };
            let heat = colorous::TURBO.eval_continuous(normalized);
            let Rgb([r, g, b]) = *pixel;
            *pixel = Rgb([
                blend(r, heat.r, self.alpha),
                blend(g, heat.g, self.alpha),
                blend(b, heat.b, self.alpha),
            ]);
        }

        for reader in readers {
            let center = (reader.x as i32, reader.y as i32);
            draw_filled_circle_mut(&mut canvas, center, self.marker_radius, Rgb([255, 255, 255]));
            draw_hollow_circle_mut(
                &mut canvas,
                center,
                self.marker_radius + 2,
                Rgb([255, 0, 0]),
            );
        }

        canvas
    }
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn blend(base: u8, over: u8, alpha: f32) -> u8 {
    (base as f32 * (1.0 - alpha) + over as f32 * alpha).round() as u8
}
