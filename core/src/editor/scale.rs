/// Widest background the drawing surface will show without scrolling.
pub const MAX_DISPLAY_WIDTH: u32 = 1000;

/// Mapping between canonical full-resolution pixels and the scaled display copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    canonical_width: u32,
    canonical_height: u32,
    display_width: u32,
    display_height: u32,
    ratio: f64,
}

impl DisplayScale {
    /// Fits `width x height` under `max_display_width`. Images narrower than
    /// the limit keep their size; the display copy is never upscaled.
    pub fn fit(width: u32, height: u32, max_display_width: u32) -> Self {
        let ratio = if width > 0 {
            (max_display_width as f64 / width as f64).min(1.0)
        } else {
            1.0
        };
        Self {
            canonical_width: width,
            canonical_height: height,
            display_width: (width as f64 * ratio).round() as u32,
            display_height: (height as f64 * ratio).round() as u32,
            ratio,
        }
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn canonical_width(&self) -> u32 {
        self.canonical_width
    }

    pub fn canonical_height(&self) -> u32 {
        self.canonical_height
    }

    pub fn display_width(&self) -> u32 {
        self.display_width
    }

    pub fn display_height(&self) -> u32 {
        self.display_height
    }

    /// Maps a display-space point back to canonical space.
    ///
    /// The factor is recomputed from the stored dimension pair rather than
    /// the cached ratio, so display-width rounding cannot skew the mapping.
    pub fn to_canonical(&self, x: f64, y: f64) -> (f64, f64) {
        if self.display_width == 0 {
            return (0.0, 0.0);
        }
        let scale_back = self.canonical_width as f64 / self.display_width as f64;
        (x * scale_back, y * scale_back)
    }

    /// Maps a canonical point into display space.
    pub fn to_display(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.ratio, y * self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_images_are_never_upscaled() {
        let scale = DisplayScale::fit(640, 480, MAX_DISPLAY_WIDTH);
        assert_eq!(scale.ratio(), 1.0);
        assert_eq!(scale.display_width(), 640);
        assert_eq!(scale.display_height(), 480);
    }

    #[test]
    fn wide_images_shrink_to_the_display_limit() {
        let scale = DisplayScale::fit(1200, 900, 1000);
        assert!((scale.ratio() - 0.8333).abs() < 1e-4);
        assert_eq!(scale.display_width(), 1000);
        assert_eq!(scale.display_height(), 750);
    }

    #[test]
    fn round_trip_recovers_points_within_one_pixel() {
        for (width, height) in [(1000, 700), (1200, 900), (1777, 333), (2500, 2500)] {
            let scale = DisplayScale::fit(width, height, MAX_DISPLAY_WIDTH);
            for canonical in [(0.0, 0.0), (17.0, 45.0), (width as f64 - 1.0, 1.0)] {
                let (dx, dy) = scale.to_display(canonical.0, canonical.1);
                let (cx, cy) = scale.to_canonical(dx, dy);
                assert!((cx - canonical.0).abs() <= 1.0);
                assert!((cy - canonical.1).abs() <= 1.0);
            }
        }
    }

    #[test]
    fn zero_width_image_maps_to_origin() {
        let scale = DisplayScale::fit(0, 0, MAX_DISPLAY_WIDTH);
        assert_eq!(scale.to_canonical(10.0, 10.0), (0.0, 0.0));
    }
}
