use ndarray::Array2;

use crate::model::ReaderPosition;
use crate::prelude::{CoverageError, CoverageResult};
use crate::telemetry::log::LogManager;

/// Nominal read range of a mounted reader, in meters.
pub const DEFAULT_READ_RANGE_M: f64 = 80.0;

/// The Gaussian falloff places the nominal range at the 2.5-sigma point, so
/// intensity has decayed to a small fraction of peak at the range boundary.
const RANGE_SIGMA_RATIO: f64 = 2.5;

/// Gaussian-sum signal model evaluated over the full image grid.
pub struct CoverageModel {
    read_range_m: f64,
    logger: LogManager,
}

impl CoverageModel {
    pub fn new() -> Self {
        Self::with_read_range(DEFAULT_READ_RANGE_M)
    }

    pub fn with_read_range(read_range_m: f64) -> Self {
        Self {
            read_range_m,
            logger: LogManager::new(),
        }
    }

    /// Aggregate signal strength at every pixel of a `height x width` grid.
    ///
    /// Overlapping readers sum rather than max, so overlap zones read hotter
    /// than any single reader. Values are not normalized and may exceed 1.0.
    pub fn compute(
        &self,
        width: u32,
        height: u32,
        readers: &[ReaderPosition],
        pixels_per_meter: f64,
    ) -> CoverageResult<Array2<f32>> {
        if !(pixels_per_meter > 0.0) {
            return Err(CoverageError::InvalidScale(pixels_per_meter));
        }
        if !(self.read_range_m > 0.0) {
            return Err(CoverageError::InvalidInput(format!(
                "read range must be positive, got {}",
                self.read_range_m
            )));
        }

        let radius_px = self.read_range_m * pixels_per_meter;
        let sigma = radius_px / RANGE_SIGMA_RATIO;
        let two_sigma_sq = 2.0 * sigma * sigma;

        let mut field = Array2::<f32>::zeros((height as usize, width as usize));
        for reader in readers {
            let rx = reader.x as f64;
            let ry = reader.y as f64;
            for ((row, col), cell) in field.indexed_iter_mut() {
                let dx = col as f64 - rx;
                let dy = row as f64 - ry;
                *cell += (-(dx * dx + dy * dy) / two_sigma_sq).exp() as f32;
            }
        }

        let peak = field.iter().copied().fold(0.0f32, f32::max);
        self.logger.record(&format!(
            "coverage field {}x{} from {} readers, peak {:.3}",
            width,
            height,
            readers.len(),
            peak
        ));

        Ok(field)
    }
}

impl Default for CoverageModel {
    fn default() -> Self {
        Self::new()
    }
}
