use std::cmp;

use image::{GenericImageView, Pixel};
use tracing::debug;

use crate::common::ModuleMatrix;

// Pixel sampler
//------------------------------------------------------------------------------

/// Rebuilds a module matrix from a rendered bitmap.
///
/// The bitmap is expected to hold only the symbol, without a quiet zone. When the
/// module count is not given it is estimated as the square root of the pixel count,
/// which is only right when every module was drawn as a single pixel.
#[derive(Debug, Default, Clone, Copy)]
pub struct PixelSampler {
    module_count: Option<usize>,
}

impl PixelSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module_count(&mut self, n: usize) -> &mut Self {
        self.module_count = Some(n);
        self
    }

    pub fn sample<I>(&self, img: &I) -> ModuleMatrix
    where
        I: GenericImageView,
        I::Pixel: Pixel<Subpixel = u8>,
    {
        let (w, h) = img.dimensions();
        if w == 0 || h == 0 {
            debug!("Nothing rendered, returning empty matrix");
            return ModuleMatrix::empty();
        }

        let n = self.module_count.unwrap_or_else(|| Self::estimate_module_count(w, h));
        if n == 0 || n.checked_mul(n).is_none() {
            debug!(modules = n, "Module count out of range, returning empty matrix");
            return ModuleMatrix::empty();
        }

        let px_per_mod = w as f64 / n as f64;
        let stride = cmp::max(1, (px_per_mod / 2.0).floor() as usize);
        debug!(modules = n, px_per_mod, stride, "Sampling {w}x{h} bitmap");

        let mut matrix = ModuleMatrix::with_side(n);
        for y in (0..h).step_by(stride) {
            for x in (0..w).step_by(stride) {
                if !is_dark(img.get_pixel(x, y)) {
                    continue;
                }
                let c = (x as f64 / px_per_mod).floor() as usize;
                let r = (y as f64 / px_per_mod).floor() as usize;
                if c < n && r < n {
                    matrix.set(c, r, true);
                }
            }
        }
        matrix
    }

    fn estimate_module_count(w: u32, h: u32) -> usize {
        (w as f64 * h as f64).sqrt().round() as usize
    }
}

// Every channel below half intensity, alpha ignored
fn is_dark<P: Pixel<Subpixel = u8>>(px: P) -> bool {
    px.to_rgb().0.iter().all(|&ch| ch < 128)
}
