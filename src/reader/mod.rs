//! Module matrix extraction.
//!
//! Two strategies are offered. [`extract`] asks the symbol for its modules directly and
//! is exact. [`PixelSampler`] estimates the modules from a rendered bitmap and is only a
//! fallback for when nothing but pixels are available: at low resolutions, or when pixel
//! and module boundaries do not line up, neighbouring modules can bleed into each other.

mod sample;

pub use sample::PixelSampler;

use tracing::debug;

use crate::common::{ModuleMatrix, ModuleSource};

/// Copies every module of `src` into a new matrix.
pub fn extract<S: ModuleSource + ?Sized>(src: &S) -> ModuleMatrix {
    let n = src.module_count();
    debug!(modules = n, "Extracting module matrix");

    let mut matrix = ModuleMatrix::with_side(n);
    for r in 0..n {
        for c in 0..n {
            if src.is_dark(r, c) {
                matrix.set(c, r, true);
            }
        }
    }
    matrix
}

#[cfg(test)]
mod reader_tests {
    use super::extract;
    use crate::common::{ModuleMatrix, ModuleSource};

    struct Checkerboard(usize);

    impl ModuleSource for Checkerboard {
        fn module_count(&self) -> usize {
            self.0
        }

        fn is_dark(&self, row: usize, col: usize) -> bool {
            (row + col) & 1 == 0
        }
    }

    #[test]
    fn test_extract_checkerboard() {
        let m = extract(&Checkerboard(3));
        let exp = ModuleMatrix::new(vec![
            vec![true, false, true],
            vec![false, true, false],
            vec![true, false, true],
        ])
        .unwrap();
        assert_eq!(m, exp);
    }

    #[test]
    fn test_extract_empty_source() {
        let m = extract(&Checkerboard(0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_extract_orientation() {
        // Only row 0, col 2 is dark, which is x = 2, y = 0 in the matrix
        struct Single;
        impl ModuleSource for Single {
            fn module_count(&self) -> usize {
                3
            }
            fn is_dark(&self, row: usize, col: usize) -> bool {
                row == 0 && col == 2
            }
        }
        let m = extract(&Single);
        assert_eq!(m.dark_cells().collect::<Vec<_>>(), vec![(2, 0)]);
    }

    #[test]
    fn test_extract_qrcode() {
        let qr = qrcode::QrCode::with_error_correction_level(b"https://factorio.com", qrcode::EcLevel::M)
            .unwrap();
        let m = extract(&qr);
        assert_eq!(m.side(), qr.width());
        let dark = qr.to_colors().iter().filter(|&&c| c == qrcode::Color::Dark).count();
        assert_eq!(m.count_dark(), dark);
    }
}
