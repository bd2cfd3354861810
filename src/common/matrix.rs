use image::{Rgb, RgbImage};

use super::error::{BlueprintError, BlueprintResult};

// Module source
//------------------------------------------------------------------------------

/// Anything that can report the modules of a square barcode symbol.
pub trait ModuleSource {
    fn module_count(&self) -> usize;
    fn is_dark(&self, row: usize, col: usize) -> bool;
}

impl ModuleSource for qrcode::QrCode {
    fn module_count(&self) -> usize {
        self.width()
    }

    // QrCode indexes by (x, y)
    fn is_dark(&self, row: usize, col: usize) -> bool {
        self[(col, row)] == qrcode::Color::Dark
    }
}

// Module matrix
//------------------------------------------------------------------------------

/// Square grid of modules, `true` for dark. Origin is the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleMatrix {
    grid: Vec<bool>,
    w: usize,
}

impl ModuleMatrix {
    pub fn new(rows: Vec<Vec<bool>>) -> BlueprintResult<Self> {
        let w = rows.len();
        if rows.iter().any(|r| r.len() != w) {
            return Err(BlueprintError::NonSquareMatrix);
        }
        Ok(Self { grid: rows.into_iter().flatten().collect(), w })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_side(w: usize) -> Self {
        Self { grid: vec![false; w * w], w }
    }

    pub fn side(&self) -> usize {
        self.w
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.w && y < self.w, "Module ({x}, {y}) out of bounds {}", self.w);
        self.grid[y * self.w + x]
    }

    pub fn set(&mut self, x: usize, y: usize, dark: bool) {
        debug_assert!(x < self.w && y < self.w, "Module ({x}, {y}) out of bounds {}", self.w);
        self.grid[y * self.w + x] = dark;
    }

    pub fn count_dark(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    /// Coordinates `(x, y)` of dark modules, row by row from the top.
    pub fn dark_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.w;
        self.grid.iter().enumerate().filter(|&(_, &m)| m).map(move |(i, _)| (i % w, i / w))
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        if self.w == 0 {
            return Vec::new();
        }
        self.grid.chunks_exact(self.w).map(<[bool]>::to_vec).collect()
    }
}

impl ModuleSource for ModuleMatrix {
    fn module_count(&self) -> usize {
        self.w
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(col, row)
    }
}

// Render
//------------------------------------------------------------------------------

impl ModuleMatrix {
    /// Black on white bitmap, `module_sz` pixels per module, no quiet zone.
    pub fn to_image(&self, module_sz: u32) -> RgbImage {
        let sz = self.w as u32 * module_sz;
        RgbImage::from_fn(sz, sz, |j, i| {
            let (c, r) = ((j / module_sz) as usize, (i / module_sz) as usize);
            if self.get(c, r) {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        })
    }

    pub fn to_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w * 2 + 1));
        for r in 0..self.w {
            for c in 0..self.w {
                res.push_str(if self.get(c, r) { "██" } else { "  " });
            }
            res.push('\n');
        }
        res
    }
}

#[cfg(test)]
mod matrix_tests {
    use super::{ModuleMatrix, ModuleSource};
    use crate::common::BlueprintError;

    fn diagonal() -> ModuleMatrix {
        ModuleMatrix::new(vec![vec![false, true], vec![true, false]]).unwrap()
    }

    #[test]
    fn test_new_rejects_non_square() {
        let rows = vec![vec![true, false, true], vec![false, true, false]];
        assert_eq!(ModuleMatrix::new(rows), Err(BlueprintError::NonSquareMatrix));
    }

    #[test]
    fn test_new_rejects_ragged() {
        let rows = vec![vec![true, false], vec![false]];
        assert_eq!(ModuleMatrix::new(rows), Err(BlueprintError::NonSquareMatrix));
    }

    #[test]
    fn test_empty() {
        let m = ModuleMatrix::new(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m, ModuleMatrix::empty());
        assert_eq!(m.dark_cells().count(), 0);
        assert!(m.to_rows().is_empty());
    }

    #[test]
    fn test_get_is_column_then_row() {
        let m = ModuleMatrix::new(vec![vec![false, true], vec![false, false]]).unwrap();
        assert!(m.get(1, 0));
        assert!(!m.get(0, 1));
        assert!(m.is_dark(0, 1));
    }

    #[test]
    fn test_dark_cells_row_major() {
        let m = ModuleMatrix::new(vec![
            vec![true, false, true],
            vec![false, false, false],
            vec![false, true, false],
        ])
        .unwrap();
        let cells = m.dark_cells().collect::<Vec<_>>();
        assert_eq!(cells, vec![(0, 0), (2, 0), (1, 2)]);
        assert_eq!(m.count_dark(), 3);
    }

    #[test]
    fn test_to_rows() {
        assert_eq!(diagonal().to_rows(), vec![vec![false, true], vec![true, false]]);
    }

    #[test]
    fn test_to_image() {
        let img = diagonal().to_image(3);
        assert_eq!(img.dimensions(), (6, 6));
        assert_eq!(img.get_pixel(4, 1).0, [0, 0, 0]);
        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(2, 3).0, [0, 0, 0]);
    }

    #[test]
    fn test_to_str() {
        assert_eq!(diagonal().to_str(), "  ██\n██  \n");
    }

    #[test]
    fn test_qrcode_module_source() {
        let qr = qrcode::QrCode::new(b"01234567").unwrap();
        assert_eq!(qr.module_count(), 21);
        // Top-left finder corner is always dark, the separator next to it light
        assert!(qr.is_dark(0, 0));
        assert!(!qr.is_dark(7, 7));
        assert!(qr.is_dark(0, 20));
    }
}
