use image::{Rgba, RgbaImage};

/// A packed 1-bit image: row-major, most significant bit first, each row
/// padded to a whole byte. A set bit is a black dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width_px: u32,
    height_px: u32,
    bytes_per_row: usize,
    data: Vec<u8>,
}

/// Black iff mostly opaque and dark: `alpha > 127` and luma below 128.
pub fn is_black_pixel(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    a > 127 && luma < 128.0
}

impl RasterSurface {
    /// An all-white surface.
    pub fn new(width_px: u32, height_px: u32) -> Self {
        let bytes_per_row = (width_px as usize).div_ceil(8);
        Self {
            width_px,
            height_px,
            bytes_per_row,
            data: vec![0; bytes_per_row * height_px as usize],
        }
    }

    /// Binarizes an RGBA image.
    pub fn from_image(image: &RgbaImage) -> Self {
        let mut surface = Self::new(image.width(), image.height());
        for (x, y, pixel) in image.enumerate_pixels() {
            if is_black_pixel(pixel) {
                surface.set(x, y, true);
            }
        }
        surface
    }

    pub fn width_px(&self) -> u32 {
        self.width_px
    }

    pub fn height_px(&self) -> u32 {
        self.height_px
    }

    pub fn bytes_per_row(&self) -> usize {
        self.bytes_per_row
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn is_black(&self, x: u32, y: u32) -> bool {
        if x >= self.width_px || y >= self.height_px {
            return false;
        }
        let (index, mask) = self.locate(x, y);
        self.data[index] & mask != 0
    }

    /// Sets or clears one dot; out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, black: bool) {
        if x >= self.width_px || y >= self.height_px {
            return;
        }
        let (index, mask) = self.locate(x, y);
        if black {
            self.data[index] |= mask;
        } else {
            self.data[index] &= !mask;
        }
    }

    pub fn black_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    fn locate(&self, x: u32, y: u32) -> (usize, u8) {
        let index = y as usize * self.bytes_per_row + (x / 8) as usize;
        (index, 0x80 >> (x % 8))
    }
}
