use image::{Rgba, RgbaImage};
use zeno::Placement;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// An opaque white RGBA drawing surface at printer resolution.
///
/// All drawing is black: filled rectangles for QR modules and coverage masks
/// for glyphs. Anything outside the bounds is clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::from_pixel(width, height, WHITE) }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fills the half-open pixel rectangle `[x0, x1) × [y0, y1)` with black.
    pub fn fill_black(&mut self, x0: i64, y0: i64, x1: i64, y1: i64) {
        let x0 = x0.clamp(0, self.width() as i64) as u32;
        let x1 = x1.clamp(0, self.width() as i64) as u32;
        let y0 = y0.clamp(0, self.height() as i64) as u32;
        let y1 = y1.clamp(0, self.height() as i64) as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x, y, BLACK);
            }
        }
    }

    /// Darkens pixels by an 8-bit coverage mask placed at `placement`.
    pub fn blend_coverage(&mut self, coverage: &[u8], placement: Placement) {
        let mask_width = placement.width as usize;
        for row in 0..placement.height as usize {
            let y = placement.top as i64 + row as i64;
            if y < 0 || y >= self.height() as i64 {
                continue;
            }
            for col in 0..mask_width {
                let x = placement.left as i64 + col as i64;
                if x < 0 || x >= self.width() as i64 {
                    continue;
                }
                let alpha = coverage.get(row * mask_width + col).copied().unwrap_or(0) as u16;
                if alpha == 0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(x as u32, y as u32);
                for channel in &mut pixel.0[..3] {
                    *channel = (*channel as u16 * (255 - alpha) / 255) as u8;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_is_clipped() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_black(-2, -2, 2, 2);
        assert_eq!(*canvas.image().get_pixel(0, 0), BLACK);
        assert_eq!(*canvas.image().get_pixel(1, 1), BLACK);
        assert_eq!(*canvas.image().get_pixel(2, 2), WHITE);

        canvas.fill_black(3, 3, 100, 100);
        assert_eq!(*canvas.image().get_pixel(3, 3), BLACK);
    }

    #[test]
    fn test_blend_coverage() {
        let mut canvas = Canvas::new(3, 1);
        let placement = Placement { left: 1, top: 0, width: 3, height: 1 };
        canvas.blend_coverage(&[255, 128, 0], placement);
        assert_eq!(*canvas.image().get_pixel(0, 0), WHITE);
        assert_eq!(*canvas.image().get_pixel(1, 0), BLACK);
        assert_eq!(canvas.image().get_pixel(2, 0).0[0], 127);
    }
}
