use crate::canvas::Canvas;
use crate::escpos::{EscPosBuilder, MAX_RASTER_DIMENSION};
use crate::glyph;
use crate::surface::RasterSurface;
use qrlabel_layout::{FaceMeasurer, LabelFaces, LayoutEngine, LayoutResult, SafetyMarginMeasurer};
use qrlabel_render_core::utils::{mm_to_px, pt_to_px};
use qrlabel_render_core::{LabelRenderer, QrMatrix, RenderError};
use qrlabel_types::LabelRequest;

/// A rendered label: the 1-bit image and the `GS v 0` command that prints it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterLabel {
    pub surface: RasterSurface,
    pub commands: Vec<u8>,
}

/// Renders labels at printer resolution for direct thermal printing.
///
/// Layout uses the advances of the same TrueType faces the glyphs are drawn
/// with, widened by the default safety margin.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    layout_engine: LayoutEngine,
    faces: LabelFaces,
    dots_per_mm: f32,
}

impl RasterRenderer {
    pub fn new(layout_engine: LayoutEngine, faces: LabelFaces, dots_per_mm: f32) -> Self {
        Self {
            layout_engine,
            faces,
            dots_per_mm,
        }
    }

    pub fn dots_per_mm(&self) -> f32 {
        self.dots_per_mm
    }

    pub fn faces(&self) -> &LabelFaces {
        &self.faces
    }

    pub fn render(&self, request: &LabelRequest) -> Result<RasterLabel, RenderError> {
        self.render_label(request)
    }

    /// Pixel dimensions for a layout: label height plus the bottom padding.
    pub fn surface_size(&self, layout: &LayoutResult) -> Result<(u32, u32), RenderError> {
        if !(self.dots_per_mm.is_finite() && self.dots_per_mm > 0.0) {
            return Err(RenderError::Raster(format!("invalid resolution {} dots/mm", self.dots_per_mm)));
        }
        let width = mm_to_px(layout.size_mm.width, self.dots_per_mm).round();
        let height = mm_to_px(layout.size_mm.height + layout.padding_bottom_mm, self.dots_per_mm).round();
        if !(width >= 1.0 && height >= 1.0) {
            return Err(RenderError::Raster(format!("label rasterizes to {}x{} dots", width, height)));
        }
        let (width, height) = (width as u32, height as u32);
        if (width as usize).div_ceil(8) > MAX_RASTER_DIMENSION || height as usize > MAX_RASTER_DIMENSION {
            return Err(RenderError::Raster(format!("{}x{} dots exceeds the raster command limits", width, height)));
        }
        Ok((width, height))
    }

    /// Draws the layout onto a fresh canvas.
    pub fn draw(&self, layout: &LayoutResult, qr_payload: &str) -> Result<Canvas, RenderError> {
        let (width, height) = self.surface_size(layout)?;
        let qr = QrMatrix::encode(qr_payload)?;

        let mut canvas = Canvas::new(width, height);
        self.draw_qr(&mut canvas, layout, &qr);

        let dpmm = self.dots_per_mm;
        let faces = FaceMeasurer::new(&self.faces)?;
        for line in layout.lines() {
            glyph::draw_text(
                &mut canvas,
                faces.face(line.bold),
                line.text,
                mm_to_px(line.x, dpmm),
                mm_to_px(line.baseline_y(), dpmm),
                pt_to_px(line.font_size, dpmm),
            );
        }
        Ok(canvas)
    }

    fn draw_qr(&self, canvas: &mut Canvas, layout: &LayoutResult, qr: &QrMatrix) {
        let block = &layout.qr_block;
        let origin_x = mm_to_px(block.x, self.dots_per_mm);
        let origin_y = mm_to_px(block.y, self.dots_per_mm);
        let module = mm_to_px(block.size, self.dots_per_mm) / qr.width() as f32;
        // Rounding both edges from the origin keeps adjacent modules gap-free.
        let edge = |origin: f32, i: usize| (origin + i as f32 * module).round() as i64;
        for my in 0..qr.width() {
            for mx in 0..qr.width() {
                if qr.is_dark(mx, my) {
                    canvas.fill_black(edge(origin_x, mx), edge(origin_y, my), edge(origin_x, mx + 1), edge(origin_y, my + 1));
                }
            }
        }
    }
}

impl LabelRenderer for RasterRenderer {
    type Output = RasterLabel;

    fn engine(&self) -> &LayoutEngine {
        &self.layout_engine
    }

    fn layout(&self, request: &LabelRequest) -> Result<LayoutResult, RenderError> {
        let measurer = SafetyMarginMeasurer::new(FaceMeasurer::new(&self.faces)?);
        Ok(self.layout_engine.compute(request, &measurer))
    }

    fn render_layout(&self, layout: &LayoutResult, request: &LabelRequest) -> Result<RasterLabel, RenderError> {
        let canvas = self.draw(layout, &request.qr_payload)?;
        let surface = RasterSurface::from_image(canvas.image());
        let commands = EscPosBuilder::new().raster_image(&surface).build();
        log::info!(
            "Rasterized label '{}' to {}x{} dots ({} command bytes)",
            request.id_text,
            surface.width_px(),
            surface.height_px(),
            commands.len()
        );
        Ok(RasterLabel { surface, commands })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use qrlabel_types::SizeMm;

    fn bundled_faces() -> LabelFaces {
        let regular = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");
        let bold = include_bytes!("../../../assets/fonts/DejaVuSans-Bold.ttf");
        LabelFaces::new(Arc::new(regular.to_vec()), Arc::new(bold.to_vec())).unwrap()
    }

    fn request() -> LabelRequest {
        let mut req = LabelRequest::new(SizeMm::new(55.0, 43.0));
        req.id_text = "SMG1024".into();
        req.name_text = "TOKO MAJU JAYA SENTOSA ABADI".into();
        req.city_text = "SEMARANG".into();
        req.branch_text = "BT SMG".into();
        req.qr_payload = "SMG1024".into();
        req
    }

    #[test]
    fn test_surface_dimensions_and_header() {
        let renderer = RasterRenderer::new(LayoutEngine::default(), bundled_faces(), 8.0);
        let label = renderer.render(&request().with_padding_bottom(2.0)).unwrap();

        assert_eq!(label.surface.width_px(), 440);
        assert_eq!(label.surface.height_px(), 360);
        assert_eq!(label.surface.bytes_per_row(), 55);
        assert_eq!(&label.commands[..8], &[0x1D, 0x76, 0x30, 0x00, 55, 0, 0x68, 0x01]);
        assert_eq!(label.commands.len(), 8 + 55 * 360);
        assert_eq!(&label.commands[8..], label.surface.data());
    }

    #[test]
    fn test_qr_and_text_are_drawn() {
        let renderer = RasterRenderer::new(LayoutEngine::default(), bundled_faces(), 8.0);
        let req = request();
        let layout = renderer.layout(&req).unwrap();
        let label = renderer.render(&req).unwrap();

        // Top-left finder pattern module sits at the QR origin (2mm, 2mm).
        assert!(label.surface.is_black(17, 17));

        // Something is inked in the text column, and the padding-free bottom edge stays white.
        let column_x = (layout.name_block.x * 8.0) as u32;
        let inked = (column_x..440).any(|x| (16..40).any(|y| label.surface.is_black(x, y)));
        assert!(inked);
        assert!((0..440).all(|x| !label.surface.is_black(x, 343)));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let renderer = RasterRenderer::new(LayoutEngine::default(), bundled_faces(), 8.0);
        assert_eq!(renderer.render(&request()).unwrap(), renderer.render(&request()).unwrap());
    }

    #[test]
    fn test_zero_sized_raster_fails() {
        let renderer = RasterRenderer::new(LayoutEngine::default(), bundled_faces(), 0.01);
        let mut req = request();
        req.size_mm = SizeMm::new(10.0, 10.0);
        assert!(matches!(renderer.render(&req), Err(RenderError::Raster(_))));
    }

    #[test]
    fn test_nan_padding_is_not_a_zero_row_raster() {
        let renderer = RasterRenderer::new(LayoutEngine::default(), bundled_faces(), 8.0);
        let req = request().with_padding_bottom(f32::NAN);
        assert!(matches!(renderer.render(&req), Err(RenderError::Label(_))));

        // Drawing a layout that skipped validation still refuses the size.
        let layout = renderer.layout(&req).unwrap();
        assert!(matches!(renderer.surface_size(&layout), Err(RenderError::Raster(_))));
    }

    #[test]
    fn test_glyph_coverage_lands_near_pen() {
        let faces = bundled_faces();
        let face = faces.face(true).unwrap();
        let mut canvas = Canvas::new(100, 60);
        let advance = glyph::draw_text(&mut canvas, &face, "H", 10.0, 50.0, 40.0);
        assert!(advance > 10.0);

        let surface = RasterSurface::from_image(canvas.image());
        assert!(surface.black_count() > 50);
        // Nothing left of the pen or below the baseline for a capital H.
        assert!((0..60).all(|y| !surface.is_black(5, y)));
        assert!((0..100).all(|x| !surface.is_black(x, 55)));
    }
}
