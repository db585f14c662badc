use crate::error::PipelineError;
use qrlabel_layout::{FontLibrary, LabelFaces, LayoutConfig, LayoutEngine, LayoutResult};
use qrlabel_render_core::LabelRenderer;
use qrlabel_render_lopdf::{PdfDocument, VectorRenderer};
use qrlabel_render_raster::{RasterLabel, RasterRenderer};
use qrlabel_types::LabelRequest;

/// 203 dpi, the common direct thermal resolution.
pub const DEFAULT_DOTS_PER_MM: f32 = 8.0;

/// A configured label pipeline. Cheap to share; every call is independent.
#[derive(Debug, Clone)]
pub struct LabelPipeline {
    vector: VectorRenderer,
    raster: Option<RasterRenderer>,
}

impl LabelPipeline {
    pub fn builder() -> LabelPipelineBuilder {
        LabelPipelineBuilder::new()
    }

    /// Lays the label out with the PDF font metrics.
    pub fn layout(&self, request: &LabelRequest) -> Result<LayoutResult, PipelineError> {
        request.validate()?;
        Ok(self.vector.layout(request)?)
    }

    pub fn generate_pdf(&self, request: &LabelRequest, quantity: u32) -> Result<PdfDocument, PipelineError> {
        request.validate()?;
        Ok(self.vector.render(request, quantity)?)
    }

    /// # Errors
    ///
    /// Returns `PipelineError::Config` if the pipeline was built without fonts.
    pub fn render_raster(&self, request: &LabelRequest) -> Result<RasterLabel, PipelineError> {
        let raster = self.raster.as_ref().ok_or_else(|| {
            PipelineError::Config("raster rendering needs label fonts; call with_faces() on the builder".to_string())
        })?;
        request.validate()?;
        Ok(raster.render(request)?)
    }

    pub fn has_raster(&self) -> bool {
        self.raster.is_some()
    }
}

/// Builder for `LabelPipeline`.
#[derive(Debug, Clone)]
pub struct LabelPipelineBuilder {
    layout_config: LayoutConfig,
    dots_per_mm: f32,
    faces: Option<LabelFaces>,
}

impl Default for LabelPipelineBuilder {
    fn default() -> Self {
        Self {
            layout_config: LayoutConfig::default(),
            dots_per_mm: DEFAULT_DOTS_PER_MM,
            faces: None,
        }
    }
}

impl LabelPipelineBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_layout_config(mut self, config: LayoutConfig) -> Self {
        self.layout_config = config;
        self
    }

    pub fn with_dots_per_mm(mut self, dots_per_mm: f32) -> Self {
        self.dots_per_mm = dots_per_mm;
        self
    }

    /// Enables raster rendering with these faces.
    pub fn with_faces(mut self, faces: LabelFaces) -> Self {
        self.faces = Some(faces);
        self
    }

    /// Resolves the regular and bold faces of `family` through `library`.
    pub fn with_font_family(self, library: &FontLibrary, family: &str) -> Result<Self, PipelineError> {
        let faces = library.load_label_faces(family)?;
        log::debug!("Raster fonts resolved for family '{}'", family);
        Ok(self.with_faces(faces))
    }

    pub fn build(self) -> Result<LabelPipeline, PipelineError> {
        if !(self.dots_per_mm.is_finite() && self.dots_per_mm > 0.0) {
            return Err(PipelineError::Config(format!(
                "dots_per_mm must be positive, got {}",
                self.dots_per_mm
            )));
        }
        let engine = LayoutEngine::new(self.layout_config);
        let raster = self
            .faces
            .map(|faces| RasterRenderer::new(engine.clone(), faces, self.dots_per_mm));
        Ok(LabelPipeline {
            vector: VectorRenderer::new(engine),
            raster,
        })
    }
}
