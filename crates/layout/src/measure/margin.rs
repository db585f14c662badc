use qrlabel_traits::FontMeasurer;

/// Default widening applied to canvas-style measurements.
pub const DEFAULT_SAFETY_FACTOR: f32 = 1.1;

/// Scales another measurer's widths so layout leaves slack for a renderer
/// whose glyph placement may run slightly wider than the measured advances.
#[derive(Debug, Clone)]
pub struct SafetyMarginMeasurer<M> {
    inner: M,
    factor: f32,
}

impl<M: FontMeasurer> SafetyMarginMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self::with_factor(inner, DEFAULT_SAFETY_FACTOR)
    }

    pub fn with_factor(inner: M, factor: f32) -> Self {
        Self { inner, factor }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

impl<M: FontMeasurer> FontMeasurer for SafetyMarginMeasurer<M> {
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32 {
        self.inner.measure(text, font_size_pt, bold) * self.factor
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
