//! The text measurement capability the layout engine depends on.

/// Measures the advance width of a single line of text.
///
/// The layout engine computes line breaks and font fallbacks once with a
/// measurer, and a renderer later draws those lines with its own backend.
/// A renderer must therefore compute its layout with a measurer whose widths
/// are never smaller than what it will actually draw; otherwise a line that
/// fit during layout can overflow on the label.
pub trait FontMeasurer: Send + Sync {
    /// Width of `text` in millimetres when set at `font_size_pt`.
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32;

    /// Short name for logging.
    fn name(&self) -> &'static str {
        "measurer"
    }
}

impl<M: FontMeasurer + ?Sized> FontMeasurer for &M {
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32 {
        (**self).measure(text, font_size_pt, bold)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<M: FontMeasurer + ?Sized> FontMeasurer for Box<M> {
    fn measure(&self, text: &str, font_size_pt: f32, bold: bool) -> f32 {
        (**self).measure(text, font_size_pt, bold)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
