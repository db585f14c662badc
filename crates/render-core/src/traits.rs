use crate::error::RenderError;
use qrlabel_layout::{LayoutEngine, LayoutResult};
use qrlabel_types::LabelRequest;

/// A label output backend.
///
/// Each backend lays the label out with its own measurer, so the line breaks
/// it draws were decided with the metrics of the fonts it draws with.
pub trait LabelRenderer {
    type Output;

    fn engine(&self) -> &LayoutEngine;

    /// Lays the request out with the metrics of this backend's fonts.
    fn layout(&self, request: &LabelRequest) -> Result<LayoutResult, RenderError>;

    /// Draws an already computed layout.
    fn render_layout(&self, layout: &LayoutResult, request: &LabelRequest) -> Result<Self::Output, RenderError>;

    /// Validates the request, lays it out with this backend's measurer and draws it.
    fn render_label(&self, request: &LabelRequest) -> Result<Self::Output, RenderError> {
        request.validate()?;
        let layout = self.layout(request)?;
        self.render_layout(&layout, request)
    }
}
