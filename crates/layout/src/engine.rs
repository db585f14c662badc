use crate::config::LayoutConfig;
use crate::output::{LayoutResult, MultiLineBlock, QrBlock, TextBlock};
use crate::text::{FittedText, fit_text};
use qrlabel_traits::FontMeasurer;
use qrlabel_types::{LabelRequest, pt_to_mm};

/// Computes label layouts. Stateless apart from its configuration, so one engine
/// can serve any number of requests and identical inputs give identical results.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    fn line_height(&self, font_size: f32) -> f32 {
        pt_to_mm(font_size) * self.config.line_height_factor
    }

    /// Lays out `request` using `measurer` for every width decision.
    ///
    /// Never fails: text that cannot fit even at a block's minimum size is left
    /// overflowing, and clipping it is up to the renderer.
    pub fn compute(&self, request: &LabelRequest, measurer: &dyn FontMeasurer) -> LayoutResult {
        let cfg = &self.config;
        let size = request.size_mm;

        let qr_block = QrBlock {
            x: cfg.margin_left_mm,
            y: cfg.base_margin_top_mm + request.margin_top_mm,
            size: cfg.qr_size_mm,
        };

        // Centered under the QR; IDs are short so no shrinking is attempted.
        let id_width = measurer.measure(&request.id_text, cfg.id_font_size, true);
        let id_block = TextBlock {
            text: request.id_text.clone(),
            x: qr_block.x + (qr_block.size - id_width) / 2.0,
            y: qr_block.y + qr_block.size + cfg.id_gap_mm,
            font_size: cfg.id_font_size,
            bold: true,
        };

        let column_x = qr_block.x + qr_block.size + cfg.column_gap_mm;
        let content_width = (size.width - column_x - cfg.margin_right_mm).max(0.0);

        let name = fit_text(&request.name_text, &cfg.name_fit(), content_width, measurer);
        let name_block = self.multi_line(name, column_x, qr_block.y, true);

        let city_y = self.next_block_y(qr_block.y, &name_block);
        let city = fit_text(&request.city_text, &cfg.city_fit(), content_width, measurer);
        let city_block = self.multi_line(city, column_x, city_y, false);

        let sales_y = if city_block.is_empty() {
            city_y
        } else {
            city_block.bottom() + cfg.block_gap_mm
        };
        let sales_block = TextBlock {
            text: request.sales_text.clone(),
            x: column_x,
            y: sales_y,
            font_size: cfg.sales_font_size,
            bold: false,
        };

        let content_end = if sales_block.text.is_empty() {
            city_block.bottom()
        } else {
            sales_block.y + self.line_height(sales_block.font_size)
        };

        // Same row as the ID unless the text column has already grown past it.
        let branch_block = TextBlock {
            text: request.branch_text.clone(),
            x: column_x,
            y: id_block.y.max(content_end),
            font_size: cfg.branch_font_size,
            bold: true,
        };

        if branch_block.y > id_block.y {
            log::debug!(
                "Branch pushed down to {:.2}mm by text column ending at {:.2}mm",
                branch_block.y,
                content_end
            );
        }

        LayoutResult {
            size_mm: size,
            padding_bottom_mm: request.padding_bottom_mm,
            content_width_mm: content_width,
            qr_block,
            id_block,
            name_block,
            city_block,
            sales_block,
            branch_block,
        }
    }

    fn multi_line(&self, fitted: FittedText, x: f32, y: f32, bold: bool) -> MultiLineBlock {
        MultiLineBlock {
            line_height_mm: self.line_height(fitted.font_size),
            lines: fitted.lines,
            x,
            y,
            font_size: fitted.font_size,
            bold,
        }
    }

    fn next_block_y(&self, top: f32, previous: &MultiLineBlock) -> f32 {
        if previous.is_empty() {
            top
        } else {
            previous.bottom() + self.config.block_gap_mm
        }
    }
}
