use qrlabel_types::{SizeMm, pt_to_mm};

/// Position of the QR symbol, in millimetres from the label's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrBlock {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// A single line of text. `y` is the top of the line; `font_size` is in points.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub bold: bool,
}

/// A wrapped block of text lines sharing one font size.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineBlock {
    pub lines: Vec<String>,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub bold: bool,
    pub line_height_mm: f32,
}

impl MultiLineBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height_mm
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height()
    }
}

/// One drawable line of text, as both renderers consume it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLine<'a> {
    pub text: &'a str,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub bold: bool,
}

impl PlacedLine<'_> {
    /// Baseline position in millimetres, using the same ascent ratio on every backend.
    pub fn baseline_y(&self) -> f32 {
        self.y + pt_to_mm(self.font_size) * 0.8
    }
}

/// The device-independent label layout.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub size_mm: SizeMm,
    pub padding_bottom_mm: f32,
    /// Width available to the right-hand text column.
    pub content_width_mm: f32,
    pub qr_block: QrBlock,
    pub id_block: TextBlock,
    pub name_block: MultiLineBlock,
    pub city_block: MultiLineBlock,
    pub sales_block: TextBlock,
    pub branch_block: TextBlock,
}

impl LayoutResult {
    /// Every non-empty line in drawing order: ID, name, city, sales, branch.
    pub fn lines(&self) -> Vec<PlacedLine<'_>> {
        let mut out = Vec::new();
        push_single(&mut out, &self.id_block);
        push_multi(&mut out, &self.name_block);
        push_multi(&mut out, &self.city_block);
        push_single(&mut out, &self.sales_block);
        push_single(&mut out, &self.branch_block);
        out
    }
}

fn push_single<'a>(out: &mut Vec<PlacedLine<'a>>, block: &'a TextBlock) {
    if block.text.is_empty() {
        return;
    }
    out.push(PlacedLine {
        text: &block.text,
        x: block.x,
        y: block.y,
        font_size: block.font_size,
        bold: block.bold,
    });
}

fn push_multi<'a>(out: &mut Vec<PlacedLine<'a>>, block: &'a MultiLineBlock) {
    for (i, line) in block.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        out.push(PlacedLine {
            text: line,
            x: block.x,
            y: block.y + i as f32 * block.line_height_mm,
            font_size: block.font_size,
            bold: block.bold,
        });
    }
}
