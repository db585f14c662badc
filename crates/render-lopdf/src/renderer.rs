use crate::filename::document_filename;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, ObjectId, Stream, StringFormat, dictionary};
use qrlabel_layout::{LayoutEngine, LayoutResult, PlacedLine, StandardFontMeasurer};
use qrlabel_render_core::utils::{flip_y, mm_to_pdf};
use qrlabel_render_core::{LabelRenderer, QrMatrix, RenderError};
use qrlabel_types::{LabelRequest, mm_to_pt};

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";
const QR_IMAGE: &str = "Im1";

/// A finished PDF and the file name it should be saved under.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub page_count: usize,
}

/// Renders labels as vector PDFs: one page per copy, text in the base-14
/// Helvetica fonts, the QR symbol as an 8-bit gray image.
#[derive(Debug, Clone, Default)]
pub struct VectorRenderer {
    layout_engine: LayoutEngine,
    measurer: StandardFontMeasurer,
}

impl VectorRenderer {
    pub fn new(layout_engine: LayoutEngine) -> Self {
        Self { layout_engine, measurer: StandardFontMeasurer::new() }
    }

    /// Renders `quantity` identical pages. A quantity of zero prints one copy.
    pub fn render(&self, request: &LabelRequest, quantity: u32) -> Result<PdfDocument, RenderError> {
        request.validate()?;
        let layout = self.layout(request)?;
        self.render_copies(&layout, request, quantity)
    }

    pub fn render_copies(
        &self,
        layout: &LayoutResult,
        request: &LabelRequest,
        quantity: u32,
    ) -> Result<PdfDocument, RenderError> {
        let copies = quantity.max(1) as usize;
        // Encode before touching the document so a failure leaves nothing behind.
        let qr = QrMatrix::encode(&request.qr_payload)?;

        let page_width = mm_to_pt(layout.size_mm.width);
        let page_height = mm_to_pt(layout.size_mm.height);

        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let regular_id = document.add_object(font_dictionary("Helvetica"));
        let bold_id = document.add_object(font_dictionary("Helvetica-Bold"));
        let image_id = document.add_object(qr_image_stream(&qr));
        let resources_id = document.add_object(dictionary! {
            "Font" => dictionary! {
                REGULAR_FONT => regular_id,
                BOLD_FONT => bold_id,
            },
            "XObject" => dictionary! {
                QR_IMAGE => image_id,
            },
        });

        let content = PageContent::new(page_height).draw(layout).finish();
        let content_id = document.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_ids: Vec<ObjectId> = (0..copies)
            .map(|_| {
                document.add_object(dictionary! {
                    "Type" => "Page",
                    "Parent" => pages_id,
                    "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
                    "Contents" => content_id,
                    "Resources" => resources_id,
                })
            })
            .collect();

        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids.iter().map(|id| Object::from(*id)).collect::<Vec<Object>>(),
            "Count" => copies as i64,
        };
        document.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let filename = document_filename(&request.name_text, &request.city_text, &request.id_text);
        let info_id = document.add_object(dictionary! {
            "Title" => Object::String(to_win_ansi(filename.trim_end_matches(".pdf")), StringFormat::Literal),
            "Producer" => Object::string_literal("qrlabel"),
        });
        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);
        document.trailer.set("Info", info_id);

        let mut bytes = Vec::new();
        document.save_to(&mut bytes)?;

        log::info!("Rendered {} ({} page(s), {} bytes)", filename, copies, bytes.len());
        Ok(PdfDocument { bytes, filename, page_count: copies })
    }
}

impl LabelRenderer for VectorRenderer {
    type Output = PdfDocument;

    fn engine(&self) -> &LayoutEngine {
        &self.layout_engine
    }

    fn layout(&self, request: &LabelRequest) -> Result<LayoutResult, RenderError> {
        Ok(self.layout_engine.compute(request, &self.measurer))
    }

    fn render_layout(&self, layout: &LayoutResult, request: &LabelRequest) -> Result<PdfDocument, RenderError> {
        self.render_copies(layout, request, 1)
    }
}

fn font_dictionary(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}

fn qr_image_stream(qr: &QrMatrix) -> Stream {
    let side = qr.width() as i64;
    let mut stream = Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => side,
            "Height" => side,
            "ColorSpace" => "DeviceGray",
            "BitsPerComponent" => 8,
            "Interpolate" => false,
        },
        qr.to_gray_samples(),
    );
    stream.allows_compression = false;
    stream
}

/// Code points WinAnsiEncoding places in 0x80..=0x9F, where Latin-1 has C1 controls.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80), ('\u{201A}', 0x82), ('\u{0192}', 0x83), ('\u{201E}', 0x84),
    ('\u{2026}', 0x85), ('\u{2020}', 0x86), ('\u{2021}', 0x87), ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89), ('\u{0160}', 0x8A), ('\u{2039}', 0x8B), ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E), ('\u{2018}', 0x91), ('\u{2019}', 0x92), ('\u{201C}', 0x93),
    ('\u{201D}', 0x94), ('\u{2022}', 0x95), ('\u{2013}', 0x96), ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98), ('\u{2122}', 0x99), ('\u{0161}', 0x9A), ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C), ('\u{017E}', 0x9E), ('\u{0178}', 0x9F),
];

fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c as u32 {
            0..=0x7F | 0xA0..=0xFF => c as u8,
            _ => WIN_ANSI_HIGH
                .iter()
                .find(|(ch, _)| *ch == c)
                .map_or(b'?', |&(_, byte)| byte),
        })
        .collect()
}

/// Builds the content stream shared by every page of a label document.
struct PageContent {
    page_height: f32,
    content: Content,
    state: PageRenderState,
}

#[derive(Default)]
struct PageRenderState {
    font_name: &'static str,
    font_size: f32,
}

impl PageContent {
    fn new(page_height: f32) -> Self {
        Self { page_height, content: Content { operations: vec![] }, state: PageRenderState::default() }
    }

    fn finish(self) -> Content {
        self.content
    }

    fn draw(mut self, layout: &LayoutResult) -> Self {
        self.draw_qr(layout);
        for line in layout.lines() {
            self.draw_text(&line);
        }
        self
    }

    fn draw_qr(&mut self, layout: &LayoutResult) {
        let qr = &layout.qr_block;
        let size = mm_to_pt(qr.size);
        let x = mm_to_pt(qr.x);
        let y = flip_y(mm_to_pt(qr.y + qr.size), self.page_height);
        let ops = &mut self.content.operations;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new("cm", vec![size.into(), 0.into(), 0.into(), size.into(), x.into(), y.into()]));
        ops.push(Operation::new("Do", vec![Object::Name(QR_IMAGE.as_bytes().to_vec())]));
        ops.push(Operation::new("Q", vec![]));
    }

    fn set_font(&mut self, bold: bool, font_size: f32) {
        let font_name = if bold { BOLD_FONT } else { REGULAR_FONT };
        if self.state.font_name != font_name || self.state.font_size != font_size {
            self.content
                .operations
                .push(Operation::new("Tf", vec![Object::Name(font_name.as_bytes().to_vec()), font_size.into()]));
            self.state.font_name = font_name;
            self.state.font_size = font_size;
        }
    }

    fn draw_text(&mut self, line: &PlacedLine<'_>) {
        if line.text.trim().is_empty() {
            return;
        }
        self.content.operations.push(Operation::new("BT", vec![]));
        // Font state does not survive ET, so always restate it inside the text object.
        self.state = PageRenderState::default();
        self.set_font(line.bold, line.font_size);
        let (x, y) = mm_to_pdf(line.x, line.baseline_y(), self.page_height);
        self.content.operations.push(Operation::new("Td", vec![x.into(), y.into()]));
        self.content
            .operations
            .push(Operation::new("Tj", vec![Object::String(to_win_ansi(line.text), StringFormat::Literal)]));
        self.content.operations.push(Operation::new("ET", vec![]));
    }
}
