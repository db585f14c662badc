//! Label requests and the customer records they are built from.

use crate::error::LabelError;
use crate::geometry::SizeMm;
use crate::payload::QrPayload;
use serde::{Deserialize, Serialize};

/// A customer directory record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub city: String,
    pub sales: String,
    pub factory: String,
    pub branch: String,
    pub phone: String,
}

/// Everything needed to lay out and render one label.
///
/// Text fields may be empty; they then produce zero-height blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabelRequest {
    pub id_text: String,
    pub name_text: String,
    pub city_text: String,
    pub sales_text: String,
    pub branch_text: String,
    pub qr_payload: String,
    pub size_mm: SizeMm,
    /// Signed offset applied to the whole content; negative values shift it up.
    pub margin_top_mm: f32,
    /// Extra blank rows appended below the label in raster output.
    pub padding_bottom_mm: f32,
}

impl LabelRequest {
    pub fn new(size_mm: SizeMm) -> Self {
        Self {
            size_mm,
            ..Default::default()
        }
    }

    /// Builds a request for a customer, encoding the compact payload into the QR text.
    pub fn from_customer(customer: &Customer, size_mm: SizeMm) -> Result<Self, LabelError> {
        let payload = QrPayload::from(customer).to_json()?;
        Ok(Self {
            id_text: customer.id.clone(),
            name_text: customer.name.clone(),
            city_text: customer.city.clone(),
            sales_text: customer.sales.clone(),
            branch_text: customer.branch.clone(),
            qr_payload: payload,
            size_mm,
            ..Default::default()
        })
    }

    pub fn with_margin_top(mut self, margin_top_mm: f32) -> Self {
        self.margin_top_mm = margin_top_mm;
        self
    }

    pub fn with_padding_bottom(mut self, padding_bottom_mm: f32) -> Self {
        self.padding_bottom_mm = padding_bottom_mm;
        self
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        if !self.size_mm.is_valid() {
            return Err(LabelError::InvalidSize {
                width: self.size_mm.width,
                height: self.size_mm.height,
            });
        }
        for (field, value) in [("marginTopMm", self.margin_top_mm), ("paddingBottomMm", self.padding_bottom_mm)] {
            if !value.is_finite() {
                return Err(LabelError::InvalidOffset { field, value });
            }
        }
        Ok(())
    }
}
