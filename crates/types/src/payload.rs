//! The compact JSON document carried inside a label's QR code.
//!
//! Field names on the wire are two-letter tags so the symbol stays small:
//!
//! | tag  | field     |
//! |------|-----------|
//! | `it` | customer id |
//! | `nt` | name      |
//! | `at` | city (address town) |
//! | `pt` | sales person |
//! | `kp` | factory   |
//! | `ws` | branch    |
//! | `np` | phone number |
//!
//! Every tag is always written, even when empty, and unknown tags are
//! rejected on parse, so a schema change fails loudly instead of dropping data.

use crate::error::LabelError;
use crate::label::Customer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QrPayload {
    #[serde(rename = "it", default)]
    pub id: String,
    #[serde(rename = "nt", default)]
    pub name: String,
    #[serde(rename = "at", default)]
    pub city: String,
    #[serde(rename = "pt", default)]
    pub sales: String,
    #[serde(rename = "kp", default)]
    pub factory: String,
    #[serde(rename = "ws", default)]
    pub branch: String,
    #[serde(rename = "np", default)]
    pub phone: String,
}

impl QrPayload {
    pub fn to_json(&self) -> Result<String, LabelError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(s: &str) -> Result<Self, LabelError> {
        Ok(serde_json::from_str(s)?)
    }
}

impl From<&Customer> for QrPayload {
    fn from(c: &Customer) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            city: c.city.clone(),
            sales: c.sales.clone(),
            factory: c.factory.clone(),
            branch: c.branch.clone(),
            phone: c.phone.clone(),
        }
    }
}

impl From<QrPayload> for Customer {
    fn from(p: QrPayload) -> Self {
        Self {
            id: p.id,
            name: p.name,
            city: p.city,
            sales: p.sales,
            factory: p.factory,
            branch: p.branch,
            phone: p.phone,
        }
    }
}
