//! FontProvider trait for abstracting font loading and discovery.
//!
//! This trait allows the raster renderer to obtain font bytes without being
//! tied to system font discovery or filesystem access.

use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for font loading operations.
#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font not found: {family} (weight: {weight:?})")]
    NotFound { family: String, weight: FontWeight },

    #[error("Failed to load font '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid font data: {0}")]
    InvalidData(String),
}

/// Shared font data type (reference-counted bytes).
pub type SharedFontData = Arc<Vec<u8>>;

/// Labels only distinguish regular and bold text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn numeric_value(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::Bold => 700,
        }
    }
}

/// Descriptor for a font face available in a provider.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    pub family: String,
    pub weight: FontWeight,
}

/// A query for finding a font.
#[derive(Debug, Clone)]
pub struct FontQuery<'a> {
    /// Primary family name to search for
    pub family: &'a str,
    /// Fallback families to try if primary is not found
    pub fallbacks: &'a [&'a str],
    pub weight: FontWeight,
}

impl<'a> FontQuery<'a> {
    pub fn new(family: &'a str) -> Self {
        Self {
            family,
            fallbacks: &[],
            weight: FontWeight::Regular,
        }
    }

    pub fn with_fallbacks(mut self, fallbacks: &'a [&'a str]) -> Self {
        self.fallbacks = fallbacks;
        self
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }
}

/// A source of font bytes.
///
/// # Example
///
/// ```ignore
/// let provider = InMemoryFontProvider::new();
/// provider.add_font("Helvetica", FontWeight::Bold, font_bytes)?;
/// let data = provider.load_font(&FontQuery::new("Helvetica").with_weight(FontWeight::Bold))?;
/// ```
pub trait FontProvider: Send + Sync + Debug {
    /// Load a font matching the given query, trying fallback families in order.
    fn load_font(&self, query: &FontQuery<'_>) -> Result<SharedFontData, FontError>;

    fn has_font(&self, query: &FontQuery<'_>) -> bool {
        self.load_font(query).is_ok()
    }

    fn list_fonts(&self) -> Vec<FontDescriptor>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory font provider.
///
/// Fonts are stored in memory and must be pre-populated before use.
#[derive(Debug, Default)]
pub struct InMemoryFontProvider {
    fonts: std::sync::RwLock<Vec<(FontDescriptor, SharedFontData)>>,
}

impl InMemoryFontProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a font to the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `FontError::LoadFailed` if the internal lock is poisoned.
    pub fn add_font(
        &self,
        family: impl Into<String>,
        weight: FontWeight,
        data: Vec<u8>,
    ) -> Result<(), FontError> {
        self.add_font_shared(family, weight, Arc::new(data))
    }

    pub fn add_font_shared(
        &self,
        family: impl Into<String>,
        weight: FontWeight,
        data: SharedFontData,
    ) -> Result<(), FontError> {
        let family = family.into();
        let mut fonts = self.fonts.write().map_err(|_| FontError::LoadFailed {
            path: format!("{}:{}", family, weight.numeric_value()),
            message: "font store lock poisoned".to_string(),
        })?;
        fonts.push((FontDescriptor { family, weight }, data));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fonts.read().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.read().map(|f| f.is_empty()).unwrap_or(true)
    }

    fn find_in_family(
        fonts: &[(FontDescriptor, SharedFontData)],
        family: &str,
        weight: FontWeight,
    ) -> Option<SharedFontData> {
        fonts
            .iter()
            .find(|(d, _)| d.family.eq_ignore_ascii_case(family) && d.weight == weight)
            .map(|(_, data)| data.clone())
    }
}

impl FontProvider for InMemoryFontProvider {
    fn load_font(&self, query: &FontQuery<'_>) -> Result<SharedFontData, FontError> {
        let fonts = self.fonts.read().map_err(|_| FontError::LoadFailed {
            path: query.family.to_string(),
            message: "font store lock poisoned".to_string(),
        })?;

        std::iter::once(query.family)
            .chain(query.fallbacks.iter().copied())
            .find_map(|family| Self::find_in_family(&fonts, family, query.weight))
            .ok_or_else(|| FontError::NotFound {
                family: query.family.to_string(),
                weight: query.weight,
            })
    }

    fn list_fonts(&self) -> Vec<FontDescriptor> {
        self.fonts
            .read()
            .map(|f| f.iter().map(|(d, _)| d.clone()).collect())
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "InMemoryFontProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_exact_and_fallback() {
        let provider = InMemoryFontProvider::new();
        provider.add_font("Arial", FontWeight::Regular, vec![1]).unwrap();
        provider.add_font("Arial", FontWeight::Bold, vec![2]).unwrap();

        let bold = provider
            .load_font(&FontQuery::new("arial").with_weight(FontWeight::Bold))
            .unwrap();
        assert_eq!(*bold, vec![2]);

        let fallback = provider
            .load_font(&FontQuery::new("Helvetica").with_fallbacks(&["Arial"]))
            .unwrap();
        assert_eq!(*fallback, vec![1]);
        assert_eq!(provider.len(), 2);
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryFontProvider::new();
        let err = provider.load_font(&FontQuery::new("Missing")).unwrap_err();
        assert!(matches!(err, FontError::NotFound { .. }));
        assert!(!provider.has_font(&FontQuery::new("Missing")));
    }
}
