//! Font library abstraction for the raster path.
//!
//! This module provides `FontLibrary`, which resolves the regular and bold
//! TrueType faces a label is drawn with, and `LabelFaces`, the validated pair
//! handed to the measurer and the rasterizer.
//!
//! ## Platform Abstraction
//!
//! The font library can operate in two modes:
//! - **System fonts mode** (feature: `system-fonts`): Uses fontdb for font discovery
//! - **Provider mode**: Uses an injected `FontProvider` for custom font loading
//!
//! The external provider always takes precedence.

use qrlabel_traits::{FontError, FontProvider, FontQuery, FontWeight, SharedFontData};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Families tried after the requested one, in order.
pub const FALLBACK_FAMILIES: &[&str] = &["Helvetica", "Arial", "Liberation Sans", "DejaVu Sans"];

/// A regular and a bold face, both known to parse.
#[derive(Clone)]
pub struct LabelFaces {
    regular: SharedFontData,
    bold: SharedFontData,
}

impl std::fmt::Debug for LabelFaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFaces")
            .field("regular_len", &self.regular.len())
            .field("bold_len", &self.bold.len())
            .finish()
    }
}

impl LabelFaces {
    /// # Errors
    ///
    /// Returns `FontError::InvalidData` if either buffer is not a parsable font.
    pub fn new(regular: SharedFontData, bold: SharedFontData) -> Result<Self, FontError> {
        validate(&regular, "regular")?;
        validate(&bold, "bold")?;
        Ok(Self { regular, bold })
    }

    /// Uses one face for both weights, for fonts shipped without a bold cut.
    pub fn single(data: SharedFontData) -> Result<Self, FontError> {
        Self::new(data.clone(), data)
    }

    pub fn data(&self, bold: bool) -> &[u8] {
        if bold { &self.bold } else { &self.regular }
    }

    /// Parses a shaping view over the face data. Callers that shape repeatedly
    /// should hold on to the result, see `FaceMeasurer`.
    pub fn face(&self, bold: bool) -> Option<rustybuzz::Face<'_>> {
        rustybuzz::Face::from_slice(self.data(bold), 0)
    }
}

fn validate(data: &[u8], which: &str) -> Result<(), FontError> {
    rustybuzz::Face::from_slice(data, 0)
        .map(|_| ())
        .ok_or_else(|| FontError::InvalidData(format!("{} face ({} bytes) is not a TrueType/OpenType font", which, data.len())))
}

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct FontCacheKey {
    family: String,
    weight: FontWeight,
}

impl FontCacheKey {
    fn new(family: &str, weight: FontWeight) -> Self {
        Self {
            family: family.to_lowercase(),
            weight,
        }
    }
}

/// Resolves font bytes from an injected provider or the system font database.
#[derive(Clone)]
pub struct FontLibrary {
    #[cfg(feature = "system-fonts")]
    db: Arc<RwLock<fontdb::Database>>,

    external_provider: Option<Arc<dyn FontProvider>>,

    font_data_cache: Arc<RwLock<HashMap<FontCacheKey, SharedFontData>>>,
}

impl FontLibrary {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "system-fonts")]
            db: Arc::new(RwLock::new(fontdb::Database::new())),
            external_provider: None,
            font_data_cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn from_provider(provider: Arc<dyn FontProvider>) -> Self {
        Self::new().with_provider(provider)
    }

    pub fn with_provider(mut self, provider: Arc<dyn FontProvider>) -> Self {
        self.external_provider = Some(provider);
        self
    }

    /// Enables system font loading (native platforms only).
    #[cfg(feature = "system-fonts")]
    pub fn with_system_fonts(self, enable: bool) -> Self {
        if enable && let Ok(mut db) = self.db.write() {
            db.load_system_fonts();
            log::debug!("Loaded {} system font faces", db.len());
        }
        self
    }

    #[cfg(not(feature = "system-fonts"))]
    pub fn with_system_fonts(self, _enable: bool) -> Self {
        log::warn!("System fonts requested but the `system-fonts` feature is disabled");
        self
    }

    /// Resolves the raw font data for a family and weight.
    ///
    /// Resolution order:
    /// 1. cache
    /// 2. external `FontProvider` (if set)
    /// 3. fontdb database
    ///
    /// # Errors
    ///
    /// Returns `FontError::NotFound` if no matching font is found in any source.
    pub fn resolve_font_data(&self, family: &str, weight: FontWeight) -> Result<SharedFontData, FontError> {
        let cache_key = FontCacheKey::new(family, weight);

        if let Ok(cache) = self.font_data_cache.read()
            && let Some(data) = cache.get(&cache_key)
        {
            return Ok(data.clone());
        }

        if let Some(ref provider) = self.external_provider {
            let query = FontQuery::new(family)
                .with_weight(weight)
                .with_fallbacks(FALLBACK_FAMILIES);
            match provider.load_font(&query) {
                Ok(data) => {
                    log::debug!("Resolved '{}' {:?} via {}", family, weight, provider.name());
                    return Ok(self.cache(cache_key, data));
                }
                Err(e) => log::debug!("{} could not supply '{}': {}", provider.name(), family, e),
            }
        }

        #[cfg(feature = "system-fonts")]
        {
            let data = self.resolve_from_fontdb(family, weight)?;
            Ok(self.cache(cache_key, data))
        }
        #[cfg(not(feature = "system-fonts"))]
        {
            Err(FontError::NotFound {
                family: family.to_string(),
                weight,
            })
        }
    }

    /// Loads the regular and bold faces for `family`.
    pub fn load_label_faces(&self, family: &str) -> Result<LabelFaces, FontError> {
        let regular = self.resolve_font_data(family, FontWeight::Regular)?;
        let bold = match self.resolve_font_data(family, FontWeight::Bold) {
            Ok(bold) => bold,
            Err(e) => {
                log::warn!("No bold face for '{}' ({}), drawing bold text with the regular face", family, e);
                regular.clone()
            }
        };
        LabelFaces::new(regular, bold)
    }

    #[cfg(feature = "system-fonts")]
    fn resolve_from_fontdb(&self, family: &str, weight: FontWeight) -> Result<SharedFontData, FontError> {
        let not_found = || FontError::NotFound {
            family: family.to_string(),
            weight,
        };
        let db = self.db.read().map_err(|_| FontError::LoadFailed {
            path: family.to_string(),
            message: "fontdb lock poisoned".to_string(),
        })?;

        let mut families = vec![fontdb::Family::Name(family)];
        families.extend(FALLBACK_FAMILIES.iter().map(|f| fontdb::Family::Name(*f)));
        families.push(fontdb::Family::SansSerif);

        let query = fontdb::Query {
            families: &families,
            weight: match weight {
                FontWeight::Regular => fontdb::Weight::NORMAL,
                FontWeight::Bold => fontdb::Weight::BOLD,
            },
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };

        let id = db.query(&query).ok_or_else(|| {
            log::warn!("Font not found in fontdb: {} {:?}", family, weight);
            not_found()
        })?;

        if let Some(info) = db.face(id) {
            log::debug!("Matched font: {:?} ({})", info.families, info.post_script_name);
        }

        db.with_face_data(id, |data, _index| Arc::new(data.to_vec()))
            .ok_or_else(not_found)
    }

    fn cache(&self, key: FontCacheKey, data: SharedFontData) -> SharedFontData {
        if let Ok(mut cache) = self.font_data_cache.write() {
            cache.insert(key, data.clone());
        }
        data
    }
}

impl Default for FontLibrary {
    fn default() -> Self {
        Self::new()
    }
}
