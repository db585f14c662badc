// src/config.rs
//! Application configuration, read from a JSON file. Every field has a default,
//! so an empty object (or no file at all) is a valid configuration.

use crate::error::AppError;
use qrlabel_core::{FontLibrary, LabelFaces, LabelPipeline, LayoutConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Largest write a BLE printer characteristic accepts in one go.
pub const BLE_MAX_CHUNK: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub printer: PrinterSettings,
    pub fonts: FontSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Printer resolution; 8 dots/mm is 203 dpi.
    pub dots_per_mm: f32,
    /// Append a form feed after each label so gap-sensing printers advance.
    pub form_feed: bool,
    /// Pause between consecutive labels of a batch.
    pub inter_label_delay_ms: u64,
    /// Split writes into chunks of at most this many bytes.
    pub max_chunk: Option<usize>,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            dots_per_mm: 8.0,
            form_feed: true,
            inter_label_delay_ms: 500,
            max_chunk: None,
        }
    }
}

impl PrinterSettings {
    pub fn inter_label_delay(&self) -> Duration {
        Duration::from_millis(self.inter_label_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    /// Explicit regular face. Takes precedence over family lookup.
    pub regular: Option<PathBuf>,
    /// Explicit bold face; the regular face is reused when absent.
    pub bold: Option<PathBuf>,
    pub family: String,
    pub system_fonts: bool,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            regular: None,
            bold: None,
            family: "Helvetica".to_string(),
            system_fonts: true,
        }
    }
}

impl FontSettings {
    /// Loads the raster faces from the configured files, or by family name.
    pub fn load_faces(&self) -> Result<LabelFaces, AppError> {
        if let Some(regular_path) = &self.regular {
            let regular = Arc::new(std::fs::read(regular_path)?);
            let bold = match &self.bold {
                Some(bold_path) => Arc::new(std::fs::read(bold_path)?),
                None => regular.clone(),
            };
            log::debug!("Using font files {:?} / {:?}", regular_path, self.bold);
            return Ok(LabelFaces::new(regular, bold)?);
        }
        let library = FontLibrary::new().with_system_fonts(self.system_fonts);
        Ok(library.load_label_faces(&self.family)?)
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Builds a pipeline. Fonts are only resolved when raster output is needed.
    pub fn pipeline(&self, with_raster: bool) -> Result<LabelPipeline, AppError> {
        let mut builder = LabelPipeline::builder()
            .with_layout_config(self.layout.clone())
            .with_dots_per_mm(self.printer.dots_per_mm);
        if with_raster {
            builder = builder.with_faces(self.fonts.load_faces()?);
        }
        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.printer.dots_per_mm, 8.0);
        assert!(config.printer.form_feed);
        assert_eq!(config.printer.inter_label_delay(), Duration::from_millis(500));
        assert_eq!(config.fonts.family, "Helvetica");
        assert_eq!(config.layout.qr_size_mm, 20.0);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "printer": { "dots_per_mm": 11.8, "max_chunk": 100 },
            "layout": { "qr_size_mm": 18.0 },
            "fonts": { "family": "DejaVu Sans" }
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.printer.dots_per_mm, 11.8);
        assert_eq!(config.printer.max_chunk, Some(BLE_MAX_CHUNK));
        assert!(config.printer.form_feed);
        assert_eq!(config.layout.qr_size_mm, 18.0);
        assert_eq!(config.layout.margin_left_mm, 2.0);
        assert_eq!(config.fonts.family, "DejaVu Sans");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "printer": {{ "form_feed": false }} }}"#).unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert!(!config.printer.form_feed);
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = AppConfig::load("/nonexistent/qrlabel.json").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_invalid_font_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a font").unwrap();
        let fonts = FontSettings {
            regular: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        assert!(matches!(fonts.load_faces(), Err(AppError::Font(_))));
    }

    #[test]
    fn test_vector_pipeline_needs_no_fonts() {
        let config = AppConfig::default();
        let pipeline = config.pipeline(false).unwrap();
        assert!(!pipeline.has_raster());
    }
}
