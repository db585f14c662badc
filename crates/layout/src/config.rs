use serde::{Deserialize, Serialize};

/// Font sizes for a block that may shrink once, from `default_size` to `min_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitSpec {
    pub default_size: f32,
    pub min_size: f32,
    pub max_lines: usize,
    pub bold: bool,
}

/// Physical constants of the label template. Lengths are millimetres, font sizes points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin_left_mm: f32,
    pub margin_right_mm: f32,
    /// Top margin before the request's own `margin_top_mm` offset is applied.
    pub base_margin_top_mm: f32,
    pub qr_size_mm: f32,
    /// Horizontal gap between the QR column and the text column.
    pub column_gap_mm: f32,
    /// Vertical gap between the QR symbol and the ID line beneath it.
    pub id_gap_mm: f32,
    /// Vertical gap between the name, city and sales blocks.
    pub block_gap_mm: f32,
    pub line_height_factor: f32,

    pub id_font_size: f32,
    pub name_font_size: f32,
    pub name_min_font_size: f32,
    pub name_max_lines: usize,
    pub city_font_size: f32,
    pub city_min_font_size: f32,
    pub city_max_lines: usize,
    pub sales_font_size: f32,
    pub branch_font_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_left_mm: 2.0,
            margin_right_mm: 2.0,
            base_margin_top_mm: 2.0,
            qr_size_mm: 20.0,
            column_gap_mm: 2.0,
            id_gap_mm: 1.0,
            block_gap_mm: 1.0,
            line_height_factor: 1.15,
            id_font_size: 10.0,
            name_font_size: 11.0,
            name_min_font_size: 9.0,
            name_max_lines: 3,
            city_font_size: 9.0,
            city_min_font_size: 7.0,
            city_max_lines: 2,
            sales_font_size: 8.0,
            branch_font_size: 8.0,
        }
    }
}

impl LayoutConfig {
    pub fn name_fit(&self) -> FitSpec {
        FitSpec {
            default_size: self.name_font_size,
            min_size: self.name_min_font_size,
            max_lines: self.name_max_lines,
            bold: true,
        }
    }

    pub fn city_fit(&self) -> FitSpec {
        FitSpec {
            default_size: self.city_font_size,
            min_size: self.city_min_font_size,
            max_lines: self.city_max_lines,
            bold: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "qr_size_mm": 18.0, "name_max_lines": 2 }"#).unwrap();
        assert_eq!(config.qr_size_mm, 18.0);
        assert_eq!(config.name_fit().max_lines, 2);
        assert_eq!(
            LayoutConfig { qr_size_mm: 20.0, name_max_lines: 3, ..config },
            LayoutConfig::default()
        );
    }

    #[test]
    fn test_round_trip() {
        let config = LayoutConfig { city_min_font_size: 6.5, ..Default::default() };
        let json = serde_json::to_string(&config).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.city_fit().min_size, 6.5);
    }
}
