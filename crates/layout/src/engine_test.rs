#![cfg(test)]

use crate::config::LayoutConfig;
use crate::engine::LayoutEngine;
use crate::measure::StandardFontMeasurer;
use crate::output::MultiLineBlock;
use crate::test_utils::{MonoMeasurer, layout_with_afm, random_text, request};
use crate::text::split_atoms;
use qrlabel_traits::FontMeasurer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_block_fits(block: &MultiLineBlock, source: &str, min_size: f32, width: f32, m: &dyn FontMeasurer) {
    let atoms = split_atoms(source);
    for line in &block.lines {
        let measured = m.measure(line, block.font_size, block.bold);
        if measured < width {
            continue;
        }
        assert!(
            atoms.iter().any(|a| a.text == line) && block.font_size == min_size,
            "line '{}' is {:.2}mm wide in a {:.2}mm column at {}pt",
            line,
            measured,
            width,
            block.font_size
        );
    }
}

#[test]
fn test_store_scenario_layout() {
    let req = request("TOKO MAJU JAYA SENTOSA ABADI", "SEMARANG", 55.0, 43.0);
    let layout = layout_with_afm(&req);

    let name = &layout.name_block;
    assert!(name.lines.len() <= 3);
    assert!(name.font_size == 11.0 || name.font_size == 9.0);
    assert_eq!(name.lines.join(" "), "TOKO MAJU JAYA SENTOSA ABADI");

    assert_eq!(layout.city_block.lines, vec!["SEMARANG"]);
    assert_eq!(layout.city_block.font_size, 9.0);

    assert_eq!(layout.branch_block.text, "BT SMG");
    assert_eq!(layout.branch_block.y, layout.id_block.y);
}

#[test]
fn test_store_scenario_falls_back_to_minimum() {
    // Four lines at 11pt in a 29mm column, two lines at 9pt.
    let req = request("TOKO MAJU JAYA SENTOSA ABADI", "SEMARANG", 55.0, 43.0);
    let layout = layout_with_afm(&req);
    assert!((layout.content_width_mm - 29.0).abs() < 1e-4);
    assert_eq!(layout.name_block.font_size, 9.0);
    assert_eq!(layout.name_block.lines, vec!["TOKO MAJU JAYA", "SENTOSA ABADI"]);
}

#[test]
fn test_qr_and_id_placement() {
    let req = request("A", "B", 55.0, 43.0).with_margin_top(-1.5);
    let layout = layout_with_afm(&req);
    let cfg = LayoutConfig::default();

    assert_eq!(layout.qr_block.x, cfg.margin_left_mm);
    assert!((layout.qr_block.y - (cfg.base_margin_top_mm - 1.5)).abs() < 1e-6);
    assert_eq!(layout.qr_block.size, cfg.qr_size_mm);

    let id_width = StandardFontMeasurer::new().measure("SMG1024", cfg.id_font_size, true);
    let id_center = layout.id_block.x + id_width / 2.0;
    let qr_center = layout.qr_block.x + layout.qr_block.size / 2.0;
    assert!((id_center - qr_center).abs() < 1e-4);
    assert!(layout.id_block.y > layout.qr_block.y + layout.qr_block.size);
    assert_eq!(layout.id_block.font_size, cfg.id_font_size);
}

#[test]
fn test_text_column_starts_after_qr() {
    let layout = layout_with_afm(&request("A", "B", 55.0, 43.0));
    let cfg = LayoutConfig::default();
    let column_x = cfg.margin_left_mm + cfg.qr_size_mm + cfg.column_gap_mm;
    for x in [layout.name_block.x, layout.city_block.x, layout.sales_block.x, layout.branch_block.x] {
        assert_eq!(x, column_x);
    }
    assert!(layout.city_block.y > layout.name_block.y);
}

#[test]
fn test_hyphenated_city_wraps_without_space() {
    let engine = LayoutEngine::default();
    // 16mm column; the joined word is 19.4mm at 9pt, each half fits
    let req = request("X", "SLAWI-KETANGGUNGAN", 42.0, 43.0);
    let layout = engine.compute(&req, &MonoMeasurer::new(1.2));
    assert_eq!(layout.city_block.lines, vec!["SLAWI-", "KETANGGUNGAN"]);
    assert!(layout.city_block.lines.iter().all(|l| !l.contains(' ')));
}

#[test]
fn test_spaced_dash_in_name_is_kept() {
    let req = request("CV. MAJU - JAYA", "SEMARANG", 80.0, 43.0);
    let layout = layout_with_afm(&req);
    assert_eq!(layout.name_block.lines, vec!["CV. MAJU - JAYA"]);
}

#[test]
fn test_branch_pushed_below_long_text() {
    let engine = LayoutEngine::default();
    let mut req = request(
        "ONE TWO THREE FOUR FIVE SIX SEVEN EIGHT NINE TEN",
        "ALPHA BETA GAMMA DELTA EPSILON ZETA ETA THETA",
        40.0,
        60.0,
    );
    req.sales_text = "SALES PERSON".to_string();
    let layout = engine.compute(&req, &MonoMeasurer::new(1.0));

    assert!(layout.branch_block.y > layout.id_block.y);
    assert!(layout.branch_block.y > layout.sales_block.y);
}

#[test]
fn test_empty_strings_produce_empty_blocks() {
    let req = request("", "", 55.0, 43.0);
    let layout = layout_with_afm(&req);
    assert!(layout.name_block.is_empty());
    assert!(layout.city_block.is_empty());
    assert_eq!(layout.name_block.height(), 0.0);
    assert_eq!(layout.city_block.y, layout.name_block.y);
    assert_eq!(layout.branch_block.y, layout.id_block.y);
}

#[test]
fn test_empty_branch_is_empty_text() {
    let mut req = request("TOKO", "SEMARANG", 55.0, 43.0);
    req.branch_text.clear();
    let layout = layout_with_afm(&req);
    assert_eq!(layout.branch_block.text, "");
    let lines = layout.lines();
    assert!(lines.iter().all(|l| !l.text.is_empty()));
    assert_eq!(lines.last().map(|l| l.text), Some("SEMARANG"));
}

#[test]
fn test_layout_is_idempotent() {
    let req = request("TOKO MAJU JAYA SENTOSA ABADI", "SLAWI-KETANGGUNGAN", 50.0, 30.0);
    let m = StandardFontMeasurer::new();
    let engine = LayoutEngine::default();
    assert_eq!(engine.compute(&req, &m), engine.compute(&req, &m));
}

#[test]
fn test_lines_in_drawing_order() {
    let mut req = request("TOKO MAJU JAYA SENTOSA ABADI", "SEMARANG", 55.0, 43.0);
    req.sales_text = "BUDI".to_string();
    let layout = layout_with_afm(&req);
    let texts: Vec<&str> = layout.lines().iter().map(|l| l.text).collect();
    assert_eq!(
        texts,
        vec!["SMG1024", "TOKO MAJU JAYA", "SENTOSA ABADI", "SEMARANG", "BUDI", "BT SMG"]
    );
}

#[test]
fn test_fit_invariant_and_monotonic_shrink() {
    let cfg = LayoutConfig::default();
    let engine = LayoutEngine::new(cfg.clone());
    let m = StandardFontMeasurer::new();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..400 {
        let width = rng.random_range(30..=80) as f32;
        let height = rng.random_range(20..=60) as f32;
        let name = random_text(&mut rng, 100);
        let city = random_text(&mut rng, 100);
        let req = request(&name, &city, width, height);
        let layout = engine.compute(&req, &m);

        assert!([cfg.name_font_size, cfg.name_min_font_size].contains(&layout.name_block.font_size));
        assert!([cfg.city_font_size, cfg.city_min_font_size].contains(&layout.city_block.font_size));

        assert_block_fits(&layout.name_block, &name, cfg.name_min_font_size, layout.content_width_mm, &m);
        assert_block_fits(&layout.city_block, &city, cfg.city_min_font_size, layout.content_width_mm, &m);

        assert!(layout.branch_block.y >= layout.id_block.y);
    }
}

#[test]
fn test_default_size_respects_line_limit() {
    let cfg = LayoutConfig::default();
    let m = StandardFontMeasurer::new();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let (name, city) = (random_text(&mut rng, 100), random_text(&mut rng, 100));
        let req = request(&name, &city, 55.0, 43.0);
        let layout = LayoutEngine::new(cfg.clone()).compute(&req, &m);
        if layout.name_block.font_size == cfg.name_font_size {
            assert!(layout.name_block.lines.len() <= cfg.name_max_lines);
        }
        if layout.city_block.font_size == cfg.city_font_size {
            assert!(layout.city_block.lines.len() <= cfg.city_max_lines);
        }
    }
}
