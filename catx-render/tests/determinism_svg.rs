use catx_core::{AxisConfig, FactorRange, Side};
use catx_render::{AxisExporter, ExportConfig};

fn demo_range() -> FactorRange {
    FactorRange::new(vec![
        ("2023", "Q1", "jan").into(),
        ("2023", "Q1", "feb").into(),
        ("2023", "Q2", "apr").into(),
        ("2024", "Q1", "jan").into(),
        ("2024", "Q2", "may").into(),
    ])
    .unwrap()
}

#[test]
fn svg_export_is_deterministic() {
    let range = demo_range();
    let cfg = ExportConfig {
        width: 900,
        height: 260,
        title: Some("Determinism Test".into()),
        ..ExportConfig::default()
    };
    let exporter = AxisExporter::new(cfg, AxisConfig::default());

    let dir = tempfile::tempdir().unwrap();
    let f1 = dir.path().join("a.svg");
    let f2 = dir.path().join("b.svg");

    let l1 = exporter.export_svg(&f1, &range).unwrap();
    let l2 = exporter.export_svg(&f2, &range).unwrap();

    let b1 = std::fs::read(&f1).unwrap();
    let b2 = std::fs::read(&f2).unwrap();
    assert_eq!(b1, b2, "SVG bytes differ between identical renders");
    assert_eq!(l1, l2);
}

#[test]
fn every_side_renders_three_rows() {
    let range = demo_range();
    for side in [Side::Above, Side::Below, Side::Left, Side::Right] {
        let cfg = ExportConfig { side, width: 600, height: 600, ..ExportConfig::default() };
        let exporter = AxisExporter::new(cfg, AxisConfig::default());
        let (doc, layout) = exporter.render_svg(&range).unwrap();
        assert_eq!(layout.rows.len(), 3, "side {:?}", side);
        assert_eq!(doc.matches("</text>").count(), 5 + 4 + 2, "side {:?}", side);
        assert!(layout.offsets.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn zoomed_span_drops_outside_labels_and_separators() {
    let range = demo_range();
    let jan_2024 = range.synthetic(&("2024", "Q1", "jan").into()).unwrap();
    let cfg = ExportConfig { start: Some(jan_2024 - 0.5), end: Some(range.end()), ..ExportConfig::default() };
    let exporter = AxisExporter::new(cfg, AxisConfig::default());
    let layout = exporter.layout(&range).unwrap();
    assert_eq!(layout.rows[0].labels.texts(), vec!["jan", "may"]);
    assert!(layout.separators[0].is_empty());
}
