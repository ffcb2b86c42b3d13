use astral_chart::rendering::{
    ChartSpecGenerator, Color, GlyphConfig, HouseNumerals, Shape, TextRole, VisualConfig,
};
use astral_chart::rendering::ChartSpec;
use astral_chart::{
    compute_layout, AspectEntry, AspectType, ChartData, ChartGeometryConfig, ChartPoint,
    HouseCusps, LayoutModel, Movement, PlanetSet,
};

fn sample_layout() -> LayoutModel {
    let mut chart = ChartData {
        houses: HouseCusps::from_degrees([
            100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0, 10.0, 40.0, 70.0,
        ]),
        ..ChartData::default()
    };
    chart.points.insert("Sun".to_string(), ChartPoint::at(10.0));
    chart.points.insert(
        "Mercury".to_string(),
        ChartPoint {
            longitude: Some(15.0),
            movement: Some(Movement::Retrograde),
            ..ChartPoint::default()
        },
    );
    chart
        .aspects
        .push(AspectEntry::new("Sun", "Mercury", AspectType::Conjunction));
    chart
        .aspects
        .push(AspectEntry::new("Sun", "Pluto", AspectType::Square));

    compute_layout(&chart, &ChartGeometryConfig::default()).unwrap()
}

#[test]
fn test_generate_spec_layers() {
    let layout = sample_layout();
    let spec = ChartSpecGenerator::new().generate(&layout);

    assert_eq!(spec.width, 400.0);
    assert_eq!(spec.height, 400.0);
    assert_eq!(spec.center, layout.center);
    assert_eq!(spec.rotation, layout.rotation);

    assert_eq!(spec.layer("rings").len(), layout.rings.len());
    assert_eq!(spec.layer("houses").len(), 24);
    assert_eq!(spec.layer("ticks").len(), 360);
    assert_eq!(spec.layer("signs").len(), 24);
    assert_eq!(spec.layer("axes").len(), 8);
    assert_eq!(spec.layer("aspects").len(), 1);
    assert_eq!(spec.layer("planets").len(), 4);
    assert!(spec.layer("no_such_layer").is_empty());

    let total: usize = spec.metadata.layers.iter().map(|l| l.shape_count).sum();
    assert_eq!(total, spec.shapes.len());
    assert_eq!(spec.metadata.warnings, layout.warnings);
}

#[test]
fn test_planet_glyphs_carry_retrograde_flag() {
    let spec = ChartSpecGenerator::default().generate(&sample_layout());

    let retrograde: Vec<(&str, bool)> = spec
        .layer("planets")
        .iter()
        .filter_map(|shape| match shape {
            Shape::PlanetGlyph {
                planet_id,
                retrograde,
                ..
            } => Some((planet_id.as_str(), *retrograde)),
            _ => None,
        })
        .collect();
    assert_eq!(retrograde, vec![("Mercury", true), ("Sun", false)]);
}

#[test]
fn test_aspect_colors_applied() {
    let spec = ChartSpecGenerator::new().generate(&sample_layout());
    match &spec.layer("aspects")[0] {
        Shape::AspectLine {
            aspect_type, color, ..
        } => {
            assert_eq!(*aspect_type, AspectType::Conjunction);
            assert_eq!(*color, Color::from_hex("#FF00FF").unwrap());
        }
        other => panic!("expected aspect line, got {:?}", other),
    }
}

#[test]
fn test_house_labels_use_configured_numerals() {
    let glyphs = GlyphConfig {
        house_numerals: HouseNumerals::Roman,
        ..GlyphConfig::default()
    };
    let generator = ChartSpecGenerator::with_configs(VisualConfig::default(), glyphs);
    let layout = sample_layout();
    let spec = generator.generate(&layout);

    let labels: Vec<(u8, String, Option<f64>)> = spec
        .layer("houses")
        .iter()
        .filter_map(|shape| match shape {
            Shape::Text {
                content,
                rotation,
                role: TextRole::House { number },
                ..
            } => Some((*number, content.clone(), *rotation)),
            _ => None,
        })
        .collect();

    assert_eq!(labels.len(), 12);
    assert_eq!(labels[0].1, "I");
    assert_eq!(labels[11].1, "XII");
    assert_eq!(labels[0].2, Some(layout.house(1).unwrap().label_rotation));
}

#[test]
fn test_spec_serializes_to_json() {
    let spec = ChartSpecGenerator::new().generate(&sample_layout());
    let json = serde_json::to_value(&spec).unwrap();
    assert_eq!(json["shapes"][0]["type"], "Circle");
    assert_eq!(json["metadata"]["layers"][0]["id"], "rings");
}

#[test]
fn test_planet_glyph_matches_layout_symbol() {
    let mut chart = ChartData {
        houses: HouseCusps::from_degrees([
            100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0, 10.0, 40.0, 70.0,
        ]),
        ..ChartData::default()
    };
    chart.points.insert("Saturn".to_string(), ChartPoint::at(18.9));
    chart.points.insert("Ceres".to_string(), ChartPoint::at(77.0));
    let config = ChartGeometryConfig::default().with_planet_set(PlanetSet::Traditional);
    let layout = compute_layout(&chart, &config).unwrap();
    let spec = ChartSpecGenerator::new().generate(&layout);

    let glyphs: Vec<(&str, &str)> = spec
        .layer("planets")
        .iter()
        .filter_map(|shape| match shape {
            Shape::PlanetGlyph {
                planet_id, glyph, ..
            } => Some((planet_id.as_str(), glyph.as_str())),
            _ => None,
        })
        .collect();
    assert_eq!(glyphs, vec![("Saturn", "\u{2644}")]);
    assert_eq!(layout.planet("Saturn").unwrap().symbol, "\u{2644}");
}

#[test]
fn test_layer_with_inconsistent_metadata_is_empty() {
    let spec = ChartSpecGenerator::new().generate(&sample_layout());
    let json = serde_json::to_string(&spec).unwrap();
    let mut broken: ChartSpec = serde_json::from_str(&json).unwrap();

    broken.metadata.layers[0].first_shape = broken.shapes.len() + 10;
    broken.metadata.layers[1].shape_count = usize::MAX;
    assert!(broken.layer("rings").is_empty());
    assert!(broken.layer("houses").is_empty());
    assert_eq!(broken.layer("ticks").len(), 360);
}
