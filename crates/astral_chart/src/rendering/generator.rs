use crate::chart::Movement;
use crate::layout::{LayoutModel, TickEmphasis};
use crate::rendering::primitives::{Color, Shape, Stroke, TextAnchor, TextRole};
use crate::rendering::spec::ChartSpec;
use crate::rendering::visual_config::{GlyphConfig, VisualConfig};

/// ChartSpec generator - converts a layout model to a ChartSpec
///
/// Every position comes from the layout; the generator only assigns styling
/// and draw order.
pub struct ChartSpecGenerator {
    visual_config: VisualConfig,
    glyph_config: GlyphConfig,
}

impl ChartSpecGenerator {
    /// Create a new generator with default configs
    pub fn new() -> Self {
        Self {
            visual_config: VisualConfig::default(),
            glyph_config: GlyphConfig::default(),
        }
    }

    /// Create a generator with custom configs
    pub fn with_configs(visual_config: VisualConfig, glyph_config: GlyphConfig) -> Self {
        Self {
            visual_config,
            glyph_config,
        }
    }

    pub fn visual_config(&self) -> &VisualConfig {
        &self.visual_config
    }

    pub fn glyph_config(&self) -> &GlyphConfig {
        &self.glyph_config
    }

    /// Generate a ChartSpec sized to fit the layout's center.
    pub fn generate(&self, layout: &LayoutModel) -> ChartSpec {
        let mut spec = ChartSpec::new(layout.center.x * 2.0, layout.center.y * 2.0);
        spec.center = layout.center;
        spec.rotation = layout.rotation;
        spec.background_color = self.visual_config.background_color;

        // Back to front.
        spec.push_layer("rings", self.ring_shapes(layout));
        spec.push_layer("houses", self.house_shapes(layout));
        spec.push_layer("ticks", self.tick_shapes(layout));
        spec.push_layer("signs", self.sign_shapes(layout));
        spec.push_layer("axes", self.axis_shapes(layout));
        spec.push_layer("aspects", self.aspect_shapes(layout));
        spec.push_layer("planets", self.planet_shapes(layout));

        spec.metadata.warnings = layout.warnings.clone();

        log::debug!(
            "Generated chart spec: {} shapes in {} layers",
            spec.shapes.len(),
            spec.metadata.layers.len()
        );
        spec
    }

    fn stroke(&self, color: Color) -> Stroke {
        Stroke::solid(color, self.visual_config.stroke_width)
    }

    fn ring_shapes(&self, layout: &LayoutModel) -> Vec<Shape> {
        layout
            .rings
            .iter()
            .map(|ring| Shape::Circle {
                center: layout.center,
                radius: ring.radius,
                fill: None,
                stroke: Some(self.stroke(self.visual_config.ring_color)),
            })
            .collect()
    }

    fn house_shapes(&self, layout: &LayoutModel) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(layout.house_cusps.len() * 2);
        for house in &layout.house_cusps {
            shapes.push(Shape::Line {
                from: house.line_start,
                to: house.line_end,
                stroke: self.stroke(self.visual_config.house_line_color),
            });
            shapes.push(Shape::Text {
                position: house.label_position,
                content: self
                    .glyph_config
                    .house_numerals
                    .label(house.number)
                    .to_string(),
                size: self.glyph_config.label_size,
                color: self.visual_config.house_label_color,
                anchor: TextAnchor::Middle,
                rotation: Some(house.label_rotation),
                role: TextRole::House {
                    number: house.number,
                },
            });
        }
        shapes
    }

    fn tick_shapes(&self, layout: &LayoutModel) -> Vec<Shape> {
        layout
            .zodiac_ticks
            .iter()
            .map(|tick| {
                let width = match tick.emphasis {
                    TickEmphasis::Long => self.visual_config.stroke_width * 1.5,
                    _ => self.visual_config.stroke_width,
                };
                Shape::Line {
                    from: tick.start,
                    to: tick.end,
                    stroke: Stroke::solid(self.visual_config.tick_color, width),
                }
            })
            .collect()
    }

    fn sign_shapes(&self, layout: &LayoutModel) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(layout.signs.len() * 2);
        for sign in &layout.signs {
            shapes.push(Shape::Line {
                from: sign.boundary_start,
                to: sign.boundary_end,
                stroke: self.stroke(self.visual_config.sign_boundary_color),
            });
            shapes.push(Shape::Text {
                position: sign.label_position,
                content: sign.sign.glyph().to_string(),
                size: self.glyph_config.sign_glyph_size,
                color: self.visual_config.sign_glyph_color,
                anchor: TextAnchor::Middle,
                rotation: None,
                role: TextRole::Sign {
                    name: sign.sign.name().to_string(),
                },
            });
        }
        shapes
    }

    fn axis_shapes(&self, layout: &LayoutModel) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(layout.axes.len() * 2);
        for axis in &layout.axes {
            shapes.push(Shape::Line {
                from: axis.line_start,
                to: axis.line_end,
                stroke: self.stroke(self.visual_config.axis_color),
            });
            shapes.push(Shape::Text {
                position: axis.label_position,
                content: axis.kind.abbreviation().to_string(),
                size: self.glyph_config.label_size,
                color: self.visual_config.axis_color,
                anchor: TextAnchor::Middle,
                rotation: None,
                role: TextRole::Axis {
                    name: axis.kind.abbreviation().to_string(),
                },
            });
        }
        shapes
    }

    fn aspect_shapes(&self, layout: &LayoutModel) -> Vec<Shape> {
        layout
            .aspect_lines
            .iter()
            .map(|line| Shape::AspectLine {
                from: line.from,
                control: line.control,
                to: line.to,
                aspect_type: line.aspect_type,
                color: self.visual_config.aspect_color(line.aspect_type),
                width: self.visual_config.aspect_stroke_width,
            })
            .collect()
    }

    fn planet_shapes(&self, layout: &LayoutModel) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(layout.planets.len() * 2);
        for planet in &layout.planets {
            shapes.push(Shape::PlanetGlyph {
                center: planet.position,
                planet_id: planet.name.clone(),
                glyph: planet.symbol.clone(),
                size: self.glyph_config.planet_glyph_size,
                color: self.visual_config.planet_color,
                retrograde: planet.movement == Movement::Retrograde,
            });
            shapes.push(Shape::Text {
                position: planet.label_position,
                content: planet.name.clone(),
                size: self.glyph_config.label_size,
                color: self.visual_config.planet_color,
                anchor: TextAnchor::Middle,
                rotation: None,
                role: TextRole::Planet {
                    name: planet.name.clone(),
                },
            });
        }
        shapes
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
