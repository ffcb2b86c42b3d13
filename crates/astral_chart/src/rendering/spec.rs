use crate::layout::LayoutWarning;
use crate::projection::Point;
use crate::rendering::primitives::{Color, Shape};
use serde::{Deserialize, Serialize};

/// Chart metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub layers: Vec<LayerMetadata>,
    /// Warnings carried over from layout.
    pub warnings: Vec<LayoutWarning>,
}

/// Layer metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerMetadata {
    pub id: String,
    /// Index of the layer's first shape in `ChartSpec::shapes`.
    pub first_shape: usize,
    pub shape_count: usize,
}

/// Chart specification - declarative description of chart to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f64,
    pub height: f64,
    pub center: Point,
    /// Rotation already applied to every shape position.
    pub rotation: f64,
    pub background_color: Color,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create a new empty chart spec
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            center: Point::new(width / 2.0, height / 2.0),
            rotation: 0.0,
            background_color: Color::BLACK,
            shapes: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }

    /// Append a named layer of shapes.
    pub fn push_layer(&mut self, id: &str, shapes: Vec<Shape>) {
        self.metadata.layers.push(LayerMetadata {
            id: id.to_string(),
            first_shape: self.shapes.len(),
            shape_count: shapes.len(),
        });
        self.shapes.extend(shapes);
    }

    /// Shapes belonging to layer `id`, empty if there is no such layer.
    pub fn layer(&self, id: &str) -> &[Shape] {
        self.metadata
            .layers
            .iter()
            .find(|layer| layer.id == id)
            .and_then(|layer| {
                let end = layer.first_shape.checked_add(layer.shape_count)?;
                self.shapes.get(layer.first_shape..end)
            })
            .unwrap_or(&[])
    }
}
