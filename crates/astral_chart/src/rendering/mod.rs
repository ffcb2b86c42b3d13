pub mod generator;
pub mod primitives;
pub mod spec;
pub mod visual_config;

pub use generator::ChartSpecGenerator;
pub use primitives::{Color, Shape, Stroke, TextAnchor, TextRole};
pub use spec::{ChartMetadata, ChartSpec, LayerMetadata};
pub use visual_config::{GlyphConfig, HouseNumerals, VisualConfig};
