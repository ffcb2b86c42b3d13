//! Chart input model and geometry configuration.

pub mod body;
pub mod config;
pub mod data;
pub mod loader;

pub use body::{Body, PlanetSet, ZodiacSign, CLASSICAL_BODIES};
pub use config::{ChartGeometryConfig, ChartRadii, ConfigError, RadiusOffsets, TickLengths};
pub use data::{AspectEntry, AspectType, ChartData, ChartPoint, HouseCusps, Movement};
pub use loader::{load_chart_data_from_json, ChartDataError};
