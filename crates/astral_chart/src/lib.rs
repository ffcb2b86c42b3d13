//! Natal chart geometry and layout.
//!
//! Turns ecliptic data (body longitudes, house cusps, aspect pairs) into a
//! fully resolved [`LayoutModel`] of drawing coordinates, rotated so the
//! ascendant sits at 9 o'clock. Rendering is left to the caller; the
//! [`rendering`] module offers a flat shape list for renderers that want one.

pub mod angle;
pub mod chart;
pub mod layout;
pub mod projection;
pub mod rendering;

pub use chart::{
    load_chart_data_from_json, AspectEntry, AspectType, Body, ChartData, ChartDataError,
    ChartGeometryConfig, ChartPoint, ConfigError, HouseCusps, Movement, PlanetSet, ZodiacSign,
};
pub use layout::{compute_layout, LayoutError, LayoutModel, LayoutWarning};
pub use projection::{Point, PolarProjector};
pub use rendering::{ChartSpec, ChartSpecGenerator};
