pub mod aspects;
pub mod assembler;
pub mod rings;
pub mod types;

pub use assembler::{compute_layout, ChartLayoutEngine};
pub use types::{
    AspectLine, AxisKind, AxisLayout, HouseCuspLayout, LayoutError, LayoutModel, LayoutWarning,
    PlanetLayout, RingCircle, RingKind, SignLayout, TickEmphasis, ZodiacTick,
};
