use crate::chart::{AspectType, Body, ChartRadii, Movement, ZodiacSign};
use crate::projection::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal layout failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Missing ascendant: House1 cusp is absent or not a finite number")]
    MissingAscendant,
}

/// Anomalies absorbed during layout; the chart still renders without them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutWarning {
    /// An aspect names a body that is not on the chart.
    UnresolvedAspectReference {
        planet1: String,
        planet2: String,
        missing: String,
    },
    /// A body has no usable longitude.
    MalformedBody { name: String },
    /// A house cusp was missing and replaced by its equal-house position.
    SubstitutedCusp { house: u8, degree: f64 },
}

/// Which guide circle a ring is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingKind {
    OuterBoundary,
    House,
    OuterZodiac,
    Base,
    HouseInner,
    Inner,
}

/// Concentric guide circle around the chart center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingCircle {
    pub kind: RingKind,
    pub radius: f64,
}

/// One house, from its cusp to the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseCuspLayout {
    /// 1..=12
    pub number: u8,
    pub start_degree: f64,
    pub end_degree: f64,
    pub midpoint_degree: f64,
    /// Cusp on the base circle.
    pub position: Point,
    pub line_start: Point,
    pub line_end: Point,
    pub label_position: Point,
    /// Un-rotated midpoint degree; any readability rotation is up to the renderer.
    pub label_rotation: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickEmphasis {
    Short,
    Medium,
    Long,
}

/// One-degree tick on the inside of the base circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacTick {
    pub sign: ZodiacSign,
    /// Degree within the sign, 0..=29.
    pub offset: u8,
    pub degree: f64,
    pub start: Point,
    pub end: Point,
    pub length: f64,
    pub emphasis: TickEmphasis,
}

/// A sign's boundary line and glyph anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignLayout {
    pub sign: ZodiacSign,
    pub start_degree: f64,
    pub boundary_start: Point,
    pub boundary_end: Point,
    pub label_degree: f64,
    pub label_position: Point,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisKind {
    Ascendant,
    ImumCoeli,
    Descendant,
    Midheaven,
}

impl AxisKind {
    pub const ALL: [AxisKind; 4] = [
        AxisKind::Ascendant,
        AxisKind::ImumCoeli,
        AxisKind::Descendant,
        AxisKind::Midheaven,
    ];

    /// House whose cusp defines this angle.
    pub fn cusp(&self) -> u8 {
        match self {
            AxisKind::Ascendant => 1,
            AxisKind::ImumCoeli => 4,
            AxisKind::Descendant => 7,
            AxisKind::Midheaven => 10,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            AxisKind::Ascendant => "AC",
            AxisKind::ImumCoeli => "IC",
            AxisKind::Descendant => "DC",
            AxisKind::Midheaven => "MC",
        }
    }
}

/// Marker for one of the four chart angles, outside the outer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub kind: AxisKind,
    pub degree: f64,
    pub line_start: Point,
    pub line_end: Point,
    pub label_position: Point,
}

/// A body placed on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetLayout {
    pub body: Body,
    /// Key as it appeared in the input.
    pub name: String,
    pub symbol: String,
    pub longitude: f64,
    pub latitude: Option<f64>,
    pub position: Point,
    pub label_position: Point,
    pub house: Option<u8>,
    pub sign: String,
    pub movement: Movement,
}

/// An aspect resolved to two on-chart endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectLine {
    pub planet1: String,
    pub planet2: String,
    pub aspect_type: AspectType,
    pub from: Point,
    pub to: Point,
    /// Midpoint of the segment, usable as a curve control point.
    pub control: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applying: Option<bool>,
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutModel {
    /// `ascendant - 270`; shared by every projected point in this model.
    pub rotation: f64,
    pub center: Point,
    pub radii: ChartRadii,
    pub rings: Vec<RingCircle>,
    pub house_cusps: Vec<HouseCuspLayout>,
    pub signs: Vec<SignLayout>,
    pub zodiac_ticks: Vec<ZodiacTick>,
    pub axes: Vec<AxisLayout>,
    pub planets: Vec<PlanetLayout>,
    pub aspect_lines: Vec<AspectLine>,
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutModel {
    pub fn planet(&self, name: &str) -> Option<&PlanetLayout> {
        self.planets.iter().find(|p| p.name == name)
    }

    pub fn house(&self, number: u8) -> Option<&HouseCuspLayout> {
        self.house_cusps.iter().find(|h| h.number == number)
    }
}
