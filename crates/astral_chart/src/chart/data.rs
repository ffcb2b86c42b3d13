use crate::angle::normalize_angle;
use crate::chart::loader::ChartDataError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

lazy_static! {
    static ref HOUSE_LABEL: Regex = Regex::new(r"^House(\d{1,2})$").expect("static regex");
}

/// Direction of apparent motion along the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Movement {
    Direct,
    Retrograde,
    Stationary,
    #[default]
    Unknown,
}

impl From<String> for Movement {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "direct" => Movement::Direct,
            "retrograde" | "rx" => Movement::Retrograde,
            "stationary" => Movement::Stationary,
            _ => Movement::Unknown,
        }
    }
}

/// One body as delivered by the ephemeris backend.
///
/// Every field is optional on the wire; a body without a finite longitude is
/// skipped at layout time rather than rejected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub house: Option<u8>,
    #[serde(default)]
    pub sign: Option<String>,
    #[serde(default)]
    pub movement: Option<Movement>,
}

impl ChartPoint {
    pub fn at(longitude: f64) -> Self {
        Self {
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    /// Longitude normalized to `[0, 360)`, or `None` if missing or non-finite.
    pub fn usable_longitude(&self) -> Option<f64> {
        self.longitude
            .filter(|lon| lon.is_finite())
            .map(normalize_angle)
    }
}

/// Named angular relationship between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
}

impl AspectType {
    pub const ALL: [AspectType; 5] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Sextile => "Sextile",
            AspectType::Square => "Square",
            AspectType::Trine => "Trine",
            AspectType::Opposition => "Opposition",
        }
    }
}

impl TryFrom<String> for AspectType {
    type Error = ChartDataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AspectType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(value.trim()))
            .ok_or(ChartDataError::UnknownAspectType(value))
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A precomputed aspect between two named bodies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectEntry {
    pub planet1: String,
    pub planet2: String,
    pub aspect_type: AspectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applying: Option<bool>,
}

impl AspectEntry {
    pub fn new(planet1: &str, planet2: &str, aspect_type: AspectType) -> Self {
        Self {
            planet1: planet1.to_string(),
            planet2: planet2.to_string(),
            aspect_type,
            angle: None,
            orb: None,
            applying: None,
        }
    }
}

/// House cusp longitudes, keyed `House1`..`House12` on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Option<f64>>",
    into = "BTreeMap<String, f64>"
)]
pub struct HouseCusps {
    cusps: [Option<f64>; 12],
}

impl HouseCusps {
    pub fn from_degrees(degrees: [f64; 12]) -> Self {
        Self {
            cusps: degrees.map(Some),
        }
    }

    /// Set the cusp of house `number` (1-based). Out-of-range numbers are ignored.
    pub fn set(&mut self, number: u8, degree: f64) {
        if (1..=12).contains(&number) {
            self.cusps[(number - 1) as usize] = Some(degree);
        }
    }

    pub fn remove(&mut self, number: u8) {
        if (1..=12).contains(&number) {
            self.cusps[(number - 1) as usize] = None;
        }
    }

    /// Cusp of house `number` (1-based), if present and finite.
    pub fn get(&self, number: u8) -> Option<f64> {
        if !(1..=12).contains(&number) {
            return None;
        }
        self.cusps[(number - 1) as usize].filter(|d| d.is_finite())
    }

    pub fn ascendant(&self) -> Option<f64> {
        self.get(1)
    }

    pub fn len(&self) -> usize {
        self.cusps.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a wire label such as `House7` into its house number.
    pub fn parse_label(label: &str) -> Option<u8> {
        let caps = HOUSE_LABEL.captures(label)?;
        let number: u8 = caps.get(1)?.as_str().parse().ok()?;
        (1..=12).contains(&number).then_some(number)
    }

    pub fn label(number: u8) -> String {
        format!("House{}", number)
    }
}

impl TryFrom<BTreeMap<String, Option<f64>>> for HouseCusps {
    type Error = ChartDataError;

    fn try_from(map: BTreeMap<String, Option<f64>>) -> Result<Self, Self::Error> {
        let mut houses = HouseCusps::default();
        for (label, degree) in map {
            let number =
                HouseCusps::parse_label(&label).ok_or(ChartDataError::UnknownHouse(label))?;
            if let Some(degree) = degree {
                houses.set(number, degree);
            }
        }
        Ok(houses)
    }
}

impl From<HouseCusps> for BTreeMap<String, f64> {
    fn from(houses: HouseCusps) -> Self {
        (1..=12u8)
            .filter_map(|n| houses.get(n).map(|d| (HouseCusps::label(n), d)))
            .collect()
    }
}

/// Full input for one chart render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub points: BTreeMap<String, ChartPoint>,
    #[serde(default)]
    pub houses: HouseCusps,
    #[serde(default)]
    pub aspects: Vec<AspectEntry>,
}
