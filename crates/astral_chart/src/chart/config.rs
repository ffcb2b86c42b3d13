use crate::chart::body::PlanetSet;
use crate::projection::Point;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read geometry config: {0}")]
    Io(String),
    #[error("Failed to parse geometry config: {0}")]
    Parse(String),
    #[error("Invalid radius: {0}")]
    InvalidRadius(String),
}

/// Offsets that derive every ring radius from the base radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusOffsets {
    /// Inner ring sits this far inside the base radius.
    pub inner: f64,
    /// House inner ring, outward from the inner ring.
    pub house_inner: f64,
    /// Zodiac ring, outward from the base radius.
    pub zodiac: f64,
    /// Outer zodiac ring, outward from the zodiac ring.
    pub outer_zodiac: f64,
    /// House ring, outward from the outer zodiac ring.
    pub house: f64,
    /// Outer boundary, outward from the base radius.
    pub outer_boundary: f64,
    pub zodiac_label: f64,
    pub house_label: f64,
    /// Planet label radius, outward from the base radius.
    pub planet_label: f64,
    /// Planet glyph radius as a fraction of the base radius.
    pub planet_factor: f64,
    /// Axis marker length beyond the outer boundary.
    pub axis: f64,
}

impl Default for RadiusOffsets {
    fn default() -> Self {
        Self {
            inner: 30.0,
            house_inner: 4.0,
            zodiac: 20.0,
            outer_zodiac: 10.0,
            house: 4.0,
            outer_boundary: 50.0,
            zodiac_label: 2.0,
            house_label: -2.0,
            planet_label: 30.0,
            planet_factor: 0.8,
            axis: 10.0,
        }
    }
}

/// Degree tick lengths, measured inward from the base radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickLengths {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl Default for TickLengths {
    fn default() -> Self {
        Self {
            short: 4.0,
            medium: 8.0,
            long: 12.0,
        }
    }
}

/// Resolved radii for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartRadii {
    pub inner: f64,
    pub house_inner: f64,
    pub base: f64,
    pub zodiac: f64,
    pub outer_zodiac: f64,
    pub house: f64,
    pub outer_boundary: f64,
    pub zodiac_label: f64,
    pub house_label: f64,
    pub planet: f64,
    pub planet_label: f64,
    pub axis: f64,
}

impl ChartRadii {
    /// Ring radii from innermost to outermost, with names for error messages.
    pub fn rings(&self) -> [(&'static str, f64); 7] {
        [
            ("inner", self.inner),
            ("house_inner", self.house_inner),
            ("base", self.base),
            ("zodiac", self.zodiac),
            ("outer_zodiac", self.outer_zodiac),
            ("house", self.house),
            ("outer_boundary", self.outer_boundary),
        ]
    }
}

/// Construction-time geometry of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartGeometryConfig {
    pub center: Point,
    pub base_radius: f64,
    pub offsets: RadiusOffsets,
    pub ticks: TickLengths,
    pub planet_set: PlanetSet,
}

impl Default for ChartGeometryConfig {
    fn default() -> Self {
        Self {
            center: Point::new(200.0, 200.0),
            base_radius: 140.0,
            offsets: RadiusOffsets::default(),
            ticks: TickLengths::default(),
            planet_set: PlanetSet::Modern,
        }
    }
}

impl ChartGeometryConfig {
    pub fn new(center: Point, base_radius: f64) -> Self {
        Self {
            center,
            base_radius,
            ..Self::default()
        }
    }

    pub fn with_planet_set(mut self, planet_set: PlanetSet) -> Self {
        self.planet_set = planet_set;
        self
    }

    pub fn radii(&self) -> ChartRadii {
        let o = &self.offsets;
        let base = self.base_radius;
        let inner = base - o.inner;
        let zodiac = base + o.zodiac;
        let outer_zodiac = zodiac + o.outer_zodiac;
        let house = outer_zodiac + o.house;
        let outer_boundary = base + o.outer_boundary;
        ChartRadii {
            inner,
            house_inner: inner + o.house_inner,
            base,
            zodiac,
            outer_zodiac,
            house,
            outer_boundary,
            zodiac_label: (base + zodiac) / 2.0 + o.zodiac_label,
            house_label: (outer_boundary + house) / 2.0 + o.house_label,
            planet: base * o.planet_factor,
            planet_label: base + o.planet_label,
            axis: outer_boundary + o.axis,
        }
    }

    /// Check that the ring radii are positive and strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_radius.is_finite() || self.base_radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(format!(
                "base_radius must be a positive number, got {}",
                self.base_radius
            )));
        }
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ConfigError::InvalidRadius(
                "center must have finite coordinates".to_string(),
            ));
        }

        let radii = self.radii();
        let rings = radii.rings();
        if rings[0].1 <= 0.0 {
            return Err(ConfigError::InvalidRadius(format!(
                "inner radius must be positive, got {}",
                rings[0].1
            )));
        }
        for pair in rings.windows(2) {
            let (lower_name, lower) = pair[0];
            let (upper_name, upper) = pair[1];
            if !(lower < upper) {
                return Err(ConfigError::InvalidRadius(format!(
                    "{} ({}) must be smaller than {} ({})",
                    lower_name, lower, upper_name, upper
                )));
            }
        }

        if !(radii.planet > 0.0 && radii.planet.is_finite()) {
            return Err(ConfigError::InvalidRadius(format!(
                "planet radius must be positive, got {}",
                radii.planet
            )));
        }

        let ticks = &self.ticks;
        if !(0.0 <= ticks.short && ticks.short <= ticks.medium && ticks.medium <= ticks.long)
            || ticks.long >= self.base_radius
        {
            return Err(ConfigError::InvalidRadius(
                "tick lengths must satisfy 0 <= short <= medium <= long < base_radius".to_string(),
            ));
        }

        Ok(())
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ChartGeometryConfig =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }
}
