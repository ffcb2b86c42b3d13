use crate::angle::{normalize_angle, sign_index, SIGN_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A chart body, keyed by the name the ephemeris backend uses.
///
/// Known names map to their variant; anything else is kept as `Other` so
/// that partial or exotic data still lays out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    NorthNode,
    SouthNode,
    Other(String),
}

/// The seven bodies of traditional astrology.
pub const CLASSICAL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    pub fn from_name(name: &str) -> Self {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "sun" => Body::Sun,
            "moon" => Body::Moon,
            "mercury" => Body::Mercury,
            "venus" => Body::Venus,
            "mars" => Body::Mars,
            "jupiter" => Body::Jupiter,
            "saturn" => Body::Saturn,
            "uranus" => Body::Uranus,
            "neptune" => Body::Neptune,
            "pluto" => Body::Pluto,
            "chiron" => Body::Chiron,
            "northnode" | "nnode" => Body::NorthNode,
            "southnode" | "snode" => Body::SouthNode,
            _ => Body::Other(name.to_string()),
        }
    }

    /// Display name, matching the backend's spelling for known bodies.
    pub fn name(&self) -> &str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Chiron => "Chiron",
            Body::NorthNode => "North Node",
            Body::SouthNode => "South Node",
            Body::Other(name) => name,
        }
    }

    pub fn is_classical(&self) -> bool {
        CLASSICAL_BODIES.contains(self)
    }

    /// Astrological glyph, if the body has a conventional one.
    pub fn glyph(&self) -> Option<&'static str> {
        let glyph = match self {
            Body::Sun => "\u{2609}",
            Body::Moon => "\u{263D}",
            Body::Mercury => "\u{263F}",
            Body::Venus => "\u{2640}",
            Body::Mars => "\u{2642}",
            Body::Jupiter => "\u{2643}",
            Body::Saturn => "\u{2644}",
            Body::Uranus => "\u{2645}",
            Body::Neptune => "\u{2646}",
            Body::Pluto => "\u{2647}",
            Body::Chiron => "\u{26B7}",
            Body::NorthNode => "\u{260A}",
            Body::SouthNode => "\u{260B}",
            Body::Other(_) => return None,
        };
        Some(glyph)
    }
}

impl From<String> for Body {
    fn from(name: String) -> Self {
        Body::from_name(&name)
    }
}

impl From<Body> for String {
    fn from(body: Body) -> Self {
        body.name().to_string()
    }
}

impl Serialize for Body {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Body {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Body::from_name(&name))
    }
}

impl FromStr for Body {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Body::from_name(s))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which bodies a chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanetSet {
    /// Every body with a usable longitude.
    #[default]
    Modern,
    /// Only the seven classical bodies.
    Traditional,
}

impl PlanetSet {
    pub fn includes(&self, body: &Body) -> bool {
        match self {
            PlanetSet::Modern => true,
            PlanetSet::Traditional => body.is_classical(),
        }
    }

    /// Display symbol for a body of this set: its glyph, or `name` for bodies
    /// without one.
    pub fn symbol(&self, body: &Body, name: &str) -> String {
        match body.glyph() {
            Some(glyph) if self.includes(body) => glyph.to_string(),
            _ => name.to_string(),
        }
    }
}

/// The twelve tropical signs, in ecliptic order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 12) as usize]
    }

    pub fn from_longitude(longitude: f64) -> Self {
        Self::from_index(sign_index(normalize_angle(longitude)))
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Ecliptic degree where the sign begins.
    pub fn start_degree(&self) -> f64 {
        self.index() as f64 * SIGN_WIDTH
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}",
            ZodiacSign::Taurus => "\u{2649}",
            ZodiacSign::Gemini => "\u{264A}",
            ZodiacSign::Cancer => "\u{264B}",
            ZodiacSign::Leo => "\u{264C}",
            ZodiacSign::Virgo => "\u{264D}",
            ZodiacSign::Libra => "\u{264E}",
            ZodiacSign::Scorpio => "\u{264F}",
            ZodiacSign::Sagittarius => "\u{2650}",
            ZodiacSign::Capricorn => "\u{2651}",
            ZodiacSign::Aquarius => "\u{2652}",
            ZodiacSign::Pisces => "\u{2653}",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl FromStr for ZodiacSign {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_from_name() {
        assert_eq!(Body::from_name("Sun"), Body::Sun);
        assert_eq!(Body::from_name("North Node"), Body::NorthNode);
        assert_eq!(Body::from_name("north_node"), Body::NorthNode);
        assert_eq!(
            Body::from_name("Ceres"),
            Body::Other("Ceres".to_string())
        );
        assert_eq!(Body::from_name("Ceres").name(), "Ceres");
    }

    #[test]
    fn test_classical_set() {
        assert!(Body::Saturn.is_classical());
        assert!(!Body::Uranus.is_classical());
        assert!(!Body::NorthNode.is_classical());
        assert!(PlanetSet::Modern.includes(&Body::Pluto));
        assert!(!PlanetSet::Traditional.includes(&Body::Pluto));
    }

    #[test]
    fn test_planet_set_symbols() {
        assert_eq!(PlanetSet::Modern.symbol(&Body::Uranus, "Uranus"), "\u{2645}");
        assert_eq!(PlanetSet::Traditional.symbol(&Body::Uranus, "Uranus"), "Uranus");
        assert_eq!(PlanetSet::Traditional.symbol(&Body::Saturn, "Saturn"), "\u{2644}");
        let vertex = Body::from_name("Vertex");
        assert_eq!(PlanetSet::Modern.symbol(&vertex, "Vertex"), "Vertex");
    }

    #[test]
    fn test_zodiac_sign_lookup() {
        assert_eq!(ZodiacSign::from_longitude(95.0), ZodiacSign::Cancer);
        assert_eq!(ZodiacSign::from_longitude(-1.0), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::Leo.start_degree(), 120.0);
        assert_eq!("scorpio".parse::<ZodiacSign>(), Ok(ZodiacSign::Scorpio));
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }
}
