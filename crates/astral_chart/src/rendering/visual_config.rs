use crate::chart::AspectType;
use crate::rendering::primitives::Color;
use std::collections::HashMap;

pub const ROMAN_NUMERALS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

pub const CUNEIFORM_NUMERALS: [&str; 12] = [
    "\u{12079}",
    "\u{12079}\u{12079}",
    "\u{12079}\u{12079}\u{12079}",
    "\u{12079}\u{12079}\u{12079}\u{12079}",
    "\u{12220}",
    "\u{12220}\u{12079}",
    "\u{12220}\u{12079}\u{12079}",
    "\u{12220}\u{12079}\u{12079}\u{12079}",
    "\u{12220}\u{12079}\u{12079}\u{12079}\u{12079}",
    "\u{12226}",
    "\u{12226}\u{12079}",
    "\u{12226}\u{12079}\u{12079}",
];

/// Numeral system for house labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HouseNumerals {
    Roman,
    #[default]
    Cuneiform,
}

impl HouseNumerals {
    /// Label for house `number` (1-based); empty for out-of-range numbers.
    pub fn label(&self, number: u8) -> &'static str {
        let table = match self {
            HouseNumerals::Roman => &ROMAN_NUMERALS,
            HouseNumerals::Cuneiform => &CUNEIFORM_NUMERALS,
        };
        match number {
            1..=12 => table[(number - 1) as usize],
            _ => "",
        }
    }
}

/// Visual styling configuration for chart elements
#[derive(Debug, Clone)]
pub struct VisualConfig {
    pub aspect_colors: HashMap<AspectType, Color>,
    pub aspect_stroke_width: f64,
    pub background_color: Color,
    pub ring_color: Color,
    pub house_line_color: Color,
    pub house_label_color: Color,
    pub tick_color: Color,
    pub sign_boundary_color: Color,
    pub sign_glyph_color: Color,
    pub axis_color: Color,
    pub planet_color: Color,
    pub stroke_width: f64,
}

impl VisualConfig {
    pub fn aspect_color(&self, aspect_type: AspectType) -> Color {
        self.aspect_colors
            .get(&aspect_type)
            .copied()
            .unwrap_or(Color::WHITE)
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        let mut aspect_colors = HashMap::new();
        aspect_colors.insert(AspectType::Conjunction, Color::rgb(0xFF, 0x00, 0xFF)); // neon pink
        aspect_colors.insert(AspectType::Square, Color::rgb(0xFF, 0x3D, 0x3D));
        aspect_colors.insert(AspectType::Trine, Color::rgb(0x80, 0x00, 0x80)); // purple
        aspect_colors.insert(AspectType::Opposition, Color::rgb(0xFF, 0xA5, 0x00)); // orange
        aspect_colors.insert(AspectType::Sextile, Color::rgb(0x00, 0x00, 0xFF)); // blue

        let orange = Color::rgb(0xFB, 0x92, 0x3C);
        let cyan = Color::rgb(0x67, 0xE8, 0xF9);

        Self {
            aspect_colors,
            aspect_stroke_width: 1.0,
            background_color: Color::BLACK,
            ring_color: cyan.with_opacity(0.3),
            house_line_color: orange.with_opacity(0.2),
            house_label_color: Color::rgb(0xFD, 0xBA, 0x74),
            tick_color: cyan.with_opacity(0.6),
            sign_boundary_color: cyan.with_opacity(0.3),
            sign_glyph_color: cyan,
            axis_color: Color::rgb(0xEE, 0xEE, 0xEE),
            planet_color: Color::rgb(0xFD, 0xBA, 0x74),
            stroke_width: 1.0,
        }
    }
}

/// Glyph configuration
#[derive(Debug, Clone)]
pub struct GlyphConfig {
    pub house_numerals: HouseNumerals,
    pub planet_glyph_size: f64,
    pub sign_glyph_size: f64,
    pub label_size: f64,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            house_numerals: HouseNumerals::default(),
            planet_glyph_size: 18.0,
            sign_glyph_size: 20.0,
            label_size: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_numerals() {
        assert_eq!(HouseNumerals::Roman.label(1), "I");
        assert_eq!(HouseNumerals::Roman.label(12), "XII");
        assert_eq!(HouseNumerals::Roman.label(13), "");
        assert_eq!(HouseNumerals::Cuneiform.label(1), "\u{12079}");
        assert_eq!(HouseNumerals::Cuneiform.label(10), "\u{12226}");
    }

    #[test]
    fn test_aspect_colors_cover_every_type() {
        let config = VisualConfig::default();
        for aspect_type in AspectType::ALL {
            assert!(config.aspect_colors.contains_key(&aspect_type));
        }
        assert_eq!(
            config.aspect_color(AspectType::Square),
            Color::from_hex("#FF3D3D").unwrap()
        );
    }
}
