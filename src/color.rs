//! RGB colors, the X11 name table, and the parser for the fixed-width color
//! listings the table is generated from.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use eframe::egui::Color32;
use once_cell::sync::Lazy;

use crate::error::{GraphicsError, Result};
use crate::x11_colors::X11_COLORS;

/// An immutable RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);

// keys are normalised with `normalize_name`, so "Alice Blue", "aliceblue"
// and "alice blue" all land on the same entry
static NAMED: Lazy<HashMap<String, Color>> = Lazy::new(|| {
    X11_COLORS
        .iter()
        .map(|(name, color)| (normalize_name(name), *color))
        .collect()
});

fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .replace("grey", "gray")
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// look a color up by its X11 name. Case, spaces and the grey/gray
    /// spelling are ignored.
    pub fn named(name: &str) -> Result<Self> {
        NAMED
            .get(&normalize_name(name))
            .copied()
            .ok_or_else(|| GraphicsError::UnknownColor(name.to_string()))
    }

    /// parse a `#RRGGBB` string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || GraphicsError::InvalidHex(hex.to_string());
        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// every name in the table, in table order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        X11_COLORS.iter().map(|(name, _)| *name)
    }
}

/// `graphics.py`-style helper.
pub fn color_rgb(r: u8, g: u8, b: u8) -> Color {
    Color::rgb(r, g, b)
}

impl Default for Color {
    fn default() -> Self {
        BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = GraphicsError;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with('#') {
            Color::from_hex(s)
        } else {
            Color::named(s)
        }
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<Color> for Color32 {
    fn from(c: Color) -> Self {
        Color32::from_rgb(c.r, c.g, c.b)
    }
}

/// Anything a shape or window accepts where a color is expected:
/// a `Color`, an `(r, g, b)` tuple, or a color name.
pub trait IntoColor {
    fn into_color(self) -> Result<Color>;
}

impl IntoColor for Color {
    fn into_color(self) -> Result<Color> {
        Ok(self)
    }
}

impl IntoColor for (u8, u8, u8) {
    fn into_color(self) -> Result<Color> {
        Ok(self.into())
    }
}

impl IntoColor for &str {
    fn into_color(self) -> Result<Color> {
        self.parse()
    }
}

impl IntoColor for &String {
    fn into_color(self) -> Result<Color> {
        self.parse()
    }
}

impl IntoColor for String {
    fn into_color(self) -> Result<Color> {
        self.parse()
    }
}

// column layout of the color listings: 23 chars of primary name,
// 21 chars of alternate name, then "#RRGGBB"
const NAME_WIDTH: usize = 23;
const ALT_NAME_END: usize = 44;
const LINE_MIN_LEN: usize = 51;

/// One usable row of a fixed-width color listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTableRow {
    pub name: String,
    pub alt_name: String,
    pub color: Color,
}

/// parse one line of a fixed-width color listing. Lines that are too
/// short, have no `#` where the hex value should start, or are not ASCII
/// are skipped (`None`).
pub fn parse_color_table_line(line: &str) -> Option<ColorTableRow> {
    if line.len() < LINE_MIN_LEN || !line.is_ascii() {
        return None;
    }
    if line.as_bytes()[ALT_NAME_END] != b'#' {
        return None;
    }

    let name = line[..NAME_WIDTH].trim().to_string();
    let alt_name = line[NAME_WIDTH..ALT_NAME_END].trim().to_string();
    let color = Color::from_hex(line[ALT_NAME_END..LINE_MIN_LEN].trim()).ok()?;

    Some(ColorTableRow {
        name,
        alt_name,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn named_lookup_ignores_case_spaces_and_spelling() {
        let alice = Color::named("alice blue").unwrap();
        assert_eq!(alice, Color::rgb(0xF0, 0xF8, 0xFF));
        assert_eq!(Color::named("AliceBlue").unwrap(), alice);
        assert_eq!(Color::named("dark green").unwrap(), Color::rgb(0x00, 0x64, 0x00));
        assert_eq!(Color::named("hotpink").unwrap(), Color::rgb(0xFF, 0x69, 0xB4));
        assert_eq!(Color::named("grey").unwrap(), Color::named("gray").unwrap());
        assert_eq!(
            Color::named("Dark Slate Grey").unwrap(),
            Color::rgb(0x2F, 0x4F, 0x4F)
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = Color::named("not a color").unwrap_err();
        assert!(matches!(err, GraphicsError::UnknownColor(ref n) if n == "not a color"));
        assert!("blurple".parse::<Color>().is_err());
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!("#00FF7F".parse::<Color>().unwrap(), Color::named("spring green").unwrap());
        assert!(Color::from_hex("ff8000").is_err());
        assert!(Color::from_hex("#ff80").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
        assert_eq!(Color::rgb(1, 2, 255).to_hex(), "#0102ff");
    }

    #[test]
    fn into_color_accepts_names_tuples_and_colors() {
        assert_eq!("red".into_color().unwrap(), Color::rgb(255, 0, 0));
        assert_eq!((1u8, 2u8, 3u8).into_color().unwrap(), color_rgb(1, 2, 3));
        assert_eq!(WHITE.into_color().unwrap(), WHITE);
        assert!(String::from("nope").into_color().is_err());
    }

    #[test]
    fn every_table_name_resolves() {
        for name in Color::names() {
            assert!(Color::named(name).is_ok(), "{name} should resolve");
        }
    }

    #[test]
    fn parses_fixed_width_rows() {
        let line = format!("{:<23}{:<21}{}", "alice blue", "AliceBlue", "#F0F8FF");
        let row = parse_color_table_line(&line).unwrap();
        assert_eq!(row.name, "alice blue");
        assert_eq!(row.alt_name, "AliceBlue");
        assert_eq!(row.color, Color::rgb(0xF0, 0xF8, 0xFF));

        // trailing text after the hex value is ignored
        let with_tail = format!("{line}   240 248 255");
        assert_eq!(parse_color_table_line(&with_tail), Some(row));
    }

    #[test]
    fn skips_short_and_malformed_rows() {
        assert_eq!(parse_color_table_line("X11 color names"), None);
        let no_hash = format!("{:<23}{:<21}{}", "red", "red", "FF0000 ");
        assert_eq!(parse_color_table_line(&no_hash), None);
        let bad_hex = format!("{:<23}{:<21}{}", "red", "red", "#FF00ZZ");
        assert_eq!(parse_color_table_line(&bad_hex), None);
    }
}
