//! Theme constants and colors for the terminal board.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::ui::view_models::SquareShade;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEFD9B5;
pub const DARK_SQUARE: u32 = 0xB48764;

// Panel colors
pub const BORDER_COLOR: u32 = 0x00AFAF;
pub const TITLE_COLOR: u32 = 0x00D7D7;
pub const SUBTITLE_COLOR: u32 = 0x888888;
pub const PIECE_COLOR: u32 = 0x000000;

/// Columns taken by one square
pub const SQUARE_WIDTH: usize = 3;
/// Columns taken by the rank label in front of each row
pub const LABEL_WIDTH: usize = 2;

/// Light or dark, by parity of the 0-indexed row and column
pub fn square_shade(row: usize, col: usize) -> SquareShade {
    if (row + col) % 2 == 0 {
        SquareShade::Light
    } else {
        SquareShade::Dark
    }
}

/// 24-bit color, written as "#rrggbb" in config files
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 16) as u8,
            g: (hex >> 8) as u8,
            b: hex as u8,
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let digits = value
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| format!("expected a color like \"#rrggbb\", got {:?}", value))?;
        u32::from_str_radix(digits, 16)
            .map(Rgb::from_hex)
            .map_err(|e| e.to_string())
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl JsonSchema for Rgb {
    fn schema_name() -> Cow<'static, str> {
        "Rgb".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "string",
            "pattern": "^#[0-9a-fA-F]{6}$"
        })
    }
}

/// Colors used when painting the board panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct Theme {
    pub light_square: Rgb,
    pub dark_square: Rgb,
    pub border: Rgb,
    pub title: Rgb,
    pub subtitle: Rgb,
    pub piece: Rgb,
}

impl Theme {
    pub fn background(&self, shade: SquareShade) -> Rgb {
        match shade {
            SquareShade::Light => self.light_square,
            SquareShade::Dark => self.dark_square,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light_square: Rgb::from_hex(LIGHT_SQUARE),
            dark_square: Rgb::from_hex(DARK_SQUARE),
            border: Rgb::from_hex(BORDER_COLOR),
            title: Rgb::from_hex(TITLE_COLOR),
            subtitle: Rgb::from_hex(SUBTITLE_COLOR),
            piece: Rgb::from_hex(PIECE_COLOR),
        }
    }
}
