//! Hex color parsing and formatting for stroke and template colors.

use peniko::Color;
use thiserror::Error;

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color must start with '#'")]
    MissingHash,
    #[error("expected 3 or 6 hex digits, got {0}")]
    BadLength(usize),
    #[error("invalid hex digits: {0}")]
    BadHex(String),
}

/// Parse a CSS hex color like "#2196F3" or "#000".
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::BadHex(digits.to_string()));
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| ColorError::BadHex(digits.to_string()));

    match digits.len() {
        3 => {
            // Short form: each digit is doubled ("f" -> "ff")
            let mut rgb = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let v = channel(&c.to_string())?;
                rgb[i] = v * 17;
            }
            Ok(Color::from_rgba8(rgb[0], rgb[1], rgb[2], 255))
        }
        6 => {
            let r = channel(&digits[0..2])?;
            let g = channel(&digits[2..4])?;
            let b = channel(&digits[4..6])?;
            Ok(Color::from_rgba8(r, g, b, 255))
        }
        n => Err(ColorError::BadLength(n)),
    }
}

/// Format a color as "#rrggbb", dropping alpha.
pub fn to_hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

/// Alpha of a color as a 0.0-1.0 opacity.
pub fn opacity(color: Color) -> f64 {
    color.to_rgba8().a as f64 / 255.0
}
