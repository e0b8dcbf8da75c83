// Copyright 2026 the Fresco Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color-contrast utility: map a background color to a readable text color.
//!
//! Uses the YIQ relative-luminance formula from the W3C AERT note. Unknown
//! or missing colors are treated as white so the fallback text stays dark.

/// Parses a CSS color string (`#RGB`, `#RRGGBB`, `rgb(...)`, `rgba(...)`)
/// into `(r, g, b)`. Unparseable input yields white.
#[must_use]
pub fn parse_color(color: Option<&str>) -> (u8, u8, u8) {
    let Some(color) = color else {
        return (255, 255, 255);
    };
    let color = color.trim();

    if let Some(hex) = color.strip_prefix('#') {
        // Byte-range slicing below requires single-byte characters.
        if !hex.is_ascii() {
            return (255, 255, 255);
        }
        let expanded: String = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_owned()
        };
        if expanded.len() >= 6 {
            let parse = |range| u8::from_str_radix(&expanded[range], 16).ok();
            if let (Some(r), Some(g), Some(b)) = (parse(0..2), parse(2..4), parse(4..6)) {
                return (r, g, b);
            }
        }
        return (255, 255, 255);
    }

    if let Some(rest) = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))
    {
        let mut parts = rest
            .trim_end_matches(')')
            .split(',')
            .map(|p| p.trim().parse::<u8>().ok());
        if let (Some(Some(r)), Some(Some(g)), Some(Some(b))) =
            (parts.next(), parts.next(), parts.next())
        {
            return (r, g, b);
        }
    }

    (255, 255, 255)
}

/// Relative luminance in `0..=255` per the YIQ formula.
#[must_use]
pub fn luminance(color: Option<&str>) -> f64 {
    let (r, g, b) = parse_color(color);
    (f64::from(r) * 299.0 + f64::from(g) * 587.0 + f64::from(b) * 114.0) / 1000.0
}

/// Returns the text color readable against `background`: white on dark
/// backgrounds (luminance below 128), near-black otherwise.
#[must_use]
pub fn contrast_text_color(background: Option<&str>) -> &'static str {
    if luminance(background) < 128.0 {
        "#ffffff"
    } else {
        "#333333"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_color(Some("#070707")), (7, 7, 7));
        assert_eq!(parse_color(Some("#fff")), (255, 255, 255));
        assert_eq!(parse_color(Some("#1a2b3c")), (0x1a, 0x2b, 0x3c));
    }

    #[test]
    fn parses_rgb_functions() {
        assert_eq!(parse_color(Some("rgb(10, 20, 30)")), (10, 20, 30));
        assert_eq!(parse_color(Some("rgba(10, 20, 30, 0.5)")), (10, 20, 30));
    }

    #[test]
    fn unknown_input_is_white() {
        assert_eq!(parse_color(None), (255, 255, 255));
        assert_eq!(parse_color(Some("tomato")), (255, 255, 255));
        assert_eq!(parse_color(Some("#xyz")), (255, 255, 255));
    }

    #[test]
    fn non_ascii_hex_falls_back_to_white() {
        // Multi-byte characters must not trip the byte-range slicing.
        assert_eq!(parse_color(Some("#aéaaaa")), (255, 255, 255));
        assert_eq!(parse_color(Some("#ééé")), (255, 255, 255));
        assert_eq!(contrast_text_color(Some("#aéaaaa")), "#333333");
    }

    #[test]
    fn dark_background_gets_light_text() {
        assert_eq!(contrast_text_color(Some("#070707")), "#ffffff");
        assert_eq!(contrast_text_color(Some("#ffffff")), "#333333");
        // Missing color falls back to white, so text is dark.
        assert_eq!(contrast_text_color(None), "#333333");
    }
}
