//! Background/foreground contrast.

/// Text color for dark backgrounds.
pub const LIGHT_TEXT: &str = "#ffffff";
/// Text color for light backgrounds.
pub const DARK_TEXT: &str = "#1a1a2e";

/// Parse a `#rrggbb` color.
pub fn parse_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Pick a readable text color for a `#rrggbb` background, falling back to
/// light text when the background cannot be parsed.
pub fn contrast_text(background: &str) -> &'static str {
    match parse_rgb(background) {
        Some((r, g, b)) => {
            let luminance =
                (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
            if luminance > 0.5 { DARK_TEXT } else { LIGHT_TEXT }
        }
        None => LIGHT_TEXT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        assert_eq!(parse_rgb("#4285F4"), Some((0x42, 0x85, 0xF4)));
        assert_eq!(parse_rgb("4285F4"), None);
        assert_eq!(parse_rgb("#fff"), None);
        assert_eq!(parse_rgb("#gggggg"), None);
    }

    #[test]
    fn test_light_background_gets_dark_text() {
        assert_eq!(contrast_text("#ffffff"), DARK_TEXT);
        assert_eq!(contrast_text("#ffe4b5"), DARK_TEXT);
    }

    #[test]
    fn test_dark_background_gets_light_text() {
        assert_eq!(contrast_text("#000000"), LIGHT_TEXT);
        assert_eq!(contrast_text("#1a237e"), LIGHT_TEXT);
    }

    #[test]
    fn test_unparseable_background_defaults_to_light_text() {
        assert_eq!(contrast_text("tomato"), LIGHT_TEXT);
    }
}
