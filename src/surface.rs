use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

use crate::error::BoardResult;
use crate::layout::LayoutRegion;

/// Pixel surface the host hands to a board. Drawing is buffered; nothing
/// reaches the panel until `present()`.
pub trait DrawSurface: Send {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn clear(&mut self) -> BoardResult<()>;

    /// Pushes the buffered frame to the panel.
    fn present(&mut self) -> BoardResult<()>;

    /// Draws `text` with its top-left corner at `position`.
    fn draw_text(&mut self, position: (i32, i32), text: &str, color: Rgb888) -> BoardResult<()>;

    /// Draws `text` horizontally centered on row `y`.
    fn draw_text_centered(&mut self, y: i32, text: &str, color: Rgb888) -> BoardResult<()>;

    /// Draws at the region's position; a region without one falls back to
    /// centering on `fallback_y`.
    fn draw_text_region(
        &mut self,
        region: &LayoutRegion,
        fallback_y: i32,
        text: &str,
        color: Rgb888,
    ) -> BoardResult<()> {
        match region.position {
            Some(position) => self.draw_text(position, text, color),
            None => self.draw_text_centered(fallback_y, text, color),
        }
    }
}

/// Text measurement for the host's active font.
pub trait FontMetrics: Send {
    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> BoardResult<u32>;
}

/// Parses a configured color: a small set of names or `#RRGGBB`.
pub fn parse_color(value: &str) -> Option<Rgb888> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        // byte slicing below needs exactly six ASCII hex digits
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Rgb888::new(r, g, b));
    }

    match v.to_ascii_lowercase().as_str() {
        "white" => Some(Rgb888::WHITE),
        "black" => Some(Rgb888::BLACK),
        "red" => Some(Rgb888::RED),
        "green" => Some(Rgb888::GREEN),
        "blue" => Some(Rgb888::BLUE),
        "yellow" => Some(Rgb888::YELLOW),
        "cyan" => Some(Rgb888::CYAN),
        "magenta" => Some(Rgb888::MAGENTA),
        "orange" => Some(Rgb888::new(255, 165, 0)),
        "purple" => Some(Rgb888::new(128, 0, 128)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_parse() {
        assert_eq!(parse_color("yellow"), Some(Rgb888::YELLOW));
        assert_eq!(parse_color("White"), Some(Rgb888::WHITE));
        assert_eq!(parse_color(" blue "), Some(Rgb888::BLUE));
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_color("#ff8800"), Some(Rgb888::new(0xff, 0x88, 0x00)));
        assert_eq!(parse_color("#000000"), Some(Rgb888::BLACK));
    }

    #[test]
    fn bad_colors_are_none() {
        assert_eq!(parse_color("chartreuse-ish"), None);
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#gghhii"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn non_ascii_hex_is_none() {
        // six bytes but two chars; must not panic on a char boundary
        assert_eq!(parse_color("#€€"), None);
        assert_eq!(parse_color("#ありが"), None);
    }
}
