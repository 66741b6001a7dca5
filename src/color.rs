//! CSS color-name resolution without a browser.
//!
//! Trace colors in dashboard configs arrive as CSS names or hex strings; the
//! original lookup went through a DOM computed style, which a library cannot
//! do. [`color_by_name`] resolves against a static table instead, and
//! [`parse_color`] adds `#RGB` / `#RRGGBB` hex support on top.

use std::collections::HashMap;

use egui::Color32;
use once_cell::sync::Lazy;

// CSS named colors: the basic 16 plus the extended names dashboards commonly use.
static NAMED_COLORS: Lazy<HashMap<&'static str, Color32>> = Lazy::new(|| {
    HashMap::from([
        ("black", Color32::from_rgb(0, 0, 0)),
        ("silver", Color32::from_rgb(192, 192, 192)),
        ("gray", Color32::from_rgb(128, 128, 128)),
        ("grey", Color32::from_rgb(128, 128, 128)),
        ("white", Color32::from_rgb(255, 255, 255)),
        ("maroon", Color32::from_rgb(128, 0, 0)),
        ("red", Color32::from_rgb(255, 0, 0)),
        ("purple", Color32::from_rgb(128, 0, 128)),
        ("fuchsia", Color32::from_rgb(255, 0, 255)),
        ("magenta", Color32::from_rgb(255, 0, 255)),
        ("green", Color32::from_rgb(0, 128, 0)),
        ("lime", Color32::from_rgb(0, 255, 0)),
        ("olive", Color32::from_rgb(128, 128, 0)),
        ("yellow", Color32::from_rgb(255, 255, 0)),
        ("navy", Color32::from_rgb(0, 0, 128)),
        ("blue", Color32::from_rgb(0, 0, 255)),
        ("teal", Color32::from_rgb(0, 128, 128)),
        ("aqua", Color32::from_rgb(0, 255, 255)),
        ("cyan", Color32::from_rgb(0, 255, 255)),
        ("orange", Color32::from_rgb(255, 165, 0)),
        ("brown", Color32::from_rgb(165, 42, 42)),
        ("pink", Color32::from_rgb(255, 192, 203)),
        ("gold", Color32::from_rgb(255, 215, 0)),
        ("goldenrod", Color32::from_rgb(218, 165, 32)),
        ("indigo", Color32::from_rgb(75, 0, 130)),
        ("violet", Color32::from_rgb(238, 130, 238)),
        ("crimson", Color32::from_rgb(220, 20, 60)),
        ("coral", Color32::from_rgb(255, 127, 80)),
        ("salmon", Color32::from_rgb(250, 128, 114)),
        ("tomato", Color32::from_rgb(255, 99, 71)),
        ("khaki", Color32::from_rgb(240, 230, 140)),
        ("orchid", Color32::from_rgb(218, 112, 214)),
        ("plum", Color32::from_rgb(221, 160, 221)),
        ("turquoise", Color32::from_rgb(64, 224, 208)),
        ("steelblue", Color32::from_rgb(70, 130, 180)),
        ("royalblue", Color32::from_rgb(65, 105, 225)),
        ("skyblue", Color32::from_rgb(135, 206, 235)),
        ("slategray", Color32::from_rgb(112, 128, 144)),
        ("seagreen", Color32::from_rgb(46, 139, 87)),
        ("forestgreen", Color32::from_rgb(34, 139, 34)),
        ("limegreen", Color32::from_rgb(50, 205, 50)),
        ("hotpink", Color32::from_rgb(255, 105, 180)),
        ("deeppink", Color32::from_rgb(255, 20, 147)),
        ("chocolate", Color32::from_rgb(210, 105, 30)),
        ("sienna", Color32::from_rgb(160, 82, 45)),
        ("tan", Color32::from_rgb(210, 180, 140)),
        ("lavender", Color32::from_rgb(230, 230, 250)),
        ("darkblue", Color32::from_rgb(0, 0, 139)),
        ("darkgreen", Color32::from_rgb(0, 100, 0)),
        ("darkred", Color32::from_rgb(139, 0, 0)),
        ("darkorange", Color32::from_rgb(255, 140, 0)),
        ("darkgray", Color32::from_rgb(169, 169, 169)),
        ("lightgray", Color32::from_rgb(211, 211, 211)),
        ("lightblue", Color32::from_rgb(173, 216, 230)),
        ("lightgreen", Color32::from_rgb(144, 238, 144)),
    ])
});

/// Look up a CSS color name, case-insensitively.
pub fn color_by_name(name: &str) -> Option<Color32> {
    NAMED_COLORS
        .get(name.to_ascii_lowercase().as_str())
        .copied()
}

/// Parse a color from a CSS name or a `#RGB` / `#RRGGBB` hex string.
pub fn parse_color(s: &str) -> Option<Color32> {
    let s = s.trim();
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => color_by_name(s),
    }
}

fn parse_hex(hex: &str) -> Option<Color32> {
    fn nibble(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        // #RGB
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Color32::from_rgb(r * 17, g * 17, b * 17))
        }
        // #RRGGBB
        6 => {
            let pair = |hi: u8, lo: u8| Some(nibble(hi)? << 4 | nibble(lo)?);
            Some(Color32::from_rgb(
                pair(bytes[0], bytes[1])?,
                pair(bytes[2], bytes[3])?,
                pair(bytes[4], bytes[5])?,
            ))
        }
        _ => None,
    }
}
