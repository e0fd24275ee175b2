//! Color resolution utilities
//!
//! Resolves color specifications (hex literals or well-known names) to
//! canonical `#RRGGBB` strings and picks a contrasting text color.
//!
//! Every function here is total: unknown names, empty input and malformed
//! values all resolve through the white fallback instead of failing. The
//! host renders timetable cells from user-supplied color fields and must
//! never lose a row over a bad color.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical white, the fallback for anything unrecognized.
pub const WHITE: &str = "#FFFFFF";

/// Canonical black, the text color against light backgrounds.
pub const BLACK: &str = "#000000";

/// Well-known color names and their `#RRGGBB` values.
///
/// Several names map to the same value (British and American spellings of
/// gray). The set is hand-curated for the host application, not the full
/// CSS keyword list; extend it here when a new name shows up in data.
pub const NAMED_COLORS: &[(&str, &str)] = &[
    ("Aqua", "#00FFFF"),
    ("Beige", "#F5F5DC"),
    ("Black", "#000000"),
    ("Blue", "#0000FF"),
    ("Brown", "#A52A2A"),
    ("Chocolate", "#D2691E"),
    ("Coral", "#FF7F50"),
    ("Crimson", "#DC143C"),
    ("Cyan", "#00FFFF"),
    ("DarkBlue", "#00008B"),
    ("DarkGray", "#A9A9A9"),
    ("DarkGreen", "#006400"),
    ("DarkGrey", "#A9A9A9"),
    ("DarkRed", "#8B0000"),
    ("DeepPink", "#FF1493"),
    ("DodgerBlue", "#1E90FF"),
    ("Firebrick", "#B22222"),
    ("ForestGreen", "#228B22"),
    ("Fuchsia", "#FF00FF"),
    ("Gold", "#FFD700"),
    ("Goldenrod", "#DAA520"),
    ("Gray", "#808080"),
    ("Green", "#008000"),
    ("Grey", "#808080"),
    ("HotPink", "#FF69B4"),
    ("Indigo", "#4B0082"),
    ("Ivory", "#FFFFF0"),
    ("Khaki", "#F0E68C"),
    ("Lavender", "#E6E6FA"),
    ("LightBlue", "#ADD8E6"),
    ("LightGray", "#D3D3D3"),
    ("LightGreen", "#90EE90"),
    ("LightGrey", "#D3D3D3"),
    ("LightYellow", "#FFFFE0"),
    ("Lime", "#00FF00"),
    ("LimeGreen", "#32CD32"),
    ("Magenta", "#FF00FF"),
    ("Maroon", "#800000"),
    ("MidnightBlue", "#191970"),
    ("Navy", "#000080"),
    ("Olive", "#808000"),
    ("OliveDrab", "#6B8E23"),
    ("Orange", "#FFA500"),
    ("Orchid", "#DA70D6"),
    ("Pink", "#FFC0CB"),
    ("Plum", "#DDA0DD"),
    ("Purple", "#800080"),
    ("Red", "#FF0000"),
    ("RoyalBlue", "#4169E1"),
    ("Salmon", "#FA8072"),
    ("SeaGreen", "#2E8B57"),
    ("Silver", "#C0C0C0"),
    ("SkyBlue", "#87CEEB"),
    ("SlateGray", "#708090"),
    ("SlateGrey", "#708090"),
    ("SteelBlue", "#4682B4"),
    ("Tan", "#D2B48C"),
    ("Teal", "#008080"),
    ("Tomato", "#FF6347"),
    ("Turquoise", "#40E0D0"),
    ("Violet", "#EE82EE"),
    ("Wheat", "#F5DEB3"),
    ("White", "#FFFFFF"),
    ("Yellow", "#FFFF00"),
];

/// Name table keyed by lowercased name, built once on first lookup.
fn name_table() -> &'static HashMap<String, &'static str> {
    static TABLE: OnceLock<HashMap<String, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| {
        NAMED_COLORS
            .iter()
            .map(|&(name, hex)| (name.to_ascii_lowercase(), hex))
            .collect()
    })
}

/// Look up a color name case-insensitively.
///
/// Returns `None` for unknown names; callers wanting the white fallback go
/// through [`to_hex_color`] instead.
pub fn named_color(name: &str) -> Option<&'static str> {
    name_table().get(&name.to_ascii_lowercase()).copied()
}

/// Check whether a value is a hex color literal: `#` followed by exactly
/// six hex digits, nothing else.
pub fn is_hex_color(color: &str) -> bool {
    let Some(digits) = color.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Resolve a color specification to its `#RRGGBB` form.
///
/// Hex literals pass through unchanged (original casing preserved). Names
/// resolve case-insensitively via [`NAMED_COLORS`]. Anything else, including
/// empty input, falls back to white.
pub fn to_hex_color(color: &str) -> String {
    if is_hex_color(color) {
        return color.to_string();
    }
    named_color(color).unwrap_or(WHITE).to_string()
}

/// Check whether a color specification means white.
///
/// Blank input counts as white: an unset color field renders on the default
/// white background.
pub fn is_white(color: &str) -> bool {
    color.trim().is_empty() || to_hex_color(color).eq_ignore_ascii_case(WHITE)
}

/// Pick black or white text for optimal contrast against a background color.
///
/// Uses the YIQ luma weighting `(r*299 + g*587 + b*114) / 1000` with integer
/// (truncating) division; a luma of 128 or more reads as a light background
/// and gets black text. Unrecognized input resolves to white first, so
/// garbage always yields black.
pub fn text_color(color: &str) -> &'static str {
    let hex = to_hex_color(color);
    let r = channel(&hex, 1, 3);
    let g = channel(&hex, 3, 5);
    let b = channel(&hex, 5, 7);
    let yiq = (r * 299 + g * 587 + b * 114) / 1000;
    if yiq >= 128 {
        BLACK
    } else {
        WHITE
    }
}

/// Parse one color channel out of a `#RRGGBB` string.
fn channel(hex: &str, start: usize, end: usize) -> u32 {
    hex.get(start..end)
        .and_then(|digits| u32::from_str_radix(digits, 16).ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;
    use test_case::test_case;

    // =========================================================================
    // is_hex_color
    // =========================================================================

    #[test_case("#FF00AA", true; "valid uppercase")]
    #[test_case("#ff00aa", true; "valid lowercase")]
    #[test_case("#Ff00Aa", true; "valid mixed case")]
    #[test_case("FF00AA", false; "missing hash")]
    #[test_case("#FFF", false; "too short")]
    #[test_case("#FF00AABB", false; "too long")]
    #[test_case("#GGGGGG", false; "invalid digits")]
    #[test_case("Red", false; "color name")]
    #[test_case("", false; "empty")]
    #[test_case("##FF00A", false; "double hash")]
    fn hex_color_detection(input: &str, expected: bool) {
        assert_eq!(is_hex_color(input), expected);
    }

    // =========================================================================
    // to_hex_color
    // =========================================================================

    #[test]
    fn hex_literal_passes_through_unchanged() {
        assert_eq!(to_hex_color("#FF0000"), "#FF0000");
        // Casing preserved, not normalized
        assert_eq!(to_hex_color("#ff00aa"), "#ff00aa");
    }

    #[test]
    fn known_names_resolve() {
        assert_eq!(to_hex_color("Red"), "#FF0000");
        assert_eq!(to_hex_color("Black"), "#000000");
        assert_eq!(to_hex_color("White"), "#FFFFFF");
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(to_hex_color("red"), "#FF0000");
        assert_eq!(to_hex_color("black"), "#000000");
        assert_eq!(to_hex_color("bLuE"), "#0000FF");
    }

    #[test]
    fn gray_spellings_converge() {
        assert_eq!(to_hex_color("Grey"), "#808080");
        assert_eq!(to_hex_color("Gray"), "#808080");
        assert_eq!(to_hex_color("Grey"), to_hex_color("Gray"));
    }

    #[test]
    fn unknown_name_falls_back_to_white() {
        assert_eq!(to_hex_color("NotAColor"), "#FFFFFF");
        assert_eq!(to_hex_color(""), "#FFFFFF");
    }

    #[test]
    fn to_hex_color_is_idempotent() {
        for spec in ["#FF0000", "Red", "Grey", "NotAColor", ""] {
            let once = to_hex_color(spec);
            assert_eq!(to_hex_color(&once), once, "not idempotent for {spec:?}");
        }
    }

    // =========================================================================
    // is_white
    // =========================================================================

    #[test]
    fn white_detection() {
        assert!(is_white("#FFFFFF"));
        assert!(is_white("#ffffff"));
        assert!(is_white(""));
        assert!(is_white("   "));
        assert!(is_white("White"));
        assert!(is_white("white"));
        assert!(is_white("WHITE"));
    }

    #[test]
    fn non_white_detection() {
        assert!(!is_white("#000000"));
        assert!(!is_white("#FF0000"));
        assert!(!is_white("Black"));
    }

    // =========================================================================
    // text_color
    // =========================================================================

    #[test]
    fn light_backgrounds_get_black_text() {
        assert_eq!(text_color("#FFFFFF"), "#000000");
        assert_eq!(text_color("#FFFF00"), "#000000"); // yellow
    }

    #[test]
    fn dark_backgrounds_get_white_text() {
        assert_eq!(text_color("#000000"), "#FFFFFF");
        assert_eq!(text_color("#000080"), "#FFFFFF"); // navy
        assert_eq!(text_color("Black"), "#FFFFFF");
        assert_eq!(text_color("black"), "#FFFFFF");
    }

    #[test]
    fn mid_gray_luma_boundary_resolves_to_black() {
        // (128*299 + 128*587 + 128*114) / 1000 == 128, exactly the >= boundary
        assert_eq!(text_color("#808080"), "#000000");
    }

    #[test]
    fn luma_just_below_boundary_resolves_to_white() {
        // (127*299 + 127*587 + 127*114) / 1000 == 127
        assert_eq!(text_color("#7F7F7F"), "#FFFFFF");
    }

    #[test]
    fn garbage_resolves_via_white_fallback() {
        assert_eq!(text_color("UnknownColor"), "#000000");
        assert_eq!(text_color(""), "#000000");
        assert_eq!(text_color("#XYZ"), "#000000");
    }

    // =========================================================================
    // Name table invariants
    // =========================================================================

    #[test]
    fn every_table_entry_is_well_formed() {
        for (name, hex) in NAMED_COLORS {
            assert!(is_hex_color(hex), "bad value for {name}: {hex}");
        }
    }

    #[test]
    fn every_table_entry_contrasts_to_black_or_white() {
        for (name, hex) in NAMED_COLORS {
            let text = text_color(hex);
            assert!(
                text == BLACK || text == WHITE,
                "unexpected text color {text} for {name}"
            );
        }
    }

    #[test]
    fn every_table_entry_round_trips_through_lookup() {
        for (name, hex) in NAMED_COLORS {
            assert_eq!(named_color(name), Some(*hex));
            assert_eq!(to_hex_color(name), *hex);
        }
    }
}
