//! Named palettes for layer colors
//!
//! Layers take colors in creation order, cycling through the active palette.

/// Name of the palette used when none is configured
pub const DEFAULT_PALETTE: &str = "trail";

/// Every name accepted by [`get_palette`]
pub const PALETTE_NAMES: &[&str] = &["trail", "tableau10", "category10", "set1", "dark2"];

// =============================================================================
// Palettes
// =============================================================================

/// High-contrast colors for satellite imagery, led by the classic track green
pub const TRAIL: &[&str] = &[
    "#00ff00", "#ff00ff", "#00ffff", "#ffff00", "#ff8000",
    "#ff0000", "#0080ff", "#ffffff",
];

/// Tableau 10
pub const TABLEAU10: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f",
    "#edc948", "#b07aa1", "#ff9da7", "#9c755f", "#bab0ac",
];

/// D3 Category 10
pub const CATEGORY10: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// ColorBrewer Set1
pub const SET1: &[&str] = &[
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00",
    "#ffff33", "#a65628", "#f781bf", "#999999",
];

/// ColorBrewer Dark2
pub const DARK2: &[&str] = &[
    "#1b9e77", "#d95f02", "#7570b3", "#e7298a", "#66a61e",
    "#e6ab02", "#a6761d", "#666666",
];

// =============================================================================
// Lookup
// =============================================================================

/// Look up a palette by name (case insensitive).
pub fn get_palette(name: &str) -> Option<&'static [&'static str]> {
    match name.to_lowercase().as_str() {
        "trail" | "default" => Some(TRAIL),
        "tableau10" | "tableau" => Some(TABLEAU10),
        "category10" => Some(CATEGORY10),
        "set1" => Some(SET1),
        "dark2" => Some(DARK2),
        _ => None,
    }
}

pub fn default_palette() -> &'static [&'static str] {
    TRAIL
}

/// Color for the layer created at position `counter` (0-based).
/// Cycles through the palette when there are more layers than colors.
pub fn color_for<S: AsRef<str>>(palette: &[S], counter: u64) -> &str {
    // Palettes are validated non-empty on construction.
    let index = (counter % palette.len() as u64) as usize;
    palette[index].as_ref()
}

/// Convert any CSS color (name, hex, rgb(), hsl()...) to lowercase hex.
pub fn normalize_color(value: &str) -> Result<String, String> {
    csscolorparser::parse(value)
        .map(|c| c.to_css_hex())
        .map_err(|e| format!("Invalid color '{}': {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_palette() {
        assert_eq!(get_palette("trail"), Some(TRAIL));
        assert_eq!(get_palette("SET1"), Some(SET1)); // case insensitive
        assert_eq!(get_palette("default"), Some(TRAIL));
        assert!(get_palette("unknown").is_none());
    }

    #[test]
    fn test_every_listed_name_resolves() {
        for name in PALETTE_NAMES {
            assert!(get_palette(name).is_some(), "missing palette {}", name);
        }
    }

    #[test]
    fn test_default_starts_with_track_green() {
        assert_eq!(default_palette()[0], "#00ff00");
        assert_eq!(get_palette(DEFAULT_PALETTE), Some(default_palette()));
    }

    #[test]
    fn test_color_for_cycles() {
        assert_eq!(color_for(TABLEAU10, 0), "#4e79a7");
        assert_eq!(color_for(TABLEAU10, 1), "#f28e2b");
        assert_eq!(color_for(TABLEAU10, 10), color_for(TABLEAU10, 0));
        assert_eq!(color_for(TABLEAU10, 23), color_for(TABLEAU10, 3));

        let owned = vec!["#111111".to_string(), "#222222".to_string()];
        assert_eq!(color_for(owned.as_slice(), 3), "#222222");
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("red").unwrap(), "#ff0000");
        assert_eq!(normalize_color("#F00").unwrap(), "#ff0000");
        assert_eq!(normalize_color("rgb(0, 255, 0)").unwrap(), "#00ff00");
        assert!(normalize_color("notacolor").is_err());
        assert!(normalize_color("").is_err());
    }

    #[test]
    fn test_builtin_palettes_are_normalized() {
        for name in PALETTE_NAMES {
            for color in get_palette(name).unwrap() {
                assert_eq!(normalize_color(color).unwrap(), *color);
            }
        }
    }
}
