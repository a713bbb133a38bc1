use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: region → Color32
// ---------------------------------------------------------------------------

/// Maps each region of the loaded dataset to a distinct colour, so pie
/// slices keep their colour when the date range changes.
#[derive(Debug, Clone, Default)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl RegionColors {
    /// Build a colour map from the dataset's distinct regions.
    pub fn new<'a>(regions: impl IntoIterator<Item = &'a str>) -> Self {
        let regions: Vec<&str> = regions.into_iter().collect();
        let palette = generate_palette(regions.len());
        let mapping: BTreeMap<String, Color32> = regions
            .into_iter()
            .zip(palette)
            .map(|(r, c)| (r.to_string(), c))
            .collect();

        RegionColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a region.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping
            .get(region)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors() {
        let palette = generate_palette(4);
        assert_eq!(palette.len(), 4);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn colors_are_stable_per_region() {
        let map = RegionColors::new(["East", "West"]);
        assert_eq!(map.color_for("East"), map.color_for("East"));
        assert_ne!(map.color_for("East"), map.color_for("West"));
        assert_eq!(map.color_for("North"), Color32::GRAY);
    }
}
