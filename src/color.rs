use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Attribute;

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
// Fixed colour per attribute
// ---------------------------------------------------------------------------

/// Stroke colour of an attribute's box, stable across runs.
pub fn attribute_color(attribute: Attribute) -> Color32 {
    generate_palette(Attribute::ALL.len())[attribute.index()]
}

/// Translucent fill matching the attribute's stroke colour.
pub fn attribute_fill(attribute: Attribute) -> Color32 {
    let c = attribute_color(attribute);
    Color32::from_rgba_unmultiplied(c.r(), c.g(), c.b(), 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors_for_the_three_attributes() {
        let palette = generate_palette(Attribute::ALL.len());
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert_ne!(palette[0], palette[2]);
    }
}
