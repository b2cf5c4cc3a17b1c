// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! Luminance-aware color helpers.

/// An RGB color, one byte per channel.
pub type Rgb = (u8, u8, u8);

/// Gamma-corrected relative luminance of a color, in `0.0..=1.0`.
///
/// A naive luminance would weigh the channels equally, but the eye
/// perceives a fixed quantity of green as more luminous than the same
/// quantity of red, and red as more luminous than blue. The WCAG channel
/// coefficients account for that.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn gamma(c: f64) -> f64 {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    let r = gamma(f64::from(rgb.0) / 255.0);
    let g = gamma(f64::from(rgb.1) / 255.0);
    let b = gamma(f64::from(rgb.2) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// White for dark backgrounds, black for light ones.
pub fn contrast_color(background: Rgb) -> Rgb {
    if relative_luminance(background) < 0.5 {
        (255, 255, 255)
    } else {
        (0, 0, 0)
    }
}

/// Format a color as an SVG `#rrggbb` literal.
pub fn to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}
