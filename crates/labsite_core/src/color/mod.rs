//! Topic color derivation.
//!
//! # Responsibility
//! - Map a hue to a display color at fixed saturation/lightness.
//! - Extract the hue back out of a stored hex color.
//!
//! # Invariants
//! - Derivation is deterministic: same hue in, same hex out. Topic
//!   color identity across projects depends on this.
//! - Saturation and lightness never vary; hue is the only input.

pub mod gradient;

/// Fixed saturation for derived topic colors (0..=1).
pub const TOPIC_SATURATION: f32 = 0.70;
/// Fixed lightness for derived topic colors (0..=1).
pub const TOPIC_LIGHTNESS: f32 = 0.60;

/// Derives the display color for a hue, clamped into 0..360.
pub fn color_for_hue(hue: f32) -> String {
    let hue = normalize_hue(hue);
    let (r, g, b) = hsl_to_rgb(hue, TOPIC_SATURATION, TOPIC_LIGHTNESS);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Extracts the hue of a `#rrggbb` color, or `None` for unparsable input.
pub fn hue_of(hex: &str) -> Option<f32> {
    let (r, g, b) = parse_hex(hex)?;
    let (h, _, _) = rgb_to_hsl(r, g, b);
    Some(h)
}

/// Returns the color with lightness reduced by `percent` of its value,
/// hue and saturation preserved. Unparsable input is returned unchanged.
pub fn darken(hex: &str, percent: f32) -> String {
    let Some((r, g, b)) = parse_hex(hex) else {
        return hex.to_string();
    };
    let (h, s, l) = rgb_to_hsl(r, g, b);
    let factor = (1.0 - percent / 100.0).clamp(0.0, 1.0);
    let (r, g, b) = hsl_to_rgb(h, s, l * factor);
    format!("#{r:02x}{g:02x}{b:02x}")
}

fn normalize_hue(hue: f32) -> f32 {
    let wrapped = hue % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    // Byte length and byte slicing below are only valid for ASCII input.
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (u8, u8, u8) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h_prime {
        h if h < 1.0 => (c, x, 0.0),
        h if h < 2.0 => (x, c, 0.0),
        h if h < 3.0 => (0.0, c, x),
        h if h < 4.0 => (0.0, x, c),
        h if h < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    (
        ((r1 + m) * 255.0).round() as u8,
        ((g1 + m) * 255.0).round() as u8,
        ((b1 + m) * 255.0).round() as u8,
    )
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let delta = max - min;

    if delta == 0.0 {
        return (0.0, 0.0, l);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    (normalize_hue(h), s, l)
}

#[cfg(test)]
mod tests {
    use super::{color_for_hue, darken, hue_of, parse_hex};

    #[test]
    fn derivation_is_deterministic() {
        assert_eq!(color_for_hue(42.0), color_for_hue(42.0));
        assert_eq!(color_for_hue(370.0), color_for_hue(10.0));
        assert_eq!(color_for_hue(-30.0), color_for_hue(330.0));
    }

    #[test]
    fn hue_round_trips_through_derived_color() {
        for hue in [0.0_f32, 15.0, 120.0, 200.0, 340.0] {
            let color = color_for_hue(hue);
            let extracted = hue_of(&color).unwrap();
            // 8-bit quantization loses a little precision.
            assert!(
                (extracted - hue).abs() < 2.0,
                "hue {hue} extracted as {extracted} from {color}"
            );
        }
    }

    #[test]
    fn hue_of_rejects_malformed_input() {
        assert!(hue_of("red").is_none());
        assert!(hue_of("#12").is_none());
        assert!(hue_of("#gggggg").is_none());
    }

    #[test]
    fn hue_of_rejects_multibyte_input() {
        // Two 3-byte chars give a 6-byte string; must not panic on a
        // non-char-boundary slice.
        assert!(hue_of("#丂丂").is_none());
        assert!(parse_hex("#ff丂0").is_none());
        assert_eq!(darken("#丂丂", 25.0), "#丂丂");
    }

    #[test]
    fn darken_preserves_hue() {
        let base = color_for_hue(210.0);
        let darker = darken(&base, 25.0);
        assert_ne!(base, darker);
        let hue = hue_of(&darker).unwrap();
        assert!((hue - 210.0).abs() < 3.0);
    }

    #[test]
    fn darken_passes_through_unparsable_input() {
        assert_eq!(darken("not-a-color", 25.0), "not-a-color");
    }

    #[test]
    fn parse_hex_reads_channels() {
        assert_eq!(parse_hex("#ff8000"), Some((255, 128, 0)));
        assert_eq!(parse_hex("ff8000"), None);
    }
}
