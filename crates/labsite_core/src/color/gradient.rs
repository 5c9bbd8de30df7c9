//! Gradient composition for project cards.
//!
//! # Responsibility
//! - Turn a set of topic colors into an ordered multi-stop gradient.
//!
//! # Invariants
//! - Stops are ordered by ascending hue; equal hues keep input order.
//! - Composition never fails; callers filter malformed colors upstream.

use crate::color::{darken, hue_of};

/// Lightness reduction applied to the second stop of a one-color gradient.
const SINGLE_COLOR_DARKEN_PERCENT: f32 = 25.0;

/// Brand gradient used when a project has no topic colors at all.
pub const BRAND_GRADIENT_START: &str = "#1e3a5f";
pub const BRAND_GRADIENT_END: &str = "#2d6a4f";

/// Default gradient direction for project cards.
pub const DEFAULT_DIRECTION: &str = "135deg";

/// Composes a CSS linear gradient from the given colors.
///
/// - no colors: fixed brand gradient;
/// - one color: two stops from the color to a darkened variant;
/// - many colors: stable-sorted ascending by hue, stops evenly spaced.
///
/// Color strings are not validated here; an unparsable entry sorts as
/// hue 0 and is emitted verbatim.
pub fn compose_gradient(colors: &[String], direction: &str) -> String {
    match colors {
        [] => format!(
            "linear-gradient({direction}, {BRAND_GRADIENT_START} 0%, {BRAND_GRADIENT_END} 100%)"
        ),
        [only] => {
            let end = darken(only, SINGLE_COLOR_DARKEN_PERCENT);
            format!("linear-gradient({direction}, {only} 0%, {end} 100%)")
        }
        many => {
            let mut sorted: Vec<&String> = many.iter().collect();
            sorted.sort_by(|a, b| {
                let ha = hue_of(a).unwrap_or(0.0);
                let hb = hue_of(b).unwrap_or(0.0);
                ha.partial_cmp(&hb).unwrap_or(std::cmp::Ordering::Equal)
            });

            let last = (sorted.len() - 1) as f32;
            let stops: Vec<String> = sorted
                .iter()
                .enumerate()
                .map(|(i, color)| {
                    let percent = (i as f32 / last * 100.0).round() as u32;
                    format!("{color} {percent}%")
                })
                .collect();
            format!("linear-gradient({direction}, {})", stops.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{compose_gradient, DEFAULT_DIRECTION};
    use crate::color::color_for_hue;

    #[test]
    fn empty_input_yields_brand_gradient() {
        let gradient = compose_gradient(&[], DEFAULT_DIRECTION);
        assert_eq!(
            gradient,
            "linear-gradient(135deg, #1e3a5f 0%, #2d6a4f 100%)"
        );
    }

    #[test]
    fn single_color_darkens_toward_second_stop() {
        let color = color_for_hue(200.0);
        let gradient = compose_gradient(std::slice::from_ref(&color), DEFAULT_DIRECTION);
        assert!(gradient.starts_with(&format!("linear-gradient(135deg, {color} 0%, ")));
        assert!(gradient.ends_with("100%)"));
        // The darkened stop must differ from the base color.
        assert_eq!(gradient.matches(&color).count(), 1);
    }

    #[test]
    fn stops_sort_by_hue_regardless_of_input_order() {
        let low = color_for_hue(20.0);
        let high = color_for_hue(300.0);
        let forward = compose_gradient(&[low.clone(), high.clone()], DEFAULT_DIRECTION);
        let reverse = compose_gradient(&[high.clone(), low.clone()], DEFAULT_DIRECTION);
        assert_eq!(forward, reverse);
        assert_eq!(
            forward,
            format!("linear-gradient(135deg, {low} 0%, {high} 100%)")
        );
    }

    #[test]
    fn three_colors_space_stops_evenly() {
        let a = color_for_hue(10.0);
        let b = color_for_hue(120.0);
        let c = color_for_hue(250.0);
        let gradient = compose_gradient(&[c.clone(), a.clone(), b.clone()], DEFAULT_DIRECTION);
        assert_eq!(
            gradient,
            format!("linear-gradient(135deg, {a} 0%, {b} 50%, {c} 100%)")
        );
    }
}
