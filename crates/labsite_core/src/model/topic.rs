//! Topic color entry.

use serde::{Deserialize, Serialize};

/// A registered topic with its display color and cached hue.
///
/// The hue is stored alongside the color so repeated registry reads do
/// not re-extract it from the hex string (and cannot drift if the
/// derivation constants ever change between releases).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicColor {
    pub name: String,
    /// `#rrggbb` display color.
    pub color: String,
    /// Position on the color wheel, 0–360.
    pub hue: f32,
}
