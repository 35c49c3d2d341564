//! Highlight configuration
//!
//! The persisted layout is a `[renderStyle]` table plus a `[[group]]` array
//! of five entries. Field names stay camelCase to match the host client's
//! config keys (`highlightHullFill`, `outlineStrokeWidth`, `fillAlpha`, ...).

use serde::{Deserialize, Serialize};

/// Number of highlight groups. Groups are statically numbered; there is no
/// dynamic group creation.
pub const GROUP_COUNT: usize = 5;

/// How highlights are rendered, shared by all groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderStyle {
    /// Draw a translucent filled hull over each highlighted NPC
    #[serde(default)]
    pub highlight_hull_fill: bool,

    /// Draw the hull outline on each highlighted NPC
    #[serde(default = "default_true")]
    pub highlight_hull_outline: bool,

    /// Width (px) of the hull outline, 1-5
    #[serde(default = "default_stroke_width")]
    pub outline_stroke_width: u8,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            highlight_hull_fill: false,
            highlight_hull_outline: true,
            outline_stroke_width: default_stroke_width(),
        }
    }
}

/// One highlight group: a color and the NPC name patterns it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupConfig {
    /// Outline color as RGBA
    #[serde(default = "default_color")]
    pub color: [u8; 4],

    /// Alpha (transparency) for the hull fill, 1-255. The fill reuses the
    /// group color's RGB so a visible outline can sit over a faint fill.
    #[serde(default = "default_fill_alpha")]
    pub fill_alpha: u8,

    /// Comma-separated NPC name patterns (`*` and `?` wildcards)
    #[serde(default)]
    pub npcs: String,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            fill_alpha: default_fill_alpha(),
            npcs: String::new(),
        }
    }
}

impl GroupConfig {
    /// Fill color: the group's RGB with the separate fill alpha channel
    pub fn fill_color(&self) -> [u8; 4] {
        let [r, g, b, _] = self.color;
        [r, g, b, self.fill_alpha]
    }
}

/// Full highlight configuration: the render style plus five groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    #[serde(default)]
    pub render_style: RenderStyle,

    #[serde(default = "default_groups", rename = "group")]
    pub groups: [GroupConfig; GROUP_COUNT],
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            render_style: RenderStyle::default(),
            groups: default_groups(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn default_true() -> bool {
    true
}

fn default_stroke_width() -> u8 {
    2
}

fn default_fill_alpha() -> u8 {
    75
}

fn default_color() -> [u8; 4] {
    [255, 255, 255, 255] // White
}

fn default_groups() -> [GroupConfig; GROUP_COUNT] {
    [
        [255, 0, 0, 255],   // Red
        [0, 255, 0, 255],   // Green
        [0, 255, 255, 255], // Cyan
        [255, 255, 0, 255], // Yellow
        [255, 0, 255, 255], // Magenta
    ]
    .map(|color| GroupConfig {
        color,
        ..GroupConfig::default()
    })
}
