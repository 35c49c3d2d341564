//! NPC highlight overlay
//!
//! Draws each group's membership over the game scene. Groups render in
//! ascending order, so group 5's outlines and fills paint on top of
//! earlier groups when memberships overlap.

use tiny_skia::PixmapMut;

use hilite_core::{HighlightSnapshot, Hull, WorldView};
use hilite_types::{HighlightConfig, RenderStyle};

use crate::hull::{fill_hull, stroke_hull};

/// Renders highlight groups onto the host's scene surface.
#[derive(Debug, Default)]
pub struct NpcHighlightOverlay {
    config: HighlightConfig,
    snapshot: HighlightSnapshot,
}

impl NpcHighlightOverlay {
    pub fn new(config: HighlightConfig) -> Self {
        Self {
            config,
            snapshot: HighlightSnapshot::default(),
        }
    }

    /// Update membership data.
    ///
    /// Returns `true` if the data changed meaningfully and a re-render is
    /// needed.
    pub fn update_data(&mut self, snapshot: HighlightSnapshot) -> bool {
        if snapshot == self.snapshot {
            return false;
        }
        tracing::trace!(members = snapshot.member_count(), "highlight data updated");
        self.snapshot = snapshot;
        true
    }

    /// Update the render style and group colors.
    pub fn update_config(&mut self, config: HighlightConfig) {
        self.config = config;
    }

    /// Render callback: draw every group member's silhouette.
    ///
    /// NPCs that are off screen or have no geometry this frame are skipped
    /// silently. Returns no layout-size hint.
    pub fn render(&mut self, canvas: &mut PixmapMut, world: &dyn WorldView) -> Option<(u32, u32)> {
        let style = &self.config.render_style;
        if !style.highlight_hull_outline && !style.highlight_hull_fill {
            return None;
        }

        for (group, members) in self.config.groups.iter().zip(&self.snapshot.groups) {
            for &id in members {
                let Some(hull) = world.npc_hull(id) else {
                    continue;
                };
                render_npc(canvas, &hull, style, group.color, group.fill_color());
            }
        }
        None
    }
}

/// Draw one NPC's silhouette with its group's colors.
fn render_npc(
    canvas: &mut PixmapMut,
    hull: &Hull,
    style: &RenderStyle,
    color: [u8; 4],
    fill_color: [u8; 4],
) {
    if style.highlight_hull_outline {
        stroke_hull(canvas, hull, color, f32::from(style.outline_stroke_width));
    }
    if style.highlight_hull_fill {
        fill_hull(canvas, hull, fill_color);
    }
}
