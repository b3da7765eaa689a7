//! # Batch — Draw List to Vertices, Indices, and Draw Calls
//!
//! [`build_geometry`] walks a [`DrawList`] front to back in list order and
//! emits one quad (4 vertices, 6 indices) per sprite and per visible glyph.
//! Consecutive quads that share a texture are merged into one [`DrawBatch`],
//! so the whole score label is a single draw call.
//!
//! Batching never reorders. Two quads with the same texture separated by a
//! different texture stay in separate batches, because merging them would
//! change which one is painted on top.
//!
//! ```text
//!   DrawList                    batches
//!   ─────────                   ───────────────────────────
//!   background   ──► quad 0 ──► [beach]        indices 0..6
//!   crab         ──► quad 1 ──► [crab frame]   indices 6..12
//!   fish         ──► quad 2 ──► [fish]         indices 12..18
//!   "Score: 3"   ──► quads 3.. ► [glyph atlas] indices 18..
//! ```

use crate::math::Vec2;

use super::font::{GlyphTable, layout_text};
use super::scene::{DrawItem, DrawList};
use super::texture::TextureHandle;
use super::vertex::SpriteVertex;
use super::Color;

/// One draw call: a contiguous index range sharing a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DrawBatch {
    pub texture: TextureHandle,
    /// Range into the shared index buffer.
    pub index_start: u32,
    pub index_count: u32,
}

/// CPU-side geometry for one frame.
#[derive(Debug, Default)]
pub(crate) struct FrameGeometry {
    pub vertices: Vec<SpriteVertex>,
    pub indices: Vec<u32>,
    pub batches: Vec<DrawBatch>,
}

impl FrameGeometry {
    fn push_quad(&mut self, texture: TextureHandle, min: Vec2, max: Vec2, uv_min: Vec2, uv_max: Vec2, color: Color) {
        let base = self.vertices.len() as u32;
        let color = color.to_array();
        // top-left, top-right, bottom-right, bottom-left (y-down)
        let corners = [
            ([min.x, min.y], [uv_min.x, uv_min.y]),
            ([max.x, min.y], [uv_max.x, uv_min.y]),
            ([max.x, max.y], [uv_max.x, uv_max.y]),
            ([min.x, max.y], [uv_min.x, uv_max.y]),
        ];
        for (position, uv) in corners {
            self.vertices.push(SpriteVertex { position, uv, color });
        }

        let index_start = self.indices.len() as u32;
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);

        if let Some(last) = self.batches.last_mut() {
            if last.texture == texture {
                last.index_count += 6;
                return;
            }
        }
        self.batches.push(DrawBatch {
            texture,
            index_start,
            index_count: 6,
        });
    }
}

/// Emit geometry for `list`, in list order.
pub(crate) fn build_geometry(list: &DrawList, glyphs: &GlyphTable) -> FrameGeometry {
    let mut geometry = FrameGeometry::default();
    for item in &list.items {
        match item {
            DrawItem::Sprite(quad) => {
                geometry.push_quad(quad.texture, quad.min, quad.max, Vec2::ZERO, Vec2::ONE, quad.color);
            }
            DrawItem::Text {
                content,
                origin,
                color,
                atlas,
            } => {
                for glyph in layout_text(glyphs, content, *origin) {
                    geometry.push_quad(*atlas, glyph.min, glyph.max, glyph.uv_min, glyph.uv_max, *color);
                }
            }
        }
    }
    geometry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::render::font::tests::monospace_table;
    use crate::render::scene::SpriteQuad;
    use crate::render::scene::tests::{state, textures};

    fn quad(texture: usize) -> DrawItem {
        DrawItem::Sprite(SpriteQuad {
            texture: TextureHandle(texture),
            min: Vec2::ZERO,
            max: Vec2::splat(10.0),
            color: Color::WHITE,
        })
    }

    #[test]
    fn frame_batches_follow_draw_order() {
        let list = DrawList::from_state(&state(), &textures(), &GameConfig::default());
        let geometry = build_geometry(&list, &monospace_table());

        let order: Vec<TextureHandle> = geometry.batches.iter().map(|b| b.texture).collect();
        assert_eq!(
            order,
            [TextureHandle(0), TextureHandle(2), TextureHandle(1), TextureHandle(6)]
        );
        // "Score: 0" has seven visible glyphs, all in the last batch.
        assert_eq!(geometry.batches[3].index_count, 7 * 6);
        assert_eq!(geometry.vertices.len(), (3 + 7) * 4);
        assert_eq!(geometry.indices.len(), (3 + 7) * 6);
    }

    #[test]
    fn batches_cover_the_index_buffer_contiguously() {
        let list = DrawList::from_state(&state(), &textures(), &GameConfig::default());
        let geometry = build_geometry(&list, &monospace_table());
        let mut next = 0;
        for batch in &geometry.batches {
            assert_eq!(batch.index_start, next);
            next += batch.index_count;
        }
        assert_eq!(next as usize, geometry.indices.len());
    }

    #[test]
    fn consecutive_same_texture_merges() {
        let list = DrawList {
            items: vec![quad(1), quad(1), quad(2)],
        };
        let geometry = build_geometry(&list, &monospace_table());
        assert_eq!(geometry.batches.len(), 2);
        assert_eq!(geometry.batches[0].index_count, 12);
    }

    #[test]
    fn same_texture_is_not_merged_across_another() {
        let list = DrawList {
            items: vec![quad(1), quad(2), quad(1)],
        };
        let geometry = build_geometry(&list, &monospace_table());
        let order: Vec<usize> = geometry.batches.iter().map(|b| b.texture.0).collect();
        assert_eq!(order, [1, 2, 1]);
    }

    #[test]
    fn sprite_quad_has_full_uvs_and_tint() {
        let list = DrawList {
            items: vec![quad(0)],
        };
        let geometry = build_geometry(&list, &monospace_table());
        let v = &geometry.vertices;
        assert_eq!(v[0].position, [0.0, 0.0]);
        assert_eq!(v[0].uv, [0.0, 0.0]);
        assert_eq!(v[2].position, [10.0, 10.0]);
        assert_eq!(v[2].uv, [1.0, 1.0]);
        assert_eq!(v[1].color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(geometry.indices, [0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn empty_list_builds_nothing() {
        let geometry = build_geometry(&DrawList::default(), &monospace_table());
        assert!(geometry.vertices.is_empty());
        assert!(geometry.batches.is_empty());
    }
}
