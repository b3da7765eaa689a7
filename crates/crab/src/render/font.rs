//! # Font — Glyph Atlas for the Score Label
//!
//! Uses [fontdue](https://docs.rs/fontdue) to rasterize printable ASCII
//! (32–126) once at startup and pack the glyphs row by row into a 512×512
//! RGBA atlas. Each glyph is stored as white with coverage in alpha
//! (`[255, 255, 255, coverage]`), so the sprite shader's `texture × tint`
//! produces text in the tint color with no separate text pipeline.
//!
//! Layout is done on the CPU in canvas pixels, y-down. A label's position
//! is its top-left corner; the baseline sits `ascent` pixels below it.

use std::path::Path;

use crate::error::CrabError;
use crate::math::Vec2;

const ATLAS_SIZE: u32 = 512;
const GLYPH_PADDING: u32 = 1;
const FIRST_CHAR: u32 = 32;
const LAST_CHAR: u32 = 126;

/// Placement and atlas region of one glyph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphInfo {
    /// UV rectangle in the atlas (normalized 0..1).
    pub uv_min: Vec2,
    pub uv_max: Vec2,
    /// Horizontal advance to the next glyph, in pixels.
    pub advance: f32,
    /// Offset from the pen position to the glyph's left edge.
    pub offset_x: f32,
    /// Distance from the baseline up to the glyph's bottom edge.
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

/// Glyph metrics for one font at one size.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    /// Indexed by `char as u32 - 32`.
    pub glyphs: Vec<Option<GlyphInfo>>,
    /// Distance from the top of a line to its baseline.
    pub ascent: f32,
    pub line_height: f32,
}

impl GlyphTable {
    /// Glyph for `ch`, or `None` outside printable ASCII.
    pub fn glyph(&self, ch: char) -> Option<&GlyphInfo> {
        let code = ch as u32;
        if !(FIRST_CHAR..=LAST_CHAR).contains(&code) {
            return None;
        }
        self.glyphs.get((code - FIRST_CHAR) as usize)?.as_ref()
    }
}

/// One glyph quad ready for batching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedGlyph {
    pub min: Vec2,
    pub max: Vec2,
    pub uv_min: Vec2,
    pub uv_max: Vec2,
}

/// Lay out `text` with its top-left corner at `origin`.
///
/// Unknown characters are skipped; `\n` starts a new line.
pub fn layout_text(table: &GlyphTable, text: &str, origin: Vec2) -> Vec<PlacedGlyph> {
    let mut placed = Vec::with_capacity(text.len());
    let mut pen_x = origin.x;
    let mut baseline = origin.y + table.ascent;

    for ch in text.chars() {
        if ch == '\n' {
            pen_x = origin.x;
            baseline += table.line_height;
            continue;
        }
        let Some(glyph) = table.glyph(ch) else {
            continue;
        };
        if glyph.width > 0.0 && glyph.height > 0.0 {
            let left = pen_x + glyph.offset_x;
            let bottom = baseline - glyph.offset_y;
            placed.push(PlacedGlyph {
                min: Vec2::new(left, bottom - glyph.height),
                max: Vec2::new(left + glyph.width, bottom),
                uv_min: glyph.uv_min,
                uv_max: glyph.uv_max,
            });
        }
        pen_x += glyph.advance;
    }
    placed
}

/// A rasterized font: CPU-side atlas pixels plus the glyph table.
pub struct GlyphAtlas {
    pub table: GlyphTable,
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl GlyphAtlas {
    /// Rasterize printable ASCII from TTF/OTF bytes at `size` pixels.
    ///
    /// `source` is only used to name the file in errors.
    pub fn build(font_bytes: &[u8], size: f32, source: &Path) -> Result<Self, CrabError> {
        let font = fontdue::Font::from_bytes(
            font_bytes,
            fontdue::FontSettings {
                scale: size,
                ..Default::default()
            },
        )
        .map_err(|e| CrabError::asset(source, e))?;

        let (ascent, line_height) = match font.horizontal_line_metrics(size) {
            Some(m) => (m.ascent, m.new_line_size),
            None => (size, size * 1.2),
        };

        let atlas_w = ATLAS_SIZE;
        let atlas_h = ATLAS_SIZE;
        let mut rgba = vec![0u8; (atlas_w * atlas_h * 4) as usize];
        let mut cursor_x = GLYPH_PADDING;
        let mut cursor_y = GLYPH_PADDING;
        let mut row_height = 0;
        let mut glyphs = Vec::with_capacity((LAST_CHAR - FIRST_CHAR + 1) as usize);

        for code in FIRST_CHAR..=LAST_CHAR {
            let ch = char::from_u32(code).unwrap_or(' ');
            let (metrics, bitmap) = font.rasterize(ch, size);
            let gw = metrics.width as u32;
            let gh = metrics.height as u32;

            if gw == 0 || gh == 0 {
                glyphs.push(Some(GlyphInfo {
                    uv_min: Vec2::ZERO,
                    uv_max: Vec2::ZERO,
                    advance: metrics.advance_width,
                    offset_x: 0.0,
                    offset_y: 0.0,
                    width: 0.0,
                    height: 0.0,
                }));
                continue;
            }

            if cursor_x + gw + GLYPH_PADDING > atlas_w {
                cursor_x = GLYPH_PADDING;
                cursor_y += row_height + GLYPH_PADDING;
                row_height = 0;
            }
            if cursor_y + gh + GLYPH_PADDING > atlas_h {
                log::warn!("Glyph atlas full at '{ch}', font size {size} is too large");
                glyphs.push(None);
                continue;
            }

            for gy in 0..gh {
                for gx in 0..gw {
                    let alpha = bitmap[(gy * gw + gx) as usize];
                    let dst = (((cursor_y + gy) * atlas_w + cursor_x + gx) * 4) as usize;
                    rgba[dst..dst + 4].copy_from_slice(&[255, 255, 255, alpha]);
                }
            }

            glyphs.push(Some(GlyphInfo {
                uv_min: Vec2::new(
                    cursor_x as f32 / atlas_w as f32,
                    cursor_y as f32 / atlas_h as f32,
                ),
                uv_max: Vec2::new(
                    (cursor_x + gw) as f32 / atlas_w as f32,
                    (cursor_y + gh) as f32 / atlas_h as f32,
                ),
                advance: metrics.advance_width,
                offset_x: metrics.xmin as f32,
                offset_y: metrics.ymin as f32,
                width: gw as f32,
                height: gh as f32,
            }));

            cursor_x += gw + GLYPH_PADDING;
            row_height = row_height.max(gh);
        }

        Ok(Self {
            table: GlyphTable {
                glyphs,
                ascent,
                line_height,
            },
            width: atlas_w,
            height: atlas_h,
            rgba,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A fixed-pitch table where every printable glyph is a 10×20 box with
    /// its bottom on the baseline and 12px advance. Space has no box.
    pub(crate) fn monospace_table() -> GlyphTable {
        let glyphs = (FIRST_CHAR..=LAST_CHAR)
            .map(|code| {
                let blank = code == ' ' as u32;
                Some(GlyphInfo {
                    uv_min: Vec2::ZERO,
                    uv_max: Vec2::splat(0.1),
                    advance: 12.0,
                    offset_x: 1.0,
                    offset_y: 0.0,
                    width: if blank { 0.0 } else { 10.0 },
                    height: if blank { 0.0 } else { 20.0 },
                })
            })
            .collect();
        GlyphTable {
            glyphs,
            ascent: 24.0,
            line_height: 30.0,
        }
    }

    #[test]
    fn glyph_lookup_is_limited_to_printable_ascii() {
        let table = monospace_table();
        assert!(table.glyph('A').is_some());
        assert!(table.glyph('~').is_some());
        assert!(table.glyph('\t').is_none());
        assert!(table.glyph('é').is_none());
    }

    #[test]
    fn layout_places_glyphs_on_the_baseline() {
        let table = monospace_table();
        let placed = layout_text(&table, "Hi", Vec2::new(10.0, 740.0));
        assert_eq!(placed.len(), 2);
        // Baseline at 740 + 24, glyph 20 tall sitting on it.
        assert_eq!(placed[0].min, Vec2::new(11.0, 744.0));
        assert_eq!(placed[0].max, Vec2::new(21.0, 764.0));
        assert_eq!(placed[1].min.x, 23.0);
    }

    #[test]
    fn spaces_advance_without_a_quad() {
        let table = monospace_table();
        let placed = layout_text(&table, "a b", Vec2::ZERO);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[1].min.x - placed[0].min.x, 24.0);
    }

    #[test]
    fn newline_moves_down_one_line() {
        let table = monospace_table();
        let placed = layout_text(&table, "a\nb", Vec2::ZERO);
        assert_eq!(placed[1].min.x, placed[0].min.x);
        assert_eq!(placed[1].min.y - placed[0].min.y, 30.0);
    }

    #[test]
    fn invalid_font_bytes_are_an_asset_error() {
        let source = Path::new("/games/crab/assets/fonts/score.ttf");
        let err = GlyphAtlas::build(b"definitely not a font", 32.0, source)
            .err()
            .unwrap();
        match err {
            CrabError::Asset { path, .. } => assert_eq!(path, source),
            other => panic!("unexpected error: {other}"),
        }
    }
}
