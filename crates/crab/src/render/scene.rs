//! # Scene — What to Draw, in Which Order
//!
//! [`DrawList::from_state`] projects a [`GameState`] into an ordered list of
//! draw items. The order is the z-order, back to front:
//!
//! ```text
//!   1. beach background, scaled to fill the canvas
//!   2. crab, current walk frame, at the crab position
//!   3. fish, at the fish position
//!   4. "Score: N" label
//! ```
//!
//! Later items cover earlier ones where they overlap, so a fish standing on
//! the crab is visible and the score stays readable over everything. Nothing
//! downstream reorders the list.

use crate::config::GameConfig;
use crate::math::{IVec2, Vec2};
use crate::state::GameState;

use super::Color;
use super::texture::TextureHandle;

/// A GPU texture together with its pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizedTexture {
    pub handle: TextureHandle,
    pub width: u32,
    pub height: u32,
}

impl SizedTexture {
    fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// The uploaded textures the scene is built from.
#[derive(Debug, Clone)]
pub struct SceneTextures {
    pub background: SizedTexture,
    pub fish: SizedTexture,
    pub crab_frames: Vec<SizedTexture>,
    pub glyph_atlas: TextureHandle,
}

/// A textured rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteQuad {
    pub texture: TextureHandle,
    pub min: Vec2,
    pub max: Vec2,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    Sprite(SpriteQuad),
    Text {
        content: String,
        /// Top-left corner of the label.
        origin: Vec2,
        color: Color,
        atlas: TextureHandle,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn from_state(state: &GameState, textures: &SceneTextures, config: &GameConfig) -> Self {
        let scale = config.background_scale as f32;
        let background = SpriteQuad {
            texture: textures.background.handle,
            min: Vec2::ZERO,
            max: textures.background.size() * scale,
            color: Color::WHITE,
        };

        // An out-of-range frame is a broken invariant; fall back to the last frame.
        let frame_index = state
            .crab_frame()
            .min(textures.crab_frames.len().saturating_sub(1));
        let crab = textures.crab_frames.get(frame_index).map(|frame| {
            DrawItem::Sprite(placed(frame, state.crab()))
        });

        let fish = placed(&textures.fish, state.fish());

        let mut items = Vec::with_capacity(4);
        items.push(DrawItem::Sprite(background));
        items.extend(crab);
        items.push(DrawItem::Sprite(fish));
        items.push(DrawItem::Text {
            content: score_label(state.score()),
            origin: config.score_position.as_vec2(),
            color: Color::BLACK,
            atlas: textures.glyph_atlas,
        });
        Self { items }
    }
}

fn placed(texture: &SizedTexture, top_left: IVec2) -> SpriteQuad {
    let min = top_left.as_vec2();
    SpriteQuad {
        texture: texture.handle,
        min,
        max: min + texture.size(),
        color: Color::WHITE,
    }
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}
