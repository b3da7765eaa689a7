//! # Render — Drawing the Beach
//!
//! A small wgpu sprite renderer specialized for one scene. Every frame is
//! built from scratch out of the current [`GameState`](crate::state::GameState):
//!
//! ```text
//!   GameState ──► DrawList ──► quads + batches ──► render pass
//!   (scene.rs)    (batch.rs)                       (draw.rs)
//! ```
//!
//! ## Design Decisions
//!
//! **Canvas pixels everywhere.** The simulation, the draw list, and the
//! vertex buffer all use the same y-down canvas coordinates. The only
//! transform is the orthographic canvas projection in the shader, and the
//! viewport letterboxes the canvas into whatever size the window has.
//!
//! **Painter's order from the list.** There is no depth buffer and no
//! sorting. The draw list is already back to front, and batching only merges
//! neighbours, so what is listed later is drawn on top.
//!
//! **One pipeline.** Text is drawn with the sprite pipeline: glyphs are white
//! with coverage in alpha, and the vertex tint turns them black.

mod batch;
mod draw;
pub mod font;
mod gpu;
mod pipeline;
pub mod scene;
mod texture;
mod vertex;
pub mod viewport;

pub use draw::Renderer;
pub use scene::{DrawItem, DrawList, SceneTextures, SizedTexture, SpriteQuad, score_label};
pub use texture::TextureHandle;

/// An RGBA color with floating-point components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Create a color from RGB (alpha = 1).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub(crate) fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
