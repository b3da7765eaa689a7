//! # Vertex — Per-Corner Data Sent to the GPU
//!
//! Every sprite and every glyph of the score label is a quad of four
//! vertices. Positions are already in canvas pixels (y-down) when they are
//! written; the shader only multiplies by the canvas projection.
//!
//! ```text
//! SpriteVertex (32 bytes per vertex)
//! ┌──────────────┬──────────────┬────────────────────────┐
//! │ position     │ uv           │ color                  │
//! │ [f32; 2]     │ [f32; 2]     │ [f32; 4]               │
//! │ offset 0     │ offset 8     │ offset 16              │
//! │ location(0)  │ location(1)  │ location(2)            │
//! └──────────────┴──────────────┴────────────────────────┘
//! ```
//!
//! There is no depth component: draw order alone decides what covers what.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl SpriteVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SpriteVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            // uv
            wgpu::VertexAttribute {
                offset: 8,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x2,
            },
            // color
            wgpu::VertexAttribute {
                offset: 16,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };
}

/// Canvas projection matrix uploaded as a uniform buffer.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub(crate) struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_matches_struct() {
        assert_eq!(std::mem::size_of::<SpriteVertex>(), 32);
        assert_eq!(SpriteVertex::LAYOUT.array_stride, 32);
        assert_eq!(SpriteVertex::LAYOUT.attributes[2].offset, 16);
    }
}
